use crate::node::{Color, Node};
use std::borrow::Borrow;
use std::cmp::Ordering;

pub type Tree<T> = Option<Box<Node<T>>>;

pub fn is_red<T>(tree: &Tree<T>) -> bool {
    match tree {
        None => false,
        Some(ref node) => node.color == Color::Red,
    }
}

// Reddens the root ahead of a removal when both of its children are black, so
// that a red link can be pushed down the search path.
pub fn fix_root<T>(tree: &mut Tree<T>) {
    if let Some(ref mut node) = tree {
        if !is_red(&node.left) && !is_red(&node.right) {
            node.color = Color::Red;
        }
    }
}

pub fn blacken_root<T>(tree: &mut Tree<T>) {
    if let Some(ref mut node) = tree {
        node.color = Color::Black;
    }
}

pub fn insert<T>(tree: &mut Tree<T>, key: T) -> bool
where
    T: Ord,
{
    let inserted = match tree {
        Some(ref mut node) => {
            match key.cmp(&node.key) {
                Ordering::Less => insert(&mut node.left, key),
                Ordering::Greater => insert(&mut node.right, key),
                // the key is already present and the subtree is untouched
                Ordering::Equal => return false,
            }
        },
        None => {
            *tree = Some(Box::new(Node::new(key)));
            return true;
        },
    };

    let node = tree.as_mut().expect("Expected non-empty tree.");

    if is_red(&node.right) && !is_red(&node.left) {
        node.rotate_left();
    }

    let should_rotate = {
        if let Some(ref child) = node.left {
            child.color == Color::Red && is_red(&child.left)
        } else {
            false
        }
    };
    if should_rotate {
        node.rotate_right();
    }

    if is_red(&node.left) && is_red(&node.right) {
        node.flip_colors();
    }

    inserted
}

// precondition: there exists a minimum node in the tree
fn remove_min<T>(tree: &mut Tree<T>) -> Box<Node<T>> {
    if let Some(ref mut node) = tree {
        if node.left.is_some() {
            let should_shift = {
                if let Some(ref child) = node.left {
                    child.color != Color::Red && !is_red(&child.left)
                } else {
                    false
                }
            };
            if should_shift {
                node.shift_left();
            }

            let ret = remove_min(&mut node.left);
            node.balance();
            return ret;
        }
    }

    let mut node = tree.take().expect("Expected a non-empty tree.");
    *tree = node.right.take();
    node
}

// precondition: there exists a maximum node in the tree
fn remove_max<T>(tree: &mut Tree<T>) -> Box<Node<T>> {
    if let Some(ref mut node) = tree {
        if is_red(&node.left) {
            node.rotate_right();
        }

        if node.right.is_some() {
            let should_shift = {
                if let Some(ref child) = node.right {
                    child.color != Color::Red && !is_red(&child.left)
                } else {
                    false
                }
            };
            if should_shift {
                node.shift_right();
            }

            let ret = remove_max(&mut node.right);
            node.balance();
            return ret;
        }
    }

    let mut node = tree.take().expect("Expected a non-empty tree.");
    *tree = node.left.take();
    node
}

// Replaces a removed node that has two subtrees by the minimum node of its
// right subtree, which inherits the removed node's color.
fn combine_subtrees<T>(left_tree: Tree<T>, mut right_tree: Tree<T>, color: Color) -> Tree<T> {
    let mut new_root = remove_min(&mut right_tree);
    new_root.left = left_tree;
    new_root.right = right_tree;
    new_root.color = color;
    Some(new_root)
}

pub fn remove<T, V>(tree: &mut Tree<T>, key: &V) -> Option<T>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    let ret = match tree.take() {
        Some(mut node) => {
            if key < node.key.borrow() {
                let should_shift = {
                    if let Some(ref child) = node.left {
                        child.color != Color::Red && !is_red(&child.left)
                    } else {
                        false
                    }
                };
                if should_shift {
                    node.shift_left();
                }

                let ret = remove(&mut node.left, key);
                *tree = Some(node);
                ret
            } else {
                if is_red(&node.left) {
                    node.rotate_right();
                }

                if key == node.key.borrow() && node.right.is_none() {
                    assert!(node.left.is_none());
                    return Some(node.key);
                }

                let should_shift = {
                    if let Some(ref child) = node.right {
                        child.color != Color::Red && !is_red(&child.left)
                    } else {
                        false
                    }
                };
                if should_shift {
                    node.shift_right();
                }

                if key == node.key.borrow() {
                    let unboxed_node = *node;
                    let Node {
                        key: removed_key,
                        left,
                        right,
                        color,
                    } = unboxed_node;
                    *tree = combine_subtrees(left, right, color);
                    Some(removed_key)
                } else {
                    let ret = remove(&mut node.right, key);
                    *tree = Some(node);
                    ret
                }
            }
        },
        None => return None,
    };

    let node = tree.as_mut().expect("Expected non-empty tree.");
    node.balance();

    ret
}

pub fn pop_min<T>(tree: &mut Tree<T>) -> Option<T> {
    if tree.is_some() {
        Some(remove_min(tree).key)
    } else {
        None
    }
}

pub fn pop_max<T>(tree: &mut Tree<T>) -> Option<T> {
    if tree.is_some() {
        Some(remove_max(tree).key)
    } else {
        None
    }
}

pub fn get<'a, T, V>(tree: &'a Tree<T>, key: &V) -> Option<&'a T>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    let mut curr = tree;
    while let Some(ref node) = curr {
        match key.cmp(node.key.borrow()) {
            Ordering::Less => curr = &node.left,
            Ordering::Greater => curr = &node.right,
            Ordering::Equal => return Some(&node.key),
        }
    }
    None
}

pub fn min<T>(tree: &Tree<T>) -> Option<&T>
where
    T: Ord,
{
    tree.as_ref().and_then(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        Some(&curr.key)
    })
}

pub fn max<T>(tree: &Tree<T>) -> Option<&T>
where
    T: Ord,
{
    tree.as_ref().and_then(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        Some(&curr.key)
    })
}
