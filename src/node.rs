use crate::tree;
use std::mem;

/// An enum representing the color of the link from a node to its parent. An
/// absent child counts as black for all color queries.
#[derive(Clone, Copy, PartialEq)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    pub fn flip(self) -> Color {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }
}

/// A struct representing an internal node of a left-leaning red-black tree.
/// A node exclusively owns its children; there are no parent links.
pub struct Node<T> {
    pub key: T,
    pub color: Color,
    pub left: tree::Tree<T>,
    pub right: tree::Tree<T>,
}

impl<T> Node<T> {
    pub fn new(key: T) -> Self {
        Node {
            key,
            color: Color::Red,
            left: None,
            right: None,
        }
    }

    // precondition: both children are structurally present
    pub fn flip_colors(&mut self) {
        self.color = self.color.flip();
        if let Some(ref mut child) = self.left {
            child.color = child.color.flip();
        }
        if let Some(ref mut child) = self.right {
            child.color = child.color.flip();
        }
    }

    // precondition: the right child is present and red
    pub fn rotate_left(&mut self) {
        let mut child = self
            .right
            .take()
            .expect("Expected right child node to be `Some`.");
        self.right = child.left.take();
        mem::swap(&mut *child, self);
        self.color = child.color;
        child.color = Color::Red;
        self.left = Some(child);
    }

    // precondition: the left child is present and red
    pub fn rotate_right(&mut self) {
        let mut child = self
            .left
            .take()
            .expect("Expected left child node to be `Some`.");
        self.left = child.right.take();
        mem::swap(&mut *child, self);
        self.color = child.color;
        child.color = Color::Red;
        self.right = Some(child);
    }

    /// Restores the left-leaning invariant at this node on the way back up
    /// from a recursive insertion or removal: right-leaning red links are
    /// rotated left, consecutive left-leaning red links are rotated right,
    /// and temporary 4-nodes are split with a color flip.
    pub fn balance(&mut self) {
        if tree::is_red(&self.right) {
            self.rotate_left();
        }

        let should_rotate = {
            if let Some(ref child) = self.left {
                child.color == Color::Red && tree::is_red(&child.left)
            } else {
                false
            }
        };
        if should_rotate {
            self.rotate_right();
        }

        if tree::is_red(&self.left) && tree::is_red(&self.right) {
            self.flip_colors();
        }
    }

    /// Pushes a red link down into the left subtree so that removal can
    /// recurse left without passing through a node of insufficient weight.
    pub fn shift_left(&mut self) {
        self.flip_colors();
        if let Some(mut child) = self.right.take() {
            if tree::is_red(&child.left) {
                child.rotate_right();
                self.right = Some(child);
                self.rotate_left();
                self.flip_colors();
            } else {
                self.right = Some(child);
            }
        }
    }

    /// Pushes a red link down into the right subtree, symmetric to
    /// `shift_left`.
    pub fn shift_right(&mut self) {
        self.flip_colors();
        if let Some(child) = self.left.take() {
            if tree::is_red(&child.left) {
                self.left = Some(child);
                self.rotate_right();
                self.flip_colors();
            } else {
                self.left = Some(child);
            }
        }
    }
}
