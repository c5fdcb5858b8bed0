use crate::tree;
use std::borrow::Borrow;

/// An ordered set implemented using a left-leaning red-black tree.
///
/// A left-leaning red-black tree is a self-balancing binary search tree that
/// constrains every red link to be a left child link, making it structurally
/// equivalent to a 2-3 tree. All operations run in logarithmic time, and the
/// minimum and maximum keys can be removed as well as inspected, so the set
/// can serve as a double-ended priority queue.
///
/// # Examples
///
/// ```
/// use llrb::LlrbSet;
///
/// let mut set = LlrbSet::new();
/// set.insert(0);
/// set.insert(3);
///
/// assert_eq!(set.len(), 2);
///
/// assert_eq!(set.min(), Some(&0));
/// assert_eq!(set.max(), Some(&3));
///
/// assert_eq!(set.pop_min(), Some(0));
/// assert_eq!(set.remove(&1), None);
/// ```
pub struct LlrbSet<T> {
    root: tree::Tree<T>,
    len: usize,
}

impl<T> LlrbSet<T> {
    /// Constructs a new, empty `LlrbSet<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb::LlrbSet;
    ///
    /// let set: LlrbSet<u32> = LlrbSet::new();
    /// ```
    pub fn new() -> Self {
        LlrbSet { root: None, len: 0 }
    }

    /// Inserts a key into the set, returning `true` if it was not already
    /// present. Inserting a key that is already in the set leaves the set,
    /// including its length, unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb::LlrbSet;
    ///
    /// let mut set = LlrbSet::new();
    /// assert!(set.insert(1));
    /// assert!(!set.insert(1));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, key: T) -> bool
    where
        T: Ord,
    {
        let inserted = tree::insert(&mut self.root, key);
        tree::blacken_root(&mut self.root);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Removes a key from the set. If the key exists in the set, it will
    /// return the owned key. Otherwise the set is unchanged and it will
    /// return `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb::LlrbSet;
    ///
    /// let mut set = LlrbSet::new();
    /// set.insert(1);
    /// assert_eq!(set.remove(&1), Some(1));
    /// assert_eq!(set.remove(&1), None);
    /// ```
    pub fn remove<V>(&mut self, key: &V) -> Option<T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        tree::fix_root(&mut self.root);
        let ret = tree::remove(&mut self.root, key);
        tree::blacken_root(&mut self.root);
        if ret.is_some() {
            self.len -= 1;
        }
        ret
    }

    /// Checks if a key exists in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb::LlrbSet;
    ///
    /// let mut set = LlrbSet::new();
    /// set.insert(1);
    /// assert!(!set.contains(&0));
    /// assert!(set.contains(&1));
    /// ```
    pub fn contains<V>(&self, key: &V) -> bool
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        tree::get(&self.root, key).is_some()
    }

    /// Returns a reference to the stored key equal to a particular key.
    /// Returns `None` if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb::LlrbSet;
    ///
    /// let mut set = LlrbSet::new();
    /// set.insert(1);
    /// assert_eq!(set.get(&1), Some(&1));
    /// assert_eq!(set.get(&2), None);
    /// ```
    pub fn get<V>(&self, key: &V) -> Option<&T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        tree::get(&self.root, key)
    }

    /// Returns the number of keys in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb::LlrbSet;
    ///
    /// let mut set = LlrbSet::new();
    /// set.insert(1);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb::LlrbSet;
    ///
    /// let set: LlrbSet<u32> = LlrbSet::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Clears the set, removing all keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb::LlrbSet;
    ///
    /// let mut set = LlrbSet::new();
    /// set.insert(1);
    /// set.insert(2);
    /// set.clear();
    /// assert_eq!(set.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Returns the minimum key of the set. Returns `None` if the set is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb::LlrbSet;
    ///
    /// let mut set = LlrbSet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.min(), Some(&1));
    /// ```
    pub fn min(&self) -> Option<&T>
    where
        T: Ord,
    {
        tree::min(&self.root)
    }

    /// Returns the maximum key of the set. Returns `None` if the set is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb::LlrbSet;
    ///
    /// let mut set = LlrbSet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.max(), Some(&3));
    /// ```
    pub fn max(&self) -> Option<&T>
    where
        T: Ord,
    {
        tree::max(&self.root)
    }

    /// Removes and returns the minimum key of the set. Returns `None` if the
    /// set is empty; popping from an empty set is not an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb::LlrbSet;
    ///
    /// let mut set = LlrbSet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.pop_min(), Some(1));
    /// assert_eq!(set.pop_min(), Some(3));
    /// assert_eq!(set.pop_min(), None);
    /// ```
    pub fn pop_min(&mut self) -> Option<T>
    where
        T: Ord,
    {
        tree::fix_root(&mut self.root);
        let ret = tree::pop_min(&mut self.root);
        tree::blacken_root(&mut self.root);
        if ret.is_some() {
            self.len -= 1;
        }
        ret
    }

    /// Removes and returns the maximum key of the set. Returns `None` if the
    /// set is empty; popping from an empty set is not an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb::LlrbSet;
    ///
    /// let mut set = LlrbSet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.pop_max(), Some(3));
    /// assert_eq!(set.pop_max(), Some(1));
    /// assert_eq!(set.pop_max(), None);
    /// ```
    pub fn pop_max(&mut self) -> Option<T>
    where
        T: Ord,
    {
        tree::fix_root(&mut self.root);
        let ret = tree::pop_max(&mut self.root);
        tree::blacken_root(&mut self.root);
        if ret.is_some() {
            self.len -= 1;
        }
        ret
    }
}

impl<T> Default for LlrbSet<T> {
    fn default() -> Self {
        Self::new()
    }
}
