//! Self-balancing binary search tree where every red link leans left, making
//! the tree structurally equivalent to a 2-3 tree. The set it exposes
//! supports logarithmic-time insertion, removal, and membership tests, as
//! well as removal at both extremes so it can double as a double-ended
//! priority queue.

mod node;
mod set;
mod tree;

pub use crate::set::LlrbSet;
