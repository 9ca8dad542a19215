//! Height-balanced binary search tree.

pub mod tree;
pub mod types;
pub mod util;

pub use tree::AvlTree;
pub use types::AvlNode;
pub use util::{assert_avl_tree, insert, rotate_left, rotate_right, search};
