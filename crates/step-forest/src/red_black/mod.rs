//! Red-black binary search tree with parent back-links.

pub mod tree;
pub mod types;
pub mod util;

pub use tree::RbTree;
pub use types::{Color, RbNode};
pub use util::{assert_red_black_tree, delete, insert, rotate_left, rotate_right, search};
