//! Singly-linked circular list.

pub mod list;
pub mod types;
pub mod util;

pub use list::RingList;
pub use types::RingNode;
pub use util::{assert_ring, delete, insert_at_beginning, insert_at_end, traverse};
