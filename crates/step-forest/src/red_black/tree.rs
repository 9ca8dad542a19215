use std::fmt::Display;

use crate::print::print_tree;
use crate::trace::Snapshot;

use super::types::{Color, RbNode};
use super::util::assert_red_black_tree;

/// Arena-backed red-black tree. `Clone` is the deep copy; parent indices
/// clone along with the arena, so no back-reference rewiring is needed.
#[derive(Clone, Debug, Default)]
pub struct RbTree<T> {
    pub(crate) arena: Vec<RbNode<T>>,
    pub(crate) root: Option<u32>,
    pub(crate) len: usize,
}

impl<T> RbTree<T> {
    pub fn new() -> Self {
        Self {
            arena: Vec::new(),
            root: None,
            len: 0,
        }
    }

    pub fn root_index(&self) -> Option<u32> {
        self.root
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn arena(&self) -> &[RbNode<T>] {
        &self.arena
    }

    pub fn node(&self, idx: u32) -> &RbNode<T> {
        &self.arena[idx as usize]
    }

    pub(crate) fn node_mut(&mut self, idx: u32) -> &mut RbNode<T> {
        &mut self.arena[idx as usize]
    }

    pub(crate) fn alloc(&mut self, value: T) -> u32 {
        self.arena.push(RbNode::new(value));
        (self.arena.len() - 1) as u32
    }

    /// Absent nodes count as black (sentinel convention).
    pub fn is_black(&self, node: Option<u32>) -> bool {
        node.map(|i| self.arena[i as usize].color == Color::Black)
            .unwrap_or(true)
    }

    pub fn is_red(&self, node: Option<u32>) -> bool {
        !self.is_black(node)
    }

    /// Leftmost index of the subtree under `idx`.
    pub fn min_of(&self, idx: u32) -> u32 {
        let mut curr = idx;
        while let Some(l) = self.arena[curr as usize].l {
            curr = l;
        }
        curr
    }

    /// In-order node indices.
    pub fn in_order(&self) -> Vec<u32> {
        fn walk<T>(arena: &[RbNode<T>], node: Option<u32>, out: &mut Vec<u32>) {
            let Some(i) = node else {
                return;
            };
            walk(arena, arena[i as usize].l, out);
            out.push(i);
            walk(arena, arena[i as usize].r, out);
        }

        let mut out = Vec::with_capacity(self.len);
        walk(&self.arena, self.root, &mut out);
        out
    }
}

impl<T: Ord> RbTree<T> {
    /// Untraced BST lookup.
    pub fn find(&self, value: &T) -> Option<u32> {
        let mut curr = self.root;
        while let Some(i) = curr {
            let n = &self.arena[i as usize];
            curr = match value.cmp(&n.value) {
                std::cmp::Ordering::Equal => return Some(i),
                std::cmp::Ordering::Less => n.l,
                std::cmp::Ordering::Greater => n.r,
            };
        }
        None
    }

    pub fn assert_valid(&self) -> Result<(), String> {
        assert_red_black_tree(self)
    }
}

impl<T: Clone> RbTree<T> {
    /// Deep snapshot for step recording.
    pub fn snapshot(&self) -> Snapshot<T> {
        Snapshot::RedBlack {
            nodes: self.arena.clone(),
            root: self.root,
        }
    }
}

impl<T: Display> RbTree<T> {
    /// Debug printer.
    pub fn print(&self) -> String {
        print_tree(&self.arena, self.root, "")
    }
}
