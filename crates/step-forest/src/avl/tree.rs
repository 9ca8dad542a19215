use std::fmt::Display;

use crate::print::print_tree;
use crate::trace::Snapshot;

use super::types::AvlNode;
use super::util::assert_avl_tree;

/// Arena-backed AVL tree. `Clone` is the deep copy: arena indices (the node
/// ids) are preserved, so a clone's steps stay comparable with the original's.
#[derive(Clone, Debug, Default)]
pub struct AvlTree<T> {
    pub(crate) arena: Vec<AvlNode<T>>,
    pub(crate) root: Option<u32>,
    pub(crate) len: usize,
}

impl<T> AvlTree<T> {
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

    pub fn arena(&self) -> &[AvlNode<T>] {
        &self.arena
    }

    pub fn node(&self, idx: u32) -> &AvlNode<T> {
        &self.arena[idx as usize]
    }

    pub(crate) fn node_mut(&mut self, idx: u32) -> &mut AvlNode<T> {
        &mut self.arena[idx as usize]
    }

    /// Pushes a fresh leaf slot and returns its index. The caller links it.
    pub(crate) fn alloc(&mut self, value: T) -> u32 {
        self.arena.push(AvlNode::new(value));
        (self.arena.len() - 1) as u32
    }

    /// Stored height of a possibly-absent node.
    pub fn height_of(&self, node: Option<u32>) -> i32 {
        node.map(|i| self.arena[i as usize].height).unwrap_or(0)
    }

    /// `height(left) - height(right)`.
    pub fn balance_factor(&self, idx: u32) -> i32 {
        let n = &self.arena[idx as usize];
        self.height_of(n.l) - self.height_of(n.r)
    }

    /// Index of the smallest value, `None` on an empty tree.
    pub fn min_index(&self) -> Option<u32> {
        let mut curr = self.root?;
        while let Some(l) = self.arena[curr as usize].l {
            curr = l;
        }
        Some(curr)
    }

    /// Index of the largest value, `None` on an empty tree.
    pub fn max_index(&self) -> Option<u32> {
        let mut curr = self.root?;
        while let Some(r) = self.arena[curr as usize].r {
            curr = r;
        }
        Some(curr)
    }

    /// In-order node indices.
    pub fn in_order(&self) -> Vec<u32> {
        fn walk<T>(arena: &[AvlNode<T>], node: Option<u32>, out: &mut Vec<u32>) {
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

impl<T: Ord> AvlTree<T> {
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
        assert_avl_tree(self)
    }
}

impl<T: Clone> AvlTree<T> {
    /// Deep snapshot for step recording.
    pub fn snapshot(&self) -> Snapshot<T> {
        Snapshot::Avl {
            nodes: self.arena.clone(),
            root: self.root,
        }
    }
}

impl<T: Display> AvlTree<T> {
    /// Debug printer.
    pub fn print(&self) -> String {
        print_tree(&self.arena, self.root, "")
    }
}
