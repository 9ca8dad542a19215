use std::fmt::Display;
use std::fmt::Write as _;

use crate::trace::Snapshot;

use super::types::RingNode;
use super::util::assert_ring;

/// Arena-backed circular singly-linked list. `Clone` is the deep copy: the
/// ring relinks for free because links are indices, and copying never chases
/// `next` pointers, so it terminates regardless of ring shape.
#[derive(Clone, Debug, Default)]
pub struct RingList<T> {
    pub(crate) arena: Vec<RingNode<T>>,
    pub(crate) head: Option<u32>,
    pub(crate) len: usize,
}

impl<T> RingList<T> {
    pub fn new() -> Self {
        Self {
            arena: Vec::new(),
            head: None,
            len: 0,
        }
    }

    pub fn head_index(&self) -> Option<u32> {
        self.head
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn arena(&self) -> &[RingNode<T>] {
        &self.arena
    }

    pub fn node(&self, idx: u32) -> &RingNode<T> {
        &self.arena[idx as usize]
    }

    pub(crate) fn node_mut(&mut self, idx: u32) -> &mut RingNode<T> {
        &mut self.arena[idx as usize]
    }

    /// Pushes a self-linked slot and returns its index. The caller splices.
    pub(crate) fn alloc(&mut self, value: T) -> u32 {
        let idx = self.arena.len() as u32;
        self.arena.push(RingNode { value, next: idx });
        idx
    }

    /// Index of the node whose `next` is the head, found by an O(n) walk;
    /// no tail pointer is maintained. Bounded by the arena size so it
    /// terminates even on a malformed ring.
    pub fn tail_index(&self) -> Option<u32> {
        let head = self.head?;
        let mut curr = head;
        for _ in 0..self.arena.len() {
            let next = self.arena[curr as usize].next;
            if next == head {
                return Some(curr);
            }
            curr = next;
        }
        None
    }

    /// Walks from the head, stopping after `max_nodes` or one full
    /// revolution, whichever comes first. Naive iteration over a ring never
    /// terminates; every consumer goes through this.
    pub fn to_bounded_sequence(&self, max_nodes: usize) -> Vec<u32> {
        let Some(head) = self.head else {
            return Vec::new();
        };
        let mut out = Vec::new();
        let mut curr = head;
        while out.len() < max_nodes {
            out.push(curr);
            curr = self.arena[curr as usize].next;
            if curr == head {
                break;
            }
        }
        out
    }

    pub fn assert_valid(&self) -> Result<(), String> {
        assert_ring(self)
    }
}

impl<T: Clone> RingList<T> {
    /// Deep snapshot for step recording.
    pub fn snapshot(&self) -> Snapshot<T> {
        Snapshot::Ring {
            nodes: self.arena.clone(),
            head: self.head,
            len: self.len,
        }
    }
}

impl<T: Display> RingList<T> {
    /// Debug printer: `20 → 30 → 40 → (back to 20)`.
    pub fn print(&self) -> String {
        let seq = self.to_bounded_sequence(self.len.max(self.arena.len()));
        if seq.is_empty() {
            return "(empty)".to_string();
        }
        let mut out = String::new();
        for &i in &seq {
            let _ = write!(out, "{} → ", self.node(i).value);
        }
        let _ = write!(out, "(back to {})", self.node(seq[0]).value);
        out
    }
}
