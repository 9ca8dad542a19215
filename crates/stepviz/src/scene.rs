//! Scenes: one live structure per visualizer page, replaced wholesale on
//! every operation.
//!
//! A scene clones its structure before each mutation, runs the traced
//! mutator on the clone, then swaps the clone in. Steps recorded for earlier
//! operations therefore never alias the live structure, and an aborted
//! render cycle can keep reading the previous value. Every returned sequence
//! is non-empty: a `Start` step frames the request and a `Done` step phrases
//! the outcome, no-ops included.

use std::fmt::Display;

use step_forest::{avl, red_black, ring, AvlTree, Outcome, Phase, RbTree, RingList, Step, Trace};

use crate::seeds::{AVL_DEMO_SEEDS, RED_BLACK_DEMO_SEEDS, RING_DEMO_SEEDS};

fn done_description(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Inserted => "Insert complete",
        Outcome::Duplicate => "No changes — the value is already present",
        Outcome::Deleted => "Delete complete",
        Outcome::NotFound => "No changes — the value was not found",
        Outcome::Found => "Search complete — value found",
        Outcome::Empty => "No changes — the structure is empty",
        Outcome::Traversed => "Traversal complete",
    }
}

/// AVL visualizer session.
#[derive(Clone, Debug)]
pub struct AvlScene<T> {
    tree: AvlTree<T>,
}

impl AvlScene<i64> {
    pub fn new() -> Self {
        Self::with_seeds(&AVL_DEMO_SEEDS)
    }
}

impl Default for AvlScene<i64> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> AvlScene<T>
where
    T: Ord + Clone + Display,
{
    pub fn with_seeds(seeds: &[T]) -> Self {
        let mut tree = AvlTree::new();
        let mut scratch = Trace::new();
        for v in seeds {
            avl::insert(&mut tree, v.clone(), &mut scratch);
        }
        Self { tree }
    }

    pub fn tree(&self) -> &AvlTree<T> {
        &self.tree
    }

    pub fn insert(&mut self, value: T) -> Vec<Step<T>> {
        let mut next = self.tree.clone();
        let mut trace = Trace::new();
        trace.record(Step::new(
            next.snapshot(),
            Phase::Start,
            format!("Insert {value} into the AVL tree"),
        ));
        let outcome = avl::insert(&mut next, value, &mut trace);
        trace.record(Step::new(
            next.snapshot(),
            Phase::Done,
            done_description(outcome),
        ));
        self.tree = next;
        trace.into_steps()
    }

    pub fn search(&self, target: &T) -> Vec<Step<T>> {
        let mut trace = Trace::new();
        trace.record(Step::new(
            self.tree.snapshot(),
            Phase::Start,
            format!("Search for {target} in the AVL tree"),
        ));
        let outcome = avl::search(&self.tree, target, &mut trace);
        trace.record(Step::new(
            self.tree.snapshot(),
            Phase::Done,
            done_description(outcome),
        ));
        trace.into_steps()
    }
}

/// Red-black visualizer session.
#[derive(Clone, Debug)]
pub struct RbScene<T> {
    tree: RbTree<T>,
}

impl RbScene<i64> {
    pub fn new() -> Self {
        Self::with_seeds(&RED_BLACK_DEMO_SEEDS)
    }
}

impl Default for RbScene<i64> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RbScene<T>
where
    T: Ord + Clone + Display,
{
    pub fn with_seeds(seeds: &[T]) -> Self {
        let mut tree = RbTree::new();
        let mut scratch = Trace::new();
        for v in seeds {
            red_black::insert(&mut tree, v.clone(), &mut scratch);
        }
        Self { tree }
    }

    pub fn tree(&self) -> &RbTree<T> {
        &self.tree
    }

    pub fn insert(&mut self, value: T) -> Vec<Step<T>> {
        let mut next = self.tree.clone();
        let mut trace = Trace::new();
        trace.record(Step::new(
            next.snapshot(),
            Phase::Start,
            format!("Insert {value} into the red-black tree"),
        ));
        let outcome = red_black::insert(&mut next, value, &mut trace);
        trace.record(Step::new(
            next.snapshot(),
            Phase::Done,
            done_description(outcome),
        ));
        self.tree = next;
        trace.into_steps()
    }

    pub fn delete(&mut self, target: &T) -> Vec<Step<T>> {
        let mut next = self.tree.clone();
        let mut trace = Trace::new();
        trace.record(Step::new(
            next.snapshot(),
            Phase::Start,
            format!("Delete {target} from the red-black tree"),
        ));
        let outcome = red_black::delete(&mut next, target, &mut trace);
        trace.record(Step::new(
            next.snapshot(),
            Phase::Done,
            done_description(outcome),
        ));
        self.tree = next;
        trace.into_steps()
    }

    pub fn search(&self, target: &T) -> Vec<Step<T>> {
        let mut trace = Trace::new();
        trace.record(Step::new(
            self.tree.snapshot(),
            Phase::Start,
            format!("Search for {target} in the red-black tree"),
        ));
        let outcome = red_black::search(&self.tree, target, &mut trace);
        trace.record(Step::new(
            self.tree.snapshot(),
            Phase::Done,
            done_description(outcome),
        ));
        trace.into_steps()
    }
}

/// Circular-list visualizer session.
#[derive(Clone, Debug)]
pub struct RingScene<T> {
    list: RingList<T>,
}

impl RingScene<i64> {
    pub fn new() -> Self {
        Self::with_seeds(&RING_DEMO_SEEDS)
    }
}

impl Default for RingScene<i64> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RingScene<T>
where
    T: Clone + PartialEq + Display,
{
    /// Seeds are appended in order, so the ring reads the same way.
    pub fn with_seeds(seeds: &[T]) -> Self {
        let mut list = RingList::new();
        let mut scratch = Trace::new();
        for v in seeds {
            ring::insert_at_end(&mut list, v.clone(), &mut scratch);
        }
        Self { list }
    }

    pub fn list(&self) -> &RingList<T> {
        &self.list
    }

    pub fn insert_at_beginning(&mut self, value: T) -> Vec<Step<T>> {
        let mut next = self.list.clone();
        let mut trace = Trace::new();
        trace.record(Step::new(
            next.snapshot(),
            Phase::Start,
            format!("Insert {value} at the beginning of the list"),
        ));
        let outcome = ring::insert_at_beginning(&mut next, value, &mut trace);
        trace.record(Step::new(
            next.snapshot(),
            Phase::Done,
            done_description(outcome),
        ));
        self.list = next;
        trace.into_steps()
    }

    pub fn insert_at_end(&mut self, value: T) -> Vec<Step<T>> {
        let mut next = self.list.clone();
        let mut trace = Trace::new();
        trace.record(Step::new(
            next.snapshot(),
            Phase::Start,
            format!("Insert {value} at the end of the list"),
        ));
        let outcome = ring::insert_at_end(&mut next, value, &mut trace);
        trace.record(Step::new(
            next.snapshot(),
            Phase::Done,
            done_description(outcome),
        ));
        self.list = next;
        trace.into_steps()
    }

    pub fn delete(&mut self, target: &T) -> Vec<Step<T>> {
        let mut next = self.list.clone();
        let mut trace = Trace::new();
        trace.record(Step::new(
            next.snapshot(),
            Phase::Start,
            format!("Delete {target} from the list"),
        ));
        let outcome = ring::delete(&mut next, target, &mut trace);
        trace.record(Step::new(
            next.snapshot(),
            Phase::Done,
            done_description(outcome),
        ));
        self.list = next;
        trace.into_steps()
    }

    pub fn traverse(&self, count: usize) -> Vec<Step<T>> {
        let mut trace = Trace::new();
        trace.record(Step::new(
            self.list.snapshot(),
            Phase::Start,
            format!("Traverse {count} steps around the ring"),
        ));
        let outcome = ring::traverse(&self.list, count, &mut trace);
        trace.record(Step::new(
            self.list.snapshot(),
            Phase::Done,
            done_description(outcome),
        ));
        trace.into_steps()
    }
}
