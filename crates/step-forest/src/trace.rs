//! Step recording.
//!
//! A mutator narrates its progress by pushing [`Step`] records into a
//! [`Trace`]. Every step owns a [`Snapshot`] (a full clone of the arena plus
//! the root/head index), so earlier steps stay valid however the live
//! structure changes afterwards. Steps are immutable once recorded.
//!
//! Serialized field names are the renderer contract: `structureSnapshot`,
//! `currentNodeId`, `highlightedNodeIds`, `highlightedEdgeIds`, `phaseLabel`,
//! `description`.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Serialize, Serializer};

use crate::avl::AvlNode;
use crate::red_black::RbNode;
use crate::ring::RingNode;

/// How a mutator left the structure. Duplicate / not-found / empty are
/// expected outcomes, not errors; callers phrase the terminal step from this.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Inserted,
    Duplicate,
    Deleted,
    NotFound,
    Found,
    Empty,
    Traversed,
}

/// Algorithm phase of one step. The label is the pedagogical case name shown
/// to the user and is what [`Phase`] serializes as.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Start,
    Compare,
    InsertNode,
    Duplicate,
    Found,
    NotFound,
    Empty,
    Done,
    // AVL rebalancing cases.
    LeftLeftCase,
    LeftRightCase,
    RightRightCase,
    RightLeftCase,
    RotateRightLl,
    RotateLeftLr,
    RotateRightLr,
    RotateLeftRr,
    RotateRightRl,
    RotateLeftRl,
    // Red-black fix-up.
    RotateLeft,
    RotateRight,
    RecolorUncle,
    Recolor,
    RootBlack,
    TwoChildren,
    Successor,
    Unlink,
    DeleteCase1,
    DeleteCase2,
    DeleteCase3,
    DeleteCase4,
    // Ring splices.
    LinkSelf,
    RelinkTail,
    Splice,
    Traverse,
}

impl Phase {
    pub fn label(self) -> &'static str {
        match self {
            Phase::Start => "Start",
            Phase::Compare => "Compare",
            Phase::InsertNode => "Insert Node",
            Phase::Duplicate => "Duplicate Value",
            Phase::Found => "Found",
            Phase::NotFound => "Not Found",
            Phase::Empty => "Empty Structure",
            Phase::Done => "Done",
            Phase::LeftLeftCase => "Left-Left Case",
            Phase::LeftRightCase => "Left-Right Case",
            Phase::RightRightCase => "Right-Right Case",
            Phase::RightLeftCase => "Right-Left Case",
            Phase::RotateRightLl => "Right Rotation (LL)",
            Phase::RotateLeftLr => "Left Rotation (LR)",
            Phase::RotateRightLr => "Right Rotation (LR)",
            Phase::RotateLeftRr => "Left Rotation (RR)",
            Phase::RotateRightRl => "Right Rotation (RL)",
            Phase::RotateLeftRl => "Left Rotation (RL)",
            Phase::RotateLeft => "Left Rotation",
            Phase::RotateRight => "Right Rotation",
            Phase::RecolorUncle => "Case 1: Red Uncle",
            Phase::Recolor => "Recolor",
            Phase::RootBlack => "Recolor Root Black",
            Phase::TwoChildren => "Two Children",
            Phase::Successor => "In-Order Successor",
            Phase::Unlink => "Unlink Node",
            Phase::DeleteCase1 => "Case 1: Red Sibling",
            Phase::DeleteCase2 => "Case 2: Black Sibling, Black Children",
            Phase::DeleteCase3 => "Case 3: Black Sibling, Red Near Child",
            Phase::DeleteCase4 => "Case 4: Black Sibling, Red Far Child",
            Phase::LinkSelf => "Link Node to Itself",
            Phase::RelinkTail => "Relink Tail",
            Phase::Splice => "Splice Node",
            Phase::Traverse => "Traverse",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Phase {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Deep copy of one structure at one instant. Renderers traverse from
/// `root`/`head`; unreachable arena slots are ignored.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Snapshot<T> {
    Avl {
        nodes: Vec<AvlNode<T>>,
        root: Option<u32>,
    },
    RedBlack {
        nodes: Vec<RbNode<T>>,
        root: Option<u32>,
    },
    Ring {
        nodes: Vec<RingNode<T>>,
        head: Option<u32>,
        len: usize,
    },
}

/// Edge key for highlight sets: `"{parent}-{child}"`.
pub fn edge_key(from: u32, to: u32) -> String {
    format!("{from}-{to}")
}

/// One recorded snapshot plus narrative annotation, the unit of playback.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Step<T> {
    #[serde(rename = "structureSnapshot")]
    pub snapshot: Snapshot<T>,
    #[serde(rename = "currentNodeId")]
    pub current: Option<u32>,
    #[serde(rename = "highlightedNodeIds")]
    pub highlighted_nodes: BTreeSet<u32>,
    #[serde(rename = "highlightedEdgeIds")]
    pub highlighted_edges: BTreeSet<String>,
    #[serde(rename = "phaseLabel")]
    pub phase: Phase,
    pub description: String,
}

impl<T> Step<T> {
    pub fn new(snapshot: Snapshot<T>, phase: Phase, description: impl Into<String>) -> Self {
        Self {
            snapshot,
            current: None,
            highlighted_nodes: BTreeSet::new(),
            highlighted_edges: BTreeSet::new(),
            phase,
            description: description.into(),
        }
    }

    /// Sets the node the algorithm is looking at.
    pub fn at(mut self, node: u32) -> Self {
        self.current = Some(node);
        self
    }

    /// Adds nodes to the highlight set.
    pub fn mark<I: IntoIterator<Item = u32>>(mut self, nodes: I) -> Self {
        self.highlighted_nodes.extend(nodes);
        self
    }

    /// Adds a parent→child edge to the highlight set.
    pub fn edge(mut self, from: u32, to: u32) -> Self {
        self.highlighted_edges.insert(edge_key(from, to));
        self
    }
}

/// Ordered accumulator of steps for one operation.
#[derive(Clone, Debug, Default)]
pub struct Trace<T> {
    steps: Vec<Step<T>>,
}

impl<T> Trace<T> {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    pub fn record(&mut self, step: Step<T>) {
        self.steps.push(step);
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn steps(&self) -> &[Step<T>] {
        &self.steps
    }

    pub fn last(&self) -> Option<&Step<T>> {
        self.steps.last()
    }

    pub fn into_steps(self) -> Vec<Step<T>> {
        self.steps
    }
}
