//! Step-trace engine for data-structure visualizers.
//!
//! The UI talks to this crate and nothing below it:
//!
//! 1. Build a scene ([`AvlScene`], [`RbScene`], [`RingScene`]): it seeds its
//!    structure from the demo values (or any slice).
//! 2. Hand it an operation, directly or as an [`OpRequest`]. The scene clones
//!    its live structure, runs the traced mutator on the clone, swaps the
//!    clone in, and returns the finished step sequence, always non-empty and
//!    framed by a `Start` and a `Done` step.
//! 3. Feed the steps to a [`Playback`] and drive it from a timer callback.
//!
//! Serialized [`Step`]s are the whole renderer contract; see
//! [`step_forest::trace`].

pub mod ops;
pub mod scene;
pub mod seeds;

pub use step_forest::{
    edge_key, AvlTree, Color, Outcome, Phase, RbTree, RingList, Snapshot, Step, Trace,
};
pub use stepviz_playback::{
    PlayState, Playback, DEFAULT_STEP_INTERVAL, MAX_STEP_INTERVAL, MIN_STEP_INTERVAL,
};

pub use ops::{steps_to_json, EngineError, OpKind, OpRequest};
pub use scene::{AvlScene, RbScene, RingScene};
pub use seeds::{AVL_DEMO_SEEDS, RED_BLACK_DEMO_SEEDS, RING_DEMO_SEEDS};
