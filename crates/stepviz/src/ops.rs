//! Operation requests and dispatch.
//!
//! The UI sends `{ "op": "insert", "operand": 42 }`-shaped requests; a scene
//! answers with the recorded step sequence. A request naming an operation the
//! target structure does not support is a programmer error and fails loudly
//! as [`EngineError`]. Duplicate, not-found, and empty conditions, by
//! contrast, are ordinary outcomes narrated inside the trace.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use step_forest::Step;

use crate::scene::{AvlScene, RbScene, RingScene};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OpKind {
    Insert,
    Delete,
    Search,
    InsertAtBeginning,
    InsertAtEnd,
    Traverse,
}

/// One user-triggered operation. `operand` is the value to insert/delete/
/// search, or the hop count for `traverse`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpRequest {
    pub op: OpKind,
    pub operand: i64,
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("operation {op:?} is not supported by the {structure} visualizer")]
    Unsupported { op: OpKind, structure: &'static str },

    #[error("invalid traversal count: {0}")]
    InvalidCount(i64),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl OpRequest {
    pub fn from_json(s: &str) -> Result<Self, EngineError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn to_json(&self) -> Result<String, EngineError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Serializes a step sequence for the renderer.
pub fn steps_to_json(steps: &[Step<i64>]) -> Result<String, EngineError> {
    Ok(serde_json::to_string(steps)?)
}

impl AvlScene<i64> {
    pub fn apply(&mut self, req: &OpRequest) -> Result<Vec<Step<i64>>, EngineError> {
        match req.op {
            OpKind::Insert => Ok(self.insert(req.operand)),
            OpKind::Search => Ok(self.search(&req.operand)),
            op => Err(EngineError::Unsupported {
                op,
                structure: "AVL tree",
            }),
        }
    }
}

impl RbScene<i64> {
    pub fn apply(&mut self, req: &OpRequest) -> Result<Vec<Step<i64>>, EngineError> {
        match req.op {
            OpKind::Insert => Ok(self.insert(req.operand)),
            OpKind::Delete => Ok(self.delete(&req.operand)),
            OpKind::Search => Ok(self.search(&req.operand)),
            op => Err(EngineError::Unsupported {
                op,
                structure: "red-black tree",
            }),
        }
    }
}

impl RingScene<i64> {
    pub fn apply(&mut self, req: &OpRequest) -> Result<Vec<Step<i64>>, EngineError> {
        match req.op {
            OpKind::InsertAtBeginning => Ok(self.insert_at_beginning(req.operand)),
            OpKind::InsertAtEnd => Ok(self.insert_at_end(req.operand)),
            OpKind::Delete => Ok(self.delete(&req.operand)),
            OpKind::Traverse => {
                let count =
                    usize::try_from(req.operand).map_err(|_| EngineError::InvalidCount(req.operand))?;
                Ok(self.traverse(count))
            }
            op => Err(EngineError::Unsupported {
                op,
                structure: "circular list",
            }),
        }
    }
}
