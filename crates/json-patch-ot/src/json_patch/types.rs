//! Core types for the JSON Patch module.
//!
//! Operations keep their `path` and `from` pointers as the original strings.
//! Transformation rewrites them textually, so a pointer that is never touched
//! comes back byte-for-byte identical.

use json_patch_ot_pointer::ValidationError;
use serde_json::{Map, Number, Value};
use thiserror::Error;

// ── Error ─────────────────────────────────────────────────────────────────

#[derive(Debug, Error, PartialEq)]
pub enum PatchError {
    #[error("INVALID_OP: {0}")]
    InvalidOp(String),
    #[error("INVALID_POINTER: '{field}' {source}")]
    InvalidPointer {
        field: &'static str,
        source: ValidationError,
    },
}

// ── Op enum ───────────────────────────────────────────────────────────────

/// An RFC 6902 JSON Patch operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Add {
        path: String,
        value: Value,
    },
    Remove {
        path: String,
        old_value: Option<Value>,
    },
    Replace {
        path: String,
        value: Value,
        old_value: Option<Value>,
    },
    Copy {
        path: String,
        from: String,
    },
    Move {
        path: String,
        from: String,
    },
    Test {
        path: String,
        value: Value,
    },
}

impl Op {
    /// Returns the operation name as it appears in the `op` field.
    pub fn op_name(&self) -> &'static str {
        match self {
            Op::Add { .. } => "add",
            Op::Remove { .. } => "remove",
            Op::Replace { .. } => "replace",
            Op::Copy { .. } => "copy",
            Op::Move { .. } => "move",
            Op::Test { .. } => "test",
        }
    }

    /// Returns the target pointer of the operation.
    pub fn path(&self) -> &str {
        match self {
            Op::Add { path, .. }
            | Op::Remove { path, .. }
            | Op::Replace { path, .. }
            | Op::Copy { path, .. }
            | Op::Move { path, .. }
            | Op::Test { path, .. } => path,
        }
    }

    pub fn path_mut(&mut self) -> &mut String {
        match self {
            Op::Add { path, .. }
            | Op::Remove { path, .. }
            | Op::Replace { path, .. }
            | Op::Copy { path, .. }
            | Op::Move { path, .. }
            | Op::Test { path, .. } => path,
        }
    }

    /// Returns the source pointer of `copy` and `move` operations.
    pub fn from(&self) -> Option<&str> {
        match self {
            Op::Copy { from, .. } | Op::Move { from, .. } => Some(from),
            _ => None,
        }
    }

    pub fn from_mut(&mut self) -> Option<&mut String> {
        match self {
            Op::Copy { from, .. } | Op::Move { from, .. } => Some(from),
            _ => None,
        }
    }
}

// ── Operation ─────────────────────────────────────────────────────────────

/// An [`Op`] together with the fields that travel with it on the wire but
/// are never inspected: the optional numeric `id` and any unknown members.
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    pub op: Op,
    pub id: Option<Number>,
    pub extra: Map<String, Value>,
}

impl Operation {
    pub fn new(op: Op) -> Self {
        Self {
            op,
            id: None,
            extra: Map::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<Number>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn path(&self) -> &str {
        self.op.path()
    }
}

impl From<Op> for Operation {
    fn from(op: Op) -> Self {
        Operation::new(op)
    }
}
