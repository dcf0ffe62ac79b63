//! JSON codec for JSON Patch operations.
//!
//! Converts operations to/from `serde_json::Value` in RFC 6902 format.
//! Members the decoder does not consume for a given `op` are kept in
//! [`Operation::extra`] and written back by the encoder.

use json_patch_ot_pointer::validate_json_pointer;
use serde_json::{json, Map, Value};

use crate::json_patch::types::{Op, Operation, PatchError};

// ── Field helpers ─────────────────────────────────────────────────────────

fn take_pointer(obj: &mut Map<String, Value>, field: &'static str) -> Result<String, PatchError> {
    match obj.remove(field) {
        Some(Value::String(pointer)) => {
            validate_json_pointer(&pointer)
                .map_err(|source| PatchError::InvalidPointer { field, source })?;
            Ok(pointer)
        }
        Some(_) => Err(PatchError::InvalidOp(format!("'{field}' must be a string"))),
        None => Err(PatchError::InvalidOp(format!("missing '{field}' field"))),
    }
}

fn take_value(
    obj: &mut Map<String, Value>,
    op_name: &str,
    field: &'static str,
) -> Result<Value, PatchError> {
    obj.remove(field)
        .ok_or_else(|| PatchError::InvalidOp(format!("{op_name} requires '{field}'")))
}

// ── Serialization ─────────────────────────────────────────────────────────

/// Serialize an [`Operation`] to a `serde_json::Value`.
pub fn to_json(operation: &Operation) -> Value {
    let mut m = Map::new();
    m.insert("op".into(), json!(operation.op.op_name()));
    match &operation.op {
        Op::Add { path, value } | Op::Test { path, value } => {
            m.insert("path".into(), json!(path));
            m.insert("value".into(), value.clone());
        }
        Op::Remove { path, old_value } => {
            m.insert("path".into(), json!(path));
            if let Some(ov) = old_value {
                m.insert("oldValue".into(), ov.clone());
            }
        }
        Op::Replace {
            path,
            value,
            old_value,
        } => {
            m.insert("path".into(), json!(path));
            m.insert("value".into(), value.clone());
            if let Some(ov) = old_value {
                m.insert("oldValue".into(), ov.clone());
            }
        }
        Op::Copy { path, from } | Op::Move { path, from } => {
            m.insert("path".into(), json!(path));
            m.insert("from".into(), json!(from));
        }
    }
    if let Some(id) = &operation.id {
        m.insert("id".into(), Value::Number(id.clone()));
    }
    for (key, value) in &operation.extra {
        m.entry(key.clone()).or_insert_with(|| value.clone());
    }
    Value::Object(m)
}

// ── Deserialization ───────────────────────────────────────────────────────

/// Deserialize a `serde_json::Value` into an [`Operation`].
pub fn from_json(v: &Value) -> Result<Operation, PatchError> {
    let mut obj = v
        .as_object()
        .cloned()
        .ok_or_else(|| PatchError::InvalidOp("operation must be an object".into()))?;
    let op_name = match obj.remove("op") {
        Some(Value::String(name)) => name,
        _ => return Err(PatchError::InvalidOp("missing 'op' field".into())),
    };

    let path = take_pointer(&mut obj, "path")?;

    let op = match op_name.as_str() {
        "add" => Op::Add {
            path,
            value: take_value(&mut obj, "add", "value")?,
        },
        "remove" => Op::Remove {
            path,
            old_value: obj.remove("oldValue"),
        },
        "replace" => Op::Replace {
            path,
            value: take_value(&mut obj, "replace", "value")?,
            old_value: obj.remove("oldValue"),
        },
        "copy" => Op::Copy {
            path,
            from: take_pointer(&mut obj, "from")?,
        },
        "move" => Op::Move {
            path,
            from: take_pointer(&mut obj, "from")?,
        },
        "test" => Op::Test {
            path,
            value: take_value(&mut obj, "test", "value")?,
        },
        other => return Err(PatchError::InvalidOp(format!("unknown op: {other}"))),
    };

    // A non-numeric `id` is not ours to interpret; it stays an extra member.
    let id = match obj.remove("id") {
        Some(Value::Number(n)) => Some(n),
        Some(other) => {
            obj.insert("id".into(), other);
            None
        }
        None => None,
    };

    Ok(Operation {
        op,
        id,
        extra: obj,
    })
}

/// Serialize a list of operations to a JSON array.
pub fn to_json_patch(ops: &[Operation]) -> Value {
    Value::Array(ops.iter().map(to_json).collect())
}

/// Deserialize a JSON array into a list of operations.
pub fn from_json_patch(v: &Value) -> Result<Vec<Operation>, PatchError> {
    let arr = v
        .as_array()
        .ok_or_else(|| PatchError::InvalidOp("patch must be an array".into()))?;
    arr.iter().map(from_json).collect()
}
