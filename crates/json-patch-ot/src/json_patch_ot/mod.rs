//! Operational transformation for JSON Patch operations.
//!
//! Provides [`transform`], which rewrites a list of *proposed* operations,
//! computed against a stale document, so they can be applied after the
//! *accepted* operations have already been applied.
//!
//! Each accepted operation is folded over the proposed list in order:
//!
//! | accepted  | effect on proposed operations                                   |
//! |-----------|-----------------------------------------------------------------|
//! | `remove`  | drop conflicts (accepted wins, `add`/`test` re-creation kept), shift indices down |
//! | `replace` | drop conflicts per [`TransformOptions`]                         |
//! | `add`     | shift indices up, then drop conflicts per options               |
//! | `copy`    | same as `add`                                                   |
//! | `move`    | optionally redirect into the moved subtree, then `remove` at `from` and `add` at `path` |
//! | `test`    | nothing                                                         |
//!
//! The result is always a subsequence of the proposed list: operations are
//! dropped or re-addressed, never created, reordered, or changed in kind.

mod conflict;
mod options;
mod redirect;
mod shift;
mod xform;

pub use options::TransformOptions;
pub use redirect::redirect_pointer;
pub use shift::{shift_pointer, Shift};

use serde_json::Value;
use tracing::trace;

use crate::json_patch::codec::json::{from_json_patch, to_json_patch};
use crate::json_patch::types::{Op, Operation, PatchError};
use redirect::Slot;
use xform::{x_add, x_move, x_remove, x_replace};

// ── Main transform ────────────────────────────────────────────────────────

/// Transform `proposed` operations so they apply correctly after `accepted`
/// operations have already been applied.
///
/// The inputs are left untouched; the returned operations are fresh copies.
///
/// # Example
///
/// ```
/// use json_patch_ot::json_patch::{Op, Operation};
/// use json_patch_ot::json_patch_ot::{transform, TransformOptions};
///
/// let accepted = [Operation::from(Op::Remove { path: "/array/3".into(), old_value: None })];
/// let proposed = [Operation::from(Op::Replace {
///     path: "/array/4".into(),
///     value: serde_json::json!("x"),
///     old_value: None,
/// })];
///
/// let result = transform(&accepted, &proposed, &TransformOptions::default());
/// assert_eq!(result[0].path(), "/array/3");
/// ```
pub fn transform(
    accepted: &[Operation],
    proposed: &[Operation],
    options: &TransformOptions,
) -> Vec<Operation> {
    accepted.iter().fold(proposed.to_vec(), |proposed, acc| {
        transform_against(&acc.op, proposed, options)
    })
}

/// [`transform`] for bare operations without ids or extra members.
pub fn transform_ops(accepted: &[Op], proposed: &[Op], options: &TransformOptions) -> Vec<Op> {
    let accepted: Vec<Operation> = accepted.iter().cloned().map(Operation::from).collect();
    let proposed: Vec<Operation> = proposed.iter().cloned().map(Operation::from).collect();
    transform(&accepted, &proposed, options)
        .into_iter()
        .map(|operation| operation.op)
        .collect()
}

/// [`transform`] over wire-shaped JSON Patch arrays.
pub fn transform_json(
    accepted: &Value,
    proposed: &Value,
    options: &TransformOptions,
) -> Result<Value, PatchError> {
    let accepted = from_json_patch(accepted)?;
    let proposed = from_json_patch(proposed)?;
    Ok(to_json_patch(&transform(&accepted, &proposed, options)))
}

/// Apply the transformer for a single accepted operation.
fn transform_against(
    accepted: &Op,
    proposed: Vec<Operation>,
    options: &TransformOptions,
) -> Vec<Operation> {
    trace!(
        op = accepted.op_name(),
        path = accepted.path(),
        proposed = proposed.len(),
        "transforming against accepted operation"
    );
    let mut slots: Vec<Slot> = proposed.into_iter().map(Slot::new).collect();
    match accepted {
        Op::Remove { path, .. } => x_remove(path, &mut slots),
        Op::Replace { path, .. } => x_replace(path, &mut slots, options),
        Op::Add { path, .. } | Op::Copy { path, .. } => x_add(path, &mut slots, options),
        Op::Move { path, from } => x_move(from, path, &mut slots, options),
        // `test` never changes the document.
        Op::Test { .. } => {}
    }
    slots.into_iter().map(Slot::into_operation).collect()
}
