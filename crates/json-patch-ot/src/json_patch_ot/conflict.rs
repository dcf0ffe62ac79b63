//! Dropping proposed operations whose target lost its meaning.

use json_patch_ot_pointer::{is_descendant, is_equal_or_descendant};
use tracing::debug;

use super::options::TransformOptions;
use super::redirect::{Redirected, Slot};
use crate::json_patch::types::Op;

/// How a proposed operation is judged against one accepted pointer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct ConflictPolicy {
    /// A proposed `path` equal to the accepted pointer is a conflict.
    pub accepted_wins_on_equal_path: bool,
    /// The accepted pointer was removed: a proposed `add` or `test` on exactly
    /// that pointer re-creates or probes it and is always kept.
    pub keep_recreate: bool,
}

impl ConflictPolicy {
    /// Policy for a pointer the accepted operation removed.
    pub fn removal() -> Self {
        Self {
            accepted_wins_on_equal_path: true,
            keep_recreate: true,
        }
    }
}

impl From<&TransformOptions> for ConflictPolicy {
    fn from(options: &TransformOptions) -> Self {
        Self {
            accepted_wins_on_equal_path: options.accepted_wins_on_equal_path,
            keep_recreate: false,
        }
    }
}

fn is_conflict(op: &Op, anchor: &str, policy: ConflictPolicy, redirected: Redirected) -> bool {
    if policy.keep_recreate
        && matches!(op, Op::Add { .. } | Op::Test { .. })
        && op.path() == anchor
    {
        return false;
    }
    let from_hit = !redirected.from
        && op
            .from()
            .is_some_and(|from| is_equal_or_descendant(from, anchor));
    let path_hit = !redirected.path
        && (is_descendant(op.path(), anchor)
            || (policy.accepted_wins_on_equal_path && op.path() == anchor));
    from_hit || path_hit
}

/// Drop every proposed operation that conflicts with the accepted `anchor`.
/// Survivors keep their relative order.
pub(crate) fn remove_conflicts(anchor: &str, slots: &mut Vec<Slot>, policy: ConflictPolicy) {
    slots.retain(|slot| {
        let op = &slot.operation.op;
        let conflict = is_conflict(op, anchor, policy, slot.redirected);
        if conflict {
            debug!(op = op.op_name(), path = op.path(), anchor, "dropping conflicting operation");
        }
        !conflict
    });
}
