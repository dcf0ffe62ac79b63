//! Following an accepted `move` into its new location.

use json_patch_ot_pointer::is_equal_or_descendant;
use tracing::debug;

use crate::json_patch::types::Operation;

/// Which pointers of a proposed operation were already placed at their final
/// address during the current accepted-move pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Redirected {
    pub path: bool,
    pub from: bool,
}

/// A proposed operation in the working list of a single accepted operation.
///
/// The redirect record lives only as long as the slot, so it never reaches
/// the returned operations.
#[derive(Debug, Clone)]
pub(crate) struct Slot {
    pub operation: Operation,
    pub redirected: Redirected,
}

impl Slot {
    pub fn new(operation: Operation) -> Self {
        Self {
            operation,
            redirected: Redirected::default(),
        }
    }

    pub fn into_operation(self) -> Operation {
        self.operation
    }
}

/// Rewrite `pointer` from inside the subtree at `from` to the same place
/// under `to`. Returns `None` when `pointer` is outside that subtree.
///
/// # Example
///
/// ```
/// use json_patch_ot::json_patch_ot::redirect_pointer;
///
/// assert_eq!(redirect_pointer("/a/b/c", "/a", "/x/0").as_deref(), Some("/x/0/b/c"));
/// assert_eq!(redirect_pointer("/a", "/a", "/x").as_deref(), Some("/x"));
/// assert_eq!(redirect_pointer("/ab", "/a", "/x"), None);
/// ```
pub fn redirect_pointer(pointer: &str, from: &str, to: &str) -> Option<String> {
    if !is_equal_or_descendant(pointer, from) {
        return None;
    }
    Some(format!("{to}{}", &pointer[from.len()..]))
}

/// Redirect every proposed `path` and `from` that points into the subtree an
/// accepted move relocated from `from` to `to`.
pub(crate) fn redirect_paths(from: &str, to: &str, slots: &mut [Slot]) {
    for slot in slots.iter_mut() {
        let op = &mut slot.operation.op;
        if let Some(path) = redirect_pointer(op.path(), from, to) {
            debug!(op = op.op_name(), old = op.path(), new = %path, "redirecting path");
            *op.path_mut() = path;
            slot.redirected.path = true;
        }
        if let Some(op_from) = op.from_mut() {
            if let Some(redirected) = redirect_pointer(op_from, from, to) {
                debug!(old = op_from.as_str(), new = %redirected, "redirecting from");
                *op_from = redirected;
                slot.redirected.from = true;
            }
        }
    }
}
