//! Array index shifting after an element was inserted or removed.

use json_patch_ot_pointer::{parse_index, split_array_prefix, split_index_token};
use tracing::trace;

use super::redirect::Slot;

/// Direction of an index shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shift {
    /// An element was inserted: indices at or after the anchor move up.
    Insert,
    /// An element was removed: indices after the anchor move down.
    Remove,
}

/// Shift the array index that follows `prefix` in `pointer`.
///
/// Returns the rewritten pointer, or `None` when the pointer is not inside the
/// array, its index token is not a valid index, or the index is not affected.
/// Everything after the index token (including a trailing `/`) is kept.
///
/// # Example
///
/// ```
/// use json_patch_ot::json_patch_ot::{shift_pointer, Shift};
///
/// assert_eq!(shift_pointer("/array/6", "/array/", 3, Shift::Remove).as_deref(), Some("/array/5"));
/// assert_eq!(shift_pointer("/array/3", "/array/", 3, Shift::Remove), None);
/// assert_eq!(shift_pointer("/array/3/x", "/array/", 3, Shift::Insert).as_deref(), Some("/array/4/x"));
/// assert_eq!(shift_pointer("/array/four", "/array/", 2, Shift::Remove), None);
/// ```
pub fn shift_pointer(pointer: &str, prefix: &str, anchor: usize, shift: Shift) -> Option<String> {
    let rest = pointer.strip_prefix(prefix)?;
    let (token, remainder) = split_index_token(rest);
    let index = parse_index(token)?;
    let shifted = match shift {
        Shift::Remove if index > anchor => index - 1,
        Shift::Insert if index >= anchor => index.checked_add(1)?,
        _ => return None,
    };
    Some(format!("{prefix}{shifted}{remainder}"))
}

/// Shift the indices of every proposed `path` (and `from`, for copy/move)
/// that lives in the same array as `anchor`.
///
/// A no-op when `anchor` is not an array element pointer. Pointers that were
/// redirected in the current pass are already final and are left alone.
pub(crate) fn shift_indices(anchor: &str, slots: &mut [Slot], shift: Shift) {
    let Some((prefix, index)) = split_array_prefix(anchor) else {
        return;
    };
    for slot in slots.iter_mut() {
        let op = &mut slot.operation.op;
        if !slot.redirected.path {
            if let Some(path) = shift_pointer(op.path(), prefix, index, shift) {
                trace!(old = op.path(), new = %path, ?shift, "shifting path");
                *op.path_mut() = path;
            }
        }
        if slot.redirected.from {
            continue;
        }
        if let Some(from) = op.from_mut() {
            if let Some(shifted) = shift_pointer(from, prefix, index, shift) {
                trace!(old = from.as_str(), new = %shifted, ?shift, "shifting from");
                *from = shifted;
            }
        }
    }
}
