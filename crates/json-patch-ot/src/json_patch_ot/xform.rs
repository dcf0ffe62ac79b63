//! Per-kind transformers: the effect of one accepted operation on the
//! proposed working list.

use super::conflict::{remove_conflicts, ConflictPolicy};
use super::options::TransformOptions;
use super::redirect::{redirect_paths, Slot};
use super::shift::{shift_indices, Shift};

/// Transform against an accepted `remove` at `path`.
pub(crate) fn x_remove(path: &str, slots: &mut Vec<Slot>) {
    remove_conflicts(path, slots, ConflictPolicy::removal());
    shift_indices(path, slots, Shift::Remove);
}

/// Transform against an accepted `replace` at `path`.
///
/// Sibling addresses are unaffected, only the replaced subtree is.
pub(crate) fn x_replace(path: &str, slots: &mut Vec<Slot>, options: &TransformOptions) {
    remove_conflicts(path, slots, options.into());
}

/// Transform against an accepted `add` or `copy` creating a node at `path`.
///
/// Indices are shifted before the conflict check, so a proposed pointer that
/// addressed the previous occupant of the slot has already moved out of the
/// way and is judged at its new address.
pub(crate) fn x_add(path: &str, slots: &mut Vec<Slot>, options: &TransformOptions) {
    shift_indices(path, slots, Shift::Insert);
    remove_conflicts(path, slots, options.into());
}

/// Transform against an accepted `move` from `from` to `path`: a removal at
/// `from` followed by an insertion at `path`.
pub(crate) fn x_move(from: &str, path: &str, slots: &mut Vec<Slot>, options: &TransformOptions) {
    if options.redirect_on_move {
        redirect_paths(from, path, slots);
    }
    remove_conflicts(from, slots, ConflictPolicy::removal());
    shift_indices(from, slots, Shift::Remove);
    shift_indices(path, slots, Shift::Insert);
    remove_conflicts(path, slots, options.into());
}
