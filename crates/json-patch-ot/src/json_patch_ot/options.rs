use serde::{Deserialize, Serialize};

/// Switches controlling how conflicts between accepted and proposed
/// operations are resolved.
///
/// Deserializes from the wire shape
/// `{ "acceptedWinsOnEqualPath"?: bool, "redirectOnMove"?: bool }`;
/// absent keys default to `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct TransformOptions {
    /// Drop a proposed operation whose `path` equals the accepted one's,
    /// instead of letting the proposed edit win.
    pub accepted_wins_on_equal_path: bool,
    /// Follow accepted `move` operations: proposed pointers inside the moved
    /// subtree are rewritten to its new location instead of being dropped.
    pub redirect_on_move: bool,
}

impl TransformOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_accepted_wins_on_equal_path(mut self, enabled: bool) -> Self {
        self.accepted_wins_on_equal_path = enabled;
        self
    }

    pub fn with_redirect_on_move(mut self, enabled: bool) -> Self {
        self.redirect_on_move = enabled;
        self
    }
}
