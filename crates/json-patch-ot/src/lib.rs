//! json-patch-ot: operational transformation for JSON Patch (RFC 6902).
//!
//! Rewrites operations proposed against a stale document so they can be
//! applied after a list of already accepted operations, dropping the ones
//! whose target no longer has a stable meaning.
//!
//! - [`json_patch`]: the operation model and its JSON wire codec.
//! - [`json_patch_ot`]: the transformation itself.
//! - [`json_cli`]: the logic behind the `json-patch-ot` binary.

pub mod json_patch;
pub mod json_patch_ot;
pub mod json_cli;

pub use json_patch::{Op, Operation, PatchError};
pub use json_patch_ot::{transform, transform_json, transform_ops, TransformOptions};
