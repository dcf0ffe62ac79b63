//! JSON Patch (RFC 6902) operation model and wire codec.
//!
//! # Operations
//!
//! All standard RFC 6902 operations are supported:
//! `add`, `remove`, `replace`, `copy`, `move`, `test`.
//!
//! Besides the RFC fields, an operation may carry an informational
//! `oldValue` (on `remove` and `replace`), an opaque numeric `id`, and any
//! number of unknown members. None of them influence transformation and all
//! of them survive a decode/encode cycle unchanged.

pub mod types;
pub mod codec;

pub use types::{Op, Operation, PatchError};
pub use codec::json::{from_json, from_json_patch, to_json, to_json_patch};
