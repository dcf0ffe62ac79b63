//! JSON Pointer (RFC 6901) addressing helpers.
//!
//! This crate implements the textual pointer relations needed to transform
//! [JSON Patch (RFC 6902)](https://tools.ietf.org/html/rfc6902) operations
//! against each other: array index recognition, array-element prefixes and
//! ancestor/descendant tests. Pointers are handled as plain `&str` values and
//! are never decoded, so rewriting a pointer preserves its exact spelling.
//!
//! # Example
//!
//! ```
//! use json_patch_ot_pointer::{is_equal_or_descendant, split_array_prefix};
//!
//! assert_eq!(split_array_prefix("/list/3"), Some(("/list/", 3)));
//! assert_eq!(split_array_prefix("/list/name"), None);
//!
//! assert!(is_equal_or_descendant("/list/3/title", "/list/3"));
//! assert!(!is_equal_or_descendant("/list/30", "/list/3"));
//! ```

pub mod util;
pub use util::{
    is_descendant, is_equal_or_descendant, is_root, is_valid_index, parse_index,
    split_array_prefix, split_index_token,
};

pub mod validate;
pub use validate::{validate_json_pointer, ValidationError};

/// Pointer addressing the whole document.
pub const ROOT: &str = "";
