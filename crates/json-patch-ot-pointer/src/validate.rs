//! Validation functions for JSON Pointer.

use thiserror::Error;

use crate::util::is_root;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("POINTER_INVALID")]
    PointerInvalid,
    #[error("POINTER_INVALID_ESCAPE")]
    InvalidEscape,
}

/// Validate a JSON Pointer string.
///
/// # Errors
///
/// Returns an error if:
/// - The pointer is non-empty but doesn't start with `/`
/// - A `~` is not followed by `0` or `1`
///
/// # Example
///
/// ```
/// use json_patch_ot_pointer::validate_json_pointer;
///
/// validate_json_pointer("").unwrap();  // Root is valid
/// validate_json_pointer("/foo/bar").unwrap();  // Valid absolute pointer
/// validate_json_pointer("foo").unwrap_err();  // Missing leading /
/// validate_json_pointer("/a~2b").unwrap_err();  // Bad escape
/// ```
pub fn validate_json_pointer(pointer: &str) -> Result<(), ValidationError> {
    if is_root(pointer) {
        return Ok(());
    }
    if !pointer.starts_with('/') {
        return Err(ValidationError::PointerInvalid);
    }
    let mut bytes = pointer.bytes();
    while let Some(b) = bytes.next() {
        if b == b'~' && !matches!(bytes.next(), Some(b'0' | b'1')) {
            return Err(ValidationError::InvalidEscape);
        }
    }
    Ok(())
}
