//! Textual relations between JSON Pointer strings.

use crate::ROOT;

/// Check if a pointer addresses the document root.
///
/// # Example
///
/// ```
/// use json_patch_ot_pointer::is_root;
///
/// assert!(is_root(""));
/// assert!(!is_root("/"));
/// ```
pub fn is_root(pointer: &str) -> bool {
    pointer == ROOT
}

/// Parse a path token as an array index.
///
/// Only the canonical decimal spelling of a non-negative integer is accepted:
/// no sign, no leading zeros, no fraction. Tokens too large for `usize` are
/// rejected as well.
///
/// # Example
///
/// ```
/// use json_patch_ot_pointer::parse_index;
///
/// assert_eq!(parse_index("0"), Some(0));
/// assert_eq!(parse_index("42"), Some(42));
/// assert_eq!(parse_index("042"), None);
/// assert_eq!(parse_index("-1"), None);
/// assert_eq!(parse_index("-"), None);
/// ```
pub fn parse_index(token: &str) -> Option<usize> {
    let bytes = token.as_bytes();
    if bytes.is_empty() || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    // First char can't be leading zero unless it's just "0"
    if bytes.len() > 1 && bytes[0] == b'0' {
        return None;
    }
    token.parse().ok()
}

/// Check if a string represents a valid non-negative integer array index.
///
/// # Example
///
/// ```
/// use json_patch_ot_pointer::is_valid_index;
///
/// assert!(is_valid_index("0"));
/// assert!(is_valid_index("10"));
/// assert!(!is_valid_index(""));
/// assert!(!is_valid_index("04"));
/// assert!(!is_valid_index("4.5"));
/// assert!(!is_valid_index("wef"));
/// ```
pub fn is_valid_index(token: &str) -> bool {
    parse_index(token).is_some()
}

/// Split an array-element pointer into its array prefix and index.
///
/// The prefix keeps its trailing `/`, so `"/a/b/3"` yields `("/a/b/", 3)`.
/// Returns `None` when the last token is not a valid index, which covers
/// object keys and the root pointer (it has no last token at all).
pub fn split_array_prefix(pointer: &str) -> Option<(&str, usize)> {
    let last_slash = pointer.rfind('/')?;
    let (prefix, token) = pointer.split_at(last_slash + 1);
    parse_index(token).map(|index| (prefix, index))
}

/// Split the remainder of a pointer (the part after some prefix) into its
/// first token and everything after it.
///
/// ```
/// use json_patch_ot_pointer::split_index_token;
///
/// assert_eq!(split_index_token("4/sub/0"), ("4", "/sub/0"));
/// assert_eq!(split_index_token("4"), ("4", ""));
/// assert_eq!(split_index_token("4/"), ("4", "/"));
/// ```
pub fn split_index_token(rest: &str) -> (&str, &str) {
    match rest.find('/') {
        Some(end) => rest.split_at(end),
        None => (rest, ""),
    }
}

/// Check if `candidate` lies strictly below `ancestor`.
///
/// The root pointer is an ancestor of every non-empty pointer.
///
/// # Example
///
/// ```
/// use json_patch_ot_pointer::is_descendant;
///
/// assert!(is_descendant("/foo/bar", "/foo"));
/// assert!(is_descendant("/foo", ""));
/// assert!(!is_descendant("/foo", "/foo"));
/// assert!(!is_descendant("/foobar", "/foo"));
/// ```
pub fn is_descendant(candidate: &str, ancestor: &str) -> bool {
    candidate.len() > ancestor.len()
        && candidate.starts_with(ancestor)
        && candidate.as_bytes()[ancestor.len()] == b'/'
}

/// Check if `candidate` equals `ancestor` or lies below it.
pub fn is_equal_or_descendant(candidate: &str, ancestor: &str) -> bool {
    candidate == ancestor || is_descendant(candidate, ancestor)
}
