//! Codecs for JSON Patch operations.

pub mod json;
