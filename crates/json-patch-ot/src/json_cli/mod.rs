//! `json-cli`: the logic behind the `json-patch-ot` binary.
//!
//! The binary transforms a proposed JSON Patch against an accepted one and
//! prints the result. Input comes either from two positional arguments
//! (accepted and proposed arrays) or, when none are given, from a JSON
//! envelope on stdin:
//!
//! ```json
//! { "accepted": [...], "proposed": [...], "options": { "redirectOnMove": true } }
//! ```

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::json_patch::types::PatchError;
use crate::json_patch_ot::{transform_json, TransformOptions};

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Patch(#[from] PatchError),
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid options: {0}")]
    Options(String),
    #[error("Unknown argument: {0}")]
    UnknownArgument(String),
    #[error("Expected either no patch arguments or both accepted and proposed patches")]
    MissingPatch,
}

// ── Arguments ─────────────────────────────────────────────────────────────

/// Parsed command line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Invocation {
    pub options: TransformOptions,
    /// Accepted and proposed patch arrays given as arguments.
    pub patches: Option<(String, String)>,
}

/// Parse the arguments following the program name.
///
/// Flags: `--accepted-wins-on-equal-path`, `--redirect-on-move`,
/// `--options '<json>'`. Flags only ever switch options on.
pub fn parse_args<I>(args: I) -> Result<Invocation, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut options = TransformOptions::default();
    let mut positional = Vec::new();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--accepted-wins-on-equal-path" => options.accepted_wins_on_equal_path = true,
            "--redirect-on-move" => options.redirect_on_move = true,
            "--options" => {
                let raw = args
                    .next()
                    .ok_or_else(|| CliError::Options("--options requires a value".into()))?;
                options = merge_options(options, parse_options(&raw)?);
            }
            flag if flag.starts_with("--") => {
                return Err(CliError::UnknownArgument(flag.to_string()))
            }
            other => positional.push(other.to_string()),
        }
    }
    let patches = match <[String; 2]>::try_from(positional) {
        Ok([accepted, proposed]) => Some((accepted, proposed)),
        Err(rest) if rest.is_empty() => None,
        Err(_) => return Err(CliError::MissingPatch),
    };
    Ok(Invocation { options, patches })
}

fn parse_options(raw: &str) -> Result<TransformOptions, CliError> {
    serde_json::from_str(raw).map_err(|e| CliError::Options(e.to_string()))
}

fn merge_options(a: TransformOptions, b: TransformOptions) -> TransformOptions {
    TransformOptions {
        accepted_wins_on_equal_path: a.accepted_wins_on_equal_path
            || b.accepted_wins_on_equal_path,
        redirect_on_move: a.redirect_on_move || b.redirect_on_move,
    }
}

// ── json-patch-ot ─────────────────────────────────────────────────────────

/// Transform two JSON Patch arrays given as strings.
///
/// Returns the transformed proposed patch as a pretty-printed JSON string.
pub fn transform_patches(
    accepted_json: &str,
    proposed_json: &str,
    options: &TransformOptions,
) -> Result<String, CliError> {
    let accepted: Value = serde_json::from_str(accepted_json)?;
    let proposed: Value = serde_json::from_str(proposed_json)?;
    let result = transform_json(&accepted, &proposed, options)?;
    Ok(serde_json::to_string_pretty(&result)?)
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Envelope {
    accepted: Value,
    proposed: Value,
    #[serde(default)]
    options: TransformOptions,
}

/// Transform the patches of a stdin envelope. Options in the envelope are
/// combined with the ones from the command line.
pub fn transform_envelope(input: &str, options: &TransformOptions) -> Result<String, CliError> {
    let envelope: Envelope = serde_json::from_str(input)?;
    let options = merge_options(*options, envelope.options);
    let result = transform_json(&envelope.accepted, &envelope.proposed, &options)?;
    Ok(serde_json::to_string_pretty(&result)?)
}

// ── Tests ─────────────────────────────────────────────────────────────────
