#![allow(dead_code)]

use json_patch_ot::{transform_json, TransformOptions};
use serde_json::Value;

pub fn xform(accepted: Value, proposed: Value) -> Value {
    xform_with(accepted, proposed, TransformOptions::default())
}

pub fn xform_with(accepted: Value, proposed: Value, options: TransformOptions) -> Value {
    transform_json(&accepted, &proposed, &options).expect("fixtures are well-formed patches")
}

pub fn accepted_wins() -> TransformOptions {
    TransformOptions::new().with_accepted_wins_on_equal_path(true)
}

pub fn redirect() -> TransformOptions {
    TransformOptions::new().with_redirect_on_move(true)
}
