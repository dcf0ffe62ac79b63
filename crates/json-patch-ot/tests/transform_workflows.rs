mod common;

use common::{accepted_wins, redirect, xform, xform_with};
use json_patch_ot::{transform_json, PatchError, TransformOptions};
use serde_json::json;

#[test]
fn remove_cancels_changes_at_the_same_level() {
    let accepted = json!([
        {"op": "remove", "path": "/toremove"},
        {"op": "remove", "path": "/removed/array/3"}
    ]);
    let proposed = json!([
        {"op": "replace", "path": "/some/other", "value": 3},
        {"op": "replace", "path": "/toremove", "value": 86},
        {"op": "replace", "path": "/removed/array/3", "value": 86}
    ]);
    assert_eq!(
        xform(accepted, proposed),
        json!([{"op": "replace", "path": "/some/other", "value": 3}])
    );
}

#[test]
fn replace_cancels_equal_path_when_accepted_wins() {
    let accepted = json!([{"op": "replace", "path": "/toreplace", "value": "new val"}]);
    let proposed = json!([
        {"op": "replace", "path": "/some/other", "value": 3},
        {"op": "replace", "path": "/toreplace", "value": "something else"}
    ]);
    assert_eq!(
        xform_with(accepted, proposed, accepted_wins()),
        json!([{"op": "replace", "path": "/some/other", "value": 3}])
    );
}

#[test]
fn add_cancels_equal_paths_when_accepted_wins() {
    let accepted = json!([
        {"op": "add", "path": "/something/else", "value": "new val"},
        {"op": "add", "path": "/something/here", "value": "new val"},
        {"op": "add", "path": "/another", "value": "hello"}
    ]);
    let proposed = json!([
        {"op": "add", "path": "/something/else", "value": "change name"},
        {"op": "add", "path": "/something/here", "value": "something else"}
    ]);
    assert_eq!(xform_with(accepted, proposed, accepted_wins()), json!([]));
}

#[test]
fn root_remove_cancels_root_replace() {
    let accepted = json!([{"op": "remove", "path": ""}]);
    let proposed = json!([{"op": "replace", "path": "", "value": "change name"}]);
    assert_eq!(xform(accepted, proposed), json!([]));
}

#[test]
fn root_replace_cancels_everything_below() {
    let accepted = json!([{"op": "replace", "path": "", "value": {}}]);
    let proposed = json!([
        {"op": "add", "path": "/title", "value": "x"},
        {"op": "copy", "path": "", "from": "/a"},
        {"op": "test", "path": "", "value": {}}
    ]);
    assert_eq!(
        xform(accepted, proposed),
        json!([{"op": "test", "path": "", "value": {}}])
    );
}

#[test]
fn add_to_the_same_path() {
    let accepted = json!([{"op": "add", "path": "/title", "value": "Hello!"}]);
    let proposed = json!([{"op": "add", "path": "/title", "value": "Hi World!"}]);
    assert_eq!(xform(accepted.clone(), proposed.clone()), proposed);
    assert_eq!(xform_with(accepted, proposed, accepted_wins()), json!([]));
}

#[test]
fn multiple_removes_shift_indices() {
    let accepted = json!([
        {"op": "remove", "path": "/array/3"},
        {"op": "remove", "path": "/array/5"}
    ]);
    let proposed = json!([
        {"op": "replace", "path": "/array/4", "value": "change name"},
        {"op": "replace", "path": "/array/7", "value": "change name"}
    ]);
    assert_eq!(
        xform(accepted, proposed),
        json!([
            {"op": "replace", "path": "/array/3", "value": "change name"},
            {"op": "replace", "path": "/array/5", "value": "change name"}
        ])
    );
}

#[test]
fn accepted_adds_shift_indices() {
    // [0, 1, 2, 3, 4, 5, 6] -> [0, 1, 2, 20, 3, 30, 4, 5, 6]
    let accepted = json!([
        {"op": "add", "path": "/array/3", "value": 20},
        {"op": "add", "path": "/array/5", "value": 30}
    ]);
    let proposed = json!([
        {"op": "replace", "path": "/array/3", "value": 6},
        {"op": "replace", "path": "/array/4", "value": 8},
        {"op": "replace", "path": "/array/6", "value": 12}
    ]);
    assert_eq!(
        xform(accepted, proposed),
        json!([
            {"op": "replace", "path": "/array/4", "value": 6},
            {"op": "replace", "path": "/array/6", "value": 8},
            {"op": "replace", "path": "/array/8", "value": 12}
        ])
    );
}

#[test]
fn accepted_adds_and_removes_shift_indices() {
    // [0, 1, 2, 3, 4, 5, 6] -> [0, 2, 3, 30, 4, 5, 6]
    let accepted = json!([
        {"op": "remove", "path": "/array/1"},
        {"op": "add", "path": "/array/3", "value": 30}
    ]);
    let proposed = json!([
        {"op": "replace", "path": "/array/2", "value": 4},
        {"op": "replace", "path": "/array/1", "value": 2},
        {"op": "replace", "path": "/array/5", "value": 10}
    ]);
    assert_eq!(
        xform(accepted, proposed),
        json!([
            {"op": "replace", "path": "/array/1", "value": 4},
            {"op": "replace", "path": "/array/5", "value": 10}
        ])
    );
}

#[test]
fn trailing_slash_survives_shift() {
    let accepted = json!([{"op": "add", "path": "/some/where/1", "value": 0}]);
    let proposed = json!([{"op": "remove", "path": "/some/where/2/"}]);
    assert_eq!(
        xform(accepted, proposed),
        json!([{"op": "remove", "path": "/some/where/3/"}])
    );
}

#[test]
fn non_index_tokens_are_not_shifted() {
    let accepted = json!([{"op": "remove", "path": "/array/1"}]);
    let proposed = json!([
        {"op": "replace", "path": "/array/04", "value": 1},
        {"op": "replace", "path": "/array/-", "value": 1},
        {"op": "replace", "path": "/array/four", "value": 1}
    ]);
    assert_eq!(xform(accepted, proposed.clone()), proposed);
}

#[test]
fn accepted_test_changes_nothing() {
    let accepted = json!([{"op": "test", "path": "/a", "value": 1}]);
    let proposed = json!([
        {"op": "remove", "path": "/a"},
        {"op": "replace", "path": "/a/b", "value": 1}
    ]);
    assert_eq!(xform_with(accepted, proposed.clone(), accepted_wins()), proposed);
}

// ── Move ──────────────────────────────────────────────────────────────────

#[test]
fn move_without_redirect_cancels_the_moved_subtree() {
    let accepted = json!([{"op": "move", "from": "/drafts/a", "path": "/posts/a"}]);
    let proposed = json!([
        {"op": "replace", "path": "/drafts/a/title", "value": "x"},
        {"op": "copy", "path": "/backup", "from": "/drafts/a"},
        {"op": "replace", "path": "/drafts/b", "value": "y"}
    ]);
    assert_eq!(
        xform(accepted, proposed),
        json!([{"op": "replace", "path": "/drafts/b", "value": "y"}])
    );
}

#[test]
fn move_with_redirect_follows_the_subtree() {
    let accepted = json!([{"op": "move", "from": "/drafts/a", "path": "/posts/a"}]);
    let proposed = json!([
        {"op": "replace", "path": "/drafts/a/title", "value": "x"},
        {"op": "copy", "path": "/backup", "from": "/drafts/a"},
        {"op": "replace", "path": "/drafts/ab", "value": "y"}
    ]);
    assert_eq!(
        xform_with(accepted, proposed, redirect()),
        json!([
            {"op": "replace", "path": "/posts/a/title", "value": "x"},
            {"op": "copy", "path": "/backup", "from": "/posts/a"},
            {"op": "replace", "path": "/drafts/ab", "value": "y"}
        ])
    );
}

#[test]
fn move_acts_as_remove_then_add() {
    let proposed = json!([{"op": "replace", "path": "/array/5", "value": 1}]);
    let out_of_array = json!([{"op": "move", "from": "/array/5", "path": "/someval"}]);
    assert_eq!(xform(out_of_array, proposed), json!([]));

    let proposed = json!([{"op": "replace", "path": "/array/3", "value": 1}]);
    let into_array = json!([{"op": "move", "from": "/someval", "path": "/array/3"}]);
    assert_eq!(
        xform(into_array, proposed),
        json!([{"op": "replace", "path": "/array/4", "value": 1}])
    );
}

#[test]
fn add_shifts_a_from_at_the_same_slot() {
    let accepted = json!([{"op": "add", "path": "/list/1", "value": "new"}]);
    let proposed = json!([{"op": "move", "from": "/list/1", "path": "/picked"}]);
    assert_eq!(
        xform(accepted, proposed),
        json!([{"op": "move", "from": "/list/2", "path": "/picked"}])
    );
}

#[test]
fn move_keeps_add_and_test_at_the_vacated_source() {
    let accepted = json!([{"op": "move", "from": "/a", "path": "/b"}]);
    let proposed = json!([
        {"op": "add", "path": "/a", "value": 1},
        {"op": "test", "path": "/a", "value": 1},
        {"op": "replace", "path": "/a", "value": 2}
    ]);
    assert_eq!(
        xform(accepted, proposed),
        json!([
            {"op": "add", "path": "/a", "value": 1},
            {"op": "test", "path": "/a", "value": 1}
        ])
    );
}

#[test]
fn move_between_arrays_shifts_both() {
    // left: [a, b, c], right: [x, y]; move /left/0 -> /right/1
    let accepted = json!([{"op": "move", "from": "/left/0", "path": "/right/1"}]);
    let proposed = json!([
        {"op": "replace", "path": "/left/2", "value": "C"},
        {"op": "replace", "path": "/right/1", "value": "Y"},
        {"op": "replace", "path": "/right/0", "value": "X"}
    ]);
    assert_eq!(
        xform(accepted, proposed),
        json!([
            {"op": "replace", "path": "/left/1", "value": "C"},
            {"op": "replace", "path": "/right/2", "value": "Y"},
            {"op": "replace", "path": "/right/0", "value": "X"}
        ])
    );
}

#[test]
fn redirected_array_item_is_not_shifted_again() {
    // [a, b, c, d, e] -> [b, c, d, a, e]
    let accepted = json!([{"op": "move", "from": "/list/0", "path": "/list/3"}]);
    let proposed = json!([
        {"op": "replace", "path": "/list/0/name", "value": "a"},
        {"op": "replace", "path": "/list/3", "value": "d"}
    ]);
    assert_eq!(
        xform_with(accepted, proposed, redirect()),
        json!([
            {"op": "replace", "path": "/list/3/name", "value": "a"},
            {"op": "replace", "path": "/list/2", "value": "d"}
        ])
    );
}

// ── Wire format ───────────────────────────────────────────────────────────

#[test]
fn ids_and_unknown_members_are_preserved() {
    let accepted = json!([{"op": "remove", "path": "/l/0", "id": 1}]);
    let proposed = json!([
        {"op": "replace", "path": "/l/0", "value": 1, "id": 2},
        {"op": "replace", "path": "/l/3", "value": 2, "oldValue": 9, "id": 3, "author": "ana"}
    ]);
    assert_eq!(
        xform(accepted, proposed),
        json!([{"op": "replace", "path": "/l/2", "value": 2, "oldValue": 9, "id": 3, "author": "ana"}])
    );
}

#[test]
fn long_pointers_are_accepted() {
    let key = "k".repeat(1100);
    let accepted = json!([{"op": "remove", "path": "/list/0"}]);
    let proposed = json!([
        {"op": "replace", "path": format!("/{key}"), "value": 1},
        {"op": "replace", "path": format!("/list/2/{key}"), "value": 2}
    ]);
    assert_eq!(
        xform(accepted, proposed),
        json!([
            {"op": "replace", "path": format!("/{key}"), "value": 1},
            {"op": "replace", "path": format!("/list/1/{key}"), "value": 2}
        ])
    );
}

#[test]
fn inputs_are_not_mutated() {
    let accepted = json!([{"op": "remove", "path": "/l/0"}]);
    let proposed = json!([{"op": "replace", "path": "/l/3", "value": 2}]);
    let (a, p) = (accepted.clone(), proposed.clone());
    transform_json(&accepted, &proposed, &TransformOptions::default()).unwrap();
    assert_eq!(accepted, a);
    assert_eq!(proposed, p);
}

#[test]
fn malformed_operations_are_rejected() {
    let options = TransformOptions::default();
    let cases = [
        json!({"op": "remove"}),
        json!([{"op": "frobnicate", "path": "/a"}]),
        json!([{"op": "add", "path": "/a"}]),
        json!([{"op": "move", "path": "/a"}]),
        json!([{"op": "remove", "path": "a"}]),
        json!([{"op": "remove", "path": "/a~2"}]),
        json!([42]),
    ];
    for proposed in cases {
        let err = transform_json(&json!([]), &proposed, &options).unwrap_err();
        assert!(
            matches!(err, PatchError::InvalidOp(_) | PatchError::InvalidPointer { .. }),
            "{proposed}: {err:?}"
        );
    }
}
