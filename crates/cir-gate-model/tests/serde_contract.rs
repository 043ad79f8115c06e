// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

use cir_gate_model::{
    decode_cir_json, decode_cir_value, AcceptanceCriterion, Cir, DecodeFailure, StatePersistence,
    StoryMetadata,
};
use serde_json::json;

fn fixture(path: &str) -> String {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    std::fs::read_to_string(root.join(path)).expect("read fixture")
}

fn minimal() -> serde_json::Value {
    json!({
        "story_metadata": {"story_id": "S-1", "name": "n"},
        "functional_requirements": [{
            "ac_id": "AC-1",
            "description": "d",
            "preconditions": [],
            "triggers": [],
            "expected_outcome": ["o"]
        }],
        "state_and_external_persistence": {"externalized_state_required": false, "rules": []}
    })
}

#[test]
fn login_fixture_decodes_in_array_order() {
    let cir = decode_cir_json(&fixture("tests/fixtures/login_story.json")).expect("decode");
    assert_eq!(cir.cir_version.as_deref(), Some("1"));
    assert_eq!(cir.story_metadata.story_id, "STORY-1042");
    let ids = cir
        .functional_requirements
        .iter()
        .map(|ac| ac.ac_id.as_str())
        .collect::<Vec<_>>();
    assert_eq!(ids, vec!["AC-1", "AC-2"]);
    assert!(cir.state_and_external_persistence.externalized_state_required);
}

#[test]
fn cir_version_is_an_explicit_optional() {
    let cir = decode_cir_value(minimal()).expect("decode");
    assert_eq!(cir.cir_version, None);
    let encoded = serde_json::to_value(&cir).expect("encode");
    assert!(encoded.get("cir_version").is_none());
}

#[test]
fn unknown_fields_are_rejected_at_every_level() {
    let mut top = minimal();
    top["extra"] = json!(1);
    assert_eq!(
        decode_cir_value(top).expect_err("top").failure,
        DecodeFailure::Shape
    );

    let mut ac = minimal();
    ac["functional_requirements"][0]["priority"] = json!("high");
    assert!(decode_cir_value(ac).is_err());

    let mut meta = minimal();
    meta["story_metadata"]["owner"] = json!("x");
    assert!(decode_cir_value(meta).is_err());
}

#[test]
fn missing_required_keys_are_not_defaulted() {
    let mut no_outcome = minimal();
    no_outcome["functional_requirements"][0]
        .as_object_mut()
        .expect("ac object")
        .remove("expected_outcome");
    let err = decode_cir_value(no_outcome).expect_err("missing key");
    assert_eq!(err.failure, DecodeFailure::Shape);
    assert!(err.message.contains("expected_outcome"));

    let mut no_rules = minimal();
    no_rules["state_and_external_persistence"]
        .as_object_mut()
        .expect("state object")
        .remove("rules");
    assert!(decode_cir_value(no_rules).is_err());
}

#[test]
fn wrong_value_kinds_are_boundary_violations() {
    let mut as_string = minimal();
    as_string["functional_requirements"][0]["expected_outcome"] = json!("o");
    assert_eq!(
        decode_cir_value(as_string).expect_err("kind").failure,
        DecodeFailure::Shape
    );

    let mut as_string_bool = minimal();
    as_string_bool["state_and_external_persistence"]["externalized_state_required"] =
        json!("yes");
    assert!(decode_cir_value(as_string_bool).is_err());

    let mut null_id = minimal();
    null_id["story_metadata"]["story_id"] = serde_json::Value::Null;
    assert!(decode_cir_value(null_id).is_err());
}

#[test]
fn builders_round_trip_through_json() {
    let cir = Cir::new(
        StoryMetadata::new("S-9", "Checkout"),
        vec![AcceptanceCriterion::new("AC-1", "pay")
            .with_triggers(["click pay"])
            .with_expected_outcome(["receipt shown"])],
        StatePersistence::new(true, ["order persisted"]),
    );
    let raw = serde_json::to_string(&cir).expect("encode");
    assert_eq!(decode_cir_json(&raw).expect("decode"), cir);
}
