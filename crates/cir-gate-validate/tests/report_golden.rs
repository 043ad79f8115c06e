// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

use cir_gate_model::DecodeFailure;
use cir_gate_policies::{ContractVersion, Policy};
use cir_gate_validate::{validate_cir_json, GateDecision, Report, Validator};

fn fixture(path: &str) -> String {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    std::fs::read_to_string(root.join(path)).expect("read fixture")
}

#[test]
fn defective_story_report_matches_golden() {
    let report = validate_cir_json(&fixture("tests/fixtures/defective_story.json"), &Policy::v1())
        .expect("decode cir");
    let golden: serde_json::Value =
        serde_json::from_str(&fixture("tests/fixtures/defective_story.report.json"))
            .expect("golden");
    assert_eq!(serde_json::to_value(&report).expect("encode"), golden);
    assert_eq!(report.gate(), GateDecision::Block);
}

#[test]
fn golden_report_decodes_back_to_the_same_report() {
    let decoded: Report =
        serde_json::from_str(&fixture("tests/fixtures/defective_story.report.json"))
            .expect("decode report");
    let fresh = validate_cir_json(&fixture("tests/fixtures/defective_story.json"), &Policy::v1())
        .expect("decode cir");
    assert_eq!(decoded, fresh);
    assert_eq!(
        decoded.fingerprint().expect("hash decoded"),
        fresh.fingerprint().expect("hash fresh")
    );
}

#[test]
fn canonical_snapshot_is_byte_stable() {
    let raw = fixture("tests/fixtures/defective_story.json");
    let policy = Policy::v1();
    let validator = Validator::new(&policy);
    let first = validator.validate_json(&raw).expect("first");
    let second = validator.validate_json(&raw).expect("second");
    assert_eq!(
        first.canonical_json().expect("first json"),
        second.canonical_json().expect("second json")
    );
    assert_eq!(first.fingerprint().expect("h1").len(), 64);
}

#[test]
fn reports_from_another_contract_are_refused_by_pin_check() {
    let derived = Policy::v1()
        .to_builder()
        .max_tbd_density_ratio(0.5)
        .build(ContractVersion::new("cir-validation/v1-lenient-tbd"))
        .expect("policy");
    let report = validate_cir_json(&fixture("tests/fixtures/defective_story.json"), &derived)
        .expect("decode cir");
    assert!(report.warnings().iter().all(|w| w.code().as_str() != "VAL-TBD-002"));
    assert!(report.ensure_contract_version(&ContractVersion::CURRENT).is_err());
}

#[test]
fn malformed_cir_is_a_boundary_error_not_a_report() {
    let mut raw: serde_json::Value =
        serde_json::from_str(&fixture("tests/fixtures/defective_story.json")).expect("json");
    raw["functional_requirements"][0]["triggers"] = serde_json::json!(true);
    let err = validate_cir_json(&raw.to_string(), &Policy::v1()).expect_err("boundary");
    assert_eq!(err.failure, DecodeFailure::Shape);
}
