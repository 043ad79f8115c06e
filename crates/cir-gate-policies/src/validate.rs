// SPDX-License-Identifier: Apache-2.0

use cir_gate_core::canonical::canonical_json_pretty;
use serde_json::Value;

use crate::limits::{
    MAX_TBD_DENSITY_RATIO_CEILING, MIN_ACCEPTANCE_CRITERIA_FLOOR, MIN_EXPECTED_OUTCOMES_FLOOR,
};
use crate::registry::ContractVersion;
use crate::schema::Policy;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyError(pub String);

impl std::fmt::Display for PolicyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for PolicyError {}

/// Range checks on thresholds. Does not consult the published registry.
pub fn validate_policy(policy: &Policy) -> Result<(), PolicyError> {
    if policy.contract_version().as_str().trim().is_empty() {
        return Err(PolicyError(
            "contract_version must not be empty".to_string(),
        ));
    }
    if policy.min_acceptance_criteria() < MIN_ACCEPTANCE_CRITERIA_FLOOR {
        return Err(PolicyError(format!(
            "min_acceptance_criteria must be >= {MIN_ACCEPTANCE_CRITERIA_FLOOR}"
        )));
    }
    if policy.max_acceptance_criteria() < policy.min_acceptance_criteria() {
        return Err(PolicyError(format!(
            "max_acceptance_criteria ({}) must be >= min_acceptance_criteria ({})",
            policy.max_acceptance_criteria(),
            policy.min_acceptance_criteria()
        )));
    }
    if policy.min_expected_outcomes_per_ac() < MIN_EXPECTED_OUTCOMES_FLOOR {
        return Err(PolicyError(format!(
            "min_expected_outcomes_per_ac must be >= {MIN_EXPECTED_OUTCOMES_FLOOR}"
        )));
    }
    if policy.max_steps_like_items_per_ac() < policy.min_expected_outcomes_per_ac() {
        return Err(PolicyError(format!(
            "max_steps_like_items_per_ac ({}) must be >= min_expected_outcomes_per_ac ({})",
            policy.max_steps_like_items_per_ac(),
            policy.min_expected_outcomes_per_ac()
        )));
    }
    let ratio = policy.max_tbd_density_ratio();
    if !ratio.is_finite() || !(0.0..=MAX_TBD_DENSITY_RATIO_CEILING).contains(&ratio) {
        return Err(PolicyError(format!(
            "max_tbd_density_ratio must be within [0, {MAX_TBD_DENSITY_RATIO_CEILING}], got {ratio}"
        )));
    }
    Ok(())
}

/// A policy carrying a published version must match that version's frozen thresholds.
pub fn ensure_frozen(policy: &Policy) -> Result<(), PolicyError> {
    let Some(canonical) = Policy::for_version(policy.contract_version()) else {
        return Ok(());
    };
    if canonical_policy_json(&canonical)? != canonical_policy_json(policy)? {
        return Err(PolicyError(format!(
            "contract version {} is frozen; changed thresholds require a new contract version",
            policy.contract_version()
        )));
    }
    Ok(())
}

pub fn validate_policy_change_requires_version_bump(
    old: &Policy,
    new: &Policy,
) -> Result<(), PolicyError> {
    let old_json = canonical_policy_json(old)?;
    let new_json = canonical_policy_json(new)?;
    if old_json != new_json && old.contract_version() == new.contract_version() {
        return Err(PolicyError(
            "policy content changed without contract_version bump".to_string(),
        ));
    }
    Ok(())
}

pub fn canonical_policy_json(policy: &Policy) -> Result<String, PolicyError> {
    canonical_json_pretty(policy).map_err(|e| PolicyError(format!("encode policy failed: {e}")))
}

/// Decodes a policy document and checks it against the schema's pinned version.
///
/// Range and freeze checks run as part of decoding [`Policy`].
pub fn parse_policy_json(config_raw: &str, schema_raw: &str) -> Result<Policy, PolicyError> {
    let config_val: Value = serde_json::from_str(config_raw)
        .map_err(|e| PolicyError(format!("parse policy config failed: {e}")))?;
    let schema_val: Value = serde_json::from_str(schema_raw)
        .map_err(|e| PolicyError(format!("parse policy schema failed: {e}")))?;

    let pinned = decode_schema_version(&schema_val)?;
    let policy: Policy = serde_json::from_value(config_val)
        .map_err(|e| PolicyError(format!("decode policy config failed: {e}")))?;

    if *policy.contract_version() != pinned {
        return Err(PolicyError(format!(
            "policy contract_version {} does not match schema const {}",
            policy.contract_version(),
            pinned
        )));
    }
    Ok(policy)
}

pub(crate) fn decode_schema_version(schema: &Value) -> Result<ContractVersion, PolicyError> {
    let root = schema
        .as_object()
        .ok_or_else(|| PolicyError("policy schema must be object".to_string()))?;
    let props = root
        .get("properties")
        .and_then(Value::as_object)
        .ok_or_else(|| PolicyError("schema missing properties".to_string()))?;
    let pinned = props
        .get("contract_version")
        .and_then(Value::as_object)
        .and_then(|p| p.get("const"))
        .and_then(Value::as_str)
        .ok_or_else(|| {
            PolicyError("schema properties.contract_version.const missing".to_string())
        })?;

    let version = ContractVersion::new(pinned);
    if !version.is_published() {
        return Err(PolicyError(format!(
            "unsupported contract version const: {pinned}"
        )));
    }
    Ok(version)
}
