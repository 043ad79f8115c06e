// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::path::{Path, PathBuf};

use crate::schema::Policy;
use crate::validate::{parse_policy_json, PolicyError};

const POLICY_CONFIG_PATH: &str = "configs/policy/validation-policy.json";
const POLICY_SCHEMA_PATH: &str = "configs/policy/validation-policy.schema.json";

#[must_use]
pub fn policy_config_path(root: &Path) -> PathBuf {
    root.join(POLICY_CONFIG_PATH)
}

#[must_use]
pub fn policy_schema_path(root: &Path) -> PathBuf {
    root.join(POLICY_SCHEMA_PATH)
}

/// Reads and validates the workspace policy document. Intended for process startup.
pub fn load_policy_from_workspace(root: &Path) -> Result<Policy, PolicyError> {
    let config_path = policy_config_path(root);
    let config_raw = fs::read_to_string(&config_path)
        .map_err(|e| PolicyError(format!("read policy config failed: {e}")))?;
    let schema_raw = fs::read_to_string(policy_schema_path(root))
        .map_err(|e| PolicyError(format!("read policy schema failed: {e}")))?;

    let policy = parse_policy_json(&config_raw, &schema_raw)?;
    tracing::info!(
        contract_version = %policy.contract_version(),
        path = %config_path.display(),
        "validation policy loaded"
    );
    Ok(policy)
}
