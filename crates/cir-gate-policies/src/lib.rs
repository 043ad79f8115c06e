// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]

mod adapters;
mod limits;
mod registry;
mod schema;
mod validate;

pub use adapters::{load_policy_from_workspace, policy_config_path, policy_schema_path};
pub use limits::{
    MAX_TBD_DENSITY_RATIO_CEILING, MIN_ACCEPTANCE_CRITERIA_FLOOR, MIN_EXPECTED_OUTCOMES_FLOOR,
};
pub use registry::{ContractRegistry, ContractVersion};
pub use schema::{Policy, PolicyBuilder};
pub use validate::{
    canonical_policy_json, ensure_frozen, parse_policy_json, validate_policy,
    validate_policy_change_requires_version_bump, PolicyError,
};

pub const CRATE_NAME: &str = "cir-gate-policies";
