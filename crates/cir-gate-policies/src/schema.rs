// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use crate::registry::ContractVersion;
use crate::validate::{ensure_frozen, validate_policy, PolicyError};

/// Versioned, immutable validation thresholds.
///
/// Values published under a [`ContractVersion`] are frozen: a policy that
/// behaves differently must carry a different version. Decoding runs the
/// same range and freeze checks as [`PolicyBuilder::build`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PolicyRecord")]
pub struct Policy {
    contract_version: ContractVersion,
    min_acceptance_criteria: usize,
    max_acceptance_criteria: usize,
    min_expected_outcomes_per_ac: usize,
    max_steps_like_items_per_ac: usize,
    allow_tbd_fields: bool,
    max_tbd_density_ratio: f64,
    require_rules_if_externalized_state: bool,
    require_story_name: bool,
    require_story_id: bool,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct PolicyRecord {
    contract_version: ContractVersion,
    min_acceptance_criteria: usize,
    max_acceptance_criteria: usize,
    min_expected_outcomes_per_ac: usize,
    max_steps_like_items_per_ac: usize,
    allow_tbd_fields: bool,
    max_tbd_density_ratio: f64,
    require_rules_if_externalized_state: bool,
    require_story_name: bool,
    require_story_id: bool,
}

impl TryFrom<PolicyRecord> for Policy {
    type Error = PolicyError;

    fn try_from(record: PolicyRecord) -> Result<Self, Self::Error> {
        let draft = Self {
            contract_version: record.contract_version,
            min_acceptance_criteria: record.min_acceptance_criteria,
            max_acceptance_criteria: record.max_acceptance_criteria,
            min_expected_outcomes_per_ac: record.min_expected_outcomes_per_ac,
            max_steps_like_items_per_ac: record.max_steps_like_items_per_ac,
            allow_tbd_fields: record.allow_tbd_fields,
            max_tbd_density_ratio: record.max_tbd_density_ratio,
            require_rules_if_externalized_state: record.require_rules_if_externalized_state,
            require_story_name: record.require_story_name,
            require_story_id: record.require_story_id,
        };
        let version = draft.contract_version.clone();
        PolicyBuilder { draft }.build(version)
    }
}

impl Policy {
    /// Canonical policy of contract `cir-validation/v1`.
    #[must_use]
    pub fn v1() -> Self {
        Self {
            contract_version: ContractVersion::V1,
            min_acceptance_criteria: 1,
            max_acceptance_criteria: 20,
            min_expected_outcomes_per_ac: 1,
            max_steps_like_items_per_ac: 15,
            allow_tbd_fields: true,
            max_tbd_density_ratio: 0.25,
            require_rules_if_externalized_state: true,
            require_story_name: true,
            require_story_id: true,
        }
    }

    /// Frozen canonical policy for a published version.
    #[must_use]
    pub fn for_version(version: &ContractVersion) -> Option<Self> {
        if *version == ContractVersion::V1 {
            Some(Self::v1())
        } else {
            None
        }
    }

    /// Starts a derived policy from this one's thresholds.
    #[must_use]
    pub fn to_builder(&self) -> PolicyBuilder {
        PolicyBuilder {
            draft: self.clone(),
        }
    }

    #[must_use]
    pub const fn contract_version(&self) -> &ContractVersion {
        &self.contract_version
    }

    #[must_use]
    pub const fn min_acceptance_criteria(&self) -> usize {
        self.min_acceptance_criteria
    }

    #[must_use]
    pub const fn max_acceptance_criteria(&self) -> usize {
        self.max_acceptance_criteria
    }

    #[must_use]
    pub const fn min_expected_outcomes_per_ac(&self) -> usize {
        self.min_expected_outcomes_per_ac
    }

    #[must_use]
    pub const fn max_steps_like_items_per_ac(&self) -> usize {
        self.max_steps_like_items_per_ac
    }

    #[must_use]
    pub const fn allow_tbd_fields(&self) -> bool {
        self.allow_tbd_fields
    }

    #[must_use]
    pub fn max_tbd_density_ratio(&self) -> f64 {
        self.max_tbd_density_ratio
    }

    #[must_use]
    pub const fn require_rules_if_externalized_state(&self) -> bool {
        self.require_rules_if_externalized_state
    }

    #[must_use]
    pub const fn require_story_name(&self) -> bool {
        self.require_story_name
    }

    #[must_use]
    pub const fn require_story_id(&self) -> bool {
        self.require_story_id
    }
}

impl Default for Policy {
    fn default() -> Self {
        Self::v1()
    }
}

/// Derives a new policy. [`PolicyBuilder::build`] mints it under a version.
#[derive(Debug, Clone)]
pub struct PolicyBuilder {
    draft: Policy,
}

impl PolicyBuilder {
    #[must_use]
    pub fn min_acceptance_criteria(mut self, value: usize) -> Self {
        self.draft.min_acceptance_criteria = value;
        self
    }

    #[must_use]
    pub fn max_acceptance_criteria(mut self, value: usize) -> Self {
        self.draft.max_acceptance_criteria = value;
        self
    }

    #[must_use]
    pub fn min_expected_outcomes_per_ac(mut self, value: usize) -> Self {
        self.draft.min_expected_outcomes_per_ac = value;
        self
    }

    #[must_use]
    pub fn max_steps_like_items_per_ac(mut self, value: usize) -> Self {
        self.draft.max_steps_like_items_per_ac = value;
        self
    }

    #[must_use]
    pub fn allow_tbd_fields(mut self, value: bool) -> Self {
        self.draft.allow_tbd_fields = value;
        self
    }

    #[must_use]
    pub fn max_tbd_density_ratio(mut self, value: f64) -> Self {
        self.draft.max_tbd_density_ratio = value;
        self
    }

    #[must_use]
    pub fn require_rules_if_externalized_state(mut self, value: bool) -> Self {
        self.draft.require_rules_if_externalized_state = value;
        self
    }

    #[must_use]
    pub fn require_story_name(mut self, value: bool) -> Self {
        self.draft.require_story_name = value;
        self
    }

    #[must_use]
    pub fn require_story_id(mut self, value: bool) -> Self {
        self.draft.require_story_id = value;
        self
    }

    /// Freezes the draft under `version`.
    ///
    /// Fails when thresholds are out of range, or when `version` is a
    /// published version whose frozen thresholds differ from the draft.
    pub fn build(mut self, version: ContractVersion) -> Result<Policy, PolicyError> {
        self.draft.contract_version = version;
        validate_policy(&self.draft)?;
        ensure_frozen(&self.draft)?;
        Ok(self.draft)
    }
}
