// SPDX-License-Identifier: Apache-2.0

use std::borrow::Cow;
use std::fmt;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::schema::Policy;
use crate::validate::{validate_policy, PolicyError};

/// Identifier pinning one frozen set of thresholds and error codes.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContractVersion(Cow<'static, str>);

impl ContractVersion {
    pub const V1: Self = Self(Cow::Borrowed("cir-validation/v1"));

    /// Version pinned by this build.
    pub const CURRENT: Self = Self::V1;

    /// Versions whose canonical policies are frozen in this crate.
    pub const PUBLISHED: &'static [Self] = &[Self::V1];

    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(Cow::Owned(raw.into()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_published(&self) -> bool {
        Self::PUBLISHED.contains(self)
    }
}

impl fmt::Display for ContractVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

static ACTIVE_POLICY: OnceLock<Policy> = OnceLock::new();

/// Process-wide active policy, set at most once at startup.
///
/// Validation never reads this; callers resolve the policy here and pass it in.
#[derive(Debug, Clone, Copy)]
pub struct ContractRegistry;

impl ContractRegistry {
    /// Installs `policy` as the process policy.
    ///
    /// Re-installing an identical policy is accepted; a different one is refused.
    pub fn install(policy: Policy) -> Result<&'static Policy, PolicyError> {
        validate_policy(&policy)?;
        let version = policy.contract_version().clone();
        match ACTIVE_POLICY.set(policy) {
            Ok(()) => {
                tracing::info!(contract_version = %version, "contract policy installed");
                Ok(Self::active())
            }
            Err(rejected) => {
                let active = Self::active();
                if *active == rejected {
                    Ok(active)
                } else {
                    Err(PolicyError(format!(
                        "contract policy already installed as {}; refusing {}",
                        active.contract_version(),
                        rejected.contract_version()
                    )))
                }
            }
        }
    }

    /// Installed policy, or the canonical policy of [`ContractVersion::CURRENT`].
    #[must_use]
    pub fn active() -> &'static Policy {
        ACTIVE_POLICY.get_or_init(Policy::v1)
    }

    #[must_use]
    pub fn active_version() -> &'static ContractVersion {
        Self::active().contract_version()
    }
}
