// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use cir_gate_core::canonical::{canonical_fingerprint, canonical_json_pretty};
use cir_gate_core::{ErrorCode, ErrorItem, Severity};
use cir_gate_policies::ContractVersion;
use serde::{Deserialize, Serialize};

/// Outcome of one validation call.
///
/// `is_valid` is derived: it is true exactly when `errors` is empty. Warnings
/// never affect validity. Both lists are in traversal order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ReportRecord")]
pub struct Report {
    contract_version: ContractVersion,
    is_valid: bool,
    errors: Vec<ErrorItem>,
    warnings: Vec<ErrorItem>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ReportRecord {
    contract_version: ContractVersion,
    is_valid: bool,
    errors: Vec<ErrorItem>,
    warnings: Vec<ErrorItem>,
}

impl TryFrom<ReportRecord> for Report {
    type Error = String;

    fn try_from(record: ReportRecord) -> Result<Self, Self::Error> {
        if record.is_valid != record.errors.is_empty() {
            return Err(format!(
                "is_valid={} contradicts {} recorded errors",
                record.is_valid,
                record.errors.len()
            ));
        }
        Ok(Self::freeze(
            record.contract_version,
            record.errors,
            record.warnings,
        ))
    }
}

/// Downstream gate derived from a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum GateDecision {
    Proceed,
    /// Soft gate: valid, but warnings should reach a human.
    ProceedWithReview,
    /// Hard gate: generation must not run.
    Block,
}

impl GateDecision {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Proceed => "proceed",
            Self::ProceedWithReview => "proceed_with_review",
            Self::Block => "block",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportSummary {
    pub errors: usize,
    pub warnings: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractVersionMismatch {
    pub pinned: ContractVersion,
    pub actual: ContractVersion,
}

impl fmt::Display for ContractVersionMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "report contract version {} does not match pinned version {}",
            self.actual, self.pinned
        )
    }
}

impl std::error::Error for ContractVersionMismatch {}

impl Report {
    pub(crate) fn freeze(
        contract_version: ContractVersion,
        errors: Vec<ErrorItem>,
        warnings: Vec<ErrorItem>,
    ) -> Self {
        Self {
            contract_version,
            is_valid: errors.is_empty(),
            errors,
            warnings,
        }
    }

    #[must_use]
    pub const fn contract_version(&self) -> &ContractVersion {
        &self.contract_version
    }

    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.is_valid
    }

    #[must_use]
    pub fn errors(&self) -> &[ErrorItem] {
        &self.errors
    }

    #[must_use]
    pub fn warnings(&self) -> &[ErrorItem] {
        &self.warnings
    }

    /// Codes of all findings, errors first.
    pub fn codes(&self) -> impl Iterator<Item = ErrorCode> + '_ {
        self.errors
            .iter()
            .chain(self.warnings.iter())
            .map(ErrorItem::code)
    }

    #[must_use]
    pub fn has_code(&self, code: ErrorCode) -> bool {
        self.codes().any(|c| c == code)
    }

    #[must_use]
    pub fn summary(&self) -> ReportSummary {
        let mut summary = ReportSummary {
            errors: self.errors.len(),
            warnings: self.warnings.len(),
            high: 0,
            medium: 0,
            low: 0,
        };
        for item in self.errors.iter().chain(self.warnings.iter()) {
            match item.severity() {
                Severity::High => summary.high += 1,
                Severity::Medium => summary.medium += 1,
                _ => summary.low += 1,
            }
        }
        summary
    }

    #[must_use]
    pub fn gate(&self) -> GateDecision {
        if !self.is_valid {
            GateDecision::Block
        } else if self.warnings.is_empty() {
            GateDecision::Proceed
        } else {
            GateDecision::ProceedWithReview
        }
    }

    /// Refuses a report produced under a different contract than `pinned`.
    pub fn ensure_contract_version(
        &self,
        pinned: &ContractVersion,
    ) -> Result<(), ContractVersionMismatch> {
        if self.contract_version == *pinned {
            return Ok(());
        }
        Err(ContractVersionMismatch {
            pinned: pinned.clone(),
            actual: self.contract_version.clone(),
        })
    }

    /// Key-sorted pretty JSON for snapshot files.
    pub fn canonical_json(&self) -> Result<String, serde_json::Error> {
        canonical_json_pretty(self)
    }

    /// sha256 of the canonical JSON encoding.
    pub fn fingerprint(&self) -> Result<String, serde_json::Error> {
        canonical_fingerprint(self)
    }
}
