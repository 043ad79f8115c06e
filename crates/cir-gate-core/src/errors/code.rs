// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use serde::{Deserialize, Serialize};

/// Finding severity. Ordered `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Closed catalog of validation finding codes.
///
/// A published code string always denotes the same condition. New conditions
/// get new variants; existing variants are never repurposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ErrorCode {
    #[serde(rename = "VAL-META-001")]
    MissingStoryId,
    #[serde(rename = "VAL-META-002")]
    MissingStoryName,
    #[serde(rename = "VAL-AC-001")]
    TooFewAcceptanceCriteria,
    #[serde(rename = "VAL-AC-002")]
    TooManyAcceptanceCriteria,
    #[serde(rename = "VAL-AC-003")]
    AcMissingId,
    #[serde(rename = "VAL-AC-004")]
    AcMissingDescription,
    #[serde(rename = "VAL-AC-005")]
    AcMissingExpectedOutcome,
    #[serde(rename = "VAL-AC-006")]
    AcStepCountOverCap,
    #[serde(rename = "VAL-STATE-001")]
    ExternalizedStateWithoutRules,
    #[serde(rename = "VAL-TBD-001")]
    PlaceholdersNotAllowed,
    #[serde(rename = "VAL-TBD-002")]
    PlaceholderDensityOverThreshold,
}

/// Every catalog code in declaration order.
pub const ERROR_CODES: &[ErrorCode] = &[
    ErrorCode::MissingStoryId,
    ErrorCode::MissingStoryName,
    ErrorCode::TooFewAcceptanceCriteria,
    ErrorCode::TooManyAcceptanceCriteria,
    ErrorCode::AcMissingId,
    ErrorCode::AcMissingDescription,
    ErrorCode::AcMissingExpectedOutcome,
    ErrorCode::AcStepCountOverCap,
    ErrorCode::ExternalizedStateWithoutRules,
    ErrorCode::PlaceholdersNotAllowed,
    ErrorCode::PlaceholderDensityOverThreshold,
];

impl ErrorCode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MissingStoryId => "VAL-META-001",
            Self::MissingStoryName => "VAL-META-002",
            Self::TooFewAcceptanceCriteria => "VAL-AC-001",
            Self::TooManyAcceptanceCriteria => "VAL-AC-002",
            Self::AcMissingId => "VAL-AC-003",
            Self::AcMissingDescription => "VAL-AC-004",
            Self::AcMissingExpectedOutcome => "VAL-AC-005",
            Self::AcStepCountOverCap => "VAL-AC-006",
            Self::ExternalizedStateWithoutRules => "VAL-STATE-001",
            Self::PlaceholdersNotAllowed => "VAL-TBD-001",
            Self::PlaceholderDensityOverThreshold => "VAL-TBD-002",
        }
    }

    #[must_use]
    pub const fn severity(self) -> Severity {
        match self {
            Self::MissingStoryId
            | Self::MissingStoryName
            | Self::TooFewAcceptanceCriteria
            | Self::AcMissingId
            | Self::AcMissingDescription
            | Self::AcMissingExpectedOutcome
            | Self::PlaceholdersNotAllowed => Severity::High,
            Self::TooManyAcceptanceCriteria
            | Self::AcStepCountOverCap
            | Self::ExternalizedStateWithoutRules
            | Self::PlaceholderDensityOverThreshold => Severity::Medium,
        }
    }

    /// Short condition text as published in the catalog.
    #[must_use]
    pub const fn condition(self) -> &'static str {
        match self {
            Self::MissingStoryId => "missing story_id",
            Self::MissingStoryName => "missing story name",
            Self::TooFewAcceptanceCriteria => "too few acceptance criteria",
            Self::TooManyAcceptanceCriteria => "too many acceptance criteria",
            Self::AcMissingId => "AC missing id",
            Self::AcMissingDescription => "AC missing description",
            Self::AcMissingExpectedOutcome => "AC missing expected outcome",
            Self::AcStepCountOverCap => "AC step-count over cap",
            Self::ExternalizedStateWithoutRules => "externalized state required but no rules",
            Self::PlaceholdersNotAllowed => "placeholders present when disallowed",
            Self::PlaceholderDensityOverThreshold => "placeholder density over threshold",
        }
    }

    #[must_use]
    pub const fn default_suggested_fix(self) -> &'static str {
        match self {
            Self::MissingStoryId => "Provide the upstream story identifier in story_metadata.story_id.",
            Self::MissingStoryName => "Provide the story title in story_metadata.name.",
            Self::TooFewAcceptanceCriteria => {
                "Add acceptance criteria to functional_requirements or confirm the story is complete."
            }
            Self::TooManyAcceptanceCriteria => {
                "Review for over-segmentation; merge criteria that describe one behavior."
            }
            Self::AcMissingId => "Assign a stable ac_id to the acceptance criterion.",
            Self::AcMissingDescription => "Describe the behavior covered by the acceptance criterion.",
            Self::AcMissingExpectedOutcome => {
                "Add at least one observable expected_outcome entry."
            }
            Self::AcStepCountOverCap => {
                "Split the acceptance criterion into smaller criteria with fewer steps."
            }
            Self::ExternalizedStateWithoutRules => {
                "List the persistence rules in state_and_external_persistence.rules."
            }
            Self::PlaceholdersNotAllowed => {
                "Resolve every TBD/UNKNOWN value with the story owner before generation."
            }
            Self::PlaceholderDensityOverThreshold => {
                "Resolve open TBD/UNKNOWN values to reduce ambiguity before generation."
            }
        }
    }

    /// Parses a published code string such as `VAL-AC-003`.
    pub fn parse(raw: &str) -> Result<Self, UnknownErrorCode> {
        let trimmed = raw.trim();
        ERROR_CODES
            .iter()
            .copied()
            .find(|code| code.as_str() == trimmed)
            .ok_or_else(|| UnknownErrorCode(trimmed.to_string()))
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownErrorCode(pub String);

impl fmt::Display for UnknownErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown validation error code: {}", self.0)
    }
}

impl std::error::Error for UnknownErrorCode {}

#[cfg(test)]
mod tests {
    use super::{ErrorCode, Severity, ERROR_CODES};
    use std::collections::BTreeSet;

    #[test]
    fn catalog_strings_are_unique_and_parse_back() {
        let mut seen = BTreeSet::new();
        for code in ERROR_CODES {
            assert!(seen.insert(code.as_str()), "duplicate code {code}");
            assert_eq!(ErrorCode::parse(code.as_str()), Ok(*code));
        }
        assert_eq!(seen.len(), 11);
    }

    #[test]
    fn serde_name_matches_as_str() {
        for code in ERROR_CODES {
            let encoded = serde_json::to_string(code).expect("encode code");
            assert_eq!(encoded, format!("\"{}\"", code.as_str()));
        }
    }

    #[test]
    fn unknown_code_is_rejected() {
        let err = ErrorCode::parse("VAL-AC-999").expect_err("unknown code");
        assert_eq!(err.to_string(), "unknown validation error code: VAL-AC-999");
    }

    #[test]
    fn severity_ordering_is_low_to_high() {
        assert!(Severity::Low < Severity::Medium);
        assert!(Severity::Medium < Severity::High);
        assert_eq!(ErrorCode::AcStepCountOverCap.severity(), Severity::Medium);
        assert_eq!(ErrorCode::PlaceholdersNotAllowed.severity(), Severity::High);
    }
}
