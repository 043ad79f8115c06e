// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use serde::{Deserialize, Serialize};

use super::code::{ErrorCode, Severity};

/// Remediation placeholder used when no concrete fix is known.
pub const TBD: &str = "TBD";

/// One validation finding. Fields are read-only once built.
///
/// Decoding enforces the same rules as construction: severity must be the
/// catalog severity of `code`, and a blank fix reads back as [`TBD`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ErrorItemRecord")]
pub struct ErrorItem {
    code: ErrorCode,
    severity: Severity,
    location: String,
    message: String,
    suggested_fix: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    notes: Option<String>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ErrorItemRecord {
    code: ErrorCode,
    severity: Severity,
    location: String,
    message: String,
    suggested_fix: String,
    #[serde(default)]
    notes: Option<String>,
}

impl TryFrom<ErrorItemRecord> for ErrorItem {
    type Error = String;

    fn try_from(record: ErrorItemRecord) -> Result<Self, Self::Error> {
        if record.severity != record.code.severity() {
            return Err(format!(
                "{} is a {} finding, not {}",
                record.code,
                record.code.severity(),
                record.severity
            ));
        }
        let mut item = Self::new(record.code, record.location, record.message)
            .with_suggested_fix(record.suggested_fix);
        item.notes = record.notes;
        Ok(item)
    }
}

impl ErrorItem {
    /// Builds a finding with the catalog severity and default remediation of `code`.
    #[must_use]
    pub fn new(code: ErrorCode, location: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code,
            severity: code.severity(),
            location: location.into(),
            message: message.into(),
            suggested_fix: code.default_suggested_fix().to_string(),
            notes: None,
        }
    }

    /// Replaces the remediation text. Blank text becomes [`TBD`].
    #[must_use]
    pub fn with_suggested_fix(mut self, fix: impl Into<String>) -> Self {
        let fix = fix.into();
        self.suggested_fix = if fix.trim().is_empty() {
            TBD.to_string()
        } else {
            fix
        };
        self
    }

    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        self.code
    }

    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn suggested_fix(&self) -> &str {
        &self.suggested_fix
    }

    #[must_use]
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }
}

impl fmt::Display for ErrorItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] {}: {}",
            self.code, self.severity, self.location, self.message
        )
    }
}
