// SPDX-License-Identifier: Apache-2.0

use std::fmt::{Display, Formatter};

use serde_json::error::Category;
use serde_json::Value;

use crate::cir::Cir;

/// Why a payload was refused at the boundary, before any validation ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum DecodeFailure {
    /// Not well-formed JSON.
    Syntax,
    /// Truncated input.
    Eof,
    /// Valid JSON with the wrong shape: missing key, unknown key or wrong kind.
    Shape,
}

impl DecodeFailure {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Syntax => "syntax",
            Self::Eof => "eof",
            Self::Shape => "shape",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CirDecodeError {
    pub failure: DecodeFailure,
    pub line: usize,
    pub column: usize,
    pub message: String,
}

impl Display for CirDecodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.line == 0 {
            write!(f, "cir {} error: {}", self.failure.as_str(), self.message)
        } else {
            write!(
                f,
                "cir {} error at line {} column {}: {}",
                self.failure.as_str(),
                self.line,
                self.column,
                self.message
            )
        }
    }
}

impl std::error::Error for CirDecodeError {}

impl From<serde_json::Error> for CirDecodeError {
    fn from(err: serde_json::Error) -> Self {
        let failure = match err.classify() {
            Category::Eof => DecodeFailure::Eof,
            Category::Syntax | Category::Io => DecodeFailure::Syntax,
            Category::Data => DecodeFailure::Shape,
        };
        Self {
            failure,
            line: err.line(),
            column: err.column(),
            message: err.to_string(),
        }
    }
}

/// Decodes a CIR document. Any shape mismatch is a caller-contract violation.
pub fn decode_cir_json(raw: &str) -> Result<Cir, CirDecodeError> {
    Ok(serde_json::from_str(raw)?)
}

pub fn decode_cir_value(value: Value) -> Result<Cir, CirDecodeError> {
    Ok(serde_json::from_value(value)?)
}
