// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]
//! Deterministic structural validation of CIR documents.
//!
//! ```
//! use cir_gate_model::{AcceptanceCriterion, Cir, StatePersistence, StoryMetadata};
//! use cir_gate_policies::Policy;
//! use cir_gate_validate::{validate_cir, GateDecision};
//!
//! let cir = Cir::new(
//!     StoryMetadata::new("STORY-7", "Password reset"),
//!     vec![AcceptanceCriterion::new("AC-1", "Reset link is emailed")
//!         .with_triggers(["User requests a reset"])
//!         .with_expected_outcome(["Email with a single-use link is sent"])],
//!     StatePersistence::not_required(),
//! );
//! let report = validate_cir(&cir, &Policy::v1());
//! assert!(report.is_valid());
//! assert_eq!(report.gate(), GateDecision::Proceed);
//! ```

mod density;
mod report;
mod validator;

pub use density::{is_placeholder, placeholder_density, DensityCount};
pub use report::{ContractVersionMismatch, GateDecision, Report, ReportSummary};
pub use validator::{validate_cir, validate_cir_json, Validator};

pub const CRATE_NAME: &str = "cir-gate-validate";
