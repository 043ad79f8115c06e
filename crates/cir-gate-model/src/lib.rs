// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]
//! Closed data model of the Canonical Intermediate Representation (CIR).
//!
//! ```compile_fail
//! use cir_gate_model::DecodeFailure;
//!
//! fn exhaustive_match(f: DecodeFailure) -> &'static str {
//!     match f {
//!         DecodeFailure::Syntax => "s",
//!         DecodeFailure::Eof => "e",
//!         DecodeFailure::Shape => "d",
//!     }
//! }
//! ```

mod cir;
mod decode;

pub use cir::{AcceptanceCriterion, Cir, StatePersistence, StoryMetadata};
pub use decode::{decode_cir_json, decode_cir_value, CirDecodeError, DecodeFailure};

pub const CRATE_NAME: &str = "cir-gate-model";
