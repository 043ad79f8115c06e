// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]
//! Shared vocabulary for CIR validation: the finding record, the closed error
//! code catalog, location pointers and canonical JSON hashing.

pub mod canonical;
mod errors;
mod location;

pub use crate::errors::{ErrorCode, ErrorItem, Severity, UnknownErrorCode, ERROR_CODES, TBD};
pub use crate::location::{format_location, Segment};

pub const CRATE_NAME: &str = "cir-gate-core";
