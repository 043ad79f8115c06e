// SPDX-License-Identifier: Apache-2.0

mod code;
mod item;

pub use code::{ErrorCode, Severity, UnknownErrorCode, ERROR_CODES};
pub use item::{ErrorItem, TBD};
