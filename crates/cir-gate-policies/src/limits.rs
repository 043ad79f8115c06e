// SPDX-License-Identifier: Apache-2.0

pub const MIN_ACCEPTANCE_CRITERIA_FLOOR: usize = 1;
pub const MIN_EXPECTED_OUTCOMES_FLOOR: usize = 1;
pub const MAX_TBD_DENSITY_RATIO_CEILING: f64 = 1.0;
