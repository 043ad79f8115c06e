// SPDX-License-Identifier: Apache-2.0

use serde::Serialize;

const PLACEHOLDER_PREFIXES: [&str; 2] = ["TBD", "UNKNOWN"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DensityCount {
    pub placeholder_count: usize,
    pub total_count: usize,
}

impl DensityCount {
    /// `None` for an empty pool.
    #[must_use]
    pub fn ratio(self) -> Option<f64> {
        if self.total_count == 0 {
            return None;
        }
        Some(self.placeholder_count as f64 / self.total_count as f64)
    }
}

/// True when `value`, trimmed and upper-cased, equals or starts with `TBD` or `UNKNOWN`.
#[must_use]
pub fn is_placeholder(value: &str) -> bool {
    let normalized = value.trim().to_uppercase();
    PLACEHOLDER_PREFIXES
        .iter()
        .any(|prefix| normalized.starts_with(prefix))
}

/// Counts placeholders over `values`. Blank strings carry no content and are
/// left out of both counts.
#[must_use]
pub fn placeholder_density<'a, I>(values: I) -> DensityCount
where
    I: IntoIterator<Item = &'a str>,
{
    let mut count = DensityCount {
        placeholder_count: 0,
        total_count: 0,
    };
    for value in values {
        if value.trim().is_empty() {
            continue;
        }
        count.total_count += 1;
        if is_placeholder(value) {
            count.placeholder_count += 1;
        }
    }
    count
}
