// SPDX-License-Identifier: Apache-2.0

use std::fmt::Write as _;

/// One step of a pointer-style location path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Segment<'a> {
    Field(&'a str),
    Index(usize),
}

/// Renders `segments` as a dotted/bracketed pointer such as
/// `functional_requirements[2].expected_outcome`.
///
/// Pure composition: the path is not checked against any document.
#[must_use]
pub fn format_location(segments: &[Segment<'_>]) -> String {
    let mut out = String::new();
    for segment in segments {
        match segment {
            Segment::Field(name) => {
                if !out.is_empty() {
                    out.push('.');
                }
                out.push_str(name);
            }
            Segment::Index(index) => {
                let _ = write!(&mut out, "[{index}]");
            }
        }
    }
    out
}
