// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::path::PathBuf;

#[test]
fn public_api_doc_matches_export_surface() {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let api_doc = fs::read_to_string(manifest_dir.join("docs/public-api.md"))
        .expect("read docs/public-api.md");
    let lib_rs = fs::read_to_string(manifest_dir.join("src/lib.rs")).expect("read src/lib.rs");

    for item in [
        "CRATE_NAME",
        "ErrorCode",
        "ERROR_CODES",
        "UnknownErrorCode",
        "Severity",
        "ErrorItem",
        "TBD",
        "Segment",
        "format_location",
        "canonical` module",
    ] {
        assert!(api_doc.contains(item), "public api doc missing: {item}");
    }

    for token in [
        "pub mod canonical;",
        "pub const CRATE_NAME",
        "pub use crate::errors::{ErrorCode, ErrorItem, Severity, UnknownErrorCode, ERROR_CODES, TBD};",
        "pub use crate::location::{format_location, Segment};",
    ] {
        assert!(lib_rs.contains(token), "lib.rs export contract missing: {token}");
    }
}
