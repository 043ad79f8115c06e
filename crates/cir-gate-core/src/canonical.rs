// SPDX-License-Identifier: Apache-2.0

//! Canonical JSON for reports and policies, plus their sha256 fingerprints.
//!
//! Encoding goes through [`serde_json::Value`]. Without the `preserve_order`
//! feature its `Map` is a `BTreeMap`, so object keys come out sorted at every
//! depth while array order is kept. Nothing in this workspace enables that
//! feature; `canonical_json_sorts_keys_at_every_depth` pins the behaviour.

use serde::Serialize;
use sha2::{Digest, Sha256};

pub fn canonical_json_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec(&serde_json::to_value(value)?)
}

/// Pretty form, used for snapshot files and policy comparison.
pub fn canonical_json_pretty<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&serde_json::to_value(value)?)
}

/// Lowercase hex sha256 of the compact canonical encoding.
pub fn canonical_fingerprint<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    let digest = Sha256::digest(canonical_json_bytes(value)?);
    Ok(format!("{digest:x}"))
}
