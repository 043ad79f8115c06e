// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::path::{Path, PathBuf};

const HEADER: &str = "// SPDX-License-Identifier: Apache-2.0";

fn collect_rs_files(dir: &Path, out: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            if path.file_name().is_some_and(|n| n == "target" || n == "fixtures") {
                continue;
            }
            collect_rs_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            out.push(path);
        }
    }
}

#[test]
fn every_workspace_source_file_carries_the_license_header() {
    let crates_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("crates dir")
        .to_path_buf();
    let mut files = Vec::new();
    collect_rs_files(&crates_dir, &mut files);
    assert!(!files.is_empty(), "no sources found under {}", crates_dir.display());

    let missing = files
        .iter()
        .filter(|path| {
            fs::read_to_string(path)
                .map(|text| !text.starts_with(HEADER))
                .unwrap_or(true)
        })
        .map(|path| path.display().to_string())
        .collect::<Vec<_>>();
    assert!(missing.is_empty(), "missing license header: {missing:?}");
}
