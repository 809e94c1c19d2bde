// ABOUTME: Checks that every Rust source file opens with the standard ABOUTME and license header
// ABOUTME: The ABOUTME block and the SPDX block are separated by one blank line

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGlow

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::fs;
use std::path::PathBuf;

use glob::glob;

const SPDX_LINE: &str = "// SPDX-License-Identifier: MIT OR Apache-2.0";
const COPYRIGHT_LINE: &str = "// Copyright (c) 2025 FitGlow";

fn source_files() -> Vec<PathBuf> {
    let root = env!("CARGO_MANIFEST_DIR");
    ["src/**/*.rs", "crates/*/src/**/*.rs", "tests/**/*.rs"]
        .iter()
        .flat_map(|pattern| glob(&format!("{root}/{pattern}")).unwrap())
        .map(Result::unwrap)
        .collect()
}

#[test]
fn every_source_file_has_the_standard_header() {
    let files = source_files();
    assert!(!files.is_empty());

    for path in files {
        let text = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().take(5).collect();
        assert!(
            lines.len() == 5
                && lines[0].starts_with("// ABOUTME: ")
                && lines[1].starts_with("// ABOUTME: ")
                && lines[2].is_empty()
                && lines[3] == SPDX_LINE
                && lines[4] == COPYRIGHT_LINE,
            "{} does not open with the standard header",
            path.display()
        );
    }
}
