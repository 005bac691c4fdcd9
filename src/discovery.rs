//! Input discovery: walk a directory tree and collect puzzle input files.
//!
//! The walker respects `.gitignore` / `.ignore` files, skips hidden entries
//! and never descends into a cargo `target/` directory.  Only `.txt` files
//! are returned, sorted by path so runs print in a stable order.

use anyhow::Result;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

const INPUT_EXTENSION: &str = "txt";

/// Directory names never searched for inputs.
const ALWAYS_EXCLUDE: &[&str] = &["target"];

pub fn discover_inputs(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    let walker = WalkBuilder::new(root)
        .hidden(true)
        .git_ignore(true)
        // Apply .gitignore rules even outside a git checkout.
        .require_git(false)
        .filter_entry(|entry| {
            !ALWAYS_EXCLUDE
                .iter()
                .any(|name| entry.file_name() == *name)
        })
        .build();

    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }
        if entry.path().extension().and_then(|e| e.to_str()) != Some(INPUT_EXTENSION) {
            continue;
        }
        files.push(entry.into_path());
    }

    files.sort();
    Ok(files)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
