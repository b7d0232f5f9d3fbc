//! Source file discovery.
//!
//! Directories are walked with `ignore`, so `.gitignore`, `.ignore` and
//! hidden files are skipped the way other JavaScript tooling skips them.
//! Files named explicitly are always linted.

use crate::commands::utils::{display_path, resolve_path};
use crate::config::TagboxConfig;
use crate::error::{CliError, Result, ResultExt};
use ignore::WalkBuilder;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::debug;

const SKIPPED_DIRS: [&str; 1] = ["node_modules"];

/// A file read from disk, ready to lint
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: PathBuf,
    /// Path relative to the working directory, used in diagnostics
    pub display: String,
    pub source: String,
}

impl SourceFile {
    pub fn read(path: &Path, cwd: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path).reading(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            display: display_path(path, cwd),
            source,
        })
    }
}

/// Collect the files selected by `config.include`, sorted and deduplicated
pub fn discover(config: &TagboxConfig, cwd: &Path) -> Result<Vec<PathBuf>> {
    let mut files = BTreeSet::new();

    for include in &config.include {
        let root = resolve_path(include, cwd);
        if !root.exists() {
            return Err(CliError::PathNotFound(root));
        }

        if root.is_file() {
            files.insert(root);
            continue;
        }

        let walker = WalkBuilder::new(&root)
            .require_git(false)
            .filter_entry(|entry| {
                !SKIPPED_DIRS
                    .iter()
                    .any(|dir| entry.file_name() == std::ffi::OsStr::new(dir))
            })
            .build();

        for entry in walker {
            let entry = entry?;
            let is_file = entry.file_type().is_some_and(|ft| ft.is_file());
            if is_file && has_accepted_extension(entry.path(), config) {
                files.insert(entry.into_path());
            }
        }
    }

    debug!(count = files.len(), "discovered files");
    Ok(files.into_iter().collect())
}

fn has_accepted_extension(path: &Path, config: &TagboxConfig) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| config.accepts_extension(ext))
}
