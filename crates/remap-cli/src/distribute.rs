//! Leaf-directory file distribution.
//!
//! Copies one file into every leaf directory (a directory containing no
//! subdirectories) under a base directory, and appends a tab-separated
//! line for it to that directory's `contents` manifest. Used to drop a
//! shared file (a license, a README) into every item directory of a
//! prepared archive tree.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::{debug, warn};

/// Per-directory manifest file name.
pub const MANIFEST_FILE: &str = "contents";

/// Options for one distribution run.
#[derive(Debug, Clone, Default)]
pub struct DistributeOptions {
    /// Extra metadata columns appended after the filename in the
    /// manifest line.
    pub metadata: Vec<String>,
    /// Replace spaces with underscores in target filenames.
    pub replace_spaces: bool,
}

/// Counts of per-directory outcomes.
#[derive(Debug, Default, Clone, Copy)]
pub struct DistributeReport {
    /// Directories the file was copied into.
    pub copied: usize,
    /// Directories skipped because the target already existed.
    pub skipped: usize,
    /// Directories where the copy or manifest update failed.
    pub failed: usize,
}

/// Copies `file` into every leaf directory under `base_dir`.
///
/// A directory that already holds a file with the target name is skipped.
/// Per-directory failures are logged and counted but do not stop the
/// remaining directories; only an unusable `base_dir` or source filename
/// fails the run as a whole.
pub fn distribute(
    file: &Path,
    base_dir: &Path,
    options: &DistributeOptions,
) -> Result<DistributeReport> {
    if !base_dir.is_dir() {
        bail!("{} is not a directory", base_dir.display());
    }
    let file_name = file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .context("distributed file has no filename")?;
    let target_name = if options.replace_spaces {
        file_name.replace(' ', "_")
    } else {
        file_name
    };

    let mut manifest_line = target_name.clone();
    for value in &options.metadata {
        manifest_line.push('\t');
        manifest_line.push_str(value);
    }

    let mut report = DistributeReport::default();
    for dir in leaf_directories(base_dir) {
        let target = dir.join(&target_name);
        if target.exists() {
            warn!(target = %target.display(), "target exists, skipping");
            report.skipped += 1;
            continue;
        }
        if let Err(error) = fs::copy(file, &target) {
            warn!(target = %target.display(), %error, "copy failed");
            report.failed += 1;
            continue;
        }
        if let Err(error) = append_manifest_line(&dir, &manifest_line) {
            warn!(dir = %dir.display(), %error, "manifest update failed");
            report.failed += 1;
            continue;
        }
        debug!(target = %target.display(), "file distributed");
        report.copied += 1;
    }
    Ok(report)
}

/// Collects every leaf directory under `base`, in sorted order.
///
/// `base` itself counts when it has no subdirectories. Unreadable
/// directories are logged and treated as non-leaves; symlinked
/// directories are not followed.
pub fn leaf_directories(base: &Path) -> Vec<PathBuf> {
    let mut leaves = Vec::new();
    collect_leaves(base, &mut leaves);
    leaves.sort();
    leaves
}

fn collect_leaves(dir: &Path, leaves: &mut Vec<PathBuf>) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(error) => {
            warn!(dir = %dir.display(), %error, "cannot read directory, skipping");
            return;
        }
    };
    let subdirs: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            entry
                .file_type()
                .map(|file_type| file_type.is_dir())
                .unwrap_or(false)
        })
        .map(|entry| entry.path())
        .collect();
    if subdirs.is_empty() {
        leaves.push(dir.to_path_buf());
        return;
    }
    for subdir in subdirs {
        collect_leaves(&subdir, leaves);
    }
}

fn append_manifest_line(dir: &Path, line: &str) -> std::io::Result<()> {
    let path = dir.join(MANIFEST_FILE);
    let mut manifest = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(manifest, "{line}")
}
