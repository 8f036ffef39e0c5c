//! Enumeration of the text files the substitution pass may rewrite

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Extensions never read as text (compared case-insensitively)
pub const BINARY_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "webp", "ico", "svg", "woff", "woff2", "eot", "ttf", "otf",
    "zip", "gz", "tar", "bz2", "mp4", "mp3", "mov", "avi", "pdf", "doc", "docx", "lock",
];

/// Directory names skipped wherever they appear
///
/// `plugins` is the staging directory for third-party plugins, which must keep
/// their upstream names.
pub const SKIP_DIRS: &[&str] = &["node_modules", "vendor", ".git", "plugins"];

/// Lockfiles skipped by name
pub const SKIP_FILES: &[&str] = &["package-lock.json"];

/// Collect every eligible regular file under `root`, depth-first
///
/// Recomputed on every call; symlinks are not followed.
pub fn walk(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    let walker = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_skipped_dir(entry));

    for entry in walker {
        let entry =
            entry.with_context(|| format!("Failed to read directory tree: {}", root.display()))?;

        if entry.file_type().is_file() && is_text_candidate(entry.path()) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

fn is_skipped_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| SKIP_DIRS.contains(&name))
}

/// Check whether a file is eligible for substitution, by name and extension
pub fn is_text_candidate(path: &Path) -> bool {
    let name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
    if SKIP_FILES.contains(&name) {
        return false;
    }

    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => !BINARY_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()),
        None => true,
    }
}
