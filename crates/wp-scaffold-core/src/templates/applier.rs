//! In-place application of a replacement plan across the starter tree

use super::plan::ReplacementPlan;
use super::walker;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Outcome of one substitution pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubstitutionSummary {
    /// Files read and checked
    pub scanned: usize,
    /// Files whose content changed and was written back
    pub changed: usize,
    /// Files that could not be read as UTF-8 text and were left alone
    pub skipped: usize,
}

/// Rewrite every eligible file under `root` with `plan`
///
/// Files listed in `excluded` (absolute paths under `root`) are never touched.
/// Unreadable files are skipped; write failures abort the pass.
pub fn apply_plan(
    root: &Path,
    plan: &ReplacementPlan,
    excluded: &[PathBuf],
) -> Result<SubstitutionSummary> {
    let mut summary = SubstitutionSummary::default();

    for path in walker::walk(root)? {
        if excluded.contains(&path) {
            continue;
        }

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "skipping unreadable file");
                summary.skipped += 1;
                continue;
            }
        };
        summary.scanned += 1;

        let updated = plan.apply(&content);
        if updated != content {
            fs::write(&path, updated)
                .with_context(|| format!("Failed to write file: {}", path.display()))?;
            summary.changed += 1;
        }
    }

    tracing::info!(
        changed = summary.changed,
        scanned = summary.scanned,
        skipped = summary.skipped,
        "substitution pass complete"
    );

    Ok(summary)
}
