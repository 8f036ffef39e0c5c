//! Starter-kit rewriting
//!
//! This module provides:
//! - The literal tokens the starter kit ships with (`tokens`)
//! - The ordered replacement plan built from a configuration (`plan`)
//! - Tree walking and in-place substitution (`walker`, `applier`)
//! - Deletes, moves, renames and config patches (`structure`)
//! - Lockfile and npm cleanup (`finalize`)

pub mod applier;
pub mod finalize;
pub mod plan;
pub mod structure;
pub mod tokens;
pub mod walker;

use crate::config::Configuration;
use crate::product::ProductConfig;
use anyhow::Result;
use std::path::{Path, PathBuf};

pub use applier::{apply_plan, SubstitutionSummary};
pub use finalize::Finalizer;
pub use plan::{ReplacementPair, ReplacementPlan};
pub use structure::{Change, StructuralMutator};

/// Everything a run did to the tree
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyReport {
    pub substitution: SubstitutionSummary,
    pub changes: Vec<Change>,
}

/// Rewrite the starter kit at `root` for `config`
///
/// Steps run in a fixed order and stop at the first error. Nothing is rolled
/// back; the tree is expected to be under version control.
pub fn apply<C: ProductConfig>(
    product: &C,
    root: &Path,
    config: &Configuration,
) -> Result<ApplyReport> {
    tracing::info!(project = %config.project_slug, root = %root.display(), "applying configuration");

    let mut mutator = StructuralMutator::new(root, config);

    // The unchosen theme goes first so its tokens never reach the plan's files
    mutator.remove_unused_theme()?;
    mutator.relocate_plugin_for_vip()?;

    let plan = ReplacementPlan::build(config);
    let excluded: Vec<PathBuf> = product
        .self_paths()
        .iter()
        .map(|rel| root.join(rel))
        .collect();
    let substitution = apply_plan(root, &plan, &excluded)?;

    mutator.prune_phpstan_constants()?;
    mutator.correct_stale_theme_references()?;
    mutator.rename_units()?;
    mutator.fix_renamed_references()?;
    mutator.prune_phpstan_paths()?;

    let plugin_dir = mutator.plugin_dir();
    let theme_dir = mutator.theme_dir();
    let mut changes = mutator.into_changes();
    changes.extend(Finalizer::new(product, root).run(&plugin_dir, &theme_dir)?);

    Ok(ApplyReport {
        substitution,
        changes,
    })
}
