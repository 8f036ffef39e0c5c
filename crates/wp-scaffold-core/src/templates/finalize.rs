//! Post-run cleanup: stale lockfiles and the scaffolder's own npm wiring

use super::structure::Change;
use super::tokens;
use crate::error::ScaffoldError;
use crate::product::ProductConfig;
use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Removes lockfiles the renames invalidated and unhooks the scaffolder
pub struct Finalizer<'a, C: ProductConfig> {
    product: &'a C,
    root: &'a Path,
}

impl<'a, C: ProductConfig> Finalizer<'a, C> {
    pub fn new(product: &'a C, root: &'a Path) -> Self {
        Self { product, root }
    }

    /// Run every cleanup step
    ///
    /// `plugin_dir` and `theme_dir` are the renamed unit directories.
    pub fn run(&self, plugin_dir: &Path, theme_dir: &Path) -> Result<Vec<Change>> {
        let mut changes = Vec::new();

        let lockfiles: [PathBuf; 4] = [
            self.root.join(tokens::PACKAGE_LOCK),
            self.root.join(tokens::COMPOSER_LOCK),
            plugin_dir.join(tokens::COMPOSER_LOCK),
            theme_dir.join(tokens::COMPOSER_LOCK),
        ];
        for lockfile in &lockfiles {
            if lockfile.is_file() {
                fs::remove_file(lockfile)
                    .with_context(|| format!("Failed to delete {}", lockfile.display()))?;
                changes.push(Change::Deleted(self.relative(lockfile)));
            }
        }

        let manifest = self.root.join(tokens::ROOT_PACKAGE_JSON);
        if manifest.is_file() {
            self.unhook_manifest(&manifest)?;
            changes.push(Change::Cleaned(tokens::ROOT_PACKAGE_JSON.to_string()));
        }

        for change in &changes {
            tracing::info!("{}", change);
        }

        Ok(changes)
    }

    /// Drop the scaffold script and its dev dependencies from `package.json`
    ///
    /// Key order is preserved; the file is rewritten with two-space indentation
    /// and a trailing newline even when nothing was removed.
    pub fn unhook_manifest(&self, path: &Path) -> Result<()> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let mut manifest: Value =
            serde_json::from_str(&content).map_err(|source| ScaffoldError::InvalidManifest {
                path: path.to_path_buf(),
                source,
            })?;

        if let Some(scripts) = manifest.get_mut("scripts").and_then(Value::as_object_mut) {
            scripts.shift_remove(self.product.scaffold_script());
        }
        if let Some(dev) = manifest
            .get_mut("devDependencies")
            .and_then(Value::as_object_mut)
        {
            for dependency in self.product.scaffold_dependencies() {
                dev.shift_remove(*dependency);
            }
        }

        let mut output =
            serde_json::to_string_pretty(&manifest).map_err(|source| {
                ScaffoldError::InvalidManifest {
                    path: path.to_path_buf(),
                    source,
                }
            })?;
        output.push('\n');

        fs::write(path, output).with_context(|| format!("Failed to write {}", path.display()))
    }

    fn relative(&self, path: &Path) -> String {
        path.strip_prefix(self.root)
            .unwrap_or(path)
            .to_string_lossy()
            .replace('\\', "/")
    }
}
