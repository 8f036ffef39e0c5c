//! Filesystem moves, renames and config patches around the substitution pass
//!
//! Every step checks that the tree still looks the way it expects before
//! touching it, so a rerun against an already-scaffolded checkout is a no-op.
//! There is no rollback: a failing step leaves the earlier ones applied.

use super::plan::ReplacementPlan;
use super::tokens::{self, theme_tokens};
use crate::config::{Configuration, STANDARD_MOUNT, VIP_MOUNT};
use anyhow::{Context, Result};
use regex::Regex;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static BLANK_LINE_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

/// Files that may still name the classic theme after a block-theme run
///
/// The classic theme's tokens are left out of the plan when the block theme is
/// kept, yet the CI workflow and the root manifest reference both themes.
pub const STALE_THEME_FILES: [&str; 2] = [tokens::CI_WORKFLOW, tokens::ROOT_PACKAGE_JSON];

/// One filesystem-level change, in the order it happened
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    Created(String),
    Deleted(String),
    Moved { from: String, to: String },
    Renamed { from: String, to: String },
    Cleaned(String),
    Fixed(String),
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Change::Created(path) => write!(f, "Created {}", path),
            Change::Deleted(path) => write!(f, "Deleted {}", path),
            Change::Moved { from, to } => write!(f, "Moved {} -> {}", from, to),
            Change::Renamed { from, to } => write!(f, "Renamed {} -> {}", from, to),
            Change::Cleaned(path) => write!(f, "Cleaned {}", path),
            Change::Fixed(path) => write!(f, "Fixed stale references in {}", path),
        }
    }
}

/// Applies the structural steps of a run and records what it did
pub struct StructuralMutator<'a> {
    root: &'a Path,
    config: &'a Configuration,
    changes: Vec<Change>,
}

impl<'a> StructuralMutator<'a> {
    pub fn new(root: &'a Path, config: &'a Configuration) -> Self {
        Self {
            root,
            config,
            changes: Vec::new(),
        }
    }

    pub fn changes(&self) -> &[Change] {
        &self.changes
    }

    pub fn into_changes(self) -> Vec<Change> {
        self.changes
    }

    /// Directory the plugin lives in for the chosen hosting
    pub fn mount_dir(&self) -> PathBuf {
        self.root.join(self.config.hosting.mount_dir())
    }

    /// Plugin directory once renamed
    pub fn plugin_dir(&self) -> PathBuf {
        self.mount_dir().join(&self.config.plugin.slug)
    }

    /// Theme directory once renamed
    pub fn theme_dir(&self) -> PathBuf {
        self.root.join(tokens::THEMES_DIR).join(&self.config.theme.slug)
    }

    /// Loader file once renamed
    pub fn loader_file(&self) -> PathBuf {
        self.mount_dir()
            .join(format!("{}-loader.php", self.config.plugin.slug))
    }

    /// Delete the starter theme that was not chosen
    pub fn remove_unused_theme(&mut self) -> Result<()> {
        let unused = theme_tokens(self.config.flavor.other());
        let path = self.root.join(tokens::THEMES_DIR).join(unused.directory);

        if path.exists() {
            fs::remove_dir_all(&path)
                .with_context(|| format!("Failed to delete {}", path.display()))?;
            self.record(Change::Deleted(format!("{}/", self.relative(&path))));
        }

        Ok(())
    }

    /// Move the plugin and its loader under the VIP mount point
    pub fn relocate_plugin_for_vip(&mut self) -> Result<()> {
        if !self.config.hosting.is_vip() {
            return Ok(());
        }

        let standard = self.root.join(STANDARD_MOUNT);
        let vip = self.root.join(VIP_MOUNT);

        if !vip.exists() {
            fs::create_dir_all(&vip)
                .with_context(|| format!("Failed to create {}", vip.display()))?;
            self.record(Change::Created(format!("{}/", VIP_MOUNT)));
        }

        for name in [tokens::PLUGIN.directory, tokens::PLUGIN_LOADER] {
            let from = standard.join(name);
            let to = vip.join(name);
            if self.rename_if_present(&from, &to)? {
                let change = Change::Moved {
                    from: self.relative(&from),
                    to: self.relative(&to),
                };
                self.record(change);
            }
        }

        if standard.is_dir() && is_empty_dir(&standard)? {
            fs::remove_dir(&standard)
                .with_context(|| format!("Failed to remove {}", standard.display()))?;
            self.record(Change::Deleted(format!("{}/", STANDARD_MOUNT)));
        }

        Ok(())
    }

    /// Drop constants of the deleted theme from the static-analysis stub
    ///
    /// Those constants still carry the starter prefix because the unchosen
    /// theme's tokens were never part of the plan.
    pub fn prune_phpstan_constants(&mut self) -> Result<()> {
        let path = self.root.join(tokens::PHPSTAN_CONSTANTS);
        if !path.exists() {
            return Ok(());
        }

        let stale_prefix = format!(
            "{}_",
            theme_tokens(self.config.flavor.other()).constant_prefix
        );
        let content = read(&path)?;
        let kept = content
            .split('\n')
            .filter(|line| !line.contains(stale_prefix.as_str()))
            .collect::<Vec<_>>()
            .join("\n");
        let cleaned = BLANK_LINE_RUNS.replace_all(&kept, "\n\n");

        write(&path, &cleaned)?;
        self.record(Change::Cleaned(tokens::PHPSTAN_CONSTANTS.to_string()));
        Ok(())
    }

    /// Rewrite classic-theme slugs left in CI and the root manifest (block runs only)
    pub fn correct_stale_theme_references(&mut self) -> Result<()> {
        if !self.config.flavor.is_block() {
            return Ok(());
        }

        let corrections = self.stale_theme_corrections();
        for rel in STALE_THEME_FILES {
            let path = self.root.join(rel);
            if self.rewrite_if_needed(&path, &corrections)? {
                self.record(Change::Fixed(rel.to_string()));
            }
        }

        Ok(())
    }

    /// Known-stale classic theme tokens and what they resolve to
    pub fn stale_theme_corrections(&self) -> ReplacementPlan {
        let theme = &self.config.theme;
        ReplacementPlan::from_pairs([
            (tokens::CLASSIC_THEME.directory, theme.slug.as_str()),
            (tokens::CLASSIC_THEME.slug_alias, theme.package_name.as_str()),
        ])
    }

    /// Give plugin, theme, loader and translation catalogs their project names
    pub fn rename_units(&mut self) -> Result<()> {
        let mount = self.mount_dir();
        let plugin_dir = self.plugin_dir();
        let theme_dir = self.theme_dir();
        let kept_theme = theme_tokens(self.config.flavor);

        self.rename_recorded(&mount.join(tokens::PLUGIN.directory), &plugin_dir)?;
        self.rename_recorded(
            &self.root.join(tokens::THEMES_DIR).join(kept_theme.directory),
            &theme_dir,
        )?;
        self.rename_recorded(&mount.join(tokens::PLUGIN_LOADER), &self.loader_file())?;

        let languages = plugin_dir.join(tokens::LANGUAGES_DIR);
        self.rename_recorded(
            &languages.join(tokens::PLUGIN.pot_file()),
            &languages.join(format!("{}.pot", self.config.plugin.namespace)),
        )?;

        if !self.config.flavor.is_block() {
            let languages = theme_dir.join(tokens::LANGUAGES_DIR);
            self.rename_recorded(
                &languages.join(tokens::CLASSIC_THEME.pot_file()),
                &languages.join(format!("{}.pot", self.config.theme.namespace)),
            )?;
        }

        Ok(())
    }

    /// Re-point the renamed plugin's manifest and loader at the renamed directories
    pub fn fix_renamed_references(&mut self) -> Result<()> {
        let theme_slug = self.config.theme.slug.as_str();
        let mut theme_paths = vec![(tokens::CLASSIC_THEME.directory, theme_slug)];
        if self.config.flavor.is_block() {
            theme_paths.push((tokens::BLOCK_THEME.directory, theme_slug));
        }

        let manifest = self.plugin_dir().join(tokens::ROOT_PACKAGE_JSON);
        if self.rewrite_if_needed(&manifest, &ReplacementPlan::from_pairs(theme_paths))? {
            let rel = self.relative(&manifest);
            self.record(Change::Fixed(rel));
        }

        let loader = self.loader_file();
        let plugin_path = ReplacementPlan::from_pairs([(
            tokens::PLUGIN.directory,
            self.config.plugin.slug.as_str(),
        )]);
        if self.rewrite_if_needed(&loader, &plugin_path)? {
            let rel = self.relative(&loader);
            self.record(Change::Fixed(rel));
        }

        Ok(())
    }

    /// Drop static-analysis paths that no longer exist
    ///
    /// Runs after the renames, so the freshly renamed plugin and theme paths
    /// are found and only the deleted theme's entry goes away.
    pub fn prune_phpstan_paths(&mut self) -> Result<()> {
        let path = self.root.join(tokens::PHPSTAN_CONFIG);
        if !path.exists() {
            return Ok(());
        }

        let content = read(&path)?;
        let kept = content
            .split('\n')
            .filter(|line| match line.trim().strip_prefix("- ") {
                Some(listed) => self.root.join(listed.trim()).exists(),
                None => true,
            })
            .collect::<Vec<_>>()
            .join("\n");

        write(&path, &kept)?;
        self.record(Change::Cleaned(tokens::PHPSTAN_CONFIG.to_string()));
        Ok(())
    }

    fn record(&mut self, change: Change) {
        tracing::info!("{}", change);
        self.changes.push(change);
    }

    fn relative(&self, path: &Path) -> String {
        path.strip_prefix(self.root)
            .unwrap_or(path)
            .to_string_lossy()
            .replace('\\', "/")
    }

    fn rename_if_present(&self, from: &Path, to: &Path) -> Result<bool> {
        if from == to || !from.exists() {
            return Ok(false);
        }

        fs::rename(from, to).with_context(|| {
            format!("Failed to rename {} to {}", from.display(), to.display())
        })?;
        Ok(true)
    }

    fn rename_recorded(&mut self, from: &Path, to: &Path) -> Result<()> {
        if self.rename_if_present(from, to)? {
            let change = Change::Renamed {
                from: self.relative(from),
                to: self.relative(to),
            };
            self.record(change);
        }
        Ok(())
    }

    fn rewrite_if_needed(&self, path: &Path, plan: &ReplacementPlan) -> Result<bool> {
        if !path.exists() {
            return Ok(false);
        }

        let content = read(path)?;
        let updated = plan.apply(&content);
        if updated == content {
            return Ok(false);
        }

        write(path, &updated)?;
        Ok(true)
    }
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn write(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}

fn is_empty_dir(path: &Path) -> Result<bool> {
    let mut entries =
        fs::read_dir(path).with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(entries.next().is_none())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigurationBuilder, HostingChoice, ThemeFlavor};
    use tempfile::TempDir;

    fn config(hosting: HostingChoice, flavor: ThemeFlavor) -> Configuration {
        ConfigurationBuilder::new("Acme Corp", hosting, flavor)
            .unwrap()
            .build()
    }

    fn put(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn starter(root: &Path) {
        put(root, "mu-plugins/10up-plugin/plugin.php", "<?php");
        put(root, "mu-plugins/10up-plugin/languages/TenUpPlugin.pot", "");
        put(root, "mu-plugins/10up-plugin-loader.php", "require '10up-plugin/plugin.php';");
        put(root, "themes/10up-theme/functions.php", "<?php");
        put(root, "themes/10up-theme/languages/TenUpTheme.pot", "");
        put(root, "themes/10up-block-theme/theme.json", "{}");
    }

    #[test]
    fn test_remove_unused_theme() {
        let dir = TempDir::new().unwrap();
        starter(dir.path());
        let config = config(HostingChoice::Standard, ThemeFlavor::Block);
        let mut mutator = StructuralMutator::new(dir.path(), &config);

        mutator.remove_unused_theme().unwrap();
        mutator.remove_unused_theme().unwrap();

        assert!(!dir.path().join("themes/10up-theme").exists());
        assert!(dir.path().join("themes/10up-block-theme").exists());
        assert_eq!(
            mutator.changes(),
            &[Change::Deleted("themes/10up-theme/".to_string())]
        );
    }

    #[test]
    fn test_relocate_plugin_for_vip() {
        let dir = TempDir::new().unwrap();
        starter(dir.path());
        let config = config(HostingChoice::Vip, ThemeFlavor::Block);
        let mut mutator = StructuralMutator::new(dir.path(), &config);

        mutator.relocate_plugin_for_vip().unwrap();

        let root = dir.path();
        assert!(root.join("client-mu-plugins/10up-plugin/plugin.php").exists());
        assert!(root.join("client-mu-plugins/10up-plugin-loader.php").exists());
        assert!(!root.join("mu-plugins").exists());
    }

    #[test]
    fn test_relocate_keeps_non_empty_standard_mount() {
        let dir = TempDir::new().unwrap();
        starter(dir.path());
        put(dir.path(), "mu-plugins/other.php", "<?php");
        let config = config(HostingChoice::Vip, ThemeFlavor::Block);
        let mut mutator = StructuralMutator::new(dir.path(), &config);

        mutator.relocate_plugin_for_vip().unwrap();

        assert!(dir.path().join("mu-plugins/other.php").exists());
        assert!(!dir.path().join("mu-plugins/10up-plugin").exists());
    }

    #[test]
    fn test_relocate_is_no_op_for_standard() {
        let dir = TempDir::new().unwrap();
        starter(dir.path());
        let config = config(HostingChoice::Standard, ThemeFlavor::Block);
        let mut mutator = StructuralMutator::new(dir.path(), &config);

        mutator.relocate_plugin_for_vip().unwrap();

        assert!(dir.path().join("mu-plugins/10up-plugin").exists());
        assert!(!dir.path().join("client-mu-plugins").exists());
        assert!(mutator.changes().is_empty());
    }

    #[test]
    fn test_prune_phpstan_constants() {
        let dir = TempDir::new().unwrap();
        put(
            dir.path(),
            "phpstan/constants.php",
            "<?php\n\ndefine( 'ACME_CORP_PLUGIN_URL', '' );\n\n\
             define( 'TENUP_THEME_VERSION', '1.0.0' );\ndefine( 'TENUP_THEME_PATH', '/' );\n\n\
             define( 'ACME_CORP_THEME_VERSION', '1.0.0' );\n",
        );
        let config = config(HostingChoice::Standard, ThemeFlavor::Block);
        let mut mutator = StructuralMutator::new(dir.path(), &config);

        mutator.prune_phpstan_constants().unwrap();

        assert_eq!(
            fs::read_to_string(dir.path().join("phpstan/constants.php")).unwrap(),
            "<?php\n\ndefine( 'ACME_CORP_PLUGIN_URL', '' );\n\n\
             define( 'ACME_CORP_THEME_VERSION', '1.0.0' );\n"
        );
    }

    #[test]
    fn test_prune_constants_for_classic_drops_block_prefix() {
        let dir = TempDir::new().unwrap();
        put(
            dir.path(),
            "phpstan/constants.php",
            "define( 'TENUP_BLOCK_THEME_VERSION', '1' );\ndefine( 'ACME_CORP_THEME_VERSION', '1' );\n",
        );
        let config = config(HostingChoice::Standard, ThemeFlavor::Classic);
        let mut mutator = StructuralMutator::new(dir.path(), &config);

        mutator.prune_phpstan_constants().unwrap();

        assert_eq!(
            fs::read_to_string(dir.path().join("phpstan/constants.php")).unwrap(),
            "define( 'ACME_CORP_THEME_VERSION', '1' );\n"
        );
    }

    #[test]
    fn test_correct_stale_theme_references() {
        let dir = TempDir::new().unwrap();
        put(
            dir.path(),
            ".github/workflows/php.yml",
            "working-directory: themes/10up-theme\n",
        );
        put(
            dir.path(),
            "package.json",
            "{\"workspaces\": [\"themes/10up-theme\"], \"name\": \"firefly-theme\"}",
        );
        let config = config(HostingChoice::Standard, ThemeFlavor::Block);
        let mut mutator = StructuralMutator::new(dir.path(), &config);

        mutator.correct_stale_theme_references().unwrap();

        assert_eq!(
            fs::read_to_string(dir.path().join(".github/workflows/php.yml")).unwrap(),
            "working-directory: themes/acme-corp-theme\n"
        );
        assert_eq!(
            fs::read_to_string(dir.path().join("package.json")).unwrap(),
            "{\"workspaces\": [\"themes/acme-corp-theme\"], \"name\": \"acme-corp-theme\"}"
        );
        assert_eq!(mutator.changes().len(), 2);
    }

    #[test]
    fn test_stale_references_left_alone_for_classic() {
        let dir = TempDir::new().unwrap();
        put(dir.path(), ".github/workflows/php.yml", "themes/10up-theme\n");
        let config = config(HostingChoice::Standard, ThemeFlavor::Classic);
        let mut mutator = StructuralMutator::new(dir.path(), &config);

        mutator.correct_stale_theme_references().unwrap();

        assert!(mutator.changes().is_empty());
    }

    #[test]
    fn test_rename_units_classic() {
        let dir = TempDir::new().unwrap();
        starter(dir.path());
        let config = config(HostingChoice::Standard, ThemeFlavor::Classic);
        let mut mutator = StructuralMutator::new(dir.path(), &config);

        mutator.rename_units().unwrap();

        let root = dir.path();
        assert!(root.join("mu-plugins/acme-corp-plugin/plugin.php").exists());
        assert!(root.join("mu-plugins/acme-corp-plugin-loader.php").exists());
        assert!(root
            .join("mu-plugins/acme-corp-plugin/languages/AcmeCorpPlugin.pot")
            .exists());
        assert!(root.join("themes/acme-corp-theme/functions.php").exists());
        assert!(root
            .join("themes/acme-corp-theme/languages/AcmeCorpTheme.pot")
            .exists());
        assert!(root.join("themes/10up-block-theme").exists());
    }

    #[test]
    fn test_rename_units_twice_is_safe() {
        let dir = TempDir::new().unwrap();
        starter(dir.path());
        let config = config(HostingChoice::Standard, ThemeFlavor::Block);

        let mut first = StructuralMutator::new(dir.path(), &config);
        first.rename_units().unwrap();
        let mut second = StructuralMutator::new(dir.path(), &config);
        second.rename_units().unwrap();

        assert!(!first.changes().is_empty());
        assert!(second.changes().is_empty());
        assert!(dir.path().join("themes/acme-corp-theme/theme.json").exists());
    }

    #[test]
    fn test_fix_renamed_references() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        put(
            root,
            "mu-plugins/acme-corp-plugin/package.json",
            "{\"globalStylesDir\": \"../../themes/10up-theme/assets/css/globals\"}",
        );
        put(
            root,
            "mu-plugins/acme-corp-plugin-loader.php",
            "require_once __DIR__ . '/10up-plugin/plugin.php';",
        );
        let config = config(HostingChoice::Standard, ThemeFlavor::Block);
        let mut mutator = StructuralMutator::new(root, &config);

        mutator.fix_renamed_references().unwrap();

        assert_eq!(
            fs::read_to_string(root.join("mu-plugins/acme-corp-plugin/package.json")).unwrap(),
            "{\"globalStylesDir\": \"../../themes/acme-corp-theme/assets/css/globals\"}"
        );
        assert_eq!(
            fs::read_to_string(root.join("mu-plugins/acme-corp-plugin-loader.php")).unwrap(),
            "require_once __DIR__ . '/acme-corp-plugin/plugin.php';"
        );
    }

    #[test]
    fn test_prune_phpstan_paths() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("mu-plugins/acme-corp-plugin")).unwrap();
        fs::create_dir_all(root.join("themes/acme-corp-theme")).unwrap();
        put(
            root,
            "phpstan.neon",
            "parameters:\n  paths:\n    - mu-plugins/acme-corp-plugin\n    - themes/10up-theme\n    - themes/acme-corp-theme\n",
        );
        let config = config(HostingChoice::Standard, ThemeFlavor::Block);
        let mut mutator = StructuralMutator::new(root, &config);

        mutator.prune_phpstan_paths().unwrap();

        assert_eq!(
            fs::read_to_string(root.join("phpstan.neon")).unwrap(),
            "parameters:\n  paths:\n    - mu-plugins/acme-corp-plugin\n    - themes/acme-corp-theme\n"
        );
    }
}
