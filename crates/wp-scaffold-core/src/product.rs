//! Product configuration trait for CLI binaries
//!
//! A binary describes the starter kit it drives through this trait: its
//! identity, which files belong to the scaffolder itself, and what to tell the
//! user once the project is bootstrapped.

use crate::config::Configuration;

/// Configuration trait for starter-kit products
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for the CLI command)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// CLI description shown in help text
    fn cli_description(&self) -> &'static str;

    /// npm script that launches the scaffolder, removed once it has run
    fn scaffold_script(&self) -> &'static str {
        "scaffold"
    }

    /// Dev dependencies only the scaffolder needs, removed once it has run
    fn scaffold_dependencies(&self) -> &'static [&'static str] {
        &["@inquirer/prompts"]
    }

    /// Paths (relative to the project root) excluded from substitution
    fn self_paths(&self) -> &'static [&'static str] {
        &["bin/scaffold.mjs"]
    }

    /// Generate the "next steps" instructions after scaffolding
    fn next_steps(&self, config: &Configuration) -> Vec<String> {
        vec![
            "npm install".to_string(),
            "composer install".to_string(),
            format!("cd {} && composer install", config.plugin_path()),
            format!("cd {} && composer install", config.theme_path()),
            "npm run build".to_string(),
        ]
    }
}
