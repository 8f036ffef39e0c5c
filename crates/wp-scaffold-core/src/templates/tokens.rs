//! Literal tokens and paths baked into the starter kit
//!
//! The starter kit is plain PHP/JS/JSON with fixed placeholder names. Nothing
//! here is a pattern: every string is matched literally.

use crate::config::ThemeFlavor;

/// Placeholder identifiers of one starter unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitTokens {
    pub namespace: &'static str,
    pub constant_prefix: &'static str,
    /// Hyphenated spelling found in text domains and package names; rewritten
    /// to the resolved slug like `directory`
    pub slug_alias: &'static str,
    pub hook_prefix: &'static str,
    /// Directory name inside the starter kit
    pub directory: &'static str,
    pub human_name: &'static str,
}

impl UnitTokens {
    /// Translation catalog shipped in `languages/`
    pub fn pot_file(&self) -> String {
        format!("{}.pot", self.namespace)
    }
}

pub const PLUGIN: UnitTokens = UnitTokens {
    namespace: "TenUpPlugin",
    constant_prefix: "TENUP_PLUGIN",
    slug_alias: "tenup-plugin",
    hook_prefix: "tenup_plugin",
    directory: "10up-plugin",
    human_name: "10up Plugin Scaffold",
};

pub const BLOCK_THEME: UnitTokens = UnitTokens {
    namespace: "TenupBlockTheme",
    constant_prefix: "TENUP_BLOCK_THEME",
    slug_alias: "tenup-block-theme",
    hook_prefix: "tenup_block_theme",
    directory: "10up-block-theme",
    human_name: "10up Block Theme",
};

pub const CLASSIC_THEME: UnitTokens = UnitTokens {
    namespace: "TenUpTheme",
    constant_prefix: "TENUP_THEME",
    slug_alias: "firefly-theme",
    hook_prefix: "tenup_theme",
    directory: "10up-theme",
    human_name: "10up Theme",
};

/// Starter tokens of a theme flavor
pub fn theme_tokens(flavor: ThemeFlavor) -> &'static UnitTokens {
    match flavor {
        ThemeFlavor::Block => &BLOCK_THEME,
        ThemeFlavor::Classic => &CLASSIC_THEME,
    }
}

/// Directory holding both starter themes
pub const THEMES_DIR: &str = "themes";

/// Loader file next to the plugin directory
pub const PLUGIN_LOADER: &str = "10up-plugin-loader.php";

/// Plugin path fragment rewritten for VIP hosting
pub const PLUGIN_MOUNT_PATH: &str = "mu-plugins/10up-plugin";
pub const VIP_PLUGIN_MOUNT_PATH: &str = "client-mu-plugins/10up-plugin";

/// Mount reference inside the PHPCS ruleset
pub const RULESET_MOUNT: &str = "<file>mu-plugins</file>";
pub const VIP_RULESET_MOUNT: &str = "<file>client-mu-plugins</file>";

/// Composer package names
pub const ROOT_COMPOSER_PACKAGE: &str = "10up/wp-scaffold";
pub const PLUGIN_COMPOSER_PACKAGE: &str = "10up/wp-plugin";
pub const THEME_COMPOSER_PACKAGES: [&str; 2] = ["10up/wp-theme", "10up/firefly-theme"];

/// Root npm package name
pub const ROOT_NPM_PACKAGE: &str = "tenup-wp-scaffold";

pub const AUTHOR_EMAIL: &str = "info@10up.com";
pub const AUTHOR_URI: &str = "https://10up.com";

/// Every description placeholder found in the starter, across plugin and theme files
pub const DESCRIPTIONS: [&str; 6] = [
    "The starting point for all 10up WordPress projects.",
    "The starting point for all 10up WordPress themes.",
    "The starting point for all 10up WordPress plugins.",
    "A brief description of the plugin.",
    "Project description.",
    "Project Description",
];

pub const REPOSITORY_URLS: [&str; 2] = [
    "https://github.com/10up/wp-scaffold",
    "https://project-git-repo.tld",
];

pub const HOMEPAGE_URL: &str = "https://project-domain.tld";

/// Organization name used as author in the starter
pub const AUTHOR_NAME: &str = "10up";

/// Author fields as (prefix, suffix) around `AUTHOR_NAME`
///
/// Only these exact spellings are rewritten, so unrelated `10up` mentions
/// (`10up-toolkit`, `10up/phpcs-composer`) survive.
pub const AUTHOR_FIELDS: [(&str, &str); 4] = [
    ("\"name\": \"", "\""),
    ("Author:            ", ""),
    ("Author:      ", ""),
    ("Author:        ", ""),
];

/// Static-analysis path list
pub const PHPSTAN_CONFIG: &str = "phpstan.neon";

/// Static-analysis constants stub
pub const PHPSTAN_CONSTANTS: &str = "phpstan/constants.php";

pub const CI_WORKFLOW: &str = ".github/workflows/php.yml";
pub const ROOT_PACKAGE_JSON: &str = "package.json";
pub const PACKAGE_LOCK: &str = "package-lock.json";
pub const COMPOSER_LOCK: &str = "composer.lock";
pub const LANGUAGES_DIR: &str = "languages";
