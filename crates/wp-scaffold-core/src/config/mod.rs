//! Resolved project configuration
//!
//! This module provides:
//! - The two binary choices of a run (`HostingChoice`, `ThemeFlavor`)
//! - Per-unit identifier bundles (`IdentifierSet`) derived from the project slug
//! - Free-form project metadata (`ProjectMetadata`)
//! - The immutable `Configuration` record handed to the planning and mutation steps
//! - `ConfigurationBuilder` and the prompt-driven resolver that produce it

pub mod builder;
pub mod resolver;

use crate::naming;
use std::fmt;

pub use builder::ConfigurationBuilder;
pub use resolver::{resolve, ReviewMode};

/// Mount point for must-use plugins on a standard install
pub const STANDARD_MOUNT: &str = "mu-plugins";

/// Mount point for must-use plugins on WordPress VIP
pub const VIP_MOUNT: &str = "client-mu-plugins";

/// Where the project will be hosted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostingChoice {
    Standard,
    Vip,
}

impl HostingChoice {
    pub fn display_name(&self) -> &'static str {
        match self {
            HostingChoice::Standard => "Standard WordPress",
            HostingChoice::Vip => "WordPress VIP",
        }
    }

    /// Directory the plugin and its loader live in
    pub fn mount_dir(&self) -> &'static str {
        match self {
            HostingChoice::Standard => STANDARD_MOUNT,
            HostingChoice::Vip => VIP_MOUNT,
        }
    }

    pub fn is_vip(&self) -> bool {
        matches!(self, HostingChoice::Vip)
    }
}

impl fmt::Display for HostingChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Which of the two starter themes is kept
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeFlavor {
    Block,
    Classic,
}

impl ThemeFlavor {
    pub fn display_name(&self) -> &'static str {
        match self {
            ThemeFlavor::Block => "Block Theme",
            ThemeFlavor::Classic => "Classic Theme",
        }
    }

    /// The flavor that gets deleted when this one is chosen
    pub fn other(&self) -> ThemeFlavor {
        match self {
            ThemeFlavor::Block => ThemeFlavor::Classic,
            ThemeFlavor::Classic => ThemeFlavor::Block,
        }
    }

    pub fn is_block(&self) -> bool {
        matches!(self, ThemeFlavor::Block)
    }
}

impl fmt::Display for ThemeFlavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// The scaffolded units that each get their own identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Plugin,
    Theme,
}

impl Unit {
    /// Suffix appended to the project slug ("plugin" / "theme")
    pub fn label(&self) -> &'static str {
        match self {
            Unit::Plugin => "plugin",
            Unit::Theme => "theme",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Unit::Plugin => "Plugin",
            Unit::Theme => "Theme",
        }
    }
}

/// Identifiers for one scaffolded unit (plugin or theme)
///
/// Derived from a single slug by default. When the user chooses to customize,
/// every field is edited independently and strict derivability no longer holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierSet {
    /// Directory name, e.g. `acme-corp-plugin`
    pub slug: String,
    /// PHP namespace, e.g. `AcmeCorpPlugin`
    pub namespace: String,
    /// Constant prefix, e.g. `ACME_CORP_PLUGIN`
    pub constant_prefix: String,
    /// Translation text domain, e.g. `acme-corp-plugin`
    pub text_domain: String,
    /// Hook/function prefix, e.g. `acme_corp_plugin`
    pub hook_prefix: String,
    /// Display name, e.g. `Acme Corp Plugin`
    pub human_name: String,
    /// npm / composer package name, e.g. `acme-corp-plugin`
    pub package_name: String,
}

impl IdentifierSet {
    /// Derive every identifier from the project slug and the unit label
    pub fn derive(project_slug: &str, unit: Unit) -> Self {
        let slug = format!("{}-{}", project_slug, unit.label());

        Self {
            namespace: naming::to_pascal(&slug),
            constant_prefix: naming::to_constant(&slug),
            text_domain: slug.clone(),
            hook_prefix: naming::to_snake(&slug),
            human_name: naming::to_title(&slug),
            package_name: slug.clone(),
            slug,
        }
    }
}

/// Optional project metadata. Empty fields contribute no replacements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectMetadata {
    pub author_name: String,
    pub author_email: String,
    pub author_uri: String,
    pub description: String,
    pub composer_vendor: String,
    pub homepage_url: String,
    pub repository_url: String,
}

/// Everything a run needs, fixed once the user confirms
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    pub project_name: String,
    pub project_slug: String,
    pub hosting: HostingChoice,
    pub flavor: ThemeFlavor,
    pub plugin: IdentifierSet,
    pub theme: IdentifierSet,
    pub metadata: ProjectMetadata,
}

impl Configuration {
    /// Lines shown right before the confirmation prompt
    pub fn change_summary(&self) -> String {
        let mut lines = vec![
            format!("Hosting:     {}", self.hosting),
            format!("Theme type:  {}", self.flavor),
            format!("Plugin:      {} ({})", self.plugin.slug, self.plugin.namespace),
            format!("Theme:       {} ({})", self.theme.slug, self.theme.namespace),
        ];

        if !self.metadata.author_name.is_empty() {
            lines.push(format!("Author:      {}", self.metadata.author_name));
        }
        if !self.metadata.repository_url.is_empty() {
            lines.push(format!("Repository:  {}", self.metadata.repository_url));
        }

        lines.join("\n")
    }

    /// Path of the plugin directory relative to the project root, after the run
    pub fn plugin_path(&self) -> String {
        format!("{}/{}", self.hosting.mount_dir(), self.plugin.slug)
    }

    /// Path of the theme directory relative to the project root, after the run
    pub fn theme_path(&self) -> String {
        format!("themes/{}", self.theme.slug)
    }
}
