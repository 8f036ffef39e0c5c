//! Accumulates prompt answers into one `Configuration`

use super::{Configuration, HostingChoice, IdentifierSet, ProjectMetadata, ThemeFlavor, Unit};
use crate::error::ScaffoldError;
use crate::naming;
use crate::runtime::RepositoryContext;

/// Mutable staging area for the prompt phase
///
/// Holds the derived defaults as soon as the project name is known, lets the
/// prompt layer overwrite individual fields, and is consumed by `build` so the
/// resulting `Configuration` cannot be changed behind the planner's back.
#[derive(Debug, Clone)]
pub struct ConfigurationBuilder {
    project_name: String,
    project_slug: String,
    hosting: HostingChoice,
    flavor: ThemeFlavor,
    plugin: IdentifierSet,
    theme: IdentifierSet,
    metadata: ProjectMetadata,
}

impl ConfigurationBuilder {
    /// Start from a project name and derive every default from its slug
    pub fn new(
        project_name: &str,
        hosting: HostingChoice,
        flavor: ThemeFlavor,
    ) -> Result<Self, ScaffoldError> {
        let project_name = project_name.trim();
        if project_name.is_empty() {
            return Err(ScaffoldError::EmptyProjectName);
        }

        let project_slug = naming::to_slug(project_name);

        Ok(Self {
            project_name: project_name.to_string(),
            plugin: IdentifierSet::derive(&project_slug, Unit::Plugin),
            theme: IdentifierSet::derive(&project_slug, Unit::Theme),
            metadata: ProjectMetadata {
                composer_vendor: project_slug.clone(),
                ..ProjectMetadata::default()
            },
            project_slug,
            hosting,
            flavor,
        })
    }

    /// Pre-fill the composer vendor and repository URL from the git remote
    pub fn with_repository(mut self, context: &RepositoryContext) -> Self {
        if !context.org.is_empty() {
            self.metadata.composer_vendor = context.org.clone();
        }
        if !context.url.is_empty() {
            self.metadata.repository_url = context.url.clone();
        }
        self
    }

    pub fn project_slug(&self) -> &str {
        &self.project_slug
    }

    pub fn plugin_mut(&mut self) -> &mut IdentifierSet {
        &mut self.plugin
    }

    pub fn theme_mut(&mut self) -> &mut IdentifierSet {
        &mut self.theme
    }

    pub fn metadata_mut(&mut self) -> &mut ProjectMetadata {
        &mut self.metadata
    }

    /// Identifiers of a unit as currently staged
    pub fn unit(&self, unit: Unit) -> &IdentifierSet {
        match unit {
            Unit::Plugin => &self.plugin,
            Unit::Theme => &self.theme,
        }
    }

    pub fn unit_mut(&mut self, unit: Unit) -> &mut IdentifierSet {
        match unit {
            Unit::Plugin => &mut self.plugin,
            Unit::Theme => &mut self.theme,
        }
    }

    /// Lines describing the derived defaults, shown before the accept/customize choice
    pub fn derived_summary(&self) -> String {
        let mut lines = Vec::new();

        for unit in [Unit::Plugin, Unit::Theme] {
            let set = self.unit(unit);
            let name = unit.display_name();
            lines.push(format!("{} directory:    {}", name, set.slug));
            lines.push(format!("{} namespace:    {}", name, set.namespace));
            lines.push(format!("{} constants:    {}_*", name, set.constant_prefix));
            lines.push(format!("{} text domain:  {}", name, set.text_domain));
            lines.push(format!("{} human name:   {}", name, set.human_name));
            lines.push(String::new());
        }

        lines.push(format!("Composer vendor:     {}", self.metadata.composer_vendor));
        if !self.metadata.repository_url.is_empty() {
            lines.push(format!("Repository URL:      {}", self.metadata.repository_url));
        }

        lines.join("\n")
    }

    pub fn build(self) -> Configuration {
        Configuration {
            project_name: self.project_name,
            project_slug: self.project_slug,
            hosting: self.hosting,
            flavor: self.flavor,
            plugin: self.plugin,
            theme: self.theme,
            metadata: self.metadata,
        }
    }
}
