//! Prompt-driven resolution of the run configuration

use super::{Configuration, ConfigurationBuilder, HostingChoice, ThemeFlavor, Unit};
use crate::error::ScaffoldError;
use crate::prompt::Prompter;
use crate::runtime::RepositoryContext;
use anyhow::Result;

const NAME_REQUIRED: &str = "Project name is required.";

/// Whether derived identifiers are taken as-is or edited one by one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewMode {
    Accept,
    Customize,
}

/// Ask every question of the prompt phase and produce the final configuration
///
/// The confirmation step is not part of this; see `workflow::prepare`.
pub fn resolve<P: Prompter>(prompter: &mut P, context: &RepositoryContext) -> Result<Configuration> {
    let hosting = prompter.select(
        "What hosting platform will this project use?",
        &[
            (HostingChoice::Standard, "Standard WordPress"),
            (HostingChoice::Vip, "WordPress VIP"),
        ],
    )?;

    let flavor = prompter.select(
        "Which theme type would you like to use?",
        &[
            (ThemeFlavor::Block, "Block Theme (Recommended)"),
            (ThemeFlavor::Classic, "Classic Theme"),
        ],
    )?;

    let mut builder = loop {
        let name = prompter.text(
            "Project name (human-readable, e.g. \"Acme Corp\"):",
            "Acme Corp",
            NAME_REQUIRED,
        )?;
        match ConfigurationBuilder::new(&name, hosting, flavor) {
            Ok(builder) => break builder.with_repository(context),
            Err(ScaffoldError::EmptyProjectName) => {
                prompter.warning(NAME_REQUIRED)?;
            }
            Err(e) => return Err(e.into()),
        }
    };

    prompter.note("Derived values", &builder.derived_summary())?;

    let mode = prompter.select(
        "How would you like to proceed?",
        &[
            (
                ReviewMode::Accept,
                "Accept all derived values and continue to metadata",
            ),
            (ReviewMode::Customize, "Customize each value individually"),
        ],
    )?;

    if mode == ReviewMode::Customize {
        for unit in [Unit::Plugin, Unit::Theme] {
            customize_unit(prompter, &mut builder, unit)?;
        }
    }

    prompt_metadata(prompter, &mut builder)?;

    Ok(builder.build())
}

fn customize_unit<P: Prompter>(
    prompter: &mut P,
    builder: &mut ConfigurationBuilder,
    unit: Unit,
) -> Result<()> {
    let name = unit.display_name();
    prompter.section(&format!("{} configuration", name))?;

    let set = builder.unit_mut(unit);
    set.slug = prompter.input(&format!("{} slug / directory:", name), &set.slug)?;
    set.namespace = prompter.input(&format!("{} PHP namespace:", name), &set.namespace)?;
    set.constant_prefix =
        prompter.input(&format!("{} constant prefix:", name), &set.constant_prefix)?;
    set.text_domain = prompter.input(&format!("{} text domain:", name), &set.text_domain)?;
    set.hook_prefix = prompter.input(&format!("{} hook prefix:", name), &set.hook_prefix)?;
    set.human_name = prompter.input(&format!("{} human name:", name), &set.human_name)?;
    set.package_name =
        prompter.input(&format!("{} npm package name:", name), &set.package_name)?;

    Ok(())
}

fn prompt_metadata<P: Prompter>(prompter: &mut P, builder: &mut ConfigurationBuilder) -> Result<()> {
    prompter.section("Project metadata")?;

    let meta = builder.metadata_mut();
    meta.author_name = prompter.input("Author name:", &meta.author_name)?;
    meta.author_email = prompter.input("Author email:", &meta.author_email)?;
    meta.author_uri = prompter.input("Author URI:", &meta.author_uri)?;
    meta.description = prompter.input("Project description:", &meta.description)?;
    meta.composer_vendor = prompter.input("Composer vendor slug:", &meta.composer_vendor)?;
    meta.homepage_url = prompter.input("Homepage URL:", &meta.homepage_url)?;
    meta.repository_url = prompter.input("Repository URL:", &meta.repository_url)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::{Answer, ScriptedPrompter};

    fn metadata_defaults() -> Vec<Answer> {
        vec![Answer::Default; 7]
    }

    #[test]
    fn test_accept_defaults() {
        let mut answers = vec![
            Answer::Choose(0),
            Answer::Choose(0),
            Answer::text("Acme Corp"),
            Answer::Choose(0),
        ];
        answers.extend(metadata_defaults());
        let mut prompter = ScriptedPrompter::new(answers);

        let config = resolve(&mut prompter, &RepositoryContext::default()).unwrap();

        assert_eq!(config.hosting, HostingChoice::Standard);
        assert_eq!(config.flavor, ThemeFlavor::Block);
        assert_eq!(config.plugin.slug, "acme-corp-plugin");
        assert_eq!(config.theme.namespace, "AcmeCorpTheme");
        assert_eq!(config.metadata.composer_vendor, "acme-corp");
        assert_eq!(config.metadata.description, "");
        assert_eq!(prompter.remaining(), 0);
    }

    #[test]
    fn test_empty_name_is_asked_again() {
        let mut answers = vec![
            Answer::Choose(1),
            Answer::Choose(1),
            Answer::text("   "),
            Answer::text("Acme Corp"),
            Answer::Choose(0),
        ];
        answers.extend(metadata_defaults());
        let mut prompter = ScriptedPrompter::new(answers);

        let config = resolve(&mut prompter, &RepositoryContext::default()).unwrap();

        assert_eq!(config.hosting, HostingChoice::Vip);
        assert_eq!(config.flavor, ThemeFlavor::Classic);
        assert_eq!(config.project_slug, "acme-corp");
        assert!(prompter
            .transcript()
            .iter()
            .any(|line| line == "Project name is required."));
    }

    #[test]
    fn test_customize_prompts_every_field() {
        let mut answers = vec![
            Answer::Choose(0),
            Answer::Choose(0),
            Answer::text("Acme Corp"),
            Answer::Choose(1),
            Answer::text("acme-core"),
        ];
        // remaining 13 identifier fields keep their defaults
        answers.extend(vec![Answer::Default; 13]);
        answers.extend(metadata_defaults());
        let mut prompter = ScriptedPrompter::new(answers);

        let config = resolve(&mut prompter, &RepositoryContext::default()).unwrap();

        assert_eq!(config.plugin.slug, "acme-core");
        assert_eq!(config.plugin.namespace, "AcmeCorpPlugin");
        assert_eq!(config.theme.slug, "acme-corp-theme");
        assert_eq!(prompter.remaining(), 0);
    }

    #[test]
    fn test_metadata_prefilled_from_repository() {
        let mut answers = vec![
            Answer::Choose(0),
            Answer::Choose(0),
            Answer::text("Acme Corp"),
            Answer::Choose(0),
            Answer::text("Jane Doe"),
        ];
        answers.extend(vec![Answer::Default; 6]);
        let mut prompter = ScriptedPrompter::new(answers);
        let context = RepositoryContext::from_url("git@github.com:acme/site.git");

        let config = resolve(&mut prompter, &context).unwrap();

        assert_eq!(config.metadata.author_name, "Jane Doe");
        assert_eq!(config.metadata.composer_vendor, "acme");
        assert_eq!(config.metadata.repository_url, "https://github.com/acme/site");
    }

    #[test]
    fn test_interrupt_propagates_as_abort() {
        let mut prompter = ScriptedPrompter::new([Answer::Choose(0)]);
        let err = resolve(&mut prompter, &RepositoryContext::default()).unwrap_err();
        assert!(ScaffoldError::is_abort(&err));
    }
}
