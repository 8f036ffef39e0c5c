//! Ordered literal search/replace plan

use super::tokens::{self, UnitTokens};
use crate::config::{Configuration, IdentifierSet};

/// One literal substitution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplacementPair {
    pub search: String,
    pub replace: String,
}

/// The substitutions of a run, longest search string first
///
/// When one token is a substring of another (`10up-plugin` inside
/// `mu-plugins/10up-plugin`), the longer one must be consumed first or the
/// shorter one would split it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplacementPlan {
    pairs: Vec<ReplacementPair>,
}

impl ReplacementPlan {
    /// Build the plan for a resolved configuration
    pub fn build(config: &Configuration) -> Self {
        let mut plan = Self::default();
        let meta = &config.metadata;

        // Only the kept theme's tokens; the other theme is deleted before the pass
        plan.push_unit(tokens::theme_tokens(config.flavor), &config.theme);
        plan.push_unit(&tokens::PLUGIN, &config.plugin);

        if config.hosting.is_vip() {
            plan.push(tokens::PLUGIN_MOUNT_PATH, tokens::VIP_PLUGIN_MOUNT_PATH);
            plan.push(tokens::RULESET_MOUNT, tokens::VIP_RULESET_MOUNT);
        }

        let vendor = &meta.composer_vendor;
        plan.push(
            tokens::ROOT_COMPOSER_PACKAGE,
            format!("{}/{}", vendor, config.project_slug),
        );
        plan.push(
            tokens::PLUGIN_COMPOSER_PACKAGE,
            format!("{}/{}", vendor, config.plugin.package_name),
        );
        for package in tokens::THEME_COMPOSER_PACKAGES {
            plan.push(package, format!("{}/{}", vendor, config.theme.package_name));
        }
        plan.push(tokens::ROOT_NPM_PACKAGE, config.project_slug.as_str());

        if !meta.author_email.is_empty() {
            plan.push(tokens::AUTHOR_EMAIL, meta.author_email.as_str());
        }
        if !meta.author_uri.is_empty() {
            plan.push(tokens::AUTHOR_URI, meta.author_uri.as_str());
        }
        if !meta.description.is_empty() {
            for placeholder in tokens::DESCRIPTIONS {
                plan.push(placeholder, meta.description.as_str());
            }
        }
        if !meta.repository_url.is_empty() {
            for placeholder in tokens::REPOSITORY_URLS {
                plan.push(placeholder, meta.repository_url.as_str());
            }
        }
        if !meta.homepage_url.is_empty() {
            plan.push(tokens::HOMEPAGE_URL, meta.homepage_url.as_str());
        }

        if !meta.author_name.is_empty() {
            for (prefix, suffix) in tokens::AUTHOR_FIELDS {
                plan.push(
                    format!("{}{}{}", prefix, tokens::AUTHOR_NAME, suffix),
                    format!("{}{}{}", prefix, meta.author_name, suffix),
                );
            }
        }

        // Stable: equal-length pairs keep their insertion order
        plan.pairs.sort_by(|a, b| b.search.len().cmp(&a.search.len()));

        plan
    }

    /// Build a small ad-hoc plan, ordered like the main one
    pub fn from_pairs<S, R>(pairs: impl IntoIterator<Item = (S, R)>) -> Self
    where
        S: Into<String>,
        R: Into<String>,
    {
        let mut plan = Self::default();
        for (search, replace) in pairs {
            plan.push(search, replace);
        }
        plan.pairs.sort_by(|a, b| b.search.len().cmp(&a.search.len()));
        plan
    }

    pub fn pairs(&self) -> &[ReplacementPair] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Apply every pair in order, replacing all non-overlapping occurrences
    pub fn apply(&self, content: &str) -> String {
        let mut updated = content.to_string();
        for pair in &self.pairs {
            if updated.contains(pair.search.as_str()) {
                updated = updated.replace(pair.search.as_str(), &pair.replace);
            }
        }
        updated
    }

    fn push(&mut self, search: impl Into<String>, replace: impl Into<String>) {
        self.pairs.push(ReplacementPair {
            search: search.into(),
            replace: replace.into(),
        });
    }

    fn push_unit(&mut self, starter: &UnitTokens, resolved: &IdentifierSet) {
        self.push(starter.namespace, resolved.namespace.as_str());
        self.push(starter.constant_prefix, resolved.constant_prefix.as_str());
        self.push(starter.slug_alias, resolved.slug.as_str());
        self.push(starter.hook_prefix, resolved.hook_prefix.as_str());
        self.push(starter.directory, resolved.slug.as_str());
        self.push(starter.human_name, resolved.human_name.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigurationBuilder, HostingChoice, ThemeFlavor};

    fn config(hosting: HostingChoice, flavor: ThemeFlavor) -> Configuration {
        ConfigurationBuilder::new("Acme Corp", hosting, flavor)
            .unwrap()
            .build()
    }

    fn full_config(hosting: HostingChoice, flavor: ThemeFlavor) -> Configuration {
        let mut builder = ConfigurationBuilder::new("Acme Corp", hosting, flavor).unwrap();
        let meta = builder.metadata_mut();
        meta.author_name = "Jane Doe".to_string();
        meta.author_email = "jane@acme.test".to_string();
        meta.author_uri = "https://acme.test".to_string();
        meta.description = "A sample project".to_string();
        meta.composer_vendor = "acme".to_string();
        meta.homepage_url = "https://www.acme.test".to_string();
        meta.repository_url = "https://git.acme.test/site".to_string();
        builder.build()
    }

    /// Every literal the starter carries for a flavor, one per line
    fn starter_fixture(flavor: ThemeFlavor) -> (String, Vec<String>) {
        let theme = tokens::theme_tokens(flavor);
        let mut known: Vec<String> = Vec::new();
        for unit in [theme, &tokens::PLUGIN] {
            known.extend(
                [
                    unit.namespace,
                    unit.constant_prefix,
                    unit.slug_alias,
                    unit.hook_prefix,
                    unit.directory,
                    unit.human_name,
                ]
                .map(String::from),
            );
        }
        known.push(tokens::PLUGIN_MOUNT_PATH.to_string());
        known.push(tokens::RULESET_MOUNT.to_string());
        known.push(tokens::ROOT_COMPOSER_PACKAGE.to_string());
        known.push(tokens::PLUGIN_COMPOSER_PACKAGE.to_string());
        known.extend(tokens::THEME_COMPOSER_PACKAGES.map(String::from));
        known.push(tokens::ROOT_NPM_PACKAGE.to_string());
        known.push(tokens::AUTHOR_EMAIL.to_string());
        known.push(tokens::AUTHOR_URI.to_string());
        known.extend(tokens::DESCRIPTIONS.map(String::from));
        known.extend(tokens::REPOSITORY_URLS.map(String::from));
        known.push(tokens::HOMEPAGE_URL.to_string());
        for (prefix, suffix) in tokens::AUTHOR_FIELDS {
            known.push(format!("{}{}{}", prefix, tokens::AUTHOR_NAME, suffix));
        }

        // Tokens glued together as well as on their own lines
        let fixture = format!("{}\n{}", known.join("\n"), known.join(" "));
        (fixture, known)
    }

    #[test]
    fn test_plan_sorted_longest_first() {
        for hosting in [HostingChoice::Standard, HostingChoice::Vip] {
            for flavor in [ThemeFlavor::Block, ThemeFlavor::Classic] {
                let plan = ReplacementPlan::build(&full_config(hosting, flavor));
                for window in plan.pairs().windows(2) {
                    assert!(window[0].search.len() >= window[1].search.len());
                }
            }
        }
    }

    #[test]
    fn test_replaces_every_starter_token() {
        for flavor in [ThemeFlavor::Block, ThemeFlavor::Classic] {
            let plan = ReplacementPlan::build(&full_config(HostingChoice::Vip, flavor));
            let (fixture, known) = starter_fixture(flavor);

            let result = plan.apply(&fixture);

            for token in &known {
                assert!(
                    !result.contains(token.as_str()),
                    "{:?}: token {:?} survived in\n{}",
                    flavor,
                    token,
                    result
                );
            }
        }
    }

    #[test]
    fn test_block_plan_maps_block_tokens() {
        let plan = ReplacementPlan::build(&config(HostingChoice::Standard, ThemeFlavor::Block));
        let result = plan.apply(
            "namespace TenupBlockTheme;\ndefine( 'TENUP_BLOCK_THEME_VERSION', '1' );\n\
             namespace TenUpPlugin;\nrequire '10up-plugin/plugin.php';",
        );

        assert!(result.contains("namespace AcmeCorpTheme;"));
        assert!(result.contains("'ACME_CORP_THEME_VERSION'"));
        assert!(result.contains("namespace AcmeCorpPlugin;"));
        assert!(result.contains("'acme-corp-plugin/plugin.php'"));
    }

    #[test]
    fn test_unchosen_theme_tokens_untouched() {
        let plan = ReplacementPlan::build(&config(HostingChoice::Standard, ThemeFlavor::Block));
        let result = plan.apply("define( 'TENUP_THEME_VERSION', '1' ); // TenUpTheme");
        assert_eq!(result, "define( 'TENUP_THEME_VERSION', '1' ); // TenUpTheme");
    }

    #[test]
    fn test_slug_spellings_follow_slug_not_text_domain() {
        let mut builder =
            ConfigurationBuilder::new("Acme Corp", HostingChoice::Standard, ThemeFlavor::Classic)
                .unwrap();
        builder.theme_mut().text_domain = "acme-td".to_string();
        builder.plugin_mut().text_domain = "acme-plugin-td".to_string();
        let plan = ReplacementPlan::build(&builder.build());

        assert_eq!(
            plan.apply("firefly-theme | 10up-theme | tenup-plugin | 10up-plugin"),
            "acme-corp-theme | acme-corp-theme | acme-corp-plugin | acme-corp-plugin"
        );
    }

    #[test]
    fn test_vip_paths_only_for_vip() {
        let standard = ReplacementPlan::build(&config(HostingChoice::Standard, ThemeFlavor::Block));
        let vip = ReplacementPlan::build(&config(HostingChoice::Vip, ThemeFlavor::Block));
        let ruleset = "<file>mu-plugins</file>\nwp-content/mu-plugins/10up-plugin";

        assert_eq!(
            standard.apply(ruleset),
            "<file>mu-plugins</file>\nwp-content/mu-plugins/acme-corp-plugin"
        );
        assert_eq!(
            vip.apply(ruleset),
            "<file>client-mu-plugins</file>\nwp-content/client-mu-plugins/acme-corp-plugin"
        );
        assert_eq!(vip.len(), standard.len() + 2);
    }

    #[test]
    fn test_empty_metadata_contributes_nothing() {
        let plan = ReplacementPlan::build(&config(HostingChoice::Standard, ThemeFlavor::Block));
        let text = "info@10up.com https://10up.com Project description. https://project-domain.tld";
        assert_eq!(plan.apply(text), text);
        assert!(!plan.is_empty());
    }

    #[test]
    fn test_descriptions_share_one_value() {
        let plan = ReplacementPlan::build(&full_config(HostingChoice::Standard, ThemeFlavor::Classic));
        for placeholder in tokens::DESCRIPTIONS {
            assert_eq!(plan.apply(placeholder), "A sample project");
        }
    }

    #[test]
    fn test_author_name_only_in_known_fields() {
        let plan = ReplacementPlan::build(&full_config(HostingChoice::Standard, ThemeFlavor::Block));
        let result = plan.apply(
            "\"name\": \"10up\",\n * Author:            10up\n\"10up-toolkit\": \"^6\"\n10up/phpcs-composer",
        );

        assert!(result.contains("\"name\": \"Jane Doe\""));
        assert!(result.contains("Author:            Jane Doe"));
        assert!(result.contains("\"10up-toolkit\""));
        assert!(result.contains("10up/phpcs-composer"));
    }

    #[test]
    fn test_repository_url_beats_composer_package() {
        let plan = ReplacementPlan::build(&full_config(HostingChoice::Standard, ThemeFlavor::Block));
        assert_eq!(
            plan.apply("https://github.com/10up/wp-scaffold"),
            "https://git.acme.test/site"
        );
        assert_eq!(plan.apply("10up/wp-scaffold"), "acme/acme-corp");
    }
}
