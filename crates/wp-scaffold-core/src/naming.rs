//! Identifier derivation from a human-readable project name
//!
//! Every identifier the scaffolder writes into the starter kit is a projection of
//! one slug. `to_slug` turns the raw name into that slug; the other functions are
//! independent case transforms of the slug and never look at the raw name.

/// Convert "Acme Corp" (or "AcmeCorp", "acme_corp") to "acme-corp"
///
/// Never fails. Input made only of symbols produces an empty slug, so callers
/// validate the project name before deriving anything from it.
pub fn to_slug(name: &str) -> String {
    let mut spaced = String::with_capacity(name.len() + 4);
    let mut prev: Option<char> = None;

    for c in name.chars() {
        if c.is_ascii_uppercase() && prev.is_some_and(|p| p.is_ascii_lowercase()) {
            spaced.push('-');
        }
        spaced.push(c);
        prev = Some(c);
    }

    let mut slug = String::with_capacity(spaced.len());
    let mut in_separator = false;

    for c in spaced.chars() {
        if c.is_whitespace() || c == '_' {
            if !in_separator {
                slug.push('-');
            }
            in_separator = true;
            continue;
        }
        in_separator = false;

        if c.is_ascii_alphanumeric() || c == '-' {
            slug.push(c.to_ascii_lowercase());
        }
    }

    slug
}

/// Convert "acme-corp" to "AcmeCorp"
pub fn to_pascal(slug: &str) -> String {
    slug.split('-').map(capitalize).collect()
}

/// Convert "acme-corp" to "ACME_CORP"
pub fn to_constant(slug: &str) -> String {
    slug.replace('-', "_").to_uppercase()
}

/// Convert "acme-corp" to "acme_corp"
pub fn to_snake(slug: &str) -> String {
    slug.replace('-', "_")
}

/// Convert "acme-corp" to "Acme Corp"
pub fn to_title(slug: &str) -> String {
    slug.split('-').map(capitalize).collect::<Vec<_>>().join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
