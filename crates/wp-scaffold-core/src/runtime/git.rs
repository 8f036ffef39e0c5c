//! Best-effort probing of the surrounding git checkout
//!
//! Used to pre-fill the repository URL and composer vendor prompts. Nothing in
//! here is allowed to fail the run: a missing git binary, a directory that is not
//! a repository, or a repository without an `origin` remote all yield an empty
//! context.

use regex::Regex;
use std::path::Path;
use std::process::{Command, Stdio};
use std::sync::LazyLock;

static SSH_REMOTE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^git@([^:]+):").unwrap());

static GITHUB_ORG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"github\.com/([^/]+)").unwrap());

/// What could be learned about the project's repository
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepositoryContext {
    /// HTTPS-style `origin` URL without a `.git` suffix, or empty
    pub url: String,
    /// Lower-cased GitHub organization/user, or empty
    pub org: String,
}

impl RepositoryContext {
    /// Build a context from an already-known remote URL
    pub fn from_url(url: &str) -> Self {
        let url = normalize_remote_url(url);
        let org = extract_org(&url);
        Self { url, org }
    }

    pub fn is_empty(&self) -> bool {
        self.url.is_empty()
    }
}

/// Read the `origin` remote of the repository containing `root`
pub fn probe_repository(root: &Path) -> RepositoryContext {
    match remote_origin_url(root) {
        Some(url) => {
            let context = RepositoryContext::from_url(&url);
            tracing::debug!(url = %context.url, org = %context.org, "detected git remote");
            context
        }
        None => {
            tracing::debug!(root = %root.display(), "no git remote detected");
            RepositoryContext::default()
        }
    }
}

fn remote_origin_url(root: &Path) -> Option<String> {
    let output = Command::new("git")
        .args(["remote", "get-url", "origin"])
        .current_dir(root)
        .stderr(Stdio::null())
        .output()
        .ok()?;

    if !output.status.success() {
        return None;
    }

    let url = String::from_utf8(output.stdout).ok()?.trim().to_string();
    if url.is_empty() {
        None
    } else {
        Some(url)
    }
}

/// Normalize `git@host:org/repo.git` to `https://host/org/repo`
pub fn normalize_remote_url(url: &str) -> String {
    let url = url.trim();
    let url = if url.starts_with("git@") {
        SSH_REMOTE.replace(url, "https://$1/").into_owned()
    } else {
        url.to_string()
    };

    match url.strip_suffix(".git") {
        Some(stripped) => stripped.to_string(),
        None => url,
    }
}

/// Extract the organization/user segment from a GitHub URL
pub fn extract_org(url: &str) -> String {
    GITHUB_ORG
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_lowercase())
        .unwrap_or_default()
}
