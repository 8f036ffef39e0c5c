//! Probing of the environment the scaffolder runs in
//!
//! This module provides:
//! - Git remote detection for pre-filling repository metadata

pub mod git;

pub use git::{extract_org, normalize_remote_url, probe_repository, RepositoryContext};
