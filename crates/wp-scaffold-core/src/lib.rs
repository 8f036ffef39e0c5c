//! WP Scaffold Core - Rewrites the WordPress starter kit into a named project
//!
//! A run asks a handful of questions, derives every identifier the starter kit
//! uses from the project name, then rewrites the checkout in place: file
//! contents, directory and file names, and a few config files.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Naming transforms, replacement plan, tree rewriting
//! - **Layer 2: Workflow Orchestration** - `Prompter` trait, `ProductConfig` trait, `workflow::prepare`
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use wp_scaffold_core::prompt::{Answer, ScriptedPrompter};
//! use wp_scaffold_core::{templates, workflow};
//!
//! let mut prompter = ScriptedPrompter::new(answers);
//! if let Some(config) = workflow::prepare(&mut prompter, &root)? {
//!     let report = templates::apply(&MyProduct, &root, &config)?;
//! }
//! ```

pub mod config;
pub mod error;
pub mod naming;
pub mod product;
pub mod prompt;
pub mod runtime;
pub mod templates;
pub mod workflow;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use config::{Configuration, ConfigurationBuilder, HostingChoice, IdentifierSet, ThemeFlavor};
pub use error::ScaffoldError;
pub use product::ProductConfig;
pub use prompt::Prompter;
pub use templates::{apply, ApplyReport, Change, ReplacementPlan};

#[cfg(feature = "tui")]
pub use tui::run;
