//! Prompt phase of a run, independent of how prompts are rendered
//!
//! Nothing on disk changes before `prepare` returns a configuration; the
//! caller then hands it to `templates::apply`.

use crate::config::{self, Configuration};
use crate::prompt::Prompter;
use crate::runtime;
use anyhow::Result;
use std::path::Path;

/// Probe the repository, ask every question and get a final confirmation
///
/// Returns `None` when the user declines to apply the summary.
pub fn prepare<P: Prompter>(prompter: &mut P, root: &Path) -> Result<Option<Configuration>> {
    let context = runtime::probe_repository(root);
    let config = config::resolve(prompter, &context)?;

    prompter.note("Summary of changes", &config.change_summary())?;
    if !prompter.confirm("Apply these changes?", true)? {
        return Ok(None);
    }

    Ok(Some(config))
}
