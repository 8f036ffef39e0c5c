//! Error types shared by the scaffolding engine and the prompt layer

use std::path::PathBuf;
use thiserror::Error;

/// Domain errors that callers need to tell apart from generic I/O failures
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// The user interrupted a prompt (Esc / Ctrl+C). Treated as a clean exit.
    #[error("scaffolding aborted by user")]
    Aborted,

    /// The project name was empty after trimming
    #[error("project name is required")]
    EmptyProjectName,

    /// A JSON manifest in the starter kit could not be parsed
    #[error("invalid manifest {}: {source}", path.display())]
    InvalidManifest {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl ScaffoldError {
    /// Check whether an error chain bottoms out in a user abort
    pub fn is_abort(err: &anyhow::Error) -> bool {
        matches!(err.downcast_ref::<ScaffoldError>(), Some(ScaffoldError::Aborted))
    }
}
