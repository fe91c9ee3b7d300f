//! Error types emitted by the observatory CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use observatory_data::DatasetError;
use thiserror::Error;

/// Errors emitted by the observatory CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Name of the missing option.
        field: &'static str,
        /// Environment variable that can supply the option.
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Name of the option that referenced the path.
        field: &'static str,
        /// The path that does not exist.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Name of the option that referenced the path.
        field: &'static str,
        /// The path that is not a file.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Name of the option that referenced the path.
        field: &'static str,
        /// The path that could not be inspected.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// Reading or loading the dataset failed.
    #[error(transparent)]
    Dataset(#[from] Box<DatasetError>),
    /// The scatter count is outside the slider's range or off its step.
    #[error("count {count} must be between {min} and {max} in steps of {step}")]
    InvalidCount {
        /// The requested count.
        count: u32,
        /// Minimum allowed count.
        min: u32,
        /// Maximum allowed count.
        max: u32,
        /// Step between allowed counts.
        step: u32,
    },
    /// The requested primary type does not occur in the dataset.
    #[error("unknown type `{requested}` (choose one of: {})", .choices.join(", "))]
    UnknownType {
        /// The type that was requested.
        requested: String,
        /// Types present in the dataset.
        choices: Vec<String>,
    },
    /// Serialising command output failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}

impl From<DatasetError> for CliError {
    fn from(err: DatasetError) -> Self {
        Self::Dataset(Box::new(err))
    }
}
