//! Dataset options shared by every subcommand.

use camino::{Utf8Path, Utf8PathBuf};
use clap::ValueEnum;
use log::warn;
use observatory_core::{LoadPolicy, Store};
use observatory_data::{dataset_is_file, load_store};
use serde::{Deserialize, Serialize};

use crate::{ARG_DATA, CliError};

/// Dataset file read when `--data` is not given.
pub(crate) const DEFAULT_DATA_PATH: &str = "all_pokemon_data.csv";

/// How command output is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum OutputFormat {
    /// Pretty-printed JSON.
    #[default]
    Json,
    /// Plain text, one entry per line.
    Text,
}

/// Resolved dataset options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DatasetConfig {
    /// Path to the CSV dataset.
    pub(crate) data: Utf8PathBuf,
    /// Policy applied to malformed rows.
    pub(crate) policy: LoadPolicy,
    /// Output rendering.
    pub(crate) format: OutputFormat,
}

impl DatasetConfig {
    /// Apply defaults to the merged option values.
    pub(crate) fn resolve(
        data: Option<Utf8PathBuf>,
        skip_malformed: Option<bool>,
        format: Option<OutputFormat>,
    ) -> Self {
        let policy = if skip_malformed.unwrap_or(false) {
            LoadPolicy::Skip
        } else {
            LoadPolicy::Abort
        };
        Self {
            data: data.unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_DATA_PATH)),
            policy,
            format: format.unwrap_or_default(),
        }
    }

    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.data, ARG_DATA)
    }

    /// Read the dataset and build the store.
    pub(crate) fn load(&self) -> Result<Store, CliError> {
        self.validate_sources()?;
        let report = load_store(&self.data, self.policy)?;
        if !report.skipped.is_empty() {
            warn!(
                "Skipped {} malformed rows in {}",
                report.skipped.len(),
                self.data
            );
        }
        Ok(report.store)
    }
}

fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match dataset_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}
