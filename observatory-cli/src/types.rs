//! Types command: the primary types offered by the type selector.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use observatory_core::{CategoryField, Store};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::dataset::{DatasetConfig, OutputFormat};
use crate::views::{TypesView, write_view};
use crate::{ARG_DATA, ARG_FORMAT, ARG_SKIP_MALFORMED, CliError};

/// CLI arguments for the `types` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(about = "List the distinct primary types in the dataset")]
#[ortho_config(prefix = "OBSERVATORY")]
pub(crate) struct TypesArgs {
    /// Path to the CSV dataset.
    #[arg(long = ARG_DATA, value_name = "path")]
    #[serde(default)]
    pub(crate) data: Option<Utf8PathBuf>,
    /// Leave malformed rows out instead of failing.
    #[arg(
        long = ARG_SKIP_MALFORMED,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    #[serde(default)]
    pub(crate) skip_malformed: Option<bool>,
    /// Output format.
    #[arg(long = ARG_FORMAT, value_enum)]
    #[serde(default)]
    pub(crate) format: Option<OutputFormat>,
}

impl TypesArgs {
    pub(crate) fn into_config(self) -> Result<DatasetConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        Ok(DatasetConfig::resolve(
            merged.data,
            merged.skip_malformed,
            merged.format,
        ))
    }
}

pub(crate) fn types_view(store: &Store) -> TypesView {
    TypesView {
        types: store
            .distinct_values(CategoryField::PrimaryType)
            .into_iter()
            .map(str::to_owned)
            .collect(),
    }
}

pub(crate) fn run_types_with(args: TypesArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let store = config.load()?;
    write_view(writer, &types_view(&store), config.format)
}
