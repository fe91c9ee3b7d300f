//! By-type command: highest base experience within one primary type.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use observatory_core::{CategoryField, RankField, Store};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::dataset::{DatasetConfig, OutputFormat};
use crate::views::{BarView, write_view};
use crate::{
    ARG_COUNT, ARG_DATA, ARG_FORMAT, ARG_SKIP_MALFORMED, ARG_TYPE, CliError, ENV_BY_TYPE_TYPE,
};

/// Bars shown when no count is configured.
pub(crate) const DEFAULT_BAR_COUNT: usize = 10;

/// CLI arguments for the `by-type` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Select one primary type and list the Pokémon of that type \
                 with the most base experience. Options can come from CLI \
                 flags, configuration files, or environment variables.",
    about = "Highest base experience Pokémon of one type"
)]
#[ortho_config(prefix = "OBSERVATORY")]
pub(crate) struct ByTypeArgs {
    /// Primary type to filter by, as listed by the `types` command.
    #[arg(long = ARG_TYPE, value_name = "type")]
    #[serde(default)]
    pub(crate) primary_type: Option<String>,
    /// How many bars to show. Negative values show none.
    #[arg(long = ARG_COUNT, value_name = "n", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) count: Option<i64>,
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

impl ByTypeArgs {
    pub(crate) fn into_config(self) -> Result<ByTypeConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ByTypeConfig::try_from(merged)
    }
}

/// Resolved `by-type` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ByTypeConfig {
    pub(crate) primary_type: String,
    pub(crate) count: usize,
    pub(crate) dataset: DatasetConfig,
}

impl TryFrom<ByTypeArgs> for ByTypeConfig {
    type Error = CliError;

    fn try_from(args: ByTypeArgs) -> Result<Self, Self::Error> {
        let primary_type = args.primary_type.ok_or(CliError::MissingArgument {
            field: ARG_TYPE,
            env: ENV_BY_TYPE_TYPE,
        })?;
        let count = args
            .count
            .map_or(DEFAULT_BAR_COUNT, |n| usize::try_from(n).unwrap_or(0));
        Ok(Self {
            primary_type,
            count,
            dataset: DatasetConfig::resolve(args.data, args.skip_malformed, args.format),
        })
    }
}

/// Build the bar view for `primary_type`, which must occur in the store.
pub(crate) fn by_type_view(
    store: &Store,
    primary_type: &str,
    count: usize,
) -> Result<BarView, CliError> {
    let choices = store.distinct_values(CategoryField::PrimaryType);
    if !choices.contains(primary_type) {
        return Err(CliError::UnknownType {
            requested: primary_type.to_owned(),
            choices: choices.into_iter().map(str::to_owned).collect(),
        });
    }
    let top = store.top_in(
        CategoryField::PrimaryType,
        primary_type,
        RankField::BaseExperience,
        count,
    );
    Ok(BarView::new(primary_type, &top))
}

pub(crate) fn run_by_type_with(args: ByTypeArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let store = config.dataset.load()?;
    let view = by_type_view(&store, &config.primary_type, config.count)?;
    write_view(writer, &view, config.dataset.format)
}
