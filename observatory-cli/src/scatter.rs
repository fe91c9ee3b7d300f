//! Scatter command: attack against speed for the most experienced Pokémon.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use log::debug;
use observatory_core::{RankField, Store};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::dataset::{DatasetConfig, OutputFormat};
use crate::views::{ScatterView, write_view};
use crate::{ARG_COUNT, ARG_DATA, ARG_FORMAT, ARG_SKIP_MALFORMED, CliError};

/// Smallest count the slider offers.
pub(crate) const MIN_COUNT: u32 = 10;
/// Largest count the slider offers.
pub(crate) const MAX_COUNT: u32 = 150;
/// Distance between slider positions.
pub(crate) const COUNT_STEP: u32 = 10;
/// Count used when none is configured.
pub(crate) const DEFAULT_COUNT: u32 = 100;

/// CLI arguments for the `scatter` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rank the dataset by base experience and plot attack \
                 against speed for the top entries. Options can come from \
                 CLI flags, configuration files, or environment variables.",
    about = "Attack vs speed for the top Pokémon by base experience"
)]
#[ortho_config(prefix = "OBSERVATORY")]
pub(crate) struct ScatterArgs {
    /// How many Pokémon to plot (10 to 150, in steps of 10).
    #[arg(long = ARG_COUNT, value_name = "n")]
    #[serde(default)]
    pub(crate) count: Option<u32>,
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

impl ScatterArgs {
    pub(crate) fn into_config(self) -> Result<ScatterConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ScatterConfig::try_from(merged)
    }
}

/// Resolved `scatter` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ScatterConfig {
    pub(crate) count: u32,
    pub(crate) dataset: DatasetConfig,
}

impl TryFrom<ScatterArgs> for ScatterConfig {
    type Error = CliError;

    fn try_from(args: ScatterArgs) -> Result<Self, Self::Error> {
        let count = args.count.unwrap_or(DEFAULT_COUNT);
        validate_count(count)?;
        Ok(Self {
            count,
            dataset: DatasetConfig::resolve(args.data, args.skip_malformed, args.format),
        })
    }
}

/// Reject counts the slider could not produce.
pub(crate) fn validate_count(count: u32) -> Result<(), CliError> {
    if (MIN_COUNT..=MAX_COUNT).contains(&count) && count.is_multiple_of(COUNT_STEP) {
        Ok(())
    } else {
        Err(CliError::InvalidCount {
            count,
            min: MIN_COUNT,
            max: MAX_COUNT,
            step: COUNT_STEP,
        })
    }
}

/// Build the scatter view for `count` records.
pub(crate) fn scatter_view(store: &Store, count: u32) -> ScatterView {
    let top = store.top_by(
        RankField::BaseExperience,
        usize::try_from(count).unwrap_or(usize::MAX),
    );
    debug!("Plotting {} of {} requested points", top.len(), count);
    ScatterView::new(count, &top)
}

pub(crate) fn run_scatter_with(args: ScatterArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let store = config.dataset.load()?;
    let view = scatter_view(&store, config.count);
    write_view(writer, &view, config.dataset.format)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<ScatterConfig, CliError> {
    let merged = ScatterArgs::merge_from_layers(layers).map_err(CliError::from)?;
    ScatterConfig::try_from(merged)
}
