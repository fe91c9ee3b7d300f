//! Command-line interface for the Pokémon stats observatory.
//!
//! Each subcommand answers one of the dashboard's questions from the CSV
//! dataset and prints the chart payload as JSON or plain text.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};
use std::io::Write;

mod by_type;
mod dataset;
mod error;
mod scatter;
mod types;
mod views;

pub use error::CliError;

use by_type::{ByTypeArgs, run_by_type_with};
use scatter::{ScatterArgs, run_scatter_with};
use types::{TypesArgs, run_types_with};

pub(crate) const ARG_DATA: &str = "data";
pub(crate) const ARG_COUNT: &str = "count";
pub(crate) const ARG_TYPE: &str = "type";
pub(crate) const ARG_SKIP_MALFORMED: &str = "skip-malformed";
pub(crate) const ARG_FORMAT: &str = "format";
pub(crate) const ENV_BY_TYPE_TYPE: &str = "OBSERVATORY_CMDS_BY_TYPE_PRIMARY_TYPE";

/// Run the observatory CLI with the current process arguments and
/// environment, writing results to standard output.
///
/// # Errors
/// Returns a [`CliError`] when arguments or configuration are invalid, the
/// dataset cannot be loaded, or output cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => return Err(CliError::ArgumentParsing(err)),
    };
    let mut stdout = std::io::stdout().lock();
    run_command(cli.command, &mut stdout)
}

fn run_command(command: Command, writer: &mut dyn Write) -> Result<(), CliError> {
    match command {
        Command::Scatter(args) => run_scatter_with(args, writer),
        Command::ByType(args) => run_by_type_with(args, writer),
        Command::Types(args) => run_types_with(args, writer),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "observatory",
    about = "Explore Pokémon stats from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Attack vs speed for the top Pokémon by base experience.
    Scatter(ScatterArgs),
    /// Highest base experience Pokémon of one primary type.
    ByType(ByTypeArgs),
    /// List the distinct primary types.
    Types(TypesArgs),
}

#[cfg(test)]
mod tests;
