//! CSV ingestion into [`RawRow`] values.
//!
//! The dataset is read with polars' CSV reader. Only the five columns the
//! store needs are consulted; any others are ignored. Rows are numbered from
//! zero, counting data rows only.
//!
//! A row whose name or stat cell is unusable is a row-scoped fault: under
//! [`LoadPolicy::Skip`] it is left out and reported, under
//! [`LoadPolicy::Abort`] it fails the read. Faults in the file as a whole
//! always fail the read.

mod cells;

use std::io;

use camino::{Utf8Path, Utf8PathBuf};
use log::{debug, warn};
use observatory_core::{LoadPolicy, RawRow};
use polars::prelude::{CsvReader, DataFrame, PolarsError, SerReader};
use thiserror::Error;

use crate::source::open_dataset;

use cells::Cell;

/// Column holding the Pokémon name.
pub const NAME_COLUMN: &str = "name";
/// Column holding the attack stat.
pub const ATTACK_COLUMN: &str = "attack";
/// Column holding the speed stat.
pub const SPEED_COLUMN: &str = "speed";
/// Column holding the base experience stat.
pub const BASE_EXPERIENCE_COLUMN: &str = "base_experience";
/// Column holding the encoded type list.
pub const TYPES_COLUMN: &str = "types";

/// Errors raised while reading a dataset file into rows.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The dataset file could not be opened.
    #[error("failed to open dataset {path}: {source}")]
    Open {
        /// Dataset path.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: io::Error,
    },
    /// Polars rejected the file or a cell could not be read.
    #[error("failed to parse dataset {path}: {source}")]
    Parse {
        /// Dataset path.
        path: Utf8PathBuf,
        /// Underlying polars error.
        #[source]
        source: PolarsError,
    },
    /// A required column is absent from the header.
    #[error("dataset {path} has no `{column}` column")]
    MissingColumn {
        /// Dataset path.
        path: Utf8PathBuf,
        /// Name of the absent column.
        column: &'static str,
    },
    /// A required cell is empty.
    #[error("dataset {path} row {row}: `{column}` is empty")]
    MissingValue {
        /// Dataset path.
        path: Utf8PathBuf,
        /// Zero-based data row.
        row: usize,
        /// Column of the empty cell.
        column: &'static str,
    },
    /// A stat cell is not a non-negative integer that fits in 32 bits.
    #[error("dataset {path} row {row}: `{column}` value {value} is not a valid stat")]
    InvalidStat {
        /// Dataset path.
        path: Utf8PathBuf,
        /// Zero-based data row.
        row: usize,
        /// Column of the offending cell.
        column: &'static str,
        /// The cell as rendered by polars.
        value: String,
    },
}

impl IngestError {
    /// Zero-based data row of a row-scoped fault, or `None` when the fault
    /// concerns the whole file.
    #[must_use]
    pub const fn row(&self) -> Option<usize> {
        match self {
            Self::MissingValue { row, .. } | Self::InvalidStat { row, .. } => Some(*row),
            Self::Open { .. } | Self::Parse { .. } | Self::MissingColumn { .. } => None,
        }
    }
}

/// Rows read from a dataset together with the rows left out.
#[derive(Debug, Default)]
pub struct IngestReport {
    /// Readable rows paired with their zero-based data row, in file order.
    pub rows: Vec<(usize, RawRow)>,
    /// Row-scoped faults skipped under [`LoadPolicy::Skip`], in file order.
    pub skipped: Vec<IngestError>,
}

/// Read the dataset at `path` into rows, preserving file order.
///
/// A null `types` cell becomes a row without an encoded type list, which the
/// store rejects at load time.
///
/// # Errors
/// Returns an [`IngestError`] when the file cannot be opened or parsed, when
/// a required column is missing, or when a name or stat cell is unusable.
pub fn read_rows(path: &Utf8Path) -> Result<Vec<RawRow>, IngestError> {
    let report = read_rows_with_policy(path, LoadPolicy::Abort)?;
    Ok(report.rows.into_iter().map(|(_, row)| row).collect())
}

/// Read the dataset at `path`, applying `policy` to rows with an unusable
/// name or stat cell.
///
/// # Errors
/// Returns an [`IngestError`] when the file cannot be opened or parsed or a
/// required column is missing. Under [`LoadPolicy::Abort`] the first
/// row-scoped fault is returned as well.
pub fn read_rows_with_policy(
    path: &Utf8Path,
    policy: LoadPolicy,
) -> Result<IngestReport, IngestError> {
    let file = open_dataset(path).map_err(|source| IngestError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let frame = CsvReader::new(file)
        .finish()
        .map_err(|source| IngestError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    debug!(
        "Read {} rows and {} columns from {path}",
        frame.height(),
        frame.width()
    );
    rows_from_frame(&frame, path, policy)
}

/// Convert an already-parsed frame into rows under `policy`.
///
/// `path` only labels errors.
///
/// # Errors
/// As for [`read_rows_with_policy`], minus the open and parse failures.
pub fn rows_from_frame(
    frame: &DataFrame,
    path: &Utf8Path,
    policy: LoadPolicy,
) -> Result<IngestReport, IngestError> {
    let columns = Columns::new(frame, path)?;
    let mut report = IngestReport::default();
    for row in 0..frame.height() {
        match (columns.row(row), policy) {
            (Ok(raw), _) => report.rows.push((row, raw)),
            (Err(err), LoadPolicy::Skip) if err.row().is_some() => {
                warn!("Skipping dataset row {row}: {err}");
                report.skipped.push(err);
            }
            (Err(err), _) => return Err(err),
        }
    }
    Ok(report)
}

/// The five required columns of a frame.
struct Columns<'f> {
    name: Cell<'f>,
    attack: Cell<'f>,
    speed: Cell<'f>,
    base_experience: Cell<'f>,
    types: Cell<'f>,
}

impl<'f> Columns<'f> {
    fn new(frame: &'f DataFrame, path: &'f Utf8Path) -> Result<Self, IngestError> {
        Ok(Self {
            name: Cell::new(frame, NAME_COLUMN, path)?,
            attack: Cell::new(frame, ATTACK_COLUMN, path)?,
            speed: Cell::new(frame, SPEED_COLUMN, path)?,
            base_experience: Cell::new(frame, BASE_EXPERIENCE_COLUMN, path)?,
            types: Cell::new(frame, TYPES_COLUMN, path)?,
        })
    }

    fn row(&self, row: usize) -> Result<RawRow, IngestError> {
        Ok(RawRow {
            name: self.name.required_text(row)?,
            attack: self.attack.stat(row)?,
            speed: self.speed.stat(row)?,
            base_experience: self.base_experience.stat(row)?,
            types_raw: self.types.text(row)?,
        })
    }
}

#[cfg(test)]
mod tests;
