//! Dataset ingestion for the Pokémon stats observatory.
//!
//! Reads the CSV dataset into [`RawRow`] values and hands them to
//! [`Store::load_with_policy`].

#![forbid(unsafe_code)]

pub mod ingest;
pub mod source;

use camino::Utf8Path;
use log::info;
use observatory_core::{LoadError, LoadPolicy, RawRow, Store};
use thiserror::Error;

pub use ingest::{IngestError, IngestReport, read_rows, read_rows_with_policy, rows_from_frame};
pub use source::{dataset_is_file, open_dataset};

/// Errors raised by [`load_store`].
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The dataset could not be read into rows.
    #[error(transparent)]
    Ingest(#[from] IngestError),
    /// A row was rejected while building the store.
    #[error("failed to load dataset: {0}")]
    Load(#[from] LoadError),
}

impl DatasetError {
    /// Zero-based data row the error concerns, or `None` when it concerns
    /// the whole file.
    #[must_use]
    pub const fn row(&self) -> Option<usize> {
        match self {
            Self::Ingest(err) => err.row(),
            Self::Load(err) => Some(err.row()),
        }
    }
}

/// Outcome of [`load_store`].
#[derive(Debug)]
pub struct DatasetReport {
    /// Store built from the accepted rows.
    pub store: Store,
    /// Rows left out under [`LoadPolicy::Skip`], ordered by data row.
    pub skipped: Vec<DatasetError>,
}

/// Read the dataset at `path` and build a store under `policy`.
///
/// Rows in errors are data rows of the file, whether the row was rejected
/// while reading cells or while building the store.
///
/// # Errors
/// Returns [`DatasetError::Ingest`] when the file cannot be read and, under
/// [`LoadPolicy::Abort`], when a name or stat cell is unusable. Returns
/// [`DatasetError::Load`] when a row is rejected by the store under
/// [`LoadPolicy::Abort`]. Cell faults are found before store faults, so an
/// unusable cell is reported even when an earlier row has a malformed type
/// list.
pub fn load_store(path: &Utf8Path, policy: LoadPolicy) -> Result<DatasetReport, DatasetError> {
    let ingested = read_rows_with_policy(path, policy)?;
    let (numbers, rows): (Vec<usize>, Vec<RawRow>) = ingested.rows.into_iter().unzip();
    let loaded =
        Store::load_with_policy(rows, policy).map_err(|err| renumber(err, &numbers))?;

    let mut skipped: Vec<DatasetError> = ingested
        .skipped
        .into_iter()
        .map(DatasetError::from)
        .chain(
            loaded
                .skipped
                .into_iter()
                .map(|err| DatasetError::from(renumber(err, &numbers))),
        )
        .collect();
    skipped.sort_by_key(DatasetError::row);

    info!(
        "Loaded {} Pokémon records from {path} ({} skipped)",
        loaded.store.len(),
        skipped.len()
    );
    Ok(DatasetReport {
        store: loaded.store,
        skipped,
    })
}

/// Map a store row index back to the data row it was read from.
fn renumber(err: LoadError, numbers: &[usize]) -> LoadError {
    let file_row = |row: usize| numbers.get(row).copied().unwrap_or(row);
    match err {
        LoadError::Malformed { row, name, source } => LoadError::Malformed {
            row: file_row(row),
            name,
            source,
        },
        LoadError::DuplicateName { row, name } => LoadError::DuplicateName {
            row: file_row(row),
            name,
        },
    }
}
