//! The immutable record store and its load boundary.
//!
//! [`Store::load`] normalises every [`RawRow`] once and aborts on the first
//! bad row. [`Store::load_with_policy`] lets the caller skip bad rows instead;
//! skipped rows are logged and returned in the [`LoadReport`] so they are
//! never silently dropped.

use std::collections::HashSet;

use log::{debug, warn};
use thiserror::Error;

use crate::{MalformedEncodingError, PokemonRecord, RawRow};

/// How [`Store::load_with_policy`] reacts to a row it cannot accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LoadPolicy {
    /// Stop at the first rejected row and return its error.
    #[default]
    Abort,
    /// Leave rejected rows out of the store and report them.
    Skip,
}

/// Errors raised for individual rows while loading a store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The row's type-list value could not be decoded.
    #[error("row {row} ({name}): {source}")]
    Malformed {
        /// Zero-based position of the row in the input.
        row: usize,
        /// Name carried by the rejected row.
        name: String,
        /// Decoding failure.
        #[source]
        source: MalformedEncodingError,
    },
    /// The row reuses a name already present in the store.
    #[error("row {row}: duplicate name `{name}`")]
    DuplicateName {
        /// Zero-based position of the row in the input.
        row: usize,
        /// The repeated name.
        name: String,
    },
}

impl LoadError {
    /// Zero-based position of the rejected row.
    #[must_use]
    pub const fn row(&self) -> usize {
        match self {
            Self::Malformed { row, .. } | Self::DuplicateName { row, .. } => *row,
        }
    }
}

/// Outcome of [`Store::load_with_policy`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    /// The loaded store.
    pub store: Store,
    /// Rows left out under [`LoadPolicy::Skip`], in input order.
    pub skipped: Vec<LoadError>,
}

/// Immutable, in-memory collection of normalised records.
///
/// Records keep their load order, which is the tie-breaker for every ranking
/// query. Nothing hands out mutable access once a store is built.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Store {
    records: Vec<PokemonRecord>,
}

impl Store {
    /// Normalise every row, aborting on the first rejected one.
    ///
    /// # Errors
    /// Returns [`LoadError::Malformed`] when a row's type list is missing or
    /// malformed and [`LoadError::DuplicateName`] when a name repeats.
    ///
    /// # Examples
    /// ```
    /// use observatory_core::{LoadError, RawRow, Store};
    ///
    /// let result = Store::load([
    ///     RawRow::new("A", 50, 90, 100, "['grass']"),
    ///     RawRow::new("B", 120, 60, 300, "['ground'"),
    /// ]);
    /// assert!(matches!(result, Err(LoadError::Malformed { row: 1, .. })));
    /// ```
    pub fn load<I>(rows: I) -> Result<Self, LoadError>
    where
        I: IntoIterator<Item = RawRow>,
    {
        Self::load_with_policy(rows, LoadPolicy::Abort).map(|report| report.store)
    }

    /// Normalise every row, applying `policy` to rejected rows.
    ///
    /// # Errors
    /// Under [`LoadPolicy::Abort`] the first rejected row's [`LoadError`] is
    /// returned. Under [`LoadPolicy::Skip`] this never fails.
    ///
    /// # Examples
    /// ```
    /// use observatory_core::{LoadPolicy, RawRow, Store};
    ///
    /// # fn main() -> Result<(), observatory_core::LoadError> {
    /// let report = Store::load_with_policy(
    ///     [
    ///         RawRow::new("A", 50, 90, 100, "['grass']"),
    ///         RawRow::without_types("B", 120, 60, 300),
    ///     ],
    ///     LoadPolicy::Skip,
    /// )?;
    /// assert_eq!(report.store.len(), 1);
    /// assert_eq!(report.skipped.len(), 1);
    /// # Ok(())
    /// # }
    /// ```
    pub fn load_with_policy<I>(rows: I, policy: LoadPolicy) -> Result<LoadReport, LoadError>
    where
        I: IntoIterator<Item = RawRow>,
    {
        let mut records = Vec::new();
        let mut skipped = Vec::new();
        let mut seen = HashSet::new();

        for (row, raw) in rows.into_iter().enumerate() {
            let outcome = if seen.contains(raw.name.as_str()) {
                Err(LoadError::DuplicateName {
                    row,
                    name: raw.name,
                })
            } else {
                let name = raw.name.clone();
                crate::normalize(raw)
                    .map_err(|source| LoadError::Malformed { row, name, source })
            };

            match (outcome, policy) {
                (Ok(record), _) => {
                    seen.insert(record.name().to_owned());
                    records.push(record);
                }
                (Err(err), LoadPolicy::Abort) => return Err(err),
                (Err(err), LoadPolicy::Skip) => {
                    warn!("Skipping dataset {err}");
                    skipped.push(err);
                }
            }
        }

        debug!(
            "Loaded {} records ({} skipped)",
            records.len(),
            skipped.len()
        );
        Ok(LoadReport {
            store: Self { records },
            skipped,
        })
    }

    /// All records in load order.
    #[must_use]
    pub fn records(&self) -> &[PokemonRecord] {
        &self.records
    }

    /// Iterate over records in load order.
    pub fn iter(&self) -> impl Iterator<Item = &PokemonRecord> + '_ {
        self.records.iter()
    }

    /// Look a record up by its unique name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PokemonRecord> {
        self.records.iter().find(|record| record.name() == name)
    }

    /// Number of records held.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.records.len()
    }

    /// Report whether the store holds no records.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a Store {
    type Item = &'a PokemonRecord;
    type IntoIter = std::slice::Iter<'a, PokemonRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
