//! Typed access to individual cells of a required column.

use camino::Utf8Path;
use polars::prelude::{AnyValue, Column, DataFrame};

use super::IngestError;

/// A required column bound to the dataset path used in its errors.
pub(crate) struct Cell<'f> {
    column: &'f Column,
    name: &'static str,
    path: &'f Utf8Path,
}

impl<'f> Cell<'f> {
    pub(crate) fn new(
        frame: &'f DataFrame,
        name: &'static str,
        path: &'f Utf8Path,
    ) -> Result<Self, IngestError> {
        let column = frame
            .column(name)
            .map_err(|_| IngestError::MissingColumn {
                path: path.to_path_buf(),
                column: name,
            })?;
        Ok(Self { column, name, path })
    }

    fn value(&self, row: usize) -> Result<AnyValue<'f>, IngestError> {
        self.column
            .get(row)
            .map_err(|source| IngestError::Parse {
                path: self.path.to_path_buf(),
                source,
            })
    }

    fn missing(&self, row: usize) -> IngestError {
        IngestError::MissingValue {
            path: self.path.to_path_buf(),
            row,
            column: self.name,
        }
    }

    fn invalid(&self, row: usize, value: &AnyValue<'_>) -> IngestError {
        IngestError::InvalidStat {
            path: self.path.to_path_buf(),
            row,
            column: self.name,
            value: value.to_string(),
        }
    }

    /// The cell as text, or `None` when it is null.
    ///
    /// Non-string cells are rendered the way polars displays them.
    pub(crate) fn text(&self, row: usize) -> Result<Option<String>, IngestError> {
        let value = self.value(row)?;
        Ok(match value {
            AnyValue::Null => None,
            other => Some(other.get_str().map_or_else(|| other.to_string(), str::to_owned)),
        })
    }

    pub(crate) fn required_text(&self, row: usize) -> Result<String, IngestError> {
        self.text(row)?.ok_or_else(|| self.missing(row))
    }

    /// The cell as a non-negative stat.
    ///
    /// A float cell is accepted only when it holds a whole number in range,
    /// so `100.0` reads as 100 and `64.9` is rejected.
    pub(crate) fn stat(&self, row: usize) -> Result<u32, IngestError> {
        let value = self.value(row)?;
        let stat = match value {
            AnyValue::Null => return Err(self.missing(row)),
            AnyValue::Float64(number) => whole_stat(number),
            AnyValue::Float32(number) => whole_stat(f64::from(number)),
            ref other => other
                .try_extract::<i64>()
                .ok()
                .and_then(|number| u32::try_from(number).ok()),
        };
        stat.ok_or_else(|| self.invalid(row, &value))
    }
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "the value is checked to be a whole number within u32 range"
)]
fn whole_stat(number: f64) -> Option<u32> {
    let whole = number.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&number);
    whole.then_some(number as u32)
}
