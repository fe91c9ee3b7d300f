//! Ranking and category queries over a [`Store`].
//!
//! Both query shapes sort with a stable sort on the descending ranking value,
//! so records with equal values keep their load order and repeated calls
//! return identical sequences. Results borrow from the store.

use std::cmp::Reverse;
use std::collections::BTreeSet;

use log::debug;

use crate::{CategoryField, PokemonRecord, RankField, Store, UnknownFieldError};

impl Store {
    /// Return up to `n` records with the greatest `field` value, descending.
    ///
    /// `n == 0` yields an empty result.
    ///
    /// # Examples
    /// ```
    /// use observatory_core::{RankField, RawRow, Store};
    ///
    /// # fn main() -> Result<(), observatory_core::LoadError> {
    /// let store = Store::load([
    ///     RawRow::new("A", 50, 90, 100, "['grass']"),
    ///     RawRow::new("B", 120, 60, 300, "['ground', 'rock']"),
    /// ])?;
    /// let fastest = store.top_by(RankField::Speed, 1);
    /// assert_eq!(fastest[0].name(), "A");
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn top_by(&self, field: RankField, n: usize) -> Vec<&PokemonRecord> {
        debug!("Ranking top {n} records by {field}");
        rank(self.iter(), field, n)
    }

    /// Return up to `n` records whose `category` equals `value`, ranked by
    /// `field` descending.
    ///
    /// Matching is exact and case-sensitive. Records with no value for
    /// `category` never match. An unmatched `value` yields an empty result.
    #[must_use]
    pub fn top_in(
        &self,
        category: CategoryField,
        value: &str,
        field: RankField,
        n: usize,
    ) -> Vec<&PokemonRecord> {
        debug!("Ranking top {n} records by {field} where {category} = {value:?}");
        let matching = self
            .iter()
            .filter(|record| category.value_of(record) == Some(value));
        rank(matching, field, n)
    }

    /// Distinct, non-absent values of `category`, sorted.
    ///
    /// These are the values worth offering in a selection control; any other
    /// value passed to [`Store::top_in`] simply matches nothing.
    #[must_use]
    pub fn distinct_values(&self, category: CategoryField) -> BTreeSet<&str> {
        self.iter()
            .filter_map(|record| category.value_of(record))
            .collect()
    }
}

fn rank<'s, I>(records: I, field: RankField, n: usize) -> Vec<&'s PokemonRecord>
where
    I: Iterator<Item = &'s PokemonRecord>,
{
    if n == 0 {
        return Vec::new();
    }
    let mut ranked: Vec<_> = records.collect();
    ranked.sort_by_key(|record| Reverse(field.value_of(record)));
    ranked.truncate(n);
    ranked
}

/// Return up to `n` records ranked by the field named `rank_field`.
///
/// # Errors
/// Returns [`UnknownFieldError`] when `rank_field` is not one of `attack`,
/// `speed` or `base_experience`.
///
/// # Examples
/// ```
/// use observatory_core::{RawRow, Store, top_by_rank};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let store = Store::load([RawRow::new("A", 50, 90, 100, "['grass']")])?;
/// assert_eq!(top_by_rank(&store, "attack", 10)?.len(), 1);
/// assert!(top_by_rank(&store, "hp", 10).is_err());
/// # Ok(())
/// # }
/// ```
pub fn top_by_rank<'s>(
    store: &'s Store,
    rank_field: &str,
    n: usize,
) -> Result<Vec<&'s PokemonRecord>, UnknownFieldError> {
    let field: RankField = rank_field.parse()?;
    Ok(store.top_by(field, n))
}

/// Return up to `n` records whose `category_field` equals `category_value`,
/// ranked by the field named `rank_field`.
///
/// # Errors
/// Returns [`UnknownFieldError`] when either field name is not part of the
/// schema. The category field is checked first.
pub fn top_in_category<'s>(
    store: &'s Store,
    category_field: &str,
    category_value: &str,
    rank_field: &str,
    n: usize,
) -> Result<Vec<&'s PokemonRecord>, UnknownFieldError> {
    let category: CategoryField = category_field.parse()?;
    let field: RankField = rank_field.parse()?;
    Ok(store.top_in(category, category_value, field, n))
}

/// Distinct, non-absent values of the field named `category_field`, sorted.
///
/// # Errors
/// Returns [`UnknownFieldError`] when `category_field` is not a category
/// field.
pub fn distinct_category_values<'s>(
    store: &'s Store,
    category_field: &str,
) -> Result<BTreeSet<&'s str>, UnknownFieldError> {
    let category: CategoryField = category_field.parse()?;
    Ok(store.distinct_values(category))
}
