//! Test-only fixtures shared by unit and behaviour tests across the
//! workspace.

use crate::{RawRow, Store};

/// The two-record dataset used to describe the dashboard's queries.
#[must_use]
pub fn dashboard_rows() -> Vec<RawRow> {
    vec![
        RawRow::new("A", 50, 90, 100, "['grass']"),
        RawRow::new("B", 120, 60, 300, "['ground','rock']"),
    ]
}

/// A small dataset with repeated primary types and a tie on `attack`.
///
/// Golem and Donphan both have an attack of 120, with Golem loaded first.
#[must_use]
pub fn sample_rows() -> Vec<RawRow> {
    vec![
        RawRow::new("Bulbasaur", 49, 45, 64, "['grass', 'poison']"),
        RawRow::new("Golem", 120, 45, 223, "['rock', 'ground']"),
        RawRow::new("Pikachu", 55, 90, 112, "['electric']"),
        RawRow::new("Donphan", 120, 50, 175, "['ground']"),
        RawRow::new("Onix", 45, 70, 77, "['rock', 'ground']"),
        RawRow::new("Scyther", 110, 105, 100, "['bug', 'flying']"),
        RawRow::new("Oddish", 50, 30, 64, "['grass', 'poison']"),
        RawRow::new("Raichu", 90, 110, 218, "['electric']"),
    ]
}

/// Load [`sample_rows`] into a store.
///
/// # Panics
/// Panics if the fixture rows stop loading, which indicates a broken fixture.
#[must_use]
#[expect(
    clippy::expect_used,
    reason = "fixture rows are static and must always load"
)]
pub fn sample_store() -> Store {
    Store::load(sample_rows()).expect("sample rows should load")
}
