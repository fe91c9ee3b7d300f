//! Facade crate for the Pokémon stats observatory.
//!
//! This crate re-exports the core record store and query API, and exposes CSV
//! ingestion behind the `ingest-csv` feature.

#![forbid(unsafe_code)]

pub use observatory_core::{
    CategoryField, FieldKind, LoadError, LoadPolicy, LoadReport, MalformedEncodingError,
    MalformedReason, PokemonRecord, RankField, RawRow, Store, TypeList, UnknownFieldError,
    distinct_category_values, normalize, top_by_rank, top_in_category,
};

#[cfg(feature = "ingest-csv")]
pub use observatory_data::{
    DatasetError, DatasetReport, IngestError, IngestReport, load_store, read_rows,
    read_rows_with_policy,
};
