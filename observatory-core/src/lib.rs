//! Core domain types for the Pokémon stats observatory.
//!
//! The crate turns raw dataset rows into an immutable [`Store`] of
//! [`PokemonRecord`] values and answers the two query shapes the dashboard
//! needs:
//!
//! - the top `n` records ordered by a numeric [`RankField`];
//! - the top `n` records sharing a [`CategoryField`] value.
//!
//! Decoding of the textual type-list column happens exactly once, when rows
//! are loaded. Queries borrow from the store and never mutate it, so a loaded
//! store can be shared freely between threads.
//!
//! # Examples
//!
//! ```
//! use observatory_core::{RawRow, Store, top_by_rank, top_in_category};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let store = Store::load([
//!     RawRow::new("A", 50, 90, 100, "['grass']"),
//!     RawRow::new("B", 120, 60, 300, "['ground', 'rock']"),
//! ])?;
//!
//! let top = top_by_rank(&store, "base_experience", 1)?;
//! assert_eq!(top[0].name(), "B");
//! assert_eq!(top[0].primary_type(), Some("ground"));
//!
//! let grass = top_in_category(&store, "primary_type", "grass", "attack", 5)?;
//! assert_eq!(grass.len(), 1);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod field;
mod query;
mod record;
pub mod store;
mod type_list;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(all(docsrs, not(test)), doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use field::{CategoryField, FieldKind, RankField, UnknownFieldError};
pub use query::{distinct_category_values, top_by_rank, top_in_category};
pub use record::{PokemonRecord, RawRow, normalize};
pub use store::{LoadError, LoadPolicy, LoadReport, Store};
pub use type_list::{MalformedEncodingError, MalformedReason, TypeList};
