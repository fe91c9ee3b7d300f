//! Field selectors for ranking and filtering records.
//!
//! Callers coming from a UI or a configuration file name fields as strings;
//! parsing them into [`RankField`] or [`CategoryField`] is where an unknown
//! name is rejected.
//!
//! # Examples
//! ```
//! use observatory_core::{CategoryField, RankField};
//!
//! assert_eq!("speed".parse::<RankField>(), Ok(RankField::Speed));
//! assert_eq!(CategoryField::PrimaryType.to_string(), "primary_type");
//! assert!("weight".parse::<RankField>().is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::PokemonRecord;

/// Numeric attributes used to order records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RankField {
    /// The `attack` stat.
    Attack,
    /// The `speed` stat.
    Speed,
    /// The `base_experience` yield.
    BaseExperience,
}

impl RankField {
    /// Every rankable field, in schema order.
    pub const ALL: [Self; 3] = [Self::Attack, Self::Speed, Self::BaseExperience];

    /// Schema name of the field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Attack => "attack",
            Self::Speed => "speed",
            Self::BaseExperience => "base_experience",
        }
    }

    /// Read this field from a record.
    #[must_use]
    pub const fn value_of(self, record: &PokemonRecord) -> u32 {
        match self {
            Self::Attack => record.attack(),
            Self::Speed => record.speed(),
            Self::BaseExperience => record.base_experience(),
        }
    }
}

impl fmt::Display for RankField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RankField {
    type Err = UnknownFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownFieldError::new(s, FieldKind::Rank))
    }
}

/// String attributes used to filter records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CategoryField {
    /// The first entry of the record's type list.
    PrimaryType,
    /// The record's unique name.
    Name,
}

impl CategoryField {
    /// Every category field, in schema order.
    pub const ALL: [Self; 2] = [Self::PrimaryType, Self::Name];

    /// Schema name of the field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PrimaryType => "primary_type",
            Self::Name => "name",
        }
    }

    /// Read this field from a record, or `None` when the record has no value.
    #[must_use]
    pub fn value_of(self, record: &PokemonRecord) -> Option<&str> {
        match self {
            Self::PrimaryType => record.primary_type(),
            Self::Name => Some(record.name()),
        }
    }
}

impl fmt::Display for CategoryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryField {
    type Err = UnknownFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownFieldError::new(s, FieldKind::Category))
    }
}

/// The role a field name was requested for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// A numeric ranking field.
    Rank,
    /// A string category field.
    Category,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Rank => "ranking",
            Self::Category => "category",
        })
    }
}

/// Raised when a query names a field the schema does not have.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} field `{name}`")]
pub struct UnknownFieldError {
    name: String,
    kind: FieldKind,
}

impl UnknownFieldError {
    /// Construct an error for the rejected field name.
    #[must_use]
    pub fn new(name: &str, kind: FieldKind) -> Self {
        Self {
            name: name.to_owned(),
            kind,
        }
    }

    /// The rejected field name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the name was requested as a ranking or category field.
    #[must_use]
    pub const fn kind(&self) -> FieldKind {
        self.kind
    }
}
