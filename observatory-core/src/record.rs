//! Pokémon records and the normalisation step that builds them.

use crate::{MalformedEncodingError, RankField, TypeList};

/// One dataset row as supplied by an ingestion source.
///
/// The type list is still in its encoded text form. `types_raw` is `None`
/// when the source row had no value for the column.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawRow {
    /// Unique Pokémon name.
    pub name: String,
    /// The `attack` stat.
    pub attack: u32,
    /// The `speed` stat.
    pub speed: u32,
    /// The `base_experience` yield.
    pub base_experience: u32,
    /// Encoded type list, e.g. `['grass', 'poison']`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub types_raw: Option<String>,
}

impl RawRow {
    /// Construct a row with an encoded type list.
    ///
    /// # Examples
    /// ```
    /// use observatory_core::RawRow;
    ///
    /// let row = RawRow::new("Bulbasaur", 49, 45, 64, "['grass', 'poison']");
    /// assert_eq!(row.types_raw.as_deref(), Some("['grass', 'poison']"));
    /// ```
    pub fn new(
        name: impl Into<String>,
        attack: u32,
        speed: u32,
        base_experience: u32,
        types_raw: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            attack,
            speed,
            base_experience,
            types_raw: Some(types_raw.into()),
        }
    }

    /// Construct a row whose type-list value is absent.
    pub fn without_types(
        name: impl Into<String>,
        attack: u32,
        speed: u32,
        base_experience: u32,
    ) -> Self {
        Self {
            name: name.into(),
            attack,
            speed,
            base_experience,
            types_raw: None,
        }
    }
}

/// A normalised Pokémon record.
///
/// Fields are private so a record cannot drift from the invariants
/// established by [`normalize`]: `types` always decodes from `types_raw`, and
/// the primary type is always the first entry of `types`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PokemonRecord {
    name: String,
    attack: u32,
    speed: u32,
    base_experience: u32,
    types_raw: String,
    types: TypeList,
}

impl PokemonRecord {
    /// Unique Pokémon name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The `attack` stat.
    #[must_use]
    pub const fn attack(&self) -> u32 {
        self.attack
    }

    /// The `speed` stat.
    #[must_use]
    pub const fn speed(&self) -> u32 {
        self.speed
    }

    /// The `base_experience` yield.
    #[must_use]
    pub const fn base_experience(&self) -> u32 {
        self.base_experience
    }

    /// Read a numeric stat by field.
    #[must_use]
    pub const fn stat(&self, field: RankField) -> u32 {
        field.value_of(self)
    }

    /// The encoded type list exactly as loaded.
    #[must_use]
    pub fn types_raw(&self) -> &str {
        &self.types_raw
    }

    /// Decoded type names in order.
    #[must_use]
    pub const fn types(&self) -> &TypeList {
        &self.types
    }

    /// First type name, or `None` when the type list is empty.
    #[must_use]
    pub fn primary_type(&self) -> Option<&str> {
        self.types.primary()
    }
}

impl TryFrom<RawRow> for PokemonRecord {
    type Error = MalformedEncodingError;

    fn try_from(row: RawRow) -> Result<Self, Self::Error> {
        let types_raw = row.types_raw.ok_or_else(MalformedEncodingError::missing)?;
        let types = TypeList::decode(&types_raw)?;
        Ok(Self {
            name: row.name,
            attack: row.attack,
            speed: row.speed,
            base_experience: row.base_experience,
            types_raw,
            types,
        })
    }
}

/// Decode a row's type list and derive its primary type.
///
/// # Errors
/// Returns [`MalformedEncodingError`] when the type-list value is missing or
/// is not a valid list literal of strings.
///
/// # Examples
/// ```
/// use observatory_core::{RawRow, normalize};
///
/// # fn main() -> Result<(), observatory_core::MalformedEncodingError> {
/// let record = normalize(RawRow::new("Golem", 120, 45, 223, "['rock', 'ground']"))?;
/// assert_eq!(record.primary_type(), Some("rock"));
///
/// let typeless = normalize(RawRow::new("MissingNo", 136, 29, 0, "[]"))?;
/// assert_eq!(typeless.primary_type(), None);
/// # Ok(())
/// # }
/// ```
pub fn normalize(row: RawRow) -> Result<PokemonRecord, MalformedEncodingError> {
    PokemonRecord::try_from(row)
}
