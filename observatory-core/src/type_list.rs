//! Structured type tags decoded from the dataset's list-literal column.
//!
//! The dataset stores each Pokémon's types as text such as
//! `['grass', 'poison']`. [`TypeList::decode`] validates that text once at
//! load time and [`TypeList`]'s `Display` implementation renders the canonical
//! form back, so decoding the rendered text yields the same list.

use std::fmt::{self, Write as _};
use std::iter::Peekable;
use std::str::{CharIndices, FromStr};

use thiserror::Error;

/// Ordered type names attached to a Pokémon.
///
/// # Examples
/// ```
/// use observatory_core::TypeList;
///
/// # fn main() -> Result<(), observatory_core::MalformedEncodingError> {
/// let types = TypeList::decode("['ground', 'rock']")?;
/// assert_eq!(types.primary(), Some("ground"));
/// assert_eq!(types.to_string(), "['ground', 'rock']");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TypeList(Vec<String>);

impl TypeList {
    /// Wrap an already structured list of type names.
    #[must_use]
    pub const fn new(types: Vec<String>) -> Self {
        Self(types)
    }

    /// Parse a textual list literal of quoted strings.
    ///
    /// Elements follow Python's string literal rules: single or double
    /// quotes, an optional `u` or `r` prefix, adjacent literals concatenated,
    /// and the escapes `\\`, `\'`, `\"`, `\n`, `\t`, `\r`, `\a`, `\b`, `\f`,
    /// `\v`, octal `\ooo`, `\xhh`, `\uhhhh` and `\Uhhhhhhhh`. A backslash before
    /// a line break continues the literal. A single trailing comma after the
    /// last element is tolerated.
    ///
    /// Not accepted: byte and f-string prefixes, triple-quoted literals,
    /// named escapes (`\N{...}`), escapes naming a surrogate code point, and
    /// unrecognised escapes such as `\q`, which are errors rather than being
    /// kept verbatim.
    ///
    /// # Errors
    /// Returns [`MalformedEncodingError`] when `raw` is not a list literal
    /// whose elements are all strings.
    pub fn decode(raw: &str) -> Result<Self, MalformedEncodingError> {
        Parser::new(raw).parse_list().map(Self)
    }

    /// Render the canonical literal form, e.g. `['ground', 'rock']`.
    #[must_use]
    pub fn encode(&self) -> String {
        self.to_string()
    }

    /// Return the first type, if any.
    #[must_use]
    pub fn primary(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    /// Borrow the type names in order.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Iterate over the type names in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.iter().map(String::as_str)
    }

    /// Number of types in the list.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Report whether the list holds no types.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromStr for TypeList {
    type Err = MalformedEncodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

impl fmt::Display for TypeList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('[')?;
        for (index, name) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write_quoted(f, name)?;
        }
        f.write_char(']')
    }
}

fn write_quoted(f: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
    f.write_char('\'')?;
    for ch in value.chars() {
        match ch {
            '\\' => f.write_str("\\\\")?,
            '\'' => f.write_str("\\'")?,
            '\n' => f.write_str("\\n")?,
            '\t' => f.write_str("\\t")?,
            '\r' => f.write_str("\\r")?,
            other => f.write_char(other)?,
        }
    }
    f.write_char('\'')
}

/// Why a type-list literal was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MalformedReason {
    /// The value was absent from the source row.
    Missing,
    /// The text was empty or whitespace only.
    Empty,
    /// The literal did not start with `[`.
    ExpectedOpenBracket,
    /// Input ended before the closing `]`.
    UnclosedBracket,
    /// An element was not a quoted string.
    ExpectedString,
    /// A quoted string was never closed.
    UnterminatedString,
    /// A backslash escape was not recognised.
    InvalidEscape,
    /// Two elements were not separated by `,`.
    ExpectedSeparator,
    /// Text followed the closing `]`.
    TrailingInput,
}

impl MalformedReason {
    /// Short human-readable description.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Missing => "value is missing",
            Self::Empty => "value is empty",
            Self::ExpectedOpenBracket => "expected `[`",
            Self::UnclosedBracket => "list is not closed with `]`",
            Self::ExpectedString => "expected a quoted string",
            Self::UnterminatedString => "string is not terminated",
            Self::InvalidEscape => "unsupported escape sequence",
            Self::ExpectedSeparator => "expected `,` or `]`",
            Self::TrailingInput => "unexpected text after `]`",
        }
    }
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a type-list literal cannot be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("malformed type list at byte {offset}: {reason}")]
pub struct MalformedEncodingError {
    offset: usize,
    reason: MalformedReason,
}

impl MalformedEncodingError {
    /// Construct an error for the given byte offset and reason.
    #[must_use]
    pub const fn new(offset: usize, reason: MalformedReason) -> Self {
        Self { offset, reason }
    }

    /// Error used when a row carries no type-list value at all.
    #[must_use]
    pub const fn missing() -> Self {
        Self::new(0, MalformedReason::Missing)
    }

    /// Byte offset into the raw text where decoding stopped.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Classification of the failure.
    #[must_use]
    pub const fn reason(&self) -> MalformedReason {
        self.reason
    }
}

struct Parser<'a> {
    input: &'a str,
    chars: Peekable<CharIndices<'a>>,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.char_indices().peekable(),
        }
    }

    fn offset(&mut self) -> usize {
        self.chars
            .peek()
            .map_or(self.input.len(), |&(index, _)| index)
    }

    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().map(|&(_, ch)| ch)
    }

    fn fail<T>(&mut self, reason: MalformedReason) -> Result<T, MalformedEncodingError> {
        Err(MalformedEncodingError::new(self.offset(), reason))
    }

    fn skip_whitespace(&mut self) {
        while self.chars.next_if(|&(_, ch)| ch.is_whitespace()).is_some() {}
    }

    fn eat(&mut self, expected: char) -> bool {
        self.chars.next_if(|&(_, ch)| ch == expected).is_some()
    }

    fn parse_list(mut self) -> Result<Vec<String>, MalformedEncodingError> {
        self.skip_whitespace();
        if self.peek_char().is_none() {
            return self.fail(MalformedReason::Empty);
        }
        if !self.eat('[') {
            return self.fail(MalformedReason::ExpectedOpenBracket);
        }

        let mut items = Vec::new();
        loop {
            self.skip_whitespace();
            if self.eat(']') {
                break;
            }
            items.push(self.parse_item()?);
            if self.eat(']') {
                break;
            }
            if self.peek_char().is_none() {
                return self.fail(MalformedReason::UnclosedBracket);
            }
            if !self.eat(',') {
                return self.fail(MalformedReason::ExpectedSeparator);
            }
        }

        self.skip_whitespace();
        if self.peek_char().is_some() {
            return self.fail(MalformedReason::TrailingInput);
        }
        Ok(items)
    }

    /// One element: a string literal followed by any adjacent literals,
    /// which are concatenated onto it.
    fn parse_item(&mut self) -> Result<String, MalformedEncodingError> {
        let mut value = self.parse_string()?;
        loop {
            self.skip_whitespace();
            if !self.starts_string() {
                return Ok(value);
            }
            value.push_str(&self.parse_string()?);
        }
    }

    /// Report whether a string literal, with or without a prefix, begins at
    /// the cursor.
    fn starts_string(&mut self) -> bool {
        let offset = self.offset();
        let mut rest = self.input.get(offset..).unwrap_or_default().chars();
        match rest.next() {
            Some('\'' | '"') => true,
            Some(prefix) if is_prefix(prefix) => matches!(rest.next(), Some('\'' | '"')),
            _ => false,
        }
    }

    fn parse_string(&mut self) -> Result<String, MalformedEncodingError> {
        let raw = match self.peek_char() {
            None => return self.fail(MalformedReason::UnclosedBracket),
            Some(prefix) if is_prefix(prefix) && self.starts_string() => {
                self.chars.next();
                matches!(prefix, 'r' | 'R')
            }
            Some('\'' | '"') => false,
            Some(_) => return self.fail(MalformedReason::ExpectedString),
        };
        let start = self.offset();
        let Some((_, quote)) = self.chars.next() else {
            return self.fail(MalformedReason::ExpectedString);
        };

        let mut value = String::new();
        loop {
            match self.chars.next() {
                None => {
                    return Err(MalformedEncodingError::new(
                        start,
                        MalformedReason::UnterminatedString,
                    ));
                }
                Some((_, ch)) if ch == quote => return Ok(value),
                Some((_, '\\')) if raw => {
                    // Raw strings keep the backslash and the character after it.
                    value.push('\\');
                    match self.chars.next() {
                        Some((_, escaped)) => value.push(escaped),
                        None => {
                            return Err(MalformedEncodingError::new(
                                start,
                                MalformedReason::UnterminatedString,
                            ));
                        }
                    }
                }
                Some((at, '\\')) => {
                    if let Some(ch) = self.parse_escape(at)? {
                        value.push(ch);
                    }
                }
                Some((_, ch)) => value.push(ch),
            }
        }
    }

    /// Decode the escape whose backslash sits at `at`. A backslash before a
    /// line break continues the string and yields nothing.
    fn parse_escape(&mut self, at: usize) -> Result<Option<char>, MalformedEncodingError> {
        let invalid = MalformedEncodingError::new(at, MalformedReason::InvalidEscape);
        let escaped = match self.chars.next() {
            Some((_, '\n')) => return Ok(None),
            Some((_, '\\')) => '\\',
            Some((_, '\'')) => '\'',
            Some((_, '"')) => '"',
            Some((_, 'n')) => '\n',
            Some((_, 't')) => '\t',
            Some((_, 'r')) => '\r',
            Some((_, 'a')) => '\u{7}',
            Some((_, 'b')) => '\u{8}',
            Some((_, 'f')) => '\u{c}',
            Some((_, 'v')) => '\u{b}',
            Some((_, 'x')) => self.parse_code_point(2).ok_or(invalid)?,
            Some((_, 'u')) => self.parse_code_point(4).ok_or(invalid)?,
            Some((_, 'U')) => self.parse_code_point(8).ok_or(invalid)?,
            Some((_, first @ '0'..='7')) => self.parse_octal(first).ok_or(invalid)?,
            Some(_) => return Err(invalid),
            None => {
                return Err(MalformedEncodingError::new(
                    at,
                    MalformedReason::UnterminatedString,
                ));
            }
        };
        Ok(Some(escaped))
    }

    /// Read exactly `digits` hexadecimal digits as a Unicode scalar value.
    fn parse_code_point(&mut self, digits: usize) -> Option<char> {
        let mut code = 0_u32;
        for _ in 0..digits {
            let (_, ch) = self.chars.next_if(|&(_, ch)| ch.is_ascii_hexdigit())?;
            code = (code << 4) | ch.to_digit(16)?;
        }
        char::from_u32(code)
    }

    /// Read up to three octal digits, the first already consumed.
    fn parse_octal(&mut self, first: char) -> Option<char> {
        let mut code = first.to_digit(8)?;
        for _ in 0..2 {
            let Some((_, ch)) = self.chars.next_if(|&(_, ch)| ch.is_digit(8)) else {
                break;
            };
            code = (code << 3) | ch.to_digit(8)?;
        }
        char::from_u32(code)
    }
}

/// String prefixes that leave the literal a text string.
const fn is_prefix(ch: char) -> bool {
    matches!(ch, 'u' | 'U' | 'r' | 'R')
}
