//! Sticker colors.

use std::fmt::{self, Display};

/// One of the six sticker colors.
///
/// The declaration order is the cycle order used when a facelet is clicked:
/// yellow, green, orange, blue, red, white, then back to yellow.
///
/// # Examples
///
/// ```
/// use cubelace_core::ColorId;
///
/// assert_eq!(ColorId::Yellow.next(), ColorId::Green);
/// assert_eq!(ColorId::White.next(), ColorId::Yellow);
///
/// assert_eq!(ColorId::Orange.as_char(), 'o');
/// assert_eq!(ColorId::from_char('o'), Ok(ColorId::Orange));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum ColorId {
    /// Yellow, encoded as `y`.
    Yellow = 0,
    /// Green, encoded as `g`.
    Green = 1,
    /// Orange, encoded as `o`.
    Orange = 2,
    /// Blue, encoded as `b`.
    Blue = 3,
    /// Red, encoded as `r`.
    Red = 4,
    /// White, encoded as `w`.
    White = 5,
}

/// Serialization characters, indexed by [`ColorId::index`].
const CHAR_TABLE: [char; ColorId::COUNT] = ['y', 'g', 'o', 'b', 'r', 'w'];

const fn is_injective(table: &[char]) -> bool {
    let mut i = 0;
    while i < table.len() {
        let mut j = i + 1;
        while j < table.len() {
            if table[i] == table[j] {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

const _: () = assert!(is_injective(&CHAR_TABLE), "color characters must be unique");

impl ColorId {
    /// Number of colors.
    pub const COUNT: usize = 6;

    /// All colors in cycle order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Yellow,
        Self::Green,
        Self::Orange,
        Self::Blue,
        Self::Red,
        Self::White,
    ];

    /// Returns the position of this color in the cycle order (0-5).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Creates a color from its position in the cycle order.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-5.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        assert!(index < Self::COUNT, "Invalid color index");
        Self::ALL[index]
    }

    /// Returns the color that follows `self` in the cycle, wrapping from
    /// white back to yellow.
    #[must_use]
    pub const fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::COUNT]
    }

    /// Returns the one-character encoding of this color.
    #[must_use]
    pub const fn as_char(self) -> char {
        CHAR_TABLE[self.index()]
    }

    /// Decodes a color from its one-character encoding.
    ///
    /// # Errors
    ///
    /// Returns [`ParseColorError`] if `character` is not one of `ygobrw`.
    pub fn from_char(character: char) -> Result<Self, ParseColorError> {
        CHAR_TABLE
            .iter()
            .position(|&c| c == character)
            .map(Self::from_index)
            .ok_or(ParseColorError { character })
    }

    /// Returns the lowercase English name of this color.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Orange => "orange",
            Self::Blue => "blue",
            Self::Red => "red",
            Self::White => "white",
        }
    }
}

impl Display for ColorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<ColorId> for char {
    fn from(color: ColorId) -> char {
        color.as_char()
    }
}

impl TryFrom<char> for ColorId {
    type Error = ParseColorError;

    fn try_from(character: char) -> Result<Self, Self::Error> {
        Self::from_char(character)
    }
}

/// Error returned when a character does not encode any [`ColorId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown color character: {character:?}")]
pub struct ParseColorError {
    character: char,
}

impl ParseColorError {
    /// Returns the character that failed to parse.
    #[must_use]
    pub const fn character(&self) -> char {
        self.character
    }
}
