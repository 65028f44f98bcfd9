//! Card records.
//!
//! A `Card` is immutable once ingested. The engine only ever reads the four
//! bookkeeping fields; it never interprets them beyond display and the
//! color category.

use serde::{Deserialize, Serialize};

/// One of the five colors a single-colored card can have.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Blue,
    Black,
    Red,
    Green,
}

impl Color {
    /// Parse a single color symbol (`W`, `U`, `B`, `R`, `G`, any case).
    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol.to_ascii_uppercase() {
            'W' => Some(Color::White),
            'U' => Some(Color::Blue),
            'B' => Some(Color::Black),
            'R' => Some(Color::Red),
            'G' => Some(Color::Green),
            _ => None,
        }
    }

    /// The single-letter symbol for this color.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Color::White => 'W',
            Color::Blue => 'U',
            Color::Black => 'B',
            Color::Red => 'R',
            Color::Green => 'G',
        }
    }
}

/// Color grouping derived once from a raw color string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorCategory {
    /// Exactly one color symbol.
    Mono(Color),
    /// Two or more color symbols.
    Multicolor,
    /// No color symbol.
    Colorless,
}

impl ColorCategory {
    /// Classify a raw color string such as `""`, `"G"` or `"WU"`.
    ///
    /// Whitespace and commas are ignored. An unrecognised single symbol
    /// (including CubeCobra's `C`) counts as colorless.
    ///
    /// ```
    /// use winston_draft::cards::{Color, ColorCategory};
    ///
    /// assert_eq!(ColorCategory::from_raw(""), ColorCategory::Colorless);
    /// assert_eq!(ColorCategory::from_raw("R"), ColorCategory::Mono(Color::Red));
    /// assert_eq!(ColorCategory::from_raw("WU"), ColorCategory::Multicolor);
    /// ```
    #[must_use]
    pub fn from_raw(raw: &str) -> Self {
        let mut symbols = raw.chars().filter(|c| !c.is_whitespace() && *c != ',');

        match (symbols.next(), symbols.next()) {
            (None, _) => ColorCategory::Colorless,
            (Some(symbol), None) => {
                Color::from_symbol(symbol).map_or(ColorCategory::Colorless, ColorCategory::Mono)
            }
            (Some(_), Some(_)) => ColorCategory::Multicolor,
        }
    }

    /// Single-letter code: the color symbol, `M` or `C`.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            ColorCategory::Mono(color) => color.symbol(),
            ColorCategory::Multicolor => 'M',
            ColorCategory::Colorless => 'C',
        }
    }
}

impl std::fmt::Display for ColorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// An immutable card record.
///
/// Equality compares contents; two copies of the same printed card are
/// still distinct cards in a pool because the pool addresses them by
/// `CardHandle`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Card name.
    pub name: String,

    /// Converted mana cost.
    pub mana_value: u32,

    /// Full type line, e.g. "Creature - Elf Druid".
    pub type_line: String,

    /// Color category.
    pub color: ColorCategory,
}

impl Card {
    /// Create a card, classifying its raw color string.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        mana_value: u32,
        type_line: impl Into<String>,
        raw_color: &str,
    ) -> Self {
        Self {
            name: name.into(),
            mana_value,
            type_line: type_line.into(),
            color: ColorCategory::from_raw(raw_color),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_category_empty() {
        assert_eq!(ColorCategory::from_raw(""), ColorCategory::Colorless);
        assert_eq!(ColorCategory::from_raw("  "), ColorCategory::Colorless);
    }

    #[test]
    fn test_color_category_mono() {
        assert_eq!(ColorCategory::from_raw("W"), ColorCategory::Mono(Color::White));
        assert_eq!(ColorCategory::from_raw("u"), ColorCategory::Mono(Color::Blue));
        assert_eq!(ColorCategory::from_raw(" G "), ColorCategory::Mono(Color::Green));
    }

    #[test]
    fn test_color_category_multicolor() {
        assert_eq!(ColorCategory::from_raw("BR"), ColorCategory::Multicolor);
        assert_eq!(ColorCategory::from_raw("W, U, B"), ColorCategory::Multicolor);
    }

    #[test]
    fn test_color_category_unknown_symbol() {
        assert_eq!(ColorCategory::from_raw("C"), ColorCategory::Colorless);
        assert_eq!(ColorCategory::from_raw("X"), ColorCategory::Colorless);
    }

    #[test]
    fn test_codes() {
        assert_eq!(ColorCategory::Mono(Color::Blue).code(), 'U');
        assert_eq!(ColorCategory::Multicolor.code(), 'M');
        assert_eq!(ColorCategory::Colorless.to_string(), "C");
    }

    #[test]
    fn test_card_new() {
        let card = Card::new("Llanowar Elves", 1, "Creature - Elf Druid", "G");

        assert_eq!(card.name, "Llanowar Elves");
        assert_eq!(card.mana_value, 1);
        assert_eq!(card.color, ColorCategory::Mono(Color::Green));
        assert_eq!(card.to_string(), "Llanowar Elves");
    }

    #[test]
    fn test_card_serialization() {
        let card = Card::new("Sol Ring", 1, "Artifact", "");
        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, deserialized);
    }
}
