//! The color alphabet shown to the player.

use super::error::SequenceError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A color symbol in a Simon sequence.
///
/// Each color has a single-character symbol (`R`, `G`, `B`, `Y`) used
/// when sequences are written out or typed back by the player.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum Color {
    /// Red pad (`R`).
    #[default]
    Red,
    /// Green pad (`G`).
    Green,
    /// Blue pad (`B`).
    Blue,
    /// Yellow pad (`Y`).
    Yellow,
}

impl Color {
    /// All four colors, in pad order.
    pub const ALL: [Color; 4] = [Color::Red, Color::Green, Color::Blue, Color::Yellow];

    /// Returns the single-character symbol for this color.
    pub fn symbol(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Green => 'G',
            Color::Blue => 'B',
            Color::Yellow => 'Y',
        }
    }

    /// Parses a symbol (case-insensitive).
    #[instrument]
    pub fn from_symbol(symbol: char) -> Option<Color> {
        <Color as strum::IntoEnumIterator>::iter()
            .find(|color| color.symbol() == symbol.to_ascii_uppercase())
    }

    /// Get label for this color (for display).
    pub fn label(self) -> &'static str {
        match self {
            Color::Red => "Red",
            Color::Green => "Green",
            Color::Blue => "Blue",
            Color::Yellow => "Yellow",
        }
    }
}

impl TryFrom<char> for Color {
    type Error = SequenceError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        Color::from_symbol(symbol).ok_or(SequenceError::UnknownSymbol { symbol })
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols_in_pad_order() {
        let symbols: Vec<char> = Color::ALL.iter().map(|c| c.symbol()).collect();
        assert_eq!(symbols, vec!['R', 'G', 'B', 'Y']);
    }

    #[test]
    fn test_from_symbol_ignores_case() {
        assert_eq!(Color::from_symbol('y'), Some(Color::Yellow));
        assert_eq!(Color::from_symbol('G'), Some(Color::Green));
    }

    #[test]
    fn test_unknown_symbol_rejected() {
        assert_eq!(Color::from_symbol('Q'), None);
        assert_eq!(
            Color::try_from('7'),
            Err(SequenceError::UnknownSymbol { symbol: '7' })
        );
    }

    #[test]
    fn test_all_matches_enum_iter() {
        let iterated: Vec<Color> = <Color as strum::IntoEnumIterator>::iter().collect();
        assert_eq!(iterated, Color::ALL.to_vec());
    }
}
