//! Fixed-capacity color buffer.

use super::color::Color;
use super::error::SequenceError;
use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use tracing::instrument;

/// Shortest sequence a populated round may present.
pub const MIN_LENGTH: usize = 4;

/// Hard upper bound on sequence length.
pub const MAX_CAPACITY: usize = MIN_LENGTH * 8;

/// An ordered run of colors stored in a fixed array with an explicit length.
///
/// Only the first `len()` slots are meaningful. Writes past
/// [`MAX_CAPACITY`] are rejected rather than truncated.
#[derive(Debug, Clone, Copy)]
pub struct ColorSequence {
    colors: [Color; MAX_CAPACITY],
    pub(crate) len: usize,
}

impl ColorSequence {
    /// Creates an empty sequence.
    pub fn new() -> Self {
        Self {
            colors: [Color::default(); MAX_CAPACITY],
            len: 0,
        }
    }

    /// Builds a sequence from a slice, all or nothing.
    ///
    /// # Errors
    ///
    /// Returns `SequenceError::CapacityExceeded` if `colors` holds more than
    /// [`MAX_CAPACITY`] entries.
    #[instrument(skip(colors), fields(len = colors.len()))]
    pub fn try_from_colors(colors: &[Color]) -> Result<Self, SequenceError> {
        if colors.len() > MAX_CAPACITY {
            return Err(SequenceError::CapacityExceeded {
                capacity: MAX_CAPACITY,
                attempted: colors.len(),
            });
        }

        let mut sequence = Self::new();
        sequence.colors[..colors.len()].copy_from_slice(colors);
        sequence.len = colors.len();
        Ok(sequence)
    }

    /// Appends a color.
    ///
    /// # Errors
    ///
    /// Returns `SequenceError::CapacityExceeded` when the buffer is full.
    pub fn push(&mut self, color: Color) -> Result<(), SequenceError> {
        if self.is_full() {
            return Err(SequenceError::CapacityExceeded {
                capacity: MAX_CAPACITY,
                attempted: self.len + 1,
            });
        }
        self.colors[self.len] = color;
        self.len += 1;
        Ok(())
    }

    /// Gets the color at `index`, if it lies inside the valid prefix.
    pub fn get(&self, index: usize) -> Option<Color> {
        self.as_slice().get(index).copied()
    }

    /// Returns the valid prefix as a slice.
    pub fn as_slice(&self) -> &[Color] {
        &self.colors[..self.len]
    }

    /// Iterates over the valid colors in order.
    pub fn iter(&self) -> impl Iterator<Item = Color> + '_ {
        self.as_slice().iter().copied()
    }

    /// Number of valid colors.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no colors are stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if the buffer holds [`MAX_CAPACITY`] colors.
    pub fn is_full(&self) -> bool {
        self.len == MAX_CAPACITY
    }

    /// Drops all colors. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.len = 0;
    }
}

impl Default for ColorSequence {
    fn default() -> Self {
        Self::new()
    }
}

// Slots past `len` are scratch space and must not affect equality.
impl PartialEq for ColorSequence {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for ColorSequence {}

impl TryFrom<&[Color]> for ColorSequence {
    type Error = SequenceError;

    fn try_from(colors: &[Color]) -> Result<Self, Self::Error> {
        Self::try_from_colors(colors)
    }
}

/// Parses symbol strings such as `"RGBY"` or `"r g b y"`. Whitespace is ignored.
impl FromStr for ColorSequence {
    type Err = SequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut sequence = Self::new();
        for symbol in s.chars().filter(|c| !c.is_whitespace()) {
            sequence.push(Color::try_from(symbol)?)?;
        }
        Ok(sequence)
    }
}

impl fmt::Display for ColorSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for color in self.iter() {
            write!(f, "{}", color.symbol())?;
        }
        Ok(())
    }
}

impl Serialize for ColorSequence {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.as_slice())
    }
}

/// Reads colors straight into the fixed buffer and stops at the first one
/// past capacity.
struct ColorSequenceVisitor;

impl<'de> Visitor<'de> for ColorSequenceVisitor {
    type Value = ColorSequence;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a list of at most {} colors", MAX_CAPACITY)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut sequence = ColorSequence::new();
        while let Some(color) = seq.next_element::<Color>()? {
            sequence.push(color).map_err(de::Error::custom)?;
        }
        Ok(sequence)
    }
}

impl<'de> Deserialize<'de> for ColorSequence {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(ColorSequenceVisitor)
    }
}
