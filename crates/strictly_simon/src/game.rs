//! Round-indexed sequence state with a playback cursor.
//!
//! A [`SequenceGame`] is created empty for a round, filled by an external
//! populator through [`SequenceGame::load`], then played back one color at a
//! time:
//!
//! ```
//! use strictly_simon::{Color, ColorSequence, Round, SequenceGame};
//!
//! let mut game = SequenceGame::new(Round::new(1));
//! game.load("RGBY".parse::<ColorSequence>()?)?;
//!
//! let mut shown = Vec::new();
//! while game.has_more_colors() {
//!     shown.push(game.current_color()?);
//!     game.next();
//! }
//! assert_eq!(shown, vec![Color::Red, Color::Green, Color::Blue, Color::Yellow]);
//! # Ok::<(), strictly_simon::SequenceError>(())
//! ```

use super::color::Color;
use super::error::SequenceError;
use super::invariants::assert_invariants;
use super::sequence::{ColorSequence, MIN_LENGTH};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Round number of a game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
#[display("round {_0}")]
pub struct Round(u32);

impl Round {
    /// Creates a round from its number.
    pub fn new(number: u32) -> Self {
        Self(number)
    }

    /// Returns the round number.
    pub fn number(self) -> u32 {
        self.0
    }

    /// Returns the following round.
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

/// Sequence state for one round of Simon.
///
/// The cursor always satisfies `cursor <= len`. Positions `0..len` are
/// "presenting"; `len` is exhausted until [`reset`](Self::reset) rewinds it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceGame {
    pub(crate) round: Round,
    pub(crate) sequence: ColorSequence,
    pub(crate) cursor: usize,
}

impl SequenceGame {
    /// Creates an empty game for `round`.
    ///
    /// The sequence starts with no colors, so the game is already exhausted
    /// until a populator calls [`load`](Self::load).
    #[instrument]
    pub fn new(round: Round) -> Self {
        Self {
            round,
            sequence: ColorSequence::new(),
            cursor: 0,
        }
    }

    /// Installs a populated sequence and rewinds the cursor.
    ///
    /// # Errors
    ///
    /// Returns `SequenceError::TooShort` if the sequence holds fewer than
    /// [`MIN_LENGTH`] colors. The game is left unchanged in that case.
    #[instrument(skip(self, sequence), fields(round = %self.round, len = sequence.len()))]
    pub fn load(&mut self, sequence: ColorSequence) -> Result<(), SequenceError> {
        if sequence.len() < MIN_LENGTH {
            return Err(SequenceError::TooShort {
                len: sequence.len(),
                min: MIN_LENGTH,
            });
        }

        self.sequence = sequence;
        self.cursor = 0;
        debug!("Sequence loaded");
        assert_invariants(self);
        Ok(())
    }

    /// Rewinds the cursor to the first color. Sequence and round are kept.
    #[instrument(skip(self), fields(round = %self.round, cursor = self.cursor))]
    pub fn reset(&mut self) {
        self.cursor = 0;
        assert_invariants(self);
    }

    /// Returns the color under the cursor without moving it.
    ///
    /// # Errors
    ///
    /// Returns `SequenceError::OutOfRange` once the sequence is exhausted.
    /// Check [`has_more_colors`](Self::has_more_colors) first.
    #[instrument(skip(self), fields(cursor = self.cursor, len = self.sequence.len()))]
    pub fn current_color(&self) -> Result<Color, SequenceError> {
        self.sequence
            .get(self.cursor)
            .ok_or(SequenceError::OutOfRange {
                cursor: self.cursor,
                len: self.sequence.len(),
            })
    }

    /// Returns true while the cursor points at a color.
    pub fn has_more_colors(&self) -> bool {
        self.cursor < self.sequence.len()
    }

    /// Advances the cursor by one.
    ///
    /// Saturates at the end of the sequence: advancing an exhausted game
    /// leaves the cursor at `len`.
    #[allow(clippy::should_implement_trait)]
    #[instrument(skip(self), fields(round = %self.round, cursor = self.cursor))]
    pub fn next(&mut self) {
        if self.has_more_colors() {
            self.cursor += 1;
        } else {
            debug!(len = self.sequence.len(), "Advance past end ignored");
        }
        assert_invariants(self);
    }

    /// Returns the round this game was created for.
    pub fn round(&self) -> Round {
        self.round
    }

    /// Returns the populated sequence.
    pub fn sequence(&self) -> &ColorSequence {
        &self.sequence
    }

    /// Returns the cursor position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of colors in the sequence.
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// Returns true if nothing has been loaded.
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Number of colors not yet played back.
    pub fn remaining(&self) -> usize {
        self.sequence.len() - self.cursor
    }
}
