//! First-class invariants for sequence state.
//!
//! Invariants are logical properties that must hold after every operation.
//! They are testable independently and checked in debug builds.

use super::game::SequenceGame;
use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod cursor_within_length;
pub mod length_within_capacity;

pub use cursor_within_length::CursorWithinLength;
pub use length_within_capacity::LengthWithinCapacity;

/// All sequence-game invariants as a composable set.
pub type SimonInvariants = (LengthWithinCapacity, CursorWithinLength);

/// Asserts that all game invariants hold (panic on violation in debug builds).
pub(crate) fn assert_invariants(game: &SequenceGame) {
    if cfg!(debug_assertions)
        && let Err(violations) = SimonInvariants::check_all(game)
    {
        for violation in &violations {
            warn!(description = %violation.description, "Invariant violated");
        }
        panic!("Sequence game invariants violated: {:?}", violations);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Round, SequenceGame};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        let game = SequenceGame::new(Round::new(1));
        assert!(SimonInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_during_playback() {
        let mut game = SequenceGame::new(Round::new(2));
        game.load("RGBYR".parse().unwrap()).unwrap();

        while game.has_more_colors() {
            game.next();
            assert!(SimonInvariants::check_all(&game).is_ok());
        }
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let mut game = SequenceGame::new(Round::new(1));
        game.load("RGBY".parse().unwrap()).unwrap();

        // Corrupt the cursor
        game.cursor = 9;

        let violations = SimonInvariants::check_all(&game).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].description, CursorWithinLength::description());
    }
}
