//! Capacity invariant: the valid prefix fits in the fixed buffer.

use super::super::game::SequenceGame;
use super::super::sequence::MAX_CAPACITY;
use super::Invariant;

/// Invariant: `len <= MAX_CAPACITY`.
pub struct LengthWithinCapacity;

impl Invariant<SequenceGame> for LengthWithinCapacity {
    fn holds(game: &SequenceGame) -> bool {
        game.len() <= MAX_CAPACITY
    }

    fn description() -> &'static str {
        "Sequence length never exceeds capacity"
    }
}
