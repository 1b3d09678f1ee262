//! Cursor invariant: playback never runs past the sequence.

use super::super::game::SequenceGame;
use super::Invariant;

/// Invariant: `cursor <= len`.
///
/// `cursor == len` is the exhausted state; anything beyond it would let
/// a read escape the valid prefix.
pub struct CursorWithinLength;

impl Invariant<SequenceGame> for CursorWithinLength {
    fn holds(game: &SequenceGame) -> bool {
        game.cursor() <= game.len()
    }

    fn description() -> &'static str {
        "Cursor never exceeds sequence length"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Round;

    #[test]
    fn test_exhausted_game_holds() {
        let mut game = SequenceGame::new(Round::new(1));
        game.load("GGGG".parse().unwrap()).unwrap();
        for _ in 0..6 {
            game.next();
        }
        assert!(CursorWithinLength::holds(&game));
    }

    #[test]
    fn test_cursor_past_end_violates() {
        let mut game = SequenceGame::new(Round::new(1));
        game.cursor = 1;
        assert!(!CursorWithinLength::holds(&game));
    }
}
