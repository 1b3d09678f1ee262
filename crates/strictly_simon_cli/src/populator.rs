//! Sequence populators: fill a game's colors for its round.

use crate::config::SimonConfig;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use strictly_simon::{
    Color, ColorSequence, MAX_CAPACITY, MIN_LENGTH, Round, SequenceError, SequenceGame,
};
use tracing::{debug, instrument};

/// Fills a freshly created game with the colors for its round.
pub trait SequencePopulator {
    /// Populates `game` and loads the result.
    ///
    /// # Errors
    ///
    /// Propagates the `SequenceError` raised by building or loading the sequence.
    fn populate(&mut self, game: &mut SequenceGame) -> Result<(), SequenceError>;
}

/// Random populator whose sequences grow by a fixed step each round.
///
/// Round `r` gets `start_length + (r - 1) * growth` colors, clamped to
/// `[MIN_LENGTH, MAX_CAPACITY]`. Round 0 is sized like round 1.
#[derive(Debug, Clone)]
pub struct GrowthPopulator {
    rng: StdRng,
    start_length: usize,
    growth: usize,
}

impl GrowthPopulator {
    /// Creates a populator with an explicit seed.
    #[instrument]
    pub fn new(start_length: usize, growth: usize, seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            start_length,
            growth,
        }
    }

    /// Creates a populator from configuration and a resolved seed.
    pub fn from_config(config: &SimonConfig, seed: u64) -> Self {
        Self::new(*config.start_length(), *config.growth(), seed)
    }

    /// Sequence length this populator produces for `round`.
    pub fn length_for(&self, round: Round) -> usize {
        let steps = round.number().saturating_sub(1) as usize;
        self.start_length
            .saturating_add(steps.saturating_mul(self.growth))
            .clamp(MIN_LENGTH, MAX_CAPACITY)
    }
}

impl SequencePopulator for GrowthPopulator {
    #[instrument(skip(self, game), fields(round = %game.round()))]
    fn populate(&mut self, game: &mut SequenceGame) -> Result<(), SequenceError> {
        let len = self.length_for(game.round());
        let mut sequence = ColorSequence::new();
        for _ in 0..len {
            sequence.push(Color::ALL[self.rng.random_range(0..Color::ALL.len())])?;
        }
        debug!(len, "Generated sequence");
        game.load(sequence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_grows_per_round() {
        let populator = GrowthPopulator::new(4, 2, 0);
        assert_eq!(populator.length_for(Round::new(0)), 4);
        assert_eq!(populator.length_for(Round::new(1)), 4);
        assert_eq!(populator.length_for(Round::new(2)), 6);
        assert_eq!(populator.length_for(Round::new(5)), 12);
    }

    #[test]
    fn test_length_clamped_to_capacity() {
        let populator = GrowthPopulator::new(MAX_CAPACITY, 3, 0);
        assert_eq!(populator.length_for(Round::new(1)), MAX_CAPACITY);
        assert_eq!(populator.length_for(Round::new(u32::MAX)), MAX_CAPACITY);
    }

    #[test]
    fn test_length_never_below_minimum() {
        let populator = GrowthPopulator::new(1, 0, 0);
        assert_eq!(populator.length_for(Round::new(3)), MIN_LENGTH);
    }

    #[test]
    fn test_populate_loads_and_rewinds() {
        let mut populator = GrowthPopulator::new(5, 1, 11);
        let mut game = SequenceGame::new(Round::new(3));
        populator.populate(&mut game).unwrap();

        assert_eq!(game.len(), 7);
        assert_eq!(game.cursor(), 0);
        assert!(game.has_more_colors());
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = GrowthPopulator::new(4, 1, 42);
        let mut b = GrowthPopulator::new(4, 1, 42);

        for round in 1..=5 {
            let mut game_a = SequenceGame::new(Round::new(round));
            let mut game_b = SequenceGame::new(Round::new(round));
            a.populate(&mut game_a).unwrap();
            b.populate(&mut game_b).unwrap();
            assert_eq!(game_a.sequence(), game_b.sequence());
        }
    }
}
