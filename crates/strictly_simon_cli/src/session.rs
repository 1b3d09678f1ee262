//! Terminal play session: present each round's sequence, then check the echo.

use crate::populator::SequencePopulator;
use derive_more::{Display, Error, From};
use std::io::{BufRead, Write};
use strictly_simon::{Color, Round, SequenceError, SequenceGame};
use tracing::{debug, info, instrument, warn};

/// Error that ends a session early.
#[derive(Debug, Display, Error, From)]
pub enum SessionError {
    /// Reading input or writing output failed.
    #[display("Terminal I/O failed: {}", _0)]
    Io(std::io::Error),

    /// The sequence could not be populated or read.
    #[display("Sequence error: {}", _0)]
    Sequence(SequenceError),
}

/// Result of comparing the player's echo with the presented sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum EchoOutcome {
    /// Every color matched.
    #[display("Correct")]
    Correct,
    /// A color differed.
    #[display("Color {} was {expected}, you entered {got}", index + 1)]
    Mismatch {
        /// Zero-based position of the first wrong color.
        index: usize,
        /// Color that was presented.
        expected: Color,
        /// Color the player entered.
        got: Color,
    },
    /// The echo stopped before the sequence did.
    #[display("Only {got} of {expected} colors entered")]
    TooShort {
        /// Sequence length.
        expected: usize,
        /// Echo length.
        got: usize,
    },
    /// The echo kept going after the sequence ended.
    #[display("Entered {got} colors, the sequence has {expected}")]
    TooLong {
        /// Sequence length.
        expected: usize,
        /// Echo length.
        got: usize,
    },
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The configured number of rounds was cleared.
    Completed,
    /// The player missed; carries the failing comparison.
    Missed(EchoOutcome),
    /// Input ended before an echo was entered.
    Abandoned,
}

/// Totals reported when a session ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    /// Rounds echoed correctly.
    pub rounds_cleared: u32,
    /// Round that was in play (or next to play) when the session stopped.
    pub last_round: Round,
    /// Why the session stopped.
    pub outcome: SessionOutcome,
}

/// Writes the sequence through the cursor protocol, one label per color.
///
/// Leaves the game exhausted.
#[instrument(skip(game, output), fields(round = %game.round(), len = game.len()))]
pub fn present<W: Write>(game: &mut SequenceGame, output: &mut W) -> Result<(), SessionError> {
    game.reset();
    let mut first = true;
    while game.has_more_colors() {
        if !first {
            write!(output, " ")?;
        }
        write!(output, "{}", game.current_color()?)?;
        first = false;
        game.next();
    }
    writeln!(output)?;
    Ok(())
}

/// Rewinds `game` and compares `echo` against it color by color.
#[instrument(
    skip(game, echo),
    fields(round = %game.round(), len = game.len(), echo_len = echo.len())
)]
pub fn check_echo(game: &mut SequenceGame, echo: &[Color]) -> Result<EchoOutcome, SequenceError> {
    game.reset();
    for (index, &got) in echo.iter().enumerate() {
        if !game.has_more_colors() {
            return Ok(EchoOutcome::TooLong {
                expected: game.len(),
                got: echo.len(),
            });
        }
        let expected = game.current_color()?;
        if expected != got {
            return Ok(EchoOutcome::Mismatch {
                index,
                expected,
                got,
            });
        }
        game.next();
    }

    if game.has_more_colors() {
        Ok(EchoOutcome::TooShort {
            expected: game.len(),
            got: echo.len(),
        })
    } else {
        Ok(EchoOutcome::Correct)
    }
}

/// Interactive session over any line-based input and writable output.
pub struct Session<P, R, W> {
    populator: P,
    input: R,
    output: W,
    max_rounds: u32,
}

impl<P, R, W> Session<P, R, W>
where
    P: SequencePopulator,
    R: BufRead,
    W: Write,
{
    /// Creates a session. `max_rounds == 0` plays until a miss or end of input.
    pub fn new(populator: P, input: R, output: W, max_rounds: u32) -> Self {
        Self {
            populator,
            input,
            output,
            max_rounds,
        }
    }

    /// Plays rounds until the player misses, input ends, or the round limit is hit.
    #[instrument(skip(self), fields(max_rounds = self.max_rounds))]
    pub fn run(&mut self) -> Result<SessionSummary, SessionError> {
        let mut round = Round::new(1);
        let mut rounds_cleared = 0;

        let outcome = loop {
            if self.max_rounds != 0 && rounds_cleared >= self.max_rounds {
                break SessionOutcome::Completed;
            }

            let mut game = SequenceGame::new(round);
            self.populator.populate(&mut game)?;

            write!(self.output, "Round {}: ", round.number())?;
            present(&mut game, &mut self.output)?;

            let Some(echo) = self.read_echo()? else {
                info!(%round, "Input closed");
                break SessionOutcome::Abandoned;
            };

            match check_echo(&mut game, &echo)? {
                EchoOutcome::Correct => {
                    writeln!(self.output, "Correct!")?;
                    rounds_cleared += 1;
                    round = round.next();
                }
                miss => {
                    writeln!(self.output, "{}", miss)?;
                    info!(%round, ?miss, "Round missed");
                    break SessionOutcome::Missed(miss);
                }
            }
        };

        writeln!(self.output, "Rounds cleared: {}", rounds_cleared)?;
        self.output.flush()?;

        Ok(SessionSummary {
            rounds_cleared,
            last_round: round,
            outcome,
        })
    }

    /// Prompts until a parsable echo is entered. `None` on end of input.
    fn read_echo(&mut self) -> Result<Option<Vec<Color>>, SessionError> {
        loop {
            write!(self.output, "Your turn: ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }

            let parsed: Result<Vec<Color>, SequenceError> = line
                .chars()
                .filter(|c| !c.is_whitespace())
                .map(Color::try_from)
                .collect();

            match parsed {
                Ok(echo) if echo.is_empty() => debug!("Blank echo, prompting again"),
                Ok(echo) => return Ok(Some(echo)),
                Err(err) => {
                    warn!(%err, "Unparsable echo");
                    writeln!(self.output, "{}. Use R, G, B and Y.", err)?;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_simon::ColorSequence;

    fn game(symbols: &str) -> SequenceGame {
        let mut game = SequenceGame::new(Round::new(1));
        game.load(symbols.parse::<ColorSequence>().unwrap()).unwrap();
        game
    }

    fn colors(symbols: &str) -> Vec<Color> {
        symbols.chars().map(|c| Color::try_from(c).unwrap()).collect()
    }

    #[test]
    fn test_present_writes_labels() {
        let mut game = game("RGBY");
        let mut out = Vec::new();
        present(&mut game, &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "Red Green Blue Yellow\n");
        assert!(!game.has_more_colors());
    }

    #[test]
    fn test_echo_correct() {
        let mut game = game("RGBY");
        assert_eq!(check_echo(&mut game, &colors("RGBY")), Ok(EchoOutcome::Correct));
    }

    #[test]
    fn test_echo_mismatch_reports_first_difference() {
        let mut game = game("RGBY");
        assert_eq!(
            check_echo(&mut game, &colors("RGYB")),
            Ok(EchoOutcome::Mismatch {
                index: 2,
                expected: Color::Blue,
                got: Color::Yellow,
            })
        );
    }

    #[test]
    fn test_echo_length_errors() {
        let mut game = game("RGBY");
        assert_eq!(
            check_echo(&mut game, &colors("RG")),
            Ok(EchoOutcome::TooShort { expected: 4, got: 2 })
        );
        assert_eq!(
            check_echo(&mut game, &colors("RGBYR")),
            Ok(EchoOutcome::TooLong { expected: 4, got: 5 })
        );
    }

    #[test]
    fn test_outcome_messages() {
        let mismatch = EchoOutcome::Mismatch {
            index: 0,
            expected: Color::Red,
            got: Color::Blue,
        };
        assert_eq!(mismatch.to_string(), "Color 1 was Red, you entered Blue");
        assert_eq!(
            EchoOutcome::TooLong { expected: 4, got: 6 }.to_string(),
            "Entered 6 colors, the sequence has 4"
        );
        assert_eq!(EchoOutcome::Correct.to_string(), "Correct");
    }

    #[test]
    fn test_check_rewinds_partially_played_game() {
        let mut game = game("GGRR");
        game.next();
        game.next();
        assert_eq!(check_echo(&mut game, &colors("GGRR")), Ok(EchoOutcome::Correct));
    }
}
