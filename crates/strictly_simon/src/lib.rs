//! Strictly Simon - pure state for a Simon memory-sequence game.
//!
//! A round holds a bounded run of colors plus a read cursor. A presentation
//! layer walks the cursor to show the colors; a populator fills the sequence.
//! Neither lives here.
//!
//! # Architecture
//!
//! - **Color**: the four-symbol alphabet
//! - **ColorSequence**: fixed-capacity buffer, [`MAX_CAPACITY`] = [`MIN_LENGTH`] * 8
//! - **SequenceGame**: round, sequence and cursor with the playback protocol
//! - **Invariants**: properties re-checked after every mutation in debug builds

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod color;
mod error;
mod game;
pub mod invariants;
mod sequence;

pub use color::Color;
pub use error::SequenceError;
pub use game::{Round, SequenceGame};
pub use sequence::{ColorSequence, MAX_CAPACITY, MIN_LENGTH};
