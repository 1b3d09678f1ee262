//! Error types for sequence state and playback.

use derive_more::{Display, Error};

/// Error raised by sequence storage and the playback cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SequenceError {
    /// A color was read while the cursor sat at or past the end of the sequence.
    #[display("Cursor {cursor} is past the end of a {len}-color sequence")]
    OutOfRange {
        /// Cursor position at the time of the read.
        cursor: usize,
        /// Number of valid colors in the sequence.
        len: usize,
    },

    /// More colors were supplied than the buffer can hold.
    #[display("Sequence capacity of {capacity} colors exceeded ({attempted} requested)")]
    CapacityExceeded {
        /// Fixed capacity of the buffer.
        capacity: usize,
        /// Number of colors the caller tried to store.
        attempted: usize,
    },

    /// A populated sequence was shorter than the playable minimum.
    #[display("Sequence of {len} colors is shorter than the minimum of {min}")]
    TooShort {
        /// Length that was supplied.
        len: usize,
        /// Minimum playable length.
        min: usize,
    },

    /// A character did not name any color.
    #[display("Unrecognized color symbol '{symbol}'")]
    UnknownSymbol {
        /// The offending character.
        symbol: char,
    },
}
