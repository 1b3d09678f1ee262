//! Strictly Simon terminal front end.
//!
//! Supplies the collaborators the core state leaves to its callers: a
//! configurable random [`GrowthPopulator`] and a line-based [`Session`] that
//! presents each round and checks the player's echo.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
mod config;
mod populator;
mod session;

pub use config::{ConfigError, SimonConfig};
pub use populator::{GrowthPopulator, SequencePopulator};
pub use session::{
    EchoOutcome, Session, SessionError, SessionOutcome, SessionSummary, check_echo, present,
};
