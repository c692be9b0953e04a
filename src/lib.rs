//! pomo - A Pomodoro session timer for the terminal
//!
//! This crate alternates work and break phases across a configured number of
//! sessions, rendering a live progress bar with ratatui and sending desktop
//! notifications at every phase boundary.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod notify;
pub mod output;
pub mod timer;
pub mod tui;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use config::{Config, TimerSettings};
pub use error::PomoError;
pub use timer::{SessionTimer, Snapshot};
