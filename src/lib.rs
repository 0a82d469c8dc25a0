//! gridess - a student entry form
//!
//! This crate records student entries (name, age, note) into a local `SQLite`
//! database and shows them as a read-only transcript, either in a terminal
//! form or through headless commands.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod storage;
pub mod students;
pub mod tui;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::{GridessError, ValidationError};
pub use students::{StudentRecord, StudentStorage, StudentStore};
