//! Command-line interface for gridess.

pub mod args;
pub mod commands;
