//! Storage layer for gridess.
//!
//! This module provides the `SQLite` connection and the schema it carries.

mod database;
mod migrations;

pub use database::Database;
