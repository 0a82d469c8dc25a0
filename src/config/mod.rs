//! Configuration management for gridess.
//!
//! This module handles path resolution and loading `gridess.yaml`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{Config, GeneralConfig, Language};
