//! Configuration module for tally
//!
//! This module provides configuration management including:
//! - Platform-aware path resolution
//! - User settings persistence (defaults for period, goal and display)

pub mod paths;
pub mod settings;

pub use paths::TallyPaths;
pub use settings::Settings;
