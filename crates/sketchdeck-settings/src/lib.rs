//! SketchDeck Settings Crate
//!
//! Handles interaction configuration (hit tolerances, drag thresholds, zoom
//! limits, history depth) and its persistence as JSON or TOML.

pub mod config;
pub mod error;

pub use config::{
    Config, GestureSettings, HistorySettings, HitTestSettings, PointerSettings, ToolSettings,
};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
