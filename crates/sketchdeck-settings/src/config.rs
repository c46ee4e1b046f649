//! Interaction configuration for SketchDeck
//!
//! Provides configuration file handling, defaults and validation for the
//! interaction core. Supports JSON and TOML file formats stored in the
//! platform-specific config directory.
//!
//! Configuration is organized into logical sections:
//! - Hit testing (outline tolerance)
//! - Pointer handling (drag threshold, nudging, alt-drag duplication)
//! - Touch gestures (zoom range, pan/pinch discrimination)
//! - History (undo depth)
//! - Tools (whether a creation tool stays active)

use crate::error::{ConfigError, SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};
use sketchdeck_core::constants;
use std::path::{Path, PathBuf};

/// Hit-testing settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HitTestSettings {
    /// Distance in screen pixels within which an outline counts as hit
    pub tolerance_px: f64,
}

impl Default for HitTestSettings {
    fn default() -> Self {
        Self {
            tolerance_px: constants::HIT_TOLERANCE_PX,
        }
    }
}

/// Single-pointer settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointerSettings {
    /// Pointer travel in screen pixels before a press turns into a drag
    pub drag_threshold_px: f64,
    /// Arrow-key nudge in world units
    pub nudge_step: f64,
    /// Arrow-key nudge with shift held
    pub nudge_step_large: f64,
    /// Duplicate the selection when a drag starts with alt held
    pub duplicate_on_alt_drag: bool,
}

impl Default for PointerSettings {
    fn default() -> Self {
        Self {
            drag_threshold_px: constants::DRAG_THRESHOLD_PX,
            nudge_step: constants::NUDGE_STEP,
            nudge_step_large: constants::NUDGE_STEP_LARGE,
            duplicate_on_alt_drag: true,
        }
    }
}

/// Multi-touch gesture settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureSettings {
    /// Lowest reachable zoom level
    pub min_zoom: f64,
    /// Highest reachable zoom level
    pub max_zoom: f64,
    /// Midpoint travel that must exceed the distance change for a pan frame
    pub pan_threshold_px: f64,
}

impl Default for GestureSettings {
    fn default() -> Self {
        Self {
            min_zoom: constants::MIN_ZOOM,
            max_zoom: constants::MAX_ZOOM,
            pan_threshold_px: constants::PAN_THRESHOLD_PX,
        }
    }
}

/// Undo history settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistorySettings {
    /// Maximum number of snapshots kept
    pub max_entries: usize,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self {
            max_entries: constants::MAX_HISTORY_ENTRIES,
        }
    }
}

/// Creation tool settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ToolSettings {
    /// Keep the creation tool active after an element has been created
    pub keep_tool_after_create: bool,
}

/// Complete interaction configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Hit testing
    pub hit_test: HitTestSettings,
    /// Pointer handling
    pub pointer: PointerSettings,
    /// Touch gestures
    pub gesture: GestureSettings,
    /// Undo history
    pub history: HistorySettings,
    /// Creation tools
    pub tools: ToolSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default location of the config file in the platform config directory
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("sketchdeck").join("config.toml"))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no platform config directory".to_string())
            })
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            ConfigFormat::Json => serde_json::from_str(&content)?,
            ConfigFormat::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!("Loaded interaction config from {}", path.display());
        Ok(config)
    }

    /// Load config from file, falling back to defaults when the file is missing
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if !path.exists() {
            tracing::info!(
                "No config at {}, using defaults",
                path.display()
            );
            return Ok(Self::default());
        }
        Self::load_from_file(path)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match ConfigFormat::from_path(path)? {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("hit_test.tolerance_px", self.hit_test.tolerance_px)?;
        non_negative("pointer.drag_threshold_px", self.pointer.drag_threshold_px)?;
        positive("pointer.nudge_step", self.pointer.nudge_step)?;
        positive("pointer.nudge_step_large", self.pointer.nudge_step_large)?;
        positive("gesture.min_zoom", self.gesture.min_zoom)?;
        positive("gesture.max_zoom", self.gesture.max_zoom)?;
        non_negative("gesture.pan_threshold_px", self.gesture.pan_threshold_px)?;

        if self.gesture.min_zoom > self.gesture.max_zoom {
            return Err(ConfigError::Inconsistent(format!(
                "gesture.min_zoom ({}) exceeds gesture.max_zoom ({})",
                self.gesture.min_zoom, self.gesture.max_zoom
            )));
        }

        if self.history.max_entries == 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "history.max_entries".to_string(),
                value: "0".to_string(),
            });
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

fn positive(key: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::ValueOutOfRange {
            key: key.to_string(),
            value: value.to_string(),
        })
    }
}

fn non_negative(key: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::ValueOutOfRange {
            key: key.to_string(),
            value: value.to_string(),
        })
    }
}
