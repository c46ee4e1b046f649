//! Runtime settings for the interaction controller.

use sketchdeck_settings::Config;

/// Flattened view of [`Config`] that the controller reads on every event.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionSettings {
    pub hit_tolerance_px: f64,
    pub drag_threshold_px: f64,
    pub nudge_step: f64,
    pub nudge_step_large: f64,
    pub duplicate_on_alt_drag: bool,
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub pan_threshold_px: f64,
    pub max_history_entries: usize,
    pub keep_tool_after_create: bool,
}

impl From<&Config> for InteractionSettings {
    fn from(config: &Config) -> Self {
        Self {
            hit_tolerance_px: config.hit_test.tolerance_px,
            drag_threshold_px: config.pointer.drag_threshold_px,
            nudge_step: config.pointer.nudge_step,
            nudge_step_large: config.pointer.nudge_step_large,
            duplicate_on_alt_drag: config.pointer.duplicate_on_alt_drag,
            min_zoom: config.gesture.min_zoom,
            max_zoom: config.gesture.max_zoom,
            pan_threshold_px: config.gesture.pan_threshold_px,
            max_history_entries: config.history.max_entries,
            keep_tool_after_create: config.tools.keep_tool_after_create,
        }
    }
}

impl Default for InteractionSettings {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}
