//! Default tuning constants for the interaction core.
//!
//! These are the values `sketchdeck-settings` ships as defaults. They live here
//! so the designer crate can build its settings without a config file.

/// Hit tolerance around outlines, in screen pixels.
pub const HIT_TOLERANCE_PX: f64 = 4.0;

/// Pointer travel (screen pixels) before a press becomes a drag.
pub const DRAG_THRESHOLD_PX: f64 = 3.0;

/// Arrow-key nudge distance in world units.
pub const NUDGE_STEP: f64 = 1.0;

/// Arrow-key nudge distance with shift held.
pub const NUDGE_STEP_LARGE: f64 = 10.0;

/// Lowest zoom level reachable by pinching.
pub const MIN_ZOOM: f64 = 0.1;

/// Highest zoom level reachable by pinching.
pub const MAX_ZOOM: f64 = 30.0;

/// Midpoint travel (pixels) that must exceed the distance change for a
/// two-finger frame to count as a pan rather than a pinch.
pub const PAN_THRESHOLD_PX: f64 = 0.5;

/// Maximum number of history entries kept before the oldest are dropped.
pub const MAX_HISTORY_ENTRIES: usize = 100;

/// Comparison epsilon for geometry.
pub const GEOMETRY_EPSILON: f64 = 1e-9;
