//! # SketchDeck
//!
//! Interaction core for a canvas diagram editor:
//! - Hit-testing with stroke tolerance and filled/hollow interiors
//! - Selection of elements and nested groups, with group editing
//! - Stacking order commands that keep groups contiguous
//! - Snapshot undo/redo with no-op suppression
//! - Two-finger pan and pinch zoom
//!
//! ## Architecture
//!
//! SketchDeck is organized as a workspace with multiple crates:
//!
//! 1. **sketchdeck-core** - Error types and shared constants
//! 2. **sketchdeck-settings** - Interaction configuration and its persistence
//! 3. **sketchdeck-designer** - Scene, selection, history, gestures and the controller
//! 4. **sketchdeck** - Script replay and the command line front end

pub mod replay;

pub use replay::{load_script, replay, RejectedCommand, ReplayReport, Script, ScriptCommand, ScriptEvent};

pub use sketchdeck_core::{DesignerError, Error, Result};
pub use sketchdeck_designer as designer;
pub use sketchdeck_designer::{
    Element, ElementId, GroupId, InteractionController, InteractionSettings, Scene, Selection, Viewport,
};
pub use sketchdeck_settings::Config;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Logs go to stderr so that stdout stays free for replay reports.
/// `RUST_LOG` overrides the default `info` level.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
