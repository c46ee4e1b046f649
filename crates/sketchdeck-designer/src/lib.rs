//! # SketchDeck Designer
//!
//! The interaction core of the SketchDeck canvas editor: hit-testing and
//! selection, nested groups and stacking order, snapshot undo/redo and
//! multi-touch pan and pinch.
//!
//! ## Core Components
//!
//! ### Document
//! - **Shapes**: Rectangles, ellipses, diamonds, lines and text
//! - **Elements**: A shape with a style, a group chain and a tombstone flag
//! - **Scene**: Elements in stacking order, bottom first
//!
//! ### Interaction
//! - **Selection**: Element and whole-group selection with an editing level
//! - **Gestures**: Two-finger pan and pinch on the [`Viewport`]
//! - **History**: Linear undo/redo over scene and selection snapshots
//! - **Controller**: Turns pointer, touch and key input into the above
//!
//! ## Architecture
//!
//! ```text
//! InteractionController
//!   ├── Scene (Elements, z-order, hit-testing)
//!   │     └── GroupIndex (derived group membership)
//!   ├── Selection + SelectionResolver
//!   ├── GestureRecognizer ── Viewport
//!   └── History (Snapshots)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use sketchdeck_designer::{InteractionController, InteractionSettings, Modifiers, Point, MOUSE};
//! use sketchdeck_designer::model::{DesignRectangle, Shape};
//! use sketchdeck_designer::element::Style;
//!
//! let mut controller = InteractionController::new(InteractionSettings::default());
//! let id = controller.add_element(
//!     Shape::Rectangle(DesignRectangle::new(0.0, 0.0, 50.0, 50.0)),
//!     Style::solid("#a5d8ff"),
//! );
//!
//! controller.dispatch_pointer_down(Point::new(25.0, 25.0), Modifiers::NONE, MOUSE);
//! controller.dispatch_pointer_up(Point::new(25.0, 25.0), Modifiers::NONE, MOUSE);
//! assert!(controller.selection().contains(id));
//! ```

pub mod collaborators;
pub mod controller;
pub mod element;
pub mod geometry;
pub mod gesture;
pub mod group_index;
pub mod history;
pub mod input;
pub mod interaction_settings;
pub mod model;
pub mod scene;
pub mod selection;
pub mod selection_resolver;
pub mod viewport;

pub use collaborators::{
    DefaultStyleSource, FixedStyleSource, LibrarySink, MemoryClipboard, MemoryLibrary, StyleClipboard, StyleSource,
};
pub use controller::{Drag, InteractionController, InteractionState};
pub use element::{Element, ElementId, FillStyle, GroupChain, GroupId, Style};
pub use geometry::Bounds;
pub use gesture::{ContactChange, GestureFrame, GestureRecognizer};
pub use group_index::GroupIndex;
pub use history::{History, HistoryEntry, Snapshot};
pub use input::{ContactId, KeyCode, Modifiers, Tool, MOUSE};
pub use interaction_settings::InteractionSettings;
pub use model::{DesignerShape, Point, Shape, ShapeType};
pub use scene::{HitMode, Scene};
pub use selection::{Selection, SelectionUnit};
pub use selection_resolver::{PressOutcome, PressTarget, SelectionResolver};
pub use viewport::Viewport;

pub use sketchdeck_core::{DesignerError, Result};
