//! The interaction controller.
//!
//! Owns the scene, the selection, the history and the viewport, and turns
//! host input into changes of them. Every pointer transaction or command
//! ends with at most one history entry.
//!
//! ```rust
//! use sketchdeck_designer::{InteractionController, InteractionSettings, Modifiers, Point, Tool};
//!
//! let mut controller = InteractionController::new(InteractionSettings::default());
//! controller.set_tool(Tool::Rectangle);
//! controller.dispatch_pointer_down(Point::new(10.0, 10.0), Modifiers::NONE, 0);
//! controller.dispatch_pointer_move(Point::new(40.0, 30.0), Modifiers::NONE, 0);
//! controller.dispatch_pointer_up(Point::new(40.0, 30.0), Modifiers::NONE, 0);
//!
//! assert_eq!(controller.scene().live_count(), 1);
//! assert_eq!(controller.selection().len(), 1);
//! assert!(controller.undo());
//! assert_eq!(controller.scene().live_count(), 0);
//! ```

mod commands;
mod pointer;
mod state;
mod zorder;

pub use state::{Drag, InteractionState};

use crate::collaborators::{DefaultStyleSource, StyleSource};
use crate::element::ElementId;
use crate::gesture::GestureRecognizer;
use crate::history::History;
use crate::input::{ContactId, Tool};
use crate::interaction_settings::InteractionSettings;
use crate::scene::Scene;
use crate::selection::Selection;
use crate::viewport::Viewport;

pub struct InteractionController {
    scene: Scene,
    selection: Selection,
    history: History,
    gesture: GestureRecognizer,
    viewport: Viewport,
    state: InteractionState,
    tool: Tool,
    settings: InteractionSettings,
    style_source: Box<dyn StyleSource>,
    /// Never reset by undo, so ids are not reused.
    next_id: ElementId,
    active_contact: Option<ContactId>,
}

impl InteractionController {
    pub fn new(settings: InteractionSettings) -> Self {
        Self::with_scene(Scene::new(), settings)
    }

    /// Start from an existing scene. It becomes the first history entry.
    pub fn with_scene(scene: Scene, settings: InteractionSettings) -> Self {
        let next_id = scene.iter().map(|e| e.id).max().map_or(1, |max| max + 1);
        let history = History::new(scene.clone(), Selection::default(), settings.max_history_entries);
        Self {
            scene,
            selection: Selection::default(),
            history,
            gesture: GestureRecognizer::new(settings.pan_threshold_px),
            viewport: Viewport::new(settings.min_zoom, settings.max_zoom),
            state: InteractionState::Idle,
            tool: Tool::Select,
            settings,
            style_source: Box::new(DefaultStyleSource),
            next_id,
            active_contact: None,
        }
    }

    pub fn with_style_source<S: StyleSource + 'static>(mut self, source: S) -> Self {
        self.style_source = Box::new(source);
        self
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn settings(&self) -> &InteractionSettings {
        &self.settings
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// Switch tools. Any transaction in flight is cancelled first.
    pub fn set_tool(&mut self, tool: Tool) {
        self.abort_transaction("tool change");
        if self.tool != tool {
            tracing::debug!("Tool {:?} -> {:?}", self.tool, tool);
            self.tool = tool;
        }
    }

    /// Revert an in-flight transaction. Returns whether one was cancelled.
    pub fn cancel(&mut self) -> bool {
        self.abort_transaction("cancel")
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn undo(&mut self) -> bool {
        self.abort_transaction("undo");
        let Some(entry) = self.history.undo() else {
            tracing::debug!("Nothing to undo");
            return false;
        };
        tracing::debug!("Undo '{}'", entry.label);
        self.scene = entry.snapshot.scene.clone();
        self.selection = entry.snapshot.selection.clone();
        true
    }

    pub fn redo(&mut self) -> bool {
        self.abort_transaction("redo");
        let Some(entry) = self.history.redo() else {
            tracing::debug!("Nothing to redo");
            return false;
        };
        tracing::debug!("Redo '{}'", entry.label);
        self.scene = entry.snapshot.scene.clone();
        self.selection = entry.snapshot.selection.clone();
        true
    }

    fn allocate_id(&mut self) -> ElementId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Hit tolerance in world units at the current zoom.
    fn world_tolerance(&self) -> f64 {
        self.viewport
            .screen_to_world_distance(self.settings.hit_tolerance_px)
    }

    /// Close the current transaction with one history entry.
    fn commit(&mut self, label: &str) -> bool {
        self.state = InteractionState::Idle;
        let recorded = self.history.record(&self.scene, &self.selection, label);
        if recorded {
            tracing::debug!(
                "Recorded '{}' ({} of {})",
                label,
                self.history.cursor() + 1,
                self.history.len()
            );
        }
        recorded
    }

    /// Put the scene and selection back to the entry at the history cursor.
    fn restore_current(&mut self) {
        let entry = self.history.current();
        self.scene = entry.snapshot.scene.clone();
        self.selection = entry.snapshot.selection.clone();
    }

    fn abort_transaction(&mut self, reason: &str) -> bool {
        if !self.state.in_transaction() {
            return false;
        }
        tracing::debug!("Cancelling {} ({})", self.state.name(), reason);
        self.restore_current();
        self.state = InteractionState::Idle;
        self.active_contact = None;
        true
    }
}
