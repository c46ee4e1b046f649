//! Scripted input replay.
//!
//! A script is a JSON document with an optional starting scene and a list of
//! input events. Replaying feeds the events to an [`InteractionController`]
//! in order and reports the resulting document state.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use sketchdeck_designer::element::{Element, GroupId};
use sketchdeck_designer::{
    ContactId, InteractionController, InteractionSettings, KeyCode, MemoryClipboard, MemoryLibrary, Modifiers,
    Point, Scene, Selection, Tool, MOUSE,
};

fn mouse() -> ContactId {
    MOUSE
}

/// Editor commands a script can invoke directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "camelCase")]
pub enum ScriptCommand {
    Undo,
    Redo,
    SelectAll,
    ClearSelection,
    Select { ids: Vec<u64> },
    Group,
    Ungroup,
    Delete,
    Nudge { dx: f64, dy: f64 },
    BringForward,
    SendBackward,
    BringToFront,
    SendToBack,
    ApplyStyle { patch: Value },
    CopyStyles,
    PasteStyles,
    AddToLibrary,
    Cancel,
}

/// One recorded input event. Coordinates are screen pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ScriptEvent {
    PointerDown {
        x: f64,
        y: f64,
        #[serde(default)]
        modifiers: Modifiers,
        #[serde(default = "mouse")]
        contact: ContactId,
    },
    PointerMove {
        x: f64,
        y: f64,
        #[serde(default)]
        modifiers: Modifiers,
        #[serde(default = "mouse")]
        contact: ContactId,
    },
    PointerUp {
        x: f64,
        y: f64,
        #[serde(default)]
        modifiers: Modifiers,
        #[serde(default = "mouse")]
        contact: ContactId,
    },
    PointerCancel {
        #[serde(default = "mouse")]
        contact: ContactId,
    },
    DoubleClick {
        x: f64,
        y: f64,
        #[serde(default)]
        modifiers: Modifiers,
    },
    Key {
        key: KeyCode,
        #[serde(default)]
        modifiers: Modifiers,
    },
    Tool {
        tool: Tool,
    },
    Command(ScriptCommand),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub scene: Vec<Element>,
    pub events: Vec<ScriptEvent>,
}

/// A command the controller refused, with the event position it came from.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectedCommand {
    pub event: usize,
    pub reason: String,
}

/// Final state after a replay.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplayReport {
    pub elements: Vec<Element>,
    pub selection: Selection,
    pub history: Vec<String>,
    pub history_cursor: usize,
    pub zoom: f64,
    pub pan: (f64, f64),
    pub library_items: usize,
    pub rejected: Vec<RejectedCommand>,
}

impl ReplayReport {
    /// Distinct group ids among live elements.
    pub fn group_ids(&self) -> Vec<GroupId> {
        let mut ids: Vec<GroupId> = self
            .elements
            .iter()
            .filter(|e| !e.is_deleted)
            .flat_map(|e| e.group_ids.iter().cloned())
            .collect();
        ids.sort();
        ids.dedup();
        ids
    }
}

pub fn load_script(path: &Path) -> anyhow::Result<Script> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read script {}", path.display()))?;
    let script: Script = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse script {}", path.display()))?;
    tracing::info!("Loaded {} events from {}", script.events.len(), path.display());
    Ok(script)
}

/// Run every event of `script` against a fresh controller.
pub fn replay(script: &Script, settings: InteractionSettings) -> ReplayReport {
    let mut controller =
        InteractionController::with_scene(Scene::from_elements(script.scene.iter().cloned()), settings);
    let mut clipboard = MemoryClipboard::default();
    let mut library = MemoryLibrary::default();
    let mut rejected = Vec::new();

    for (index, event) in script.events.iter().enumerate() {
        tracing::debug!(index, ?event, "Replaying");
        let outcome = apply(&mut controller, event, &mut clipboard, &mut library);
        if let Err(err) = outcome {
            tracing::warn!("Event {} rejected: {}", index, err);
            rejected.push(RejectedCommand {
                event: index,
                reason: err.to_string(),
            });
        }
    }

    let viewport = controller.viewport();
    ReplayReport {
        elements: controller.scene().iter().cloned().collect(),
        selection: controller.selection().clone(),
        history: controller.history().labels().into_iter().map(str::to_string).collect(),
        history_cursor: controller.history().cursor(),
        zoom: viewport.zoom(),
        pan: (viewport.pan_x(), viewport.pan_y()),
        library_items: library.items.len(),
        rejected,
    }
}

fn apply(
    controller: &mut InteractionController,
    event: &ScriptEvent,
    clipboard: &mut MemoryClipboard,
    library: &mut MemoryLibrary,
) -> sketchdeck_core::Result<()> {
    match event {
        ScriptEvent::PointerDown { x, y, modifiers, contact } => {
            controller.dispatch_pointer_down(Point::new(*x, *y), *modifiers, *contact)
        }
        ScriptEvent::PointerMove { x, y, modifiers, contact } => {
            controller.dispatch_pointer_move(Point::new(*x, *y), *modifiers, *contact)
        }
        ScriptEvent::PointerUp { x, y, modifiers, contact } => {
            controller.dispatch_pointer_up(Point::new(*x, *y), *modifiers, *contact)
        }
        ScriptEvent::PointerCancel { contact } => controller.dispatch_pointer_cancel(*contact),
        ScriptEvent::DoubleClick { x, y, modifiers } => {
            controller.dispatch_double_click(Point::new(*x, *y), *modifiers)
        }
        ScriptEvent::Key { key, modifiers } => controller.dispatch_key(*key, *modifiers),
        ScriptEvent::Tool { tool } => controller.set_tool(*tool),
        ScriptEvent::Command(command) => run_command(controller, command, clipboard, library)?,
    }
    Ok(())
}

fn run_command(
    controller: &mut InteractionController,
    command: &ScriptCommand,
    clipboard: &mut MemoryClipboard,
    library: &mut MemoryLibrary,
) -> sketchdeck_core::Result<()> {
    match command {
        ScriptCommand::Undo => {
            controller.undo();
        }
        ScriptCommand::Redo => {
            controller.redo();
        }
        ScriptCommand::SelectAll => {
            controller.select_all();
        }
        ScriptCommand::ClearSelection => {
            controller.clear_selection();
        }
        ScriptCommand::Select { ids } => {
            controller.select_elements(ids)?;
        }
        ScriptCommand::Group => {
            let group_id = controller.group_selection()?;
            tracing::info!("Script grouped selection as {}", group_id);
        }
        ScriptCommand::Ungroup => {
            controller.ungroup_selection()?;
        }
        ScriptCommand::Delete => {
            controller.delete_selection()?;
        }
        ScriptCommand::Nudge { dx, dy } => {
            controller.nudge_selection(*dx, *dy)?;
        }
        ScriptCommand::BringForward => {
            controller.bring_forward();
        }
        ScriptCommand::SendBackward => {
            controller.send_backward();
        }
        ScriptCommand::BringToFront => {
            controller.bring_to_front();
        }
        ScriptCommand::SendToBack => {
            controller.send_to_back();
        }
        ScriptCommand::ApplyStyle { patch } => {
            controller.apply_style_patch(patch)?;
        }
        ScriptCommand::CopyStyles => controller.copy_styles(clipboard)?,
        ScriptCommand::PasteStyles => {
            controller.paste_styles(clipboard)?;
        }
        ScriptCommand::AddToLibrary => {
            controller.add_selection_to_library(library)?;
        }
        ScriptCommand::Cancel => {
            controller.cancel();
        }
    }
    Ok(())
}
