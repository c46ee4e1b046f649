//! Host input vocabulary: modifiers, keys, contacts and tools.

use serde::{Deserialize, Serialize};

use crate::model::ShapeType;

/// Identifies one pointer or touch contact for the lifetime of a press.
pub type ContactId = u64;

/// Contact id hosts use for a mouse.
pub const MOUSE: ContactId = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Modifiers {
    pub shift: bool,
    /// Ctrl on Linux/Windows, Cmd on macOS
    pub ctrl_or_cmd: bool,
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        ctrl_or_cmd: false,
        alt: false,
    };

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Self::NONE
        }
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl_or_cmd: true,
            ..Self::NONE
        }
    }

    pub fn alt() -> Self {
        Self {
            alt: true,
            ..Self::NONE
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum KeyCode {
    Escape,
    Delete,
    Backspace,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
}

impl KeyCode {
    /// Unit direction for arrow keys.
    pub fn arrow_direction(&self) -> Option<(f64, f64)> {
        match self {
            KeyCode::ArrowUp => Some((0.0, -1.0)),
            KeyCode::ArrowDown => Some((0.0, 1.0)),
            KeyCode::ArrowLeft => Some((-1.0, 0.0)),
            KeyCode::ArrowRight => Some((1.0, 0.0)),
            _ => None,
        }
    }
}

/// Active tool. Creation tools turn a press-drag into a new element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    #[default]
    Select,
    Rectangle,
    Ellipse,
    Diamond,
    Line,
    Text,
}

impl Tool {
    pub fn shape_type(&self) -> Option<ShapeType> {
        match self {
            Tool::Select => None,
            Tool::Rectangle => Some(ShapeType::Rectangle),
            Tool::Ellipse => Some(ShapeType::Ellipse),
            Tool::Diamond => Some(ShapeType::Diamond),
            Tool::Line => Some(ShapeType::Line),
            Tool::Text => Some(ShapeType::Text),
        }
    }
}
