//! Transaction state of the controller.

use crate::element::ElementId;
use crate::input::ContactId;
use crate::model::Point;
use crate::selection::Selection;
use crate::selection_resolver::PressOutcome;

/// What a drag is doing with the pointer.
#[derive(Debug, Clone, PartialEq)]
pub enum Drag {
    /// Translating the selection. `last` is the previous world position.
    Move { last: Point, duplicated: bool },
    /// Rubber-band selection from `origin` to `current`, on top of `base`
    /// when additive.
    Marquee {
        origin: Point,
        current: Point,
        base: Selection,
        additive: bool,
    },
}

/// One pointer transaction, from press to release.
///
/// `origin_screen` decides the drag threshold; the other points are world
/// coordinates.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    PointerDownOnEmpty {
        contact: ContactId,
        origin_screen: Point,
        origin: Point,
        base: Selection,
        press: PressOutcome,
    },
    PointerDownOnTarget {
        contact: ContactId,
        origin_screen: Point,
        origin: Point,
        press: PressOutcome,
    },
    Dragging {
        contact: ContactId,
        drag: Drag,
    },
    Creating {
        contact: ContactId,
        origin: Point,
        element_id: ElementId,
    },
    /// Two or more contacts are down. Single-pointer handling is suspended.
    GestureActive,
}

impl InteractionState {
    pub fn name(&self) -> &'static str {
        match self {
            InteractionState::Idle => "idle",
            InteractionState::PointerDownOnEmpty { .. } => "pointer-down-on-empty",
            InteractionState::PointerDownOnTarget { .. } => "pointer-down-on-target",
            InteractionState::Dragging { .. } => "dragging",
            InteractionState::Creating { .. } => "creating",
            InteractionState::GestureActive => "gesture",
        }
    }

    /// Whether a single-pointer transaction is in flight.
    pub fn in_transaction(&self) -> bool {
        !matches!(self, InteractionState::Idle | InteractionState::GestureActive)
    }

    /// The rubber-band rectangle corners while a marquee is being dragged.
    pub fn marquee(&self) -> Option<(Point, Point)> {
        match self {
            InteractionState::Dragging {
                drag: Drag::Marquee { origin, current, .. },
                ..
            } => Some((*origin, *current)),
            _ => None,
        }
    }
}
