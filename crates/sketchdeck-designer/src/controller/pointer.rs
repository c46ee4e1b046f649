//! Pointer, keyboard and touch dispatch.

use super::{Drag, InteractionController, InteractionState};
use crate::element::{Element, ElementId};
use crate::geometry::Bounds;
use crate::gesture::ContactChange;
use crate::group_index::GroupIndex;
use crate::input::{ContactId, KeyCode, Modifiers, Tool};
use crate::model::{DesignerShape, Point, Shape, ShapeType};
use crate::selection::{Selection, SelectionUnit};
use crate::selection_resolver::{PressTarget, SelectionResolver};

impl InteractionController {
    /// Pointer or touch press at a screen position.
    pub fn dispatch_pointer_down(&mut self, point: Point, modifiers: Modifiers, contact: ContactId) {
        match self.gesture.contact_down(contact, point) {
            ContactChange::GestureStarted => {
                self.abort_transaction("gesture started");
                self.active_contact = None;
                self.state = InteractionState::GestureActive;
                return;
            }
            ContactChange::GestureContinues => return,
            _ => {}
        }
        self.begin_press(point, modifiers, contact);
    }

    fn begin_press(&mut self, point: Point, modifiers: Modifiers, contact: ContactId) {
        if self.state.in_transaction() {
            self.abort_transaction("press without release");
        }
        self.active_contact = Some(contact);
        let world = self.viewport.screen_to_world(point);

        if let Some(kind) = self.tool.shape_type() {
            self.begin_creation(world, kind, contact);
            return;
        }

        let groups = GroupIndex::build(&self.scene);
        let press = SelectionResolver::new(&self.scene, &groups, self.world_tolerance())
            .pointer_down(&self.selection, world, modifiers);
        tracing::debug!(hit = ?press.target, changed = press.changed, "Pointer down");

        let base = std::mem::replace(&mut self.selection, press.selection.clone());
        self.state = match press.target {
            PressTarget::Empty => InteractionState::PointerDownOnEmpty {
                contact,
                origin_screen: point,
                origin: world,
                base,
                press,
            },
            _ => InteractionState::PointerDownOnTarget {
                contact,
                origin_screen: point,
                origin: world,
                press,
            },
        };
    }

    pub fn dispatch_pointer_move(&mut self, point: Point, modifiers: Modifiers, contact: ContactId) {
        let frame = self.gesture.contact_move(contact, point, &mut self.viewport);
        if self.gesture.is_active() {
            if let Some(frame) = frame {
                tracing::trace!(?frame, "Gesture frame");
            }
            return;
        }
        if self.active_contact != Some(contact) {
            return;
        }

        let world = self.viewport.screen_to_world(point);
        let threshold = self.settings.drag_threshold_px;
        let state = std::mem::take(&mut self.state);
        self.state = match state {
            InteractionState::PointerDownOnTarget {
                contact,
                origin_screen,
                origin,
                press,
            } => {
                if origin_screen.distance_to(&point) < threshold {
                    InteractionState::PointerDownOnTarget {
                        contact,
                        origin_screen,
                        origin,
                        press,
                    }
                } else {
                    let duplicated = modifiers.alt
                        && self.settings.duplicate_on_alt_drag
                        && self.duplicate_selection();
                    tracing::debug!(duplicated, "Drag started");
                    self.move_selection_by(world.x - origin.x, world.y - origin.y);
                    InteractionState::Dragging {
                        contact,
                        drag: Drag::Move {
                            last: world,
                            duplicated,
                        },
                    }
                }
            }
            InteractionState::PointerDownOnEmpty {
                contact,
                origin_screen,
                origin,
                base,
                press,
            } => {
                if origin_screen.distance_to(&point) < threshold {
                    InteractionState::PointerDownOnEmpty {
                        contact,
                        origin_screen,
                        origin,
                        base,
                        press,
                    }
                } else {
                    let additive = modifiers.shift;
                    tracing::debug!(additive, "Marquee started");
                    self.update_marquee(&base, origin, world, additive);
                    InteractionState::Dragging {
                        contact,
                        drag: Drag::Marquee {
                            origin,
                            current: world,
                            base,
                            additive,
                        },
                    }
                }
            }
            InteractionState::Dragging {
                contact,
                drag: Drag::Move { last, duplicated },
            } => {
                self.move_selection_by(world.x - last.x, world.y - last.y);
                InteractionState::Dragging {
                    contact,
                    drag: Drag::Move {
                        last: world,
                        duplicated,
                    },
                }
            }
            InteractionState::Dragging {
                contact,
                drag:
                    Drag::Marquee {
                        origin,
                        base,
                        additive,
                        ..
                    },
            } => {
                self.update_marquee(&base, origin, world, additive);
                InteractionState::Dragging {
                    contact,
                    drag: Drag::Marquee {
                        origin,
                        current: world,
                        base,
                        additive,
                    },
                }
            }
            InteractionState::Creating {
                contact,
                origin,
                element_id,
            } => {
                if let Some(element) = self.scene.get_mut(element_id) {
                    element.shape.set_extent(origin, world);
                }
                InteractionState::Creating {
                    contact,
                    origin,
                    element_id,
                }
            }
            other => other,
        };
    }

    pub fn dispatch_pointer_up(&mut self, point: Point, modifiers: Modifiers, contact: ContactId) {
        match self.gesture.contact_up(contact) {
            ContactChange::GestureEnded { remaining } => {
                tracing::debug!(?remaining, "Gesture finished");
                self.end_gesture(remaining);
                return;
            }
            ContactChange::GestureContinues => return,
            _ => {}
        }
        if self.active_contact != Some(contact) {
            tracing::trace!("Ignoring release of inactive contact {}", contact);
            return;
        }
        self.active_contact = None;

        let world = self.viewport.screen_to_world(point);
        match std::mem::take(&mut self.state) {
            InteractionState::PointerDownOnEmpty { press, .. }
            | InteractionState::PointerDownOnTarget { press, .. } => {
                let groups = GroupIndex::build(&self.scene);
                self.selection = SelectionResolver::new(&self.scene, &groups, self.world_tolerance())
                    .click_release(&self.selection, &press, world, modifiers);
                self.commit("Select");
            }
            InteractionState::Dragging {
                drag: Drag::Move { duplicated, .. },
                ..
            } => {
                self.commit(if duplicated { "Duplicate" } else { "Move" });
            }
            InteractionState::Dragging {
                drag: Drag::Marquee { .. },
                ..
            } => {
                self.commit("Select");
            }
            InteractionState::Creating { element_id, .. } => self.finish_creation(element_id),
            InteractionState::Idle | InteractionState::GestureActive => {}
        }
    }

    /// The host lost a contact (palm rejection, window blur, ...).
    pub fn dispatch_pointer_cancel(&mut self, contact: ContactId) {
        match self.gesture.cancel_contact(contact) {
            ContactChange::GestureEnded { remaining } => self.end_gesture(remaining),
            ContactChange::GestureContinues => {}
            _ => {
                if self.active_contact == Some(contact) {
                    self.abort_transaction("pointer cancelled");
                    self.active_contact = None;
                }
            }
        }
    }

    /// A contact still down when a gesture ends starts over as a new press
    /// where it currently is.
    fn end_gesture(&mut self, remaining: Option<ContactId>) {
        self.state = InteractionState::Idle;
        self.active_contact = None;
        let Some(contact) = remaining else {
            return;
        };
        if let Some(position) = self.gesture.position(contact) {
            self.begin_press(position, Modifiers::NONE, contact);
        }
    }

    /// Enter one group level below the current one at `point`.
    pub fn dispatch_double_click(&mut self, point: Point, _modifiers: Modifiers) {
        if self.state.in_transaction() || self.tool != Tool::Select {
            return;
        }
        let world = self.viewport.screen_to_world(point);
        let groups = GroupIndex::build(&self.scene);
        let next = SelectionResolver::new(&self.scene, &groups, self.world_tolerance())
            .double_click(&self.selection, world);
        if next != self.selection {
            tracing::debug!("Editing group {:?}", next.editing_group_id);
            self.selection = next;
            self.commit("Enter group");
        }
    }

    pub fn dispatch_key(&mut self, key: KeyCode, modifiers: Modifiers) {
        match key {
            KeyCode::Escape => {
                if !self.abort_transaction("escape") {
                    self.leave_editing_group();
                }
            }
            KeyCode::Delete | KeyCode::Backspace => {
                if self.state.in_transaction() {
                    return;
                }
                if let Err(err) = self.delete_selection() {
                    tracing::debug!("Delete ignored: {}", err);
                }
            }
            KeyCode::ArrowUp | KeyCode::ArrowDown | KeyCode::ArrowLeft | KeyCode::ArrowRight => {
                if self.state.in_transaction() {
                    return;
                }
                let Some((dx, dy)) = key.arrow_direction() else {
                    return;
                };
                let step = if modifiers.shift {
                    self.settings.nudge_step_large
                } else {
                    self.settings.nudge_step
                };
                if let Err(err) = self.nudge_selection(dx * step, dy * step) {
                    tracing::debug!("Nudge ignored: {}", err);
                }
            }
        }
    }

    /// Step out of the editing group, selecting it as a whole. Without an
    /// editing group this clears the selection.
    fn leave_editing_group(&mut self) {
        let Some(editing) = self.selection.editing_group_id.clone() else {
            if !self.selection.is_empty() {
                self.selection.clear();
                self.commit("Deselect");
            }
            return;
        };
        let groups = GroupIndex::build(&self.scene);
        let mut next = Selection {
            editing_group_id: groups.parent(&editing).cloned(),
            ..Selection::default()
        };
        if groups.contains(&editing) {
            next.add_unit(&SelectionUnit::Group(editing), &groups);
        }
        self.selection = next;
        self.commit("Exit group");
    }

    fn begin_creation(&mut self, origin: Point, kind: ShapeType, contact: ContactId) {
        let id = self.allocate_id();
        let mut element = Element::new(id, Shape::at(kind, origin), self.style_source.default_style(kind));
        let mut index = self.scene.len();

        if let Some(editing) = &self.selection.editing_group_id {
            let groups = GroupIndex::build(&self.scene);
            if let Some(chain) = groups.chain_through(editing) {
                element.group_ids = chain;
            }
            if let Some((_, last)) = groups.span(editing) {
                index = last + 1;
            }
        }

        self.scene.insert_at(index, element);
        tracing::debug!("Creating {} {}", kind.name(), id);
        self.state = InteractionState::Creating {
            contact,
            origin,
            element_id: id,
        };
    }

    fn finish_creation(&mut self, element_id: ElementId) {
        let Some(kind) = self
            .scene
            .get_live(element_id)
            .filter(|e| !e.shape.is_degenerate())
            .map(Element::kind)
        else {
            tracing::debug!("Discarding empty creation {}", element_id);
            self.restore_current();
            self.state = InteractionState::Idle;
            return;
        };

        let groups = GroupIndex::build(&self.scene);
        self.selection
            .select_only(&SelectionUnit::Element(element_id), &groups);
        self.commit(&format!("Create {}", kind.name()));

        if !self.settings.keep_tool_after_create {
            self.tool = Tool::Select;
        }
    }

    pub(super) fn move_selection_by(&mut self, dx: f64, dy: f64) {
        if dx == 0.0 && dy == 0.0 {
            return;
        }
        let ids = self.selection.ordered_ids(&self.scene);
        self.scene.translate(&ids, dx, dy);
    }

    fn update_marquee(&mut self, base: &Selection, origin: Point, current: Point, additive: bool) {
        let rect = Bounds::from_corners(origin, current);
        let groups = GroupIndex::build(&self.scene);
        self.selection = SelectionResolver::new(&self.scene, &groups, self.world_tolerance())
            .marquee(base, rect, additive);
    }
}
