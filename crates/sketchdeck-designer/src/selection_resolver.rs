//! Turns clicks, double-clicks and marquees into selections.
//!
//! The resolver is pure: it reads the scene and the current selection and
//! returns the next selection. The controller decides when to commit it.

use crate::element::ElementId;
use crate::geometry::Bounds;
use crate::group_index::GroupIndex;
use crate::input::Modifiers;
use crate::model::Point;
use crate::scene::{HitMode, Scene};
use crate::selection::{Selection, SelectionUnit};

/// What a press landed on.
#[derive(Debug, Clone, PartialEq)]
pub enum PressTarget {
    /// An element's shape, resolved to the unit a click selects.
    Element { id: ElementId, unit: SelectionUnit },
    /// Empty space inside the current selection's bounding box.
    SelectionBox,
    Empty,
}

/// Result of resolving a pointer-down.
#[derive(Debug, Clone, PartialEq)]
pub struct PressOutcome {
    pub target: PressTarget,
    pub selection: Selection,
    /// Whether the press changed the selection it started from.
    pub changed: bool,
    /// Shift-press on an already selected bare element. Deselection waits for
    /// the release so the press can still start a drag.
    pub deferred_deselect: Option<ElementId>,
    /// Element count of the selection before the press.
    pub prior_count: usize,
}

pub struct SelectionResolver<'a> {
    scene: &'a Scene,
    groups: &'a GroupIndex,
    tolerance: f64,
}

impl<'a> SelectionResolver<'a> {
    pub fn new(scene: &'a Scene, groups: &'a GroupIndex, tolerance: f64) -> Self {
        Self {
            scene,
            groups,
            tolerance,
        }
    }

    fn hit(&self, point: Point) -> Option<ElementId> {
        self.scene
            .topmost_at(point, self.tolerance, HitMode::ShapeOnly, |_| true)
    }

    pub fn pointer_down(&self, current: &Selection, point: Point, modifiers: Modifiers) -> PressOutcome {
        let mut next = current.clone();
        let mut deferred_deselect = None;

        let target = match self.hit(point) {
            None => {
                // a selected element's own box, then the union box
                let in_box = !current.is_empty()
                    && (self
                        .scene
                        .topmost_at(point, self.tolerance, HitMode::BoundingBoxFallback, |e| {
                            current.contains(e.id)
                        })
                        .is_some()
                        || current
                            .bounds(self.scene)
                            .is_some_and(|b| b.contains_point(point, self.tolerance)));
                if in_box {
                    PressTarget::SelectionBox
                } else {
                    if !modifiers.shift && !modifiers.ctrl_or_cmd {
                        // tentative; finalized on release unless a marquee starts
                        next.clear();
                    }
                    PressTarget::Empty
                }
            }
            Some(id) => {
                let chain = self.groups.chain(id);
                if let Some(editing) = &next.editing_group_id {
                    if !chain.contains(editing) {
                        tracing::debug!("Press outside editing group {}, leaving it", editing);
                        next.editing_group_id = None;
                    }
                }
                let unit = SelectionUnit::for_element(id, chain, next.editing_group_id.as_ref());
                let unit_selected = next.is_unit_selected(&unit, self.groups);

                if modifiers.ctrl_or_cmd {
                    // deep select: the element itself regardless of groups
                    next.clear();
                    next.element_ids.insert(id);
                } else if modifiers.shift {
                    if unit_selected {
                        match unit {
                            SelectionUnit::Element(eid) if chain.is_empty() => {
                                deferred_deselect = Some(eid);
                            }
                            _ => next.remove_unit(&unit, self.groups),
                        }
                    } else {
                        next.add_unit(&unit, self.groups);
                    }
                } else if !unit_selected && !next.contains(id) {
                    next.select_only(&unit, self.groups);
                }

                PressTarget::Element { id, unit }
            }
        };

        PressOutcome {
            changed: next != *current,
            target,
            selection: next,
            deferred_deselect,
            prior_count: current.len(),
        }
    }

    /// Selection after a release that did not turn into a drag.
    pub fn click_release(&self, current: &Selection, press: &PressOutcome, point: Point, modifiers: Modifiers) -> Selection {
        let mut next = current.clone();
        match &press.target {
            PressTarget::Empty => {
                if !modifiers.shift && !modifiers.ctrl_or_cmd {
                    next.clear();
                    if let Some(editing) = &next.editing_group_id {
                        let inside = self
                            .scene
                            .union_bounds(self.groups.members(editing))
                            .is_some_and(|b| b.contains_point(point, self.tolerance));
                        if !inside {
                            next.editing_group_id = None;
                        }
                    }
                }
            }
            PressTarget::SelectionBox => {
                if press.prior_count >= 2 && !modifiers.shift && !modifiers.ctrl_or_cmd {
                    next.clear();
                }
            }
            PressTarget::Element { .. } => {
                if let Some(id) = press.deferred_deselect {
                    next.remove_unit(&SelectionUnit::Element(id), self.groups);
                }
            }
        }
        next
    }

    /// Enter one group level below the current one at `point`.
    ///
    /// The new selection is every direct unit of the entered group. Returns
    /// the current selection when there is nothing to enter.
    pub fn double_click(&self, current: &Selection, point: Point) -> Selection {
        let Some(id) = self.hit(point) else {
            return current.clone();
        };
        let chain = self.groups.chain(id);
        let level = current
            .editing_group_id
            .as_ref()
            .and_then(|g| chain.iter().position(|c| c == g))
            .map_or(0, |pos| pos + 1);
        let Some(entered) = chain.get(level) else {
            return current.clone();
        };

        let mut next = Selection {
            editing_group_id: Some(entered.clone()),
            ..Selection::default()
        };
        for unit in self.units_where(&next, |_| true) {
            next.add_unit(&unit, self.groups);
        }
        next
    }

    /// Select every unit whose elements' boxes lie fully inside `rect`,
    /// restricted to the editing group when there is one.
    pub fn marquee(&self, base: &Selection, rect: Bounds, additive: bool) -> Selection {
        let mut next = if additive {
            base.clone()
        } else {
            Selection {
                editing_group_id: base.editing_group_id.clone(),
                ..Selection::default()
            }
        };
        for unit in self.units_where(base, |b| rect.contains_bounds(b)) {
            next.add_unit(&unit, self.groups);
        }
        next
    }

    /// Every unit at the current editing level.
    pub fn select_all(&self, current: &Selection) -> Selection {
        let mut next = Selection {
            editing_group_id: current.editing_group_id.clone(),
            ..Selection::default()
        };
        for unit in self.units_where(current, |_| true) {
            next.add_unit(&unit, self.groups);
        }
        next
    }

    fn units_where<F>(&self, scope: &Selection, mut keep: F) -> Vec<SelectionUnit>
    where
        F: FnMut(&Bounds) -> bool,
    {
        let editing = scope.editing_group_id.as_ref();
        let mut units: Vec<SelectionUnit> = Vec::new();
        for element in self.scene.live() {
            let chain = self.groups.chain(element.id);
            if editing.is_some_and(|g| !chain.contains(g)) {
                continue;
            }
            if !keep(&element.bounds()) {
                continue;
            }
            let unit = SelectionUnit::for_element(element.id, chain, editing);
            if !units.contains(&unit) {
                units.push(unit);
            }
        }
        units
    }
}
