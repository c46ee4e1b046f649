//! Selection state.
//!
//! A selection lists element ids and, separately, the group ids that are
//! selected as a whole. While a group is being edited, clicks resolve one
//! level below it.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::element::{ElementId, GroupId};
use crate::geometry::Bounds;
use crate::group_index::GroupIndex;
use crate::scene::Scene;

/// What a click selects: a bare element or a whole group.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SelectionUnit {
    Element(ElementId),
    Group(GroupId),
}

impl SelectionUnit {
    /// Resolve the unit an element belongs to at the current editing level.
    ///
    /// Without an editing group this is the outermost group. Inside an editing
    /// group that the element belongs to, it is the group one level deeper, or
    /// the element itself when there is none.
    pub fn for_element(id: ElementId, chain: &[GroupId], editing: Option<&GroupId>) -> Self {
        let level = editing
            .and_then(|g| chain.iter().position(|c| c == g))
            .map_or(0, |pos| pos + 1);
        match chain.get(level) {
            Some(group_id) => SelectionUnit::Group(group_id.clone()),
            None => SelectionUnit::Element(id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    pub element_ids: BTreeSet<ElementId>,
    pub group_ids: BTreeSet<GroupId>,
    pub editing_group_id: Option<GroupId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.element_ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.element_ids.len()
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.element_ids.contains(&id)
    }

    /// Drop every selected element and group. The editing group is kept.
    pub fn clear(&mut self) {
        self.element_ids.clear();
        self.group_ids.clear();
    }

    /// Whether the unit is selected, either directly or through an enclosing
    /// selected group.
    pub fn is_unit_selected(&self, unit: &SelectionUnit, groups: &GroupIndex) -> bool {
        match unit {
            SelectionUnit::Element(id) => self.element_ids.contains(id),
            SelectionUnit::Group(group_id) => {
                if self.group_ids.contains(group_id) {
                    return true;
                }
                let mut cursor = groups.parent(group_id);
                while let Some(parent) = cursor {
                    if self.group_ids.contains(parent) {
                        return true;
                    }
                    cursor = groups.parent(parent);
                }
                false
            }
        }
    }

    pub fn add_unit(&mut self, unit: &SelectionUnit, groups: &GroupIndex) {
        match unit {
            SelectionUnit::Element(id) => {
                self.element_ids.insert(*id);
            }
            SelectionUnit::Group(group_id) => {
                self.group_ids.insert(group_id.clone());
                self.element_ids.extend(groups.members(group_id).iter().copied());
            }
        }
    }

    /// Remove a unit. Any selected group that loses a member is demoted so the
    /// remaining members stay individually selected.
    pub fn remove_unit(&mut self, unit: &SelectionUnit, groups: &GroupIndex) {
        match unit {
            SelectionUnit::Element(id) => {
                self.element_ids.remove(id);
            }
            SelectionUnit::Group(group_id) => {
                self.group_ids.remove(group_id);
                for id in groups.members(group_id) {
                    self.element_ids.remove(id);
                }
            }
        }
        self.prune_groups(groups);
    }

    /// Replace the selection with a single unit, keeping the editing group.
    pub fn select_only(&mut self, unit: &SelectionUnit, groups: &GroupIndex) {
        self.clear();
        self.add_unit(unit, groups);
    }

    /// Keep a group id only while every live member is selected.
    pub fn prune_groups(&mut self, groups: &GroupIndex) {
        let element_ids = &self.element_ids;
        self.group_ids.retain(|g| {
            let members = groups.members(g);
            !members.is_empty() && members.iter().all(|id| element_ids.contains(id))
        });
    }

    /// Drop references to deleted or missing elements and to groups that no
    /// longer have live members.
    pub fn retain_live(&mut self, scene: &Scene, groups: &GroupIndex) {
        self.element_ids.retain(|id| scene.get_live(*id).is_some());
        self.prune_groups(groups);
        if let Some(editing) = &self.editing_group_id {
            if !groups.contains(editing) {
                self.editing_group_id = None;
            }
        }
    }

    /// Selected live ids in z-order.
    pub fn ordered_ids(&self, scene: &Scene) -> Vec<ElementId> {
        scene
            .in_z_order(&self.element_ids)
            .into_iter()
            .filter(|id| scene.get_live(*id).is_some())
            .collect()
    }

    pub fn bounds(&self, scene: &Scene) -> Option<Bounds> {
        scene.union_bounds(&self.element_ids)
    }
}
