//! Commands on the selection. Each completed command is one history entry.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::InteractionController;
use crate::collaborators::{LibrarySink, StyleClipboard};
use crate::element::{Element, ElementId, GroupId, Style};
use crate::group_index::GroupIndex;
use crate::model::Shape;
use crate::selection::{Selection, SelectionUnit};
use crate::selection_resolver::SelectionResolver;
use sketchdeck_core::DesignerError;

const STYLE_PAYLOAD_TYPE: &str = "sketchdeck/styles";

/// Clipboard format for copied styles.
#[derive(Debug, Serialize, Deserialize)]
struct StylePayload {
    #[serde(rename = "type")]
    kind: String,
    style: Style,
}

impl InteractionController {
    /// Add an element on top of the scene without touching the selection.
    pub fn add_element(&mut self, shape: Shape, style: Style) -> ElementId {
        self.abort_transaction("add element");
        let id = self.allocate_id();
        self.scene.append(Element::new(id, shape, style));
        self.commit("Add element");
        id
    }

    /// Replace the selection with the given elements.
    pub fn select_elements(&mut self, ids: &[ElementId]) -> Result<bool, DesignerError> {
        self.abort_transaction("select");
        if let Some(&missing) = ids.iter().find(|id| self.scene.get_live(**id).is_none()) {
            return Err(DesignerError::InvalidReference { id: missing });
        }
        let groups = GroupIndex::build(&self.scene);
        let mut next = Selection {
            element_ids: ids.iter().copied().collect(),
            ..Selection::default()
        };
        if let Some(editing) = &self.selection.editing_group_id {
            if ids.iter().all(|id| groups.chain(*id).contains(editing)) {
                next.editing_group_id = Some(editing.clone());
            }
        }
        self.selection = next;
        Ok(self.commit("Select"))
    }

    pub fn select_all(&mut self) -> bool {
        self.abort_transaction("select all");
        let groups = GroupIndex::build(&self.scene);
        self.selection = SelectionResolver::new(&self.scene, &groups, self.world_tolerance())
            .select_all(&self.selection);
        self.commit("Select all")
    }

    pub fn clear_selection(&mut self) -> bool {
        self.abort_transaction("clear selection");
        self.selection.clear();
        self.commit("Deselect")
    }

    /// Group the selected elements under a fresh id appended to each chain.
    ///
    /// Members are gathered into one run ending where the topmost member was,
    /// and the new group becomes the selection.
    pub fn group_selection(&mut self) -> Result<GroupId, DesignerError> {
        self.abort_transaction("group");
        let ids = self.selection.ordered_ids(&self.scene);
        if ids.len() < 2 {
            return Err(DesignerError::SelectionTooSmall {
                required: 2,
                found: ids.len(),
            });
        }
        let top = ids
            .last()
            .and_then(|id| self.scene.index_of(*id))
            .ok_or(DesignerError::EmptySelection)?;

        let group_id = GroupId::generate();
        for id in &ids {
            if let Some(element) = self.scene.get_mut(*id) {
                element.group_ids.push(group_id.clone());
            }
        }
        self.scene.move_to_index(&ids, top + 1 - ids.len());

        let groups = GroupIndex::build(&self.scene);
        self.selection
            .select_only(&SelectionUnit::Group(group_id.clone()), &groups);
        tracing::info!("Grouped {} elements as {}", ids.len(), group_id);
        self.commit("Group");
        Ok(group_id)
    }

    /// Remove the innermost group shared by every selected element, or
    /// failing that every selected group. Returns the dissolved ids.
    pub fn ungroup_selection(&mut self) -> Result<Vec<GroupId>, DesignerError> {
        self.abort_transaction("ungroup");
        let ids = self.selection.ordered_ids(&self.scene);
        let Some(first) = ids.first() else {
            return Err(DesignerError::EmptySelection);
        };
        let groups = GroupIndex::build(&self.scene);
        let shared = groups
            .chain(*first)
            .iter()
            .rev()
            .find(|g| ids.iter().all(|id| groups.chain(*id).contains(g)))
            .cloned();
        let targets: Vec<GroupId> = match shared {
            Some(group_id) => vec![group_id],
            None => self.selection.group_ids.iter().cloned().collect(),
        };
        if targets.is_empty() {
            return Err(DesignerError::NotGrouped);
        }

        for id in &ids {
            if let Some(element) = self.scene.get_mut(*id) {
                element.group_ids.retain(|g| !targets.contains(g));
            }
        }
        for group_id in &targets {
            self.selection.group_ids.remove(group_id);
        }
        if self
            .selection
            .editing_group_id
            .as_ref()
            .is_some_and(|g| targets.contains(g))
        {
            self.selection.editing_group_id = None;
        }
        let groups = GroupIndex::build(&self.scene);
        self.selection.prune_groups(&groups);

        tracing::info!("Ungrouped {:?}", targets);
        self.commit("Ungroup");
        Ok(targets)
    }

    /// Tombstone the selection. Returns how many elements were deleted.
    pub fn delete_selection(&mut self) -> Result<usize, DesignerError> {
        self.abort_transaction("delete");
        let ids = self.selection.ordered_ids(&self.scene);
        if ids.is_empty() {
            return Err(DesignerError::EmptySelection);
        }
        for id in &ids {
            self.scene.remove(*id);
        }
        let groups = GroupIndex::build(&self.scene);
        self.selection.clear();
        self.selection.retain_live(&self.scene, &groups);
        self.commit("Delete");
        Ok(ids.len())
    }

    /// Translate the selection by a world-space offset.
    pub fn nudge_selection(&mut self, dx: f64, dy: f64) -> Result<bool, DesignerError> {
        self.abort_transaction("nudge");
        if self.selection.ordered_ids(&self.scene).is_empty() {
            return Err(DesignerError::EmptySelection);
        }
        self.move_selection_by(dx, dy);
        Ok(self.commit("Move"))
    }

    /// Copy the selection with fresh ids directly above its topmost element
    /// and select the copies.
    ///
    /// A group whose every live member is copied gets a fresh id in the copy;
    /// a partially copied group keeps its id.
    pub(super) fn duplicate_selection(&mut self) -> bool {
        let ids = self.selection.ordered_ids(&self.scene);
        let Some(insert_at) = ids
            .last()
            .and_then(|id| self.scene.index_of(*id))
            .map(|index| index + 1)
        else {
            return false;
        };

        let groups = GroupIndex::build(&self.scene);
        let copied: std::collections::HashSet<ElementId> = ids.iter().copied().collect();
        let mut remap: HashMap<GroupId, GroupId> = HashMap::new();
        let mut copies = Vec::with_capacity(ids.len());

        for id in &ids {
            let Some(original) = self.scene.get_live(*id) else {
                continue;
            };
            let mut copy = original.clone();
            for group_id in copy.group_ids.iter_mut() {
                let whole = groups
                    .members(group_id)
                    .iter()
                    .all(|member| copied.contains(member));
                if whole {
                    *group_id = remap
                        .entry(group_id.clone())
                        .or_insert_with(GroupId::generate)
                        .clone();
                }
            }
            copies.push(copy);
        }

        let mut selection = Selection {
            editing_group_id: self.selection.editing_group_id.clone(),
            ..Selection::default()
        };
        for (offset, mut copy) in copies.into_iter().enumerate() {
            copy.id = self.allocate_id();
            selection.element_ids.insert(copy.id);
            self.scene.insert_at(insert_at + offset, copy);
        }
        selection.group_ids = self
            .selection
            .group_ids
            .iter()
            .filter_map(|g| remap.get(g).cloned())
            .collect();

        tracing::debug!(
            "Duplicated {} elements, {} groups renamed",
            selection.element_ids.len(),
            remap.len()
        );
        self.selection = selection;
        true
    }

    /// Merge a JSON object into the style of every selected element.
    ///
    /// The patch is validated against every element before any is changed;
    /// a rejected patch leaves the scene untouched.
    pub fn apply_style_patch(&mut self, patch: &Value) -> Result<bool, DesignerError> {
        self.abort_transaction("style patch");
        let Value::Object(fields) = patch else {
            return Err(DesignerError::InvalidStylePatch {
                reason: "patch must be a JSON object".to_string(),
            });
        };
        let ids = self.selection.ordered_ids(&self.scene);
        if ids.is_empty() {
            return Err(DesignerError::EmptySelection);
        }

        let mut patched = Vec::with_capacity(ids.len());
        for id in &ids {
            let element = self
                .scene
                .get_live(*id)
                .ok_or(DesignerError::InvalidReference { id: *id })?;
            let mut value = serde_json::to_value(&element.style)?;
            if let Value::Object(map) = &mut value {
                for (key, field) in fields {
                    map.insert(key.clone(), field.clone());
                }
            }
            let style: Style =
                serde_json::from_value(value).map_err(|err| DesignerError::InvalidStylePatch {
                    reason: err.to_string(),
                })?;
            style
                .validate()
                .map_err(|reason| DesignerError::InvalidStylePatch { reason })?;
            patched.push((*id, style));
        }

        self.set_styles(patched);
        Ok(self.commit("Change style"))
    }

    /// Put the style of the lowest selected element on the clipboard.
    pub fn copy_styles(&self, clipboard: &mut dyn StyleClipboard) -> Result<(), DesignerError> {
        let style = self
            .selection
            .ordered_ids(&self.scene)
            .first()
            .and_then(|id| self.scene.get_live(*id))
            .map(|e| e.style.clone())
            .ok_or(DesignerError::EmptySelection)?;
        let payload = StylePayload {
            kind: STYLE_PAYLOAD_TYPE.to_string(),
            style,
        };
        clipboard.write_text(serde_json::to_string(&payload)?);
        Ok(())
    }

    /// Apply copied styles to every selected element.
    pub fn paste_styles(&mut self, clipboard: &dyn StyleClipboard) -> Result<bool, DesignerError> {
        self.abort_transaction("paste styles");
        let ids = self.selection.ordered_ids(&self.scene);
        if ids.is_empty() {
            return Err(DesignerError::EmptySelection);
        }
        let text = clipboard.read_text().ok_or(DesignerError::EmptyClipboard)?;
        let payload: StylePayload = serde_json::from_str(&text)?;
        if payload.kind != STYLE_PAYLOAD_TYPE {
            return Err(DesignerError::EmptyClipboard);
        }
        payload
            .style
            .validate()
            .map_err(|reason| DesignerError::InvalidStylePatch { reason })?;

        let patched = ids
            .into_iter()
            .map(|id| (id, payload.style.clone()))
            .collect();
        self.set_styles(patched);
        Ok(self.commit("Paste styles"))
    }

    /// Hand copies of the selected elements to the library.
    pub fn add_selection_to_library(&self, sink: &mut dyn LibrarySink) -> Result<usize, DesignerError> {
        let copies: Vec<Element> = self
            .selection
            .ordered_ids(&self.scene)
            .into_iter()
            .filter_map(|id| self.scene.get_live(id).cloned())
            .collect();
        if copies.is_empty() {
            return Err(DesignerError::EmptySelection);
        }
        let count = copies.len();
        sink.add_to_library(copies);
        tracing::info!("Added {} elements to the library", count);
        Ok(count)
    }

    fn set_styles(&mut self, styles: Vec<(ElementId, Style)>) {
        for (id, style) in styles {
            // only touch elements that change so unchanged ones stay shared
            if self.scene.get(id).is_some_and(|e| e.style != style) {
                if let Some(element) = self.scene.get_mut(id) {
                    element.style = style;
                }
            }
        }
    }
}
