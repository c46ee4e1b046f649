//! The ordered element list.
//!
//! Index 0 is the bottom of the z-order. Deleted elements stay in the list
//! as tombstones so ids stay stable across undo. Elements are shared between
//! the live scene and history snapshots and copied on first write.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::element::{Element, ElementId};
use crate::geometry::{hits_bounding_box, hits_element_shape, Bounds};
use crate::model::Point;

/// How [`Scene::topmost_at`] decides a hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitMode {
    /// Outline and filled interior only.
    ShapeOnly,
    /// Shape first, then the bounding box of any element.
    BoundingBoxFallback,
}

#[derive(Debug, Clone, Default)]
pub struct Scene {
    elements: Vec<Arc<Element>>,
    index: HashMap<ElementId, usize>,
}

impl PartialEq for Scene {
    /// Value equality in z-order. Elements that are still shared with another
    /// scene compare by pointer first.
    fn eq(&self, other: &Self) -> bool {
        self.elements.len() == other.elements.len()
            && self
                .elements
                .iter()
                .zip(&other.elements)
                .all(|(a, b)| Arc::ptr_eq(a, b) || a == b)
    }
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_elements<I: IntoIterator<Item = Element>>(elements: I) -> Self {
        let mut scene = Self::new();
        for element in elements {
            scene.append(element);
        }
        scene
    }

    /// Total number of entries, tombstones included.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn live_count(&self) -> usize {
        self.live().count()
    }

    /// Append on top. Returns `None` and leaves the scene alone when the id is
    /// already taken.
    pub fn append(&mut self, element: Element) -> Option<usize> {
        let at = self.elements.len();
        self.insert_at(at, element)
    }

    /// Insert at `index` (clamped), shifting everything above it up.
    pub fn insert_at(&mut self, index: usize, element: Element) -> Option<usize> {
        if self.index.contains_key(&element.id) {
            tracing::warn!("Refusing to insert duplicate element id {}", element.id);
            return None;
        }
        let index = index.min(self.elements.len());
        self.elements.insert(index, Arc::new(element));
        self.reindex();
        Some(index)
    }

    /// Mark the element at `index` deleted. Returns its id if it was live.
    pub fn remove_at(&mut self, index: usize) -> Option<ElementId> {
        let slot = self.elements.get_mut(index)?;
        if slot.is_deleted {
            return None;
        }
        let element = Arc::make_mut(slot);
        element.is_deleted = true;
        Some(element.id)
    }

    pub fn remove(&mut self, id: ElementId) -> bool {
        match self.index.get(&id).copied() {
            Some(index) => self.remove_at(index).is_some(),
            None => false,
        }
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.index.get(&id).map(|&i| self.elements[i].as_ref())
    }

    /// Like [`Scene::get`] but skips tombstones.
    pub fn get_live(&self, id: ElementId) -> Option<&Element> {
        self.get(id).filter(|e| !e.is_deleted)
    }

    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        let index = *self.index.get(&id)?;
        Some(Arc::make_mut(&mut self.elements[index]))
    }

    pub fn index_of(&self, id: ElementId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn at(&self, index: usize) -> Option<&Element> {
        self.elements.get(index).map(|e| e.as_ref())
    }

    /// Every entry bottom to top, tombstones included.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Element> + '_ {
        self.elements.iter().map(|e| e.as_ref())
    }

    /// Non-deleted elements bottom to top.
    pub fn live(&self) -> impl DoubleEndedIterator<Item = &Element> + '_ {
        self.iter().filter(|e| !e.is_deleted)
    }

    pub fn ids(&self) -> Vec<ElementId> {
        self.iter().map(|e| e.id).collect()
    }

    /// Translate the given elements in place.
    pub fn translate(&mut self, ids: &[ElementId], dx: f64, dy: f64) {
        for &id in ids {
            if let Some(element) = self.get_mut(id) {
                element.translate(dx, dy);
            }
        }
    }

    /// Move `ids` (kept in their current relative order) so the block starts
    /// at `target` in the resulting order. Unknown ids are ignored. Returns
    /// whether the order changed.
    pub fn move_to_index(&mut self, ids: &[ElementId], target: usize) -> bool {
        let wanted: HashSet<ElementId> = ids.iter().copied().filter(|id| self.contains(*id)).collect();
        if wanted.is_empty() {
            return false;
        }

        let (block, mut rest): (Vec<_>, Vec<_>) = self
            .elements
            .iter()
            .cloned()
            .partition(|e| wanted.contains(&e.id));
        let target = target.min(rest.len());
        let tail = rest.split_off(target);
        rest.extend(block);
        rest.extend(tail);

        let changed = rest
            .iter()
            .zip(&self.elements)
            .any(|(a, b)| a.id != b.id);
        if changed {
            self.elements = rest;
            self.reindex();
        }
        changed
    }

    /// Topmost live element under `point` accepted by `accept`.
    ///
    /// In [`HitMode::BoundingBoxFallback`] a bounding-box hit is only used when no
    /// element is hit by its shape.
    pub fn topmost_at<F>(&self, point: Point, tolerance: f64, mode: HitMode, mut accept: F) -> Option<ElementId>
    where
        F: FnMut(&Element) -> bool,
    {
        let shape_hit = self
            .live()
            .rev()
            .find(|e| accept(e) && hits_element_shape(point, e, tolerance))
            .map(|e| e.id);
        match (shape_hit, mode) {
            (Some(id), _) => Some(id),
            (None, HitMode::ShapeOnly) => None,
            (None, HitMode::BoundingBoxFallback) => self
                .live()
                .rev()
                .find(|e| accept(e) && hits_bounding_box(point, e, tolerance))
                .map(|e| e.id),
        }
    }

    /// Union of the bounds of the given live elements.
    pub fn union_bounds<'a, I>(&self, ids: I) -> Option<Bounds>
    where
        I: IntoIterator<Item = &'a ElementId>,
    {
        let boxes: Vec<Bounds> = ids
            .into_iter()
            .filter_map(|id| self.get_live(*id))
            .map(Element::bounds)
            .collect();
        Bounds::union_all(&boxes)
    }

    /// Sort ids by z-order, dropping ids that are not in the scene.
    pub fn in_z_order<'a, I>(&self, ids: I) -> Vec<ElementId>
    where
        I: IntoIterator<Item = &'a ElementId>,
    {
        let mut indexed: Vec<(usize, ElementId)> = ids
            .into_iter()
            .filter_map(|id| self.index_of(*id).map(|i| (i, *id)))
            .collect();
        indexed.sort_unstable();
        indexed.into_iter().map(|(_, id)| id).collect()
    }

    fn reindex(&mut self) {
        self.index = self
            .elements
            .iter()
            .enumerate()
            .map(|(i, e)| (e.id, i))
            .collect();
    }
}
