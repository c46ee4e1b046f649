//! Stacking order commands.
//!
//! The selection moves as one block. Steps are measured in units at the
//! current editing level, so stepping past a group jumps over all of it and
//! groups stay contiguous. Inside an editing group nothing leaves its span.

use super::InteractionController;
use crate::element::{ElementId, GroupId};
use crate::group_index::GroupIndex;
use crate::selection::SelectionUnit;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Restack {
    Forward,
    Backward,
    Front,
    Back,
}

impl Restack {
    fn label(self) -> &'static str {
        match self {
            Restack::Forward => "Bring forward",
            Restack::Backward => "Send backward",
            Restack::Front => "Bring to front",
            Restack::Back => "Send to back",
        }
    }
}

impl InteractionController {
    pub fn bring_forward(&mut self) -> bool {
        self.restack(Restack::Forward)
    }

    pub fn send_backward(&mut self) -> bool {
        self.restack(Restack::Backward)
    }

    pub fn bring_to_front(&mut self) -> bool {
        self.restack(Restack::Front)
    }

    pub fn send_to_back(&mut self) -> bool {
        self.restack(Restack::Back)
    }

    fn restack(&mut self, op: Restack) -> bool {
        self.abort_transaction(op.label());
        let ids = self.selection.ordered_ids(&self.scene);
        let (Some(&lowest), Some(&highest)) = (ids.first(), ids.last()) else {
            return false;
        };
        let (Some(bottom), Some(top)) = (self.scene.index_of(lowest), self.scene.index_of(highest)) else {
            return false;
        };

        let groups = GroupIndex::build(&self.scene);
        let editing = self.selection.editing_group_id.clone();
        let (scope_start, scope_end) = match editing.as_ref().and_then(|g| groups.span(g)) {
            Some(span) => span,
            None => (0, self.scene.len().saturating_sub(1)),
        };
        let k = ids.len();

        // Targets index the scene with the block taken out.
        let target = match op {
            Restack::Front => Some((scope_end + 1).saturating_sub(k)),
            Restack::Back => Some(scope_start),
            Restack::Forward => self
                .neighbour_unit(&groups, &ids, top + 1..=scope_end, editing.as_ref())
                .map(|(_, last)| last + 1 - k),
            Restack::Backward => self
                .neighbour_unit(&groups, &ids, (scope_start..bottom).rev(), editing.as_ref())
                .map(|(first, _)| first),
        };
        let Some(target) = target else {
            tracing::debug!("{}: already at the edge", op.label());
            return false;
        };

        if !self.scene.move_to_index(&ids, target) {
            return false;
        }
        tracing::debug!("{} {} elements", op.label(), k);
        self.commit(op.label())
    }

    /// Scene span of the first unselected unit met walking `indices`.
    fn neighbour_unit<I>(
        &self,
        groups: &GroupIndex,
        selected: &[ElementId],
        indices: I,
        editing: Option<&GroupId>,
    ) -> Option<(usize, usize)>
    where
        I: Iterator<Item = usize>,
    {
        for index in indices {
            let Some(element) = self.scene.at(index).filter(|e| !e.is_deleted) else {
                continue;
            };
            if selected.contains(&element.id) {
                continue;
            }
            return match SelectionUnit::for_element(element.id, groups.chain(element.id), editing) {
                SelectionUnit::Group(group_id) => groups.span(&group_id),
                SelectionUnit::Element(_) => Some((index, index)),
            };
        }
        None
    }
}
