//! Group membership derived from element chains.
//!
//! Groups have no storage of their own: a group is the set of live elements
//! whose chain carries its id. The index is rebuilt from the scene whenever a
//! command needs it.
//!
//! Chains are expected to nest consistently. When two ids appear in opposite
//! orders on different elements (which only happens after an outside edit of
//! the scene) neither can be resolved as a unit, so both are dropped from the
//! effective chains and reported as dissolved.

use std::collections::{HashMap, HashSet};

use crate::element::{ElementId, GroupChain, GroupId};
use crate::scene::Scene;
use sketchdeck_core::DesignerError;

#[derive(Debug, Clone)]
struct GroupSpan {
    members: Vec<ElementId>,
    first: usize,
    last: usize,
    contiguous: bool,
}

#[derive(Debug, Clone, Default)]
pub struct GroupIndex {
    chains: HashMap<ElementId, GroupChain>,
    groups: HashMap<GroupId, GroupSpan>,
    dissolved: Vec<GroupId>,
}

impl GroupIndex {
    pub fn build(scene: &Scene) -> Self {
        let mut raw: Vec<(usize, ElementId, GroupChain)> = Vec::new();
        for (index, element) in scene.iter().enumerate() {
            if element.is_deleted {
                continue;
            }
            let mut seen = HashSet::new();
            let chain: GroupChain = element
                .group_ids
                .iter()
                .filter(|g| seen.insert((*g).clone()))
                .cloned()
                .collect();
            raw.push((index, element.id, chain));
        }

        let mut nesting: HashSet<(&GroupId, &GroupId)> = HashSet::new();
        for (_, _, chain) in &raw {
            for (i, outer) in chain.iter().enumerate() {
                for inner in &chain[i + 1..] {
                    nesting.insert((outer, inner));
                }
            }
        }
        let mut conflicting: HashSet<GroupId> = HashSet::new();
        for (outer, inner) in &nesting {
            if nesting.contains(&(*inner, *outer)) {
                conflicting.insert((*outer).clone());
                conflicting.insert((*inner).clone());
            }
        }
        let mut dissolved: Vec<GroupId> = conflicting.iter().cloned().collect();
        dissolved.sort();
        for group_id in &dissolved {
            tracing::warn!("Group {} has contradictory nesting, treating it as dissolved", group_id);
        }

        let mut chains = HashMap::with_capacity(raw.len());
        let mut groups: HashMap<GroupId, GroupSpan> = HashMap::new();
        for (index, id, chain) in raw {
            let chain: GroupChain = chain.into_iter().filter(|g| !conflicting.contains(g)).collect();
            for group_id in &chain {
                let span = groups.entry(group_id.clone()).or_insert_with(|| GroupSpan {
                    members: Vec::new(),
                    first: index,
                    last: index,
                    contiguous: true,
                });
                span.members.push(id);
                span.last = index;
            }
            chains.insert(id, chain);
        }

        for span in groups.values_mut() {
            let live_between = scene
                .iter()
                .skip(span.first)
                .take(span.last - span.first + 1)
                .filter(|e| !e.is_deleted)
                .count();
            span.contiguous = live_between == span.members.len();
        }

        Self {
            chains,
            groups,
            dissolved,
        }
    }

    /// Effective chain of a live element, outermost first. Empty for unknown
    /// or deleted elements.
    pub fn chain(&self, id: ElementId) -> &[GroupId] {
        self.chains.get(&id).map(|c| c.as_slice()).unwrap_or(&[])
    }

    /// Live members in z-order.
    pub fn members(&self, group_id: &GroupId) -> &[ElementId] {
        self.groups
            .get(group_id)
            .map(|s| s.members.as_slice())
            .unwrap_or(&[])
    }

    pub fn contains(&self, group_id: &GroupId) -> bool {
        self.groups.contains_key(group_id)
    }

    /// Scene indices of the lowest and highest member.
    pub fn span(&self, group_id: &GroupId) -> Option<(usize, usize)> {
        self.groups.get(group_id).map(|s| (s.first, s.last))
    }

    /// No live non-member sits between the lowest and highest member.
    pub fn is_contiguous(&self, group_id: &GroupId) -> bool {
        self.groups.get(group_id).is_some_and(|s| s.contiguous)
    }

    /// The group that directly encloses `group_id`, as seen from its lowest
    /// member.
    pub fn parent(&self, group_id: &GroupId) -> Option<&GroupId> {
        let first = self.members(group_id).first()?;
        let chain = self.chain(*first);
        let pos = chain.iter().position(|g| g == group_id)?;
        pos.checked_sub(1).map(|p| &chain[p])
    }

    /// The chain of any member, cut just after `group_id`.
    pub fn chain_through(&self, group_id: &GroupId) -> Option<GroupChain> {
        let first = self.members(group_id).first()?;
        let chain = self.chain(*first);
        let pos = chain.iter().position(|g| g == group_id)?;
        Some(chain[..=pos].iter().cloned().collect())
    }

    pub fn dissolved(&self) -> &[GroupId] {
        &self.dissolved
    }

    /// Error for a group id that was dropped during the build.
    pub fn check(&self, group_id: &GroupId) -> Result<(), DesignerError> {
        if self.dissolved.contains(group_id) {
            return Err(DesignerError::InconsistentGroupChain {
                group_id: group_id.to_string(),
            });
        }
        Ok(())
    }

    pub fn group_ids(&self) -> impl Iterator<Item = &GroupId> {
        self.groups.keys()
    }
}
