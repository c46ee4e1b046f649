//! Undo/redo as a linear log of snapshots.
//!
//! Each entry holds the complete scene and selection after an interaction.
//! Snapshots share unchanged elements with each other, so an entry costs
//! roughly the elements that changed. Recording a snapshot equal to the
//! current entry is a no-op, which keeps clicks that change nothing out of
//! the log.

use chrono::{DateTime, Utc};

use crate::scene::Scene;
use crate::selection::Selection;

#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub scene: Scene,
    pub selection: Selection,
}

/// A recorded snapshot. Label and timestamp are informational and take no
/// part in no-op detection.
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub snapshot: Snapshot,
    pub label: String,
    pub recorded_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<HistoryEntry>,
    cursor: usize,
    max_entries: usize,
}

impl History {
    /// Start a log whose only entry is the initial state. `max_entries` is
    /// raised to at least 1.
    pub fn new(scene: Scene, selection: Selection, max_entries: usize) -> Self {
        Self {
            entries: vec![HistoryEntry {
                snapshot: Snapshot { scene, selection },
                label: "Initial".to_string(),
                recorded_at: Utc::now(),
            }],
            cursor: 0,
            max_entries: max_entries.max(1),
        }
    }

    /// Record the state after an interaction.
    ///
    /// Returns `false` when the state equals the current entry. Otherwise any
    /// redo entries are discarded, the snapshot is appended and the oldest
    /// entries are dropped beyond the limit.
    pub fn record(&mut self, scene: &Scene, selection: &Selection, label: &str) -> bool {
        let current = &self.entries[self.cursor].snapshot;
        if current.scene == *scene && current.selection == *selection {
            tracing::trace!("Skipping no-op history entry '{}'", label);
            return false;
        }

        let discarded = self.entries.len() - self.cursor - 1;
        if discarded > 0 {
            tracing::debug!("Discarding {} redo entries", discarded);
        }
        self.entries.truncate(self.cursor + 1);
        self.entries.push(HistoryEntry {
            snapshot: Snapshot {
                scene: scene.clone(),
                selection: selection.clone(),
            },
            label: label.to_string(),
            recorded_at: Utc::now(),
        });

        if self.entries.len() > self.max_entries {
            let excess = self.entries.len() - self.max_entries;
            self.entries.drain(..excess);
        }
        self.cursor = self.entries.len() - 1;
        true
    }

    /// Step back one entry and return the state to restore.
    pub fn undo(&mut self) -> Option<&HistoryEntry> {
        if !self.can_undo() {
            return None;
        }
        self.cursor -= 1;
        Some(&self.entries[self.cursor])
    }

    /// Step forward one entry and return the state to restore.
    pub fn redo(&mut self) -> Option<&HistoryEntry> {
        if !self.can_redo() {
            return None;
        }
        self.cursor += 1;
        Some(&self.entries[self.cursor])
    }

    pub fn current(&self) -> &HistoryEntry {
        &self.entries[self.cursor]
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    pub fn undo_depth(&self) -> usize {
        self.cursor
    }

    pub fn redo_depth(&self) -> usize {
        self.entries.len() - self.cursor - 1
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.label.as_str()).collect()
    }

    /// Drop every entry and start over from the given state.
    pub fn reset(&mut self, scene: Scene, selection: Selection) {
        *self = Self::new(scene, selection, self.max_entries);
    }
}
