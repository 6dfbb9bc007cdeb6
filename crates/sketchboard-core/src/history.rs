//! Linear undo/redo log over full scene snapshots.

use crate::scene::Scene;

/// Ordered scene snapshots plus a cursor on the one being displayed.
///
/// The log always holds at least one entry (the initial scene), so the cursor
/// is valid from the start. Entries after the cursor are the redo branch and
/// are dropped by the next commit.
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<Scene>,
    current: usize,
    /// Maximum number of entries to keep (`None` = unbounded).
    limit: Option<usize>,
}

impl Default for History {
    fn default() -> Self {
        Self::new(Scene::new())
    }
}

impl History {
    /// Create a log whose only entry is `initial`.
    pub fn new(initial: Scene) -> Self {
        Self::with_limit(initial, None)
    }

    /// Create a log that keeps at most `limit` entries.
    ///
    /// A limit of zero is treated as one: the displayed scene is never evicted.
    pub fn with_limit(initial: Scene, limit: Option<usize>) -> Self {
        Self {
            entries: vec![initial],
            current: 0,
            limit: limit.map(|l| l.max(1)),
        }
    }

    /// Record a new snapshot after the cursor, discarding the redo branch.
    pub fn commit(&mut self, snapshot: Scene) {
        self.entries.truncate(self.current + 1);
        self.entries.push(snapshot);
        self.current = self.entries.len() - 1;

        if let Some(limit) = self.limit {
            if self.entries.len() > limit {
                let excess = self.entries.len() - limit;
                self.entries.drain(..excess);
                self.current -= excess;
                log::debug!("History limit {} reached, dropped {} oldest entries", limit, excess);
            }
        }
    }

    /// Replace the snapshot under the cursor without adding an entry.
    ///
    /// The redo branch is discarded, as for [`History::commit`].
    pub fn overwrite(&mut self, snapshot: Scene) {
        self.entries.truncate(self.current + 1);
        self.entries[self.current] = snapshot;
    }

    /// Step back one entry and return the scene now displayed.
    /// Returns `None` (and does nothing) at the oldest entry.
    pub fn undo(&mut self) -> Option<&Scene> {
        if self.current > 0 {
            self.current -= 1;
            Some(&self.entries[self.current])
        } else {
            None
        }
    }

    /// Step forward one entry and return the scene now displayed.
    /// Returns `None` (and does nothing) at the newest entry.
    pub fn redo(&mut self) -> Option<&Scene> {
        if self.current + 1 < self.entries.len() {
            self.current += 1;
            Some(&self.entries[self.current])
        } else {
            None
        }
    }

    /// The scene at the cursor.
    pub fn current(&self) -> &Scene {
        debug_assert!(self.current < self.entries.len());
        &self.entries[self.current]
    }

    /// Index of the displayed entry.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Number of entries, including the initial scene.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: the log holds at least the initial scene.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check if undo is available.
    pub fn can_undo(&self) -> bool {
        self.current > 0
    }

    /// Check if redo is available.
    pub fn can_redo(&self) -> bool {
        self.current + 1 < self.entries.len()
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[Scene] {
        &self.entries
    }
}
