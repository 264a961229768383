//! Linear undo/redo history.

use std::collections::VecDeque;

/// Default maximum number of snapshots kept.
pub const MAX_HISTORY: usize = 50;

/// A bounded log of full snapshots with a cursor.
///
/// `entries[cursor]` always mirrors the live state right after a commit,
/// undo or redo. Entries past the cursor form the redo branch and are
/// discarded by the next commit.
#[derive(Debug, Clone)]
pub struct History<T> {
    entries: VecDeque<T>,
    cursor: usize,
    capacity: usize,
}

impl<T: Clone> History<T> {
    /// Start a history whose first entry is `initial`.
    pub fn new(initial: T, capacity: usize) -> Self {
        let mut entries = VecDeque::with_capacity(capacity.min(MAX_HISTORY));
        entries.push_back(initial);
        Self {
            entries,
            cursor: 0,
            capacity: capacity.max(1),
        }
    }

    /// Append a snapshot after the cursor, dropping any redo branch.
    /// The oldest entry is evicted once the capacity is exceeded.
    pub fn commit(&mut self, snapshot: T) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push_back(snapshot);
        if self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
        self.cursor = self.entries.len() - 1;
        log::debug!("history commit: {} of {}", self.cursor + 1, self.entries.len());
    }

    /// Step back. Returns the snapshot to restore, or None at the start.
    pub fn undo(&mut self) -> Option<&T> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        log::debug!("undo to entry {}", self.cursor);
        self.entries.get(self.cursor)
    }

    /// Step forward. Returns the snapshot to restore, or None at the end.
    pub fn redo(&mut self) -> Option<&T> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        log::debug!("redo to entry {}", self.cursor);
        self.entries.get(self.cursor)
    }

    /// Snapshot at the cursor.
    pub fn current(&self) -> &T {
        &self.entries[self.cursor]
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Forget everything and start over from `initial`.
    pub fn reset(&mut self, initial: T) {
        self.entries.clear();
        self.entries.push_back(initial);
        self.cursor = 0;
    }
}
