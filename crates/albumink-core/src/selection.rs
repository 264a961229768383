//! Selection of elements, with group resolution.

use crate::document::Document;
use crate::elements::ElementId;

/// What a `select` call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// The id does not exist; nothing changed.
    Missing,
    /// Part of the target was already selected; a drag may start from it.
    Unchanged,
    /// The selection was replaced by the target's group. Hosts clear any
    /// per-selection UI state (editing, crop mode) on this outcome.
    Replaced,
    /// The target's group was added to a multi-selection.
    Added,
    /// The target's group was toggled off.
    Removed,
}

/// Ordered set of selected element ids.
///
/// Insertion order is kept so the last inserted id is the primary selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: Vec<ElementId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `id` together with its group.
    pub fn select(&mut self, id: ElementId, multi: bool, document: &Document) -> SelectOutcome {
        let members = document.group_members(id);
        if members.is_empty() {
            return SelectOutcome::Missing;
        }
        let touched = members.iter().any(|m| self.contains(*m));

        let outcome = match (multi, touched) {
            (false, true) => SelectOutcome::Unchanged,
            (false, false) => {
                self.ids = Self::with_primary_last(members, id);
                SelectOutcome::Replaced
            }
            (true, true) => {
                self.ids.retain(|selected| !members.contains(selected));
                SelectOutcome::Removed
            }
            (true, false) => {
                self.ids.extend(Self::with_primary_last(members, id));
                SelectOutcome::Added
            }
        };
        log::debug!("select {id} (multi: {multi}): {outcome:?}");
        outcome
    }

    /// Put the clicked id last so it becomes primary.
    fn with_primary_last(mut members: Vec<ElementId>, id: ElementId) -> Vec<ElementId> {
        members.retain(|m| *m != id);
        members.push(id);
        members
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Replace the selection outright, dropping duplicates.
    pub fn set(&mut self, ids: impl IntoIterator<Item = ElementId>) {
        self.ids.clear();
        for id in ids {
            if !self.ids.contains(&id) {
                self.ids.push(id);
            }
        }
    }

    /// Drop ids the predicate rejects.
    pub fn retain(&mut self, keep: impl FnMut(&ElementId) -> bool) {
        self.ids.retain(keep);
    }

    /// Most recently inserted id.
    pub fn primary(&self) -> Option<ElementId> {
        self.ids.last().copied()
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.ids.contains(&id)
    }

    pub fn ids(&self) -> &[ElementId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// The only selected id, if exactly one is selected.
    pub fn single(&self) -> Option<ElementId> {
        match self.ids.as_slice() {
            [id] => Some(*id),
            _ => None,
        }
    }
}
