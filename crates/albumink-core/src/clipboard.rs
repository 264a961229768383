//! In-memory clipboard for elements.

use crate::elements::{Element, GroupId};
use crate::pages::PageId;
use std::collections::HashMap;
use uuid::Uuid;

/// Clone `elements` under fresh ids, shifted by `offset`.
///
/// Each distinct source group gets one new group id, so clones never join
/// the group they were copied from.
pub fn clone_elements<'a>(elements: impl IntoIterator<Item = &'a Element>, offset: f64) -> Vec<Element> {
    let mut groups: HashMap<GroupId, GroupId> = HashMap::new();
    elements
        .into_iter()
        .map(|source| {
            let mut clone = source.clone_with_new_id();
            clone.x += offset;
            clone.y += offset;
            clone.group_id = source
                .group_id
                .map(|group| *groups.entry(group).or_insert_with(Uuid::new_v4));
            clone
        })
        .collect()
}

/// Copied elements, kept in z-order.
#[derive(Debug, Clone, Default)]
pub struct Clipboard {
    entries: Vec<Element>,
}

impl Clipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the contents. Empty input leaves the clipboard unchanged.
    pub fn copy<'a>(&mut self, elements: impl IntoIterator<Item = &'a Element>) {
        let entries: Vec<Element> = elements.into_iter().cloned().collect();
        if entries.is_empty() {
            return;
        }
        log::debug!("copied {} element(s)", entries.len());
        self.entries = entries;
    }

    /// Fresh copies of the contents, moved to `page_id` and offset.
    pub fn paste(&self, page_id: &PageId, offset: f64) -> Vec<Element> {
        let mut pasted = clone_elements(&self.entries, offset);
        for element in &mut pasted {
            element.page_id = page_id.clone();
        }
        log::debug!("pasting {} element(s) on {}", pasted.len(), page_id);
        pasted
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
