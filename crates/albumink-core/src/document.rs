//! Document store: the ordered element sequence and the pages.

use crate::elements::{Element, ElementId, ElementPatch};
use crate::pages::{Page, PageId};
use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Errors raised when seeding a document from outside data.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Invalid document JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Duplicate element id: {0}")]
    DuplicateId(ElementId),
    #[error("Element {element} references unknown page {page}")]
    UnknownPage { element: ElementId, page: PageId },
    #[error("Active page {0} does not exist")]
    UnknownActivePage(PageId),
}

/// Snapshot of the element sequence, as stored in history.
pub type ElementsSnapshot = Vec<Element>;

/// Wire form used by `from_json`/`to_json`.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DocumentData {
    pages: Vec<Page>,
    #[serde(default)]
    active_page: Option<PageId>,
    #[serde(default)]
    elements: Vec<Element>,
}

/// The document being edited.
///
/// Elements are kept in z-order (back to front). Mutators are crate-private:
/// outside code changes the document through the editor, which routes every
/// durable change through history.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    elements: Vec<Element>,
    pages: Vec<Page>,
    active_page: PageId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Document {
    /// Create an empty document. Without pages a single default spread is created.
    pub fn new(pages: Vec<Page>) -> Self {
        let pages = if pages.is_empty() {
            vec![Page::new("p1", "Spread 01")]
        } else {
            pages
        };
        let active_page = pages[0].id.clone();
        Self {
            elements: Vec::new(),
            pages,
            active_page,
        }
    }

    /// Create a document seeded with elements, validating the invariants.
    pub fn with_elements(pages: Vec<Page>, elements: Vec<Element>) -> Result<Self, DocumentError> {
        let mut doc = Self::new(pages);
        let page_ids: HashSet<&PageId> = doc.pages.iter().map(|p| &p.id).collect();
        let mut seen = HashSet::new();
        for element in &elements {
            if !seen.insert(element.id) {
                return Err(DocumentError::DuplicateId(element.id));
            }
            if !page_ids.contains(&element.page_id) {
                return Err(DocumentError::UnknownPage {
                    element: element.id,
                    page: element.page_id.clone(),
                });
            }
        }
        doc.elements = elements;
        Ok(doc)
    }

    /// Load pages and elements from JSON.
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        let data: DocumentData = serde_json::from_str(json)?;
        let mut doc = Self::with_elements(data.pages, data.elements)?;
        if let Some(active) = data.active_page {
            if !doc.set_active_page(&active) {
                return Err(DocumentError::UnknownActivePage(active));
            }
        }
        Ok(doc)
    }

    /// Serialize pages and elements to JSON for the host.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let data = DocumentData {
            pages: self.pages.clone(),
            active_page: Some(self.active_page.clone()),
            elements: self.elements.clone(),
        };
        serde_json::to_string_pretty(&data)
    }

    /// All elements in z-order (back to front).
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Elements of the active page, in z-order.
    pub fn visible_elements(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter().filter(move |el| el.page_id == self.active_page)
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|el| el.id == id)
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.index_of(id).is_some()
    }

    /// Position of an element in the z-order.
    pub fn index_of(&self, id: ElementId) -> Option<usize> {
        self.elements.iter().position(|el| el.id == id)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn active_page(&self) -> &PageId {
        &self.active_page
    }

    /// Make another page active. Returns false for unknown pages.
    pub(crate) fn set_active_page(&mut self, page_id: &str) -> bool {
        if self.pages.iter().any(|p| p.id == page_id) {
            self.active_page = page_id.to_string();
            true
        } else {
            false
        }
    }

    /// Ids that move and select together with `id`: its whole group, or just
    /// itself when ungrouped. Empty for unknown ids.
    pub fn group_members(&self, id: ElementId) -> Vec<ElementId> {
        match self.get(id) {
            Some(Element {
                group_id: Some(group_id),
                ..
            }) => self
                .elements
                .iter()
                .filter(|el| el.group_id == Some(*group_id))
                .map(|el| el.id)
                .collect(),
            Some(_) => vec![id],
            None => Vec::new(),
        }
    }

    /// Find elements of the active page at a point, front to back.
    pub fn elements_at_point(&self, point: Point, tolerance: f64) -> Vec<ElementId> {
        self.elements
            .iter()
            .rev()
            .filter(|el| el.page_id == self.active_page && el.hit_test(point, tolerance))
            .map(|el| el.id)
            .collect()
    }

    /// Check whether `ids` already occupy the top of the z-order as one block.
    pub fn is_top_block(&self, ids: &[ElementId]) -> bool {
        let len = self.elements.len();
        ids.iter().all(|&id| {
            self.index_of(id)
                .is_some_and(|idx| idx >= len.saturating_sub(ids.len()))
        })
    }

    pub(crate) fn snapshot(&self) -> ElementsSnapshot {
        self.elements.clone()
    }

    pub(crate) fn restore(&mut self, snapshot: &[Element]) {
        self.elements = snapshot.to_vec();
    }

    /// Apply a patch to one element. Returns false for unknown ids.
    ///
    /// A `page_id` naming a page this document does not have is dropped; the
    /// rest of the patch still applies.
    pub(crate) fn update(&mut self, id: ElementId, patch: &ElementPatch) -> bool {
        let checked;
        let patch = match &patch.page_id {
            Some(page) if !self.pages.iter().any(|p| p.id == *page) => {
                log::debug!("ignoring unknown page {page} for element {id}");
                checked = ElementPatch {
                    page_id: None,
                    ..patch.clone()
                };
                &checked
            }
            _ => patch,
        };
        match self.elements.iter_mut().find(|el| el.id == id) {
            Some(element) => {
                patch.apply(element);
                true
            }
            None => false,
        }
    }

    /// Append an element on top of the z-order.
    pub(crate) fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    /// Remove all elements in `ids`. Returns how many were removed.
    pub(crate) fn remove(&mut self, ids: &[ElementId]) -> usize {
        let before = self.elements.len();
        self.elements.retain(|el| !ids.contains(&el.id));
        before - self.elements.len()
    }

    /// Move `ids` to the top, keeping their relative order.
    /// Returns false if nothing moved.
    pub(crate) fn bring_to_front(&mut self, ids: &[ElementId]) -> bool {
        let (moving, rest): (Vec<_>, Vec<_>) = self
            .elements
            .drain(..)
            .partition(|el| ids.contains(&el.id));
        let changed = !moving.is_empty();
        self.elements = rest;
        self.elements.extend(moving);
        changed
    }

    /// Move `ids` to the bottom, keeping their relative order.
    /// Returns false if nothing moved.
    pub(crate) fn send_to_back(&mut self, ids: &[ElementId]) -> bool {
        let (mut moving, rest): (Vec<_>, Vec<_>) = self
            .elements
            .drain(..)
            .partition(|el| ids.contains(&el.id));
        let changed = !moving.is_empty();
        moving.extend(rest);
        self.elements = moving;
        changed
    }
}
