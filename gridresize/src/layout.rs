//! In-memory host for the resize controller.
//!
//! Holds the laid-out bounds of every element the controller asks about,
//! the header row order, per-element cursor overrides and the document
//! listener table. Hosts that compute their own layout (like the terminal
//! demo) fill one of these each frame; tests fill it by hand.

use std::collections::HashMap;

use log::debug;

use crate::document::{DocumentEvents, ListenerId, ListenerKind};
use crate::geometry::{Bounds, Cursor, ElementId, GeometryProvider};

#[derive(Debug, Default)]
pub struct LayoutHost {
    bounds: HashMap<ElementId, Bounds>,
    parents: HashMap<ElementId, ElementId>,
    /// Header cells, left to right.
    header_row: Vec<ElementId>,
    cursors: HashMap<ElementId, Cursor>,
    listeners: Vec<(ListenerId, ListenerKind)>,
    next_listener: u64,
    selection_suppressed: bool,
}

impl LayoutHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an element's bounds, replacing any previous entry.
    pub fn insert(&mut self, id: impl Into<ElementId>, bounds: Bounds) {
        self.bounds.insert(id.into(), bounds);
    }

    pub fn set_parent(&mut self, child: impl Into<ElementId>, parent: impl Into<ElementId>) {
        self.parents.insert(child.into(), parent.into());
    }

    /// Set the header cells in render order.
    pub fn set_header_row(&mut self, ids: impl IntoIterator<Item = impl Into<ElementId>>) {
        self.header_row = ids.into_iter().map(Into::into).collect();
    }

    pub fn header_row(&self) -> &[ElementId] {
        &self.header_row
    }

    /// Forget all geometry. Cursors and listeners survive a relayout.
    pub fn clear_layout(&mut self) {
        self.bounds.clear();
        self.parents.clear();
        self.header_row.clear();
    }

    /// Cursor override on an element.
    pub fn cursor(&self, id: &str) -> Cursor {
        self.cursors.get(id).copied().unwrap_or_default()
    }

    /// Header cell containing the point, if any.
    pub fn header_at(&self, x: f64, y: f64) -> Option<&str> {
        self.header_row
            .iter()
            .find(|id| self.bounds.get(*id).is_some_and(|b| b.contains(x, y)))
            .map(String::as_str)
    }

    /// Index of a header cell in the row.
    pub fn header_index(&self, id: &str) -> Option<usize> {
        self.header_row.iter().position(|h| h == id)
    }

    pub fn has_listener(&self, kind: ListenerKind) -> bool {
        self.listeners.iter().any(|(_, k)| *k == kind)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn selection_suppressed(&self) -> bool {
        self.selection_suppressed
    }
}

impl GeometryProvider for LayoutHost {
    fn bounds_of(&self, id: &str) -> Option<Bounds> {
        self.bounds.get(id).copied()
    }

    fn set_cursor(&mut self, id: &str, cursor: Cursor) {
        match cursor {
            Cursor::Default => {
                self.cursors.remove(id);
            }
            other => {
                self.cursors.insert(id.to_string(), other);
            }
        }
    }

    fn previous_header_cell(&self, id: &str) -> Option<ElementId> {
        let index = self.header_index(id)?;
        index
            .checked_sub(1)
            .and_then(|i| self.header_row.get(i))
            .cloned()
    }

    fn parent_of(&self, id: &str) -> Option<ElementId> {
        self.parents.get(id).cloned()
    }
}

impl DocumentEvents for LayoutHost {
    fn add_listener(&mut self, kind: ListenerKind) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, kind));
        id
    }

    fn remove_listener(&mut self, id: ListenerId) {
        let before = self.listeners.len();
        self.listeners.retain(|(l, _)| *l != id);
        if self.listeners.len() == before {
            debug!("[layout] remove_listener: {:?} not registered", id);
        }
    }

    fn set_selection_suppressed(&mut self, suppressed: bool) {
        self.selection_suppressed = suppressed;
    }
}
