//! Selection Manager
//!
//! Pure page-scoped selection state, no I/O. Insertion order is preserved so
//! that a bulk action attempts ids in a deterministic order.

use std::collections::HashSet;
use std::hash::Hash;

/// Tracks which of the currently loaded items are selected
///
/// Idle (empty) vs Active (non-empty) is a derived value, exposed via
/// [`is_active`](Self::is_active); it has no side effects of its own. The
/// owning controller resets the set on every successful load so selected ids
/// always come from the last loaded page.
#[derive(Debug, Clone)]
pub struct SelectionManager<Id> {
    ordered: Vec<Id>,
    members: HashSet<Id>,
}

impl<Id: Clone + Eq + Hash> SelectionManager<Id> {
    pub fn new() -> Self {
        Self { ordered: Vec::new(), members: HashSet::new() }
    }

    /// Add the id if absent, remove it if present. Returns whether the id is
    /// selected afterwards.
    pub fn toggle(&mut self, id: Id) -> bool {
        if self.members.remove(&id) {
            self.ordered.retain(|existing| *existing != id);
            false
        } else {
            self.members.insert(id.clone());
            self.ordered.push(id);
            true
        }
    }

    /// Replace the set with exactly the given page's ids, in page order
    ///
    /// Page-scoped on purpose: "select all" never reaches across pages or
    /// filters.
    pub fn select_all(&mut self, page_ids: &[Id]) {
        self.ordered = page_ids.to_vec();
        self.members = page_ids.iter().cloned().collect();
    }

    pub fn clear(&mut self) {
        self.ordered.clear();
        self.members.clear();
    }

    pub fn is_selected(&self, id: &Id) -> bool {
        self.members.contains(id)
    }

    /// Non-empty selection; the UI shows bulk-action controls while active
    pub fn is_active(&self) -> bool {
        !self.ordered.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Selected ids in selection order
    pub fn ids(&self) -> &[Id] {
        &self.ordered
    }
}

impl<Id: Clone + Eq + Hash> Default for SelectionManager<Id> {
    fn default() -> Self {
        Self::new()
    }
}
