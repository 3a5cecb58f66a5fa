//! Resource List Controller
//!
//! Generic paginated list state over one entity adapter. Loads replace the
//! local item list and pagination wholesale; nothing is ever patched
//! optimistically, the backend stays authoritative.

use std::sync::Arc;

use crate::adapters::{Filters, ReloadPolicy, ResourceAdapter};
use crate::domain::{ApiResult, Entity, Pagination};

use super::selection::SelectionManager;
use super::IdOf;

#[derive(Debug, Clone)]
struct Query {
    page: u32,
    filters: Filters,
}

/// Paginated, selectable view onto one backend list endpoint
pub struct ResourceListController<A: ResourceAdapter> {
    adapter: Arc<A>,
    page_size: u32,
    items: Vec<A::Item>,
    pagination: Pagination,
    last_query: Option<Query>,
    selection: SelectionManager<IdOf<A>>,
}

impl<A: ResourceAdapter> ResourceListController<A> {
    pub fn new(adapter: Arc<A>, page_size: u32) -> Self {
        Self {
            adapter,
            page_size,
            items: Vec::new(),
            pagination: Pagination::empty(),
            last_query: None,
            selection: SelectionManager::new(),
        }
    }

    /// Load one page from the backend
    ///
    /// On success the item list and pagination are replaced and the selection
    /// is reset (page/filter changes never carry a stale selection over). On
    /// failure the previous state is kept untouched and the error propagates;
    /// there is no automatic retry.
    pub async fn load(&mut self, page: u32, filters: Filters) -> ApiResult<()> {
        let page = page.max(1);
        let fetched = self.adapter.fetch_page(page, self.page_size, &filters).await?;

        let pagination = Pagination::from(&fetched);
        log::debug!(
            "loaded {} page {}/{} ({} items, {} total)",
            self.adapter.name(),
            pagination.current_page,
            pagination.total_pages,
            fetched.items.len(),
            pagination.total_count
        );

        self.items = fetched.items;
        self.pagination = pagination;
        self.selection.clear();
        self.last_query = Some(Query { page: pagination.current_page, filters });
        Ok(())
    }

    /// Re-run the last load, honoring the adapter's reload policy
    ///
    /// Called after every mutation to re-sync with backend truth. Before any
    /// load has happened this falls back to page 1 without filters.
    pub async fn reload(&mut self) -> ApiResult<()> {
        let (page, filters) = match &self.last_query {
            Some(query) => {
                let page = match self.adapter.reload_policy() {
                    ReloadPolicy::SamePage => query.page,
                    ReloadPolicy::FirstPage => 1,
                };
                (page, query.filters.clone())
            }
            None => (1, Vec::new()),
        };
        self.load(page, filters).await
    }

    pub fn items(&self) -> &[A::Item] {
        &self.items
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    pub fn adapter(&self) -> &Arc<A> {
        &self.adapter
    }

    // ========================
    // Selection passthroughs
    // ========================

    /// Toggle one loaded item; ids not on the current page are ignored so
    /// the selection can never reference stale/unloaded items
    pub fn toggle(&mut self, id: IdOf<A>) -> bool {
        if !self.items.iter().any(|item| item.id() == id) {
            log::warn!("ignoring toggle for unloaded {} id {}", self.adapter.name(), id);
            return false;
        }
        self.selection.toggle(id)
    }

    /// Select exactly the currently loaded page
    pub fn select_all(&mut self) {
        let page_ids: Vec<IdOf<A>> = self.items.iter().map(Entity::id).collect();
        self.selection.select_all(&page_ids);
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Selected ids in selection order
    pub fn selected_ids(&self) -> Vec<IdOf<A>> {
        self.selection.ids().to_vec()
    }

    pub fn is_selected(&self, id: &IdOf<A>) -> bool {
        self.selection.is_selected(id)
    }

    /// Whether bulk-action controls should be visible
    pub fn is_select_mode(&self) -> bool {
        self.selection.is_active()
    }

    pub fn selection_len(&self) -> usize {
        self.selection.len()
    }
}
