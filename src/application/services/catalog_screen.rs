//! Catalog Screens
//!
//! Screen models for the services and products dashboards and the public
//! catalog pages. A dashboard combines a resource store (the loaded list),
//! a management handle (writes), the search/sort controls, an editor modal
//! and a delete confirmation step.

use std::sync::Arc;

use crate::application::dto::EntityForm;
use crate::domain::services::{
    category_badge, category_label, format_price, sort_items, status_label, BadgeVariant,
    CatalogEntity, CatalogQuery, CatalogStats, PriceRange, SortKey,
};
use crate::domain::{Identified, Product, ProductUpdate, Service, ServiceUpdate, StockStatus};
use crate::infrastructure::http::{ApiClient, Products, Resource, Services};

use super::management::{Management, MutationState};
use super::resource_store::{ResourceStore, StoreState};

/// Resources shown in a catalog dashboard.
pub trait CatalogResource: Resource
where
    Self::Entity: CatalogEntity + Identified + Clone + Send + Sync + 'static,
{
    /// Store preloaded with the resource's fallback dataset.
    fn store(client: Arc<ApiClient>) -> ResourceStore<Self::Entity>;

    /// Update payload flipping only the active flag.
    fn activation(is_active: bool) -> Self::Update;
}

impl CatalogResource for Services {
    fn store(client: Arc<ApiClient>) -> ResourceStore<Service> {
        ResourceStore::services(client)
    }

    fn activation(is_active: bool) -> ServiceUpdate {
        ServiceUpdate::active(is_active)
    }
}

impl CatalogResource for Products {
    fn store(client: Arc<ApiClient>) -> ResourceStore<Product> {
        ResourceStore::products(client)
    }

    fn activation(is_active: bool) -> ProductUpdate {
        ProductUpdate::active(is_active)
    }
}

/// What a screen does with the store after a successful write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WritePolicy {
    /// Reload the whole collection
    #[default]
    Refetch,
    /// Merge the returned entity into the loaded list
    Merge,
}

/// Create/edit modal.
#[derive(Debug, Clone, PartialEq)]
pub enum Editor<F> {
    Closed,
    Creating(F),
    Editing { id: String, form: F },
}

impl<F> Editor<F> {
    pub fn is_open(&self) -> bool {
        !matches!(self, Editor::Closed)
    }

    pub fn form(&self) -> Option<&F> {
        match self {
            Editor::Closed => None,
            Editor::Creating(form) | Editor::Editing { form, .. } => Some(form),
        }
    }

    fn form_mut(&mut self) -> Option<&mut F> {
        match self {
            Editor::Closed => None,
            Editor::Creating(form) | Editor::Editing { form, .. } => Some(form),
        }
    }
}

/// One table row as the dashboard renders it.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogRow {
    pub id: String,
    pub name: String,
    pub category: String,
    pub category_label: String,
    pub badge: BadgeVariant,
    pub price: String,
    pub status: &'static str,
    pub is_active: bool,
    /// Products only
    pub stock: Option<u32>,
    pub stock_label: Option<&'static str>,
    /// Services only
    pub duration_minutes: Option<u32>,
}

impl CatalogRow {
    fn build<T: CatalogEntity + Identified>(item: &T) -> Self {
        Self {
            id: item.id().to_string(),
            name: item.name().to_string(),
            category: item.category().to_string(),
            category_label: category_label(item.category()).to_string(),
            badge: category_badge(item.category()),
            price: format_price(item.price()),
            status: status_label(item.is_active()),
            is_active: item.is_active(),
            stock: item.stock(),
            stock_label: item.stock().map(|s| StockStatus::from_stock(s).label()),
            duration_minutes: item.duration_minutes(),
        }
    }
}

// =============================================================================
// Admin dashboard
// =============================================================================

pub struct CatalogScreen<R, F>
where
    R: CatalogResource,
    R::Entity: CatalogEntity + Identified + Clone + Send + Sync + 'static,
    F: EntityForm<R>,
{
    store: ResourceStore<R::Entity>,
    management: Management<R>,
    policy: WritePolicy,
    search: String,
    sort: SortKey,
    editor: Editor<F>,
    form_error: Option<String>,
    pending_delete: Option<String>,
}

pub type ServicesScreen = CatalogScreen<Services, crate::application::dto::ServiceForm>;
pub type ProductsScreen = CatalogScreen<Products, crate::application::dto::ProductForm>;

impl<R, F> CatalogScreen<R, F>
where
    R: CatalogResource,
    R::Entity: CatalogEntity + Identified + Clone + Send + Sync + 'static,
    F: EntityForm<R>,
{
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self::with_store(R::store(client.clone()), client)
    }

    pub fn with_store(store: ResourceStore<R::Entity>, client: Arc<ApiClient>) -> Self {
        Self {
            store,
            management: Management::new(client),
            policy: WritePolicy::default(),
            search: String::new(),
            sort: SortKey::default(),
            editor: Editor::Closed,
            form_error: None,
            pending_delete: None,
        }
    }

    pub fn with_policy(mut self, policy: WritePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub async fn mount(&self) {
        self.store.mount().await;
    }

    pub fn unmount(&self) {
        self.store.unmount();
    }

    pub async fn refetch(&self) {
        self.store.refetch().await;
    }

    pub fn store(&self) -> &ResourceStore<R::Entity> {
        &self.store
    }

    pub fn list_state(&self) -> StoreState<R::Entity> {
        self.store.state()
    }

    pub fn mutation_state(&self) -> MutationState {
        self.management.state()
    }

    // -------------------------------------------------------------------------
    // Search and sort
    // -------------------------------------------------------------------------

    pub fn set_search(&mut self, term: &str) {
        self.search = term.to_string();
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_sort(&mut self, key: SortKey) {
        self.sort = key;
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    /// Loaded list, filtered by the search term then sorted.
    pub fn visible(&self) -> Vec<R::Entity> {
        let mut items = CatalogQuery::admin(&self.search).apply(&self.store.items());
        sort_items(&mut items, self.sort);
        items
    }

    pub fn rows(&self) -> Vec<CatalogRow> {
        self.visible().iter().map(CatalogRow::build).collect()
    }

    /// Aggregates over the full loaded list.
    pub fn stats(&self) -> CatalogStats {
        CatalogStats::compute(&self.store.items())
    }

    // -------------------------------------------------------------------------
    // Editor
    // -------------------------------------------------------------------------

    pub fn editor(&self) -> &Editor<F> {
        &self.editor
    }

    pub fn form_error(&self) -> Option<&str> {
        self.form_error.as_deref()
    }

    pub fn open_create(&mut self) {
        self.form_error = None;
        self.editor = Editor::Creating(F::blank());
    }

    /// Open the editor pre-populated from a loaded entity.
    pub fn open_edit(&mut self, id: &str) -> bool {
        self.form_error = None;
        match self.store.find(id) {
            Some(entity) => {
                self.editor = Editor::Editing {
                    id: id.to_string(),
                    form: F::from_entity(&entity),
                };
                true
            }
            None => {
                tracing::warn!(resource = R::NOUN, id, "Edit requested for unknown entity");
                false
            }
        }
    }

    /// Apply a change to the open form. No-op while closed.
    pub fn edit_form(&mut self, change: impl FnOnce(&mut F)) {
        if let Some(form) = self.editor.form_mut() {
            change(form);
        }
    }

    pub fn close_editor(&mut self) {
        self.editor = Editor::Closed;
        self.form_error = None;
    }

    /// Validate and send the open form. Closes the editor on success.
    pub async fn submit(&mut self) -> Option<R::Entity> {
        let form = self.editor.form()?.clone();

        if let Err(e) = form.check() {
            self.form_error = Some(e.user_message());
            return None;
        }
        self.form_error = None;

        let saved = match &self.editor {
            Editor::Creating(_) => self.management.create(&form.to_create()).await,
            Editor::Editing { id, .. } => self.management.update(id, &form.to_update()).await,
            Editor::Closed => None,
        };

        match saved {
            Some(entity) => {
                self.editor = Editor::Closed;
                self.after_write(entity.clone()).await;
                Some(entity)
            }
            None => {
                self.form_error = self.management.error();
                None
            }
        }
    }

    // -------------------------------------------------------------------------
    // Delete with confirmation
    // -------------------------------------------------------------------------

    pub fn request_delete(&mut self, id: &str) {
        self.pending_delete = Some(id.to_string());
    }

    pub fn pending_delete(&self) -> Option<&str> {
        self.pending_delete.as_deref()
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Delete the entity awaiting confirmation.
    pub async fn confirm_delete(&mut self) -> bool {
        let Some(id) = self.pending_delete.take() else {
            return false;
        };

        if !self.management.delete(&id).await {
            return false;
        }
        match self.policy {
            WritePolicy::Refetch => self.store.refetch().await,
            WritePolicy::Merge => self.store.remove(&id),
        }
        true
    }

    // -------------------------------------------------------------------------
    // Active flag
    // -------------------------------------------------------------------------

    /// Flip `is_active` of a loaded entity.
    pub async fn toggle_active(&self, id: &str) -> Option<R::Entity> {
        let current = self.store.find(id)?;
        let updated = self
            .management
            .update(id, &R::activation(!current.is_active()))
            .await?;
        self.after_write(updated.clone()).await;
        Some(updated)
    }

    async fn after_write(&self, entity: R::Entity) {
        match self.policy {
            WritePolicy::Merge => self.store.upsert(entity),
            WritePolicy::Refetch => self.store.refetch().await,
        }
    }
}

// =============================================================================
// Public catalog
// =============================================================================

/// Visitor-facing listing: active items, category and price filters.
pub struct PublicCatalog<T> {
    store: ResourceStore<T>,
    search: String,
    category: String,
    price_range: PriceRange,
    sort: SortKey,
}

impl<T> PublicCatalog<T>
where
    T: CatalogEntity + Identified + Clone + Send + Sync + 'static,
{
    pub fn new(store: ResourceStore<T>) -> Self {
        Self {
            store,
            search: String::new(),
            category: crate::domain::services::ALL_CATEGORIES.to_string(),
            price_range: PriceRange::Any,
            sort: SortKey::default(),
        }
    }

    pub async fn mount(&self) {
        self.store.mount().await;
    }

    pub fn unmount(&self) {
        self.store.unmount();
    }

    pub fn set_search(&mut self, term: &str) {
        self.search = term.to_string();
    }

    pub fn set_category(&mut self, category: &str) {
        self.category = category.to_string();
    }

    pub fn set_price_range(&mut self, range: PriceRange) {
        self.price_range = range;
    }

    pub fn set_sort(&mut self, key: SortKey) {
        self.sort = key;
    }

    pub fn is_loading(&self) -> bool {
        self.store.is_loading()
    }

    pub fn error(&self) -> Option<String> {
        self.store.error()
    }

    pub fn visible(&self) -> Vec<T> {
        let query = CatalogQuery::public(&self.search, &self.category)
            .with_price_range(self.price_range);
        let mut items = query.apply(&self.store.items());
        sort_items(&mut items, self.sort);
        items
    }
}
