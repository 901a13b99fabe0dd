//! Resource Stores
//!
//! Per-resource state containers sitting between the API client and the
//! screens. A store loads its collection when mounted and exposes
//! `{ items, loading, error }`.
//!
//! Semantics:
//! - `refetch` never cancels an in-flight load; whichever response arrives
//!   last wins.
//! - after `unmount` every late response is dropped.
//! - services and products fall back to a built-in dataset when the load
//!   fails, slides fall back to an empty list.

use std::marker::PhantomData;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::domain::services::by_display_order;
use crate::domain::{
    fallback_products, fallback_services, CarouselSlide, Identified, Product, Service,
};
use crate::infrastructure::http::{ApiClient, Products, Resource, Services, Slides};
use crate::shared::error::AppError;
use crate::shared::media::full_image_url;

/// Snapshot of a store.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreState<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for StoreState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
            error: None,
        }
    }
}

/// Source of a store's items.
#[async_trait]
pub trait ResourceLoader<T>: Send + Sync {
    async fn load(&self) -> Result<Vec<T>, AppError>;
}

/// Loads a whole collection through the generic list endpoint.
pub struct CollectionLoader<R> {
    client: Arc<ApiClient>,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> CollectionLoader<R> {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            client,
            _resource: PhantomData,
        }
    }
}

#[async_trait]
impl<R: Resource> ResourceLoader<R::Entity> for CollectionLoader<R> {
    async fn load(&self) -> Result<Vec<R::Entity>, AppError> {
        self.client.list::<R>().await
    }
}

/// Loads carousel slides, resolving relative image paths against the
/// backend origin and ordering them by their display position.
pub struct SlideLoader {
    client: Arc<ApiClient>,
    active_only: bool,
}

impl SlideLoader {
    pub fn new(client: Arc<ApiClient>, active_only: bool) -> Self {
        Self {
            client,
            active_only,
        }
    }
}

#[async_trait]
impl ResourceLoader<CarouselSlide> for SlideLoader {
    async fn load(&self) -> Result<Vec<CarouselSlide>, AppError> {
        let slides = if self.active_only {
            self.client.active_slides().await?
        } else {
            self.client.list_slides(false).await?
        };

        let origin = self.client.origin();
        let slides: Vec<CarouselSlide> = slides
            .into_iter()
            .map(|mut slide| {
                slide.image_url = full_image_url(origin, &slide.image_url);
                slide
            })
            .collect();

        Ok(by_display_order(&slides))
    }
}

/// What a store shows when its load fails.
#[derive(Debug, Clone)]
pub enum Fallback<T> {
    Dataset(Vec<T>),
    Empty,
}

struct StoreInner<T> {
    loader: Arc<dyn ResourceLoader<T>>,
    fallback: Fallback<T>,
    load_error: String,
    state: RwLock<StoreState<T>>,
    mounted: AtomicBool,
}

/// Shared handle to a resource store.
pub struct ResourceStore<T> {
    inner: Arc<StoreInner<T>>,
}

impl<T> Clone for ResourceStore<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> ResourceStore<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new(
        loader: Arc<dyn ResourceLoader<T>>,
        fallback: Fallback<T>,
        load_error: impl Into<String>,
    ) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                loader,
                fallback,
                load_error: load_error.into(),
                state: RwLock::new(StoreState::default()),
                mounted: AtomicBool::new(false),
            }),
        }
    }

    /// Mark the store live and issue the initial load.
    pub async fn mount(&self) {
        self.inner.mounted.store(true, Ordering::SeqCst);
        self.refetch().await;
    }

    /// Stop accepting results. In-flight loads still complete but are discarded.
    pub fn unmount(&self) {
        self.inner.mounted.store(false, Ordering::SeqCst);
    }

    pub fn is_mounted(&self) -> bool {
        self.inner.mounted.load(Ordering::SeqCst)
    }

    /// Re-issue the read call and replace the state with its outcome.
    pub async fn refetch(&self) {
        self.write(|state| {
            state.loading = true;
            state.error = None;
        });

        let result = self.inner.loader.load().await;

        match result {
            Ok(items) => {
                tracing::debug!(count = items.len(), "Store loaded");
                self.write(|state| {
                    state.items = items;
                    state.loading = false;
                    state.error = None;
                });
            }
            Err(e) => {
                tracing::warn!(error = %e, "Store load failed");
                let fallback = match &self.inner.fallback {
                    Fallback::Dataset(items) => items.clone(),
                    Fallback::Empty => Vec::new(),
                };
                let message = self.inner.load_error.clone();
                self.write(|state| {
                    state.items = fallback;
                    state.loading = false;
                    state.error = Some(message);
                });
            }
        }
    }

    fn write<F>(&self, apply: F)
    where
        F: FnOnce(&mut StoreState<T>),
    {
        if !self.is_mounted() {
            tracing::debug!("Dropping store update after unmount");
            return;
        }
        apply(&mut self.inner.state.write());
    }

    pub fn state(&self) -> StoreState<T> {
        self.inner.state.read().clone()
    }

    pub fn items(&self) -> Vec<T> {
        self.inner.state.read().items.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.inner.state.read().loading
    }

    pub fn error(&self) -> Option<String> {
        self.inner.state.read().error.clone()
    }
}

impl<T> ResourceStore<T>
where
    T: Identified + Clone + Send + Sync + 'static,
{
    /// Merge an entity returned by a write: replace by id, or append.
    pub fn upsert(&self, entity: T) {
        self.write(|state| {
            match state.items.iter_mut().find(|item| item.id() == entity.id()) {
                Some(slot) => *slot = entity,
                None => state.items.push(entity),
            }
        });
    }

    /// Drop an entity after a successful delete.
    pub fn remove(&self, id: &str) {
        self.write(|state| state.items.retain(|item| item.id() != id));
    }

    pub fn find(&self, id: &str) -> Option<T> {
        self.inner
            .state
            .read()
            .items
            .iter()
            .find(|item| item.id() == id)
            .cloned()
    }
}

impl ResourceStore<Service> {
    pub fn services(client: Arc<ApiClient>) -> Self {
        Self::new(
            Arc::new(CollectionLoader::<Services>::new(client)),
            Fallback::Dataset(fallback_services()),
            Services::LOAD_ERROR,
        )
    }
}

impl ResourceStore<Product> {
    pub fn products(client: Arc<ApiClient>) -> Self {
        Self::new(
            Arc::new(CollectionLoader::<Products>::new(client)),
            Fallback::Dataset(fallback_products()),
            Products::LOAD_ERROR,
        )
    }
}

impl ResourceStore<CarouselSlide> {
    pub fn slides(client: Arc<ApiClient>, active_only: bool) -> Self {
        Self::new(
            Arc::new(SlideLoader::new(client, active_only)),
            Fallback::Empty,
            Slides::LOAD_ERROR,
        )
    }
}
