//! Management Service
//!
//! Mutation operations (create/update/delete) for a resource, with their
//! own `{ loading, error }` state. Each operation returns the affected
//! entity (or `true` for deletes) on success and `None`/`false` on failure,
//! leaving the inline error message behind. Refreshing the collection is
//! the caller's decision.

use std::marker::PhantomData;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::domain::{CarouselSlide, SlideOrder};
use crate::infrastructure::http::{ApiClient, Resource, Slides};
use crate::shared::error::AppError;

/// Inline status of the mutation operations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MutationState {
    pub loading: bool,
    pub error: Option<String>,
}

pub struct Management<R: Resource> {
    client: Arc<ApiClient>,
    in_flight: AtomicUsize,
    error: RwLock<Option<String>>,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> Management<R> {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            client,
            in_flight: AtomicUsize::new(0),
            error: RwLock::new(None),
            _resource: PhantomData,
        }
    }

    pub fn state(&self) -> MutationState {
        MutationState {
            loading: self.is_loading(),
            error: self.error.read().clone(),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }

    pub fn error(&self) -> Option<String> {
        self.error.read().clone()
    }

    pub fn clear_error(&self) {
        *self.error.write() = None;
    }

    pub async fn create(&self, payload: &R::Create) -> Option<R::Entity> {
        self.begin();
        let result = self.client.create::<R>(payload).await;
        self.finish(result, "crear")
    }

    pub async fn update(&self, id: &str, payload: &R::Update) -> Option<R::Entity> {
        self.begin();
        let result = self.client.update::<R>(id, payload).await;
        self.finish(result, "actualizar")
    }

    pub async fn delete(&self, id: &str) -> bool {
        self.begin();
        let result = self.client.delete::<R>(id).await;
        self.finish(result, "eliminar").is_some()
    }

    fn begin(&self) {
        self.in_flight.fetch_add(1, Ordering::SeqCst);
        *self.error.write() = None;
    }

    fn finish<T>(&self, result: Result<T, AppError>, verb: &str) -> Option<T> {
        self.fail_with(result, &format!("Error al {} {}", verb, R::NOUN))
    }

    /// Settle an operation; on failure keep the server detail or `fallback`.
    fn fail_with<T>(&self, result: Result<T, AppError>, fallback: &str) -> Option<T> {
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(resource = R::NOUN, error = %e, message = %fallback, "Mutation failed");
                *self.error.write() = Some(e.message_or(fallback));
                None
            }
        }
    }
}

impl Management<Slides> {
    /// `PATCH /carousel/slides/:id/toggle`
    pub async fn toggle(&self, id: &str) -> Option<CarouselSlide> {
        self.begin();
        let result = self.client.toggle_slide(id).await;
        self.fail_with(result, "Error al cambiar estado del slide")
    }

    /// Submit a complete ordering.
    pub async fn reorder(&self, orders: &[SlideOrder]) -> bool {
        self.begin();
        let result = self.client.reorder_slides(orders).await;
        self.fail_with(result, "Error al reordenar slides").is_some()
    }
}
