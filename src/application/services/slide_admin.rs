//! Slide Admin
//!
//! Dashboard list of carousel slides. Rows are shown in display order with
//! up/down controls; every move submits the whole renumbered sequence and
//! every successful write reloads the list.

use std::sync::Arc;

use crate::application::dto::{EntityForm, SlideForm};
use crate::domain::services::{by_display_order, move_in_direction, reorder, status_label, Direction};
use crate::domain::{CarouselSlide, SlideOrder};
use crate::infrastructure::http::{ApiClient, Slides};

use super::catalog_screen::Editor;
use super::management::{Management, MutationState};
use super::resource_store::{ResourceStore, StoreState};

pub const DELETE_CONFIRMATION: &str = "¿Estás seguro de que quieres eliminar este slide?";

/// One row of the slide table.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideRow {
    pub id: String,
    pub title: String,
    pub image_url: String,
    /// 1-based position in the list
    pub position: usize,
    pub order: u32,
    pub is_active: bool,
    pub status: &'static str,
    pub show_button: bool,
    pub can_move_up: bool,
    pub can_move_down: bool,
}

pub struct SlideAdmin {
    store: ResourceStore<CarouselSlide>,
    management: Management<Slides>,
    editor: Editor<SlideForm>,
    form_error: Option<String>,
    pending_delete: Option<String>,
}

impl SlideAdmin {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self::with_store(ResourceStore::slides(client.clone(), false), client)
    }

    pub fn with_store(store: ResourceStore<CarouselSlide>, client: Arc<ApiClient>) -> Self {
        Self {
            store,
            management: Management::new(client),
            editor: Editor::Closed,
            form_error: None,
            pending_delete: None,
        }
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

    pub fn list_state(&self) -> StoreState<CarouselSlide> {
        self.store.state()
    }

    pub fn mutation_state(&self) -> MutationState {
        self.management.state()
    }

    /// Slides in display order.
    pub fn slides(&self) -> Vec<CarouselSlide> {
        by_display_order(&self.store.items())
    }

    pub fn rows(&self) -> Vec<SlideRow> {
        let slides = self.slides();
        let last = slides.len().saturating_sub(1);

        slides
            .into_iter()
            .enumerate()
            .map(|(i, slide)| SlideRow {
                status: status_label(slide.is_active),
                position: i + 1,
                can_move_up: i > 0,
                can_move_down: i < last,
                id: slide.id,
                title: slide.title,
                image_url: slide.image_url,
                order: slide.order,
                is_active: slide.is_active,
                show_button: slide.show_button,
            })
            .collect()
    }

    // -------------------------------------------------------------------------
    // Reordering
    // -------------------------------------------------------------------------

    /// Move one slide a single step. Disabled moves return `false` without
    /// any request.
    pub async fn move_slide(&self, id: &str, direction: Direction) -> bool {
        let Some(orders) = move_in_direction(&self.slides(), id, direction) else {
            tracing::debug!(id, ?direction, "Ignoring move past the list edge");
            return false;
        };
        self.submit_order(orders).await
    }

    /// Move the slide at `from` to `to` (0-based positions).
    pub async fn move_to(&self, from: usize, to: usize) -> bool {
        match reorder(&self.slides(), from, to) {
            Some(orders) => self.submit_order(orders).await,
            None => false,
        }
    }

    async fn submit_order(&self, orders: Vec<SlideOrder>) -> bool {
        tracing::debug!(count = orders.len(), "Submitting slide order");
        if !self.management.reorder(&orders).await {
            return false;
        }
        self.store.refetch().await;
        true
    }

    // -------------------------------------------------------------------------
    // Single slide operations
    // -------------------------------------------------------------------------

    pub async fn toggle(&self, id: &str) -> Option<CarouselSlide> {
        let slide = self.management.toggle(id).await?;
        self.store.refetch().await;
        Some(slide)
    }

    pub fn request_delete(&mut self, id: &str) {
        self.pending_delete = Some(id.to_string());
    }

    pub fn pending_delete(&self) -> Option<&str> {
        self.pending_delete.as_deref()
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    pub async fn confirm_delete(&mut self) -> bool {
        let Some(id) = self.pending_delete.take() else {
            return false;
        };
        if !self.management.delete(&id).await {
            return false;
        }
        self.store.refetch().await;
        true
    }

    // -------------------------------------------------------------------------
    // Editor
    // -------------------------------------------------------------------------

    pub fn editor(&self) -> &Editor<SlideForm> {
        &self.editor
    }

    pub fn form_error(&self) -> Option<&str> {
        self.form_error.as_deref()
    }

    pub fn open_create(&mut self) {
        self.form_error = None;
        self.editor = Editor::Creating(SlideForm::blank());
    }

    pub fn open_edit(&mut self, id: &str) -> bool {
        self.form_error = None;
        match self.store.find(id) {
            Some(slide) => {
                self.editor = Editor::Editing {
                    id: id.to_string(),
                    form: SlideForm::from_entity(&slide),
                };
                true
            }
            None => false,
        }
    }

    pub fn edit_form(&mut self, change: impl FnOnce(&mut SlideForm)) {
        match &mut self.editor {
            Editor::Closed => {}
            Editor::Creating(form) | Editor::Editing { form, .. } => change(form),
        }
    }

    pub fn close_editor(&mut self) {
        self.editor = Editor::Closed;
        self.form_error = None;
    }

    /// Validate and send the open form. New slides go to the end of the list.
    pub async fn submit(&mut self) -> Option<CarouselSlide> {
        let form = self.editor.form()?.clone();
        if let Err(e) = form.check() {
            self.form_error = Some(e.user_message());
            return None;
        }
        self.form_error = None;

        let saved = match &self.editor {
            Editor::Creating(_) => {
                let mut payload = form.to_create();
                payload.order = Some(self.store.items().len() as u32 + 1);
                self.management.create(&payload).await
            }
            Editor::Editing { id, .. } => self.management.update(id, &form.to_update()).await,
            Editor::Closed => None,
        };

        match saved {
            Some(slide) => {
                self.editor = Editor::Closed;
                self.store.refetch().await;
                Some(slide)
            }
            None => {
                self.form_error = self.management.error();
                None
            }
        }
    }
}
