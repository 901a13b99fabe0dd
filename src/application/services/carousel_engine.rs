//! Carousel Engine
//!
//! Home page slide rotation. The engine merges the remote slide list with
//! the static fallback, advances the active slide on a fixed interval and
//! periodically refreshes the remote list.
//!
//! ## States
//!
//! - `Loading`: mounted, initial fetch in flight
//! - `IdleStatic`: showing the built-in slides (before mount, or when the
//!   backend has no active slides)
//! - `IdleRemote`: showing fetched slides
//!
//! Two timer tasks are owned per mounted engine, autoplay and refresh. Both
//! are aborted on `unmount` or when the last handle is dropped.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::{Mutex, RwLock};
use tokio::task::JoinHandle;
use tokio::time::interval;

use super::resource_store::ResourceStore;
use crate::config::CarouselSettings;
use crate::domain::{CallToAction, CarouselSlide, Slide, STATIC_SLIDES};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselPhase {
    Loading,
    IdleStatic,
    IdleRemote,
}

/// Render data of one slide.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideView {
    pub key: String,
    pub title: String,
    pub description: String,
    pub image_src: String,
    pub alt: String,
    /// 1.0 for the active slide, 0.0 otherwise; renderers cross-fade between them
    pub opacity: f32,
    pub is_active: bool,
    pub call_to_action: Option<CallToAction>,
}

// =============================================================================
// Pure state machine
// =============================================================================

#[derive(Debug, Clone)]
pub struct CarouselState {
    mounted: bool,
    phase: CarouselPhase,
    slides: Vec<Slide>,
    active_index: usize,
}

impl Default for CarouselState {
    fn default() -> Self {
        Self::new()
    }
}

impl CarouselState {
    /// Pre-mount state: the static slides, first one active.
    pub fn new() -> Self {
        Self {
            mounted: false,
            phase: CarouselPhase::IdleStatic,
            slides: static_slides(),
            active_index: 0,
        }
    }

    pub fn phase(&self) -> CarouselPhase {
        self.phase
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// `None` when there is nothing to show.
    pub fn active_index(&self) -> Option<usize> {
        (!self.slides.is_empty()).then_some(self.active_index)
    }

    fn is_idle(&self) -> bool {
        matches!(self.phase, CarouselPhase::IdleStatic | CarouselPhase::IdleRemote)
    }

    pub fn mount(&mut self) {
        self.mounted = true;
        self.phase = CarouselPhase::Loading;
    }

    pub fn unmount(&mut self) {
        self.mounted = false;
    }

    /// Apply a fetched list. A non-empty list replaces the current slides
    /// entirely; an empty one brings back the static slides.
    ///
    /// Returns `true` when the slide count changed.
    pub fn apply_remote(&mut self, remote: Vec<CarouselSlide>) -> bool {
        if !self.mounted {
            return false;
        }
        let before = self.slides.len();

        if remote.is_empty() {
            self.slides = static_slides();
            self.phase = CarouselPhase::IdleStatic;
        } else {
            self.slides = remote.into_iter().map(Slide::Remote).collect();
            self.phase = CarouselPhase::IdleRemote;
        }

        if self.active_index >= self.slides.len() {
            self.active_index = 0;
        }
        before != self.slides.len()
    }

    /// Autoplay step. Only advances while idle with slides to show.
    pub fn tick(&mut self) -> bool {
        if !self.is_idle() || self.slides.is_empty() {
            return false;
        }
        self.active_index = (self.active_index + 1) % self.slides.len();
        true
    }

    pub fn next(&mut self) {
        if !self.slides.is_empty() {
            self.active_index = (self.active_index + 1) % self.slides.len();
        }
    }

    pub fn previous(&mut self) {
        let len = self.slides.len();
        if len > 0 {
            self.active_index = (self.active_index + len - 1) % len;
        }
    }

    /// Jump to a slide; out of range indices wrap around.
    pub fn go_to(&mut self, index: usize) {
        if !self.slides.is_empty() {
            self.active_index = index % self.slides.len();
        }
    }

    /// Render data for every slide. Empty while the initial load is pending.
    pub fn views(&self) -> Vec<SlideView> {
        if self.phase == CarouselPhase::Loading {
            return Vec::new();
        }
        self.slides
            .iter()
            .enumerate()
            .map(|(i, slide)| {
                let is_active = i == self.active_index;
                SlideView {
                    key: slide.key(i),
                    title: slide.title().to_string(),
                    description: slide.description().to_string(),
                    image_src: slide.image_src().to_string(),
                    alt: slide.alt().to_string(),
                    opacity: if is_active { 1.0 } else { 0.0 },
                    is_active,
                    call_to_action: slide.call_to_action(),
                }
            })
            .collect()
    }
}

fn static_slides() -> Vec<Slide> {
    STATIC_SLIDES.iter().cloned().map(Slide::Static).collect()
}

// =============================================================================
// Timer-driven engine
// =============================================================================

struct EngineInner {
    state: RwLock<CarouselState>,
    store: ResourceStore<CarouselSlide>,
    autoplay_interval: Duration,
    refresh_interval: Duration,
    autoplay: Mutex<Option<JoinHandle<()>>>,
    refresh: Mutex<Option<JoinHandle<()>>>,
}

impl EngineInner {
    fn abort_tasks(&self) {
        if let Some(handle) = self.autoplay.lock().take() {
            handle.abort();
        }
        if let Some(handle) = self.refresh.lock().take() {
            handle.abort();
        }
    }

    /// Apply the store's first load and start autoplay.
    fn reload_initial(self: &Arc<Self>) {
        let slides = self.store.items();
        self.state.write().apply_remote(slides);
        self.restart_autoplay();
    }

    /// Refetch through the store and apply the result.
    async fn reload(self: &Arc<Self>) {
        self.store.refetch().await;
        let slides = self.store.items();

        let changed = {
            let mut state = self.state.write();
            if !state.is_mounted() {
                return;
            }
            state.apply_remote(slides)
        };

        {
            let state = self.state.read();
            tracing::debug!(
                slide_count = state.len(),
                phase = ?state.phase(),
                "Carousel slides applied"
            );
        }

        // Autoplay follows the slide count
        if changed || self.autoplay.lock().is_none() {
            self.restart_autoplay();
        }
    }

    fn restart_autoplay(self: &Arc<Self>) {
        let mut slot = self.autoplay.lock();
        if let Some(handle) = slot.take() {
            handle.abort();
        }

        let (mounted, len) = {
            let state = self.state.read();
            (state.is_mounted(), state.len())
        };
        if !mounted || len == 0 {
            return;
        }

        let weak = Arc::downgrade(self);
        let period = self.autoplay_interval;
        *slot = Some(tokio::spawn(async move {
            let mut ticker = interval(period);
            ticker.tick().await; // Skip first immediate tick

            loop {
                ticker.tick().await;
                let Some(inner) = weak.upgrade() else { break };
                inner.state.write().tick();
            }
        }));
    }

    fn start_refresh(self: &Arc<Self>) {
        let weak = Arc::downgrade(self);
        let period = self.refresh_interval;
        let handle = tokio::spawn(async move {
            let mut ticker = interval(period);
            ticker.tick().await; // Skip first immediate tick

            loop {
                ticker.tick().await;
                let Some(inner) = weak.upgrade() else { break };
                tracing::debug!("Refreshing carousel slides");
                inner.reload().await;
            }
        });

        if let Some(previous) = self.refresh.lock().replace(handle) {
            previous.abort();
        }
    }
}

impl Drop for EngineInner {
    fn drop(&mut self) {
        self.store.unmount();
        self.abort_tasks();
    }
}

/// Handle to a carousel instance.
pub struct CarouselEngine {
    inner: Arc<EngineInner>,
}

impl CarouselEngine {
    /// Engine over an active-slides store.
    pub fn new(store: ResourceStore<CarouselSlide>, settings: &CarouselSettings) -> Self {
        Self {
            inner: Arc::new(EngineInner {
                state: RwLock::new(CarouselState::new()),
                store,
                autoplay_interval: settings.autoplay_interval(),
                refresh_interval: settings.refresh_interval(),
                autoplay: Mutex::new(None),
                refresh: Mutex::new(None),
            }),
        }
    }

    /// Mount: fetch slides, then start autoplay and background refresh.
    pub async fn mount(&self) {
        self.inner.state.write().mount();
        self.inner.store.mount().await;

        if !self.inner.state.read().is_mounted() {
            return;
        }
        self.inner.reload_initial();
        self.inner.start_refresh();
        tracing::info!(slide_count = self.len(), "Carousel mounted");
    }

    /// Stop both timers and ignore any late fetch result.
    pub fn unmount(&self) {
        self.inner.state.write().unmount();
        self.inner.store.unmount();
        self.inner.abort_tasks();
        tracing::debug!("Carousel unmounted");
    }

    /// Force a refresh outside the regular interval.
    pub async fn refresh(&self) {
        self.inner.reload().await;
    }

    pub fn next(&self) {
        self.inner.state.write().next();
    }

    pub fn previous(&self) {
        self.inner.state.write().previous();
    }

    pub fn go_to(&self, index: usize) {
        self.inner.state.write().go_to(index);
    }

    pub fn snapshot(&self) -> CarouselState {
        self.inner.state.read().clone()
    }

    pub fn phase(&self) -> CarouselPhase {
        self.inner.state.read().phase()
    }

    pub fn active_index(&self) -> Option<usize> {
        self.inner.state.read().active_index()
    }

    pub fn len(&self) -> usize {
        self.inner.state.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn views(&self) -> Vec<SlideView> {
        self.inner.state.read().views()
    }

    /// Whether the autoplay timer is currently scheduled.
    pub fn is_autoplaying(&self) -> bool {
        self.inner
            .autoplay
            .lock()
            .as_ref()
            .is_some_and(|h| !h.is_finished())
    }

    pub fn is_refreshing(&self) -> bool {
        self.inner
            .refresh
            .lock()
            .as_ref()
            .is_some_and(|h| !h.is_finished())
    }
}

impl Drop for CarouselEngine {
    fn drop(&mut self) {
        // Timer tasks only hold weak references, so this is the last strong one
        // unless a refresh is mid-flight.
        self.inner.abort_tasks();
    }
}
