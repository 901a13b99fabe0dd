//! Application Startup
//!
//! Wires settings, the session store, the navigator and the API client,
//! and hands out the screen models built on top of them.

use std::sync::Arc;

use anyhow::Result;

use crate::application::services::{
    AuthGate, AuthServiceImpl, CarouselEngine, ContactService, MediaService, ProductsScreen,
    PublicCatalog, ResourceStore, ServicesScreen, SlideAdmin,
};
use crate::config::Settings;
use crate::domain::{Product, Service, SessionStore};
use crate::infrastructure::http::ApiClient;
use crate::infrastructure::navigation::{Navigator, RecordingNavigator};
use crate::infrastructure::session::FileSessionStore;
use crate::presentation::cli::{self, Cli};

/// Application instance
pub struct Application {
    settings: Arc<Settings>,
    client: Arc<ApiClient>,
    session: Arc<dyn SessionStore>,
    navigator: Arc<RecordingNavigator>,
}

impl Application {
    /// Build the application from settings
    pub fn build(settings: Settings) -> Result<Self> {
        let session: Arc<dyn SessionStore> =
            Arc::new(FileSessionStore::new(settings.session.storage_path.clone()));
        tracing::debug!(path = %settings.session.storage_path.display(), "Session store ready");

        Self::with_session(settings, session)
    }

    /// Build with an explicit session store.
    pub fn with_session(settings: Settings, session: Arc<dyn SessionStore>) -> Result<Self> {
        let navigator = Arc::new(RecordingNavigator::new());
        let client = Arc::new(ApiClient::new(
            &settings.api,
            session.clone(),
            navigator.clone() as Arc<dyn Navigator>,
        )?);
        tracing::info!(origin = %client.origin(), "API client created");

        Ok(Self {
            settings: Arc::new(settings),
            client,
            session,
            navigator,
        })
    }

    /// Run one console command
    pub async fn run(&self, cli: Cli) -> Result<()> {
        cli::handlers::dispatch(self, cli).await
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn client(&self) -> &Arc<ApiClient> {
        &self.client
    }

    pub fn session(&self) -> &Arc<dyn SessionStore> {
        &self.session
    }

    pub fn navigator(&self) -> &Arc<RecordingNavigator> {
        &self.navigator
    }

    // =========================================================================
    // Screen models
    // =========================================================================

    pub fn auth_service(&self) -> AuthServiceImpl {
        AuthServiceImpl::new(self.client.clone())
    }

    pub fn auth_gate(&self) -> AuthGate {
        AuthGate::new(
            self.session.clone(),
            self.navigator.clone() as Arc<dyn Navigator>,
        )
    }

    pub fn services_screen(&self) -> ServicesScreen {
        ServicesScreen::new(self.client.clone())
    }

    pub fn products_screen(&self) -> ProductsScreen {
        ProductsScreen::new(self.client.clone())
    }

    pub fn public_services(&self) -> PublicCatalog<Service> {
        PublicCatalog::new(ResourceStore::services(self.client.clone()))
    }

    pub fn public_products(&self) -> PublicCatalog<Product> {
        PublicCatalog::new(ResourceStore::products(self.client.clone()))
    }

    pub fn slide_admin(&self) -> SlideAdmin {
        SlideAdmin::new(self.client.clone())
    }

    pub fn carousel_engine(&self) -> CarouselEngine {
        CarouselEngine::new(
            ResourceStore::slides(self.client.clone(), true),
            &self.settings.carousel,
        )
    }

    pub fn media_service(&self) -> MediaService {
        MediaService::new(self.client.clone())
    }

    pub fn contact_service(&self) -> ContactService {
        ContactService::new(self.client.clone(), self.settings.site.clone())
    }
}
