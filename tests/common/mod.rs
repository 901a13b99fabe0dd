//! Common Test Utilities
//!
//! A wiremock backend plus the client wiring the screens need.

use std::sync::Arc;

use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use reset_portal::config::{ApiSettings, CarouselSettings};
use reset_portal::domain::SessionStore;
use reset_portal::infrastructure::http::ApiClient;
use reset_portal::infrastructure::navigation::{Navigator, RecordingNavigator};
use reset_portal::infrastructure::session::MemorySessionStore;

pub const API_PREFIX: &str = "/api/v1";

pub const TEST_TOKEN: &str = "test-token";

/// Test backend with a client pointed at it
pub struct TestBackend {
    pub server: MockServer,
    pub session: Arc<MemorySessionStore>,
    pub navigator: Arc<RecordingNavigator>,
    pub client: Arc<ApiClient>,
}

impl TestBackend {
    /// Backend with no stored session
    pub async fn new() -> Self {
        Self::with_session(MemorySessionStore::new()).await
    }

    /// Backend with a logged in admin
    pub async fn authenticated() -> Self {
        Self::with_session(MemorySessionStore::with_token(TEST_TOKEN)).await
    }

    async fn with_session(session: MemorySessionStore) -> Self {
        let server = MockServer::start().await;
        let session = Arc::new(session);
        let navigator = Arc::new(RecordingNavigator::new());

        let settings = ApiSettings {
            base_url: server.uri(),
            path_prefix: API_PREFIX.to_string(),
            timeout_secs: 5,
            connect_timeout_secs: 2,
        };
        let client = Arc::new(
            ApiClient::new(
                &settings,
                session.clone() as Arc<dyn SessionStore>,
                navigator.clone() as Arc<dyn Navigator>,
            )
            .expect("client should build"),
        );

        Self {
            server,
            session,
            navigator,
            client,
        }
    }

    /// Full path under the API prefix
    pub fn api(route: &str) -> String {
        format!("{}{}", API_PREFIX, route)
    }

    /// Answer `verb route` with a JSON body
    pub async fn respond(&self, verb: &str, route: &str, status: u16, body: Value) {
        Mock::given(method(verb))
            .and(path(Self::api(route)))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Requests received for `verb route`
    pub async fn received(&self, verb: &str, route: &str) -> Vec<wiremock::Request> {
        let full = Self::api(route);
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .into_iter()
            .filter(|r| r.method.as_str() == verb && r.url.path() == full)
            .collect()
    }
}

pub fn carousel_settings() -> CarouselSettings {
    CarouselSettings {
        autoplay_interval_ms: 5_000,
        refresh_interval_ms: 30_000,
    }
}

// =============================================================================
// Fixtures
// =============================================================================

pub fn service_json(id: &str, name: &str, price: f64, is_active: bool) -> Value {
    json!({
        "id": id,
        "name": name,
        "description": format!("Descripción de {}", name),
        "price": price,
        "category": "seguridad",
        "icon": "shield",
        "is_active": is_active,
        "estimated_duration": 120,
        "features": ["Garantía"],
        "created_at": "2024-01-01T00:00:00Z"
    })
}

pub fn product_json(id: &str, name: &str, price: f64, stock: u32) -> Value {
    json!({
        "id": id,
        "name": name,
        "description": format!("Descripción de {}", name),
        "price": price,
        "category": "informatica",
        "icon": "monitor",
        "is_active": true,
        "stock": stock,
        "features": []
    })
}

pub fn slide_json(id: &str, title: &str, order: u32) -> Value {
    json!({
        "_id": id,
        "title": title,
        "description": "",
        "image_url": format!("/uploads/{}.png", id),
        "show_button": false,
        "order": order,
        "is_active": true
    })
}
