//! Backend API gateway client.
//!
//! Single point of outbound HTTP communication:
//! - attaches `Authorization: Bearer <token>` when the session holds one
//! - on any 401 clears the session and navigates to the login view
//! - maps non-success statuses onto [`AppError`]
//! - records request metrics per route template
//!
//! No retries are performed anywhere.

use std::sync::Arc;
use std::time::Instant;

use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::payloads::{ListEnvelope, LoginResponse};
use super::resources::{Resource, Searchable, Slides};
use crate::config::ApiSettings;
use crate::domain::{
    CarouselSlide, ContactRequest, ContactResponse, DeleteImageResponse, ImageInfo, ImageList,
    SessionStore, SessionUser, SlideOrder, UploadedImage,
};
use crate::infrastructure::metrics;
use crate::infrastructure::navigation::{Navigator, LOGIN_ROUTE};
use crate::shared::error::AppError;

const USER_AGENT: &str = concat!("reset-portal/", env!("CARGO_PKG_VERSION"));

pub struct ApiClient {
    http: Client,
    origin: String,
    prefix: String,
    session: Arc<dyn SessionStore>,
    navigator: Arc<dyn Navigator>,
}

impl ApiClient {
    pub fn new(
        settings: &ApiSettings,
        session: Arc<dyn SessionStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, AppError> {
        let http = Client::builder()
            .timeout(settings.timeout())
            .connect_timeout(settings.connect_timeout())
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| AppError::Internal(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            origin: settings.origin().to_string(),
            prefix: normalize_prefix(&settings.path_prefix),
            session,
            navigator,
        })
    }

    /// Backend origin used to resolve relative media URLs.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn session(&self) -> &Arc<dyn SessionStore> {
        &self.session
    }

    pub fn navigator(&self) -> &Arc<dyn Navigator> {
        &self.navigator
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}{}", self.origin, self.prefix, path)
    }

    /// Start a request, attaching the token read from the session right now.
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        match self.session.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Send a request and return the raw body of a successful response.
    async fn execute(
        &self,
        method: Method,
        route: &str,
        builder: RequestBuilder,
    ) -> Result<String, AppError> {
        let started = Instant::now();
        let result = builder.send().await;
        let elapsed = started.elapsed().as_secs_f64();

        let response = match result {
            Ok(response) => response,
            Err(e) => {
                metrics::record_api_request(method.as_str(), route, None, elapsed);
                tracing::warn!(method = %method, route = %route, error = %e, "API request failed");
                return Err(e.into());
            }
        };

        let status = response.status();
        metrics::record_api_request(method.as_str(), route, Some(status.as_u16()), elapsed);
        let body = response.text().await?;

        if status.is_success() {
            tracing::debug!(method = %method, route = %route, status = status.as_u16(), "API request completed");
            return Ok(body);
        }

        if status == StatusCode::UNAUTHORIZED {
            self.expire_session();
        } else {
            tracing::warn!(
                method = %method,
                route = %route,
                status = status.as_u16(),
                "API request rejected"
            );
        }
        Err(AppError::from_status(status, &body))
    }

    fn expire_session(&self) {
        tracing::warn!("Session rejected by backend, clearing stored credentials");
        if let Err(e) = self.session.clear() {
            tracing::error!(error = %e, "Failed to clear session");
        }
        self.navigator.navigate(LOGIN_ROUTE);
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        method: Method,
        route: &str,
        builder: RequestBuilder,
    ) -> Result<T, AppError> {
        let body = self.execute(method, route, builder).await?;
        decode(&body)
    }

    async fn get<T: DeserializeOwned>(&self, route: &str, path: &str) -> Result<T, AppError> {
        let builder = self.request(Method::GET, path);
        self.fetch(Method::GET, route, builder).await
    }

    async fn get_list<T: DeserializeOwned>(
        &self,
        route: &str,
        builder: RequestBuilder,
    ) -> Result<Vec<T>, AppError> {
        let envelope: ListEnvelope<T> = self.fetch(Method::GET, route, builder).await?;
        Ok(envelope.into_items())
    }

    async fn send_json<B, T>(
        &self,
        method: Method,
        route: &str,
        path: &str,
        body: &B,
    ) -> Result<T, AppError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.request(method.clone(), path).json(body);
        self.fetch(method, route, builder).await
    }

    // =========================================================================
    // Auth
    // =========================================================================

    /// `POST /auth/login` with form fields `username` and `password`.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, AppError> {
        let builder = self
            .request(Method::POST, "/auth/login")
            .form(&[("username", email), ("password", password)]);
        self.fetch(Method::POST, "/auth/login", builder).await
    }

    pub async fn me(&self) -> Result<SessionUser, AppError> {
        self.get("/auth/me", "/auth/me").await
    }

    pub async fn logout(&self) -> Result<(), AppError> {
        let builder = self.request(Method::POST, "/auth/logout");
        self.execute(Method::POST, "/auth/logout", builder).await?;
        Ok(())
    }

    // =========================================================================
    // Generic resource CRUD
    // =========================================================================

    pub async fn list<R: Resource>(&self) -> Result<Vec<R::Entity>, AppError> {
        let builder = self.request(Method::GET, R::PATH);
        self.get_list(R::PATH, builder).await
    }

    pub async fn get_one<R: Resource>(&self, id: &str) -> Result<R::Entity, AppError> {
        self.get(R::ITEM_ROUTE, &item_path::<R>(id)).await
    }

    pub async fn create<R: Resource>(&self, payload: &R::Create) -> Result<R::Entity, AppError> {
        self.send_json(Method::POST, R::PATH, R::PATH, payload).await
    }

    pub async fn update<R: Resource>(
        &self,
        id: &str,
        payload: &R::Update,
    ) -> Result<R::Entity, AppError> {
        self.send_json(Method::PUT, R::ITEM_ROUTE, &item_path::<R>(id), payload)
            .await
    }

    pub async fn delete<R: Resource>(&self, id: &str) -> Result<(), AppError> {
        let builder = self.request(Method::DELETE, &item_path::<R>(id));
        self.execute(Method::DELETE, R::ITEM_ROUTE, builder).await?;
        Ok(())
    }

    pub async fn categories<R: Searchable>(&self) -> Result<Vec<String>, AppError> {
        self.get(R::CATEGORIES_ROUTE, R::CATEGORIES_ROUTE).await
    }

    pub async fn search<R: Searchable>(&self, query: &str) -> Result<Vec<R::Entity>, AppError> {
        let builder = self
            .request(Method::GET, R::SEARCH_ROUTE)
            .query(&[("q", query)]);
        self.get_list(R::SEARCH_ROUTE, builder).await
    }

    // =========================================================================
    // Carousel
    // =========================================================================

    /// `GET /carousel/slides/active`
    pub async fn active_slides(&self) -> Result<Vec<CarouselSlide>, AppError> {
        const ROUTE: &str = "/carousel/slides/active";
        let builder = self.request(Method::GET, ROUTE);
        self.get_list(ROUTE, builder).await
    }

    /// `GET /carousel/slides?active_only=<flag>`
    pub async fn list_slides(&self, active_only: bool) -> Result<Vec<CarouselSlide>, AppError> {
        let builder = self
            .request(Method::GET, Slides::PATH)
            .query(&[("active_only", active_only)]);
        self.get_list(Slides::PATH, builder).await
    }

    pub async fn toggle_slide(&self, id: &str) -> Result<CarouselSlide, AppError> {
        let path = format!("{}/toggle", item_path::<Slides>(id));
        let builder = self.request(Method::PATCH, &path);
        self.fetch(Method::PATCH, "/carousel/slides/:id/toggle", builder)
            .await
    }

    /// Submit the complete ordering as `[{id, order}, ...]`.
    pub async fn reorder_slides(&self, orders: &[SlideOrder]) -> Result<(), AppError> {
        const ROUTE: &str = "/carousel/slides/reorder";
        let builder = self.request(Method::POST, ROUTE).json(orders);
        self.execute(Method::POST, ROUTE, builder).await?;
        Ok(())
    }

    // =========================================================================
    // Uploads
    // =========================================================================

    pub async fn upload_image(
        &self,
        filename: &str,
        mime: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadedImage, AppError> {
        const ROUTE: &str = "/uploads/upload-image";
        let part = Part::bytes(bytes)
            .file_name(filename.to_string())
            .mime_str(mime)
            .map_err(|e| AppError::Validation(format!("invalid MIME type '{}': {}", mime, e)))?;
        let form = Form::new().part("file", part);

        let builder = self.request(Method::POST, ROUTE).multipart(form);
        self.fetch(Method::POST, ROUTE, builder).await
    }

    pub async fn list_images(&self) -> Result<Vec<ImageInfo>, AppError> {
        let list: ImageList = self.get("/uploads/images", "/uploads/images").await?;
        Ok(list.images)
    }

    pub async fn delete_image(&self, filename: &str) -> Result<DeleteImageResponse, AppError> {
        let path = format!("/uploads/images/{}", urlencoding::encode(filename));
        let builder = self.request(Method::DELETE, &path);
        let body = self
            .execute(Method::DELETE, "/uploads/images/:filename", builder)
            .await?;
        if body.trim().is_empty() {
            return Ok(DeleteImageResponse {
                success: true,
                message: String::new(),
            });
        }
        decode(&body)
    }

    // =========================================================================
    // Contact
    // =========================================================================

    pub async fn submit_contact(&self, request: &ContactRequest) -> Result<ContactResponse, AppError> {
        const ROUTE: &str = "/contact/contact";
        let builder = self.request(Method::POST, ROUTE).json(request);
        let body = self.execute(Method::POST, ROUTE, builder).await?;
        if body.trim().is_empty() {
            return Ok(ContactResponse::default());
        }
        decode(&body)
    }
}

fn item_path<R: Resource>(id: &str) -> String {
    format!("{}/{}", R::PATH, urlencoding::encode(id))
}

fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, AppError> {
    serde_json::from_str(body).map_err(|e| {
        let preview: String = body.chars().take(200).collect();
        AppError::Decode(format!("{} (body: {})", e, preview))
    })
}
