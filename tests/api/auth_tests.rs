//! Authentication Tests

use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, ResponseTemplate};

use reset_portal::application::services::{AuthError, AuthService, AuthServiceImpl};
use reset_portal::domain::{SessionStore, TOKEN_KEY, USER_KEY};

use crate::common::*;

fn admin_user() -> serde_json::Value {
    json!({
        "_id": "u1",
        "full_name": "Admin Reset",
        "email": "admin@reset.mx",
        "role": "admin"
    })
}

/// Successful login stores token and user and lands on the dashboard
#[tokio::test]
async fn test_login_stores_session() {
    let backend = TestBackend::new().await;
    Mock::given(method("POST"))
        .and(path(TestBackend::api("/auth/login")))
        .and(body_string_contains("username=admin%40reset.mx"))
        .and(body_string_contains("password=secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "jwt-123",
            "token_type": "bearer",
            "user": admin_user()
        })))
        .expect(1)
        .mount(&backend.server)
        .await;

    let auth = AuthServiceImpl::new(backend.client.clone());
    let session = auth.login("admin@reset.mx", "secret").await.unwrap();

    assert_eq!(session.token, "jwt-123");
    assert_eq!(backend.session.token().as_deref(), Some("jwt-123"));
    assert_eq!(backend.session.user().unwrap().name, "Admin Reset");
    assert_eq!(backend.navigator.current().as_deref(), Some("/admin"));
}

/// A login response without user record falls back to `/auth/me`
#[tokio::test]
async fn test_login_without_user_fetches_me() {
    let backend = TestBackend::new().await;
    backend
        .respond("POST", "/auth/login", 200, json!({ "accessToken": "jwt-456" }))
        .await;
    Mock::given(method("GET"))
        .and(path(TestBackend::api("/auth/me")))
        .and(header("authorization", "Bearer jwt-456"))
        .respond_with(ResponseTemplate::new(200).set_body_json(admin_user()))
        .expect(1)
        .mount(&backend.server)
        .await;

    let auth = AuthServiceImpl::new(backend.client.clone());
    let session = auth.login("admin@reset.mx", "secret").await.unwrap();

    assert_eq!(session.user.unwrap().email, "admin@reset.mx");
    assert!(backend.session.raw(USER_KEY).is_some());
}

/// Rejected credentials surface the fixed message
#[tokio::test]
async fn test_login_with_bad_credentials() {
    let backend = TestBackend::new().await;
    backend
        .respond("POST", "/auth/login", 401, json!({ "detail": "Incorrect email or password" }))
        .await;

    let auth = AuthServiceImpl::new(backend.client.clone());
    let err = auth.login("admin@reset.mx", "wrong").await.unwrap_err();

    assert!(matches!(err, AuthError::InvalidCredentials));
    assert_eq!(err.user_message(), "Credenciales inválidas");
    assert!(!backend.session.is_authenticated());
}

/// Invalid input never reaches the backend
#[tokio::test]
async fn test_login_validates_before_request() {
    let backend = TestBackend::new().await;

    let auth = AuthServiceImpl::new(backend.client.clone());
    let err = auth.login("not-an-email", "secret").await.unwrap_err();

    assert_eq!(err.user_message(), "Correo electrónico inválido");
    assert!(backend.received("POST", "/auth/login").await.is_empty());
}

/// Logout clears local state even when the backend call fails
#[tokio::test]
async fn test_logout_clears_session_on_backend_failure() {
    let backend = TestBackend::authenticated().await;
    backend
        .session
        .set_raw(USER_KEY, &admin_user().to_string());
    backend
        .respond("POST", "/auth/logout", 500, json!({ "detail": "boom" }))
        .await;

    let auth = AuthServiceImpl::new(backend.client.clone());
    auth.logout().await;

    assert_eq!(backend.session.raw(TOKEN_KEY), None);
    assert_eq!(backend.session.raw(USER_KEY), None);
    assert_eq!(backend.received("POST", "/auth/logout").await.len(), 1);
}

/// Every request carries the stored bearer token
#[tokio::test]
async fn test_requests_carry_bearer_token() {
    let backend = TestBackend::authenticated().await;
    Mock::given(method("GET"))
        .and(path(TestBackend::api("/services")))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&backend.server)
        .await;

    let services = backend
        .client
        .list::<reset_portal::infrastructure::http::Services>()
        .await
        .unwrap();
    assert!(services.is_empty());
}

/// Without a token requests go out unauthenticated
#[tokio::test]
async fn test_requests_without_token_have_no_auth_header() {
    let backend = TestBackend::new().await;
    backend.respond("GET", "/products", 200, json!([])).await;

    backend
        .client
        .list::<reset_portal::infrastructure::http::Products>()
        .await
        .unwrap();

    let requests = backend.received("GET", "/products").await;
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("authorization").is_none());
}

/// `current_user` refreshes the stored record
#[tokio::test]
async fn test_current_user() {
    let backend = TestBackend::authenticated().await;
    backend.respond("GET", "/auth/me", 200, admin_user()).await;

    let auth = AuthServiceImpl::new(backend.client.clone());
    let user = auth.current_user().await.unwrap();

    assert_eq!(user.role, "admin");
    assert_eq!(backend.session.user().unwrap().id, "u1");
}
