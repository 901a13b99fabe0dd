//! End-to-end Dashboard Scenarios

use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use reset_portal::application::services::{ProductsScreen, ServicesScreen, SlideAdmin};
use reset_portal::domain::services::Direction;
use reset_portal::domain::{SessionStore, USER_KEY};
use reset_portal::shared::error::SESSION_EXPIRED_MESSAGE;

use crate::common::*;

/// Creating a product with no stock shows it as out of stock
#[tokio::test]
async fn test_create_product_without_stock() {
    let backend = TestBackend::authenticated().await;
    let existing = product_json("p1", "Router", 350000.0, 10);
    let created = product_json("p2", "Switch 24p", 900000.0, 0);

    Mock::given(method("GET"))
        .and(path(TestBackend::api("/products")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([existing.clone()])))
        .up_to_n_times(1)
        .mount(&backend.server)
        .await;
    Mock::given(method("GET"))
        .and(path(TestBackend::api("/products")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([existing, created.clone()])))
        .mount(&backend.server)
        .await;
    backend.respond("POST", "/products", 201, created).await;

    let mut screen = ProductsScreen::new(backend.client.clone());
    screen.mount().await;
    let before = screen.stats();

    screen.open_create();
    screen.edit_form(|form| {
        form.name = "Switch 24p".into();
        form.description = "Switch administrable".into();
        form.category = "informatica".into();
        form.price = 900000.0;
        form.stock = 0;
    });
    let saved = screen.submit().await.unwrap();
    assert_eq!(saved.stock, 0);

    let row = screen.rows().into_iter().find(|r| r.id == "p2").unwrap();
    assert_eq!(row.stock_label, Some("Sin stock"));
    assert_eq!(screen.stats().out_of_stock, before.out_of_stock + 1);
    assert_eq!(screen.stats().total, 2);
}

/// An expired token logs the admin out from any screen
#[tokio::test]
async fn test_expired_session_redirects_to_login() {
    let backend = TestBackend::authenticated().await;
    backend
        .session
        .set_raw(USER_KEY, r#"{"id":"u1","name":"Admin","email":"a@reset.mx","role":"admin"}"#);
    backend
        .respond("GET", "/products", 401, json!({ "detail": "Token expired" }))
        .await;

    let screen = ProductsScreen::new(backend.client.clone());
    screen.mount().await;

    assert_eq!(backend.session.token(), None);
    assert_eq!(backend.session.raw(USER_KEY), None);
    assert_eq!(backend.navigator.current().as_deref(), Some("/login"));
    assert_eq!(screen.list_state().error.as_deref(), Some("Error al cargar productos"));
}

/// Writes rejected with 401 log the admin out and report the expired session
#[tokio::test]
async fn test_expired_session_during_writes() {
    let backend = TestBackend::authenticated().await;
    backend
        .session
        .set_raw(USER_KEY, r#"{"id":"u1","name":"Admin","email":"a@reset.mx","role":"admin"}"#);
    backend
        .respond("GET", "/products", 200, json!([product_json("p1", "Router", 350000.0, 10)]))
        .await;
    let expired = json!({ "detail": "Token expired" });
    backend.respond("POST", "/products", 401, expired.clone()).await;
    backend.respond("PUT", "/products/p1", 401, expired.clone()).await;
    backend.respond("DELETE", "/products/p1", 401, expired).await;

    let mut screen = ProductsScreen::new(backend.client.clone());
    screen.mount().await;

    screen.open_create();
    screen.edit_form(|form| {
        form.name = "Switch 24p".into();
        form.description = "Switch administrable".into();
        form.category = "informatica".into();
        form.price = 900000.0;
    });
    assert!(screen.submit().await.is_none());

    assert_eq!(backend.session.token(), None);
    assert_eq!(backend.session.raw(USER_KEY), None);
    assert_eq!(backend.navigator.current().as_deref(), Some("/login"));
    assert_eq!(screen.mutation_state().error.as_deref(), Some(SESSION_EXPIRED_MESSAGE));
    assert_eq!(screen.form_error(), Some(SESSION_EXPIRED_MESSAGE));
    assert!(screen.editor().is_open());

    assert!(screen.toggle_active("p1").await.is_none());
    assert_eq!(screen.mutation_state().error.as_deref(), Some(SESSION_EXPIRED_MESSAGE));

    screen.request_delete("p1");
    assert!(!screen.confirm_delete().await);
    assert_eq!(screen.mutation_state().error.as_deref(), Some(SESSION_EXPIRED_MESSAGE));
    assert!(!screen.mutation_state().loading);

    assert_eq!(backend.navigator.current().as_deref(), Some("/login"));
    assert_eq!(backend.received("GET", "/products").await.len(), 1);
    assert_eq!(screen.list_state().items.len(), 1);
}

/// Deactivating a service shows it as inactive after the reload
#[tokio::test]
async fn test_toggle_service_then_refetch() {
    let backend = TestBackend::authenticated().await;
    Mock::given(method("GET"))
        .and(path(TestBackend::api("/services")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([service_json("s1", "Alarmas", 450000.0, true)])),
        )
        .up_to_n_times(1)
        .mount(&backend.server)
        .await;
    Mock::given(method("GET"))
        .and(path(TestBackend::api("/services")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([service_json("s1", "Alarmas", 450000.0, false)])),
        )
        .mount(&backend.server)
        .await;
    Mock::given(method("PUT"))
        .and(path(TestBackend::api("/services/s1")))
        .and(body_json(json!({ "is_active": false })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(service_json("s1", "Alarmas", 450000.0, false)),
        )
        .expect(1)
        .mount(&backend.server)
        .await;

    let screen = ServicesScreen::new(backend.client.clone());
    screen.mount().await;
    assert_eq!(screen.rows()[0].status, "Activo");

    screen.toggle_active("s1").await.unwrap();

    assert_eq!(screen.rows()[0].status, "Inactivo");
    assert_eq!(screen.stats().inactive, 1);
}

/// Moving the third of five slides up submits the whole new ordering
#[tokio::test]
async fn test_move_slide_up_submits_full_order() {
    let backend = TestBackend::authenticated().await;
    let slides: Vec<_> = ["a", "b", "c", "d", "e"]
        .iter()
        .zip(1..)
        .map(|(id, order)| slide_json(id, &id.to_uppercase(), order))
        .collect();

    Mock::given(method("GET"))
        .and(path(TestBackend::api("/carousel/slides")))
        .and(query_param("active_only", "false"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(slides)))
        .mount(&backend.server)
        .await;
    Mock::given(method("POST"))
        .and(path(TestBackend::api("/carousel/slides/reorder")))
        .and(body_json(json!([
            { "id": "a", "order": 1 },
            { "id": "c", "order": 2 },
            { "id": "b", "order": 3 },
            { "id": "d", "order": 4 },
            { "id": "e", "order": 5 }
        ])))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "ok" })))
        .expect(1)
        .mount(&backend.server)
        .await;

    let admin = SlideAdmin::new(backend.client.clone());
    admin.mount().await;

    let rows = admin.rows();
    assert!(!rows[0].can_move_up);
    assert!(!rows[4].can_move_down);

    assert!(!admin.move_slide("a", Direction::Up).await);
    assert!(admin.move_slide("c", Direction::Up).await);
    assert_eq!(backend.received("GET", "/carousel/slides").await.len(), 2);
}
