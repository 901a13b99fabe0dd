//! Carousel Tests

use std::time::Duration;

use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, body_partial_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use reset_portal::application::services::{
    CarouselEngine, CarouselPhase, Editor, ResourceStore, SlideAdmin,
};
use reset_portal::config::CarouselSettings;

use crate::common::*;

fn engine(backend: &TestBackend, settings: &CarouselSettings) -> CarouselEngine {
    CarouselEngine::new(ResourceStore::slides(backend.client.clone(), true), settings)
}

/// Remote slides replace the static ones, sorted, with absolute image URLs
#[tokio::test]
async fn test_mount_shows_remote_slides() {
    let backend = TestBackend::new().await;
    backend
        .respond(
            "GET",
            "/carousel/slides/active",
            200,
            json!([
                slide_json("b", "Segundo", 2),
                slide_json("a", "Primero", 1),
            ]),
        )
        .await;

    let carousel = engine(&backend, &carousel_settings());
    assert_eq!(carousel.views().len(), 3);

    carousel.mount().await;

    assert_eq!(carousel.phase(), CarouselPhase::IdleRemote);
    let views = carousel.views();
    let keys: Vec<&str> = views.iter().map(|v| v.key.as_str()).collect();
    assert_eq!(keys, vec!["a", "b"]);
    assert_eq!(views[0].image_src, format!("{}/uploads/a.png", backend.server.uri()));
    assert_eq!(carousel.active_index(), Some(0));
    assert!(carousel.is_autoplaying());
    assert!(carousel.is_refreshing());

    carousel.unmount();
}

/// An empty list brings the built-in slides back
#[tokio::test]
async fn test_empty_list_shows_static_slides() {
    let backend = TestBackend::new().await;
    backend
        .respond("GET", "/carousel/slides/active", 200, json!([]))
        .await;

    let carousel = engine(&backend, &carousel_settings());
    carousel.mount().await;

    assert_eq!(carousel.phase(), CarouselPhase::IdleStatic);
    assert_eq!(carousel.len(), 3);
    assert_eq!(carousel.views()[0].key, "static-0");

    carousel.unmount();
}

/// Backend failures are not surfaced, the static slides stay
#[tokio::test]
async fn test_fetch_failure_shows_static_slides() {
    let backend = TestBackend::new().await;
    backend
        .respond("GET", "/carousel/slides/active", 500, json!({ "detail": "boom" }))
        .await;

    let carousel = engine(&backend, &carousel_settings());
    carousel.mount().await;

    assert_eq!(carousel.phase(), CarouselPhase::IdleStatic);
    let views = carousel.views();
    assert_eq!(views.len(), 3);
    assert!(views.iter().all(|v| v.call_to_action.is_some()));

    carousel.unmount();
}

/// A shrinking list resets an out of range index
#[tokio::test]
async fn test_refresh_clamps_active_index() {
    let backend = TestBackend::new().await;
    let five: Vec<_> = (1..=5)
        .map(|i| slide_json(&format!("s{}", i), &format!("Slide {}", i), i))
        .collect();
    backend
        .respond("GET", "/carousel/slides/active", 200, json!(five))
        .await;

    let carousel = engine(&backend, &carousel_settings());
    carousel.mount().await;
    carousel.go_to(4);
    assert_eq!(carousel.active_index(), Some(4));

    backend.server.reset().await;
    backend
        .respond(
            "GET",
            "/carousel/slides/active",
            200,
            json!([slide_json("s1", "Slide 1", 1), slide_json("s2", "Slide 2", 2)]),
        )
        .await;
    carousel.refresh().await;

    assert_eq!(carousel.len(), 2);
    assert_eq!(carousel.active_index(), Some(0));
    assert!(carousel.is_autoplaying());

    carousel.unmount();
}

/// Autoplay advances on its own and stops on unmount
#[tokio::test]
async fn test_autoplay_advances_until_unmount() {
    let backend = TestBackend::new().await;
    let five: Vec<_> = (1..=5)
        .map(|i| slide_json(&format!("s{}", i), &format!("Slide {}", i), i))
        .collect();
    backend
        .respond("GET", "/carousel/slides/active", 200, json!(five))
        .await;

    let settings = CarouselSettings {
        autoplay_interval_ms: 50,
        refresh_interval_ms: 60_000,
    };
    let carousel = engine(&backend, &settings);
    carousel.mount().await;

    tokio::time::sleep(Duration::from_millis(130)).await;
    let advanced = carousel.active_index().unwrap();
    assert!(advanced >= 1, "expected autoplay to advance, at {}", advanced);

    carousel.unmount();
    assert!(!carousel.is_autoplaying());
    assert!(!carousel.is_refreshing());

    let frozen = carousel.active_index();
    tokio::time::sleep(Duration::from_millis(120)).await;
    assert_eq!(carousel.active_index(), frozen);
}

/// Manual navigation wraps in both directions
#[tokio::test]
async fn test_manual_navigation_wraps() {
    let backend = TestBackend::new().await;
    backend
        .respond(
            "GET",
            "/carousel/slides/active",
            200,
            json!([slide_json("a", "A", 1), slide_json("b", "B", 2), slide_json("c", "C", 3)]),
        )
        .await;

    let carousel = engine(&backend, &carousel_settings());
    carousel.mount().await;

    carousel.previous();
    assert_eq!(carousel.active_index(), Some(2));
    carousel.next();
    assert_eq!(carousel.active_index(), Some(0));

    let views = carousel.views();
    assert_eq!(views.iter().filter(|v| v.is_active).count(), 1);
    assert_eq!(views[0].opacity, 1.0);
    assert_eq!(views[1].opacity, 0.0);

    carousel.unmount();
}

// =============================================================================
// Slide admin list
// =============================================================================

/// Admin backend listing three slides, every later GET answered the same way.
async fn slides_backend() -> TestBackend {
    let backend = TestBackend::authenticated().await;
    Mock::given(method("GET"))
        .and(path(TestBackend::api("/carousel/slides")))
        .and(query_param("active_only", "false"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            slide_json("a", "A", 1),
            slide_json("b", "B", 2),
            slide_json("c", "C", 3),
        ])))
        .mount(&backend.server)
        .await;
    backend
}

/// Toggle patches one slide and reloads the whole list
#[tokio::test]
async fn test_slide_toggle_refetches() {
    let backend = slides_backend().await;
    let mut inactive = slide_json("b", "B", 2);
    inactive["is_active"] = json!(false);
    Mock::given(method("PATCH"))
        .and(path(TestBackend::api("/carousel/slides/b/toggle")))
        .respond_with(ResponseTemplate::new(200).set_body_json(inactive))
        .expect(1)
        .mount(&backend.server)
        .await;

    let admin = SlideAdmin::new(backend.client.clone());
    admin.mount().await;

    let toggled = admin.toggle("b").await.unwrap();
    assert!(!toggled.is_active);
    assert_eq!(backend.received("GET", "/carousel/slides").await.len(), 2);
    assert_eq!(admin.mutation_state().error, None);
}

/// Delete only goes out after confirmation, then the list reloads
#[tokio::test]
async fn test_slide_delete_after_confirmation() {
    let backend = slides_backend().await;
    Mock::given(method("DELETE"))
        .and(path(TestBackend::api("/carousel/slides/c")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&backend.server)
        .await;

    let mut admin = SlideAdmin::new(backend.client.clone());
    admin.mount().await;

    admin.request_delete("c");
    admin.cancel_delete();
    assert!(!admin.confirm_delete().await);
    assert!(backend.received("DELETE", "/carousel/slides/c").await.is_empty());

    admin.request_delete("c");
    assert!(admin.confirm_delete().await);
    assert_eq!(admin.pending_delete(), None);
    assert_eq!(backend.received("GET", "/carousel/slides").await.len(), 2);
}

/// New slides are appended after the loaded ones
#[tokio::test]
async fn test_new_slide_goes_last() {
    let backend = slides_backend().await;
    Mock::given(method("POST"))
        .and(path(TestBackend::api("/carousel/slides")))
        .and(body_partial_json(json!({
            "title": "Nuevo",
            "image_url": "/uploads/nuevo.png",
            "order": 4,
            "show_button": false
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(slide_json("d", "Nuevo", 4)))
        .expect(1)
        .mount(&backend.server)
        .await;

    let mut admin = SlideAdmin::new(backend.client.clone());
    admin.mount().await;

    admin.open_create();
    admin.edit_form(|form| {
        form.title = "Nuevo".into();
        form.image_url = "/uploads/nuevo.png".into();
        form.button_text = "Ignorado".into();
    });
    let created = admin.submit().await.unwrap();

    assert_eq!(created.order, 4);
    assert_eq!(*admin.editor(), Editor::Closed);
    assert_eq!(backend.received("GET", "/carousel/slides").await.len(), 2);
    let body: serde_json::Value =
        serde_json::from_slice(&backend.received("POST", "/carousel/slides").await[0].body).unwrap();
    assert!(body.get("button_text").is_none());
}

/// Drag-style moves submit the renumbered list
#[tokio::test]
async fn test_move_to_submits_renumbered_list() {
    let backend = slides_backend().await;
    Mock::given(method("POST"))
        .and(path(TestBackend::api("/carousel/slides/reorder")))
        .and(body_json(json!([
            { "id": "b", "order": 1 },
            { "id": "c", "order": 2 },
            { "id": "a", "order": 3 }
        ])))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "ok" })))
        .expect(1)
        .mount(&backend.server)
        .await;

    let admin = SlideAdmin::new(backend.client.clone());
    admin.mount().await;

    assert!(!admin.move_to(0, 7).await);
    assert!(admin.move_to(0, 2).await);
}

/// Failed writes report the fixed copy and leave the list as loaded
#[tokio::test]
async fn test_slide_write_failures_keep_list() {
    let backend = slides_backend().await;
    backend
        .respond("POST", "/carousel/slides/reorder", 500, json!({}))
        .await;
    backend
        .respond("PATCH", "/carousel/slides/a/toggle", 500, json!({}))
        .await;

    let admin = SlideAdmin::new(backend.client.clone());
    admin.mount().await;
    let before = admin.slides();

    assert!(!admin.move_to(2, 0).await);
    assert_eq!(
        admin.mutation_state().error.as_deref(),
        Some("Error al reordenar slides")
    );

    assert!(admin.toggle("a").await.is_none());
    assert_eq!(
        admin.mutation_state().error.as_deref(),
        Some("Error al cambiar estado del slide")
    );
    assert!(!admin.mutation_state().loading);

    assert_eq!(admin.slides(), before);
    assert_eq!(backend.received("GET", "/carousel/slides").await.len(), 1);
}
