//! Services and Products Dashboard Tests

use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, ResponseTemplate};

use reset_portal::application::services::{
    Editor, ProductsScreen, PublicCatalog, ResourceStore, ServicesScreen, WritePolicy,
};
use reset_portal::domain::services::{PriceRange, SortKey};
use reset_portal::domain::{fallback_services, SessionStore};

use crate::common::*;

async fn services_backend() -> TestBackend {
    let backend = TestBackend::authenticated().await;
    backend
        .respond(
            "GET",
            "/services",
            200,
            json!([
                service_json("s1", "Cámaras de seguridad", 850000.0, true),
                service_json("s2", "Aire acondicionado", 1200000.0, true),
                service_json("s3", "Alarmas", 450000.0, false),
            ]),
        )
        .await;
    backend
}

/// Mounting loads the list and clears the loading flag
#[tokio::test]
async fn test_mount_loads_services() {
    let backend = services_backend().await;
    let screen = ServicesScreen::new(backend.client.clone());
    assert!(screen.list_state().loading);

    screen.mount().await;

    let state = screen.list_state();
    assert!(!state.loading);
    assert_eq!(state.error, None);
    assert_eq!(state.items.len(), 3);
}

/// Search narrows the view, sort orders it, stats ignore both
#[tokio::test]
async fn test_search_sort_and_stats() {
    let backend = services_backend().await;
    let mut screen = ServicesScreen::new(backend.client.clone());
    screen.mount().await;

    screen.set_sort(SortKey::Name);
    let names: Vec<String> = screen.visible().into_iter().map(|s| s.name).collect();
    assert_eq!(names, vec!["Aire acondicionado", "Alarmas", "Cámaras de seguridad"]);

    screen.set_sort(SortKey::PriceDesc);
    let ids: Vec<String> = screen.visible().into_iter().map(|s| s.id).collect();
    assert_eq!(ids, vec!["s2", "s1", "s3"]);

    screen.set_search("CÁMARAS");
    assert_eq!(screen.visible().len(), 1);

    let stats = screen.stats();
    assert_eq!(stats.total, 3);
    assert_eq!(stats.active, 2);
    assert_eq!(stats.inactive, 1);
}

/// Load failures fall back to the built-in dataset
#[tokio::test]
async fn test_load_failure_uses_fallback() {
    let backend = TestBackend::authenticated().await;
    backend
        .respond("GET", "/services", 500, json!({ "detail": "db down" }))
        .await;

    let screen = ServicesScreen::new(backend.client.clone());
    screen.mount().await;

    let state = screen.list_state();
    assert_eq!(state.error.as_deref(), Some("Error al cargar servicios"));
    assert_eq!(state.items, fallback_services());
}

/// Paginated envelopes are unwrapped
#[tokio::test]
async fn test_list_envelope_is_accepted() {
    let backend = TestBackend::authenticated().await;
    backend
        .respond(
            "GET",
            "/products",
            200,
            json!({ "items": [product_json("p1", "Router", 350000.0, 3)], "total": 1 }),
        )
        .await;

    let screen = ProductsScreen::new(backend.client.clone());
    screen.mount().await;

    assert_eq!(screen.list_state().items.len(), 1);
    assert_eq!(screen.rows()[0].stock_label, Some("Stock bajo"));
}

/// Required fields are checked before anything is sent
#[tokio::test]
async fn test_submit_requires_name_description_category() {
    let backend = services_backend().await;
    let mut screen = ServicesScreen::new(backend.client.clone());

    screen.open_create();
    screen.edit_form(|form| form.name = "Cerco eléctrico".into());

    assert!(screen.submit().await.is_none());
    assert_eq!(screen.form_error(), Some("La categoría es obligatoria"));
    assert!(screen.editor().is_open());
    assert!(backend.received("POST", "/services").await.is_empty());
}

/// Editing sends the full form and refetches afterwards
#[tokio::test]
async fn test_edit_submits_and_refetches() {
    let backend = services_backend().await;
    Mock::given(method("PUT"))
        .and(path(TestBackend::api("/services/s1")))
        .and(body_partial_json(json!({
            "name": "Cámaras HD",
            "category": "seguridad",
            "features": ["Garantía", "Instalación"]
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(service_json("s1", "Cámaras HD", 850000.0, true)),
        )
        .expect(1)
        .mount(&backend.server)
        .await;

    let mut screen = ServicesScreen::new(backend.client.clone());
    screen.mount().await;

    assert!(screen.open_edit("s1"));
    screen.edit_form(|form| {
        form.name = "Cámaras HD".into();
        form.features.add("Instalación");
        form.features.add(" Garantía ");
    });

    let saved = screen.submit().await.unwrap();
    assert_eq!(saved.name, "Cámaras HD");
    assert_eq!(*screen.editor(), Editor::Closed);
    assert_eq!(backend.received("GET", "/services").await.len(), 2);
}

/// Server-side validation detail is shown inline and the list is untouched
#[tokio::test]
async fn test_rejected_write_keeps_list() {
    let backend = services_backend().await;
    backend
        .respond(
            "POST",
            "/services",
            422,
            json!({ "detail": [{ "loc": ["body", "price"], "msg": "El precio es inválido" }] }),
        )
        .await;

    let mut screen = ServicesScreen::new(backend.client.clone());
    screen.mount().await;
    screen.open_create();
    screen.edit_form(|form| {
        form.name = "Redes".into();
        form.description = "Cableado estructurado".into();
        form.category = "informatica".into();
    });

    assert!(screen.submit().await.is_none());
    assert_eq!(screen.form_error(), Some("El precio es inválido"));
    assert_eq!(screen.mutation_state().error.as_deref(), Some("El precio es inválido"));
    assert_eq!(screen.list_state().items.len(), 3);
}

/// Deletion needs an explicit confirmation
#[tokio::test]
async fn test_delete_requires_confirmation() {
    let backend = services_backend().await;
    Mock::given(method("DELETE"))
        .and(path(TestBackend::api("/services/s3")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&backend.server)
        .await;

    let mut screen = ServicesScreen::new(backend.client.clone());
    screen.mount().await;

    assert!(!screen.confirm_delete().await);

    screen.request_delete("s3");
    screen.cancel_delete();
    assert!(!screen.confirm_delete().await);

    screen.request_delete("s3");
    assert_eq!(screen.pending_delete(), Some("s3"));
    assert!(screen.confirm_delete().await);
    assert_eq!(backend.received("GET", "/services").await.len(), 2);
}

/// Merge policy folds the returned entity in without reloading
#[tokio::test]
async fn test_merge_policy_skips_refetch() {
    let backend = services_backend().await;
    backend
        .respond(
            "PUT",
            "/services/s2",
            200,
            service_json("s2", "Aire acondicionado", 1200000.0, false),
        )
        .await;

    let screen = ServicesScreen::new(backend.client.clone()).with_policy(WritePolicy::Merge);
    screen.mount().await;

    let updated = screen.toggle_active("s2").await.unwrap();
    assert!(!updated.is_active);
    assert!(!screen.store().find("s2").unwrap().is_active);
    assert_eq!(backend.received("GET", "/services").await.len(), 1);
}

/// Public listing only shows active items of the chosen category
#[tokio::test]
async fn test_public_catalog_filters() {
    let backend = services_backend().await;
    let mut catalog = PublicCatalog::new(ResourceStore::services(backend.client.clone()));
    catalog.mount().await;

    let names: Vec<String> = catalog.visible().into_iter().map(|s| s.name).collect();
    assert_eq!(names, vec!["Aire acondicionado", "Cámaras de seguridad"]);

    catalog.set_price_range(PriceRange::From500kTo1m);
    let names: Vec<String> = catalog.visible().into_iter().map(|s| s.name).collect();
    assert_eq!(names, vec!["Cámaras de seguridad"]);

    catalog.set_price_range(PriceRange::Any);
    catalog.set_category("climatizacion");
    assert!(catalog.visible().is_empty());
}

/// Categories and search endpoints
#[tokio::test]
async fn test_categories_and_search() {
    let backend = TestBackend::authenticated().await;
    backend
        .respond("GET", "/products/categories", 200, json!(["informatica", "seguridad"]))
        .await;
    Mock::given(method("GET"))
        .and(path(TestBackend::api("/products/search")))
        .and(wiremock::matchers::query_param("q", "router wifi"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([product_json("p9", "Router WiFi", 1.0, 9)])),
        )
        .mount(&backend.server)
        .await;

    use reset_portal::infrastructure::http::Products;
    let categories = backend.client.categories::<Products>().await.unwrap();
    assert_eq!(categories, vec!["informatica", "seguridad"]);

    let found = backend.client.search::<Products>("router wifi").await.unwrap();
    assert_eq!(found[0].id, "p9");
    assert!(backend.session.is_authenticated());
}
