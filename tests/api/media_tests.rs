//! Upload and Contact Tests

use fake::faker::name::en::Name;
use fake::faker::phone_number::en::PhoneNumber;
use fake::Fake;
use pretty_assertions::assert_eq;
use serde_json::json;
use tokio_test::{assert_err, assert_ok};
use wiremock::matchers::{body_json, body_string_contains, method, path};
use wiremock::{Mock, ResponseTemplate};

use reset_portal::application::dto::ContactForm;
use reset_portal::application::services::{ContactService, ImageFile, MediaService};
use reset_portal::config::SiteSettings;

use crate::common::*;

fn site() -> SiteSettings {
    SiteSettings {
        whatsapp_number: "+52 993 208 5300".into(),
        whatsapp_message: "Hola".into(),
    }
}

// =============================================================================
// Uploads
// =============================================================================

/// Unsupported types are rejected locally
#[tokio::test]
async fn test_upload_rejects_type_before_request() {
    let backend = TestBackend::authenticated().await;
    let media = MediaService::new(backend.client.clone());

    let file = ImageFile::new("anim.gif", "image/gif", vec![0u8; 16]);
    assert_err!(media.upload(file).await);

    assert_eq!(
        media.state().error.as_deref(),
        Some("Tipo de archivo no válido. Solo se permiten JPG, PNG y WebP.")
    );
    assert!(backend.received("POST", "/uploads/upload-image").await.is_empty());
}

/// Oversized files are rejected locally
#[tokio::test]
async fn test_upload_rejects_size_before_request() {
    let backend = TestBackend::authenticated().await;
    let media = MediaService::new(backend.client.clone());

    let file = ImageFile::new("big.png", "image/png", vec![0u8; 5 * 1024 * 1024 + 1]);
    assert_err!(media.upload(file).await);

    assert_eq!(
        media.state().error.as_deref(),
        Some("El archivo es demasiado grande. Tamaño máximo: 5MB.")
    );
    assert!(backend.received("POST", "/uploads/upload-image").await.is_empty());
}

/// Accepted uploads come back with an absolute URL
#[tokio::test]
async fn test_upload_returns_absolute_url() {
    let backend = TestBackend::authenticated().await;
    Mock::given(method("POST"))
        .and(path(TestBackend::api("/uploads/upload-image")))
        .and(body_string_contains("name=\"file\""))
        .and(body_string_contains("filename=\"banner.png\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "filename": "a1b2.png",
            "url": "/uploads/a1b2.png",
            "size": 4
        })))
        .expect(1)
        .mount(&backend.server)
        .await;

    let media = MediaService::new(backend.client.clone());
    let uploaded = assert_ok!(
        media
            .upload(ImageFile::new("banner.png", "image/png", vec![1, 2, 3, 4]))
            .await
    );

    let expected = format!("{}/uploads/a1b2.png", backend.server.uri());
    assert_eq!(uploaded.url, expected);
    let state = media.state();
    assert!(!state.uploading);
    assert_eq!(state.error, None);
    assert_eq!(state.last_url, Some(expected));
}

/// Server rejections keep their detail
#[tokio::test]
async fn test_upload_failure_keeps_detail() {
    let backend = TestBackend::authenticated().await;
    backend
        .respond("POST", "/uploads/upload-image", 413, json!({ "detail": "Archivo muy grande" }))
        .await;

    let media = MediaService::new(backend.client.clone());
    assert_err!(
        media
            .upload(ImageFile::new("a.jpg", "image/jpeg", vec![0u8; 8]))
            .await
    );
    assert_eq!(media.state().error.as_deref(), Some("Archivo muy grande"));
}

/// Image listing is newest first with absolute URLs
#[tokio::test]
async fn test_list_images() {
    let backend = TestBackend::authenticated().await;
    backend
        .respond(
            "GET",
            "/uploads/images",
            200,
            json!({ "images": [
                { "filename": "old.png", "url": "/uploads/old.png", "size": 10, "created": 1_600_000_000.0 },
                { "filename": "new.png", "url": "https://cdn.reset.mx/new.png", "size": 20, "created": 1_700_000_000.0 }
            ]}),
        )
        .await;

    let media = MediaService::new(backend.client.clone());
    let images = media.list_images().await.unwrap();

    assert_eq!(images[0].url, "https://cdn.reset.mx/new.png");
    assert_eq!(images[1].url, format!("{}/uploads/old.png", backend.server.uri()));
}

/// Deleting percent-encodes the file name
#[tokio::test]
async fn test_delete_image() {
    let backend = TestBackend::authenticated().await;
    Mock::given(method("DELETE"))
        .and(path(TestBackend::api("/uploads/images/mi%20foto.png")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "success": true, "message": "ok" })),
        )
        .expect(1)
        .mount(&backend.server)
        .await;

    let media = MediaService::new(backend.client.clone());
    let response = media.delete_image("mi foto.png").await.unwrap();
    assert!(response.success);
}

// =============================================================================
// Contact
// =============================================================================

/// Successful submissions without a server message use the default copy
#[tokio::test]
async fn test_contact_success_default_message() {
    let backend = TestBackend::new().await;
    let name: String = Name().fake();
    let phone: String = PhoneNumber().fake();

    Mock::given(method("POST"))
        .and(path(TestBackend::api("/contact/contact")))
        .and(body_json(json!({ "name": name.trim(), "phone": phone.trim() })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&backend.server)
        .await;

    let contact = ContactService::new(backend.client.clone(), site());
    let outcome = contact.submit(&ContactForm::new(&name, &phone, "  ")).await;

    assert!(outcome.is_sent());
    assert_eq!(outcome.message(), "Enviado. Te contactaremos pronto.");
}

/// Server message wins over the default copy
#[tokio::test]
async fn test_contact_success_server_message() {
    let backend = TestBackend::new().await;
    backend
        .respond("POST", "/contact/contact", 200, json!({ "message": "Gracias, Ana" }))
        .await;

    let contact = ContactService::new(backend.client.clone(), site());
    let outcome = contact
        .submit(&ContactForm::new("Ana", "9932085300", "Necesito cámaras"))
        .await;

    assert_eq!(outcome.message(), "Gracias, Ana");
}

/// Failures surface the server detail or the fixed copy
#[tokio::test]
async fn test_contact_failure_messages() {
    let backend = TestBackend::new().await;
    backend
        .respond("POST", "/contact/contact", 400, json!({ "detail": "Teléfono inválido" }))
        .await;

    let contact = ContactService::new(backend.client.clone(), site());
    let outcome = contact.submit(&ContactForm::new("Ana", "x", "")).await;
    assert!(!outcome.is_sent());
    assert_eq!(outcome.message(), "Teléfono inválido");

    backend.server.reset().await;
    backend
        .respond("POST", "/contact/contact", 503, json!({}))
        .await;
    let outcome = contact.submit(&ContactForm::new("Ana", "x", "")).await;
    assert_eq!(outcome.message(), "No se pudo enviar. Intenta más tarde.");
}

/// Blank name or phone never reaches the backend
#[tokio::test]
async fn test_contact_requires_name_and_phone() {
    let backend = TestBackend::new().await;
    let contact = ContactService::new(backend.client.clone(), site());

    let outcome = contact.submit(&ContactForm::new("   ", "9932085300", "Hola")).await;

    assert_eq!(outcome.message(), "Nombre y teléfono son obligatorios");
    assert!(backend.received("POST", "/contact/contact").await.is_empty());
}

/// WhatsApp links strip the number and encode the text
#[tokio::test]
async fn test_whatsapp_links() {
    let backend = TestBackend::new().await;
    let contact = ContactService::new(backend.client.clone(), site());

    assert_eq!(contact.whatsapp_default(), "https://wa.me/529932085300?text=Hola");
    assert_eq!(contact.whatsapp_custom("  "), contact.whatsapp_default());
    assert!(contact
        .whatsapp_quick("quote")
        .unwrap()
        .starts_with("https://wa.me/529932085300?text=Hola%2C%20necesito"));
    assert_eq!(contact.whatsapp_quick("unknown"), None);
}
