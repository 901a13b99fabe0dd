//! # Domain Entities
//!
//! Business objects mirrored from the backend REST API. None of them are
//! persisted locally except the admin session.
//!
//! ## Core Entities
//!
//! - **Service**: A bookable service (installation, repair, IT support)
//! - **Product**: A catalog product with stock
//! - **CarouselSlide**: A home page slide, ordered by `order`
//! - **Session**: Bearer token + minimal user record
//!
//! ## Supporting Entities
//!
//! - **Slide**: Static fallback or remote slide, as the carousel renders it
//! - **ContactRequest**: Lead form payload
//! - **UploadedImage**: Result of an image upload

mod carousel;
mod contact;
mod fallback;
mod product;
mod service;
mod session;
mod upload;

pub use carousel::{
    CallToAction, CarouselSlide, CarouselSlideCreate, CarouselSlideUpdate, Slide, SlideOrder,
    StaticSlide, DEFAULT_PRIMARY_CTA, PLACEHOLDER_IMAGE, SECONDARY_CTA,
};
pub use contact::{quick_message, ContactRequest, ContactResponse, QuickMessage, QUICK_MESSAGES};
pub use fallback::{fallback_products, fallback_services, STATIC_SLIDES};
pub use product::{Product, ProductCreate, ProductUpdate, StockStatus, LOW_STOCK_THRESHOLD};
pub use service::{Service, ServiceCreate, ServiceUpdate, DEFAULT_DURATION_MINUTES};
pub use session::{Session, SessionStore, SessionUser, LEGACY_TOKEN_KEY, TOKEN_KEY, USER_KEY};
pub use upload::{
    mime_from_extension, DeleteImageResponse, ImageInfo, ImageList, UploadedImage,
    ALLOWED_IMAGE_TYPES, MAX_UPLOAD_SIZE,
};

/// Entities addressed by a backend identifier.
pub trait Identified {
    fn id(&self) -> &str;
}
