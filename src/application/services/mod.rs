//! Application Services
//!
//! Screen models and services that coordinate the API client, the session
//! store and the domain rules.
//!
//! ## Available Services
//!
//! - **ResourceStore**: Loaded collections with `{ items, loading, error }`
//! - **Management**: Create/update/delete with inline error state
//! - **AuthService**: Login, logout, current user
//! - **AuthGate**: Post-render redirect for admin screens
//! - **CarouselEngine**: Slide autoplay and background refresh
//! - **CatalogScreen**: Services/products dashboards and public listings
//! - **SlideAdmin**: Slide table with reordering
//! - **MediaService**: Image uploads
//! - **ContactService**: Lead form and WhatsApp links

pub mod auth_gate;
pub mod auth_service;
pub mod carousel_engine;
pub mod catalog_screen;
pub mod contact_service;
pub mod management;
pub mod media_service;
pub mod resource_store;
pub mod slide_admin;

pub use auth_gate::{redirect_if_authenticated, AuthGate, GateStatus};
pub use auth_service::{AuthError, AuthService, AuthServiceImpl};
pub use carousel_engine::{CarouselEngine, CarouselPhase, CarouselState, SlideView};
pub use catalog_screen::{
    CatalogResource, CatalogRow, CatalogScreen, Editor, ProductsScreen, PublicCatalog,
    ServicesScreen, WritePolicy,
};
pub use contact_service::{ContactOutcome, ContactService};
pub use management::{Management, MutationState};
pub use media_service::{ImageFile, MediaService, UploadState};
pub use resource_store::{Fallback, ResourceLoader, ResourceStore, StoreState};
pub use slide_admin::{SlideAdmin, SlideRow};
