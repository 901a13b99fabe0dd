//! # Domain Layer
//!
//! Core business types of the portal, independent of HTTP and storage.
//!
//! ## Structure
//!
//! - **entities**: Service, Product, CarouselSlide, Session and friends
//! - **services**: Catalog filtering/sorting/stats and slide ordering
//!
//! ## Design Principles
//!
//! - No dependencies on infrastructure or presentation layers
//! - Storage contracts (`SessionStore`) are traits implemented elsewhere

pub mod entities;
pub mod services;

// Re-export commonly used types
pub use entities::*;
