//! # RESET Portal
//!
//! Client library for the RESET Multiservicios marketing site and admin
//! dashboard:
//! - REST gateway client with bearer auth and forced logout on 401
//! - Resource stores for services, products and carousel slides
//! - Carousel engine with autoplay and background refresh
//! - Dashboard screen models (search, sort, editors, confirmed deletes,
//!   slide reordering) and the auth gate
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles:
//!
//! - **Domain Layer**: Entities, catalog rules and slide ordering
//! - **Application Layer**: Screen models, services and form DTOs
//! - **Infrastructure Layer**: HTTP client, session storage, navigation, metrics
//! - **Presentation Layer**: The `reset-admin` console
//!
//! ## Module Structure
//!
//! ```text
//! reset_portal/
//! +-- config/         Configuration management
//! +-- domain/         Entities and business rules
//! +-- application/    Screen models, services and DTOs
//! +-- infrastructure/ HTTP, session storage, navigation, metrics
//! +-- presentation/   Console commands
//! +-- shared/         Errors, validation, media URLs
//! ```

// Configuration module
pub mod config;

// Domain layer - Core business logic
pub mod domain;

// Application layer - Screen models and services
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - Admin console
pub mod presentation;

// Shared utilities
pub mod shared;

// Application wiring
pub mod startup;

// Telemetry and observability
pub mod telemetry;
