//! API Integration Tests
//!
//! Each module drives the real client and screen models against a
//! wiremock backend.

mod auth_tests;
mod carousel_tests;
mod catalog_tests;
mod media_tests;
mod scenario_tests;
