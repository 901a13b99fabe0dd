//! Infrastructure Layer
//!
//! Implementations that talk to the outside world: the backend REST API,
//! session persistence, navigation and metrics.

pub mod http;
pub mod metrics;
pub mod navigation;
pub mod session;
