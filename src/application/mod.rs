//! Application Layer
//!
//! Screen models, services and form DTOs. This layer sits between the
//! presentation layer and the API client, owning the loading/error state
//! each screen shows.

pub mod services;
pub mod dto;
