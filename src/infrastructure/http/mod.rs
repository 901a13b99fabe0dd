//! HTTP access to the backend REST API.

mod api_client;
mod payloads;
mod resources;

pub use api_client::ApiClient;
pub use payloads::{ListEnvelope, LoginResponse};
pub use resources::{Products, Resource, Searchable, Services, Slides};
