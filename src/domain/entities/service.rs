//! Service entity.
//!
//! A bookable service offered by the business (installations, repairs, IT
//! support). Services are owned by the backend and only mirrored here.

use serde::{Deserialize, Serialize};

use super::Identified;

/// Duration assumed when the backend omits one, in minutes.
pub const DEFAULT_DURATION_MINUTES: u32 = 60;

/// A service listed on the public site and managed from the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    #[serde(alias = "_id")]
    pub id: String,

    pub name: String,

    #[serde(default)]
    pub description: String,

    pub price: f64,

    /// Enum-like category key (e.g. "seguridad")
    #[serde(default)]
    pub category: String,

    /// Symbolic icon name rendered by the front end
    #[serde(default)]
    pub icon: Option<String>,

    #[serde(default = "default_true")]
    pub is_active: bool,

    /// Estimated duration in minutes
    #[serde(default = "default_duration")]
    pub estimated_duration: u32,

    #[serde(default)]
    pub features: Vec<String>,

    #[serde(default)]
    pub created_at: Option<String>,
}

/// Payload for `POST /services`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceCreate {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub is_active: bool,
    pub estimated_duration: u32,
    pub features: Vec<String>,
}

/// Payload for `PUT /services/:id`. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ServiceUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<String>>,
}

impl ServiceUpdate {
    /// Update that only flips the active flag.
    pub fn active(is_active: bool) -> Self {
        Self {
            is_active: Some(is_active),
            ..Default::default()
        }
    }
}

impl Identified for Service {
    fn id(&self) -> &str {
        &self.id
    }
}

fn default_true() -> bool {
    true
}

fn default_duration() -> u32 {
    DEFAULT_DURATION_MINUTES
}
