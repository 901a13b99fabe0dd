//! Wire shapes that only exist at the HTTP boundary.

use serde::Deserialize;

use crate::domain::SessionUser;

/// A list endpoint answers either with a bare array or a paginated envelope.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ListEnvelope<T> {
    Bare(Vec<T>),
    Wrapped { items: Vec<T> },
}

impl<T> ListEnvelope<T> {
    pub fn into_items(self) -> Vec<T> {
        match self {
            ListEnvelope::Bare(items) | ListEnvelope::Wrapped { items } => items,
        }
    }
}

/// Response of `POST /auth/login`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    #[serde(alias = "accessToken")]
    pub access_token: String,

    #[serde(default, alias = "tokenType")]
    pub token_type: Option<String>,

    #[serde(default)]
    pub user: Option<SessionUser>,
}
