//! Authentication Service
//!
//! Login, logout and current-user lookup against the backend, persisting
//! the bearer token and user record in the injected session store.

use std::sync::Arc;

use async_trait::async_trait;

use crate::application::dto::LoginRequest;
use crate::domain::{Session, SessionStore, SessionUser};
use crate::infrastructure::http::ApiClient;
use crate::infrastructure::navigation::ADMIN_ROUTE;
use crate::shared::error::AppError;

/// Shown when the backend rejects the credentials.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Credenciales inválidas";

/// Shown for any other login failure without a server detail.
pub const LOGIN_FAILED_MESSAGE: &str = "Error al iniciar sesión";

/// Authentication service trait for dependency injection
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Authenticate with email and password, storing the resulting session
    async fn login(&self, email: &str, password: &str) -> Result<Session, AuthError>;

    /// End the session. Local state is cleared even if the backend call fails.
    async fn logout(&self);

    /// Fetch the user behind the stored token
    async fn current_user(&self) -> Result<SessionUser, AuthError>;

    /// Whether a token is currently stored
    fn is_authenticated(&self) -> bool;
}

/// Authentication errors
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid login input: {0}")]
    Validation(String),

    #[error("Not authenticated")]
    NotAuthenticated,

    #[error(transparent)]
    Api(AppError),
}

impl AuthError {
    /// Inline message for the login form.
    pub fn user_message(&self) -> String {
        match self {
            AuthError::InvalidCredentials => INVALID_CREDENTIALS_MESSAGE.to_string(),
            AuthError::Validation(message) => message.clone(),
            AuthError::NotAuthenticated => crate::shared::error::SESSION_EXPIRED_MESSAGE.to_string(),
            AuthError::Api(e) => e.message_or(LOGIN_FAILED_MESSAGE),
        }
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::Unauthorized => AuthError::InvalidCredentials,
            AppError::Validation(message) => AuthError::Validation(message),
            other => AuthError::Api(other),
        }
    }
}

/// AuthService implementation
pub struct AuthServiceImpl {
    client: Arc<ApiClient>,
}

impl AuthServiceImpl {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    fn session(&self) -> &Arc<dyn SessionStore> {
        self.client.session()
    }
}

#[async_trait]
impl AuthService for AuthServiceImpl {
    async fn login(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let request = LoginRequest::new(email, password);
        request.check()?;

        let response = self.client.login(&request.email, &request.password).await?;
        self.session().set_token(&response.access_token)?;

        let user = match response.user {
            Some(user) => Some(user),
            None => match self.client.me().await {
                Ok(user) => Some(user),
                Err(e) => {
                    tracing::warn!(error = %e, "Logged in but user lookup failed");
                    None
                }
            },
        };

        if let Some(user) = &user {
            self.session().set_user(user)?;
        }

        tracing::info!(email = %request.email, "Admin logged in");
        self.client.navigator().navigate(ADMIN_ROUTE);

        Ok(Session {
            token: response.access_token,
            user,
        })
    }

    async fn logout(&self) {
        if self.session().token().is_some() {
            if let Err(e) = self.client.logout().await {
                tracing::warn!(error = %e, "Logout request failed, clearing session anyway");
            }
        }

        if let Err(e) = self.session().clear() {
            tracing::error!(error = %e, "Failed to clear session");
        }
        tracing::info!("Admin logged out");
    }

    async fn current_user(&self) -> Result<SessionUser, AuthError> {
        if !self.session().is_authenticated() {
            return Err(AuthError::NotAuthenticated);
        }

        let user = self.client.me().await.map_err(|e| match e {
            AppError::Unauthorized => AuthError::NotAuthenticated,
            other => AuthError::from(other),
        })?;

        if let Err(e) = self.session().set_user(&user) {
            tracing::warn!(error = %e, "Failed to persist user record");
        }
        Ok(user)
    }

    fn is_authenticated(&self) -> bool {
        self.session().is_authenticated()
    }
}
