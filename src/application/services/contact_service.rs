//! Contact Service
//!
//! Lead form submission and WhatsApp deep links.

use std::sync::Arc;

use crate::application::dto::ContactForm;
use crate::config::SiteSettings;
use crate::domain::quick_message;
use crate::infrastructure::http::ApiClient;
use crate::shared::media::whatsapp_link;

pub const CONTACT_SUCCESS_MESSAGE: &str = "Enviado. Te contactaremos pronto.";

pub const CONTACT_FAILURE_MESSAGE: &str = "No se pudo enviar. Intenta más tarde.";

/// Result shown under the lead form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactOutcome {
    Sent(String),
    Failed(String),
}

impl ContactOutcome {
    pub fn is_sent(&self) -> bool {
        matches!(self, ContactOutcome::Sent(_))
    }

    pub fn message(&self) -> &str {
        match self {
            ContactOutcome::Sent(message) | ContactOutcome::Failed(message) => message,
        }
    }
}

pub struct ContactService {
    client: Arc<ApiClient>,
    site: SiteSettings,
}

impl ContactService {
    pub fn new(client: Arc<ApiClient>, site: SiteSettings) -> Self {
        Self { client, site }
    }

    /// Submit the lead form. Validation failures never reach the backend.
    pub async fn submit(&self, form: &ContactForm) -> ContactOutcome {
        let request = match form.to_request() {
            Ok(request) => request,
            Err(e) => return ContactOutcome::Failed(e.user_message()),
        };

        match self.client.submit_contact(&request).await {
            Ok(response) => {
                tracing::info!(name = %request.name, "Contact request sent");
                let message = response
                    .message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| CONTACT_SUCCESS_MESSAGE.to_string());
                ContactOutcome::Sent(message)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Contact request failed");
                ContactOutcome::Failed(e.message_or(CONTACT_FAILURE_MESSAGE))
            }
        }
    }

    /// Deep link with the site's default greeting.
    pub fn whatsapp_default(&self) -> String {
        whatsapp_link(&self.site.whatsapp_number, &self.site.whatsapp_message)
    }

    /// Deep link for one of the predefined quick messages.
    pub fn whatsapp_quick(&self, key: &str) -> Option<String> {
        quick_message(key).map(|quick| whatsapp_link(&self.site.whatsapp_number, quick.message))
    }

    /// Deep link with free text; blank text falls back to the default greeting.
    pub fn whatsapp_custom(&self, message: &str) -> String {
        if message.trim().is_empty() {
            self.whatsapp_default()
        } else {
            whatsapp_link(&self.site.whatsapp_number, message.trim())
        }
    }
}
