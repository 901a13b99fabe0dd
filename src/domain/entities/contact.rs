//! Contact lead and WhatsApp quick messages.

use serde::{Deserialize, Serialize};

/// Minimal lead form submitted to `POST /contact/contact`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactRequest {
    pub name: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ContactResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// A canned WhatsApp message offered next to the chat button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickMessage {
    pub key: &'static str,
    pub title: &'static str,
    pub message: &'static str,
}

pub const QUICK_MESSAGES: [QuickMessage; 4] = [
    QuickMessage {
        key: "general",
        title: "Consulta General",
        message: "¡Hola! Me gustaría obtener más información sobre sus servicios.",
    },
    QuickMessage {
        key: "quote",
        title: "Solicitar Cotización",
        message: "Hola, necesito una cotización para un servicio. ¿Podrían ayudarme?",
    },
    QuickMessage {
        key: "emergency",
        title: "Servicio de Emergencia",
        message: "¡Urgente! Necesito asistencia técnica inmediata. ¿Están disponibles?",
    },
    QuickMessage {
        key: "support",
        title: "Soporte Técnico",
        message: "Hola, tengo un problema técnico y necesito soporte. ¿Pueden ayudarme?",
    },
];

pub fn quick_message(key: &str) -> Option<&'static QuickMessage> {
    QUICK_MESSAGES.iter().find(|m| m.key == key)
}
