//! Request DTOs
//!
//! Input gathered from the login and contact forms.

use validator::Validate;

use crate::domain::ContactRequest;
use crate::shared::error::AppError;
use crate::shared::validation::{non_blank, validation_error};

/// Login request
#[derive(Debug, Clone, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Correo electrónico inválido"))]
    pub email: String,

    #[validate(custom(function = "non_blank", message = "La contraseña es obligatoria"))]
    pub password: String,
}

impl LoginRequest {
    pub fn new(email: &str, password: &str) -> Self {
        Self {
            email: email.trim().to_string(),
            password: password.to_string(),
        }
    }

    pub fn check(&self) -> Result<(), AppError> {
        self.validate().map_err(validation_error)
    }
}

/// Message shown when a required contact field is missing.
pub const CONTACT_REQUIRED_MESSAGE: &str = "Nombre y teléfono son obligatorios";

/// Lead form as typed by the visitor.
#[derive(Debug, Clone, Default, Validate)]
pub struct ContactForm {
    #[validate(custom(function = "non_blank", message = "Nombre y teléfono son obligatorios"))]
    pub name: String,

    #[validate(custom(function = "non_blank", message = "Nombre y teléfono son obligatorios"))]
    pub phone: String,

    pub message: String,
}

impl ContactForm {
    pub fn new(name: &str, phone: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            phone: phone.to_string(),
            message: message.to_string(),
        }
    }

    /// Validate and build the trimmed payload. An empty message is omitted.
    pub fn to_request(&self) -> Result<ContactRequest, AppError> {
        self.validate().map_err(validation_error)?;

        let message = self.message.trim();
        Ok(ContactRequest {
            name: self.name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            message: (!message.is_empty()).then(|| message.to_string()),
        })
    }
}
