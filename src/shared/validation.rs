//! Validation Utilities

use validator::{ValidationError, ValidationErrors};

use super::error::AppError;

/// Field-level validation error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Flatten validation errors, ordered by field name.
pub fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut field_errors: Vec<FieldError> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| FieldError {
                field: field.to_string(),
                message: e.message.clone().map(|m| m.to_string()).unwrap_or_default(),
            })
        })
        .collect();

    // field_errors() is backed by a HashMap
    field_errors.sort_by(|a, b| a.field.cmp(&b.field));
    field_errors
}

/// Convert validation errors to AppError
///
/// The first field's message becomes the inline message; fields without a
/// message fall back to `field: invalid`.
pub fn validation_error(errors: ValidationErrors) -> AppError {
    let message = field_errors(&errors)
        .into_iter()
        .next()
        .map(|e| {
            if e.message.is_empty() {
                format!("{}: invalid", e.field)
            } else {
                e.message
            }
        })
        .unwrap_or_else(|| "Validation failed".into());

    AppError::Validation(message)
}

/// Rejects strings that are empty once surrounding whitespace is removed.
pub fn non_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}
