use validator::Validate;

use crate::api::errors::ApiError;

/// Field error details
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, serde::Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Collect field errors of a payload, sorted by field name
pub fn field_errors<T: Validate>(payload: &T) -> Vec<FieldError> {
    let Err(validation_errors) = payload.validate() else {
        return Vec::new();
    };

    let mut errors: Vec<FieldError> = validation_errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(|error| FieldError {
                field: field.to_string(),
                message: error
                    .message
                    .as_ref()
                    .map(|cow| cow.to_string())
                    .unwrap_or_else(|| "Invalid value".to_string()),
            })
        })
        .collect();
    errors.sort();
    errors
}

/// Validate a payload and turn failures into a 400 response
pub fn validate_and_respond<T: Validate>(payload: &T) -> Result<(), ApiError> {
    let errors = field_errors(payload);
    if errors.is_empty() {
        return Ok(());
    }

    let message = errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ");
    Err(ApiError::bad_request(message))
}
