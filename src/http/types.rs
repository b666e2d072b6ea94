//! HTTP API request and response types

use crate::User;
use crate::error::UserStoreError;
use serde::{Deserialize, Serialize};

// =============================================================================
// UTILITY FUNCTIONS
// =============================================================================

pub fn print_user(user: &User) {
    println!("[{}] {} <{}>", user.id, user.name, user.email);
}

// =============================================================================
// USERS API TYPES
// =============================================================================

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

#[derive(Serialize, Deserialize)]
pub struct HealthCheckResponse {
    pub status: String,
    pub service: String,
    pub timestamp: u64,
}

// =============================================================================
// VALIDATION
// =============================================================================

/// Validate a create/update body and extract its fields.
///
/// Bodies are taken as raw JSON so that an empty object, a missing field, or a
/// wrong-typed field all surface as a validation failure rather than a
/// deserialization rejection.
pub fn validate_user_payload(body: &serde_json::Value) -> Result<(String, String), ErrorResponse> {
    if !body.is_object() {
        return Err(ErrorResponse::validation_error(
            "Request body must be a JSON object",
        ));
    }
    let name = required_string_field(body, "name")?;
    let email = required_string_field(body, "email")?;
    Ok((name, email))
}

fn required_string_field(body: &serde_json::Value, field: &str) -> Result<String, ErrorResponse> {
    match body.get(field) {
        Some(serde_json::Value::String(value)) if !value.is_empty() => Ok(value.clone()),
        Some(serde_json::Value::String(_)) => Err(ErrorResponse::invalid_field(
            field,
            &format!("Field '{field}' must not be empty"),
        )),
        Some(_) => Err(ErrorResponse::invalid_field(
            field,
            &format!("Field '{field}' must be a string"),
        )),
        None => Err(ErrorResponse::missing_field(field)),
    }
}

impl ErrorResponse {
    pub fn new(error: &str, message: &str) -> Self {
        Self {
            error: error.to_string(),
            message: message.to_string(),
            details: None,
        }
    }
    pub fn with_details(error: &str, message: &str, details: serde_json::Value) -> Self {
        Self {
            error: error.to_string(),
            message: message.to_string(),
            details: Some(details),
        }
    }
    pub fn validation_error(message: &str) -> Self {
        Self::new("validation_error", message)
    }
    pub fn missing_field(field: &str) -> Self {
        Self::with_details(
            "validation_error",
            &format!("Required field '{field}' is missing"),
            serde_json::json!({ "field": field }),
        )
    }
    pub fn invalid_field(field: &str, message: &str) -> Self {
        Self::with_details(
            "validation_error",
            message,
            serde_json::json!({ "field": field }),
        )
    }
    pub fn user_not_found(id: u64) -> Self {
        Self::with_details(
            "user_not_found",
            &format!("User {id} not found"),
            serde_json::json!({ "id": id }),
        )
    }
    pub fn internal_error(message: &str) -> Self {
        Self::new("internal_error", message)
    }
}

impl From<UserStoreError> for ErrorResponse {
    fn from(err: UserStoreError) -> Self {
        match err {
            UserStoreError::UserNotFound { id } => Self::user_not_found(id),
        }
    }
}
