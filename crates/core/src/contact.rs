//! Contact-form payload validation.
//!
//! Validation is presence-only: each required key must exist and hold a
//! string. Empty strings are accepted and the email address is not checked.
//! Strings containing NUL are rejected since the store cannot hold them.

use serde_json::Value;

use crate::error::CoreError;

/// Keys every contact submission must carry.
pub const REQUIRED_FIELDS: [&str; 4] = ["name", "email", "subject", "message"];

/// Message returned when one or more required keys are absent.
pub const MISSING_FIELDS_MESSAGE: &str = "Missing required fields";

/// Acknowledgement returned after a message is stored.
pub const SUBMITTED_MESSAGE: &str = "Message sent successfully!";

/// A contact submission that passed validation and is ready to persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Validate a raw JSON payload and extract the four required fields.
///
/// A key holding `null` counts as absent. A key holding a non-string value
/// is rejected with its own message so the caller can tell the cases apart.
pub fn parse_submission(payload: &Value) -> Result<ContactSubmission, CoreError> {
    let object = payload
        .as_object()
        .ok_or_else(|| CoreError::Validation(MISSING_FIELDS_MESSAGE.to_string()))?;

    let missing = REQUIRED_FIELDS
        .iter()
        .any(|key| object.get(*key).is_none_or(Value::is_null));
    if missing {
        return Err(CoreError::Validation(MISSING_FIELDS_MESSAGE.to_string()));
    }

    let field = |key: &str| -> Result<String, CoreError> {
        match object.get(key) {
            Some(Value::String(s)) if s.contains('\0') => Err(CoreError::Validation(format!(
                "Field '{key}' must not contain NUL characters"
            ))),
            Some(Value::String(s)) => Ok(s.clone()),
            _ => Err(CoreError::Validation(format!(
                "Field '{key}' must be a string"
            ))),
        }
    };

    Ok(ContactSubmission {
        name: field("name")?,
        email: field("email")?,
        subject: field("subject")?,
        message: field("message")?,
    })
}
