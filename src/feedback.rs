//! Validation and serialization for the feedback form payload.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ToolError;

/// The JSON body POSTed to the feedback endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeedbackSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Validates the form fields and returns the serialized JSON body.
/// Fields are trimmed before validation and sent trimmed.
pub fn feedback_payload(name: &str, email: &str, message: &str) -> Result<String, ToolError> {
    let submission = validate_feedback(name, email, message)?;
    serde_json::to_string(&submission).map_err(|err| ToolError::input(err.to_string()))
}

pub fn validate_feedback(
    name: &str,
    email: &str,
    message: &str,
) -> Result<FeedbackSubmission, ToolError> {
    let name = name.trim();
    let email = email.trim();
    let message = message.trim();
    if name.is_empty() {
        return Err(ToolError::input("name is required"));
    }
    if !email_regex().is_match(email) {
        return Err(ToolError::input("email address is not valid"));
    }
    if message.is_empty() {
        return Err(ToolError::input("message is required"));
    }
    Ok(FeedbackSubmission {
        name: name.to_string(),
        email: email.to_string(),
        message: message.to_string(),
    })
}

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[\w.+-]+@[\w-]+(\.[\w-]+)+$").unwrap())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_submission_serializes() {
        let payload = feedback_payload(" Ada ", "ada@example.com", " hi there ").unwrap();
        assert_eq!(
            payload,
            r#"{"name":"Ada","email":"ada@example.com","message":"hi there"}"#
        );
    }

    #[test]
    fn missing_fields_rejected() {
        assert!(feedback_payload("", "a@b.co", "msg").is_err());
        assert!(feedback_payload("Ada", "a@b.co", "  ").is_err());
    }

    #[test]
    fn email_shapes() {
        assert!(validate_feedback("A", "first.last+tag@sub.example.org", "m").is_ok());
        for bad in ["plain", "a@b", "a@b.", "@example.com", "a b@c.co"] {
            assert!(validate_feedback("A", bad, "m").is_err(), "{bad}");
        }
    }
}
