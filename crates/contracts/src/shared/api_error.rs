use serde::{Deserialize, Serialize};

use super::validation::FormErrors;

/// Body of every non-200 API response
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
    /// Field name -> message, present for validation failures
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<FormErrors>,
}

impl ApiErrorBody {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            errors: None,
        }
    }

    pub fn with_errors(message: impl Into<String>, errors: FormErrors) -> Self {
        Self {
            message: message.into(),
            errors: Some(errors),
        }
    }

    /// Message to show the user, `None` when the server sent nothing useful
    pub fn display_message(&self) -> Option<&str> {
        let trimmed = self.message.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed)
        }
    }
}

impl std::fmt::Display for ApiErrorBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_are_optional_on_the_wire() {
        let body: ApiErrorBody = serde_json::from_str(r#"{"message":"Server down"}"#).unwrap();
        assert_eq!(body.display_message(), Some("Server down"));
        assert!(body.errors.is_none());
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"message":"Server down"}"#
        );
    }

    #[test]
    fn field_errors_deserialize_into_map() {
        let body: ApiErrorBody = serde_json::from_str(
            r#"{"message":"Invalid","errors":{"farsi":"The farsi field is required."}}"#,
        )
        .unwrap();
        let errors = body.errors.unwrap();
        assert_eq!(errors.get("farsi"), Some("The farsi field is required."));
    }

    #[test]
    fn blank_message_is_not_displayed() {
        assert_eq!(ApiErrorBody::message("  ").display_message(), None);
    }
}
