use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::shared::api_error::ApiErrorBody;
use contracts::shared::validation::FormErrors;
use sea_orm::DbErr;

pub const VALIDATION_MESSAGE: &str = "The given data was invalid.";
const INTERNAL_MESSAGE: &str = "Something went wrong. Please try again.";

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("validation failed on {} field(s)", .0.len())]
    Validation(FormErrors),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error(transparent)]
    Database(#[from] DbErr),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ServiceError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServiceError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ServiceError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Database(_) | ServiceError::Other(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Body sent to the client; internal details stay in the log
    pub fn body(&self) -> ApiErrorBody {
        match self {
            ServiceError::Validation(errors) => {
                ApiErrorBody::with_errors(VALIDATION_MESSAGE, errors.clone())
            }
            ServiceError::BadRequest(_) | ServiceError::NotFound(_) => {
                ApiErrorBody::message(self.to_string())
            }
            ServiceError::Database(_) | ServiceError::Other(_) => {
                ApiErrorBody::message(INTERNAL_MESSAGE)
            }
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {:#}", self);
        }
        (status, Json(self.body())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_422_with_field_errors() {
        let mut errors = FormErrors::new();
        errors.insert("farsi", "The farsi field is required.");
        let err = ServiceError::Validation(errors);

        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = err.body();
        assert_eq!(body.message, VALIDATION_MESSAGE);
        assert_eq!(
            body.errors.as_ref().and_then(|e| e.get("farsi")),
            Some("The farsi field is required.")
        );
    }

    #[test]
    fn not_found_names_the_entity() {
        let err = ServiceError::NotFound("Expense type");
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.body().message, "Expense type not found");
        assert!(err.body().errors.is_none());
    }

    #[test]
    fn internal_errors_hide_details() {
        let err = ServiceError::from(anyhow::anyhow!("disk I/O error at page 7"));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.body().message, INTERNAL_MESSAGE);
    }
}
