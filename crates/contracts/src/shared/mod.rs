pub mod api_error;
pub mod language;
pub mod validation;
