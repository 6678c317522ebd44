use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::ACCEPT_LANGUAGE, request::Parts},
};
use contracts::shared::language::Language;
use std::convert::Infallible;

use crate::shared::config::get_config;

/// Language picked from `Accept-Language`, or the configured default
/// Usage in handlers: `async fn handler(RequestLanguage(lang): RequestLanguage)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestLanguage(pub Language);

pub fn resolve(header: Option<&str>, fallback: Language) -> Language {
    header
        .and_then(Language::from_accept_language)
        .unwrap_or(fallback)
}

#[async_trait]
impl<S> FromRequestParts<S> for RequestLanguage
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(ACCEPT_LANGUAGE)
            .and_then(|v| v.to_str().ok());
        Ok(RequestLanguage(resolve(
            header,
            get_config().default_language(),
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_wins_over_fallback() {
        assert_eq!(resolve(Some("ps-AF,en;q=0.8"), Language::English), Language::Pashto);
    }

    #[test]
    fn unsupported_or_missing_header_uses_fallback() {
        assert_eq!(resolve(Some("de-DE"), Language::Farsi), Language::Farsi);
        assert_eq!(resolve(None, Language::Farsi), Language::Farsi);
    }
}
