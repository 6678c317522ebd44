//! Languages the configuration screens are localized into

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Farsi,
    Pashto,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::English, Language::Farsi, Language::Pashto];

    /// ISO 639-1 code, also used as the `Accept-Language` tag
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Farsi => "fa",
            Language::Pashto => "ps",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        let primary = code.trim().split(['-', '_']).next().unwrap_or_default();
        match primary.to_ascii_lowercase().as_str() {
            "en" | "english" => Some(Language::English),
            "fa" | "farsi" | "prs" => Some(Language::Farsi),
            "ps" | "pashto" => Some(Language::Pashto),
            _ => None,
        }
    }

    pub fn is_rtl(&self) -> bool {
        matches!(self, Language::Farsi | Language::Pashto)
    }

    pub fn dir(&self) -> &'static str {
        if self.is_rtl() {
            "rtl"
        } else {
            "ltr"
        }
    }

    /// Picks the first supported tag of an `Accept-Language` header value.
    ///
    /// Quality weights are ignored, tags are taken in header order.
    pub fn from_accept_language(header: &str) -> Option<Self> {
        header
            .split(',')
            .map(|part| part.split(';').next().unwrap_or_default())
            .find_map(Language::from_code)
    }
}
