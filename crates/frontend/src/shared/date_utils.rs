/// Utilities for date formatting
use chrono::{DateTime, Utc};

/// Format a timestamp as DD.MM.YYYY
/// Example: 2024-03-15T14:02:26Z -> "15.03.2024"
pub fn format_date(dt: &DateTime<Utc>) -> String {
    dt.format("%d.%m.%Y").to_string()
}
