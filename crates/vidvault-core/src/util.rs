//! Shared utility functions used across multiple modules.

use serde_json::Value;

/// Normalize optional text by trimming whitespace and removing empties.
///
/// Returns `None` when the input is `None` or the trimmed value is empty.
pub fn normalize_text_option(value: Option<String>) -> Option<String> {
    let value = value?;
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Check if a string starts with `http://` or `https://`.
pub fn is_http_url(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}

/// Truncate text to at most 180 characters for log and error messages.
pub fn compact_text(value: &str) -> String {
    value.trim().chars().take(180).collect()
}

/// Read an identifier that services send either as a string or a number.
pub fn json_id_string(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => normalize_text_option(Some(text.clone())),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}
