//! Response helpers shared by the service clients.

use reqwest::Response;
use serde::Deserialize;

use crate::util::compact_text;
use crate::{Error, Result};

/// Pass successful responses through; turn everything else into `Error::Api`.
pub async fn check_status(response: Response, operation: &str) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    tracing::debug!(
        "{} failed with HTTP {}: {}",
        operation,
        status.as_u16(),
        compact_text(&body)
    );
    Err(Error::Api {
        status: status.as_u16(),
        message: parse_service_message(&body),
    })
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ServiceMessage {
    Text(String),
    List(Vec<String>),
}

#[derive(Debug, Deserialize)]
struct ServiceErrorBody {
    message: Option<ServiceMessage>,
}

/// Extract the `message` field of an error body.
///
/// Validation errors arrive as a list of messages; the first one is used.
pub fn parse_service_message(body: &str) -> Option<String> {
    let payload = serde_json::from_str::<ServiceErrorBody>(body).ok()?;
    let message = match payload.message? {
        ServiceMessage::Text(text) => text,
        ServiceMessage::List(items) => items.into_iter().next()?,
    };
    let message = message.trim();
    if message.is_empty() {
        None
    } else {
        Some(message.to_string())
    }
}
