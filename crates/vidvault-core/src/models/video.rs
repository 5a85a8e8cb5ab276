//! Video records and the listing adapter.
//!
//! The storage service has answered listings in more than one shape: an
//! envelope `{ "videos": [...] }` or a bare array, with each entry either a
//! URL string or an object whose `id` and `size` may be strings or numbers.
//! [`parse_video_listing`] is the only place that knows about those shapes.

use std::borrow::Cow;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::util::json_id_string;
use crate::{Error, Result};

/// Shown in place of a name that cannot be derived from the storage URL.
pub const UNKNOWN_VIDEO_NAME: &str = "Unknown Video";

/// A video object as reported by the storage service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Video {
    /// Service id, or the URL when the service omitted one.
    pub id: String,
    /// Playback URL of the stored object.
    pub url: String,
    /// Object size in bytes; 0 when unknown.
    pub size_bytes: u64,
}

impl Video {
    /// Object name encoded in the storage URL: the path after `/o/`, without
    /// the query string, percent-decoded.
    pub fn object_name(&self) -> Option<String> {
        let path = self.url.split("/o/").nth(1)?;
        let encoded = path.split('?').next().unwrap_or_default();
        if has_malformed_escape(encoded) {
            return None;
        }
        let decoded = urlencoding::decode(encoded).ok().map(Cow::into_owned)?;
        if decoded.trim().is_empty() {
            None
        } else {
            Some(decoded)
        }
    }

    pub fn display_name(&self) -> String {
        self.object_name().unwrap_or_else(|| {
            tracing::debug!("Could not derive a video name from {}", self.url);
            UNKNOWN_VIDEO_NAME.to_string()
        })
    }
}

/// `true` when some `%` is not followed by two hex digits.
fn has_malformed_escape(encoded: &str) -> bool {
    let bytes = encoded.as_bytes();
    bytes.iter().enumerate().any(|(index, byte)| {
        *byte == b'%'
            && !bytes
                .get(index + 1..index + 3)
                .is_some_and(|pair| pair.iter().all(u8::is_ascii_hexdigit))
    })
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum VideoListing {
    Envelope { videos: Vec<Value> },
    Bare(Vec<Value>),
}

/// Normalize a listing response body into videos, keeping service order.
///
/// Entries without a usable URL are dropped.
pub fn parse_video_listing(body: Value) -> Result<Vec<Video>> {
    let entries = match serde_json::from_value::<VideoListing>(body) {
        Ok(VideoListing::Envelope { videos } | VideoListing::Bare(videos)) => videos,
        Err(_) => return Err(Error::MissingField("videos")),
    };

    Ok(entries
        .into_iter()
        .filter_map(|entry| {
            let video = normalize_entry(&entry);
            if video.is_none() {
                tracing::warn!("Skipping video entry without a URL: {}", entry);
            }
            video
        })
        .collect())
}

fn normalize_entry(entry: &Value) -> Option<Video> {
    match entry {
        Value::String(url) if !url.trim().is_empty() => Some(Video {
            id: url.clone(),
            url: url.clone(),
            size_bytes: 0,
        }),
        Value::Object(fields) => normalize_object(fields),
        _ => None,
    }
}

fn normalize_object(fields: &Map<String, Value>) -> Option<Video> {
    let url = fields
        .get("url")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|url| !url.is_empty())?
        .to_string();
    let id = fields
        .get("id")
        .and_then(json_id_string)
        .unwrap_or_else(|| url.clone());
    let size_bytes = fields.get("size").map_or(0, parse_size);

    Some(Video {
        id,
        url,
        size_bytes,
    })
}

/// Sizes arrive as numbers or numeric strings. Anything else counts as 0.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn parse_size(value: &Value) -> u64 {
    match value {
        Value::Number(number) => number.as_u64().unwrap_or_else(|| {
            number
                .as_f64()
                .filter(|size| size.is_finite() && *size > 0.0)
                .map_or(0, |size| size.trunc() as u64)
        }),
        Value::String(text) => leading_digits(text.trim()),
        _ => 0,
    }
}

/// `"1048576 bytes"` reads as 1048576; no leading digits reads as 0.
/// Values past `u64::MAX` saturate.
fn leading_digits(text: &str) -> u64 {
    let text = text.strip_prefix('+').unwrap_or(text);
    text.bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0_u64, |total, digit| {
            total
                .saturating_mul(10)
                .saturating_add(u64::from(digit - b'0'))
        })
}
