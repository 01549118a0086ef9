//! Failure decoding for the remote collection API.
//!
//! Non-2xx responses may carry a structured body of the form
//! `{"detail": ...}` where `detail` is either a plain message or an
//! array of `{loc, msg}` field errors. Both are flattened into one
//! human-readable message; anything else falls back to the status line.

use reqwest::{Response, StatusCode};
use serde::Deserialize;

use crate::error::{CastellanError, Result};

#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<Detail>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Detail {
    Message(String),
    Fields(Vec<FieldDetail>),
}

#[derive(Debug, Deserialize)]
struct FieldDetail {
    #[serde(default)]
    loc: Vec<serde_json::Value>,
    msg: String,
}

/// Pass a successful response through; turn anything else into a
/// [`CastellanError::Api`] with the best message the body offers.
pub async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(CastellanError::Api {
        status: status.as_u16(),
        message: failure_message(status, &body),
    })
}

/// Derive a human-readable message for a failed response.
pub fn failure_message(status: StatusCode, body: &str) -> String {
    parse_detail(body).unwrap_or_else(|| format!("HTTP {status}"))
}

/// Extract the structured `detail` message from a response body, if any.
pub fn parse_detail(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    match parsed.detail? {
        Detail::Message(message) => Some(message),
        Detail::Fields(items) if items.is_empty() => None,
        Detail::Fields(items) => {
            let joined = items
                .iter()
                .map(|item| {
                    let loc = item
                        .loc
                        .iter()
                        .map(loc_segment)
                        .collect::<Vec<_>>()
                        .join(".");
                    if loc.is_empty() {
                        item.msg.clone()
                    } else {
                        format!("{loc}: {}", item.msg)
                    }
                })
                .collect::<Vec<_>>()
                .join("; ");
            Some(joined)
        }
    }
}

fn loc_segment(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
