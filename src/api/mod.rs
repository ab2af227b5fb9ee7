//! REST Client
//!
//! Bindings to the portfolio backend, organized by resource.
//! Every endpoint answers with an [`Envelope`]; decoding is shared here.

mod project;
mod employee;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::de::DeserializeOwned;

use crate::models::Envelope;

// Re-export all public items
pub use project::*;
pub use employee::*;

/// Envelope `status` value for a successful call
const SUCCESS: &str = "success";

/// Characters escaped in path segments and query values
const COMPONENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'/')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Why a backend call produced no usable data
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FetchError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("HTTP error! status: {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Malformed(String),
    #[error("API error: {0}")]
    Rejected(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            FetchError::Malformed(e.to_string())
        } else if let Some(status) = e.status() {
            FetchError::Status(status.as_u16())
        } else {
            FetchError::Transport(e.to_string())
        }
    }
}

// ========================
// Envelope Decoding
// ========================

/// Decode an envelope whose `data` is required
pub fn decode_envelope<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, FetchError> {
    let envelope = parse_envelope::<T>(status, body)?;
    envelope
        .data
        .ok_or_else(|| FetchError::Malformed(format!("missing data: {}", envelope.message)))
}

/// Decode an envelope whose `data` is ignored (delete endpoints)
pub fn decode_ack(status: u16, body: &str) -> Result<(), FetchError> {
    parse_envelope::<serde_json::Value>(status, body).map(|_| ())
}

fn parse_envelope<T: DeserializeOwned>(status: u16, body: &str) -> Result<Envelope<T>, FetchError> {
    if !(200..300).contains(&status) {
        return Err(FetchError::Status(status));
    }
    let envelope: Envelope<T> =
        serde_json::from_str(body).map_err(|e| FetchError::Malformed(e.to_string()))?;
    if envelope.status != SUCCESS {
        return Err(FetchError::Rejected(envelope.message));
    }
    Ok(envelope)
}

// ========================
// HTTP Helpers
// ========================

fn client() -> reqwest::Client {
    reqwest::Client::new()
}

/// Send a request and hand back `(status, body)` for envelope decoding
async fn send(request: reqwest::RequestBuilder) -> Result<(u16, String), FetchError> {
    let response = request.send().await?;
    let status = response.status().as_u16();
    let body = response.text().await?;
    Ok((status, body))
}

/// Escape a value for use as a path segment or query value
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}
