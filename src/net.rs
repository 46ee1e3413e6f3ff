// src/net.rs

use std::time::Duration;

use serde_json::Value;
use thiserror::Error;

use crate::config::consts::HTTP_TIMEOUT_SECS;
use crate::model::SearchRequest;

#[derive(Debug, Error)]
pub enum FetchError {
    /// Non-success status. The body is not inspected; the code only goes
    /// to the log, never to the user.
    #[error("Match not found or server unavailable")]
    Status(u16),

    /// Connect/DNS/timeout and friends, shown with the underlying cause.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// The body was not valid JSON, or didn't match the expected shape.
    #[error("malformed response: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Single search request: POST `{ "search": <query> }` to `endpoint`.
/// The query is forwarded as-is; an empty string is a valid search.
pub fn post_search(endpoint: &str, query: &str) -> Result<Value, FetchError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .build()?;

    logd!("Net: POST {} search={:?}", endpoint, query);

    let resp = client
        .post(endpoint)
        .json(&SearchRequest { search: query })
        .send()?;

    let status = resp.status();
    if !status.is_success() {
        loge!("Net: {} → HTTP {}", endpoint, status.as_u16());
        return Err(FetchError::Status(status.as_u16()));
    }

    // Take the body as text first so a decode failure surfaces as
    // Malformed rather than Transport.
    let body = resp.text()?;
    let raw: Value = serde_json::from_str(&body)?;
    Ok(raw)
}
