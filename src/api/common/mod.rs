//
//  topgg
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Common API Types for the Legacy and Current Top.gg APIs
//!
//! This module provides shared types and utilities used by both API
//! generations: the structured failure type, the problem-details error body,
//! response classification, and the identifier codec.
//!
//! # Overview
//!
//! - [`ApiError`] - Closed set of failures produced by a request
//! - [`ProblemDetails`] - RFC 7807 error body returned by the API
//! - [`classify_response`] - Maps a completed exchange to an [`ApiError`]
//! - [`Snowflake`] - 64-bit identifier, string on the wire
//!
//! # Example
//!
//! ```rust
//! use reqwest::header::HeaderMap;
//! use reqwest::StatusCode;
//! use topgg::api::common::{classify_response, ApiError};
//!
//! let failure = classify_response(StatusCode::NOT_FOUND, &HeaderMap::new(), "");
//! assert!(matches!(failure, Some(ApiError::NotFound { .. })));
//!
//! let ok = classify_response(StatusCode::OK, &HeaderMap::new(), "{}");
//! assert!(ok.is_none());
//! ```

use std::time::Duration;

use reqwest::header::{HeaderMap, RETRY_AFTER};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::transport::TransportError;

pub mod case_insensitive;
mod snowflake;

pub use snowflake::*;

/// Fallback message when the response body is empty.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Structured failure for a single API exchange.
///
/// Exactly one variant is produced per failed exchange. The wire-classified
/// variants carry the message extracted from the response body.
///
/// # Variants
///
/// | Variant | Description | HTTP Status |
/// |---------|-------------|-------------|
/// | `Transport` | Exchange could not be completed | N/A |
/// | `Deserialization` | Body did not match the expected schema | 2xx |
/// | `NotFound` | Requested resource does not exist | 404 |
/// | `RateLimited` | Too many requests | 429 |
/// | `Client` | Request was rejected | 4xx |
/// | `Server` | Server-side failure | 5xx |
/// | `Unclassified` | Any other non-success status | 1xx, 3xx |
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use topgg::api::common::ApiError;
///
/// let err = ApiError::RateLimited {
///     message: "Slow down".to_string(),
///     retry_after: Some(Duration::from_secs(30)),
/// };
///
/// match &err {
///     ApiError::RateLimited { retry_after: Some(delay), .. } => {
///         println!("retry in {}s", delay.as_secs());
///     }
///     other => eprintln!("{other}"),
/// }
/// assert_eq!(err.status(), Some(429));
/// ```
///
/// # Notes
///
/// - The client never retries; a `RateLimited` value is surfaced once
/// - `Transport` keeps the original cause reachable through `source()`
#[derive(Error, Debug)]
pub enum ApiError {
    /// The exchange could not be completed (DNS, connection, timeout).
    #[error("Failed to send request to Top.gg API: {0}")]
    Transport(#[from] TransportError),

    /// A successful response body did not match the expected schema.
    #[error("Failed to deserialize response from Top.gg API: {message}")]
    Deserialization {
        /// Decoder error description.
        message: String,
        /// The raw response body, kept for diagnostics.
        body: String,
    },

    /// The requested resource was not found (404).
    #[error("Resource not found: {message}")]
    NotFound {
        /// Message extracted from the response body.
        message: String,
    },

    /// The rate limit was exceeded (429).
    ///
    /// `retry_after` comes from the `Retry-After` header when present,
    /// otherwise from a `retry-after` field in the body.
    #[error("Rate limit exceeded: {message}")]
    RateLimited {
        /// Message extracted from the response body.
        message: String,
        /// How long to wait before retrying, when the server said so.
        retry_after: Option<Duration>,
    },

    /// Any other 4xx response.
    #[error("Bad request ({status}): {message}")]
    Client {
        /// HTTP status code.
        status: u16,
        /// Message extracted from the response body.
        message: String,
    },

    /// Any 5xx response.
    #[error("Server error ({status}): {message}")]
    Server {
        /// HTTP status code.
        status: u16,
        /// Message extracted from the response body.
        message: String,
    },

    /// A non-success status below 400.
    #[error("Unexpected error ({status}): {message}")]
    Unclassified {
        /// HTTP status code.
        status: u16,
        /// Message extracted from the response body.
        message: String,
    },
}

impl ApiError {
    /// Returns the HTTP status behind this failure, if a response arrived.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Transport(_) | Self::Deserialization { .. } => None,
            Self::NotFound { .. } => Some(404),
            Self::RateLimited { .. } => Some(429),
            Self::Client { status, .. }
            | Self::Server { status, .. }
            | Self::Unclassified { status, .. } => Some(*status),
        }
    }

    /// Returns the server-suggested retry delay for rate-limit failures.
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            Self::RateLimited { retry_after, .. } => *retry_after,
            _ => None,
        }
    }

    /// Returns the message extracted from the response body, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Transport(_) => None,
            Self::Deserialization { message, .. }
            | Self::NotFound { message }
            | Self::RateLimited { message, .. }
            | Self::Client { message, .. }
            | Self::Server { message, .. }
            | Self::Unclassified { message, .. } => Some(message),
        }
    }
}

/// RFC 7807 problem details body returned by the API on errors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProblemDetails {
    /// A URI reference that identifies the problem type.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// A short, human-readable summary of the problem type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// The HTTP status code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,

    /// A human-readable explanation specific to this occurrence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Classifies a completed exchange.
///
/// Returns `None` for 2xx responses. Otherwise returns exactly one
/// [`ApiError`]:
///
/// - 404 → `NotFound`
/// - 429 → `RateLimited` (see [`retry_after`])
/// - 500 and above → `Server`
/// - other 4xx → `Client`
/// - anything else → `Unclassified`
pub fn classify_response(status: StatusCode, headers: &HeaderMap, body: &str) -> Option<ApiError> {
    if status.is_success() {
        return None;
    }

    let message = error_message(body);
    let status = status.as_u16();

    Some(match status {
        404 => ApiError::NotFound { message },
        429 => ApiError::RateLimited {
            retry_after: retry_after(headers, body),
            message,
        },
        500..=u16::MAX => ApiError::Server { status, message },
        400..=499 => ApiError::Client { status, message },
        _ => ApiError::Unclassified { status, message },
    })
}

/// Extracts a human-readable message from an error body.
///
/// A problem-details body yields `"{title}: {detail}"` (or just the detail
/// when there is no title). Anything else falls back to the raw body, and an
/// empty body to [`UNKNOWN_ERROR`].
pub fn error_message(body: &str) -> String {
    if body.is_empty() {
        return UNKNOWN_ERROR.to_string();
    }

    if let Ok(problem) = case_insensitive::from_str::<ProblemDetails>(body) {
        if let Some(detail) = problem.detail {
            return match problem.title {
                Some(title) => format!("{title}: {detail}"),
                None => detail,
            };
        }
    }

    body.to_string()
}

/// Resolves the retry delay of a rate-limited response.
///
/// The `Retry-After` header (delta-seconds) wins over a `retry-after` body
/// field (integral seconds). Returns `None` when neither is usable.
pub fn retry_after(headers: &HeaderMap, body: &str) -> Option<Duration> {
    header_retry_after(headers).or_else(|| body_retry_after(body))
}

fn header_retry_after(headers: &HeaderMap) -> Option<Duration> {
    let value = headers.get(RETRY_AFTER)?.to_str().ok()?;
    value.trim().parse::<u64>().ok().map(Duration::from_secs)
}

fn body_retry_after(body: &str) -> Option<Duration> {
    let json: serde_json::Value = serde_json::from_str(body).ok()?;
    json.get("retry-after")?.as_u64().map(Duration::from_secs)
}
