//
//  topgg
//  error.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Crate Errors
//!
//! Every fallible operation of the library returns [`Result<T>`]. The
//! [`Error`] type separates three kinds of failure:
//!
//! - **Wire failures** ([`Error::Api`]): the exchange was attempted and
//!   failed, carrying an [`ApiError`] with status, message and retry delay.
//! - **Local preconditions** ([`Error::MissingBotId`], [`Error::MissingToken`],
//!   [`Error::InvalidToken`]): detected before any network exchange.
//! - **Lifecycle** ([`Error::Cancelled`], [`Error::Closed`]): the caller
//!   cancelled the call or used a disposed client.
//!
//! # Example
//!
//! ```rust,no_run
//! use tokio_util::sync::CancellationToken;
//! use topgg::{Error, TopggClient};
//!
//! # async fn example(client: TopggClient) {
//! match client.get_bot_stats(&CancellationToken::new()).await {
//!     Ok(stats) => println!("{:?} servers", stats.server_count),
//!     Err(e) if e.is_rate_limited() => {
//!         println!("retry in {:?}", e.retry_after());
//!     }
//!     Err(Error::MissingBotId) => eprintln!("configure a bot id first"),
//!     Err(e) => eprintln!("{e}"),
//! }
//! # }
//! ```

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::api::common::ApiError;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the Top.gg client.
#[derive(Error, Debug)]
pub enum Error {
    /// The request reached the wire and failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// An operation scoped to the caller's own bot was invoked without a
    /// configured bot id. No request was sent.
    #[error("No bot id configured. Set one on the builder or via TOPGG_BOT_ID.")]
    MissingBotId,

    /// The client was built without an API token.
    #[error("No API token configured. Set one on the builder or via TOPGG_TOKEN.")]
    MissingToken,

    /// The token cannot be carried in an HTTP header.
    #[error("API token contains characters that are not allowed in a header")]
    InvalidToken,

    /// The caller cancelled the operation.
    #[error("Operation cancelled")]
    Cancelled,

    /// The client was used after [`close`](crate::TopggClient::close).
    #[error("Client has been closed")]
    Closed,

    /// A base URL or request path could not be parsed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A request body could not be serialized.
    #[error("Failed to serialize request body: {0}")]
    Serialization(#[source] serde_json::Error),

    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),

    /// A configuration file exists but could not be read.
    #[error("Failed to read config file {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A configuration file could not be parsed.
    #[error("Failed to parse config file {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl Error {
    /// Returns the wire failure, if this is one.
    pub fn api(&self) -> Option<&ApiError> {
        match self {
            Self::Api(e) => Some(e),
            _ => None,
        }
    }

    /// Returns the HTTP status code of a wire failure.
    pub fn status(&self) -> Option<u16> {
        self.api().and_then(ApiError::status)
    }

    /// Returns the server-suggested retry delay of a rate-limit failure.
    pub fn retry_after(&self) -> Option<Duration> {
        self.api().and_then(ApiError::retry_after)
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Api(ApiError::NotFound { .. }))
    }

    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::Api(ApiError::RateLimited { .. }))
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// Returns `true` for failures the server attributed to credentials.
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::MissingToken | Self::InvalidToken) || matches!(self.status(), Some(401 | 403))
    }
}
