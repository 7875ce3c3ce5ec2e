//
//  topgg
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Authentication Module
//!
//! Top.gg authenticates every request with a single API token. The two API
//! generations expect it in different shapes:
//!
//! | Generation | `Authorization` header |
//! |------------|------------------------|
//! | Legacy (`/api`) | `<token>` |
//! | Current (`/api/v1`) | `Bearer <token>` |
//!
//! The shapes are not interchangeable; sending a bearer header to the legacy
//! surface (or the reverse) is rejected upstream. The scheme is therefore
//! chosen by [`AuthScheme`], which the request pipeline derives from the
//! generation tag of each operation.
//!
//! ## Example
//!
//! ```rust
//! use topgg::auth::{AuthScheme, Credential};
//!
//! let credential = Credential::new("my-token").unwrap();
//!
//! let legacy = credential.header_value(AuthScheme::Raw);
//! assert_eq!(legacy.to_str().unwrap(), "my-token");
//!
//! let current = credential.header_value(AuthScheme::Bearer);
//! assert_eq!(current.to_str().unwrap(), "Bearer my-token");
//!
//! // The token never shows up in debug output.
//! assert!(!format!("{credential:?}").contains("my-token"));
//! ```

use std::fmt;

use reqwest::header::HeaderValue;

use crate::error::{Error, Result};

/// Shape of the `Authorization` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthScheme {
    /// The token verbatim, with no scheme prefix.
    Raw,
    /// `Bearer <token>`.
    Bearer,
}

/// The API token.
///
/// Fixed at client construction and immutable afterwards. `Debug` output is
/// redacted and there is no `Display` implementation, so the token cannot end
/// up in logs by accident.
#[derive(Clone)]
pub struct Credential {
    token: String,
}

impl Credential {
    /// Wraps a token.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingToken`] for an empty token and
    /// [`Error::InvalidToken`] if it cannot be carried in an HTTP header.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(Error::MissingToken);
        }
        HeaderValue::from_str(&format!("Bearer {token}")).map_err(|_| Error::InvalidToken)?;
        Ok(Self { token })
    }

    /// Builds the `Authorization` header value for `scheme`.
    ///
    /// The value is marked sensitive so `reqwest` and `http` never print it.
    pub fn header_value(&self, scheme: AuthScheme) -> HeaderValue {
        let raw = match scheme {
            AuthScheme::Raw => self.token.clone(),
            AuthScheme::Bearer => format!("Bearer {}", self.token),
        };
        // Validated in `new`.
        let mut value = HeaderValue::from_str(&raw).unwrap_or_else(|_| HeaderValue::from_static(""));
        value.set_sensitive(true);
        value
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential").field("token", &"<redacted>").finish()
    }
}
