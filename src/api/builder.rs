//
//  topgg
//  api/builder.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Client Builder
//!
//! [`TopggClientBuilder`] collects the token, the bot id and HTTP settings,
//! then produces a [`TopggClient`].
//!
//! ## Transport Ownership
//!
//! | Builder call | Transport | Closed by the client |
//! |--------------|-----------|----------------------|
//! | *(default)* | new `reqwest::Client` | Yes |
//! | [`http_client`](TopggClientBuilder::http_client) | caller's `reqwest::Client` | No |
//! | [`transport`](TopggClientBuilder::transport) | caller's [`Transport`] | No |
//!
//! `timeout`, `user_agent` and `configure_http` only apply to the default
//! transport.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use topgg::TopggClientBuilder;
//!
//! let client = TopggClientBuilder::new()
//!     .token_from_env("TOPGG_TOKEN")
//!     .bot_id_from_env("TOPGG_BOT_ID")
//!     .timeout(Duration::from_secs(10))
//!     .configure_http(|http| http.pool_max_idle_per_host(2))
//!     .build()?;
//! # Ok::<(), topgg::Error>(())
//! ```

use std::sync::Arc;
use std::time::Duration;

use reqwest::ClientBuilder;
use tracing::debug;

use super::client::TopggClient;
use super::common::Snowflake;
use super::pipeline::{ApiVersion, Endpoints, RequestPipeline};
use super::transport::{ReqwestTransport, Transport};
use crate::auth::Credential;
use crate::config::ClientConfig;
use crate::error::{Error, Result};

type HttpCustomizer = Box<dyn FnOnce(ClientBuilder) -> ClientBuilder + Send>;

enum HttpSource {
    Default,
    Client(reqwest::Client),
    Transport(Arc<dyn Transport>),
}

/// Builder for [`TopggClient`].
pub struct TopggClientBuilder {
    token: Option<String>,
    bot_id: Option<Snowflake>,
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    customizers: Vec<HttpCustomizer>,
    http: HttpSource,
}

impl Default for TopggClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TopggClientBuilder {
    pub fn new() -> Self {
        Self {
            token: None,
            bot_id: None,
            base_url: None,
            timeout: None,
            user_agent: None,
            customizers: Vec::new(),
            http: HttpSource::Default,
        }
    }

    /// Starts from loaded settings.
    pub fn from_config(config: &ClientConfig) -> Self {
        Self {
            token: config.token.clone(),
            bot_id: config.bot_id,
            base_url: config.base_url.clone(),
            timeout: config.timeout(),
            user_agent: config.user_agent.clone(),
            ..Self::new()
        }
    }

    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Reads the token from the environment variable `var`.
    ///
    /// Leaves the current token untouched if `var` is unset or empty.
    pub fn token_from_env(mut self, var: &str) -> Self {
        if let Some(token) = env_value(var) {
            self.token = Some(token);
        }
        self
    }

    pub fn bot_id(mut self, bot_id: impl Into<Snowflake>) -> Self {
        self.bot_id = Some(bot_id.into());
        self
    }

    /// Reads the bot id from the environment variable `var`.
    ///
    /// A value that is not a valid id is ignored.
    pub fn bot_id_from_env(mut self, var: &str) -> Self {
        if let Some(raw) = env_value(var) {
            match raw.parse() {
                Ok(id) => self.bot_id = Some(id),
                Err(e) => debug!(error = %e, var, "Ignoring unparseable bot id"),
            }
        }
        self
    }

    /// Overrides the legacy API base URL (default `https://top.gg/api`).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Adjusts the `reqwest` builder of the default transport (proxies, TLS
    /// roots, client certificates). Customizers run in the order added.
    pub fn configure_http<F>(mut self, configure: F) -> Self
    where
        F: FnOnce(ClientBuilder) -> ClientBuilder + Send + 'static,
    {
        self.customizers.push(Box::new(configure));
        self
    }

    /// Sends requests through the caller's `reqwest::Client`.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http = HttpSource::Client(client);
        self
    }

    /// Sends requests through the caller's transport.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.http = HttpSource::Transport(transport);
        self
    }

    /// Returns the bot id configured so far.
    pub fn get_bot_id(&self) -> Option<Snowflake> {
        self.bot_id
    }

    /// Returns `true` if a non-empty token has been configured.
    pub fn has_token(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.trim().is_empty())
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingToken`] if no token was configured
    /// - [`Error::InvalidToken`] if the token cannot be sent as a header
    /// - [`Error::InvalidUrl`] if the base URL does not parse
    /// - [`Error::HttpClient`] if the default transport cannot be created
    pub fn build(self) -> Result<TopggClient> {
        let credential = Credential::new(self.token.ok_or(Error::MissingToken)?)?;

        let endpoints = match self.base_url.as_deref() {
            Some(base_url) => Endpoints::new(base_url)?,
            None => Endpoints::default(),
        };

        let (transport, owns_transport): (Arc<dyn Transport>, bool) = match self.http {
            HttpSource::Default => {
                let user_agent = self
                    .user_agent
                    .unwrap_or_else(|| format!("topgg-rs/{}", crate::VERSION));
                let mut builder = reqwest::Client::builder().user_agent(user_agent);
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                for customize in self.customizers {
                    builder = customize(builder);
                }
                let transport = ReqwestTransport::from_builder(builder).map_err(Error::HttpClient)?;
                let transport: Arc<dyn Transport> = Arc::new(transport);
                (transport, true)
            }
            HttpSource::Client(client) => {
                let transport: Arc<dyn Transport> = Arc::new(ReqwestTransport::with_client(client));
                (transport, false)
            }
            HttpSource::Transport(transport) => (transport, false),
        };

        debug!(
            base_url = endpoints.base_url(ApiVersion::Legacy),
            bot_id = ?self.bot_id,
            owns_transport,
            "Built Top.gg client"
        );

        Ok(TopggClient::from_parts(
            RequestPipeline::new(transport, credential, endpoints),
            self.bot_id,
            owns_transport,
        ))
    }

    /// Builds the client if a token is configured.
    ///
    /// Returns `Ok(None)` when the token is missing. Otherwise behaves
    /// exactly like [`build`](Self::build), HTTP customizations included.
    pub fn try_build(self) -> Result<Option<TopggClient>> {
        if !self.has_token() {
            return Ok(None);
        }
        self.build().map(Some)
    }
}

fn env_value(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|value| !value.trim().is_empty())
}
