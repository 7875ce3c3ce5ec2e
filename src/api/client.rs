//
//  topgg
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Top.gg Client
//!
//! [`TopggClient`] is the public surface of the library. Each operation binds
//! the right API generation, path, method and response type, then hands the
//! request to the [`RequestPipeline`].
//!
//! ## Operations
//!
//! | Method | API | Endpoint | Needs bot id |
//! |--------|-----|----------|--------------|
//! | [`search_bots`](TopggClient::search_bots) | legacy | `GET /bots` | No |
//! | [`get_bot_stats`](TopggClient::get_bot_stats) | legacy | `GET /bots/{id}/stats` | Yes |
//! | [`post_bot_stats`](TopggClient::post_bot_stats) | legacy | `POST /bots/{id}/stats` | Yes |
//! | [`get_bot_votes`](TopggClient::get_bot_votes) | legacy | `GET /bots/{id}/votes` | Yes |
//! | [`check_user_vote`](TopggClient::check_user_vote) | legacy | `GET /bots/{id}/check` | Yes |
//! | [`update_bot_commands`](TopggClient::update_bot_commands) | v1 | `POST /projects/@me/commands` | No |
//! | [`get_vote_status`](TopggClient::get_vote_status) | v1 | `GET /projects/@me/votes/{user}` | No |
//!
//! ## Lifecycle
//!
//! A client that created its own transport closes it on [`close`](TopggClient::close)
//! or drop. A transport supplied by the caller is never closed by the client.
//! Closing is idempotent. Callers must not close a client while operations
//! are still in flight.
//!
//! ## Example
//!
//! ```rust,no_run
//! use tokio_util::sync::CancellationToken;
//! use topgg::TopggClient;
//!
//! # async fn example() -> topgg::Result<()> {
//! let client = TopggClient::builder()
//!     .token("your-token")
//!     .bot_id(264811613708746752u64)
//!     .build()?;
//!
//! let cancel = CancellationToken::new();
//! client.post_server_count(1200, &cancel).await?;
//!
//! let stats = client.get_bot_stats(&cancel).await?;
//! println!("Servers: {:?}", stats.server_count);
//! # Ok(())
//! # }
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::debug;

use super::builder::TopggClientBuilder;
use super::common::Snowflake;
use super::current::{ApplicationCommand, VoteStatus};
use super::legacy::{BotSearchResult, BotStats, BotStatsPost, Vote, VoteCheck};
use super::pipeline::{ApiRequest, ApiVersion, RequestPipeline};
use super::search::{BotSearch, SearchParams};
use super::transport::Transport;
use crate::config::ClientConfig;
use crate::error::{Error, Result};

/// Client for the Top.gg API.
///
/// Safe to share between tasks; concurrent calls do not block each other.
/// Use [`into_shared`](Self::into_shared) to hold it in application state.
pub struct TopggClient {
    pipeline: RequestPipeline,
    bot_id: Option<Snowflake>,
    owns_transport: bool,
    closed: AtomicBool,
}

impl TopggClient {
    /// Creates a client with its own HTTP transport and no bot id.
    ///
    /// # Errors
    ///
    /// See [`TopggClientBuilder::build`].
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::builder().token(token).build()
    }

    /// Creates a client over a caller-supplied transport.
    ///
    /// The transport is never closed by the client.
    pub fn with_transport(
        transport: Arc<dyn Transport>,
        token: impl Into<String>,
        bot_id: Option<Snowflake>,
    ) -> Result<Self> {
        let builder = Self::builder().token(token).transport(transport);
        match bot_id {
            Some(id) => builder.bot_id(id).build(),
            None => builder.build(),
        }
    }

    pub fn builder() -> TopggClientBuilder {
        TopggClientBuilder::new()
    }

    /// Creates a client from the config file and `TOPGG_*` environment
    /// variables.
    pub fn from_env() -> Result<Self> {
        TopggClientBuilder::from_config(&ClientConfig::load()?).build()
    }

    pub(crate) fn from_parts(pipeline: RequestPipeline, bot_id: Option<Snowflake>, owns_transport: bool) -> Self {
        Self {
            pipeline,
            bot_id,
            owns_transport,
            closed: AtomicBool::new(false),
        }
    }

    /// Returns the configured bot id.
    pub fn bot_id(&self) -> Option<Snowflake> {
        self.bot_id
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    /// Moves the client behind an `Arc` for shared application state.
    pub fn into_shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Starts a fluent bot search.
    pub fn search(&self) -> BotSearch<'_> {
        BotSearch::new(self)
    }

    /// Searches listed bots.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] for classified failures (an out-of-range
    /// `limit` comes back as [`ApiError::Client`](super::common::ApiError::Client)).
    pub async fn search_bots(&self, params: &SearchParams, cancel: &CancellationToken) -> Result<BotSearchResult> {
        self.ensure_open()?;
        let request = ApiRequest::get(ApiVersion::Legacy, "/bots").queries(params.query_pairs());
        self.pipeline.execute(request, cancel).await
    }

    /// Returns the statistics of the configured bot.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingBotId`] without sending anything if no bot id
    /// is configured.
    pub async fn get_bot_stats(&self, cancel: &CancellationToken) -> Result<BotStats> {
        let bot_id = self.require_bot_id()?;
        let request = ApiRequest::get(ApiVersion::Legacy, format!("/bots/{bot_id}/stats"));
        self.pipeline.execute(request, cancel).await
    }

    /// Posts statistics for the configured bot.
    pub async fn post_bot_stats(&self, stats: &BotStatsPost, cancel: &CancellationToken) -> Result<()> {
        let bot_id = self.require_bot_id()?;
        let request = ApiRequest::post(ApiVersion::Legacy, format!("/bots/{bot_id}/stats")).json(stats)?;
        self.pipeline.execute_unit(request, cancel).await
    }

    /// Posts a single total server count for the configured bot.
    pub async fn post_server_count(&self, server_count: u64, cancel: &CancellationToken) -> Result<()> {
        self.post_bot_stats(&BotStatsPost::total(server_count), cancel).await
    }

    /// Returns the last 1000 votes of the configured bot.
    pub async fn get_bot_votes(&self, cancel: &CancellationToken) -> Result<Vec<Vote>> {
        let bot_id = self.require_bot_id()?;
        let request = ApiRequest::get(ApiVersion::Legacy, format!("/bots/{bot_id}/votes"));
        self.pipeline.execute(request, cancel).await
    }

    /// Checks whether `user_id` voted for the configured bot in the last 12
    /// hours.
    pub async fn check_user_vote(&self, user_id: Snowflake, cancel: &CancellationToken) -> Result<VoteCheck> {
        let bot_id = self.require_bot_id()?;
        let request = ApiRequest::get(ApiVersion::Legacy, format!("/bots/{bot_id}/check")).query("userId", user_id);
        self.pipeline.execute(request, cancel).await
    }

    /// Replaces the command list shown on the project's page.
    pub async fn update_bot_commands(&self, commands: &[ApplicationCommand], cancel: &CancellationToken) -> Result<()> {
        self.ensure_open()?;
        let request = ApiRequest::post(ApiVersion::Current, "/projects/@me/commands").json(commands)?;
        self.pipeline.execute_unit(request, cancel).await
    }

    /// Returns the latest vote of `user_id` for the project.
    ///
    /// `source` selects the id namespace of `user_id` (e.g. `discord`); when
    /// `None` the server default applies.
    pub async fn get_vote_status(
        &self,
        user_id: Snowflake,
        source: Option<&str>,
        cancel: &CancellationToken,
    ) -> Result<VoteStatus> {
        self.ensure_open()?;
        let mut request = ApiRequest::get(ApiVersion::Current, format!("/projects/@me/votes/{user_id}"));
        if let Some(source) = source.filter(|s| !s.is_empty()) {
            request = request.query("source", source);
        }
        self.pipeline.execute(request, cancel).await
    }

    /// Closes the client.
    ///
    /// Closes the transport if the client created it. Calling this more than
    /// once has no further effect. Later operations fail with
    /// [`Error::Closed`].
    pub fn close(&self) {
        if self.closed.swap(true, Ordering::AcqRel) {
            return;
        }
        if self.owns_transport {
            self.pipeline.transport().close();
        }
        debug!(owns_transport = self.owns_transport, "Closed Top.gg client");
    }

    fn ensure_open(&self) -> Result<()> {
        if self.is_closed() {
            return Err(Error::Closed);
        }
        Ok(())
    }

    fn require_bot_id(&self) -> Result<Snowflake> {
        self.ensure_open()?;
        self.bot_id.ok_or(Error::MissingBotId)
    }
}

impl Drop for TopggClient {
    fn drop(&mut self) {
        self.close();
    }
}
