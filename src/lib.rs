//
//  topgg
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Top.gg Client Library
//!
//! An async client for the [Top.gg](https://top.gg) bot directory API, plus
//! the `topgg` command-line tool built on it.
//!
//! ## Overview
//!
//! Bot owners use the client to publish their bot's server count, read
//! their listing's statistics and votes, and check whether a user has
//! voted. It talks to both generations of the API:
//!
//! - **Legacy** (`https://top.gg/api`): bots, stats and votes, authorized
//!   with the raw token
//! - **Current** (`https://top.gg/api/v1`): projects, commands and vote
//!   status, authorized with `Bearer <token>`
//!
//! ## Module Structure
//!
//! - [`api`]: The client, its builder, the request pipeline and wire types
//! - [`auth`]: The API credential and authorization schemes
//! - [`config`]: Settings from the config file and environment
//! - [`error`]: Library error type
//! - [`output`]: Table and JSON rendering for the CLI
//! - [`cli`]: Command-line interface definitions using clap
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use tokio_util::sync::CancellationToken;
//! use topgg::TopggClient;
//!
//! # async fn example() -> topgg::Result<()> {
//! let client = TopggClient::builder()
//!     .token_from_env("TOPGG_TOKEN")
//!     .bot_id(264811613708746752u64)
//!     .build()?;
//!
//! let cancel = CancellationToken::new();
//! client.post_server_count(1200, &cancel).await?;
//!
//! let stats = client.get_bot_stats(&cancel).await?;
//! println!("Listed servers: {:?}", stats.server_count);
//! # Ok(())
//! # }
//! ```
//!
//! ## Failures
//!
//! | HTTP status | [`api::ApiError`] variant |
//! |-------------|---------------------------|
//! | 404 | `NotFound` |
//! | 429 | `RateLimited` (with the retry delay) |
//! | 400-499 | `Client` |
//! | 500+ | `Server` |

pub mod api;

/// API credential handling.
///
/// The token is kept out of `Debug` output and logs.
pub mod auth;

pub mod cli;

/// Settings from `config.toml` and `TOPGG_*` environment variables.
pub mod config;

pub mod error;

pub mod output;

pub use api::common::Snowflake;
pub use api::{TopggClient, TopggClientBuilder};
pub use cli::Cli;
pub use error::{Error, Result};

/// Application name, used for display and configuration paths.
pub const APP_NAME: &str = "topgg";

/// Crate version from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit codes for the CLI.
///
/// - `0`: Success
/// - `1-3`: General errors and usage issues
/// - `4-7`: Authentication-related issues
/// - `8-15`: Resource-related issues
/// - `16-31`: Operation-related issues
/// - `32+`: External service issues
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;

    /// General error. Check stderr for details.
    pub const ERROR: i32 = 1;

    /// Invalid usage, such as a command that needs a bot id without one.
    pub const USAGE: i32 = 2;

    /// Token missing, malformed or rejected by Top.gg.
    pub const AUTH_ERROR: i32 = 4;

    /// The bot or user does not exist.
    pub const NOT_FOUND: i32 = 8;

    /// Interrupted with Ctrl+C.
    pub const CANCELLED: i32 = 16;

    /// Top.gg rate limit exceeded.
    pub const RATE_LIMIT: i32 = 32;
}
