//
//  topgg
//  api/legacy/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Legacy Top.gg API (`https://top.gg/api`) types.
//!
//! Requests to this surface carry the raw token as the `Authorization`
//! header. It serves bot search, the caller's own bot statistics, recent
//! votes and vote checks.
//!
//! # Module Organization
//!
//! - [`bots`] - Bot listings, search pages and server statistics
//! - [`votes`] - Recent votes and vote checks
//!
//! # Example
//!
//! ```rust
//! use topgg::api::legacy::{BotStatsPost, ServerCount};
//!
//! let stats = BotStatsPost::per_shard(vec![1200, 1350]);
//! assert_eq!(stats.server_count, ServerCount::PerShard(vec![1200, 1350]));
//! ```
//!
//! # Notes
//!
//! - Identifiers are decimal strings on the wire, see [`Snowflake`](super::common::Snowflake)
//! - Several fields are no longer populated by the API but still decode
//!   when present

pub mod bots;
pub mod votes;

pub use bots::*;
pub use votes::*;
