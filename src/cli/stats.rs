//
//  topgg
//  cli/stats.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Bot statistics commands
//!
//! ## Examples
//!
//! ```bash
//! # Show the listed server count
//! topgg stats
//!
//! # Post a total
//! topgg post-stats 1200
//!
//! # Post per-shard counts
//! topgg post-stats 400 400 400
//!
//! # Post from a single shard
//! topgg post-stats 400 --shard-id 0 --shard-count 3
//! ```

use anyhow::Result;
use clap::Args;
use tokio_util::sync::CancellationToken;

use crate::api::legacy::{BotStatsPost, ServerCount};

use super::GlobalOptions;

#[derive(Args, Debug)]
pub struct StatsArgs {}

impl StatsArgs {
    pub async fn run(&self, global: &GlobalOptions, cancel: &CancellationToken) -> Result<()> {
        let client = global.client()?;
        let stats = client.get_bot_stats(cancel).await?;
        global.output().write(&stats)?;
        Ok(())
    }
}

#[derive(Args, Debug)]
pub struct PostStatsArgs {
    /// Server count; several values are sent as per-shard counts
    #[arg(required = true, num_args = 1..)]
    pub count: Vec<u64>,

    /// Index of the shard posting
    #[arg(long, requires = "shard_count")]
    pub shard_id: Option<u32>,

    /// Total number of shards
    #[arg(long, requires = "shard_id")]
    pub shard_count: Option<u32>,
}

impl PostStatsArgs {
    /// Converts the arguments into a request body.
    pub fn to_post(&self) -> BotStatsPost {
        let server_count = match self.count.as_slice() {
            [total] => ServerCount::Total(*total),
            counts => ServerCount::PerShard(counts.to_vec()),
        };
        let post = BotStatsPost::new(server_count);
        match (self.shard_id, self.shard_count) {
            (Some(id), Some(count)) => post.with_shard(id, count),
            _ => post,
        }
    }

    pub async fn run(&self, global: &GlobalOptions, cancel: &CancellationToken) -> Result<()> {
        let client = global.client()?;
        let post = self.to_post();
        client.post_bot_stats(&post, cancel).await?;
        global
            .output()
            .write_success(&format!("Posted server count {}", post.server_count.total()));
        Ok(())
    }
}
