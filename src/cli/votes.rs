//
//  topgg
//  cli/votes.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Vote commands
//!
//! ## Examples
//!
//! ```bash
//! # Recent voters
//! topgg votes
//!
//! # Did this user vote in the last 12 hours?
//! topgg check-vote 205680187394752512
//!
//! # Latest vote through the current API
//! topgg vote-status 205680187394752512 --source discord
//! ```

use anyhow::Result;
use chrono::Utc;
use clap::Args;
use tokio_util::sync::CancellationToken;

use crate::api::common::Snowflake;

use super::GlobalOptions;

#[derive(Args, Debug)]
pub struct VotesArgs {}

impl VotesArgs {
    pub async fn run(&self, global: &GlobalOptions, cancel: &CancellationToken) -> Result<()> {
        let client = global.client()?;
        let votes = client.get_bot_votes(cancel).await?;

        let writer = global.output();
        writer.write(votes.as_slice())?;
        if votes.is_empty() {
            writer.write_warning("No votes yet");
        }
        Ok(())
    }
}

#[derive(Args, Debug)]
pub struct CheckVoteArgs {
    /// Discord user id
    pub user: Snowflake,
}

impl CheckVoteArgs {
    pub async fn run(&self, global: &GlobalOptions, cancel: &CancellationToken) -> Result<()> {
        let client = global.client()?;
        let check = client.check_user_vote(self.user, cancel).await?;
        global.output().write(&check)?;
        Ok(())
    }
}

#[derive(Args, Debug)]
pub struct VoteStatusArgs {
    /// User id
    pub user: Snowflake,

    /// Platform the id belongs to (e.g. discord)
    #[arg(long)]
    pub source: Option<String>,
}

impl VoteStatusArgs {
    pub async fn run(&self, global: &GlobalOptions, cancel: &CancellationToken) -> Result<()> {
        let client = global.client()?;
        let status = client
            .get_vote_status(self.user, self.source.as_deref(), cancel)
            .await?;

        let writer = global.output();
        writer.write(&status)?;
        if !status.is_active_at(Utc::now()) {
            writer.write_warning("This vote has expired");
        }
        Ok(())
    }
}
