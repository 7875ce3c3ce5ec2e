//
//  topgg
//  cli/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI command definitions using clap derive macros

mod commands;
mod search;
mod stats;
mod votes;

pub use commands::UpdateCommandsArgs;
pub use search::SearchArgs;
pub use stats::{PostStatsArgs, StatsArgs};
pub use votes::{CheckVoteArgs, VoteStatusArgs, VotesArgs};

use clap::{Parser, Subcommand};
use tokio_util::sync::CancellationToken;

use crate::api::common::Snowflake;
use crate::config::ClientConfig;
use crate::output::{OutputFormat, OutputWriter};
use crate::{exit_codes, Error, TopggClient, TopggClientBuilder};

/// Work with the Top.gg API from the command line
#[derive(Parser, Debug)]
#[command(
    name = "topgg",
    version,
    about = "Work with the Top.gg bot directory from the command line",
    long_about = "topgg queries and updates your bot's listing on Top.gg.\n\n\
                  Settings are read from the config file and the TOPGG_TOKEN, \
                  TOPGG_BOT_ID and TOPGG_BASE_URL environment variables.",
    propagate_version = true,
    after_help = "Use 'topgg <command> --help' for more information about a command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOptions,
}

/// Options shared by every command
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// API token (overrides TOPGG_TOKEN and the config file)
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Id of your bot (overrides TOPGG_BOT_ID and the config file)
    #[arg(long, global = true)]
    pub bot_id: Option<Snowflake>,

    /// Base URL of the API
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

impl GlobalOptions {
    /// Loads settings, applies command-line overrides and builds a client.
    pub fn client(&self) -> crate::Result<TopggClient> {
        let mut config = ClientConfig::load()?;
        if let Some(token) = &self.token {
            config.token = Some(token.clone());
        }
        if let Some(bot_id) = self.bot_id {
            config.bot_id = Some(bot_id);
        }
        if let Some(base_url) = &self.base_url {
            config.base_url = Some(base_url.clone());
        }
        TopggClientBuilder::from_config(&config).build()
    }

    pub fn output(&self) -> OutputWriter {
        OutputWriter::new(if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Table
        })
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search bots listed on Top.gg
    #[command(visible_alias = "s")]
    Search(SearchArgs),

    /// Show your bot's statistics
    Stats(StatsArgs),

    /// Post your bot's server count
    #[command(name = "post-stats")]
    PostStats(PostStatsArgs),

    /// List recent votes for your bot
    Votes(VotesArgs),

    /// Check whether a user voted for your bot in the last 12 hours
    #[command(name = "check-vote")]
    CheckVote(CheckVoteArgs),

    /// Show a user's latest vote for your project
    #[command(name = "vote-status")]
    VoteStatus(VoteStatusArgs),

    /// Replace the commands shown on your bot's page
    #[command(name = "update-commands")]
    UpdateCommands(UpdateCommandsArgs),

    /// Show version information
    Version,
}

impl Commands {
    /// Runs the command. `cancel` aborts the in-flight request.
    pub async fn run(&self, global: &GlobalOptions, cancel: &CancellationToken) -> anyhow::Result<()> {
        match self {
            Self::Search(args) => args.run(global, cancel).await,
            Self::Stats(args) => args.run(global, cancel).await,
            Self::PostStats(args) => args.run(global, cancel).await,
            Self::Votes(args) => args.run(global, cancel).await,
            Self::CheckVote(args) => args.run(global, cancel).await,
            Self::VoteStatus(args) => args.run(global, cancel).await,
            Self::UpdateCommands(args) => args.run(global, cancel).await,
            Self::Version => {
                println!("topgg version {}", crate::VERSION);
                Ok(())
            }
        }
    }
}

/// Maps a command failure to a process exit code.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<Error>() {
        Some(Error::Cancelled) => exit_codes::CANCELLED,
        Some(Error::MissingBotId) => exit_codes::USAGE,
        Some(e) if e.is_auth() => exit_codes::AUTH_ERROR,
        Some(e) if e.is_not_found() => exit_codes::NOT_FOUND,
        Some(e) if e.is_rate_limited() => exit_codes::RATE_LIMIT,
        _ => exit_codes::ERROR,
    }
}
