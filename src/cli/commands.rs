//
//  topgg
//  cli/commands.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Application command listing
//!
//! Reads a JSON array of Discord application commands and replaces the
//! commands shown on the bot's Top.gg page.
//!
//! ```bash
//! topgg update-commands commands.json
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tokio_util::sync::CancellationToken;

use crate::api::current::ApplicationCommand;

use super::GlobalOptions;

#[derive(Args, Debug)]
pub struct UpdateCommandsArgs {
    /// JSON file containing an array of application commands
    pub file: PathBuf,
}

impl UpdateCommandsArgs {
    pub fn read_commands(&self) -> Result<Vec<ApplicationCommand>> {
        let raw = std::fs::read_to_string(&self.file)
            .with_context(|| format!("Failed to read {}", self.file.display()))?;
        serde_json::from_str(&raw).with_context(|| format!("Invalid commands in {}", self.file.display()))
    }

    pub async fn run(&self, global: &GlobalOptions, cancel: &CancellationToken) -> Result<()> {
        let commands = self.read_commands()?;
        let client = global.client()?;
        client.update_bot_commands(&commands, cancel).await?;
        global
            .output()
            .write_success(&format!("Updated {} command(s)", commands.len()));
        Ok(())
    }
}
