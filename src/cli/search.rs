//
//  topgg
//  cli/search.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Bot search command
//!
//! ## Examples
//!
//! ```bash
//! # Top ten bots by monthly points
//! topgg search --limit 10 --sort -monthlyPoints
//!
//! # Only ids and names
//! topgg search --field id --field username --json
//! ```

use anyhow::Result;
use clap::Args;
use tokio_util::sync::CancellationToken;

use crate::api::BotSortField;

use super::GlobalOptions;

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Maximum number of bots to return (at most 500)
    #[arg(long, short = 'l')]
    pub limit: Option<u32>,

    /// Number of bots to skip
    #[arg(long, short = 'o')]
    pub offset: Option<u32>,

    /// Sort key, prefix with '-' for descending (e.g. -points)
    #[arg(long, short = 's', allow_hyphen_values = true)]
    pub sort: Option<BotSortField>,

    /// Field to include in each result (repeatable)
    #[arg(long = "field", short = 'f')]
    pub field: Vec<String>,
}

impl SearchArgs {
    pub async fn run(&self, global: &GlobalOptions, cancel: &CancellationToken) -> Result<()> {
        let client = global.client()?;

        let mut search = client.search().fields(self.field.iter().cloned());
        if let Some(limit) = self.limit {
            search = search.limit(limit);
        }
        if let Some(offset) = self.offset {
            search = search.offset(offset);
        }
        if let Some(sort) = self.sort {
            search = search.sort_by(sort);
        }

        let page = search.execute(cancel).await?;

        let writer = global.output();
        writer.write(&page)?;
        if page.results.is_empty() {
            writer.write_warning("No bots matched");
        }
        Ok(())
    }
}
