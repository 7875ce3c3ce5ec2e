//
//  topgg
//  output/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Output Formatting Module
//!
//! Renders API results for the command-line tool, either as tables for
//! people or as pretty-printed JSON for scripts.
//!
//! ## Overview
//!
//! - [`OutputFormat`]: Enum representing available output formats
//! - [`OutputWriter`]: Writes values and status messages in the chosen format
//! - [`TableOutput`]: Types that can be rendered as a table
//! - [`create_table`]: Table with the shared preset
//!
//! ## Example
//!
//! ```rust,no_run
//! use topgg::api::legacy::VoteCheck;
//! use topgg::output::{OutputFormat, OutputWriter};
//!
//! let writer = OutputWriter::new(OutputFormat::Table);
//! writer.write(&VoteCheck { voted: 1 })?;
//! # Ok::<(), serde_json::Error>(())
//! ```

use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};
use console::style;
use serde::Serialize;

use crate::api::current::VoteStatus;
use crate::api::legacy::{Bot, BotSearchResult, BotStats, Vote, VoteCheck};

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Unicode tables, colored when the terminal supports it.
    #[default]
    Table,
    /// Pretty-printed JSON.
    Json,
}

/// Writes values and status messages in one format.
pub struct OutputWriter {
    format: OutputFormat,
    color: bool,
}

impl OutputWriter {
    /// Creates a writer; color follows the terminal's capabilities.
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            color: console::colors_enabled(),
        }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Writes `value` to stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn write<T: Serialize + TableOutput + ?Sized>(&self, value: &T) -> Result<(), serde_json::Error> {
        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
            OutputFormat::Table => println!("{}", value.to_table(self.color)),
        }
        Ok(())
    }

    /// Writes a success message to stdout. Suppressed in JSON mode.
    pub fn write_success(&self, msg: &str) {
        if self.format == OutputFormat::Json {
            return;
        }
        if self.color {
            println!("{} {}", style("✓").green().bold(), msg);
        } else {
            println!("✓ {}", msg);
        }
    }

    /// Writes a warning message to stderr.
    pub fn write_warning(&self, msg: &str) {
        if self.color {
            eprintln!("{} {}", style("warning:").yellow().bold(), msg);
        } else {
            eprintln!("warning: {}", msg);
        }
    }

    /// Writes an error message to stderr.
    pub fn write_error(&self, msg: &str) {
        if self.color {
            eprintln!("{} {}", style("error:").red().bold(), msg);
        } else {
            eprintln!("error: {}", msg);
        }
    }
}

/// Types that can be rendered as a table.
pub trait TableOutput {
    fn to_table(&self, color: bool) -> Table;
}

/// Creates a table with the shared preset and dynamic column widths.
pub fn create_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn header(table: &mut Table, labels: &[&str], color: bool) {
    let cells = labels.iter().map(|label| {
        let cell = Cell::new(label);
        if color {
            cell.add_attribute(Attribute::Bold).fg(Color::Cyan)
        } else {
            cell
        }
    });
    table.set_header(cells);
}

fn or_dash<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

fn key_value_table(rows: Vec<(&str, String)>, color: bool) -> Table {
    let mut table = create_table();
    for (key, value) in rows {
        let key = if color {
            Cell::new(key).add_attribute(Attribute::Bold)
        } else {
            Cell::new(key)
        };
        table.add_row(vec![key, Cell::new(value)]);
    }
    table
}

fn bot_row(bot: &Bot) -> Vec<String> {
    vec![
        bot.id.to_string(),
        bot.username.clone().unwrap_or_default(),
        or_dash(bot.server_count),
        bot.points.to_string(),
        bot.monthly_points.to_string(),
        bot.short_description.clone().unwrap_or_default(),
    ]
}

impl TableOutput for BotSearchResult {
    fn to_table(&self, color: bool) -> Table {
        let mut table = create_table();
        header(
            &mut table,
            &["ID", "Username", "Servers", "Points", "Monthly", "Description"],
            color,
        );
        for bot in &self.results {
            table.add_row(bot_row(bot));
        }
        table
    }
}

impl TableOutput for BotStats {
    fn to_table(&self, color: bool) -> Table {
        key_value_table(
            vec![
                ("Servers", or_dash(self.server_count)),
                ("Shards", or_dash(self.shard_count)),
            ],
            color,
        )
    }
}

impl TableOutput for [Vote] {
    fn to_table(&self, color: bool) -> Table {
        let mut table = create_table();
        header(&mut table, &["ID", "Username"], color);
        for vote in self {
            table.add_row(vec![vote.id.to_string(), vote.username.clone()]);
        }
        table
    }
}

impl TableOutput for VoteCheck {
    fn to_table(&self, color: bool) -> Table {
        let voted = if self.has_voted() { "yes" } else { "no" };
        key_value_table(vec![("Voted", voted.to_string())], color)
    }
}

impl TableOutput for VoteStatus {
    fn to_table(&self, color: bool) -> Table {
        key_value_table(
            vec![
                ("Voted at", self.created_at.to_rfc3339()),
                ("Expires at", self.expires_at.to_rfc3339()),
                ("Weight", self.weight.to_string()),
            ],
            color,
        )
    }
}
