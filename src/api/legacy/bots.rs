//
//  topgg
//  api/legacy/bots.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Bot listing, search and statistics types.
//!
//! # Example
//!
//! ```rust
//! use topgg::api::legacy::BotSearchResult;
//!
//! let page: BotSearchResult = serde_json::from_str(
//!     r#"{"results":[{"id":"1","username":"Bot1"}],"limit":50,"offset":0,"count":1,"total":100}"#,
//! ).unwrap();
//! assert_eq!(page.results[0].id.get(), 1);
//! assert_eq!(page.total, 100);
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::common::{optional, Snowflake};

/// A bot listed on Top.gg.
///
/// Only `id` is guaranteed. Searches with a field selection return partial
/// bots, so everything else may be absent.
///
/// # Example
///
/// ```rust
/// use topgg::api::legacy::Bot;
///
/// let bot: Bot = serde_json::from_str(r#"{"id":"264811613708746752","owners":["1","2"]}"#).unwrap();
/// assert_eq!(bot.owners.map(|o| o.len()), Some(2));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Bot {
    /// The bot's Discord user id.
    pub id: Snowflake,

    /// The bot's application (client) id.
    #[serde(rename = "clientid", default, with = "optional", skip_serializing_if = "Option::is_none")]
    pub client_id: Option<Snowflake>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// No longer populated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discriminator: Option<String>,

    /// Avatar URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,

    /// No longer populated.
    #[serde(rename = "defAvatar", default, skip_serializing_if = "Option::is_none")]
    pub def_avatar: Option<String>,

    /// No longer populated.
    #[serde(rename = "bannerUrl", default, skip_serializing_if = "Option::is_none")]
    pub banner_url: Option<String>,

    /// No longer populated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lib: Option<String>,

    /// Command prefix.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,

    #[serde(rename = "shortdesc", default, skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,

    /// Long description, may contain HTML or Markdown.
    #[serde(rename = "longdesc", default, skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    /// Support server invite code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub support: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,

    /// Owner user ids; the first entry is the primary owner.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owners: Option<Vec<Snowflake>>,

    /// No longer populated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guilds: Option<Vec<Snowflake>>,

    /// Custom invite URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invite: Option<String>,

    /// When the bot was approved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,

    /// No longer populated.
    #[serde(rename = "certifiedBot", default)]
    pub certified_bot: bool,

    /// Vanity URL slug.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vanity: Option<String>,

    /// Upvotes of all time.
    #[serde(default)]
    pub points: u64,

    /// Upvotes this month.
    #[serde(rename = "monthlyPoints", default)]
    pub monthly_points: u64,

    /// No longer populated.
    #[serde(rename = "donatebotguildid", default, with = "optional", skip_serializing_if = "Option::is_none")]
    pub donate_bot_guild_id: Option<Snowflake>,

    /// Last posted server count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_count: Option<u64>,

    /// No longer populated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shard_count: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviews: Option<BotReviews>,
}

/// Review summary of a bot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BotReviews {
    /// Average score out of 5.
    #[serde(rename = "averageScore", default)]
    pub average_score: f64,

    /// Number of reviews.
    #[serde(default)]
    pub count: u64,
}

/// One page of bot search results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BotSearchResult {
    /// Bots on this page.
    #[serde(default)]
    pub results: Vec<Bot>,

    /// Page size used by the server.
    #[serde(default)]
    pub limit: u32,

    /// Offset of this page.
    #[serde(default)]
    pub offset: u32,

    /// Number of bots on this page.
    #[serde(default)]
    pub count: u32,

    /// Number of bots matching the search.
    #[serde(default)]
    pub total: u64,
}

/// Statistics of the caller's own bot, as returned by the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BotStats {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_count: Option<u64>,

    /// No longer populated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shards: Option<Vec<u64>>,

    /// No longer populated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shard_count: Option<u32>,
}

/// The `server_count` field of a stats submission.
///
/// Serializes as a bare number or as an array with one count per shard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ServerCount {
    Total(u64),
    PerShard(Vec<u64>),
}

impl ServerCount {
    /// Returns the number of servers across all shards.
    pub fn total(&self) -> u64 {
        match self {
            Self::Total(count) => *count,
            Self::PerShard(counts) => counts.iter().sum(),
        }
    }
}

impl From<u64> for ServerCount {
    fn from(count: u64) -> Self {
        Self::Total(count)
    }
}

impl From<Vec<u64>> for ServerCount {
    fn from(counts: Vec<u64>) -> Self {
        Self::PerShard(counts)
    }
}

/// Statistics submitted for the caller's own bot.
///
/// # Example
///
/// ```rust
/// use topgg::api::legacy::BotStatsPost;
///
/// let stats = BotStatsPost::total(1000).with_shard(0, 2);
/// assert_eq!(
///     serde_json::to_string(&stats).unwrap(),
///     r#"{"server_count":1000,"shard_id":0,"shard_count":2}"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotStatsPost {
    pub server_count: ServerCount,

    /// Per-shard server counts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shards: Option<Vec<u64>>,

    /// Zero-based id of the shard posting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shard_id: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shard_count: Option<u32>,
}

impl BotStatsPost {
    /// A submission with a single total count.
    pub fn total(server_count: u64) -> Self {
        Self::new(ServerCount::Total(server_count))
    }

    /// A submission with one count per shard.
    pub fn per_shard(counts: Vec<u64>) -> Self {
        Self::new(ServerCount::PerShard(counts))
    }

    pub fn new(server_count: ServerCount) -> Self {
        Self {
            server_count,
            shards: None,
            shard_id: None,
            shard_count: None,
        }
    }

    /// Marks the submission as coming from one shard of `shard_count`.
    pub fn with_shard(mut self, shard_id: u32, shard_count: u32) -> Self {
        self.shard_id = Some(shard_id);
        self.shard_count = Some(shard_count);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::common::case_insensitive;
    use serde_json::json;

    #[test]
    fn test_bot_decodes_mixed_identifiers() {
        let bot: Bot = case_insensitive::from_str(
            r#"{
                "id": "264811613708746752",
                "clientId": 264811613708746752,
                "username": "Luca",
                "MonthlyPoints": 19,
                "donatebotguildid": "",
                "owners": [],
                "date": "2017-04-26T18:08:17.125Z",
                "reviews": {"averageScore": 4.2, "count": 10}
            }"#,
        )
        .unwrap();

        assert_eq!(bot.id, Snowflake::new(264811613708746752));
        assert_eq!(bot.client_id, Some(Snowflake::new(264811613708746752)));
        assert_eq!(bot.monthly_points, 19);
        assert_eq!(bot.donate_bot_guild_id, None);
        assert_eq!(bot.owners, Some(vec![]));
        assert!(bot.date.is_some());
        assert_eq!(bot.reviews.map(|r| r.count), Some(10));
    }

    #[test]
    fn test_bot_requires_id() {
        assert!(case_insensitive::from_str::<Bot>(r#"{"username":"NoId"}"#).is_err());
    }

    #[test]
    fn test_search_page() {
        let page: BotSearchResult = case_insensitive::from_str(
            r#"{"results":[{"id":"1","username":"Bot1"},{"id":"2","username":"Bot2"}],"limit":50,"offset":0,"count":2,"total":100}"#,
        )
        .unwrap();
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.results[1].username.as_deref(), Some("Bot2"));
        assert_eq!(page.count, 2);
        assert_eq!(page.total, 100);
    }

    #[test]
    fn test_server_count_shapes() {
        assert_eq!(
            serde_json::to_value(BotStatsPost::total(1000)).unwrap(),
            json!({"server_count": 1000})
        );
        assert_eq!(
            serde_json::to_value(BotStatsPost::per_shard(vec![10, 20])).unwrap(),
            json!({"server_count": [10, 20]})
        );
        assert_eq!(ServerCount::PerShard(vec![10, 20]).total(), 30);
    }

    #[test]
    fn test_bot_serializes_ids_as_strings() {
        let bot = Bot {
            id: Snowflake::new(5),
            owners: Some(vec![Snowflake::new(6)]),
            ..Default::default()
        };
        let value = serde_json::to_value(&bot).unwrap();
        assert_eq!(value["id"], json!("5"));
        assert_eq!(value["owners"], json!(["6"]));
        assert!(value.get("clientid").is_none());
    }
}
