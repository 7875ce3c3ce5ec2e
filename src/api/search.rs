//
//  topgg
//  api/search.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Bot Search
//!
//! Query parameters and the fluent builder for `GET /bots`.
//!
//! Every parameter is optional. Parameters that were never set are left out
//! of the query string entirely so the server applies its own defaults
//! (`limit` 50, capped at 500 upstream). No value is clamped locally; an
//! out-of-range limit comes back as a classified client error.
//!
//! ## Example
//!
//! ```rust,no_run
//! use tokio_util::sync::CancellationToken;
//! use topgg::api::BotSortField;
//! use topgg::TopggClient;
//!
//! # async fn example(client: TopggClient) -> topgg::Result<()> {
//! let page = client
//!     .search()
//!     .limit(10)
//!     .sort_by(BotSortField::MonthlyPointsDesc)
//!     .include_field("id")
//!     .include_field("username")
//!     .execute(&CancellationToken::new())
//!     .await?;
//!
//! for bot in &page.results {
//!     println!("{} ({})", bot.username.as_deref().unwrap_or("?"), bot.id);
//! }
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use tokio_util::sync::CancellationToken;

use super::client::TopggClient;
use super::legacy::BotSearchResult;
use crate::error::Result;

/// Sort order for bot search.
///
/// Six fields, each ascending or descending. Descending keys are sent with a
/// leading minus sign.
///
/// | Variant | Wire value |
/// |---------|------------|
/// | `Username` / `UsernameDesc` | `username` / `-username` |
/// | `Id` / `IdDesc` | `id` / `-id` |
/// | `ServerCount` / `ServerCountDesc` | `server_count` / `-server_count` |
/// | `Points` / `PointsDesc` | `points` / `-points` |
/// | `MonthlyPoints` / `MonthlyPointsDesc` | `monthlyPoints` / `-monthlyPoints` |
/// | `Date` / `DateDesc` | `date` / `-date` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BotSortField {
    Username,
    UsernameDesc,
    Id,
    IdDesc,
    ServerCount,
    ServerCountDesc,
    Points,
    PointsDesc,
    MonthlyPoints,
    MonthlyPointsDesc,
    Date,
    DateDesc,
}

impl BotSortField {
    /// Every sort key, ascending before descending.
    pub const ALL: [BotSortField; 12] = [
        Self::Username,
        Self::UsernameDesc,
        Self::Id,
        Self::IdDesc,
        Self::ServerCount,
        Self::ServerCountDesc,
        Self::Points,
        Self::PointsDesc,
        Self::MonthlyPoints,
        Self::MonthlyPointsDesc,
        Self::Date,
        Self::DateDesc,
    ];

    /// Returns the value sent as the `sort` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::UsernameDesc => "-username",
            Self::Id => "id",
            Self::IdDesc => "-id",
            Self::ServerCount => "server_count",
            Self::ServerCountDesc => "-server_count",
            Self::Points => "points",
            Self::PointsDesc => "-points",
            Self::MonthlyPoints => "monthlyPoints",
            Self::MonthlyPointsDesc => "-monthlyPoints",
            Self::Date => "date",
            Self::DateDesc => "-date",
        }
    }

    pub fn is_descending(self) -> bool {
        self.as_str().starts_with('-')
    }
}

impl fmt::Display for BotSortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown sort key.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown sort field '{0}'")]
pub struct ParseSortFieldError(String);

impl FromStr for BotSortField {
    type Err = ParseSortFieldError;

    /// Parses a wire value such as `-points`. Matching ignores ASCII case.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseSortFieldError(s.to_string()))
    }
}

/// Parameters of a bot search.
///
/// # Example
///
/// ```rust
/// use topgg::api::{BotSortField, SearchParams};
///
/// let params = SearchParams {
///     limit: Some(5),
///     sort: Some(BotSortField::PointsDesc),
///     ..Default::default()
/// };
/// assert_eq!(
///     params.query_pairs(),
///     vec![("limit", "5".to_string()), ("sort", "-points".to_string())]
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    /// Maximum number of results (server default 50, at most 500).
    pub limit: Option<u32>,
    /// Number of results to skip.
    pub offset: Option<u32>,
    /// Sort order.
    pub sort: Option<BotSortField>,
    /// Fields to include in each result. Empty means all fields.
    pub fields: Vec<String>,
}

impl SearchParams {
    /// Encodes the parameters that were set, in a stable order.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();

        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(offset) = self.offset {
            pairs.push(("offset", offset.to_string()));
        }
        if let Some(sort) = self.sort {
            pairs.push(("sort", sort.as_str().to_string()));
        }
        if !self.fields.is_empty() {
            pairs.push(("fields", self.fields.join(",")));
        }

        pairs
    }
}

/// Fluent builder for one bot search, obtained from
/// [`TopggClient::search`].
///
/// Each setter consumes and returns the builder; [`execute`](Self::execute)
/// consumes it for good, so a builder runs at most one query.
#[must_use = "a search does nothing until `execute` is awaited"]
pub struct BotSearch<'a> {
    client: &'a TopggClient,
    params: SearchParams,
}

impl<'a> BotSearch<'a> {
    pub(crate) fn new(client: &'a TopggClient) -> Self {
        Self {
            client,
            params: SearchParams::default(),
        }
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.params.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u32) -> Self {
        self.params.offset = Some(offset);
        self
    }

    pub fn sort_by(mut self, sort: BotSortField) -> Self {
        self.params.sort = Some(sort);
        self
    }

    /// Replaces the field selection.
    pub fn fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.params.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Appends one field to the selection.
    pub fn include_field(mut self, field: impl Into<String>) -> Self {
        self.params.fields.push(field.into());
        self
    }

    /// Returns the parameters accumulated so far.
    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    /// Runs the search.
    ///
    /// # Errors
    ///
    /// See [`TopggClient::search_bots`].
    pub async fn execute(self, cancel: &CancellationToken) -> Result<BotSearchResult> {
        self.client.search_bots(&self.params, cancel).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_wire_values() {
        assert_eq!(BotSortField::PointsDesc.as_str(), "-points");
        assert_eq!(BotSortField::MonthlyPoints.as_str(), "monthlyPoints");
        assert_eq!(BotSortField::ServerCountDesc.to_string(), "-server_count");

        for field in BotSortField::ALL {
            let bare = field.as_str().trim_start_matches('-');
            assert_eq!(field.is_descending(), bare != field.as_str());
            assert_eq!(field.as_str().parse::<BotSortField>().unwrap(), field);
        }
    }

    #[test]
    fn test_sort_from_str() {
        assert_eq!("-MONTHLYPOINTS".parse::<BotSortField>().unwrap(), BotSortField::MonthlyPointsDesc);
        assert!("votes".parse::<BotSortField>().is_err());
    }

    #[test]
    fn test_limit_and_sort_only() {
        let params = SearchParams {
            limit: Some(5),
            sort: Some(BotSortField::PointsDesc),
            ..Default::default()
        };
        let pairs = params.query_pairs();
        assert_eq!(pairs, vec![("limit", "5".to_string()), ("sort", "-points".to_string())]);
        assert!(pairs.iter().all(|(k, _)| *k != "offset" && *k != "fields"));
    }

    #[test]
    fn test_empty_params_send_nothing() {
        assert!(SearchParams::default().query_pairs().is_empty());
    }

    #[test]
    fn test_fields_are_comma_joined() {
        let params = SearchParams {
            offset: Some(0),
            fields: vec!["id".to_string(), "username".to_string()],
            ..Default::default()
        };
        assert_eq!(
            params.query_pairs(),
            vec![("offset", "0".to_string()), ("fields", "id,username".to_string())]
        );
    }
}
