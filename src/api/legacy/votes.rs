//
//  topgg
//  api/legacy/votes.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Vote types of the legacy API.

use serde::{Deserialize, Serialize};

use crate::api::common::Snowflake;

/// A user who recently voted for the caller's bot.
///
/// `GET /bots/{id}/votes` returns a bare array of these, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vote {
    /// The voter's Discord user id.
    pub id: Snowflake,

    #[serde(default)]
    pub username: String,

    /// No longer populated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discriminator: Option<String>,

    /// Avatar URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// Result of checking whether a user voted in the last 12 hours.
///
/// # Example
///
/// ```rust
/// use topgg::api::legacy::VoteCheck;
///
/// let check: VoteCheck = serde_json::from_str(r#"{"voted":1}"#).unwrap();
/// assert!(check.has_voted());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteCheck {
    /// `1` if the user voted, `0` otherwise.
    pub voted: u8,
}

impl VoteCheck {
    pub fn has_voted(&self) -> bool {
        self.voted == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::common::case_insensitive;

    #[test]
    fn test_votes_array() {
        let votes: Vec<Vote> =
            case_insensitive::from_str(r#"[{"id":"1","username":"User1"},{"id":"2","username":"User2","Avatar":null}]"#)
                .unwrap();
        assert_eq!(votes.len(), 2);
        assert_eq!(votes[0].id, Snowflake::new(1));
        assert_eq!(votes[1].username, "User2");
        assert_eq!(votes[1].avatar, None);
    }

    #[test]
    fn test_vote_check() {
        let check: VoteCheck = case_insensitive::from_str(r#"{"voted":0}"#).unwrap();
        assert!(!check.has_voted());
        assert!(case_insensitive::from_str::<VoteCheck>("{}").is_err());
    }
}
