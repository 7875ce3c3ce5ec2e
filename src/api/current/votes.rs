//
//  topgg
//  api/current/votes.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Vote status of a single user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The latest vote a user cast for the caller's project.
///
/// Returned by `GET /projects/@me/votes/{user_id}`. A user without an active
/// vote yields a 404, not an empty status.
///
/// # Example
///
/// ```rust
/// use topgg::api::current::VoteStatus;
///
/// let status: VoteStatus = serde_json::from_str(
///     r#"{"created_at":"2025-01-01T00:00:00Z","expires_at":"2025-01-01T12:00:00Z","weight":2}"#,
/// ).unwrap();
/// assert_eq!(status.weight, 2);
/// assert_eq!((status.expires_at - status.created_at).num_hours(), 12);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteStatus {
    /// When the vote was cast.
    pub created_at: DateTime<Utc>,

    /// When the user can vote again.
    pub expires_at: DateTime<Utc>,

    /// How many votes this counted as (weekend votes count double).
    #[serde(default)]
    pub weight: u32,
}

impl VoteStatus {
    /// Returns `true` while the vote has not expired at `now`.
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::common::case_insensitive;

    #[test]
    fn test_decode_with_offset_timestamps() {
        let status: VoteStatus = case_insensitive::from_str(
            r#"{"Created_At":"2025-03-01T10:00:00+02:00","expires_at":"2025-03-01T20:00:00+02:00","weight":1}"#,
        )
        .unwrap();
        assert_eq!(status.created_at.to_rfc3339(), "2025-03-01T08:00:00+00:00");
        assert!(status.is_active_at(status.created_at));
        assert!(!status.is_active_at(status.expires_at));
    }

    #[test]
    fn test_missing_timestamps_are_an_error() {
        assert!(case_insensitive::from_str::<VoteStatus>(r#"{"weight":1}"#).is_err());
    }
}
