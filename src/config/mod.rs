//
//  topgg
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! Client settings come from an optional TOML file and the environment.
//!
//! ## Load Order
//!
//! 1. `config.toml` in the platform configuration directory, if it exists
//! 2. Environment overrides: `TOPGG_TOKEN`, `TOPGG_BOT_ID`, `TOPGG_BASE_URL`
//!
//! ## File Format
//!
//! ```toml
//! token = "your-api-token"
//! bot_id = "264811613708746752"
//! timeout_secs = 30
//! ```
//!
//! ## Platform-Specific Paths
//!
//! | Platform | Path |
//! |----------|------|
//! | Linux | `~/.config/topgg/config.toml` |
//! | macOS | `~/Library/Application Support/topgg/config.toml` |
//! | Windows | `C:\Users\<User>\AppData\Roaming\topgg\config\config.toml` |
//!
//! ## Example
//!
//! ```rust,no_run
//! use topgg::config::ClientConfig;
//! use topgg::TopggClientBuilder;
//!
//! let config = ClientConfig::load()?;
//! let client = TopggClientBuilder::from_config(&config).build()?;
//! # Ok::<(), topgg::Error>(())
//! ```

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::common::{optional, Snowflake};
use crate::error::{Error, Result};

/// Environment variable holding the API token.
pub const TOKEN_ENV: &str = "TOPGG_TOKEN";

/// Environment variable holding the bot id.
pub const BOT_ID_ENV: &str = "TOPGG_BOT_ID";

/// Environment variable overriding the API base URL.
pub const BASE_URL_ENV: &str = "TOPGG_BASE_URL";

/// Client settings.
///
/// Every field is optional. Missing values fall back to the builder's
/// defaults. `Debug` output hides the token.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// API token from the bot's Top.gg webhooks page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Id of the caller's own bot.
    #[serde(default, with = "optional", skip_serializing_if = "Option::is_none")]
    pub bot_id: Option<Snowflake>,

    /// Base URL of the legacy API; the current API is derived from it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Request timeout in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

impl ClientConfig {
    /// Loads the default file (if any) and applies environment overrides.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigRead`] or [`Error::ConfigParse`] if the file
    /// exists but cannot be used. A missing file is not an error.
    pub fn load() -> Result<Self> {
        let mut config = match Self::default_path() {
            Some(path) if path.exists() => Self::load_from(&path)?,
            _ => Self::default(),
        };
        config.apply_env();
        Ok(config)
    }

    /// Loads settings from `path` without consulting the environment.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&content).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "Loaded Top.gg config");
        Ok(config)
    }

    /// Returns where the default config file lives, if a home directory is
    /// known.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "topgg").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Applies overrides from the process environment.
    pub fn apply_env(&mut self) {
        self.apply_env_from(|key| std::env::var(key).ok());
    }

    /// Applies overrides from `lookup`.
    ///
    /// Empty values are ignored. A bot id that does not parse is ignored
    /// too, keeping whatever the file said.
    pub fn apply_env_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(token) = get(TOKEN_ENV) {
            self.token = Some(token);
        }
        if let Some(raw) = get(BOT_ID_ENV) {
            match raw.parse() {
                Ok(id) => self.bot_id = Some(id),
                Err(e) => debug!(error = %e, "Ignoring unparseable {}", BOT_ID_ENV),
            }
        }
        if let Some(url) = get(BASE_URL_ENV) {
            self.base_url = Some(url);
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("bot_id", &self.bot_id)
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
