//! Bot configuration
//!
//! Every value has a default fixed in code. A host embedding the bot may
//! override any subset of them with a YAML document:
//!
//! ```yaml
//! trigger: np
//! request_timeout_secs: 5
//! max_list_count: 20
//! ```

use crate::error::{Error, Result};
use pmospotify::client::{DEFAULT_PLAYLIST_URL, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_STATUS_URL};
use pmospotify::SpotifyStatusClient;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default command trigger
pub const DEFAULT_TRIGGER: &str = "lm";

/// Number of tracks listed when `list` has no argument
pub const DEFAULT_LIST_COUNT: usize = 5;

/// Smallest accepted `list` count
pub const MIN_LIST_COUNT: usize = 1;

/// Largest accepted `list` count
pub const MAX_LIST_COUNT: usize = 50;

/// Default User-Agent
pub const DEFAULT_USER_AGENT: &str = concat!("pmolmbot/", env!("CARGO_PKG_VERSION"));

/// Handler configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    /// Word that triggers the command (token 0)
    pub trigger: String,
    pub status_url: String,
    pub playlist_url: String,
    pub request_timeout_secs: u64,
    pub default_list_count: usize,
    pub min_list_count: usize,
    pub max_list_count: usize,
    pub user_agent: String,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            trigger: DEFAULT_TRIGGER.to_string(),
            status_url: DEFAULT_STATUS_URL.to_string(),
            playlist_url: DEFAULT_PLAYLIST_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            default_list_count: DEFAULT_LIST_COUNT,
            min_list_count: MIN_LIST_COUNT,
            max_list_count: MAX_LIST_COUNT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl BotConfig {
    /// Decode a YAML document, keeping defaults for missing keys
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the list bounds make sense
    pub fn validate(&self) -> Result<()> {
        let bounds_ok = self.min_list_count >= 1
            && self.min_list_count <= self.max_list_count
            && (self.min_list_count..=self.max_list_count).contains(&self.default_list_count);

        if bounds_ok {
            Ok(())
        } else {
            Err(Error::InvalidListBounds {
                min: self.min_list_count,
                max: self.max_list_count,
                default: self.default_list_count,
            })
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Bring a requested list count into `[min_list_count, max_list_count]`
    pub fn clamp_list_count(&self, requested: i64) -> usize {
        let min = self.min_list_count as i64;
        let max = self.max_list_count as i64;
        requested.max(min).min(max) as usize
    }

    /// Build the relay client described by this configuration
    pub fn build_client(&self) -> Result<SpotifyStatusClient> {
        let client = SpotifyStatusClient::builder()
            .status_url(&self.status_url)
            .playlist_url(&self.playlist_url)
            .timeout(self.request_timeout())
            .user_agent(&self.user_agent)
            .build()?;
        Ok(client)
    }
}
