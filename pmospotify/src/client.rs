//! HTTP client for the Spotify now-playing relay
//!
//! The relay exposes two JSON documents:
//! - the status endpoint, describing the track currently playing
//! - the playlist snapshot endpoint, listing the tracks of the shared playlist
//!
//! The client is stateless: every call performs a fresh GET and nothing is
//! cached between calls.

use crate::error::{Error, Result};
use crate::models::{PlaybackStatus, PlaylistSnapshot};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Default status endpoint
pub const DEFAULT_STATUS_URL: &str = "https://spotify.fimall.filegear-sg.me/get";

/// Default playlist snapshot endpoint
pub const DEFAULT_PLAYLIST_URL: &str = "https://spotify.fimall.filegear-sg.me/playlist";

/// Default timeout for HTTP requests (10 seconds)
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Default User-Agent
pub const DEFAULT_USER_AGENT: &str = concat!("pmospotify/", env!("CARGO_PKG_VERSION"));

/// Spotify relay HTTP client
///
/// # Example
///
/// ```no_run
/// use pmospotify::SpotifyStatusClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = SpotifyStatusClient::new()?;
///     let status = client.now_playing().await?;
///     println!("{} - {}", status.title, status.artist);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct SpotifyStatusClient {
    client: Client,
    status_url: Url,
    playlist_url: Url,
    timeout: Duration,
}

impl SpotifyStatusClient {
    /// Create a new client with default settings
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Create a builder for configuring the client
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Get the status endpoint
    pub fn status_url(&self) -> &Url {
        &self.status_url
    }

    /// Get the playlist snapshot endpoint
    pub fn playlist_url(&self) -> &Url {
        &self.playlist_url
    }

    /// Get the per-request timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Fetch the track currently playing
    pub async fn now_playing(&self) -> Result<PlaybackStatus> {
        self.get_json(&self.status_url).await
    }

    /// Fetch a fresh playlist snapshot
    pub async fn playlist(&self) -> Result<PlaylistSnapshot> {
        let snapshot: PlaylistSnapshot = self.get_json(&self.playlist_url).await?;

        debug!(
            loaded = snapshot.loaded_count(),
            declared = snapshot.total_tracks_retrieved,
            "Received playlist snapshot"
        );

        Ok(snapshot)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &Url) -> Result<T> {
        debug!(%url, "Fetching");

        let response = self
            .client
            .get(url.clone())
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status(status));
        }

        // Body is decoded separately so a malformed document is reported
        // as a JSON error and not as a transport error.
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

/// Builder for configuring a SpotifyStatusClient
#[derive(Debug)]
pub struct ClientBuilder {
    client: Option<Client>,
    status_url: String,
    playlist_url: String,
    timeout: Duration,
    user_agent: String,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self {
            client: None,
            status_url: DEFAULT_STATUS_URL.to_string(),
            playlist_url: DEFAULT_PLAYLIST_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom HTTP client
    pub fn client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Set the status endpoint
    pub fn status_url(mut self, url: impl Into<String>) -> Self {
        self.status_url = url.into();
        self
    }

    /// Set the playlist snapshot endpoint
    pub fn playlist_url(mut self, url: impl Into<String>) -> Self {
        self.playlist_url = url.into();
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a custom User-Agent header
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Build the client
    pub fn build(self) -> Result<SpotifyStatusClient> {
        let status_url = Url::parse(&self.status_url)?;
        let playlist_url = Url::parse(&self.playlist_url)?;

        let client = match self.client {
            Some(client) => client,
            None => Client::builder()
                .user_agent(&self.user_agent)
                .timeout(self.timeout)
                .build()
                .map_err(Error::Http)?,
        };

        Ok(SpotifyStatusClient {
            client,
            status_url,
            playlist_url,
            timeout: self.timeout,
        })
    }
}
