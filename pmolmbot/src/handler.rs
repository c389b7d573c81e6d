//! Command dispatcher
//!
//! [`LmHandler::handle`] turns one command line into an ordered stream of
//! replies. Every failure ends the stream with a single text reply; an image
//! reply is only ever emitted after the text it illustrates.

use crate::command::{self, Command};
use crate::config::BotConfig;
use crate::error::Result;
use crate::render::{self, PlaylistError};
use crate::reply::{Reply, ReplyStream};
use async_stream::stream;
use futures::StreamExt;
use pmospotify::{Error as RelayError, PlaylistSnapshot, SpotifyStatusClient};
use tracing::{debug, error};

/// Reply when the status request timed out
pub const MSG_STATUS_TIMEOUT: &str = "status request timed out, try again later";

/// Reply when the status endpoint answered with an error status
pub const MSG_STATUS_FAILED: &str = "failed to fetch status, check service health";

/// Reply when the status document could not be decoded
pub const MSG_PARSE_FAILED: &str = "failed to parse data, contact an administrator";

/// Reply for any other now-playing failure
pub const MSG_STATUS_UNKNOWN: &str = "unknown error while fetching playback status";

/// Reply when the playlist could not be fetched for `list`
pub const MSG_LIST_FAILED: &str = "failed to fetch track list";

/// Reply when the playlist could not be fetched for `random`
pub const MSG_RANDOM_FAILED: &str = "failed to fetch random track";

/// Reply when the playlist could not be fetched for `id`
pub const MSG_TRACK_FAILED: &str = "failed to fetch track";

/// Handler for the now-playing command family
///
/// The handler holds no state between invocations besides its configuration
/// and HTTP client; concurrent calls to [`handle`](Self::handle) are
/// independent.
///
/// # Example
///
/// ```no_run
/// use futures::StreamExt;
/// use pmolmbot::{BotConfig, LmHandler};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let handler = LmHandler::new(BotConfig::default())?;
///
///     let mut replies = handler.handle("lm list 3");
///     while let Some(reply) = replies.next().await {
///         println!("{}", reply);
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct LmHandler {
    config: BotConfig,
    client: SpotifyStatusClient,
}

impl LmHandler {
    /// Create a handler and its relay client from a configuration
    pub fn new(config: BotConfig) -> Result<Self> {
        config.validate()?;
        let client = config.build_client()?;
        Ok(Self { config, client })
    }

    /// Create a handler around an existing relay client
    pub fn with_client(config: BotConfig, client: SpotifyStatusClient) -> Self {
        Self { config, client }
    }

    pub fn config(&self) -> &BotConfig {
        &self.config
    }

    /// Answer one command line
    ///
    /// Input errors are answered before any request is made.
    pub fn handle<'a>(&'a self, line: &'a str) -> ReplyStream<'a> {
        let parsed = command::parse(line, &self.config);

        Box::pin(stream! {
            let replies = match parsed {
                Err(usage) => {
                    debug!(line, "Rejected command: {}", usage);
                    vec![Reply::text(usage.to_string())]
                }
                Ok(Command::NowPlaying) => self.now_playing().await,
                Ok(Command::List { count }) => self.list(count).await,
                Ok(Command::Random) => self.random().await,
                Ok(Command::Track { id }) => self.track(id).await,
            };

            for reply in replies {
                yield reply;
            }
        })
    }

    /// Answer one command line and collect every reply
    pub async fn replies(&self, line: &str) -> Vec<Reply> {
        self.handle(line).collect().await
    }

    async fn now_playing(&self) -> Vec<Reply> {
        match self.client.now_playing().await {
            Ok(status) => {
                let mut replies = vec![Reply::text(format!(
                    "Now playing | {} - {}",
                    status.title, status.artist
                ))];
                if let Some(url) = status.cover_url() {
                    replies.push(Reply::image(url));
                }
                replies
            }
            Err(err) => {
                error!(kind = err.kind(), "Failed to fetch playback status: {}", err);
                vec![Reply::text(status_failure_message(&err))]
            }
        }
    }

    async fn list(&self, count: usize) -> Vec<Reply> {
        match self.snapshot("list").await {
            Some(snapshot) => match render::track_list(&snapshot, count) {
                Ok(reply) => vec![reply],
                Err(err) => vec![playlist_error_reply(err)],
            },
            None => vec![Reply::text(MSG_LIST_FAILED)],
        }
    }

    async fn random(&self) -> Vec<Reply> {
        match self.snapshot("random").await {
            Some(snapshot) => render_or_reply(pick_random(&snapshot)),
            None => vec![Reply::text(MSG_RANDOM_FAILED)],
        }
    }

    async fn track(&self, id: i64) -> Vec<Reply> {
        match self.snapshot("id").await {
            Some(snapshot) => render_or_reply(render::track_by_id(&snapshot, id)),
            None => vec![Reply::text(MSG_TRACK_FAILED)],
        }
    }

    /// Fresh playlist snapshot, `None` once the failure has been logged
    async fn snapshot(&self, command: &str) -> Option<PlaylistSnapshot> {
        match self.client.playlist().await {
            Ok(snapshot) => Some(snapshot),
            Err(err) => {
                error!(command, kind = err.kind(), "Failed to fetch playlist: {}", err);
                None
            }
        }
    }
}

fn pick_random(snapshot: &PlaylistSnapshot) -> std::result::Result<Vec<Reply>, PlaylistError> {
    render::random_track(snapshot, &mut rand::rng())
}

fn render_or_reply(rendered: std::result::Result<Vec<Reply>, PlaylistError>) -> Vec<Reply> {
    rendered.unwrap_or_else(|err| vec![playlist_error_reply(err)])
}

fn playlist_error_reply(err: PlaylistError) -> Reply {
    debug!("Playlist command rejected: {}", err);
    Reply::text(err.to_string())
}

/// Reply text for a failed now-playing request
pub fn status_failure_message(err: &RelayError) -> &'static str {
    match err {
        RelayError::Timeout => MSG_STATUS_TIMEOUT,
        RelayError::Status(_) => MSG_STATUS_FAILED,
        RelayError::Json(_) => MSG_PARSE_FAILED,
        RelayError::Http(_) | RelayError::InvalidUrl(_) => MSG_STATUS_UNKNOWN,
    }
}
