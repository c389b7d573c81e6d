//! # pmospotify - Spotify now-playing relay client
//!
//! `pmospotify` reads the two JSON documents published by a Spotify
//! now-playing relay:
//!
//! - **Status**: the track currently playing (`title`, `artist`,
//!   `album_art_url`)
//! - **Playlist snapshot**: the tracks of a shared playlist, with the total
//!   announced by the relay
//!
//! ## Quick Start
//!
//! ```no_run
//! use pmospotify::SpotifyStatusClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SpotifyStatusClient::new()?;
//!
//!     let status = client.now_playing().await?;
//!     println!("Now playing: {} - {}", status.title, status.artist);
//!
//!     let playlist = client.playlist().await?;
//!     for (index, entry) in playlist.tracks.iter().enumerate() {
//!         println!("{}. {} ({})", index + 1, entry.track.name, entry.track.artist_names());
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Missing fields
//!
//! The relay is lenient about what it sends. Absent or `null` fields are
//! replaced by [`UNKNOWN_TRACK`], [`UNKNOWN_ARTIST`] or [`UNKNOWN_ALBUM`]
//! while decoding, so a partial document never turns into an error.
//!
//! ## Error Handling
//!
//! Each failure kind has its own variant. The client does not log failures;
//! the caller decides how to report them.
//!
//! ```no_run
//! use pmospotify::{Error, SpotifyStatusClient};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = SpotifyStatusClient::new().unwrap();
//!
//!     match client.now_playing().await {
//!         Ok(status) => println!("{}", status.title),
//!         Err(Error::Timeout) => eprintln!("Relay too slow"),
//!         Err(Error::Status(code)) => eprintln!("Relay answered {}", code),
//!         Err(Error::Json(e)) => eprintln!("Parse error: {}", e),
//!         Err(e) => eprintln!("Other error: {}", e),
//!     }
//! }
//! ```

pub mod client;
pub mod error;
pub mod models;

// Re-exports for convenience
pub use client::{ClientBuilder, SpotifyStatusClient};
pub use error::{Error, Result};
pub use models::{
    Album, Artist, Image, PlaybackStatus, PlaylistSnapshot, Track, TrackEntry, UNKNOWN_ALBUM,
    UNKNOWN_ARTIST, UNKNOWN_TRACK,
};
pub use reqwest::StatusCode;
