//! # pmolmbot - "What's playing?" chat command
//!
//! `pmolmbot` answers the `lm` chat command family using the Spotify
//! now-playing relay (see [`pmospotify`]):
//!
//! | Command          | Reply                                              |
//! |------------------|----------------------------------------------------|
//! | `lm`             | track currently playing, then its cover            |
//! | `lm list [n]`    | first `n` playlist tracks (default 5, 1 to 50)     |
//! | `lm random`      | one random playlist track, then its cover          |
//! | `lm id <n>`      | playlist track number `n`, then its cover          |
//!
//! The bot framework itself (event routing, message delivery) is not part of
//! this crate: the host feeds command lines to [`LmHandler::handle`] and
//! delivers the [`Reply`] items in the order they come out.
//!
//! ```no_run
//! use pmolmbot::{BotConfig, LmHandler, Reply};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let handler = LmHandler::new(BotConfig::default())?;
//!
//!     for reply in handler.replies("lm random").await {
//!         match reply {
//!             Reply::Text(text) => println!("{}", text),
//!             Reply::Image { url } => println!("<img src=\"{}\">", url),
//!         }
//!     }
//!     Ok(())
//! }
//! ```

pub mod command;
pub mod config;
pub mod error;
pub mod handler;
pub mod render;
pub mod reply;

// Re-exports for convenience
pub use command::{Command, UsageError};
pub use config::BotConfig;
pub use error::{Error, Result};
pub use handler::LmHandler;
pub use render::PlaylistError;
pub use reply::{Reply, ReplyStream};
