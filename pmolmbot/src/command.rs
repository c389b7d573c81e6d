//! Command line parsing
//!
//! A command line is split on whitespace. Token 0 is the trigger word and is
//! not inspected; token 1, when present, selects the subcommand
//! (case-insensitive). Tokens beyond the expected arguments are ignored.

use crate::config::BotConfig;
use std::num::IntErrorKind;

/// What the user asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Bare trigger: report the track currently playing
    NowPlaying,
    /// First `count` tracks of the playlist, already clamped
    List { count: usize },
    /// One random playlist track
    Random,
    /// Playlist track by 1-based position, not yet range checked
    Track { id: i64 },
}

/// Invalid command line, reported to the user before any request is made
///
/// The `Display` output is the reply text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UsageError {
    #[error("count must be a number, got '{0}'")]
    InvalidCount(String),

    #[error("usage: {trigger} id <track_id>")]
    MissingTrackId { trigger: String },

    #[error("track id must be a number, got '{0}'")]
    InvalidTrackId(String),

    #[error(
        "unknown command '{name}', valid subcommands: \
         {trigger} list [count], {trigger} random, {trigger} id <track_id>"
    )]
    UnknownCommand { name: String, trigger: String },
}

/// Parse a raw command line
pub fn parse(line: &str, config: &BotConfig) -> Result<Command, UsageError> {
    let mut tokens = line.split_whitespace().skip(1);

    let Some(subcommand) = tokens.next() else {
        return Ok(Command::NowPlaying);
    };

    match subcommand.to_lowercase().as_str() {
        "list" => {
            let count = match tokens.next() {
                None => config.default_list_count,
                Some(arg) => {
                    let requested = parse_integer(arg)
                        .ok_or_else(|| UsageError::InvalidCount(arg.to_string()))?;
                    config.clamp_list_count(requested)
                }
            };
            Ok(Command::List { count })
        }
        "random" => Ok(Command::Random),
        "id" => {
            let arg = tokens.next().ok_or_else(|| UsageError::MissingTrackId {
                trigger: config.trigger.clone(),
            })?;
            let id = parse_integer(arg)
                .ok_or_else(|| UsageError::InvalidTrackId(arg.to_string()))?;
            Ok(Command::Track { id })
        }
        _ => Err(UsageError::UnknownCommand {
            name: subcommand.to_string(),
            trigger: config.trigger.clone(),
        }),
    }
}

/// Parse an integer argument, saturating values too large for `i64`
fn parse_integer(arg: &str) -> Option<i64> {
    match arg.parse::<i64>() {
        Ok(value) => Some(value),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}
