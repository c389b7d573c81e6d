//! Playlist renderers
//!
//! Pure functions from a [`PlaylistSnapshot`] to reply items. Anything that
//! prevents rendering is returned as a [`PlaylistError`] whose `Display` is
//! the reply text.

use crate::reply::Reply;
use pmospotify::{PlaylistSnapshot, Track};
use rand::seq::IndexedRandom;
use rand::Rng;

/// Why a playlist command could not show a track
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlaylistError {
    #[error("playlist is empty")]
    Empty,

    /// Requested position outside `[1, total_tracks_retrieved]`
    #[error("track id must be between 1 and {total}")]
    OutOfRange { total: usize },

    /// Position within the announced total but past the loaded tracks
    #[error("track id {id} exceeds the {loaded} tracks currently loaded")]
    NotLoaded { id: usize, loaded: usize },
}

/// `"{name} | {album} | {artists}"`
pub fn track_line(track: &Track) -> String {
    format!(
        "{} | {} | {}",
        track.name,
        track.album.name,
        track.artist_names()
    )
}

/// Text line for a track, followed by its cover when the album has one
pub fn track_replies(track: &Track) -> Vec<Reply> {
    let mut replies = vec![Reply::text(track_line(track))];
    if let Some(url) = track.album.cover_url() {
        replies.push(Reply::image(url));
    }
    replies
}

/// Numbered listing of the first `count` tracks, in a single text reply
pub fn track_list(snapshot: &PlaylistSnapshot, count: usize) -> Result<Reply, PlaylistError> {
    if snapshot.is_empty() {
        return Err(PlaylistError::Empty);
    }

    let lines: Vec<String> = snapshot
        .tracks
        .iter()
        .take(count)
        .enumerate()
        .map(|(index, entry)| format!("{} | {}", index + 1, track_line(&entry.track)))
        .collect();

    Ok(Reply::text(lines.join("\n")))
}

/// One track picked uniformly among the loaded ones
pub fn random_track<R: Rng + ?Sized>(
    snapshot: &PlaylistSnapshot,
    rng: &mut R,
) -> Result<Vec<Reply>, PlaylistError> {
    let entry = snapshot.tracks.choose(rng).ok_or(PlaylistError::Empty)?;
    Ok(track_replies(&entry.track))
}

/// Track at a 1-based position
///
/// The position is checked against the total announced by the relay first,
/// then against the tracks actually loaded, each failure with its own
/// message.
pub fn track_by_id(snapshot: &PlaylistSnapshot, id: i64) -> Result<Vec<Reply>, PlaylistError> {
    if snapshot.is_empty() {
        return Err(PlaylistError::Empty);
    }

    let total = snapshot.total_tracks_retrieved;
    let position = usize::try_from(id)
        .ok()
        .filter(|position| (1..=total).contains(position))
        .ok_or(PlaylistError::OutOfRange { total })?;

    let track = snapshot
        .track(position)
        .ok_or(PlaylistError::NotLoaded {
            id: position,
            loaded: snapshot.loaded_count(),
        })?;

    Ok(track_replies(track))
}
