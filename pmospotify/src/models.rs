//! Data models for the Spotify relay responses
//!
//! The relay omits fields freely (local files have no album, podcasts have no
//! artists, ...). Every model is decoded from a private wire struct whose
//! fields are all optional, and the sentinel defaults are substituted once in
//! the `From` conversion. Rendering code never has to deal with a missing
//! field.

use serde::{Deserialize, Serialize};

/// Placeholder for a missing track title
pub const UNKNOWN_TRACK: &str = "unknown track";

/// Placeholder for a missing artist name
pub const UNKNOWN_ARTIST: &str = "unknown artist";

/// Placeholder for a missing album name
pub const UNKNOWN_ALBUM: &str = "unknown album";

/// Separator used when several artists share a track
pub const ARTIST_SEPARATOR: &str = " & ";

fn or_sentinel(value: Option<String>, sentinel: &str) -> String {
    value.unwrap_or_else(|| sentinel.to_string())
}

// ============================================================================
// Now playing
// ============================================================================

#[derive(Deserialize)]
struct RawPlaybackStatus {
    title: Option<String>,
    artist: Option<String>,
    album_art_url: Option<String>,
}

/// Current playback state as reported by the status endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawPlaybackStatus")]
pub struct PlaybackStatus {
    pub title: String,
    pub artist: String,
    /// Cover URL, empty when the relay has none
    pub album_art_url: String,
}

impl From<RawPlaybackStatus> for PlaybackStatus {
    fn from(raw: RawPlaybackStatus) -> Self {
        Self {
            title: or_sentinel(raw.title, UNKNOWN_TRACK),
            artist: or_sentinel(raw.artist, UNKNOWN_ARTIST),
            album_art_url: raw.album_art_url.unwrap_or_default(),
        }
    }
}

impl PlaybackStatus {
    /// Cover URL if the relay provided a non-empty one
    pub fn cover_url(&self) -> Option<&str> {
        Some(self.album_art_url.as_str()).filter(|url| !url.is_empty())
    }
}

// ============================================================================
// Playlist snapshot
// ============================================================================

#[derive(Deserialize)]
struct RawImage {
    url: Option<String>,
}

/// Album artwork entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawImage")]
pub struct Image {
    pub url: String,
}

impl From<RawImage> for Image {
    fn from(raw: RawImage) -> Self {
        Self {
            url: raw.url.unwrap_or_default(),
        }
    }
}

#[derive(Deserialize)]
struct RawArtist {
    name: Option<String>,
}

/// Track artist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawArtist")]
pub struct Artist {
    pub name: String,
}

impl From<RawArtist> for Artist {
    fn from(raw: RawArtist) -> Self {
        Self {
            name: or_sentinel(raw.name, UNKNOWN_ARTIST),
        }
    }
}

#[derive(Deserialize)]
struct RawAlbum {
    name: Option<String>,
    images: Option<Vec<Image>>,
}

/// Album a track belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawAlbum")]
pub struct Album {
    pub name: String,
    /// Artwork, largest first
    pub images: Vec<Image>,
}

impl From<RawAlbum> for Album {
    fn from(raw: RawAlbum) -> Self {
        Self {
            name: or_sentinel(raw.name, UNKNOWN_ALBUM),
            images: raw.images.unwrap_or_default(),
        }
    }
}

impl Default for Album {
    fn default() -> Self {
        Self {
            name: UNKNOWN_ALBUM.to_string(),
            images: Vec::new(),
        }
    }
}

impl Album {
    /// URL of the preferred (first) image, if any
    pub fn cover_url(&self) -> Option<&str> {
        self.images
            .first()
            .map(|image| image.url.as_str())
            .filter(|url| !url.is_empty())
    }
}

#[derive(Deserialize)]
struct RawTrack {
    name: Option<String>,
    album: Option<Album>,
    artists: Option<Vec<Artist>>,
}

/// A playlist track
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawTrack")]
pub struct Track {
    pub name: String,
    pub album: Album,
    pub artists: Vec<Artist>,
}

impl From<RawTrack> for Track {
    fn from(raw: RawTrack) -> Self {
        Self {
            name: or_sentinel(raw.name, UNKNOWN_TRACK),
            album: raw.album.unwrap_or_default(),
            artists: raw.artists.unwrap_or_default(),
        }
    }
}

impl Default for Track {
    fn default() -> Self {
        Self {
            name: UNKNOWN_TRACK.to_string(),
            album: Album::default(),
            artists: Vec::new(),
        }
    }
}

impl Track {
    /// Artist names joined with `" & "`; empty when the track has no artist
    pub fn artist_names(&self) -> String {
        self.artists
            .iter()
            .map(|artist| artist.name.as_str())
            .collect::<Vec<_>>()
            .join(ARTIST_SEPARATOR)
    }
}

#[derive(Deserialize)]
struct RawTrackEntry {
    track: Option<Track>,
}

/// One item of the playlist snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawTrackEntry")]
pub struct TrackEntry {
    pub track: Track,
}

impl From<RawTrackEntry> for TrackEntry {
    fn from(raw: RawTrackEntry) -> Self {
        Self {
            track: raw.track.unwrap_or_default(),
        }
    }
}

#[derive(Deserialize)]
struct RawPlaylistSnapshot {
    tracks: Option<Vec<TrackEntry>>,
    total_tracks_retrieved: Option<usize>,
}

/// Full playlist document as served by the snapshot endpoint
///
/// `total_tracks_retrieved` is the count announced by the relay. It may be
/// larger than `tracks.len()` when the relay only loaded part of the
/// playlist; both numbers are kept as they are.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawPlaylistSnapshot")]
pub struct PlaylistSnapshot {
    pub tracks: Vec<TrackEntry>,
    pub total_tracks_retrieved: usize,
}

impl From<RawPlaylistSnapshot> for PlaylistSnapshot {
    fn from(raw: RawPlaylistSnapshot) -> Self {
        let tracks = raw.tracks.unwrap_or_default();
        let total_tracks_retrieved = raw.total_tracks_retrieved.unwrap_or(tracks.len());
        Self {
            tracks,
            total_tracks_retrieved,
        }
    }
}

impl PlaylistSnapshot {
    /// Check whether no track was loaded
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Number of tracks actually present in the document
    pub fn loaded_count(&self) -> usize {
        self.tracks.len()
    }

    /// Track at a 1-based position among the loaded tracks
    pub fn track(&self, position: usize) -> Option<&Track> {
        position
            .checked_sub(1)
            .and_then(|index| self.tracks.get(index))
            .map(|entry| &entry.track)
    }
}
