//! # Genre transfer payload — list → detail navigation
//!
//! Navigating from the genre list to a genre detail view passes the full
//! `{ songs, title }` payload through the URL instead of refetching by id.
//! The contract: the payload must round-trip through JSON-serialize →
//! percent-encode → percent-decode → JSON-parse without loss, and a malformed
//! or missing payload degrades to an empty song list and empty title rather
//! than failing the page load.

use serde::{Deserialize, Serialize};

use crate::models::Song;

/// The payload carried in the detail route's `songs` query parameter.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GenreTransfer {
    #[serde(default)]
    pub songs: Vec<Song>,
    #[serde(default)]
    pub title: String,
}

impl GenreTransfer {
    pub fn new(title: impl Into<String>, songs: Vec<Song>) -> Self {
        Self {
            songs,
            title: title.into(),
        }
    }

    /// JSON-serialize then percent-encode.
    pub fn encode(&self) -> String {
        let json = serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string());
        urlencoding::encode(&json).into_owned()
    }

    /// Percent-decode then JSON-parse. Any failure yields the empty payload.
    pub fn decode(raw: &str) -> Self {
        let Ok(json) = urlencoding::decode(raw) else {
            return Self::default();
        };
        serde_json::from_str(&json).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song(id: &str, name: &str) -> Song {
        Song {
            id: id.to_string(),
            song_name: name.to_string(),
            movie_name: "Movie".to_string(),
            singer_name: "Singer".to_string(),
            music_director: "MD".to_string(),
            actual_pitch: "C".to_string(),
            practised_pitch: None,
            notes: None,
        }
    }

    #[test]
    fn test_round_trip() {
        let payload = GenreTransfer::new("Melody", vec![song("s1", "One"), song("s2", "Two")]);
        assert_eq!(GenreTransfer::decode(&payload.encode()), payload);
    }

    #[test]
    fn test_round_trip_awkward_title() {
        // Characters that must survive the percent-encoding layer
        let payload = GenreTransfer::new("90s & 00s / \"hits\" 100%", vec![song("s1", "One")]);
        assert_eq!(GenreTransfer::decode(&payload.encode()), payload);
    }

    #[test]
    fn test_round_trip_unicode() {
        let mut s = song("s1", "பாடல்");
        s.notes = Some("ragam: kalyāṇi".to_string());
        let payload = GenreTransfer::new("கர்நாடக இசை", vec![s]);
        assert_eq!(GenreTransfer::decode(&payload.encode()), payload);
    }

    #[test]
    fn test_empty_payload_round_trip() {
        let payload = GenreTransfer::default();
        assert_eq!(GenreTransfer::decode(&payload.encode()), payload);
    }

    #[test]
    fn test_malformed_input_degrades() {
        let decoded = GenreTransfer::decode("%7Bnot-json");
        assert!(decoded.songs.is_empty());
        assert_eq!(decoded.title, "");
    }

    #[test]
    fn test_missing_input_degrades() {
        let decoded = GenreTransfer::decode("");
        assert!(decoded.songs.is_empty());
        assert_eq!(decoded.title, "");
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        // A payload with only a title still loads; songs default to empty
        let raw = urlencoding::encode("{\"title\":\"Melody\"}").into_owned();
        let decoded = GenreTransfer::decode(&raw);
        assert_eq!(decoded.title, "Melody");
        assert!(decoded.songs.is_empty());
    }
}
