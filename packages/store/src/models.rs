//! # Domain models for genres and songs
//!
//! Defines the data structures exchanged with the SingersRepo backend. These
//! types are `Serialize + Deserialize` with field names matching the backend
//! wire format (`camelCase`, MongoDB-style `_id`).
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Genre`] | A user-owned named bucket of songs. Carries the server id, title, owning user id, the live song collection, and audit timestamps. |
//! | [`Song`] | A single catalog entry with musical metadata and pitch fields. Always belongs to exactly one genre; never edited or deleted by this client. |
//! | [`SongDraft`] | The create payload for a new song: five required fields plus two optionals. Blank optionals are omitted from the wire entirely. |

use serde::{Deserialize, Serialize};

/// A user-owned named bucket of songs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Genre {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    /// Id of the owning user.
    pub user: String,
    /// The live, server-authoritative song collection for this genre.
    #[serde(default)]
    pub songs: Vec<Song>,
    pub created_at: String,
    pub updated_at: String,
}

/// A single catalog entry with musical metadata and pitch fields.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    #[serde(rename = "_id")]
    pub id: String,
    pub song_name: String,
    pub movie_name: String,
    pub singer_name: String,
    pub music_director: String,
    pub actual_pitch: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub practised_pitch: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Form payload for creating a song.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SongDraft {
    pub song_name: String,
    pub movie_name: String,
    pub singer_name: String,
    pub music_director: String,
    pub actual_pitch: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub practised_pitch: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl SongDraft {
    /// Build a draft from raw form values. Required fields are trimmed;
    /// blank optionals are dropped so they never reach the wire.
    #[allow(clippy::too_many_arguments)]
    pub fn from_form(
        song_name: &str,
        movie_name: &str,
        singer_name: &str,
        music_director: &str,
        actual_pitch: &str,
        practised_pitch: &str,
        notes: &str,
    ) -> Self {
        Self {
            song_name: song_name.trim().to_string(),
            movie_name: movie_name.trim().to_string(),
            singer_name: singer_name.trim().to_string(),
            music_director: music_director.trim().to_string(),
            actual_pitch: actual_pitch.trim().to_string(),
            practised_pitch: non_blank(practised_pitch),
            notes: non_blank(notes),
        }
    }

    /// True when every required field is non-empty.
    pub fn is_complete(&self) -> bool {
        !self.song_name.is_empty()
            && !self.movie_name.is_empty()
            && !self.singer_name.is_empty()
            && !self.music_director.is_empty()
            && !self.actual_pitch.is_empty()
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_song_wire_names() {
        let json = r#"{
            "_id": "s1",
            "songName": "Alaipayuthey",
            "movieName": "Alaipayuthey",
            "singerName": "Hariharan",
            "musicDirector": "A. R. Rahman",
            "actualPitch": "C#"
        }"#;
        let song: Song = serde_json::from_str(json).unwrap();
        assert_eq!(song.id, "s1");
        assert_eq!(song.music_director, "A. R. Rahman");
        assert!(song.practised_pitch.is_none());
        assert!(song.notes.is_none());
    }

    #[test]
    fn test_draft_omits_blank_optionals() {
        let draft = SongDraft::from_form("Song", "Movie", "Singer", "MD", "C", "  ", "");
        assert!(draft.is_complete());

        let json = serde_json::to_string(&draft).unwrap();
        assert!(!json.contains("practisedPitch"));
        assert!(!json.contains("notes"));
        assert!(json.contains("\"songName\":\"Song\""));
    }

    #[test]
    fn test_draft_keeps_filled_optionals() {
        let draft = SongDraft::from_form("Song", "Movie", "Singer", "MD", "C", "D", "slow start");
        assert_eq!(draft.practised_pitch.as_deref(), Some("D"));
        assert_eq!(draft.notes.as_deref(), Some("slow start"));
    }

    #[test]
    fn test_incomplete_draft() {
        let draft = SongDraft::from_form("Song", "", "Singer", "MD", "C", "", "");
        assert!(!draft.is_complete());
    }

    #[test]
    fn test_genre_defaults_empty_songs() {
        let json = r#"{
            "_id": "g1",
            "title": "Carnatic",
            "user": "u1",
            "createdAt": "2024-05-01T10:00:00.000Z",
            "updatedAt": "2024-05-01T10:00:00.000Z"
        }"#;
        let genre: Genre = serde_json::from_str(json).unwrap();
        assert_eq!(genre.title, "Carnatic");
        assert!(genre.songs.is_empty());
    }
}
