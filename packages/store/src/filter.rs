//! Client-side narrowing of an already-loaded song list. Pure and
//! synchronous — no network, no async, deterministic for a given input.

use crate::models::Song;

/// Sentinel select value meaning "no filter".
pub const ALL: &str = "all";

fn matches(selected: &str, value: &str) -> bool {
    selected.is_empty() || selected == ALL || selected == value
}

/// Distinct music directors, in order of first occurrence.
pub fn distinct_directors(songs: &[Song]) -> Vec<String> {
    let mut seen = Vec::new();
    for song in songs {
        if !seen.contains(&song.music_director) {
            seen.push(song.music_director.clone());
        }
    }
    seen
}

/// Distinct singers, in order of first occurrence.
pub fn distinct_singers(songs: &[Song]) -> Vec<String> {
    let mut seen = Vec::new();
    for song in songs {
        if !seen.contains(&song.singer_name) {
            seen.push(song.singer_name.clone());
        }
    }
    seen
}

/// Keep the songs matching both criteria. A selection of [`ALL`] (or the
/// empty string) matches everything, so `filter_songs(s, ALL, ALL)` returns
/// the input unchanged.
pub fn filter_songs(songs: &[Song], director: &str, singer: &str) -> Vec<Song> {
    songs
        .iter()
        .filter(|song| matches(director, &song.music_director) && matches(singer, &song.singer_name))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song(id: &str, director: &str, singer: &str) -> Song {
        Song {
            id: id.to_string(),
            song_name: format!("song-{id}"),
            movie_name: "Movie".to_string(),
            singer_name: singer.to_string(),
            music_director: director.to_string(),
            actual_pitch: "C".to_string(),
            practised_pitch: None,
            notes: None,
        }
    }

    fn fixture() -> Vec<Song> {
        vec![
            song("1", "Rahman", "Chitra"),
            song("2", "Ilaiyaraaja", "SPB"),
            song("3", "Rahman", "SPB"),
            song("4", "Rahman", "Chitra"),
        ]
    }

    #[test]
    fn test_all_all_is_identity() {
        let songs = fixture();
        assert_eq!(filter_songs(&songs, ALL, ALL), songs);
        assert_eq!(filter_songs(&songs, "", ""), songs);
    }

    #[test]
    fn test_filter_by_director() {
        let songs = fixture();
        let filtered = filter_songs(&songs, "Rahman", ALL);
        assert_eq!(filtered.len(), 3);
        assert!(filtered.iter().all(|s| s.music_director == "Rahman"));
    }

    #[test]
    fn test_filter_by_both() {
        let songs = fixture();
        let filtered = filter_songs(&songs, "Rahman", "SPB");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "3");
    }

    #[test]
    fn test_no_match_is_empty() {
        let songs = fixture();
        assert!(filter_songs(&songs, "Nobody", ALL).is_empty());
    }

    #[test]
    fn test_idempotent() {
        let songs = fixture();
        let once = filter_songs(&songs, "Rahman", "Chitra");
        let twice = filter_songs(&once, "Rahman", "Chitra");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_distinct_values_keep_first_occurrence_order() {
        let songs = fixture();
        assert_eq!(distinct_directors(&songs), vec!["Rahman", "Ilaiyaraaja"]);
        assert_eq!(distinct_singers(&songs), vec!["Chitra", "SPB"]);
    }

    #[test]
    fn test_distinct_on_empty_list() {
        assert!(distinct_directors(&[]).is_empty());
        assert!(distinct_singers(&[]).is_empty());
    }
}
