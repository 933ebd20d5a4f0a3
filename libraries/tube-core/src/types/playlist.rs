/// Playlist domain type
use crate::types::VideoId;
use serde::{Deserialize, Serialize};

/// A user-named, ordered, duplicate-free sequence of video references.
///
/// The title keeps the casing it was created with; uniqueness and lookup are
/// case-insensitive and enforced by the playlist store, not here. Entries are
/// ids only — resolution against the catalog happens at access time, so a
/// playlist is never invalidated by a video being flagged after addition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    /// Display title, original casing preserved
    pub title: String,

    /// Ordered video ids, no duplicates
    pub video_ids: Vec<VideoId>,
}

impl Playlist {
    /// Create a new empty playlist
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            video_ids: Vec::new(),
        }
    }

    /// Whether the playlist contains the given video
    pub fn contains(&self, id: &VideoId) -> bool {
        self.video_ids.contains(id)
    }

    /// Append a video id; returns false if already present
    pub fn push(&mut self, id: VideoId) -> bool {
        if self.contains(&id) {
            return false;
        }
        self.video_ids.push(id);
        true
    }

    /// Remove a video id, preserving the order of the rest; returns false if absent
    pub fn remove(&mut self, id: &VideoId) -> bool {
        match self.video_ids.iter().position(|v| v == id) {
            Some(index) => {
                self.video_ids.remove(index);
                true
            }
            None => false,
        }
    }

    /// Drop every entry
    pub fn clear(&mut self) {
        self.video_ids.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_rejects_duplicates() {
        let mut playlist = Playlist::new("my_playlist");
        assert!(playlist.push(VideoId::new("v1")));
        assert!(!playlist.push(VideoId::new("v1")));
        assert_eq!(playlist.video_ids.len(), 1);
    }

    #[test]
    fn remove_preserves_order() {
        let mut playlist = Playlist::new("my_playlist");
        playlist.push(VideoId::new("v1"));
        playlist.push(VideoId::new("v2"));
        playlist.push(VideoId::new("v3"));

        assert!(playlist.remove(&VideoId::new("v2")));
        assert_eq!(
            playlist.video_ids,
            vec![VideoId::new("v1"), VideoId::new("v3")]
        );
    }

    #[test]
    fn remove_missing_returns_false() {
        let mut playlist = Playlist::new("my_playlist");
        assert!(!playlist.remove(&VideoId::new("v1")));
    }
}
