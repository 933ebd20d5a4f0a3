//! Playlist store
//!
//! Named playlists with case-insensitive title uniqueness. The store keys
//! playlists by their lowercased title and keeps the display casing inside
//! the playlist value, so no call site folds case itself.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use tube_core::{Playlist, Result, TubeError, VideoId};

use crate::catalog::VideoCatalog;

/// Collection of named playlists.
///
/// Playlists hold video ids only; the catalog is consulted at mutation time
/// (a flagged video cannot be added) but membership is never revalidated
/// afterwards.
#[derive(Debug, Default)]
pub struct PlaylistStore {
    // lowercased title -> playlist with original casing
    playlists: HashMap<String, Playlist>,
}

impl PlaylistStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty playlist, preserving the given casing.
    pub fn create(&mut self, title: &str) -> Result<&Playlist> {
        match self.playlists.entry(title.to_lowercase()) {
            Entry::Occupied(_) => Err(TubeError::PlaylistExists(title.to_string())),
            Entry::Vacant(slot) => {
                tracing::info!(title, "creating playlist");
                Ok(slot.insert(Playlist::new(title)))
            }
        }
    }

    /// Case-insensitive lookup
    pub fn get(&self, title: &str) -> Result<&Playlist> {
        self.playlists
            .get(&title.to_lowercase())
            .ok_or_else(|| TubeError::PlaylistNotFound(title.to_string()))
    }

    /// Append a video to a playlist.
    ///
    /// Checked in order: playlist exists, video exists, video not flagged,
    /// video not already present. A failure leaves the playlist untouched.
    pub fn add_video(
        &mut self,
        title: &str,
        id: &VideoId,
        catalog: &VideoCatalog,
    ) -> Result<()> {
        let playlist = self
            .playlists
            .get_mut(&title.to_lowercase())
            .ok_or_else(|| TubeError::PlaylistNotFound(title.to_string()))?;
        let video = catalog.get(id)?;
        if video.is_flagged() {
            return Err(TubeError::VideoFlagged {
                id: id.clone(),
                reason: video.flag_reason().map(ToOwned::to_owned),
            });
        }
        if !playlist.push(id.clone()) {
            return Err(TubeError::AlreadyInPlaylist {
                playlist: title.to_string(),
                id: id.clone(),
            });
        }
        tracing::debug!(title, id = %id, "added video to playlist");
        Ok(())
    }

    /// Remove a video from a playlist, preserving the order of the rest.
    ///
    /// Flag status is deliberately not consulted: a video flagged after
    /// being added can still be removed.
    pub fn remove_video(&mut self, title: &str, id: &VideoId) -> Result<()> {
        let playlist = self
            .playlists
            .get_mut(&title.to_lowercase())
            .ok_or_else(|| TubeError::PlaylistNotFound(title.to_string()))?;
        if !playlist.remove(id) {
            return Err(TubeError::NotInPlaylist {
                playlist: title.to_string(),
                id: id.clone(),
            });
        }
        tracing::debug!(title, id = %id, "removed video from playlist");
        Ok(())
    }

    /// Empty a playlist without deleting it
    pub fn clear(&mut self, title: &str) -> Result<()> {
        let playlist = self
            .playlists
            .get_mut(&title.to_lowercase())
            .ok_or_else(|| TubeError::PlaylistNotFound(title.to_string()))?;
        playlist.clear();
        Ok(())
    }

    /// Delete a playlist entirely
    pub fn delete(&mut self, title: &str) -> Result<()> {
        match self.playlists.remove(&title.to_lowercase()) {
            Some(removed) => {
                tracing::info!(title = %removed.title, "deleted playlist");
                Ok(())
            }
            None => Err(TubeError::PlaylistNotFound(title.to_string())),
        }
    }

    /// All playlists sorted ascending by title, compared case-insensitively,
    /// display casing preserved.
    pub fn all(&self) -> Vec<&Playlist> {
        let mut playlists: Vec<&Playlist> = self.playlists.values().collect();
        playlists.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()));
        playlists
    }

    /// Number of playlists
    pub fn len(&self) -> usize {
        self.playlists.len()
    }

    /// Whether no playlists exist yet
    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tube_core::Video;

    fn catalog() -> VideoCatalog {
        VideoCatalog::new(vec![
            Video::new(VideoId::new("v1"), "Amazing Cats", vec!["cat".to_string()]),
            Video::new(VideoId::new("v2"), "Funny Dogs", vec!["dog".to_string()]),
        ])
    }

    #[test]
    fn create_is_case_insensitively_unique() {
        let mut store = PlaylistStore::new();
        store.create("Foo").unwrap();
        assert_eq!(
            store.create("foo"),
            Err(TubeError::PlaylistExists("foo".to_string()))
        );

        let all = store.all();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].title, "Foo");
    }

    #[test]
    fn lookup_ignores_case_but_preserves_display_title() {
        let mut store = PlaylistStore::new();
        store.create("my_PLAYlist").unwrap();
        assert_eq!(store.get("MY_playLIST").unwrap().title, "my_PLAYlist");
    }

    #[test]
    fn add_requires_existing_playlist_and_video() {
        let mut store = PlaylistStore::new();
        let catalog = catalog();

        assert_eq!(
            store.add_video("nope", &VideoId::new("v1"), &catalog),
            Err(TubeError::PlaylistNotFound("nope".to_string()))
        );

        store.create("mix").unwrap();
        assert_eq!(
            store.add_video("mix", &VideoId::new("ghost"), &catalog),
            Err(TubeError::VideoNotFound(VideoId::new("ghost")))
        );
    }

    #[test]
    fn add_rejects_duplicates() {
        let mut store = PlaylistStore::new();
        let catalog = catalog();
        store.create("mix").unwrap();

        store.add_video("mix", &VideoId::new("v1"), &catalog).unwrap();
        assert_eq!(
            store.add_video("MIX", &VideoId::new("v1"), &catalog),
            Err(TubeError::AlreadyInPlaylist {
                playlist: "MIX".to_string(),
                id: VideoId::new("v1"),
            })
        );
        assert_eq!(store.get("mix").unwrap().video_ids.len(), 1);
    }

    #[test]
    fn add_rejects_flagged_video_without_mutating() {
        let mut store = PlaylistStore::new();
        let mut catalog = catalog();
        store.create("mix").unwrap();
        catalog
            .flag(&VideoId::new("v1"), Some("bad".to_string()))
            .unwrap();

        assert_eq!(
            store.add_video("mix", &VideoId::new("v1"), &catalog),
            Err(TubeError::VideoFlagged {
                id: VideoId::new("v1"),
                reason: Some("bad".to_string()),
            })
        );
        assert!(store.get("mix").unwrap().video_ids.is_empty());
    }

    #[test]
    fn remove_ignores_flag_status() {
        let mut store = PlaylistStore::new();
        let mut catalog = catalog();
        store.create("mix").unwrap();
        store.add_video("mix", &VideoId::new("v1"), &catalog).unwrap();

        // flag after the video is already in the playlist
        catalog.flag(&VideoId::new("v1"), None).unwrap();

        store.remove_video("mix", &VideoId::new("v1")).unwrap();
        assert!(store.get("mix").unwrap().video_ids.is_empty());
    }

    #[test]
    fn remove_missing_video_fails() {
        let mut store = PlaylistStore::new();
        store.create("mix").unwrap();
        assert_eq!(
            store.remove_video("mix", &VideoId::new("v1")),
            Err(TubeError::NotInPlaylist {
                playlist: "mix".to_string(),
                id: VideoId::new("v1"),
            })
        );
    }

    #[test]
    fn clear_keeps_playlist_delete_removes_it() {
        let mut store = PlaylistStore::new();
        let catalog = catalog();
        store.create("mix").unwrap();
        store.add_video("mix", &VideoId::new("v1"), &catalog).unwrap();

        store.clear("MIX").unwrap();
        assert!(store.get("mix").unwrap().video_ids.is_empty());

        store.delete("Mix").unwrap();
        assert_eq!(
            store.get("mix"),
            Err(TubeError::PlaylistNotFound("mix".to_string()))
        );
        assert_eq!(
            store.delete("mix"),
            Err(TubeError::PlaylistNotFound("mix".to_string()))
        );
    }

    #[test]
    fn all_sorts_case_insensitively() {
        let mut store = PlaylistStore::new();
        store.create("beta").unwrap();
        store.create("Alpha").unwrap();
        store.create("GAMMA").unwrap();

        let titles: Vec<_> = store.all().iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Alpha", "beta", "GAMMA"]);
    }
}
