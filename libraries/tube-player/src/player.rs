//! Player aggregate
//!
//! One `Player` owns the catalog, the playlist store and the playback
//! engine for an application run — there is no ambient or static state.
//! It exposes one operation per user-facing command, each returning a
//! structured outcome with resolved videos; rendering is entirely the
//! caller's concern.

use rand::Rng;
use serde::Serialize;

use tube_core::{Result, Video, VideoId};

use crate::catalog::VideoCatalog;
use crate::playback::{PauseTransition, PlayTransition, PlaybackEngine};
use crate::playlists::PlaylistStore;
use crate::selector::{InteractiveSelector, SearchMode, Selection, SelectionPrompt};

/// The currently loaded video and whether it is paused
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NowPlaying {
    /// The loaded video
    pub video: Video,
    /// Whether playback is paused
    pub paused: bool,
}

/// Successful `play`: the new video plus anything it displaced
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayOutcome {
    /// Video that was implicitly stopped first, if any
    pub stopped: Option<Video>,
    /// Video now playing
    pub playing: Video,
}

/// Successful `pause`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum PauseOutcome {
    /// Transitioned from playing to paused
    Paused(Video),
    /// Was already paused; informational, state unchanged
    AlreadyPaused(Video),
}

/// Successful flag mutation, reporting the implicit stop
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlagOutcome {
    /// Video that was stopped before the mutation, if any
    pub stopped: Option<Video>,
    /// The video as it stands after the mutation
    pub video: Video,
}

/// A playlist with its entries resolved against the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaylistView {
    /// Display title, original casing
    pub title: String,
    /// Videos in playlist order, flagged entries included
    pub videos: Vec<Video>,
}

/// Outcome of one search command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SearchOutcome {
    /// Nothing matched; no input was requested
    NoResults,
    /// Results were shown but nothing valid was selected
    NoSelection,
    /// A result was selected and is now playing
    Played(PlayOutcome),
}

/// The aggregate engine behind the command dispatcher.
#[derive(Debug, Default)]
pub struct Player {
    catalog: VideoCatalog,
    playlists: PlaylistStore,
    playback: PlaybackEngine,
}

impl Player {
    /// Build a player around a loaded catalog
    pub fn new(videos: Vec<Video>) -> Self {
        Self {
            catalog: VideoCatalog::new(videos),
            playlists: PlaylistStore::new(),
            playback: PlaybackEngine::new(),
        }
    }

    /// Number of videos in the catalog, flagged included
    pub fn number_of_videos(&self) -> usize {
        self.catalog.len()
    }

    /// Every video sorted by title then id, flagged entries included
    pub fn list_videos(&self) -> Vec<Video> {
        self.catalog.all().into_iter().cloned().collect()
    }

    /// Look up one video by id
    pub fn show_video(&self, id: &VideoId) -> Result<Video> {
        Ok(self.catalog.get(id)?.clone())
    }

    /// Play a video by id
    pub fn play(&mut self, id: &VideoId) -> Result<PlayOutcome> {
        let transition = self.playback.play(&self.catalog, id)?;
        self.resolve_play(transition)
    }

    /// Stop playback, returning the video that was playing
    pub fn stop(&mut self) -> Result<Video> {
        let stopped = self.playback.stop()?;
        Ok(self.catalog.get(&stopped)?.clone())
    }

    /// Play a uniformly random non-flagged video
    pub fn play_random(&mut self) -> Result<PlayOutcome> {
        self.play_random_with(&mut rand::thread_rng())
    }

    /// Random playback with a caller-supplied rng (deterministic in tests)
    pub fn play_random_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<PlayOutcome> {
        let transition = self.playback.play_random(&self.catalog, rng)?;
        self.resolve_play(transition)
    }

    /// Pause the current video
    pub fn pause(&mut self) -> Result<PauseOutcome> {
        let outcome = match self.playback.pause()? {
            PauseTransition::Paused(id) => PauseOutcome::Paused(self.catalog.get(&id)?.clone()),
            PauseTransition::AlreadyPaused(id) => {
                PauseOutcome::AlreadyPaused(self.catalog.get(&id)?.clone())
            }
        };
        Ok(outcome)
    }

    /// Resume a paused video
    pub fn resume(&mut self) -> Result<Video> {
        let id = self.playback.resume()?;
        Ok(self.catalog.get(&id)?.clone())
    }

    /// What is currently in the playback slot
    pub fn show_current(&self) -> Result<NowPlaying> {
        let (id, paused) = self.playback.current()?;
        Ok(NowPlaying {
            video: self.catalog.get(id)?.clone(),
            paused,
        })
    }

    /// Create an empty playlist, preserving the given casing
    pub fn create_playlist(&mut self, title: &str) -> Result<String> {
        Ok(self.playlists.create(title)?.title.clone())
    }

    /// All playlist display titles, sorted case-insensitively
    pub fn show_all_playlists(&self) -> Vec<String> {
        self.playlists
            .all()
            .into_iter()
            .map(|p| p.title.clone())
            .collect()
    }

    /// A playlist with its entries resolved at access time
    pub fn show_playlist(&self, title: &str) -> Result<PlaylistView> {
        let playlist = self.playlists.get(title)?;
        let mut videos = Vec::with_capacity(playlist.video_ids.len());
        for id in &playlist.video_ids {
            videos.push(self.catalog.get(id)?.clone());
        }
        Ok(PlaylistView {
            title: playlist.title.clone(),
            videos,
        })
    }

    /// Append a video to a playlist, returning the added video
    pub fn add_to_playlist(&mut self, title: &str, id: &VideoId) -> Result<Video> {
        self.playlists.add_video(title, id, &self.catalog)?;
        Ok(self.catalog.get(id)?.clone())
    }

    /// Remove a video from a playlist, returning the removed video
    pub fn remove_from_playlist(&mut self, title: &str, id: &VideoId) -> Result<Video> {
        self.playlists.remove_video(title, id)?;
        Ok(self.catalog.get(id)?.clone())
    }

    /// Empty a playlist without deleting it
    pub fn clear_playlist(&mut self, title: &str) -> Result<()> {
        self.playlists.clear(title)
    }

    /// Delete a playlist entirely
    pub fn delete_playlist(&mut self, title: &str) -> Result<()> {
        self.playlists.delete(title)
    }

    /// Search by title substring, then select-and-play through the prompt
    pub fn search_by_title(
        &mut self,
        term: &str,
        prompt: &mut dyn SelectionPrompt,
    ) -> Result<SearchOutcome> {
        self.search(SearchMode::Title, term, prompt)
    }

    /// Search by exact tag, then select-and-play through the prompt
    pub fn search_by_tag(
        &mut self,
        tag: &str,
        prompt: &mut dyn SelectionPrompt,
    ) -> Result<SearchOutcome> {
        self.search(SearchMode::Tag, tag, prompt)
    }

    /// Flag a video, stopping any current playback first.
    ///
    /// The stop happens before the mutation is attempted and is not an
    /// error; the displaced video is reported in the outcome.
    pub fn flag_video(&mut self, id: &VideoId, reason: Option<String>) -> Result<FlagOutcome> {
        let stopped_id = self.playback.stop().ok();
        let video = self.catalog.flag(id, reason)?.clone();
        let stopped = match stopped_id {
            Some(sid) => Some(self.catalog.get(&sid)?.clone()),
            None => None,
        };
        Ok(FlagOutcome { stopped, video })
    }

    /// Clear a video's flag, returning the restored video
    pub fn unflag_video(&mut self, id: &VideoId) -> Result<Video> {
        Ok(self.catalog.unflag(id)?.clone())
    }

    fn search(
        &mut self,
        mode: SearchMode,
        term: &str,
        prompt: &mut dyn SelectionPrompt,
    ) -> Result<SearchOutcome> {
        let selection =
            InteractiveSelector::new(&self.catalog, &mut self.playback).run(mode, term, prompt)?;
        let outcome = match selection {
            Selection::NoResults => SearchOutcome::NoResults,
            Selection::NoSelection => SearchOutcome::NoSelection,
            Selection::Played(transition) => SearchOutcome::Played(self.resolve_play(transition)?),
        };
        Ok(outcome)
    }

    fn resolve_play(&self, transition: PlayTransition) -> Result<PlayOutcome> {
        let stopped = match transition.stopped {
            Some(id) => Some(self.catalog.get(&id)?.clone()),
            None => None,
        };
        Ok(PlayOutcome {
            stopped,
            playing: self.catalog.get(&transition.playing)?.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tube_core::TubeError;

    fn player() -> Player {
        Player::new(vec![
            Video::new(
                VideoId::new("v1"),
                "Amazing Cat Video",
                vec!["cat".to_string(), "animal".to_string()],
            ),
            Video::new(
                VideoId::new("v2"),
                "Another Cat Video",
                vec!["cat".to_string()],
            ),
        ])
    }

    #[test]
    fn play_reports_displaced_video() {
        let mut player = player();
        player.play(&VideoId::new("v2")).unwrap();

        let outcome = player.play(&VideoId::new("v1")).unwrap();
        assert_eq!(outcome.stopped.unwrap().id, VideoId::new("v2"));
        assert_eq!(outcome.playing.id, VideoId::new("v1"));
    }

    #[test]
    fn flag_video_stops_playback_first() {
        let mut player = player();
        player.play(&VideoId::new("v1")).unwrap();

        let outcome = player
            .flag_video(&VideoId::new("v2"), Some("dont_like_cats".to_string()))
            .unwrap();
        assert_eq!(outcome.stopped.unwrap().id, VideoId::new("v1"));
        assert!(outcome.video.is_flagged());
        assert_eq!(player.show_current(), Err(TubeError::NoVideoPlaying));
    }

    #[test]
    fn flag_video_without_playback_reports_no_stop() {
        let mut player = player();
        let outcome = player.flag_video(&VideoId::new("v1"), None).unwrap();
        assert_eq!(outcome.stopped, None);
        assert_eq!(outcome.video.flag_reason(), None);
    }

    #[test]
    fn show_playlist_resolves_flagged_entries() {
        let mut player = player();
        player.create_playlist("mix").unwrap();
        player
            .add_to_playlist("mix", &VideoId::new("v1"))
            .unwrap();
        player.flag_video(&VideoId::new("v1"), None).unwrap();

        let view = player.show_playlist("MIX").unwrap();
        assert_eq!(view.title, "mix");
        assert_eq!(view.videos.len(), 1);
        assert!(view.videos[0].is_flagged());
    }

    #[test]
    fn playlist_titles_sorted_for_display() {
        let mut player = player();
        player.create_playlist("zoo").unwrap();
        player.create_playlist("Arcade").unwrap();
        assert_eq!(player.show_all_playlists(), vec!["Arcade", "zoo"]);
    }
}
