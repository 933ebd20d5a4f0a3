//! Playback engine
//!
//! The single playback slot and its state machine (`Stopped`, `Playing`,
//! `Paused`). The engine stores only a video id; the catalog is consulted at
//! transition time to resolve it and to reject flagged videos.

use rand::seq::SliceRandom;
use rand::Rng;

use tube_core::{PlaybackState, PlaybackStatus, Result, TubeError, Video, VideoId};

use crate::catalog::VideoCatalog;

/// Result of a successful `play`: what started and what got displaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayTransition {
    /// Video that was implicitly stopped, if one was loaded
    pub stopped: Option<VideoId>,

    /// Video now playing
    pub playing: VideoId,
}

/// Result of a successful `pause` call.
///
/// Pausing an already paused video is informational, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PauseTransition {
    /// The video transitioned from playing to paused
    Paused(VideoId),
    /// The video was already paused; state unchanged
    AlreadyPaused(VideoId),
}

/// Owner of the playback slot. At most one video is loaded at a time.
#[derive(Debug, Default)]
pub struct PlaybackEngine {
    state: PlaybackState,
}

impl PlaybackEngine {
    /// Create an engine with an empty slot
    pub fn new() -> Self {
        Self::default()
    }

    /// Current slot contents
    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    /// Observable status of the slot
    pub fn status(&self) -> PlaybackStatus {
        self.state.status()
    }

    /// Start playing a video.
    ///
    /// An unknown or flagged id fails without touching the slot. Otherwise
    /// anything currently loaded is displaced (reported, not an error) and
    /// the slot enters `Playing`.
    pub fn play(&mut self, catalog: &VideoCatalog, id: &VideoId) -> Result<PlayTransition> {
        let video = catalog.get(id)?;
        if video.is_flagged() {
            return Err(TubeError::VideoFlagged {
                id: id.clone(),
                reason: video.flag_reason().map(ToOwned::to_owned),
            });
        }

        let stopped = self.state.current.take();
        self.state.current = Some(id.clone());
        self.state.paused = false;
        tracing::debug!(id = %id, "playing video");
        Ok(PlayTransition {
            stopped,
            playing: id.clone(),
        })
    }

    /// Stop playback, returning the id that was loaded.
    pub fn stop(&mut self) -> Result<VideoId> {
        let stopped = self.state.current.take().ok_or(TubeError::NoVideoPlaying)?;
        self.state.paused = false;
        tracing::debug!(id = %stopped, "stopping video");
        Ok(stopped)
    }

    /// Play a uniformly random non-flagged video.
    ///
    /// Fails with `NoVideosAvailable` before any state change when every
    /// catalog video is flagged (or the catalog is empty), so this can never
    /// surface `VideoFlagged`.
    pub fn play_random<R: Rng + ?Sized>(
        &mut self,
        catalog: &VideoCatalog,
        rng: &mut R,
    ) -> Result<PlayTransition> {
        let pool: Vec<&Video> = catalog.iter().filter(|v| !v.is_flagged()).collect();
        let chosen = pool.choose(rng).ok_or(TubeError::NoVideosAvailable)?;
        self.play(catalog, &chosen.id.clone())
    }

    /// Pause the current video.
    pub fn pause(&mut self) -> Result<PauseTransition> {
        let current = self
            .state
            .current
            .clone()
            .ok_or(TubeError::NoVideoPlaying)?;
        if self.state.paused {
            return Ok(PauseTransition::AlreadyPaused(current));
        }
        self.state.paused = true;
        tracing::debug!(id = %current, "pausing video");
        Ok(PauseTransition::Paused(current))
    }

    /// Resume a paused video.
    pub fn resume(&mut self) -> Result<VideoId> {
        let current = self
            .state
            .current
            .clone()
            .ok_or(TubeError::NoVideoPlaying)?;
        if !self.state.paused {
            return Err(TubeError::NotPaused);
        }
        self.state.paused = false;
        tracing::debug!(id = %current, "continuing video");
        Ok(current)
    }

    /// The loaded video id and paused flag, or `NoVideoPlaying`.
    pub fn current(&self) -> Result<(&VideoId, bool)> {
        match &self.state.current {
            Some(id) => Ok((id, self.state.paused)),
            None => Err(TubeError::NoVideoPlaying),
        }
    }
}
