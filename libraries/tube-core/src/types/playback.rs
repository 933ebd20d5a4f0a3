/// Playback slot types
use crate::types::VideoId;
use serde::{Deserialize, Serialize};

/// Observable playback status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackStatus {
    /// Playback slot empty
    #[default]
    Stopped,
    /// A video is playing
    Playing,
    /// A video is loaded but paused
    Paused,
}

impl PlaybackStatus {
    /// Convert to string representation
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Stopped => "stopped",
            Self::Playing => "playing",
            Self::Paused => "paused",
        }
    }

    /// Parse from string
    #[must_use]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "stopped" => Some(Self::Stopped),
            "playing" => Some(Self::Playing),
            "paused" => Some(Self::Paused),
            _ => None,
        }
    }
}

impl std::fmt::Display for PlaybackStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The single process-wide playback slot.
///
/// `paused` is only meaningful while `current` is set; `stop` clears both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackState {
    /// Currently loaded video, if any
    pub current: Option<VideoId>,

    /// Whether the current video is paused
    pub paused: bool,
}

impl PlaybackState {
    /// Derive the observable status from the slot contents
    pub fn status(&self) -> PlaybackStatus {
        match (&self.current, self.paused) {
            (None, _) => PlaybackStatus::Stopped,
            (Some(_), false) => PlaybackStatus::Playing,
            (Some(_), true) => PlaybackStatus::Paused,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_stopped() {
        let state = PlaybackState::default();
        assert_eq!(state.status(), PlaybackStatus::Stopped);
    }

    #[test]
    fn status_tracks_slot_contents() {
        let mut state = PlaybackState {
            current: Some(VideoId::new("v1")),
            paused: false,
        };
        assert_eq!(state.status(), PlaybackStatus::Playing);

        state.paused = true;
        assert_eq!(state.status(), PlaybackStatus::Paused);
    }

    #[test]
    fn status_string_conversion() {
        assert_eq!(PlaybackStatus::Paused.as_str(), "paused");
        assert_eq!(
            PlaybackStatus::from_str("playing"),
            Some(PlaybackStatus::Playing)
        );
        assert_eq!(PlaybackStatus::from_str("nope"), None);
    }
}
