/// Core error types for Tube Player
use thiserror::Error;

use crate::types::VideoId;

/// Result type alias using `TubeError`
pub type Result<T> = std::result::Result<T, TubeError>;

/// Closed set of failure outcomes for every core operation.
///
/// The engine never panics and never prints; every fallible operation
/// returns one of these, and the front end decides how to render it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TubeError {
    /// Video id not present in the catalog
    #[error("Video does not exist")]
    VideoNotFound(VideoId),

    /// Playlist title (case-insensitive) not present in the store
    #[error("Playlist does not exist")]
    PlaylistNotFound(String),

    /// A playlist with the same case-insensitive title already exists
    #[error("A playlist with the same name already exists")]
    PlaylistExists(String),

    /// Video is already flagged
    #[error("Video is already flagged")]
    AlreadyFlagged(VideoId),

    /// Video is not flagged
    #[error("Video is not flagged")]
    NotFlagged(VideoId),

    /// Operation rejected because the video is flagged.
    ///
    /// Carries the flag reason as stored; `None` means no reason was
    /// supplied (front ends render that as "Not supplied").
    #[error("Video is currently flagged (reason: {})", .reason.as_deref().unwrap_or("Not supplied"))]
    VideoFlagged {
        /// The flagged video
        id: VideoId,
        /// Reason recorded when the video was flagged, if any
        reason: Option<String>,
    },

    /// Video already present in the target playlist
    #[error("Video already added")]
    AlreadyInPlaylist {
        /// Display title of the playlist
        playlist: String,
        /// The duplicate video
        id: VideoId,
    },

    /// Video absent from the target playlist
    #[error("Video is not in playlist")]
    NotInPlaylist {
        /// Display title of the playlist
        playlist: String,
        /// The missing video
        id: VideoId,
    },

    /// Playback slot is empty
    #[error("No video is currently playing")]
    NoVideoPlaying,

    /// Resume requested while playing (not paused)
    #[error("Video is not paused")]
    NotPaused,

    /// Random playback requested with no unflagged videos in the catalog
    #[error("No videos available")]
    NoVideosAvailable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn video_flagged_renders_missing_reason_placeholder() {
        let err = TubeError::VideoFlagged {
            id: VideoId::new("v1"),
            reason: None,
        };
        assert_eq!(
            err.to_string(),
            "Video is currently flagged (reason: Not supplied)"
        );
    }

    #[test]
    fn video_flagged_renders_stored_reason() {
        let err = TubeError::VideoFlagged {
            id: VideoId::new("v1"),
            reason: Some("dont_like_cats".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "Video is currently flagged (reason: dont_like_cats)"
        );
    }
}
