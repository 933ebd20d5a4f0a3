/// Video domain type
use crate::types::VideoId;
use serde::{Deserialize, Serialize};

/// Moderation status of a video.
///
/// The reason only exists while the video is flagged, so clearing the flag
/// cannot leave a stale reason behind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlagStatus {
    /// Available for playback and playlist addition
    #[default]
    Clear,
    /// Marked unavailable, with an optional human-readable reason
    Flagged {
        /// Reason recorded at flag time; `None` when not supplied
        reason: Option<String>,
    },
}

/// A video in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    /// Unique video identifier
    pub id: VideoId,

    /// Video title (not required to be unique)
    pub title: String,

    /// Display tags, in catalog order
    pub tags: Vec<String>,

    /// Moderation status
    pub flag: FlagStatus,
}

impl Video {
    /// Create a new unflagged video
    pub fn new(id: VideoId, title: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            id,
            title: title.into(),
            tags,
            flag: FlagStatus::Clear,
        }
    }

    /// Whether the video is currently flagged
    pub fn is_flagged(&self) -> bool {
        matches!(self.flag, FlagStatus::Flagged { .. })
    }

    /// The flag reason, if the video is flagged and a reason was supplied
    pub fn flag_reason(&self) -> Option<&str> {
        match &self.flag {
            FlagStatus::Flagged { reason } => reason.as_deref(),
            FlagStatus::Clear => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cats() -> Video {
        Video::new(
            VideoId::new("amazing_cats_video_id"),
            "Amazing Cats",
            vec!["#cat".to_string(), "#animal".to_string()],
        )
    }

    #[test]
    fn new_video_is_unflagged() {
        let video = cats();
        assert!(!video.is_flagged());
        assert_eq!(video.flag_reason(), None);
    }

    #[test]
    fn flagged_video_reports_reason() {
        let mut video = cats();
        video.flag = FlagStatus::Flagged {
            reason: Some("dont_like_cats".to_string()),
        };
        assert!(video.is_flagged());
        assert_eq!(video.flag_reason(), Some("dont_like_cats"));
    }

    #[test]
    fn flagged_without_reason() {
        let mut video = cats();
        video.flag = FlagStatus::Flagged { reason: None };
        assert!(video.is_flagged());
        assert_eq!(video.flag_reason(), None);
    }
}
