/// ID types for Tube Player entities
use serde::{Deserialize, Serialize};
use std::fmt;

/// Video identifier
///
/// Assigned by the catalog loader, globally unique, immutable for the
/// lifetime of the video. `Ord` follows the underlying string so ids can
/// serve as a deterministic sort tiebreaker.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VideoId(String);

impl VideoId {
    /// Create a new video ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn video_id_from_string() {
        let id = VideoId::new("amazing_cats_video_id");
        assert_eq!(id.as_str(), "amazing_cats_video_id");
    }

    #[test]
    fn video_id_display() {
        let id = VideoId::new("v-42");
        assert_eq!(format!("{}", id), "v-42");
    }

    #[test]
    fn video_id_ordering_is_lexicographic() {
        assert!(VideoId::new("a") < VideoId::new("b"));
    }
}
