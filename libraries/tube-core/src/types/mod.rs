//! Domain types for Tube Player

mod ids;
mod playback;
mod playlist;
mod video;

pub use ids::VideoId;
pub use playback::{PlaybackState, PlaybackStatus};
pub use playlist::Playlist;
pub use video::{FlagStatus, Video};
