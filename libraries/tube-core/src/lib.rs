//! Tube Player Core
//!
//! Domain types and error handling for Tube Player.
//!
//! This crate provides the foundational building blocks shared by the engine
//! and the command-line front end:
//! - **Domain Types**: `Video`, `Playlist`, `PlaybackState`, etc.
//! - **Error Handling**: the closed `TubeError` set and `Result` alias
//!
//! # Example
//!
//! ```rust
//! use tube_core::types::{Video, VideoId, Playlist};
//!
//! let video = Video::new(
//!     VideoId::new("amazing_cats_video_id"),
//!     "Amazing Cats",
//!     vec!["#cat".to_string(), "#animal".to_string()],
//! );
//! assert!(!video.is_flagged());
//!
//! let playlist = Playlist::new("my_PLAYlist");
//! assert!(playlist.video_ids.is_empty());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{Result, TubeError};
pub use types::{FlagStatus, PlaybackState, PlaybackStatus, Playlist, Video, VideoId};
