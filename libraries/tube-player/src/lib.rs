//! Tube Player - Engine
//!
//! In-memory video catalog, playlist and playback engine.
//!
//! This crate provides:
//! - `VideoCatalog`: lookup, flag-aware search, flag/unflag mutation
//! - `PlaylistStore`: named playlists, case-insensitive titles, ordered
//!   duplicate-free entries
//! - `PlaybackEngine`: the single playback slot state machine
//! - `InteractiveSelector`: the search-and-select flow, suspending for one
//!   line of input through a `SelectionPrompt` collaborator
//! - `Player`: the owning aggregate exposing one operation per user command
//! - the catalog loader for the `title | id | tags` line format
//!
//! The engine is single-threaded and synchronous; the selector's one line
//! of input is the only blocking point. Nothing here prints: every
//! operation returns a structured outcome or one of the closed
//! [`tube_core::TubeError`] kinds, and the front end renders them.
//!
//! # Example
//!
//! ```rust
//! use tube_core::VideoId;
//! use tube_player::{loader, Player};
//!
//! let videos = loader::read_catalog_str(
//!     "Amazing Cats | amazing_cats_video_id | #cat,#animal",
//! );
//! let mut player = Player::new(videos);
//!
//! let outcome = player.play(&VideoId::new("amazing_cats_video_id")).unwrap();
//! assert_eq!(outcome.playing.title, "Amazing Cats");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod catalog;
pub mod loader;
pub mod playback;
pub mod player;
pub mod playlists;
pub mod selector;

// Public exports
pub use catalog::VideoCatalog;
pub use playback::{PauseTransition, PlayTransition, PlaybackEngine};
pub use player::{
    FlagOutcome, NowPlaying, PauseOutcome, PlayOutcome, Player, PlaylistView, SearchOutcome,
};
pub use playlists::PlaylistStore;
pub use selector::{InteractiveSelector, SearchMode, Selection, SelectionPrompt};
