//! Interactive search-and-select flow
//!
//! Bridges a catalog search to playback: present the numbered results
//! through a [`SelectionPrompt`] collaborator, wait for exactly one line of
//! input (the sole blocking point in the engine), and play the chosen video.

use tube_core::{Result, Video};

use crate::catalog::VideoCatalog;
use crate::playback::{PlayTransition, PlaybackEngine};

/// Which catalog search the selector runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// Case-insensitive title substring match
    Title,
    /// Case-insensitive exact tag match
    Tag,
}

/// Collaborator that owns presentation and the single line of input.
///
/// The engine never prints; a front end implements this on top of its own
/// I/O. `read_line` blocks until one line arrives; `None` means end of
/// input and is treated as "no selection".
pub trait SelectionPrompt {
    /// Show the ordered, 1-indexed search results for `term`
    fn present(&mut self, term: &str, results: &[&Video]);

    /// Read exactly one line of input
    fn read_line(&mut self) -> Option<String>;
}

/// Outcome of one search-and-select round
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// The search matched nothing; no input was requested
    NoResults,
    /// Results were shown but the reply was missing, unparseable or out of
    /// range. A valid negative outcome, not an error.
    NoSelection,
    /// A result was chosen and is now playing
    Played(PlayTransition),
}

/// One search-and-select round over a catalog and playback engine.
pub struct InteractiveSelector<'a> {
    catalog: &'a VideoCatalog,
    playback: &'a mut PlaybackEngine,
}

impl<'a> InteractiveSelector<'a> {
    /// Borrow the components for one round
    pub fn new(catalog: &'a VideoCatalog, playback: &'a mut PlaybackEngine) -> Self {
        Self { catalog, playback }
    }

    /// Run the flow: search, present, suspend for one line, maybe play.
    ///
    /// The only error path is `PlaybackEngine::play` on the chosen video,
    /// propagated as-is; search results exclude flagged videos, so the
    /// flagged branch is unreachable in practice.
    pub fn run(
        self,
        mode: SearchMode,
        term: &str,
        prompt: &mut dyn SelectionPrompt,
    ) -> Result<Selection> {
        let results = match mode {
            SearchMode::Title => self.catalog.search_by_title(term),
            SearchMode::Tag => self.catalog.search_by_tag(term),
        };
        if results.is_empty() {
            return Ok(Selection::NoResults);
        }

        prompt.present(term, &results);
        tracing::debug!(term, results = results.len(), "awaiting selection");

        let Some(line) = prompt.read_line() else {
            return Ok(Selection::NoSelection);
        };
        let Ok(choice) = line.trim().parse::<usize>() else {
            return Ok(Selection::NoSelection);
        };
        if !(1..=results.len()).contains(&choice) {
            return Ok(Selection::NoSelection);
        }

        let chosen = results[choice - 1].id.clone();
        self.playback
            .play(self.catalog, &chosen)
            .map(Selection::Played)
    }
}
