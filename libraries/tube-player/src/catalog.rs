//! Video catalog
//!
//! Owns the set of videos for one application run. The set is fixed at
//! construction; only the moderation flag of an entry mutates afterwards,
//! and only through [`VideoCatalog::flag`] / [`VideoCatalog::unflag`].

use std::collections::HashMap;

use tube_core::{FlagStatus, Result, TubeError, Video, VideoId};

/// In-memory video catalog keyed by id.
#[derive(Debug, Default)]
pub struct VideoCatalog {
    videos: HashMap<VideoId, Video>,
}

impl VideoCatalog {
    /// Build a catalog from loader output.
    ///
    /// A duplicate id replaces the earlier entry (last one wins). An empty
    /// iterator yields a usable empty catalog.
    pub fn new(entries: impl IntoIterator<Item = Video>) -> Self {
        let mut videos = HashMap::new();
        for video in entries {
            if let Some(previous) = videos.insert(video.id.clone(), video) {
                tracing::debug!(id = %previous.id, "duplicate catalog id, keeping later entry");
            }
        }
        Self { videos }
    }

    /// Number of videos in the catalog, flagged included
    pub fn len(&self) -> usize {
        self.videos.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }

    /// Look up a video by id
    pub fn get(&self, id: &VideoId) -> Result<&Video> {
        self.videos
            .get(id)
            .ok_or_else(|| TubeError::VideoNotFound(id.clone()))
    }

    /// Iterate over every video in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = &Video> {
        self.videos.values()
    }

    /// Every video, flagged included, sorted ascending by title then id
    pub fn all(&self) -> Vec<&Video> {
        Self::sorted(self.videos.values().collect())
    }

    /// Non-flagged videos whose title contains `term`, case-insensitive,
    /// sorted ascending by title then id.
    pub fn search_by_title(&self, term: &str) -> Vec<&Video> {
        let needle = term.to_lowercase();
        Self::sorted(
            self.available()
                .filter(|v| v.title.to_lowercase().contains(&needle))
                .collect(),
        )
    }

    /// Non-flagged videos carrying a tag equal to `tag`, case-insensitive,
    /// sorted ascending by title then id.
    pub fn search_by_tag(&self, tag: &str) -> Vec<&Video> {
        Self::sorted(
            self.available()
                .filter(|v| v.tags.iter().any(|t| t.eq_ignore_ascii_case(tag)))
                .collect(),
        )
    }

    /// Flag a video, recording the reason exactly as given.
    ///
    /// The stored reason stays absent when none is supplied; the
    /// "Not supplied" placeholder is a rendering concern.
    pub fn flag(&mut self, id: &VideoId, reason: Option<String>) -> Result<&Video> {
        let video = self
            .videos
            .get_mut(id)
            .ok_or_else(|| TubeError::VideoNotFound(id.clone()))?;
        if video.is_flagged() {
            return Err(TubeError::AlreadyFlagged(id.clone()));
        }
        tracing::info!(id = %id, "flagging video");
        video.flag = FlagStatus::Flagged { reason };
        Ok(video)
    }

    /// Clear a video's flag along with its stored reason.
    pub fn unflag(&mut self, id: &VideoId) -> Result<&Video> {
        let video = self
            .videos
            .get_mut(id)
            .ok_or_else(|| TubeError::VideoNotFound(id.clone()))?;
        if !video.is_flagged() {
            return Err(TubeError::NotFlagged(id.clone()));
        }
        tracing::info!(id = %id, "removing flag from video");
        video.flag = FlagStatus::Clear;
        Ok(video)
    }

    fn available(&self) -> impl Iterator<Item = &Video> {
        self.videos.values().filter(|v| !v.is_flagged())
    }

    fn sorted(mut videos: Vec<&Video>) -> Vec<&Video> {
        videos.sort_by(|a, b| a.title.cmp(&b.title).then_with(|| a.id.cmp(&b.id)));
        videos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> VideoCatalog {
        VideoCatalog::new(vec![
            Video::new(
                VideoId::new("v2"),
                "Another Cat Video",
                vec!["cat".to_string()],
            ),
            Video::new(
                VideoId::new("v1"),
                "Amazing Cat Video",
                vec!["cat".to_string(), "animal".to_string()],
            ),
            Video::new(
                VideoId::new("v3"),
                "Funny Dogs",
                vec!["dog".to_string(), "animal".to_string()],
            ),
        ])
    }

    #[test]
    fn get_unknown_id_fails() {
        let catalog = catalog();
        assert_eq!(
            catalog.get(&VideoId::new("nope")),
            Err(TubeError::VideoNotFound(VideoId::new("nope")))
        );
    }

    #[test]
    fn search_by_title_is_case_insensitive_and_sorted() {
        let catalog = catalog();
        let hits = catalog.search_by_title("CAT");
        let titles: Vec<_> = hits.iter().map(|v| v.title.as_str()).collect();
        assert_eq!(titles, vec!["Amazing Cat Video", "Another Cat Video"]);
    }

    #[test]
    fn search_by_tag_matches_whole_tag_only() {
        let catalog = catalog();
        assert_eq!(catalog.search_by_tag("CaT").len(), 2);
        // substring of a tag is not a match
        assert!(catalog.search_by_tag("ca").is_empty());
    }

    #[test]
    fn searches_exclude_flagged_videos() {
        let mut catalog = catalog();
        catalog.flag(&VideoId::new("v1"), None).unwrap();

        assert!(catalog
            .search_by_title("cat")
            .iter()
            .all(|v| v.id != VideoId::new("v1")));
        assert!(catalog
            .search_by_tag("cat")
            .iter()
            .all(|v| v.id != VideoId::new("v1")));
        // flagged videos still show up in the full listing
        assert_eq!(catalog.all().len(), 3);
    }

    #[test]
    fn flag_twice_fails() {
        let mut catalog = catalog();
        let id = VideoId::new("v1");
        catalog.flag(&id, Some("dont_like_cats".to_string())).unwrap();
        assert_eq!(
            catalog.flag(&id, None),
            Err(TubeError::AlreadyFlagged(id.clone()))
        );
        assert_eq!(
            catalog.get(&id).unwrap().flag_reason(),
            Some("dont_like_cats")
        );
    }

    #[test]
    fn unflag_restores_clear_state() {
        let mut catalog = catalog();
        let id = VideoId::new("v1");

        assert_eq!(catalog.unflag(&id), Err(TubeError::NotFlagged(id.clone())));

        catalog.flag(&id, Some("dont_like_cats".to_string())).unwrap();
        catalog.unflag(&id).unwrap();

        let video = catalog.get(&id).unwrap();
        assert!(!video.is_flagged());
        assert_eq!(video.flag_reason(), None);
    }

    #[test]
    fn duplicate_ids_keep_last_entry() {
        let catalog = VideoCatalog::new(vec![
            Video::new(VideoId::new("v1"), "First", vec![]),
            Video::new(VideoId::new("v1"), "Second", vec![]),
        ]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(&VideoId::new("v1")).unwrap().title, "Second");
    }

    #[test]
    fn empty_catalog_is_usable() {
        let catalog = VideoCatalog::new(vec![]);
        assert!(catalog.is_empty());
        assert!(catalog.search_by_title("anything").is_empty());
    }
}
