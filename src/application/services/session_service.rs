// marklet/src/application/services/session_service.rs
use crate::domain::bookmark::Bookmark;
use crate::domain::draft::DraftInput;
use crate::domain::event::UiEvent;
use crate::domain::selection::SelectionSet;
use std::fmt::Debug;

/// Service interface over one bookmark session: the persisted list, the
/// ephemeral selection and the draft form.
///
/// All operations are total. Persistence is write-through and best-effort;
/// its failures never surface here.
pub trait SessionService: Debug {
    /// Routes one UI event to the matching state transition. Returns whether
    /// observable state changed, so callers can skip redundant re-renders.
    fn handle_event(&mut self, event: UiEvent) -> bool;

    /// Saves the draft through the single write path (add or re-save after
    /// edit) and clears the selection. Silently ignores an empty draft url
    /// and returns `false`.
    fn add_bookmark(&mut self) -> bool;

    /// Deletes every bookmark whose url is selected, then resets the
    /// selection. Returns the number deleted.
    fn delete_selected(&mut self) -> usize;

    /// Applies `color` to every selected bookmark. Returns the number
    /// recolored.
    fn recolor_selected(&mut self, color: &str) -> usize;

    /// Display projection: most recently added or updated first.
    fn bookmarks_newest_first(&self) -> Vec<Bookmark>;

    fn bookmark_by_url(&self, url: &str) -> Option<Bookmark>;

    fn selection(&self) -> &SelectionSet;

    fn draft(&self) -> &DraftInput;

    fn picker_open(&self) -> bool;
}
