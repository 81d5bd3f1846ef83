// marklet/src/application/services/session_service_impl.rs
use std::sync::Arc;

use crate::application::error::ApplicationResult;
use crate::application::services::session_service::SessionService;
use crate::domain::bookmark::{Bookmark, BookmarkList};
use crate::domain::draft::DraftInput;
use crate::domain::event::{Key, UiEvent};
use crate::domain::repositories::kv_store::KeyValueStore;
use crate::domain::selection::SelectionSet;
use crate::domain::services::link_opener::LinkOpener;
use crate::infrastructure::json;
use tracing::{debug, instrument, warn};

/// Storage key the session owns, matching the original persisted format.
pub const STORAGE_KEY: &str = "bookmarks";

#[derive(Debug)]
pub struct SessionServiceImpl<S: KeyValueStore> {
    store: Arc<S>,
    link_opener: Arc<dyn LinkOpener>,
    bookmarks: BookmarkList,
    selection: SelectionSet,
    draft: DraftInput,
    picker_open: bool,
}

impl<S: KeyValueStore> SessionServiceImpl<S> {
    /// Loads the persisted list and starts with an empty selection and
    /// draft. A store read failure is fatal; an unparseable stored value is
    /// treated the same as an absent key.
    pub fn new(store: Arc<S>, link_opener: Arc<dyn LinkOpener>) -> ApplicationResult<Self> {
        let bookmarks = match store.load(STORAGE_KEY)? {
            Some(raw) => match json::decode_bookmarks(&raw) {
                Ok(list) => list,
                Err(e) => {
                    warn!("Ignoring unparseable stored bookmarks: {}", e);
                    BookmarkList::new()
                }
            },
            None => BookmarkList::new(),
        };
        debug!("Loaded {} bookmarks", bookmarks.len());

        Ok(Self {
            store,
            link_opener,
            bookmarks,
            selection: SelectionSet::new(),
            draft: DraftInput::default(),
            picker_open: false,
        })
    }

    /// Write-through after every list mutation. A persistence failure is
    /// logged and not surfaced (fire-and-forget).
    fn persist(&self) {
        match json::encode_bookmarks(&self.bookmarks) {
            Ok(serialized) => {
                if let Err(e) = self.store.save(STORAGE_KEY, &serialized) {
                    warn!("Failed to persist bookmarks: {}", e);
                }
            }
            Err(e) => warn!("Failed to serialize bookmarks: {}", e),
        }
    }

    /// Card click: update the selection per the shift flag and load the
    /// clicked bookmark into the draft for click-to-edit.
    fn select_item(&mut self, url: &str, shift: bool) -> bool {
        if shift {
            self.selection.shift_select(url);
        } else {
            self.selection.select(url);
        }
        if let Some(bookmark) = self.bookmarks.find(url) {
            self.draft.load_from(bookmark);
        }
        true
    }

    /// Link click: the platform opens the url, the stored entry is re-saved
    /// (moving it to the top of the display), and the card click handling
    /// still runs afterwards, leaving the entry selected and in the draft.
    fn open_link(&mut self, url: &str) -> bool {
        if let Err(e) = self.link_opener.open(url) {
            warn!("Failed to open {}: {}", url, e);
        }

        if let Some(bookmark) = self.bookmarks.find(url).cloned() {
            self.bookmarks
                .upsert(&bookmark.name, &bookmark.url, bookmark.background_color);
            self.persist();
            self.selection.clear();
        }

        self.select_item(url, false)
    }
}

impl<S: KeyValueStore> SessionService for SessionServiceImpl<S> {
    #[instrument(skip(self), level = "debug")]
    fn handle_event(&mut self, event: UiEvent) -> bool {
        match event {
            UiEvent::ItemClick { url, shift } => self.select_item(&url, shift),
            UiEvent::LinkClick { url } => self.open_link(&url),
            UiEvent::BackgroundClick => {
                let cleared = self.selection.clear();
                let closed = self.picker_open;
                self.picker_open = false;
                cleared || closed
            }
            UiEvent::KeyDown(Key::Backspace) => {
                if self.selection.is_empty() {
                    return false;
                }
                self.delete_selected();
                true
            }
            UiEvent::KeyDown(Key::Other) => false,
            UiEvent::Submit => self.add_bookmark(),
            UiEvent::ClearName => {
                let changed = !self.draft.name.is_empty();
                self.draft.name.clear();
                changed
            }
            UiEvent::DraftNameChanged(name) => {
                let changed = self.draft.name != name;
                self.draft.name = name;
                changed
            }
            UiEvent::DraftUrlChanged(url) => {
                let changed = self.draft.url != url;
                self.draft.url = url;
                changed
            }
            UiEvent::TogglePicker => {
                self.picker_open = !self.picker_open;
                true
            }
            UiEvent::PaletteColor(color) => {
                self.draft.color = Some(color.clone());
                if !self.selection.is_empty() {
                    self.recolor_selected(&color);
                }
                self.picker_open = false;
                true
            }
        }
    }

    #[instrument(skip(self), level = "debug")]
    fn add_bookmark(&mut self) -> bool {
        let color = self.draft.color.clone();
        if !self.bookmarks.upsert(&self.draft.name, &self.draft.url, color) {
            debug!("Ignoring add with empty url");
            return false;
        }
        self.persist();
        self.selection.clear();
        true
    }

    #[instrument(skip(self), level = "debug")]
    fn delete_selected(&mut self) -> usize {
        let removed = self.bookmarks.remove_selected(&self.selection);
        if removed > 0 {
            self.persist();
        }
        // Deletion also resets the selection.
        self.selection.clear();
        debug!("Deleted {} bookmarks", removed);
        removed
    }

    #[instrument(skip(self), level = "debug")]
    fn recolor_selected(&mut self, color: &str) -> usize {
        let changed = self.bookmarks.recolor_selected(&self.selection, color);
        if changed > 0 {
            self.persist();
        }
        changed
    }

    fn bookmarks_newest_first(&self) -> Vec<Bookmark> {
        self.bookmarks.newest_first().cloned().collect()
    }

    fn bookmark_by_url(&self, url: &str) -> Option<Bookmark> {
        self.bookmarks.find(url).cloned()
    }

    fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    fn draft(&self) -> &DraftInput {
        &self.draft
    }

    fn picker_open(&self) -> bool {
        self.picker_open
    }
}
