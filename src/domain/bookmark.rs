// marklet/src/domain/bookmark.rs
use crate::domain::selection::SelectionSet;
use derive_builder::Builder;
use std::fmt;

/// Represents a bookmark domain entity.
///
/// `url` is the unique key within a list; `name` is the display title.
#[derive(Builder, Clone, PartialEq, Eq)]
#[builder(setter(into))]
pub struct Bookmark {
    pub name: String,
    pub url: String,
    /// Card background, normally one of the palette colors. `None` renders
    /// as the default background.
    #[builder(default)]
    pub background_color: Option<String>,
}

impl Bookmark {
    /// An empty `name` falls back to the url itself (URL-as-title policy).
    pub fn new<S: AsRef<str>>(name: S, url: S, background_color: Option<String>) -> Self {
        let url = url.as_ref().to_string();
        let name = name.as_ref();
        let title = if name.is_empty() {
            url.clone()
        } else {
            name.to_string()
        };

        Self {
            name: title,
            url,
            background_color,
        }
    }
}

impl fmt::Display for Bookmark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} ({})",
            self.name,
            self.url,
            self.background_color.as_deref().unwrap_or("default")
        )
    }
}

impl fmt::Debug for Bookmark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bookmark")
            .field("name", &self.name)
            .field("url", &self.url)
            .field("background_color", &self.background_color)
            .finish()
    }
}

/// Ordered bookmark collection. Storage order is add order; the view shows
/// the reverse via [`BookmarkList::newest_first`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BookmarkList {
    entries: Vec<Bookmark>,
}

impl BookmarkList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a list from already-decoded entries, dropping any entry
    /// without a url.
    pub fn from_entries(entries: Vec<Bookmark>) -> Self {
        Self {
            entries: entries.into_iter().filter(|b| !b.url.is_empty()).collect(),
        }
    }

    /// The only write path, covering both "new bookmark" and "re-save after
    /// edit": removes any existing entry with the same url, then appends.
    ///
    /// Returns `false` and changes nothing when `url` is empty.
    pub fn upsert(&mut self, name: &str, url: &str, background_color: Option<String>) -> bool {
        if url.is_empty() {
            return false;
        }
        self.entries.retain(|b| b.url != url);
        self.entries.push(Bookmark::new(name, url, background_color));
        true
    }

    /// Removes every entry whose url is selected; relative order of the
    /// remaining entries is preserved. Returns the number removed.
    pub fn remove_selected(&mut self, selection: &SelectionSet) -> usize {
        let before = self.entries.len();
        self.entries.retain(|b| !selection.contains(&b.url));
        before - self.entries.len()
    }

    /// Applies `color` to exactly the selected entries. Returns the number
    /// of entries recolored.
    pub fn recolor_selected(&mut self, selection: &SelectionSet, color: &str) -> usize {
        let mut changed = 0;
        for bookmark in self
            .entries
            .iter_mut()
            .filter(|b| selection.contains(&b.url))
        {
            bookmark.background_color = Some(color.to_string());
            changed += 1;
        }
        changed
    }

    pub fn find(&self, url: &str) -> Option<&Bookmark> {
        self.entries.iter().find(|b| b.url == url)
    }

    /// Display projection: most recently added or updated first. Pure
    /// read-side view, storage order is untouched.
    pub fn newest_first(&self) -> impl Iterator<Item = &Bookmark> {
        self.entries.iter().rev()
    }

    /// Entries in storage (add) order.
    pub fn entries(&self) -> &[Bookmark] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls(list: &BookmarkList) -> Vec<&str> {
        list.entries().iter().map(|b| b.url.as_str()).collect()
    }

    #[test]
    fn given_empty_name_when_new_then_title_falls_back_to_url() {
        let bookmark = Bookmark::new("", "example.com", None);
        assert_eq!(bookmark.name, "example.com");
        assert_eq!(bookmark.url, "example.com");
    }

    #[test]
    fn given_builder_when_no_color_then_defaults_to_none() {
        let bookmark = BookmarkBuilder::default()
            .name("Example")
            .url("https://example.com")
            .build()
            .unwrap();
        assert_eq!(bookmark.background_color, None);
    }

    #[test]
    fn given_empty_url_when_upsert_then_noop() {
        let mut list = BookmarkList::new();
        assert!(!list.upsert("Example", "", None));
        assert!(list.is_empty());
    }

    #[test]
    fn given_same_url_when_upsert_twice_then_single_entry_last_write_wins() {
        let mut list = BookmarkList::new();
        assert!(list.upsert("First", "https://example.com", None));
        assert!(list.upsert("Second", "https://example.com", Some("#FCCB00".to_string())));

        assert_eq!(list.len(), 1);
        let entry = list.find("https://example.com").unwrap();
        assert_eq!(entry.name, "Second");
        assert_eq!(entry.background_color.as_deref(), Some("#FCCB00"));
    }

    #[test]
    fn given_resaved_entry_when_upsert_then_moves_to_end_of_storage() {
        let mut list = BookmarkList::new();
        list.upsert("a", "a.com", None);
        list.upsert("b", "b.com", None);
        list.upsert("a", "a.com", None);

        assert_eq!(urls(&list), vec!["b.com", "a.com"]);
    }

    #[test]
    fn given_selection_when_remove_selected_then_order_of_rest_preserved() {
        let mut list = BookmarkList::new();
        list.upsert("a", "a.com", None);
        list.upsert("b", "b.com", None);
        list.upsert("c", "c.com", None);

        let mut selection = SelectionSet::new();
        selection.select("b.com");

        assert_eq!(list.remove_selected(&selection), 1);
        assert_eq!(urls(&list), vec!["a.com", "c.com"]);
    }

    #[test]
    fn given_selection_with_unknown_url_when_remove_selected_then_harmless() {
        let mut list = BookmarkList::new();
        list.upsert("a", "a.com", None);

        let mut selection = SelectionSet::new();
        selection.select("missing.com");

        assert_eq!(list.remove_selected(&selection), 0);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn given_selection_when_recolor_then_exactly_selected_changed() {
        let mut list = BookmarkList::new();
        list.upsert("a", "a.com", None);
        list.upsert("b", "b.com", None);
        list.upsert("c", "c.com", None);

        let mut selection = SelectionSet::new();
        selection.select("a.com");
        selection.shift_select("c.com");

        assert_eq!(list.recolor_selected(&selection, "#FCCB00"), 2);
        assert_eq!(
            list.find("a.com").unwrap().background_color.as_deref(),
            Some("#FCCB00")
        );
        assert_eq!(list.find("b.com").unwrap().background_color, None);
        assert_eq!(
            list.find("c.com").unwrap().background_color.as_deref(),
            Some("#FCCB00")
        );
    }

    #[test]
    fn given_two_adds_when_newest_first_then_reverse_of_add_order() {
        let mut list = BookmarkList::new();
        list.upsert("a", "a.com", None);
        list.upsert("b", "b.com", None);

        let view: Vec<&str> = list.newest_first().map(|b| b.url.as_str()).collect();
        assert_eq!(view, vec!["b.com", "a.com"]);
        // Projection never mutates storage order.
        assert_eq!(urls(&list), vec!["a.com", "b.com"]);
    }

    #[test]
    fn given_entries_with_empty_url_when_from_entries_then_dropped() {
        let list = BookmarkList::from_entries(vec![
            Bookmark::new("kept", "a.com", None),
            Bookmark {
                name: "dropped".to_string(),
                url: String::new(),
                background_color: None,
            },
        ]);
        assert_eq!(urls(&list), vec!["a.com"]);
    }
}
