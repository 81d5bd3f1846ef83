// marklet/src/domain/draft.rs
use crate::domain::bookmark::Bookmark;

/// The editable name/url/color fields backing the add/edit form.
///
/// Entirely UI-local and never persisted on its own; saving it goes through
/// the bookmark list's single write path.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DraftInput {
    pub name: String,
    pub url: String,
    pub color: Option<String>,
}

impl DraftInput {
    /// Click-to-edit: overwrites all fields from the clicked bookmark so a
    /// subsequent save re-writes that entry.
    pub fn load_from(&mut self, bookmark: &Bookmark) {
        self.name = bookmark.name.clone();
        self.url = bookmark.url.clone();
        self.color = bookmark.background_color.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_bookmark_when_load_from_then_all_fields_overwritten() {
        let mut draft = DraftInput {
            name: "old".to_string(),
            url: "old.com".to_string(),
            color: Some("#B80000".to_string()),
        };

        let bookmark = Bookmark::new("new", "new.com", None);
        draft.load_from(&bookmark);

        assert_eq!(draft.name, "new");
        assert_eq!(draft.url, "new.com");
        assert_eq!(draft.color, None);
    }
}
