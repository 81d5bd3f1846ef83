// marklet/src/domain/selection.rs
use std::collections::hash_set;
use std::collections::HashSet;

/// Ephemeral set of currently selected bookmark urls.
///
/// Never persisted: a reload starts with an empty selection.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SelectionSet {
    urls: HashSet<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Plain click: the clicked url replaces the entire selection.
    pub fn select(&mut self, url: &str) {
        self.urls.clear();
        self.urls.insert(url.to_string());
    }

    /// Shift click: additive, duplicates absorbed by set semantics.
    pub fn shift_select(&mut self, url: &str) {
        self.urls.insert(url.to_string());
    }

    /// Empties the selection. Returns whether anything was actually cleared,
    /// so callers can skip a redundant re-render on background clicks.
    pub fn clear(&mut self) -> bool {
        if self.urls.is_empty() {
            return false;
        }
        self.urls.clear();
        true
    }

    pub fn contains(&self, url: &str) -> bool {
        self.urls.contains(url)
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn iter(&self) -> hash_set::Iter<'_, String> {
        self.urls.iter()
    }
}
