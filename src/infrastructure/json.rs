// src/infrastructure/json.rs
use crate::domain::bookmark::{Bookmark, BookmarkList};
use crate::domain::error::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};

/// Storage view of a bookmark, decoupled from the domain entity.
///
/// Field names match the persisted JSON format: a flat array of
/// `{name, url, backgroundColor?}` objects, `backgroundColor` kept camelCase
/// and omitted when absent so round-trips are lossless.
#[derive(Serialize, Deserialize)]
struct StoredBookmark {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(
        rename = "backgroundColor",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    background_color: Option<String>,
}

impl StoredBookmark {
    fn from_domain(bookmark: &Bookmark) -> Self {
        Self {
            name: Some(bookmark.name.clone()),
            url: Some(bookmark.url.clone()),
            background_color: bookmark.background_color.clone(),
        }
    }

    fn into_domain(self) -> Bookmark {
        Bookmark {
            name: self.name.unwrap_or_default(),
            url: self.url.unwrap_or_default(),
            background_color: self.background_color,
        }
    }
}

/// Serializes a bookmark list in storage order as the flat JSON array the
/// store keeps.
pub fn encode_bookmarks(list: &BookmarkList) -> DomainResult<String> {
    let views: Vec<StoredBookmark> = list.entries().iter().map(StoredBookmark::from_domain).collect();
    serde_json::to_string(&views)
        .map_err(|e| DomainError::SerializationError(e.to_string()))
}

/// Parses the stored JSON array. Records with a missing or empty url are
/// discarded; anything that is not a JSON array of objects is an error the
/// caller decides how to treat.
pub fn decode_bookmarks(raw: &str) -> DomainResult<BookmarkList> {
    let views: Vec<StoredBookmark> = serde_json::from_str(raw)
        .map_err(|e| DomainError::DeserializationError(e.to_string()))?;
    Ok(BookmarkList::from_entries(
        views.into_iter().map(StoredBookmark::into_domain).collect(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_list_when_round_trip_then_all_three_fields_survive() {
        let mut list = BookmarkList::new();
        list.upsert("Example", "https://example.com", Some("#FCCB00".to_string()));
        list.upsert("Plain", "https://plain.com", None);

        let encoded = encode_bookmarks(&list).unwrap();
        let decoded = decode_bookmarks(&encoded).unwrap();

        assert_eq!(decoded, list);
    }

    #[test]
    fn given_entry_without_color_when_encoded_then_color_field_omitted() {
        let mut list = BookmarkList::new();
        list.upsert("Plain", "https://plain.com", None);

        let encoded = encode_bookmarks(&list).unwrap();
        assert!(!encoded.contains("backgroundColor"));
    }

    #[test]
    fn given_records_with_falsy_url_when_decoded_then_dropped() {
        let raw = r#"[
            {"name": "kept", "url": "https://example.com"},
            {"name": "empty", "url": ""},
            {"name": "null", "url": null},
            {"name": "missing"}
        ]"#;

        let decoded = decode_bookmarks(raw).unwrap();
        assert_eq!(decoded.len(), 1);
        assert!(decoded.find("https://example.com").is_some());
    }

    #[test]
    fn given_garbage_when_decoded_then_error() {
        assert!(decode_bookmarks("not json").is_err());
        assert!(decode_bookmarks(r#"{"name": "object, not array"}"#).is_err());
    }
}
