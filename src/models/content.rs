use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::ContentKind;

/// A content page as served to storefront clients, localized to the
/// language the request resolved to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadableContentPage {
    pub code: String,
    pub title: String,
    pub body: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, String>,
}

/// One language's worth of page content in an upsert payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageTranslation {
    pub language: String,
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

/// Page upsert payload: a code plus per-language title/body content.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistableContentPage {
    pub code: String,
    #[serde(default)]
    pub translations: Vec<PageTranslation>,
}

/// A small named HTML snippet keyed by code, localized on read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadableContentBox {
    pub code: String,
    pub name: String,
    pub html: String,
}

/// One stored file as listed in a folder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentFileEntry {
    pub name: String,
    pub url: String,
    pub size: u64,
    pub content_type: String,
}

/// A path in the asset tree and the files stored directly under it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentFolder {
    pub path: String,
    pub files: Vec<ContentFileEntry>,
}

/// An uploaded file in transit from the HTTP layer to the facade.
/// Never serialized as JSON; it arrives as a multipart part.
#[derive(Debug, Clone)]
pub struct ContentFile {
    pub name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Identifies a deletable asset by name and kind.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentName {
    pub name: String,
    pub content_type: ContentKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_wire_format_is_camel_case() {
        let entry = ContentFileEntry {
            name: "logo.png".into(),
            url: "http://localhost:3000/files/DEFAULT/logo.png".into(),
            size: 10,
            content_type: "image/png".into(),
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["contentType"], "image/png");
        assert_eq!(json["size"], 10);
    }

    #[test]
    fn persistable_page_accepts_missing_translations() {
        let page: PersistableContentPage = serde_json::from_str(r#"{"code":"about"}"#).unwrap();
        assert_eq!(page.code, "about");
        assert!(page.translations.is_empty());
    }

    #[test]
    fn content_name_parses_kind() {
        let name: ContentName =
            serde_json::from_str(r#"{"name":"logo.png","contentType":"IMAGE"}"#).unwrap();
        assert_eq!(name.content_type, ContentKind::Image);
    }

    #[test]
    fn empty_page_metadata_is_omitted() {
        let page = ReadableContentPage {
            code: "about".into(),
            title: "About".into(),
            body: "<p>hi</p>".into(),
            metadata: HashMap::new(),
        };
        let json = serde_json::to_value(&page).unwrap();
        assert!(json.get("metadata").is_none());
    }
}
