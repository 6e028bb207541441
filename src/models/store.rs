use serde::{Deserialize, Serialize};

/// A locale tag such as `en` or `fr`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Language(String);

impl Language {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Language {
    fn from(tag: &str) -> Self {
        Self(tag.to_owned())
    }
}

/// A merchant store: the isolated storefront scope that owns all content
/// reachable through the API. Resolved once per request and passed to every
/// facade call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MerchantStore {
    pub code: String,
    pub name: String,
    pub default_language: Language,
    pub languages: Vec<Language>,
}

impl MerchantStore {
    pub fn supports(&self, language: &Language) -> bool {
        self.languages.contains(language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_supports_listed_languages() {
        let store = MerchantStore {
            code: "DEFAULT".into(),
            name: "Default store".into(),
            default_language: Language::new("en"),
            languages: vec![Language::new("en"), Language::new("fr")],
        };
        assert!(store.supports(&Language::new("fr")));
        assert!(!store.supports(&Language::new("de")));
    }
}
