//! In-memory facade backend.
//!
//! Default backend for development and tests: every capability trait is
//! implemented over `RwLock`-guarded maps keyed by store code. Durable
//! backends plug in behind the same traits without touching the HTTP layer.

use std::collections::{BTreeMap, HashMap};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use url::Url;

use crate::config::ContentConfig;
use crate::models::{
    ContentFile, ContentFolder, ContentFileEntry, Language, MerchantStore,
    PersistableContentPage, ReadableContentBox, ReadableContentPage,
};
use crate::types::ContentKind;

use super::{
    AssetWriter, BoxReader, FacadeError, FolderReader, PageReader, PageWriter, StoreFacade,
};

#[derive(Debug, Clone)]
struct PageRecord {
    title: String,
    body: String,
    metadata: HashMap<String, String>,
}

#[derive(Debug, Clone)]
struct BoxTranslation {
    name: String,
    html: String,
}

#[derive(Debug)]
struct BoxEntry {
    kind: ContentKind,
    translations: HashMap<String, BoxTranslation>,
}

#[derive(Debug, Clone)]
struct StoredFile {
    kind: ContentKind,
    content_type: String,
    bytes: Vec<u8>,
}

/// Everything one store owns. Pages and boxes key translations by language
/// tag; files key by folder path, with `""` as the root folder.
#[derive(Debug, Default)]
struct StoreContent {
    pages: BTreeMap<String, HashMap<String, PageRecord>>,
    boxes: BTreeMap<String, BoxEntry>,
    folders: BTreeMap<String, BTreeMap<String, StoredFile>>,
}

/// In-memory `ContentFacade` implementation.
pub struct MemoryContent {
    base_url: String,
    stores: RwLock<HashMap<String, StoreContent>>,
}

impl MemoryContent {
    /// `base_url` is the public prefix under which stored files are served;
    /// it is validated eagerly so malformed values show up at startup.
    pub fn new(base_url: &str) -> Self {
        let base_url = match Url::parse(base_url) {
            Ok(parsed) => {
                let rendered = parsed.to_string();
                rendered.trim_end_matches('/').to_owned()
            }
            Err(err) => {
                tracing::warn!("invalid public base url '{}': {}", base_url, err);
                base_url.trim_end_matches('/').to_owned()
            }
        };

        Self {
            base_url,
            stores: RwLock::new(HashMap::new()),
        }
    }

    /// Seed a box translation directly, bypassing the HTTP surface. Boxes
    /// have no write endpoint; fixtures and demos create them here.
    pub fn seed_box(
        &self,
        store_code: &str,
        code: &str,
        kind: ContentKind,
        language: &str,
        name: &str,
        html: &str,
    ) {
        let mut stores = self.write();
        let content = stores.entry(store_code.to_owned()).or_default();
        let entry = content.boxes.entry(code.to_owned()).or_insert(BoxEntry {
            kind,
            translations: HashMap::new(),
        });
        entry.kind = kind;
        entry.translations.insert(
            language.to_owned(),
            BoxTranslation {
                name: name.to_owned(),
                html: html.to_owned(),
            },
        );
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, StoreContent>> {
        self.stores.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, StoreContent>> {
        self.stores.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn file_url(&self, store_code: &str, folder: &str, name: &str) -> String {
        let mut url = format!("{}/files/{}", self.base_url, store_code);
        if !folder.is_empty() {
            url.push('/');
            url.push_str(folder);
        }
        url.push('/');
        url.push_str(name);
        url
    }

    fn put_file(&self, store_code: &str, file: ContentFile) -> Result<(), FacadeError> {
        if file.name.trim().is_empty() {
            return Err(FacadeError::InvalidInput(
                "uploaded file name must not be empty".into(),
            ));
        }

        let kind = kind_for_content_type(&file.content_type);
        let mut stores = self.write();
        let content = stores.entry(store_code.to_owned()).or_default();

        // Duplicate names overwrite; the HTTP layer does not deduplicate.
        content.folders.entry(String::new()).or_default().insert(
            file.name,
            StoredFile {
                kind,
                content_type: file.content_type,
                bytes: file.bytes,
            },
        );
        Ok(())
    }
}

#[async_trait]
impl PageReader for MemoryContent {
    async fn list_pages(
        &self,
        store: &MerchantStore,
        language: &Language,
    ) -> Result<Vec<ReadableContentPage>, FacadeError> {
        let stores = self.read();
        let Some(content) = stores.get(&store.code) else {
            return Ok(Vec::new());
        };

        let pages = content
            .pages
            .iter()
            .filter_map(|(code, translations)| {
                translations.get(language.as_str()).map(|record| ReadableContentPage {
                    code: code.clone(),
                    title: record.title.clone(),
                    body: record.body.clone(),
                    metadata: record.metadata.clone(),
                })
            })
            .collect();
        Ok(pages)
    }

    async fn get_page(
        &self,
        code: &str,
        store: &MerchantStore,
        language: &Language,
    ) -> Result<Option<ReadableContentPage>, FacadeError> {
        let stores = self.read();
        let page = stores
            .get(&store.code)
            .and_then(|content| content.pages.get(code))
            .and_then(|translations| translations.get(language.as_str()))
            .map(|record| ReadableContentPage {
                code: code.to_owned(),
                title: record.title.clone(),
                body: record.body.clone(),
                metadata: record.metadata.clone(),
            });
        Ok(page)
    }
}

#[async_trait]
impl PageWriter for MemoryContent {
    async fn save_page(
        &self,
        page: PersistableContentPage,
        store: &MerchantStore,
        _language: &Language,
    ) -> Result<(), FacadeError> {
        if page.code.trim().is_empty() {
            return Err(FacadeError::InvalidInput("page code must not be empty".into()));
        }

        let mut stores = self.write();
        let content = stores.entry(store.code.clone()).or_default();
        let translations = content.pages.entry(page.code).or_default();
        for translation in page.translations {
            translations.insert(
                translation.language,
                PageRecord {
                    title: translation.title,
                    body: translation.body,
                    metadata: translation.metadata,
                },
            );
        }
        Ok(())
    }
}

#[async_trait]
impl BoxReader for MemoryContent {
    async fn list_boxes(
        &self,
        kind: ContentKind,
        code_prefix: &str,
        store: &MerchantStore,
        language: &Language,
    ) -> Result<Vec<ReadableContentBox>, FacadeError> {
        let stores = self.read();
        let Some(content) = stores.get(&store.code) else {
            return Ok(Vec::new());
        };

        let boxes = content
            .boxes
            .iter()
            .filter(|(code, entry)| entry.kind == kind && code.starts_with(code_prefix))
            .filter_map(|(code, entry)| {
                entry.translations.get(language.as_str()).map(|translation| {
                    ReadableContentBox {
                        code: code.clone(),
                        name: translation.name.clone(),
                        html: translation.html.clone(),
                    }
                })
            })
            .collect();
        Ok(boxes)
    }

    async fn get_box(
        &self,
        code: &str,
        store: &MerchantStore,
        language: &Language,
    ) -> Result<ReadableContentBox, FacadeError> {
        let stores = self.read();
        stores
            .get(&store.code)
            .and_then(|content| content.boxes.get(code))
            .and_then(|entry| entry.translations.get(language.as_str()))
            .map(|translation| ReadableContentBox {
                code: code.to_owned(),
                name: translation.name.clone(),
                html: translation.html.clone(),
            })
            .ok_or_else(|| {
                FacadeError::NotFound(format!(
                    "content box '{}' for store '{}'",
                    code, store.code
                ))
            })
    }
}

#[async_trait]
impl FolderReader for MemoryContent {
    async fn get_folder(
        &self,
        path: Option<&str>,
        store: &MerchantStore,
    ) -> Result<ContentFolder, FacadeError> {
        let folder = normalize_folder(path);
        let stores = self.read();

        let files = stores
            .get(&store.code)
            .and_then(|content| content.folders.get(&folder))
            .map(|entries| {
                entries
                    .iter()
                    .map(|(name, stored)| ContentFileEntry {
                        name: name.clone(),
                        url: self.file_url(&store.code, &folder, name),
                        size: stored.bytes.len() as u64,
                        content_type: stored.content_type.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default();

        Ok(ContentFolder {
            path: format!("/{}", folder),
            files,
        })
    }
}

#[async_trait]
impl AssetWriter for MemoryContent {
    async fn add_file(&self, file: ContentFile, store_code: &str) -> Result<(), FacadeError> {
        self.put_file(store_code, file)
    }

    async fn add_files(
        &self,
        files: Vec<ContentFile>,
        store_code: &str,
    ) -> Result<(), FacadeError> {
        for file in files {
            self.put_file(store_code, file)?;
        }
        Ok(())
    }

    async fn delete(
        &self,
        store: &MerchantStore,
        name: &str,
        kind: ContentKind,
    ) -> Result<(), FacadeError> {
        let mut stores = self.write();
        let content = stores.get_mut(&store.code).ok_or_else(|| {
            FacadeError::NotFound(format!("{} '{}' for store '{}'", kind, name, store.code))
        })?;

        let mut removed = false;
        for entries in content.folders.values_mut() {
            if entries.get(name).is_some_and(|stored| stored.kind == kind) {
                entries.remove(name);
                removed = true;
            }
        }

        if removed {
            Ok(())
        } else {
            Err(FacadeError::NotFound(format!(
                "{} '{}' for store '{}'",
                kind, name, store.code
            )))
        }
    }
}

/// Registry of merchant stores, seeded from configuration.
pub struct StoreRegistry {
    stores: RwLock<HashMap<String, MerchantStore>>,
}

impl StoreRegistry {
    pub fn new() -> Self {
        Self {
            stores: RwLock::new(HashMap::new()),
        }
    }

    pub fn from_config(content: &ContentConfig) -> Self {
        let registry = Self::new();
        registry.insert(MerchantStore {
            code: content.default_store.clone(),
            name: content.store_name.clone(),
            default_language: Language::new(content.default_language.clone()),
            languages: content.languages.iter().cloned().map(Language::new).collect(),
        });
        registry
    }

    pub fn insert(&self, store: MerchantStore) {
        let mut stores = self.stores.write().unwrap_or_else(PoisonError::into_inner);
        stores.insert(store.code.clone(), store);
    }
}

impl Default for StoreRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StoreFacade for StoreRegistry {
    async fn get(&self, store_code: &str) -> Result<MerchantStore, FacadeError> {
        let stores = self.stores.read().unwrap_or_else(PoisonError::into_inner);
        stores
            .get(store_code)
            .cloned()
            .ok_or_else(|| FacadeError::NotFound(format!("merchant store '{}'", store_code)))
    }
}

fn normalize_folder(path: Option<&str>) -> String {
    path.map(|p| p.trim_matches('/').to_owned()).unwrap_or_default()
}

fn kind_for_content_type(content_type: &str) -> ContentKind {
    if content_type.starts_with("image/") {
        ContentKind::Image
    } else {
        ContentKind::File
    }
}
