//! Capability-scoped facade contracts consumed by the HTTP layer.
//!
//! The HTTP handlers never touch storage directly; they call these traits.
//! Each trait covers one capability so a handler (and its tests) can state
//! exactly what it needs. `ContentFacade` bundles all of them for the
//! application state.

pub mod memory;

use async_trait::async_trait;

use crate::models::{
    ContentFile, ContentFolder, Language, MerchantStore, PersistableContentPage,
    ReadableContentBox, ReadableContentPage,
};
use crate::types::ContentKind;

#[derive(Debug, thiserror::Error)]
pub enum FacadeError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("storage failure: {0}")]
    Storage(String),
}

/// Read access to content pages.
#[async_trait]
pub trait PageReader: Send + Sync {
    async fn list_pages(
        &self,
        store: &MerchantStore,
        language: &Language,
    ) -> Result<Vec<ReadableContentPage>, FacadeError>;

    /// Fetch a single page by code. Absence is an expected outcome and is
    /// reported as `Ok(None)`, not as an error.
    async fn get_page(
        &self,
        code: &str,
        store: &MerchantStore,
        language: &Language,
    ) -> Result<Option<ReadableContentPage>, FacadeError>;
}

/// Write access to content pages.
#[async_trait]
pub trait PageWriter: Send + Sync {
    /// Upsert a page; translations merge per language.
    async fn save_page(
        &self,
        page: PersistableContentPage,
        store: &MerchantStore,
        language: &Language,
    ) -> Result<(), FacadeError>;
}

/// Read access to content boxes.
#[async_trait]
pub trait BoxReader: Send + Sync {
    /// List boxes of `kind` whose code starts with the literal `code_prefix`.
    async fn list_boxes(
        &self,
        kind: ContentKind,
        code_prefix: &str,
        store: &MerchantStore,
        language: &Language,
    ) -> Result<Vec<ReadableContentBox>, FacadeError>;

    async fn get_box(
        &self,
        code: &str,
        store: &MerchantStore,
        language: &Language,
    ) -> Result<ReadableContentBox, FacadeError>;
}

/// Read access to the asset tree.
#[async_trait]
pub trait FolderReader: Send + Sync {
    /// List the files stored directly under `path`; `None` lists the root.
    async fn get_folder(
        &self,
        path: Option<&str>,
        store: &MerchantStore,
    ) -> Result<ContentFolder, FacadeError>;
}

/// Write access to file assets.
#[async_trait]
pub trait AssetWriter: Send + Sync {
    async fn add_file(&self, file: ContentFile, store_code: &str) -> Result<(), FacadeError>;

    async fn add_files(
        &self,
        files: Vec<ContentFile>,
        store_code: &str,
    ) -> Result<(), FacadeError>;

    async fn delete(
        &self,
        store: &MerchantStore,
        name: &str,
        kind: ContentKind,
    ) -> Result<(), FacadeError>;
}

/// The full content facade: everything the HTTP surface delegates to.
pub trait ContentFacade:
    PageReader + PageWriter + BoxReader + FolderReader + AssetWriter
{
}

impl<T> ContentFacade for T where
    T: PageReader + PageWriter + BoxReader + FolderReader + AssetWriter
{
}

/// Lookup of merchant stores by code.
#[async_trait]
pub trait StoreFacade: Send + Sync {
    async fn get(&self, store_code: &str) -> Result<MerchantStore, FacadeError>;
}
