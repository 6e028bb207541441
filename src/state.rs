//! Application state shared across handlers.

use std::sync::Arc;

use crate::facade::{ContentFacade, StoreFacade};

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`; holds the injected facade implementations
/// the HTTP surface delegates to.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    content: Arc<dyn ContentFacade>,
    stores: Arc<dyn StoreFacade>,
}

impl AppState {
    pub fn new(content: Arc<dyn ContentFacade>, stores: Arc<dyn StoreFacade>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { content, stores }),
        }
    }

    pub fn content(&self) -> &dyn ContentFacade {
        self.inner.content.as_ref()
    }

    pub fn stores(&self) -> &dyn StoreFacade {
        self.inner.stores.as_ref()
    }
}
