//! Per-request store and language resolution.
//!
//! Handlers call [`resolve`] (or [`resolve_for_store`] on routes that carry
//! the store code as a path segment) at the top of their body, so the two
//! request-scoped values are threaded explicitly rather than bound by
//! framework magic.

use axum::http::header::ACCEPT_LANGUAGE;
use axum::http::HeaderMap;
use serde::Deserialize;

use crate::error::ApiError;
use crate::facade::StoreFacade;
use crate::models::{Language, MerchantStore};

/// Store assumed when the request names none.
pub const DEFAULT_STORE_CODE: &str = "DEFAULT";

/// The `store`/`lang` query parameters every content endpoint accepts.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocaleQuery {
    pub store: Option<String>,
    pub lang: Option<String>,
}

/// The two request-scoped values every facade call is scoped by.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub store: MerchantStore,
    pub language: Language,
}

/// Resolve the merchant store and effective language for one request.
/// An unknown store fails with 404, an unsupported `lang` with 400.
pub async fn resolve(
    stores: &dyn StoreFacade,
    locale: &LocaleQuery,
    headers: &HeaderMap,
) -> Result<RequestContext, ApiError> {
    let code = locale.store.as_deref().unwrap_or(DEFAULT_STORE_CODE);
    resolve_for_store(stores, code, locale.lang.as_deref(), headers).await
}

/// Resolve against an explicit store code (path-segment routes). The `store`
/// query parameter is ignored by callers of this variant.
pub async fn resolve_for_store(
    stores: &dyn StoreFacade,
    store_code: &str,
    lang: Option<&str>,
    headers: &HeaderMap,
) -> Result<RequestContext, ApiError> {
    let store = stores.get(store_code).await?;
    let language = resolve_language(&store, lang, headers)?;
    Ok(RequestContext { store, language })
}

/// `lang` wins when present but must be supported by the store; otherwise
/// the first supported `Accept-Language` tag; otherwise the store default.
fn resolve_language(
    store: &MerchantStore,
    lang: Option<&str>,
    headers: &HeaderMap,
) -> Result<Language, ApiError> {
    if let Some(tag) = lang {
        let requested = Language::new(tag);
        if store.supports(&requested) {
            return Ok(requested);
        }
        tracing::warn!("language '{}' not supported by store '{}'", tag, store.code);
        return Err(ApiError::validation_error(
            format!("language '{}' is not supported by store '{}'", tag, store.code),
            None,
        ));
    }

    if let Some(tag) = accept_language(headers) {
        let requested = Language::new(tag);
        if store.supports(&requested) {
            return Ok(requested);
        }
    }

    Ok(store.default_language.clone())
}

/// First primary subtag from `Accept-Language`, lowercased.
fn accept_language(headers: &HeaderMap) -> Option<String> {
    let raw = headers.get(ACCEPT_LANGUAGE)?.to_str().ok()?;
    let first = raw.split(',').next()?.split(';').next()?.trim();
    if first.is_empty() || first == "*" {
        return None;
    }
    Some(first.split('-').next().unwrap_or(first).to_ascii_lowercase())
}
