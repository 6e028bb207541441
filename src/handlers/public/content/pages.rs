use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum::Json;

use crate::api::context::{self, LocaleQuery};
use crate::error::ApiError;
use crate::facade::PageReader;
use crate::models::ReadableContentPage;
use crate::state::AppState;

/// GET /api/v1/content/pages - list pages for the resolved store and language
pub async fn list(
    State(state): State<AppState>,
    Query(locale): Query<LocaleQuery>,
    headers: HeaderMap,
) -> Result<Json<Vec<ReadableContentPage>>, ApiError> {
    let ctx = context::resolve(state.stores(), &locale, &headers).await?;
    let pages = state.content().list_pages(&ctx.store, &ctx.language).await?;
    Ok(Json(pages))
}

/// GET /api/v1/content/pages/:code - single page by code, 404 when absent
pub async fn get(
    Path(code): Path<String>,
    State(state): State<AppState>,
    Query(locale): Query<LocaleQuery>,
    headers: HeaderMap,
) -> Result<Json<ReadableContentPage>, ApiError> {
    let ctx = context::resolve(state.stores(), &locale, &headers).await?;
    let page = state
        .content()
        .get_page(&code, &ctx.store, &ctx.language)
        .await?
        .ok_or_else(|| {
            tracing::debug!("content page '{}' not found for store '{}'", code, ctx.store.code);
            ApiError::not_found(format!(
                "no content page '{}' for store '{}'",
                code, ctx.store.code
            ))
        })?;
    Ok(Json(page))
}
