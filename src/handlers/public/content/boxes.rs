use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum::Json;

use crate::api::context::{self, LocaleQuery};
use crate::error::ApiError;
use crate::facade::BoxReader;
use crate::models::ReadableContentBox;
use crate::state::AppState;
use crate::types::ContentKind;

/// Codes of the boxes surfaced by the summary endpoints all start with this.
const SUMMARY_PREFIX: &str = "summary_";

/// GET /api/v1/content/summary - summary boxes for the resolved store
pub async fn summary(
    State(state): State<AppState>,
    Query(locale): Query<LocaleQuery>,
    headers: HeaderMap,
) -> Result<Json<Vec<ReadableContentBox>>, ApiError> {
    let ctx = context::resolve(state.stores(), &locale, &headers).await?;
    let boxes = state
        .content()
        .list_boxes(ContentKind::Box, SUMMARY_PREFIX, &ctx.store, &ctx.language)
        .await?;
    Ok(Json(boxes))
}

/// GET /api/v1/content/boxes - alias of /content/summary, same filter
pub async fn list(
    state: State<AppState>,
    locale: Query<LocaleQuery>,
    headers: HeaderMap,
) -> Result<Json<Vec<ReadableContentBox>>, ApiError> {
    summary(state, locale, headers).await
}

/// GET /api/v1/content/boxes/:code - single box by code, 404 when absent
pub async fn get(
    Path(code): Path<String>,
    State(state): State<AppState>,
    Query(locale): Query<LocaleQuery>,
    headers: HeaderMap,
) -> Result<Json<ReadableContentBox>, ApiError> {
    let ctx = context::resolve(state.stores(), &locale, &headers).await?;
    let content_box = state.content().get_box(&code, &ctx.store, &ctx.language).await?;
    Ok(Json(content_box))
}

/// GET /api/v1/:store_code/content/:code - single box, store taken from the
/// path segment; the `store` query parameter is ignored here
pub async fn get_for_store(
    Path((store_code, code)): Path<(String, String)>,
    State(state): State<AppState>,
    Query(locale): Query<LocaleQuery>,
    headers: HeaderMap,
) -> Result<Json<ReadableContentBox>, ApiError> {
    let ctx =
        context::resolve_for_store(state.stores(), &store_code, locale.lang.as_deref(), &headers)
            .await?;
    let content_box = state.content().get_box(&code, &ctx.store, &ctx.language).await?;
    Ok(Json(content_box))
}
