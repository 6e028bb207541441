use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum::Json;

use crate::api::context::{self, LocaleQuery};
use crate::api::paths::decode_content_path;
use crate::error::ApiError;
use crate::facade::FolderReader;
use crate::models::ContentFolder;
use crate::state::AppState;

#[derive(Debug, serde::Deserialize)]
pub struct FolderQuery {
    pub path: Option<String>,
    pub store: Option<String>,
    pub lang: Option<String>,
}

/// GET /api/v1/content/folder - folder listing; `path` is percent-encoded
/// and optional (root listing when absent)
pub async fn get(
    State(state): State<AppState>,
    Query(query): Query<FolderQuery>,
    headers: HeaderMap,
) -> Result<Json<ContentFolder>, ApiError> {
    let locale = LocaleQuery {
        store: query.store,
        lang: query.lang,
    };
    let ctx = context::resolve(state.stores(), &locale, &headers).await?;
    let folder = load_folder(&state, query.path.as_deref(), &ctx).await?;
    Ok(Json(folder))
}

/// GET /api/v1/:store_code/content/images - folder listing, store taken from
/// the path segment; the `store` query parameter is ignored here
pub async fn images(
    Path(store_code): Path<String>,
    State(state): State<AppState>,
    Query(query): Query<FolderQuery>,
    headers: HeaderMap,
) -> Result<Json<ContentFolder>, ApiError> {
    let ctx =
        context::resolve_for_store(state.stores(), &store_code, query.lang.as_deref(), &headers)
            .await?;
    let folder = load_folder(&state, query.path.as_deref(), &ctx).await?;
    Ok(Json(folder))
}

async fn load_folder(
    state: &AppState,
    path: Option<&str>,
    ctx: &context::RequestContext,
) -> Result<ContentFolder, ApiError> {
    let decoded = match path {
        Some(raw) => Some(decode_content_path(raw)?),
        None => None,
    };
    let folder = state.content().get_folder(decoded.as_deref(), &ctx.store).await?;
    Ok(folder)
}
