use axum::extract::{Multipart, Query, State};
use axum::http::{HeaderMap, StatusCode};

use crate::api::context::{self, LocaleQuery};
use crate::error::ApiError;
use crate::facade::AssetWriter;
use crate::models::{ContentFile, ContentName};
use crate::state::AppState;

/// POST /api/v1/private/content - upload a single file asset (multipart
/// field `file`); responds 201 with an empty body
pub async fn upload(
    State(state): State<AppState>,
    Query(locale): Query<LocaleQuery>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Result<StatusCode, ApiError> {
    let ctx = context::resolve(state.stores(), &locale, &headers).await?;

    let file = next_content_file(&mut multipart, "file")
        .await?
        .ok_or_else(|| ApiError::bad_request("multipart field 'file' is required"))?;
    tracing::debug!(
        "uploading '{}' ({} bytes) for store '{}'",
        file.name,
        file.bytes.len(),
        ctx.store.code
    );
    state.content().add_file(file, &ctx.store.code).await?;
    Ok(StatusCode::CREATED)
}

/// POST /api/v1/private/files - upload many file assets in one request
/// (repeated multipart field `files`); responds 201
pub async fn upload_many(
    State(state): State<AppState>,
    Query(locale): Query<LocaleQuery>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Result<StatusCode, ApiError> {
    let ctx = context::resolve(state.stores(), &locale, &headers).await?;

    let mut files = Vec::new();
    while let Some(file) = next_content_file(&mut multipart, "files").await? {
        files.push(file);
    }
    if files.is_empty() {
        return Err(ApiError::bad_request("multipart field 'files' is required"));
    }
    tracing::debug!("uploading {} files for store '{}'", files.len(), ctx.store.code);
    state.content().add_files(files, &ctx.store.code).await?;
    Ok(StatusCode::CREATED)
}

/// DELETE /api/v1/private/content - delete the asset named by the `name`
/// and `contentType` query parameters
pub async fn delete(
    State(state): State<AppState>,
    Query(name): Query<ContentName>,
    Query(locale): Query<LocaleQuery>,
    headers: HeaderMap,
) -> Result<StatusCode, ApiError> {
    let ctx = context::resolve(state.stores(), &locale, &headers).await?;

    if name.name.trim().is_empty() {
        return Err(ApiError::validation_error("asset name must not be empty", None));
    }
    state
        .content()
        .delete(&ctx.store, &name.name, name.content_type)
        .await?;
    Ok(StatusCode::OK)
}

/// Pull the next multipart part with the given field name into a
/// `ContentFile`, skipping unrelated parts. The stream is consumed fully
/// for each matched part before returning.
async fn next_content_file(
    multipart: &mut Multipart,
    field_name: &str,
) -> Result<Option<ContentFile>, ApiError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(field_name) {
            continue;
        }

        let name = field
            .file_name()
            .or(field.name())
            .unwrap_or_default()
            .to_owned();
        if name.trim().is_empty() {
            return Err(ApiError::validation_error(
                "uploaded file name must not be empty",
                None,
            ));
        }

        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_owned();
        let bytes = field.bytes().await?;

        return Ok(Some(ContentFile {
            name,
            content_type,
            bytes: bytes.to_vec(),
        }));
    }
    Ok(None)
}
