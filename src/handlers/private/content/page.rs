use std::collections::HashMap;

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;

use crate::api::context::{self, LocaleQuery};
use crate::error::ApiError;
use crate::facade::PageWriter;
use crate::models::PersistableContentPage;
use crate::state::AppState;

/// POST /api/v1/private/content/page[/:page_code] - upsert a content page.
/// A code in the path wins over the one in the body.
pub async fn save(
    page_code: Option<Path<String>>,
    State(state): State<AppState>,
    Query(locale): Query<LocaleQuery>,
    headers: HeaderMap,
    Json(mut page): Json<PersistableContentPage>,
) -> Result<StatusCode, ApiError> {
    let ctx = context::resolve(state.stores(), &locale, &headers).await?;

    if let Some(Path(code)) = page_code {
        page.code = code;
    }
    validate_page(&page)?;

    state
        .content()
        .save_page(page, &ctx.store, &ctx.language)
        .await?;
    Ok(StatusCode::OK)
}

fn validate_page(page: &PersistableContentPage) -> Result<(), ApiError> {
    let mut field_errors = HashMap::new();
    if page.code.trim().is_empty() {
        field_errors.insert("code".to_string(), "must not be empty".to_string());
    }
    for (i, translation) in page.translations.iter().enumerate() {
        if translation.language.trim().is_empty() {
            field_errors.insert(
                format!("translations[{}].language", i),
                "must not be empty".to_string(),
            );
        }
    }

    if field_errors.is_empty() {
        Ok(())
    } else {
        Err(ApiError::validation_error(
            "invalid content page",
            Some(field_errors),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PageTranslation;

    #[test]
    fn blank_code_is_rejected() {
        let page = PersistableContentPage {
            code: "  ".into(),
            translations: vec![],
        };
        let err = validate_page(&page).unwrap_err();
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn blank_translation_language_is_rejected() {
        let page = PersistableContentPage {
            code: "about".into(),
            translations: vec![PageTranslation {
                language: "".into(),
                title: "About".into(),
                body: "<p>hi</p>".into(),
                metadata: HashMap::new(),
            }],
        };
        assert!(validate_page(&page).is_err());
    }

    #[test]
    fn valid_page_passes() {
        let page = PersistableContentPage {
            code: "about".into(),
            translations: vec![PageTranslation {
                language: "en".into(),
                title: "About".into(),
                body: "<p>hi</p>".into(),
                metadata: HashMap::new(),
            }],
        };
        assert!(validate_page(&page).is_ok());
    }
}
