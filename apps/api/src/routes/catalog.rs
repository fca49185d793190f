use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::i18n::Language;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct LanguageQuery {
    pub language: Option<String>,
}

/// A selectable option with its display name.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct CatalogEntry {
    pub id: String,
    pub name: String,
}

/// GET /api/v1/templates?language=xx
/// Template names are localized; without `language` the configured default is used.
pub async fn handle_list_templates(
    State(state): State<AppState>,
    Query(params): Query<LanguageQuery>,
) -> Result<Json<Vec<CatalogEntry>>, AppError> {
    let language = match params.language.as_deref() {
        Some(id) if !id.trim().is_empty() => id.parse::<Language>()?,
        _ => state.config.default_language,
    };

    let labels = state.engine.labels();
    let entries = state
        .engine
        .templates()
        .iter()
        .map(|template| {
            let key = template.label_key();
            CatalogEntry {
                id: template.id().to_string(),
                name: labels.resolve(&key, language).to_string(),
            }
        })
        .collect();
    Ok(Json(entries))
}

/// GET /api/v1/languages
pub async fn handle_list_languages() -> Json<Vec<CatalogEntry>> {
    Json(
        Language::ALL
            .into_iter()
            .map(|lang| CatalogEntry {
                id: lang.id().to_string(),
                name: lang.native_name().to_string(),
            })
            .collect(),
    )
}
