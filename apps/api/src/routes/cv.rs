use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue},
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::engine::Preview;
use crate::errors::AppError;
use crate::i18n::Language;
use crate::models::Profile;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CvRequest {
    #[serde(default)]
    pub profile: Profile,
    pub template_id: Option<String>,
    pub language_id: Option<String>,
}

impl CvRequest {
    /// Template and language for this request, falling back to the configured defaults.
    fn selection(&self, state: &AppState) -> Result<(String, Language), AppError> {
        let template = match self.template_id.as_deref().map(str::trim) {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => state.config.default_template.clone(),
        };
        let language = match self.language_id.as_deref() {
            Some(id) if !id.trim().is_empty() => id.parse::<Language>()?,
            _ => state.config.default_language,
        };
        Ok((template, language))
    }
}

/// POST /api/v1/cv/preview
pub async fn handle_preview(
    State(state): State<AppState>,
    Json(req): Json<CvRequest>,
) -> Result<Json<Preview>, AppError> {
    let (template, language) = req.selection(&state)?;
    let preview = state.engine.preview(&req.profile, language, &template)?;
    Ok(Json(preview))
}

/// POST /api/v1/cv/render
/// Responds with the PDF itself as an attachment.
pub async fn handle_render(
    State(state): State<AppState>,
    Json(req): Json<CvRequest>,
) -> Result<(HeaderMap, Vec<u8>), AppError> {
    let (template, language) = req.selection(&state)?;
    let today = chrono::Local::now().date_naive();
    let engine = state.engine.clone();
    let profile = req.profile;

    // Layout and PDF serialization are CPU-bound.
    let rendered = tokio::task::spawn_blocking(move || {
        engine.render_cv(&profile, language, &template, today)
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in render: {e}")))??;

    info!(
        file_name = %rendered.file_name,
        pages = rendered.page_count,
        "serving rendered CV"
    );

    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/pdf"));
    let disposition = HeaderValue::from_str(&content_disposition(&rendered.file_name))
        .map_err(|e| AppError::Internal(anyhow::anyhow!("invalid Content-Disposition: {e}")))?;
    headers.insert(header::CONTENT_DISPOSITION, disposition);
    headers.insert("x-page-count", HeaderValue::from(rendered.page_count));

    Ok((headers, rendered.bytes))
}

/// Attachment header with an ASCII `filename` and, when the name is not plain
/// ASCII, an RFC 5987 `filename*` carrying the UTF-8 original.
fn content_disposition(file_name: &str) -> String {
    let ascii: String = file_name
        .chars()
        .map(|c| if c.is_ascii_graphic() || c == ' ' { c } else { '_' })
        .collect();
    if ascii == file_name {
        return format!("attachment; filename=\"{file_name}\"");
    }

    let encoded: String = file_name
        .bytes()
        .map(|b| match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                (b as char).to_string()
            }
            _ => format!("%{b:02X}"),
        })
        .collect();
    format!("attachment; filename=\"{ascii}\"; filename*=UTF-8''{encoded}")
}
