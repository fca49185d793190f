pub mod catalog;
pub mod cv;
pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Catalog
        .route("/api/v1/templates", get(catalog::handle_list_templates))
        .route("/api/v1/languages", get(catalog::handle_list_languages))
        // Documents
        .route("/api/v1/cv/preview", post(cv::handle_preview))
        .route("/api/v1/cv/render", post(cv::handle_render))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::engine::Engine;
    use crate::layout::font_metrics::default_page_config;

    fn app() -> Router {
        let config = Config::from_lookup(|_| None).unwrap();
        let engine = Engine::builtin(default_page_config(config.page_size)).unwrap();
        build_router(AppState {
            config,
            engine: Arc::new(engine),
        })
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn sample_profile() -> Value {
        json!({
            "personalInfo": { "name": "Jane Doe", "phone": "555", "email": "a@b.com" },
            "professionalSummary": "Backend engineer.",
            "skills": [
                { "name": "Go", "level": "Expert" },
                { "name": "", "level": "A1" },
                { "name": "Rust", "level": "Advanced" }
            ]
        })
    }

    #[tokio::test]
    async fn test_health() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "cvforge-api");
    }

    #[tokio::test]
    async fn test_languages_listing() {
        let response = app()
            .oneshot(Request::builder().uri("/api/v1/languages").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let body = json_body(response).await;
        let ids: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["fr", "en", "nl"]);
    }

    #[tokio::test]
    async fn test_templates_listing_is_localized() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/templates?language=en")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        let entries = body.as_array().unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0]["id"], "classic");
        assert_eq!(entries[0]["name"], "Classic");
    }

    #[tokio::test]
    async fn test_templates_listing_rejects_unknown_language() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/templates?language=de")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_preview_round_trip() {
        let response = app()
            .oneshot(post_json(
                "/api/v1/cv/preview",
                json!({ "profile": sample_profile(), "languageId": "en", "templateId": "modern" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;

        let blocks = body["blocks"].as_array().unwrap();
        assert_eq!(blocks[0], json!({ "kind": "title", "value": "Jane Doe" }));
        assert_eq!(blocks[1], json!({ "kind": "contact_line", "value": ["a@b.com", "555"] }));
        let markdown = body["markdown"].as_str().unwrap();
        assert!(markdown.contains("Go (Expert) • Rust (Advanced)"));
    }

    #[tokio::test]
    async fn test_preview_uses_default_language() {
        let response = app()
            .oneshot(post_json(
                "/api/v1/cv/preview",
                json!({ "profile": { "interests": "Chess" } }),
            ))
            .await
            .unwrap();
        let body = json_body(response).await;
        let blocks = body["blocks"].as_array().unwrap();
        assert_eq!(blocks[0], json!({ "kind": "spacer", "value": 12.0 }));
        assert_eq!(blocks[1]["kind"], "section_heading");
        assert_eq!(blocks[2], json!({ "kind": "body_text", "value": "Chess" }));
    }

    #[tokio::test]
    async fn test_render_returns_pdf_attachment() {
        let response = app()
            .oneshot(post_json("/api/v1/cv/render", json!({ "profile": sample_profile() })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/pdf");
        let disposition = response.headers()[header::CONTENT_DISPOSITION].to_str().unwrap();
        assert!(disposition.starts_with("attachment; filename=\"CV_Jane_Doe_"));
        assert!(disposition.ends_with(".pdf\""));
        assert_eq!(response.headers()["x-page-count"], "1");

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
    }

    #[tokio::test]
    async fn test_render_rejects_unknown_template() {
        let response = app()
            .oneshot(post_json(
                "/api/v1/cv/render",
                json!({ "profile": {}, "templateId": "baroque" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["error"]["code"], "UNKNOWN_TEMPLATE");
    }
}
