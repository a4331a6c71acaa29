// src/web/router.rs

//! Route table.

use axum::Router;
use axum::routing::get;

use crate::state::AppState;
use crate::web::handlers::{fetch, health, index, show};

/// Build the application router. Static routes win over the code route.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/fetch", get(fetch))
        .route("/:code", get(show))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use serde_json::Value;
    use tempfile::TempDir;
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::render::testing::ScriptedRenderer;
    use crate::services::MirrorService;
    use crate::storage::{LocalStore, PageStore};

    fn test_state(renderer: &ScriptedRenderer, tmp: &TempDir) -> (AppState, Arc<LocalStore>) {
        let store = Arc::new(LocalStore::new(tmp.path()));
        let mirror = MirrorService::new(
            Arc::new(renderer.clone()),
            store.clone(),
            Duration::from_secs(30),
        );
        let state = AppState {
            mirror: Arc::new(mirror),
            store: store.clone(),
            config: Arc::new(Config::default()),
        };
        (state, store)
    }

    async fn get_response(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, body.to_vec())
    }

    fn json(body: &[u8]) -> Value {
        serde_json::from_slice(body).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let renderer = ScriptedRenderer::new();
        let tmp = TempDir::new().unwrap();
        let (state, _) = test_state(&renderer, &tmp);

        let (status, body) = get_response(build_router(state), "/health").await;
        assert_eq!(status, StatusCode::OK);

        let value = json(&body);
        assert_eq!(value["status"], "ok");
        assert!(value["timestamp"].as_str().unwrap().ends_with('Z'));
    }

    #[tokio::test]
    async fn test_index_serves_form() {
        let renderer = ScriptedRenderer::new();
        let tmp = TempDir::new().unwrap();
        let (state, _) = test_state(&renderer, &tmp);

        let (status, body) = get_response(build_router(state), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(String::from_utf8(body).unwrap().contains("fetchForm"));
    }

    #[tokio::test]
    async fn test_fetch_without_parameter() {
        let renderer = ScriptedRenderer::new();
        let tmp = TempDir::new().unwrap();
        let (state, _) = test_state(&renderer, &tmp);
        let app = build_router(state);

        let (status, body) = get_response(app.clone(), "/fetch").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json(&body)["error"], "missing url parameter");

        // an empty value counts as missing
        let (status, body) = get_response(app, "/fetch?u=").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json(&body)["error"], "missing url parameter");
    }

    #[tokio::test]
    async fn test_fetch_unsafe_url() {
        let renderer = ScriptedRenderer::new();
        let tmp = TempDir::new().unwrap();
        let (state, _) = test_state(&renderer, &tmp);

        let (status, body) =
            get_response(build_router(state), "/fetch?u=http://127.0.0.1/secret").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json(&body)["error"], "unsafe url");
        assert_eq!(renderer.sessions_opened(), 0);
    }

    #[tokio::test]
    async fn test_fetch_stores_rewritten_page() {
        let renderer = ScriptedRenderer::new();
        renderer.plain(
            "https://example.com/p/q",
            r#"<html><body><img src="a/b.png"></body></html>"#,
        );
        let tmp = TempDir::new().unwrap();
        let (state, store) = test_state(&renderer, &tmp);

        let (status, body) =
            get_response(build_router(state), "/fetch?u=https://example.com/p/q").await;
        assert_eq!(status, StatusCode::OK);

        let value = json(&body);
        let code = value["code"].as_str().unwrap();
        assert!(crate::code::is_valid(code));
        assert!(value["iframe_url"].is_null());
        assert_eq!(
            value["preview_url"],
            format!("http://localhost:3000/{code}")
        );

        let record = store.load(code).await.unwrap();
        assert!(record.content.contains("https://example.com/p/a/b.png"));
        assert!(!record.content.contains(r#"src="a/b.png""#));
    }

    #[tokio::test]
    async fn test_fetch_preview_uses_host_header() {
        let renderer = ScriptedRenderer::new();
        renderer.plain("https://example.com/", "<html><body>hi</body></html>");
        let tmp = TempDir::new().unwrap();
        let (state, _) = test_state(&renderer, &tmp);

        let response = build_router(state)
            .oneshot(
                Request::builder()
                    .uri("/fetch?u=https://example.com/")
                    .header(header::HOST, "mirror.example:8080")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = json(&body);
        let code = value["code"].as_str().unwrap();
        assert_eq!(
            value["preview_url"],
            format!("http://mirror.example:8080/{code}")
        );
    }

    #[tokio::test]
    async fn test_fetch_failure_returns_details() {
        let renderer = ScriptedRenderer::new();
        // nothing scripted, so navigation fails
        let tmp = TempDir::new().unwrap();
        let (state, _) = test_state(&renderer, &tmp);

        let (status, body) =
            get_response(build_router(state), "/fetch?u=https://example.com/gone").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

        let value = json(&body);
        assert_eq!(value["error"], "page fetch failed");
        assert!(value["details"].as_str().unwrap().contains("example.com/gone"));
    }

    #[tokio::test]
    async fn test_show_injects_banner() {
        let renderer = ScriptedRenderer::new();
        renderer.plain(
            "https://example.com/",
            "<html><body><p>mirrored body</p></body></html>",
        );
        let tmp = TempDir::new().unwrap();
        let (state, _) = test_state(&renderer, &tmp);
        let app = build_router(state);

        let (_, body) = get_response(app.clone(), "/fetch?u=https://example.com/").await;
        let code = json(&body)["code"].as_str().unwrap().to_string();

        let (status, body) = get_response(app, &format!("/{code}")).await;
        assert_eq!(status, StatusCode::OK);

        let html = String::from_utf8(body).unwrap();
        let banner_at = html.find("pagemirror-banner").unwrap();
        let content_at = html.find("mirrored body").unwrap();
        assert!(banner_at < content_at);
    }

    #[tokio::test]
    async fn test_show_rejects_malformed_code() {
        let renderer = ScriptedRenderer::new();
        let tmp = TempDir::new().unwrap();
        let (state, _) = test_state(&renderer, &tmp);

        let (status, body) = get_response(build_router(state), "/short").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            String::from_utf8(body).unwrap(),
            "<h1>Invalid page code</h1>"
        );
    }

    #[tokio::test]
    async fn test_show_unknown_code_is_not_found() {
        let renderer = ScriptedRenderer::new();
        let tmp = TempDir::new().unwrap();
        let (state, _) = test_state(&renderer, &tmp);

        let (status, body) = get_response(build_router(state), "/aaaaaaaaaaaa").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(String::from_utf8(body).unwrap(), "<h1>Page not found</h1>");
    }
}
