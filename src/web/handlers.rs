// src/web/handlers.rs

//! HTTP request handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, header};
use axum::response::Html;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::banner;
use crate::code;
use crate::error::{AppError, Result};
use crate::models::now_iso;
use crate::state::AppState;
use crate::web::pages::INDEX_HTML;

/// Query parameters for `GET /fetch`.
#[derive(Debug, Deserialize)]
pub struct FetchParams {
    pub u: Option<String>,
}

/// Body of a successful `GET /fetch` response.
#[derive(Debug, Serialize)]
pub struct FetchResponse {
    pub code: String,
    pub iframe_url: Option<String>,
    pub preview_url: String,
}

/// `GET /fetch?u=<url>`: mirror a page and answer with its code.
pub async fn fetch(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<FetchParams>,
) -> Result<Json<FetchResponse>> {
    let url = params
        .u
        .as_deref()
        .filter(|u| !u.is_empty())
        .ok_or(AppError::MissingParameter)?;

    let outcome = state.mirror.create_mirror(url).await?;
    let preview_url = format!("http://{}/{}", request_host(&headers, &state), outcome.code);

    Ok(Json(FetchResponse {
        code: outcome.code,
        iframe_url: outcome.frame_url,
        preview_url,
    }))
}

/// `GET /health`: liveness probe.
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok", "timestamp": now_iso() }))
}

/// `GET /:code`: serve a stored page with the banner injected.
pub async fn show(State(state): State<AppState>, Path(code): Path<String>) -> Result<Html<String>> {
    if !code::is_valid(&code) {
        return Err(AppError::InvalidCode);
    }

    let record = state.store.load(&code).await.ok_or(AppError::NotFound)?;
    Ok(Html(banner::inject(&record.content)))
}

/// `GET /`: the landing form.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Authority to build preview links with, from the Host header when the
/// client sent one.
fn request_host(headers: &HeaderMap, state: &AppState) -> String {
    headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
        .unwrap_or_else(|| format!("localhost:{}", state.config.server.port))
}
