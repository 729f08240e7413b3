//! HTTP request handlers for the Web UI.

use crate::pages::PageRegistry;
use crate::templates;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use dashboard_core::Layout;
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;

pub type AppState = Arc<PageRegistry>;

#[derive(Debug, Serialize)]
pub struct PageSummary {
    pub slug: String,
    pub title: String,
}

pub async fn index(State(registry): State<AppState>) -> Html<String> {
    Html(templates::index_document(registry.pages()))
}

pub async fn list_pages(State(registry): State<AppState>) -> Json<Vec<PageSummary>> {
    Json(
        registry
            .pages()
            .iter()
            .map(|page| PageSummary {
                slug: page.slug.clone(),
                title: page.layout.title.clone(),
            })
            .collect(),
    )
}

pub async fn get_page(
    State(registry): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Html<String>, ApiError> {
    let page = registry.get(&slug).ok_or(ApiError::PageNotFound(slug))?;
    Ok(Html(templates::page_document(
        &page.layout.title,
        &page.layout.to_html(),
    )))
}

pub async fn get_layout(
    State(registry): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Layout>, ApiError> {
    let page = registry.get(&slug).ok_or(ApiError::PageNotFound(slug))?;
    Ok(Json(page.layout.clone()))
}

pub async fn health(State(registry): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "pages": registry.len(),
    }))
}

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Page not found: {0}")]
    PageNotFound(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::PageNotFound(_) => StatusCode::NOT_FOUND,
        };

        tracing::debug!(error = %self, "Request failed");
        let body = Json(json!({
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}
