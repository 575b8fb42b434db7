//! HTTP surface: the page, the JSON generate endpoint, and health.

use crate::ai::ContentService;
use crate::course;
use crate::models::GenerateReply;
use crate::page::render_page;
use crate::presenter::{LocalGenerateApi, PageView, Presenter};
use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, State},
    http::StatusCode,
    response::Html,
    routing::{get, post},
    Form, Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

const MAX_BODY_BYTES: usize = 64 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<dyn ContentService>,
}

#[derive(Debug, Default, Deserialize)]
struct TitleForm {
    #[serde(default)]
    title: String,
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/api/generate", post(api_generate))
        .route("/generate", post(page_generate))
        .route("/clear", post(page_clear))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index() -> Html<String> {
    Html(render_page(&PageView::new()))
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn api_generate(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> (StatusCode, Json<GenerateReply>) {
    let request = course::parse_request(&body);
    let reply = course::generate_reply(state.service.as_ref(), &request).await;
    let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(reply.body.unwrap_or_default()))
}

async fn page_generate(
    State(state): State<Arc<AppState>>,
    Form(form): Form<TitleForm>,
) -> Html<String> {
    let view = PageView::new().with_title(form.title);
    let mut presenter = Presenter::new(view, LocalGenerateApi::new(state.service.clone()));
    presenter.generate().await;
    Html(render_page(presenter.view()))
}

async fn page_clear(
    State(state): State<Arc<AppState>>,
    Form(form): Form<TitleForm>,
) -> Html<String> {
    let view = PageView::new().with_title(form.title);
    let mut presenter = Presenter::new(view, LocalGenerateApi::new(state.service.clone()));
    presenter.clear();
    Html(render_page(presenter.view()))
}
