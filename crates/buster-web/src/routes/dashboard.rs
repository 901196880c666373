//! Page and static asset handlers.
//!
//! Serves the capture/upload page and the embedded client script that
//! executes view effects against the browser's camera, speech, clipboard
//! and navigation APIs.

use askama::Template;
use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse},
};
use buster_core::ui::{Keymap, ViewState};

use super::view::ResultsTemplate;
use crate::error::ApiError;
use crate::state::AppState;

const APP_JS: &str = include_str!("../../static/app.js");
const APP_CSS: &str = include_str!("../../static/app.css");

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    results_html: String,
    state_json: String,
    keymap_json: String,
    high_contrast: bool,
    font_scale: u8,
}

impl IndexTemplate {
    fn new(state: &ViewState, keymap: &Keymap) -> Result<Self, ApiError> {
        Ok(Self {
            results_html: ResultsTemplate::from_state(state, keymap).render()?,
            state_json: script_json(state)?,
            keymap_json: script_json(keymap)?,
            high_contrast: state.high_contrast,
            font_scale: state.font_scale.percent(),
        })
    }
}

/// Serialize JSON for an inline `<script>` block.
fn script_json<T: serde::Serialize>(value: &T) -> Result<String, ApiError> {
    let json = serde_json::to_string(value)
        .map_err(|e| ApiError::internal(e.to_string()))?;
    Ok(json.replace('<', "\\u003c"))
}

/// GET / - Serve the document capture page.
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let page = IndexTemplate::new(&ViewState::new(), &state.keymap)?;
    Ok(Html(page.render()?))
}

/// GET /static/app.js
pub async fn app_js() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/javascript; charset=utf-8")], APP_JS)
}

/// GET /static/app.css
pub async fn app_css() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], APP_CSS)
}
