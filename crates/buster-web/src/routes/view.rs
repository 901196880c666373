//! View-state transitions and the server-rendered results region.
//!
//! The page owns its [`ViewState`] and posts it back with every event; the
//! server applies the transition and returns the new state, the effects to
//! execute, and freshly rendered HTML.

use askama::Template;
use axum::{extract::rejection::JsonRejection, extract::State, Json};
use buster_core::ui::keymap::Binding;
use buster_core::ui::layout::{self, Panel};
use buster_core::ui::{Effect, Keymap, ViewEvent, ViewState};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::state::AppState;

// ============================================================
// TEMPLATES
// ============================================================

#[derive(Template)]
#[template(path = "partials/results.html")]
pub struct ResultsTemplate {
    pub error: Option<String>,
    pub panels: Vec<Panel>,
    pub speaking: bool,
    pub calendar_available: bool,
    pub help_open: bool,
    pub bindings: Vec<Binding>,
}

impl ResultsTemplate {
    pub fn from_state(state: &ViewState, keymap: &Keymap) -> Self {
        Self {
            error: state.error.clone(),
            panels: state
                .result
                .as_ref()
                .map(|r| layout::panels(r).to_vec())
                .unwrap_or_default(),
            speaking: state.speaking,
            calendar_available: state.calendar_available(),
            help_open: state.help_open,
            bindings: keymap.bindings().to_vec(),
        }
    }
}

// ============================================================
// REQUEST TYPES
// ============================================================

#[derive(Deserialize)]
pub struct ViewRequest {
    #[serde(default)]
    pub state: ViewState,
    pub event: ViewEvent,
}

#[derive(Serialize)]
pub struct ViewResponse {
    pub state: ViewState,
    pub effects: Vec<Effect>,
    pub html: String,
}

// ============================================================
// HANDLERS
// ============================================================

/// POST /api/view - Apply one view event.
pub async fn apply_event(
    State(app): State<AppState>,
    req: Result<Json<ViewRequest>, JsonRejection>,
) -> Result<Json<ViewResponse>, ApiError> {
    let Json(req) = req.map_err(|e| ApiError::new(e.status(), e.body_text()))?;
    let mut state = req.state;
    let today = chrono::Local::now().date_naive();
    let effects = state.apply_with(req.event, today, &app.keymap);
    let html = ResultsTemplate::from_state(&state, &app.keymap).render()?;

    Ok(Json(ViewResponse {
        state,
        effects,
        html,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_router;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use buster_core::AnalysisResult;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn bill(deadline: &str) -> AnalysisResult {
        AnalysisResult {
            summary: "This is a medical bill for services on March 15th".to_string(),
            action_required: "Pay $50 by check or online".to_string(),
            deadline: deadline.to_string(),
            reassurance: "You've got this!".to_string(),
        }
    }

    fn render(state: &ViewState) -> String {
        ResultsTemplate::from_state(state, &Keymap::default())
            .render()
            .unwrap()
    }

    async fn post(body: Value) -> (StatusCode, Value) {
        let response = create_router(AppState::new(None))
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/view")
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn position(html: &str, needle: &str) -> usize {
        html.find(needle)
            .unwrap_or_else(|| panic!("{needle:?} not rendered"))
    }

    #[test]
    fn test_medical_bill_renders_in_priority_order() {
        let state = ViewState {
            result: Some(bill("Tuesday, January 15th, 2025")),
            ..Default::default()
        };
        let html = render(&state);

        let reassurance = position(&html, "You&#x27;ve got this!");
        let summary = position(&html, "This is a medical bill for services on March 15th");
        let deadline = position(&html, "Tuesday, January 15th, 2025");
        let action = position(&html, "Pay $50 by check or online");
        assert!(reassurance < summary);
        assert!(summary < deadline);
        assert!(deadline < action);

        assert!(html.contains("panel-deadline-due"));
        assert!(html.contains("data-event=\"addToCalendar\""));
    }

    #[test]
    fn test_no_deadline_renders_neutral_without_calendar() {
        let state = ViewState {
            result: Some(bill("None")),
            ..Default::default()
        };
        let html = render(&state);
        assert!(html.contains("panel-deadline-none"));
        assert!(!html.contains("panel-deadline-due"));
        assert!(!html.contains("addToCalendar"));
    }

    #[test]
    fn test_error_banner() {
        let state = ViewState {
            error: Some("Failed to access camera. Please check permissions.".to_string()),
            ..Default::default()
        };
        let html = render(&state);
        assert!(html.contains("role=\"alert\""));
        assert!(html.contains("We hit a snag:"));
        assert!(html.contains("Failed to access camera. Please check permissions."));
    }

    #[test]
    fn test_model_text_is_escaped() {
        let mut result = bill("None");
        result.summary = "<script>alert(1)</script>".to_string();
        let html = render(&ViewState {
            result: Some(result),
            ..Default::default()
        });
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_help_overlay_lists_shortcuts() {
        let html = render(&ViewState {
            help_open: true,
            ..Default::default()
        });
        for label in ["Alt+U", "Alt+C", "Alt+R", "Alt+H"] {
            assert!(html.contains(label), "{label}");
        }
    }

    #[tokio::test]
    async fn test_endpoint_applies_transition() {
        let state = ViewState {
            result: Some(bill("None")),
            ..Default::default()
        };
        let (status, json) = post(json!({
            "state": state,
            "event": { "type": "toggleReadAloud" }
        }))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["state"]["speaking"], true);
        assert_eq!(json["effects"][0]["type"], "speak");

        let (_, json) = post(json!({
            "state": json["state"],
            "event": { "type": "toggleReadAloud" }
        }))
        .await;
        assert_eq!(json["state"]["speaking"], false);
        assert_eq!(json["effects"], json!([{ "type": "cancelSpeech" }]));
    }

    #[tokio::test]
    async fn test_endpoint_clamps_font_scale() {
        let (_, json) = post(json!({
            "state": { "fontScale": 140 },
            "event": { "type": "increaseFont" }
        }))
        .await;
        assert_eq!(json["state"]["fontScale"], 140);
    }

    #[tokio::test]
    async fn test_endpoint_rejects_unknown_event_with_json_error() {
        let (status, json) = post(json!({ "event": { "type": "launchRocket" } })).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(json["error"].as_str().unwrap().contains("launchRocket"));

        let response = create_router(AppState::new(None))
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/view")
                    .header("content-type", "application/json")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        assert!(json["error"].is_string());
    }

    #[tokio::test]
    async fn test_endpoint_stop_camera_releases_stream() {
        let (_, json) = post(json!({
            "state": { "camera": "live" },
            "event": { "type": "stopCamera" }
        }))
        .await;
        assert_eq!(json["state"]["camera"], "off");
        assert_eq!(json["effects"], json!([{ "type": "releaseCamera" }]));
    }
}
