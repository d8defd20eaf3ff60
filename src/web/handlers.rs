// src/web/handlers.rs
// Route handlers for the form page and the JSON API

use axum::{
    Form, Json,
    extract::{State, rejection::JsonRejection},
    response::Html,
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::info;

use crate::persona::Persona;
use crate::web::error::{ApiError, ApiResult};
use crate::web::page::{EMPTY_QUESTION_WARNING, PageView, render_index};
use crate::web::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AskForm {
    #[serde(default)]
    pub expert: Option<String>,
    #[serde(default)]
    pub question: String,
}

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub expert: String,
    #[serde(default)]
    pub question: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AskResponse {
    pub expert: String,
    pub answer: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExpertInfo {
    pub id: String,
    pub label: String,
}

/// Canonical label for a known persona, otherwise the trimmed input.
/// An empty selection means the default persona.
fn selected_label(raw: Option<&str>) -> String {
    let raw = raw.map(str::trim).unwrap_or("");
    if raw.is_empty() {
        return Persona::default().label().to_string();
    }
    raw.parse::<Persona>()
        .map(|p| p.label().to_string())
        .unwrap_or_else(|_| raw.to_string())
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn index(State(state): State<AppState>) -> ApiResult<Html<String>> {
    Ok(Html(render_index(&state.templates, &PageView::empty())?))
}

pub async fn submit(
    State(state): State<AppState>,
    Form(form): Form<AskForm>,
) -> ApiResult<Html<String>> {
    let selected = selected_label(form.expert.as_deref());

    let view = if form.question.trim().is_empty() {
        PageView {
            selected,
            question: form.question,
            answer: None,
            warning: Some(EMPTY_QUESTION_WARNING.to_string()),
        }
    } else {
        info!(persona = %selected, "Answering question from form");
        let answer = state.invoker.respond(&form.question, &selected).await;
        PageView {
            selected,
            question: form.question,
            answer: Some(answer),
            warning: None,
        }
    };

    Ok(Html(render_index(&state.templates, &view)?))
}

pub async fn list_experts() -> Json<Vec<ExpertInfo>> {
    Json(
        Persona::all()
            .iter()
            .map(|p| ExpertInfo {
                id: p.id().to_string(),
                label: p.label().to_string(),
            })
            .collect(),
    )
}

pub async fn ask(
    State(state): State<AppState>,
    payload: Result<Json<AskRequest>, JsonRejection>,
) -> ApiResult<Json<AskResponse>> {
    let Json(req) = payload?;
    if req.question.trim().is_empty() {
        return Err(ApiError::bad_request("question must not be empty"));
    }

    let expert = selected_label(Some(req.expert.as_str()));
    info!(persona = %expert, "Answering question from API");
    let answer = state.invoker.ask(&req.question, &expert).await?;

    Ok(Json(AskResponse { expert, answer }))
}
