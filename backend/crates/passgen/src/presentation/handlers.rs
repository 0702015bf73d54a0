//! HTTP Handlers

use crate::application::config::PassgenConfig;
use crate::application::generate_password::GeneratePasswordUseCase;
use crate::error::PassgenResult;
use crate::presentation::dto::{GenerateRequest, GenerateResponse};
use crate::presentation::pages;
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::Html;
use std::sync::Arc;

/// Shared state for password generator handlers
#[derive(Clone)]
pub struct PassgenAppState {
    pub config: Arc<PassgenConfig>,
}

/// GET /passgen/
pub async fn index(State(state): State<PassgenAppState>) -> Html<String> {
    Html(pages::generator_page(&state.config))
}

/// POST /passgen/generate
pub async fn generate(
    State(state): State<PassgenAppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> PassgenResult<Json<GenerateResponse>> {
    let Json(req) = payload?;
    let input = req.into_input(&state.config)?;

    let use_case = GeneratePasswordUseCase::new();
    let output = use_case.execute(input)?;

    Ok(Json(GenerateResponse {
        password: output.password,
    }))
}
