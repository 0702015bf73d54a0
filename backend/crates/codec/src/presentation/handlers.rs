//! HTTP Handlers

use crate::application::convert::{ConvertInput, ConvertUseCase};
use crate::domain::action::ConversionAction;
use crate::error::CodecResult;
use crate::presentation::dto::{ConvertRequest, ConvertResponse};
use crate::presentation::pages;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::response::Html;

/// GET /base/
pub async fn index() -> Html<String> {
    Html(pages::codec_page())
}

/// POST /base/convert
pub async fn convert(
    payload: Result<Json<ConvertRequest>, JsonRejection>,
) -> CodecResult<Json<ConvertResponse>> {
    let Json(req) = payload?;

    let input = ConvertInput {
        action: ConversionAction::parse(req.action.as_deref())?,
        text: req.text,
    };
    let output = ConvertUseCase::new().execute(input)?;

    Ok(Json(ConvertResponse {
        result: output.result,
    }))
}
