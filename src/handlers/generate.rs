use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Deserialize;
use serde_json::Value;

use crate::error::ApiError;
use crate::prompt::build_prompt;
use crate::services::providers::GenerationParams;
use crate::startup::AppState;

/// Sampling temperature for creative output.
const TEMPERATURE: f32 = 0.8;

/// Output length cap, in tokens.
const MAX_OUTPUT_TOKENS: i32 = 4096;

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    /// A missing field defaults to the empty string so absence and emptiness
    /// share the one validation error.
    #[serde(default)]
    pub brief: String,
}

/// Run one brief -> creative-output round trip.
///
/// The model's JSON output is relayed as-is: its shape is trusted to the
/// prompt contract and never re-validated here.
#[tracing::instrument(skip(state, payload))]
pub async fn generate(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    // An unparseable body gets the same flat error object as every other
    // failure instead of the framework's plain-text rejection.
    let Json(request) = payload?;

    let brief = request.brief.trim();
    if brief.is_empty() {
        return Err(ApiError::EmptyBrief);
    }

    let prompt = build_prompt(brief);
    let params = GenerationParams {
        temperature: Some(TEMPERATURE),
        max_output_tokens: Some(MAX_OUTPUT_TOKENS),
        json_output: true,
        ..Default::default()
    };

    let response = state.text_provider.generate(&prompt, &params).await?;

    let text = match response.text {
        Some(text) if !text.is_empty() => text,
        _ => {
            tracing::warn!("Model returned an empty completion");
            return Err(ApiError::EmptyCompletion);
        }
    };

    let output: Value = serde_json::from_str(&text)?;

    tracing::info!(
        brief_len = brief.len(),
        input_tokens = response.input_tokens,
        output_tokens = response.output_tokens,
        "Creative output generated"
    );

    Ok(Json(output))
}
