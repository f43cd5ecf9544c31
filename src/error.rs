//! Request-level error taxonomy.
//!
//! Internally the failure kinds are kept distinct; the wire contract stays
//! the flat `{"error": "<Arabic message>"}` shape the browser client expects.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::services::providers::ProviderError;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body could not be parsed as JSON.
    #[error("حدث خطأ: {0}")]
    BadPayload(#[from] JsonRejection),

    /// The brief was missing or empty; no upstream call is made.
    #[error("الرجاء إدخال نص الموجز")]
    EmptyBrief,

    /// The model call succeeded but carried no text payload.
    #[error("لم يتم الحصول على رد من الذكاء الاصطناعي")]
    EmptyCompletion,

    /// The model call itself failed (network, auth, quota, filtering).
    #[error("حدث خطأ: {0}")]
    Upstream(#[from] ProviderError),

    /// The model returned text that is not valid JSON.
    #[error("حدث خطأ: {0}")]
    MalformedOutput(#[from] serde_json::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        #[derive(Serialize)]
        struct ErrorResponse {
            error: String,
        }

        let status = match self {
            ApiError::EmptyBrief => StatusCode::BAD_REQUEST,
            ApiError::BadPayload(_)
            | ApiError::EmptyCompletion
            | ApiError::Upstream(_)
            | ApiError::MalformedOutput(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
