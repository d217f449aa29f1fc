use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::utils::error_codes;

#[derive(Debug)]
pub enum AppError {
    Unauthorized,
}

#[derive(Serialize)]
struct ErrorResponse {
    code: i32,
    error_message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, error_message) = match self {
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                error_codes::UNAUTHORIZED,
                "unauthorized",
            ),
        };

        let body = Json(ErrorResponse {
            code,
            error_message: error_message.to_string(),
        });

        (status, body).into_response()
    }
}
