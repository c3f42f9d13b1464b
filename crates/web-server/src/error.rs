use analytics::SelectionError;
use api_client::error::ApiError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use core_types::CoreError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Roster lookup failed: {0}")]
    Roster(#[from] ApiError),
    #[error("{0}")]
    Selection(#[from] SelectionError),
    #[error("{0}")]
    Window(#[from] CoreError),
}

/// Converts our custom `AppError` into an HTTP response.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Roster(api_err) => {
                tracing::error!(error = ?api_err, "Roster lookup failed.");
                StatusCode::BAD_GATEWAY
            }
            AppError::Selection(_) => StatusCode::NOT_FOUND,
            AppError::Window(_) => StatusCode::BAD_REQUEST,
        };

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
