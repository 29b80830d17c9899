use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Riot API error: {status} - {message}")]
    RiotApi { status: u16, message: String },

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Player not found: {game_name}#{tag_line}")]
    PlayerNotFound { game_name: String, tag_line: String },

    #[error("Invalid region: {0}")]
    InvalidRegion(String),

    #[error("Invalid player: {0}")]
    InvalidPlayer(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Asset error: {path}: {source}")]
    Asset {
        path: String,
        source: std::io::Error,
    },

    #[error("Badge rendering error: {message}")]
    Render { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Only local faults reach the HTTP layer as errors, so every one of them is a 500.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!(error = %self, "🌐 ❌ Request failed");

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "An error occurred while generating the badge",
        )
            .into_response()
    }
}
