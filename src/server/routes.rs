// src/server/routes.rs
// =============================================================================
// HTTP handlers.
//
//   POST /scrape   {"url": "..."}  -> 200 ExtractionResult | 500 {"error": ...}
//   GET  /health                   -> 200 {"status": "ok"}
//   anything else                  -> static files from the public directory
//
// Every failure of /scrape is a 500 with a single `error` field, including a
// body that is not valid JSON. A caller never gets part of a result.
// =============================================================================

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::error;

use super::AppState;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeRequest {
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthBody {
    pub status: String,
}

pub async fn scrape(
    State(state): State<AppState>,
    payload: Result<Json<ScrapeRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            error!(error = %rejection.body_text(), "rejected /scrape body");
            return error_response(rejection.body_text());
        }
    };

    match state.scraper.scrape(&request.url).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => {
            error!(url = %request.url, error = %e, "scrape failed");
            error_response(e.to_string())
        }
    }
}

pub async fn health() -> Json<HealthBody> {
    Json(HealthBody {
        status: "ok".to_string(),
    })
}

fn error_response(message: String) -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorBody { error: message })).into_response()
}
