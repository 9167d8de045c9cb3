//! Handler for the URL shortening endpoint.

use axum::{Json, extract::State};

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Shortens a URL, reusing the existing alias if it was shortened before.
///
/// # Endpoint
///
/// `POST /api/shorturl`
///
/// # Request Body
///
/// ```json
/// { "original_url": "https://www.freecodecamp.org" }
/// ```
///
/// # Response
///
/// ```json
/// { "original_url": "https://www.freecodecamp.org", "short_url": "Aa1Bb2" }
/// ```
///
/// # Errors
///
/// - 400 `{ "error": "invalid url" }` if the URL fails validation
/// - 500 if no unique alias could be allocated
/// - 503 if storage is unavailable
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    let mapping = state.shortener.shorten(&payload.original_url).await?;

    Ok(Json(mapping.into()))
}
