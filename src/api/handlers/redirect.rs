//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::code_generator::is_well_formed_code;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /api/shorturl/{short_url}`
///
/// Codes that cannot have been generated are answered without touching storage.
///
/// # Errors
///
/// - 404 `{ "error": "No short URL found for the given input" }` for unknown codes
/// - 500 if the stored URL cannot be sent as a `Location` header
/// - 503 if storage is unavailable
pub async fn redirect_handler(
    Path(short_url): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    if !is_well_formed_code(&short_url) {
        return Err(AppError::not_found(short_url));
    }

    let mapping = state.shortener.resolve(&short_url).await?;

    let location = HeaderValue::try_from(mapping.original_url.as_str()).map_err(|_| {
        AppError::internal(format!(
            "stored URL for '{}' is not a valid Location header",
            mapping.short_code
        ))
    })?;

    debug!(short_code = %mapping.short_code, "Redirecting");

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}
