//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! resolver or the coordinate utilities.

use axum::{
    extract::{Query, State},
    Json,
};
use tracing::info;

use super::dto::{
    CoordinatesQuery, CoordinatesResponse, HealthResponse, ResolveQuery, ResolvedCoordinates,
};
use super::error::AppError;
use super::state::AppState;
use crate::coordinates::parse_coordinates;
use crate::services::{locate_target, Target};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// Query parameters for `/locate`.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct LocateQuery {
    #[serde(default)]
    pub query: Option<String>,
}

/// Reject absent or blank text parameters.
fn required(value: Option<String>, name: &str) -> Result<String, AppError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(AppError::BadRequest(format!("Missing '{}' parameter", name))),
    }
}

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
pub async fn health_check() -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}

// =============================================================================
// Name resolution
// =============================================================================

/// GET /resolve?name={name}
///
/// Forward an object name to Sesame and return its J2000 position.
pub async fn resolve_name(
    State(state): State<AppState>,
    Query(query): Query<ResolveQuery>,
) -> HandlerResult<ResolvedCoordinates> {
    let name = required(query.name, "name")?;
    let resolved = state.resolver.resolve(&name).await?;
    info!(name = %name, ra = resolved.ra, dec = resolved.dec, "resolved object name");
    Ok(Json(resolved))
}

// =============================================================================
// Coordinates
// =============================================================================

/// GET /coordinates?input={text}
///
/// Parse search box text as a coordinate pair without any name lookup.
pub async fn parse_coordinates_text(
    Query(query): Query<CoordinatesQuery>,
) -> HandlerResult<CoordinatesResponse> {
    let input = required(query.input, "input")?;
    let coords = parse_coordinates(&input).ok_or_else(|| {
        AppError::Unprocessable(format!("\"{}\" is not a coordinate pair", input.trim()))
    })?;

    Ok(Json(CoordinatesResponse {
        ra: coords.ra,
        dec: coords.dec,
        ra_hms: coords.ra_hms(),
        dec_dms: coords.dec_dms(),
    }))
}

/// GET /locate?query={text}
///
/// Coordinates when the text parses as such, otherwise a Sesame lookup.
pub async fn locate(
    State(state): State<AppState>,
    Query(query): Query<LocateQuery>,
) -> HandlerResult<Target> {
    let text = required(query.query, "query")?;
    let target = locate_target(&text, state.resolver.as_ref()).await?;
    Ok(Json(target))
}
