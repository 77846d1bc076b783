//! Data Transfer Objects for the HTTP API.

use serde::{Deserialize, Serialize};

pub use crate::resolver::ResolvedCoordinates;

/// Query parameters for `/resolve`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResolveQuery {
    /// Object name, e.g. `M31` or `NGC 1234`
    #[serde(default)]
    pub name: Option<String>,
}

/// Query parameters for `/coordinates`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CoordinatesQuery {
    /// Free text from the search box
    #[serde(default)]
    pub input: Option<String>,
}

/// Parsed coordinates with their sexagesimal rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoordinatesResponse {
    pub ra: f64,
    pub dec: f64,
    pub ra_hms: String,
    pub dec_dms: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
