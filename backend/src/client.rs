//! Client for the cross-match API (cone search, metadata, light curves).
//!
//! Parameters are checked the same way the service validates them, so a
//! bad request fails locally with [`ClientError::InvalidParameter`] instead
//! of a round trip.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::{Lightcurve, Mastercat};

/// Result type for API client calls
pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Could not decode API response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid {field}: {reason}")]
    InvalidParameter { field: &'static str, reason: String },
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ClientError {
    ClientError::InvalidParameter {
        field,
        reason: reason.into(),
    }
}

fn validate_position(ra: f64, dec: f64, radius: f64) -> ClientResult<()> {
    if !ra.is_finite() || !(0.0..=360.0).contains(&ra) {
        return Err(invalid("RA", format!("{} is outside [0, 360]", ra)));
    }
    if !dec.is_finite() || !(-90.0..=90.0).contains(&dec) {
        return Err(invalid("Dec", format!("{} is outside [-90, 90]", dec)));
    }
    if !radius.is_finite() || radius <= 0.0 {
        return Err(invalid("radius", format!("{} must be greater than 0", radius)));
    }
    Ok(())
}

fn validate_nneighbor(nneighbor: Option<u32>) -> ClientResult<()> {
    match nneighbor {
        Some(0) => Err(invalid("nneighbor", "must be a positive integer")),
        _ => Ok(()),
    }
}

/// Cone search request. `radius` is in degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConeSearchParams {
    pub ra: f64,
    pub dec: f64,
    pub radius: f64,
    pub catalog: Option<String>,
    pub nneighbor: Option<u32>,
    pub get_metadata: Option<bool>,
}

impl ConeSearchParams {
    pub fn new(ra: f64, dec: f64, radius: f64) -> Self {
        Self {
            ra,
            dec,
            radius,
            catalog: None,
            nneighbor: None,
            get_metadata: None,
        }
    }

    fn validate(&self) -> ClientResult<()> {
        validate_position(self.ra, self.dec, self.radius)?;
        validate_nneighbor(self.nneighbor)
    }

    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("ra", self.ra.to_string()),
            ("dec", self.dec.to_string()),
            ("radius", self.radius.to_string()),
        ];
        if let Some(catalog) = self.catalog.as_deref().filter(|c| !c.is_empty()) {
            pairs.push(("catalog", catalog.to_string()));
        }
        if let Some(n) = self.nneighbor {
            pairs.push(("nneighbor", n.to_string()));
        }
        if let Some(flag) = self.get_metadata {
            pairs.push(("getMetadata", flag.to_string()));
        }
        pairs
    }
}

/// Light-curve request. `radius` is in degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightcurveParams {
    pub ra: f64,
    pub dec: f64,
    pub radius: f64,
    pub nneighbor: Option<u32>,
}

impl LightcurveParams {
    fn validate(&self) -> ClientResult<()> {
        validate_position(self.ra, self.dec, self.radius)?;
        validate_nneighbor(self.nneighbor)
    }

    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("ra", self.ra.to_string()),
            ("dec", self.dec.to_string()),
            ("radius", self.radius.to_string()),
        ];
        if let Some(n) = self.nneighbor {
            pairs.push(("nneighbor", n.to_string()));
        }
        pairs
    }
}

/// HTTP client bound to one cross-match API base URL.
#[derive(Debug, Clone)]
pub struct XwaveClient {
    http: reqwest::Client,
    base_url: String,
}

impl XwaveClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> ClientResult<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(http, base_url))
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `path` and decode the JSON body; a `null` body becomes `None`.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&'static str, String)],
    ) -> ClientResult<Option<T>> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, ?query, "cross-match API request");

        let response = self.http.get(&url).query(query).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str::<Option<T>>(&body)?)
    }

    /// Sources within `radius` degrees of the position.
    pub async fn cone_search(&self, params: &ConeSearchParams) -> ClientResult<Vec<Mastercat>> {
        params.validate()?;
        let rows = self
            .get_json::<Vec<Mastercat>>("/conesearch", &params.query_pairs())
            .await?;
        Ok(rows.unwrap_or_default())
    }

    /// Catalog-specific metadata of one source.
    pub async fn metadata(&self, id: &str, catalog: &str) -> ClientResult<Option<serde_json::Value>> {
        let query = [("id", id.to_string()), ("catalog", catalog.to_string())];
        self.get_json("/metadata", &query).await
    }

    /// Light curve around a position.
    pub async fn lightcurve(&self, params: &LightcurveParams) -> ClientResult<Option<Lightcurve>> {
        params.validate()?;
        self.get_json("/lightcurve", &params.query_pairs()).await
    }
}
