//! Object name resolution through the CDS Sesame service.
//!
//! Browsers cannot call Sesame directly (no CORS headers), so the server
//! forwards the request and extracts the `%J` line from Sesame's plain-text
//! answer. The [`NameResolver`] trait is the seam the HTTP layer and the
//! target lookup depend on; [`SesameResolver`] is the production
//! implementation.

pub mod error;
pub mod sesame;

pub use error::{ResolverError, ResolverResult};
pub use sesame::{parse_sesame_response, SesameResolver, DEFAULT_SESAME_URL};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Coordinates returned for a resolved object name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedCoordinates {
    /// Right ascension in degrees
    pub ra: f64,
    /// Declination in degrees
    pub dec: f64,
    /// The name as it was submitted
    pub object_name: String,
}

/// Something that can turn an object name into coordinates.
#[async_trait]
pub trait NameResolver: Send + Sync {
    /// Resolve `name` to J2000 coordinates in degrees.
    ///
    /// `name` is used verbatim for [`ResolvedCoordinates::object_name`];
    /// implementations trim it before querying.
    async fn resolve(&self, name: &str) -> ResolverResult<ResolvedCoordinates>;
}
