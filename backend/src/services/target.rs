//! Turning the search box text into a target position.

use serde::Serialize;

use crate::coordinates::{parse_coordinates, Coordinates};
use crate::resolver::{NameResolver, ResolverResult};

/// Where a search target came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "source", rename_all = "camelCase")]
pub enum Target {
    /// The query was a coordinate pair
    Coordinates { ra: f64, dec: f64 },
    /// The query was an object name resolved upstream
    #[serde(rename_all = "camelCase")]
    Resolved {
        ra: f64,
        dec: f64,
        object_name: String,
    },
}

impl Target {
    pub fn position(&self) -> Coordinates {
        match self {
            Target::Coordinates { ra, dec } | Target::Resolved { ra, dec, .. } => {
                Coordinates::new(*ra, *dec)
            }
        }
    }
}

/// Interpret `query` as coordinates first and only fall back to name
/// resolution when it does not parse.
pub async fn locate_target(query: &str, resolver: &dyn NameResolver) -> ResolverResult<Target> {
    if let Some(coords) = parse_coordinates(query) {
        return Ok(Target::Coordinates {
            ra: coords.ra,
            dec: coords.dec,
        });
    }

    let resolved = resolver.resolve(query).await?;
    Ok(Target::Resolved {
        ra: resolved.ra,
        dec: resolved.dec,
        object_name: resolved.object_name,
    })
}
