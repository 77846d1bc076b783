//! CDS Sesame client and response parser.

use std::time::Duration;

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use tracing::{debug, warn};

use super::error::{ResolverError, ResolverResult};
use super::{NameResolver, ResolvedCoordinates};
use crate::coordinates::Coordinates;

/// Sesame endpoint: `-oI` plain text output, `SNV` = SIMBAD, NED, VizieR.
pub const DEFAULT_SESAME_URL: &str = "https://cds.unistra.fr/cgi-bin/nph-sesame/-oI/SNV";

/// Characters left as-is when encoding the object name, same set as
/// ECMAScript `encodeURIComponent`.
const NAME_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Marker of the J2000 decimal-degree line in Sesame output.
const J2000_MARKER: &str = "%J";

/// Extract the first `%J ra dec` pair from a Sesame text response.
///
/// Lines starting with `%J` whose first two values are not finite numbers
/// (for instance `%J.E` error lines) are skipped.
pub fn parse_sesame_response(text: &str) -> Option<Coordinates> {
    text.lines()
        .filter(|line| line.starts_with(J2000_MARKER))
        .find_map(|line| {
            let mut tokens = line.split_whitespace().skip(1);
            let ra = tokens.next()?.parse::<f64>().ok()?;
            let dec = tokens.next()?.parse::<f64>().ok()?;
            (ra.is_finite() && dec.is_finite()).then(|| Coordinates::new(ra, dec))
        })
}

/// Resolves names by forwarding them to a Sesame endpoint.
#[derive(Debug, Clone)]
pub struct SesameResolver {
    client: reqwest::Client,
    base_url: String,
}

impl SesameResolver {
    /// Build a resolver with its own HTTP client.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> ResolverResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_client(client, base_url))
    }

    /// Build a resolver sharing an existing HTTP client.
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full upstream URL for `name`; the name is trimmed then percent-encoded
    /// into the query component.
    pub fn query_url(&self, name: &str) -> String {
        let encoded = utf8_percent_encode(name.trim(), NAME_ENCODE_SET);
        format!("{}?{}", self.base_url, encoded)
    }
}

#[async_trait]
impl NameResolver for SesameResolver {
    async fn resolve(&self, name: &str) -> ResolverResult<ResolvedCoordinates> {
        let url = self.query_url(name);
        debug!(%url, "querying Sesame");

        let response = self.client.get(&url).send().await.map_err(|e| {
            warn!(error = %e, "Sesame request failed");
            ResolverError::Transport(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "Sesame returned an error status");
            return Err(ResolverError::UpstreamStatus(status.as_u16()));
        }

        let text = response.text().await?;
        let coords =
            parse_sesame_response(&text).ok_or_else(|| ResolverError::NotFound(name.to_string()))?;

        debug!(name, ra = coords.ra, dec = coords.dec, "name resolved");
        Ok(ResolvedCoordinates {
            ra: coords.ra,
            dec: coords.dec,
            object_name: name.to_string(),
        })
    }
}
