//! Search parameters kept in the page query string.
//!
//! `/search?ra=…&dec=…&radius=…&unit=…&catalogs=…` is the single source of
//! truth for a cross-match search, so a search can be bookmarked or shared.
//! Unknown keys are ignored and malformed values fall back to defaults.

use std::fmt;
use std::str::FromStr;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use qtty::{Arcminutes, Arcseconds, Degree, Degrees};
use serde::{Deserialize, Serialize};

use crate::client::ConeSearchParams;
use crate::coordinates::unsigned_zero;
use crate::models::Catalog;

/// `application/x-www-form-urlencoded` keeps only these unescaped.
const FORM_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'*')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_');

pub const DEFAULT_RADIUS: f64 = 1.0;

/// Unit of the search radius.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RadiusUnit {
    #[default]
    Arcsec,
    Arcmin,
    Deg,
}

impl RadiusUnit {
    pub fn as_str(self) -> &'static str {
        match self {
            RadiusUnit::Arcsec => "arcsec",
            RadiusUnit::Arcmin => "arcmin",
            RadiusUnit::Deg => "deg",
        }
    }

    /// Convert `value` in this unit to degrees.
    pub fn to_degrees(self, value: f64) -> Degrees {
        match self {
            RadiusUnit::Arcsec => Arcseconds::new(value).to::<Degree>(),
            RadiusUnit::Arcmin => Arcminutes::new(value).to::<Degree>(),
            RadiusUnit::Deg => Degrees::new(value),
        }
    }
}

impl fmt::Display for RadiusUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RadiusUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "arcsec" => Ok(RadiusUnit::Arcsec),
            "arcmin" => Ok(RadiusUnit::Arcmin),
            "deg" => Ok(RadiusUnit::Deg),
            other => Err(format!("Unknown radius unit '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchParams {
    /// Right ascension as typed (decimal degrees)
    pub ra: String,
    /// Declination as typed (decimal degrees)
    pub dec: String,
    pub radius: f64,
    pub unit: RadiusUnit,
    /// Comma-separated catalog ids
    pub catalogs: String,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            ra: String::new(),
            dec: String::new(),
            radius: DEFAULT_RADIUS,
            unit: RadiusUnit::default(),
            catalogs: String::new(),
        }
    }
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, FORM_ENCODE_SET)
        .to_string()
        .replace("%20", "+")
}

impl SearchParams {
    /// Read parameters from a query string, with or without the leading `?`.
    pub fn from_query(query: &str) -> Self {
        let mut params = SearchParams::default();
        let query = query.strip_prefix('?').unwrap_or(query);

        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let value = decode_component(value);
            match decode_component(key).as_str() {
                "ra" => params.ra = value,
                "dec" => params.dec = value,
                "radius" => {
                    params.radius = value
                        .trim()
                        .parse::<f64>()
                        .ok()
                        .filter(|r| r.is_finite())
                        .unwrap_or(DEFAULT_RADIUS)
                }
                "unit" => params.unit = value.parse().unwrap_or_default(),
                "catalogs" => params.catalogs = value,
                _ => {}
            }
        }

        params
    }

    /// Serialize to a query string (without `?`) in a fixed key order.
    pub fn to_query(&self) -> String {
        format!(
            "ra={}&dec={}&radius={}&unit={}&catalogs={}",
            encode_component(&self.ra),
            encode_component(&self.dec),
            self.radius,
            self.unit,
            encode_component(&self.catalogs)
        )
    }

    /// Path of the search page for these parameters.
    pub fn search_path(&self) -> String {
        format!("/search?{}", self.to_query())
    }

    /// Parameters for a freshly located target.
    pub fn for_position(ra: f64, dec: f64, radius: f64, unit: RadiusUnit, catalogs: &[Catalog]) -> Self {
        Self {
            ra: unsigned_zero(ra).to_string(),
            dec: unsigned_zero(dec).to_string(),
            radius,
            unit,
            catalogs: catalogs.iter().map(|c| c.id()).collect::<Vec<_>>().join(","),
        }
    }

    /// A search can run once both coordinates are filled in.
    pub fn is_valid(&self) -> bool {
        !self.ra.is_empty() && !self.dec.is_empty()
    }

    pub fn radius_degrees(&self) -> Degrees {
        self.unit.to_degrees(self.radius)
    }

    /// Catalog ids listed in `catalogs`, blanks dropped.
    pub fn catalog_list(&self) -> Vec<&str> {
        self.catalogs
            .split(',')
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .collect()
    }

    /// Cone search request for these parameters.
    ///
    /// `None` unless ra/dec are finite decimal degrees within range and the
    /// radius is positive. A single selected catalog is passed through; none
    /// or several means every catalog.
    pub fn cone_search_params(&self) -> Option<ConeSearchParams> {
        if !self.is_valid() {
            return None;
        }

        let ra = self.ra.trim().parse::<f64>().ok().filter(|v| v.is_finite())?;
        let dec = self.dec.trim().parse::<f64>().ok().filter(|v| v.is_finite())?;
        if !(0.0..=360.0).contains(&ra) || !(-90.0..=90.0).contains(&dec) {
            return None;
        }

        let radius = self.radius_degrees().value();
        if radius <= 0.0 {
            return None;
        }

        let catalog = match self.catalog_list().as_slice() {
            [single] => Some(single.to_string()),
            _ => None,
        };

        Some(ConeSearchParams {
            ra,
            dec,
            radius,
            catalog,
            nneighbor: None,
            get_metadata: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_defaults() {
        let params = SearchParams::from_query("");
        assert_eq!(params, SearchParams::default());
        assert_eq!(params.radius, 1.0);
        assert_eq!(params.unit, RadiusUnit::Arcsec);
        assert!(!params.is_valid());
    }

    #[test]
    fn test_from_query() {
        let params =
            SearchParams::from_query("?ra=10.684&dec=-41.26&radius=5&unit=arcmin&catalogs=gaia_dr3%2Cwise&page=2");
        assert_eq!(params.ra, "10.684");
        assert_eq!(params.dec, "-41.26");
        assert_eq!(params.radius, 5.0);
        assert_eq!(params.unit, RadiusUnit::Arcmin);
        assert_eq!(params.catalog_list(), vec!["gaia_dr3", "wise"]);
        assert!(params.is_valid());
    }

    #[test]
    fn test_malformed_values_fall_back() {
        let params = SearchParams::from_query("radius=wide&unit=parsec&ra");
        assert_eq!(params.radius, DEFAULT_RADIUS);
        assert_eq!(params.unit, RadiusUnit::Arcsec);
        assert_eq!(params.ra, "");
    }

    #[test]
    fn test_to_query_roundtrip() {
        let params = SearchParams::for_position(
            83.63308,
            22.0145,
            5.0,
            RadiusUnit::Arcsec,
            &[Catalog::GaiaDr3, Catalog::TwoMass],
        );
        let query = params.to_query();
        assert_eq!(
            query,
            "ra=83.63308&dec=22.0145&radius=5&unit=arcsec&catalogs=gaia_dr3%2C2mass"
        );
        assert_eq!(SearchParams::from_query(&query), params);
        assert!(params.search_path().starts_with("/search?ra="));
    }

    #[test]
    fn test_negative_zero_position() {
        let params = SearchParams::for_position(-0.0, -0.0, 1.0, RadiusUnit::Deg, &[]);
        assert_eq!(params.ra, "0");
        assert_eq!(params.dec, "0");
        assert!(params.search_path().starts_with("/search?ra=0&dec=0&"));
    }

    #[test]
    fn test_space_encoding() {
        let params = SearchParams {
            ra: "12 30".to_string(),
            ..Default::default()
        };
        assert!(params.to_query().starts_with("ra=12+30&"));
        assert_eq!(SearchParams::from_query("ra=12+30").ra, "12 30");
    }

    #[test]
    fn test_radius_degrees() {
        let mut params = SearchParams {
            radius: 3600.0,
            ..Default::default()
        };
        assert_abs_diff_eq!(params.radius_degrees().value(), 1.0, epsilon = 1e-12);
        params.unit = RadiusUnit::Arcmin;
        assert_abs_diff_eq!(params.radius_degrees().value(), 60.0, epsilon = 1e-12);
        params.unit = RadiusUnit::Deg;
        assert_eq!(params.radius_degrees().value(), 3600.0);
    }

    #[test]
    fn test_cone_search_params() {
        let params = SearchParams::from_query("ra=180&dec=45&radius=36&unit=arcsec&catalogs=wise");
        let cone = params.cone_search_params().unwrap();
        assert_eq!(cone.ra, 180.0);
        assert_eq!(cone.dec, 45.0);
        assert_abs_diff_eq!(cone.radius, 0.01, epsilon = 1e-12);
        assert_eq!(cone.catalog.as_deref(), Some("wise"));
    }

    #[test]
    fn test_cone_search_params_multiple_catalogs_means_all() {
        let params = SearchParams::from_query("ra=180&dec=45&catalogs=wise,simbad");
        assert_eq!(params.cone_search_params().unwrap().catalog, None);
    }

    #[test]
    fn test_cone_search_params_rejects_bad_input() {
        assert!(SearchParams::from_query("ra=abc&dec=45").cone_search_params().is_none());
        assert!(SearchParams::from_query("ra=380&dec=45").cone_search_params().is_none());
        assert!(SearchParams::from_query("ra=10&dec=45&radius=0").cone_search_params().is_none());
        assert!(SearchParams::from_query("ra=10").cone_search_params().is_none());
    }
}
