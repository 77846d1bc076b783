//! Data Transfer Objects of the cross-match API.
//!
//! These mirror the JSON served by the cross-match service. Light-curve
//! entries differ per survey, so they are kept as raw JSON values.

use serde::{Deserialize, Serialize};

pub use crate::coordinates::Coordinates;
pub use crate::resolver::ResolvedCoordinates;

/// One row of the master catalog index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mastercat {
    /// Source identifier within its catalog
    pub id: String,
    /// HEALPix pixel index of the source
    pub ipix: i64,
    /// Right ascension in degrees
    pub ra: f64,
    /// Declination in degrees
    pub dec: f64,
    /// Catalog the source belongs to
    pub cat: String,
}

impl Mastercat {
    pub fn position(&self) -> Coordinates {
        Coordinates::new(self.ra, self.dec)
    }
}

/// Photometry of a position, split by measurement kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Lightcurve {
    #[serde(default)]
    pub detections: Vec<serde_json::Value>,
    #[serde(default)]
    pub non_detections: Vec<serde_json::Value>,
    #[serde(default)]
    pub forced_photometry: Vec<serde_json::Value>,
}

impl Lightcurve {
    pub fn is_empty(&self) -> bool {
        self.detections.is_empty() && self.non_detections.is_empty() && self.forced_photometry.is_empty()
    }

    /// Numeric values of `field` across the detections, e.g. `"mjd"` for
    /// the time axis of a chart.
    pub fn detection_values(&self, field: &str) -> Vec<f64> {
        self.detections
            .iter()
            .filter_map(|d| d.get(field).and_then(serde_json::Value::as_f64))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_mastercat_deserialize() {
        let row: Mastercat = serde_json::from_value(json!({
            "id": "J004244.33+411607.5",
            "ipix": 123456,
            "ra": 10.6847,
            "dec": 41.2687,
            "cat": "allwise"
        }))
        .unwrap();
        assert_eq!(row.cat, "allwise");
        assert_eq!(row.position(), Coordinates::new(10.6847, 41.2687));
    }

    #[test]
    fn test_lightcurve_missing_lists_default_to_empty() {
        let lc: Lightcurve = serde_json::from_value(json!({"detections": []})).unwrap();
        assert!(lc.is_empty());
    }

    #[test]
    fn test_detection_values() {
        let lc = Lightcurve {
            detections: vec![
                json!({"mjd": 58000.5, "w1mpro": 12.1}),
                json!({"mjd": 58010.0}),
                json!({"w1mpro": 12.3}),
            ],
            ..Default::default()
        };
        assert_eq!(lc.detection_values("mjd"), vec![58000.5, 58010.0]);
        assert_eq!(lc.detection_values("w1mpro"), vec![12.1, 12.3]);
    }
}
