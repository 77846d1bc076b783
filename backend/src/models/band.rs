//! Photometric bands and their chart colours.

use serde::Serialize;

/// Colour used for bands missing from [`BAND_COLORS`].
pub const DEFAULT_BAND_COLOR: &str = "#1890ff";

/// Band (or ZTF filter id) to hex colour.
pub const BAND_COLORS: &[(&str, &str)] = &[
    // ZTF bands
    ("g", "#52c41a"),
    ("r", "#ff4d4f"),
    ("i", "#722ed1"),
    ("z", "#fa8c16"),
    // ZTF filter ids
    ("1", "#52c41a"),
    ("2", "#ff4d4f"),
    ("3", "#722ed1"),
    // Gaia
    ("G", "#1890ff"),
    ("BP", "#52c41a"),
    ("RP", "#ff4d4f"),
    // 2MASS
    ("J", "#fa8c16"),
    ("H", "#722ed1"),
    ("K", "#13c2c2"),
    // WISE
    ("W1", "#1890ff"),
    ("W2", "#52c41a"),
    ("W3", "#fa8c16"),
    ("W4", "#ff4d4f"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BandConfig {
    pub band: &'static str,
    pub survey: &'static str,
    pub wavelength: &'static str,
    pub color: &'static str,
}

/// Broad-band photometry shown in the source info panel.
pub static PHOTOMETRY_BANDS: [BandConfig; 10] = [
    BandConfig { band: "G", survey: "Gaia", wavelength: "0.64 μm", color: "#1890ff" },
    BandConfig { band: "BP", survey: "Gaia", wavelength: "0.51 μm", color: "#52c41a" },
    BandConfig { band: "RP", survey: "Gaia", wavelength: "0.78 μm", color: "#ff4d4f" },
    BandConfig { band: "J", survey: "2MASS", wavelength: "1.24 μm", color: "#fa8c16" },
    BandConfig { band: "H", survey: "2MASS", wavelength: "1.66 μm", color: "#722ed1" },
    BandConfig { band: "K", survey: "2MASS", wavelength: "2.16 μm", color: "#13c2c2" },
    BandConfig { band: "W1", survey: "WISE", wavelength: "3.4 μm", color: "#1890ff" },
    BandConfig { band: "W2", survey: "WISE", wavelength: "4.6 μm", color: "#52c41a" },
    BandConfig { band: "W3", survey: "WISE", wavelength: "12 μm", color: "#fa8c16" },
    BandConfig { band: "W4", survey: "WISE", wavelength: "22 μm", color: "#ff4d4f" },
];

/// Colour for a band name. Case matters: `"g"` is ZTF, `"G"` is Gaia.
pub fn band_color(band: &str) -> &'static str {
    BAND_COLORS
        .iter()
        .find(|(name, _)| *name == band)
        .map_or(DEFAULT_BAND_COLOR, |(_, color)| *color)
}

/// Bands belonging to one survey, in display order.
pub fn bands_for_survey(survey: &str) -> impl Iterator<Item = &'static BandConfig> + '_ {
    PHOTOMETRY_BANDS.iter().filter(move |b| b.survey == survey)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_color_is_case_sensitive() {
        assert_eq!(band_color("g"), "#52c41a");
        assert_eq!(band_color("G"), "#1890ff");
        assert_eq!(band_color("K"), "#13c2c2");
        assert_eq!(band_color("2"), "#ff4d4f");
    }

    #[test]
    fn test_band_color_default() {
        assert_eq!(band_color("u"), DEFAULT_BAND_COLOR);
        assert_eq!(band_color(""), DEFAULT_BAND_COLOR);
    }

    #[test]
    fn test_photometry_band_colors_match_table() {
        for band in PHOTOMETRY_BANDS.iter() {
            assert_eq!(band.color, band_color(band.band), "band {}", band.band);
        }
    }

    #[test]
    fn test_bands_for_survey() {
        let wise: Vec<&str> = bands_for_survey("WISE").map(|b| b.band).collect();
        assert_eq!(wise, vec!["W1", "W2", "W3", "W4"]);
        assert_eq!(bands_for_survey("ZTF").count(), 0);
    }
}
