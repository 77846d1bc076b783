//! Catalogs offered by the cross-match search.

use serde::{Deserialize, Serialize};

/// Grey used for catalogs we do not know.
pub const UNKNOWN_CATALOG_COLOR: &str = "#8c8c8c";

/// Ant Design tag colour used for unknown catalogs.
pub const UNKNOWN_CATALOG_ANTD_COLOR: &str = "default";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Catalog {
    #[serde(rename = "gaia_dr3")]
    GaiaDr3,
    #[serde(rename = "simbad")]
    Simbad,
    #[serde(rename = "2mass")]
    TwoMass,
    #[serde(rename = "wise")]
    Wise,
    #[serde(rename = "allwise")]
    AllWise,
}

impl Catalog {
    pub const ALL: [Catalog; 5] = [
        Catalog::GaiaDr3,
        Catalog::Simbad,
        Catalog::TwoMass,
        Catalog::Wise,
        Catalog::AllWise,
    ];

    /// Identifier used in query strings and API calls.
    pub fn id(self) -> &'static str {
        match self {
            Catalog::GaiaDr3 => "gaia_dr3",
            Catalog::Simbad => "simbad",
            Catalog::TwoMass => "2mass",
            Catalog::Wise => "wise",
            Catalog::AllWise => "allwise",
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Catalog::GaiaDr3 => "GAIA DR3",
            Catalog::Simbad => "SIMBAD",
            Catalog::TwoMass => "2MASS",
            Catalog::Wise => "WISE",
            Catalog::AllWise => "AllWISE",
        }
    }

    /// Hex colour used for markers and chart series.
    pub fn color(self) -> &'static str {
        match self {
            Catalog::GaiaDr3 => "#1890ff",
            Catalog::Simbad => "#52c41a",
            Catalog::TwoMass => "#fa8c16",
            Catalog::Wise | Catalog::AllWise => "#722ed1",
        }
    }

    /// Ant Design preset colour name for tags.
    pub fn antd_color(self) -> &'static str {
        match self {
            Catalog::GaiaDr3 => "blue",
            Catalog::Simbad => "green",
            Catalog::TwoMass => "orange",
            Catalog::Wise | Catalog::AllWise => "purple",
        }
    }

    pub fn from_id(id: &str) -> Option<Catalog> {
        Catalog::ALL.into_iter().find(|c| c.id() == id)
    }

    /// Match a display label, ignoring case and whitespace
    /// (`"gaia dr3"`, `"GAIADR3"` and `"GAIA DR3"` are the same).
    pub fn from_label(label: &str) -> Option<Catalog> {
        let wanted = normalize_label(label);
        Catalog::ALL
            .into_iter()
            .find(|c| normalize_label(c.label()) == wanted)
    }
}

fn normalize_label(label: &str) -> String {
    label
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Catalogs shown as search options. AllWISE is a WISE variant and is left out.
pub fn catalog_options() -> [Catalog; 4] {
    [Catalog::GaiaDr3, Catalog::Simbad, Catalog::TwoMass, Catalog::Wise]
}

/// Hex colour for a catalog label, grey when unknown.
pub fn catalog_color(label: &str) -> &'static str {
    Catalog::from_label(label).map_or(UNKNOWN_CATALOG_COLOR, Catalog::color)
}

/// Ant Design colour for a catalog label, `"default"` when unknown.
pub fn catalog_antd_color(label: &str) -> &'static str {
    Catalog::from_label(label).map_or(UNKNOWN_CATALOG_ANTD_COLOR, Catalog::antd_color)
}
