//! Links to external CDS services for a sky position.
//!
//! Numbers are written with the shortest representation that round-trips,
//! so `2.0` appears as `2`.

/// Default cone radius for SIMBAD and VizieR links, in arcseconds.
pub const DEFAULT_LINK_RADIUS_ARCSEC: f64 = 2.0;

/// Default Aladin Lite field of view, in degrees.
pub const DEFAULT_ALADIN_FOV_DEG: f64 = 0.1;

/// SIMBAD coordinate query around (`ra`, `dec`) in degrees.
pub fn simbad_url(ra: f64, dec: f64, radius_arcsec: f64) -> String {
    format!(
        "https://simbad.cds.unistra.fr/simbad/sim-coo?Coord={}+{}&Radius={}&Radius.unit=arcsec",
        ra, dec, radius_arcsec
    )
}

/// VizieR cone search around (`ra`, `dec`) in degrees.
pub fn vizier_url(ra: f64, dec: f64, radius_arcsec: f64) -> String {
    format!(
        "https://vizier.cds.unistra.fr/viz-bin/VizieR?-c={}+{}&-c.rs={}",
        ra, dec, radius_arcsec
    )
}

/// Aladin Lite centred on (`ra`, `dec`) with a field of view in degrees.
pub fn aladin_url(ra: f64, dec: f64, fov_deg: f64) -> String {
    format!(
        "https://aladin.cds.unistra.fr/AladinLite/?target={}+{}&fov={}",
        ra, dec, fov_deg
    )
}
