//! Geocentric position types and the ecliptic → equatorial rotation.

use serde::Serialize;

use crate::angle::normalize_360;

/// Mean Earth–Sun distance in kilometres (IAU 2012).
pub const AU_KM: f64 = 149_597_870.7;

/// Earth's equatorial radius in kilometres, as used for lunar parallax.
pub const EARTH_RADIUS_KM: f64 = 6378.14;

/// Apparent geocentric ecliptic position of date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EclipticPosition {
    /// Tropical longitude in degrees, [0, 360).
    pub longitude_deg: f64,
    /// Latitude in degrees.
    pub latitude_deg: f64,
    /// Distance from the Earth's centre in kilometres.
    pub distance_km: f64,
}

/// Apparent geocentric equatorial position of date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EquatorialPosition {
    /// Right ascension in degrees, [0, 360).
    pub ra_deg: f64,
    /// Declination in degrees.
    pub dec_deg: f64,
    pub distance_km: f64,
}

/// Rotate an ecliptic position into equatorial coordinates.
///
/// `obliquity_deg` should be the true obliquity when the longitude is
/// apparent (nutation included).
pub fn ecliptic_to_equatorial(ecl: &EclipticPosition, obliquity_deg: f64) -> EquatorialPosition {
    let (sin_l, cos_l) = ecl.longitude_deg.to_radians().sin_cos();
    let (sin_b, cos_b) = ecl.latitude_deg.to_radians().sin_cos();
    let (sin_e, cos_e) = obliquity_deg.to_radians().sin_cos();

    let ra = (sin_l * cos_e - (sin_b / cos_b) * sin_e).atan2(cos_l);
    let dec = (sin_b * cos_e + cos_b * sin_e * sin_l).clamp(-1.0, 1.0).asin();

    EquatorialPosition {
        ra_deg: normalize_360(ra.to_degrees()),
        dec_deg: dec.to_degrees(),
        distance_km: ecl.distance_km,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ecl(lon: f64, lat: f64) -> EclipticPosition {
        EclipticPosition {
            longitude_deg: lon,
            latitude_deg: lat,
            distance_km: 1.0,
        }
    }

    #[test]
    fn equinox_maps_to_origin() {
        let eq = ecliptic_to_equatorial(&ecl(0.0, 0.0), 23.44);
        assert!(eq.ra_deg.abs() < 1e-12 || (eq.ra_deg - 360.0).abs() < 1e-12);
        assert!(eq.dec_deg.abs() < 1e-12);
    }

    #[test]
    fn solstice_declination_equals_obliquity() {
        let eq = ecliptic_to_equatorial(&ecl(90.0, 0.0), 23.44);
        assert!((eq.ra_deg - 90.0).abs() < 1e-9);
        assert!((eq.dec_deg - 23.44).abs() < 1e-9);
    }

    #[test]
    fn meeus_example_13a() {
        // Pollux: λ = 113.215630°, β = 6.684170°, ε = 23.4392911° →
        // α = 116.328942°, δ = 28.026183°.
        let eq = ecliptic_to_equatorial(&ecl(113.215_630, 6.684_170), 23.439_291_1);
        assert!((eq.ra_deg - 116.328_942).abs() < 1e-5, "α = {}", eq.ra_deg);
        assert!((eq.dec_deg - 28.026_183).abs() < 1e-5, "δ = {}", eq.dec_deg);
    }
}
