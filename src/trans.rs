//! Provides the offset algorithms between WGS84, GCJ02 and BD09.
//!
//! All the functions take and return `(latitude, longitude)` in degree.
//! They are pure, accept any finite value, and propagate NaN.
//!
//! The WGS84 to GCJ02 offset is a fixed empirical polynomial published
//! for the Chinese public maps.
//! Its reverse, [`gcj02_to_wgs84`], is a one-step approximation,
//! the round-trip residual is under 1 m in most cities, about 2 m around Shanghai
//! and up to about 5 m in the north-east of the envelope.
//! The GCJ02/BD09 pair has a closed-form inverse.
//!
//! # Example
//!
//! ```
//! # use geocoord::trans::*;
//! let (lat, lon) = wgs84_to_gcj02(39.9042, 116.4074);
//! assert!((lat - 39.90560334316507).abs() < 1e-8);
//! assert!((lon - 116.41364225378803).abs() < 1e-8);
//!
//! // no offset outside China
//! assert_eq!(wgs84_to_gcj02(35.6812, 139.7671), (35.6812, 139.7671));
//! ```
use std::f64::consts::PI;

/// The semi-major axis \[m\] of the legacy reference ellipsoid of GCJ02.
pub const A: f64 = 6378245.0;
/// The squared eccentricity of the legacy reference ellipsoid of GCJ02.
pub const EE: f64 = 0.006693421622965943;
/// The scale of the BD09 polar warp.
pub const X_PI: f64 = PI * 3000.0 / 180.0;

/// The BD09 additive offset of latitude.
const BD09_LATITUDE_OFFSET: f64 = 0.006;
/// The BD09 additive offset of longitude.
const BD09_LONGITUDE_OFFSET: f64 = 0.0065;

/// Returns `true` if the position is in the envelope where GCJ02 offset applies.
///
/// The boundary is included.
///
/// # Example
///
/// ```
/// # use geocoord::trans::is_in_china;
/// assert!(is_in_china(39.9042, 116.4074));
/// assert!(is_in_china(3.86, 73.66));
/// assert!(!is_in_china(3.85, 73.66));
/// ```
#[inline]
#[must_use]
pub fn is_in_china(latitude: f64, longitude: f64) -> bool {
    (73.66..=135.04).contains(&longitude) && (3.86..=53.55).contains(&latitude)
}

#[inline]
fn transform_latitude(x: f64, y: f64) -> f64 {
    let mut ret = -100.0 + 2.0 * x + 3.0 * y + 0.2 * y * y + 0.1 * x * y + 0.2 * x.abs().sqrt();
    ret += (20.0 * (6.0 * x * PI).sin() + 20.0 * (2.0 * x * PI).sin()) * 2.0 / 3.0;
    ret += (20.0 * (y * PI).sin() + 40.0 * (y / 3.0 * PI).sin()) * 2.0 / 3.0;
    ret += (160.0 * (y / 12.0 * PI).sin() + 320.0 * (y * PI / 30.0).sin()) * 2.0 / 3.0;
    ret
}

#[inline]
fn transform_longitude(x: f64, y: f64) -> f64 {
    let mut ret = 300.0 + x + 2.0 * y + 0.1 * x * x + 0.1 * x * y + 0.1 * x.abs().sqrt();
    ret += (20.0 * (6.0 * x * PI).sin() + 20.0 * (2.0 * x * PI).sin()) * 2.0 / 3.0;
    ret += (20.0 * (x * PI).sin() + 40.0 * (x / 3.0 * PI).sin()) * 2.0 / 3.0;
    ret += (150.0 * (x / 12.0 * PI).sin() + 300.0 * (x / 30.0 * PI).sin()) * 2.0 / 3.0;
    ret
}

/// Returns the GCJ02 offset \[deg\] at the position.
#[inline]
fn delta(latitude: f64, longitude: f64) -> (f64, f64) {
    let d_lat = transform_latitude(longitude - 105.0, latitude - 35.0);
    let d_lon = transform_longitude(longitude - 105.0, latitude - 35.0);

    let rad_lat = latitude / 180.0 * PI;
    let sin_lat = rad_lat.sin();
    let magic = 1.0 - EE * sin_lat * sin_lat;
    let sqrt_magic = magic.sqrt();

    // meridian and prime vertical radius of curvature
    let d_lat = (d_lat * 180.0) / ((A * (1.0 - EE)) / (magic * sqrt_magic) * PI);
    let d_lon = (d_lon * 180.0) / (A / sqrt_magic * rad_lat.cos() * PI);

    (d_lat, d_lon)
}

/// Returns the GCJ02 position of the WGS84 position.
///
/// Returns the input unchanged when it is out of [China](is_in_china).
#[must_use]
pub fn wgs84_to_gcj02(latitude: f64, longitude: f64) -> (f64, f64) {
    if !is_in_china(latitude, longitude) {
        return (latitude, longitude);
    }

    let (d_lat, d_lon) = delta(latitude, longitude);
    (latitude + d_lat, longitude + d_lon)
}

/// Returns the approximate WGS84 position of the GCJ02 position.
///
/// This evaluates the offset at the GCJ02 position itself and subtracts it,
/// it is not the exact inverse of [`wgs84_to_gcj02`].
/// The residual is up to about 5 m in the envelope.
///
/// Returns the input unchanged when it is out of [China](is_in_china).
#[must_use]
pub fn gcj02_to_wgs84(latitude: f64, longitude: f64) -> (f64, f64) {
    if !is_in_china(latitude, longitude) {
        return (latitude, longitude);
    }

    let (d_lat, d_lon) = delta(latitude, longitude);
    (latitude - d_lat, longitude - d_lon)
}

/// Returns the BD09 position of the GCJ02 position.
///
/// # Example
///
/// ```
/// # use geocoord::trans::*;
/// let (lat, lon) = gcj02_to_bd09(39.90560334316507, 116.41364225378803);
/// assert!((lat - 39.91186533561899).abs() < 1e-8);
/// assert!((lon - 116.42004633029816).abs() < 1e-8);
/// ```
#[must_use]
pub fn gcj02_to_bd09(latitude: f64, longitude: f64) -> (f64, f64) {
    let (x, y) = (longitude, latitude);

    let z = (x * x + y * y).sqrt() + 0.00002 * (y * X_PI).sin();
    let theta = y.atan2(x) + 0.000003 * (x * X_PI).cos();

    (
        z * theta.sin() + BD09_LATITUDE_OFFSET,
        z * theta.cos() + BD09_LONGITUDE_OFFSET,
    )
}

/// Returns the GCJ02 position of the BD09 position.
#[must_use]
pub fn bd09_to_gcj02(latitude: f64, longitude: f64) -> (f64, f64) {
    let x = longitude - BD09_LONGITUDE_OFFSET;
    let y = latitude - BD09_LATITUDE_OFFSET;

    let z = (x * x + y * y).sqrt() - 0.00002 * (y * X_PI).sin();
    let theta = y.atan2(x) - 0.000003 * (x * X_PI).cos();

    (z * theta.sin(), z * theta.cos())
}

/// Returns the BD09 position of the WGS84 position, through GCJ02.
#[must_use]
pub fn wgs84_to_bd09(latitude: f64, longitude: f64) -> (f64, f64) {
    let (latitude, longitude) = wgs84_to_gcj02(latitude, longitude);
    gcj02_to_bd09(latitude, longitude)
}

/// Returns the approximate WGS84 position of the BD09 position, through GCJ02.
#[must_use]
pub fn bd09_to_wgs84(latitude: f64, longitude: f64) -> (f64, f64) {
    let (latitude, longitude) = bd09_to_gcj02(latitude, longitude);
    gcj02_to_wgs84(latitude, longitude)
}
