//! Provides the registry of conversions between coordinate systems.
//!
//! # Example
//!
//! ```
//! # use geocoord::*;
//! # use geocoord::converter::converter;
//! # fn main() -> Result<()> {
//! let f = converter(CoordinateSystem::WGS84, CoordinateSystem::GCJ02).unwrap();
//! let (lat, lon) = f(39.9042, 116.4074);
//! assert!((lat - 39.90560334316507).abs() < 1e-8);
//! assert!((lon - 116.41364225378803).abs() < 1e-8);
//!
//! // COMMON has no converter
//! assert!(converter(CoordinateSystem::Common, CoordinateSystem::WGS84).is_none());
//! # Ok(())}
//! ```
use tracing::trace;

use crate::trans;
use crate::{CoordinateSystem, Error, GeoPoint, Result};

/// A conversion taking and returning `(latitude, longitude)`.
pub type Converter = fn(f64, f64) -> (f64, f64);

/// Returns the conversion from `from` to `to`.
///
/// Returns [`None`] for unregistered pairs,
/// that is, any pair including [`CoordinateSystem::Common`] and the identical pairs.
#[must_use]
pub fn converter(from: CoordinateSystem, to: CoordinateSystem) -> Option<Converter> {
    use CoordinateSystem::*;

    let f: Converter = match (from, to) {
        (WGS84, GCJ02) => trans::wgs84_to_gcj02,
        (GCJ02, WGS84) => trans::gcj02_to_wgs84,
        (GCJ02, BD09) => trans::gcj02_to_bd09,
        (BD09, GCJ02) => trans::bd09_to_gcj02,
        (WGS84, BD09) => trans::wgs84_to_bd09,
        (BD09, WGS84) => trans::bd09_to_wgs84,
        _ => {
            trace!(%from, %to, "no converter registered");
            return None;
        }
    };

    Some(f)
}

/// Returns the [`GeoPoint`] re-tagged into `to`.
///
/// The conversion into the point's own system is the identity
/// and never consults the registry.
///
/// # Errors
///
/// If no converter is registered for the pair.
///
/// # Example
///
/// ```
/// # use geocoord::*;
/// # use geocoord::converter::convert;
/// # fn main() -> Result<()> {
/// let point = GeoPoint::wgs84(39.9042, 116.4074);
///
/// let result = convert(&point, CoordinateSystem::BD09)?;
/// assert_eq!(result.system(), &CoordinateSystem::BD09);
///
/// let result = convert(&point, CoordinateSystem::Common);
/// assert!(result.is_err());
///
/// // identity
/// let point = GeoPoint::new(1.0, 2.0, CoordinateSystem::Common);
/// assert_eq!(convert(&point, CoordinateSystem::Common)?, point);
/// # Ok(())}
/// ```
pub fn convert(point: &GeoPoint, to: CoordinateSystem) -> Result<GeoPoint> {
    if point.system == to {
        return Ok(*point);
    }

    let f = converter(point.system, to)
        .ok_or(Error::new_unsupported_conversion(point.system, to))?;

    let (latitude, longitude) = f(point.latitude, point.longitude);
    Ok(GeoPoint::new(latitude, longitude, to))
}
