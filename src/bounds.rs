//! Provides the bounding box.
use std::fmt::{Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::calculator::GeoCalculator;
use crate::{CoordinateSystem, GeoPoint, GeoPointCollection, Result};

/// Represents a bounding box by the south-west and the north-east corners.
///
/// The order of the corners is not checked, and the box does not wrap the antimeridian.
///
/// This serializes to `{"sw": ..., "ne": ...}`,
/// and the coordinate system is restored from the south-west corner.
///
/// # Example
///
/// ```
/// # use geocoord::*;
/// # fn main() -> Result<()> {
/// let bounds = GeoPointBounds::new(
///     GeoPoint::wgs84(39.8, 116.3),
///     GeoPoint::wgs84(40.0, 116.5),
/// );
///
/// assert!(bounds.contains(&GeoPoint::wgs84(39.9042, 116.4074)));
/// assert!(!bounds.contains(&GeoPoint::wgs84(31.2304, 121.4737)));
///
/// // no implicit conversion
/// let point = GeoPoint::new(39.9042, 116.4074, CoordinateSystem::GCJ02);
/// assert!(!bounds.contains(&point));
/// assert!(bounds.to_gcj02()?.contains(&point));
/// # Ok(())}
/// ```
#[derive(Debug, PartialEq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "BoundsRepr", into = "BoundsRepr"))]
pub struct GeoPointBounds {
    southwest: GeoPoint,
    northeast: GeoPoint,
    system: CoordinateSystem,
}

#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct BoundsRepr {
    sw: GeoPoint,
    ne: GeoPoint,
}

#[cfg(feature = "serde")]
impl From<BoundsRepr> for GeoPointBounds {
    #[inline]
    fn from(value: BoundsRepr) -> Self {
        Self::new(value.sw, value.ne)
    }
}

#[cfg(feature = "serde")]
impl From<GeoPointBounds> for BoundsRepr {
    #[inline]
    fn from(value: GeoPointBounds) -> Self {
        Self {
            sw: value.southwest,
            ne: value.northeast,
        }
    }
}

impl Display for GeoPointBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "GeoPointBounds(southwest: {}, northeast: {}, type: {})",
            self.southwest, self.northeast, self.system
        )
    }
}

impl GeoPointBounds {
    /// Makes a [`GeoPointBounds`] in the system of `southwest`.
    #[inline]
    #[must_use]
    pub const fn new(southwest: GeoPoint, northeast: GeoPoint) -> Self {
        Self::with_system(southwest, northeast, southwest.system)
    }

    /// Makes a [`GeoPointBounds`] in `system`.
    #[inline]
    #[must_use]
    pub const fn with_system(
        southwest: GeoPoint,
        northeast: GeoPoint,
        system: CoordinateSystem,
    ) -> Self {
        Self {
            southwest,
            northeast,
            system,
        }
    }

    /// Returns the south-west corner.
    #[inline]
    #[must_use]
    pub const fn southwest(&self) -> &GeoPoint {
        &self.southwest
    }

    /// Returns the north-east corner.
    #[inline]
    #[must_use]
    pub const fn northeast(&self) -> &GeoPoint {
        &self.northeast
    }

    /// Returns the coordinate system.
    #[inline]
    #[must_use]
    pub const fn system(&self) -> &CoordinateSystem {
        &self.system
    }

    /// Returns the four corners, south-west, south-east, north-east and north-west.
    ///
    /// # Example
    ///
    /// ```
    /// # use geocoord::*;
    /// let bounds = GeoPointBounds::new(GeoPoint::wgs84(0.0, 0.0), GeoPoint::wgs84(1.0, 2.0));
    /// assert_eq!(
    ///     bounds.corners(),
    ///     [
    ///         GeoPoint::wgs84(0.0, 0.0),
    ///         GeoPoint::wgs84(0.0, 2.0),
    ///         GeoPoint::wgs84(1.0, 2.0),
    ///         GeoPoint::wgs84(1.0, 0.0),
    ///     ]
    /// );
    /// ```
    #[must_use]
    pub fn corners(&self) -> [GeoPoint; 4] {
        let (south, west) = (self.southwest.latitude, self.southwest.longitude);
        let (north, east) = (self.northeast.latitude, self.northeast.longitude);

        [
            GeoPoint::new(south, west, self.system),
            GeoPoint::new(south, east, self.system),
            GeoPoint::new(north, east, self.system),
            GeoPoint::new(north, west, self.system),
        ]
    }

    /// Returns `true` if `point` is in `self`, boundary included.
    ///
    /// This requires the same coordinate system.
    #[must_use]
    pub fn contains(&self, point: &GeoPoint) -> bool {
        point.system == self.system
            && self.southwest.latitude <= point.latitude
            && point.latitude <= self.northeast.latitude
            && self.southwest.longitude <= point.longitude
            && point.longitude <= self.northeast.longitude
    }

    /// Returns `true` if all of `points` are in `self`.
    #[inline]
    #[must_use]
    pub fn contains_all(&self, points: &[GeoPoint]) -> bool {
        points.iter().all(|point| self.contains(point))
    }

    /// Returns `true` if any of `points` is in `self`.
    #[inline]
    #[must_use]
    pub fn contains_any(&self, points: &[GeoPoint]) -> bool {
        points.iter().any(|point| self.contains(point))
    }

    /// Returns `true` if `other` is in `self`, boundary included.
    #[must_use]
    pub fn contains_bounds(&self, other: &Self) -> bool {
        other.system == self.system
            && self.southwest.latitude <= other.southwest.latitude
            && other.northeast.latitude <= self.northeast.latitude
            && self.southwest.longitude <= other.southwest.longitude
            && other.northeast.longitude <= self.northeast.longitude
    }

    /// Returns `true` if `self` and `other` overlap, touching included.
    ///
    /// # Example
    ///
    /// ```
    /// # use geocoord::*;
    /// let a = GeoPointBounds::new(GeoPoint::wgs84(0.0, 0.0), GeoPoint::wgs84(1.0, 1.0));
    /// let b = GeoPointBounds::new(GeoPoint::wgs84(1.0, 1.0), GeoPoint::wgs84(2.0, 2.0));
    /// let c = GeoPointBounds::new(GeoPoint::wgs84(1.5, 0.0), GeoPoint::wgs84(2.0, 2.0));
    ///
    /// assert!(a.intersects(&b));
    /// assert!(!a.intersects(&c));
    /// ```
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        other.system == self.system
            && other.southwest.latitude <= self.northeast.latitude
            && self.southwest.latitude <= other.northeast.latitude
            && other.southwest.longitude <= self.northeast.longitude
            && self.southwest.longitude <= other.northeast.longitude
    }

    /// Returns the [`corners`](GeoPointBounds::corners) as a [`GeoPointCollection`].
    #[must_use]
    pub fn to_collection(&self) -> GeoPointCollection {
        GeoPointCollection {
            points: self.corners().to_vec(),
            system: self.system,
        }
    }

    /// Returns the bounds whose corners are converted into `to`.
    ///
    /// # Errors
    ///
    /// If the conversion is not supported.
    pub fn convert(&self, to: CoordinateSystem) -> Result<Self> {
        Ok(Self::with_system(
            self.southwest.convert(to)?,
            self.northeast.convert(to)?,
            to,
        ))
    }

    /// Returns the bounds in WGS84, see [`GeoPointBounds::convert`].
    #[inline]
    pub fn to_wgs84(&self) -> Result<Self> {
        self.convert(CoordinateSystem::WGS84)
    }

    /// Returns the bounds in GCJ02, see [`GeoPointBounds::convert`].
    #[inline]
    pub fn to_gcj02(&self) -> Result<Self> {
        self.convert(CoordinateSystem::GCJ02)
    }

    /// Returns the bounds in BD09, see [`GeoPointBounds::convert`].
    #[inline]
    pub fn to_bd09(&self) -> Result<Self> {
        self.convert(CoordinateSystem::BD09)
    }

    /// Returns the center of the corners by `calculator`.
    ///
    /// # Errors
    ///
    /// See [`GeoCalculator::center_of_polygon`].
    #[inline]
    pub fn center<C>(&self, calculator: &C) -> Result<GeoPoint>
    where
        C: GeoCalculator + ?Sized,
    {
        calculator.center_of_polygon(&self.corners())
    }

    /// Returns the area \[km²\] of the corners by `calculator`.
    ///
    /// # Errors
    ///
    /// See [`GeoCalculator::area`].
    ///
    /// # Example
    ///
    /// ```
    /// # use geocoord::*;
    /// # fn main() -> Result<()> {
    /// let bounds = GeoPointBounds::new(GeoPoint::wgs84(0.0, 0.0), GeoPoint::wgs84(1.0, 1.0));
    ///
    /// let area = bounds.area(&Vincenty)?;
    /// assert!((area - 12_309.0).abs() < 123.0);
    /// # Ok(())}
    /// ```
    #[inline]
    pub fn area<C>(&self, calculator: &C) -> Result<f64>
    where
        C: GeoCalculator + ?Sized,
    {
        calculator.area(&self.corners())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Haversine;

    fn bounds() -> GeoPointBounds {
        GeoPointBounds::new(GeoPoint::wgs84(39.8, 116.3), GeoPoint::wgs84(40.0, 116.5))
    }

    #[test]
    fn test_new() {
        let sw = GeoPoint::new(0.0, 0.0, CoordinateSystem::BD09);
        let ne = GeoPoint::new(1.0, 1.0, CoordinateSystem::BD09);

        let actual = GeoPointBounds::new(sw, ne);
        assert_eq!(actual.southwest(), &sw);
        assert_eq!(actual.northeast(), &ne);
        assert_eq!(actual.system(), &CoordinateSystem::BD09);

        let actual = GeoPointBounds::with_system(sw, ne, CoordinateSystem::GCJ02);
        assert_eq!(actual.system(), &CoordinateSystem::GCJ02);
        assert!(actual
            .corners()
            .iter()
            .all(|p| p.system() == &CoordinateSystem::GCJ02));
    }

    #[test]
    fn test_contains() {
        let bounds = bounds();

        assert!(bounds.contains(&GeoPoint::wgs84(39.9, 116.4)));
        // boundary
        assert!(bounds.contains(&GeoPoint::wgs84(39.8, 116.3)));
        assert!(bounds.contains(&GeoPoint::wgs84(40.0, 116.5)));
        assert!(bounds.contains(&GeoPoint::wgs84(39.8, 116.5)));

        assert!(!bounds.contains(&GeoPoint::wgs84(39.7, 116.4)));
        assert!(!bounds.contains(&GeoPoint::wgs84(40.1, 116.4)));
        assert!(!bounds.contains(&GeoPoint::wgs84(39.9, 116.2)));
        assert!(!bounds.contains(&GeoPoint::wgs84(39.9, 116.6)));
        assert!(!bounds.contains(&GeoPoint::new(39.9, 116.4, CoordinateSystem::BD09)));
    }

    #[test]
    fn test_contains_all_any() {
        let bounds = bounds();
        let inside = GeoPoint::wgs84(39.9, 116.4);
        let outside = GeoPoint::wgs84(31.2, 121.5);

        assert!(bounds.contains_all(&[inside, inside]));
        assert!(!bounds.contains_all(&[inside, outside]));
        assert!(bounds.contains_all(&[]));

        assert!(bounds.contains_any(&[outside, inside]));
        assert!(!bounds.contains_any(&[outside]));
        assert!(!bounds.contains_any(&[]));
    }

    #[test]
    fn test_contains_bounds() {
        let bounds = bounds();

        let inner = GeoPointBounds::new(GeoPoint::wgs84(39.85, 116.35), GeoPoint::wgs84(39.95, 116.45));
        assert!(bounds.contains_bounds(&inner));
        assert!(bounds.contains_bounds(&bounds));
        assert!(!inner.contains_bounds(&bounds));

        let other = GeoPointBounds::with_system(
            *inner.southwest(),
            *inner.northeast(),
            CoordinateSystem::GCJ02,
        );
        assert!(!bounds.contains_bounds(&other));
    }

    #[test]
    fn test_intersects() {
        let bounds = bounds();

        let other = GeoPointBounds::new(GeoPoint::wgs84(39.9, 116.4), GeoPoint::wgs84(41.0, 117.0));
        assert!(bounds.intersects(&other));
        assert!(other.intersects(&bounds));

        let other = GeoPointBounds::new(GeoPoint::wgs84(40.1, 116.4), GeoPoint::wgs84(41.0, 117.0));
        assert!(!bounds.intersects(&other));

        let other = GeoPointBounds::new(GeoPoint::wgs84(39.9, 116.6), GeoPoint::wgs84(41.0, 117.0));
        assert!(!bounds.intersects(&other));

        let other = bounds.to_gcj02().unwrap();
        assert!(!bounds.intersects(&other));
    }

    #[test]
    fn test_to_collection() {
        let actual = bounds().to_collection();

        assert_eq!(actual.system(), &CoordinateSystem::WGS84);
        assert_eq!(
            actual.as_slice(),
            &[
                GeoPoint::wgs84(39.8, 116.3),
                GeoPoint::wgs84(39.8, 116.5),
                GeoPoint::wgs84(40.0, 116.5),
                GeoPoint::wgs84(40.0, 116.3),
            ]
        );
    }

    #[test]
    fn test_convert() {
        let bounds = bounds();

        let actual = bounds.to_bd09().unwrap();
        assert_eq!(actual.system(), &CoordinateSystem::BD09);
        assert_eq!(actual.southwest(), &bounds.southwest().to_bd09().unwrap());
        assert_eq!(actual.northeast(), &bounds.northeast().to_bd09().unwrap());

        assert_eq!(bounds.to_wgs84().unwrap(), bounds);
        assert!(bounds.convert(CoordinateSystem::Common).is_err());
    }

    #[test]
    fn test_center() {
        let bounds = GeoPointBounds::new(GeoPoint::wgs84(-1.0, -1.0), GeoPoint::wgs84(1.0, 1.0));
        assert_eq!(bounds.center(&Haversine).unwrap(), GeoPoint::wgs84(0.0, 0.0));

        let actual = self::bounds().center(&Haversine).unwrap();
        assert!(self::bounds().contains(&actual));
    }

    #[test]
    fn test_display() {
        let bounds = GeoPointBounds::new(GeoPoint::wgs84(0.0, 0.0), GeoPoint::wgs84(1.0, 1.0));
        assert_eq!(
            bounds.to_string(),
            r#"GeoPointBounds(southwest: Latitude: 0.000000 (0°0'0"), Longitude: 0.000000 (0°0'0"), Type: wgs84, northeast: Latitude: 1.000000 (1°0'0"), Longitude: 1.000000 (1°0'0"), Type: wgs84, type: wgs84)"#
        );
    }

    #[cfg(feature = "serde")]
    mod test_serde {
        use super::*;

        #[test]
        fn test_json() {
            let bounds = GeoPointBounds::new(
                GeoPoint::new(0.0, 1.0, CoordinateSystem::GCJ02),
                GeoPoint::new(2.0, 3.0, CoordinateSystem::GCJ02),
            );

            let json = serde_json::to_string(&bounds).unwrap();
            assert_eq!(
                json,
                r#"{"sw":{"latitude":0.0,"longitude":1.0,"type":"gcj02"},"ne":{"latitude":2.0,"longitude":3.0,"type":"gcj02"}}"#
            );

            let actual: GeoPointBounds = serde_json::from_str(&json).unwrap();
            assert_eq!(actual, bounds);
            assert_eq!(actual.system(), &CoordinateSystem::GCJ02);
        }
    }
}
