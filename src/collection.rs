//! Provides the ordered point collection.
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::calculator::GeoCalculator;
use crate::{CoordinateSystem, Error, GeoPoint, GeoPointBounds, Result};

/// Represents an ordered list of [`GeoPoint`] with its coordinate system.
///
/// The system tags the points pushed by [`GeoPointCollection::push_lat_lon`],
/// the points pushed directly are not checked.
///
/// The mutating methods are not synchronized,
/// wrap it by a lock to share it between threads.
///
/// # Example
///
/// ```
/// # use geocoord::*;
/// # fn main() -> Result<()> {
/// let mut collection = GeoPointCollection::new(CoordinateSystem::WGS84);
/// collection.push_lat_lon(39.9042, 116.4074);
/// collection.push_lat_lon(31.2304, 121.4737);
/// collection.push(GeoPoint::wgs84(22.5431, 114.0579));
/// assert_eq!(collection.len(), 3);
///
/// let bounds = collection.to_bounds()?;
/// assert_eq!(bounds.southwest(), &GeoPoint::wgs84(22.5431, 114.0579));
/// assert_eq!(bounds.northeast(), &GeoPoint::wgs84(39.9042, 121.4737));
///
/// let converted = collection.to_gcj02()?;
/// assert_eq!(converted.system(), &CoordinateSystem::GCJ02);
/// assert_eq!(converted[0], collection[0].to_gcj02()?);
/// # Ok(())}
/// ```
#[derive(Debug, PartialEq, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeoPointCollection {
    pub(crate) points: Vec<GeoPoint>,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub(crate) system: CoordinateSystem,
}

impl GeoPointCollection {
    /// Makes an empty [`GeoPointCollection`] in `system`.
    #[inline]
    #[must_use]
    pub const fn new(system: CoordinateSystem) -> Self {
        Self {
            points: Vec::new(),
            system,
        }
    }

    /// Makes a [`GeoPointCollection`] in the system of the first point,
    /// or WGS84 when `points` is empty.
    #[inline]
    #[must_use]
    pub fn from_points(points: Vec<GeoPoint>) -> Self {
        let system = points.first().map(|p| p.system).unwrap_or_default();
        Self { points, system }
    }

    /// Returns the coordinate system.
    #[inline]
    #[must_use]
    pub const fn system(&self) -> &CoordinateSystem {
        &self.system
    }

    /// Appends `point`.
    #[inline]
    pub fn push(&mut self, point: GeoPoint) {
        self.points.push(point);
    }

    /// Appends the point in the system of `self`.
    #[inline]
    pub fn push_lat_lon(&mut self, latitude: f64, longitude: f64) {
        self.push(GeoPoint::new(latitude, longitude, self.system));
    }

    /// Inserts `point` at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    #[inline]
    pub fn insert(&mut self, index: usize, point: GeoPoint) {
        self.points.insert(index, point);
    }

    /// Returns the point at `index`.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&GeoPoint> {
        self.points.get(index)
    }

    /// Replaces the point at `index` and returns the old one.
    ///
    /// Returns [`None`] and does nothing if `index` is out of range.
    #[inline]
    pub fn set(&mut self, index: usize, point: GeoPoint) -> Option<GeoPoint> {
        self.points
            .get_mut(index)
            .map(|p| std::mem::replace(p, point))
    }

    /// Returns the first point.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&GeoPoint> {
        self.points.first()
    }

    /// Returns the last point.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&GeoPoint> {
        self.points.last()
    }

    /// Removes the first point and returns it.
    #[inline]
    pub fn pop_first(&mut self) -> Option<GeoPoint> {
        self.remove(0)
    }

    /// Removes the last point and returns it.
    #[inline]
    pub fn pop_last(&mut self) -> Option<GeoPoint> {
        self.points.pop()
    }

    /// Removes the point at `index` and returns it.
    ///
    /// Returns [`None`] if `index` is out of range.
    #[inline]
    pub fn remove(&mut self, index: usize) -> Option<GeoPoint> {
        if index < self.points.len() {
            Some(self.points.remove(index))
        } else {
            None
        }
    }

    /// Removes the first point equal to `point`,
    /// returns `true` if removed.
    pub fn remove_point(&mut self, point: &GeoPoint) -> bool {
        match self.index_of(point) {
            Some(index) => {
                self.points.remove(index);
                true
            }
            None => false,
        }
    }

    /// Removes all the points equal to any of `points`,
    /// returns `true` if any removed.
    pub fn retain_not_in(&mut self, points: &[GeoPoint]) -> bool {
        let len = self.points.len();
        self.points.retain(|p| !points.contains(p));
        len != self.points.len()
    }

    /// Returns `true` if `self` has the point equal to `point`.
    #[inline]
    #[must_use]
    pub fn contains(&self, point: &GeoPoint) -> bool {
        self.points.contains(point)
    }

    /// Returns `true` if `self` has all of `points`.
    #[inline]
    #[must_use]
    pub fn contains_all(&self, points: &[GeoPoint]) -> bool {
        points.iter().all(|p| self.contains(p))
    }

    /// Returns the index of the first point equal to `point`.
    #[inline]
    #[must_use]
    pub fn index_of(&self, point: &GeoPoint) -> Option<usize> {
        self.points.iter().position(|p| p == point)
    }

    /// Returns the index of the last point equal to `point`.
    #[inline]
    #[must_use]
    pub fn last_index_of(&self, point: &GeoPoint) -> Option<usize> {
        self.points.iter().rposition(|p| p == point)
    }

    /// Returns the number of the points.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if `self` has no point.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Removes all the points.
    #[inline]
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Returns an iterator of the points.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, GeoPoint> {
        self.points.iter()
    }

    /// Returns the points as a slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[GeoPoint] {
        &self.points
    }

    /// Returns the collection in the reverse order.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            points: self.points.iter().rev().copied().collect(),
            system: self.system,
        }
    }

    /// Returns the bounding box of the points.
    ///
    /// The points in a system different from the first point's are skipped.
    ///
    /// # Errors
    ///
    /// If `self` is empty.
    ///
    /// # Example
    ///
    /// ```
    /// # use geocoord::*;
    /// # fn main() -> Result<()> {
    /// let collection = GeoPointCollection::from_points(vec![
    ///     GeoPoint::wgs84(1.0, 5.0),
    ///     GeoPoint::wgs84(3.0, 2.0),
    ///     GeoPoint::new(-50.0, 50.0, CoordinateSystem::GCJ02),
    /// ]);
    ///
    /// let bounds = collection.to_bounds()?;
    /// assert_eq!(bounds.southwest(), &GeoPoint::wgs84(1.0, 2.0));
    /// assert_eq!(bounds.northeast(), &GeoPoint::wgs84(3.0, 5.0));
    ///
    /// assert!(GeoPointCollection::default().to_bounds().is_err());
    /// # Ok(())}
    /// ```
    pub fn to_bounds(&self) -> Result<GeoPointBounds> {
        let first = self
            .points
            .first()
            .ok_or(Error::new_not_enough_points(1, 0))?;

        let (south, west, north, east) = self
            .points
            .iter()
            .filter(|p| p.system == first.system)
            .fold(
                (first.latitude, first.longitude, first.latitude, first.longitude),
                |(south, west, north, east), p| {
                    (
                        south.min(p.latitude),
                        west.min(p.longitude),
                        north.max(p.latitude),
                        east.max(p.longitude),
                    )
                },
            );

        Ok(GeoPointBounds::new(
            GeoPoint::new(south, west, first.system),
            GeoPoint::new(north, east, first.system),
        ))
    }

    /// Returns the collection whose points are converted into `to`.
    ///
    /// # Errors
    ///
    /// If the conversion of any point is not supported.
    pub fn convert(&self, to: CoordinateSystem) -> Result<Self> {
        Ok(Self {
            points: self
                .points
                .iter()
                .map(|p| p.convert(to))
                .collect::<Result<_>>()?,
            system: to,
        })
    }

    /// Returns the collection in WGS84, see [`GeoPointCollection::convert`].
    #[inline]
    pub fn to_wgs84(&self) -> Result<Self> {
        self.convert(CoordinateSystem::WGS84)
    }

    /// Returns the collection in GCJ02, see [`GeoPointCollection::convert`].
    #[inline]
    pub fn to_gcj02(&self) -> Result<Self> {
        self.convert(CoordinateSystem::GCJ02)
    }

    /// Returns the collection in BD09, see [`GeoPointCollection::convert`].
    #[inline]
    pub fn to_bd09(&self) -> Result<Self> {
        self.convert(CoordinateSystem::BD09)
    }

    /// Returns the center of the points by `calculator`.
    ///
    /// # Errors
    ///
    /// See [`GeoCalculator::center_of_polygon`].
    #[inline]
    pub fn center<C>(&self, calculator: &C) -> Result<GeoPoint>
    where
        C: GeoCalculator + ?Sized,
    {
        calculator.center_of_polygon(&self.points)
    }

    /// Returns the area \[km²\] of the polygon of the points by `calculator`.
    ///
    /// # Errors
    ///
    /// See [`GeoCalculator::area`].
    #[inline]
    pub fn area<C>(&self, calculator: &C) -> Result<f64>
    where
        C: GeoCalculator + ?Sized,
    {
        calculator.area(&self.points)
    }
}

impl Index<usize> for GeoPointCollection {
    type Output = GeoPoint;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}

impl Extend<GeoPoint> for GeoPointCollection {
    #[inline]
    fn extend<T: IntoIterator<Item = GeoPoint>>(&mut self, iter: T) {
        self.points.extend(iter);
    }
}

impl FromIterator<GeoPoint> for GeoPointCollection {
    /// Collects into the system of the first point, WGS84 when empty.
    #[inline]
    fn from_iter<T: IntoIterator<Item = GeoPoint>>(iter: T) -> Self {
        Self::from_points(iter.into_iter().collect())
    }
}

impl IntoIterator for GeoPointCollection {
    type Item = GeoPoint;
    type IntoIter = std::vec::IntoIter<GeoPoint>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl<'a> IntoIterator for &'a GeoPointCollection {
    type Item = &'a GeoPoint;
    type IntoIter = std::slice::Iter<'a, GeoPoint>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::ErrorKind;
    use crate::{Haversine, Vincenty};

    const A: GeoPoint = GeoPoint::wgs84(39.9042, 116.4074);
    const B: GeoPoint = GeoPoint::wgs84(31.2304, 121.4737);
    const C: GeoPoint = GeoPoint::wgs84(22.5431, 114.0579);

    mod test_construct {
        use super::*;

        #[test]
        fn test_new() {
            let actual = GeoPointCollection::new(CoordinateSystem::BD09);
            assert!(actual.is_empty());
            assert_eq!(actual.system(), &CoordinateSystem::BD09);

            let actual = GeoPointCollection::default();
            assert!(actual.is_empty());
            assert_eq!(actual.system(), &CoordinateSystem::WGS84);
        }

        #[test]
        fn test_from_points() {
            let point = GeoPoint::new(1.0, 2.0, CoordinateSystem::GCJ02);
            let actual = GeoPointCollection::from_points(vec![point, A]);
            assert_eq!(actual.system(), &CoordinateSystem::GCJ02);
            assert_eq!(actual.len(), 2);

            let actual = GeoPointCollection::from_points(vec![]);
            assert_eq!(actual.system(), &CoordinateSystem::WGS84);
        }

        #[test]
        fn test_from_iter() {
            let actual: GeoPointCollection = [A, B, C].into_iter().collect();
            assert_eq!(actual.as_slice(), &[A, B, C]);
            assert_eq!(actual.system(), &CoordinateSystem::WGS84);
        }
    }

    mod test_mutate {
        use super::*;

        #[test]
        fn test_push() {
            let mut actual = GeoPointCollection::new(CoordinateSystem::GCJ02);
            actual.push_lat_lon(1.0, 2.0);
            actual.push(A);
            actual.insert(0, B);
            actual.extend([C]);

            assert_eq!(
                actual.as_slice(),
                &[
                    B,
                    GeoPoint::new(1.0, 2.0, CoordinateSystem::GCJ02),
                    A,
                    C
                ]
            );
        }

        #[test]
        fn test_set() {
            let mut actual = GeoPointCollection::from_points(vec![A, B]);

            assert_eq!(actual.set(1, C), Some(B));
            assert_eq!(actual.as_slice(), &[A, C]);

            assert_eq!(actual.set(2, B), None);
            assert_eq!(actual.as_slice(), &[A, C]);
        }

        #[test]
        fn test_pop() {
            let mut actual = GeoPointCollection::from_points(vec![A, B, C]);

            assert_eq!(actual.pop_first(), Some(A));
            assert_eq!(actual.pop_last(), Some(C));
            assert_eq!(actual.as_slice(), &[B]);

            assert_eq!(actual.pop_last(), Some(B));
            assert_eq!(actual.pop_first(), None);
            assert_eq!(actual.pop_last(), None);
        }

        #[test]
        fn test_remove() {
            let mut actual = GeoPointCollection::from_points(vec![A, B, A, C]);

            assert_eq!(actual.remove(1), Some(B));
            assert_eq!(actual.remove(10), None);

            assert!(actual.remove_point(&A));
            assert_eq!(actual.as_slice(), &[A, C]);
            assert!(!actual.remove_point(&B));

            assert!(actual.retain_not_in(&[A, B]));
            assert_eq!(actual.as_slice(), &[C]);
            assert!(!actual.retain_not_in(&[A]));

            actual.clear();
            assert!(actual.is_empty());
        }
    }

    mod test_query {
        use super::*;

        #[test]
        fn test_access() {
            let actual = GeoPointCollection::from_points(vec![A, B, C]);

            assert_eq!(actual.get(1), Some(&B));
            assert_eq!(actual.get(3), None);
            assert_eq!(actual.first(), Some(&A));
            assert_eq!(actual.last(), Some(&C));
            assert_eq!(actual[2], C);

            let empty = GeoPointCollection::default();
            assert_eq!(empty.first(), None);
            assert_eq!(empty.last(), None);
        }

        #[test]
        fn test_search() {
            let actual = GeoPointCollection::from_points(vec![A, B, A]);

            assert!(actual.contains(&B));
            assert!(!actual.contains(&C));
            // 6 decimal places
            assert!(actual.contains(&GeoPoint::wgs84(39.90420001, 116.4074)));

            assert!(actual.contains_all(&[A, B]));
            assert!(!actual.contains_all(&[A, C]));

            assert_eq!(actual.index_of(&A), Some(0));
            assert_eq!(actual.last_index_of(&A), Some(2));
            assert_eq!(actual.index_of(&C), None);
            assert_eq!(actual.last_index_of(&C), None);
        }

        #[test]
        fn test_iter() {
            let actual = GeoPointCollection::from_points(vec![A, B]);

            assert_eq!(actual.iter().count(), 2);
            assert_eq!((&actual).into_iter().next(), Some(&A));
            assert_eq!(actual.into_iter().collect::<Vec<_>>(), vec![A, B]);
        }

        #[test]
        fn test_reversed() {
            let collection = GeoPointCollection::new(CoordinateSystem::BD09);
            assert!(collection.reversed().is_empty());

            let collection = GeoPointCollection::from_points(vec![A, B, C]);
            let actual = collection.reversed();
            assert_eq!(actual.as_slice(), &[C, B, A]);
            assert_eq!(collection.as_slice(), &[A, B, C]);
        }
    }

    mod test_geometry {
        use super::*;

        #[test]
        fn test_to_bounds() {
            let actual = GeoPointCollection::from_points(vec![A, B, C]).to_bounds().unwrap();
            assert_eq!(actual.southwest(), &GeoPoint::wgs84(22.5431, 114.0579));
            assert_eq!(actual.northeast(), &GeoPoint::wgs84(39.9042, 121.4737));
            assert_eq!(actual.system(), &CoordinateSystem::WGS84);

            let actual = GeoPointCollection::from_points(vec![A]).to_bounds().unwrap();
            assert_eq!(actual.southwest(), &A);
            assert_eq!(actual.northeast(), &A);

            let err = GeoPointCollection::new(CoordinateSystem::WGS84)
                .to_bounds()
                .unwrap_err();
            assert_eq!(
                err.kind(),
                &ErrorKind::NotEnoughPoints {
                    required: 1,
                    found: 0
                }
            );
        }

        #[test]
        fn test_to_bounds_skip_others() {
            let actual = GeoPointCollection::from_points(vec![
                GeoPoint::new(1.0, 1.0, CoordinateSystem::GCJ02),
                GeoPoint::new(80.0, 170.0, CoordinateSystem::BD09),
                GeoPoint::new(2.0, 3.0, CoordinateSystem::GCJ02),
            ])
            .to_bounds()
            .unwrap();

            assert_eq!(actual.system(), &CoordinateSystem::GCJ02);
            assert_eq!(actual.southwest(), &GeoPoint::new(1.0, 1.0, CoordinateSystem::GCJ02));
            assert_eq!(actual.northeast(), &GeoPoint::new(2.0, 3.0, CoordinateSystem::GCJ02));
        }

        #[test]
        fn test_convert() {
            let collection = GeoPointCollection::from_points(vec![A, B]);

            let actual = collection.to_bd09().unwrap();
            assert_eq!(actual.system(), &CoordinateSystem::BD09);
            assert_eq!(actual[0], A.to_bd09().unwrap());
            assert_eq!(actual[1], B.to_bd09().unwrap());

            assert_eq!(collection.to_wgs84().unwrap(), collection);

            let actual = GeoPointCollection::new(CoordinateSystem::WGS84).to_gcj02().unwrap();
            assert!(actual.is_empty());
            assert_eq!(actual.system(), &CoordinateSystem::GCJ02);

            assert!(collection.convert(CoordinateSystem::Common).is_err());
        }

        #[test]
        fn test_center_and_area() {
            let collection = GeoPointCollection::from_points(vec![
                GeoPoint::wgs84(0.0, 0.0),
                GeoPoint::wgs84(0.0, 1.0),
                GeoPoint::wgs84(1.0, 1.0),
                GeoPoint::wgs84(1.0, 0.0),
            ]);

            let actual = collection.center(&Haversine).unwrap();
            assert!((actual.latitude() - 0.5).abs() < 1e-3);
            assert!((actual.longitude() - 0.5).abs() < 1e-9);

            let actual = collection.area(&Vincenty).unwrap();
            assert!((actual - 12_309.0).abs() / 12_309.0 < 0.01);

            assert!(GeoPointCollection::default().center(&Haversine).is_err());
            assert!(GeoPointCollection::from_points(vec![A, B]).area(&Haversine).is_err());
        }
    }

    #[cfg(feature = "serde")]
    mod test_serde {
        use super::*;

        #[test]
        fn test_json() {
            let collection = GeoPointCollection::from_points(vec![GeoPoint::new(
                1.0,
                2.0,
                CoordinateSystem::BD09,
            )]);

            let json = serde_json::to_string(&collection).unwrap();
            assert_eq!(
                json,
                r#"{"points":[{"latitude":1.0,"longitude":2.0,"type":"bd09mc"}],"type":"bd09mc"}"#
            );

            let actual: GeoPointCollection = serde_json::from_str(&json).unwrap();
            assert_eq!(actual, collection);
        }
    }
}
