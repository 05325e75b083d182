//! Provides the geodetic calculators and the batch operations over them.
//!
//! A calculator implements [`GeoCalculator`],
//! [`Haversine`] on the sphere, [`Vincenty`] on the WGS84 ellipsoid,
//! and [`Fallback`] which retries the second when the first does not converge.
//!
//! The batch operations are free functions generic on the calculator.
//!
//! # Example
//!
//! ```
//! # use geocoord::*;
//! # use geocoord::calculator::*;
//! # fn main() -> Result<()> {
//! let points = [
//!     GeoPoint::wgs84(39.9042, 116.4074),
//!     GeoPoint::wgs84(31.2304, 121.4737),
//!     GeoPoint::wgs84(22.5431, 114.0579),
//! ];
//!
//! let spherical = total_distance(&Haversine, &points)?;
//! let ellipsoidal = total_distance(&Vincenty, &points)?;
//! assert!((spherical - ellipsoidal).abs() / ellipsoidal < 0.005);
//!
//! let pair = nearest_pair(&Fallback::default(), &points)?.unwrap();
//! assert_eq!(pair.from, points[0]);
//! assert_eq!(pair.to, points[1]);
//! # Ok(())}
//! ```
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::vector::Vector3D;
use crate::{Error, GeoPoint, Result};

#[doc(inline)]
pub use self::fallback::Fallback;
#[doc(inline)]
pub use self::haversine::Haversine;
#[doc(inline)]
pub use self::vincenty::Vincenty;

mod fallback;
mod haversine;
mod vincenty;

/// Fails when the systems of `a` and `b` differ.
#[inline]
pub(crate) fn require_same_system(a: &GeoPoint, b: &GeoPoint) -> Result<()> {
    if a.system == b.system {
        Ok(())
    } else {
        Err(Error::new_mismatched_system(a.system, b.system))
    }
}

/// Fails when `points` has less than `required` points or the systems of them differ.
#[inline]
pub(crate) fn require_polygon(points: &[GeoPoint], required: usize) -> Result<()> {
    if points.len() < required {
        return Err(Error::new_not_enough_points(required, points.len()));
    }

    points
        .iter()
        .skip(1)
        .try_for_each(|point| require_same_system(&points[0], point))
}

/// Represents a geodetic calculator.
///
/// All operations take degree for angle and meter for length,
/// and require the points share the coordinate system.
pub trait GeoCalculator {
    /// Returns the distance \[m\] between `a` and `b`.
    ///
    /// # Errors
    ///
    /// If the systems of `a` and `b` differ.
    fn distance(&self, a: &GeoPoint, b: &GeoPoint) -> Result<f64>;

    /// Returns the initial bearing \[deg\] in \[0, 360) from `from` to `to`.
    ///
    /// This returns 0 for the coincident points.
    ///
    /// # Errors
    ///
    /// If the systems of `from` and `to` differ.
    fn bearing(&self, from: &GeoPoint, to: &GeoPoint) -> Result<f64>;

    /// Returns the destination `distance` \[m\] away from `point`
    /// along the initial `bearing` \[deg\].
    ///
    /// # Errors
    ///
    /// If it fails to solve.
    fn offset(&self, point: &GeoPoint, distance: f64, bearing: f64) -> Result<GeoPoint>;

    /// Returns the area \[km²\] of the polygon `points`.
    ///
    /// The polygon closes implicitly, the last point connects to the first one.
    /// This returns 0 for the degenerate polygon.
    ///
    /// # Errors
    ///
    /// If `points` has less than 3 points or the systems of them differ.
    fn area(&self, points: &[GeoPoint]) -> Result<f64>;

    /// Returns the center of the points.
    ///
    /// This averages the directions on the unit sphere,
    /// which is safe across the antimeridian and close to the poles.
    ///
    /// # Errors
    ///
    /// If `points` is empty or the systems of them differ.
    fn center_of_polygon(&self, points: &[GeoPoint]) -> Result<GeoPoint> {
        require_polygon(points, 1)?;

        let sum = points
            .iter()
            .map(Vector3D::from_point)
            .fold(Vector3D::zero(), |acc, v| acc + v);

        Ok(sum.to_point(points[0].system))
    }

    /// Returns the shortest distance \[m\] from `p` to the great-circle segment from `a` to `b`.
    ///
    /// When the projection of `p` falls outside the segment,
    /// this returns the distance to the closer end.
    ///
    /// # Errors
    ///
    /// If the systems of the points differ.
    fn distance_to_segment(&self, a: &GeoPoint, b: &GeoPoint, p: &GeoPoint) -> Result<f64> {
        require_same_system(a, b)?;
        require_same_system(a, p)?;

        let va = Vector3D::from_point(a);
        let vb = Vector3D::from_point(b);
        let vp = Vector3D::from_point(p);

        let ab = vb - va;
        let ap = vp - va;
        let t = ap.dot(&ab);
        let len = ab.dot(&ab);

        if t <= 0.0 {
            return self.distance(a, p);
        } else if t >= len {
            return self.distance(b, p);
        }

        match (va + ab * (t / len)).normalize() {
            Some(nearest) => self.distance(p, &nearest.to_point(p.system)),
            None => self.distance(a, p),
        }
    }
}

/// Represents the distance between two points.
#[derive(Debug, PartialEq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PairDistance {
    pub from: GeoPoint,
    pub to: GeoPoint,
    /// The distance \[m\]
    pub distance: f64,
}

/// Returns the length \[m\] of the path along `points`.
///
/// This returns 0 for less than 2 points.
///
/// # Errors
///
/// If the systems of the consecutive points differ.
pub fn total_distance<C>(calculator: &C, points: &[GeoPoint]) -> Result<f64>
where
    C: GeoCalculator + ?Sized,
{
    points
        .windows(2)
        .try_fold(0.0, |acc, w| -> Result<f64> {
            Ok(acc + calculator.distance(&w[0], &w[1])?)
        })
}

/// Returns the area \[m²\] of the polygon `points`.
///
/// # Errors
///
/// See [`GeoCalculator::area`].
#[inline]
pub fn area_m2<C>(calculator: &C, points: &[GeoPoint]) -> Result<f64>
where
    C: GeoCalculator + ?Sized,
{
    Ok(calculator.area(points)? * 1_000_000.0)
}

/// Returns the distances of all the unordered pairs of `points`.
///
/// The pairs are ordered as `(0, 1), (0, 2), ..., (1, 2), ...`.
///
/// # Errors
///
/// If the systems of the points differ.
pub fn all_pairs_distances<C>(calculator: &C, points: &[GeoPoint]) -> Result<Vec<PairDistance>>
where
    C: GeoCalculator + ?Sized,
{
    let mut result = Vec::with_capacity(points.len() * points.len().saturating_sub(1) / 2);

    for (i, from) in points.iter().enumerate() {
        for to in &points[i + 1..] {
            result.push(PairDistance {
                from: *from,
                to: *to,
                distance: calculator.distance(from, to)?,
            });
        }
    }

    Ok(result)
}

/// Returns the closest pair of `points`, the earliest one on tie.
///
/// Returns [`None`] for less than 2 points.
///
/// # Errors
///
/// If the systems of the points differ.
pub fn nearest_pair<C>(calculator: &C, points: &[GeoPoint]) -> Result<Option<PairDistance>>
where
    C: GeoCalculator + ?Sized,
{
    Ok(all_pairs_distances(calculator, points)?
        .into_iter()
        .reduce(|acc, pair| if pair.distance < acc.distance { pair } else { acc }))
}

/// Returns the farthest pair of `points`, the earliest one on tie.
///
/// Returns [`None`] for less than 2 points.
///
/// # Errors
///
/// If the systems of the points differ.
pub fn farthest_pair<C>(calculator: &C, points: &[GeoPoint]) -> Result<Option<PairDistance>>
where
    C: GeoCalculator + ?Sized,
{
    Ok(all_pairs_distances(calculator, points)?
        .into_iter()
        .reduce(|acc, pair| if pair.distance > acc.distance { pair } else { acc }))
}

/// Returns `true` if `point` is within `radius` \[m\] from `center`, boundary included.
///
/// # Errors
///
/// If the systems of `center` and `point` differ.
pub fn point_in_circle<C>(
    calculator: &C,
    center: &GeoPoint,
    radius: f64,
    point: &GeoPoint,
) -> Result<bool>
where
    C: GeoCalculator + ?Sized,
{
    require_same_system(center, point)?;
    Ok(calculator.distance(center, point)? <= radius)
}

/// Returns [`point_in_circle`] for each of `points`.
///
/// # Errors
///
/// If the system of any point differs from `center`'s.
pub fn points_in_circle<C>(
    calculator: &C,
    center: &GeoPoint,
    radius: f64,
    points: &[GeoPoint],
) -> Result<Vec<bool>>
where
    C: GeoCalculator + ?Sized,
{
    points
        .iter()
        .map(|point| point_in_circle(calculator, center, radius, point))
        .collect()
}

/// Returns the distances \[m\] from `base` to each of `points`.
///
/// # Errors
///
/// If the system of any point differs from `base`'s.
pub fn batch_distance_from<C>(calculator: &C, base: &GeoPoint, points: &[GeoPoint]) -> Result<Vec<f64>>
where
    C: GeoCalculator + ?Sized,
{
    points
        .iter()
        .map(|point| calculator.distance(base, point))
        .collect()
}
