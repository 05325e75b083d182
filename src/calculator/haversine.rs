use std::f64::consts::PI;

use crate::calculator::{require_polygon, require_same_system, GeoCalculator};
use crate::utils::{normalize_bearing, normalize_longitude};
use crate::{GeoPoint, Result};

/// The calculator on the sphere by the haversine formula.
///
/// This is closed-form and fast,
/// the error from the ellipsoid is about 0.5% at most.
///
/// # Example
///
/// ```
/// # use geocoord::*;
/// # fn main() -> Result<()> {
/// let a = GeoPoint::wgs84(0.0, 0.0);
/// let b = GeoPoint::wgs84(0.0, 1.0);
///
/// let distance = Haversine.distance(&a, &b)?;
/// assert!((distance - 111_194.93).abs() < 0.01);
/// assert_eq!(Haversine.bearing(&a, &b)?, 90.0);
/// # Ok(())}
/// ```
#[derive(Debug, Default, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Haversine;

impl Haversine {
    /// The mean radius \[m\] of the Earth.
    pub const EARTH_RADIUS: f64 = 6_371_000.0;
    /// The mean radius \[km\] of the Earth, for area.
    pub const EARTH_RADIUS_KM: f64 = 6_371.0;

    /// Returns the central angle \[rad\] between `a` and `b`.
    #[inline]
    fn central_angle(a: &GeoPoint, b: &GeoPoint) -> f64 {
        let phi1 = a.latitude.to_radians();
        let phi2 = b.latitude.to_radians();
        let d_phi = (b.latitude - a.latitude).to_radians();
        let d_lambda = (b.longitude - a.longitude).to_radians();

        let s_phi = (d_phi / 2.0).sin();
        let s_lambda = (d_lambda / 2.0).sin();
        let h = mul_add!(
            phi1.cos() * phi2.cos(),
            s_lambda * s_lambda,
            s_phi * s_phi
        );

        2.0 * h.sqrt().atan2((1.0 - h).sqrt())
    }

    /// Returns the signed spherical excess \[rad\] of the edge to the equator.
    #[inline]
    fn excess(a: &GeoPoint, b: &GeoPoint) -> f64 {
        let mut d_lambda = (b.longitude - a.longitude).to_radians();
        // across the antimeridian
        if d_lambda > PI {
            d_lambda -= 2.0 * PI;
        } else if d_lambda < -PI {
            d_lambda += 2.0 * PI;
        }

        let t1 = (a.latitude.to_radians() / 2.0).tan();
        let t2 = (b.latitude.to_radians() / 2.0).tan();

        2.0 * ((d_lambda / 2.0).tan() * (t1 + t2)).atan2(mul_add!(t1, t2, 1.0))
    }
}

impl GeoCalculator for Haversine {
    fn distance(&self, a: &GeoPoint, b: &GeoPoint) -> Result<f64> {
        require_same_system(a, b)?;
        Ok(Self::EARTH_RADIUS * Self::central_angle(a, b))
    }

    fn bearing(&self, from: &GeoPoint, to: &GeoPoint) -> Result<f64> {
        require_same_system(from, to)?;

        if from.latitude == to.latitude && from.longitude == to.longitude {
            return Ok(0.0);
        }

        let (sin_phi1, cos_phi1) = from.latitude.to_radians().sin_cos();
        let (sin_phi2, cos_phi2) = to.latitude.to_radians().sin_cos();
        let (sin_d_lambda, cos_d_lambda) = (to.longitude - from.longitude).to_radians().sin_cos();

        let y = sin_d_lambda * cos_phi2;
        let x = cos_phi1 * sin_phi2 - sin_phi1 * cos_phi2 * cos_d_lambda;

        Ok(normalize_bearing(y.atan2(x).to_degrees()))
    }

    fn offset(&self, point: &GeoPoint, distance: f64, bearing: f64) -> Result<GeoPoint> {
        let delta = distance / Self::EARTH_RADIUS;
        let (sin_delta, cos_delta) = delta.sin_cos();
        let (sin_theta, cos_theta) = bearing.to_radians().sin_cos();
        let (sin_phi1, cos_phi1) = point.latitude.to_radians().sin_cos();

        let sin_phi2 = mul_add!(sin_phi1, cos_delta, cos_phi1 * sin_delta * cos_theta);
        let phi2 = sin_phi2.asin();
        let d_lambda =
            (sin_theta * sin_delta * cos_phi1).atan2(cos_delta - sin_phi1 * sin_phi2);

        Ok(GeoPoint::new(
            phi2.to_degrees(),
            normalize_longitude(point.longitude + d_lambda.to_degrees()),
            point.system,
        ))
    }

    fn area(&self, points: &[GeoPoint]) -> Result<f64> {
        require_polygon(points, 3)?;

        let excess: f64 = points
            .iter()
            .zip(points.iter().cycle().skip(1))
            .map(|(a, b)| Self::excess(a, b))
            .sum();

        Ok(excess.abs() * Self::EARTH_RADIUS_KM * Self::EARTH_RADIUS_KM)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::ErrorKind;
    use crate::CoordinateSystem;

    macro_rules! assert_close {
        ($a:expr, $e:expr, $tol:expr) => {
            let (a, e): (f64, f64) = ($a, $e);
            assert!((a - e).abs() < $tol, "left: {a}, right: {e}");
        };
    }

    const BEIJING: GeoPoint = GeoPoint::wgs84(39.9042, 116.4074);
    const SHANGHAI: GeoPoint = GeoPoint::wgs84(31.2304, 121.4737);

    mod test_distance {
        use super::*;

        #[test]
        fn test_beijing_shanghai() {
            let actual = Haversine.distance(&BEIJING, &SHANGHAI).unwrap();
            assert_close!(actual, 1_067_310.17, 0.01);
        }

        #[test]
        fn test_symmetry() {
            for (a, b) in [
                (BEIJING, SHANGHAI),
                (GeoPoint::wgs84(-33.8688, 151.2093), GeoPoint::wgs84(51.5074, -0.1278)),
                (GeoPoint::wgs84(89.0, 0.0), GeoPoint::wgs84(-89.0, 180.0)),
            ] {
                assert_close!(
                    Haversine.distance(&a, &b).unwrap(),
                    Haversine.distance(&b, &a).unwrap(),
                    1e-6
                );
            }
        }

        #[test]
        fn test_coincident() {
            assert_eq!(Haversine.distance(&BEIJING, &BEIJING).unwrap(), 0.0);
        }

        #[test]
        fn test_antipodal() {
            let actual = Haversine
                .distance(&GeoPoint::wgs84(0.0, 0.0), &GeoPoint::wgs84(0.0, 180.0))
                .unwrap();
            assert_close!(actual, PI * Haversine::EARTH_RADIUS, 1e-6);
        }

        #[test]
        fn test_mismatched() {
            let other = GeoPoint::new(31.2304, 121.4737, CoordinateSystem::GCJ02);

            let err = Haversine.distance(&BEIJING, &other).unwrap_err();
            assert_eq!(
                err.kind(),
                &ErrorKind::MismatchedSystem {
                    expected: CoordinateSystem::WGS84,
                    found: CoordinateSystem::GCJ02
                }
            );
        }
    }

    mod test_bearing {
        use super::*;

        #[test]
        fn test_cardinal() {
            let origin = GeoPoint::wgs84(0.0, 0.0);

            for (e, lat, lon) in [
                (0.0, 1.0, 0.0),
                (90.0, 0.0, 1.0),
                (180.0, -1.0, 0.0),
                (270.0, 0.0, -1.0),
            ] {
                let actual = Haversine
                    .bearing(&origin, &GeoPoint::wgs84(lat, lon))
                    .unwrap();
                assert_close!(actual, e, 1e-9);
            }
        }

        #[test]
        fn test_range() {
            let actual = Haversine.bearing(&BEIJING, &SHANGHAI).unwrap();
            assert!((0.0..360.0).contains(&actual));
            assert_close!(actual, 153.07, 0.01);

            let actual = Haversine.bearing(&SHANGHAI, &BEIJING).unwrap();
            assert!((0.0..360.0).contains(&actual));
            assert_close!(actual, 336.03, 0.01);
        }

        #[test]
        fn test_coincident() {
            assert_eq!(Haversine.bearing(&BEIJING, &BEIJING).unwrap(), 0.0);
        }

        #[test]
        fn test_mismatched() {
            let other = GeoPoint::new(31.2304, 121.4737, CoordinateSystem::BD09);
            assert!(Haversine.bearing(&BEIJING, &other).is_err());
        }
    }

    mod test_offset {
        use super::*;

        #[test]
        fn test_consistency() {
            for (point, distance, bearing) in [
                (BEIJING, 10_000.0, 0.0),
                (BEIJING, 250_000.0, 45.0),
                (SHANGHAI, 1_000_000.0, 200.0),
                (GeoPoint::wgs84(-33.8688, 151.2093), 5_000.0, 315.0),
            ] {
                let result = Haversine.offset(&point, distance, bearing).unwrap();

                let actual = Haversine.distance(&point, &result).unwrap();
                assert_close!(actual, distance, distance * 1e-9);

                let actual = Haversine.bearing(&point, &result).unwrap();
                assert_close!(actual, bearing, 1e-6);
            }
        }

        #[test]
        fn test_zero() {
            let actual = Haversine.offset(&BEIJING, 0.0, 123.0).unwrap();
            assert_eq!(actual, BEIJING);
        }

        #[test]
        fn test_antimeridian() {
            let point = GeoPoint::new(0.0, 179.5, CoordinateSystem::GCJ02);

            let actual = Haversine.offset(&point, 111_194.93, 90.0).unwrap();
            assert_eq!(actual.system(), &CoordinateSystem::GCJ02);
            assert_close!(*actual.longitude(), -179.5, 1e-6);
        }
    }

    mod test_area {
        use super::*;

        #[test]
        fn test_square() {
            let points = [
                GeoPoint::wgs84(0.0, 0.0),
                GeoPoint::wgs84(0.0, 1.0),
                GeoPoint::wgs84(1.0, 1.0),
                GeoPoint::wgs84(1.0, 0.0),
            ];

            // the northern edge is a great circle, not the parallel of 12,363.68 km²
            let expected = 12_363.998;
            assert_close!(Haversine.area(&points).unwrap(), expected, 1e-2);

            // orientation does not matter
            let mut reversed = points;
            reversed.reverse();
            assert_close!(Haversine.area(&reversed).unwrap(), expected, 1e-2);
        }

        #[test]
        fn test_antimeridian() {
            let points = [
                GeoPoint::wgs84(0.0, 179.5),
                GeoPoint::wgs84(0.0, -179.5),
                GeoPoint::wgs84(1.0, -179.5),
                GeoPoint::wgs84(1.0, 179.5),
            ];
            let square = [
                GeoPoint::wgs84(0.0, 0.0),
                GeoPoint::wgs84(0.0, 1.0),
                GeoPoint::wgs84(1.0, 1.0),
                GeoPoint::wgs84(1.0, 0.0),
            ];

            assert_close!(
                Haversine.area(&points).unwrap(),
                Haversine.area(&square).unwrap(),
                1e-6
            );
        }

        #[test]
        fn test_degenerate() {
            let points = [
                GeoPoint::wgs84(0.0, 0.0),
                GeoPoint::wgs84(1.0, 0.0),
                GeoPoint::wgs84(2.0, 0.0),
            ];
            assert_eq!(Haversine.area(&points).unwrap(), 0.0);
        }

        #[test]
        fn test_not_enough() {
            let err = Haversine.area(&[BEIJING, SHANGHAI]).unwrap_err();
            assert!(err.is_invalid_argument());
            assert_eq!(
                err.kind(),
                &ErrorKind::NotEnoughPoints {
                    required: 3,
                    found: 2
                }
            );
        }

        #[test]
        fn test_mismatched() {
            let points = [
                BEIJING,
                SHANGHAI,
                GeoPoint::new(22.5431, 114.0579, CoordinateSystem::GCJ02),
            ];
            assert!(Haversine.area(&points).is_err());
        }
    }
}
