use std::ops::{Add, Mul, Sub};

use crate::{CoordinateSystem, GeoPoint};

/// Direction on the unit sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Vector3D {
    pub(crate) x: f64,
    pub(crate) y: f64,
    pub(crate) z: f64,
}

impl Vector3D {
    #[inline(always)]
    pub(crate) const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline(always)]
    pub(crate) const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Makes the unit vector of the position \[deg\].
    #[inline]
    pub(crate) fn from_lat_lon(latitude: f64, longitude: f64) -> Self {
        let (sin_lat, cos_lat) = latitude.to_radians().sin_cos();
        let (sin_lon, cos_lon) = longitude.to_radians().sin_cos();
        Self::new(cos_lat * cos_lon, cos_lat * sin_lon, sin_lat)
    }

    #[inline]
    pub(crate) fn from_point(point: &GeoPoint) -> Self {
        Self::from_lat_lon(point.latitude, point.longitude)
    }

    /// Returns the position \[deg\] the vector points to, `(latitude, longitude)`.
    ///
    /// The vector needs not to be unit.
    #[inline]
    pub(crate) fn to_lat_lon(self) -> (f64, f64) {
        let latitude = self.z.atan2(self.x.hypot(self.y));
        let longitude = self.y.atan2(self.x);
        (latitude.to_degrees(), longitude.to_degrees())
    }

    #[inline]
    pub(crate) fn to_point(self, system: CoordinateSystem) -> GeoPoint {
        let (latitude, longitude) = self.to_lat_lon();
        GeoPoint::new(latitude, longitude, system)
    }

    #[inline(always)]
    pub(crate) fn dot(&self, rhs: &Self) -> f64 {
        mul_add!(self.x, rhs.x, mul_add!(self.y, rhs.y, self.z * rhs.z))
    }

    #[inline(always)]
    pub(crate) fn norm(&self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Returns the unit vector, or [`None`] for the (almost) zero vector.
    #[inline]
    pub(crate) fn normalize(self) -> Option<Self> {
        let norm = self.norm();
        if norm < f64::EPSILON {
            None
        } else {
            Some(self * norm.recip())
        }
    }
}

impl Mul<f64> for Vector3D {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: f64) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

macro_rules! impl_bin_ops_to_vector {
    ($t:ident::$m:ident) => {
        impl $t<Vector3D> for Vector3D {
            type Output = Self;

            #[inline(always)]
            fn $m(self, rhs: Self) -> Self::Output {
                Self::new(
                    $t::$m(self.x, rhs.x),
                    $t::$m(self.y, rhs.y),
                    $t::$m(self.z, rhs.z),
                )
            }
        }

        impl $t<&Vector3D> for Vector3D {
            type Output = Self;

            #[inline(always)]
            fn $m(self, rhs: &Self) -> Self::Output {
                $t::$m(self, *rhs)
            }
        }
    };
}

impl_bin_ops_to_vector!(Add::add);
impl_bin_ops_to_vector!(Sub::sub);

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_from_lat_lon() {
        let v = Vector3D::from_lat_lon(0.0, 0.0);
        assert_eq!(v, Vector3D::new(1.0, 0.0, 0.0));

        let v = Vector3D::from_lat_lon(90.0, 0.0);
        assert!(v.x.abs() < 1e-15);
        assert!(v.y.abs() < 1e-15);
        assert_eq!(v.z, 1.0);

        let v = Vector3D::from_lat_lon(0.0, 90.0);
        assert!(v.x.abs() < 1e-15);
        assert_eq!(v.y, 1.0);
        assert_eq!(v.z, 0.0);
    }

    #[test]
    fn test_to_lat_lon() {
        for (lat, lon) in [(39.9042, 116.4074), (-33.8688, 151.2093), (10.0, -170.0)] {
            let (actual_lat, actual_lon) = Vector3D::from_lat_lon(lat, lon).to_lat_lon();
            assert!((actual_lat - lat).abs() < 1e-12);
            assert!((actual_lon - lon).abs() < 1e-12);
        }

        // scale does not matter
        let (lat, lon) = (Vector3D::from_lat_lon(12.0, 34.0) * 3.5).to_lat_lon();
        assert!((lat - 12.0).abs() < 1e-12);
        assert!((lon - 34.0).abs() < 1e-12);
    }

    #[test]
    fn test_ops() {
        let a = Vector3D::new(1.0, 2.0, 3.0);
        let b = Vector3D::new(4.0, 5.0, 6.0);

        assert_eq!(a + b, Vector3D::new(5.0, 7.0, 9.0));
        assert_eq!(b - &a, Vector3D::new(3.0, 3.0, 3.0));
        assert_eq!(a * 2.0, Vector3D::new(2.0, 4.0, 6.0));
        assert_eq!(a.dot(&b), 32.0);
        assert_eq!(Vector3D::new(3.0, 4.0, 0.0).norm(), 5.0);
    }

    #[test]
    fn test_normalize() {
        let v = Vector3D::new(0.0, 3.0, 4.0).normalize().unwrap();
        assert!((v.norm() - 1.0).abs() < 1e-15);
        assert!((v.y - 0.6).abs() < 1e-15);

        assert_eq!(Vector3D::zero().normalize(), None);
    }
}
