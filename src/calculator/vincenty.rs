use std::f64::consts::PI;

use tracing::warn;

use crate::calculator::{require_polygon, require_same_system, GeoCalculator};
use crate::utils::{normalize_bearing, normalize_longitude};
use crate::{CoordinateSystem, Error, GeoPoint, Result};

/// The calculator on the WGS84 ellipsoid by Vincenty's formulae.
///
/// The points are converted into WGS84 before the calculation,
/// hence [`CoordinateSystem::Common`] points are not supported.
///
/// The iteration is capped by [`Vincenty::MAX_ITERATION`],
/// it fails with [`ErrorKind::NotConvergent`](crate::error::ErrorKind::NotConvergent)
/// for the (nearly) antipodal points typically.
///
/// # Example
///
/// ```
/// # use geocoord::*;
/// # fn main() -> Result<()> {
/// let beijing = GeoPoint::wgs84(39.9042, 116.4074);
/// let shanghai = GeoPoint::wgs84(31.2304, 121.4737);
///
/// let distance = Vincenty.distance(&beijing, &shanghai)?;
/// assert!((distance - 1_065_846.49).abs() < 0.01);
///
/// let bearing = Vincenty.bearing(&beijing, &shanghai)?;
/// assert!((bearing - 152.97).abs() < 0.01);
///
/// let result = Vincenty.offset(&beijing, distance, bearing)?;
/// assert_eq!(result, shanghai);
/// # Ok(())}
/// ```
#[derive(Debug, Default, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Vincenty;

/// The solution of the inverse problem.
#[derive(Debug, Clone, Copy)]
struct Inverse {
    /// The distance \[m\]
    distance: f64,
    /// The azimuth \[rad\] at the start point
    initial: f64,
    /// The azimuth \[rad\] at the end point
    terminal: f64,
}

/// Returns `(sin U, cos U)` of the reduced latitude of `latitude` \[deg\].
#[inline]
fn reduced_latitude(latitude: f64) -> (f64, f64) {
    let tan_u = (1.0 - Vincenty::FLATTENING) * latitude.to_radians().tan();
    let cos_u = 1.0 / mul_add!(tan_u, tan_u, 1.0).sqrt();
    (tan_u * cos_u, cos_u)
}

/// Returns the coefficients `(A, B)` of the series on `cos²α`.
#[inline]
fn series(cos_sq_alpha: f64) -> (f64, f64) {
    const A: f64 = Vincenty::SEMI_MAJOR_AXIS;
    const B: f64 = Vincenty::SEMI_MINOR_AXIS;

    let u_sq = cos_sq_alpha * (A * A - B * B) / (B * B);
    (
        1.0 + u_sq / 16384.0 * horner!(u_sq; -175.0, 320.0, -768.0, 4096.0),
        u_sq / 1024.0 * horner!(u_sq; -47.0, 74.0, -128.0, 256.0),
    )
}

/// Returns `Δσ`.
#[inline]
fn delta_sigma(b: f64, sin_sigma: f64, cos_sigma: f64, cos_2sigma_m: f64) -> f64 {
    let cos_sq_2sigma_m = cos_2sigma_m * cos_2sigma_m;
    b * sin_sigma
        * (cos_2sigma_m
            + b / 4.0
                * (cos_sigma * mul_add!(2.0, cos_sq_2sigma_m, -1.0)
                    - b / 6.0
                        * cos_2sigma_m
                        * mul_add!(4.0, sin_sigma * sin_sigma, -3.0)
                        * mul_add!(4.0, cos_sq_2sigma_m, -3.0)))
}

/// Returns `C`.
#[inline]
fn c(cos_sq_alpha: f64) -> f64 {
    const F: f64 = Vincenty::FLATTENING;
    F / 16.0 * cos_sq_alpha * (4.0 + F * mul_add!(-3.0, cos_sq_alpha, 4.0))
}

impl Vincenty {
    /// The semi-major axis \[m\] of WGS84.
    pub const SEMI_MAJOR_AXIS: f64 = 6_378_137.0;
    /// The semi-minor axis \[m\] of WGS84.
    pub const SEMI_MINOR_AXIS: f64 = 6_356_752.3142;
    /// The flattening of WGS84.
    pub const FLATTENING: f64 = 1.0 / 298.257223563;
    /// The tolerance \[rad\] of the iteration.
    pub const EPSILON: f64 = 1e-12;
    /// The tolerance \[rad\] of the iteration for area.
    pub const AREA_EPSILON: f64 = 1e-10;
    /// The iteration cap.
    pub const MAX_ITERATION: usize = 1000;

    #[inline]
    fn to_wgs84(point: &GeoPoint) -> Result<GeoPoint> {
        point.convert(CoordinateSystem::WGS84)
    }

    /// Solves the inverse problem on the WGS84 points.
    fn inverse(a: &GeoPoint, b: &GeoPoint, epsilon: f64) -> Result<Inverse> {
        const F: f64 = Vincenty::FLATTENING;

        // across the antimeridian
        let l = normalize_angle((b.longitude - a.longitude).to_radians());
        let (sin_u1, cos_u1) = reduced_latitude(a.latitude);
        let (sin_u2, cos_u2) = reduced_latitude(b.latitude);

        let mut lambda = l;
        for iteration in 1..=Self::MAX_ITERATION {
            let (sin_lambda, cos_lambda) = lambda.sin_cos();

            let p = cos_u2 * sin_lambda;
            let q = cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda;
            let sin_sq_sigma = mul_add!(p, p, q * q);
            if sin_sq_sigma == 0.0 {
                return Ok(Inverse {
                    distance: 0.0,
                    initial: 0.0,
                    terminal: 0.0,
                });
            }

            let sin_sigma = sin_sq_sigma.sqrt();
            let cos_sigma = mul_add!(sin_u1, sin_u2, cos_u1 * cos_u2 * cos_lambda);
            let sigma = sin_sigma.atan2(cos_sigma);

            let sin_alpha = cos_u1 * cos_u2 * sin_lambda / sin_sigma;
            let cos_sq_alpha = 1.0 - sin_alpha * sin_alpha;
            // on the equator
            let cos_2sigma_m = if cos_sq_alpha == 0.0 {
                0.0
            } else {
                cos_sigma - 2.0 * sin_u1 * sin_u2 / cos_sq_alpha
            };

            let c = c(cos_sq_alpha);
            let prev = lambda;
            lambda = l + (1.0 - c)
                * F
                * sin_alpha
                * (sigma
                    + c * sin_sigma
                        * (cos_2sigma_m
                            + c * cos_sigma * mul_add!(2.0 * cos_2sigma_m, cos_2sigma_m, -1.0)));

            if lambda.abs() > PI {
                return Err(Error::new_not_convergent(iteration, epsilon));
            }

            if (lambda - prev).abs() <= epsilon {
                let (big_a, big_b) = series(cos_sq_alpha);
                let delta_sigma = delta_sigma(big_b, sin_sigma, cos_sigma, cos_2sigma_m);

                let (sin_lambda, cos_lambda) = lambda.sin_cos();
                return Ok(Inverse {
                    distance: Self::SEMI_MINOR_AXIS * big_a * (sigma - delta_sigma),
                    initial: (cos_u2 * sin_lambda)
                        .atan2(cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda),
                    terminal: (cos_u1 * sin_lambda)
                        .atan2(-sin_u1 * cos_u2 + cos_u1 * sin_u2 * cos_lambda),
                });
            }
        }

        warn!(
            iteration = Self::MAX_ITERATION,
            criteria = epsilon,
            "inverse problem did not converge"
        );
        Err(Error::new_not_convergent(Self::MAX_ITERATION, epsilon))
    }

    /// Solves the direct problem on the WGS84 point,
    /// returns the destination in WGS84.
    fn direct(point: &GeoPoint, distance: f64, bearing: f64) -> Result<GeoPoint> {
        const F: f64 = Vincenty::FLATTENING;
        const B: f64 = Vincenty::SEMI_MINOR_AXIS;

        let (sin_alpha1, cos_alpha1) = bearing.to_radians().sin_cos();
        let (sin_u1, cos_u1) = reduced_latitude(point.latitude);

        let sigma1 = (sin_u1 / cos_u1).atan2(cos_alpha1);
        let sin_alpha = cos_u1 * sin_alpha1;
        let cos_sq_alpha = 1.0 - sin_alpha * sin_alpha;
        let (big_a, big_b) = series(cos_sq_alpha);

        let first = distance / (B * big_a);
        let mut sigma = first;
        let mut converged = false;
        for _ in 0..Self::MAX_ITERATION {
            let cos_2sigma_m = (2.0 * sigma1 + sigma).cos();
            let (sin_sigma, cos_sigma) = sigma.sin_cos();

            let prev = sigma;
            sigma = first + delta_sigma(big_b, sin_sigma, cos_sigma, cos_2sigma_m);

            if (sigma - prev).abs() <= Self::EPSILON {
                converged = true;
                break;
            }
        }

        if !converged {
            warn!(
                iteration = Self::MAX_ITERATION,
                criteria = Self::EPSILON,
                "direct problem did not converge"
            );
            return Err(Error::new_not_convergent(Self::MAX_ITERATION, Self::EPSILON));
        }

        let cos_2sigma_m = (2.0 * sigma1 + sigma).cos();
        let (sin_sigma, cos_sigma) = sigma.sin_cos();

        let x = sin_u1 * sin_sigma - cos_u1 * cos_sigma * cos_alpha1;
        let phi2 = mul_add!(sin_u1, cos_sigma, cos_u1 * sin_sigma * cos_alpha1)
            .atan2((1.0 - F) * mul_add!(sin_alpha, sin_alpha, x * x).sqrt());
        let lambda = (sin_sigma * sin_alpha1)
            .atan2(cos_u1 * cos_sigma - sin_u1 * sin_sigma * cos_alpha1);

        let c = c(cos_sq_alpha);
        let l = lambda
            - (1.0 - c)
                * F
                * sin_alpha
                * (sigma
                    + c * sin_sigma
                        * (cos_2sigma_m
                            + c * cos_sigma * mul_add!(2.0 * cos_2sigma_m, cos_2sigma_m, -1.0)));

        Ok(GeoPoint::new(
            phi2.to_degrees(),
            normalize_longitude(point.longitude + l.to_degrees()),
            CoordinateSystem::WGS84,
        ))
    }

    /// Returns the Gaussian curvature radius squared \[m²\] at `latitude` \[deg\], `M N`.
    #[inline]
    fn gaussian_radius_sq(latitude: f64) -> f64 {
        const A: f64 = Vincenty::SEMI_MAJOR_AXIS;
        const E2: f64 = Vincenty::FLATTENING * (2.0 - Vincenty::FLATTENING);

        let sin_phi = latitude.to_radians().sin();
        let w = 1.0 - E2 * sin_phi * sin_phi;
        A * A * (1.0 - E2) / (w * w)
    }
}

/// Returns `t` in (-π, π].
#[inline]
fn normalize_angle(t: f64) -> f64 {
    let t = (t + PI).rem_euclid(2.0 * PI) - PI;
    if t == -PI {
        PI
    } else {
        t
    }
}

impl GeoCalculator for Vincenty {
    fn distance(&self, a: &GeoPoint, b: &GeoPoint) -> Result<f64> {
        require_same_system(a, b)?;

        let a = Self::to_wgs84(a)?;
        let b = Self::to_wgs84(b)?;
        Ok(Self::inverse(&a, &b, Self::EPSILON)?.distance)
    }

    fn bearing(&self, from: &GeoPoint, to: &GeoPoint) -> Result<f64> {
        require_same_system(from, to)?;

        let from = Self::to_wgs84(from)?;
        let to = Self::to_wgs84(to)?;
        let inverse = Self::inverse(&from, &to, Self::EPSILON)?;
        Ok(normalize_bearing(inverse.initial.to_degrees()))
    }

    fn offset(&self, point: &GeoPoint, distance: f64, bearing: f64) -> Result<GeoPoint> {
        let origin = Self::to_wgs84(point)?;
        Self::direct(&origin, distance, bearing)?.convert(point.system)
    }

    fn area(&self, points: &[GeoPoint]) -> Result<f64> {
        require_polygon(points, 3)?;

        let points = points
            .iter()
            .map(Self::to_wgs84)
            .collect::<Result<Vec<_>>>()?;

        let mut excess = 0.0;
        for (a, b) in points.iter().zip(points.iter().cycle().skip(1)) {
            let inverse = Self::inverse(a, b, Self::AREA_EPSILON)?;
            if inverse.distance == 0.0 {
                continue;
            }
            excess += normalize_angle(inverse.terminal - inverse.initial);
        }

        let (lower, upper) = points
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lower, upper), p| {
                (lower.min(p.latitude), upper.max(p.latitude))
            });
        let latitude = (lower + upper) / 2.0;

        Ok(f64::abs(excess) * Self::gaussian_radius_sq(latitude) / 1_000_000.0)
    }
}
