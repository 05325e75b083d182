use tracing::debug;

use crate::calculator::{GeoCalculator, Haversine, Vincenty};
use crate::{GeoPoint, Result};

/// The calculator delegating to `primary`,
/// and retrying `secondary` only when `primary` does not converge.
///
/// Other errors of `primary`, such as mismatched systems, are returned as is.
///
/// [`Fallback::default()`] is [`Vincenty`] then [`Haversine`],
/// recommended for general purpose.
///
/// # Example
///
/// ```
/// # use geocoord::*;
/// # fn main() -> Result<()> {
/// let calculator = Fallback::default();
///
/// let a = GeoPoint::wgs84(39.9042, 116.4074);
/// let b = GeoPoint::wgs84(31.2304, 121.4737);
/// assert_eq!(calculator.distance(&a, &b)?, Vincenty.distance(&a, &b)?);
///
/// // nearly antipodal, Vincenty does not converge
/// let a = GeoPoint::wgs84(0.0, 0.0);
/// let b = GeoPoint::wgs84(0.5, 179.7);
/// assert!(Vincenty.distance(&a, &b).is_err());
/// assert_eq!(calculator.distance(&a, &b)?, Haversine.distance(&a, &b)?);
/// # Ok(())}
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fallback<P, S> {
    primary: P,
    secondary: S,
}

impl Default for Fallback<Vincenty, Haversine> {
    #[inline]
    fn default() -> Self {
        Self::new(Vincenty, Haversine)
    }
}

impl<P, S> Fallback<P, S> {
    /// Makes a [`Fallback`].
    #[inline]
    #[must_use]
    pub const fn new(primary: P, secondary: S) -> Self {
        Self { primary, secondary }
    }

    /// Returns the primary calculator.
    #[inline]
    #[must_use]
    pub const fn primary(&self) -> &P {
        &self.primary
    }

    /// Returns the secondary calculator.
    #[inline]
    #[must_use]
    pub const fn secondary(&self) -> &S {
        &self.secondary
    }
}

macro_rules! fallback {
    ($self:ident.$m:ident($($arg:expr),*)) => {
        match $self.primary.$m($($arg),*) {
            Err(err) if err.is_not_convergent() => {
                debug!(error = %err, operation = stringify!($m), "retry on the secondary");
                $self.secondary.$m($($arg),*)
            }
            r => r,
        }
    };
}

impl<P, S> GeoCalculator for Fallback<P, S>
where
    P: GeoCalculator,
    S: GeoCalculator,
{
    fn distance(&self, a: &GeoPoint, b: &GeoPoint) -> Result<f64> {
        fallback!(self.distance(a, b))
    }

    fn bearing(&self, from: &GeoPoint, to: &GeoPoint) -> Result<f64> {
        fallback!(self.bearing(from, to))
    }

    fn offset(&self, point: &GeoPoint, distance: f64, bearing: f64) -> Result<GeoPoint> {
        fallback!(self.offset(point, distance, bearing))
    }

    fn area(&self, points: &[GeoPoint]) -> Result<f64> {
        fallback!(self.area(points))
    }
}
