//! Provides the error type of the crate.
use thiserror::Error as ThisError;

use crate::CoordinateSystem;

/// Alias for a `Result<T, geocoord::error::Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// An error which can be returned on geodetic calculation and conversion.
///
/// # Example
///
/// ```
/// # use geocoord::*;
/// # use geocoord::error::ErrorKind;
/// let a = GeoPoint::new(35.0, 135.0, CoordinateSystem::WGS84);
/// let b = GeoPoint::new(35.0, 135.0, CoordinateSystem::GCJ02);
///
/// let err = Haversine.distance(&a, &b).unwrap_err();
/// assert!(err.is_invalid_argument());
/// assert_eq!(
///     err.kind(),
///     &ErrorKind::MismatchedSystem {
///         expected: CoordinateSystem::WGS84,
///         found: CoordinateSystem::GCJ02,
///     }
/// );
/// ```
#[derive(Debug, PartialEq, ThisError)]
#[error("{kind}")]
pub struct Error {
    kind: ErrorKind,
}

/// An error kind of [`Error`].
#[derive(Debug, PartialEq, ThisError)]
pub enum ErrorKind {
    /// Points of different coordinate systems given to an operation
    /// which requires the same one.
    #[error("coordinate systems differ, cannot compute: expected {expected}, found {found}")]
    MismatchedSystem {
        /// The system required
        expected: CoordinateSystem,
        /// The system found
        found: CoordinateSystem,
    },
    /// Too few points.
    #[error("at least {required} point(s) required, found {found}")]
    NotEnoughPoints {
        /// Minimum number of points
        required: usize,
        /// Number of points given
        found: usize,
    },
    /// No converter registered for the pair.
    #[error("conversion from {from} to {to} is not supported")]
    UnsupportedConversion {
        /// Source system
        from: CoordinateSystem,
        /// Target system
        to: CoordinateSystem,
    },
    /// Error is still high even iteration exhausted.
    #[error("error is still higher than {criteria:e} even exhaust {iteration} iterations")]
    NotConvergent {
        /// Max iteration
        iteration: usize,
        /// Error criteria
        criteria: f64,
    },
}

impl Error {
    #[cold]
    pub(crate) const fn new_mismatched_system(
        expected: CoordinateSystem,
        found: CoordinateSystem,
    ) -> Self {
        Self {
            kind: ErrorKind::MismatchedSystem { expected, found },
        }
    }

    #[cold]
    pub(crate) const fn new_not_enough_points(required: usize, found: usize) -> Self {
        Self {
            kind: ErrorKind::NotEnoughPoints { required, found },
        }
    }

    #[cold]
    pub(crate) const fn new_unsupported_conversion(
        from: CoordinateSystem,
        to: CoordinateSystem,
    ) -> Self {
        Self {
            kind: ErrorKind::UnsupportedConversion { from, to },
        }
    }

    #[cold]
    pub(crate) const fn new_not_convergent(iteration: usize, criteria: f64) -> Self {
        Self {
            kind: ErrorKind::NotConvergent {
                iteration,
                criteria,
            },
        }
    }

    /// Returns the detailed cause.
    pub const fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Returns `true` if the caller passed unusable input,
    /// mismatched systems, too few points or an unsupported conversion.
    pub const fn is_invalid_argument(&self) -> bool {
        !self.is_not_convergent()
    }

    /// Returns `true` if an iterative solver exhausted its iteration cap.
    pub const fn is_not_convergent(&self) -> bool {
        matches!(self.kind, ErrorKind::NotConvergent { .. })
    }
}
