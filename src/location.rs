//! Provides [`Location`], a location fix.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::builder::LocationBuilder;
use crate::{CoordinateSystem, GeoPoint, Result};

/// Represents a location fix, a position with the attributes reported by a provider.
///
/// The position fields are flattened on (de)serialization,
/// and the absent attributes are zero or [`None`].
///
/// # Example
///
/// ```
/// # use geocoord::*;
/// # fn main() -> Result<()> {
/// let location = LocationBuilder::new(GeoPoint::wgs84(39.9042, 116.4074))
///     .provider("gps")
///     .accuracy(5.0)
///     .satellites(9)
///     .city("Beijing")
///     .build();
///
/// assert_eq!(location.provider(), Some("gps"));
/// assert_eq!(location.satellites(), &9);
///
/// // the attributes are kept over the conversion
/// let result = location.convert(CoordinateSystem::GCJ02)?;
/// assert_eq!(result.system(), &CoordinateSystem::GCJ02);
/// assert_eq!(result.city(), Some("Beijing"));
///
/// // copy with changes
/// let result = location.to_builder().speed(1.5).build();
/// assert_eq!(result.speed(), &1.5);
/// assert_eq!(result.accuracy(), &5.0);
/// # Ok(())}
/// ```
#[derive(Debug, PartialEq, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Location {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub(crate) point: GeoPoint,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub(crate) provider: Option<String>,
    /// \[m/s\]
    #[cfg_attr(feature = "serde", serde(default))]
    pub(crate) speed: f32,
    /// \[deg\]
    #[cfg_attr(feature = "serde", serde(default))]
    pub(crate) direction: f32,
    /// \[m\]
    #[cfg_attr(feature = "serde", serde(default))]
    pub(crate) accuracy: f32,
    /// \[m\]
    #[cfg_attr(feature = "serde", serde(default))]
    pub(crate) altitude: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub(crate) satellites: u32,
    /// milliseconds since the Unix epoch
    #[cfg_attr(feature = "serde", serde(default))]
    pub(crate) time: i64,
    /// \[deg\]
    #[cfg_attr(feature = "serde", serde(default))]
    pub(crate) heading: f64,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Vec::is_empty")
    )]
    pub(crate) address: Vec<String>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub(crate) city: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub(crate) city_code: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub(crate) country: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub(crate) province: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub(crate) thoroughfare: Option<String>,
}

impl From<GeoPoint> for Location {
    /// Makes a [`Location`] without attributes.
    fn from(point: GeoPoint) -> Self {
        LocationBuilder::new(point).build()
    }
}

impl Location {
    /// Returns the position of `self`.
    #[inline]
    #[must_use]
    pub const fn point(&self) -> &GeoPoint {
        &self.point
    }

    /// Returns the coordinate system of the position.
    #[inline]
    #[must_use]
    pub const fn system(&self) -> &CoordinateSystem {
        self.point.system()
    }

    /// Returns the provider name, e.g. `gps`.
    #[inline]
    #[must_use]
    pub fn provider(&self) -> Option<&str> {
        self.provider.as_deref()
    }

    /// Returns the speed \[m/s\].
    #[inline]
    #[must_use]
    pub const fn speed(&self) -> &f32 {
        &self.speed
    }

    /// Returns the moving direction \[deg\].
    #[inline]
    #[must_use]
    pub const fn direction(&self) -> &f32 {
        &self.direction
    }

    /// Returns the horizontal accuracy \[m\].
    #[inline]
    #[must_use]
    pub const fn accuracy(&self) -> &f32 {
        &self.accuracy
    }

    /// Returns the altitude \[m\].
    #[inline]
    #[must_use]
    pub const fn altitude(&self) -> &f64 {
        &self.altitude
    }

    /// Returns the number of the satellites in use.
    #[inline]
    #[must_use]
    pub const fn satellites(&self) -> &u32 {
        &self.satellites
    }

    /// Returns the time of the fix, milliseconds since the Unix epoch.
    #[inline]
    #[must_use]
    pub const fn time(&self) -> &i64 {
        &self.time
    }

    /// Returns the device heading \[deg\].
    #[inline]
    #[must_use]
    pub const fn heading(&self) -> &f64 {
        &self.heading
    }

    /// Returns the address lines.
    #[inline]
    #[must_use]
    pub fn address(&self) -> &[String] {
        &self.address
    }

    #[inline]
    #[must_use]
    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    #[inline]
    #[must_use]
    pub fn city_code(&self) -> Option<&str> {
        self.city_code.as_deref()
    }

    #[inline]
    #[must_use]
    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    #[inline]
    #[must_use]
    pub fn province(&self) -> Option<&str> {
        self.province.as_deref()
    }

    #[inline]
    #[must_use]
    pub fn thoroughfare(&self) -> Option<&str> {
        self.thoroughfare.as_deref()
    }

    /// Returns the moving direction, or the heading if the direction is zero.
    ///
    /// # Example
    ///
    /// ```
    /// # use geocoord::*;
    /// let location = LocationBuilder::new(GeoPoint::wgs84(0.0, 0.0))
    ///     .heading(30.0)
    ///     .build();
    /// assert_eq!(location.course(), 30.0);
    ///
    /// let location = location.to_builder().direction(45.0).build();
    /// assert_eq!(location.course(), 45.0);
    /// ```
    #[must_use]
    pub fn course(&self) -> f64 {
        if self.direction == 0.0 {
            self.heading
        } else {
            f64::from(self.direction)
        }
    }

    /// Returns a [`LocationBuilder`] with the fields of `self`.
    #[inline]
    #[must_use]
    pub fn to_builder(&self) -> LocationBuilder {
        LocationBuilder::from(self.clone())
    }

    /// Returns `self` with the position converted into `to`,
    /// the other attributes are kept as is.
    ///
    /// # Errors
    ///
    /// If the conversion is unsupported, see [`GeoPoint::convert`].
    pub fn convert(&self, to: CoordinateSystem) -> Result<Self> {
        let point = self.point.convert(to)?;
        Ok(self.to_builder().point(point).build())
    }
}
