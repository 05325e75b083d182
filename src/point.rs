use std::fmt::{Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::calculator::GeoCalculator;
use crate::converter;
use crate::dms::{ParseDMSError, DMS};
use crate::utils::{normalize_latitude, normalize_longitude, round6_scaled, to_6_decimal_places};
use crate::{CoordinateSystem, Result};

/// Represents a position on the Earth, a triplet latitude, longitude and coordinate system.
///
/// The range of the latitude and longitude is not checked.
///
/// Equality is taken on the 6 decimal places (about 11 cm) and the system,
/// which absorbs floating error of round-trips.
///
/// # Example
///
/// ```
/// # use geocoord::*;
/// # fn main() -> Result<()> {
/// // Construct
/// let point = GeoPoint::new(39.9042, 116.4074, CoordinateSystem::WGS84);
/// assert_eq!(point.latitude(), &39.9042);
/// assert_eq!(point.longitude(), &116.4074);
/// assert_eq!(point.system(), &CoordinateSystem::WGS84);
///
/// // Equality on the 6 decimal places
/// assert_eq!(point, GeoPoint::wgs84(39.90420000001, 116.4074));
///
/// // Convert
/// let result = point.to_gcj02()?;
/// assert_eq!(result.system(), &CoordinateSystem::GCJ02);
/// assert_eq!(result.latitude6(), "39.905603");
/// assert_eq!(result.longitude6(), "116.413642");
/// # Ok(())}
/// ```
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeoPoint {
    /// The latitude \[deg\] of the point
    pub(crate) latitude: f64,
    /// The longitude \[deg\] of the point
    pub(crate) longitude: f64,
    /// The coordinate system of the point
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub(crate) system: CoordinateSystem,
}

impl PartialEq for GeoPoint {
    fn eq(&self, other: &Self) -> bool {
        self.system == other.system
            && round6_scaled(self.latitude) == round6_scaled(other.latitude)
            && round6_scaled(self.longitude) == round6_scaled(other.longitude)
    }
}

impl From<(f64, f64)> for GeoPoint {
    /// see [`GeoPoint::wgs84()`]
    fn from(rhs: (f64, f64)) -> Self {
        Self::wgs84(rhs.0, rhs.1)
    }
}

impl From<(f64, f64, CoordinateSystem)> for GeoPoint {
    /// see [`GeoPoint::new()`]
    fn from(rhs: (f64, f64, CoordinateSystem)) -> Self {
        Self::new(rhs.0, rhs.1, rhs.2)
    }
}

impl Display for GeoPoint {
    /// Writes the 6 decimal places and DMS notations.
    ///
    /// # Example
    ///
    /// ```
    /// # use geocoord::*;
    /// let point = GeoPoint::wgs84(39.9042, 116.4074);
    /// assert_eq!(
    ///     point.to_string(),
    ///     r#"Latitude: 39.904200 (39°54'15"), Longitude: 116.407400 (116°24'26"), Type: wgs84"#
    /// );
    /// ```
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Latitude: {} ({}), Longitude: {} ({}), Type: {}",
            self.latitude6(),
            self.latitude_dms().as_deref().unwrap_or("-"),
            self.longitude6(),
            self.longitude_dms().as_deref().unwrap_or("-"),
            self.system
        )
    }
}

impl GeoPoint {
    /// Makes a [`GeoPoint`].
    #[inline]
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64, system: CoordinateSystem) -> Self {
        Self {
            latitude,
            longitude,
            system,
        }
    }

    /// Makes a [`GeoPoint`] of [`CoordinateSystem::WGS84`].
    #[inline]
    #[must_use]
    pub const fn wgs84(latitude: f64, longitude: f64) -> Self {
        Self::new(latitude, longitude, CoordinateSystem::WGS84)
    }

    /// Makes a [`GeoPoint`] from DMS notation latitude and longitude.
    ///
    /// # Errors
    ///
    /// If `latitude` or `longitude` is not a valid DMS notation,
    /// see [`DMS`] for the accepted notations.
    ///
    /// # Example
    ///
    /// ```
    /// # use geocoord::*;
    /// # use geocoord::dms::ParseDMSError;
    /// # fn main() -> std::result::Result<(), ParseDMSError> {
    /// let point = GeoPoint::from_dms(r#"39°54'15.12""#, "116d24m26.64s", CoordinateSystem::WGS84)?;
    /// assert_eq!(point, GeoPoint::wgs84(39.9042, 116.4074));
    /// # Ok(())}
    /// ```
    pub fn from_dms(
        latitude: &str,
        longitude: &str,
        system: CoordinateSystem,
    ) -> std::result::Result<Self, ParseDMSError> {
        let latitude = latitude.parse::<DMS>()?.to_degree();
        let longitude = longitude.parse::<DMS>()?.to_degree();
        Ok(Self::new(latitude, longitude, system))
    }

    /// Makes a [`GeoPoint`] from a pair of DMS notations in one string.
    ///
    /// The latitude and the longitude are separated by a comma,
    /// or by a whitespace when each notation has no whitespace inside
    /// but after the hemisphere letter.
    ///
    /// # Errors
    ///
    /// If `s` is not a pair of valid DMS notations.
    ///
    /// # Example
    ///
    /// ```
    /// # use geocoord::*;
    /// # use geocoord::dms::ParseDMSError;
    /// # fn main() -> std::result::Result<(), ParseDMSError> {
    /// let expected = GeoPoint::wgs84(39.9042, 116.4074);
    ///
    /// let point = GeoPoint::parse_dms(r#"39°54'15.12" 116°24'26.64""#, CoordinateSystem::WGS84)?;
    /// assert_eq!(point, expected);
    ///
    /// let point = GeoPoint::parse_dms("N 39d54m15.12s E 116d24m26.64s", CoordinateSystem::WGS84)?;
    /// assert_eq!(point, expected);
    ///
    /// let point = GeoPoint::parse_dms("39 54 15.12, 116 24 26.64", CoordinateSystem::WGS84)?;
    /// assert_eq!(point, expected);
    /// # Ok(())}
    /// ```
    pub fn parse_dms(s: &str, system: CoordinateSystem) -> std::result::Result<Self, ParseDMSError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseDMSError::with_empty());
        }

        let (latitude, longitude) = match s.split_once(',') {
            Some(pair) => pair,
            None => split_lat_lon(s).ok_or(ParseDMSError::with_invalid_digit())?,
        };
        Self::from_dms(latitude, longitude, system)
    }

    /// Returns the latitude of `self`.
    #[inline]
    #[must_use]
    pub const fn latitude(&self) -> &f64 {
        &self.latitude
    }

    /// Returns the longitude of `self`.
    #[inline]
    #[must_use]
    pub const fn longitude(&self) -> &f64 {
        &self.longitude
    }

    /// Returns the coordinate system of `self`.
    #[inline]
    #[must_use]
    pub const fn system(&self) -> &CoordinateSystem {
        &self.system
    }

    /// Returns the latitude rounded at the 6 decimal places.
    ///
    /// # Example
    ///
    /// ```
    /// # use geocoord::*;
    /// let point = GeoPoint::wgs84(39.904212345, 116.407456789);
    /// assert_eq!(point.latitude6(), "39.904212");
    /// assert_eq!(point.longitude6(), "116.407457");
    /// ```
    #[must_use]
    pub fn latitude6(&self) -> String {
        to_6_decimal_places(self.latitude)
    }

    /// Returns the longitude rounded at the 6 decimal places.
    #[must_use]
    pub fn longitude6(&self) -> String {
        to_6_decimal_places(self.longitude)
    }

    /// Returns the DMS notation of the latitude, e.g. `39°54'15"`.
    ///
    /// Returns [`None`] if the latitude is NaN or out of -180.0 to 180.0.
    #[must_use]
    pub fn latitude_dms(&self) -> Option<String> {
        DMS::try_from(self.latitude).ok().map(|dms| dms.to_string())
    }

    /// Returns the DMS notation of the longitude, e.g. `116°24'26"`.
    ///
    /// Returns [`None`] if the longitude is NaN or out of -180.0 to 180.0.
    #[must_use]
    pub fn longitude_dms(&self) -> Option<String> {
        DMS::try_from(self.longitude).ok().map(|dms| dms.to_string())
    }

    /// Makes a normalized [`GeoPoint`] from `self`.
    ///
    /// The result has normalized [`latitude`](GeoPoint::latitude)
    /// and [`longitude`](GeoPoint::longitude) which value -90.0 <= and <= 90.0,
    /// and -180.0 <= and <= 180.0 respectively.
    ///
    /// # Example
    ///
    /// ```
    /// # use geocoord::*;
    /// let point = GeoPoint::wgs84(100.0, 200.0);
    /// assert_eq!(point.normalize(), GeoPoint::wgs84(80.0, -160.0));
    /// ```
    #[must_use]
    pub fn normalize(&self) -> Self {
        Self {
            latitude: normalize_latitude(self.latitude),
            longitude: normalize_longitude(self.longitude),
            system: self.system,
        }
    }

    /// Returns `self` converted into `to`.
    ///
    /// # Errors
    ///
    /// If the conversion is not supported, see [`converter::convert`].
    #[inline]
    pub fn convert(&self, to: CoordinateSystem) -> Result<Self> {
        converter::convert(self, to)
    }

    /// Returns `self` converted into [`CoordinateSystem::WGS84`].
    ///
    /// # Errors
    ///
    /// If `self` is [`CoordinateSystem::Common`].
    #[inline]
    pub fn to_wgs84(&self) -> Result<Self> {
        self.convert(CoordinateSystem::WGS84)
    }

    /// Returns `self` converted into [`CoordinateSystem::GCJ02`].
    ///
    /// # Errors
    ///
    /// If `self` is [`CoordinateSystem::Common`].
    #[inline]
    pub fn to_gcj02(&self) -> Result<Self> {
        self.convert(CoordinateSystem::GCJ02)
    }

    /// Returns `self` converted into [`CoordinateSystem::BD09`].
    ///
    /// # Errors
    ///
    /// If `self` is [`CoordinateSystem::Common`].
    #[inline]
    pub fn to_bd09(&self) -> Result<Self> {
        self.convert(CoordinateSystem::BD09)
    }

    /// Returns the distance \[m\] from `self` to `other` by `calculator`.
    ///
    /// # Errors
    ///
    /// See [`GeoCalculator::distance`].
    ///
    /// # Example
    ///
    /// ```
    /// # use geocoord::*;
    /// # fn main() -> Result<()> {
    /// let beijing = GeoPoint::wgs84(39.9042, 116.4074);
    /// let shanghai = GeoPoint::wgs84(31.2304, 121.4737);
    ///
    /// let distance = beijing.distance_to(&shanghai, &Vincenty)?;
    /// assert!((1_065_000.0..1_070_000.0).contains(&distance));
    /// # Ok(())}
    /// ```
    #[inline]
    pub fn distance_to<C>(&self, other: &Self, calculator: &C) -> Result<f64>
    where
        C: GeoCalculator + ?Sized,
    {
        calculator.distance(self, other)
    }

    /// Returns the initial bearing \[deg\] from `self` to `other` by `calculator`.
    ///
    /// # Errors
    ///
    /// See [`GeoCalculator::bearing`].
    #[inline]
    pub fn bearing_to<C>(&self, other: &Self, calculator: &C) -> Result<f64>
    where
        C: GeoCalculator + ?Sized,
    {
        calculator.bearing(self, other)
    }

    /// Returns the destination `distance` \[m\] away from `self`
    /// along the initial `bearing` \[deg\] by `calculator`.
    ///
    /// # Errors
    ///
    /// See [`GeoCalculator::offset`].
    #[inline]
    pub fn offset<C>(&self, distance: f64, bearing: f64, calculator: &C) -> Result<Self>
    where
        C: GeoCalculator + ?Sized,
    {
        calculator.offset(self, distance, bearing)
    }
}

/// Splits at the first whitespace after the latitude (and its hemisphere).
fn split_lat_lon(s: &str) -> Option<(&str, &str)> {
    let offset = match s.strip_prefix(['N', 'n', 'S', 's']) {
        Some(rest) => s.len() - rest.trim_start().len(),
        None => 0,
    };
    let at = offset + s[offset..].find(char::is_whitespace)?;
    Some((&s[..at], &s[at..]))
}
