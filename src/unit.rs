//! Provides the units of distance and area.
//!
//! # Example
//!
//! ```
//! # use geocoord::unit::{AreaUnit, DistanceUnit};
//! assert_eq!(DistanceUnit::Kilometers.convert(1.5, DistanceUnit::Meters), 1500.0);
//! assert_eq!(DistanceUnit::Meters.format(12_345.6, DistanceUnit::Kilometers, 1), "12.3 km");
//! assert_eq!(DistanceUnit::Meters.format_zh(12_345.6, DistanceUnit::Kilometers, 1), "12.3 千米");
//!
//! assert_eq!(AreaUnit::SquareKilometres.convert(2.0, AreaUnit::SquareMetres), 2_000_000.0);
//! assert_eq!(AreaUnit::SquareMetres.format(1_234_567.0, AreaUnit::SquareKilometres, 2), "1.23 km²");
//! ```
use std::fmt::{Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Truncates (not rounds) `value` at `decimals` decimal places.
///
/// Returns `value` as is when the scaled value is not finite,
/// it has no fraction to truncate at such places.
#[inline]
fn truncate(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(i32::try_from(decimals).unwrap_or(i32::MAX));
    let scaled = value * factor;
    if scaled.is_finite() {
        scaled.trunc() / factor
    } else {
        value
    }
}

#[inline]
fn format_value(value: f64, decimals: u32, symbol: &str) -> String {
    format!("{:.*} {}", decimals as usize, truncate(value, decimals), symbol)
}

/// Represents a unit of distance.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DistanceUnit {
    Meters,
    Kilometers,
    Miles,
}

impl DistanceUnit {
    /// Returns the length \[m\] of one `self`.
    #[inline]
    #[must_use]
    pub const fn factor(&self) -> f64 {
        match self {
            Self::Meters => 1.0,
            Self::Kilometers => 1000.0,
            Self::Miles => 1609.344,
        }
    }

    /// Returns the symbol of `self`.
    #[inline]
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Meters => "m",
            Self::Kilometers => "km",
            Self::Miles => "mi",
        }
    }

    /// Returns the Chinese symbol of `self`.
    #[inline]
    #[must_use]
    pub const fn symbol_zh(&self) -> &'static str {
        match self {
            Self::Meters => "米",
            Self::Kilometers => "千米",
            Self::Miles => "英里",
        }
    }

    /// Returns `value` in `self` converted into `to`.
    #[inline]
    #[must_use]
    pub fn convert(&self, value: f64, to: Self) -> f64 {
        value * self.factor() / to.factor()
    }

    /// Returns `value` in `self` converted into `to`, with the symbol.
    ///
    /// The value is truncated at `decimals` decimal places.
    ///
    /// # Example
    ///
    /// ```
    /// # use geocoord::unit::DistanceUnit;
    /// assert_eq!(DistanceUnit::Meters.format(1609.344, DistanceUnit::Miles, 1), "1.0 mi");
    /// assert_eq!(DistanceUnit::Meters.format(1999.0, DistanceUnit::Kilometers, 0), "1 km");
    /// ```
    #[must_use]
    pub fn format(&self, value: f64, to: Self, decimals: u32) -> String {
        format_value(self.convert(value, to), decimals, to.symbol())
    }

    /// Returns `value` in `self` converted into `to`, with the Chinese symbol.
    ///
    /// See [`DistanceUnit::format`].
    #[must_use]
    pub fn format_zh(&self, value: f64, to: Self, decimals: u32) -> String {
        format_value(self.convert(value, to), decimals, to.symbol_zh())
    }
}

impl Display for DistanceUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Represents a unit of area.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AreaUnit {
    SquareMillimetres,
    SquareCentimetres,
    SquareMetres,
    SquareKilometres,
}

impl AreaUnit {
    /// Returns the area \[m²\] of one `self`.
    #[inline]
    #[must_use]
    pub const fn factor(&self) -> f64 {
        match self {
            Self::SquareMillimetres => 0.000001,
            Self::SquareCentimetres => 0.0001,
            Self::SquareMetres => 1.0,
            Self::SquareKilometres => 1000000.0,
        }
    }

    /// Returns the symbol of `self`.
    #[inline]
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::SquareMillimetres => "mm²",
            Self::SquareCentimetres => "cm²",
            Self::SquareMetres => "m²",
            Self::SquareKilometres => "km²",
        }
    }

    /// Returns the Chinese symbol of `self`.
    #[inline]
    #[must_use]
    pub const fn symbol_zh(&self) -> &'static str {
        match self {
            Self::SquareMillimetres => "平方毫米",
            Self::SquareCentimetres => "平方厘米",
            Self::SquareMetres => "平方米",
            Self::SquareKilometres => "平方千米",
        }
    }

    /// Returns `value` in `self` converted into `to`.
    #[inline]
    #[must_use]
    pub fn convert(&self, value: f64, to: Self) -> f64 {
        value * self.factor() / to.factor()
    }

    /// Returns `value` in `self` converted into `to`, with the symbol.
    ///
    /// The value is truncated at `decimals` decimal places.
    #[must_use]
    pub fn format(&self, value: f64, to: Self, decimals: u32) -> String {
        format_value(self.convert(value, to), decimals, to.symbol())
    }

    /// Returns `value` in `self` converted into `to`, with the Chinese symbol.
    #[must_use]
    pub fn format_zh(&self, value: f64, to: Self, decimals: u32) -> String {
        format_value(self.convert(value, to), decimals, to.symbol_zh())
    }
}

impl Display for AreaUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}
