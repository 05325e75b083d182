//! Provides utilities for DMS notation degree.
//!
//! The plain notation is `39°54'15"` with truncated seconds,
//! the alternate one (`{:#}`) keeps the fraction of the seconds.
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::num::FpCategory;
use std::str::FromStr;

/// Returns a DMS notation [`str`] from a DD notation [`f64`].
///
/// # Errors
///
/// Returns [`None`] when the conversion fails.
///
/// # Example
///
/// ```
/// # use geocoord::dms::to_dms;
/// #
/// assert_eq!(to_dms(39.9042), Some(r#"39°54'15""#.to_string()));
/// assert_eq!(to_dms(-116.4074), Some(r#"-116°24'26""#.to_string()));
/// assert_eq!(to_dms(f64::NAN), None);
/// ```
#[inline]
#[must_use]
pub fn to_dms(t: f64) -> Option<String> {
    DMS::try_from(t).ok().map(|x| x.to_string())
}

/// Returns a DD notation [`f64`] from a DMS notation [`str`].
///
/// # Errors
///
/// Returns [`None`] when the conversion fails.
///
/// # Example
///
/// ```
/// # use geocoord::dms::from_dms;
/// #
/// assert_eq!(from_dms(r#"36°06'13.58925""#), Some(36.103774791666666));
/// assert_eq!(from_dms("-36 6 13.58925"), Some(-36.103774791666666));
/// assert_eq!(from_dms("36 6"), None);
/// ```
#[inline]
#[must_use]
pub fn from_dms(s: &str) -> Option<f64> {
    s.parse::<DMS>().ok().map(|x| x.to_degree())
}

/// Signature of DMS
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Sign {
    Positive,
    Negative,
}

/// Represents DMS notation latitude and/or longitude.
///
/// This supports -180.0 <= and <= 180.0 angle in degree (DD notation).
///
/// # Example
///
/// ```
/// # use geocoord::dms::*;
/// #
/// # fn wrapper() -> Option<()> {
/// let latitude = DMS::new(Sign::Positive, 39, 54, 15, 0.12)?;
///
/// assert_eq!(format!("{}", latitude), r#"39°54'15""#);
/// assert_eq!(format!("{:#}", latitude), r#"39°54'15.12""#);
///
/// // Construct from &str
/// assert_eq!(r#"39°54'15.12""#.parse::<DMS>().ok()?, latitude);
/// assert_eq!("39d54m15.12s".parse::<DMS>().ok()?, latitude);
/// assert_eq!("39:54:15.12".parse::<DMS>().ok()?, latitude);
///
/// // Convert into DD notation (f64)
/// assert!((latitude.to_degree() - 39.9042).abs() < 1e-12);
///
/// // Construct from DD notation (f64)
/// let latitude = DMS::try_from(39.9042).ok()?;
/// assert_eq!(latitude.sign(), &Sign::Positive);
/// assert_eq!(latitude.degree(), &39);
/// assert_eq!(latitude.minute(), &54);
/// assert_eq!(latitude.second(), &15);
/// assert!((0.12 - latitude.fract()).abs() < 1e-9);
/// # Some(())}
/// # fn main() {wrapper();()}
/// ```
#[derive(Debug, PartialEq, Clone)]
pub struct DMS {
    sign: Sign,
    degree: u8,
    minute: u8,
    second: u8,
    fract: f64,
}

impl Display for DMS {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let buf = if f.alternate() {
            let fract = match self.fract.classify() {
                FpCategory::Zero => String::new(),
                _ => format!("{}", self.fract).trim_start_matches('0').to_string(),
            };
            format!(
                "{}°{}'{}{}\"",
                self.degree, self.minute, self.second, fract
            )
        } else {
            format!("{}°{}'{}\"", self.degree, self.minute, self.second)
        };

        f.pad_integral(matches!(self.sign, Sign::Positive), "", &buf)
    }
}

#[inline]
fn is_separator(c: char) -> bool {
    c.is_whitespace()
        || matches!(
            c,
            '°' | '\'' | '"' | '′' | '″' | ':' | 'd' | 'D' | 'm' | 'M' | 's' | 'S'
        )
}

impl FromStr for DMS {
    type Err = ParseDMSError;

    /// Makes a [`DMS`] from DMS notation [`&str`].
    ///
    /// The degree, minute and second are separated by
    /// the unit symbols (`°`, `'`, `"`, `′`, `″`, `d`, `m`, `s`), colons or whitespaces.
    /// The sign is the leading `-` or `+`, or the leading hemisphere letter
    /// (`N`, `E` for positive, `S`, `W` for negative, case-insensitive),
    /// only the second may have a fraction.
    ///
    /// # Errors
    ///
    /// When `s` is invalid or out-of-range.
    ///
    /// # Example
    ///
    /// ```
    /// # use geocoord::dms::*;
    /// #
    /// # fn wrapper() -> Option<()> {
    /// assert_eq!(
    ///     r#"-116°24'26""#.parse::<DMS>(),
    ///     Ok(DMS::new(Sign::Negative, 116, 24, 26, 0.0)?)
    /// );
    /// assert_eq!(
    ///     "116 24 26.5".parse::<DMS>(),
    ///     Ok(DMS::new(Sign::Positive, 116, 24, 26, 0.5)?)
    /// );
    /// assert_eq!(
    ///     "S 39d54m15s".parse::<DMS>(),
    ///     Ok(DMS::new(Sign::Negative, 39, 54, 15, 0.0)?)
    /// );
    /// # Some(())}
    /// # fn main() {wrapper();()}
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Self::Err::with_empty());
        };

        let (sign, rest) = if let Some(rest) = s.strip_prefix(['N', 'n', 'E', 'e']) {
            (Sign::Positive, rest.trim_start())
        } else if let Some(rest) = s.strip_prefix(['S', 's', 'W', 'w']) {
            (Sign::Negative, rest.trim_start())
        } else if let Some(rest) = s.strip_prefix('-') {
            (Sign::Negative, rest)
        } else {
            (Sign::Positive, s.strip_prefix('+').unwrap_or(s))
        };

        let mut parts = rest.split(is_separator).filter(|part| !part.is_empty());

        let degree = parse_integer(parts.next())?;
        let minute = parse_integer(parts.next())?;
        let (second, fract) = parse_second(parts.next())?;

        if parts.next().is_some() {
            return Err(Self::Err::with_invalid_digit());
        }

        let degree = u8::try_from(degree).map_err(|_| ParseDMSError::with_out_of_bounds())?;
        let minute = u8::try_from(minute).map_err(|_| ParseDMSError::with_out_of_bounds())?;
        let second = u8::try_from(second).map_err(|_| ParseDMSError::with_out_of_bounds())?;

        Self::new(sign, degree, minute, second, fract).ok_or(ParseDMSError::with_out_of_bounds())
    }
}

fn parse_integer(part: Option<&str>) -> Result<u32, ParseDMSError> {
    match part {
        Some(s) if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) => s
            .parse::<u32>()
            .map_err(|_| ParseDMSError::with_out_of_bounds()),
        _ => Err(ParseDMSError::with_invalid_digit()),
    }
}

fn parse_second(part: Option<&str>) -> Result<(u32, f64), ParseDMSError> {
    let part = part.ok_or(ParseDMSError::with_invalid_digit())?;

    let (integer, fraction) = match part.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (part, None),
    };

    let integer = match integer {
        "" if fraction.is_some_and(|s| !s.is_empty()) => 0,
        s => parse_integer(Some(s))?,
    };

    let fract = match fraction {
        None | Some("") => 0.0,
        Some(s) if s.bytes().all(|b| b.is_ascii_digit()) => format!("0.{s}")
            .parse::<f64>()
            .map_err(|_| ParseDMSError::with_invalid_digit())?,
        Some(_) => return Err(ParseDMSError::with_invalid_digit()),
    };

    Ok((integer, fract))
}

impl TryFrom<f64> for DMS {
    type Error = TryFromDMSError;

    /// Makes a [`DMS`] from DD notation [`f64`].
    ///
    /// `value` is angle which satisfies -180.0 <= and <= 180.0.
    ///
    /// # Errors
    ///
    /// When `value` is NaN or not in -180.0 to 180.0.
    ///
    /// # Example
    ///
    /// ```
    /// # use geocoord::dms::*;
    /// #
    /// # fn wrapper() -> Option<()> {
    /// let dms = DMS::try_from(-0.5).ok()?;
    /// assert_eq!(dms.to_string(), r#"-0°30'0""#);
    ///
    /// assert!(DMS::try_from(180.5).is_err());
    /// # Some(())}
    /// # fn main() {wrapper();()}
    /// ```
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if value.is_nan() {
            return Err(TryFromDMSError::new_nan());
        } else if !(-180.0..=180.0).contains(&value) {
            return Err(TryFromDMSError::new_oob());
        };

        let mm = 60. * value.fract();
        let ss = 60. * mm.fract();

        let sign = if value.is_sign_positive() {
            Sign::Positive
        } else {
            Sign::Negative
        };

        let degree = value.trunc().abs() as u8;
        let minute = mm.trunc().abs() as u8;
        let second = ss.trunc().abs() as u8;
        let fract = ss.fract().abs();

        Self::new(sign, degree, minute, second, fract).ok_or(TryFromDMSError::new_oob())
    }
}

impl DMS {
    /// Makes a [`DMS`].
    ///
    /// # Errors
    ///
    /// Returns [`None`] when the input is not in -180°0'0" to 180°0'0".
    ///
    /// # Example
    ///
    /// ```
    /// # use geocoord::dms::*;
    /// #
    /// # fn wrapper() -> Option<()> {
    /// let dms = DMS::new(Sign::Positive, 116, 24, 26, 0.0)?;
    /// assert_eq!(dms.to_string(), r#"116°24'26""#);
    ///
    /// assert!(DMS::new(Sign::Positive, 116, 60, 26, 0.0).is_none());
    /// # Some(())}
    /// # fn main() {wrapper();()}
    /// ```
    #[inline]
    #[must_use]
    pub fn new(sign: Sign, degree: u8, minute: u8, second: u8, fract: f64) -> Option<Self> {
        if fract.is_nan()
            || degree == 180 && (minute > 0 || second > 0 || fract > 0.0)
            || degree > 180
            || minute >= 60
            || second >= 60
            || !(0.0..1.0).contains(&fract)
        {
            return None;
        }

        Some(Self {
            sign,
            degree,
            minute,
            second,
            fract,
        })
    }

    /// Returns the sign of `self`.
    #[inline]
    #[must_use]
    pub const fn sign(&self) -> &Sign {
        &self.sign
    }

    /// Returns the degree of `self`.
    #[inline]
    #[must_use]
    pub const fn degree(&self) -> &u8 {
        &self.degree
    }

    /// Returns the minute of `self`.
    #[inline]
    #[must_use]
    pub const fn minute(&self) -> &u8 {
        &self.minute
    }

    /// Returns the integer part of the second of `self`.
    #[inline]
    #[must_use]
    pub const fn second(&self) -> &u8 {
        &self.second
    }

    /// Returns the fraction part of the second of `self`.
    #[inline]
    #[must_use]
    pub const fn fract(&self) -> &f64 {
        &self.fract
    }

    /// Returns the latitude notation with the hemisphere, e.g. `N 39°54'15"`.
    ///
    /// # Example
    ///
    /// ```
    /// # use geocoord::dms::*;
    /// #
    /// # fn wrapper() -> Option<()> {
    /// let dms = DMS::try_from(-33.8688).ok()?;
    /// assert_eq!(dms.to_latitude_string(), r#"S 33°52'7""#);
    /// # Some(())}
    /// # fn main() {wrapper();()}
    /// ```
    #[must_use]
    pub fn to_latitude_string(&self) -> String {
        self.to_hemisphere_string('N', 'S')
    }

    /// Returns the longitude notation with the hemisphere, e.g. `E 116°24'26"`.
    #[must_use]
    pub fn to_longitude_string(&self) -> String {
        self.to_hemisphere_string('E', 'W')
    }

    fn to_hemisphere_string(&self, positive: char, negative: char) -> String {
        let unsigned = Self {
            sign: Sign::Positive,
            ..self.clone()
        };
        match self.sign {
            Sign::Positive => format!("{positive} {unsigned}"),
            Sign::Negative => format!("{negative} {unsigned}"),
        }
    }

    /// Returns a DD notation [`f64`] which represents `self`.
    ///
    /// # Example
    ///
    /// ```
    /// # use geocoord::dms::*;
    /// #
    /// # fn wrapper() -> Option<()> {
    /// let dms = DMS::new(Sign::Negative, 36, 6, 13, 0.58925)?;
    /// assert_eq!(dms.to_degree(), -36.103774791666666);
    /// # Some(())}
    /// # fn main() {wrapper();()}
    /// ```
    #[inline]
    #[must_use]
    pub fn to_degree(&self) -> f64 {
        let temp = mul_add!(self.minute as f64, 1. / 60., self.degree as f64);
        let temp = mul_add!(self.second as f64 + self.fract, 1. / 3600.0, temp);

        match self.sign {
            Sign::Positive => temp,
            Sign::Negative => -temp,
        }
    }
}

//
// Error
//

/// An error which can be returned on parsing DMS degree.
///
/// This error is used as the error type for the [`FromStr`] for [`DMS`].
#[derive(Debug, PartialEq, Eq)]
pub struct ParseDMSError {
    kind: ParseDMSErrorKind,
}

/// An error kind of [`ParseDMSError`].
#[derive(Debug, PartialEq, Eq)]
pub enum ParseDMSErrorKind {
    InvalidDigit,
    OutOfBounds,
    Empty,
}

impl ParseDMSError {
    #[cold]
    pub(crate) const fn with_invalid_digit() -> Self {
        Self {
            kind: ParseDMSErrorKind::InvalidDigit,
        }
    }

    #[cold]
    pub(crate) const fn with_out_of_bounds() -> Self {
        Self {
            kind: ParseDMSErrorKind::OutOfBounds,
        }
    }

    #[cold]
    pub(crate) const fn with_empty() -> Self {
        Self {
            kind: ParseDMSErrorKind::Empty,
        }
    }

    /// Returns the detailed cause.
    pub const fn kind(&self) -> &ParseDMSErrorKind {
        &self.kind
    }
}

impl Error for ParseDMSError {}

impl Display for ParseDMSError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self.kind {
            ParseDMSErrorKind::InvalidDigit => f.write_str("invalid digit found in string"),
            ParseDMSErrorKind::OutOfBounds => f.write_str("cannot parse out-of-bounds DMS"),
            ParseDMSErrorKind::Empty => f.write_str("cannot parse DMS from empty string"),
        }
    }
}

/// An error which can be returned on converting DMS degree.
///
/// This error is used as the error type for the [`TryFrom`] for [`DMS`].
#[derive(Debug, PartialEq, Eq)]
pub struct TryFromDMSError {
    kind: TryFromDMSErrorKind,
}

/// An error kind of [`TryFromDMSError`].
#[derive(Debug, PartialEq, Eq)]
pub enum TryFromDMSErrorKind {
    NAN,
    OutOfBounds,
}

impl TryFromDMSError {
    #[cold]
    const fn new_nan() -> Self {
        Self {
            kind: TryFromDMSErrorKind::NAN,
        }
    }

    #[cold]
    const fn new_oob() -> Self {
        Self {
            kind: TryFromDMSErrorKind::OutOfBounds,
        }
    }

    /// Returns the detailed cause.
    pub const fn kind(&self) -> &TryFromDMSErrorKind {
        &self.kind
    }
}

impl Error for TryFromDMSError {}

impl Display for TryFromDMSError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let s = match self.kind {
            TryFromDMSErrorKind::NAN => "number would be NAN",
            TryFromDMSErrorKind::OutOfBounds => "number would be out-of-bounds",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_new() {
        // error
        assert!(DMS::new(Sign::Positive, 0, 0, 0, -0.1).is_none());
        assert!(DMS::new(Sign::Positive, 0, 0, 0, 1.0).is_none());
        assert!(DMS::new(Sign::Positive, 0, 0, 60, 0.0).is_none());
        assert!(DMS::new(Sign::Positive, 0, 60, 0, 0.0).is_none());
        assert!(DMS::new(Sign::Positive, 180, 0, 0, 0.1).is_none());
        assert!(DMS::new(Sign::Positive, 180, 0, 1, 0.0).is_none());
        assert!(DMS::new(Sign::Negative, 180, 1, 0, 0.0).is_none());
        assert!(DMS::new(Sign::Positive, 181, 0, 0, 0.0).is_none());
        assert!(DMS::new(Sign::Positive, 0, 0, 0, f64::NAN).is_none());

        // healthy
        assert!(DMS::new(Sign::Positive, 0, 0, 0, 0.0).is_some());
        assert!(DMS::new(Sign::Positive, 180, 0, 0, 0.0).is_some());
        assert!(DMS::new(Sign::Negative, 180, 0, 0, 0.0).is_some());
    }

    #[test]
    fn test_to_string() {
        let cases = [
            (DMS::new(Sign::Positive, 0, 0, 0, 0.0), r#"0°0'0""#),
            (DMS::new(Sign::Negative, 0, 0, 0, 0.0), r#"-0°0'0""#),
            (DMS::new(Sign::Positive, 0, 0, 1, 0.5), r#"0°0'1""#),
            (DMS::new(Sign::Positive, 1, 2, 3, 0.0), r#"1°2'3""#),
            (DMS::new(Sign::Negative, 12, 34, 56, 0.0), r#"-12°34'56""#),
            (DMS::new(Sign::Positive, 180, 0, 0, 0.0), r#"180°0'0""#),
        ];

        for (a, e) in cases {
            assert_eq!(a.unwrap().to_string(), e);
        }
    }

    #[test]
    fn test_to_string_alt() {
        let cases = [
            (DMS::new(Sign::Positive, 0, 0, 0, 0.0), r#"0°0'0""#),
            (DMS::new(Sign::Negative, 0, 0, 0, 0.0), r#"-0°0'0""#),
            (DMS::new(Sign::Positive, 0, 0, 1, 0.5), r#"0°0'1.5""#),
            (DMS::new(Sign::Negative, 1, 0, 0, 0.000012), r#"-1°0'0.000012""#),
            (DMS::new(Sign::Positive, 12, 34, 56, 0.25), r#"12°34'56.25""#),
        ];

        for (a, e) in cases {
            assert_eq!(format!("{:#}", a.unwrap()), e);
        }
    }

    #[test]
    fn test_from_str() {
        let cases = [
            (r#"12°34'56""#, DMS::new(Sign::Positive, 12, 34, 56, 0.0)),
            (r#"-12°34'56""#, DMS::new(Sign::Negative, 12, 34, 56, 0.0)),
            (r#"+12°34'56""#, DMS::new(Sign::Positive, 12, 34, 56, 0.0)),
            ("12°34′56.5″", DMS::new(Sign::Positive, 12, 34, 56, 0.5)),
            ("12d34m56s", DMS::new(Sign::Positive, 12, 34, 56, 0.0)),
            ("12D34M56.25S", DMS::new(Sign::Positive, 12, 34, 56, 0.25)),
            ("12:34:56", DMS::new(Sign::Positive, 12, 34, 56, 0.0)),
            ("  12 34 56  ", DMS::new(Sign::Positive, 12, 34, 56, 0.0)),
            ("-0 30 0", DMS::new(Sign::Negative, 0, 30, 0, 0.0)),
            ("180 0 0", DMS::new(Sign::Positive, 180, 0, 0, 0.0)),
            ("0 0 .5", DMS::new(Sign::Positive, 0, 0, 0, 0.5)),
        ];

        for (s, e) in cases {
            assert_eq!(s.parse::<DMS>(), Ok(e.unwrap()), "{s}");
        }
    }

    #[test]
    fn test_from_str_hemisphere() {
        let cases = [
            (r#"N 39°54'15""#, DMS::new(Sign::Positive, 39, 54, 15, 0.0)),
            ("S 39d54m15s", DMS::new(Sign::Negative, 39, 54, 15, 0.0)),
            ("s39 54 15.5", DMS::new(Sign::Negative, 39, 54, 15, 0.5)),
            (r#"E 116°24'26""#, DMS::new(Sign::Positive, 116, 24, 26, 0.0)),
            ("W116:24:26", DMS::new(Sign::Negative, 116, 24, 26, 0.0)),
            ("  n 0 30 0", DMS::new(Sign::Positive, 0, 30, 0, 0.0)),
        ];

        for (s, e) in cases {
            assert_eq!(s.parse::<DMS>(), Ok(e.unwrap()), "{s}");
        }

        // either the hemisphere or the sign
        for s in ["S -39 54 15", "N +39 54 15", "S", "X 39 54 15"] {
            assert_eq!(
                s.parse::<DMS>().unwrap_err().kind(),
                &ParseDMSErrorKind::InvalidDigit,
                "{s}"
            );
        }
    }

    #[test]
    fn test_to_hemisphere_string() {
        let dms = DMS::new(Sign::Positive, 39, 54, 15, 0.0).unwrap();
        assert_eq!(dms.to_latitude_string(), r#"N 39°54'15""#);
        assert_eq!(dms.to_longitude_string(), r#"E 39°54'15""#);

        let dms = DMS::new(Sign::Negative, 116, 24, 26, 0.0).unwrap();
        assert_eq!(dms.to_latitude_string(), r#"S 116°24'26""#);
        assert_eq!(dms.to_longitude_string(), r#"W 116°24'26""#);

        // parses back
        assert_eq!(dms.to_longitude_string().parse::<DMS>(), Ok(dms));
    }

    #[test]
    fn test_from_str_error() {
        for s in ["12 34", "12 34 56 78", "12.5 34 56", "a 34 56", "12 -34 56", "12 34 inf", "--12 34 56"] {
            assert_eq!(
                s.parse::<DMS>().unwrap_err().kind(),
                &ParseDMSErrorKind::InvalidDigit,
                "{s}"
            );
        }

        for s in ["181 0 0", "180 0 1", "300 0 0", "12 60 0", "12 34 60", "12 34 99999999999"] {
            assert_eq!(
                s.parse::<DMS>().unwrap_err().kind(),
                &ParseDMSErrorKind::OutOfBounds,
                "{s}"
            );
        }

        assert_eq!(
            "".parse::<DMS>().unwrap_err().kind(),
            &ParseDMSErrorKind::Empty
        );
        assert_eq!(
            "   ".parse::<DMS>().unwrap_err().kind(),
            &ParseDMSErrorKind::Empty
        );
    }

    #[test]
    fn test_try_from() {
        let dms = DMS::try_from(39.9042).unwrap();
        assert_eq!(dms.to_string(), r#"39°54'15""#);

        let dms = DMS::try_from(-33.8688).unwrap();
        assert_eq!(dms.to_string(), r#"-33°52'7""#);

        assert_eq!(DMS::try_from(180.0).unwrap().to_string(), r#"180°0'0""#);
        assert_eq!(
            DMS::try_from(f64::NAN).unwrap_err().kind(),
            &TryFromDMSErrorKind::NAN
        );
        assert_eq!(
            DMS::try_from(-180.1).unwrap_err().kind(),
            &TryFromDMSErrorKind::OutOfBounds
        );
    }

    #[test]
    fn test_to_degree() {
        for v in [0.0, 39.9042, -116.4074, 179.999, -0.25] {
            let actual = DMS::try_from(v).unwrap().to_degree();
            assert!((actual - v).abs() < 1e-12, "{v}");
        }
    }
}
