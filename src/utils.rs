//! Provides misc utilities.

/// Returns the normalized latitude into -90.0 <= and <= 90.0.
///
/// # Example
///
/// ```
/// # use geocoord::utils::normalize_latitude;
/// assert_eq!(normalize_latitude(35.0), 35.0);
/// assert_eq!(normalize_latitude(100.0), 80.0);
/// assert_eq!(normalize_latitude(190.0), -10.0);
/// assert_eq!(normalize_latitude(-100.0), -80.0);
/// assert!(normalize_latitude(f64::NAN).is_nan());
/// ```
#[inline]
#[must_use]
pub fn normalize_latitude(t: f64) -> f64 {
    if t.is_nan() || (-90.0..=90.0).contains(&t) {
        return t;
    }

    match t % 360.0 {
        s if !(-270.0..=270.0).contains(&s) => s - f64::copysign(360.0, s),
        s if !(-90.0..=90.0).contains(&s) => f64::copysign(180.0, s) - s,
        s => s,
    }
}

/// Returns the normalized longitude into -180.0 <= and <= 180.0.
///
/// # Example
///
/// ```
/// # use geocoord::utils::normalize_longitude;
/// assert_eq!(normalize_longitude(145.0), 145.0);
/// assert_eq!(normalize_longitude(190.0), -170.0);
/// assert_eq!(normalize_longitude(-190.0), 170.0);
/// assert!(normalize_longitude(f64::NAN).is_nan());
/// ```
#[inline]
#[must_use]
pub fn normalize_longitude(t: f64) -> f64 {
    if t.is_nan() || (-180.0..=180.0).contains(&t) {
        return t;
    }

    match t % 360.0 {
        s if !(-180.0..=180.0).contains(&s) => s - f64::copysign(360.0, s),
        s => s,
    }
}

/// Returns the bearing normalized into 0.0 <= and < 360.0.
///
/// # Example
///
/// ```
/// # use geocoord::utils::normalize_bearing;
/// assert_eq!(normalize_bearing(-90.0), 270.0);
/// assert_eq!(normalize_bearing(360.0), 0.0);
/// assert_eq!(normalize_bearing(725.0), 5.0);
/// ```
#[inline]
#[must_use]
pub fn normalize_bearing(t: f64) -> f64 {
    let r = t.rem_euclid(360.0);
    // rem_euclid rounds tiny negatives up to 360.0
    if r >= 360.0 {
        0.0
    } else {
        r
    }
}

/// Returns `t` rounded half away from zero at 6 decimal places, scaled by 1e6.
#[inline]
pub(crate) fn round6_scaled(t: f64) -> f64 {
    (t * 1e6).round()
}

/// Returns the 6 decimal places notation of `t`.
///
/// # Example
///
/// ```
/// # use geocoord::utils::to_6_decimal_places;
/// assert_eq!(to_6_decimal_places(39.9042), "39.904200");
/// assert_eq!(to_6_decimal_places(116.4074567), "116.407457");
/// assert_eq!(to_6_decimal_places(-0.5), "-0.500000");
/// ```
#[must_use]
pub fn to_6_decimal_places(t: f64) -> String {
    format!("{:.6}", round6_scaled(t) / 1e6)
}
