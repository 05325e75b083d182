//! Provides the coordinate systems.
use std::fmt::{Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Represents a coordinate system.
///
/// The key-to-system lookup is total, unknown keys fall back to [`CoordinateSystem::WGS84`].
///
/// # Example
///
/// ```
/// # use geocoord::*;
/// assert_eq!(CoordinateSystem::GCJ02.key(), "gcj02");
/// assert_eq!(CoordinateSystem::GCJ02.id(), 102113);
///
/// assert_eq!(CoordinateSystem::from_key("bd09mc"), CoordinateSystem::BD09);
/// assert_eq!(CoordinateSystem::from_key("unknown"), CoordinateSystem::WGS84);
/// ```
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Default)]
pub enum CoordinateSystem {
    /// Baidu's coordinate system (BD09MC).
    BD09,
    /// The obfuscated system of the maps in mainland China.
    GCJ02,
    /// The GPS coordinate system.
    #[default]
    WGS84,
    /// The alias of [`CoordinateSystem::GCJ02`] used by Google, Amap, Tencent and Sogou maps.
    ///
    /// No converter is registered for it.
    Common,
}

impl CoordinateSystem {
    /// All the systems.
    pub const ALL: [CoordinateSystem; 4] = [Self::BD09, Self::GCJ02, Self::WGS84, Self::Common];

    /// Returns the string key of `self`.
    #[inline]
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::BD09 => "bd09mc",
            Self::GCJ02 => "gcj02",
            Self::WGS84 => "wgs84",
            Self::Common => "common",
        }
    }

    /// Returns the SRID-like numeric id of `self`.
    ///
    /// [`CoordinateSystem::GCJ02`] and [`CoordinateSystem::Common`] share the id.
    #[inline]
    #[must_use]
    pub const fn id(&self) -> u32 {
        match self {
            Self::BD09 => 102100,
            Self::GCJ02 => 102113,
            Self::WGS84 => 4326,
            Self::Common => 102113,
        }
    }

    /// Returns the system whose key is `key`.
    ///
    /// Returns [`CoordinateSystem::WGS84`] when no system matches.
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|system| system.key() == key)
            .unwrap_or_default()
    }
}

impl Display for CoordinateSystem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl From<&str> for CoordinateSystem {
    /// see [`CoordinateSystem::from_key()`]
    fn from(value: &str) -> Self {
        Self::from_key(value)
    }
}

#[cfg(feature = "serde")]
impl Serialize for CoordinateSystem {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.key())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for CoordinateSystem {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let key = String::deserialize(deserializer)?;
        Ok(Self::from_key(&key))
    }
}
