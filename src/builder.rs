use crate::{CoordinateSystem, GeoPoint, GeoPointBounds, GeoPointCollection, Location, Result};

/// The builder of [`GeoPointCollection`] and [`GeoPointBounds`].
///
/// The points given by [`lat_lon`](GeoPointCollectionBuilder::lat_lon)
/// are tagged by the system of the builder.
///
/// # Example
///
/// ```
/// # use geocoord::*;
/// # fn main() -> Result<()> {
/// let collection = GeoPointCollectionBuilder::new()
///     .lat_lon(39.9042, 116.4074)
///     .point(GeoPoint::wgs84(31.2304, 121.4737))
///     .points([GeoPoint::wgs84(22.5431, 114.0579)])
///     .build();
///
/// assert_eq!(collection.len(), 3);
/// assert_eq!(collection.system(), &CoordinateSystem::WGS84);
///
/// let bounds = GeoPointCollectionBuilder::with_system(CoordinateSystem::GCJ02)
///     .lat_lon(1.0, 5.0)
///     .lat_lon(3.0, 2.0)
///     .build_bounds()?;
///
/// assert_eq!(bounds.system(), &CoordinateSystem::GCJ02);
/// assert_eq!(bounds.southwest(), &GeoPoint::new(1.0, 2.0, CoordinateSystem::GCJ02));
/// assert_eq!(bounds.northeast(), &GeoPoint::new(3.0, 5.0, CoordinateSystem::GCJ02));
/// # Ok(())}
/// ```
#[derive(Debug, Default, Clone)]
pub struct GeoPointCollectionBuilder {
    system: CoordinateSystem,
    points: Vec<GeoPoint>,
}

impl GeoPointCollectionBuilder {
    /// Makes a [`GeoPointCollectionBuilder`] in WGS84.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self::with_system(CoordinateSystem::WGS84)
    }

    /// Makes a [`GeoPointCollectionBuilder`] in `system`.
    #[inline]
    #[must_use]
    pub const fn with_system(system: CoordinateSystem) -> Self {
        Self {
            system,
            points: Vec::new(),
        }
    }

    /// Adds a point.
    #[inline]
    #[must_use]
    pub fn point(mut self, point: GeoPoint) -> Self {
        self.points.push(point);
        self
    }

    /// Adds a point in the system of the builder.
    ///
    /// # Example
    ///
    /// ```
    /// # use geocoord::*;
    /// let collection = GeoPointCollectionBuilder::with_system(CoordinateSystem::BD09)
    ///     .lat_lon(1.0, 2.0)
    ///     .build();
    ///
    /// assert_eq!(collection[0], GeoPoint::new(1.0, 2.0, CoordinateSystem::BD09));
    /// ```
    #[inline]
    #[must_use]
    pub fn lat_lon(self, latitude: f64, longitude: f64) -> Self {
        let system = self.system;
        self.point(GeoPoint::new(latitude, longitude, system))
    }

    /// Adds points.
    #[inline]
    #[must_use]
    pub fn points(mut self, points: impl IntoIterator<Item = GeoPoint>) -> Self {
        self.points.extend(points);
        self
    }

    /// Builds [`GeoPointCollection`] in the system of the builder.
    #[inline]
    #[must_use]
    pub fn build(self) -> GeoPointCollection {
        GeoPointCollection {
            points: self.points,
            system: self.system,
        }
    }

    /// Builds [`GeoPointBounds`] of the points.
    ///
    /// # Errors
    ///
    /// If no point is added, see [`GeoPointCollection::to_bounds`].
    #[inline]
    pub fn build_bounds(self) -> Result<GeoPointBounds> {
        self.build().to_bounds()
    }
}

/// The builder of [`Location`].
///
/// The attributes not given are zero or [`None`].
///
/// # Example
///
/// ```
/// # use geocoord::*;
/// let location = LocationBuilder::new(GeoPoint::wgs84(39.9042, 116.4074))
///     .provider("gps")
///     .time(1_700_000_000_000)
///     .address_line("Dongcheng")
///     .address_line("Chang'an Avenue")
///     .build();
///
/// assert_eq!(location.time(), &1_700_000_000_000);
/// assert_eq!(location.address(), ["Dongcheng", "Chang'an Avenue"]);
/// assert_eq!(location.altitude(), &0.0);
/// ```
#[derive(Debug, Clone)]
pub struct LocationBuilder {
    inner: Location,
}

impl From<Location> for LocationBuilder {
    fn from(inner: Location) -> Self {
        Self { inner }
    }
}

impl LocationBuilder {
    /// Makes a [`LocationBuilder`] at `point`.
    #[inline]
    #[must_use]
    pub const fn new(point: GeoPoint) -> Self {
        Self {
            inner: Location {
                point,
                provider: None,
                speed: 0.0,
                direction: 0.0,
                accuracy: 0.0,
                altitude: 0.0,
                satellites: 0,
                time: 0,
                heading: 0.0,
                address: Vec::new(),
                city: None,
                city_code: None,
                country: None,
                province: None,
                thoroughfare: None,
            },
        }
    }

    /// Replaces the position.
    #[inline]
    #[must_use]
    pub fn point(mut self, point: GeoPoint) -> Self {
        self.inner.point = point;
        self
    }

    #[inline]
    #[must_use]
    pub fn provider(mut self, provider: impl Into<String>) -> Self {
        self.inner.provider = Some(provider.into());
        self
    }

    /// Sets the speed \[m/s\].
    #[inline]
    #[must_use]
    pub fn speed(mut self, speed: f32) -> Self {
        self.inner.speed = speed;
        self
    }

    /// Sets the moving direction \[deg\].
    #[inline]
    #[must_use]
    pub fn direction(mut self, direction: f32) -> Self {
        self.inner.direction = direction;
        self
    }

    /// Sets the horizontal accuracy \[m\].
    #[inline]
    #[must_use]
    pub fn accuracy(mut self, accuracy: f32) -> Self {
        self.inner.accuracy = accuracy;
        self
    }

    /// Sets the altitude \[m\].
    #[inline]
    #[must_use]
    pub fn altitude(mut self, altitude: f64) -> Self {
        self.inner.altitude = altitude;
        self
    }

    #[inline]
    #[must_use]
    pub fn satellites(mut self, satellites: u32) -> Self {
        self.inner.satellites = satellites;
        self
    }

    /// Sets the time, milliseconds since the Unix epoch.
    #[inline]
    #[must_use]
    pub fn time(mut self, time: i64) -> Self {
        self.inner.time = time;
        self
    }

    /// Sets the device heading \[deg\].
    #[inline]
    #[must_use]
    pub fn heading(mut self, heading: f64) -> Self {
        self.inner.heading = heading;
        self
    }

    /// Replaces the address lines.
    #[inline]
    #[must_use]
    pub fn address(mut self, lines: impl IntoIterator<Item = String>) -> Self {
        self.inner.address = lines.into_iter().collect();
        self
    }

    /// Appends an address line.
    #[inline]
    #[must_use]
    pub fn address_line(mut self, line: impl Into<String>) -> Self {
        self.inner.address.push(line.into());
        self
    }

    #[inline]
    #[must_use]
    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.inner.city = Some(city.into());
        self
    }

    #[inline]
    #[must_use]
    pub fn city_code(mut self, city_code: impl Into<String>) -> Self {
        self.inner.city_code = Some(city_code.into());
        self
    }

    #[inline]
    #[must_use]
    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.inner.country = Some(country.into());
        self
    }

    #[inline]
    #[must_use]
    pub fn province(mut self, province: impl Into<String>) -> Self {
        self.inner.province = Some(province.into());
        self
    }

    #[inline]
    #[must_use]
    pub fn thoroughfare(mut self, thoroughfare: impl Into<String>) -> Self {
        self.inner.thoroughfare = Some(thoroughfare.into());
        self
    }

    #[inline]
    #[must_use]
    pub fn build(self) -> Location {
        self.inner
    }
}
