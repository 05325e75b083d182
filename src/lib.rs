//! # geocoord
//!
//! Geodetic calculators and coordinate conversion between
//! WGS84, GCJ02 and BD09, the coordinate systems of the Chinese web maps.
//!
//! ```
//! use geocoord::*;
//!
//! fn main() -> Result<()> {
//!     // Makes points on WGS84
//!     let beijing = GeoPoint::wgs84(39.9042, 116.4074);
//!     let shanghai = GeoPoint::wgs84(31.2304, 121.4737);
//!
//!     // Converts into GCJ02 and BD09
//!     let gcj02 = beijing.to_gcj02()?;
//!     // Prints Latitude: 39.905603 (39°54'20"), Longitude: 116.413642 (116°24'49"), Type: gcj02
//!     println!("{gcj02}");
//!     let bd09 = gcj02.to_bd09()?;
//!     assert_eq!(bd09, GeoPoint::new(39.911865, 116.420046, CoordinateSystem::BD09));
//!
//!     // Distance [m] and initial bearing [deg] on the WGS84 ellipsoid
//!     let distance = Vincenty.distance(&beijing, &shanghai)?;
//!     let bearing = Vincenty.bearing(&beijing, &shanghai)?;
//!     assert!((distance - 1_065_846.49).abs() < 0.01);
//!
//!     // and on the sphere, close to the ellipsoid
//!     let spherical = Haversine.distance(&beijing, &shanghai)?;
//!     assert!((spherical - distance).abs() / distance < 0.005);
//!
//!     // Goes back by the distance and the bearing
//!     let result = beijing.offset(distance, bearing, &Vincenty)?;
//!     assert_eq!(result, shanghai);
//!
//!     Ok(())
//! }
//! ```
//!
//! Features:
//!
//! - Conversion between WGS84, GCJ02 and BD09 ([`trans`], [`converter`])
//!   - GCJ02 offset applies only in China, see [`trans::is_in_china`]
//!   - GCJ02 to WGS84 is a one-step approximation, leaves about 2 m error
//!     in the eastern cities and up to about 5 m across China
//! - Geodetic calculation by interchangeable [`GeoCalculator`]s
//!   - [`Haversine`] on the sphere, closed-form and fast
//!   - [`Vincenty`] on the WGS84 ellipsoid, iterative and accurate
//!   - [`Fallback`], [`Vincenty`] falling back to [`Haversine`] when not converged
//!   - Distance, bearing, offset, area, center and distance to segment,
//!     with batch operations in [`calculator`]
//! - Aggregates, [`GeoPointBounds`] and [`GeoPointCollection`]
//! - Location fixes, [`Location`] and its [`LocationBuilder`]
//! - Degree-minute-second notation ([`dms`]) and units ([`unit`]), with Chinese unit symbols
//!
//! The points must share the coordinate system for calculation,
//! it fails with an error otherwise (there is no implicit conversion except in [`Vincenty`]).
//!
//! # Serialization and Deserialization
//!
//! It supports (de)serialization by [`serde` crate](https://crates.io/crates/serde)
//! for the value types including [`GeoPoint`], [`GeoPointBounds`] and [`GeoPointCollection`]
//! only if the feature `serde` is enabled (default).
//! The coordinate system is serialized by its [key](CoordinateSystem::key).
//!
//! ```
//! use geocoord::{CoordinateSystem, GeoPoint, GeoPointBounds};
//!
//! fn main() -> serde_json::Result<()> {
//!     let point = GeoPoint::new(39.9042, 116.4074, CoordinateSystem::BD09);
//!
//!     // Serialize to json
//!     let json = serde_json::to_string(&point)?;
//!     assert_eq!(json, r#"{"latitude":39.9042,"longitude":116.4074,"type":"bd09mc"}"#);
//!
//!     // Deserialize from json
//!     let result: GeoPoint = serde_json::from_str(&json)?;
//!     assert_eq!(result, point);
//!
//!     // Bounds has sw and ne
//!     let bounds = GeoPointBounds::new(GeoPoint::wgs84(0.0, 0.0), GeoPoint::wgs84(1.0, 1.0));
//!     let json = serde_json::to_string(&bounds)?;
//!     assert_eq!(
//!         json,
//!         r#"{"sw":{"latitude":0.0,"longitude":0.0,"type":"wgs84"},"ne":{"latitude":1.0,"longitude":1.0,"type":"wgs84"}}"#
//!     );
//!
//!     Ok(())
//! }
//! ```
//!
//! # Logging
//!
//! It emits events by [`tracing` crate](https://crates.io/crates/tracing),
//! install a subscriber to see them.
//! [`Vincenty`] warns when the iteration is exhausted,
//! and [`Fallback`] logs its retry on `DEBUG` level.

#[doc(inline)]
pub use bounds::GeoPointBounds;
#[doc(inline)]
pub use builder::{GeoPointCollectionBuilder, LocationBuilder};
#[doc(inline)]
pub use calculator::{Fallback, GeoCalculator, Haversine, PairDistance, Vincenty};
#[doc(inline)]
pub use collection::GeoPointCollection;
#[doc(inline)]
pub use error::{Error, Result};
#[doc(inline)]
pub use location::Location;
#[doc(inline)]
pub use point::GeoPoint;
#[doc(inline)]
pub use system::CoordinateSystem;

#[macro_use]
mod internal;

pub mod bounds;
mod builder;
pub mod calculator;
pub mod collection;
pub mod converter;
pub mod dms;
pub mod error;
pub mod location;
pub mod point;
pub mod system;
pub mod trans;
pub mod unit;
pub mod utils;
mod vector;
