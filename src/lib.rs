//! # gridconv
//!
//! Coordinate converter between geodetic latitude/longitude,
//! UTM (Universal Transverse Mercator), MGRS (Military Grid Reference System)
//! and Web-Mercator tiles, with the Molodensky datum shift between WGS84 and SK-42.
//!
//! ```
//! use gridconv::{Datum, Mgrs, Point, Result};
//!
//! fn main() -> Result<()> {
//!     // Makes a point on WGS84
//!     let origin = Point::try_new(51.5074, -0.1278)?;
//!
//!     // Projects to UTM, zone 30U
//!     let utm = origin.to_utm();
//!     assert_eq!(utm.zone_number(), &30);
//!     assert_eq!(utm.zone_letter(), &Some('U'));
//!     // Prints UTM: 699316.234 5710163.759
//!     println!("UTM: {:.3} {:.3}", utm.easting(), utm.northing());
//!
//!     // and back
//!     let point = utm.to_point();
//!     assert!((point.latitude() - 51.5074).abs() < 1e-7);
//!
//!     // Encodes to MGRS
//!     let mgrs = origin.to_mgrs()?;
//!     assert_eq!(mgrs.to_string(), "30U XC 99316 10163");
//!
//!     // and decodes, resolving 1 m
//!     let point = "30U XC 99316 10163".parse::<Mgrs>()?.to_point();
//!     assert!((point.latitude() - 51.5074).abs() < 1e-4);
//!
//!     // Shifts to SK-42
//!     let sk42 = Datum::WGS84.transform(&origin, &Datum::SK42);
//!     // Prints SK-42: Point { latitude: ..., longitude: ... }
//!     println!("SK-42: {sk42:?}");
//!
//!     Ok(())
//! }
//! ```
//!
//! Features:
//!
//! - Forward/inverse UTM projection with the Norway and Svalbard zone exceptions
//! - MGRS encoding/decoding, 1 m to 10 km precision on decoding
//! - WGS84 ⇄ SK-42 (Pulkovo 1942) datum shift by the abridged Molodensky formula
//! - Slippy-map tile indices
//! - Projection on any [`Ellipsoid`] through [`SeriesCoefficients`]
//!
//! The ellipsoidal height is not supported; every position is on the ellipsoid.
//!
//! # Serialization and Deserialization
//!
//! It supports (de)serialization by [`serde` crate](https://crates.io/crates/serde)
//! for all value types only if the feature `serde` is enabled.
//! [`Mgrs`] is (de)serialized as its text.
//!
//! ```
//! # #[cfg(feature = "serde")]
//! # fn main() -> serde_json::Result<()> {
//! use gridconv::{Mgrs, Point};
//!
//! let point = Point::new(51.5074, -0.1278);
//! let json = serde_json::to_string(&point)?;
//! assert_eq!(json, r#"{"latitude":51.5074,"longitude":-0.1278}"#);
//!
//! let mgrs: Mgrs = serde_json::from_str(r#""30U XC 99316 10163""#)?;
//! assert_eq!(mgrs, point.to_mgrs().unwrap());
//! # Ok(())}
//! # #[cfg(not(feature = "serde"))]
//! # fn main() {}
//! ```
//!
//! # Logging
//!
//! It emits [`tracing`](https://crates.io/crates/tracing) events,
//! e.g. on rejected MGRS references, install a subscriber to see them.
//!
//! # Features
//!
//! - `serde`: (de)serialization support
//! - `fma`: evaluates the series sums with [`f64::mul_add`]

#[doc(inline)]
pub use coefficients::SeriesCoefficients;
#[doc(inline)]
pub use datum::{Correction, Datum, DatumTransform};
#[doc(inline)]
pub use ellipsoid::Ellipsoid;
#[doc(inline)]
pub use error::{
    EllipsoidError, Error, MgrsError, ParseMgrsError, PointError, Result, TileError, UtmError,
};
#[doc(inline)]
pub use mgrs::Mgrs;
#[doc(inline)]
pub use point::Point;
#[doc(inline)]
pub use tile::TilePixel;
#[doc(inline)]
pub use utm::UtmPoint;
#[doc(inline)]
pub use zone::Hemisphere;

pub mod coefficients;
pub mod datum;
pub mod ellipsoid;
pub mod error;
mod internal;
pub mod mgrs;
pub mod point;
pub mod tile;
pub mod utm;
pub mod zone;
