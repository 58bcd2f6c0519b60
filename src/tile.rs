//! Provides the Web-Mercator tile index mapper.
//!
//! # Example
//!
//! ```
//! # use gridconv::tile::{tile_x, tile_y};
//! assert_eq!(tile_x(-0.1278, 10), 511);
//! assert_eq!(tile_y(51.5074, 10), 340);
//! ```
use std::f64::consts::PI;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::TileError;
use crate::point::Point;

/// The latitude limit \[deg\] of the Web-Mercator projection,
/// where the map is square.
pub const MAX_LATITUDE: f64 = 85.0511287798;

/// The greatest supported zoom level.
pub const MAX_ZOOM: u8 = 31;

#[inline]
fn tiles(zoom: u8) -> f64 {
    2_f64.powi(i32::from(zoom))
}

/// Returns the tile column of `longitude` \[deg\] at `zoom`.
///
/// This does not check the value range.
///
/// # Example
///
/// ```
/// # use gridconv::tile::tile_x;
/// assert_eq!(tile_x(0.0, 0), 0);
/// assert_eq!(tile_x(-180.0, 1), 0);
/// assert_eq!(tile_x(179.9, 1), 1);
/// ```
#[inline]
pub fn tile_x(longitude: f64, zoom: u8) -> i64 {
    ((longitude + 180.0) / 360.0 * tiles(zoom)).floor() as i64
}

/// Returns the tile row of `latitude` \[deg\] at `zoom`, counted from the north.
///
/// This does not check the value range,
/// the result is meaningless out of ±[`MAX_LATITUDE`].
///
/// # Example
///
/// ```
/// # use gridconv::tile::tile_y;
/// assert_eq!(tile_y(0.0, 1), 1);
/// assert_eq!(tile_y(85.0, 0), 0);
/// ```
#[inline]
pub fn tile_y(latitude: f64, zoom: u8) -> i64 {
    let r = latitude.to_radians();
    ((1.0 - (r.tan() + 1.0 / r.cos()).ln() / PI) / 2.0 * tiles(zoom)).floor() as i64
}

/// Represents a slippy-map tile.
///
/// # Example
///
/// ```
/// # use gridconv::*;
/// # fn main() -> Result<()> {
/// let tile = TilePixel::try_from_point(&Point::new(35.6762, 139.6503), 15)?;
/// assert_eq!(tile.x(), &29095);
/// assert_eq!(tile.y(), &12903);
/// assert_eq!(tile.zoom(), &15);
///
/// assert!(TilePixel::try_from_point(&Point::new(86.0, 139.6503), 15).is_err());
/// # Ok(())}
/// ```
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TilePixel {
    x: i64,
    y: i64,
    zoom: u8,
}

impl TilePixel {
    /// Makes a [`TilePixel`].
    ///
    /// This does not check the value range.
    #[inline]
    pub const fn new(x: i64, y: i64, zoom: u8) -> Self {
        Self { x, y, zoom }
    }

    /// Makes a [`TilePixel`] which contains `point`.
    ///
    /// This does not check the value range.
    #[inline]
    pub fn from_point(point: &Point, zoom: u8) -> Self {
        Self::new(
            tile_x(point.longitude, zoom),
            tile_y(point.latitude, zoom),
            zoom,
        )
    }

    /// Makes a [`TilePixel`] which contains `point` with checking.
    ///
    /// # Errors
    ///
    /// If the latitude is out of ±[`MAX_LATITUDE`], the longitude is out of
    /// -180.0 <= and <= 180.0, either is NaN, or `zoom` exceeds [`MAX_ZOOM`].
    ///
    /// Longitude 180.0 belongs to the last column.
    pub fn try_from_point(point: &Point, zoom: u8) -> Result<Self, TileError> {
        if zoom > MAX_ZOOM {
            return Err(TileError::Zoom(zoom));
        }
        if !(-MAX_LATITUDE..=MAX_LATITUDE).contains(&point.latitude) {
            return Err(TileError::Latitude {
                value: point.latitude,
                limit: MAX_LATITUDE,
            });
        }
        if !(-180.0..=180.0).contains(&point.longitude) {
            return Err(TileError::Longitude(point.longitude));
        }

        let mut tile = Self::from_point(point, zoom);
        tile.x = tile.x.min((1_i64 << zoom) - 1);
        Ok(tile)
    }

    /// Returns the column of `self`.
    #[inline]
    pub const fn x(&self) -> &i64 {
        &self.x
    }

    /// Returns the row of `self`.
    #[inline]
    pub const fn y(&self) -> &i64 {
        &self.y
    }

    /// Returns the zoom level of `self`.
    #[inline]
    pub const fn zoom(&self) -> &u8 {
        &self.zoom
    }

    /// Returns the position of the north-west corner of `self`.
    ///
    /// # Example
    ///
    /// ```
    /// # use gridconv::*;
    /// let point = TilePixel::new(0, 0, 0).north_west();
    /// assert!((point.latitude() - 85.0511287798066).abs() < 1e-9);
    /// assert_eq!(point.longitude(), &-180.0);
    /// ```
    pub fn north_west(&self) -> Point {
        let n = tiles(self.zoom);
        let latitude = (PI * (1.0 - 2.0 * self.y as f64 / n)).sinh().atan();
        Point::new(latitude.to_degrees(), self.x as f64 / n * 360.0 - 180.0)
    }
}

impl From<(&Point, u8)> for TilePixel {
    /// see [`TilePixel::from_point()`]
    #[inline]
    fn from(value: (&Point, u8)) -> Self {
        Self::from_point(value.0, value.1)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_tile_x() {
        assert_eq!(tile_x(0.0, 0), 0);
        assert_eq!(tile_x(-180.0, 1), 0);
        assert_eq!(tile_x(179.9, 1), 1);
        assert_eq!(tile_x(0.0, 1), 1);
        assert_eq!(tile_x(-0.1278, 10), 511);
        assert_eq!(tile_x(151.2093, 12), 3768);
    }

    #[test]
    fn test_tile_y() {
        assert_eq!(tile_y(0.0, 1), 1);
        assert_eq!(tile_y(51.5074, 10), 340);
        assert_eq!(tile_y(-33.8688, 12), 2457);

        // just inside the limits
        assert_eq!(tile_y(MAX_LATITUDE, 3), 0);
        assert_eq!(tile_y(-MAX_LATITUDE, 3), 7);
    }

    #[test]
    fn test_try_from_point() {
        assert_eq!(
            TilePixel::try_from_point(&Point::new(51.5074, -0.1278), 10),
            Ok(TilePixel::new(511, 340, 10))
        );

        assert_eq!(
            TilePixel::try_from_point(&Point::new(0.0, 0.0), 32),
            Err(TileError::Zoom(32))
        );
        assert_eq!(
            TilePixel::try_from_point(&Point::new(90.0, 0.0), 1),
            Err(TileError::Latitude {
                value: 90.0,
                limit: MAX_LATITUDE
            })
        );
        assert_eq!(
            TilePixel::try_from_point(&Point::new(0.0, 181.0), 1),
            Err(TileError::Longitude(181.0))
        );
        assert!(TilePixel::try_from_point(&Point::new(f64::NAN, 0.0), 1).is_err());
    }

    #[test]
    fn test_try_from_point_antimeridian() {
        // the east edge is in the last column
        assert_eq!(
            TilePixel::try_from_point(&Point::new(0.0, 180.0), 1),
            Ok(TilePixel::new(1, 1, 1))
        );
        assert_eq!(
            TilePixel::try_from_point(&Point::new(0.0, 180.0), 0),
            Ok(TilePixel::new(0, 0, 0))
        );
        assert_eq!(
            TilePixel::try_from_point(&Point::new(51.5074, 180.0), 10).map(|t| t.x),
            Ok(1023)
        );
        assert_eq!(
            TilePixel::try_from_point(&Point::new(0.0, -180.0), 1).map(|t| t.x),
            Ok(0)
        );

        // unguarded
        assert_eq!(tile_x(180.0, 1), 2);
    }

    #[test]
    fn test_north_west() {
        let actual = TilePixel::new(511, 340, 10).north_west();
        assert!((actual.latitude - 51.6180165487737).abs() < 1e-9);
        assert_eq!(actual.longitude, -0.3515625);

        let actual = TilePixel::new(1, 1, 1).north_west();
        assert!(actual.latitude.abs() < 1e-12);
        assert_eq!(actual.longitude, 0.0);

        // north-west of the point
        for (lat, lon) in [(51.5074, -0.1278), (-33.8688, 151.2093), (35.6762, 139.6503)] {
            let tile = TilePixel::from_point(&Point::new(lat, lon), 14);
            let corner = tile.north_west();
            assert!(corner.latitude >= lat);
            assert!(corner.longitude <= lon);
        }
    }
}
