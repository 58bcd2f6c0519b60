//! Provides [`Point`].
use std::ops::{Add, AddAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::coefficients::SeriesCoefficients;
use crate::datum::{Correction, DatumTransform};
use crate::ellipsoid::Ellipsoid;
use crate::error::{Axis, MgrsError, PointError, TileError};
use crate::mgrs::Mgrs;
use crate::tile::TilePixel;
use crate::utm::{self, UtmPoint};

/// Folds `t` \[deg\] over the poles into -90.0 <= and <= 90.0.
#[inline]
fn fold_latitude(t: f64) -> f64 {
    if t.is_nan() || (-90.0..=90.0).contains(&t) {
        return t;
    }
    match (t + 90.0).rem_euclid(360.0) {
        s if s <= 180.0 => s - 90.0,
        s => 270.0 - s,
    }
}

/// Wraps `t` \[deg\] into -180.0 <= and <= 180.0.
#[inline]
fn wrap_longitude(t: f64) -> f64 {
    if t.is_nan() || (-180.0..=180.0).contains(&t) {
        return t;
    }
    (t + 180.0).rem_euclid(360.0) - 180.0
}

/// Represents a geodetic position, a pair of latitude and longitude.
///
/// The ellipsoidal height is taken as zero throughout this crate.
///
/// # Example
///
/// ```
/// # use gridconv::*;
/// # fn main() -> Result<()> {
/// // Construct
/// let point = Point::new(51.5074, -0.1278);
/// assert_eq!(point.latitude(), &51.5074);
/// assert_eq!(point.longitude(), &-0.1278);
///
/// // Convert
/// assert_eq!(point.to_utm().zone_number(), &30);
/// assert_eq!(point.to_mgrs()?.to_string(), "30U XC 99316 10163");
/// assert_eq!(point.to_tile(10).x(), &511);
/// # Ok(())}
/// ```
#[derive(Debug, PartialEq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    /// The latitude \[deg\] of the point
    pub(crate) latitude: f64,
    /// The longitude \[deg\] of the point
    pub(crate) longitude: f64,
}

impl From<(f64, f64)> for Point {
    /// see [`Point::new()`]
    #[inline]
    fn from(rhs: (f64, f64)) -> Self {
        Self::new(rhs.0, rhs.1)
    }
}

impl From<Point> for (f64, f64) {
    #[inline]
    fn from(value: Point) -> Self {
        (value.latitude, value.longitude)
    }
}

impl Add<Correction> for Point {
    type Output = Self;

    fn add(self, rhs: Correction) -> Self::Output {
        Self::Output::new(
            self.latitude + rhs.latitude,
            self.longitude + rhs.longitude,
        )
    }
}

impl Add<&Correction> for &Point {
    type Output = Point;

    fn add(self, rhs: &Correction) -> Self::Output {
        Self::Output::new(
            self.latitude + rhs.latitude,
            self.longitude + rhs.longitude,
        )
    }
}

impl AddAssign<&Correction> for Point {
    fn add_assign(&mut self, rhs: &Correction) {
        self.latitude += rhs.latitude;
        self.longitude += rhs.longitude;
    }
}

impl Point {
    /// Makes a [`Point`].
    ///
    /// This does not check the value range.
    ///
    /// # Example
    ///
    /// ```
    /// # use gridconv::*;
    /// let point = Point::new(35.0, 145.0);
    /// assert_eq!(point.latitude(), &35.0);
    /// assert_eq!(point.longitude(), &145.0);
    /// ```
    #[inline]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Makes a [`Point`] with checking.
    ///
    /// # Errors
    ///
    /// If `latitude` and/or `longitude` is NaN or out-of-range,
    /// `latitude` must satisfy -90.0 <= and <= 90.0
    /// and `longitude` does -180.0 <= and <= 180.0.
    ///
    /// # Example
    ///
    /// ```
    /// # use gridconv::*;
    /// # fn main() -> Result<()> {
    /// let point = Point::try_new(35.0, 145.0)?;
    /// assert_eq!(point, Point::new(35.0, 145.0));
    ///
    /// // If out-of-range, returns Err
    /// assert!(Point::try_new(91.0, 145.0).is_err());
    /// assert!(Point::try_new(35.0, 181.0).is_err());
    /// assert!(Point::try_new(f64::NAN, 145.0).is_err());
    /// assert!(Point::try_new(35.0, f64::NAN).is_err());
    /// # Ok(())}
    /// ```
    pub fn try_new(latitude: f64, longitude: f64) -> Result<Self, PointError> {
        check(Axis::Latitude, latitude, 90.0)?;
        check(Axis::Longitude, longitude, 180.0)?;
        Ok(Self::new(latitude, longitude))
    }

    /// Returns the latitude of `self`.
    #[inline]
    pub const fn latitude(&self) -> &f64 {
        &self.latitude
    }

    /// Returns the longitude of `self`.
    #[inline]
    pub const fn longitude(&self) -> &f64 {
        &self.longitude
    }

    /// Returns `self` brought into -90.0 <= latitude <= 90.0
    /// and -180.0 <= longitude <= 180.0.
    ///
    /// The latitude is reflected over the pole,
    /// and the longitude is wrapped by 360°.
    ///
    /// # Example
    ///
    /// ```
    /// # use gridconv::*;
    /// let point = Point::new(100.0, 200.0);
    /// assert_eq!(point.normalize(), Point::new(80.0, -160.0));
    /// ```
    pub fn normalize(&self) -> Self {
        let latitude = fold_latitude(self.latitude);
        let longitude = wrap_longitude(self.longitude);
        Self::new(latitude, longitude)
    }

    /// Returns the UTM projection of `self` on WGS84.
    ///
    /// See [`utm::project`].
    #[inline]
    pub fn to_utm(&self) -> UtmPoint {
        UtmPoint::from_point(self)
    }

    /// Returns the UTM projection of `self` on the ellipsoid of `coef`.
    ///
    /// See [`utm::project_with`].
    #[inline]
    pub fn to_utm_with(&self, coef: &SeriesCoefficients) -> UtmPoint {
        utm::project_with(self.latitude, self.longitude, coef)
    }

    /// Returns the MGRS reference of `self`.
    ///
    /// # Errors
    ///
    /// If [`latitude`](Point::latitude) is out of -80.0 <= and <= 84.0,
    /// [`longitude`](Point::longitude) is out of -180.0 <= and <= 180.0,
    /// or either is NaN.
    ///
    /// See [`Mgrs::try_from_point`].
    #[inline]
    pub fn to_mgrs(&self) -> Result<Mgrs, MgrsError> {
        Mgrs::try_from_point(self)
    }

    /// Returns the web-map tile of `self` at `zoom`.
    ///
    /// This does not check the value range, see [`TilePixel::from_point`].
    #[inline]
    pub fn to_tile(&self, zoom: u8) -> TilePixel {
        TilePixel::from_point(self, zoom)
    }

    /// Returns the web-map tile of `self` at `zoom` with checking.
    ///
    /// # Errors
    ///
    /// See [`TilePixel::try_from_point`].
    #[inline]
    pub fn try_to_tile(&self, zoom: u8) -> Result<TilePixel, TileError> {
        TilePixel::try_from_point(self, zoom)
    }

    /// Returns the position of `self` shifted from the datum on `from`
    /// to the datum on `to` by `params`.
    ///
    /// See [`DatumTransform::forward`].
    ///
    /// # Example
    ///
    /// ```
    /// # use gridconv::*;
    /// let point = Point::new(55.75, 37.62);
    /// let sk42 = point.transform(&Ellipsoid::WGS84, &Ellipsoid::SK42, &DatumTransform::WGS84_TO_SK42);
    /// let wgs84 = sk42.transform(&Ellipsoid::SK42, &Ellipsoid::WGS84, &DatumTransform::SK42_TO_WGS84);
    /// assert!((wgs84.latitude() - 55.75).abs() < 1e-6);
    /// assert!((wgs84.longitude() - 37.62).abs() < 1e-6);
    /// ```
    #[inline]
    pub fn transform(&self, from: &Ellipsoid, to: &Ellipsoid, params: &DatumTransform) -> Self {
        params.forward(self, from, to)
    }
}

#[inline]
fn check(axis: Axis, value: f64, bound: f64) -> Result<(), PointError> {
    if value.is_nan() {
        return Err(PointError::NaN { axis });
    }
    if value.lt(&-bound) || bound.lt(&value) {
        return Err(PointError::OutOfRange {
            axis,
            value,
            low: -bound,
            high: bound,
        });
    }
    Ok(())
}
