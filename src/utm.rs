//! Provides the Transverse Mercator projector and [`UtmPoint`].
//!
//! The forward and inverse transforms are the Krüger power series
//! truncated at the 6th order of the longitude difference,
//! those are sub-meter within ±3° from the central meridian.
//!
//! # Example
//!
//! ```
//! # use gridconv::*;
//! # use gridconv::utm::{project, unproject};
//! # use gridconv::zone::Hemisphere;
//! let utm = project(51.5074, -0.1278);
//! assert_eq!(utm.zone_number(), &30);
//! assert_eq!(utm.zone_letter(), &Some('U'));
//! assert!((utm.easting() - 699316.234).abs() < 0.001);
//! assert!((utm.northing() - 5710163.759).abs() < 0.001);
//!
//! let point = unproject(*utm.easting(), *utm.northing(), 30, Some('U'), Hemisphere::North);
//! assert!((point.latitude() - 51.5074).abs() < 1e-7);
//! assert!((point.longitude() + 0.1278).abs() < 1e-7);
//! ```
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::coefficients::SeriesCoefficients;
use crate::error::UtmError;
use crate::point::Point;
use crate::zone::{self, Hemisphere};

/// The scale factor on the central meridian.
pub const K0: f64 = 0.9996;
/// The false easting \[m\].
pub const FALSE_EASTING: f64 = 500_000.0;
/// The false northing \[m\] of the southern hemisphere.
pub const FALSE_NORTHING: f64 = 10_000_000.0;

/// Represents a projected position, UTM easting and northing in a zone.
///
/// # Example
///
/// ```
/// # use gridconv::*;
/// # use gridconv::zone::Hemisphere;
/// # fn main() -> Result<()> {
/// let utm = UtmPoint::try_new(334368.634, 6250948.345, 56, Some('h'))?;
/// assert_eq!(utm.zone_letter(), &Some('H'));
/// assert_eq!(utm.hemisphere(), Hemisphere::South);
///
/// let point = utm.to_point();
/// assert!((point.latitude() + 33.8688).abs() < 1e-7);
/// assert!((point.longitude() - 151.2093).abs() < 1e-7);
/// # Ok(())}
/// ```
#[derive(Debug, PartialEq, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UtmPoint {
    /// The easting \[m\], including the false easting
    pub(crate) easting: f64,
    /// The northing \[m\], including the false northing on the southern hemisphere
    pub(crate) northing: f64,
    /// The zone number, 1 to 60
    pub(crate) zone_number: u8,
    /// The latitude band letter
    pub(crate) zone_letter: Option<char>,
    /// The hemisphere of the false northing
    pub(crate) hemisphere: Hemisphere,
}

impl UtmPoint {
    /// Makes a [`UtmPoint`].
    ///
    /// This does not check the value range.
    #[inline]
    pub const fn new(
        easting: f64,
        northing: f64,
        zone_number: u8,
        zone_letter: Option<char>,
        hemisphere: Hemisphere,
    ) -> Self {
        Self {
            easting,
            northing,
            zone_number,
            zone_letter,
            hemisphere,
        }
    }

    /// Makes a [`UtmPoint`] with checking.
    ///
    /// `zone_letter` is uppercased, and the hemisphere follows it;
    /// without a letter, the point is taken as northern.
    ///
    /// # Errors
    ///
    /// If `zone_number` is out of 1 <= and <= 60,
    /// or `zone_letter` is not a latitude band letter.
    ///
    /// # Example
    ///
    /// ```
    /// # use gridconv::*;
    /// assert!(UtmPoint::try_new(500000.0, 0.0, 31, Some('N')).is_ok());
    /// assert!(UtmPoint::try_new(500000.0, 0.0, 0, Some('N')).is_err());
    /// assert!(UtmPoint::try_new(500000.0, 0.0, 61, None).is_err());
    /// assert!(UtmPoint::try_new(500000.0, 0.0, 31, Some('O')).is_err());
    /// ```
    pub fn try_new(
        easting: f64,
        northing: f64,
        zone_number: u8,
        zone_letter: Option<char>,
    ) -> Result<Self, UtmError> {
        if !(1..=60).contains(&zone_number) {
            return Err(UtmError::ZoneNumber(zone_number));
        }

        let zone_letter = match zone_letter {
            Some(c) if zone::zone_letter_index(c).is_some() => Some(c.to_ascii_uppercase()),
            Some(c) => return Err(UtmError::ZoneLetter(c)),
            None => None,
        };

        let hemisphere = zone_letter
            .map(Hemisphere::from_zone_letter)
            .unwrap_or(Hemisphere::North);

        Ok(Self::new(
            easting,
            northing,
            zone_number,
            zone_letter,
            hemisphere,
        ))
    }

    /// Returns the easting \[m\] of `self`.
    #[inline]
    pub const fn easting(&self) -> &f64 {
        &self.easting
    }

    /// Returns the northing \[m\] of `self`.
    #[inline]
    pub const fn northing(&self) -> &f64 {
        &self.northing
    }

    /// Returns the zone number of `self`.
    #[inline]
    pub const fn zone_number(&self) -> &u8 {
        &self.zone_number
    }

    /// Returns the latitude band letter of `self`.
    #[inline]
    pub const fn zone_letter(&self) -> &Option<char> {
        &self.zone_letter
    }

    /// Returns the hemisphere of `self`.
    ///
    /// The zone letter takes precedence over the stored hemisphere.
    #[inline]
    pub fn hemisphere(&self) -> Hemisphere {
        self.zone_letter
            .map(Hemisphere::from_zone_letter)
            .unwrap_or(self.hemisphere)
    }

    /// Makes a [`UtmPoint`] by projecting `point` on WGS84.
    ///
    /// See [`project`].
    #[inline]
    pub fn from_point(point: &Point) -> Self {
        project(point.latitude, point.longitude)
    }

    /// Returns the position of `self` on WGS84.
    ///
    /// See [`unproject`].
    #[inline]
    pub fn to_point(&self) -> Point {
        self.to_point_with(SeriesCoefficients::wgs84())
    }

    /// Returns the position of `self` on the ellipsoid of `coef`.
    #[inline]
    pub fn to_point_with(&self, coef: &SeriesCoefficients) -> Point {
        unproject_with(
            self.easting,
            self.northing,
            self.zone_number,
            self.zone_letter,
            self.hemisphere,
            coef,
        )
    }
}

impl From<&Point> for UtmPoint {
    /// see [`UtmPoint::from_point()`]
    #[inline]
    fn from(value: &Point) -> Self {
        Self::from_point(value)
    }
}

impl From<&UtmPoint> for Point {
    /// see [`UtmPoint::to_point()`]
    #[inline]
    fn from(value: &UtmPoint) -> Self {
        value.to_point()
    }
}

/// Projects the position on WGS84 to UTM.
///
/// The zone is resolved by [`zone::zone_number`] and [`zone::zone_letter`],
/// the zone letter is [`None`] when `latitude` is out of -80.0 <= and <= 84.0.
///
/// This does not check the value range,
/// the result is meaningless out of -80.0 <= `latitude` <= 84.0.
///
/// # Example
///
/// ```
/// # use gridconv::utm::project;
/// # use gridconv::zone::Hemisphere;
/// let utm = project(-33.8688, 151.2093);
/// assert_eq!(utm.zone_number(), &56);
/// assert_eq!(utm.zone_letter(), &Some('H'));
/// assert_eq!(utm.hemisphere(), Hemisphere::South);
/// assert!((utm.easting() - 334368.634).abs() < 0.001);
/// assert!((utm.northing() - 6250948.345).abs() < 0.001);
/// ```
#[inline]
pub fn project(latitude: f64, longitude: f64) -> UtmPoint {
    project_with(latitude, longitude, SeriesCoefficients::wgs84())
}

/// Projects the position to UTM on the ellipsoid of `coef`.
///
/// See [`project`].
pub fn project_with(latitude: f64, longitude: f64, coef: &SeriesCoefficients) -> UtmPoint {
    let zone_number = zone::zone_number(latitude, longitude);
    let zone_letter = zone::zone_letter(latitude);

    let lat = latitude.to_radians();
    let (lat_sin, lat_cos) = lat.sin_cos();
    let lat_tan = lat.tan();
    let lat_tan2 = lat_tan * lat_tan;
    let lat_tan4 = lat_tan2 * lat_tan2;

    let central = zone::central_meridian(zone_number).to_radians();

    let n = coef.semi_major_axis / (1.0 - coef.e2 * lat_sin * lat_sin).sqrt();
    let c = coef.e_p2 * lat_cos * lat_cos;

    let a = lat_cos * (longitude.to_radians() - central);
    let a2 = a * a;
    let a3 = a2 * a;
    let a4 = a3 * a;
    let a5 = a4 * a;
    let a6 = a5 * a;

    let m = coef.meridian_arc(lat);

    let easting = K0
        * n
        * (a + a3 / 6.0 * (1.0 - lat_tan2 + c)
            + a5 / 120.0 * (5.0 - 18.0 * lat_tan2 + lat_tan4 + 72.0 * c - 58.0 * coef.e_p2))
        + FALSE_EASTING;

    let mut northing = K0
        * (m + n
            * lat_tan
            * (a2 / 2.0
                + a4 / 24.0 * (5.0 - lat_tan2 + 9.0 * c + 4.0 * c * c)
                + a6 / 720.0 * (61.0 - 58.0 * lat_tan2 + lat_tan4 + 600.0 * c - 330.0 * coef.e_p2)));

    let hemisphere = Hemisphere::from_latitude(latitude);
    if !hemisphere.is_north() {
        northing += FALSE_NORTHING;
    }

    UtmPoint::new(easting, northing, zone_number, zone_letter, hemisphere)
}

/// Returns the position on WGS84 of the UTM coordinate.
///
/// When `zone_letter` is given, the hemisphere is derived from it
/// (letters N to X are northern) and `hemisphere` is ignored.
///
/// This does not check the value range,
/// invalid zone numbers and letters give meaningless results.
///
/// # Example
///
/// ```
/// # use gridconv::utm::unproject;
/// # use gridconv::zone::Hemisphere;
/// // The zone letter wins over the hemisphere
/// let a = unproject(334368.634, 6250948.345, 56, Some('H'), Hemisphere::North);
/// let b = unproject(334368.634, 6250948.345, 56, None, Hemisphere::South);
/// assert_eq!(a, b);
/// assert!((a.latitude() + 33.8688).abs() < 1e-7);
/// ```
#[inline]
pub fn unproject(
    easting: f64,
    northing: f64,
    zone_number: u8,
    zone_letter: Option<char>,
    hemisphere: Hemisphere,
) -> Point {
    unproject_with(
        easting,
        northing,
        zone_number,
        zone_letter,
        hemisphere,
        SeriesCoefficients::wgs84(),
    )
}

/// Returns the position on the ellipsoid of `coef` of the UTM coordinate.
///
/// See [`unproject`].
pub fn unproject_with(
    easting: f64,
    northing: f64,
    zone_number: u8,
    zone_letter: Option<char>,
    hemisphere: Hemisphere,
    coef: &SeriesCoefficients,
) -> Point {
    let hemisphere = zone_letter
        .map(Hemisphere::from_zone_letter)
        .unwrap_or(hemisphere);

    let x = easting - FALSE_EASTING;
    let y = if hemisphere.is_north() {
        northing
    } else {
        northing - FALSE_NORTHING
    };

    let p = coef.footpoint_latitude(y / K0);

    let (p_sin, p_cos) = p.sin_cos();
    let p_tan = p.tan();
    let p_tan2 = p_tan * p_tan;
    let p_tan4 = p_tan2 * p_tan2;

    let ep_sin = 1.0 - coef.e2 * p_sin * p_sin;

    let n = coef.semi_major_axis / ep_sin.sqrt();
    // the ratio of the radii of curvature, M / N
    let r = (1.0 - coef.e2) / ep_sin;
    let c = coef.e_p2 * p_cos * p_cos;
    let c2 = c * c;

    let d = x / (n * K0);
    let d2 = d * d;
    let d3 = d2 * d;
    let d4 = d3 * d;
    let d5 = d4 * d;
    let d6 = d5 * d;

    let latitude = p
        - (p_tan / r)
            * (d2 / 2.0 - d4 / 24.0 * (5.0 + 3.0 * p_tan2 + 10.0 * c - 4.0 * c2 - 9.0 * coef.e_p2)
                + d6 / 720.0
                    * (61.0 + 90.0 * p_tan2 + 298.0 * c + 45.0 * p_tan4
                        - 252.0 * coef.e_p2
                        - 3.0 * c2));

    let longitude = (d - d3 / 6.0 * (1.0 + 2.0 * p_tan2 + c)
        + d5 / 120.0 * (5.0 - 2.0 * c + 28.0 * p_tan2 - 3.0 * c2 + 8.0 * coef.e_p2 + 24.0 * p_tan4))
        / p_cos;

    Point::new(
        latitude.to_degrees(),
        longitude.to_degrees() + zone::central_meridian(zone_number),
    )
}
