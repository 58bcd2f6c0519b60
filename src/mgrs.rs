//! Provides the MGRS codec and [`Mgrs`].
//!
//! The codec carries its own projection series, independent of
//! [`SeriesCoefficients`](crate::SeriesCoefficients), and its own zone rule
//! without the Norway/Svalbard exceptions.
//!
//! # Example
//!
//! ```
//! # use gridconv::mgrs::{from_mgrs, to_mgrs};
//! assert_eq!(to_mgrs(51.5074, -0.1278), "30U XC 99316 10163");
//! assert_eq!(to_mgrs(85.0, 0.0), "Too far North");
//!
//! let point = from_mgrs("30U XC 99316 10163").unwrap();
//! assert!((point.latitude() - 51.5074).abs() < 1e-4);
//! assert!((point.longitude() + 0.1278).abs() < 1e-4);
//!
//! assert_eq!(from_mgrs("30U XC 99316"), None);
//! ```
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{MgrsError, ParseMgrsError};
use crate::internal::sin_series;
use crate::point::Point;
use crate::zone::{self, ZONE_LETTERS};

/// The scale factor on the central meridian
const K0: f64 = 0.9996;
/// The false easting \[m\]
const FALSE_EASTING: f64 = 500_000.0;
/// The second eccentricity squared
const E_P2: f64 = 0.006739496819936062;
/// The polar radius of curvature, 𝑎² / 𝑏 \[m\]
const POLAR_RADIUS: f64 = 40680631590769.0 / 6356752.314;
/// The meridian arc factor \[m\]
const ARC: f64 = 6367449.14570093;
/// The meridian arc series, for sin 2φ to sin 8φ
const FORWARD: [f64; 4] = [
    -0.00251882794504,
    0.00000264354112,
    -0.00000000345262,
    0.000000000004892,
];
/// The footpoint latitude series, for sin 2μ to sin 8μ
const INVERSE: [f64; 4] = [
    0.0025188266133249035,
    0.0000037009491206268,
    0.0000000074477705265,
    0.0000000000170359940,
];

/// The 100km column letters, rotated by (zone - 1) mod 3
const COLUMN_LETTERS: [&[u8; 8]; 3] = [b"ABCDEFGH", b"JKLMNPQR", b"STUVWXYZ"];
/// The 100km row letters, rotated by (zone - 1) mod 2
const ROW_LETTERS: [&[u8; 20]; 2] = [b"ABCDEFGHJKLMNPQRSTUV", b"FGHJKLMNPQRSTUVABCDE"];

/// The least northing \[10⁶ m\] of each latitude band
const MIN_NORTHING: [f64; 20] = [
    1.1, 2.0, 2.8, 3.7, 4.6, 5.5, 6.4, 7.3, 8.2, 9.1, 0.0, 0.8, 1.7, 2.6, 3.5, 4.4, 5.3, 6.2, 7.0,
    7.9,
];
/// The northing \[10⁶ m\] where the row letters of each latitude band start
const BAND_ROW_OFFSET: [f64; 20] = [
    0.0, 2.0, 2.0, 2.0, 4.0, 4.0, 6.0, 6.0, 8.0, 8.0, 0.0, 0.0, 0.0, 2.0, 2.0, 4.0, 4.0, 6.0, 6.0,
    6.0,
];

/// The number of digits of the full (1 m) precision.
const FULL_PRECISION: u8 = 5;

/// Represents a MGRS reference, a grid zone, a 100km square
/// and a numerical location within the square.
///
/// The canonical text is `"<zone><band> <column><row> <easting> <northing>"`,
/// e.g. `"30U XC 99316 10163"`.
///
/// [`Mgrs`] is made by [`Mgrs::try_from_point`] or parsing only,
/// so any [`Mgrs`] decodes successfully.
///
/// # Example
///
/// ```
/// # use gridconv::*;
/// # fn main() -> Result<()> {
/// let mgrs: Mgrs = "56H LH 34368 50948".parse()?;
/// assert_eq!(mgrs.zone_number(), &56);
/// assert_eq!(mgrs.band(), 'H');
/// assert_eq!(mgrs.square(), ('L', 'H'));
/// assert_eq!(mgrs.easting(), &34368);
/// assert_eq!(mgrs.northing(), &50948);
///
/// let point = mgrs.to_point();
/// assert!((point.latitude() + 33.8688).abs() < 1e-4);
/// assert!((point.longitude() - 151.2093).abs() < 1e-4);
///
/// assert_eq!(mgrs.to_string(), "56H LH 34368 50948");
/// # Ok(())}
/// ```
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Mgrs {
    /// The zone number, 1 to 60
    zone_number: u8,
    /// The index of the latitude band in [`ZONE_LETTERS`]
    band: u8,
    /// The index of the column letter in the zone's column set
    column: u8,
    /// The index of the row letter in the zone's row set
    row: u8,
    /// The easting \[m\] within the square
    easting: u32,
    /// The northing \[m\] within the square
    northing: u32,
    /// The number of digits of each numerical location, 1 to 5
    precision: u8,
}

impl Mgrs {
    /// Makes a [`Mgrs`] from `point`, in 1 m precision.
    ///
    /// The zone follows the regular 6° rule, no Norway/Svalbard exception applies.
    ///
    /// # Errors
    ///
    /// If the latitude is out of -80.0 <= and <= 84.0,
    /// the longitude is out of -180.0 <= and <= 180.0, or either is NaN.
    ///
    /// # Example
    ///
    /// ```
    /// # use gridconv::*;
    /// # fn main() -> Result<()> {
    /// let mgrs = Mgrs::try_from_point(&Point::new(0.0, 0.0))?;
    /// assert_eq!(mgrs.to_string(), "31N AA 66021 00000");
    ///
    /// assert_eq!(
    ///     Mgrs::try_from_point(&Point::new(-80.1, 0.0)),
    ///     Err(MgrsError::TooFarSouth)
    /// );
    /// # Ok(())}
    /// ```
    pub fn try_from_point(point: &Point) -> Result<Self, MgrsError> {
        encode(point.latitude, point.longitude).inspect_err(|error| {
            tracing::debug!(
                latitude = point.latitude,
                longitude = point.longitude,
                %error,
                "rejected MGRS encoding"
            );
        })
    }

    /// Returns the zone number of `self`.
    #[inline]
    pub const fn zone_number(&self) -> &u8 {
        &self.zone_number
    }

    /// Returns the latitude band letter of `self`.
    #[inline]
    pub fn band(&self) -> char {
        ZONE_LETTERS[usize::from(self.band)]
    }

    /// Returns the 100km-square identifier of `self`, the column and row letters.
    #[inline]
    pub fn square(&self) -> (char, char) {
        let zone = usize::from(self.zone_number) - 1;
        (
            char::from(COLUMN_LETTERS[zone % 3][usize::from(self.column)]),
            char::from(ROW_LETTERS[zone % 2][usize::from(self.row)]),
        )
    }

    /// Returns the easting \[m\] of `self` within the square.
    #[inline]
    pub const fn easting(&self) -> &u32 {
        &self.easting
    }

    /// Returns the northing \[m\] of `self` within the square.
    #[inline]
    pub const fn northing(&self) -> &u32 {
        &self.northing
    }

    /// Returns the number of digits of the numerical location of `self`, 1 to 5.
    ///
    /// A reference of precision 𝑛 resolves 10⁵⁻ⁿ m.
    #[inline]
    pub const fn precision(&self) -> &u8 {
        &self.precision
    }

    /// Returns the position of the south-west corner of the grid cell of `self`.
    ///
    /// # Example
    ///
    /// ```
    /// # use gridconv::*;
    /// # fn main() -> Result<()> {
    /// let point = "31N AA 66021 00000".parse::<Mgrs>()?.to_point();
    /// assert!(point.latitude().abs() < 1e-9);
    /// assert!((point.longitude() + 3.976e-6).abs() < 1e-9);
    /// # Ok(())}
    /// ```
    pub fn to_point(&self) -> Point {
        let band = usize::from(self.band);

        let mut rows = BAND_ROW_OFFSET[band] + f64::from(self.row) / 10.0;
        if rows < MIN_NORTHING[band] {
            rows += 2.0;
        }

        let x = f64::from(self.column + 1) * 100_000.0 + f64::from(self.easting) - FALSE_EASTING;
        let mut y = rows * 1_000_000.0 + f64::from(self.northing);
        if ZONE_LETTERS[band] < 'N' {
            y -= 10_000_000.0;
        }
        let x = x / K0;
        let y = y / K0;

        let mu = y / ARC;
        let phi = mu + sin_series(mu, &INVERSE);

        let tan = phi.tan();
        let t2 = tan * tan;
        let t4 = t2 * t2;
        let cos = phi.cos();
        let eta2 = E_P2 * cos * cos;
        let nu = POLAR_RADIUS / (1.0 + eta2).sqrt();

        let c2 = -1.0 - eta2;
        let c3 = -1.0 - 2.0 * t2 - eta2;
        let c4 = 5.0 + 3.0 * t2 + 6.0 * eta2
            - 6.0 * t2 * eta2
            - 3.0 * eta2 * eta2
            - 9.0 * t2 * eta2 * eta2;
        let c5 = 5.0 + 28.0 * t2 + 24.0 * t4 + 6.0 * eta2 + 8.0 * t2 * eta2;
        let c6 = -61.0 - 90.0 * t2 - 45.0 * t4 - 107.0 * eta2 + 162.0 * t2 * eta2;
        let c7 = -61.0 - 662.0 * t2 - 1320.0 * t4 - 720.0 * t4 * t2;
        let c8 = 1385.0 + 3633.0 * t2 + 4095.0 * t4 + 1575.0 * t4 * t2;

        let latitude = phi
            + tan / (2.0 * nu.powi(2)) * c2 * x.powi(2)
            + tan / (24.0 * nu.powi(4)) * c4 * x.powi(4)
            + tan / (720.0 * nu.powi(6)) * c6 * x.powi(6)
            + tan / (40320.0 * nu.powi(8)) * c8 * x.powi(8);

        let central_meridian = (f64::from(self.zone_number) * 6.0 - 183.0).to_radians();
        let longitude = central_meridian
            + x / (nu * cos)
            + c3 * x.powi(3) / (6.0 * nu.powi(3) * cos)
            + c5 * x.powi(5) / (120.0 * nu.powi(5) * cos)
            + c7 * x.powi(7) / (5040.0 * nu.powi(7) * cos);

        Point::new(latitude.to_degrees(), longitude.to_degrees())
    }
}

fn encode(latitude: f64, longitude: f64) -> Result<Mgrs, MgrsError> {
    if latitude.is_nan() || longitude.is_nan() {
        return Err(MgrsError::NaN);
    }
    if latitude < zone::MIN_LATITUDE {
        return Err(MgrsError::TooFarSouth);
    }
    if latitude > zone::MAX_LATITUDE {
        return Err(MgrsError::TooFarNorth);
    }
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(MgrsError::Longitude);
    }

    // no Norway/Svalbard exception, unlike zone::zone_number
    let zone_number = zone::regular_zone_number(longitude);
    let central_meridian = f64::from(zone_number) * 6.0 - 183.0;

    let phi = latitude.to_radians();
    let l = longitude.to_radians() - central_meridian.to_radians();

    let cos = phi.cos();
    let tan = phi.tan();
    let t2 = tan * tan;
    let eta2 = E_P2 * cos * cos;
    let nu = POLAR_RADIUS / (1.0 + eta2).sqrt();

    let c3 = 1.0 - t2 + eta2;
    let c4 = 5.0 - t2 + 9.0 * eta2 + 4.0 * eta2 * eta2;
    let c5 = 5.0 - 18.0 * t2 + t2 * t2 + 14.0 * eta2 - 58.0 * t2 * eta2;
    let c6 = 61.0 - 58.0 * t2 + t2 * t2 + 270.0 * eta2 - 330.0 * t2 * eta2;
    let c7 = 61.0 - 479.0 * t2 + 179.0 * t2 * t2 - t2 * t2 * t2;
    let c8 = 1385.0 - 3111.0 * t2 + 543.0 * t2 * t2 - t2 * t2 * t2;

    let lc = l * cos;
    let easting = nu * lc
        + nu / 6.0 * c3 * lc.powi(3)
        + nu / 120.0 * c5 * lc.powi(5)
        + nu / 5040.0 * c7 * lc.powi(7);
    let northing = ARC * (phi + sin_series(phi, &FORWARD))
        + tan / 2.0 * nu * lc.powi(2)
        + tan / 24.0 * nu * c4 * lc.powi(4)
        + tan / 720.0 * nu * c6 * lc.powi(6)
        + tan / 40320.0 * nu * c8 * lc.powi(8);

    let easting = easting * K0 + FALSE_EASTING;
    let mut northing = northing * K0;
    if northing < 0.0 {
        northing += 10_000_000.0;
    }

    // X is 12° tall, 84.0 lands on the second X
    let band = ((latitude / 8.0 + 10.0).floor() as u8).min(19);

    // an easting of a longitude in range stays in 100km to 900km
    let column = match (easting / 100_000.0).floor() as i64 - 1 {
        c @ 0..=7 => c as u8,
        _ => return Err(MgrsError::Longitude),
    };
    let row = ((northing / 100_000.0).floor() as i64).rem_euclid(20) as u8;

    Ok(Mgrs {
        zone_number,
        band,
        column,
        row,
        easting: (easting % 100_000.0).floor() as u32,
        northing: (northing % 100_000.0).floor() as u32,
        precision: FULL_PRECISION,
    })
}

impl Display for Mgrs {
    /// Formats the canonical text, the numerical location
    /// is zero-padded to the precision.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let (column, row) = self.square();
        let scale = 10_u32.pow(u32::from(FULL_PRECISION - self.precision));
        let width = usize::from(self.precision);

        write!(
            f,
            "{}{} {}{} {:0width$} {:0width$}",
            self.zone_number,
            self.band(),
            column,
            row,
            self.easting / scale,
            self.northing / scale,
        )
    }
}

impl FromStr for Mgrs {
    type Err = ParseMgrsError;

    /// Parses a MGRS reference of 4 whitespace-separated tokens.
    ///
    /// Letters are case-insensitive, and the numerical location
    /// accepts 1 to 5 digits of the same length on both fields.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s).inspect_err(|error| {
            tracing::debug!(reference = s, %error, "rejected MGRS reference");
        })
    }
}

fn parse(s: &str) -> Result<Mgrs, ParseMgrsError> {
    let tokens: Vec<&str> = s.split_whitespace().collect();
    let [grid_zone, square, easting, northing] = tokens[..] else {
        return Err(ParseMgrsError::TokenCount(tokens.len()));
    };

    // the last char is the band, the rest is the zone number
    let mut chars = grid_zone.chars();
    let band = chars
        .next_back()
        .ok_or_else(|| ParseMgrsError::Band(grid_zone.to_string()))?;
    let digits = chars.as_str();

    let zone_number = match digits.len() {
        1 | 2 if digits.bytes().all(|b| b.is_ascii_digit()) => digits.parse::<u8>().ok(),
        _ => None,
    }
    .filter(|zone| (1..=60).contains(zone))
    .ok_or_else(|| ParseMgrsError::ZoneNumber(digits.to_string()))?;

    let band = zone::zone_letter_index(band)
        .map(|index| index as u8)
        .ok_or_else(|| ParseMgrsError::Band(band.to_string()))?;

    let zone = usize::from(zone_number) - 1;
    let (column, row) = match square.as_bytes() {
        [c, r] => (
            position(COLUMN_LETTERS[zone % 3], *c),
            position(ROW_LETTERS[zone % 2], *r),
        ),
        _ => (None, None),
    };
    let (Some(column), Some(row)) = (column, row) else {
        return Err(ParseMgrsError::Square(square.to_string()));
    };

    let (easting, northing, precision) =
        parse_location(easting, northing).ok_or_else(|| ParseMgrsError::Location {
            easting: easting.to_string(),
            northing: northing.to_string(),
        })?;

    Ok(Mgrs {
        zone_number,
        band,
        column,
        row,
        easting,
        northing,
        precision,
    })
}

#[inline]
fn position(letters: &[u8], letter: u8) -> Option<u8> {
    let letter = letter.to_ascii_uppercase();
    letters.iter().position(|c| *c == letter).map(|i| i as u8)
}

/// Returns the easting and northing \[m\] scaled into 5 digits, and the precision.
fn parse_location(easting: &str, northing: &str) -> Option<(u32, u32, u8)> {
    let len = easting.len();
    if len != northing.len() || !(1..=usize::from(FULL_PRECISION)).contains(&len) {
        return None;
    }
    if !easting.bytes().chain(northing.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }

    let precision = len as u8;
    let scale = 10_u32.pow(u32::from(FULL_PRECISION - precision));
    Some((
        easting.parse::<u32>().ok()? * scale,
        northing.parse::<u32>().ok()? * scale,
        precision,
    ))
}

#[cfg(feature = "serde")]
impl Serialize for Mgrs {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Mgrs {
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<Mgrs, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <String as Deserialize>::deserialize(deserializer)?
            .parse()
            .map_err(serde::de::Error::custom)
    }
}

impl TryFrom<&Point> for Mgrs {
    type Error = MgrsError;

    /// see [`Mgrs::try_from_point()`]
    #[inline]
    fn try_from(value: &Point) -> Result<Self, Self::Error> {
        Self::try_from_point(value)
    }
}

impl From<&Mgrs> for Point {
    /// see [`Mgrs::to_point()`]
    #[inline]
    fn from(value: &Mgrs) -> Self {
        value.to_point()
    }
}

/// Returns the MGRS reference text of the position.
///
/// On failure, this returns the error text instead,
/// `"Too far South"` or `"Too far North"` for a latitude out of the bands.
///
/// # Example
///
/// ```
/// # use gridconv::mgrs::to_mgrs;
/// assert_eq!(to_mgrs(-33.8688, 151.2093), "56H LH 34368 50948");
/// assert_eq!(to_mgrs(-81.0, 0.0), "Too far South");
/// ```
pub fn to_mgrs(latitude: f64, longitude: f64) -> String {
    match Mgrs::try_from_point(&Point::new(latitude, longitude)) {
        Ok(mgrs) => mgrs.to_string(),
        Err(e) => e.to_string(),
    }
}

/// Returns the position of the MGRS `reference`,
/// or [`None`] if `reference` is malformed.
///
/// # Example
///
/// ```
/// # use gridconv::mgrs::from_mgrs;
/// let point = from_mgrs("18T WL 83959 07350").unwrap();
/// assert!((point.latitude() - 40.7128).abs() < 1e-4);
/// assert!((point.longitude() + 74.006).abs() < 1e-4);
///
/// assert_eq!(from_mgrs("not a reference"), None);
/// ```
pub fn from_mgrs(reference: &str) -> Option<Point> {
    reference.parse::<Mgrs>().ok().map(|mgrs| mgrs.to_point())
}

#[cfg(test)]
mod test {
    use super::*;

    mod test_encode {
        use super::*;

        #[test]
        fn test_cities() {
            for (expected, lat, lon) in [
                ("30U XC 99316 10163", 51.5074, -0.1278),
                ("56H LH 34368 50948", -33.8688, 151.2093),
                ("54S UE 77855 48874", 35.6762, 139.6503),
                ("18T WL 83959 07350", 40.7128, -74.006),
                ("19G DK 02341 60743", -45.5, -70.25),
                ("32P PS 09600 05578", 10.0, 10.0),
            ] {
                assert_eq!(to_mgrs(lat, lon), expected, "{lat}, {lon}");
            }
        }

        #[test]
        fn test_edges() {
            assert_eq!(to_mgrs(0.0, 0.0), "31N AA 66021 00000");
            assert_eq!(to_mgrs(84.0, 0.0), "31X DP 65005 29005");
            assert_eq!(to_mgrs(-80.0, 0.0), "31C DM 41867 16915");

            // 180.0 belongs to zone 60
            assert!(to_mgrs(0.0, 180.0).starts_with("60N "));
            assert_eq!(to_mgrs(-0.5, 179.99), "60M ZE 32851 44659");
        }

        #[test]
        fn test_no_zone_exception() {
            // zone_number answers 32 and 33 here
            assert!(to_mgrs(60.0, 5.0).starts_with("31V "));
            assert!(to_mgrs(75.0, 10.0).starts_with("32X "));
        }

        #[test]
        fn test_rejection() {
            assert_eq!(to_mgrs(-80.0001, 0.0), "Too far South");
            assert_eq!(to_mgrs(84.0001, 0.0), "Too far North");

            assert_eq!(
                Mgrs::try_from_point(&Point::new(f64::NAN, 0.0)),
                Err(MgrsError::NaN)
            );
            assert_eq!(
                Mgrs::try_from_point(&Point::new(0.0, f64::NAN)),
                Err(MgrsError::NaN)
            );
            assert_eq!(
                Mgrs::try_from_point(&Point::new(0.0, 180.5)),
                Err(MgrsError::Longitude)
            );
        }

        #[test]
        fn test_format() {
            for (lat, lon) in [(0.0, 0.0), (10.0, 10.0), (-45.5, -70.25), (83.9, 179.0)] {
                let s = to_mgrs(lat, lon);
                let tokens: Vec<&str> = s.split(' ').collect();

                assert_eq!(tokens.len(), 4);
                assert!(tokens[0].len() == 2 || tokens[0].len() == 3);
                assert_eq!(tokens[1].len(), 2);
                assert_eq!(tokens[2].len(), 5);
                assert_eq!(tokens[3].len(), 5);
            }
        }
    }

    mod test_decode {
        use super::*;

        const DELTA: f64 = 1e-9;

        #[test]
        fn test_cities() {
            for (lat, lon, s) in [
                (51.507393277323004, -0.12780380023957993, "30U XC 99316 10163"),
                (-33.8688030162006, 151.20929308727756, "56H LH 34368 50948"),
                (9.999994693754275, 9.999992936010711, "32P PS 09600 05578"),
                (40.712791048863906, -74.00600454104408, "18T WL 83959 07350"),
            ] {
                let actual = from_mgrs(s).unwrap();
                assert!((actual.latitude - lat).abs() < DELTA, "{s}");
                assert!((actual.longitude - lon).abs() < DELTA, "{s}");
            }
        }

        #[test]
        fn test_band_edges() {
            let actual = from_mgrs("31X DP 65005 29005").unwrap();
            assert!((actual.latitude - 83.99999820907026).abs() < DELTA);
            assert!((actual.longitude + 2.870408577416416e-05).abs() < DELTA);

            let actual = from_mgrs("31C DM 41867 16915").unwrap();
            assert!((actual.latitude + 80.00000003379105).abs() < DELTA);
            assert!((actual.longitude + 4.054898253026972e-05).abs() < DELTA);
        }

        #[test]
        fn test_precision() {
            let actual = from_mgrs("30U XC 993 101").unwrap();
            assert!((actual.latitude - 51.50683315351688).abs() < DELTA);
            assert!((actual.longitude + 0.12806965118393948).abs() < DELTA);

            let actual = from_mgrs("30u xc 9 1").unwrap();
            assert!((actual.latitude - 51.50913802776133).abs() < DELTA);
            assert!((actual.longitude + 0.2619687211086203).abs() < DELTA);
        }

        #[test]
        fn test_malformed() {
            for s in [
                "",
                "30U XC 99316",
                "30U XC 99316 10163 0",
                "30 XC 99316 10163",
                "0U XC 99316 10163",
                "61U XC 99316 10163",
                "123U XC 99316 10163",
                "30I XC 99316 10163",
                "30U AC 99316 10163",
                "30U XW 99316 10163",
                "30U XCC 99316 10163",
                "30U XC 9931 10163",
                "30U XC 993166 101633",
                "30U XC 9931a 10163",
            ] {
                assert_eq!(from_mgrs(s), None, "{s}");
            }
        }
    }

    mod test_parse {
        use super::*;

        #[test]
        fn test_components() {
            let actual: Mgrs = "30U XC 99316 10163".parse().unwrap();
            assert_eq!(actual.zone_number(), &30);
            assert_eq!(actual.band(), 'U');
            assert_eq!(actual.square(), ('X', 'C'));
            assert_eq!(actual.easting(), &99316);
            assert_eq!(actual.northing(), &10163);
            assert_eq!(actual.precision(), &5);

            // case-insensitive and normalized on display
            let actual: Mgrs = "30u xc 99316 10163".parse().unwrap();
            assert_eq!(actual.to_string(), "30U XC 99316 10163");

            let actual: Mgrs = "4N AA 012 345".parse().unwrap();
            assert_eq!(actual.zone_number(), &4);
            assert_eq!(actual.easting(), &1200);
            assert_eq!(actual.northing(), &34500);
            assert_eq!(actual.precision(), &3);
            assert_eq!(actual.to_string(), "4N AA 012 345");
        }

        #[test]
        fn test_error() {
            assert_eq!(
                "30U XC".parse::<Mgrs>(),
                Err(ParseMgrsError::TokenCount(2))
            );
            assert_eq!(
                "61U XC 99316 10163".parse::<Mgrs>(),
                Err(ParseMgrsError::ZoneNumber("61".to_string()))
            );
            assert_eq!(
                "U XC 99316 10163".parse::<Mgrs>(),
                Err(ParseMgrsError::ZoneNumber("".to_string()))
            );
            assert_eq!(
                "30O XC 99316 10163".parse::<Mgrs>(),
                Err(ParseMgrsError::Band("O".to_string()))
            );
            assert_eq!(
                "30U AC 99316 10163".parse::<Mgrs>(),
                Err(ParseMgrsError::Square("AC".to_string()))
            );
            assert_eq!(
                "30U XC 9931 10163".parse::<Mgrs>(),
                Err(ParseMgrsError::Location {
                    easting: "9931".to_string(),
                    northing: "10163".to_string()
                })
            );
        }
    }

    mod test_round_trip {
        use super::*;

        #[test]
        fn test_grid() {
            for i in 0..=182 {
                let lat = -80.0 + 0.9 * f64::from(i);
                for j in 0..212 {
                    let lon = -179.5 + 1.7 * f64::from(j);
                    round_trip(lat, lon);
                }
            }
        }

        #[test]
        fn test_band_limits() {
            for j in 0..212 {
                let lon = -179.5 + 1.7 * f64::from(j);
                round_trip(84.0, lon);
                round_trip(-80.0, lon);
            }
        }

        fn round_trip(lat: f64, lon: f64) {
            let mgrs = Mgrs::try_from_point(&Point::new(lat, lon)).unwrap();
            let actual: Mgrs = mgrs.to_string().parse().unwrap();
            assert_eq!(actual, mgrs);

            let point = actual.to_point();
            assert!((point.latitude - lat).abs() < 1e-4, "{lat}, {lon}: {mgrs}");
            assert!((point.longitude - lon).abs() < 2e-4, "{lat}, {lon}: {mgrs}");
        }
    }

    #[test]
    #[cfg(feature = "serde")]
    fn test_serde() {
        use serde_test::{assert_de_tokens_error, assert_tokens, Token};

        let mgrs: Mgrs = "56H LH 34368 50948".parse().unwrap();
        assert_tokens(&mgrs, &[Token::Str("56H LH 34368 50948")]);

        assert_de_tokens_error::<Mgrs>(
            &[Token::Str("56H LH 34368")],
            "invalid MGRS reference: expected 4 tokens, found 3",
        );
    }
}
