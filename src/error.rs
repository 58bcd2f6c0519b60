//! Provides the error types of this crate.
use thiserror::Error as ThisError;

/// Alias for a `Result<T, gridconv::error::Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents all possible errors that can occur by this crate.
#[derive(Debug, PartialEq, Clone, ThisError)]
pub enum Error {
    #[error(transparent)]
    Point(#[from] PointError),
    #[error(transparent)]
    Ellipsoid(#[from] EllipsoidError),
    #[error(transparent)]
    Utm(#[from] UtmError),
    #[error(transparent)]
    Mgrs(#[from] MgrsError),
    #[error(transparent)]
    ParseMgrs(#[from] ParseMgrsError),
    #[error(transparent)]
    Tile(#[from] TileError),
}

/// The axis of an invalid position.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Axis::Latitude => "latitude",
            Axis::Longitude => "longitude",
        };
        f.write_str(s)
    }
}

/// An error which can be returned on [`Point::try_new`](crate::Point::try_new).
#[derive(Debug, PartialEq, Clone, ThisError)]
pub enum PointError {
    /// The value is NaN.
    #[error("invalid {axis}: NaN")]
    NaN { axis: Axis },
    /// The value is out of the range.
    #[error("invalid {axis}: {value:?} is not in {low:?} <= and <= {high:?}")]
    OutOfRange {
        axis: Axis,
        value: f64,
        low: f64,
        high: f64,
    },
}

/// An error which can be returned on [`Ellipsoid::try_new`](crate::Ellipsoid::try_new).
#[derive(Debug, PartialEq, Clone, ThisError)]
pub enum EllipsoidError {
    #[error("invalid semi-major axis: {0:?} must be positive")]
    SemiMajorAxis(f64),
    #[error("invalid flattening: {0:?} must satisfy 0.0 < and < 1.0")]
    Flattening(f64),
    #[error("invalid eccentricity squared: {0:?} must satisfy 0.0 <= and < 1.0")]
    EccentricitySquared(f64),
}

/// An error which can be returned on [`UtmPoint::try_new`](crate::UtmPoint::try_new).
#[derive(Debug, PartialEq, Eq, Clone, ThisError)]
pub enum UtmError {
    #[error("invalid zone number: {0} is not in 1 <= and <= 60")]
    ZoneNumber(u8),
    #[error("invalid zone letter: '{0}'")]
    ZoneLetter(char),
}

/// An error which can be returned on MGRS encoding.
///
/// The display text of each variant is the sentinel string
/// that [`to_mgrs`](crate::mgrs::to_mgrs) returns.
#[derive(Debug, PartialEq, Eq, Clone, ThisError)]
pub enum MgrsError {
    /// The latitude is less than -80.0.
    #[error("Too far South")]
    TooFarSouth,
    /// The latitude is greater than 84.0.
    #[error("Too far North")]
    TooFarNorth,
    /// The longitude is out of -180.0 <= and <= 180.0.
    #[error("Longitude out of range")]
    Longitude,
    /// The latitude or longitude is NaN.
    #[error("Not a number")]
    NaN,
}

/// An error which can be returned on parsing an MGRS reference.
#[derive(Debug, PartialEq, Eq, Clone, ThisError)]
pub enum ParseMgrsError {
    /// The reference does not have exactly 4 whitespace-separated tokens.
    #[error("invalid MGRS reference: expected 4 tokens, found {0}")]
    TokenCount(usize),
    /// The grid zone number is not 1 or 2 digits in 1..=60.
    #[error("invalid MGRS reference: invalid zone number '{0}'")]
    ZoneNumber(String),
    /// The latitude band letter is missing or unknown.
    #[error("invalid MGRS reference: invalid latitude band '{0}'")]
    Band(String),
    /// The 100km-square identifier is not valid in the zone.
    #[error("invalid MGRS reference: invalid 100km square '{0}'")]
    Square(String),
    /// The easting/northing fields are not digits of the same length 1..=5.
    #[error("invalid MGRS reference: invalid numerical location '{easting} {northing}'")]
    Location { easting: String, northing: String },
}

/// An error which can be returned on [`TilePixel::try_from_point`](crate::TilePixel::try_from_point).
#[derive(Debug, PartialEq, Clone, ThisError)]
pub enum TileError {
    #[error("invalid latitude: {value:?} is out of the Web-Mercator range ±{limit:?}")]
    Latitude { value: f64, limit: f64 },
    #[error("invalid longitude: {0:?} is not in -180.0 <= and <= 180.0")]
    Longitude(f64),
    #[error("invalid zoom: {0} must be less than 32")]
    Zoom(u8),
}
