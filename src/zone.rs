//! Provides the UTM zone resolver.
//!
//! A zone is a 6° wide longitude band numbered 1 to 60 eastward from 180°W,
//! and a latitude band is an 8° tall band lettered C to X (omitting I and O)
//! northward from 80°S.
//!
//! # Example
//!
//! ```
//! # use gridconv::zone::*;
//! assert_eq!(zone_number(51.5074, -0.1278), 30);
//! assert_eq!(zone_letter(51.5074), Some('U'));
//! assert_eq!(central_meridian(30), -3.0);
//!
//! // Norway and Svalbard
//! assert_eq!(zone_number(60.0, 5.0), 32);
//! assert_eq!(zone_number(75.0, 10.0), 33);
//! ```
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The latitude band letters from 80°S, in 8° steps.
///
/// The X band is 12° tall (72°N to 84°N), thus X appears twice.
pub const ZONE_LETTERS: [char; 21] = [
    'C', 'D', 'E', 'F', 'G', 'H', 'J', 'K', 'L', 'M', 'N', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W',
    'X', 'X',
];

/// The southern limit \[deg\] of the latitude bands.
pub const MIN_LATITUDE: f64 = -80.0;
/// The northern limit \[deg\] of the latitude bands.
pub const MAX_LATITUDE: f64 = 84.0;

/// The hemisphere which selects the false northing.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Hemisphere {
    North,
    South,
}

impl Hemisphere {
    /// Returns the hemisphere of `latitude` \[deg\], 0.0 is northern.
    ///
    /// # Example
    ///
    /// ```
    /// # use gridconv::zone::Hemisphere;
    /// assert_eq!(Hemisphere::from_latitude(0.0), Hemisphere::North);
    /// assert_eq!(Hemisphere::from_latitude(-0.1), Hemisphere::South);
    /// ```
    #[inline]
    pub fn from_latitude(latitude: f64) -> Self {
        if latitude < 0.0 {
            Self::South
        } else {
            Self::North
        }
    }

    /// Returns the hemisphere of the latitude band `letter`,
    /// letters N to X (case-insensitive) are northern.
    ///
    /// This does not check `letter` is a band letter.
    ///
    /// # Example
    ///
    /// ```
    /// # use gridconv::zone::Hemisphere;
    /// assert_eq!(Hemisphere::from_zone_letter('N'), Hemisphere::North);
    /// assert_eq!(Hemisphere::from_zone_letter('u'), Hemisphere::North);
    /// assert_eq!(Hemisphere::from_zone_letter('M'), Hemisphere::South);
    /// ```
    #[inline]
    pub fn from_zone_letter(letter: char) -> Self {
        if letter.to_ascii_uppercase() >= 'N' {
            Self::North
        } else {
            Self::South
        }
    }

    /// Returns `true` if `self` is [`Hemisphere::North`].
    #[inline]
    pub const fn is_north(&self) -> bool {
        matches!(self, Self::North)
    }
}

#[cfg(feature = "serde")]
impl Serialize for Hemisphere {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(match self {
            Self::North => "N",
            Self::South => "S",
        })
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Hemisphere {
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<Hemisphere, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        match <String as Deserialize>::deserialize(deserializer)?.as_str() {
            "N" => Ok(Self::North),
            "S" => Ok(Self::South),
            v => Err(serde::de::Error::custom(format_args!(
                "invalid value: string `{}`, expected \"N\" or \"S\"",
                v,
            ))),
        }
    }
}

/// Returns the latitude band letter of `latitude` \[deg\].
///
/// Returns [`None`] when `latitude` is out of -80.0 <= and <= 84.0,
/// that is, no standard band is assigned.
///
/// # Example
///
/// ```
/// # use gridconv::zone::zone_letter;
/// assert_eq!(zone_letter(0.0), Some('N'));
/// assert_eq!(zone_letter(-80.0), Some('C'));
/// assert_eq!(zone_letter(84.0), Some('X'));
/// assert_eq!(zone_letter(85.0), None);
/// assert_eq!(zone_letter(-81.0), None);
/// ```
#[inline]
#[must_use]
pub fn zone_letter(latitude: f64) -> Option<char> {
    if (MIN_LATITUDE..=MAX_LATITUDE).contains(&latitude) {
        let index = ((latitude - MIN_LATITUDE) / 8.0).floor() as usize;
        ZONE_LETTERS.get(index).copied()
    } else {
        None
    }
}

/// Returns the index of the latitude band `letter` (case-insensitive) in [`ZONE_LETTERS`].
///
/// X answers the first occurrence.
#[inline]
pub(crate) fn zone_letter_index(letter: char) -> Option<usize> {
    let letter = letter.to_ascii_uppercase();
    ZONE_LETTERS.iter().position(|c| *c == letter)
}

/// Returns the UTM zone number of the position.
///
/// This applies the irregular zones of south-west Norway
/// (zone 32 is widened to 3°E in 56°N to 64°N)
/// and Svalbard (zones 31, 33, 35 and 37 in 72°N to 84°N).
/// Longitude 180.0 belongs to zone 60.
/// Out of range longitudes are clamped into zone 1 or 60, NaN goes to zone 1.
///
/// This does not check the value range.
///
/// # Example
///
/// ```
/// # use gridconv::zone::zone_number;
/// assert_eq!(zone_number(0.0, -180.0), 1);
/// assert_eq!(zone_number(0.0, 0.0), 31);
/// assert_eq!(zone_number(0.0, 180.0), 60);
///
/// assert_eq!(zone_number(60.0, 5.0), 32);
/// assert_eq!(zone_number(75.0, 5.0), 31);
/// assert_eq!(zone_number(75.0, 10.0), 33);
/// assert_eq!(zone_number(75.0, 25.0), 35);
/// assert_eq!(zone_number(75.0, 45.0), 38);
/// ```
#[must_use]
pub fn zone_number(latitude: f64, longitude: f64) -> u8 {
    if (56.0..64.0).contains(&latitude) && (3.0..12.0).contains(&longitude) {
        tracing::trace!(latitude, longitude, zone = 32, "Norway zone exception");
        return 32;
    }

    if (72.0..=84.0).contains(&latitude) && longitude >= 0.0 {
        let zone = if longitude < 9.0 {
            Some(31)
        } else if longitude < 21.0 {
            Some(33)
        } else if longitude < 33.0 {
            Some(35)
        } else if longitude < 42.0 {
            Some(37)
        } else {
            None
        };

        if let Some(zone) = zone {
            tracing::trace!(latitude, longitude, zone, "Svalbard zone exception");
            return zone;
        }
    }

    regular_zone_number(longitude)
}

/// Returns the 6° zone number of `longitude` \[deg\] without any exception.
#[inline]
pub(crate) fn regular_zone_number(longitude: f64) -> u8 {
    let zone = ((longitude + 180.0) / 6.0).floor() + 1.0;
    // `as` saturates, NaN goes to 0
    (zone as i64).clamp(1, 60) as u8
}

/// Returns the central meridian \[deg\] of the zone.
///
/// This does not check the value range.
///
/// # Example
///
/// ```
/// # use gridconv::zone::central_meridian;
/// assert_eq!(central_meridian(1), -177.0);
/// assert_eq!(central_meridian(31), 3.0);
/// assert_eq!(central_meridian(60), 177.0);
/// ```
#[inline]
#[must_use]
pub fn central_meridian(zone_number: u8) -> f64 {
    (f64::from(zone_number) - 1.0) * 6.0 - 180.0 + 3.0
}

#[cfg(test)]
mod test {
    use super::*;

    mod test_zone_letter {
        use super::*;

        #[test]
        fn test_bands() {
            for (e, v) in [
                ('C', -80.0),
                ('C', -72.1),
                ('D', -72.0),
                ('M', -0.1),
                ('N', 0.0),
                ('N', 7.9),
                ('P', 8.0),
                ('U', 51.5074),
                ('W', 71.9),
                ('X', 72.0),
                ('X', 80.0),
                ('X', 84.0),
            ] {
                assert_eq!(zone_letter(v), Some(e), "{v}");
            }
        }

        #[test]
        fn test_out_of_range() {
            assert_eq!(zone_letter(-80.0001), None);
            assert_eq!(zone_letter(84.0001), None);
            assert_eq!(zone_letter(-90.0), None);
            assert_eq!(zone_letter(90.0), None);
            assert_eq!(zone_letter(f64::NAN), None);
        }

        #[test]
        fn test_index() {
            assert_eq!(zone_letter_index('C'), Some(0));
            assert_eq!(zone_letter_index('n'), Some(10));
            assert_eq!(zone_letter_index('X'), Some(19));
            assert_eq!(zone_letter_index('I'), None);
            assert_eq!(zone_letter_index('O'), None);
            assert_eq!(zone_letter_index('Z'), None);
        }
    }

    mod test_zone_number {
        use super::*;

        #[test]
        fn test_regular() {
            assert_eq!(zone_number(0.0, -180.0), 1);
            assert_eq!(zone_number(0.0, -174.0001), 1);
            assert_eq!(zone_number(0.0, -174.0), 2);
            assert_eq!(zone_number(51.5074, -0.1278), 30);
            assert_eq!(zone_number(0.0, 0.0), 31);
            assert_eq!(zone_number(-33.8688, 151.2093), 56);
            assert_eq!(zone_number(0.0, 179.9999), 60);
            assert_eq!(zone_number(0.0, 180.0), 60);

            // clamped
            assert_eq!(zone_number(0.0, -180.5), 1);
            assert_eq!(zone_number(0.0, -540.0), 1);
            assert_eq!(zone_number(0.0, 181.0), 60);
            assert_eq!(zone_number(0.0, f64::NAN), 1);
        }

        #[test]
        fn test_norway() {
            assert_eq!(zone_number(60.0, 5.0), 32);
            assert_eq!(zone_number(56.0, 3.0), 32);
            assert_eq!(zone_number(63.999, 11.999), 32);

            // outside the exception
            assert_eq!(zone_number(64.0, 5.0), 31);
            assert_eq!(zone_number(55.999, 5.0), 31);
            assert_eq!(zone_number(60.0, 2.999), 31);
            assert_eq!(zone_number(60.0, 12.0), 33);
        }

        #[test]
        fn test_svalbard() {
            assert_eq!(zone_number(75.0, 0.0), 31);
            assert_eq!(zone_number(75.0, 8.999), 31);
            assert_eq!(zone_number(75.0, 9.0), 33);
            assert_eq!(zone_number(75.0, 10.0), 33);
            assert_eq!(zone_number(75.0, 20.999), 33);
            assert_eq!(zone_number(75.0, 25.0), 35);
            assert_eq!(zone_number(84.0, 33.0), 37);
            assert_eq!(zone_number(72.0, 41.999), 37);

            // default rule
            assert_eq!(zone_number(75.0, 42.0), 38);
            assert_eq!(zone_number(75.0, -1.0), 30);
            assert_eq!(zone_number(71.999, 10.0), 32);
        }
    }

    #[test]
    fn test_central_meridian() {
        assert_eq!(central_meridian(31), 3.0);
        assert_eq!(central_meridian(30), -3.0);
        for zone in 1..=60 {
            let cm = central_meridian(zone);
            assert_eq!(zone_number(0.0, cm), zone);
        }
    }

    #[test]
    fn test_hemisphere() {
        assert_eq!(Hemisphere::from_zone_letter('C'), Hemisphere::South);
        assert_eq!(Hemisphere::from_zone_letter('m'), Hemisphere::South);
        assert_eq!(Hemisphere::from_zone_letter('N'), Hemisphere::North);
        assert_eq!(Hemisphere::from_zone_letter('x'), Hemisphere::North);
        assert!(Hemisphere::from_latitude(10.0).is_north());
        assert!(!Hemisphere::from_latitude(-10.0).is_north());
    }

    #[test]
    #[cfg(feature = "serde")]
    fn test_serde() {
        use serde_test::{assert_de_tokens_error, assert_tokens, Token};

        assert_tokens(&Hemisphere::North, &[Token::Str("N")]);
        assert_tokens(&Hemisphere::South, &[Token::Str("S")]);
        assert_de_tokens_error::<Hemisphere>(
            &[Token::Str("E")],
            "invalid value: string `E`, expected \"N\" or \"S\"",
        );
    }
}
