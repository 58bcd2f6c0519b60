//! Provides [`Ellipsoid`].
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::EllipsoidError;

/// Represents a reference ellipsoid of the Earth.
///
/// The fields are immutable once constructed.
///
/// # Example
///
/// ```
/// # use gridconv::*;
/// let wgs84 = Ellipsoid::WGS84;
/// assert_eq!(wgs84.semi_major_axis(), &6378137.0);
/// assert_eq!(wgs84.flattening(), &(1.0 / 298.257223563));
/// assert_eq!(wgs84.eccentricity_squared(), &0.0066943799901413165);
/// ```
#[derive(Debug, PartialEq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ellipsoid {
    /// The semi-major axis \[m\]
    semi_major_axis: f64,
    /// The flattening
    flattening: f64,
    /// The eccentricity squared
    eccentricity_squared: f64,
}

impl Ellipsoid {
    /// The WGS84 ellipsoid.
    pub const WGS84: Self = Self::new(6378137.0, 1.0 / 298.257223563, 0.0066943799901413165);

    /// The Krassovsky 1940 ellipsoid of the SK-42 (Pulkovo 1942) datum.
    pub const SK42: Self = Self::new(6378245.0, 1.0 / 298.3, 0.006693421622965943);

    /// Makes an [`Ellipsoid`].
    ///
    /// This does not check the value range,
    /// nor the consistency of `flattening` and `eccentricity_squared`.
    ///
    /// # Example
    ///
    /// ```
    /// # use gridconv::*;
    /// let ellipsoid = Ellipsoid::new(6378137.0, 1.0 / 298.257223563, 0.0066943799901413165);
    /// assert_eq!(ellipsoid, Ellipsoid::WGS84);
    /// ```
    #[inline]
    pub const fn new(semi_major_axis: f64, flattening: f64, eccentricity_squared: f64) -> Self {
        Self {
            semi_major_axis,
            flattening,
            eccentricity_squared,
        }
    }

    /// Makes an [`Ellipsoid`] with checking.
    ///
    /// # Errors
    ///
    /// If `semi_major_axis` is not positive, `flattening` does not satisfy
    /// 0.0 < and < 1.0, or `eccentricity_squared` does not satisfy 0.0 <= and < 1.0.
    ///
    /// # Example
    ///
    /// ```
    /// # use gridconv::*;
    /// # fn main() -> Result<()> {
    /// let ellipsoid = Ellipsoid::try_new(6378245.0, 1.0 / 298.3, 0.006693421622965943)?;
    /// assert_eq!(ellipsoid, Ellipsoid::SK42);
    ///
    /// assert!(Ellipsoid::try_new(-1.0, 1.0 / 298.3, 0.0066).is_err());
    /// assert!(Ellipsoid::try_new(6378245.0, 1.0, 0.0066).is_err());
    /// assert!(Ellipsoid::try_new(6378245.0, 1.0 / 298.3, 1.0).is_err());
    /// # Ok(())}
    /// ```
    pub fn try_new(
        semi_major_axis: f64,
        flattening: f64,
        eccentricity_squared: f64,
    ) -> Result<Self, EllipsoidError> {
        // negated comparisons reject NaN as well
        if !(semi_major_axis > 0.0) {
            return Err(EllipsoidError::SemiMajorAxis(semi_major_axis));
        }
        if !(flattening > 0.0 && flattening < 1.0) {
            return Err(EllipsoidError::Flattening(flattening));
        }
        if !(0.0..1.0).contains(&eccentricity_squared) {
            return Err(EllipsoidError::EccentricitySquared(eccentricity_squared));
        }

        Ok(Self::new(semi_major_axis, flattening, eccentricity_squared))
    }

    /// Makes an [`Ellipsoid`] from the semi-major axis and the flattening,
    /// the eccentricity squared is 𝑓 (2 − 𝑓).
    ///
    /// # Example
    ///
    /// ```
    /// # use gridconv::*;
    /// let ellipsoid = Ellipsoid::from_flattening(6378137.0, 1.0 / 298.257223563);
    /// assert!((ellipsoid.eccentricity_squared() - Ellipsoid::WGS84.eccentricity_squared()).abs() < 1e-15);
    /// ```
    #[inline]
    pub fn from_flattening(semi_major_axis: f64, flattening: f64) -> Self {
        Self::new(
            semi_major_axis,
            flattening,
            flattening * (2.0 - flattening),
        )
    }

    /// Returns the semi-major axis \[m\] of `self`.
    #[inline]
    pub const fn semi_major_axis(&self) -> &f64 {
        &self.semi_major_axis
    }

    /// Returns the flattening of `self`.
    #[inline]
    pub const fn flattening(&self) -> &f64 {
        &self.flattening
    }

    /// Returns the eccentricity squared of `self`.
    #[inline]
    pub const fn eccentricity_squared(&self) -> &f64 {
        &self.eccentricity_squared
    }

    /// Returns the semi-minor axis \[m\], 𝑎 (1 − 𝑓).
    #[inline]
    pub fn semi_minor_axis(&self) -> f64 {
        self.semi_major_axis * (1.0 - self.flattening)
    }

    /// Returns the second eccentricity squared, 𝑒² / (1 − 𝑒²).
    #[inline]
    pub fn second_eccentricity_squared(&self) -> f64 {
        self.eccentricity_squared / (1.0 - self.eccentricity_squared)
    }

    /// Returns the radius of curvature in the meridian \[m\] at `latitude` \[rad\].
    #[inline]
    pub fn meridian_radius(&self, latitude: f64) -> f64 {
        let w2 = 1.0 - self.eccentricity_squared * latitude.sin().powi(2);
        self.semi_major_axis * (1.0 - self.eccentricity_squared) / w2.powf(1.5)
    }

    /// Returns the radius of curvature in the prime vertical \[m\] at `latitude` \[rad\].
    #[inline]
    pub fn prime_vertical_radius(&self, latitude: f64) -> f64 {
        let w2 = 1.0 - self.eccentricity_squared * latitude.sin().powi(2);
        self.semi_major_axis / w2.sqrt()
    }
}

impl Default for Ellipsoid {
    fn default() -> Self {
        Self::WGS84
    }
}
