//! Provides the Molodensky datum transform.
//!
//! The transform is the first-order (abridged GOST) Molodensky formula,
//! the ellipsoidal height is taken as zero.
//! It is accurate within a few meters between WGS84 and SK-42.
//!
//! # Example
//!
//! ```
//! # use gridconv::*;
//! # use gridconv::datum::transform;
//! let point = Point::new(55.75, 37.62);
//! let result = transform(&point, &Ellipsoid::WGS84, &Ellipsoid::SK42, &DatumTransform::WGS84_TO_SK42);
//! assert!((result.latitude() - 55.74980991838285).abs() < 1e-10);
//! assert!((result.longitude() - 37.622155643535386).abs() < 1e-10);
//!
//! // or by the named datums
//! assert_eq!(Datum::WGS84.transform(&point, &Datum::SK42), result);
//! ```
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::ellipsoid::Ellipsoid;
use crate::point::Point;

/// Arcseconds per radian.
pub const RHO: f64 = 206264.8062;

/// Represents the seven parameters of a datum shift.
///
/// The translations are in meters, the rotations in radians,
/// and the scale is the differential scale (e.g. `0.12e-6` for 0.12 ppm).
///
/// The parameters are directed, a transform from the target datum back
/// to the source datum takes its own parameters.
///
/// # Example
///
/// ```
/// # use gridconv::*;
/// let params = DatumTransform::WGS84_TO_SK42;
/// assert_eq!(params.dx, -23.92);
/// assert_eq!(params.dy, 141.27);
/// assert_eq!(params.dz, 80.9);
/// ```
#[derive(Debug, PartialEq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DatumTransform {
    /// The translation \[m\] along the X axis
    pub dx: f64,
    /// The translation \[m\] along the Y axis
    pub dy: f64,
    /// The translation \[m\] along the Z axis
    pub dz: f64,
    /// The rotation \[rad\] about the X axis
    pub omega_x: f64,
    /// The rotation \[rad\] about the Y axis
    pub omega_y: f64,
    /// The rotation \[rad\] about the Z axis
    pub omega_z: f64,
    /// The differential scale
    pub scale: f64,
}

impl DatumTransform {
    /// The parameters from WGS84 to SK-42.
    pub const WGS84_TO_SK42: Self = Self::new(
        -23.92,
        141.27,
        80.9,
        0.0,
        -1.6968478842708164e-6,
        -3.975472186005913e-6,
        0.12e-6,
    );

    /// The parameters from SK-42 to WGS84.
    pub const SK42_TO_WGS84: Self = Self::new(
        23.92,
        -141.27,
        -80.9,
        -0.0,
        1.6968478842708164e-6,
        3.975472186005913e-6,
        -0.12e-6,
    );

    /// Makes a [`DatumTransform`].
    #[inline]
    pub const fn new(
        dx: f64,
        dy: f64,
        dz: f64,
        omega_x: f64,
        omega_y: f64,
        omega_z: f64,
        scale: f64,
    ) -> Self {
        Self {
            dx,
            dy,
            dz,
            omega_x,
            omega_y,
            omega_z,
            scale,
        }
    }

    /// Returns the correction of `point` shifted from the datum on `from`
    /// to the datum on `to`.
    ///
    /// # Example
    ///
    /// ```
    /// # use gridconv::*;
    /// let params = DatumTransform::WGS84_TO_SK42;
    /// let corr = params.forward_corr(&Point::new(0.0, 0.0), &Ellipsoid::WGS84, &Ellipsoid::SK42);
    /// assert!((corr.latitude - 0.0006337553414081766).abs() < 1e-12);
    /// assert!((corr.longitude - 0.0014968170351416605).abs() < 1e-12);
    /// ```
    pub fn forward_corr(&self, point: &Point, from: &Ellipsoid, to: &Ellipsoid) -> Correction {
        let (a_from, a_to) = (*from.semi_major_axis(), *to.semi_major_axis());
        let (e2_from, e2_to) = (*from.eccentricity_squared(), *to.eccentricity_squared());

        let a = (a_from + a_to) / 2.0;
        let da = a_to - a_from;
        let es = (e2_from + e2_to) / 2.0;
        let des = e2_to - e2_from;

        let b = point.latitude.to_radians();
        let l = point.longitude.to_radians();
        let (sin_b, cos_b) = b.sin_cos();
        let (sin_l, cos_l) = l.sin_cos();

        let w2 = 1.0 - es * sin_b * sin_b;
        let m = a * (1.0 - es) * w2.powf(-1.5);
        let n = a * w2.powf(-0.5);

        // into arcseconds
        let wx = self.omega_x * RHO;
        let wy = self.omega_y * RHO;
        let wz = self.omega_z * RHO;

        let cos_2b = (2.0 * b).cos();
        let db = RHO / m
            * (n / a * es * sin_b * cos_b * da
                + (n * n / (a * a) + 1.0) * n * sin_b * cos_b * des / 2.0
                - (self.dx * cos_l + self.dy * sin_l) * sin_b
                + self.dz * cos_b)
            - wx * sin_l * (1.0 + es * cos_2b)
            + wy * cos_l * (1.0 + es * cos_2b)
            - RHO * self.scale * es * sin_b * cos_b;

        let dl = RHO / (n * cos_b) * (-self.dx * sin_l + self.dy * cos_l)
            + b.tan() * (1.0 - es) * (wx * cos_l + wy * sin_l)
            - wz;

        Correction::new(db / 3600.0, dl / 3600.0)
    }

    /// Returns the position of `point` shifted from the datum on `from`
    /// to the datum on `to`.
    ///
    /// This is `point` + [`DatumTransform::forward_corr`].
    #[inline]
    pub fn forward(&self, point: &Point, from: &Ellipsoid, to: &Ellipsoid) -> Point {
        point + &self.forward_corr(point, from, to)
    }
}

/// Represents a datum shift of a position.
///
/// # Example
///
/// ```
/// # use gridconv::*;
/// let correction = Correction::new(1., 2.);
/// assert_eq!(correction.latitude, 1.);
/// assert_eq!(correction.longitude, 2.);
///
/// assert_eq!(Point::new(35.0, 135.0) + correction, Point::new(36.0, 137.0));
/// ```
#[derive(Debug, PartialEq, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Correction {
    /// The latitude correction \[deg\].
    pub latitude: f64,
    /// The longitude correction \[deg\].
    pub longitude: f64,
}

impl Correction {
    /// Makes a [`Correction`].
    #[inline]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// The named geodetic datums.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Datum {
    /// WGS84
    WGS84,
    /// SK-42, Pulkovo 1942
    SK42,
}

impl Datum {
    /// Returns the ellipsoid of `self`.
    #[inline]
    pub const fn ellipsoid(&self) -> Ellipsoid {
        match self {
            Self::WGS84 => Ellipsoid::WGS84,
            Self::SK42 => Ellipsoid::SK42,
        }
    }

    /// Returns the parameters from `self` to `to`,
    /// [`None`] if `self` and `to` are the same datum.
    ///
    /// # Example
    ///
    /// ```
    /// # use gridconv::*;
    /// assert_eq!(Datum::WGS84.params_to(&Datum::SK42), Some(DatumTransform::WGS84_TO_SK42));
    /// assert_eq!(Datum::SK42.params_to(&Datum::WGS84), Some(DatumTransform::SK42_TO_WGS84));
    /// assert_eq!(Datum::SK42.params_to(&Datum::SK42), None);
    /// ```
    #[inline]
    pub const fn params_to(&self, to: &Datum) -> Option<DatumTransform> {
        match (self, to) {
            (Self::WGS84, Self::SK42) => Some(DatumTransform::WGS84_TO_SK42),
            (Self::SK42, Self::WGS84) => Some(DatumTransform::SK42_TO_WGS84),
            (Self::WGS84, Self::WGS84) | (Self::SK42, Self::SK42) => None,
        }
    }

    /// Returns the position of `point` on `self` shifted to `to`.
    ///
    /// This returns `point` as is if `self` and `to` are the same datum.
    pub fn transform(&self, point: &Point, to: &Datum) -> Point {
        match self.params_to(to) {
            Some(params) => params.forward(point, &self.ellipsoid(), &to.ellipsoid()),
            None => *point,
        }
    }
}

/// Returns the position of `point` shifted from the datum on `from`
/// to the datum on `to` by `params`.
///
/// See [`DatumTransform::forward`].
#[inline]
pub fn transform(point: &Point, from: &Ellipsoid, to: &Ellipsoid, params: &DatumTransform) -> Point {
    params.forward(point, from, to)
}
