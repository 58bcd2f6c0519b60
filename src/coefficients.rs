//! Provides [`SeriesCoefficients`], the constants of the Transverse Mercator series.
use std::sync::LazyLock;

use crate::ellipsoid::Ellipsoid;
use crate::internal::{fma, sin_series};

static WGS84: LazyLock<SeriesCoefficients> = LazyLock::new(|| {
    tracing::trace!("deriving WGS84 series coefficients");
    SeriesCoefficients::new(&Ellipsoid::WGS84)
});

/// The constants of the Transverse Mercator series derived from an [`Ellipsoid`].
///
/// The meridian arc coefficients `m1`..`m4` are truncated at 𝑒⁶,
/// and the footpoint latitude coefficients `p2`..`p5` at 𝑒₁⁵
/// where 𝑒₁ = (1 − √(1 − 𝑒²)) / (1 + √(1 − 𝑒²)).
///
/// # Example
///
/// ```
/// # use gridconv::*;
/// let coef = SeriesCoefficients::wgs84();
/// assert_eq!(coef.semi_major_axis, 6378137.0);
/// assert!((coef.m1 - 0.9983242984527954).abs() < 1e-15);
///
/// // The meridian arc at the equator is zero
/// assert_eq!(coef.meridian_arc(0.0), 0.0);
/// ```
#[derive(Debug, PartialEq, Clone)]
pub struct SeriesCoefficients {
    /// The semi-major axis \[m\]
    pub semi_major_axis: f64,
    /// The eccentricity squared, 𝑒²
    pub e2: f64,
    /// The second eccentricity squared, 𝑒′²
    pub e_p2: f64,
    /// 𝑒₁
    pub e1: f64,
    /// The meridian arc coefficient of φ
    pub m1: f64,
    /// The meridian arc coefficient of sin 2φ, negated in the sum
    pub m2: f64,
    /// The meridian arc coefficient of sin 4φ
    pub m3: f64,
    /// The meridian arc coefficient of sin 6φ, negated in the sum
    pub m4: f64,
    /// The footpoint latitude coefficient of sin 2μ
    pub p2: f64,
    /// The footpoint latitude coefficient of sin 4μ
    pub p3: f64,
    /// The footpoint latitude coefficient of sin 6μ
    pub p4: f64,
    /// The footpoint latitude coefficient of sin 8μ
    pub p5: f64,
}

impl SeriesCoefficients {
    /// Derives the coefficients from `ellipsoid`.
    pub fn new(ellipsoid: &Ellipsoid) -> Self {
        let e = *ellipsoid.eccentricity_squared();
        let e2 = e * e;
        let e3 = e2 * e;

        let sqrt = (1.0 - e).sqrt();
        let e1 = (1.0 - sqrt) / (1.0 + sqrt);
        let e1_2 = e1 * e1;
        let e1_3 = e1_2 * e1;
        let e1_4 = e1_3 * e1;
        let e1_5 = e1_4 * e1;

        Self {
            semi_major_axis: *ellipsoid.semi_major_axis(),
            e2: e,
            e_p2: ellipsoid.second_eccentricity_squared(),
            e1,
            m1: 1.0 - e / 4.0 - 3.0 * e2 / 64.0 - 5.0 * e3 / 256.0,
            m2: 3.0 * e / 8.0 + 3.0 * e2 / 32.0 + 45.0 * e3 / 1024.0,
            m3: 15.0 * e2 / 256.0 + 45.0 * e3 / 1024.0,
            m4: 35.0 * e3 / 3072.0,
            p2: 3.0 / 2.0 * e1 - 27.0 / 32.0 * e1_3 + 269.0 / 512.0 * e1_5,
            p3: 21.0 / 16.0 * e1_2 - 55.0 / 32.0 * e1_4,
            p4: 151.0 / 96.0 * e1_3 - 417.0 / 128.0 * e1_5,
            p5: 1097.0 / 512.0 * e1_4,
        }
    }

    /// Returns the process-wide coefficients of [`Ellipsoid::WGS84`].
    ///
    /// They are derived on first use and never mutated.
    #[inline]
    pub fn wgs84() -> &'static Self {
        &WGS84
    }

    /// Returns the meridian arc length \[m\] from the equator to `latitude` \[rad\].
    #[inline]
    pub fn meridian_arc(&self, latitude: f64) -> f64 {
        let s = sin_series(latitude, &[-self.m2, self.m3, -self.m4]);
        self.semi_major_axis * fma(self.m1, latitude, s)
    }

    /// Returns the footpoint latitude \[rad\] of the meridian arc length `arc` \[m\].
    #[inline]
    pub fn footpoint_latitude(&self, arc: f64) -> f64 {
        let mu = arc / (self.semi_major_axis * self.m1);
        mu + sin_series(mu, &[self.p2, self.p3, self.p4, self.p5])
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_wgs84() {
        let coef = SeriesCoefficients::wgs84();
        assert_eq!(coef, &SeriesCoefficients::new(&Ellipsoid::WGS84));

        // same instance
        assert!(std::ptr::eq(coef, SeriesCoefficients::wgs84()));
    }

    #[test]
    fn test_values() {
        let coef = SeriesCoefficients::wgs84();

        const DELTA: f64 = 1e-15;
        assert!((coef.m1 - 0.9983242984527954).abs() < DELTA);
        assert!((coef.m2 - 0.002514607060518705).abs() < DELTA);
        assert!((coef.m3 - 2.6390465943376213e-06).abs() < DELTA);
        assert!((coef.m4 - 3.4180460865957878e-09).abs() < DELTA);
        assert!((coef.p2 - 0.0025188265843976896).abs() < DELTA);
        assert!((coef.p5 - 1.703599323859595e-11).abs() < DELTA);
        assert!((coef.e_p2 - 0.006739496742276434).abs() < DELTA);
    }

    #[test]
    fn test_meridian_arc() {
        let coef = SeriesCoefficients::wgs84();

        // quarter meridian of WGS84 is 10001965.729 m
        let quarter = coef.meridian_arc(std::f64::consts::FRAC_PI_2);
        assert!((quarter - 10001965.729).abs() < 0.01);

        // odd function
        assert_eq!(coef.meridian_arc(-0.5), -coef.meridian_arc(0.5));
    }

    #[test]
    fn test_footpoint_latitude() {
        let coef = SeriesCoefficients::wgs84();

        for lat in [-1.3, -0.7, 0.0, 0.2, 0.9, 1.4] {
            let actual = coef.footpoint_latitude(coef.meridian_arc(lat));
            assert!((actual - lat).abs() < 1e-9, "{lat}: {actual}");
        }
    }

    #[test]
    fn test_sk42() {
        let wgs84 = SeriesCoefficients::wgs84();
        let sk42 = SeriesCoefficients::new(&Ellipsoid::SK42);

        assert_eq!(sk42.semi_major_axis, 6378245.0);
        assert!(sk42.e2 < wgs84.e2);
        assert!((sk42.m1 - wgs84.m1).abs() < 1e-6);
    }
}
