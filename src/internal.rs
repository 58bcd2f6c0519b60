/// Returns `a * b + c`, fused when the `fma` feature is on.
#[inline(always)]
pub(crate) fn fma(a: f64, b: f64, c: f64) -> f64 {
    if cfg!(feature = "fma") {
        f64::mul_add(a, b, c)
    } else {
        a * b + c
    }
}

/// Returns the sum of `coef[k] * sin(2 (k + 1) x)`.
///
/// The meridian arc and the footpoint latitude are both sums of this shape.
#[inline]
pub(crate) fn sin_series(x: f64, coef: &[f64]) -> f64 {
    coef.iter()
        .enumerate()
        .fold(0.0, |acc, (k, c)| fma(*c, (2.0 * (k + 1) as f64 * x).sin(), acc))
}
