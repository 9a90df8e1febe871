//! Mathematical utilities for Sun and Moon ephemeris calculations.

#![allow(clippy::many_single_char_names)]

#[cfg(not(feature = "std"))]
use libm;

/// Mathematical constants
pub const PI: f64 = core::f64::consts::PI;

/// Full turn in radians.
pub const TWO_PI: f64 = core::f64::consts::TAU;

/// Quarter turn in radians.
pub const HALF_PI: f64 = core::f64::consts::FRAC_PI_2;

/// Converts degrees to radians.
#[inline]
pub const fn degrees_to_radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

/// Converts radians to degrees.
#[inline]
pub const fn radians_to_degrees(radians: f64) -> f64 {
    radians.to_degrees()
}

/// Reduces an angle in radians to the range [0, 2π).
///
/// Angles that are already at most one turn away from the range take a fast path.
/// Non-finite input is returned unchanged.
pub fn normalize_radians(r: f64) -> f64 {
    if (0.0..TWO_PI).contains(&r) {
        return r;
    }
    if (-TWO_PI..0.0).contains(&r) {
        // r + 2π can round up to exactly 2π for tiny negative r
        return wrap_upper(r + TWO_PI);
    }
    if (TWO_PI..2.0 * TWO_PI).contains(&r) {
        return r - TWO_PI;
    }
    if !r.is_finite() {
        return r;
    }

    wrap_upper(rem_euclid(r, TWO_PI))
}

/// Computes the non-negative remainder of `x / m` for positive `m`, exactly.
#[inline]
pub fn rem_euclid(x: f64, m: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.rem_euclid(m);

    #[cfg(not(feature = "std"))]
    {
        let r = libm::fmod(x, m);
        if r < 0.0 { r + m } else { r }
    }
}

#[inline]
fn wrap_upper(r: f64) -> f64 {
    if r >= TWO_PI { r - TWO_PI } else { r }
}

/// Clamps a value to [-1, 1] so inverse trigonometric functions stay in their domain.
#[inline]
pub const fn clamp_unit(x: f64) -> f64 {
    x.clamp(-1.0, 1.0)
}

/// Computes a polynomial using Horner's method for numerical stability.
///
/// Coefficients are ordered [a₀, a₁, a₂, ...] for a₀ + a₁x + a₂x² + ...
pub fn polynomial(coeffs: &[f64], x: f64) -> f64 {
    let Some(&last) = coeffs.last() else {
        return 0.0;
    };

    let mut result = last;
    for &coeff in coeffs.iter().rev().skip(1) {
        result = mul_add(result, x, coeff);
    }
    result
}

/// Computes sin(x) using the appropriate function for the compilation target.
#[inline]
pub fn sin(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.sin();

    #[cfg(not(feature = "std"))]
    return libm::sin(x);
}

/// Computes cos(x) using the appropriate function for the compilation target.
#[inline]
pub fn cos(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.cos();

    #[cfg(not(feature = "std"))]
    return libm::cos(x);
}

/// Computes tan(x) using the appropriate function for the compilation target.
#[inline]
pub fn tan(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.tan();

    #[cfg(not(feature = "std"))]
    return libm::tan(x);
}

/// Computes asin(x) with the argument clamped to [-1, 1].
#[inline]
pub fn asin(x: f64) -> f64 {
    let x = clamp_unit(x);

    #[cfg(feature = "std")]
    return x.asin();

    #[cfg(not(feature = "std"))]
    return libm::asin(x);
}

/// Computes acos(x) with the argument clamped to [-1, 1].
#[inline]
pub fn acos(x: f64) -> f64 {
    let x = clamp_unit(x);

    #[cfg(feature = "std")]
    return x.acos();

    #[cfg(not(feature = "std"))]
    return libm::acos(x);
}

/// Computes atan(x) using the appropriate function for the compilation target.
#[inline]
pub fn atan(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.atan();

    #[cfg(not(feature = "std"))]
    return libm::atan(x);
}

/// Computes atan2(y, x) using the appropriate function for the compilation target.
#[inline]
pub fn atan2(y: f64, x: f64) -> f64 {
    #[cfg(feature = "std")]
    return y.atan2(x);

    #[cfg(not(feature = "std"))]
    return libm::atan2(y, x);
}

/// Computes sqrt(x) using the appropriate function for the compilation target.
#[inline]
pub fn sqrt(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.sqrt();

    #[cfg(not(feature = "std"))]
    return libm::sqrt(x);
}

/// Computes floor(x) using the appropriate function for the compilation target.
#[inline]
pub fn floor(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.floor();

    #[cfg(not(feature = "std"))]
    return libm::floor(x);
}

/// Computes (x * a) + b with only one rounding error (fused multiply-add).
#[inline]
pub fn mul_add(x: f64, a: f64, b: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.mul_add(a, b);

    #[cfg(not(feature = "std"))]
    return libm::fma(x, a, b);
}

/// Computes x^n for integer n.
#[inline]
pub fn powi(x: f64, n: i32) -> f64 {
    #[cfg(feature = "std")]
    return x.powi(n);

    #[cfg(not(feature = "std"))]
    return libm::pow(x, f64::from(n));
}
