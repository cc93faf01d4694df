//! Complex-number algebra over a single shared value type.
//!
//! Values are plain [`num_complex::Complex`] pairs; the functions here give
//! the full operation set used by the evaluators and their consumers under
//! one set of names. All of them are pure and total.

use num_complex::Complex;
use crate::real::Real;

/// Single-precision complex sample.
pub type C32 = Complex<f32>;

/// Double-precision complex sample.
pub type C64 = Complex<f64>;

/// Componentwise sum.
#[inline]
pub fn add<F: Real>(a: Complex<F>, b: Complex<F>) -> Complex<F> { a + b }

/// Componentwise difference.
#[inline]
pub fn sub<F: Real>(a: Complex<F>, b: Complex<F>) -> Complex<F> { a - b }

/// Multiply both components by a real factor.
#[inline]
pub fn scale<F: Real>(z: Complex<F>, s: F) -> Complex<F> {
    Complex::new(z.re * s, z.im * s)
}

/// Alias for [`scale`].
#[inline]
pub fn mul_scalar<F: Real>(z: Complex<F>, s: F) -> Complex<F> { scale(z, s) }

/// Rotate by 90°, i.e. multiply by the imaginary unit.
#[inline]
pub fn mul_i<F: Real>(z: Complex<F>) -> Complex<F> { Complex::new(-z.im, z.re) }

/// Complex product.
#[inline]
pub fn mul<F: Real>(a: Complex<F>, b: Complex<F>) -> Complex<F> { a * b }

/// Complex conjugate.
#[inline]
pub fn conj<F: Real>(z: Complex<F>) -> Complex<F> { Complex::new(z.re, -z.im) }

/// Inner product of `a` and `b` treated as real 2-vectors.
///
/// This is *not* `a * conj(b)`; it equals the real part of that product.
#[inline]
pub fn dot<F: Real>(a: Complex<F>, b: Complex<F>) -> F {
    a.re * b.re + a.im * b.im
}

/// Squared magnitude.
#[inline]
pub fn abs2<F: Real>(z: Complex<F>) -> F { z.re * z.re + z.im * z.im }

/// Magnitude.
#[inline]
pub fn abs<F: Real>(z: Complex<F>) -> F { abs2(z).sqrt() }

/// Argument in `(-π, π]`.
///
/// The value at the origin is whatever `atan2(0, 0)` gives on the platform
/// (zero for both `f32` and `f64`) and should not be relied upon.
#[inline]
pub fn phase<F: Real>(z: Complex<F>) -> F { z.im.atan2(z.re) }

/// Unit rotor `e^{iθ} = (cos θ, sin θ)`.
#[inline]
pub fn exp_i<F: Real>(theta: F) -> Complex<F> {
    let (s, c) = theta.sin_cos();
    Complex::new(c, s)
}

/// Polar construction `r e^{iθ}`.
#[inline]
pub fn from_polar<F: Real>(r: F, theta: F) -> Complex<F> {
    scale(exp_i(theta), r)
}

/// Gaussian-enveloped plane wave centered on `x0`:
/// ```text
/// exp(-(x - x0)² / 2σ²) e^{i k0 x}
/// ```
/// The carrier phase is taken relative to the origin, not to `x0`.
#[inline]
pub fn wave_packet<F: Real>(x: F, x0: F, k0: F, sigma: F) -> Complex<F> {
    let two = F::lit(2.0);
    let dx = x - x0;
    let gauss = (-dx * dx / (two * sigma * sigma)).exp();
    from_polar(gauss, k0 * x)
}
