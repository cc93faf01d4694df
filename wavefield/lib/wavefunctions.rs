#![allow(non_snake_case)]

//! Closed-form solutions *ψ*(*x*, *t*) of the time-dependent Schrödinger
//! equation for the supported systems.
//!
//! Each evaluator returns the complex amplitude at a single point. None of
//! them validate their inputs: unphysical parameters (zero mass, `l >= n`,
//! ...) produce NaN/∞ or otherwise meaningless values rather than errors. See
//! [`QuantumSystem::validate`][crate::system::QuantumSystem::validate] for a
//! caller-side check.

use num_complex::Complex;
use crate::{
    complex::from_polar,
    real::Real,
    special::{ assoc_laguerre, factorial, hermite },
    units,
};

/// Mean kinetic energy *ħω* of a free wave packet with central wavenumber
/// `k0`, where *ω* = *ħ* *k*₀² / 2 *m*.
pub fn free_particle_energy<F: Real>(k0: F, mass: F, hbar: F) -> F {
    let omega = hbar * k0 * k0 / (F::lit(2.0) * mass);
    hbar * omega
}

/// Gaussian wave packet of initial width `sigma` and central wavenumber `k0`,
/// initially centered on the origin, under free evolution.
///
/// The width spreads as
/// ```text
/// σ(t) = σ √(1 + (ħ t / m σ²)²)
/// ```
/// while the center drifts with group velocity *ħ* *k*₀ / *m*. The returned
/// phase is *k*₀ Δ*x* − ½ atan2(*ħ* *t*, 2 *m* *σ*²), with Δ*x* the
/// displacement from the drifted center.
pub fn free_particle<F: Real>(
    x: F,
    k0: F,
    sigma: F,
    t: F,
    mass: F,
    hbar: F,
) -> Complex<F>
{
    let two = F::lit(2.0);
    let s2 = sigma * sigma;
    let spread = hbar * t / (mass * s2);
    let st2 = s2 * (F::one() + spread * spread);
    let dx = x - hbar * k0 * t / mass;
    let amplitude
        = (-dx * dx / (two * st2)).exp()
        / (two * F::PI() * st2).powf(F::lit(0.25));
    let phase = k0 * dx - F::lit(0.5) * (hbar * t).atan2(two * mass * s2);
    from_polar(amplitude, phase)
}

/// Energy of the `n`-th level of an infinite square well of width `L`,
/// (*n* π *ħ*)² / 2 *m* *L*².
pub fn infinite_well_energy<F: Real>(L: F, n: u32, mass: F, hbar: F) -> F {
    let k = F::of_int(n as i32) * F::PI();
    k * k * units::box_energy(mass, L, hbar)
}

/// `n`-th eigenstate of an infinite square well occupying `[0, L]`.
///
/// Exactly zero for `x < 0` or `x > L`.
pub fn infinite_well<F: Real>(
    x: F,
    L: F,
    n: u32,
    t: F,
    mass: F,
    hbar: F,
) -> Complex<F>
{
    if x < F::zero() || x > L { return Complex::new(F::zero(), F::zero()); }
    let k = F::of_int(n as i32) * F::PI() / L;
    let amplitude = (F::lit(2.0) / L).sqrt() * (k * x).sin();
    let phase = -infinite_well_energy(L, n, mass, hbar) * t / hbar;
    from_polar(amplitude, phase)
}

/// Energy *ħω*(*n* + ½) of the `n`-th harmonic oscillator level.
pub fn harmonic_energy<F: Real>(n: u32, omega: F, hbar: F) -> F {
    hbar * omega * (F::of_int(n as i32) + F::lit(0.5))
}

/// `n`-th eigenstate of the harmonic oscillator with angular frequency
/// `omega`.
///
/// With *ξ* = *x* √(*m* *ω* / *ħ*), the spatial part is
/// ```text
///             (m ω / ħ)^¼
/// ψ(ξ) = ---------------- H[n](ξ) exp(-ξ² / 2)
///        √(2ⁿ n! √π)
/// ```
/// evaluated directly, so the prefactor under- or overflows for large `n`
/// (beyond roughly 30 in single precision).
pub fn harmonic_oscillator<F: Real>(
    x: F,
    n: u32,
    omega: F,
    t: F,
    mass: F,
    hbar: F,
) -> Complex<F>
{
    let two = F::lit(2.0);
    let n_ = n as i32;
    let mw = mass * omega / hbar;
    let xi = x * mw.sqrt();
    let norm
        = mw.powf(F::lit(0.25))
        / (two.powi(n_) * factorial::<F>(n_) * F::PI().sqrt()).sqrt();
    let amplitude = norm * hermite(n_, xi) * (-xi * xi / two).exp();
    let phase = -harmonic_energy(n, omega, hbar) * t / hbar;
    from_polar(amplitude, phase)
}

/// Bohr energy −Ry / *n*² of the `n`-th hydrogen level, in joules.
pub fn hydrogen_energy<F: Real>(n: u32) -> F {
    let n = F::of_int(n as i32);
    -F::lit(units::Ry) / (n * n)
}

/// Radial part *R*<sub>*nl*</sub>(*r*) of the hydrogen eigenstate with
/// quantum numbers `n` and `l`, with time dependence attached.
///
/// `r` is in meters and `t` is in units matching `hbar` (seconds for SI
/// *ħ*); the Bohr radius and Rydberg energy are fixed SI constants from
/// [`units`]. With *ρ* = 2 *r* / *n* *a*₀,
/// ```text
///              ⎡  2  ⎤³ (n - l - 1)!
/// R(ρ) = sqrt( ⎢-----⎥  ------------ ) exp(-ρ / 2) ρˡ L[n - l - 1; 2 l + 1](ρ)
///              ⎣n a₀ ⎦  2 n (n + l)!
/// ```
/// Requires `0 <= l < n`.
pub fn hydrogen_atom<F: Real>(r: F, n: u32, l: u32, t: F, hbar: F) -> Complex<F> {
    let two = F::lit(2.0);
    let a0 = F::lit(units::a0);
    let (n_, l_) = (n as i32, l as i32);
    let nf = F::of_int(n_);
    let k = n_ - l_ - 1;
    let rho = two * r / (nf * a0);
    let norm
        = (
            (two / (nf * a0)).powi(3) * factorial::<F>(k)
            / (two * nf * factorial::<F>(n_ + l_))
        ).sqrt();
    let radial
        = norm * (-rho / two).exp() * rho.powi(l_)
        * assoc_laguerre(k, F::of_int(2 * l_ + 1), rho);
    let phase = -hydrogen_energy::<F>(n) * t / hbar;
    from_polar(radial, phase)
}
