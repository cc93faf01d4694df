//! Theoretical background.
//!
//! # Contents
//! - [Background](#background)
//! - [Free wave packet](#free-wave-packet)
//! - [Infinite square well](#infinite-square-well)
//! - [Harmonic oscillator](#harmonic-oscillator)
//! - [Hydrogen atom](#hydrogen-atom)
//! - [Precision](#precision)
//!
//! # Background
//! The time-dependent Schrödinger equation in one dimension,
//! ```text
//!    ħ² ∂²                               ∂
//! - --- --- ψ(x, t) + V(x) ψ(x, t) = i ħ -- ψ(x, t)
//!   2 m ∂x²                              ∂t
//! ```
//! has closed-form solutions for only a handful of potentials. For a
//! time-independent *V*, any eigenstate *φ*ₙ of the Hamiltonian with energy
//! *E*ₙ evolves by a pure phase,
//! ```text
//! ψ(x, t) = φₙ(x) exp(-i Eₙ t / ħ)
//! ```
//! so its probability density |*ψ*|² is stationary and only the real and
//! imaginary parts (equivalently, the phase) change in time. Three of the four
//! systems here are of this form; the fourth, the free Gaussian packet, is a
//! superposition of plane waves and so changes shape as it evolves.
//!
//! All formulas are evaluated pointwise and directly, with no grid-dependent
//! normalization: a field sampled over any set of positions is exactly the set
//! of pointwise values.
//!
//! # Free wave packet
//! With *V* = 0, a Gaussian packet of initial width *σ* and central
//! wavenumber *k*₀ released from the origin at *t* = 0 drifts at the group
//! velocity *ħ* *k*₀ / *m* and spreads as
//! ```text
//!                  ⎛     ħ t  ⎞²
//! σ(t) = σ sqrt(1 + ⎜ ------- ⎟ )
//!                  ⎝  m σ²   ⎠
//! ```
//! The evaluator returns
//! ```text
//!             exp(-Δx² / 2 σ(t)²)                             1        ħ t
//! ψ(x, t) = ----------------------- exp[i (k₀ Δx - --- atan(------))]
//!           (2 π σ(t)²)^¼                             2      2 m σ²
//!
//! Δx = x - ħ k₀ t / m
//! ```
//! which reproduces the spreading envelope and the Gouy-like phase lag of the
//! exact solution. Its envelope integrates to 1/√2 rather than 1; this is
//! constant in time, so relative densities remain meaningful. The mean
//! kinetic energy *ħω*, *ω* = *ħ* *k*₀² / 2 *m*, is reported separately and
//! does not enter the phase.
//!
//! # Infinite square well
//! For a box occupying \[0, *L*\],
//! ```text
//! φₙ(x) = sqrt(2 / L) sin(n π x / L)
//!
//!       (n π ħ)²
//! Eₙ = ---------      n ∊ {1, 2, ...}
//!       2 m L²
//! ```
//! and *ψ* is identically zero outside the box. The cutoff is hard: there is
//! no smoothing at the walls.
//!
//! # Harmonic oscillator
//! For *V*(*x*) = *m* *ω*² *x*² / 2, with the scaled coordinate
//! *ξ* = *x* √(*m* *ω* / *ħ*),
//! ```text
//!           (m ω / ħ)^¼
//! φₙ(x) = -------------- Hₙ(ξ) exp(-ξ² / 2)
//!         sqrt(2ⁿ n! √π)
//!
//! Eₙ = ħ ω (n + 1/2)      n ∊ {0, 1, ...}
//! ```
//! where *H*ₙ is the physicists' Hermite polynomial, computed by the upward
//! recurrence *H*ₙ₊₁ = 2 *ξ* *H*ₙ − 2 *n* *H*ₙ₋₁.
//!
//! # Hydrogen atom
//! Only the radial factor of the hydrogen eigenstates is provided; the angular
//! dependence (a spherical harmonic) is left to the consumer. With the Bohr
//! radius *a*₀ and *ρ* = 2 *r* / *n* *a*₀,
//! ```text
//!                ⎛  2   ⎞³ (n - l - 1)!
//! Rₙₗ(r) = sqrt( ⎜------⎟  ------------ ) exp(-ρ/2) ρˡ L[n - l - 1; 2 l + 1](ρ)
//!                ⎝ n a₀ ⎠  2 n (n + l)!
//!
//! Eₙ = -Ry / n²      0 <= l < n
//! ```
//! where *L*\[*k*; *α*\] is the associated Laguerre polynomial, computed by
//! the upward recurrence
//! ```text
//! (k + 1) L[k + 1] = (2 k + 1 + α - ρ) L[k] - (k + α) L[k - 1]
//! ```
//! *a*₀ and the Rydberg energy Ry are fixed SI constants (see
//! [`units`][crate::units]), so *r* is in meters and *E*ₙ in joules. The
//! normalization is such that ∫ *r*² |*R*|² d*r* = 1.
//!
//! # Precision
//! Evaluation is generic over [`Real`][crate::real::Real] and defaults to
//! single precision. The upward recurrences are not compensated, so relative
//! accuracy degrades with large *n* (and large *α* for Laguerre polynomials),
//! as do the directly computed factorial prefactors, which leave the
//! representable range of `f32` for *n* ≳ 30. Nothing is validated at
//! evaluation time: invalid quantum numbers or non-positive constants yield
//! meaningless or non-finite values rather than errors.
