#![allow(non_upper_case_globals)]

//! Physical constants and characteristic scales.
//!
//! Concrete values are taken from NIST (CODATA 2018) and given in SI units.
//! The hydrogen evaluator uses [`a0`] and [`Ry`] directly; other systems take
//! their constants as parameters, so any consistent unit system (including
//! natural units with *ħ* = *m* = 1) may be used for them.

use crate::real::Real;

/// Planck constant (kg m^2 s^-1)
pub const h: f64 = 6.62607015e-34;
//             +/- 0 (exact)

/// reduced Planck constant (kg m^2 s^-1)
pub const hbar: f64 = h / 2.0 / std::f64::consts::PI;
//                +/- 0 (exact)

/// electron mass (kg)
pub const me: f64 = 9.1093837015e-31;
//              +/- 0.0000000028e-31

/// Bohr radius (m)
pub const a0: f64 = 5.29177210903e-11;
//              +/- 0.00000000080e-11

/// Hartree energy (J)
pub const Eh: f64 = 4.3597447222071e-18;
//              +/- 0.0000000000085e-18

/// Rydberg energy (J) = Eh / 2
pub const Ry: f64 = 2.1798723611035e-18;
//              +/- 0.0000000000042e-18

/// Characteristic length √(*ħ* / *m* *ω*) of a harmonic oscillator ground
/// state.
pub fn oscillator_length<F: Real>(mass: F, omega: F, hbar_: F) -> F {
    (hbar_ / (mass * omega)).sqrt()
}

/// Energy unit *ħ*²/(2 *m* *L*²) of a particle of mass *m* confined to a box
/// of width *L*; the *n*-th well level is *n*² π² times this.
pub fn box_energy<F: Real>(mass: F, length: F, hbar_: F) -> F {
    hbar_ * hbar_ / (F::lit(2.0) * mass * length * length)
}
