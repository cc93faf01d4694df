//! Textbook closed forms for low-lying states, written out explicitly.

use std::f64::consts::PI;

/// Harmonic oscillator eigenstate with m = ω = ħ = 1, for n ≤ 3.
pub fn oscillator_state(n: u32, x: f64) -> f64 {
    let ground = PI.powf(-0.25) * (-x * x / 2.0).exp();
    match n {
        0 => ground,
        1 => 2.0_f64.sqrt() * x * ground,
        2 => (2.0 * x * x - 1.0) / 2.0_f64.sqrt() * ground,
        3 => (2.0 * x.powi(3) - 3.0 * x) / 3.0_f64.sqrt() * ground,
        _ => panic!("no reference form for n = {}", n),
    }
}

/// Hydrogen radial function in units of the Bohr radius, for n ≤ 2.
pub fn hydrogen_radial(n: u32, l: u32, r: f64, a0: f64) -> f64 {
    let rho = r / a0;
    let scale = a0.powf(-1.5);
    match (n, l) {
        (1, 0) => 2.0 * scale * (-rho).exp(),
        (2, 0) => scale / (2.0 * 2.0_f64.sqrt()) * (2.0 - rho) * (-rho / 2.0).exp(),
        (2, 1) => scale / (2.0 * 6.0_f64.sqrt()) * rho * (-rho / 2.0).exp(),
        _ => panic!("no reference form for (n, l) = ({}, {})", n, l),
    }
}

/// Infinite well eigenstate on [0, length].
pub fn well_state(n: u32, length: f64, x: f64) -> f64 {
    (2.0 / length).sqrt() * (n as f64 * PI * x / length).sin()
}

/// Relative-or-absolute closeness.
pub fn close(a: f64, b: f64, rel: f64, abs: f64) -> bool {
    (a - b).abs() <= abs.max(rel * a.abs().max(b.abs()))
}
