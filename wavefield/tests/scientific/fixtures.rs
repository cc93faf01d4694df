use crate::scientific::tolerances::SampleLevel;
use wavefield::{ system::QuantumSystem, units };

pub fn well_levels(level: SampleLevel) -> Vec<u32> {
    match level {
        SampleLevel::Pr => vec![1, 2, 5],
        SampleLevel::Nightly => (1..=12).collect(),
    }
}

pub fn oscillator_levels(level: SampleLevel) -> Vec<u32> {
    match level {
        SampleLevel::Pr => vec![0, 1, 2, 5],
        SampleLevel::Nightly => (0..=10).collect(),
    }
}

pub fn hydrogen_states(level: SampleLevel) -> Vec<(u32, u32)> {
    match level {
        SampleLevel::Pr => vec![(1, 0), (2, 0), (2, 1), (3, 2), (4, 1)],
        SampleLevel::Nightly => {
            let mut out = Vec::new();
            for n in 1..=5u32 {
                for l in 0..n {
                    out.push((n, l));
                }
            }
            out
        }
    }
}

pub fn representative_times(level: SampleLevel) -> Vec<f64> {
    match level {
        SampleLevel::Pr => vec![0.0, 0.17, 1.3, 7.9],
        SampleLevel::Nightly => vec![0.0, 0.09, 0.21, 0.43, 1.3, 4.4, 7.9, 9.4],
    }
}

/// One instance of every kind of system, in natural units except for
/// hydrogen.
pub fn representative_systems() -> Vec<QuantumSystem<f64>> {
    vec![
        QuantumSystem::free_particle(4.0, 0.6, 1.0, 1.0).centered_at(-3.0),
        QuantumSystem::infinite_well(3.0, 3, 1.0, 1.0),
        QuantumSystem::harmonic_oscillator(4, 1.5, 2.0, 1.0),
        QuantumSystem::hydrogen_atom(3, 1, units::hbar),
    ]
}

/// Bounds of a grid that covers `system`'s support at the times in
/// [`representative_times`].
pub fn domain_for(system: &QuantumSystem<f64>) -> (f64, f64) {
    match *system {
        QuantumSystem::FreeParticle { .. } => (-40.0, 80.0),
        QuantumSystem::InfiniteWell { length, .. } => (0.0, length),
        QuantumSystem::HarmonicOscillator { .. } => (-12.0, 12.0),
        QuantumSystem::HydrogenAtom { n, .. } => (0.0, 20.0 * (n * n) as f64 * units::a0),
    }
}
