//! Description of a quantum system: which closed form to evaluate and the
//! parameters it needs.

use std::fmt;
use num_complex::Complex;
use crate::{
    error::ParamError,
    real::Real,
    wavefunctions as wf,
};

/// Bare selector for the supported systems.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SystemKind {
    FreeParticle,
    InfiniteWell,
    HarmonicOscillator,
    HydrogenAtom,
}

impl fmt::Display for SystemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FreeParticle => write!(f, "free particle"),
            Self::InfiniteWell => write!(f, "infinite well"),
            Self::HarmonicOscillator => write!(f, "harmonic oscillator"),
            Self::HydrogenAtom => write!(f, "hydrogen atom"),
        }
    }
}

/// A quantum system together with every parameter its wavefunction depends
/// on, apart from position and time.
///
/// Each variant carries exactly the fields meaningful for it, so evaluation
/// can never read, e.g., a well width for an oscillator.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum QuantumSystem<F> {
    /// Freely evolving Gaussian wave packet.
    FreeParticle {
        /// Central wavenumber.
        k0: F,
        /// Initial width.
        sigma: F,
        mass: F,
        hbar: F,
        /// Packet center at *t* = 0.
        center: F,
    },
    /// Particle in a box occupying `[0, length]`.
    InfiniteWell {
        length: F,
        n: u32,
        mass: F,
        hbar: F,
    },
    HarmonicOscillator {
        n: u32,
        /// Angular frequency.
        omega: F,
        mass: F,
        hbar: F,
    },
    /// Radial part of a hydrogen eigenstate, in SI lengths.
    HydrogenAtom {
        n: u32,
        l: u32,
        hbar: F,
    },
}

impl<F: Real> QuantumSystem<F> {
    /// Gaussian packet initially centered on the origin.
    pub fn free_particle(k0: F, sigma: F, mass: F, hbar: F) -> Self {
        Self::FreeParticle { k0, sigma, mass, hbar, center: F::zero() }
    }

    pub fn infinite_well(length: F, n: u32, mass: F, hbar: F) -> Self {
        Self::InfiniteWell { length, n, mass, hbar }
    }

    pub fn harmonic_oscillator(n: u32, omega: F, mass: F, hbar: F) -> Self {
        Self::HarmonicOscillator { n, omega, mass, hbar }
    }

    pub fn hydrogen_atom(n: u32, l: u32, hbar: F) -> Self {
        Self::HydrogenAtom { n, l, hbar }
    }

    /// Move the initial packet center to `x0`. Systems other than
    /// [`Self::FreeParticle`] are returned unchanged.
    pub fn centered_at(self, x0: F) -> Self {
        match self {
            Self::FreeParticle { k0, sigma, mass, hbar, .. }
                => Self::FreeParticle { k0, sigma, mass, hbar, center: x0 },
            other => other,
        }
    }

    /// Return the selector for this system.
    pub fn kind(&self) -> SystemKind {
        match self {
            Self::FreeParticle { .. } => SystemKind::FreeParticle,
            Self::InfiniteWell { .. } => SystemKind::InfiniteWell,
            Self::HarmonicOscillator { .. } => SystemKind::HarmonicOscillator,
            Self::HydrogenAtom { .. } => SystemKind::HydrogenAtom,
        }
    }

    /// Energy of the state, in the units of the system's parameters (joules
    /// for hydrogen). For the free packet this is its mean kinetic energy.
    pub fn energy(&self) -> F {
        match *self {
            Self::FreeParticle { k0, mass, hbar, .. }
                => wf::free_particle_energy(k0, mass, hbar),
            Self::InfiniteWell { length, n, mass, hbar }
                => wf::infinite_well_energy(length, n, mass, hbar),
            Self::HarmonicOscillator { n, omega, hbar, .. }
                => wf::harmonic_energy(n, omega, hbar),
            Self::HydrogenAtom { n, .. } => wf::hydrogen_energy(n),
        }
    }

    /// Evaluate the wavefunction at position `x` (the radius, for hydrogen)
    /// and time `t`.
    #[inline]
    pub fn evaluate(&self, x: F, t: F) -> Complex<F> {
        match *self {
            Self::FreeParticle { k0, sigma, mass, hbar, center }
                => wf::free_particle(x - center, k0, sigma, t, mass, hbar),
            Self::InfiniteWell { length, n, mass, hbar }
                => wf::infinite_well(x, length, n, t, mass, hbar),
            Self::HarmonicOscillator { n, omega, mass, hbar }
                => wf::harmonic_oscillator(x, n, omega, t, mass, hbar),
            Self::HydrogenAtom { n, l, hbar }
                => wf::hydrogen_atom(x, n, l, t, hbar),
        }
    }

    /// Check that the parameters describe a physical state.
    ///
    /// Evaluation never calls this; it is meant to be run once by whatever
    /// constructs the system.
    pub fn validate(&self) -> Result<(), ParamError> {
        let kind = self.kind();
        let pos = |name: &'static str, value: F| {
            ParamError::check_positive(
                kind, name, value.to_f64().unwrap_or(f64::NAN))
        };
        let finite = |name: &'static str, value: F| {
            ParamError::check_finite(
                kind, name, value.to_f64().unwrap_or(f64::NAN))
        };
        match *self {
            Self::FreeParticle { k0, sigma, mass, hbar, center } => {
                finite("k0", k0)?;
                finite("center", center)?;
                pos("sigma", sigma)?;
                pos("mass", mass)?;
                pos("hbar", hbar)?;
            },
            Self::InfiniteWell { length, n, mass, hbar } => {
                pos("length", length)?;
                pos("mass", mass)?;
                pos("hbar", hbar)?;
                if n == 0 { return Err(ParamError::ZeroQuantumNumber(kind)); }
            },
            Self::HarmonicOscillator { n: _, omega, mass, hbar } => {
                pos("omega", omega)?;
                pos("mass", mass)?;
                pos("hbar", hbar)?;
            },
            Self::HydrogenAtom { n, l, hbar } => {
                pos("hbar", hbar)?;
                if n == 0 { return Err(ParamError::ZeroQuantumNumber(kind)); }
                if l >= n { return Err(ParamError::AngularMomentum { n, l }); }
            },
        }
        Ok(())
    }
}

impl<F: Real> fmt::Display for QuantumSystem<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind())?;
        match self {
            Self::FreeParticle { k0, sigma, mass, hbar, center }
                => write!(f, " (k0 = {k0}, σ = {sigma}, x0 = {center}, m = {mass}, ħ = {hbar})"),
            Self::InfiniteWell { length, n, mass, hbar }
                => write!(f, " (n = {n}, L = {length}, m = {mass}, ħ = {hbar})"),
            Self::HarmonicOscillator { n, omega, mass, hbar }
                => write!(f, " (n = {n}, ω = {omega}, m = {mass}, ħ = {hbar})"),
            Self::HydrogenAtom { n, l, hbar }
                => write!(f, " (n = {n}, l = {l}, ħ = {hbar})"),
        }
    }
}
