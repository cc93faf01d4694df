//! Run configuration, read from TOML.
//!
//! A configuration names a system, a sample grid, a time series, and where to
//! put the results:
//! ```toml
//! [system]
//! kind = "harmonic-oscillator"
//! n = 3
//! omega = 1.0
//!
//! [grid]
//! domain = [-8.0, 8.0]
//! size = 2048
//!
//! [time]
//! start = 0.0
//! stop = 12.566
//! steps = 400
//!
//! [output]
//! path = "output/qho_n3.npz"
//! ```
//! `mass` and `hbar` default to 1 (natural units), except for hydrogen, whose
//! `hbar` defaults to the SI value to match its fixed SI length and energy
//! scales. `[time]` defaults to a single frame at *t* = 0 and `[output]` to
//! `output/field.npz`.

use std::{ fs, path::{ Path, PathBuf } };
use ndarray as nd;
use serde::Deserialize;
use crate::{
    error::ConfigError,
    field::linspace,
    real::Real,
    system::QuantumSystem,
    units,
};

fn one() -> f64 { 1.0 }

fn si_hbar() -> f64 { units::hbar }

/// Serialized form of a [`QuantumSystem`].
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case", deny_unknown_fields)]
pub enum SystemConfig {
    FreeParticle {
        k0: f64,
        sigma: f64,
        #[serde(default = "one")]
        mass: f64,
        #[serde(default = "one")]
        hbar: f64,
        #[serde(default)]
        center: f64,
    },
    InfiniteWell {
        length: f64,
        n: u32,
        #[serde(default = "one")]
        mass: f64,
        #[serde(default = "one")]
        hbar: f64,
    },
    HarmonicOscillator {
        n: u32,
        omega: f64,
        #[serde(default = "one")]
        mass: f64,
        #[serde(default = "one")]
        hbar: f64,
    },
    HydrogenAtom {
        n: u32,
        l: u32,
        #[serde(default = "si_hbar")]
        hbar: f64,
    },
}

impl SystemConfig {
    /// Convert to a [`QuantumSystem`] of the requested precision.
    pub fn to_system<F: Real>(&self) -> QuantumSystem<F> {
        match *self {
            Self::FreeParticle { k0, sigma, mass, hbar, center }
                => QuantumSystem::free_particle(
                    F::lit(k0), F::lit(sigma), F::lit(mass), F::lit(hbar))
                .centered_at(F::lit(center)),
            Self::InfiniteWell { length, n, mass, hbar }
                => QuantumSystem::infinite_well(
                    F::lit(length), n, F::lit(mass), F::lit(hbar)),
            Self::HarmonicOscillator { n, omega, mass, hbar }
                => QuantumSystem::harmonic_oscillator(
                    n, F::lit(omega), F::lit(mass), F::lit(hbar)),
            Self::HydrogenAtom { n, l, hbar }
                => QuantumSystem::hydrogen_atom(n, l, F::lit(hbar)),
        }
    }
}

/// Evenly spaced sample positions.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GridConfig {
    /// Inclusive bounds.
    pub domain: [f64; 2],
    /// Number of points.
    pub size: usize,
}

/// Evenly spaced evaluation times.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TimeConfig {
    #[serde(default)]
    pub start: f64,
    #[serde(default)]
    pub stop: f64,
    #[serde(default = "TimeConfig::default_steps")]
    pub steps: usize,
}

impl TimeConfig {
    fn default_steps() -> usize { 1 }
}

impl Default for TimeConfig {
    fn default() -> Self {
        Self { start: 0.0, stop: 0.0, steps: Self::default_steps() }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    pub path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self { Self { path: PathBuf::from("output/field.npz") } }
}

/// Everything needed for one evaluation run.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    pub system: SystemConfig,
    pub grid: GridConfig,
    #[serde(default)]
    pub time: TimeConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl RunConfig {
    /// Parse and validate a configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }

    /// Check the system parameters, grid, and time series at both single and
    /// double precision.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_as::<f64>()?;
        self.validate_as::<f32>()
    }

    /// Check that every value survives conversion to `F` with its meaning
    /// intact.
    fn validate_as<F: Real>(&self) -> Result<(), ConfigError> {
        self.system::<F>().validate()?;
        let GridConfig { domain: [lo, hi], size } = self.grid;
        let (lo_, hi_) = (F::lit(lo), F::lit(hi));
        if size < 2 || !(hi_ > lo_) || !lo_.is_finite() || !hi_.is_finite() {
            return Err(ConfigError::Grid { size, lo, hi });
        }
        let TimeConfig { start, stop, steps } = self.time;
        if steps == 0 || !F::lit(start).is_finite() || !F::lit(stop).is_finite() {
            return Err(ConfigError::Time { start, stop, steps });
        }
        Ok(())
    }

    pub fn system<F: Real>(&self) -> QuantumSystem<F> {
        self.system.to_system()
    }

    /// Sample positions.
    pub fn positions<F: Real>(&self) -> nd::Array1<F> {
        let [lo, hi] = self.grid.domain;
        linspace((F::lit(lo), F::lit(hi)), self.grid.size)
    }

    /// Evaluation times.
    pub fn times<F: Real>(&self) -> nd::Array1<F> {
        let TimeConfig { start, stop, steps } = self.time;
        linspace((F::lit(start), F::lit(stop)), steps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParamError;

    const OSC: &str = r#"
        [system]
        kind = "harmonic-oscillator"
        n = 3
        omega = 2.0

        [grid]
        domain = [-8.0, 8.0]
        size = 101

        [time]
        stop = 3.0
        steps = 4

        [output]
        path = "out/osc.npz"
    "#;

    #[test]
    fn parse_full_config() {
        let config = RunConfig::from_toml_str(OSC).unwrap();
        assert_eq!(
            config.system,
            SystemConfig::HarmonicOscillator { n: 3, omega: 2.0, mass: 1.0, hbar: 1.0 },
        );
        assert_eq!(config.system::<f32>(), QuantumSystem::harmonic_oscillator(3, 2.0, 1.0, 1.0));
        assert_eq!(config.positions::<f32>().len(), 101);
        assert_eq!(config.times::<f64>(), nd::array![0.0, 1.0, 2.0, 3.0]);
        assert_eq!(config.output.path, PathBuf::from("out/osc.npz"));
    }

    #[test]
    fn defaults() {
        let config = RunConfig::from_toml_str(r#"
            system = { kind = "hydrogen-atom", n = 2, l = 1 }
            grid = { domain = [0.0, 1e-9], size = 64 }
        "#).unwrap();
        assert_eq!(config.system, SystemConfig::HydrogenAtom { n: 2, l: 1, hbar: units::hbar });
        assert_eq!(config.times::<f32>(), nd::array![0.0_f32]);
        assert_eq!(config.output, OutputConfig::default());

        let packet = RunConfig::from_toml_str(r#"
            system = { kind = "free-particle", k0 = 5.0, sigma = 0.5, center = -2.0 }
            grid = { domain = [-10.0, 10.0], size = 512 }
        "#).unwrap();
        assert_eq!(
            packet.system::<f64>(),
            QuantumSystem::free_particle(5.0, 0.5, 1.0, 1.0).centered_at(-2.0),
        );
    }

    #[test]
    fn rejects_bad_configs() {
        let bad_system = r#"
            system = { kind = "hydrogen-atom", n = 2, l = 2 }
            grid = { domain = [0.0, 1e-9], size = 64 }
        "#;
        assert!(matches!(
            RunConfig::from_toml_str(bad_system),
            Err(ConfigError::Param(ParamError::AngularMomentum { .. })),
        ));

        let bad_grid = r#"
            system = { kind = "infinite-well", length = 1.0, n = 1 }
            grid = { domain = [1.0, 1.0], size = 64 }
        "#;
        assert!(matches!(RunConfig::from_toml_str(bad_grid), Err(ConfigError::Grid { .. })));

        let bad_time = r#"
            system = { kind = "infinite-well", length = 1.0, n = 1 }
            grid = { domain = [0.0, 1.0], size = 64 }
            time = { steps = 0 }
        "#;
        assert!(matches!(RunConfig::from_toml_str(bad_time), Err(ConfigError::Time { .. })));

        let unknown_kind = r#"
            system = { kind = "double-well", n = 1 }
            grid = { domain = [0.0, 1.0], size = 64 }
        "#;
        assert!(matches!(RunConfig::from_toml_str(unknown_kind), Err(ConfigError::Toml(_))));

        let misspelled = r#"
            system = { kind = "harmonic-oscillator", n = 1, omega = 1.0, masss = 50.0 }
            grid = { domain = [-5.0, 5.0], size = 64 }
        "#;
        assert!(matches!(RunConfig::from_toml_str(misspelled), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn rejects_values_that_break_evaluation() {
        let nan_time = r#"
            system = { kind = "infinite-well", length = 1.0, n = 1 }
            grid = { domain = [0.0, 1.0], size = 64 }
            time = { stop = nan, steps = 3 }
        "#;
        assert!(matches!(
            RunConfig::from_toml_str(nan_time),
            Err(ConfigError::Time { steps: 3, .. }),
        ));

        let infinite_start = r#"
            system = { kind = "infinite-well", length = 1.0, n = 1 }
            grid = { domain = [0.0, 1.0], size = 64 }
            time = { start = -inf, stop = 1.0, steps = 3 }
        "#;
        assert!(matches!(RunConfig::from_toml_str(infinite_start), Err(ConfigError::Time { .. })));

        // fine in double precision, zero in single
        let tiny_width = r#"
            system = { kind = "free-particle", k0 = 1.0, sigma = 1e-50 }
            grid = { domain = [-1.0, 1.0], size = 64 }
        "#;
        assert!(matches!(
            RunConfig::from_toml_str(tiny_width),
            Err(ConfigError::Param(ParamError::NonPositive { name: "sigma", .. })),
        ));

        // fine in double precision, infinite in single
        let huge_grid = r#"
            system = { kind = "free-particle", k0 = 1.0, sigma = 0.5 }
            grid = { domain = [-1.0, 1e50], size = 64 }
        "#;
        assert!(matches!(RunConfig::from_toml_str(huge_grid), Err(ConfigError::Grid { .. })));

        let huge_mass = r#"
            system = { kind = "infinite-well", length = 1.0, n = 1, mass = 1e300 }
            grid = { domain = [0.0, 1.0], size = 64 }
        "#;
        assert!(matches!(
            RunConfig::from_toml_str(huge_mass),
            Err(ConfigError::Param(ParamError::NonPositive { name: "mass", .. })),
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        assert!(matches!(
            RunConfig::load("/nonexistent/wavefield.toml"),
            Err(ConfigError::Io(_)),
        ));
    }
}
