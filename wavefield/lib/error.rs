//! Collection of all error types.
//!
//! Evaluators themselves never fail; errors arise only at the edges, when
//! buffers are mismatched, when a caller asks for parameters to be checked, or
//! when a run configuration is loaded. All errors derive [`thiserror::Error`],
//! making them composable when allowed and compatible with application code
//! using [`anyhow`][anyhow].
//!
//! [anyhow]: https://crates.io/crates/anyhow

use ndarray as nd;
use thiserror::Error;
use crate::system::SystemKind;

/// Returned when an operation requiring equal-length arrays encounters arrays
/// with unequal length.
#[derive(Debug, Error)]
#[error("encountered arrays with incompatible lengths; got {0} and {1}")]
pub struct LengthError(pub usize, pub usize);

impl LengthError {
    pub(crate) fn check<S, A, T, B>(
        a: &nd::ArrayBase<S, nd::Ix1>,
        b: &nd::ArrayBase<T, nd::Ix1>,
    ) -> Result<(), Self>
    where
        S: nd::RawData<Elem = A>,
        T: nd::RawData<Elem = B>,
    {
        let na = a.len();
        let nb = b.len();
        (na == nb).then_some(()).ok_or(Self(na, nb))
    }
}

/// Returned by [`QuantumSystem::validate`][crate::system::QuantumSystem::validate]
/// for parameters that make the closed-form solution meaningless.
#[derive(Debug, Error)]
pub enum ParamError {
    /// A physical constant that must be strictly positive and finite is not.
    #[error("{kind}: `{name}` must be finite and greater than 0; got {value}")]
    NonPositive { kind: SystemKind, name: &'static str, value: f64 },

    /// A parameter that may take any sign is infinite or NaN.
    #[error("{kind}: `{name}` must be finite; got {value}")]
    NonFinite { kind: SystemKind, name: &'static str, value: f64 },

    /// A principal quantum number of zero.
    #[error("{0}: quantum number `n` must be at least 1")]
    ZeroQuantumNumber(SystemKind),

    /// Orbital quantum number out of range for hydrogen.
    #[error("hydrogen atom: require l < n; got n = {n}, l = {l}")]
    AngularMomentum { n: u32, l: u32 },
}

impl ParamError {
    pub(crate) fn check_positive(kind: SystemKind, name: &'static str, value: f64)
        -> Result<(), Self>
    {
        (value > 0.0 && value.is_finite()).then_some(())
            .ok_or(Self::NonPositive { kind, name, value })
    }

    pub(crate) fn check_finite(kind: SystemKind, name: &'static str, value: f64)
        -> Result<(), Self>
    {
        value.is_finite().then_some(())
            .ok_or(Self::NonFinite { kind, name, value })
    }
}

/// Returned when loading a [`RunConfig`][crate::config::RunConfig].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("could not read config: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration is not valid TOML or does not match the schema.
    #[error("malformed config: {0}")]
    Toml(#[from] toml::de::Error),

    /// [`ParamError`]
    #[error("invalid system parameters: {0}")]
    Param(#[from] ParamError),

    /// The sample grid is degenerate.
    #[error("grid must have at least 2 points over a non-empty domain; got {size} points over [{lo}, {hi}]")]
    Grid { size: usize, lo: f64, hi: f64 },

    /// The time series is empty or has non-finite bounds.
    #[error("time series must have at least 1 step between finite bounds; got {steps} steps over [{start}, {stop}]")]
    Time { start: f64, stop: f64, steps: usize },
}
