//! Provides closed-form solutions to the time-dependent Schrödinger equation
//! for a few canonical one-dimensional (or radial) systems, evaluated over
//! arbitrary grids of sample points to produce complex-valued fields for
//! visualization.
//!
//! Supported systems:
//! - Free particle (spreading Gaussian wave packet)
//! - Infinite square well
//! - Harmonic oscillator
//! - Hydrogen atom (radial part)
//!
//! Evaluation is pure and stateless; fields can be computed sequentially or
//! in parallel with identical results. All formulas are generic over
//! [`real::Real`] and default to single precision.
//!
//! See [`docs`] for theoretical background.

pub mod telemetry;

pub mod complex;
pub mod config;
pub mod error;
pub mod field;
pub mod real;
pub mod special;
pub mod system;
pub mod units;
pub mod utils;
pub mod wavefunctions;

pub mod docs;

pub use complex::C32;
pub use field::Observable;
pub use system::{ QuantumSystem, SystemKind };

pub type Arr1<S> = ndarray::ArrayBase<S, ndarray::Ix1>;
