//! Evaluation of a system's wavefunction over many sample points.
//!
//! Positions form a one-dimensional array of any length and order; the output
//! is index-aligned with it. Every sample depends only on its own position, so
//! the `par_*` variants distribute work over rayon's global pool and produce
//! results identical to their sequential counterparts.
//!
//! In all 2D arrays, the first (or zero-th) axis indexes time.

use ndarray as nd;
use num_complex::Complex;
use crate::{
    Arr1,
    complex::{ abs2, phase },
    error::LengthError,
    real::Real,
    system::QuantumSystem,
    utils::{ wf_norm, wf_norm_radial },
};

pub type FResult<T> = Result<T, LengthError>;

/// Generate `size` evenly spaced positions spanning `domain` (inclusive).
pub fn linspace<F: Real>(domain: (F, F), size: usize) -> nd::Array1<F> {
    nd::Array1::linspace(domain.0, domain.1, size)
}

/// Evaluate `system` at every position in `x` at time `t`.
pub fn evaluate<S, F>(system: &QuantumSystem<F>, x: &Arr1<S>, t: F)
    -> nd::Array1<Complex<F>>
where
    S: nd::Data<Elem = F>,
    F: Real,
{
    crate::debug!("evaluate: {} points of {} at t = {}", x.len(), system.kind(), t);
    x.mapv(|xk| system.evaluate(xk, t))
}

/// Like [`evaluate`], but in parallel.
pub fn par_evaluate<S, F>(system: &QuantumSystem<F>, x: &Arr1<S>, t: F)
    -> nd::Array1<Complex<F>>
where
    S: nd::Data<Elem = F>,
    F: Real,
{
    crate::debug!("par_evaluate: {} points of {} at t = {}", x.len(), system.kind(), t);
    nd::Zip::from(x).par_map_collect(|&xk| system.evaluate(xk, t))
}

/// Evaluate `system` at every position in `x` at time `t`, writing the
/// results to `out`.
///
/// Fails without writing anything if `x` and `out` have unequal lengths.
pub fn evaluate_into<S, T, F>(
    system: &QuantumSystem<F>,
    x: &Arr1<S>,
    t: F,
    out: &mut Arr1<T>,
) -> FResult<()>
where
    S: nd::Data<Elem = F>,
    T: nd::DataMut<Elem = Complex<F>>,
    F: Real,
{
    LengthError::check(x, &*out)?;
    nd::Zip::from(out).and(x)
        .for_each(|ok, &xk| { *ok = system.evaluate(xk, t); });
    Ok(())
}

/// Like [`evaluate_into`], but in parallel.
pub fn par_evaluate_into<S, T, F>(
    system: &QuantumSystem<F>,
    x: &Arr1<S>,
    t: F,
    out: &mut Arr1<T>,
) -> FResult<()>
where
    S: nd::Data<Elem = F>,
    T: nd::DataMut<Elem = Complex<F>>,
    F: Real,
{
    LengthError::check(x, &*out)?;
    nd::Zip::from(out).and(x)
        .par_for_each(|ok, &xk| { *ok = system.evaluate(xk, t); });
    Ok(())
}

/// Evaluate `system` over `x` at each of a series of times.
///
/// Row `k` of the returned array is the field at `t[k]`. Rows are computed in
/// parallel.
pub fn evaluate_frames<S, T, F>(
    system: &QuantumSystem<F>,
    x: &Arr1<S>,
    t: &Arr1<T>,
) -> nd::Array2<Complex<F>>
where
    S: nd::Data<Elem = F>,
    T: nd::Data<Elem = F>,
    F: Real,
{
    crate::debug!(
        "evaluate_frames: {} frames of {} points of {}",
        t.len(), x.len(), system.kind(),
    );
    let x = x.view();
    let mut frames: nd::Array2<Complex<F>>
        = nd::Array2::from_elem(
            (t.len(), x.len()), Complex::new(F::zero(), F::zero()));
    nd::Zip::from(frames.rows_mut()).and(t)
        .par_for_each(|row, &tk| {
            nd::Zip::from(row).and(&x)
                .for_each(|ok, &xk| { *ok = system.evaluate(xk, tk); });
        });
    frames
}

/// Integrated probability of a single frame `q` of `system` sampled over
/// evenly spaced positions `x`.
///
/// Hydrogen samples are radial, so they are weighted by *r*² and the result
/// is comparable to 1 for every bound state; the free packet integrates to
/// 1/√2 (see [`docs`][crate::docs]).
///
/// *Panics if `x` and `q` have unequal lengths or length less than 2*.
pub fn integrated_probability<S, T, F>(
    system: &QuantumSystem<F>,
    x: &Arr1<S>,
    q: &Arr1<T>,
) -> F
where
    S: nd::Data<Elem = F>,
    T: nd::Data<Elem = Complex<F>>,
    F: Real,
{
    let dx = x[1] - x[0];
    match system {
        QuantumSystem::HydrogenAtom { .. } => wf_norm_radial(q, x, dx),
        _ => wf_norm(q, dx),
    }
}

/// A real-valued channel of a complex sample, as consumed by a renderer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Observable {
    /// Probability density |ψ|².
    Probability,
    /// Re ψ.
    Real,
    /// Im ψ.
    Imaginary,
    /// arg ψ, in `(-π, π]`.
    Phase,
}

impl Observable {
    pub const ALL: [Self; 4]
        = [Self::Probability, Self::Real, Self::Imaginary, Self::Phase];

    /// Extract this channel from a single sample.
    #[inline]
    pub fn of<F: Real>(self, z: Complex<F>) -> F {
        match self {
            Self::Probability => abs2(z),
            Self::Real => z.re,
            Self::Imaginary => z.im,
            Self::Phase => phase(z),
        }
    }

    /// Short name, suitable as an array key.
    pub fn name(self) -> &'static str {
        match self {
            Self::Probability => "prob",
            Self::Real => "re",
            Self::Imaginary => "im",
            Self::Phase => "phase",
        }
    }
}

/// Extract a single channel from every sample of a field (or stack of
/// frames).
pub fn project<S, D, F>(field: &nd::ArrayBase<S, D>, observable: Observable)
    -> nd::Array<F, D>
where
    S: nd::Data<Elem = Complex<F>>,
    D: nd::Dimension,
    F: Real,
{
    field.mapv(|z| observable.of(z))
}
