//! Miscellaneous tools.

use ndarray::{ self as nd, Ix1 };
use num_complex::Complex;
use crate::{ complex::abs2, real::Real };

/// Integrate using the trapezoidal rule.
///
/// *Panics if `y` has length less than 2*.
pub fn trapz<S, F>(y: &nd::ArrayBase<S, Ix1>, dx: F) -> F
where
    S: nd::Data<Elem = F>,
    F: Real,
{
    let n: usize = y.len();
    let two = F::lit(2.0);
    let inner = y.slice(nd::s![1..n - 1]).iter()
        .fold(F::zero(), |acc, yk| acc + *yk);
    (dx / two) * (y[0] + two * inner + y[n - 1])
}

/// Calculate the norm (integrated probability density) of a wavefunction
/// sampled at even intervals.
///
/// *Panics if `q` has length less than 2*.
pub fn wf_norm<S, F>(q: &nd::ArrayBase<S, Ix1>, dx: F) -> F
where
    S: nd::Data<Elem = Complex<F>>,
    F: Real,
{
    let p: nd::Array1<F> = q.mapv(abs2);
    trapz(&p, dx)
}

/// Calculate the norm ∫ *r*² |*q*|² d*r* of a radial wavefunction sampled at
/// even intervals over radii `r`.
///
/// *Panics if `q` and `r` have unequal lengths or length less than 2*.
pub fn wf_norm_radial<S, T, F>(
    q: &nd::ArrayBase<S, Ix1>,
    r: &nd::ArrayBase<T, Ix1>,
    dr: F,
) -> F
where
    S: nd::Data<Elem = Complex<F>>,
    T: nd::Data<Elem = F>,
    F: Real,
{
    let p: nd::Array1<F>
        = nd::Zip::from(q).and(r)
        .map_collect(|&qk, &rk| rk * rk * abs2(qk));
    trapz(&p, dr)
}

/// Calculate the inner product ⟨q|p⟩ of two wavefunctions.
///
/// *Panics if either array has length less than 2*.
pub fn wf_dot<S, T, F>(
    q: &nd::ArrayBase<S, Ix1>,
    p: &nd::ArrayBase<T, Ix1>,
    dx: F,
) -> Complex<F>
where
    S: nd::Data<Elem = Complex<F>>,
    T: nd::Data<Elem = Complex<F>>,
    F: Real,
{
    let n: usize = q.len().min(p.len());
    let two = F::lit(2.0);
    let inner
        = q.iter().zip(p).skip(1).take(n - 2)
        .fold(Complex::new(F::zero(), F::zero()), |acc, (qk, pk)| {
            acc + qk.conj() * *pk
        });
    (q[0].conj() * p[0] + inner * two + q[n - 1].conj() * p[n - 1])
        * (dx / two)
}
