//! Special functions needed by the closed-form eigenstates.
//!
//! Degrees are taken as signed integers so that derived degrees (e.g.
//! `n - l - 1` for hydrogen) can be formed without unsigned underflow. Negative
//! degrees are a precondition violation: the result is meaningless but no
//! function here will panic or loop unboundedly.

use crate::real::Real;

/// Compute *n*! by direct iterated product.
///
/// Returns 1 for `n <= 1` (including the invalid `n < 0`).
pub fn factorial<F: Real>(n: i32) -> F {
    (2..=n).fold(F::one(), |acc, k| acc * F::of_int(k))
}

/// Compute the physicists' Hermite polynomial *H*<sub>*n*</sub>(*x*) via the
/// three-term recurrence
/// ```text
/// H[k + 1](x) = 2 x H[k](x) - 2 k H[k - 1](x)
/// H[0](x) = 1
/// H[1](x) = 2 x
/// ```
pub fn hermite<F: Real>(n: i32, x: F) -> F {
    let two = F::lit(2.0);
    if n <= 0 { return F::one(); }
    let mut h0 = F::one();
    let mut h1 = two * x;
    for k in 1..n {
        let h2 = two * x * h1 - two * F::of_int(k) * h0;
        h0 = h1;
        h1 = h2;
    }
    h1
}

/// Compute the associated (generalized) Laguerre polynomial
/// *L*<sub>*n*</sub><sup>*α*</sup>(*x*) via the three-term recurrence
/// ```text
///               (2 k + 1 + α - x) L[k](x) - (k + α) L[k - 1](x)
/// L[k + 1](x) = -----------------------------------------------
///                                  k + 1
/// L[0](x) = 1
/// L[1](x) = 1 + α - x
/// ```
///
/// Relative precision degrades for large `n` or `alpha` in single precision;
/// no compensated summation is attempted.
pub fn assoc_laguerre<F: Real>(n: i32, alpha: F, x: F) -> F {
    let one = F::one();
    let two = F::lit(2.0);
    if n == 0 { return one; }
    let mut l0 = one;
    let mut l1 = one + alpha - x;
    for k in 1..n {
        let kf = F::of_int(k);
        let l2 = ((two * kf + one + alpha - x) * l1 - (kf + alpha) * l0)
            / (kf + one);
        l0 = l1;
        l1 = l2;
    }
    l1
}
