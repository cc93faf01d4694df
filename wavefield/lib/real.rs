//! Floating-point platform layer.
//!
//! Every formula in this crate is written once, generically over [`Real`],
//! which supplies the intrinsics (trigonometric functions, exponentials,
//! `atan2`, powers) for the concrete precision in use.
//! Single precision is the default throughout; `f64` is available wherever
//! reference values are needed.

use std::fmt::{ Debug, Display };
use num_traits::{ Float, FloatConst };

/// A real floating-point scalar usable by all evaluators.
pub trait Real
where Self: Float + FloatConst + Send + Sync + Debug + Display + 'static
{
    /// Construct from a literal constant.
    ///
    /// Values not representable in `Self` are rounded (or overflow to ±∞).
    fn lit(x: f64) -> Self;

    /// Construct from a (possibly negative) integer.
    fn of_int(n: i32) -> Self;
}

impl Real for f32 {
    #[inline]
    fn lit(x: f64) -> Self { x as f32 }

    #[inline]
    fn of_int(n: i32) -> Self { n as f32 }
}

impl Real for f64 {
    #[inline]
    fn lit(x: f64) -> Self { x }

    #[inline]
    fn of_int(n: i32) -> Self { n as f64 }
}
