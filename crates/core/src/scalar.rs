use std::ops::{Add, Div, Mul, Neg, Sub};

use num_dual::{Dual64, DualNum};

/// Numeric type an energy function can be evaluated in.
///
/// Energy models are written once against this trait. Evaluating them in
/// `f64` gives the energy, in `f32` the single-precision variant, and in
/// [`Dual64`] the energy together with one exact directional derivative.
pub trait Scalar:
    Copy
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// Lifts a constant into this type.
    fn from_f64(value: f64) -> Self;

    /// Returns the real part as `f64`.
    fn re(self) -> f64;

    fn cos(self) -> Self;
}

impl Scalar for f64 {
    fn from_f64(value: f64) -> Self {
        value
    }

    fn re(self) -> f64 {
        self
    }

    fn cos(self) -> Self {
        f64::cos(self)
    }
}

impl Scalar for f32 {
    #[allow(clippy::cast_possible_truncation)]
    fn from_f64(value: f64) -> Self {
        value as f32
    }

    fn re(self) -> f64 {
        f64::from(self)
    }

    fn cos(self) -> Self {
        f32::cos(self)
    }
}

impl Scalar for Dual64 {
    fn from_f64(value: f64) -> Self {
        Dual64::from(value)
    }

    fn re(self) -> f64 {
        self.re
    }

    fn cos(self) -> Self {
        <Dual64 as DualNum<f64>>::cos(&self)
    }
}
