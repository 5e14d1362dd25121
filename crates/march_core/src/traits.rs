use num_traits::{Float, FromPrimitive};
use std::fmt::Debug;

/// A trait for types that can be used as scalars in our numerical routines.
/// Must support basic arithmetic, debug printing, and conversion from f64.
pub trait Scalar: Float + FromPrimitive + Debug + 'static {}

impl<T: Float + FromPrimitive + Debug + 'static> Scalar for T {}

/// A scalar ordinary differential equation dy/dx = f(x, y).
///
/// Blanket-implemented for closures, so a plain `|x, y| ...` can be handed
/// to any integrator.
pub trait Ode<T: Scalar> {
    /// Evaluates the right-hand side at (x, y).
    fn eval(&self, x: T, y: T) -> T;
}

impl<T: Scalar, F: Fn(T, T) -> T> Ode<T> for F {
    fn eval(&self, x: T, y: T) -> T {
        self(x, y)
    }
}

/// A trait for schemes that can advance a scalar IVP by one fixed step.
pub trait Stepper<T: Scalar> {
    /// Computes y(x + h) from y(x) with a single step of size h.
    fn step(&self, f: &impl Ode<T>, x: T, y: T, h: T) -> T;
}
