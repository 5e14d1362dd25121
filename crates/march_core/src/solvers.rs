use crate::trajectory::Trajectory;
use crate::traits::{Ode, Scalar, Stepper};
use anyhow::{bail, Result};

/// First-order explicit Euler scheme.
pub struct Euler;

impl<T: Scalar> Stepper<T> for Euler {
    fn step(&self, f: &impl Ode<T>, x: T, y: T, h: T) -> T {
        y + h * f.eval(x, y)
    }
}

/// Kutta's third-order rule.
pub struct Rk3;

impl<T: Scalar> Stepper<T> for Rk3 {
    fn step(&self, f: &impl Ode<T>, x: T, y: T, h: T) -> T {
        let half = T::from_f64(0.5).unwrap();
        let two = T::from_f64(2.0).unwrap();
        let four = T::from_f64(4.0).unwrap();
        let sixth = T::from_f64(1.0 / 6.0).unwrap();

        // k1 = h f(x, y)
        let k1 = h * f.eval(x, y);
        // k2 = h f(x + h/2, y + k1/2)
        let k2 = h * f.eval(x + h * half, y + k1 * half);
        // k3 = h f(x + h, y - k1 + 2 k2)
        let k3 = h * f.eval(x + h, y - k1 + two * k2);

        y + (k1 + four * k2 + k3) * sixth
    }
}

/// Classic Runge-Kutta 4th order scheme.
pub struct Rk4;

impl<T: Scalar> Stepper<T> for Rk4 {
    fn step(&self, f: &impl Ode<T>, x: T, y: T, h: T) -> T {
        let half = T::from_f64(0.5).unwrap();
        let two = T::from_f64(2.0).unwrap();
        let sixth = T::from_f64(1.0 / 6.0).unwrap();

        // k1 = h f(x, y)
        let k1 = h * f.eval(x, y);
        // k2 = h f(x + h/2, y + k1/2)
        let k2 = h * f.eval(x + h * half, y + k1 * half);
        // k3 = h f(x + h/2, y + k2/2)
        let k3 = h * f.eval(x + h * half, y + k2 * half);
        // k4 = h f(x + h, y + k3)
        let k4 = h * f.eval(x + h, y + k3);

        y + (k1 + two * k2 + two * k3 + k4) * sixth
    }
}

/// Integrates dy/dx = f(x, y) from (x0, y0) with fixed step h, collecting
/// every point until x reaches or passes x_end.
///
/// The loop bound is strictly `x < x_end`, so when the span is not an exact
/// multiple of h the final point overshoots x_end by less than one step; the
/// step is never clamped. Non-finite values returned by `f` are recorded in
/// the trajectory verbatim.
pub fn integrate<T: Scalar>(
    scheme: &impl Stepper<T>,
    f: &impl Ode<T>,
    x0: T,
    y0: T,
    h: T,
    x_end: T,
) -> Result<Trajectory<T>> {
    if h <= T::zero() || !h.is_finite() {
        bail!("Step size must be positive and finite, got {:?}.", h);
    }

    let steps = ((x_end - x0) / h).ceil().to_usize().unwrap_or(0);
    let mut trajectory = Trajectory::with_capacity(steps + 1);

    let mut x = x0;
    let mut y = y0;
    trajectory.push(x, y);

    while x < x_end {
        y = scheme.step(f, x, y, h);
        x = x + h;
        trajectory.push(x, y);
    }

    Ok(trajectory)
}

/// Euler's method over the full interval. See [`integrate`].
pub fn euler_method<T: Scalar>(
    f: &impl Ode<T>,
    x0: T,
    y0: T,
    h: T,
    x_end: T,
) -> Result<Trajectory<T>> {
    integrate(&Euler, f, x0, y0, h, x_end)
}

/// Kutta's third-order method over the full interval. See [`integrate`].
pub fn runge_kutta_3rd<T: Scalar>(
    f: &impl Ode<T>,
    x0: T,
    y0: T,
    h: T,
    x_end: T,
) -> Result<Trajectory<T>> {
    integrate(&Rk3, f, x0, y0, h, x_end)
}

/// Classic fourth-order Runge-Kutta over the full interval. See [`integrate`].
pub fn runge_kutta_4th<T: Scalar>(
    f: &impl Ode<T>,
    x0: T,
    y0: T,
    h: T,
    x_end: T,
) -> Result<Trajectory<T>> {
    integrate(&Rk4, f, x0, y0, h, x_end)
}
