pub mod derivative;
pub mod solvers;
pub mod trajectory;
/// The `march_core` crate provides the numerical routines behind the march CLI.
/// Every routine is a standalone pure function or stateless scheme over a
/// generic floating-point scalar.
///
/// Key components:
/// - **Traits**: `Scalar` (numeric type abstraction), `Ode` (scalar right-hand
///   sides), `Stepper` (fixed-step schemes).
/// - **Derivative**: Newton forward-difference estimators for f'(x) and f''(x),
///   over a callable or a uniformly sampled sequence.
/// - **Solvers**: Fixed-step integrators (Euler, RK3, RK4) producing the full
///   trajectory of a scalar initial-value problem.
pub mod traits;
