use crate::traits::Scalar;
use serde::{Deserialize, Serialize};

/// The ordered (x, y) points produced by a fixed-step integrator, from the
/// initial condition through the first abscissa at or past x_end.
///
/// The two sequences always have equal length. x-values form an arithmetic
/// progression from x0 with the integrator's step size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trajectory<T: Scalar> {
    pub x_values: Vec<T>,
    pub y_values: Vec<T>,
}

impl<T: Scalar> Trajectory<T> {
    pub(crate) fn with_capacity(points: usize) -> Self {
        Self {
            x_values: Vec::with_capacity(points),
            y_values: Vec::with_capacity(points),
        }
    }

    pub(crate) fn push(&mut self, x: T, y: T) {
        self.x_values.push(x);
        self.y_values.push(y);
    }

    /// Number of points, including the initial condition.
    pub fn len(&self) -> usize {
        self.x_values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x_values.is_empty()
    }

    /// The final (x, y) point.
    pub fn last(&self) -> Option<(T, T)> {
        Some((*self.x_values.last()?, *self.y_values.last()?))
    }

    /// Iterates over (x, y) pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (T, T)> + '_ {
        self.x_values
            .iter()
            .copied()
            .zip(self.y_values.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::Trajectory;

    #[test]
    fn push_keeps_sequences_in_lockstep() {
        let mut trajectory = Trajectory::with_capacity(3);
        assert!(trajectory.is_empty());
        trajectory.push(0.0, 0.5);
        trajectory.push(0.1, 0.65);
        assert_eq!(trajectory.len(), 2);
        assert_eq!(trajectory.last(), Some((0.1, 0.65)));
        let pairs: Vec<(f64, f64)> = trajectory.iter().collect();
        assert_eq!(pairs, vec![(0.0, 0.5), (0.1, 0.65)]);
    }

    #[test]
    fn round_trips_through_serde() {
        let mut trajectory = Trajectory::with_capacity(2);
        trajectory.push(0.0, 1.0);
        trajectory.push(0.5, 1.25);
        let json = serde_json::to_string(&trajectory).expect("serializes");
        let back: Trajectory<f64> = serde_json::from_str(&json).expect("deserializes");
        assert_eq!(back, trajectory);
    }
}
