use crate::traits::Scalar;
use anyhow::{bail, Result};

/// Approximates f'(x) with Newton's forward difference: (f(x+h) - f(x)) / h.
///
/// The truncation error shrinks linearly in `h`. The step is not guarded:
/// h = 0 yields whatever IEEE division produces.
pub fn forward_diff_1st_order<T: Scalar>(f: impl Fn(T) -> T, x: T, h: T) -> T {
    (f(x + h) - f(x)) / h
}

/// Approximates f''(x) with Newton's forward difference:
/// (f(x+2h) - 2 f(x+h) + f(x)) / h².
pub fn forward_diff_2nd_order<T: Scalar>(f: impl Fn(T) -> T, x: T, h: T) -> T {
    let two = T::from_f64(2.0).unwrap();
    (f(x + two * h) - two * f(x + h) + f(x)) / (h * h)
}

/// Forward-difference estimate of the first derivative over uniformly
/// spaced samples with spacing `h`: (values[i+1] - values[i]) / h.
///
/// Fails when the one-point lookahead runs past the end of the samples.
pub fn sampled_diff_1st_order<T: Scalar>(values: &[T], i: usize, h: T) -> Result<T> {
    if i + 1 >= values.len() {
        bail!(
            "Sample index {} requires a lookahead to index {}, but only {} samples were given.",
            i,
            i + 1,
            values.len()
        );
    }
    Ok((values[i + 1] - values[i]) / h)
}

/// Forward-difference estimate of the second derivative over uniformly
/// spaced samples: (values[i+2] - 2 values[i+1] + values[i]) / h².
///
/// Fails when the two-point lookahead runs past the end of the samples.
pub fn sampled_diff_2nd_order<T: Scalar>(values: &[T], i: usize, h: T) -> Result<T> {
    if i + 2 >= values.len() {
        bail!(
            "Sample index {} requires a lookahead to index {}, but only {} samples were given.",
            i,
            i + 2,
            values.len()
        );
    }
    let two = T::from_f64(2.0).unwrap();
    Ok((values[i + 2] - two * values[i + 1] + values[i]) / (h * h))
}

#[cfg(test)]
mod tests {
    use super::{
        forward_diff_1st_order, forward_diff_2nd_order, sampled_diff_1st_order,
        sampled_diff_2nd_order,
    };

    fn assert_err_contains<T: std::fmt::Debug>(result: anyhow::Result<T>, needle: &str) {
        let err = result.expect_err("expected error");
        let message = format!("{err}");
        assert!(
            message.contains(needle),
            "expected error to contain \"{needle}\", got \"{message}\""
        );
    }

    #[test]
    fn first_order_approximates_cos_at_one() {
        let approx = forward_diff_1st_order(f64::sin, 1.0, 0.1);
        assert!((approx - 0.4973637525353891).abs() < 1e-12);
        // Coarse agreement with the true derivative cos(1) = 0.5403...
        assert!((approx - 1.0_f64.cos()).abs() < 0.05);
    }

    #[test]
    fn second_order_approximates_negative_sin_at_one() {
        let approx = forward_diff_2nd_order(f64::sin, 1.0, 0.1);
        assert!((approx - (-0.8904649347748039)).abs() < 1e-12);
        assert!((approx - (-(1.0_f64.sin()))).abs() < 0.06);
    }

    #[test]
    fn first_order_error_shrinks_with_h() {
        let truth = 1.0_f64.cos();
        let coarse = (forward_diff_1st_order(f64::sin, 1.0, 0.1) - truth).abs();
        let fine = (forward_diff_1st_order(f64::sin, 1.0, 0.01) - truth).abs();
        assert!(fine < coarse);
        // First-order scheme: roughly linear in h.
        assert!(fine > coarse / 20.0);
    }

    #[test]
    fn second_order_error_shrinks_with_h() {
        let truth = -(1.0_f64.sin());
        let coarse = (forward_diff_2nd_order(f64::sin, 1.0, 0.1) - truth).abs();
        let fine = (forward_diff_2nd_order(f64::sin, 1.0, 0.01) - truth).abs();
        assert!(fine < coarse);
    }

    #[test]
    fn sampled_forms_match_hand_computation() {
        let values: [f64; 7] = [1.2, 2.1, 3.2, 4.5, 5.8, 7.1, 8.2];
        let first = sampled_diff_1st_order(&values, 2, 1.0).expect("index in bounds");
        assert!((first - 1.3).abs() < 1e-12);
        let second = sampled_diff_2nd_order(&values, 2, 1.0).expect("index in bounds");
        assert!(second.abs() < 1e-12);
    }

    #[test]
    fn sampled_forms_reject_out_of_range_lookahead() {
        let values = [1.0, 2.0, 3.0];
        assert_err_contains(sampled_diff_1st_order(&values, 2, 1.0), "index 2");
        assert_err_contains(sampled_diff_2nd_order(&values, 1, 1.0), "index 1");
        assert_err_contains(sampled_diff_1st_order::<f64>(&[], 0, 1.0), "0 samples");
    }

    #[test]
    fn zero_step_propagates_ieee_arithmetic() {
        let approx = forward_diff_1st_order(f64::sin, 1.0, 0.0);
        assert!(!approx.is_finite());
    }
}
