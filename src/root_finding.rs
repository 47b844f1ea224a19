//! Scalar root-finding routines on the unit interval.
//!
//! Both solvers are generic over closures so the boundary tracer can hand
//! them one-dimensional slices of the coverage inequality. "No root in the
//! requested direction" is an expected outcome, reported as `None`.

/// Newton iteration cap; exhaustion is reported like a domain exit.
const MAX_ITERATIONS: usize = 100;

/// Search direction imposed on the directional solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    Increasing,
    Decreasing,
}

impl Direction {
    pub(crate) fn signum(self) -> f64 {
        match self {
            Direction::Increasing => 1.0,
            Direction::Decreasing => -1.0,
        }
    }
}

/// Direction-constrained bounded Newton search on [0, 1].
///
/// Standard Newton updates with two constraints: the step magnitude is
/// clamped to `max_step`, and the step sign is forced to `direction` until
/// the function value changes sign relative to its value at `start`
/// (detected via f₀·f ≤ 0), after which the root has been passed and the
/// forced sign reverses. Converges when successive iterates differ by less
/// than `tol`.
///
/// An iterate leaving [0, 1] returns `None` immediately: no root exists in
/// the requested direction. This is a local solver; it assumes f′ does not
/// vanish near the root and that the caller expects a nearby root in the
/// stated direction.
pub(crate) fn newton_directional<F, D>(
    f: F,
    df: D,
    start: f64,
    direction: Direction,
    max_step: f64,
    tol: f64,
) -> Option<f64>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    let v0 = f(start);
    let forced = direction.signum();
    let mut x = start;

    for _ in 0..MAX_ITERATIONS {
        let v = f(x);
        let mut step = -v / df(x);
        if step.abs() > max_step {
            step = step.signum() * max_step;
        }
        let sign = if v0 * v <= 0.0 { -forced } else { forced };
        step = sign * step.abs();

        let next = x + step;
        if !(0.0..=1.0).contains(&next) {
            return None;
        }
        if (next - x).abs() < tol {
            return Some(next);
        }
        x = next;
    }

    None
}

/// Result of a bracketed bisection.
///
/// `bracketed` records whether a sign change was actually detected; when it
/// is false the `root` is a best-effort estimate only and callers on
/// correctness-sensitive paths must not rely on it.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Bisection {
    pub root: f64,
    pub bracketed: bool,
}

/// Binary search for a zero of `f` between `a` and `b`.
///
/// Endpoint order is irrelevant; the bracket is oriented from the endpoint
/// signs. When `f(a)` and `f(b)` share a sign there is no guaranteed root:
/// a non-fatal diagnostic is emitted and the search proceeds anyway,
/// returning whichever endpoint of the final interval has the smaller |f|.
pub(crate) fn bisect<F>(f: F, a: f64, b: f64, tol: f64) -> Bisection
where
    F: Fn(f64) -> f64,
{
    let va = f(a);
    let vb = f(b);
    let bracketed = va.signum() * vb.signum() <= 0.0;
    if !bracketed {
        tracing::warn!(
            "bisection interval [{a}, {b}] has no sign change (f: {va}, {vb}); \
             returning a best-effort estimate"
        );
    }

    let (mut neg, mut pos) = if va <= 0.0 { (a, b) } else { (b, a) };
    while (neg - pos).abs() > tol {
        let mid = 0.5 * (neg + pos);
        if f(mid) <= 0.0 {
            neg = mid;
        } else {
            pos = mid;
        }
    }

    let root = if f(neg).abs() <= f(pos).abs() { neg } else { pos };
    Bisection { root, bracketed }
}

#[cfg(test)]
mod root_finding_test {
    use approx::assert_relative_eq;

    use super::*;
    use crate::constants::TOLERANCE;

    fn bisect_default<F>(f: F, a: f64, b: f64) -> Bisection
    where
        F: Fn(f64) -> f64,
    {
        bisect(f, a, b, TOLERANCE)
    }

    #[test]
    fn test_newton_linear_root() {
        let root = newton_directional(
            |x| x - 0.45,
            |_| 1.0,
            0.0,
            Direction::Increasing,
            0.2,
            TOLERANCE,
        )
        .unwrap();
        assert_relative_eq!(root, 0.45, epsilon = 1e-4);
    }

    #[test]
    fn test_newton_refuses_wrong_direction() {
        // Root lies above the start but the search is forced downward.
        let result = newton_directional(
            |x| x - 0.5,
            |_| 1.0,
            0.2,
            Direction::Decreasing,
            0.1,
            TOLERANCE,
        );
        assert_eq!(result, None);
    }

    #[test]
    fn test_newton_domain_exit_when_no_root() {
        let result = newton_directional(
            |x| x + 1.0,
            |_| 1.0,
            0.5,
            Direction::Increasing,
            0.25,
            TOLERANCE,
        );
        assert_eq!(result, None);
    }

    #[test]
    fn test_newton_reverses_after_crossing() {
        // Concave parabola with its root at 0.5; the unclamped first step
        // from 0.2 overshoots to 0.95, after which the sign change flips the
        // forced direction and the iteration walks back to the root.
        let f = |x: f64| 0.16 - (x - 0.1).powi(2);
        let df = |x: f64| -2.0 * (x - 0.1);
        let root = newton_directional(f, df, 0.2, Direction::Increasing, 1.0, TOLERANCE).unwrap();
        assert_relative_eq!(root, 0.5, epsilon = 1e-4);
    }

    #[test]
    fn test_newton_flat_derivative_converges() {
        // Triple root: Newton contracts by 1/3 per step without crossing.
        let root = newton_directional(
            |x: f64| (x - 0.5).powi(3),
            |x: f64| 3.0 * (x - 0.5).powi(2),
            0.3,
            Direction::Increasing,
            0.5,
            TOLERANCE,
        )
        .unwrap();
        assert_relative_eq!(root, 0.5, epsilon = 1e-3);
    }

    #[test]
    fn test_bisect_cubic() {
        let result = bisect_default(|x| x.powi(3) - 0.125, 0.0, 1.0);
        assert!(result.bracketed);
        assert_relative_eq!(result.root, 0.5, epsilon = 1e-4);
    }

    #[test]
    fn test_bisect_order_independent() {
        let forward = bisect_default(|x| x - 0.3, 0.0, 1.0);
        let reversed = bisect_default(|x| x - 0.3, 1.0, 0.0);
        assert!(forward.bracketed);
        assert!(reversed.bracketed);
        assert_relative_eq!(forward.root, 0.3, epsilon = 1e-4);
        assert_relative_eq!(reversed.root, 0.3, epsilon = 1e-4);
    }

    #[test]
    fn test_bisect_unbracketed_is_advisory() {
        // No root in the interval: the solver must terminate, flag the
        // estimate, and stay inside the interval. The estimate itself is
        // advisory and carries no correctness guarantee.
        let result = bisect_default(|x| x * x + 1.0, 0.0, 1.0);
        assert!(!result.bracketed);
        assert!((0.0..=1.0).contains(&result.root));
    }

    #[test]
    fn test_bisect_stays_in_bracket() {
        let result = bisect_default(|x| (x - 0.7).sin(), 0.25, 0.9);
        assert!(result.bracketed);
        assert!((0.25..=0.9).contains(&result.root));
        assert_relative_eq!(result.root, 0.7, epsilon = 1e-4);
    }
}
