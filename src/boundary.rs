//! Boundary tracer: extremal eccentricity for one side of the latitude
//! domain.
//!
//! Viewed as a function of x = cos(latitude) at fixed eccentricity y, the
//! coverage inequality is a curve; full coverage requires the curve to stay
//! non-negative over all of [0, 1]. The binding eccentricity for a side is
//! reached where the curve becomes tangent to zero, so the tracer hunts the
//! extremum of the zero-level set: it keeps a shrinking x-bracket around the
//! tangency point and alternates between re-rooting the inequality in x and
//! re-solving the boundary eccentricity in y, warm-starting each inner solve
//! from the previous iterate.

use crate::constants::Eccentricity;
use crate::inequality::CoverageModel;
use crate::root_finding::{bisect, newton_directional, Direction};

/// Step clamp handed to the inner directional solves; the boundary curve is
/// continuous, so successive warm-started solves stay well within this.
const MAX_STEP: f64 = 0.1;

/// Side of the latitude domain being traced.
///
/// Each variant carries its full semantics: where the trace starts in (x, y),
/// which way x is explored, and the sign that orients the x-slope test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    /// Pole-adjacent start: (x, y) = (1, 0), explored toward x = 0. Traces
    /// the minimum feasible eccentricity.
    Bottom,
    /// Equator-adjacent start: (x, y) = (0, 1), explored toward x = 1.
    /// Traces the maximum feasible eccentricity.
    Top,
}

impl Side {
    fn start_x(self) -> f64 {
        match self {
            Side::Bottom => 1.0,
            Side::Top => 0.0,
        }
    }

    fn start_y(self) -> f64 {
        match self {
            Side::Bottom => 0.0,
            Side::Top => 1.0,
        }
    }

    fn opposite_y(self) -> f64 {
        1.0 - self.start_y()
    }

    /// Direction that moves x from the starting corner into the domain.
    fn inward(self) -> Direction {
        match self {
            Side::Bottom => Direction::Decreasing,
            Side::Top => Direction::Increasing,
        }
    }

    /// x-slope scaled so that a positive value means the tangency point lies
    /// further inward from the current point.
    fn scaled(self, d_dx: f64) -> f64 {
        match self {
            Side::Bottom => d_dx,
            Side::Top => -d_dx,
        }
    }

    /// Direction of the inner eccentricity solve, from the sign of the
    /// inequality value at the point about to be refined: an infeasible
    /// point pushes y toward feasibility for this side, a feasible one pulls
    /// the boundary back.
    fn refine_direction(self, value: f64) -> Direction {
        match (self, value < 0.0) {
            (Side::Bottom, true) | (Side::Top, false) => Direction::Increasing,
            (Side::Bottom, false) | (Side::Top, true) => Direction::Decreasing,
        }
    }
}

/// Find the extremal eccentricity at which coverage is marginal somewhere in
/// the domain, for one side.
///
/// Returns `None` when no bound exists for this side — either no
/// eccentricity makes coverage marginal at the starting latitude, or an
/// inner solve walks out of the unit domain, signalling that the boundary
/// curve has left it.
///
/// The corner probe assumes the inequality is monotone in x near the
/// starting corner; this is an approximation inherited from the model, not
/// a proven property for every (p, q, scanner, body) combination.
pub(crate) fn trace(model: &CoverageModel, side: Side, tol: f64) -> Option<Eccentricity> {
    let mut x = side.start_x();
    let mut y = side.start_y();

    let corner = model.value(x, y);
    if corner > 0.0 {
        // Coverage holds at the corner: search inward for where it stops.
        match newton_directional(
            |t| model.value(t, y),
            |t| model.d_dx(t, y),
            x,
            side.inward(),
            MAX_STEP,
            tol,
        ) {
            // No crossing anywhere: the corner eccentricity bounds the side.
            None => return Some(y),
            Some(root) => {
                // The equator-side probe runs along y = 1, where the
                // inequality has a degenerate zero at the (1, 1) corner; a
                // root there is the corner artifact, not an interior
                // crossing.
                if side == Side::Top && root >= 1.0 - tol {
                    return Some(y);
                }
                x = root;
            }
        }
    } else {
        let init = bisect(|u| model.value(x, u), y, side.opposite_y(), tol);
        if !init.bracketed {
            // No eccentricity makes coverage marginal at this latitude.
            return None;
        }
        y = init.root;
        if side == Side::Bottom && y >= 1.0 - tol {
            // The y-root collapsed onto the degenerate (1, 1) corner.
            return None;
        }
    }

    // Tangency at the current point: the corner latitude is the binding one.
    if side.scaled(model.d_dx(x, y)) <= 0.0 {
        return Some(y);
    }

    let (mut x0, mut x1) = match side {
        Side::Bottom => (0.0, x),
        Side::Top => (x, 1.0),
    };

    while (x1 - x0).abs() > tol {
        // The bracket endpoints track the two x-roots of the inequality at
        // the current eccentricity; refresh whichever one is stale.
        let inward_of_x = side.scaled(model.d_dx(x, y)) > 0.0;
        match (side, inward_of_x) {
            (Side::Bottom, true) | (Side::Top, false) => {
                x1 = x;
                x0 = bisect(|t| model.value(t, y), x0, x, tol).root;
            }
            (Side::Bottom, false) | (Side::Top, true) => {
                x0 = x;
                x1 = bisect(|t| model.value(t, y), x, x1, tol).root;
            }
        }
        x = 0.5 * (x0 + x1);

        let before = model.value(x, y);
        y = newton_directional(
            |u| model.value(x, u),
            |u| model.d_dy(x, u),
            y,
            side.refine_direction(before),
            MAX_STEP,
            tol,
        )?;
    }

    Some(y)
}

#[cfg(test)]
mod boundary_test {
    use approx::assert_relative_eq;

    use super::*;
    use crate::bodies::get_body;
    use crate::constants::TOLERANCE;

    /// Kerbin-bound model for a p/q resonance and a narrow-track scanner
    /// (fov 20°, best altitude 100 km, so k = 900 000).
    fn kerbin_model(p: u32, q: u32, k: f64) -> CoverageModel {
        let kerbin = get_body("kerbin").unwrap();
        let sma = (f64::from(p) / f64::from(q)).powf(2.0 / 3.0) * kerbin.geo_radius;
        CoverageModel::new(p, q, sma, kerbin.radius, k, 100_000.0, false)
    }

    #[test]
    fn test_bottom_feasible_from_circular() {
        // q·fov = 180 at fov 20: the circular orbit covers every latitude,
        // so the minimum eccentricity is the corner value itself.
        let model = kerbin_model(1, 9, 900_000.0);
        assert_eq!(trace(&model, Side::Bottom, TOLERANCE), Some(0.0));
    }

    #[test]
    fn test_top_bound_is_surface_graze() {
        // At the pole the M term vanishes, so the equator-side bound is set
        // by the field-of-view term alone: (1 − y²)·a = R.
        let kerbin = get_body("kerbin").unwrap();
        let sma = (1.0f64 / 9.0).powf(2.0 / 3.0) * kerbin.geo_radius;
        let model = kerbin_model(1, 9, 900_000.0);

        let y = trace(&model, Side::Top, TOLERANCE).unwrap();
        let expected = (1.0 - kerbin.radius / sma).sqrt();
        assert_relative_eq!(y, expected, epsilon = 1e-3);
    }

    #[test]
    fn test_unreachable_resonance_is_infeasible_on_both_sides() {
        // q = 50 puts the orbit below the surface; required coverage exceeds
        // what the scanner can sweep at every latitude.
        let model = kerbin_model(1, 50, 18_000_000.0);
        assert_eq!(trace(&model, Side::Bottom, TOLERANCE), None);
        assert_eq!(trace(&model, Side::Top, TOLERANCE), None);
    }

    /// Minmus model in the fixed-track regime: a 10° scanner amplifies by
    /// sqrt(10) past the 20° cap, so M is checked against the uncapped
    /// track width (k/fov_alt = 9).
    fn minmus_fixed_track_model(p: u32, q: u32) -> CoverageModel {
        let minmus = get_body("minmus").unwrap();
        let sma = (f64::from(p) / f64::from(q)).powf(2.0 / 3.0) * minmus.geo_radius;
        let fov_alt = 60_000.0 * 20.0 / (10.0 * 10.0f64.sqrt());
        CoverageModel::new(
            p,
            q,
            sma,
            minmus.radius,
            180.0 * fov_alt / 20.0,
            fov_alt,
            true,
        )
    }

    #[test]
    fn test_fixed_track_feasible_everywhere_reports_suprema() {
        // q·fov reaches 180 with margin to spare from the surface-rotation
        // term, so every latitude is covered at every eccentricity and both
        // corner probes come back empty-handed.
        let model = minmus_fixed_track_model(1, 9);
        assert_eq!(trace(&model, Side::Bottom, TOLERANCE), Some(0.0));
        assert_eq!(trace(&model, Side::Top, TOLERANCE), Some(1.0));
    }

    #[test]
    fn test_fixed_track_synchronous_is_infeasible() {
        // The capped track cannot cover mid-latitudes at any eccentricity
        // for a synchronous orbit.
        let model = minmus_fixed_track_model(1, 1);
        assert_eq!(trace(&model, Side::Bottom, TOLERANCE), None);
        assert_eq!(trace(&model, Side::Top, TOLERANCE), None);
    }

    #[test]
    fn test_trace_is_deterministic() {
        let model = kerbin_model(2, 7, 900_000.0);
        let first = trace(&model, Side::Top, TOLERANCE);
        let second = trace(&model, Side::Top, TOLERANCE);
        assert_eq!(first, second);
    }
}
