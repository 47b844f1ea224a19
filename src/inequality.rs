//! Coverage inequality S·F ≥ M and its closed-form partial derivatives.
//!
//! The three components are kept in the rearranged polynomial forms so that
//! every quantity is evaluable anywhere on [0,1]×[0,1) without division:
//!
//! * S = sqrt(q²(1−xy)⁴ + p²(1−y²)³), the ratio of surface-relative angular
//!   speed to orbital angular speed,
//! * F = (1−y²)·a − (1−xy)·R, the altitude-scaled field-of-view term,
//! * M = k·x·(1−xy)³, the required coverage at cos-latitude x.
//!
//! When the effective field of view has been capped at the track maximum,
//! the altitude scaling in F is invalid and the fixed-track variant
//! S − M/fov_alt is evaluated instead; the switch is decided once at model
//! construction and applies to the value and both gradients.
//!
//! Derivatives divide by S, which vanishes only at the (x,y) = (1,1) domain
//! corner; callers never probe that corner jointly.

use crate::constants::Meter;

/// The inequality bound to one resonance candidate and one solver context.
///
/// A capability object handed to the root finders: they only ever see
/// scalar closures built from [`CoverageModel::value`] and its gradients.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CoverageModel {
    p: f64,
    q: f64,
    /// Semi-major axis of the candidate orbit, meters.
    sma: Meter,
    /// Body equatorial radius, meters.
    radius: Meter,
    /// 180·fov_alt/fov, the proportionality constant of the M term.
    k: f64,
    /// Altitude at which the effective fov applies, meters.
    fov_alt: Meter,
    /// Evaluate the fixed-track variant instead of S·F − M.
    track_fixed: bool,
}

impl CoverageModel {
    pub(crate) fn new(
        p: u32,
        q: u32,
        sma: Meter,
        radius: Meter,
        k: f64,
        fov_alt: Meter,
        track_fixed: bool,
    ) -> Self {
        CoverageModel {
            p: f64::from(p),
            q: f64::from(q),
            sma,
            radius,
            k,
            fov_alt,
            track_fixed,
        }
    }

    /// S component of the inequality (some rearrangement done).
    fn s(&self, x: f64, y: f64) -> f64 {
        (self.q.powi(2) * (1.0 - x * y).powi(4) + self.p.powi(2) * (1.0 - y * y).powi(3)).sqrt()
    }

    /// Partial derivative of S with respect to x.
    fn ds_dx(&self, x: f64, y: f64) -> f64 {
        let s = self.s(x, y);
        -2.0 * (self.q.powi(2) * y * (1.0 - x * y).powi(3)) / s
    }

    /// Partial derivative of S with respect to y.
    fn ds_dy(&self, x: f64, y: f64) -> f64 {
        let s = self.s(x, y);
        -(2.0 * self.q.powi(2) * x * (1.0 - x * y).powi(3)
            + 3.0 * self.p.powi(2) * y * (1.0 - y * y).powi(2))
            / s
    }

    /// F component of the inequality (rearranged to avoid dividing by 1−xy).
    fn f(&self, x: f64, y: f64) -> f64 {
        (1.0 - y * y) * self.sma - (1.0 - x * y) * self.radius
    }

    /// Partial derivative of F with respect to x.
    fn df_dx(&self, _x: f64, y: f64) -> f64 {
        self.radius * y
    }

    /// Partial derivative of F with respect to y.
    fn df_dy(&self, x: f64, y: f64) -> f64 {
        x * self.radius - 2.0 * y * self.sma
    }

    /// M component of the inequality (some rearrangement done).
    fn m(&self, x: f64, y: f64) -> f64 {
        self.k * x * (1.0 - x * y).powi(3)
    }

    /// Partial derivative of M with respect to x.
    fn dm_dx(&self, x: f64, y: f64) -> f64 {
        self.k * (1.0 - 4.0 * x * y) * (1.0 - x * y).powi(2)
    }

    /// Partial derivative of M with respect to y.
    fn dm_dy(&self, x: f64, y: f64) -> f64 {
        -3.0 * self.k * x.powi(2) * (1.0 - x * y).powi(2)
    }

    /// Difference between the two sides of the inequality; coverage holds
    /// where this is non-negative.
    pub(crate) fn value(&self, x: f64, y: f64) -> f64 {
        if self.track_fixed {
            // fov fixed at max: coverage checked against the uncapped track
            // width, no altitude scaling
            self.s(x, y) - self.m(x, y) / self.fov_alt
        } else {
            self.s(x, y) * self.f(x, y) - self.m(x, y)
        }
    }

    /// Gradient of the inequality in the x direction.
    pub(crate) fn d_dx(&self, x: f64, y: f64) -> f64 {
        if self.track_fixed {
            self.ds_dx(x, y) - self.dm_dx(x, y) / self.fov_alt
        } else {
            self.s(x, y) * self.df_dx(x, y) + self.f(x, y) * self.ds_dx(x, y) - self.dm_dx(x, y)
        }
    }

    /// Gradient of the inequality in the y direction.
    pub(crate) fn d_dy(&self, x: f64, y: f64) -> f64 {
        if self.track_fixed {
            self.ds_dy(x, y) - self.dm_dy(x, y) / self.fov_alt
        } else {
            self.s(x, y) * self.df_dy(x, y) + self.f(x, y) * self.ds_dy(x, y) - self.dm_dy(x, y)
        }
    }
}
