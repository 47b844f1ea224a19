//! # Resonant-orbit coverage solver
//!
//! This module defines [`Solver`], the façade that binds one
//! ([`Scanner`], [`CelestialBody`]) pair and evaluates resonance candidates
//! against it.
//!
//! ## Overview
//!
//! Construction performs the field-of-view scaling heuristic once:
//!
//! 1. The scanner fov is amplified by `sqrt(R_ref / R)` for bodies smaller
//!    than the reference body.
//! 2. If the amplified fov exceeds the configured cap, the best altitude is
//!    scaled down to where the fov equals the cap and the solver switches to
//!    the fixed-track inequality variant.
//!
//! The derived proportionality constant `k = 180·fov_alt/fov` together with
//! the body geometry fully parameterizes the coverage inequality, so a
//! single `Solver` can evaluate any number of candidates. The solver is
//! immutable after construction; evaluating distinct candidates from
//! different threads needs no locking.
//!
//! ## Typical usage
//!
//! ```rust
//! use resoscan::bodies::get_body;
//! use resoscan::resonance::ResonanceCandidate;
//! use resoscan::scanner::Scanner;
//! use resoscan::solver::Solver;
//!
//! let scanner = Scanner::new(20.0, 50_000.0, 100_000.0, 500_000.0).unwrap();
//! let kerbin = get_body("kerbin").unwrap();
//! let solver = Solver::new(scanner, kerbin).unwrap();
//!
//! let candidate = ResonanceCandidate::new(1, 9).unwrap();
//! if let Some(params) = solver.solve(&candidate) {
//!     println!(
//!         "{}/{}: e in [{}, {}]",
//!         params.p, params.q, params.eccentricity_min, params.eccentricity_max
//!     );
//! }
//! ```
//!
//! ## Outputs
//!
//! [`Solver::solve`] reports the pure coverage bounds; an `eccentricity_max`
//! of 1.0 is the supremum of the half-open feasible range.
//! [`Solver::solve_within_limits`] additionally applies the driver-level
//! altitude legality bounds carried by the body catalog (safe altitude,
//! sphere of influence).

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::bodies::CelestialBody;
use crate::boundary::{trace, Side};
use crate::constants::{Degree, Eccentricity, Meter, FOV_MAX, REFERENCE_BODY_RADIUS, TOLERANCE};
use crate::inequality::CoverageModel;
use crate::resonance::ResonanceCandidate;
use crate::resoscan_errors::ResoscanError;
use crate::scanner::Scanner;

/// Tunable constants of the solver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Coverage-track cap in degrees; the scaled fov saturates here.
    pub fov_max: Degree,
    /// Convergence tolerance shared by every root-finding routine.
    pub tolerance: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            fov_max: FOV_MAX,
            tolerance: TOLERANCE,
        }
    }
}

/// Feasible eccentricity range of one resonance candidate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SolutionParams {
    pub p: u32,
    pub q: u32,
    pub semi_major_axis: Meter,
    pub eccentricity_min: Eccentricity,
    pub eccentricity_max: Eccentricity,
}

/// One (scanner, body) binding; see the module documentation.
#[derive(Debug, Clone)]
pub struct Solver {
    scanner: Scanner,
    body: Arc<CelestialBody>,
    config: SolverConfig,
    fov: Degree,
    fov_alt: Meter,
    k: f64,
    track_fixed: bool,
}

impl Solver {
    /// Bind a scanner to a body with the default tunables.
    pub fn new(scanner: Scanner, body: Arc<CelestialBody>) -> Result<Self, ResoscanError> {
        Self::with_config(scanner, body, SolverConfig::default())
    }

    /// Bind a scanner to a body with explicit tunables.
    ///
    /// Arguments
    /// -----------------
    /// * `scanner`: validated instrument description
    /// * `body`: catalog body (or a validated custom one)
    /// * `config`: coverage-track cap and solver tolerance, both positive
    ///
    /// Return
    /// ----------
    /// * The immutable solver context, or the [`ResoscanError`] for the
    ///   offending tunable.
    pub fn with_config(
        scanner: Scanner,
        body: Arc<CelestialBody>,
        config: SolverConfig,
    ) -> Result<Self, ResoscanError> {
        if !(config.fov_max > 0.0) {
            return Err(ResoscanError::NonPositiveTunable("fov_max", config.fov_max));
        }
        if !(config.tolerance > 0.0) {
            return Err(ResoscanError::NonPositiveTunable(
                "tolerance",
                config.tolerance,
            ));
        }

        let mut fov = scanner.fov;
        let mut fov_alt = scanner.altitude_best;

        // fov only scales for bodies smaller than the reference body
        if body.radius < REFERENCE_BODY_RADIUS {
            fov *= (REFERENCE_BODY_RADIUS / body.radius).sqrt();
        }

        let track_fixed = fov > config.fov_max;
        if track_fixed {
            // lower the altitude to where the fov saturates at the cap
            fov_alt *= config.fov_max / fov;
            fov = config.fov_max;
        }

        let k = 180.0 * fov_alt / fov;

        Ok(Solver {
            scanner,
            body,
            config,
            fov,
            fov_alt,
            k,
            track_fixed,
        })
    }

    /// Semi-major axis of an orbit with period (p/q)·T, where T is the
    /// body's sidereal rotation period.
    pub fn semi_major_axis(&self, candidate: &ResonanceCandidate) -> Meter {
        candidate.period_ratio().powf(2.0 / 3.0) * self.body.geo_radius
    }

    /// Effective field of view after body scaling and capping, degrees.
    pub fn fov(&self) -> Degree {
        self.fov
    }

    /// Altitude at which the effective fov applies, meters.
    pub fn fov_altitude(&self) -> Meter {
        self.fov_alt
    }

    /// Proportionality constant 180·fov_alt/fov of the coverage term.
    pub fn k(&self) -> f64 {
        self.k
    }

    /// True when the scaled fov saturated at the cap and the fixed-track
    /// inequality variant is in force.
    pub fn track_fixed(&self) -> bool {
        self.track_fixed
    }

    pub fn scanner(&self) -> &Scanner {
        &self.scanner
    }

    pub fn body(&self) -> &Arc<CelestialBody> {
        &self.body
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    fn model(&self, candidate: &ResonanceCandidate) -> CoverageModel {
        CoverageModel::new(
            candidate.p(),
            candidate.q(),
            self.semi_major_axis(candidate),
            self.body.radius,
            self.k,
            self.fov_alt,
            self.track_fixed,
        )
    }

    /// Eccentricity range with full-latitude coverage for one candidate.
    ///
    /// Traces both sides of the latitude domain and assembles the result.
    /// `None` means the candidate is infeasible: no eccentricity gives full
    /// coverage on at least one side, or the traced bounds cross.
    pub fn solve(&self, candidate: &ResonanceCandidate) -> Option<SolutionParams> {
        let model = self.model(candidate);
        let tol = self.config.tolerance;

        let eccentricity_min = trace(&model, Side::Bottom, tol)?;
        let eccentricity_max = trace(&model, Side::Top, tol)?;
        if eccentricity_min > eccentricity_max {
            return None;
        }

        Some(SolutionParams {
            p: candidate.p(),
            q: candidate.q(),
            semi_major_axis: self.semi_major_axis(candidate),
            eccentricity_min,
            eccentricity_max,
        })
    }

    /// [`Solver::solve`] plus the altitude legality bounds from the body
    /// catalog: the orbit must clear the safe altitude at periapsis and stay
    /// inside the sphere of influence at apoapsis.
    pub fn solve_within_limits(&self, candidate: &ResonanceCandidate) -> Option<SolutionParams> {
        let sma = self.semi_major_axis(candidate);
        if sma > self.body.sphere_of_influence_radius {
            return None;
        }

        let params = self.solve(candidate)?;

        let periapsis_bound = 1.0 - (self.body.radius + self.body.safe_altitude) / sma;
        let apoapsis_bound = self.body.sphere_of_influence_radius / sma - 1.0;
        let eccentricity_max = params
            .eccentricity_max
            .min(periapsis_bound)
            .min(apoapsis_bound);
        if !(params.eccentricity_min <= eccentricity_max) {
            return None;
        }

        Some(SolutionParams {
            eccentricity_max,
            ..params
        })
    }
}
