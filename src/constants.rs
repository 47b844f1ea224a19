//! # Constants and type definitions for Resoscan
//!
//! This module centralizes the **tunable defaults**, **reference values**, and
//! **common type definitions** used throughout the `resoscan` library.
//!
//! ## Overview
//!
//! - Default coverage-track cap and convergence tolerance
//! - Reference-body radius used by the field-of-view scaling heuristic
//! - Core type aliases used across the crate
//!
//! These definitions are used by all main modules, including the inequality
//! model, the root-finding routines, and the solver façade.

// -------------------------------------------------------------------------------------------------
// Tunable defaults
// -------------------------------------------------------------------------------------------------

/// Maximum effective field of view in degrees.
///
/// SCANSat caps the track width at 20° after scaling it for body size; a
/// scanner whose scaled fov exceeds this value operates in the fixed-track
/// regime (see [`crate::solver::Solver`]).
pub const FOV_MAX: Degree = 20.0;

/// Absolute convergence tolerance shared by the root-finding routines:
/// bracket width for bisection, successive-iterate distance for the
/// directional Newton solver, and the boundary tracer's x-bracket width.
pub const TOLERANCE: f64 = 1e-5;

/// Equatorial radius of the reference body (Kerbin) in meters.
///
/// Scanner fields of view only scale up for bodies smaller than this.
pub const REFERENCE_BODY_RADIUS: Meter = 600_000.0;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Distance in meters
pub type Meter = f64;
/// Duration in seconds
pub type Seconds = f64;
/// Standard gravitational parameter in m³/s²
pub type GravParameter = f64;
/// Orbital eccentricity, dimensionless, in [0, 1)
pub type Eccentricity = f64;
