//! # Celestial body catalog
//!
//! This module defines [`CelestialBody`], the immutable physical description
//! of a rotating body, and a static catalog of the stock solar system keyed
//! by body name.
//!
//! ## Overview
//!
//! A body is constructed once through a validated factory which derives the
//! synchronous-orbit radius `geo_radius = cbrt(μT²/4π²)` from the standard
//! gravitational parameter μ and the sidereal rotation period T. Catalog
//! entries are shared as [`Arc`] values so a body can be handed to many
//! solvers without copying.
//!
//! The sphere-of-influence radius is stored as [`f64::INFINITY`] for the
//! primary star.

use std::collections::HashMap;
use std::f64::consts::PI;
use std::sync::{Arc, LazyLock};

use serde::Serialize;

use crate::constants::{GravParameter, Meter, Seconds};
use crate::resoscan_errors::ResoscanError;

/// Physical parameters of a rotating body, with the derived
/// synchronous-orbit radius.
///
/// Units:
/// * `radius`: meters
/// * `rotation_period`: seconds (sidereal)
/// * `standard_gravitational_parameter`: m³/s²
/// * `safe_altitude`: meters above `radius`
/// * `sphere_of_influence_radius`: meters (may be infinite)
/// * `geo_radius`: meters, derived at construction
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CelestialBody {
    pub radius: Meter,
    pub rotation_period: Seconds,
    pub standard_gravitational_parameter: GravParameter,
    pub safe_altitude: Meter,
    pub sphere_of_influence_radius: Meter,
    pub geo_radius: Meter,
}

impl CelestialBody {
    /// Construct a validated body and compute its derived fields.
    ///
    /// Arguments
    /// -----------------
    /// * `radius`: equatorial radius in meters
    /// * `rotation_period`: sidereal rotation period in seconds
    /// * `standard_gravitational_parameter`: μ = GM in m³/s²
    /// * `safe_altitude`: lowest flyable altitude in meters
    /// * `sphere_of_influence_radius`: SOI radius in meters, `f64::INFINITY`
    ///   for a primary star
    ///
    /// Return
    /// ----------
    /// * The body with `geo_radius` computed, or a
    ///   [`ResoscanError::NonPositiveBodyParameter`] naming the offending
    ///   field.
    pub fn new(
        radius: Meter,
        rotation_period: Seconds,
        standard_gravitational_parameter: GravParameter,
        safe_altitude: Meter,
        sphere_of_influence_radius: Meter,
    ) -> Result<Self, ResoscanError> {
        for (name, value) in [
            ("radius", radius),
            ("rotation_period", rotation_period),
            (
                "standard_gravitational_parameter",
                standard_gravitational_parameter,
            ),
            ("safe_altitude", safe_altitude),
            ("sphere_of_influence_radius", sphere_of_influence_radius),
        ] {
            if !(value > 0.0) {
                return Err(ResoscanError::NonPositiveBodyParameter(name, value));
            }
        }

        Ok(Self::from_catalog(
            radius,
            rotation_period,
            standard_gravitational_parameter,
            safe_altitude,
            sphere_of_influence_radius,
        ))
    }

    /// Infallible constructor for the static catalog literals below.
    fn from_catalog(
        radius: Meter,
        rotation_period: Seconds,
        mu: GravParameter,
        safe_altitude: Meter,
        soi_radius: Meter,
    ) -> Self {
        let geo_radius = (mu * rotation_period.powi(2) / (4.0 * PI * PI)).cbrt();
        CelestialBody {
            radius,
            rotation_period,
            standard_gravitational_parameter: mu,
            safe_altitude,
            sphere_of_influence_radius: soi_radius,
            geo_radius,
        }
    }
}

/// Static catalog of the stock solar system, keyed by lowercase name.
pub static BODIES: LazyLock<HashMap<&'static str, Arc<CelestialBody>>> = LazyLock::new(|| {
    let mut bodies: HashMap<&'static str, Arc<CelestialBody>> = HashMap::new();
    let mut insert = |name, radius, period, mu, safe, soi| {
        bodies.insert(
            name,
            Arc::new(CelestialBody::from_catalog(radius, period, mu, safe, soi)),
        );
    };

    insert(
        "kerbol",
        261_600_000.0,
        432_000.0,
        1.1723328e18,
        600_000.0,
        f64::INFINITY,
    );

    insert("moho", 250_000.0, 1_210_000.0, 1.6860938e11, 10_000.0, 9_646_663.0);

    insert("eve", 700_000.0, 80_500.0, 8.1717302e12, 90_000.0, 85_109_365.0);
    insert("gilly", 13_000.0, 28_255.0, 8.289_449_8e6, 5_000.0, 126_123.27);

    insert("kerbin", 600_000.0, 21_549.425, 3.5316e12, 70_000.0, 84_159_286.0);
    insert("mun", 200_000.0, 138_984.38, 6.5138398e10, 10_000.0, 2_429_559.1);
    insert("minmus", 60_000.0, 40_400.0, 1.7658e9, 10_000.0, 2_247_428.4);

    insert("duna", 320_000.0, 65_517.859, 3.0136321e11, 50_000.0, 47_921_949.0);
    insert("ike", 130_000.0, 65_517.862, 1.8568369e10, 10_000.0, 1_049_598.9);

    insert("dres", 138_000.0, 34_800.0, 2.1484489e10, 10_000.0, 32_832_840.0);

    insert("jool", 6_000_000.0, 36_000.0, 2.82528e14, 200_000.0, 2.4559852e9);
    insert("laythe", 500_000.0, 52_980.879, 1.962e12, 50_000.0, 3_723_645.8);
    insert("vall", 300_000.0, 105_962.09, 2.074815e11, 25_000.0, 2_406_401.4);
    insert("tylo", 600_000.0, 211_926.36, 2.82528e12, 30_000.0, 10_856_518.0);
    insert("bop", 65_000.0, 544_507.43, 2.4868349e9, 25_000.0, 1_221_060.9);
    insert("pol", 44_000.0, 901_902.62, 7.2170208e8, 5_000.0, 1_042_138.9);

    insert("eeloo", 210_000.0, 19_460.0, 7.4410815e10, 5_000.0, 1.1908294e8);

    bodies
});

/// Look up a catalog body by name, case-insensitively.
pub fn get_body(name: &str) -> Option<Arc<CelestialBody>> {
    BODIES.get(name.to_lowercase().as_str()).cloned()
}
