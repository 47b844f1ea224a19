use serde::{Deserialize, Serialize};

use crate::constants::{Degree, Meter};
use crate::resoscan_errors::ResoscanError;

/// Scanning instrument description, as configured in the part definition.
///
/// `fov` is the base track width in degrees at `altitude_best`; SCANSat uses
/// "field of view" for the ground-swath width scanned per pass, not a cone
/// angle. The altitudes bound where the instrument operates at all and are
/// carried for driver-level filtering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scanner {
    pub fov: Degree,
    pub altitude_min: Meter,
    pub altitude_best: Meter,
    pub altitude_max: Meter,
}

impl Scanner {
    /// Construct a validated scanner.
    ///
    /// Arguments
    /// -----------------
    /// * `fov`: base track width in degrees, strictly positive
    /// * `altitude_min`, `altitude_best`, `altitude_max`: operating
    ///   altitudes in meters, `0 <= min <= best <= max` with `best`
    ///   strictly positive (the coverage constant k scales with it)
    ///
    /// Return
    /// ----------
    /// * The scanner, or the [`ResoscanError`] describing which input was
    ///   malformed.
    pub fn new(
        fov: Degree,
        altitude_min: Meter,
        altitude_best: Meter,
        altitude_max: Meter,
    ) -> Result<Self, ResoscanError> {
        if !(fov > 0.0) {
            return Err(ResoscanError::NonPositiveFov(fov));
        }
        if !(0.0 <= altitude_min
            && altitude_min <= altitude_best
            && altitude_best <= altitude_max
            && altitude_best > 0.0)
        {
            return Err(ResoscanError::AltitudeOrdering {
                min: altitude_min,
                best: altitude_best,
                max: altitude_max,
            });
        }

        Ok(Scanner {
            fov,
            altitude_min,
            altitude_best,
            altitude_max,
        })
    }
}
