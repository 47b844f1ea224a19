use thiserror::Error;

/// Errors raised while validating solver inputs.
///
/// Every variant belongs to the fail-fast class: construction of a body,
/// scanner, resonance candidate, or solver aborts before any iteration
/// begins. Recoverable outcomes of the numerical routines ("no root in the
/// requested direction", "no feasible bound for this side") are represented
/// as `Option` results, never as errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResoscanError {
    #[error("resonance {0}/{1} is not a reduced fraction")]
    ResonanceNotCoprime(u32, u32),

    #[error("resonance terms must both be at least 1, got {0}/{1}")]
    ResonanceTermZero(u32, u32),

    #[error("scanner field of view must be positive, got {0}")]
    NonPositiveFov(f64),

    #[error("scanner altitudes must satisfy 0 <= min <= best <= max, got {min}/{best}/{max}")]
    AltitudeOrdering { min: f64, best: f64, max: f64 },

    #[error("body parameter `{0}` must be positive, got {1}")]
    NonPositiveBodyParameter(&'static str, f64),

    #[error("solver tunable `{0}` must be positive, got {1}")]
    NonPositiveTunable(&'static str, f64),
}
