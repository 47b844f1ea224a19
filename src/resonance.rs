//! # Resonance candidate enumeration
//!
//! A resonance candidate is a reduced fraction p/q describing an orbital
//! period as p/q times the body's sidereal rotation period. This module
//! provides the validated [`ResonanceCandidate`] pair and the enumeration of
//! coprime pairs consumed by the solver, one candidate at a time.

use std::fmt;

use itertools::Itertools;
use serde::Serialize;

use crate::resoscan_errors::ResoscanError;

/// Greatest common divisor by the Euclidean algorithm.
pub(crate) fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// A reduced fraction p/q, period in units of the body rotation period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ResonanceCandidate {
    p: u32,
    q: u32,
}

impl ResonanceCandidate {
    /// Construct a validated candidate: both terms at least 1 and coprime.
    pub fn new(p: u32, q: u32) -> Result<Self, ResoscanError> {
        if p == 0 || q == 0 {
            return Err(ResoscanError::ResonanceTermZero(p, q));
        }
        if gcd(p, q) != 1 {
            return Err(ResoscanError::ResonanceNotCoprime(p, q));
        }
        Ok(ResonanceCandidate { p, q })
    }

    pub fn p(&self) -> u32 {
        self.p
    }

    pub fn q(&self) -> u32 {
        self.q
    }

    /// Orbital period as a fraction of the rotation period.
    pub fn period_ratio(&self) -> f64 {
        f64::from(self.p) / f64::from(self.q)
    }
}

impl fmt::Display for ResonanceCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.p, self.q)
    }
}

/// Values in `start..=end` coprime with `n`.
pub fn coprimes_of(n: u32, start: u32, end: u32) -> impl Iterator<Item = u32> {
    (start.max(1)..=end).filter(move |&k| gcd(n, k) == 1)
}

/// Ordered stream of all reduced fractions p/q with `p <= p_max` and
/// `q <= q_max`, ascending in q then p.
pub fn candidates(p_max: u32, q_max: u32) -> impl Iterator<Item = ResonanceCandidate> {
    (1..=q_max)
        .cartesian_product(1..=p_max)
        .filter(|&(q, p)| gcd(p, q) == 1)
        .map(|(q, p)| ResonanceCandidate { p, q })
}
