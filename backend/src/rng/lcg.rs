//! Linear congruential generator
//!
//! `x_{n+1} = (a * x_n + c) mod m`
//!
//! The multiply and add run in 64-bit wrapping arithmetic before the
//! modulus is applied. With the default constants and a state below 2^32
//! the product never wraps; a raw 64-bit seed may wrap on the first step.

use crate::config::LcgParams;

/// Linear congruential generator with per-instance constants
///
/// # Example
/// ```
/// use prng_sequence_core::Lcg;
///
/// let mut rng = Lcg::new(0);
/// assert_eq!(rng.next_u32(), 1013904223);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lcg {
    params: LcgParams,
    /// Current value; the raw seed until the first step, then `< modulus`
    state: u64,
}

impl Lcg {
    /// Create an LCG with the default constants (1664525, 1013904223, 2^32)
    ///
    /// The seed is stored un-narrowed; the first step reduces it mod `m`.
    pub fn new(seed: u64) -> Self {
        Self::with_params(seed, LcgParams::default())
    }

    /// Create an LCG with custom constants
    ///
    /// # Example
    /// ```
    /// use prng_sequence_core::{Lcg, LcgParams};
    ///
    /// let params = LcgParams::new(5, 3, 16).unwrap();
    /// let mut rng = Lcg::with_params(7, params);
    /// assert_eq!(rng.next_u32(), (5 * 7 + 3) % 16);
    /// ```
    pub fn with_params(seed: u64, params: LcgParams) -> Self {
        Self {
            params,
            state: seed,
        }
    }

    /// Advance the recurrence and return the new state truncated to 32 bits
    pub fn next_u32(&mut self) -> u32 {
        self.state = self
            .params
            .multiplier()
            .wrapping_mul(self.state)
            .wrapping_add(self.params.increment())
            % self.params.modulus();
        self.state as u32
    }

    /// Generate an f64 in [0.0, 1.0) by dividing by this generator's modulus
    pub fn next_f64(&mut self) -> f64 {
        self.next_u32() as f64 / self.params.modulus() as f64
    }

    /// Current internal state
    pub fn state(&self) -> u64 {
        self.state
    }

    /// Constants this generator was built with
    pub fn params(&self) -> &LcgParams {
        &self.params
    }
}
