//! MT19937 adapter
//!
//! The engine itself is `rand_mt::Mt19937GenRand32`, which matches the
//! standard 32-bit Mersenne Twister including its `init_genrand` seeding.
//! Only the conversion to [0, 1) lives here.
//!
//! # Real Conversion
//!
//! Follows the standard uniform real distribution over a 32-bit engine
//! (`generate_canonical<double, 53>`): two draws are combined as
//! `(lo + hi * 2^32) / 2^64` in f64 arithmetic. Rounding in the sum can
//! produce exactly 1.0, which is clamped to the largest double below 1.0.

use rand_mt::Mt19937GenRand32;
use std::fmt;

/// 2^32 as f64
const TWO_POW_32: f64 = 4_294_967_296.0;

/// 2^64 as f64
const TWO_POW_64: f64 = 18_446_744_073_709_551_616.0;

/// Largest f64 strictly below 1.0
const ONE_BELOW: f64 = 1.0 - f64::EPSILON / 2.0;

/// 32-bit Mersenne Twister
#[derive(Clone)]
pub struct Mt19937 {
    engine: Mt19937GenRand32,
}

impl Mt19937 {
    /// Seed the engine from a 32-bit value
    ///
    /// # Example
    /// ```
    /// use prng_sequence_core::Mt19937;
    ///
    /// let mut rng = Mt19937::new(5489);
    /// assert_eq!(rng.next_u32(), 3499211612);
    /// ```
    pub fn new(seed: u32) -> Self {
        Self {
            engine: Mt19937GenRand32::new(seed),
        }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.engine.next_u32()
    }

    /// Generate an f64 in [0.0, 1.0), consuming two engine outputs
    pub fn next_f64(&mut self) -> f64 {
        let lo = self.next_u32() as f64;
        let hi = self.next_u32() as f64;
        canonical(lo, hi)
    }
}

fn canonical(lo: f64, hi: f64) -> f64 {
    let sum = lo + hi * TWO_POW_32;
    let ret = sum / TWO_POW_64;
    if ret >= 1.0 {
        ONE_BELOW
    } else {
        ret
    }
}

impl fmt::Debug for Mt19937 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mt19937").finish_non_exhaustive()
    }
}
