//! Xorshift32 random number generator
//!
//! Marsaglia's 32-bit xorshift with the (13, 17, 5) shift triple.
//!
//! # Algorithm
//!
//! ```text
//! x ^= x << 13
//! x ^= x >> 17
//! x ^= x << 5
//! ```
//!
//! All shifts operate on exactly 32 bits; bits shifted out are discarded.
//!
//! # Zero State
//!
//! Zero is an absorbing state: every shift of zero is zero. The constructor
//! maps a zero seed to 1, and the recurrence is a bijection on non-zero
//! values, so the state can never return to zero afterwards.

/// Seed substituted when the caller supplies zero
const ZERO_SEED_FALLBACK: u32 = 1;

/// Deterministic 32-bit xorshift generator
///
/// # Example
/// ```
/// use prng_sequence_core::Xorshift32;
///
/// let mut rng = Xorshift32::new(1);
/// assert_eq!(rng.next_u32(), 270369);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Xorshift32 {
    /// Internal state (never zero)
    state: u32,
}

impl Xorshift32 {
    /// Create a new generator from a 32-bit seed
    ///
    /// A zero seed is replaced with 1.
    ///
    /// # Example
    /// ```
    /// use prng_sequence_core::Xorshift32;
    ///
    /// let rng = Xorshift32::new(0);
    /// assert_eq!(rng.state(), 1);
    /// ```
    pub fn new(seed: u32) -> Self {
        let state = if seed == 0 { ZERO_SEED_FALLBACK } else { seed };
        Self { state }
    }

    /// Advance the state and return it
    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Generate an f64 in [0.0, 1.0]
    ///
    /// Divides by `u32::MAX`, not 2^32, so an output of `0xFFFF_FFFF` maps
    /// to exactly 1.0.
    ///
    /// # Example
    /// ```
    /// use prng_sequence_core::Xorshift32;
    ///
    /// let mut rng = Xorshift32::new(12345);
    /// let value = rng.next_f64();
    /// assert!((0.0..=1.0).contains(&value));
    /// ```
    pub fn next_f64(&mut self) -> f64 {
        self.next_u32() as f64 / u32::MAX as f64
    }

    /// Current internal state
    pub fn state(&self) -> u32 {
        self.state
    }
}
