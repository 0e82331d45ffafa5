//! RANDU: `x_{n+1} = (65539 * x_n) mod 2^31`
//!
//! IBM's historical multiplicative generator. Kept for reproducing legacy
//! sequences; its output is famously correlated in triples.

const MULTIPLIER: u64 = 65539;
const MODULUS: u64 = 1 << 31;

/// RANDU generator
///
/// # Example
/// ```
/// use prng_sequence_core::Randu;
///
/// let mut rng = Randu::new(1);
/// assert_eq!(rng.next_u32(), 65539);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Randu {
    state: u32,
}

impl Randu {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Advance the recurrence; the product is formed in 64 bits
    pub fn next_u32(&mut self) -> u32 {
        self.state = ((MULTIPLIER * self.state as u64) % MODULUS) as u32;
        self.state
    }

    /// Generate an f64 in [0.0, 1.0) by dividing by 2^31
    pub fn next_f64(&mut self) -> f64 {
        self.next_u32() as f64 / MODULUS as f64
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}
