//! Deterministic pseudo-random number generators
//!
//! A closed set of four generators behind one sum type:
//!
//! | Tag          | Recurrence                      | `next_f64` divisor |
//! |--------------|---------------------------------|--------------------|
//! | `lcg`        | `(a * x + c) mod m`             | `m`                |
//! | `randu`      | `(65539 * x) mod 2^31`          | `2^31`             |
//! | `xorshift32` | xorshift 13/17/5                | `2^32 - 1`         |
//! | `mt19937`    | 32-bit Mersenne Twister         | two draws / `2^64` |
//!
//! Same kind + seed → same sequence. Generator operations cannot fail;
//! only name parsing and parameter validation return errors.

mod lcg;
mod mt;
mod randu;
mod xorshift;

pub use lcg::Lcg;
pub use mt::Mt19937;
pub use randu::Randu;
pub use xorshift::Xorshift32;

use crate::config::LcgParams;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while selecting or configuring a generator
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Unknown generator type: {0}")]
    UnknownGenerator(String),

    #[error("LCG modulus must be non-zero")]
    ZeroModulus,

    #[error("Invalid generator configuration: {0}")]
    InvalidConfig(String),
}

/// Generator algorithm tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeneratorKind {
    Lcg,
    Randu,
    Xorshift32,
    Mt19937,
}

impl GeneratorKind {
    /// Every supported kind, in CLI listing order
    pub const ALL: [GeneratorKind; 4] = [
        GeneratorKind::Lcg,
        GeneratorKind::Randu,
        GeneratorKind::Xorshift32,
        GeneratorKind::Mt19937,
    ];

    /// Tag as accepted on the command line
    pub fn as_str(self) -> &'static str {
        match self {
            GeneratorKind::Lcg => "lcg",
            GeneratorKind::Randu => "randu",
            GeneratorKind::Xorshift32 => "xorshift32",
            GeneratorKind::Mt19937 => "mt19937",
        }
    }
}

impl fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GeneratorKind {
    type Err = GeneratorError;

    /// Exact, case-sensitive match on the tag
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GeneratorKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| GeneratorError::UnknownGenerator(s.to_string()))
    }
}

/// A seeded generator of one of the four kinds
///
/// # Example
/// ```
/// use prng_sequence_core::{Generator, GeneratorKind};
///
/// let mut rng = Generator::new(GeneratorKind::Randu, 1);
/// assert_eq!(rng.next_u32(), 65539);
///
/// let value = rng.next_f64();
/// assert!(value >= 0.0 && value < 1.0);
/// ```
#[derive(Debug, Clone)]
pub enum Generator {
    Lcg(Lcg),
    Randu(Randu),
    Xorshift32(Xorshift32),
    Mt19937(Mt19937),
}

impl Generator {
    /// Construct a generator with default constants
    ///
    /// The LCG keeps the full 64-bit seed. The other kinds truncate it to
    /// its low 32 bits.
    pub fn new(kind: GeneratorKind, seed: u64) -> Self {
        Self::with_lcg_params(kind, seed, LcgParams::default())
    }

    /// Construct a generator, using `params` if `kind` is the LCG
    pub fn with_lcg_params(kind: GeneratorKind, seed: u64, params: LcgParams) -> Self {
        let narrowed = seed as u32;
        match kind {
            GeneratorKind::Lcg => Generator::Lcg(Lcg::with_params(seed, params)),
            GeneratorKind::Randu => Generator::Randu(Randu::new(narrowed)),
            GeneratorKind::Xorshift32 => Generator::Xorshift32(Xorshift32::new(narrowed)),
            GeneratorKind::Mt19937 => Generator::Mt19937(Mt19937::new(narrowed)),
        }
    }

    pub fn kind(&self) -> GeneratorKind {
        match self {
            Generator::Lcg(_) => GeneratorKind::Lcg,
            Generator::Randu(_) => GeneratorKind::Randu,
            Generator::Xorshift32(_) => GeneratorKind::Xorshift32,
            Generator::Mt19937(_) => GeneratorKind::Mt19937,
        }
    }

    /// Advance the generator and return the raw 32-bit output
    pub fn next_u32(&mut self) -> u32 {
        match self {
            Generator::Lcg(rng) => rng.next_u32(),
            Generator::Randu(rng) => rng.next_u32(),
            Generator::Xorshift32(rng) => rng.next_u32(),
            Generator::Mt19937(rng) => rng.next_u32(),
        }
    }

    /// Advance the generator and return a normalized f64
    ///
    /// In [0.0, 1.0) for every kind except xorshift32, whose range is
    /// [0.0, 1.0].
    pub fn next_f64(&mut self) -> f64 {
        match self {
            Generator::Lcg(rng) => rng.next_f64(),
            Generator::Randu(rng) => rng.next_f64(),
            Generator::Xorshift32(rng) => rng.next_f64(),
            Generator::Mt19937(rng) => rng.next_f64(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_tags() {
        for kind in GeneratorKind::ALL {
            assert_eq!(kind.as_str().parse::<GeneratorKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(
            "LCG".parse::<GeneratorKind>(),
            Err(GeneratorError::UnknownGenerator("LCG".to_string()))
        );
    }

    #[test]
    fn test_unknown_generator_message() {
        let err = "pcg".parse::<GeneratorKind>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown generator type: pcg");
    }

    #[test]
    fn test_kind_round_trip() {
        for kind in GeneratorKind::ALL {
            assert_eq!(Generator::new(kind, 7).kind(), kind);
        }
    }

    #[test]
    fn test_seed_truncated_for_32_bit_kinds() {
        let wide = (1u64 << 32) | 5;

        let mut a = Generator::new(GeneratorKind::Randu, wide);
        let mut b = Generator::new(GeneratorKind::Randu, 5);
        assert_eq!(a.next_u32(), b.next_u32());

        let mut a = Generator::new(GeneratorKind::Mt19937, wide);
        let mut b = Generator::new(GeneratorKind::Mt19937, 5);
        assert_eq!(a.next_u32(), b.next_u32());
    }

    #[test]
    fn test_xorshift_wide_seed_with_zero_low_bits() {
        let rng = Generator::new(GeneratorKind::Xorshift32, 1u64 << 32);
        match rng {
            Generator::Xorshift32(inner) => assert_eq!(inner.state(), 1),
            other => panic!("unexpected generator {:?}", other),
        }
    }

    #[test]
    fn test_lcg_params_ignored_for_other_kinds() {
        let params = LcgParams::new(5, 3, 16).unwrap();
        let mut a = Generator::with_lcg_params(GeneratorKind::Xorshift32, 9, params);
        let mut b = Generator::new(GeneratorKind::Xorshift32, 9);
        assert_eq!(a.next_u32(), b.next_u32());
    }
}
