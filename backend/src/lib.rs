//! PRNG Sequence Core
//!
//! Deterministic pseudo-random sequences from a named algorithm and seed.
//!
//! # Architecture
//!
//! - **rng**: The four generators (LCG, RANDU, Xorshift32, MT19937) and the
//!   `Generator` sum type over them
//! - **config**: LCG constants and run descriptions
//! - **sequence**: Text serialization of a generated sequence
//!
//! # Critical Invariants
//!
//! 1. Same kind + seed produces the same sequence, bit for bit
//! 2. Generator operations are total; they never fail or panic
//! 3. No I/O happens inside a generator

// Module declarations
pub mod config;
pub mod rng;
pub mod sequence;

// Re-exports for convenience
pub use config::{LcgParams, SequenceConfig};
pub use rng::{Generator, GeneratorError, GeneratorKind, Lcg, Mt19937, Randu, Xorshift32};
pub use sequence::{format_value, write_sequence, NumberFormat};
