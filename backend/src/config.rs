//! Generator configuration
//!
//! Constants live on each generator instance rather than in process-wide
//! state, so generators with different LCG constants can coexist.

use crate::rng::{Generator, GeneratorError, GeneratorKind};
use serde::{de, Deserialize, Deserializer, Serialize};

/// Default LCG multiplier (Numerical Recipes)
pub const DEFAULT_LCG_MULTIPLIER: u64 = 1_664_525;

/// Default LCG increment (Numerical Recipes)
pub const DEFAULT_LCG_INCREMENT: u64 = 1_013_904_223;

/// Default LCG modulus, 2^32
pub const DEFAULT_LCG_MODULUS: u64 = 1 << 32;

/// LCG constants `a`, `c`, `m`
///
/// Always valid: every constructor, including deserialization, rejects a
/// zero modulus. Missing JSON fields fall back to the defaults.
///
/// # Example
/// ```
/// use prng_sequence_core::LcgParams;
///
/// let params = LcgParams::from_json(r#"{"modulus": 2147483648}"#).unwrap();
/// assert_eq!(params.multiplier(), 1664525);
/// assert_eq!(params.modulus(), 1 << 31);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LcgParams {
    multiplier: u64,
    increment: u64,
    modulus: u64,
}

/// Unvalidated wire form of [`LcgParams`]
#[derive(Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawLcgParams {
    multiplier: u64,
    increment: u64,
    modulus: u64,
}

impl Default for RawLcgParams {
    fn default() -> Self {
        Self {
            multiplier: DEFAULT_LCG_MULTIPLIER,
            increment: DEFAULT_LCG_INCREMENT,
            modulus: DEFAULT_LCG_MODULUS,
        }
    }
}

impl<'de> Deserialize<'de> for LcgParams {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawLcgParams::deserialize(deserializer)?;
        LcgParams::new(raw.multiplier, raw.increment, raw.modulus).map_err(de::Error::custom)
    }
}

impl Default for LcgParams {
    fn default() -> Self {
        Self {
            multiplier: DEFAULT_LCG_MULTIPLIER,
            increment: DEFAULT_LCG_INCREMENT,
            modulus: DEFAULT_LCG_MODULUS,
        }
    }
}

impl LcgParams {
    /// Validated constructor
    ///
    /// # Errors
    /// `ZeroModulus` if `modulus == 0`
    pub fn new(multiplier: u64, increment: u64, modulus: u64) -> Result<Self, GeneratorError> {
        if modulus == 0 {
            return Err(GeneratorError::ZeroModulus);
        }
        Ok(Self {
            multiplier,
            increment,
            modulus,
        })
    }

    /// Parse and validate constants from a JSON object
    pub fn from_json(json: &str) -> Result<Self, GeneratorError> {
        let raw: RawLcgParams = serde_json::from_str(json)
            .map_err(|e| GeneratorError::InvalidConfig(e.to_string()))?;
        LcgParams::new(raw.multiplier, raw.increment, raw.modulus)
    }

    pub fn multiplier(&self) -> u64 {
        self.multiplier
    }

    pub fn increment(&self) -> u64 {
        self.increment
    }

    pub fn modulus(&self) -> u64 {
        self.modulus
    }
}

/// Everything needed to reproduce one generated sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceConfig {
    pub generator: GeneratorKind,
    pub seed: u64,
    pub count: u64,
    #[serde(default)]
    pub lcg: LcgParams,
}

impl SequenceConfig {
    pub fn new(generator: GeneratorKind, seed: u64, count: u64) -> Self {
        Self {
            generator,
            seed,
            count,
            lcg: LcgParams::default(),
        }
    }

    /// Construct the configured generator
    pub fn build_generator(&self) -> Generator {
        Generator::with_lcg_params(self.generator, self.seed, self.lcg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params() {
        let params = LcgParams::default();
        assert_eq!(params.multiplier(), 1664525);
        assert_eq!(params.increment(), 1013904223);
        assert_eq!(params.modulus(), 4294967296);
    }

    #[test]
    fn test_zero_modulus_rejected() {
        assert_eq!(LcgParams::new(1, 1, 0), Err(GeneratorError::ZeroModulus));
        assert_eq!(
            LcgParams::from_json(r#"{"modulus": 0}"#),
            Err(GeneratorError::ZeroModulus)
        );
    }

    #[test]
    fn test_from_json_rejects_unknown_fields() {
        let err = LcgParams::from_json(r#"{"mod": 7}"#).unwrap_err();
        assert!(matches!(err, GeneratorError::InvalidConfig(_)));
    }

    #[test]
    fn test_from_json_rejects_negative() {
        let err = LcgParams::from_json(r#"{"increment": -1}"#).unwrap_err();
        assert!(matches!(err, GeneratorError::InvalidConfig(_)));
    }

    #[test]
    fn test_sequence_config_json_tags() {
        let config: SequenceConfig =
            serde_json::from_str(r#"{"generator": "xorshift32", "seed": 3, "count": 10}"#)
                .unwrap();
        assert_eq!(config, SequenceConfig::new(GeneratorKind::Xorshift32, 3, 10));

        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains(r#""generator":"xorshift32""#));
    }

    #[test]
    fn test_sequence_config_rejects_zero_modulus() {
        let result = serde_json::from_str::<SequenceConfig>(
            r#"{"generator": "lcg", "seed": 1, "count": 1, "lcg": {"modulus": 0}}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_build_generator_uses_lcg_params() {
        let mut config = SequenceConfig::new(GeneratorKind::Lcg, 7, 1);
        config.lcg = LcgParams::new(5, 3, 16).unwrap();

        let mut rng = config.build_generator();
        assert_eq!(rng.kind(), GeneratorKind::Lcg);
        assert_eq!(rng.next_u32(), 6);
    }

    #[test]
    fn test_params_serialize_round_trip() {
        let params = LcgParams::new(3, 1, 10).unwrap();
        let json = serde_json::to_string(&params).unwrap();
        assert_eq!(json, r#"{"multiplier":3,"increment":1,"modulus":10}"#);
        assert_eq!(LcgParams::from_json(&json), Ok(params));
    }
}
