//! Sequence serialization
//!
//! Output layout: a header line `x`, then one value per line in
//! generation order, every line newline-terminated.

use crate::rng::Generator;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};

/// Header line written before any values
pub const HEADER: &str = "x";

/// Significant digits of the `General` rendering
const GENERAL_PRECISION: i32 = 6;

/// Decimal rendering of generated values
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberFormat {
    /// Shortest text that parses back to the same f64
    #[default]
    Shortest,
    /// printf-style `%g`: six significant digits, trailing zeros removed
    General,
}

/// Render one value
///
/// # Example
/// ```
/// use prng_sequence_core::{format_value, NumberFormat};
///
/// assert_eq!(format_value(0.2523451747838408, NumberFormat::General), "0.252345");
/// assert_eq!(format_value(0.5, NumberFormat::Shortest), "0.5");
/// ```
pub fn format_value(value: f64, format: NumberFormat) -> String {
    match format {
        NumberFormat::Shortest => value.to_string(),
        NumberFormat::General => format_general(value),
    }
}

fn format_general(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // Round to the target precision first; the exponent after rounding
    // decides between fixed and scientific notation.
    let sci = format!("{:.*e}", (GENERAL_PRECISION - 1) as usize, value);
    let (mantissa, exponent) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if exponent < -4 || exponent >= GENERAL_PRECISION {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (GENERAL_PRECISION - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

/// Strip trailing zeros after a decimal point, then the point itself
fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

/// Write the header and `count` values drawn from `generator`
///
/// The sink is not flushed; wrap files in a `BufWriter` and flush after.
///
/// # Example
/// ```
/// use prng_sequence_core::{write_sequence, Generator, GeneratorKind, NumberFormat};
///
/// let mut rng = Generator::new(GeneratorKind::Randu, 1);
/// let mut out = Vec::new();
/// write_sequence(&mut rng, 2, NumberFormat::Shortest, &mut out).unwrap();
///
/// let text = String::from_utf8(out).unwrap();
/// assert_eq!(text.lines().count(), 3);
/// assert!(text.starts_with("x\n"));
/// ```
pub fn write_sequence<W: Write>(
    generator: &mut Generator,
    count: u64,
    format: NumberFormat,
    sink: &mut W,
) -> io::Result<()> {
    writeln!(sink, "{}", HEADER)?;
    for _ in 0..count {
        let value = generator.next_f64();
        match format {
            NumberFormat::Shortest => writeln!(sink, "{}", value)?,
            NumberFormat::General => writeln!(sink, "{}", format_general(value))?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_general_fixed_notation() {
        assert_eq!(format_general(0.2523451747838408), "0.252345");
        assert_eq!(format_general(0.5), "0.5");
        assert_eq!(format_general(1.0), "1");
        assert_eq!(format_general(0.0001), "0.0001");
    }

    #[test]
    fn test_general_scientific_notation() {
        assert_eq!(format_general(0.00001), "1e-05");
        assert_eq!(format_general(0.0000123456789), "1.23457e-05");
        assert_eq!(format_general(1234567.0), "1.23457e+06");
    }

    #[test]
    fn test_general_rounding_crosses_exponent() {
        // 0.99999996 rounds to 1.00000 at six digits
        assert_eq!(format_general(0.99999996), "1");
        assert_eq!(format_general(0.000099999996), "0.0001");
    }

    #[test]
    fn test_general_zero() {
        assert_eq!(format_general(0.0), "0");
    }

    #[test]
    fn test_shortest_round_trips() {
        let value = 0.08812504541128874;
        let text = format_value(value, NumberFormat::Shortest);
        assert_eq!(text.parse::<f64>().unwrap(), value);
    }

    #[test]
    fn test_trim_fraction() {
        assert_eq!(trim_fraction("1.50000"), "1.5");
        assert_eq!(trim_fraction("2.00000"), "2");
        assert_eq!(trim_fraction("100"), "100");
    }
}
