//! Number formatting for device read-outs.

use std::fmt;

/// Significant digits shown for a reading.
const PRECISION: i32 = 6;

/// Displays an `f64` rounded to six significant digits with trailing zeros
/// removed, switching to exponent notation (`1e+07`, `1e-05`) for very large
/// or very small magnitudes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Significant(pub f64);

impl fmt::Display for Significant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        if !value.is_finite() {
            return write!(f, "{value}");
        }
        // classify by the exponent after rounding
        let digits = usize::try_from(PRECISION - 1).unwrap_or_default();
        let scientific = format!("{value:.digits$e}");
        let Some((mantissa, exponent)) = scientific.split_once('e') else {
            return write!(f, "{value}");
        };
        let Ok(exponent) = exponent.parse::<i32>() else {
            return write!(f, "{value}");
        };

        if exponent < -4 || exponent >= PRECISION {
            let sign = if exponent < 0 { '-' } else { '+' };
            write!(
                f,
                "{}e{sign}{:02}",
                trim_fraction(mantissa),
                exponent.unsigned_abs()
            )
        } else {
            let decimals = usize::try_from(PRECISION - 1 - exponent).unwrap_or_default();
            f.write_str(trim_fraction(&format!("{value:.decimals$}")))
        }
    }
}

fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}
