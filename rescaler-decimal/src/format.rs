//! # Format
//!
//! Scientific notation for report tables, and lossy conversion to `f64`

use crate::Decimal;
use std::fmt;

/// Displays a `Decimal` as `d.ddde±XX`, rounded half away from zero to `decimals` places after
/// the point. Honours width and alignment flags, so `{:<22}` pads as it would for a string.
#[derive(Debug, Clone, Copy)]
pub struct Scientific<'a> {
    value: &'a Decimal,
    decimals: usize,
}

impl<'a> Scientific<'a> {
    pub fn new(value: &'a Decimal, decimals: usize) -> Self {
        Self { value, decimals }
    }
}

impl fmt::Display for Scientific<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&scientific(self.value, self.decimals))
    }
}

fn scientific(value: &Decimal, decimals: usize) -> String {
    let significant = decimals + 1;
    let rounded = value.clone().with_precision(significant).value();
    let repr = rounded.repr();
    let text = repr.significand().to_string();
    let (sign, digits) = match text.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", text.as_str()),
    };

    if digits == "0" {
        let zeros = "0".repeat(decimals);
        return match decimals {
            0 => "0e+00".to_string(),
            _ => format!("0.{}e+00", zeros),
        };
    }

    let exponent = repr.exponent() + digits.len() as isize - 1;
    let mut mantissa = digits.to_string();
    mantissa.truncate(significant);
    while mantissa.len() < significant {
        mantissa.push('0');
    }
    let (head, tail) = mantissa.split_at(1);
    let exponent_sign = if exponent < 0 { '-' } else { '+' };

    match tail.is_empty() {
        true => format!("{sign}{head}e{exponent_sign}{:02}", exponent.unsigned_abs()),
        false => format!(
            "{sign}{head}.{tail}e{exponent_sign}{:02}",
            exponent.unsigned_abs()
        ),
    }
}

/// The nearest `f64` to `value`. Values beyond the `f64` range become infinite.
pub fn to_f64(value: &Decimal) -> f64 {
    let repr = value.repr();
    format!("{}e{}", repr.significand(), repr.exponent())
        .parse::<f64>()
        .unwrap_or(f64::NAN)
}

#[cfg(test)]
mod test {
    use super::{to_f64, Scientific};
    use crate::DecimalContext;

    #[test]
    fn formats_like_a_twelve_place_float() {
        let ctx = DecimalContext::new(100).unwrap();
        let hc = ctx.parse("1.9864458571489287e-25").unwrap();
        assert_eq!(
            Scientific::new(&hc, 12).to_string(),
            format!("{:.12e}", 1.9864458571489287e-25_f64)
        );
        assert_eq!(Scientific::new(&hc, 12).to_string(), "1.986445857149e-25");
    }

    #[test]
    fn rounds_half_away_from_zero() {
        let ctx = DecimalContext::new(100).unwrap();
        let value = ctx.parse("-2.5").unwrap();
        assert_eq!(Scientific::new(&value, 0).to_string(), "-3e+00");
        let value = ctx.parse("9.9996").unwrap();
        assert_eq!(Scientific::new(&value, 3).to_string(), "1.000e+01");
    }

    #[test]
    fn pads_short_mantissas_and_large_exponents() {
        let ctx = DecimalContext::new(100).unwrap();
        let value = ctx.parse("4.6332e+113").unwrap();
        assert_eq!(Scientific::new(&value, 6).to_string(), "4.633200e+113");
        assert_eq!(Scientific::new(&ctx.zero(), 2).to_string(), "0.00e+00");
    }

    #[test]
    fn honours_width_flags() {
        let ctx = DecimalContext::new(100).unwrap();
        let value = ctx.parse("683").unwrap();
        assert_eq!(
            format!("[{:<12}]", Scientific::new(&value, 2)),
            "[6.83e+02    ]"
        );
    }

    #[test]
    fn converts_extreme_values_to_float() {
        let ctx = DecimalContext::new(100).unwrap();
        let small = ctx.parse("7.3724973238127079e-51").unwrap();
        approx::assert_relative_eq!(to_f64(&small), 7.3724973238127079e-51);
        let huge = ctx.parse("1e400").unwrap();
        assert!(to_f64(&huge).is_infinite());
    }
}
