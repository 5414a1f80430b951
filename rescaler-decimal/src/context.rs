//! # Context
//!
//! The working precision of a calculation, and constructors for values at that precision

use crate::{Decimal, DomainError};
use dashu_int::IBig;
use std::str::FromStr;

/// The number of significant digits used when nothing else is configured
pub const DEFAULT_PRECISION: usize = 100;
/// Below this the `1e-15` search tolerance is no longer meaningful after chained operations
pub const MINIMUM_PRECISION: usize = 50;

// 110 decimal places
const PI: &str = "3.14159265358979323846264338327950288419716939937510582097494459230781640628620899862803482534211706798214808651";

/// Holds the working precision of a calculation.
///
/// Every value entering a calculation passes through the context, so all operands carry the same
/// precision and the results of `dashu` arithmetic are rounded to it.
#[derive(Clone, Debug, PartialEq)]
pub struct DecimalContext {
    digits: usize,
    pi: Decimal,
}

impl DecimalContext {
    /// Create a context carrying `digits` significant digits
    pub fn new(digits: usize) -> Result<Self, DomainError> {
        if digits < MINIMUM_PRECISION {
            return Err(DomainError::InsufficientPrecision {
                digits,
                minimum: MINIMUM_PRECISION,
            });
        }
        let pi = Decimal::from_str(PI)
            .map_err(|e| DomainError::Parse {
                literal: PI.to_string(),
                reason: format!("{:?}", e),
            })?
            .with_precision(digits)
            .value();
        Ok(Self { digits, pi })
    }

    pub fn digits(&self) -> usize {
        self.digits
    }

    /// Round `value` to the working precision
    pub fn round(&self, value: Decimal) -> Decimal {
        value.with_precision(self.digits).value()
    }

    /// Parse a decimal literal such as `6.62607015e-34`, `483597.8484e9` or `1.9561E+09`
    pub fn parse(&self, literal: &str) -> Result<Decimal, DomainError> {
        let normalised = literal
            .trim()
            .trim_start_matches('+')
            .to_ascii_lowercase()
            .replace("e+", "e")
            .replace('_', "");
        let value = Decimal::from_str(&normalised).map_err(|e| DomainError::Parse {
            literal: literal.to_string(),
            reason: format!("{:?}", e),
        })?;
        Ok(self.round(value))
    }

    pub fn integer(&self, value: i64) -> Decimal {
        self.round(Decimal::from_parts(IBig::from(value), 0))
    }

    /// The rational `numerator / denominator` at the working precision
    pub fn ratio(&self, numerator: i64, denominator: i64) -> Result<Decimal, DomainError> {
        crate::checked_div(
            &self.integer(numerator),
            &self.integer(denominator),
            "a rational exponent",
        )
    }

    pub fn zero(&self) -> Decimal {
        self.integer(0)
    }

    pub fn one(&self) -> Decimal {
        self.integer(1)
    }

    /// π at the working precision, or at 110 decimal places if the context asks for more
    pub fn pi(&self) -> Decimal {
        self.pi.clone()
    }

    /// 2π, which appears in every reduced Planck unit
    pub fn two_pi(&self) -> Decimal {
        self.round(&self.pi * self.integer(2))
    }
}

#[cfg(test)]
mod test {
    use super::{DecimalContext, DEFAULT_PRECISION, MINIMUM_PRECISION};
    use crate::{to_f64, DomainError};

    #[test]
    fn precision_below_the_minimum_is_rejected() {
        let result = DecimalContext::new(MINIMUM_PRECISION - 1);
        assert_eq!(
            result,
            Err(DomainError::InsufficientPrecision {
                digits: MINIMUM_PRECISION - 1,
                minimum: MINIMUM_PRECISION
            })
        );
    }

    #[test]
    fn literals_in_all_reference_styles_parse() {
        let ctx = DecimalContext::new(DEFAULT_PRECISION).unwrap();
        for (literal, expected) in [
            ("6.62607015e-34", 6.62607015e-34),
            ("299792458.0", 299792458.0),
            ("483597.8484e9", 483597.8484e9),
            ("5.45551186133E-8", 5.45551186133e-8),
            ("1.9561e+09", 1.9561e9),
            ("1e-7", 1e-7),
            (" 683 ", 683.0),
        ] {
            let value = ctx.parse(literal).unwrap();
            approx::assert_relative_eq!(to_f64(&value), expected, max_relative = 1e-15);
        }
    }

    #[test]
    fn garbage_literal_is_a_parse_error() {
        let ctx = DecimalContext::new(DEFAULT_PRECISION).unwrap();
        assert!(matches!(
            ctx.parse("six point six"),
            Err(DomainError::Parse { .. })
        ));
    }

    #[test]
    fn parsed_values_carry_the_context_precision() {
        let ctx = DecimalContext::new(64).unwrap();
        assert_eq!(ctx.parse("1.5").unwrap().precision(), 64);
        assert_eq!(ctx.pi().precision(), 64);
    }

    #[test]
    fn ratio_with_zero_denominator_fails() {
        let ctx = DecimalContext::new(DEFAULT_PRECISION).unwrap();
        assert!(matches!(
            ctx.ratio(1, 0),
            Err(DomainError::DivisionByZero { .. })
        ));
    }

    #[test]
    fn pi_matches_the_float_constant() {
        let ctx = DecimalContext::new(DEFAULT_PRECISION).unwrap();
        approx::assert_relative_eq!(to_f64(&ctx.pi()), std::f64::consts::PI);
        approx::assert_relative_eq!(to_f64(&ctx.two_pi()), std::f64::consts::TAU);
    }
}
