//! # Power
//!
//! Guarded powers and roots. A positive base is raised as `exp(exponent * ln(base))` at the
//! working precision. Inputs with no real result fail fast:
//! - `0^0` is undefined,
//! - `0^x` with `x < 0` divides by zero,
//! - a negative base only accepts integer exponents,
//! - a result whose magnitude lies beyond `1e±MAXIMUM_DECIMAL_EXPONENT` is rejected before it is
//!   evaluated.

use crate::{abs, is_negative, is_positive, is_zero, to_f64, Decimal, DecimalContext, DomainError};
use dashu_int::IBig;

/// The largest decimal exponent, in either direction, a power may produce
pub const MAXIMUM_DECIMAL_EXPONENT: u32 = 1_000_000_000;

/// Raise `base` to the real power `exponent`
pub fn power(
    base: &Decimal,
    exponent: &Decimal,
    ctx: &DecimalContext,
) -> Result<Decimal, DomainError> {
    let base = ctx.round(base.clone());
    let exponent = ctx.round(exponent.clone());

    if is_zero(&base) {
        return zero_base(&exponent, ctx);
    }

    if is_negative(&base) {
        let integer = as_integer(&exponent);
        if integer.is_some() {
            ensure_in_range(&(&exponent * abs(&base).ln()), &base, &exponent)?;
        }
        return match integer {
            Some(n) => Ok(ctx.round(base.powi(n))),
            None => Err(DomainError::NegativeBaseFractionalExponent {
                base: base.to_string(),
                exponent: exponent.to_string(),
            }),
        };
    }

    let scaled_log = &exponent * base.ln();
    ensure_in_range(&scaled_log, &base, &exponent)?;
    Ok(ctx.round(scaled_log.exp()))
}

/// Raise `base` to the integer power `exponent`
pub fn powi(base: &Decimal, exponent: i64, ctx: &DecimalContext) -> Result<Decimal, DomainError> {
    let base = ctx.round(base.clone());
    if is_zero(&base) {
        return zero_base(&ctx.integer(exponent), ctx);
    }
    let exponent_value = ctx.integer(exponent);
    ensure_in_range(&(&exponent_value * abs(&base).ln()), &base, &exponent_value)?;
    Ok(ctx.round(base.powi(IBig::from(exponent))))
}

/// The square root of a non-negative `value`
pub fn sqrt(value: &Decimal, ctx: &DecimalContext) -> Result<Decimal, DomainError> {
    root(value, 2, ctx)
}

/// The cube root of a non-negative `value`
pub fn cbrt(value: &Decimal, ctx: &DecimalContext) -> Result<Decimal, DomainError> {
    root(value, 3, ctx)
}

/// The real `degree`-th root of a non-negative `value`
pub fn root(value: &Decimal, degree: i64, ctx: &DecimalContext) -> Result<Decimal, DomainError> {
    power(value, &ctx.ratio(1, degree)?, ctx)
}

fn zero_base(exponent: &Decimal, ctx: &DecimalContext) -> Result<Decimal, DomainError> {
    if is_positive(exponent) {
        Ok(ctx.zero())
    } else if is_zero(exponent) {
        Err(DomainError::ZeroToTheZero)
    } else {
        Err(DomainError::ZeroToNegativePower {
            exponent: exponent.to_string(),
        })
    }
}

/// Fails with `DomainError::Overflow` when `scaled_log = exponent * ln|base|` puts the result
/// beyond `1e±MAXIMUM_DECIMAL_EXPONENT`
fn ensure_in_range(
    scaled_log: &Decimal,
    base: &Decimal,
    exponent: &Decimal,
) -> Result<(), DomainError> {
    let magnitude = to_f64(scaled_log).abs() / std::f64::consts::LN_10;
    if magnitude <= f64::from(MAXIMUM_DECIMAL_EXPONENT) {
        Ok(())
    } else {
        Err(DomainError::Overflow {
            base: base.to_string(),
            exponent: exponent.to_string(),
        })
    }
}

/// The exponent as an integer, if it has no fractional part
fn as_integer(value: &Decimal) -> Option<IBig> {
    let repr = value.repr();
    let significand = repr.significand().clone();
    let exponent = repr.exponent();
    if exponent >= 0 {
        return Some(significand * IBig::from(10u8).pow(exponent as usize));
    }
    let scale = IBig::from(10u8).pow(exponent.unsigned_abs());
    if (&significand % &scale).is_zero() {
        Some(significand / scale)
    } else {
        None
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{relative_difference, to_f64, DEFAULT_PRECISION};

    fn ctx() -> DecimalContext {
        DecimalContext::new(DEFAULT_PRECISION).unwrap()
    }

    #[test]
    fn zero_to_the_zero_is_undefined() {
        let ctx = ctx();
        assert_eq!(
            power(&ctx.zero(), &ctx.zero(), &ctx),
            Err(DomainError::ZeroToTheZero)
        );
        assert_eq!(powi(&ctx.zero(), 0, &ctx), Err(DomainError::ZeroToTheZero));
    }

    #[test]
    fn zero_to_a_negative_power_fails() {
        let ctx = ctx();
        assert!(matches!(
            power(&ctx.zero(), &ctx.integer(-2), &ctx),
            Err(DomainError::ZeroToNegativePower { .. })
        ));
    }

    #[test]
    fn zero_to_a_positive_power_is_zero() {
        let ctx = ctx();
        let result = power(&ctx.zero(), &ctx.parse("0.5").unwrap(), &ctx).unwrap();
        assert!(is_zero(&result));
    }

    #[test]
    fn negative_base_with_fractional_exponent_fails() {
        let ctx = ctx();
        let result = power(&ctx.integer(-8), &ctx.parse("0.5").unwrap(), &ctx);
        assert!(matches!(
            result,
            Err(DomainError::NegativeBaseFractionalExponent { .. })
        ));
        assert!(cbrt(&ctx.integer(-8), &ctx).is_err());
    }

    #[test]
    fn negative_base_with_integer_exponent_keeps_its_sign() {
        let ctx = ctx();
        let cubed = power(&ctx.integer(-2), &ctx.integer(3), &ctx).unwrap();
        assert_eq!(cubed, ctx.integer(-8));
        let squared = power(&ctx.integer(-2), &ctx.parse("2.0").unwrap(), &ctx).unwrap();
        assert_eq!(squared, ctx.integer(4));
    }

    #[test]
    fn positive_base_matches_float_power() {
        let ctx = ctx();
        for (base, exponent) in [(2.0, 0.5), (299792458.0, 3.0), (6.62607015e-34, -0.25)] {
            let result = power(
                &ctx.parse(&base.to_string()).unwrap(),
                &ctx.parse(&exponent.to_string()).unwrap(),
                &ctx,
            )
            .unwrap();
            approx::assert_relative_eq!(
                to_f64(&result),
                f64::powf(base, exponent),
                max_relative = 1e-14
            );
        }
    }

    #[test]
    fn square_root_of_two_squares_back_to_two() {
        let ctx = ctx();
        let two = ctx.integer(2);
        let root_two = sqrt(&two, &ctx).unwrap();
        let error = relative_difference(&(&root_two * &root_two), &two).unwrap();
        assert!(error < ctx.parse("1e-90").unwrap());
    }

    #[test]
    fn cube_root_inverts_cube() {
        let ctx = ctx();
        let value = ctx.parse("1.9864458571489287e-25").unwrap();
        let cubed = powi(&value, 3, &ctx).unwrap();
        let recovered = cbrt(&cubed, &ctx).unwrap();
        let error = relative_difference(&recovered, &value).unwrap();
        assert!(error < ctx.parse("1e-90").unwrap());
    }

    #[test]
    fn integer_powers_are_exact_for_small_integers() {
        let ctx = ctx();
        let c = ctx.parse("299792458").unwrap();
        assert_eq!(
            powi(&c, 2, &ctx).unwrap(),
            ctx.parse("89875517873681764").unwrap()
        );
        let inverse = powi(&ctx.integer(4), -1, &ctx).unwrap();
        assert_eq!(inverse, ctx.parse("0.25").unwrap());
    }

    #[test]
    fn results_beyond_the_representable_range_fail() {
        let ctx = ctx();
        let huge = ctx.parse("1e30").unwrap();
        assert!(matches!(
            power(&ctx.integer(10), &huge, &ctx),
            Err(DomainError::Overflow { .. })
        ));
        assert!(matches!(
            power(&ctx.integer(-2), &huge, &ctx),
            Err(DomainError::Overflow { .. })
        ));
        assert!(matches!(
            power(&ctx.integer(10), &(-huge), &ctx),
            Err(DomainError::Overflow { .. })
        ));
        assert!(matches!(
            powi(&ctx.integer(-2), i64::MAX, &ctx),
            Err(DomainError::Overflow { .. })
        ));
    }

    #[test]
    fn large_but_representable_powers_succeed() {
        let ctx = ctx();
        let tolerance = ctx.parse("1e-90").unwrap();
        for (exponent, expected) in [(5000, "1e5000"), (-5000, "1e-5000")] {
            let result = power(&ctx.integer(10), &ctx.integer(exponent), &ctx).unwrap();
            let expected = ctx.parse(expected).unwrap();
            assert!(relative_difference(&result, &expected).unwrap() < tolerance);
        }
    }

    #[test]
    fn integer_exponent_detection() {
        let ctx = ctx();
        assert_eq!(as_integer(&ctx.parse("3.000").unwrap()), Some(IBig::from(3)));
        assert_eq!(as_integer(&ctx.parse("3e2").unwrap()), Some(IBig::from(300)));
        assert_eq!(as_integer(&ctx.parse("-4").unwrap()), Some(IBig::from(-4)));
        assert_eq!(as_integer(&ctx.parse("0.5").unwrap()), None);
    }
}
