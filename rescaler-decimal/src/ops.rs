use crate::{Decimal, DomainError};

/// Whether `value` is exactly zero
pub fn is_zero(value: &Decimal) -> bool {
    value.repr().significand().is_zero()
}

pub fn is_negative(value: &Decimal) -> bool {
    *value < Decimal::ZERO
}

pub fn is_positive(value: &Decimal) -> bool {
    *value > Decimal::ZERO
}

/// The magnitude of `value`
pub fn abs(value: &Decimal) -> Decimal {
    if is_negative(value) {
        -value.clone()
    } else {
        value.clone()
    }
}

/// Fails with `DomainError::NonPositive` unless `value > 0`
pub fn ensure_positive(name: &str, value: &Decimal) -> Result<(), DomainError> {
    if is_positive(value) {
        Ok(())
    } else {
        Err(DomainError::NonPositive {
            name: name.to_string(),
            value: value.to_string(),
        })
    }
}

/// Divide `numerator` by `denominator`, failing instead of panicking on a zero denominator
pub fn checked_div(
    numerator: &Decimal,
    denominator: &Decimal,
    context: &str,
) -> Result<Decimal, DomainError> {
    if is_zero(denominator) {
        return Err(DomainError::DivisionByZero {
            context: context.to_string(),
        });
    }
    Ok(numerator / denominator)
}

/// The relative difference `|computed - expected| / |expected|`
pub fn relative_difference(computed: &Decimal, expected: &Decimal) -> Result<Decimal, DomainError> {
    if is_zero(expected) {
        return Err(DomainError::ZeroReference);
    }
    Ok(abs(&(computed - expected)) / abs(expected))
}

/// Whether `value` lies within `relative_tolerance` of `reference`.
///
/// There is no absolute tolerance: `|value - reference| <= relative_tolerance * |reference|`.
pub fn is_close(value: &Decimal, reference: &Decimal, relative_tolerance: &Decimal) -> bool {
    abs(&(value - reference)) <= relative_tolerance * abs(reference)
}
