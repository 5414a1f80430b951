//! # Error
//! Domain errors raised by decimal construction and the power functions

use miette::Diagnostic;

#[derive(thiserror::Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
/// An input fell outside the domain of a decimal operation
pub enum DomainError {
    #[error("0^0 is undefined")]
    #[diagnostic(code(rescaler_decimal::zero_to_the_zero))]
    ZeroToTheZero,
    #[error("zero cannot be raised to the negative power {exponent}")]
    #[diagnostic(code(rescaler_decimal::zero_to_negative_power))]
    ZeroToNegativePower { exponent: String },
    #[error("negative base {base} cannot be raised to the non-integer power {exponent}")]
    #[diagnostic(
        code(rescaler_decimal::negative_base),
        help("only integer exponents are supported for negative bases")
    )]
    NegativeBaseFractionalExponent { base: String, exponent: String },
    #[error("{base}^{exponent} is outside the representable range")]
    #[diagnostic(
        code(rescaler_decimal::overflow),
        help("results must lie between 1e-1000000000 and 1e1000000000 in magnitude")
    )]
    Overflow { base: String, exponent: String },
    #[error("division by zero while evaluating {context}")]
    #[diagnostic(code(rescaler_decimal::division_by_zero))]
    DivisionByZero { context: String },
    #[error("the relative difference against a zero reference value is undefined")]
    #[diagnostic(code(rescaler_decimal::zero_reference))]
    ZeroReference,
    #[error("{name} must be strictly positive, found {value}")]
    #[diagnostic(code(rescaler_decimal::non_positive))]
    NonPositive { name: String, value: String },
    #[error("failed to parse `{literal}` as a decimal: {reason}")]
    #[diagnostic(code(rescaler_decimal::parse))]
    Parse { literal: String, reason: String },
    #[error("a precision of {digits} digits is below the supported minimum of {minimum}")]
    #[diagnostic(code(rescaler_decimal::precision))]
    InsufficientPrecision { digits: usize, minimum: usize },
}
