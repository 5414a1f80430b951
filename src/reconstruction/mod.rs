//! # Reconstruction
//!
//! Derived constants rebuilt as monomials in a handful of unit scaling factors.
//!
//! A [`Framework`] derives its scaling factors from a [`ConstantSet`] and supplies a
//! [`FormulaTable`], a registry of named formulas with their textbook reference values. Evaluating
//! the table against the factors gives one [`ValidationRecord`] per formula, in registration order.
//! A large relative error is reported data, not a failure: only domain errors stop an evaluation.

mod length_mass;
mod quantum_of_mass;

pub use length_mass::{LengthMass, LengthMassFactors};
pub use quantum_of_mass::{QuantumOfMass, QuantumOfMassFactors};

use crate::constants::ConstantSet;
use rescaler_decimal::{powi, relative_difference, sqrt, Decimal, DecimalContext, DomainError};
use serde::Deserialize;
use std::fmt;

/// Groups of related constants, used to lay out reports
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    /// Constants tied to a single quantum of action or mass
    Quantum,
    /// Planck units
    Planck,
    /// Thermodynamic and atomic constants
    Thermodynamic,
    /// Electromagnetic constants
    Electromagnetic,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Section::Quantum => "Quantum",
            Section::Planck => "Planck units",
            Section::Thermodynamic => "Thermodynamic and atomic",
            Section::Electromagnetic => "Electromagnetic",
        };
        f.pad(name)
    }
}

/// Everything a formula may read besides the scaling factors
#[derive(Clone, Copy, Debug)]
pub struct Environment<'a> {
    /// The input constants
    pub constants: &'a ConstantSet,
    /// The working precision
    pub ctx: &'a DecimalContext,
}

impl<'a> Environment<'a> {
    /// Bundle the constants with the working precision
    pub fn new(constants: &'a ConstantSet, ctx: &'a DecimalContext) -> Self {
        Self { constants, ctx }
    }

    /// The speed of light
    pub fn c(&self) -> &Decimal {
        &self.constants.speed_of_light
    }

    /// The electron charge
    pub fn e(&self) -> &Decimal {
        &self.constants.electron_charge
    }

    /// An integer at the working precision
    pub fn int(&self, value: i64) -> Decimal {
        self.ctx.integer(value)
    }

    /// π at the working precision
    pub fn pi(&self) -> Decimal {
        self.ctx.pi()
    }

    /// 2π at the working precision
    pub fn two_pi(&self) -> Decimal {
        self.ctx.two_pi()
    }

    /// `√(2π)`, the factor separating reduced Planck units from those built on `h`
    pub fn sqrt_two_pi(&self) -> Result<Decimal, DomainError> {
        sqrt(&self.two_pi(), self.ctx)
    }

    /// `base^exponent` at the working precision
    pub fn powi(&self, base: &Decimal, exponent: i64) -> Result<Decimal, DomainError> {
        powi(base, exponent, self.ctx)
    }

    /// The square root of a non-negative value
    pub fn sqrt(&self, value: &Decimal) -> Result<Decimal, DomainError> {
        sqrt(value, self.ctx)
    }

    /// Parse a literal at the working precision
    pub fn literal(&self, literal: &str) -> Result<Decimal, DomainError> {
        self.ctx.parse(literal)
    }
}

/// A set of named scaling factors
pub trait ScalingFactors {
    /// The factors with their names, in presentation order
    fn named(&self) -> Vec<(&'static str, Decimal)>;
}

/// Computes a derived constant from the scaling factors `F`
pub type FormulaFn<F> = fn(&F, &Environment<'_>) -> Result<Decimal, DomainError>;

/// A single registered formula
pub struct Formula<F> {
    section: Section,
    name: &'static str,
    expected: &'static str,
    compute: FormulaFn<F>,
}

impl<F> Formula<F> {
    /// The report section the formula belongs to
    pub fn section(&self) -> Section {
        self.section
    }

    /// The name of the derived constant
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The reference value, as published
    pub fn expected(&self) -> &'static str {
        self.expected
    }

    /// Evaluate this formula and compare it against the reference value
    pub fn evaluate(
        &self,
        factors: &F,
        env: &Environment<'_>,
    ) -> Result<ValidationRecord, DomainError> {
        let expected = env.literal(self.expected)?;
        let calculated = env.ctx.round((self.compute)(factors, env)?);
        let relative_error = relative_difference(&calculated, &expected)?;
        Ok(ValidationRecord {
            section: self.section,
            name: self.name,
            expected,
            calculated,
            relative_error,
        })
    }
}

/// An ordered registry of formulas over the scaling factors `F`
pub struct FormulaTable<F> {
    formulas: Vec<Formula<F>>,
}

impl<F> Default for FormulaTable<F> {
    fn default() -> Self {
        Self {
            formulas: Vec::new(),
        }
    }
}

impl<F> FormulaTable<F> {
    /// An empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a formula, keeping insertion order
    pub fn with(
        mut self,
        section: Section,
        name: &'static str,
        expected: &'static str,
        compute: FormulaFn<F>,
    ) -> Self {
        self.formulas.push(Formula {
            section,
            name,
            expected,
            compute,
        });
        self
    }

    /// The number of registered formulas
    pub fn len(&self) -> usize {
        self.formulas.len()
    }

    /// Whether no formula is registered
    pub fn is_empty(&self) -> bool {
        self.formulas.is_empty()
    }

    /// The formulas in registration order
    pub fn iter(&self) -> impl Iterator<Item = &Formula<F>> {
        self.formulas.iter()
    }

    /// Look up a formula by name
    pub fn get(&self, name: &str) -> Option<&Formula<F>> {
        self.formulas.iter().find(|formula| formula.name == name)
    }

    /// Evaluate every formula in registration order
    #[tracing::instrument(name = "Formula table", skip_all, fields(formulas = self.len()))]
    pub fn evaluate(
        &self,
        factors: &F,
        env: &Environment<'_>,
    ) -> Result<Vec<ValidationRecord>, DomainError> {
        self.formulas
            .iter()
            .map(|formula| {
                let record = formula.evaluate(factors, env)?;
                tracing::trace!(name = record.name, "Evaluated");
                Ok(record)
            })
            .collect()
    }
}

/// The comparison of one reconstructed constant against its reference value
#[derive(Clone, Debug)]
pub struct ValidationRecord {
    /// The report section of the constant
    pub section: Section,
    /// The name of the constant
    pub name: &'static str,
    /// The published reference value
    pub expected: Decimal,
    /// The value rebuilt from the scaling factors
    pub calculated: Decimal,
    /// `|calculated - expected| / |expected|`
    pub relative_error: Decimal,
}

/// A route from the input constants to a set of scaling factors, and the formulas built on them
pub trait Framework {
    /// The scaling factors derived by this framework
    type Factors: ScalingFactors;
    /// Human readable name used in reports
    const NAME: &'static str;

    /// Derive the scaling factors. Every factor is strictly positive.
    fn derive(env: &Environment<'_>) -> Result<Self::Factors, DomainError>;

    /// The formulas of this framework with their reference values
    fn table() -> FormulaTable<Self::Factors>;
}

/// The available frameworks
#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FrameworkKind {
    /// Scaling factors for length, mass, temperature and charge built from `hc` and `G`
    LengthMass,
    /// Scaling factors built on the mass of a photon at 1Hz
    QuantumOfMass,
}

impl FrameworkKind {
    /// Every framework, in report order
    pub const ALL: [Self; 2] = [FrameworkKind::LengthMass, FrameworkKind::QuantumOfMass];

    /// Derive the factors of this framework and evaluate its table
    pub fn reconstruct(&self, env: &Environment<'_>) -> Result<Reconstruction, DomainError> {
        match self {
            FrameworkKind::LengthMass => reconstruct::<LengthMass>(env),
            FrameworkKind::QuantumOfMass => reconstruct::<QuantumOfMass>(env),
        }
    }
}

/// The outcome of reconstructing a framework
#[derive(Clone, Debug)]
pub struct Reconstruction {
    /// The framework name
    pub framework: &'static str,
    /// The derived scaling factors with their names
    pub factors: Vec<(&'static str, Decimal)>,
    /// One record per formula, in registration order
    pub records: Vec<ValidationRecord>,
}

impl Reconstruction {
    /// The record for `name`, if the framework registers one
    pub fn record(&self, name: &str) -> Option<&ValidationRecord> {
        self.records.iter().find(|record| record.name == name)
    }
}

/// Derive the factors of `F` and evaluate its formula table
#[tracing::instrument(name = "Reconstruction", skip_all, fields(framework = F::NAME))]
pub fn reconstruct<F: Framework>(env: &Environment<'_>) -> Result<Reconstruction, DomainError> {
    let factors = F::derive(env)?;
    tracing::info!("Derived scaling factors");
    let records = F::table().evaluate(&factors, env)?;
    Ok(Reconstruction {
        framework: F::NAME,
        factors: factors.named(),
        records,
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use rescaler_decimal::{is_zero, DEFAULT_PRECISION};

    struct Unit(Decimal);

    impl ScalingFactors for Unit {
        fn named(&self) -> Vec<(&'static str, Decimal)> {
            vec![("unit", self.0.clone())]
        }
    }

    #[test]
    fn table_preserves_registration_order_and_compares() {
        let ctx = DecimalContext::new(DEFAULT_PRECISION).unwrap();
        let constants = ConstantSet::codata(&ctx).unwrap();
        let env = Environment::new(&constants, &ctx);
        let table = FormulaTable::new()
            .with(Section::Quantum, "double", "4", |f: &Unit, env| {
                Ok(&f.0 * env.int(2))
            })
            .with(Section::Planck, "square", "5", |f: &Unit, env| env.powi(&f.0, 2));

        let records = table.evaluate(&Unit(ctx.integer(2)), &env).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "double");
        assert!(is_zero(&records[0].relative_error));
        assert_eq!(records[1].section, Section::Planck);
        assert_eq!(records[1].relative_error, ctx.parse("0.2").unwrap());
    }

    #[test]
    fn domain_errors_abort_evaluation() {
        let ctx = DecimalContext::new(DEFAULT_PRECISION).unwrap();
        let constants = ConstantSet::codata(&ctx).unwrap();
        let env = Environment::new(&constants, &ctx);
        let table = FormulaTable::new().with(Section::Quantum, "inverse", "1", |f: &Unit, env| {
            env.powi(&f.0, -1)
        });
        assert!(matches!(
            table.evaluate(&Unit(ctx.zero()), &env),
            Err(DomainError::ZeroToNegativePower { .. })
        ));
    }

    #[test]
    fn zero_reference_value_is_a_domain_error() {
        let ctx = DecimalContext::new(DEFAULT_PRECISION).unwrap();
        let constants = ConstantSet::codata(&ctx).unwrap();
        let env = Environment::new(&constants, &ctx);
        let table = FormulaTable::new().with(Section::Quantum, "zero", "0", |f: &Unit, _| {
            Ok(f.0.clone())
        });
        assert!(matches!(
            table.evaluate(&Unit(ctx.one()), &env),
            Err(DomainError::ZeroReference)
        ));
    }
}
