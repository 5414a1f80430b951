//! # Constants
//!
//! Reference values of the physical constants used as inputs to a calculation.
//!
//! Values are held as decimal literals rather than `f64` so they enter the calculation exactly as
//! published. They are collected into an immutable [`ConstantSet`] at the working precision, which
//! is passed explicitly to everything that needs it.

use rescaler_decimal::{ensure_positive, Decimal, DecimalContext, DomainError};
use serde::Deserialize;

/// The Planck constant in J s
pub const PLANCK: &str = "6.62607015e-34";
/// The speed of light in m / s
pub const SPEED_OF_LIGHT: &str = "299792458";
/// The Newtonian constant of gravitation in m^3 / kg s^2
pub const GRAVITATIONAL: &str = "6.67430e-11";
/// The Boltzmann constant in J / K
pub const BOLTZMANN: &str = "1.380649e-23";
/// Single electron charge in C
pub const ELECTRON_CHARGE: &str = "1.602176634e-19";
/// Permittivity of free space in F / m
pub const EPSILON_0: &str = "8.854187817e-12";
/// Single electron mass in kg
pub const ELECTRON_MASS: &str = "9.1093837139e-31";
/// Proton mass in kg
pub const PROTON_MASS: &str = "1.67262192595e-27";
/// Muon mass in kg
pub const MUON_MASS: &str = "1.883531627e-28";
/// The Avogadro constant in 1 / mol
pub const AVOGADRO: &str = "6.02214076e23";

/// Literal values of the input constants, as read from configuration
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ConstantLiterals {
    /// The Planck constant in J s
    pub planck: String,
    /// The speed of light in m / s
    pub speed_of_light: String,
    /// The Newtonian constant of gravitation in m^3 / kg s^2
    pub gravitational: String,
    /// The Boltzmann constant in J / K
    pub boltzmann: String,
    /// The elementary charge in C
    pub electron_charge: String,
    /// The vacuum permittivity in F / m
    pub epsilon_0: String,
    /// The electron mass in kg
    pub electron_mass: String,
    /// The proton mass in kg
    pub proton_mass: String,
    /// The muon mass in kg
    pub muon_mass: String,
    /// The Avogadro constant in 1 / mol
    pub avogadro: String,
}

impl Default for ConstantLiterals {
    fn default() -> Self {
        Self {
            planck: PLANCK.into(),
            speed_of_light: SPEED_OF_LIGHT.into(),
            gravitational: GRAVITATIONAL.into(),
            boltzmann: BOLTZMANN.into(),
            electron_charge: ELECTRON_CHARGE.into(),
            epsilon_0: EPSILON_0.into(),
            electron_mass: ELECTRON_MASS.into(),
            proton_mass: PROTON_MASS.into(),
            muon_mass: MUON_MASS.into(),
            avogadro: AVOGADRO.into(),
        }
    }
}

/// The input constants of a calculation at the working precision.
///
/// Every member is strictly positive.
#[derive(Clone, Debug)]
pub struct ConstantSet {
    /// The Planck constant in J s
    pub planck: Decimal,
    /// The speed of light in m / s
    pub speed_of_light: Decimal,
    /// The Newtonian constant of gravitation in m^3 / kg s^2
    pub gravitational: Decimal,
    /// The Boltzmann constant in J / K
    pub boltzmann: Decimal,
    /// The elementary charge in C
    pub electron_charge: Decimal,
    /// The vacuum permittivity in F / m
    pub epsilon_0: Decimal,
    /// The electron mass in kg
    pub electron_mass: Decimal,
    /// The proton mass in kg
    pub proton_mass: Decimal,
    /// The muon mass in kg
    pub muon_mass: Decimal,
    /// The Avogadro constant in 1 / mol
    pub avogadro: Decimal,
}

impl ConstantSet {
    /// Parse and validate a set of literals
    pub fn from_literals(
        literals: &ConstantLiterals,
        ctx: &DecimalContext,
    ) -> Result<Self, DomainError> {
        let parse = |name: &str, literal: &str| -> Result<Decimal, DomainError> {
            let value = ctx.parse(literal)?;
            ensure_positive(name, &value)?;
            Ok(value)
        };

        Ok(Self {
            planck: parse("the Planck constant", &literals.planck)?,
            speed_of_light: parse("the speed of light", &literals.speed_of_light)?,
            gravitational: parse("the gravitational constant", &literals.gravitational)?,
            boltzmann: parse("the Boltzmann constant", &literals.boltzmann)?,
            electron_charge: parse("the electron charge", &literals.electron_charge)?,
            epsilon_0: parse("the vacuum permittivity", &literals.epsilon_0)?,
            electron_mass: parse("the electron mass", &literals.electron_mass)?,
            proton_mass: parse("the proton mass", &literals.proton_mass)?,
            muon_mass: parse("the muon mass", &literals.muon_mass)?,
            avogadro: parse("the Avogadro constant", &literals.avogadro)?,
        })
    }

    /// The CODATA reference values
    pub fn codata(ctx: &DecimalContext) -> Result<Self, DomainError> {
        Self::from_literals(&ConstantLiterals::default(), ctx)
    }
}
