//! # Rescaling
//!
//! Rules describing how a pair of constants moves when a single base unit is scaled by `s`.
//!
//! A rule carries integer exponents `(p_a, p_b)` such that `a' = a / s^p_a` and `b' = b / s^p_b`,
//! so the product moves as `a·b / s^(p_a + p_b)`. Because the product is a monomial in `s` each
//! rule also has a closed-form solution, which is used to cross-check the iterative search.

use crate::constants::ConstantSet;
use rescaler_decimal::{
    checked_div, ensure_positive, powi, root, Decimal, DecimalContext, DomainError,
};
use serde::Deserialize;
use std::{fmt, str::FromStr};

/// The product of two constants driven toward a target
#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Product {
    /// The Planck constant times the speed of light
    Hc,
    /// The gravitational constant times the speed of light
    Gc,
}

impl Product {
    /// Symbols for the two constants, and for their product
    pub fn symbols(&self) -> (&'static str, &'static str, &'static str) {
        match self {
            Product::Hc => ("h", "c", "hc"),
            Product::Gc => ("G", "c", "Gc"),
        }
    }

    /// SI units of the two constants, and of their product
    pub fn units(&self) -> (&'static str, &'static str, &'static str) {
        match self {
            Product::Hc => ("J s", "m / s", "J m"),
            Product::Gc => ("m^3 / kg s^2", "m / s", "m^4 / kg s^3"),
        }
    }
}

/// The base unit which is rescaled
#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Unit {
    /// The metre
    Metre,
    /// The kilogram
    Kilogram,
    /// The second
    Second,
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Unit::Metre => "metre",
            Unit::Kilogram => "kilogram",
            Unit::Second => "second",
        };
        f.pad(name)
    }
}

/// A rescaling of one base unit, viewed through its effect on a product of two constants
#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct Rescaling {
    product: Product,
    unit: Unit,
}

/// Whether the scale factor initially grows or shrinks
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    /// `s ← s·(1 + step)`
    Up,
    /// `s ← s·(1 - step)`
    Down,
}

impl Direction {
    pub(crate) fn flipped(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }
}

/// Two strictly positive constants whose product is rescaled
#[derive(Clone, Debug, PartialEq)]
pub struct QuantityPair {
    first: Decimal,
    second: Decimal,
}

impl QuantityPair {
    /// Pair two constants, failing unless both are strictly positive
    pub fn new(first: Decimal, second: Decimal) -> Result<Self, DomainError> {
        ensure_positive("the first quantity of the pair", &first)?;
        ensure_positive("the second quantity of the pair", &second)?;
        Ok(Self { first, second })
    }

    /// The constant scaled by the first exponent
    pub fn first(&self) -> &Decimal {
        &self.first
    }

    /// The constant scaled by the second exponent
    pub fn second(&self) -> &Decimal {
        &self.second
    }

    /// The unscaled product `a·b`
    pub fn product(&self, ctx: &DecimalContext) -> Decimal {
        ctx.round(&self.first * &self.second)
    }
}

impl Rescaling {
    /// `h' = h / s^2`, `c' = c / s`
    pub const HC_METRE: Self = Self::new(Product::Hc, Unit::Metre);
    /// `h' = h / s`, `c' = c`
    pub const HC_KILOGRAM: Self = Self::new(Product::Hc, Unit::Kilogram);
    /// `h' = h·s`, `c' = c·s`
    pub const HC_SECOND: Self = Self::new(Product::Hc, Unit::Second);
    /// `G' = G / s^3`, `c' = c / s`
    pub const GC_METRE: Self = Self::new(Product::Gc, Unit::Metre);
    /// `G' = G·s`, `c' = c`
    pub const GC_KILOGRAM: Self = Self::new(Product::Gc, Unit::Kilogram);
    /// `G' = G·s^2`, `c' = c·s`
    pub const GC_SECOND: Self = Self::new(Product::Gc, Unit::Second);

    /// Every supported rule
    pub const ALL: [Self; 6] = [
        Self::HC_METRE,
        Self::HC_KILOGRAM,
        Self::HC_SECOND,
        Self::GC_METRE,
        Self::GC_KILOGRAM,
        Self::GC_SECOND,
    ];

    /// The rule rescaling `unit` as seen through `product`
    pub const fn new(product: Product, unit: Unit) -> Self {
        Self { product, unit }
    }

    /// The product the rule acts on
    pub fn product(&self) -> Product {
        self.product
    }

    /// The rescaled base unit
    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// The exponents `(p_a, p_b)` in `a' = a / s^p_a`, `b' = b / s^p_b`.
    ///
    /// A unit `u` is replaced by `s·u`, so a constant whose dimension contains `u^k` has its
    /// numerical value divided by `s^k`. For example `h` carries `kg m^2 s^-1`.
    pub fn exponents(&self) -> (i64, i64) {
        match (self.product, self.unit) {
            (Product::Hc, Unit::Metre) => (2, 1),
            (Product::Hc, Unit::Kilogram) => (1, 0),
            (Product::Hc, Unit::Second) => (-1, -1),
            (Product::Gc, Unit::Metre) => (3, 1),
            (Product::Gc, Unit::Kilogram) => (-1, 0),
            (Product::Gc, Unit::Second) => (-2, -1),
        }
    }

    /// The exponent of `s` dividing the product
    pub fn total_exponent(&self) -> i64 {
        let (first, second) = self.exponents();
        first + second
    }

    /// Which way the search first moves the scale factor.
    ///
    /// A positive difference from the target should shrink the product, which for a positive total
    /// exponent means growing `s`.
    pub fn initial_direction(&self) -> Direction {
        if self.total_exponent() < 0 {
            Direction::Down
        } else {
            Direction::Up
        }
    }

    /// The two constants of the rescaled product, taken from `constants`
    pub fn pair(&self, constants: &ConstantSet) -> Result<QuantityPair, DomainError> {
        let first = match self.product {
            Product::Hc => constants.planck.clone(),
            Product::Gc => constants.gravitational.clone(),
        };
        QuantityPair::new(first, constants.speed_of_light.clone())
    }

    /// Apply a scale factor to the pair, returning `(a', b')`
    pub fn apply(
        &self,
        pair: &QuantityPair,
        scale_factor: &Decimal,
        ctx: &DecimalContext,
    ) -> Result<(Decimal, Decimal), DomainError> {
        let (p_first, p_second) = self.exponents();
        let first = checked_div(
            pair.first(),
            &powi(scale_factor, p_first, ctx)?,
            "the rescaled first quantity",
        )?;
        let second = checked_div(
            pair.second(),
            &powi(scale_factor, p_second, ctx)?,
            "the rescaled second quantity",
        )?;
        Ok((ctx.round(first), ctx.round(second)))
    }

    /// The exact scale factor `s = (a·b / target)^(1 / (p_a + p_b))`
    pub fn closed_form(
        &self,
        pair: &QuantityPair,
        target: &Decimal,
        ctx: &DecimalContext,
    ) -> Result<Decimal, DomainError> {
        ensure_positive("the target product", target)?;
        let total = self.total_exponent();
        if total == 0 {
            return Err(DomainError::DivisionByZero {
                context: format!("the closed form of the {} rule", self),
            });
        }
        let ratio = checked_div(&pair.product(ctx), target, "the closed form")?;
        root(&ratio, total, ctx)
    }
}

impl fmt::Display for Rescaling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (_, _, product) = self.product.symbols();
        f.pad(&format!("{} via the {}", product, self.unit))
    }
}

impl FromStr for Rescaling {
    type Err = String;

    /// Parse a rule name such as `hc-metre` or `gc-second`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised = s.trim().to_ascii_lowercase();
        let (product, unit) = normalised
            .split_once('-')
            .ok_or_else(|| format!("`{}` is not of the form `<product>-<unit>`", s))?;
        let product = match product {
            "hc" => Product::Hc,
            "gc" => Product::Gc,
            other => return Err(format!("unknown product `{}`, expected `hc` or `gc`", other)),
        };
        let unit = match unit {
            "metre" | "meter" => Unit::Metre,
            "kilogram" => Unit::Kilogram,
            "second" => Unit::Second,
            other => {
                return Err(format!(
                    "unknown unit `{}`, expected `metre`, `kilogram` or `second`",
                    other
                ))
            }
        };
        Ok(Self::new(product, unit))
    }
}

impl TryFrom<String> for Rescaling {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
