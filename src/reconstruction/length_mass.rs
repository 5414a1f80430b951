//! # Length-mass framework
//!
//! Four scaling factors derived from `hc`, `G`, `k_B` and `ε₀`:
//! - `s_mass = √(hc / G)`,
//! - `s_length = hc / s_mass`,
//! - `s_temperature = s_length·s_mass / k_B`,
//! - `s_charge = √(s_length·s_mass·ε₀)`.
//!
//! The product `s_length·s_mass` is `hc`, so every constant carrying a single quantum of action is
//! a monomial in these four factors and `c`. All factors and constants are strictly positive, so
//! the divisions below never meet a zero denominator.

use super::{Environment, FormulaTable, Framework, ScalingFactors, Section};
use rescaler_decimal::{ensure_positive, Decimal, DomainError, Scientific};

/// The scaling factors of the length-mass framework
#[derive(Clone, Debug)]
pub struct LengthMassFactors {
    /// `s_length = hc / s_mass`
    pub length: Decimal,
    /// `s_mass = √(hc / G)`
    pub mass: Decimal,
    /// `s_temperature = s_length·s_mass / k_B`
    pub temperature: Decimal,
    /// `s_charge = √(s_length·s_mass·ε₀)`
    pub charge: Decimal,
}

impl LengthMassFactors {
    /// `s_length·s_mass`, which equals `hc`
    fn action(&self) -> Decimal {
        &self.length * &self.mass
    }
}

impl ScalingFactors for LengthMassFactors {
    fn named(&self) -> Vec<(&'static str, Decimal)> {
        vec![
            ("s_length", self.length.clone()),
            ("s_mass", self.mass.clone()),
            ("s_temperature", self.temperature.clone()),
            ("s_charge", self.charge.clone()),
        ]
    }
}

/// Constants rebuilt from length and mass scaling factors
pub struct LengthMass;

fn planck_length(f: &LengthMassFactors, env: &Environment<'_>) -> Result<Decimal, DomainError> {
    Ok(&f.length / (env.sqrt_two_pi()? * env.powi(env.c(), 2)?))
}

fn fine_structure(f: &LengthMassFactors, env: &Environment<'_>) -> Result<Decimal, DomainError> {
    Ok(env.powi(env.e(), 2)? / (env.int(2) * env.powi(&f.charge, 2)?))
}

impl Framework for LengthMass {
    type Factors = LengthMassFactors;
    const NAME: &'static str = "length-mass";

    fn derive(env: &Environment<'_>) -> Result<Self::Factors, DomainError> {
        let constants = env.constants;
        let hc = &constants.planck * &constants.speed_of_light;
        let mass = env.sqrt(&(&hc / &constants.gravitational))?;
        let length = &hc / &mass;
        let temperature = &length * &mass / &constants.boltzmann;
        let charge = env.sqrt(&(&length * &mass * &constants.epsilon_0))?;

        for (name, value) in [
            ("s_length", &length),
            ("s_mass", &mass),
            ("s_temperature", &temperature),
            ("s_charge", &charge),
        ] {
            ensure_positive(name, value)?;
        }
        tracing::debug!(
            s_length = %Scientific::new(&length, 12),
            s_mass = %Scientific::new(&mass, 12),
            "Length and mass factors"
        );

        Ok(LengthMassFactors {
            length,
            mass,
            temperature,
            charge,
        })
    }

    fn table() -> FormulaTable<Self::Factors> {
        use Section::*;

        FormulaTable::<Self::Factors>::new()
            .with(Quantum, "hc", "1.9864458571489287e-25", |f, _| {
                Ok(f.action())
            })
            .with(Quantum, "Planck constant", "6.62607015e-34", |f, env| {
                Ok(f.action() / env.c())
            })
            .with(Quantum, "Reduced Planck constant", "1.054571817e-34", |f, env| {
                Ok(f.action() / (env.two_pi() * env.c()))
            })
            .with(Quantum, "Gravitational constant", "6.67430e-11", |f, _| {
                Ok(&f.length / &f.mass)
            })
            .with(Planck, "Planck length", "1.616255e-35", planck_length)
            .with(Planck, "Planck time", "5.391247e-44", |f, env| {
                Ok(&f.length / (env.sqrt_two_pi()? * env.powi(env.c(), 3)?))
            })
            .with(Planck, "Planck mass", "2.176434e-8", |f, env| {
                Ok(&f.mass / env.sqrt_two_pi()?)
            })
            .with(Planck, "Planck charge", "1.875545e-18", |f, env| {
                Ok(&f.charge * env.sqrt(&env.int(2))?)
            })
            .with(Planck, "Planck temperature", "1.416784e32", |f, env| {
                Ok(env.powi(env.c(), 2)? * &f.temperature / (env.sqrt_two_pi()? * &f.length))
            })
            .with(Planck, "Planck angular momentum", "1.054571817e-34", |f, env| {
                Ok(f.action() / env.c() / env.two_pi())
            })
            .with(Planck, "Planck momentum", "6.5249", |f, env| {
                Ok(&f.mass * env.c() / env.sqrt_two_pi()?)
            })
            .with(Planck, "Planck energy", "1.9561e+09", |f, env| {
                Ok(&f.mass * env.powi(env.c(), 2)? / env.sqrt_two_pi()?)
            })
            .with(Planck, "Planck force", "1.2103e+44", |f, env| {
                Ok(&f.mass * env.powi(env.c(), 4)? / &f.length)
            })
            .with(Planck, "Planck power", "3.6283e+52", |f, env| {
                Ok(&f.mass * env.powi(env.c(), 5)? / &f.length)
            })
            .with(Planck, "Planck density", "5.1550e+96", |f, env| {
                Ok(&f.mass * env.powi(env.c(), 6)? * env.two_pi() / env.powi(&f.length, 3)?)
            })
            .with(Planck, "Planck area", "2.6121e-70", |f, env| {
                env.powi(&planck_length(f, env)?, 2)
            })
            .with(Planck, "Planck volume", "4.2217e-105", |f, env| {
                env.powi(&planck_length(f, env)?, 3)
            })
            .with(Planck, "Planck acceleration", "5.5608e+51", |f, env| {
                Ok(env.powi(env.c(), 2)? / planck_length(f, env)?)
            })
            .with(Planck, "Planck pressure", "4.6332e+113", |f, env| {
                Ok(&f.mass * env.powi(env.c(), 8)? * env.two_pi() / env.powi(&f.length, 3)?)
            })
            .with(Thermodynamic, "Boltzmann constant", "1.380649e-23", |f, _| {
                Ok(f.action() / &f.temperature)
            })
            .with(Thermodynamic, "Gas constant", "8.31446261815324", |f, env| {
                Ok(f.action() * &env.constants.avogadro / &f.temperature)
            })
            .with(Thermodynamic, "Stefan-Boltzmann constant", "5.670374419e-8", |f, env| {
                let radiance = f.action() / env.powi(&f.temperature, 4)?;
                Ok(env.powi(&env.pi(), 5)? * env.int(2) * radiance * env.c() / env.int(15))
            })
            .with(Thermodynamic, "Rydberg constant", "10973731.568157", |f, env| {
                let numerator = env.powi(env.e(), 4)?
                    * env.powi(env.c(), 2)?
                    * &env.constants.electron_mass;
                Ok(numerator / (env.int(8) * f.action() * env.powi(&f.charge, 4)?))
            })
            .with(Thermodynamic, "Quantum of circulation", "3.6369475467e-4", |f, env| {
                Ok(f.action() / (env.c() * env.int(2) * &env.constants.electron_mass))
            })
            .with(Thermodynamic, "Bohr magneton", "9.2740100657e-24", |f, env| {
                let denominator = env.int(4) * env.pi() * env.c() * &env.constants.electron_mass;
                Ok(f.action() * env.e() / denominator)
            })
            .with(Thermodynamic, "Nuclear magneton", "5.0507837393e-27", |f, env| {
                let denominator = env.int(4) * env.pi() * env.c() * &env.constants.proton_mass;
                Ok(f.action() * env.e() / denominator)
            })
            .with(Thermodynamic, "Classical electron radius", "2.8179403205e-15", |f, env| {
                let denominator =
                    &env.constants.electron_mass * env.powi(env.c(), 2)? * env.two_pi();
                Ok(f.action() * fine_structure(f, env)? / denominator)
            })
            .with(Thermodynamic, "Bohr radius", "5.29177210544e-11", |f, env| {
                let denominator = env.pi()
                    * env.powi(&(env.c() * env.e()), 2)?
                    * &env.constants.electron_mass;
                Ok(f.action() * env.powi(&f.charge, 2)? / denominator)
            })
            .with(Thermodynamic, "Cosmological constant", "1.089e-52", |f, env| {
                let denominator = &f.temperature * env.pi() * env.literal("9.8")?;
                Ok(env.powi(&f.length, 3)? / denominator)
            })
            .with(Electromagnetic, "Conductance quantum", "7.748091729e-5", |f, env| {
                Ok(env.int(2) * env.powi(env.e(), 2)? * env.c() / f.action())
            })
            .with(Electromagnetic, "Hartree energy", "4.3597447222060e-18", |f, env| {
                let numerator = env.powi(env.e(), 4)?
                    * &env.constants.electron_mass
                    * env.powi(env.c(), 2)?;
                Ok(numerator / (env.int(4) * env.powi(&f.charge, 4)?))
            })
            .with(Electromagnetic, "von Klitzing constant", "25812.807", |f, env| {
                Ok(f.action() / (env.powi(env.e(), 2)? * env.c()))
            })
            .with(
                Electromagnetic,
                "Characteristic impedance of vacuum",
                "376.730313412",
                |f, env| Ok(f.action() / (env.c() * env.powi(&f.charge, 2)?)),
            )
            .with(
                Electromagnetic,
                "Vacuum magnetic permeability",
                "1.25663706127e-6",
                |f, env| {
                    let denominator = env.powi(env.e(), 2)? * env.powi(env.c(), 2)?;
                    Ok(env.int(2) * fine_structure(f, env)? * f.action() / denominator)
                },
            )
            .with(Electromagnetic, "Josephson constant", "483597.8484e9", |f, env| {
                Ok(env.int(2) * env.e() * env.c() / f.action())
            })
            .with(Electromagnetic, "Vacuum permittivity", "8.854187817e-12", |f, env| {
                Ok(env.powi(&f.charge, 2)? / f.action())
            })
            .with(Electromagnetic, "Magnetic flux quantum", "2.067833848e-15", |f, env| {
                Ok(f.action() / (env.c() * env.int(2) * env.e()))
            })
            .with(Electromagnetic, "First radiation constant", "3.741771852e-16", |f, env| {
                Ok(env.two_pi() * f.action() * env.c())
            })
            .with(
                Electromagnetic,
                "First radiation constant for spectral radiance",
                "1.191042972e-16",
                |f, env| Ok(env.int(2) * f.action() * env.c()),
            )
            .with(Electromagnetic, "Second radiation constant", "1.438776877e-2", |f, _| {
                Ok(f.temperature.clone())
            })
            .with(Electromagnetic, "Fine-structure constant", "0.0072973525693", fine_structure)
    }
}
