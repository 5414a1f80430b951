//! # Quantum-of-mass framework
//!
//! Builds every constant from the mass equivalent of a photon at 1Hz, `Hz_kg = h / c²`, together
//! with:
//! - `K_Hz = k_B / (Hz_kg·c²)`, the frequency equivalent of one Kelvin,
//! - `C_kg = 1 / c²`, the mass equivalent of one Joule,
//! - `s_grav = hc / G`,
//! - `s_lum = Hz_kg·540e12·683`, the mass scale of the candela definition.
//!
//! Gravity enters through the Planck time built on `h`, `t_P = √(G·Hz_kg / c³)`. Reduced Planck
//! units divide by `√(2π)`, while their `h` variants do not. Electromagnetic constants use the
//! magnetic force constant `μ₀ / 4π = 1e-7` in place of `ε₀`.
//!
//! All factors and constants are strictly positive, so the divisions below never meet a zero
//! denominator.

use super::{Environment, FormulaTable, Framework, ScalingFactors, Section};
use rescaler_decimal::{ensure_positive, Decimal, DomainError, Scientific};

const AMPERE_FORCE: &str = "1e-7"; // μ₀ / 4π in N / A^2
const LUMINOUS_FREQUENCY: &str = "540e12"; // Frequency of the candela definition in Hz
const LUMINOUS_EFFICACY: &str = "683"; // Luminous efficacy in lm / W
const FERMI_COUPLING: &str = "0.000011663787"; // G_F / (ħc)^3 in GeV^-2
const FERMI_SCALE: &str = "3.1630287251813683e+25"; // Converts the Fermi coupling to SI
const COSMOLOGICAL_RATIO: &str = "7.622593229";

/// The scaling factors of the quantum-of-mass framework
#[derive(Clone, Debug)]
pub struct QuantumOfMassFactors {
    /// `Hz_kg = h / c²`
    pub hz_kg: Decimal,
    /// `K_Hz = k_B / (Hz_kg·c²)`
    pub k_hz: Decimal,
    /// `C_kg = 1 / c²`
    pub c_kg: Decimal,
    /// `s_grav = hc / G`
    pub s_grav: Decimal,
    /// `s_lum = Hz_kg·540e12·683`
    pub s_lum: Decimal,
}

impl ScalingFactors for QuantumOfMassFactors {
    fn named(&self) -> Vec<(&'static str, Decimal)> {
        vec![
            ("Hz_kg", self.hz_kg.clone()),
            ("K_Hz", self.k_hz.clone()),
            ("C_kg", self.c_kg.clone()),
            ("s_grav", self.s_grav.clone()),
            ("s_lum", self.s_lum.clone()),
        ]
    }
}

/// Constants rebuilt from the mass of a photon at 1Hz
pub struct QuantumOfMass;

/// `G·Hz_kg / c³`, the square of the Planck time built on `h`
fn gravitational_time_squared(
    f: &QuantumOfMassFactors,
    env: &Environment<'_>,
) -> Result<Decimal, DomainError> {
    Ok(&env.constants.gravitational * &f.hz_kg / env.powi(env.c(), 3)?)
}

fn planck_time_h(f: &QuantumOfMassFactors, env: &Environment<'_>) -> Result<Decimal, DomainError> {
    env.sqrt(&gravitational_time_squared(f, env)?)
}

fn planck_length(f: &QuantumOfMassFactors, env: &Environment<'_>) -> Result<Decimal, DomainError> {
    Ok(planck_length_h(f, env)? / env.sqrt_two_pi()?)
}

fn planck_length_h(
    f: &QuantumOfMassFactors,
    env: &Environment<'_>,
) -> Result<Decimal, DomainError> {
    Ok(planck_time_h(f, env)? * env.c())
}

fn planck_mass_h(f: &QuantumOfMassFactors, env: &Environment<'_>) -> Result<Decimal, DomainError> {
    Ok(&f.hz_kg / planck_time_h(f, env)?)
}

fn reduced_planck(f: &QuantumOfMassFactors, env: &Environment<'_>) -> Result<Decimal, DomainError> {
    Ok(&f.hz_kg * env.powi(env.c(), 2)? / env.two_pi())
}

fn ampere_force(env: &Environment<'_>) -> Result<Decimal, DomainError> {
    env.literal(AMPERE_FORCE)
}

impl Framework for QuantumOfMass {
    type Factors = QuantumOfMassFactors;
    const NAME: &'static str = "quantum-of-mass";

    fn derive(env: &Environment<'_>) -> Result<Self::Factors, DomainError> {
        let constants = env.constants;
        let c_squared = env.powi(env.c(), 2)?;
        let hz_kg = &constants.planck / &c_squared;
        let k_hz = &constants.boltzmann / (&hz_kg * &c_squared);
        let c_kg = env.int(1) / &c_squared;
        let s_grav = &constants.planck * env.c() / &constants.gravitational;
        let s_lum =
            &hz_kg * env.literal(LUMINOUS_FREQUENCY)? * env.literal(LUMINOUS_EFFICACY)?;

        for (name, value) in [
            ("Hz_kg", &hz_kg),
            ("K_Hz", &k_hz),
            ("C_kg", &c_kg),
            ("s_grav", &s_grav),
            ("s_lum", &s_lum),
        ] {
            ensure_positive(name, value)?;
        }
        tracing::debug!(hz_kg = %Scientific::new(&hz_kg, 12), "Quantum of mass");

        Ok(QuantumOfMassFactors {
            hz_kg,
            k_hz,
            c_kg,
            s_grav,
            s_lum,
        })
    }

    fn table() -> FormulaTable<Self::Factors> {
        use Section::*;

        FormulaTable::<Self::Factors>::new()
            .with(Quantum, "Planck constant, energy at 1Hz", "6.62607015e-34", |f, env| {
                Ok(&f.hz_kg * env.powi(env.c(), 2)?)
            })
            .with(Quantum, "hc", "1.9864458571489287e-25", |f, env| {
                Ok(&f.hz_kg * env.powi(env.c(), 3)?)
            })
            .with(Quantum, "Momentum at 1Hz", "2.2102190943042336e-42", |f, env| {
                Ok(&f.hz_kg * env.c())
            })
            .with(Quantum, "Mass at 1Hz", "7.3724973238127079e-51", |f, _| {
                Ok(f.hz_kg.clone())
            })
            .with(Quantum, "Reduced Planck constant", "1.054571817e-34", reduced_planck)
            .with(Quantum, "Gravitational constant", "6.67430e-11", |f, env| {
                Ok(gravitational_time_squared(f, env)? * env.powi(env.c(), 3)? / &f.hz_kg)
            })
            .with(Quantum, "Gravitational coupling constant", "1.752e-45", |f, env| {
                let numerator = env.powi(&env.constants.electron_mass, 2)?
                    * env.two_pi()
                    * gravitational_time_squared(f, env)?;
                Ok(numerator / env.powi(&f.hz_kg, 2)?)
            })
            .with(Planck, "Planck length", "1.616255e-35", planck_length)
            .with(Planck, "Planck length (h)", "4.05135054323e-35", planck_length_h)
            .with(Planck, "Planck time", "5.391247e-44", |f, env| {
                Ok(planck_time_h(f, env)? / env.sqrt_two_pi()?)
            })
            .with(Planck, "Planck time (h)", "1.3513850782846e-43", planck_time_h)
            .with(Planck, "Planck mass", "2.176434e-8", |f, env| {
                Ok(planck_mass_h(f, env)? / env.sqrt_two_pi()?)
            })
            .with(Planck, "Planck mass (h)", "5.45551186133E-8", planck_mass_h)
            .with(Planck, "Planck charge", "1.875545e-18", |f, env| {
                env.sqrt(&(&f.hz_kg * env.c() / (ampere_force(env)? * env.two_pi())))
            })
            .with(Planck, "Planck charge (h)", "4.70129672995E-18", |f, env| {
                env.sqrt(&(&f.hz_kg * env.c() / ampere_force(env)?))
            })
            .with(Planck, "Planck temperature", "1.416784e32", |f, env| {
                Ok(env.int(1) / (planck_time_h(f, env)? * &f.k_hz * env.sqrt_two_pi()?))
            })
            .with(Planck, "Planck temperature (h)", "3.55135123991E+32", |f, env| {
                Ok(env.int(1) / (planck_time_h(f, env)? * &f.k_hz))
            })
            .with(Planck, "Planck angular momentum", "1.054571817e-34", reduced_planck)
            .with(Planck, "Planck momentum", "6.5249", |f, env| {
                Ok(planck_mass_h(f, env)? * env.c() / env.sqrt_two_pi()?)
            })
            .with(Planck, "Planck momentum (h)", "16.3552131056", |f, env| {
                Ok(planck_mass_h(f, env)? * env.c())
            })
            .with(Planck, "Planck energy", "1.9561e+09", |f, env| {
                Ok(planck_mass_h(f, env)? * env.powi(env.c(), 2)? / env.sqrt_two_pi()?)
            })
            .with(Planck, "Planck energy (h)", "4903169538.03", |f, env| {
                Ok(planck_mass_h(f, env)? * env.powi(env.c(), 2)?)
            })
            .with(Planck, "Planck force", "1.2103e+44", |f, env| {
                Ok(env.c() * &f.hz_kg / gravitational_time_squared(f, env)?)
            })
            .with(Planck, "Planck power", "3.6283e+52", |f, env| {
                Ok(env.powi(env.c(), 2)? * &f.hz_kg / gravitational_time_squared(f, env)?)
            })
            .with(Planck, "Planck density", "5.1550e+96", |f, env| {
                let denominator =
                    env.powi(env.c(), 3)? * env.powi(&gravitational_time_squared(f, env)?, 2)?;
                Ok(&f.hz_kg * env.two_pi() / denominator)
            })
            .with(Planck, "Planck density (h)", "8.20419620181E+95", |f, env| {
                let denominator =
                    env.powi(env.c(), 3)? * env.powi(&gravitational_time_squared(f, env)?, 2)?;
                Ok(&f.hz_kg / denominator)
            })
            .with(Planck, "Planck area", "2.6121e-70", |f, env| {
                env.powi(&planck_length(f, env)?, 2)
            })
            .with(Planck, "Planck area (h)", "1.64134412242E-69", |f, env| {
                env.powi(&planck_length_h(f, env)?, 2)
            })
            .with(Planck, "Planck volume", "4.2217e-105", |f, env| {
                env.powi(&planck_length(f, env)?, 3)
            })
            .with(Planck, "Planck volume (h)", "6.64966040199E-104", |f, env| {
                env.powi(&planck_length_h(f, env)?, 3)
            })
            .with(Planck, "Planck acceleration", "5.5608e+51", |f, env| {
                Ok(env.powi(env.c(), 2)? / planck_length(f, env)?)
            })
            .with(Planck, "Planck acceleration (h)", "2.21840882231E+51", |f, env| {
                Ok(env.powi(env.c(), 2)? / planck_length_h(f, env)?)
            })
            .with(Planck, "Planck pressure", "4.6332e+113", |f, env| {
                let denominator = env.c() * env.powi(&gravitational_time_squared(f, env)?, 2)?;
                Ok(&f.hz_kg * env.two_pi() / denominator)
            })
            .with(Planck, "Planck pressure (h)", "7.37356382375E+112", |f, env| {
                let denominator = env.c() * env.powi(&gravitational_time_squared(f, env)?, 2)?;
                Ok(&f.hz_kg / denominator)
            })
            .with(Thermodynamic, "Boltzmann constant", "1.380649e-23", |f, env| {
                Ok(&f.k_hz * &f.hz_kg * env.powi(env.c(), 2)?)
            })
            .with(Thermodynamic, "Gas constant", "8.31446261815324", |f, env| {
                Ok(&env.constants.avogadro * &f.k_hz * &f.hz_kg * env.powi(env.c(), 2)?)
            })
            .with(Thermodynamic, "Stefan-Boltzmann constant", "5.670374419e-8", |f, env| {
                let numerator = env.int(2) * env.powi(&env.pi(), 5)? * env.powi(&f.k_hz, 4)?;
                Ok(numerator * &f.hz_kg / env.int(15))
            })
            .with(Thermodynamic, "Rydberg constant", "10973731.568157", |f, env| {
                let numerator = env.powi(env.e(), 4)?
                    * env.int(2)
                    * env.powi(&env.pi(), 2)?
                    * &env.constants.electron_mass
                    * env.powi(&ampere_force(env)?, 2)?;
                Ok(numerator / (env.powi(&f.hz_kg, 3)? * env.powi(env.c(), 3)?))
            })
            .with(Thermodynamic, "Quantum of circulation", "3.6369475467e-4", |f, env| {
                let denominator = env.int(2) * &env.constants.electron_mass;
                Ok(&f.hz_kg * env.powi(env.c(), 2)? / denominator)
            })
            .with(Thermodynamic, "Bohr magneton", "9.2740100657e-24", |f, env| {
                let denominator = env.int(4) * env.pi() * &env.constants.electron_mass;
                Ok(&f.hz_kg * env.powi(env.c(), 2)? * env.e() / denominator)
            })
            .with(Thermodynamic, "Nuclear magneton", "5.0507837393e-27", |f, env| {
                let denominator = env.int(4) * env.pi() * &env.constants.proton_mass;
                Ok(&f.hz_kg * env.powi(env.c(), 2)? * env.e() / denominator)
            })
            .with(Thermodynamic, "Classical electron radius", "2.8179403205e-15", |_, env| {
                Ok(env.powi(env.e(), 2)? * ampere_force(env)? / &env.constants.electron_mass)
            })
            .with(Thermodynamic, "Bohr radius", "5.29177210544e-11", |f, env| {
                let denominator = env.powi(env.e(), 2)?
                    * env.int(4)
                    * env.powi(&env.pi(), 2)?
                    * &env.constants.electron_mass
                    * ampere_force(env)?;
                Ok(env.powi(&f.hz_kg, 2)? * env.powi(env.c(), 2)? / denominator)
            })
            .with(Thermodynamic, "Thomson cross section", "6.6524587051e-29", |_, env| {
                let numerator = env.int(8)
                    * env.pi()
                    * env.powi(env.e(), 4)?
                    * env.powi(&ampere_force(env)?, 2)?;
                Ok(numerator / (env.powi(&env.constants.electron_mass, 2)? * env.int(3)))
            })
            .with(Thermodynamic, "Cosmological constant", "1.089e-52", |f, env| {
                let ratio = &env.constants.proton_mass / &env.constants.muon_mass
                    * env.literal(COSMOLOGICAL_RATIO)?;
                Ok(&f.hz_kg / ratio)
            })
            .with(Thermodynamic, "Fermi coupling constant", "1.1663787e-5", |f, env| {
                let coupling = env.literal(FERMI_COUPLING)? / env.literal(FERMI_SCALE)?;
                Ok(coupling / (reduced_planck(f, env)? * env.c()))
            })
            .with(Electromagnetic, "Conductance quantum", "7.748091729e-5", |f, env| {
                Ok(env.int(2) * env.powi(env.e(), 2)? / (&f.hz_kg * env.powi(env.c(), 2)?))
            })
            .with(Electromagnetic, "Hartree energy", "4.3597447222060e-18", |f, env| {
                let numerator = env.powi(env.e(), 4)?
                    * env.int(4)
                    * env.powi(&env.pi(), 2)?
                    * &env.constants.electron_mass
                    * env.powi(&ampere_force(env)?, 2)?;
                Ok(numerator / env.powi(&f.hz_kg, 2)?)
            })
            .with(Electromagnetic, "von Klitzing constant", "25812.807", |f, env| {
                Ok(&f.hz_kg * env.powi(env.c(), 2)? / env.powi(env.e(), 2)?)
            })
            .with(
                Electromagnetic,
                "Characteristic impedance of vacuum",
                "376.730313412",
                |_, env| Ok(env.int(4) * env.pi() * ampere_force(env)? * env.c()),
            )
            .with(
                Electromagnetic,
                "Vacuum magnetic permeability",
                "1.25663706127e-6",
                |_, env| Ok(env.int(4) * env.pi() * ampere_force(env)?),
            )
            .with(Electromagnetic, "Coulomb permittivity", "1.112650056e-10", |f, env| {
                Ok(&f.c_kg / ampere_force(env)?)
            })
            .with(Electromagnetic, "Josephson constant", "483597.8484e9", |f, env| {
                Ok(env.int(2) * env.e() / (&f.hz_kg * env.powi(env.c(), 2)?))
            })
            .with(Electromagnetic, "Vacuum permittivity", "8.854187817e-12", |_, env| {
                let denominator =
                    env.int(4) * env.pi() * ampere_force(env)? * env.powi(env.c(), 2)?;
                Ok(env.int(1) / denominator)
            })
            .with(Electromagnetic, "Magnetic flux quantum", "2.067833848e-15", |f, env| {
                Ok(&f.hz_kg * env.powi(env.c(), 2)? / (env.int(2) * env.e()))
            })
            .with(Electromagnetic, "First radiation constant", "3.741771852e-16", |f, env| {
                Ok(env.two_pi() * &f.hz_kg * env.powi(env.c(), 4)?)
            })
            .with(
                Electromagnetic,
                "First radiation constant for spectral radiance",
                "1.191042972e-16",
                |f, env| Ok(env.int(2) * &f.hz_kg * env.powi(env.c(), 4)?),
            )
            .with(Electromagnetic, "Second radiation constant", "1.438776877e-2", |f, env| {
                Ok(env.c() / &f.k_hz)
            })
            .with(Electromagnetic, "Fine-structure constant", "0.0072973525693", |f, env| {
                let numerator = env.two_pi() * env.powi(env.e(), 2)? * ampere_force(env)?;
                Ok(numerator / (&f.hz_kg * env.c()))
            })
            .with(Electromagnetic, "Coulomb constant", "8.9875517862e9", |_, env| {
                Ok(env.powi(env.c(), 2)? * ampere_force(env)?)
            })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::constants::ConstantSet;
    use crate::reconstruction::{reconstruct, Reconstruction};
    use rescaler_decimal::{to_f64, DecimalContext, DEFAULT_PRECISION};

    fn reconstruction() -> Reconstruction {
        let ctx = DecimalContext::new(DEFAULT_PRECISION).unwrap();
        let constants = ConstantSet::codata(&ctx).unwrap();
        reconstruct::<QuantumOfMass>(&Environment::new(&constants, &ctx)).unwrap()
    }

    fn relative_error(reconstruction: &Reconstruction, name: &str) -> f64 {
        to_f64(&reconstruction.record(name).unwrap().relative_error)
    }

    #[test]
    fn planck_units_match_reference_values() {
        let reconstruction = reconstruction();
        for name in ["Planck length", "Planck mass", "Planck time"] {
            assert!(relative_error(&reconstruction, name) < 1e-4, "{} is off", name);
        }
    }

    #[test]
    fn unreduced_planck_units_differ_by_root_two_pi() {
        let reconstruction = reconstruction();
        let reduced = to_f64(&reconstruction.record("Planck time").unwrap().calculated);
        let unreduced = to_f64(&reconstruction.record("Planck time (h)").unwrap().calculated);
        approx::assert_relative_eq!(
            unreduced / reduced,
            std::f64::consts::TAU.sqrt(),
            max_relative = 1e-14
        );
        for name in ["Planck length (h)", "Planck mass (h)", "Planck energy (h)"] {
            assert!(relative_error(&reconstruction, name) < 1e-10, "{} is off", name);
        }
    }

    #[test]
    fn inputs_are_recovered_exactly() {
        let reconstruction = reconstruction();
        for name in [
            "Planck constant, energy at 1Hz",
            "hc",
            "Gravitational constant",
            "Boltzmann constant",
        ] {
            assert!(relative_error(&reconstruction, name) < 1e-90, "{} is off", name);
        }
    }

    #[test]
    fn every_reference_value_is_reproduced_to_a_part_in_a_thousand() {
        let reconstruction = reconstruction();
        assert_eq!(reconstruction.records.len(), QuantumOfMass::table().len());
        for record in &reconstruction.records {
            assert!(to_f64(&record.relative_error) < 1e-3, "{} is off", record.name);
        }
    }

    #[test]
    fn factors_are_named_in_order() {
        let reconstruction = reconstruction();
        let names = reconstruction
            .factors
            .iter()
            .map(|(name, _)| *name)
            .collect::<Vec<_>>();
        assert_eq!(names, ["Hz_kg", "K_Hz", "C_kg", "s_grav", "s_lum"]);
        approx::assert_relative_eq!(
            to_f64(&reconstruction.factors[0].1),
            7.3724973238127079e-51,
            max_relative = 1e-15
        );
    }
}
