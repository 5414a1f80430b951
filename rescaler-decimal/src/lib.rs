// Copyright 2022 Chris Gubbin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! High precision decimal arithmetic for unit rescaling calculations
//!
//! Ratios between physical constants span tens of orders of magnitude, from the mass of a photon
//! at 1Hz (~1e-51 kg) to the Planck pressure (~1e113 Pa). Chaining multiplications and divisions
//! across that range in `f64` accumulates relative error well above the `1e-15` tolerances used
//! by the convergence search, so every quantity is carried as a decimal float with a configurable
//! number of significant digits.
//!
//! The crate is a thin layer over [`dashu_float::DBig`]:
//! - [`DecimalContext`] fixes the working precision and builds values from literals,
//! - [`power`], [`powi`], [`sqrt`] and [`cbrt`] raise values to powers with explicit domain checks,
//! - [`relative_difference`], [`is_close`] and [`checked_div`] compare and divide values,
//! - [`Scientific`] renders values in scientific notation for reports.

mod context;
mod error;
mod format;
mod ops;
mod power;

pub use context::*;
pub use error::*;
pub use format::*;
pub use ops::*;
pub use power::*;

/// The decimal float type used throughout the calculation
pub type Decimal = dashu_float::DBig;
