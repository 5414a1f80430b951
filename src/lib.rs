// Copyright 2022 Chris Gubbin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Rescaler explores how the fundamental physical constants move when the base SI units are
//! rescaled
//!
//! # Overview
//! If the metre, kilogram or second were redefined by a factor `s`, every constant with that unit
//! in its dimension would change by a power of `s`. Rescaler asks two kinds of question of this:
//!
//! - **Search**: which factor `s` takes a product of two constants, for example `h·c`, to a chosen
//! target value? This is answered by an adaptive step-halving line search, cross-checked against
//! the closed form of the rescaling rule.
//! - **Reconstruction**: if a small number of scaling factors are derived from `h`, `c`, `G` and
//! `k_B`, how well do monomials in those factors reproduce the textbook values of the Planck units,
//! the electromagnetic constants and the thermodynamic constants?
//!
//! Ratios between the quantities involved span more than 160 orders of magnitude, so all arithmetic
//! is carried out in arbitrary precision decimal floats provided by the `rescaler-decimal` crate.
//!
//! # Usage
//! Rescaler is a command line tool. Running it with no arguments performs the default `h·c`
//! search sweep and both reconstructions. The defaults live in `.config/default.toml` and may be
//! overridden by a file passed with `--config`, or by environment variables:
//!
//! ```toml
//! [search]
//! rules = ["hc-metre", "gc-second"]
//! targets = ["unscaled", "2e-25", "1.0"]
//! ```

#![warn(missing_docs)]

/// The command line application, configuration, tracing and report printing
pub mod app;

/// Reference values of the physical constants
pub mod constants;

/// Error handling
mod error;

/// Closed-form reconstruction of derived constants from unit scaling factors
pub mod reconstruction;

/// The convergence search for a unit scale factor
pub mod search;

pub use error::RescalerError;
