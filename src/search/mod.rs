//! # Search
//!
//! Finds the factor `s` by which a base unit must be rescaled so that the product of two constants
//! reaches a target value.
//!
//! The search is an adaptive line search on `s`. Starting from `s = 1` with a step of one half it
//! multiplies `s` by `1 ± step` on every iteration. Whenever the sign of `product - target` changes
//! the search has overshot, so it reverses direction and halves the step. The loop ends when the
//! product is within a relative tolerance of the target, or fails once the iteration budget is
//! spent.

mod convergence;
mod rescaling;
mod state;

pub use convergence::{Convergence, DEFAULT_MAXIMUM_ITERATIONS, DEFAULT_TOLERANCE};
pub use rescaling::{Direction, Product, QuantityPair, Rescaling, Unit};

use miette::Diagnostic;
use rescaler_decimal::{
    checked_div, ensure_positive, is_close, relative_difference, Decimal, DecimalContext,
    DomainError, Scientific,
};
use state::SearchState;

#[derive(thiserror::Error, Debug, Diagnostic)]
/// Error raised by the convergence search
pub enum SearchError {
    /// The iteration budget was spent before the product reached the target
    #[error(
        "The convergence search for {rule} did not reach target {target} within {iterations} \
         iterations"
    )]
    #[diagnostic(
        code(rescaler::search::convergence),
        help("raise `search.maximum_iterations` or loosen `search.tolerance`")
    )]
    Convergence {
        /// The name of the rescaling rule
        rule: String,
        /// The target product in scientific notation
        target: String,
        /// The exhausted iteration budget
        iterations: usize,
    },
    /// An input or intermediate value fell outside the domain of a decimal operation
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// The result of a converged search
#[derive(Clone, Debug)]
pub struct SearchOutcome {
    /// The factor applied to the rescaled unit
    pub scale_factor: Decimal,
    /// The rescaled first constant
    pub first: Decimal,
    /// The rescaled second constant
    pub second: Decimal,
    /// The product of the rescaled constants
    pub product: Decimal,
    /// The number of updates to the scale factor before convergence
    pub iterations: usize,
}

impl SearchOutcome {
    /// The length of the old unit measured in the new one, `1 / s`
    pub fn unit_length(&self) -> Result<Decimal, DomainError> {
        checked_div(&Decimal::ONE, &self.scale_factor, "the rescaled unit length")
    }

    /// `|product - target| / target`
    pub fn relative_difference(&self, target: &Decimal) -> Result<Decimal, DomainError> {
        relative_difference(&self.product, target)
    }
}

/// Builder for a `ConvergenceSearch`
pub struct SearchBuilder<RefRescaling, RefPair, RefConvergenceSettings, RefContext> {
    rescaling: RefRescaling,
    pair: RefPair,
    convergence_settings: RefConvergenceSettings,
    context: RefContext,
}

impl SearchBuilder<(), (), (), ()> {
    /// Initialise an empty SearchBuilder
    pub fn new() -> Self {
        Self {
            rescaling: (),
            pair: (),
            convergence_settings: (),
            context: (),
        }
    }
}

impl Default for SearchBuilder<(), (), (), ()> {
    fn default() -> Self {
        Self::new()
    }
}

impl<RefRescaling, RefPair, RefConvergenceSettings, RefContext>
    SearchBuilder<RefRescaling, RefPair, RefConvergenceSettings, RefContext>
{
    /// Attach the rule relating the scale factor to the pair of constants
    pub fn with_rescaling(
        self,
        rescaling: &Rescaling,
    ) -> SearchBuilder<&Rescaling, RefPair, RefConvergenceSettings, RefContext> {
        SearchBuilder {
            rescaling,
            pair: self.pair,
            convergence_settings: self.convergence_settings,
            context: self.context,
        }
    }

    /// Attach the unscaled constants
    pub fn with_pair(
        self,
        pair: &QuantityPair,
    ) -> SearchBuilder<RefRescaling, &QuantityPair, RefConvergenceSettings, RefContext> {
        SearchBuilder {
            rescaling: self.rescaling,
            pair,
            convergence_settings: self.convergence_settings,
            context: self.context,
        }
    }

    /// Attach the tolerance and iteration budget
    pub fn with_convergence_settings(
        self,
        convergence_settings: &Convergence,
    ) -> SearchBuilder<RefRescaling, RefPair, &Convergence, RefContext> {
        SearchBuilder {
            rescaling: self.rescaling,
            pair: self.pair,
            convergence_settings,
            context: self.context,
        }
    }

    /// Attach the working precision
    pub fn with_context(
        self,
        context: &DecimalContext,
    ) -> SearchBuilder<RefRescaling, RefPair, RefConvergenceSettings, &DecimalContext> {
        SearchBuilder {
            rescaling: self.rescaling,
            pair: self.pair,
            convergence_settings: self.convergence_settings,
            context,
        }
    }
}

impl<'a> SearchBuilder<&'a Rescaling, &'a QuantityPair, &'a Convergence, &'a DecimalContext> {
    /// Assemble the search once every input is attached
    pub fn build(self) -> ConvergenceSearch<'a> {
        ConvergenceSearch {
            rescaling: self.rescaling,
            pair: self.pair,
            convergence_settings: self.convergence_settings,
            ctx: self.context,
        }
    }
}

/// A search for the scale factor taking one pair of constants to a target product
pub struct ConvergenceSearch<'a> {
    rescaling: &'a Rescaling,
    pair: &'a QuantityPair,
    convergence_settings: &'a Convergence,
    ctx: &'a DecimalContext,
}

impl<'a> ConvergenceSearch<'a> {
    /// The rule relating the scale factor to the constants
    pub fn rescaling(&self) -> &Rescaling {
        self.rescaling
    }

    /// The unscaled constants
    pub fn pair(&self) -> &QuantityPair {
        self.pair
    }

    /// Whether `product` lies within the relative tolerance of `target`
    fn is_loop_converged(&self, product: &Decimal, target: &Decimal) -> bool {
        is_close(product, target, self.convergence_settings.tolerance())
    }

    /// Run the search to convergence for a single target
    #[tracing::instrument(name = "Convergence search", skip_all, fields(rule = %self.rescaling))]
    pub fn run_loop(&self, target: &Decimal) -> Result<SearchOutcome, SearchError> {
        ensure_positive("the target product", target)?;
        let ctx = self.ctx;
        let target = ctx.round(target.clone());

        let unscaled = self.pair.product(ctx);
        if unscaled == target {
            tracing::info!("Target matches the unscaled product");
            return Ok(SearchOutcome {
                scale_factor: ctx.one(),
                first: self.pair.first().clone(),
                second: self.pair.second().clone(),
                product: unscaled,
                iterations: 0,
            });
        }

        let mut state = SearchState::new(self.rescaling.initial_direction(), ctx)?;
        for iteration in 0..self.convergence_settings.maximum_iterations() {
            let (first, second) = self.rescaling.apply(self.pair, state.scale_factor(), ctx)?;
            let product = ctx.round(&first * &second);

            if self.is_loop_converged(&product, &target) {
                tracing::info!(
                    iterations = iteration,
                    scale_factor = %Scientific::new(state.scale_factor(), 12),
                    "Converged"
                );
                return Ok(SearchOutcome {
                    scale_factor: state.into_scale_factor(),
                    first,
                    second,
                    product,
                    iterations: iteration,
                });
            }

            let difference = &product - &target;
            if state.advance(&difference, ctx) {
                tracing::debug!(
                    iteration,
                    step_size = %Scientific::new(state.step_size(), 3),
                    direction = ?state.direction(),
                    "Overshot the target, reversing direction"
                );
            }
            tracing::trace!(
                iteration,
                scale_factor = %Scientific::new(state.scale_factor(), 15),
                "Updated scale factor"
            );
        }

        Err(SearchError::Convergence {
            rule: self.rescaling.to_string(),
            target: Scientific::new(&target, 12).to_string(),
            iterations: self.convergence_settings.maximum_iterations(),
        })
    }

    /// Run the search for each target in turn, stopping at the first failure
    pub fn run_searches(&self, targets: &[Decimal]) -> Result<Vec<SearchOutcome>, SearchError> {
        targets.iter().map(|target| self.run_loop(target)).collect()
    }
}

/// Find the metre scale factor taking `h·c` to `target`
pub fn find_matching_hc(
    initial_h: &Decimal,
    initial_c: &Decimal,
    target: &Decimal,
    convergence_settings: &Convergence,
    ctx: &DecimalContext,
) -> Result<SearchOutcome, SearchError> {
    let pair = QuantityPair::new(initial_h.clone(), initial_c.clone())?;
    SearchBuilder::new()
        .with_rescaling(&Rescaling::HC_METRE)
        .with_pair(&pair)
        .with_convergence_settings(convergence_settings)
        .with_context(ctx)
        .build()
        .run_loop(target)
}
