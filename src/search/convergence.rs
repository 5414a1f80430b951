use rescaler_decimal::{ensure_positive, Decimal, DecimalContext, DomainError};

/// The relative tolerance used when none is configured
pub const DEFAULT_TOLERANCE: &str = "1e-15";
/// The iteration budget used when none is configured
pub const DEFAULT_MAXIMUM_ITERATIONS: usize = 1000;

/// Termination settings for the convergence search
#[derive(Clone, Debug, PartialEq)]
pub struct Convergence {
    pub(crate) tolerance: Decimal,
    pub(crate) maximum_iterations: usize,
}

impl Convergence {
    /// Fails unless `tolerance` is strictly positive
    pub fn new(tolerance: Decimal, maximum_iterations: usize) -> Result<Self, DomainError> {
        ensure_positive("the search tolerance", &tolerance)?;
        Ok(Self {
            tolerance,
            maximum_iterations,
        })
    }

    /// A relative tolerance of `1e-15` and a budget of 1000 iterations
    pub fn with_defaults(ctx: &DecimalContext) -> Result<Self, DomainError> {
        Self::new(ctx.parse(DEFAULT_TOLERANCE)?, DEFAULT_MAXIMUM_ITERATIONS)
    }

    /// The relative tolerance on the target product
    pub fn tolerance(&self) -> &Decimal {
        &self.tolerance
    }

    /// The number of scale factor updates allowed before the search fails
    pub fn maximum_iterations(&self) -> usize {
        self.maximum_iterations
    }
}
