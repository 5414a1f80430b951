use super::{configuration::SearchConfiguration, report, Styles};
use crate::{
    constants::ConstantSet,
    reconstruction::{Environment, FrameworkKind},
    search::{QuantityPair, SearchBuilder},
    RescalerError,
};
use console::Term;
use rescaler_decimal::{Decimal, DecimalContext, DomainError};

/// Stands in for the product of the unscaled constants in a list of targets
const UNSCALED_TARGET: &str = "unscaled";

/// Run every configured search rule over every configured target, printing each outcome
pub(crate) fn run_search_sweep(
    config: &SearchConfiguration,
    constants: &ConstantSet,
    ctx: &DecimalContext,
    term: &Term,
    styles: &Styles,
) -> Result<(), RescalerError> {
    let convergence = config.convergence(ctx)?;

    for rescaling in &config.rules {
        let pair = rescaling.pair(constants)?;
        let targets = config
            .targets
            .iter()
            .map(|literal| resolve_target(literal, &pair, ctx))
            .collect::<Result<Vec<_>, _>>()?;
        tracing::info!(rule = %rescaling, targets = targets.len(), "Starting search sweep");

        let search = SearchBuilder::new()
            .with_rescaling(rescaling)
            .with_pair(&pair)
            .with_convergence_settings(&convergence)
            .with_context(ctx)
            .build();

        report::write_lines(term, &report::search_heading(rescaling, styles))?;
        for target in &targets {
            let outcome = search.run_loop(target)?;
            let closed_form = rescaling.closed_form(&pair, target, ctx)?;
            let lines = report::search_result(rescaling, target, &outcome, &closed_form, styles)?;
            report::write_lines(term, &lines)?;
        }
    }
    Ok(())
}

/// Reconstruct and print each framework in turn
pub(crate) fn run_reconstructions(
    frameworks: &[FrameworkKind],
    constants: &ConstantSet,
    ctx: &DecimalContext,
    term: &Term,
    styles: &Styles,
) -> Result<(), RescalerError> {
    let env = Environment::new(constants, ctx);
    for framework in frameworks {
        let reconstruction = framework.reconstruct(&env)?;
        report::write_lines(term, &report::reconstruction(&reconstruction, styles))?;
    }
    Ok(())
}

fn resolve_target(
    literal: &str,
    pair: &QuantityPair,
    ctx: &DecimalContext,
) -> Result<Decimal, DomainError> {
    if literal.trim().eq_ignore_ascii_case(UNSCALED_TARGET) {
        Ok(pair.product(ctx))
    } else {
        ctx.parse(literal)
    }
}

#[cfg(test)]
mod test {
    use super::resolve_target;
    use crate::search::QuantityPair;
    use rescaler_decimal::{DecimalContext, DomainError, DEFAULT_PRECISION};

    #[test]
    fn unscaled_keyword_resolves_to_the_product() {
        let ctx = DecimalContext::new(DEFAULT_PRECISION).unwrap();
        let pair = QuantityPair::new(ctx.integer(3), ctx.integer(7)).unwrap();
        assert_eq!(resolve_target("unscaled", &pair, &ctx).unwrap(), ctx.integer(21));
        assert_eq!(resolve_target(" Unscaled ", &pair, &ctx).unwrap(), ctx.integer(21));
        assert_eq!(resolve_target("2e-25", &pair, &ctx).unwrap(), ctx.parse("2e-25").unwrap());
        assert!(matches!(
            resolve_target("two", &pair, &ctx),
            Err(DomainError::Parse { .. })
        ));
    }
}
