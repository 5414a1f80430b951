//! Property-based tests for the convergence search.

use proptest::prelude::*;
use rescaler::constants::ConstantSet;
use rescaler::search::{find_matching_hc, Convergence, Rescaling, SearchBuilder};
use rescaler_decimal::{is_close, relative_difference, DecimalContext, DEFAULT_PRECISION};

fn rule() -> impl Strategy<Value = Rescaling> {
    prop::sample::select(Rescaling::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Any positive target is reached to within the tolerance.
    #[test]
    fn reachable_targets_converge(mantissa in 1.0f64..10.0, scale in -40i32..10) {
        let ctx = DecimalContext::new(DEFAULT_PRECISION).unwrap();
        let constants = ConstantSet::codata(&ctx).unwrap();
        let convergence = Convergence::with_defaults(&ctx).unwrap();
        let target = ctx.parse(&format!("{}e{}", mantissa, scale)).unwrap();

        let outcome = find_matching_hc(
            &constants.planck,
            &constants.speed_of_light,
            &target,
            &convergence,
            &ctx,
        ).unwrap();

        let recomputed = &outcome.first * &outcome.second;
        prop_assert!(is_close(&recomputed, &target, convergence.tolerance()));
        prop_assert!(outcome.iterations < convergence.maximum_iterations());
    }

    /// The iterative factor agrees with the closed form of every rule.
    #[test]
    fn search_agrees_with_closed_form(
        rule in rule(),
        mantissa in 1.0f64..10.0,
        scale in -30i32..5,
    ) {
        let ctx = DecimalContext::new(DEFAULT_PRECISION).unwrap();
        let constants = ConstantSet::codata(&ctx).unwrap();
        let convergence = Convergence::with_defaults(&ctx).unwrap();
        let target = ctx.parse(&format!("{}e{}", mantissa, scale)).unwrap();
        let pair = rule.pair(&constants).unwrap();

        let outcome = SearchBuilder::new()
            .with_rescaling(&rule)
            .with_pair(&pair)
            .with_convergence_settings(&convergence)
            .with_context(&ctx)
            .build()
            .run_loop(&target)
            .unwrap();
        let exact = rule.closed_form(&pair, &target, &ctx).unwrap();

        let error = relative_difference(&outcome.scale_factor, &exact).unwrap();
        prop_assert!(error < ctx.parse("2e-15").unwrap());
    }

    /// Non-positive targets fail before any iteration.
    #[test]
    fn non_positive_targets_fail_fast(value in -1e10f64..=0.0) {
        let ctx = DecimalContext::new(DEFAULT_PRECISION).unwrap();
        let constants = ConstantSet::codata(&ctx).unwrap();
        let convergence = Convergence::new(ctx.parse("1e-15").unwrap(), 1).unwrap();
        let target = ctx.parse(&format!("{:e}", value)).unwrap();

        let result = find_matching_hc(
            &constants.planck,
            &constants.speed_of_light,
            &target,
            &convergence,
            &ctx,
        );
        let is_domain_error = matches!(result, Err(rescaler::search::SearchError::Domain(_)));
        prop_assert!(is_domain_error);
    }
}
