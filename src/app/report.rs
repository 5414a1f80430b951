//! Plain text reports of search outcomes and reconstructions.
//!
//! Lines are built as strings and written separately so they can be checked without a terminal.

use super::Styles;
use crate::{
    reconstruction::{Reconstruction, ValidationRecord},
    search::{Rescaling, SearchOutcome},
};
use console::Term;
use itertools::Itertools;
use rescaler_decimal::{checked_div, relative_difference, Decimal, DomainError, Scientific};

const NAME_WIDTH: usize = 48;
const RULE_WIDTH: usize = 116;

pub(crate) fn write_lines(term: &Term, lines: &[String]) -> std::io::Result<()> {
    for line in lines {
        term.write_line(line)?;
    }
    Ok(())
}

pub(crate) fn search_heading(rescaling: &Rescaling, styles: &Styles) -> Vec<String> {
    let (_, _, product) = rescaling.product().symbols();
    let heading = format!(
        "Redefining the {} to match specific values of {}",
        rescaling.unit(),
        product
    );
    vec![String::new(), styles.paint(&heading, styles.heading_style)]
}

/// The outcome of one search, alongside the closed-form factor it should agree with
pub(crate) fn search_result(
    rescaling: &Rescaling,
    target: &Decimal,
    outcome: &SearchOutcome,
    closed_form: &Decimal,
    styles: &Styles,
) -> Result<Vec<String>, DomainError> {
    let (first, second, product) = rescaling.product().symbols();
    let (first_unit, second_unit, product_unit) = rescaling.product().units();
    let unit = rescaling.unit();
    let difference = outcome.relative_difference(target)?;
    let agreement = relative_difference(&outcome.scale_factor, closed_form)?;
    let inverse_second = checked_div(&Decimal::ONE, &outcome.second, "1 / c")?;

    Ok(vec![
        String::new(),
        styles.paint(
            &format!("Results for target {} = {}", product, Scientific::new(target, 12)),
            styles.section_style,
        ),
        format!("  {} factor: {}", unit, Scientific::new(&outcome.scale_factor, 12)),
        format!(
            "  new {}: {} old {}",
            unit,
            Scientific::new(&outcome.unit_length()?, 12),
            unit
        ),
        format!("  Final {}: {} {}", first, Scientific::new(&outcome.first, 12), first_unit),
        format!("  Final {}: {} {}", second, Scientific::new(&outcome.second, 12), second_unit),
        format!("  1/{}: {} s / m", second, Scientific::new(&inverse_second, 12)),
        format!("  {}: {} {}", product, Scientific::new(&outcome.product, 12), product_unit),
        format!("  Iterations: {}", outcome.iterations),
        format!(
            "  Relative difference from target {}: {}",
            product,
            styles.paint(
                &Scientific::new(&difference, 12).to_string(),
                styles.relative_error_style(&difference)
            )
        ),
        format!(
            "  Closed-form {} factor: {} (relative difference {})",
            unit,
            Scientific::new(closed_form, 12),
            Scientific::new(&agreement, 3)
        ),
    ])
}

/// The scaling factors of a reconstruction, followed by its records grouped by section
pub(crate) fn reconstruction(reconstruction: &Reconstruction, styles: &Styles) -> Vec<String> {
    let mut lines = vec![
        String::new(),
        styles.paint(
            &format!("Constants from the {} framework", reconstruction.framework),
            styles.heading_style,
        ),
        String::new(),
        "Scaling factors".to_string(),
    ];
    lines.extend(
        reconstruction
            .factors
            .iter()
            .map(|(name, value)| format!("  {:<14} = {}", name, Scientific::new(value, 12))),
    );

    for (section, records) in &reconstruction.records.iter().group_by(|record| record.section) {
        lines.push(String::new());
        lines.push(styles.paint(&section.to_string(), styles.section_style));
        lines.push(format!(
            "{:<width$} | {:<20} | {:<20} | Rel Error",
            "Name",
            "Expected",
            "Calculated",
            width = NAME_WIDTH
        ));
        lines.push("-".repeat(RULE_WIDTH));
        lines.extend(records.map(|record| validation_row(record, styles)));
    }
    lines
}

fn validation_row(record: &ValidationRecord, styles: &Styles) -> String {
    let error = format!("{}", Scientific::new(&record.relative_error, 3));
    format!(
        "{:<width$} | {:<20} | {:<20} | {}",
        record.name,
        Scientific::new(&record.expected, 12),
        Scientific::new(&record.calculated, 12),
        styles.paint(&error, styles.relative_error_style(&record.relative_error)),
        width = NAME_WIDTH
    )
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::constants::ConstantSet;
    use crate::reconstruction::{Environment, FrameworkKind};
    use crate::search::{Convergence, SearchBuilder};
    use rescaler_decimal::{DecimalContext, DEFAULT_PRECISION};

    #[test]
    fn unscaled_search_reports_zero_difference() {
        let ctx = DecimalContext::new(DEFAULT_PRECISION).unwrap();
        let constants = ConstantSet::codata(&ctx).unwrap();
        let convergence = Convergence::with_defaults(&ctx).unwrap();
        let rescaling = Rescaling::HC_METRE;
        let pair = rescaling.pair(&constants).unwrap();
        let target = pair.product(&ctx);
        let outcome = SearchBuilder::new()
            .with_rescaling(&rescaling)
            .with_pair(&pair)
            .with_convergence_settings(&convergence)
            .with_context(&ctx)
            .build()
            .run_loop(&target)
            .unwrap();
        let exact = rescaling.closed_form(&pair, &target, &ctx).unwrap();

        let lines =
            search_result(&rescaling, &target, &outcome, &exact, &Styles::default()).unwrap();

        assert_eq!(lines[1], "Results for target hc = 1.986445857149e-25");
        assert!(lines.contains(&"  metre factor: 1.000000000000e+00".to_string()));
        assert!(lines.contains(&"  Final c: 2.997924580000e+08 m / s".to_string()));
        assert!(lines.contains(&"  Iterations: 0".to_string()));
        assert!(lines.contains(
            &"  Relative difference from target hc: 0.000000000000e+00".to_string()
        ));
    }

    #[test]
    fn reconstruction_groups_records_by_section() {
        let ctx = DecimalContext::new(DEFAULT_PRECISION).unwrap();
        let constants = ConstantSet::codata(&ctx).unwrap();
        let env = Environment::new(&constants, &ctx);
        let reconstruction = FrameworkKind::LengthMass.reconstruct(&env).unwrap();

        let lines = super::reconstruction(&reconstruction, &Styles::default());

        for section in ["Quantum", "Planck units", "Thermodynamic and atomic", "Electromagnetic"] {
            assert_eq!(lines.iter().filter(|line| *line == section).count(), 1);
        }
        let planck_length = lines
            .iter()
            .find(|line| line.starts_with("Planck length "))
            .unwrap();
        let cells: Vec<&str> = planck_length.split('|').map(str::trim).collect();
        assert_eq!(cells[0], "Planck length");
        assert_eq!(cells[1], "1.616255000000e-35");
        assert!(planck_length.contains(&format!("| {:<20} |", "1.616255000000e-35")));
        assert!(lines.iter().any(|line| line.starts_with("  s_length ")));
    }
}
