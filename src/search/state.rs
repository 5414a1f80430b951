use super::Direction;
use rescaler_decimal::{is_negative, is_zero, Decimal, DecimalContext, DomainError};
use std::cmp::Ordering;

/// The mutable state of a single convergence search.
///
/// The previous difference is only ever compared by sign, so it is stored as an `Ordering` against
/// zero. It starts as `Greater`, the sign of `+∞`.
#[derive(Clone, Debug)]
pub(crate) struct SearchState {
    scale_factor: Decimal,
    step_size: Decimal,
    direction: Direction,
    previous_sign: Ordering,
}

impl SearchState {
    pub(crate) fn new(direction: Direction, ctx: &DecimalContext) -> Result<Self, DomainError> {
        Ok(Self {
            scale_factor: ctx.one(),
            step_size: ctx.ratio(1, 2)?,
            direction,
            previous_sign: Ordering::Greater,
        })
    }

    pub(crate) fn scale_factor(&self) -> &Decimal {
        &self.scale_factor
    }

    pub(crate) fn step_size(&self) -> &Decimal {
        &self.step_size
    }

    pub(crate) fn direction(&self) -> Direction {
        self.direction
    }

    pub(crate) fn into_scale_factor(self) -> Decimal {
        self.scale_factor
    }

    /// Fold in the difference `product - target` from the current iteration and move the scale
    /// factor.
    ///
    /// When the sign of the difference changes the search has stepped over the target, so the
    /// direction reverses and the step halves. Returns whether that happened.
    pub(crate) fn advance(&mut self, difference: &Decimal, ctx: &DecimalContext) -> bool {
        let sign = sign_of(difference);
        let flipped = sign != self.previous_sign;
        if flipped {
            self.direction = self.direction.flipped();
            self.step_size = ctx.round(&self.step_size / ctx.integer(2));
        }

        let multiplier = match self.direction {
            Direction::Up => ctx.one() + &self.step_size,
            Direction::Down => ctx.one() - &self.step_size,
        };
        self.scale_factor = ctx.round(&self.scale_factor * multiplier);
        self.previous_sign = sign;
        flipped
    }
}

fn sign_of(value: &Decimal) -> Ordering {
    if is_zero(value) {
        Ordering::Equal
    } else if is_negative(value) {
        Ordering::Less
    } else {
        Ordering::Greater
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rescaler_decimal::DEFAULT_PRECISION;

    fn ctx() -> DecimalContext {
        DecimalContext::new(DEFAULT_PRECISION).unwrap()
    }

    #[test]
    fn positive_first_difference_does_not_flip() {
        let ctx = ctx();
        let mut state = SearchState::new(Direction::Up, &ctx).unwrap();
        assert!(!state.advance(&ctx.integer(1), &ctx));
        assert_eq!(state.scale_factor(), &ctx.parse("1.5").unwrap());
        assert_eq!(state.step_size(), &ctx.parse("0.5").unwrap());
    }

    #[test]
    fn negative_first_difference_flips_against_infinity() {
        let ctx = ctx();
        let mut state = SearchState::new(Direction::Up, &ctx).unwrap();
        assert!(state.advance(&ctx.integer(-1), &ctx));
        assert_eq!(state.direction(), Direction::Down);
        assert_eq!(state.step_size(), &ctx.parse("0.25").unwrap());
        assert_eq!(state.scale_factor(), &ctx.parse("0.75").unwrap());
    }

    #[test]
    fn each_flip_halves_the_step_exactly_once() {
        let ctx = ctx();
        let mut state = SearchState::new(Direction::Up, &ctx).unwrap();
        let differences = [1, 1, -1, -1, 1, -1, 1, 1];
        let mut previous_step = state.step_size().clone();
        for difference in differences {
            let flipped = state.advance(&ctx.integer(difference), &ctx);
            let expected = match flipped {
                true => ctx.round(&previous_step / ctx.integer(2)),
                false => previous_step.clone(),
            };
            assert_eq!(state.step_size(), &expected);
            assert!(state.step_size() <= &previous_step);
            previous_step = state.step_size().clone();
        }
        // Flips at the third, fifth, sixth and seventh differences
        assert_eq!(state.step_size(), &ctx.parse("0.03125").unwrap());
    }

    #[test]
    fn zero_difference_counts_as_a_change_of_sign() {
        let ctx = ctx();
        let mut state = SearchState::new(Direction::Down, &ctx).unwrap();
        assert!(state.advance(&ctx.zero(), &ctx));
        assert_eq!(state.direction(), Direction::Up);
    }
}
