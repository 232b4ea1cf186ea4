//! Constant-product (`x · y = k`) pricing with a fixed input fee.
//!
//! # Exact-in quote (input reserve `r_in`, output reserve `r_out`)
//!
//! 1. `in_with_fee = floor(amount_in × 997 / 1000)`
//! 2. `amount_out  = floor(r_out × in_with_fee / (r_in + in_with_fee))`
//!
//! Every division truncates.  Because `amount_out` is floored,
//! `(r_in + in_with_fee) × (r_out − amount_out) ≥ r_in × r_out`, and since
//! `in_with_fee < r_in + in_with_fee` whenever `r_in > 0`, the output is
//! always strictly below `r_out` for a non-empty output reserve.

use crate::domain::{Amount, Fee, SwapDirection, SwapOutcome};
use crate::error::{Result, SwapError};

/// Returns the fee-adjusted input `floor(amount_in × 997 / 1000)`.
///
/// # Errors
///
/// Returns [`SwapError::ArithmeticOverflow`] if `amount_in × 997`
/// overflows.
pub fn amount_in_with_fee(amount_in: Amount) -> Result<Amount> {
    Fee::STANDARD.apply_to_amount(amount_in)
}

/// Returns `floor(reserve_out × in_with_fee / (reserve_in + in_with_fee))`.
///
/// # Errors
///
/// Returns [`SwapError::ArithmeticOverflow`] if the numerator or the
/// denominator overflows, or if the denominator is zero (an empty input
/// reserve with a fee-adjusted input of zero).
pub fn amount_out(in_with_fee: Amount, reserve_in: Amount, reserve_out: Amount) -> Result<Amount> {
    let numerator = reserve_out
        .checked_mul(&in_with_fee)
        .ok_or(SwapError::ArithmeticOverflow("output numerator overflow"))?;
    let denominator = reserve_in
        .checked_add(&in_with_fee)
        .ok_or(SwapError::ArithmeticOverflow("output denominator overflow"))?;
    numerator
        .checked_div(&denominator)
        .ok_or(SwapError::ArithmeticOverflow("output denominator is zero"))
}

/// Quotes an exact-in swap against the given reserves.
///
/// `reserve_in` / `reserve_out` are the reserves of the input and output
/// asset for `direction`.
///
/// # Errors
///
/// - [`SwapError::InsufficientAmount`] if `amount_in` is zero.
/// - [`SwapError::ArithmeticOverflow`] if any step overflows.
///
/// # Examples
///
/// ```
/// use pairswap::domain::{Amount, SwapDirection};
/// use pairswap::math::quote_exact_in;
///
/// let q = quote_exact_in(
///     SwapDirection::XForY,
///     Amount::from_u128(1_000),
///     Amount::from_u128(1_000_000),
///     Amount::from_u128(2_000_000),
/// )
/// .expect("valid quote");
/// assert_eq!(q.amount_in_with_fee(), Amount::from_u128(997));
/// assert_eq!(q.amount_out(), Amount::from_u128(1_992));
/// ```
pub fn quote_exact_in(
    direction: SwapDirection,
    amount_in: Amount,
    reserve_in: Amount,
    reserve_out: Amount,
) -> Result<SwapOutcome> {
    if amount_in.is_zero() {
        return Err(SwapError::InsufficientAmount("swap input must be positive"));
    }
    let in_with_fee = amount_in_with_fee(amount_in)?;
    let out = amount_out(in_with_fee, reserve_in, reserve_out)?;
    SwapOutcome::new(direction, amount_in, in_with_fee, out)
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn e18(whole: u64) -> Amount {
        let Some(a) = Amount::from_units(whole, 18) else {
            panic!("fits");
        };
        a
    }

    #[test]
    fn reference_quote_x_for_y() {
        let Ok(q) = quote_exact_in(SwapDirection::XForY, e18(10), e18(1_000), e18(2_000)) else {
            panic!("expected Ok");
        };
        assert_eq!(q.amount_in_with_fee(), Amount::from_u128(9_970_000_000_000_000_000));
        assert_eq!(q.amount_out(), Amount::from_u128(19_743_160_687_941_225_977));
        assert_eq!(q.fee(), Amount::from_u128(30_000_000_000_000_000));
    }

    #[test]
    fn reference_quote_y_for_x() {
        let Ok(q) = quote_exact_in(SwapDirection::YForX, e18(20), e18(2_000), e18(1_000)) else {
            panic!("expected Ok");
        };
        assert_eq!(q.amount_in_with_fee(), Amount::from_u128(19_940_000_000_000_000_000));
        assert_eq!(q.amount_out(), Amount::from_u128(9_871_580_343_970_612_988));
    }

    #[test]
    fn zero_input_rejected() {
        assert!(matches!(
            quote_exact_in(SwapDirection::XForY, Amount::ZERO, e18(1), e18(1)),
            Err(SwapError::InsufficientAmount(_))
        ));
    }

    #[test]
    fn empty_output_reserve_quotes_zero() {
        let Ok(q) = quote_exact_in(
            SwapDirection::XForY,
            Amount::from_u128(1_000),
            Amount::ZERO,
            Amount::ZERO,
        ) else {
            panic!("expected Ok");
        };
        assert!(q.amount_out().is_zero());
    }

    #[test]
    fn dust_into_empty_pool_is_zero_denominator() {
        // 1 * 997 / 1000 = 0 and the input reserve is empty
        assert_eq!(
            quote_exact_in(
                SwapDirection::XForY,
                Amount::from_u128(1),
                Amount::ZERO,
                Amount::ZERO
            ),
            Err(SwapError::ArithmeticOverflow("output denominator is zero"))
        );
    }

    #[test]
    fn numerator_overflow_fails_closed() {
        let huge = Amount::from_u128(u128::MAX);
        let Some(big_reserve) = huge.checked_mul(&Amount::from_u128(4)) else {
            panic!("fits");
        };
        assert_eq!(
            quote_exact_in(SwapDirection::XForY, huge, big_reserve, big_reserve),
            Err(SwapError::ArithmeticOverflow("output numerator overflow"))
        );
    }

    #[test]
    fn output_stays_below_reserve_for_huge_input() {
        let Some(input) = Amount::from_units(1_000_000_000, 30) else {
            panic!("fits");
        };
        let Ok(q) = quote_exact_in(SwapDirection::XForY, input, e18(1), e18(2)) else {
            panic!("expected Ok");
        };
        assert!(q.amount_out() < e18(2));
    }
}
