//! The pool's fixed trading fee.

use core::fmt;

use alloy_primitives::U256;

use super::Amount;
use crate::error::{Result, SwapError};

/// The fixed 0.3% trading fee, expressed as the `997 / 1000` multiplier
/// applied to every swap input.
///
/// [`Fee::STANDARD`] is the only instance; the fee is not configurable.
///
/// # Examples
///
/// ```
/// use pairswap::domain::{Amount, Fee};
///
/// let with_fee = Fee::STANDARD.apply_to_amount(Amount::from_u128(1_000)).expect("no overflow");
/// assert_eq!(with_fee, Amount::from_u128(997));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fee {
    numerator: u16,
    denominator: u16,
}

impl Fee {
    /// 0.30%: the input is multiplied by `997 / 1000`.
    pub const STANDARD: Self = Self {
        numerator: 997,
        denominator: 1_000,
    };

    /// Numerator of the multiplier (`997`).
    #[must_use]
    pub const fn numerator(&self) -> u16 {
        self.numerator
    }

    /// Denominator of the multiplier (`1000`).
    #[must_use]
    pub const fn denominator(&self) -> u16 {
        self.denominator
    }

    /// Returns `floor(amount · numerator / denominator)`, the part of an
    /// input that is priced by the constant-product formula.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::ArithmeticOverflow`] if `amount · numerator`
    /// does not fit in 256 bits.
    pub fn apply_to_amount(&self, amount: Amount) -> Result<Amount> {
        let scaled = amount
            .get()
            .checked_mul(U256::from(self.numerator))
            .ok_or(SwapError::ArithmeticOverflow("fee multiplication overflow"))?;
        // denominator is a non-zero constant
        Ok(Amount::new(scaled / U256::from(self.denominator)))
    }
}

impl fmt::Display for Fee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fee({}/{})", self.numerator, self.denominator)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn standard_is_997_over_1000() {
        assert_eq!(Fee::STANDARD.numerator(), 997);
        assert_eq!(Fee::STANDARD.denominator(), 1_000);
        assert_eq!(Fee::STANDARD.to_string(), "Fee(997/1000)");
    }

    #[test]
    fn apply_truncates() {
        // 999 * 997 / 1000 = 996.003
        let Ok(v) = Fee::STANDARD.apply_to_amount(Amount::from_u128(999)) else {
            panic!("expected Ok");
        };
        assert_eq!(v, Amount::from_u128(996));
    }

    #[test]
    fn tiny_inputs_price_to_zero() {
        let Ok(v) = Fee::STANDARD.apply_to_amount(Amount::from_u128(1)) else {
            panic!("expected Ok");
        };
        assert!(v.is_zero());
    }

    #[test]
    fn ten_tokens_with_fee() {
        let Some(ten) = Amount::from_units(10, 18) else {
            panic!("fits");
        };
        let Ok(v) = Fee::STANDARD.apply_to_amount(ten) else {
            panic!("expected Ok");
        };
        assert_eq!(v, Amount::from_u128(9_970_000_000_000_000_000));
    }

    #[test]
    fn overflow_fails_closed() {
        assert_eq!(
            Fee::STANDARD.apply_to_amount(Amount::MAX),
            Err(SwapError::ArithmeticOverflow("fee multiplication overflow"))
        );
    }
}
