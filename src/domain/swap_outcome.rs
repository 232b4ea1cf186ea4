//! Outcome (or quote) of a swap.

use core::fmt;

use super::{Amount, SwapDirection};
use crate::error::{Result, SwapError};

/// The amounts of a swap: what the trader pays, what the pricing formula
/// sees after the fee, and what the trader receives.
///
/// Returned both by executed swaps and by read-only quotes.
///
/// # Invariants
///
/// - `amount_in > 0`.
/// - `amount_in_with_fee ≤ amount_in`.
///
/// `amount_out` may be zero for dust inputs or a pool with an empty
/// output reserve.
///
/// # Examples
///
/// ```
/// use pairswap::domain::{Amount, SwapDirection, SwapOutcome};
///
/// let outcome = SwapOutcome::new(
///     SwapDirection::XForY,
///     Amount::from_u128(1_000),
///     Amount::from_u128(997),
///     Amount::from_u128(1_990),
/// );
/// assert!(outcome.is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwapOutcome {
    direction: SwapDirection,
    amount_in: Amount,
    amount_in_with_fee: Amount,
    amount_out: Amount,
}

impl SwapOutcome {
    /// Creates a new `SwapOutcome` with validated invariants.
    ///
    /// # Errors
    ///
    /// - [`SwapError::InsufficientAmount`] if `amount_in` is zero.
    /// - [`SwapError::ArithmeticOverflow`] if `amount_in_with_fee`
    ///   exceeds `amount_in`.
    pub fn new(
        direction: SwapDirection,
        amount_in: Amount,
        amount_in_with_fee: Amount,
        amount_out: Amount,
    ) -> Result<Self> {
        if amount_in.is_zero() {
            return Err(SwapError::InsufficientAmount("swap input must be positive"));
        }
        if amount_in_with_fee > amount_in {
            return Err(SwapError::ArithmeticOverflow(
                "fee-adjusted input exceeds input",
            ));
        }
        Ok(Self {
            direction,
            amount_in,
            amount_in_with_fee,
            amount_out,
        })
    }

    /// Returns the swap direction.
    #[must_use]
    pub const fn direction(&self) -> SwapDirection {
        self.direction
    }

    /// Returns the full input pulled from the trader.
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Returns the fee-adjusted input credited to the input reserve.
    pub const fn amount_in_with_fee(&self) -> Amount {
        self.amount_in_with_fee
    }

    /// Returns the output pushed to the trader.
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }

    /// Returns the part of the input retained by the pool as fee.
    pub fn fee(&self) -> Amount {
        // new() guarantees amount_in_with_fee <= amount_in
        self.amount_in
            .checked_sub(&self.amount_in_with_fee)
            .unwrap_or(Amount::ZERO)
    }
}

impl fmt::Display for SwapOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SwapOutcome({}, in={}, in_with_fee={}, out={})",
            self.direction, self.amount_in, self.amount_in_with_fee, self.amount_out
        )
    }
}
