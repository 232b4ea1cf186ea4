//! Committed pool state snapshots.

use core::fmt;

use alloy_primitives::U512;

use crate::domain::{Amount, SwapDirection, SwapOutcome};
use crate::error::{Result, SwapError};
use crate::math::CheckedArithmetic;

/// An immutable snapshot of a pool's accounting.
///
/// - `reserve_x` / `reserve_y`: the reserves the pricing formula uses.
/// - `retained_fee_x` / `retained_fee_y`: input pulled into custody but not
///   credited to a reserve (`amount_in − amount_in_with_fee` per swap).
///
/// Custody of each asset always equals `reserve + retained_fee`.
///
/// Transitions return a new snapshot and never modify `self`, so a failed
/// transition leaves nothing to undo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PoolState {
    reserve_x: Amount,
    reserve_y: Amount,
    retained_fee_x: Amount,
    retained_fee_y: Amount,
}

impl PoolState {
    /// The state of a freshly constructed pool.
    pub const EMPTY: Self = Self {
        reserve_x: Amount::ZERO,
        reserve_y: Amount::ZERO,
        retained_fee_x: Amount::ZERO,
        retained_fee_y: Amount::ZERO,
    };

    /// Reserve of asset X.
    pub const fn reserve_x(&self) -> Amount {
        self.reserve_x
    }

    /// Reserve of asset Y.
    pub const fn reserve_y(&self) -> Amount {
        self.reserve_y
    }

    /// Asset X held in custody beyond `reserve_x`.
    pub const fn retained_fee_x(&self) -> Amount {
        self.retained_fee_x
    }

    /// Asset Y held in custody beyond `reserve_y`.
    pub const fn retained_fee_y(&self) -> Amount {
        self.retained_fee_y
    }

    /// Returns `(reserve_in, reserve_out)` for `direction`.
    pub const fn oriented(&self, direction: SwapDirection) -> (Amount, Amount) {
        match direction {
            SwapDirection::XForY => (self.reserve_x, self.reserve_y),
            SwapDirection::YForX => (self.reserve_y, self.reserve_x),
        }
    }

    /// Returns `true` if either reserve is zero.
    #[must_use]
    pub fn has_empty_reserve(&self) -> bool {
        self.reserve_x.is_zero() || self.reserve_y.is_zero()
    }

    /// The constant-product invariant `reserve_x × reserve_y`, exact.
    #[must_use]
    pub fn invariant(&self) -> U512 {
        self.reserve_x.get().widening_mul(self.reserve_y.get())
    }

    /// Returns the state after depositing `(amount_x, amount_y)`.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::ArithmeticOverflow`] if a reserve overflows.
    pub fn with_liquidity(&self, amount_x: Amount, amount_y: Amount) -> Result<Self> {
        let reserve_x = self
            .reserve_x
            .checked_add(&amount_x)
            .ok_or(SwapError::ArithmeticOverflow("reserve_x overflow on add"))?;
        let reserve_y = self
            .reserve_y
            .checked_add(&amount_y)
            .ok_or(SwapError::ArithmeticOverflow("reserve_y overflow on add"))?;
        Ok(Self {
            reserve_x,
            reserve_y,
            ..*self
        })
    }

    /// Returns the state after executing `outcome`.
    ///
    /// The input reserve grows by the fee-adjusted input, the output reserve
    /// shrinks by the output, and the fee is added to the input side's
    /// retained fee.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::ArithmeticOverflow`] if any counter overflows
    /// or the output exceeds the output reserve.
    pub fn after_swap(&self, outcome: &SwapOutcome) -> Result<Self> {
        let (reserve_in, reserve_out) = self.oriented(outcome.direction());
        let retained_in = match outcome.direction() {
            SwapDirection::XForY => self.retained_fee_x,
            SwapDirection::YForX => self.retained_fee_y,
        };

        let new_in = reserve_in.safe_add(&outcome.amount_in_with_fee())?;
        let new_out = reserve_out.safe_sub(&outcome.amount_out())?;
        let new_retained = retained_in.safe_add(&outcome.fee())?;

        Ok(match outcome.direction() {
            SwapDirection::XForY => Self {
                reserve_x: new_in,
                reserve_y: new_out,
                retained_fee_x: new_retained,
                retained_fee_y: self.retained_fee_y,
            },
            SwapDirection::YForX => Self {
                reserve_x: new_out,
                reserve_y: new_in,
                retained_fee_x: self.retained_fee_x,
                retained_fee_y: new_retained,
            },
        })
    }

    /// Custody each ledger must hold: `(reserve_x + retained_fee_x,
    /// reserve_y + retained_fee_y)`.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::ArithmeticOverflow`] on overflow.
    pub fn expected_custody(&self) -> Result<(Amount, Amount)> {
        Ok((
            self.reserve_x.safe_add(&self.retained_fee_x)?,
            self.reserve_y.safe_add(&self.retained_fee_y)?,
        ))
    }
}

impl fmt::Display for PoolState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PoolState(x={}, y={}, fee_x={}, fee_y={})",
            self.reserve_x, self.reserve_y, self.retained_fee_x, self.retained_fee_y
        )
    }
}
