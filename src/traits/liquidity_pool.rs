//! Liquidity provision trait extending [`SwapPool`].
//!
//! # Liquidity Accounting
//!
//! Depositing `(amount_x, amount_y)` raises the reserves by exactly those
//! amounts.  No ratio check is made against existing reserves and no
//! per-provider claim is recorded: the pool tracks aggregate reserves only,
//! and liquidity cannot be withdrawn.

use super::SwapPool;
use crate::domain::{Account, Amount};
use crate::error::SwapError;

/// Trait for pools that accept liquidity deposits.
pub trait LiquidityPool: SwapPool {
    /// Pulls `amount_x` and `amount_y` from `provider` into custody and
    /// credits both reserves.
    ///
    /// # Errors
    ///
    /// - [`SwapError::InsufficientAmount`] if either amount is zero.
    /// - [`SwapError::TransferFailed`] if either pull fails; a completed
    ///   first pull is reverted.
    /// - [`SwapError::ArithmeticOverflow`] if a reserve would overflow.
    fn add_liquidity(
        &self,
        provider: Account,
        amount_x: Amount,
        amount_y: Amount,
    ) -> Result<(), SwapError>;
}
