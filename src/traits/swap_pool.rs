//! Core swap trait for executing and quoting swaps.
//!
//! # Fee Deduction Invariant
//!
//! Implementations deduct the fee from the input before pricing and credit
//! only the fee-adjusted input to the input reserve:
//!
//! ```text
//! in_with_fee = amount_in × 997 / 1000
//! amount_out  = reserve_out × in_with_fee / (reserve_in + in_with_fee)
//! reserve_in  += in_with_fee
//! reserve_out −= amount_out
//! ```
//!
//! The remaining `amount_in − in_with_fee` stays in custody as retained fee.

use crate::domain::{Account, Amount, AssetId, SwapDirection, SwapOutcome};
use crate::error::SwapError;

/// Core trait for two-asset swap pools.
///
/// # Errors
///
/// Methods that can fail return [`Result<T, SwapError>`].  Common variants:
///
/// - [`SwapError::InsufficientAmount`]: zero input
/// - [`SwapError::TransferFailed`]: a ledger transfer failed
/// - [`SwapError::ArithmeticOverflow`]: a computation left the 256-bit range
pub trait SwapPool {
    /// Executes an exact-in swap for `trader`.
    ///
    /// The swap either completes fully (both transfers done, reserves
    /// updated, event recorded) or returns an error with no effect.
    ///
    /// # Errors
    ///
    /// - [`SwapError::InsufficientAmount`] if `amount_in` is zero.
    /// - [`SwapError::EmptyReserve`] if the pool rejects unseeded swaps and
    ///   a reserve is zero.
    /// - [`SwapError::TransferFailed`] if the pull or push fails.
    /// - [`SwapError::ArithmeticOverflow`] on overflow.
    fn swap(
        &self,
        trader: Account,
        direction: SwapDirection,
        amount_in: Amount,
    ) -> Result<SwapOutcome, SwapError>;

    /// Quotes an exact-in swap against the last committed reserves without
    /// changing anything.
    ///
    /// # Errors
    ///
    /// Same as [`swap`](Self::swap) except that no transfer is attempted.
    fn quote(&self, direction: SwapDirection, amount_in: Amount) -> Result<SwapOutcome, SwapError>;

    /// Returns `(asset_x, asset_y)`.
    #[must_use]
    fn assets(&self) -> (AssetId, AssetId);

    /// Returns `(reserve_x, reserve_y)` as last committed.
    #[must_use]
    fn reserves(&self) -> (Amount, Amount);
}
