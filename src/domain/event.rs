//! Notifications emitted by committed pool operations.

use core::fmt;

use super::{Account, Amount, AssetId};

/// A notification recorded when a pool operation commits.
///
/// Failed operations never record an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoolEvent {
    /// A provider deposited a liquidity pair.
    LiquidityAdded {
        /// Depositing account.
        provider: Account,
        /// Amount of asset X deposited.
        amount_x: Amount,
        /// Amount of asset Y deposited.
        amount_y: Amount,
    },
    /// A trader swapped one asset for the other.
    Swapped {
        /// Trading account.
        trader: Account,
        /// Identity of the asset sold to the pool.
        asset_in: AssetId,
        /// Full input pulled from the trader.
        amount_in: Amount,
        /// Output pushed to the trader.
        amount_out: Amount,
    },
}

impl fmt::Display for PoolEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LiquidityAdded {
                provider,
                amount_x,
                amount_y,
            } => write!(f, "LiquidityAdded({provider}, {amount_x}, {amount_y})"),
            Self::Swapped {
                trader,
                asset_in,
                amount_in,
                amount_out,
            } => write!(f, "Swapped({trader}, {asset_in}, {amount_in}, {amount_out})"),
        }
    }
}
