//! Core trait abstractions.
//!
//! [`AssetLedger`] is the seam to the external asset ledgers; [`SwapPool`]
//! and [`LiquidityPool`] are the operations a pool exposes to its callers.

mod asset_ledger;
mod liquidity_pool;
mod swap_pool;

pub use asset_ledger::AssetLedger;
pub use liquidity_pool::LiquidityPool;
pub use swap_pool::SwapPool;
