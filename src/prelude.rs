//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use pairswap::prelude::*;
//! ```

pub use crate::config::PoolConfig;
pub use crate::domain::{Account, Amount, AssetId, Fee, PoolEvent, SwapDirection, SwapOutcome};
pub use crate::error::{ConfigError, LedgerError, SwapError};
pub use crate::ledger::{MemoryCustody, MemoryLedger};
pub use crate::math::CheckedArithmetic;
pub use crate::pools::{ConstantProductPool, PoolState};
pub use crate::traits::{AssetLedger, LiquidityPool, SwapPool};
