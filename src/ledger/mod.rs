//! Reference asset ledger.
//!
//! [`MemoryLedger`] is an in-memory fungible token with balances,
//! allowances and minting.  [`MemoryCustody`] binds it to a pool's custody
//! account and implements [`AssetLedger`](crate::traits::AssetLedger), so a
//! pool can be simulated and tested without an external system.

mod memory;

pub use memory::{MemoryCustody, MemoryLedger};
