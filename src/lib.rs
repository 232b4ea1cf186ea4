//! # pairswap
//!
//! A two-asset Constant Product market maker (`x · y = k`) with a fixed
//! 0.3% fee, checked 256-bit reserve accounting and all-or-nothing commits.
//!
//! The pool never holds assets itself.  It keeps two reserve counters and
//! moves funds through two [`AssetLedger`](traits::AssetLedger)s, one per
//! asset.  A call either commits its transfers, reserve update and event
//! together, or fails and leaves everything as it was.
//!
//! ## Seed a pool and execute a swap
//!
//! ```rust
//! use std::sync::Arc;
//! use pairswap::prelude::*;
//!
//! let pool_account = Account::from_bytes([0xee; 20]);
//! let lp = Account::from_bytes([0x01; 20]);
//! let trader = Account::from_bytes([0x02; 20]);
//!
//! // 1. Two tokens and a pool custodied by `pool_account`
//! let tkx = Arc::new(MemoryLedger::new(AssetId::from_bytes([1u8; 20]), "TKX", 18));
//! let tky = Arc::new(MemoryLedger::new(AssetId::from_bytes([2u8; 20]), "TKY", 18));
//! let config = PoolConfig::new(tkx.asset(), tky.asset()).expect("distinct assets");
//! let pool = ConstantProductPool::new(config, tkx.custody(pool_account), tky.custody(pool_account))
//!     .expect("ledgers match config");
//!
//! // 2. Seed 1000 X / 2000 Y
//! let x = Amount::from_units(1_000, 18).expect("fits");
//! let y = Amount::from_units(2_000, 18).expect("fits");
//! tkx.mint(lp, x).expect("mint");
//! tky.mint(lp, y).expect("mint");
//! tkx.approve(lp, pool_account, x);
//! tky.approve(lp, pool_account, y);
//! pool.add_liquidity(lp, x, y).expect("liquidity added");
//!
//! // 3. Sell 10 X for Y
//! let ten = Amount::from_units(10, 18).expect("fits");
//! tkx.mint(trader, ten).expect("mint");
//! tkx.approve(trader, pool_account, ten);
//! let outcome = pool.swap(trader, SwapDirection::XForY, ten).expect("swap");
//!
//! assert_eq!(outcome.amount_out(), Amount::from_u128(19_743_160_687_941_225_977));
//! assert!(pool.is_solvent());
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`Amount`](domain::Amount), [`Account`](domain::Account), [`Fee`](domain::Fee), [`PoolEvent`](domain::PoolEvent), etc. |
//! | [`traits`] | Seams: [`SwapPool`](traits::SwapPool), [`LiquidityPool`](traits::LiquidityPool), [`AssetLedger`](traits::AssetLedger) |
//! | [`config`] | [`PoolConfig`](config::PoolConfig), validated and loadable from TOML |
//! | [`pools`]  | [`ConstantProductPool`](pools::ConstantProductPool) and its [`PoolState`](pools::PoolState) snapshot |
//! | [`ledger`] | [`MemoryLedger`](ledger::MemoryLedger), an in-memory token for tests and demos |
//! | [`math`]   | Checked arithmetic and the constant-product formulas |
//! | [`error`]  | [`SwapError`](error::SwapError), [`LedgerError`](error::LedgerError), [`ConfigError`](error::ConfigError) |
//! | [`prelude`] | Convenience re-exports for common types and traits |

pub mod config;
pub mod domain;
pub mod error;
pub mod ledger;
pub mod math;
pub mod pools;
pub mod prelude;
pub mod traits;
