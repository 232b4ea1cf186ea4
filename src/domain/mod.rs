//! Fundamental domain value types used throughout the pool.
//!
//! Amounts, account and asset identities, the fixed fee, swap directions
//! and outcomes, and the events a pool records.  All types are small
//! `Copy` newtypes or enums with validated constructors where an invariant
//! exists.

mod account;
mod amount;
mod asset_id;
mod direction;
mod event;
mod fee;
mod swap_outcome;

pub use account::Account;
pub use amount::Amount;
pub use asset_id::AssetId;
pub use direction::SwapDirection;
pub use event::PoolEvent;
pub use fee::Fee;
pub use swap_outcome::SwapOutcome;
