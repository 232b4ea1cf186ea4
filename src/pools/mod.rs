//! The Constant Product pool and its committed state snapshot.
//!
//! [`ConstantProductPool`] serialises writers and publishes each committed
//! [`PoolState`] atomically, so readers never observe a half-applied call.

pub mod constant_product;
mod state;

#[cfg(test)]
mod proptest_properties;

pub use constant_product::ConstantProductPool;
pub use state::PoolState;
