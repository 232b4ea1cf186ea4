//! Arithmetic utilities for pool calculations.
//!
//! [`CheckedArithmetic`] gives overflow-safe operations on domain types;
//! the constant-product functions compute fee-adjusted inputs and swap
//! outputs with truncating division at every step.

mod checked;
mod constant_product;

pub use checked::CheckedArithmetic;
pub use constant_product::{amount_in_with_fee, amount_out, quote_exact_in};
