//! Unified error types for the pairswap library.
//!
//! Pool operations return [`SwapError`].  Asset ledger collaborators report
//! [`LedgerError`], which the pool wraps in [`SwapError::TransferFailed`].
//! Loading a [`PoolConfig`](crate::config::PoolConfig) from text reports
//! [`ConfigError`].

use crate::domain::{Account, Amount};

/// Errors surfaced by pool operations.
///
/// Every variant is reported synchronously to the caller and implies that
/// the failed call left no trace: reserves, retained fees, ledger balances
/// and the event journal are exactly as they were before the call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SwapError {
    /// A caller-supplied quantity (liquidity amount or swap input) is zero.
    #[error("insufficient amount: {0}")]
    InsufficientAmount(&'static str),

    /// A pull or push on an asset ledger did not complete.
    #[error("transfer failed: {0}")]
    TransferFailed(#[from] LedgerError),

    /// An intermediate computation left the representable range.
    #[error("arithmetic overflow: {0}")]
    ArithmeticOverflow(&'static str),

    /// The swap would trade against an unseeded reserve and the pool is
    /// configured to reject that.
    #[error("pool reserve is empty")]
    EmptyReserve,

    /// The provider or trader is the pool's own custody account on one of
    /// its ledgers.
    #[error("account {0} is the pool's custody account")]
    CustodianCaller(Account),

    /// The pool configuration or its ledgers are inconsistent.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
}

/// Errors reported by an [`AssetLedger`](crate::traits::AssetLedger).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    /// The debited holder owns less than the transfer amount.
    #[error("insufficient balance: {holder} holds {available}, transfer needs {required}")]
    InsufficientBalance {
        /// Account being debited.
        holder: Account,
        /// Its current balance.
        available: Amount,
        /// Amount the transfer needs.
        required: Amount,
    },

    /// The owner has not authorised the spender for the transfer amount.
    #[error(
        "insufficient allowance: {owner} authorised {spender} for {available}, transfer needs {required}"
    )]
    InsufficientAllowance {
        /// Account whose funds are moved.
        owner: Account,
        /// Account moving them.
        spender: Account,
        /// Remaining allowance.
        available: Amount,
        /// Amount the transfer needs.
        required: Amount,
    },

    /// The account is frozen on this ledger.
    #[error("account {0} is frozen")]
    AccountFrozen(Account),

    /// Minting would push a balance or the total supply past `U256::MAX`.
    #[error("supply overflow")]
    SupplyOverflow,
}

/// Errors reported while loading a pool configuration from text.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The document is not valid TOML or does not match the schema.
    #[error("failed to parse pool configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// The document parsed but describes an invalid pool.
    #[error(transparent)]
    Invalid(#[from] SwapError),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, SwapError>;
