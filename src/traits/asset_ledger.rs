//! The asset ledger collaborator contract.
//!
//! A pool never holds balances itself: each of its two assets lives on an
//! external ledger, and the pool moves value in and out of its custody
//! account through [`AssetLedger`].
//!
//! # Transfer Contract
//!
//! - [`pull`](AssetLedger::pull) moves funds from an owner into custody and
//!   must fail, with no effect, unless the owner authorised the custodian
//!   and holds enough.
//! - [`push`](AssetLedger::push) moves funds from custody to a recipient
//!   and must fail, with no effect, if custody holds too little.
//! - Both are synchronous and all-or-nothing.  There is no pending state.
//!
//! # Compensation
//!
//! When an operation needs two transfers and the second fails, the pool
//! undoes the first with [`revert_pull`](AssetLedger::revert_pull).  The
//! default returns the funds with a plain push; ledgers that track
//! allowances should override it to also restore the allowance the pull
//! consumed.

use crate::domain::{Account, Amount, AssetId};
use crate::error::LedgerError;

/// One asset ledger as seen from a pool's custody account.
///
/// # Implementors
///
/// - [`MemoryCustody`](crate::ledger::MemoryCustody): the in-memory
///   reference token bound to a custody account.
pub trait AssetLedger {
    /// Identity of the asset this ledger tracks.
    #[must_use]
    fn asset(&self) -> AssetId;

    /// The account that holds the pool's custody on this ledger.
    #[must_use]
    fn custodian(&self) -> Account;

    /// Moves `amount` from `owner` into custody.
    ///
    /// # Errors
    ///
    /// Returns a [`LedgerError`] if `owner` has not authorised at least
    /// `amount` to the custodian or holds less than `amount`.
    fn pull(&self, owner: Account, amount: Amount) -> Result<(), LedgerError>;

    /// Moves `amount` from custody to `recipient`.
    ///
    /// # Errors
    ///
    /// Returns a [`LedgerError`] if custody holds less than `amount` or the
    /// ledger rejects the transfer.
    fn push(&self, recipient: Account, amount: Amount) -> Result<(), LedgerError>;

    /// Undoes a successful [`pull`](Self::pull) of `amount` from `owner`.
    ///
    /// # Errors
    ///
    /// Returns a [`LedgerError`] if the funds cannot be returned.
    fn revert_pull(&self, owner: Account, amount: Amount) -> Result<(), LedgerError> {
        self.push(owner, amount)
    }

    /// Returns the balance of `holder`.
    #[must_use]
    fn balance_of(&self, holder: Account) -> Amount;

    /// Returns the custody balance, i.e. `balance_of(custodian())`.
    #[must_use]
    fn custody_balance(&self) -> Amount {
        self.balance_of(self.custodian())
    }
}
