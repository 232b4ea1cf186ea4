//! In-memory fungible token ledger.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::trace;

use crate::domain::{Account, Amount, AssetId};
use crate::error::LedgerError;
use crate::traits::AssetLedger;

#[derive(Debug, Default)]
struct Books {
    balances: HashMap<Account, Amount>,
    allowances: HashMap<(Account, Account), Amount>,
    frozen: HashSet<Account>,
    total_supply: Amount,
}

impl Books {
    fn balance(&self, holder: Account) -> Amount {
        self.balances.get(&holder).copied().unwrap_or(Amount::ZERO)
    }

    fn allowance(&self, owner: Account, spender: Account) -> Amount {
        self.allowances
            .get(&(owner, spender))
            .copied()
            .unwrap_or(Amount::ZERO)
    }

    fn ensure_not_frozen(&self, account: Account) -> Result<(), LedgerError> {
        if self.frozen.contains(&account) {
            return Err(LedgerError::AccountFrozen(account));
        }
        Ok(())
    }

    /// Checks every precondition of `from → to` before touching a balance.
    fn move_funds(&mut self, from: Account, to: Account, amount: Amount) -> Result<(), LedgerError> {
        self.ensure_not_frozen(from)?;
        self.ensure_not_frozen(to)?;
        let available = self.balance(from);
        let debited = available
            .checked_sub(&amount)
            .ok_or(LedgerError::InsufficientBalance {
                holder: from,
                available,
                required: amount,
            })?;
        if from == to {
            return Ok(());
        }
        let credited = self
            .balance(to)
            .checked_add(&amount)
            .ok_or(LedgerError::SupplyOverflow)?;
        self.balances.insert(from, debited);
        self.balances.insert(to, credited);
        Ok(())
    }
}

/// An in-memory fungible token: balances, allowances, minting and an
/// account freeze switch.
///
/// Every operation is atomic under the ledger's own lock.  Share it with
/// `Arc` and hand a [`MemoryCustody`] to the pool.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use pairswap::domain::{Account, Amount, AssetId};
/// use pairswap::ledger::MemoryLedger;
///
/// let token = Arc::new(MemoryLedger::new(AssetId::from_bytes([1u8; 20]), "TKX", 18));
/// let alice = Account::from_bytes([0xa1; 20]);
/// token.mint(alice, Amount::from_u128(500)).expect("mint");
/// assert_eq!(token.balance_of(alice), Amount::from_u128(500));
/// ```
#[derive(Debug)]
pub struct MemoryLedger {
    asset: AssetId,
    symbol: String,
    decimals: u8,
    books: Mutex<Books>,
}

impl MemoryLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new(asset: AssetId, symbol: impl Into<String>, decimals: u8) -> Self {
        Self {
            asset,
            symbol: symbol.into(),
            decimals,
            books: Mutex::new(Books::default()),
        }
    }

    /// Identity of the asset.
    #[must_use]
    pub const fn asset(&self) -> AssetId {
        self.asset
    }

    /// Ticker symbol.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Number of decimals of one whole unit.
    #[must_use]
    pub const fn decimals(&self) -> u8 {
        self.decimals
    }

    /// Creates `amount` new units owned by `to`.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::SupplyOverflow`] if the total supply would
    /// exceed `U256::MAX`.
    pub fn mint(&self, to: Account, amount: Amount) -> Result<(), LedgerError> {
        let mut books = self.books.lock();
        let supply = books
            .total_supply
            .checked_add(&amount)
            .ok_or(LedgerError::SupplyOverflow)?;
        let balance = books
            .balance(to)
            .checked_add(&amount)
            .ok_or(LedgerError::SupplyOverflow)?;
        books.total_supply = supply;
        books.balances.insert(to, balance);
        trace!(asset = %self.asset, %to, %amount, "mint");
        Ok(())
    }

    /// Sets the amount `spender` may move out of `owner`'s balance.
    pub fn approve(&self, owner: Account, spender: Account, amount: Amount) {
        self.books.lock().allowances.insert((owner, spender), amount);
        trace!(asset = %self.asset, %owner, %spender, %amount, "approve");
    }

    /// Returns the remaining allowance of `spender` over `owner`.
    #[must_use]
    pub fn allowance(&self, owner: Account, spender: Account) -> Amount {
        self.books.lock().allowance(owner, spender)
    }

    /// Returns the balance of `holder`.
    #[must_use]
    pub fn balance_of(&self, holder: Account) -> Amount {
        self.books.lock().balance(holder)
    }

    /// Returns the total minted supply.
    #[must_use]
    pub fn total_supply(&self) -> Amount {
        self.books.lock().total_supply
    }

    /// Moves `amount` from `from` to `to`.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::AccountFrozen`] if either account is frozen.
    /// - [`LedgerError::InsufficientBalance`] if `from` holds too little.
    pub fn transfer(&self, from: Account, to: Account, amount: Amount) -> Result<(), LedgerError> {
        self.books.lock().move_funds(from, to, amount)?;
        trace!(asset = %self.asset, %from, %to, %amount, "transfer");
        Ok(())
    }

    /// Moves `amount` from `from` to `to` on behalf of `spender`, consuming
    /// allowance.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::InsufficientAllowance`] if `spender` is not
    ///   authorised for `amount`.
    /// - Any error of [`transfer`](Self::transfer).
    pub fn transfer_from(
        &self,
        spender: Account,
        from: Account,
        to: Account,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        let mut books = self.books.lock();
        let available = books.allowance(from, spender);
        let remaining = available
            .checked_sub(&amount)
            .ok_or(LedgerError::InsufficientAllowance {
                owner: from,
                spender,
                available,
                required: amount,
            })?;
        books.move_funds(from, to, amount)?;
        books.allowances.insert((from, spender), remaining);
        trace!(asset = %self.asset, %spender, %from, %to, %amount, "transfer_from");
        Ok(())
    }

    /// Reverses a completed [`transfer_from`](Self::transfer_from): moves
    /// the funds back and restores the allowance.
    fn undo_transfer_from(
        &self,
        spender: Account,
        from: Account,
        to: Account,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        let mut books = self.books.lock();
        // restored allowance saturates rather than failing the undo
        let restored = books
            .allowance(from, spender)
            .checked_add(&amount)
            .unwrap_or(Amount::MAX);
        books.move_funds(to, from, amount)?;
        books.allowances.insert((from, spender), restored);
        trace!(asset = %self.asset, %spender, %from, %to, %amount, "undo transfer_from");
        Ok(())
    }

    /// Blocks every transfer into or out of `account`.
    pub fn freeze(&self, account: Account) {
        self.books.lock().frozen.insert(account);
    }

    /// Lifts a [`freeze`](Self::freeze).
    pub fn thaw(&self, account: Account) {
        self.books.lock().frozen.remove(&account);
    }

    /// Returns a handle that lets a pool custodied by `custodian` use this
    /// ledger.
    #[must_use]
    pub fn custody(self: &Arc<Self>, custodian: Account) -> MemoryCustody {
        MemoryCustody {
            ledger: Arc::clone(self),
            custodian,
        }
    }
}

/// A [`MemoryLedger`] seen from a pool's custody account.
///
/// `pull` is `transfer_from(custodian, owner → custodian)`; `push` is
/// `transfer(custodian → recipient)`; `revert_pull` also restores the
/// allowance the pull consumed.
#[derive(Debug, Clone)]
pub struct MemoryCustody {
    ledger: Arc<MemoryLedger>,
    custodian: Account,
}

impl MemoryCustody {
    /// Returns the underlying ledger.
    #[must_use]
    pub fn ledger(&self) -> &Arc<MemoryLedger> {
        &self.ledger
    }
}

impl AssetLedger for MemoryCustody {
    fn asset(&self) -> AssetId {
        self.ledger.asset()
    }

    fn custodian(&self) -> Account {
        self.custodian
    }

    fn pull(&self, owner: Account, amount: Amount) -> Result<(), LedgerError> {
        self.ledger
            .transfer_from(self.custodian, owner, self.custodian, amount)
    }

    fn push(&self, recipient: Account, amount: Amount) -> Result<(), LedgerError> {
        self.ledger.transfer(self.custodian, recipient, amount)
    }

    fn revert_pull(&self, owner: Account, amount: Amount) -> Result<(), LedgerError> {
        self.ledger
            .undo_transfer_from(self.custodian, owner, self.custodian, amount)
    }

    fn balance_of(&self, holder: Account) -> Amount {
        self.ledger.balance_of(holder)
    }
}
