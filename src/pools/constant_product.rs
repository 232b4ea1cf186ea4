//! Constant Product pool ledger (`x · y = k`) with a fixed 0.3% fee.
//!
//! The pool owns two reserve counters and delegates custody of the
//! underlying assets to two [`AssetLedger`]s.
//!
//! # Swap Algorithm (X → Y; Y → X is symmetric)
//!
//! 1. `in_with_fee = amount_in × 997 / 1000` (floor)
//! 2. `amount_out  = reserve_y × in_with_fee / (reserve_x + in_with_fee)` (floor)
//! 3. pull `amount_in` of X from the trader
//! 4. push `amount_out` of Y to the trader
//! 5. `reserve_x += in_with_fee`, `reserve_y -= amount_out`
//!
//! # Commit Protocol
//!
//! Every mutating call runs under one writer lock.  The next state is
//! computed first (all arithmetic checked), then the transfers run, and only
//! when every transfer succeeded is the new state published and the event
//! recorded.  A transfer that succeeded before a later one failed is
//! reverted through [`AssetLedger::revert_pull`].
//!
//! Reads load the last published [`PoolState`] without the writer lock.

use std::sync::Arc;

use arc_swap::ArcSwap;
use parking_lot::Mutex;
use tracing::{debug, error, info, instrument, warn};

use super::PoolState;
use crate::config::PoolConfig;
use crate::domain::{Account, Amount, AssetId, PoolEvent, SwapDirection, SwapOutcome};
use crate::error::{LedgerError, Result, SwapError};
use crate::math::quote_exact_in;
use crate::traits::{AssetLedger, LiquidityPool, SwapPool};

/// A two-asset Constant Product pool.
///
/// Created once with zero reserves; liquidity can only be added.  The pool
/// is `Sync` when its ledgers are, so it can be shared across threads by
/// reference or `Arc`; concurrent mutating calls are serialised.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use pairswap::domain::{Account, Amount, AssetId};
/// use pairswap::ledger::MemoryLedger;
/// use pairswap::pools::ConstantProductPool;
/// use pairswap::traits::LiquidityPool;
///
/// let pool_account = Account::from_bytes([0xee; 20]);
/// let lp = Account::from_bytes([0x01; 20]);
/// let tkx = Arc::new(MemoryLedger::new(AssetId::from_bytes([1u8; 20]), "TKX", 18));
/// let tky = Arc::new(MemoryLedger::new(AssetId::from_bytes([2u8; 20]), "TKY", 18));
///
/// let pool = ConstantProductPool::from_ledgers(tkx.custody(pool_account), tky.custody(pool_account))
///     .expect("distinct assets");
///
/// tkx.mint(lp, Amount::from_u128(1_000_000)).expect("mint");
/// tky.mint(lp, Amount::from_u128(2_000_000)).expect("mint");
/// tkx.approve(lp, pool_account, Amount::from_u128(1_000_000));
/// tky.approve(lp, pool_account, Amount::from_u128(2_000_000));
/// pool.add_liquidity(lp, Amount::from_u128(1_000_000), Amount::from_u128(2_000_000))
///     .expect("liquidity added");
///
/// let quote = pool.quote_x_for_y(Amount::from_u128(1_000)).expect("quote");
/// assert_eq!(quote.amount_out(), Amount::from_u128(1_992));
/// ```
pub struct ConstantProductPool<X, Y> {
    config: PoolConfig,
    ledger_x: X,
    ledger_y: Y,
    state: ArcSwap<PoolState>,
    journal: Mutex<Vec<PoolEvent>>,
}

impl<X, Y> ConstantProductPool<X, Y>
where
    X: AssetLedger,
    Y: AssetLedger,
{
    /// Creates an empty pool over the two ledgers.
    ///
    /// # Errors
    ///
    /// - Propagates any error from [`PoolConfig::validate`].
    /// - Returns [`SwapError::InvalidConfiguration`] if a ledger's asset
    ///   does not match the one the config names.
    pub fn new(config: PoolConfig, ledger_x: X, ledger_y: Y) -> Result<Self> {
        config.validate()?;
        if ledger_x.asset() != config.asset_x() {
            return Err(SwapError::InvalidConfiguration(
                "ledger_x does not track asset_x",
            ));
        }
        if ledger_y.asset() != config.asset_y() {
            return Err(SwapError::InvalidConfiguration(
                "ledger_y does not track asset_y",
            ));
        }
        info!(asset_x = %config.asset_x(), asset_y = %config.asset_y(), "pool created");
        Ok(Self {
            config,
            ledger_x,
            ledger_y,
            state: ArcSwap::from_pointee(PoolState::EMPTY),
            journal: Mutex::new(Vec::new()),
        })
    }

    /// Creates an empty pool with the default configuration for the
    /// ledgers' assets.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InvalidConfiguration`] if both ledgers track the
    /// same asset.
    pub fn from_ledgers(ledger_x: X, ledger_y: Y) -> Result<Self> {
        let config = PoolConfig::new(ledger_x.asset(), ledger_y.asset())?;
        Self::new(config, ledger_x, ledger_y)
    }

    /// Returns the pool configuration.
    #[must_use]
    pub const fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// Returns the identity of asset X.
    #[must_use]
    pub const fn asset_x(&self) -> AssetId {
        self.config.asset_x()
    }

    /// Returns the identity of asset Y.
    #[must_use]
    pub const fn asset_y(&self) -> AssetId {
        self.config.asset_y()
    }

    /// Returns the ledger of asset X.
    pub const fn ledger_x(&self) -> &X {
        &self.ledger_x
    }

    /// Returns the ledger of asset Y.
    pub const fn ledger_y(&self) -> &Y {
        &self.ledger_y
    }

    /// Returns the last committed state.
    pub fn state(&self) -> PoolState {
        **self.state.load()
    }

    /// Returns the current reserve of asset X.
    pub fn reserve_x(&self) -> Amount {
        self.state().reserve_x()
    }

    /// Returns the current reserve of asset Y.
    pub fn reserve_y(&self) -> Amount {
        self.state().reserve_y()
    }

    /// Returns the asset X fees held in custody beyond `reserve_x`.
    pub fn retained_fee_x(&self) -> Amount {
        self.state().retained_fee_x()
    }

    /// Returns the asset Y fees held in custody beyond `reserve_y`.
    pub fn retained_fee_y(&self) -> Amount {
        self.state().retained_fee_y()
    }

    /// Returns every recorded event in commit order.
    #[must_use]
    pub fn events(&self) -> Vec<PoolEvent> {
        self.journal.lock().clone()
    }

    /// Removes and returns every recorded event.
    #[must_use]
    pub fn take_events(&self) -> Vec<PoolEvent> {
        core::mem::take(&mut *self.journal.lock())
    }

    /// Reads the custody balance of each ledger.
    pub fn custody_balances(&self) -> (Amount, Amount) {
        (self.ledger_x.custody_balance(), self.ledger_y.custody_balance())
    }

    /// Returns `true` if each ledger's custody equals the committed
    /// `reserve + retained_fee`.
    ///
    /// Transfers made to the custody account outside the pool break the
    /// equality.
    #[must_use]
    pub fn is_solvent(&self) -> bool {
        // hold the writer lock so no commit lands between the two reads
        let _guard = self.journal.lock();
        let Ok(expected) = self.state().expected_custody() else {
            return false;
        };
        expected == self.custody_balances()
    }

    /// Swaps `amount_x_in` of X for Y.  See [`SwapPool::swap`].
    ///
    /// # Errors
    ///
    /// See [`SwapPool::swap`].
    pub fn swap_x_for_y(&self, trader: Account, amount_x_in: Amount) -> Result<SwapOutcome> {
        self.swap(trader, SwapDirection::XForY, amount_x_in)
    }

    /// Swaps `amount_y_in` of Y for X.  See [`SwapPool::swap`].
    ///
    /// # Errors
    ///
    /// See [`SwapPool::swap`].
    pub fn swap_y_for_x(&self, trader: Account, amount_y_in: Amount) -> Result<SwapOutcome> {
        self.swap(trader, SwapDirection::YForX, amount_y_in)
    }

    /// Quotes an X → Y swap.  See [`SwapPool::quote`].
    ///
    /// # Errors
    ///
    /// See [`SwapPool::quote`].
    pub fn quote_x_for_y(&self, amount_x_in: Amount) -> Result<SwapOutcome> {
        self.quote(SwapDirection::XForY, amount_x_in)
    }

    /// Quotes a Y → X swap.  See [`SwapPool::quote`].
    ///
    /// # Errors
    ///
    /// See [`SwapPool::quote`].
    pub fn quote_y_for_x(&self, amount_y_in: Amount) -> Result<SwapOutcome> {
        self.quote(SwapDirection::YForX, amount_y_in)
    }

    fn asset_in(&self, direction: SwapDirection) -> AssetId {
        match direction {
            SwapDirection::XForY => self.asset_x(),
            SwapDirection::YForX => self.asset_y(),
        }
    }

    /// Returns `(ledger_in, ledger_out)` for `direction`.
    fn oriented_ledgers(&self, direction: SwapDirection) -> (&dyn AssetLedger, &dyn AssetLedger) {
        match direction {
            SwapDirection::XForY => (&self.ledger_x, &self.ledger_y),
            SwapDirection::YForX => (&self.ledger_y, &self.ledger_x),
        }
    }

    /// Rejects the pool's own custody account as a counterparty: its pulls
    /// would move nothing while the reserves are still credited.
    fn ensure_external(&self, account: Account) -> Result<()> {
        if account == self.ledger_x.custodian() || account == self.ledger_y.custodian() {
            return Err(SwapError::CustodianCaller(account));
        }
        Ok(())
    }

    fn quote_against(
        &self,
        state: &PoolState,
        direction: SwapDirection,
        amount_in: Amount,
    ) -> Result<SwapOutcome> {
        if amount_in.is_zero() {
            return Err(SwapError::InsufficientAmount("swap input must be positive"));
        }
        if self.config.require_seeded_reserves() && state.has_empty_reserve() {
            return Err(SwapError::EmptyReserve);
        }
        let (reserve_in, reserve_out) = state.oriented(direction);
        quote_exact_in(direction, amount_in, reserve_in, reserve_out)
    }
}

/// Undoes a completed pull after a later step failed and returns the
/// original failure.
fn revert_pull(
    ledger: &dyn AssetLedger,
    owner: Account,
    amount: Amount,
    cause: LedgerError,
) -> SwapError {
    if let Err(revert_err) = ledger.revert_pull(owner, amount) {
        error!(
            asset = %ledger.asset(),
            %owner,
            %amount,
            %cause,
            %revert_err,
            "failed to revert pull; custody holds funds not reflected in reserves"
        );
    } else {
        warn!(asset = %ledger.asset(), %owner, %amount, %cause, "pull reverted");
    }
    SwapError::TransferFailed(cause)
}

impl<X, Y> SwapPool for ConstantProductPool<X, Y>
where
    X: AssetLedger,
    Y: AssetLedger,
{
    /// Executes an exact-in swap.
    ///
    /// The full `amount_in` is pulled from the trader; only the fee-adjusted
    /// part is credited to the input reserve.
    ///
    /// # Errors
    ///
    /// - [`SwapError::InsufficientAmount`] if `amount_in` is zero.
    /// - [`SwapError::CustodianCaller`] if `trader` is a custody account.
    /// - [`SwapError::EmptyReserve`] if seeded reserves are required and a
    ///   reserve is zero.
    /// - [`SwapError::TransferFailed`] if the pull or push fails.
    /// - [`SwapError::ArithmeticOverflow`] if any arithmetic overflows.
    #[instrument(skip_all, fields(%trader, %direction, %amount_in))]
    fn swap(
        &self,
        trader: Account,
        direction: SwapDirection,
        amount_in: Amount,
    ) -> Result<SwapOutcome> {
        self.ensure_external(trader)
            .inspect_err(|err| warn!(%err, "swap rejected"))?;
        let mut journal = self.journal.lock();
        let current = self.state();

        let outcome = self
            .quote_against(&current, direction, amount_in)
            .inspect_err(|err| warn!(%err, "swap rejected"))?;
        let next = current
            .after_swap(&outcome)
            .inspect_err(|err| warn!(%err, "swap rejected"))?;

        let (ledger_in, ledger_out) = self.oriented_ledgers(direction);
        ledger_in
            .pull(trader, amount_in)
            .inspect_err(|err| warn!(%err, "swap pull failed"))?;
        if let Err(cause) = ledger_out.push(trader, outcome.amount_out()) {
            warn!(%cause, "swap push failed");
            return Err(revert_pull(ledger_in, trader, amount_in, cause));
        }

        self.state.store(Arc::new(next));
        let event = PoolEvent::Swapped {
            trader,
            asset_in: self.asset_in(direction),
            amount_in,
            amount_out: outcome.amount_out(),
        };
        journal.push(event);
        info!(
            amount_out = %outcome.amount_out(),
            reserve_x = %next.reserve_x(),
            reserve_y = %next.reserve_y(),
            "swapped"
        );
        Ok(outcome)
    }

    fn quote(&self, direction: SwapDirection, amount_in: Amount) -> Result<SwapOutcome> {
        let outcome = self.quote_against(&self.state(), direction, amount_in)?;
        debug!(%outcome, "quoted");
        Ok(outcome)
    }

    fn assets(&self) -> (AssetId, AssetId) {
        (self.asset_x(), self.asset_y())
    }

    fn reserves(&self) -> (Amount, Amount) {
        let state = self.state();
        (state.reserve_x(), state.reserve_y())
    }
}

impl<X, Y> LiquidityPool for ConstantProductPool<X, Y>
where
    X: AssetLedger,
    Y: AssetLedger,
{
    /// Deposits a liquidity pair at any ratio.
    ///
    /// # Errors
    ///
    /// - [`SwapError::InsufficientAmount`] if either amount is zero.
    /// - [`SwapError::CustodianCaller`] if `provider` is a custody account.
    /// - [`SwapError::TransferFailed`] if either pull fails.
    /// - [`SwapError::ArithmeticOverflow`] if a reserve would overflow.
    #[instrument(skip_all, fields(%provider, %amount_x, %amount_y))]
    fn add_liquidity(&self, provider: Account, amount_x: Amount, amount_y: Amount) -> Result<()> {
        if amount_x.is_zero() || amount_y.is_zero() {
            warn!("liquidity rejected: zero amount");
            return Err(SwapError::InsufficientAmount(
                "liquidity amounts must both be positive",
            ));
        }
        self.ensure_external(provider)
            .inspect_err(|err| warn!(%err, "liquidity rejected"))?;

        let mut journal = self.journal.lock();
        let next = self
            .state()
            .with_liquidity(amount_x, amount_y)
            .inspect_err(|err| warn!(%err, "liquidity rejected"))?;

        self.ledger_x
            .pull(provider, amount_x)
            .inspect_err(|err| warn!(%err, "liquidity pull of X failed"))?;
        if let Err(cause) = self.ledger_y.pull(provider, amount_y) {
            warn!(%cause, "liquidity pull of Y failed");
            return Err(revert_pull(&self.ledger_x, provider, amount_x, cause));
        }

        self.state.store(Arc::new(next));
        journal.push(PoolEvent::LiquidityAdded {
            provider,
            amount_x,
            amount_y,
        });
        info!(
            reserve_x = %next.reserve_x(),
            reserve_y = %next.reserve_y(),
            "liquidity added"
        );
        Ok(())
    }
}

impl<X, Y> core::fmt::Debug for ConstantProductPool<X, Y> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ConstantProductPool")
            .field("config", &self.config)
            .field("state", &**self.state.load())
            .finish_non_exhaustive()
    }
}
