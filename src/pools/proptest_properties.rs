//! Property-based tests using `proptest` for pool invariant validation.
//!
//! 1. **Invariant growth**: `reserve_x · reserve_y` never decreases.
//! 2. **Solvency**: custody balance equals `reserve + retained_fee` after any
//!    mix of successful and failed calls.
//! 3. **Zero rejection**: zero inputs fail and leave the pool untouched.
//! 4. **Output bound**: a seeded pool never pays out its whole reserve.
//! 5. **Output monotonicity**: a larger input never yields a smaller output.

use std::sync::Arc;

use proptest::prelude::*;

use crate::domain::{Account, Amount, AssetId, SwapDirection};
use crate::error::SwapError;
use crate::ledger::{MemoryCustody, MemoryLedger};
use crate::math::quote_exact_in;
use crate::pools::ConstantProductPool;
use crate::traits::{LiquidityPool, SwapPool};

type Pool = ConstantProductPool<MemoryCustody, MemoryCustody>;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

const POOL: Account = Account::from_bytes([0xee; 20]);
const LP: Account = Account::from_bytes([0x01; 20]);
const TRADER: Account = Account::from_bytes([0x02; 20]);

struct Harness {
    tkx: Arc<MemoryLedger>,
    tky: Arc<MemoryLedger>,
    pool: Pool,
}

fn fund(ledger: &MemoryLedger, who: Account, amount: u128) {
    let Ok(()) = ledger.mint(who, Amount::from_u128(amount)) else {
        panic!("mint");
    };
    ledger.approve(who, POOL, Amount::from_u128(amount));
}

/// Pool seeded with `(rx, ry)` and a trader holding and approving
/// `trader_funds` of each asset.
fn make_pool(rx: u128, ry: u128, trader_funds: u128) -> Harness {
    let tkx = Arc::new(MemoryLedger::new(AssetId::from_bytes([0x11; 20]), "TKX", 18));
    let tky = Arc::new(MemoryLedger::new(AssetId::from_bytes([0x22; 20]), "TKY", 18));
    let Ok(pool) = Pool::from_ledgers(tkx.custody(POOL), tky.custody(POOL)) else {
        panic!("valid pool");
    };
    fund(&tkx, LP, rx);
    fund(&tky, LP, ry);
    let Ok(()) = pool.add_liquidity(LP, Amount::from_u128(rx), Amount::from_u128(ry)) else {
        panic!("seed liquidity");
    };
    fund(&tkx, TRADER, trader_funds);
    fund(&tky, TRADER, trader_funds);
    Harness { tkx, tky, pool }
}

const fn direction_of(sells_x: bool) -> SwapDirection {
    if sells_x {
        SwapDirection::XForY
    } else {
        SwapDirection::YForX
    }
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Reserve values spanning dust pools up to 18-decimal token scale.
fn reserve_strategy() -> impl Strategy<Value = u128> {
    prop_oneof![
        1u128..=1_000u128,
        1_000u128..=10_000_000u128,
        10u128.pow(18)..=10u128.pow(24),
    ]
}

/// A short sequence of `(sells_x, amount)` swaps.
fn swap_sequence() -> impl Strategy<Value = Vec<(bool, u128)>> {
    prop::collection::vec((any::<bool>(), 1u128..=10u128.pow(21)), 1..12)
}

// ---------------------------------------------------------------------------
// Property 1: Invariant Growth
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_invariant_never_decreases(
        rx in reserve_strategy(),
        ry in reserve_strategy(),
        swaps in swap_sequence(),
    ) {
        let h = make_pool(rx, ry, 10u128.pow(24));
        let mut k = h.pool.state().invariant();

        for (sells_x, amount) in swaps {
            if h.pool.swap(TRADER, direction_of(sells_x), Amount::from_u128(amount)).is_err() {
                continue;
            }
            let k_next = h.pool.state().invariant();
            prop_assert!(k_next >= k, "k decreased: {} -> {}", k, k_next);
            k = k_next;
        }
    }
}

// ---------------------------------------------------------------------------
// Property 2: Solvency
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_custody_matches_reserves_plus_fees(
        rx in reserve_strategy(),
        ry in reserve_strategy(),
        trader_funds in 0u128..=10u128.pow(21),
        swaps in swap_sequence(),
    ) {
        // trader funds are small enough that some swaps fail on the pull
        let h = make_pool(rx, ry, trader_funds);

        for (sells_x, amount) in swaps {
            let _ = h.pool.swap(TRADER, direction_of(sells_x), Amount::from_u128(amount));
            prop_assert!(h.pool.is_solvent(), "insolvent after swap: {}", h.pool.state());
        }

        let committed = h.pool.events().len();
        let Ok(()) = h.pool.add_liquidity(TRADER, Amount::from_u128(1), Amount::from_u128(1))
        else {
            prop_assert_eq!(h.pool.events().len(), committed);
            prop_assert!(h.pool.is_solvent());
            return Ok(());
        };
        prop_assert_eq!(h.pool.events().len(), committed + 1);
        prop_assert!(h.pool.is_solvent());
    }
}

// ---------------------------------------------------------------------------
// Property 3: Zero Rejection
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_zero_amounts_rejected(
        rx in reserve_strategy(),
        ry in reserve_strategy(),
        other in 1u128..=10u128.pow(20),
        sells_x in any::<bool>(),
    ) {
        let h = make_pool(rx, ry, 10u128.pow(20));
        let before = h.pool.state();
        let x_balance = h.tkx.balance_of(TRADER);
        let y_balance = h.tky.balance_of(TRADER);

        let swapped = h.pool.swap(TRADER, direction_of(sells_x), Amount::ZERO);
        prop_assert!(matches!(swapped, Err(SwapError::InsufficientAmount(_))));

        let (ax, ay) = if sells_x {
            (Amount::ZERO, Amount::from_u128(other))
        } else {
            (Amount::from_u128(other), Amount::ZERO)
        };
        let added = h.pool.add_liquidity(TRADER, ax, ay);
        prop_assert!(matches!(added, Err(SwapError::InsufficientAmount(_))));

        prop_assert_eq!(h.pool.state(), before);
        prop_assert_eq!(h.pool.events().len(), 1);
        prop_assert_eq!(h.tkx.balance_of(TRADER), x_balance);
        prop_assert_eq!(h.tky.balance_of(TRADER), y_balance);
    }
}

// ---------------------------------------------------------------------------
// Property 4: Output Bound
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_output_below_reserve(
        reserve_in in 1u128..=u128::MAX / 2,
        reserve_out in 1u128..=u128::MAX,
        amount_in in 1u128..=u128::MAX,
    ) {
        let Ok(outcome) = quote_exact_in(
            SwapDirection::XForY,
            Amount::from_u128(amount_in),
            Amount::from_u128(reserve_in),
            Amount::from_u128(reserve_out),
        ) else {
            return Ok(());
        };
        prop_assert!(
            outcome.amount_out() < Amount::from_u128(reserve_out),
            "out={} reserve_out={}",
            outcome.amount_out(), reserve_out
        );
    }
}

// ---------------------------------------------------------------------------
// Property 5: Output Monotonicity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_output_monotone_in_input(
        rx in reserve_strategy(),
        ry in reserve_strategy(),
        small in 1u128..=10u128.pow(22),
        extra in 0u128..=10u128.pow(22),
    ) {
        let h = make_pool(rx, ry, 0);
        let large = small + extra;
        let (Ok(lo), Ok(hi)) = (
            h.pool.quote_x_for_y(Amount::from_u128(small)),
            h.pool.quote_x_for_y(Amount::from_u128(large)),
        ) else {
            return Ok(());
        };
        prop_assert!(
            lo.amount_out() <= hi.amount_out(),
            "out({})={} > out({})={}",
            small, lo.amount_out(), large, hi.amount_out()
        );
    }
}
