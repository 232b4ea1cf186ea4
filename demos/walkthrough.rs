//! Constant Product pool walkthrough.
//!
//! Loads a pool configuration from TOML, deploys two in-memory tokens,
//! seeds the pool, runs both swap directions and shows a rejected call
//! leaving the pool untouched.
//!
//! # Run
//!
//! ```bash
//! RUST_LOG=pairswap=info cargo run --example walkthrough
//! ```

use std::sync::Arc;

use pairswap::prelude::*;
use tracing_subscriber::EnvFilter;

const CONFIG: &str = r#"
asset-x = "0x1111111111111111111111111111111111111111"
asset-y = "0x2222222222222222222222222222222222222222"
require-seeded-reserves = true
"#;

fn tokens(whole: u64) -> Result<Amount, &'static str> {
    Amount::from_units(whole, 18).ok_or("amount does not fit")
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Constant Product Pool (x · y = k, fee 997/1000) ===\n");

    // ── 1. Load the configuration ───────────────────────────────────────
    let config = PoolConfig::from_toml_str(CONFIG)?;
    println!("Asset X: {}", config.asset_x());
    println!("Asset Y: {}", config.asset_y());

    // ── 2. Deploy tokens and the pool ───────────────────────────────────
    let pool_account = Account::from_bytes([0xee; 20]);
    let deployer = Account::from_bytes([0x01; 20]);
    let trader = Account::from_bytes([0x02; 20]);

    let tkx = Arc::new(MemoryLedger::new(config.asset_x(), "TKX", 18));
    let tky = Arc::new(MemoryLedger::new(config.asset_y(), "TKY", 18));
    let pool = ConstantProductPool::new(config, tkx.custody(pool_account), tky.custody(pool_account))?;

    for (ledger, amount) in [(&tkx, tokens(10_000)?), (&tky, tokens(10_000)?)] {
        ledger.mint(deployer, amount)?;
        ledger.approve(deployer, pool_account, amount);
    }
    tkx.mint(trader, tokens(100)?)?;
    tky.mint(trader, tokens(100)?)?;
    tkx.approve(trader, pool_account, tokens(100)?);
    tky.approve(trader, pool_account, tokens(100)?);

    // ── 3. Seed liquidity ───────────────────────────────────────────────
    pool.add_liquidity(deployer, tokens(1_000)?, tokens(2_000)?)?;
    let (rx, ry) = pool.reserves();
    println!("\nSeeded:     reserve_x = {rx}, reserve_y = {ry}");

    // ── 4. Swap both ways ───────────────────────────────────────────────
    let quote = pool.quote(SwapDirection::XForY, tokens(10)?)?;
    println!("Quote:      {quote}");

    println!(
        "Trader:     x = {}, y = {} (before)",
        tkx.balance_of(trader),
        tky.balance_of(trader)
    );
    let xy = pool.swap(trader, SwapDirection::XForY, tokens(10)?)?;
    println!("Swap X->Y:  {xy}");
    println!(
        "Trader:     x = {}, y = {} (after)",
        tkx.balance_of(trader),
        tky.balance_of(trader)
    );
    let (rx, ry) = pool.reserves();
    println!("Reserves:   reserve_x = {rx}, reserve_y = {ry}");

    let yx = pool.swap(trader, SwapDirection::YForX, tokens(20)?)?;
    println!("Swap Y->X:  {yx}");

    let state = pool.state();
    println!("State:      {state}");
    println!("k:          {}", state.invariant());

    // ── 5. A rejected call changes nothing ──────────────────────────────
    match pool.swap(trader, SwapDirection::XForY, Amount::ZERO) {
        Ok(outcome) => println!("Unexpected: {outcome}"),
        Err(err) => println!("\nRejected:   {err}"),
    }
    println!("Unchanged:  {}", pool.state() == state);

    // ── 6. Event journal ────────────────────────────────────────────────
    println!("\nEvents:");
    for event in pool.take_events() {
        println!("  {event}");
    }
    println!("\nSolvent:    {}", pool.is_solvent());

    Ok(())
}
