//! Pool configuration.
//!
//! [`PoolConfig`] is the declarative blueprint for creating a pool.  It is
//! validated on construction and can be loaded from a TOML document.

mod pool_config;

pub use pool_config::PoolConfig;
