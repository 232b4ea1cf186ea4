//! Configuration for a two-asset constant-product pool.

use serde::{Deserialize, Serialize};

use crate::domain::AssetId;
use crate::error::{ConfigError, SwapError};

/// Declarative blueprint of a pool: which two assets it trades and how it
/// treats swaps against unseeded reserves.
///
/// The fee is not part of the configuration; every pool charges
/// [`Fee::STANDARD`](crate::domain::Fee::STANDARD).
///
/// # Validation
///
/// - `asset_x` and `asset_y` must be distinct.
///
/// # File Format
///
/// ```toml
/// asset-x = "0x1111111111111111111111111111111111111111"
/// asset-y = "0x2222222222222222222222222222222222222222"
/// require-seeded-reserves = true   # optional, defaults to false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct PoolConfig {
    asset_x: AssetId,
    asset_y: AssetId,
    #[serde(default)]
    require_seeded_reserves: bool,
}

impl PoolConfig {
    /// Creates a config trading `asset_x` against `asset_y` with swaps
    /// against empty reserves allowed.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InvalidConfiguration`] if the assets are equal.
    pub fn new(asset_x: AssetId, asset_y: AssetId) -> Result<Self, SwapError> {
        let config = Self {
            asset_x,
            asset_y,
            require_seeded_reserves: false,
        };
        config.validate()?;
        Ok(config)
    }

    /// When `required`, swaps fail with [`SwapError::EmptyReserve`] while
    /// either reserve is zero instead of quoting a zero output.
    #[must_use]
    pub fn with_seeded_reserves_required(mut self, required: bool) -> Self {
        self.require_seeded_reserves = required;
        self
    }

    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::Parse`] if the text is not a valid document.
    /// - [`ConfigError::Invalid`] if it describes an invalid pool.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InvalidConfiguration`] if the assets are equal.
    pub fn validate(&self) -> Result<(), SwapError> {
        if self.asset_x == self.asset_y {
            return Err(SwapError::InvalidConfiguration(
                "asset_x and asset_y must be distinct",
            ));
        }
        Ok(())
    }

    /// Returns the identity of asset X.
    #[must_use]
    pub const fn asset_x(&self) -> AssetId {
        self.asset_x
    }

    /// Returns the identity of asset Y.
    #[must_use]
    pub const fn asset_y(&self) -> AssetId {
        self.asset_y
    }

    /// Returns `true` if swaps against an empty reserve are rejected.
    #[must_use]
    pub const fn require_seeded_reserves(&self) -> bool {
        self.require_seeded_reserves
    }
}
