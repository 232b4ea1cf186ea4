//! Asset ledger identity.

use core::fmt;

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

/// Identity of an asset ledger (the "token address" of asset X or Y).
///
/// A pool fixes two distinct `AssetId`s at construction and reports the
/// input asset's identity in every [`PoolEvent::Swapped`](super::PoolEvent).
/// Serialises as a `0x`-prefixed hex string.
///
/// # Examples
///
/// ```
/// use pairswap::domain::AssetId;
///
/// let x = AssetId::from_bytes([1u8; 20]);
/// let y = AssetId::from_bytes([2u8; 20]);
/// assert_ne!(x, y);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetId(Address);

impl AssetId {
    /// Creates an `AssetId` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(Address::new(bytes))
    }

    /// Returns the wrapped address.
    #[must_use]
    pub const fn address(&self) -> Address {
        self.0
    }
}

impl From<Address> for AssetId {
    fn from(address: Address) -> Self {
        Self(address)
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_follows_bytes() {
        assert_eq!(AssetId::from_bytes([3u8; 20]), AssetId::from_bytes([3u8; 20]));
        assert_ne!(AssetId::from_bytes([3u8; 20]), AssetId::from_bytes([4u8; 20]));
    }

    #[test]
    fn from_address() {
        let addr = Address::repeat_byte(9);
        assert_eq!(AssetId::from(addr).address(), addr);
    }
}
