//! Ledger holder identity.

use core::fmt;

use alloy_primitives::Address;

/// An account that can hold balances on an asset ledger: a liquidity
/// provider, a trader, or the pool's own custody account.
///
/// Wraps a 20-byte [`Address`].  All byte sequences are valid accounts, so
/// construction is infallible.
///
/// # Examples
///
/// ```
/// use pairswap::domain::Account;
///
/// let trader = Account::from_bytes([7u8; 20]);
/// assert_eq!(trader.as_bytes(), [7u8; 20]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Account(Address);

impl Account {
    /// Creates an `Account` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(Address::new(bytes))
    }

    /// Returns the underlying 20-byte representation.
    #[must_use]
    pub fn as_bytes(&self) -> [u8; 20] {
        self.0.0.0
    }

    /// Returns the wrapped address.
    #[must_use]
    pub const fn address(&self) -> Address {
        self.0
    }
}

impl From<Address> for Account {
    fn from(address: Address) -> Self {
        Self(address)
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_bytes_round_trip() {
        let acct = Account::from_bytes([42u8; 20]);
        assert_eq!(acct.as_bytes(), [42u8; 20]);
        assert_eq!(acct.address(), Address::repeat_byte(42));
    }

    #[test]
    fn distinct_bytes_distinct_accounts() {
        assert_ne!(Account::from_bytes([1u8; 20]), Account::from_bytes([2u8; 20]));
    }

    #[test]
    fn display_is_hex() {
        let shown = Account::from_bytes([0u8; 20]).to_string();
        assert_eq!(shown, "0x0000000000000000000000000000000000000000");
    }
}
