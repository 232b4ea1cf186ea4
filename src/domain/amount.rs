//! Raw asset amount with checked 256-bit arithmetic.

use core::fmt;

use alloy_primitives::U256;

/// A raw asset amount in the smallest unit (e.g. `10^-18` of a whole token).
///
/// `Amount` never interprets decimals; [`Amount::from_units`] is the only
/// place a decimal scale is applied.  All `U256` values are valid amounts.
///
/// Arithmetic methods are checked: they return `None` on overflow,
/// underflow, or division by zero instead of wrapping or panicking.
/// Division always truncates towards zero.
///
/// # Examples
///
/// ```
/// use pairswap::domain::Amount;
///
/// let a = Amount::from_u128(100);
/// let b = Amount::from_u128(200);
/// assert_eq!(a.checked_add(&b), Some(Amount::from_u128(300)));
/// assert_eq!(b.checked_sub(&a), Some(Amount::from_u128(100)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[must_use]
pub struct Amount(U256);

impl Amount {
    /// Zero amount.
    pub const ZERO: Self = Self(U256::ZERO);

    /// Maximum representable amount.
    pub const MAX: Self = Self(U256::MAX);

    /// Wraps a raw `U256` value.
    pub const fn new(value: U256) -> Self {
        Self(value)
    }

    /// Creates an amount from a `u128`.
    pub fn from_u128(value: u128) -> Self {
        Self(U256::from(value))
    }

    /// Returns `whole · 10^decimals`, or `None` if it does not fit.
    ///
    /// ```
    /// use pairswap::domain::Amount;
    ///
    /// let one_token = Amount::from_units(1, 18).expect("fits");
    /// assert_eq!(one_token, Amount::from_u128(1_000_000_000_000_000_000));
    /// ```
    #[must_use]
    pub fn from_units(whole: u64, decimals: u8) -> Option<Self> {
        let ten = U256::from(10u8);
        let mut value = U256::from(whole);
        for _ in 0..decimals {
            value = value.checked_mul(ten)?;
        }
        Some(Self(value))
    }

    /// Returns the underlying `U256` value.
    #[must_use]
    pub const fn get(&self) -> U256 {
        self.0
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checked addition. Returns `None` on overflow.
    #[must_use]
    pub fn checked_add(&self, other: &Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Checked subtraction. Returns `None` on underflow.
    #[must_use]
    pub fn checked_sub(&self, other: &Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    /// Checked multiplication. Returns `None` on overflow.
    #[must_use]
    pub fn checked_mul(&self, other: &Self) -> Option<Self> {
        self.0.checked_mul(other.0).map(Self)
    }

    /// Truncating (floor) division. Returns `None` if `divisor` is zero.
    #[must_use]
    pub fn checked_div(&self, divisor: &Self) -> Option<Self> {
        self.0.checked_div(divisor.0).map(Self)
    }
}

impl From<u128> for Amount {
    fn from(value: u128) -> Self {
        Self::from_u128(value)
    }
}

impl From<U256> for Amount {
    fn from(value: U256) -> Self {
        Self(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn constants() {
        assert!(Amount::ZERO.is_zero());
        assert_eq!(Amount::MAX.get(), U256::MAX);
        assert_eq!(Amount::default(), Amount::ZERO);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Amount::from_u128(1_000_000)), "1000000");
    }

    #[test]
    fn from_units_scales_by_decimals() {
        let Some(a) = Amount::from_units(1_000, 18) else {
            panic!("1000e18 fits in 256 bits");
        };
        assert_eq!(a, Amount::from_u128(1_000 * 10u128.pow(18)));
        assert_eq!(Amount::from_units(7, 0), Some(Amount::from_u128(7)));
    }

    #[test]
    fn from_units_overflow() {
        // 10^78 > 2^256
        assert_eq!(Amount::from_units(1, 78), None);
    }

    #[test]
    fn beyond_u128_is_representable() {
        let big = Amount::from_u128(u128::MAX);
        let Some(doubled) = big.checked_add(&big) else {
            panic!("2 * u128::MAX fits in 256 bits");
        };
        assert!(doubled > big);
    }

    #[test]
    fn add_overflow() {
        assert_eq!(Amount::MAX.checked_add(&Amount::from_u128(1)), None);
    }

    #[test]
    fn sub_underflow() {
        assert_eq!(Amount::from_u128(1).checked_sub(&Amount::from_u128(2)), None);
    }

    #[test]
    fn mul_overflow() {
        assert_eq!(Amount::MAX.checked_mul(&Amount::from_u128(2)), None);
    }

    #[test]
    fn div_truncates() {
        let a = Amount::from_u128(10);
        assert_eq!(a.checked_div(&Amount::from_u128(3)), Some(Amount::from_u128(3)));
        assert_eq!(
            Amount::from_u128(1).checked_div(&Amount::from_u128(2)),
            Some(Amount::ZERO)
        );
    }

    #[test]
    fn div_by_zero() {
        assert_eq!(Amount::from_u128(100).checked_div(&Amount::ZERO), None);
    }

    #[test]
    fn ordering() {
        assert!(Amount::from_u128(1) < Amount::from_u128(2));
        assert!(Amount::MAX > Amount::from_u128(u128::MAX));
    }
}
