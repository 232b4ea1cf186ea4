//! Checked arithmetic trait for domain wrapper types.
//!
//! The [`CheckedArithmetic`] trait provides fallible arithmetic operations
//! that return [`Result<Self, SwapError>`](crate::error::SwapError) instead
//! of wrapping or panicking on overflow, underflow, or division by zero.
//!
//! # Examples
//!
//! ```
//! use pairswap::domain::Amount;
//! use pairswap::math::CheckedArithmetic;
//!
//! let a = Amount::from_u128(100);
//! let b = Amount::from_u128(200);
//! assert_eq!(a.safe_add(&b), Ok(Amount::from_u128(300)));
//! assert!(Amount::MAX.safe_add(&b).is_err());
//! ```

use crate::domain::Amount;
use crate::error::SwapError;

/// Fallible arithmetic for domain wrapper types.
///
/// # Contract
///
/// - **No panics**: all error conditions produce `Err`.
/// - **No saturation**: saturation hides bugs; errors propagate instead.
/// - Every failure is reported as [`SwapError::ArithmeticOverflow`];
///   the message names the operation.
/// - Division truncates towards zero.
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::ArithmeticOverflow`] if the result exceeds the
    /// representable range.
    fn safe_add(&self, other: &Self) -> Result<Self, SwapError>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::ArithmeticOverflow`] if the result would be
    /// negative.
    fn safe_sub(&self, other: &Self) -> Result<Self, SwapError>;

    /// Checked multiplication.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::ArithmeticOverflow`] if the result exceeds the
    /// representable range.
    fn safe_mul(&self, other: &Self) -> Result<Self, SwapError>;

    /// Checked floor division.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::ArithmeticOverflow`] if `other` is zero.
    fn safe_div(&self, other: &Self) -> Result<Self, SwapError>;
}

impl CheckedArithmetic for Amount {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, SwapError> {
        self.checked_add(other)
            .ok_or(SwapError::ArithmeticOverflow("amount addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, SwapError> {
        self.checked_sub(other)
            .ok_or(SwapError::ArithmeticOverflow("amount subtraction underflow"))
    }

    #[inline]
    fn safe_mul(&self, other: &Self) -> Result<Self, SwapError> {
        self.checked_mul(other)
            .ok_or(SwapError::ArithmeticOverflow("amount multiplication overflow"))
    }

    #[inline]
    fn safe_div(&self, other: &Self) -> Result<Self, SwapError> {
        self.checked_div(other)
            .ok_or(SwapError::ArithmeticOverflow("amount division by zero"))
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn add_ok() {
        let Ok(r) = Amount::from_u128(100).safe_add(&Amount::from_u128(200)) else {
            panic!("expected Ok");
        };
        assert_eq!(r, Amount::from_u128(300));
    }

    #[test]
    fn add_overflow() {
        let Err(SwapError::ArithmeticOverflow(msg)) = Amount::MAX.safe_add(&Amount::from_u128(1))
        else {
            panic!("expected ArithmeticOverflow");
        };
        assert_eq!(msg, "amount addition overflow");
    }

    #[test]
    fn sub_underflow() {
        assert!(matches!(
            Amount::ZERO.safe_sub(&Amount::from_u128(1)),
            Err(SwapError::ArithmeticOverflow(_))
        ));
    }

    #[test]
    fn mul_overflow() {
        assert!(matches!(
            Amount::MAX.safe_mul(&Amount::from_u128(2)),
            Err(SwapError::ArithmeticOverflow(_))
        ));
    }

    #[test]
    fn div_floor_and_zero() {
        assert_eq!(
            Amount::from_u128(7).safe_div(&Amount::from_u128(2)),
            Ok(Amount::from_u128(3))
        );
        assert!(matches!(
            Amount::from_u128(7).safe_div(&Amount::ZERO),
            Err(SwapError::ArithmeticOverflow(_))
        ));
    }
}
