//! Which way a swap trades.

use core::fmt;

/// Direction of a swap through a two-asset pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwapDirection {
    /// Sell asset X, receive asset Y.
    XForY,
    /// Sell asset Y, receive asset X.
    YForX,
}

impl SwapDirection {
    /// Returns the opposite direction.
    #[must_use]
    pub const fn reverse(&self) -> Self {
        match self {
            Self::XForY => Self::YForX,
            Self::YForX => Self::XForY,
        }
    }

    /// Returns `true` if asset X is the input side.
    #[must_use]
    pub const fn sells_x(&self) -> bool {
        matches!(self, Self::XForY)
    }
}

impl fmt::Display for SwapDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::XForY => f.write_str("X->Y"),
            Self::YForX => f.write_str("Y->X"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reverse_is_involution() {
        assert_eq!(SwapDirection::XForY.reverse(), SwapDirection::YForX);
        assert_eq!(SwapDirection::XForY.reverse().reverse(), SwapDirection::XForY);
    }

    #[test]
    fn sells_x() {
        assert!(SwapDirection::XForY.sells_x());
        assert!(!SwapDirection::YForX.sells_x());
    }

    #[test]
    fn display() {
        assert_eq!(SwapDirection::YForX.to_string(), "Y->X");
    }
}
