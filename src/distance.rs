//! Graph distances with an explicit unreachable value.
//!
//! [Distance::Unreachable] is greater than any finite distance, so `min` and `max` over
//! distances behave as with an infinite value. Additions never wrap: a sum involving
//! `Unreachable`, or overflowing `u64`, gives `None` and the caller skips the relaxation.

use std::fmt;

/// A shortest path length, or the absence of any path.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Distance {
    Finite(u64),
    Unreachable,
}

impl Distance {
    pub const ZERO: Distance = Distance::Finite(0);

    pub fn is_finite(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    /// returns the length if there is a path
    pub fn finite(&self) -> Option<u64> {
        match self {
            Distance::Finite(d) => Some(*d),
            Distance::Unreachable => None,
        }
    }

    /// sum of two finite distances, None if any is unreachable or on overflow
    pub fn checked_add(self, other: Distance) -> Option<Distance> {
        match (self, other) {
            (Distance::Finite(a), Distance::Finite(b)) => a.checked_add(b).map(Distance::Finite),
            _ => None,
        }
    }

    /// multiplication by a scalar, used to check approximation ratios
    pub fn scale(self, factor: u64) -> Distance {
        match self {
            Distance::Finite(d) => d
                .checked_mul(factor)
                .map_or(Distance::Unreachable, Distance::Finite),
            Distance::Unreachable => Distance::Unreachable,
        }
    }
}

impl From<u64> for Distance {
    fn from(d: u64) -> Self {
        Distance::Finite(d)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(d) => write!(f, "{}", d),
            Distance::Unreachable => write!(f, "inf"),
        }
    }
}

//========================================================================================

// end of mod tests
