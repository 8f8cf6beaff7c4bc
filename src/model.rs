use std::fmt;

/// Non-negative cumulative distance between vertices.
/// The largest representable value is reserved for the "unreached" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Distance(u32);

impl Distance {
    pub const ZERO: Self = Self(0);
    /// Sentinel distance of a vertex that has not been reached yet.
    /// Every finite distance compares as less than it.
    pub const INFINITY: Self = Self(u32::MAX);

    pub const fn from_units(units: u32) -> Self {
        Self(units)
    }

    pub const fn units(&self) -> u32 {
        self.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_infinite(&self) -> bool {
        self.0 == u32::MAX
    }

    /// Adds two finite distances.
    /// Returns None if either operand is the sentinel or if the sum would not be finite.
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        if self.is_infinite() || other.is_infinite() {
            return None;
        }

        match self.0.checked_add(other.0) {
            Some(units) if units != u32::MAX => Some(Self(units)),
            _ => None,
        }
    }

    /// Subtracts a shorter distance, returning None if the result would be negative.
    pub const fn checked_sub(self, other: Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(units) => Some(Self(units)),
            None => None,
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_infinite() {
            write!(f, "inf")
        } else {
            write!(f, "{}", self.0)
        }
    }
}
