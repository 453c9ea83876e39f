use std::{fmt, ops::RangeInclusive};

/// Non-empty closed interval of integers, `low..=high`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Interval {
    low: i32,
    high: i32,
}

impl Interval {
    pub(crate) const fn new(low: i32, high: i32) -> Self {
        debug_assert!(low <= high);

        Self {
            low,
            high,
        }
    }

    pub const fn low(&self) -> i32 {
        self.low
    }

    pub const fn high(&self) -> i32 {
        self.high
    }

    pub const fn contains(&self, value: i32) -> bool {
        self.low <= value && value <= self.high
    }

    /// Number of integers covered by this interval
    pub const fn len(&self) -> u32 {
        self.high.abs_diff(self.low) + 1
    }

    /// Get every integer of this interval in ascending order
    pub const fn values(&self) -> RangeInclusive<i32> {
        self.low..=self.high
    }
}

impl From<Interval> for RangeInclusive<i32> {
    fn from(interval: Interval) -> Self {
        interval.values()
    }
}

impl From<Interval> for (i32, i32) {
    fn from(interval: Interval) -> Self {
        (interval.low, interval.high)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.low == self.high {
            write!(f, "{}", self.low)
        } else {
            write!(f, "{}-{}", self.low, self.high)
        }
    }
}

/// One member of a set in array form: a single integer, or the bounds of a range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Member {
    Single(i32),
    Range(i32, i32),
}

impl Member {
    /// Get the `(low, high)` bounds of this member; a reversed pair denotes an empty range
    pub const fn bounds(self) -> (i32, i32) {
        match self {
            Self::Single(value) => (value, value),
            Self::Range(low, high) => (low, high),
        }
    }
}

impl From<i32> for Member {
    fn from(value: i32) -> Self {
        Self::Single(value)
    }
}

impl From<(i32, i32)> for Member {
    fn from((low, high): (i32, i32)) -> Self {
        Self::Range(low, high)
    }
}

impl From<RangeInclusive<i32>> for Member {
    fn from(range: RangeInclusive<i32>) -> Self {
        let (low, high) = range.into_inner();
        Self::Range(low, high)
    }
}

impl From<&Member> for Member {
    fn from(member: &Member) -> Self {
        *member
    }
}
