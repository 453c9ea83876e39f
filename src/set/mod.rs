//! Sets of non-negative integers stored as canonical closed intervals.
//!
//! A set may be built from members in array form (single integers and `(low, high)` pairs), from
//! the range list syntax understood by [crate::parse], or from a single integer or range. However
//! it was built, the set keeps its members sorted ascending with every pair of overlapping or
//! adjacent ranges coalesced, so two sets covering the same integers compare equal. Reversed
//! pairs such as `(5, 2)` denote an empty range and are dropped.

use std::{fmt, str::FromStr};

use crate::parse::{self, ParseError};

mod interval;

pub use interval::{Interval, Member};

/// Set of non-negative integers in canonical interval form
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct IntegerSet {
    intervals: Vec<Interval>,
}

impl IntegerSet {
    /// Create a set with no members
    pub const fn new() -> Self {
        Self { intervals: Vec::new() }
    }

    /// Create a set from members in array form
    pub fn from_members<I>(members: I) -> Result<Self, SetError>
    where
        I: IntoIterator,
        I::Item: Into<Member>,
    {
        let mut set = Self::new();
        for member in members {
            let (low, high) = member.into().bounds();
            set.insert(low, high)?;
        }

        Ok(set)
    }

    /// Create a set from raw arrays, each of which must hold either one integer or the two bounds
    /// of a range
    pub fn from_array(members: &[&[i32]]) -> Result<Self, SetError> {
        let members = members
            .iter()
            .enumerate()
            .map(|(index, member)| match **member {
                [value] => Ok(Member::Single(value)),
                [low, high] => Ok(Member::Range(low, high)),
                _ => Err(SetError::Malformed { index, len: member.len() }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_members(members)
    }

    /// Create a set from a range list such as `"1-4,7"`; the empty string is the empty set
    pub fn parse(text: &str) -> Result<Self, SetError> {
        let ranges = parse::parse(text)?;
        let set = Self::from_members(ranges.iter().map(|r| Member::Range(r.low, r.high)))?;
        tracing::trace!(input = text, canonical = %set, "parsed integer set");

        Ok(set)
    }

    /// Create a set containing exactly one integer
    pub fn single(value: i32) -> Result<Self, SetError> {
        Self::from_members([Member::Single(value)])
    }

    /// Create a set containing the integers `low..=high`, empty if `low > high`
    pub fn range(low: i32, high: i32) -> Result<Self, SetError> {
        Self::from_members([Member::Range(low, high)])
    }

    /// Add the range `low..=high` to the set, keeping the intervals canonical
    fn insert(&mut self, low: i32, high: i32) -> Result<(), SetError> {
        if low > high {
            return Ok(())
        }

        if low < 0 {
            return Err(SetError::Negative { low, high })
        }

        self.intervals.push(Interval::new(low, high));

        // Walk the new interval towards the front until it is in order with its predecessor.
        // Bounds are non-negative here so the gap computation cannot overflow.
        let mut idx = self.intervals.len() - 1;
        while idx > 0 {
            let prev = self.intervals[idx - 1];
            let cur = self.intervals[idx];

            if prev.low().max(cur.low()) - prev.high().min(cur.high()) <= 1 {
                self.intervals[idx - 1] = Interval::new(
                    prev.low().min(cur.low()),
                    prev.high().max(cur.high()),
                );
                self.intervals.remove(idx);
            } else if prev.low() > cur.low() {
                self.intervals.swap(idx - 1, idx);
            } else {
                break
            }

            idx -= 1;
        }

        Ok(())
    }

    /// Get the canonical intervals of this set in ascending order
    pub fn members(&self) -> &[Interval] {
        &self.intervals
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Number of integers in the set
    pub fn len(&self) -> u64 {
        self.intervals.iter().map(|i| u64::from(i.len())).sum()
    }

    pub fn contains(&self, value: i32) -> bool {
        self.intervals
            .binary_search_by(|interval| {
                if interval.high() < value {
                    std::cmp::Ordering::Less
                } else if interval.low() > value {
                    std::cmp::Ordering::Greater
                } else {
                    std::cmp::Ordering::Equal
                }
            })
            .is_ok()
    }

    /// Get the smallest member strictly greater than `value`
    pub fn next(&self, value: i32) -> Option<i32> {
        self.intervals.iter().find_map(|interval| {
            if value < interval.low() {
                Some(interval.low())
            } else if value < interval.high() {
                Some(value + 1)
            } else {
                None
            }
        })
    }

    pub fn first(&self) -> Option<i32> {
        self.intervals.first().map(Interval::low)
    }

    pub fn last(&self) -> Option<i32> {
        self.intervals.last().map(Interval::high)
    }

    /// Iterate over every member in ascending order
    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        self.intervals.iter().flat_map(Interval::values)
    }
}

impl fmt::Display for IntegerSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, interval) in self.intervals.iter().enumerate() {
            if idx > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", interval)?;
        }

        Ok(())
    }
}

impl FromStr for IntegerSet {
    type Err = SetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SetError {
    #[error("member {low}-{high} is negative, members must be >= 0")]
    Negative {
        low: i32,
        high: i32,
    },
    #[error("member {index} has {len} elements, expected 1 or 2")]
    Malformed {
        index: usize,
        len: usize,
    },
    #[error(transparent)]
    Syntax(#[from] ParseError),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(set: &IntegerSet) -> Vec<(i32, i32)> {
        set.members().iter().copied().map(Into::into).collect()
    }

    #[test]
    fn canonicalizes_members() {
        let set = IntegerSet::from_members([(10, 12), (1, 3), (2, 5)]).unwrap();
        assert_eq!(bounds(&set), vec![(1, 5), (10, 12)]);

        let set = IntegerSet::from_members([Member::Single(4), Member::Range(1, 3)]).unwrap();
        assert_eq!(bounds(&set), vec![(1, 4)]);
    }

    #[test]
    fn new_range_bridges_several() {
        let set = IntegerSet::from_members([(1, 2), (5, 6), (9, 10), (3, 8)]).unwrap();
        assert_eq!(bounds(&set), vec![(1, 10)]);
    }

    #[test]
    fn gaps_are_kept() {
        let set = IntegerSet::from_members([(10, 11), (1, 2), (5, 6)]).unwrap();
        assert_eq!(bounds(&set), vec![(1, 2), (5, 6), (10, 11)]);
    }

    #[test]
    fn reversed_ranges_are_dropped() {
        let set = IntegerSet::from_members([(5, 2), (7, 7)]).unwrap();
        assert_eq!(bounds(&set), vec![(7, 7)]);
        assert!(IntegerSet::range(5, 2).unwrap().is_empty());
        assert!(IntegerSet::parse("5-2").unwrap().is_empty());
    }

    #[test]
    fn negative_members_are_rejected() {
        assert_eq!(
            IntegerSet::single(-1).unwrap_err(),
            SetError::Negative { low: -1, high: -1 },
        );
        assert!(IntegerSet::range(-3, 2).is_err());
        // Empty ranges are dropped before their bounds are looked at
        assert!(IntegerSet::range(-1, -3).unwrap().is_empty());
    }

    #[test]
    fn array_form() {
        let set = IntegerSet::from_array(&[&[1, 4], &[7]]).unwrap();
        assert_eq!(bounds(&set), vec![(1, 4), (7, 7)]);

        assert_eq!(
            IntegerSet::from_array(&[&[1], &[1, 2, 3]]).unwrap_err(),
            SetError::Malformed { index: 1, len: 3 },
        );
        assert!(IntegerSet::from_array(&[&[]]).is_err());
        assert!(IntegerSet::from_array(&[]).unwrap().is_empty());
    }

    #[test]
    fn string_form() {
        let set: IntegerSet = "1-4,7, 10:12".parse().unwrap();
        assert_eq!(bounds(&set), vec![(1, 4), (7, 7), (10, 12)]);
        assert!(IntegerSet::parse("").unwrap().is_empty());
        assert!(matches!(IntegerSet::parse("1,").unwrap_err(), SetError::Syntax(_)));
    }

    #[test]
    fn display_is_canonical() {
        let set = IntegerSet::parse("12-10, 7, 3-1, 4, 0").unwrap();
        assert_eq!(set.to_string(), "0,4,7");
        let set = IntegerSet::parse("3, 1-2, 9").unwrap();
        assert_eq!(set.to_string(), "1-3,9");
        assert_eq!(IntegerSet::new().to_string(), "");
    }

    #[test]
    fn queries() {
        let set = IntegerSet::parse("2-4,8").unwrap();
        assert!(set.contains(2) && set.contains(4) && set.contains(8));
        assert!(!set.contains(1) && !set.contains(5) && !set.contains(9));

        assert_eq!(set.next(0), Some(2));
        assert_eq!(set.next(2), Some(3));
        assert_eq!(set.next(4), Some(8));
        assert_eq!(set.next(8), None);

        assert_eq!(set.first(), Some(2));
        assert_eq!(set.last(), Some(8));
        assert_eq!(set.len(), 4);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![2, 3, 4, 8]);
    }
}
