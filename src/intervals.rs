//! Closed integer intervals: merging, insertion and friends.

use crate::error::{Error, Result};

/// A closed interval `[start, end]`.
///
/// Intervals which share only an endpoint overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Interval {
    start: i64,
    end: i64,
}

impl Interval {
    pub fn new(start: i64, end: i64) -> Result<Self> {
        if start > end {
            return Err(Error::InvalidInterval { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    pub fn end(&self) -> i64 {
        self.end
    }

    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

impl TryFrom<(i64, i64)> for Interval {
    type Error = Error;

    fn try_from((start, end): (i64, i64)) -> Result<Self> {
        Self::new(start, end)
    }
}

/// Merge all overlapping intervals, returning them sorted by start.
pub fn merge(intervals: &[Interval]) -> Vec<Interval> {
    let mut sorted = intervals.to_vec();
    sorted.sort_unstable();
    let mut merged: Vec<Interval> = Vec::with_capacity(sorted.len());
    for interval in sorted {
        match merged.last_mut() {
            Some(last) if interval.start <= last.end => last.end = last.end.max(interval.end),
            _ => merged.push(interval),
        }
    }
    merged
}

/// Insert `new` into a sorted list of disjoint intervals, merging as needed.
pub fn insert(sorted: &[Interval], new: Interval) -> Vec<Interval> {
    let mut out = Vec::with_capacity(sorted.len() + 1);
    let mut iter = sorted.iter().copied().peekable();

    while let Some(interval) = iter.next_if(|interval| interval.end < new.start) {
        out.push(interval);
    }
    let mut absorbed = new;
    while let Some(interval) = iter.next_if(|interval| interval.start <= absorbed.end) {
        absorbed.start = absorbed.start.min(interval.start);
        absorbed.end = absorbed.end.max(interval.end);
    }
    out.push(absorbed);
    out.extend(iter);
    out
}

/// Fewest intervals to delete so the rest do not overlap.
///
/// Here intervals that only touch, like `[1, 2]` and `[2, 3]`, may both stay.
/// Greedily keeping the interval that ends first leaves the most room.
pub fn min_removals_for_no_overlap(intervals: &[Interval]) -> usize {
    let mut by_end = intervals.to_vec();
    by_end.sort_unstable_by_key(|interval| (interval.end, interval.start));
    let mut kept = 0;
    let mut boundary = i64::MIN;
    for interval in &by_end {
        if interval.start >= boundary {
            kept += 1;
            boundary = interval.end;
        }
    }
    intervals.len() - kept
}

/// Intersection of two sorted lists of disjoint intervals.
pub fn intersect(a: &[Interval], b: &[Interval]) -> Vec<Interval> {
    let mut out = Vec::new();
    let (mut i, mut j) = (0, 0);
    while let (Some(x), Some(y)) = (a.get(i), b.get(j)) {
        let start = x.start.max(y.start);
        let end = x.end.min(y.end);
        if start <= end {
            out.push(Interval { start, end });
        }
        // whichever ends first cannot meet anything further along the other list
        if x.end < y.end {
            i += 1;
        } else {
            j += 1;
        }
    }
    out
}
