//! Median of the union of two sorted arrays.

use crate::error::{Error, Result};

fn check(a: &[i64], b: &[i64]) -> Result<()> {
    if a.is_empty() && b.is_empty() {
        return Err(Error::EmptyInput);
    }
    for (name, nums) in [("a", a), ("b", b)] {
        if nums.windows(2).any(|pair| pair[0] > pair[1]) {
            return Err(Error::UnsortedInput(name));
        }
    }
    Ok(())
}

fn average(low: i64, high: i64) -> f64 {
    (low as f64 + high as f64) / 2.0
}

/// Walk both arrays as in a merge, stopping at the middle.
///
/// Linear in the combined length, constant space.
pub fn merge(a: &[i64], b: &[i64]) -> Result<f64> {
    check(a, b)?;
    let total = a.len() + b.len();
    let (mut i, mut j) = (0, 0);
    let (mut previous, mut current) = (0, 0);
    for _ in 0..=total / 2 {
        previous = current;
        current = match (a.get(i), b.get(j)) {
            (Some(&x), Some(&y)) if x <= y => {
                i += 1;
                x
            }
            (_, Some(&y)) => {
                j += 1;
                y
            }
            (Some(&x), None) => {
                i += 1;
                x
            }
            (None, None) => unreachable!("the loop stops at the middle element"),
        };
    }
    Ok(if total % 2 == 1 {
        current as f64
    } else {
        average(previous, current)
    })
}

/// Binary search for a split of the shorter array such that everything left
/// of the combined split is no larger than everything right of it.
///
/// Logarithmic in the length of the shorter array.
pub fn partition(a: &[i64], b: &[i64]) -> Result<f64> {
    check(a, b)?;
    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let total = short.len() + long.len();
    // the left side holds the extra element when the total is odd
    let half = (total + 1) / 2;

    let (mut lo, mut hi) = (0, short.len());
    loop {
        let cut_short = lo + (hi - lo) / 2;
        let cut_long = half - cut_short;

        let short_left = cut_short.checked_sub(1).map(|idx| short[idx]);
        let short_right = short.get(cut_short).copied();
        let long_left = cut_long.checked_sub(1).map(|idx| long[idx]);
        let long_right = long.get(cut_long).copied();

        if matches!((short_left, long_right), (Some(l), Some(r)) if l > r) {
            hi = cut_short - 1;
        } else if matches!((long_left, short_right), (Some(l), Some(r)) if l > r) {
            lo = cut_short + 1;
        } else {
            // `half >= 1`, so at least one side has a left element
            let left_max = short_left.max(long_left).unwrap_or_default();
            if total % 2 == 1 {
                return Ok(left_max as f64);
            }
            let right_min = match (short_right, long_right) {
                (Some(x), Some(y)) => x.min(y),
                (Some(x), None) | (None, Some(x)) => x,
                (None, None) => left_max,
            };
            return Ok(average(left_max, right_min));
        }
    }
}
