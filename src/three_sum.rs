//! Triplets of values by their sum.
//!
//! Sums are taken in `i128`, so no input can overflow them.

use std::collections::{BTreeSet, HashSet};

fn sum3(a: i64, b: i64, c: i64) -> i128 {
    i128::from(a) + i128::from(b) + i128::from(c)
}

/// Every distinct triplet of values summing to zero, found by sorting and
/// closing two pointers around each anchor.
///
/// Each triplet is ascending and the list is sorted.
pub fn two_pointer(nums: &[i64]) -> Vec<[i64; 3]> {
    let mut sorted = nums.to_vec();
    sorted.sort_unstable();
    let mut out = Vec::new();
    for anchor in 0..sorted.len() {
        let first = sorted[anchor];
        if first > 0 {
            break;
        }
        if anchor > 0 && sorted[anchor - 1] == first {
            continue;
        }
        let (mut lo, mut hi) = (anchor + 1, sorted.len() - 1);
        while lo < hi {
            let sum = sum3(first, sorted[lo], sorted[hi]);
            match sum.cmp(&0) {
                std::cmp::Ordering::Less => lo += 1,
                std::cmp::Ordering::Greater => hi -= 1,
                std::cmp::Ordering::Equal => {
                    out.push([first, sorted[lo], sorted[hi]]);
                    // skip past repeats of the pair just used
                    let (low, high) = (sorted[lo], sorted[hi]);
                    while lo < hi && sorted[lo] == low {
                        lo += 1;
                    }
                    while lo < hi && sorted[hi] == high {
                        hi -= 1;
                    }
                }
            }
        }
    }
    out
}

/// Every distinct zero-sum triplet, found by looking up the third value of
/// each pair in a set of values seen so far.
pub fn hashing(nums: &[i64]) -> Vec<[i64; 3]> {
    let mut found = BTreeSet::new();
    for (i, &first) in nums.iter().enumerate() {
        let mut seen: HashSet<i64> = HashSet::new();
        for &second in &nums[i + 1..] {
            // a third value outside `i64` cannot be in `seen`
            let third = i64::try_from(-i128::from(first) - i128::from(second));
            if let Some(third) = third.ok().filter(|third| seen.contains(third)) {
                let mut triplet = [first, second, third];
                triplet.sort_unstable();
                found.insert(triplet);
            }
            seen.insert(second);
        }
    }
    found.into_iter().collect()
}

/// The sum of three values closest to `target`.
///
/// Ties keep the first sum found. `None` with fewer than three values.
pub fn closest(nums: &[i64], target: i64) -> Option<i128> {
    if nums.len() < 3 {
        return None;
    }
    let mut sorted = nums.to_vec();
    sorted.sort_unstable();
    let target = i128::from(target);
    let mut best = sum3(sorted[0], sorted[1], sorted[2]);
    for anchor in 0..sorted.len() - 2 {
        let (mut lo, mut hi) = (anchor + 1, sorted.len() - 1);
        while lo < hi {
            let sum = sum3(sorted[anchor], sorted[lo], sorted[hi]);
            if (sum - target).abs() < (best - target).abs() {
                best = sum;
            }
            match sum.cmp(&target) {
                std::cmp::Ordering::Less => lo += 1,
                std::cmp::Ordering::Greater => hi -= 1,
                std::cmp::Ordering::Equal => return Some(sum),
            }
        }
    }
    Some(best)
}
