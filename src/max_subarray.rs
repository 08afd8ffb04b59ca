//! Maximum subarray problems.
//!
//! Sums are accumulated in `i128` and cannot overflow. Products are checked.

use crate::error::{Error, Result};

/// A contiguous range of the input and its sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subarray {
    pub sum: i128,
    pub start: usize,
    /// Exclusive.
    pub end: usize,
}

impl Subarray {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Kadane's algorithm: the maximum sum of a non-empty contiguous range.
///
/// When several ranges share the maximum sum the one that starts earliest is
/// returned, and among those the shortest. `None` for an empty slice.
pub fn kadane(nums: &[i64]) -> Option<Subarray> {
    let (&first, rest) = nums.split_first()?;
    let first = i128::from(first);
    let mut best = Subarray {
        sum: first,
        start: 0,
        end: 1,
    };
    let mut current = first;
    let mut current_start = 0;
    for (offset, &num) in rest.iter().enumerate() {
        let idx = offset + 1;
        // a negative running sum can only drag the next range down
        if current < 0 {
            current = 0;
            current_start = idx;
        }
        current += i128::from(num);
        if current > best.sum {
            best = Subarray {
                sum: current,
                start: current_start,
                end: idx + 1,
            };
        }
    }
    Some(best)
}

/// Minimum sum of a non-empty contiguous range.
fn min_range_sum(nums: &[i64]) -> Option<i128> {
    let (&first, rest) = nums.split_first()?;
    let (mut current, mut best) = (i128::from(first), i128::from(first));
    for &num in rest {
        current = current.min(0) + i128::from(num);
        best = best.min(current);
    }
    Some(best)
}

/// Maximum subarray sum by splitting the range in half and combining.
pub fn divide_and_conquer(nums: &[i64]) -> Option<i128> {
    /// Summary of a range: total, best prefix, best suffix, best anywhere.
    struct Summary {
        total: i128,
        prefix: i128,
        suffix: i128,
        best: i128,
    }

    fn summarize(nums: &[i64]) -> Summary {
        if let [only] = nums {
            let only = i128::from(*only);
            return Summary {
                total: only,
                prefix: only,
                suffix: only,
                best: only,
            };
        }
        let (left, right) = nums.split_at(nums.len() / 2);
        let (l, r) = (summarize(left), summarize(right));
        Summary {
            total: l.total + r.total,
            prefix: l.prefix.max(l.total + r.prefix),
            suffix: r.suffix.max(r.total + l.suffix),
            best: l.best.max(r.best).max(l.suffix + r.prefix),
        }
    }

    (!nums.is_empty()).then(|| summarize(nums).best)
}

/// Maximum subarray sum by trying every range.
pub fn brute_force(nums: &[i64]) -> Option<i128> {
    (0..nums.len())
        .flat_map(|start| {
            nums[start..].iter().scan(0_i128, |sum, &num| {
                *sum += i128::from(num);
                Some(*sum)
            })
        })
        .max()
}

/// Maximum sum of a non-empty range when the slice wraps around.
///
/// A wrapping range is the whole slice minus a non-wrapping minimum range.
pub fn max_circular(nums: &[i64]) -> Option<i128> {
    let straight = kadane(nums)?.sum;
    if straight < 0 {
        // every value is negative; removing a range would leave nothing
        return Some(straight);
    }
    let min_range = min_range_sum(nums)?;
    let total: i128 = nums.iter().copied().map(i128::from).sum();
    Some(straight.max(total - min_range))
}

/// Maximum product of a non-empty range.
///
/// Tracks both the largest and smallest product ending at each position,
/// since a negative value swaps their roles. Running products are kept in
/// `i128`; [`Error::Overflow`] when one leaves it or the answer does not fit
/// in `i64`. `Ok(None)` for an empty slice.
pub fn max_product(nums: &[i64]) -> Result<Option<i64>> {
    let overflow = || Error::Overflow {
        operation: "max product",
    };
    let Some((&first, rest)) = nums.split_first() else {
        return Ok(None);
    };
    let first = i128::from(first);
    let (mut high, mut low, mut best) = (first, first, first);
    for &num in rest {
        let num = i128::from(num);
        let candidates = [
            num,
            high.checked_mul(num).ok_or_else(overflow)?,
            low.checked_mul(num).ok_or_else(overflow)?,
        ];
        high = candidates.into_iter().max().unwrap_or(num);
        low = candidates.into_iter().min().unwrap_or(num);
        best = best.max(high);
    }
    i64::try_from(best).map(Some).map_err(|_| overflow())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case(&[-2, 1, -3, 4, -1, 2, 1, -5, 4], 6, 3, 7)]
    #[case(&[1], 1, 0, 1)]
    #[case(&[5, 4, -1, 7, 8], 23, 0, 5)]
    #[case(&[-8, -3, -6, -2, -5, -4], -2, 3, 4)]
    #[case(&[5, -5, 5], 5, 0, 1)]
    #[case(&[0, 5], 5, 0, 2)]
    #[case(&[-1, 0, 0], 0, 1, 2)]
    fn kadane_range(
        #[case] nums: &[i64],
        #[case] sum: i128,
        #[case] start: usize,
        #[case] end: usize,
    ) {
        let found = kadane(nums).unwrap();
        assert_eq!(found, Subarray { sum, start, end });
        let range_sum: i128 = nums[found.start..found.end].iter().map(|&n| i128::from(n)).sum();
        assert_eq!(range_sum, sum);
        assert_eq!(divide_and_conquer(nums), Some(sum));
        assert_eq!(brute_force(nums), Some(sum));
    }

    #[test]
    fn empty_input() {
        assert_eq!(kadane(&[]), None);
        assert_eq!(divide_and_conquer(&[]), None);
        assert_eq!(brute_force(&[]), None);
        assert_eq!(max_circular(&[]), None);
        assert_eq!(max_product(&[]), Ok(None));
    }

    #[rstest]
    #[case(&[1, -2, 3, -2], 3)]
    #[case(&[5, -3, 5], 10)]
    #[case(&[-3, -2, -3], -2)]
    #[case(&[3, -1, 2, -1], 4)]
    fn circular(#[case] nums: &[i64], #[case] expected: i128) {
        assert_eq!(max_circular(nums), Some(expected));
    }

    #[rstest]
    #[case(&[2, 3, -2, 4], 6)]
    #[case(&[-2, 0, -1], 0)]
    #[case(&[-2, 3, -4], 24)]
    #[case(&[-2], -2)]
    fn product(#[case] nums: &[i64], #[case] expected: i64) {
        assert_eq!(max_product(nums), Ok(Some(expected)));
    }

    #[test]
    fn sums_of_extreme_values() {
        let nums = [i64::MAX, i64::MAX, i64::MIN];
        let expected = 2 * i128::from(i64::MAX);
        assert_eq!(
            kadane(&nums),
            Some(Subarray {
                sum: expected,
                start: 0,
                end: 2
            })
        );
        assert_eq!(divide_and_conquer(&nums), Some(expected));
        assert_eq!(brute_force(&nums), Some(expected));
        assert_eq!(max_circular(&nums), Some(expected));
        assert_eq!(max_circular(&[i64::MIN, i64::MIN]), Some(i128::from(i64::MIN)));
    }

    #[rstest]
    #[case(&[i64::MAX, -2, 3], Ok(Some(i64::MAX)))]
    #[case(&[i64::MIN, -1], Err(Error::Overflow { operation: "max product" }))]
    #[case(&[1 << 62, 4], Err(Error::Overflow { operation: "max product" }))]
    fn product_at_the_edge(#[case] nums: &[i64], #[case] expected: Result<Option<i64>>) {
        assert_eq!(max_product(nums), expected);
    }

    proptest! {
        #[test]
        fn strategies_agree(nums in proptest::collection::vec(-50_i64..50, 1..30)) {
            let found = kadane(&nums).unwrap();
            prop_assert_eq!(i128::from(nums[found.start..found.end].iter().sum::<i64>()), found.sum);
            prop_assert_eq!(divide_and_conquer(&nums), Some(found.sum));
            prop_assert_eq!(brute_force(&nums), Some(found.sum));
        }
    }
}
