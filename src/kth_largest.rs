use std::{cmp::Reverse, collections::BinaryHeap};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    Sort,
    Heap,
    #[default]
    QuickSelect,
}

/// The `k`th largest value in `nums`, with `k` counted from 1.
///
/// Duplicates are counted separately: the 2nd largest of `[3, 3, 2]` is `3`.
pub fn kth_largest(nums: &[i32], k: usize, strategy: Strategy) -> Result<i32> {
    match strategy {
        Strategy::Sort => by_sorting(nums, k),
        Strategy::Heap => by_heap(nums, k),
        Strategy::QuickSelect => by_quickselect(nums, k),
    }
}

fn check_k(nums: &[i32], k: usize) -> Result<()> {
    if k == 0 || k > nums.len() {
        Err(Error::InvalidK { k, len: nums.len() })
    } else {
        Ok(())
    }
}

pub fn by_sorting(nums: &[i32], k: usize) -> Result<i32> {
    check_k(nums, k)?;
    let mut sorted = nums.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    Ok(sorted[k - 1])
}

/// Keep the `k` largest values seen so far in a min-heap; its root is the answer.
pub fn by_heap(nums: &[i32], k: usize) -> Result<i32> {
    check_k(nums, k)?;
    let mut heap = BinaryHeap::with_capacity(k + 1);
    for &num in nums {
        heap.push(Reverse(num));
        if heap.len() > k {
            heap.pop();
        }
    }
    heap.peek()
        .map(|&Reverse(num)| num)
        .ok_or(Error::InvalidK { k, len: nums.len() })
}

/// Hoare's selection on a scratch copy, narrowing `lo..=hi` around the
/// target position until the pivot lands on it.
pub fn by_quickselect(nums: &[i32], k: usize) -> Result<i32> {
    check_k(nums, k)?;
    let mut scratch = nums.to_vec();
    // the kth largest sits at this index once sorted ascending
    let target = nums.len() - k;
    let (mut lo, mut hi) = (0, scratch.len() - 1);
    loop {
        if lo == hi {
            return Ok(scratch[lo]);
        }
        let pivot = partition(&mut scratch, lo, hi);
        tracing::trace!(lo, hi, pivot, target, "quickselect partition");
        match pivot.cmp(&target) {
            std::cmp::Ordering::Equal => return Ok(scratch[pivot]),
            std::cmp::Ordering::Less => lo = pivot + 1,
            std::cmp::Ordering::Greater => hi = pivot - 1,
        }
    }
}

/// Lomuto partition of `nums[lo..=hi]` around a median-of-three pivot.
///
/// Returns the pivot's final index; everything left of it is smaller and
/// everything right of it is at least as large.
fn partition(nums: &mut [i32], lo: usize, hi: usize) -> usize {
    let mid = lo + (hi - lo) / 2;
    // order lo, mid, hi so the median lands in `mid`
    if nums[mid] < nums[lo] {
        nums.swap(mid, lo);
    }
    if nums[hi] < nums[lo] {
        nums.swap(hi, lo);
    }
    if nums[hi] < nums[mid] {
        nums.swap(hi, mid);
    }
    nums.swap(mid, hi);

    let pivot = nums[hi];
    let mut store = lo;
    for idx in lo..hi {
        if nums[idx] < pivot {
            nums.swap(idx, store);
            store += 1;
        }
    }
    nums.swap(store, hi);
    store
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::Strategy;
    use proptest::prelude::*;
    use proptest::strategy::Strategy as _;
    use rstest::rstest;

    #[rstest]
    #[case(&[3, 2, 1, 5, 6, 4], 2, 5)]
    #[case(&[3, 2, 3, 1, 2, 4, 5, 5, 6], 4, 4)]
    #[case(&[3, 3, 2], 2, 3)]
    #[case(&[7], 1, 7)]
    #[case(&[1, 1, 1, 1], 3, 1)]
    #[case(&[-1, -5, 0, 9], 4, -5)]
    fn every_strategy(
        #[case] nums: &[i32],
        #[case] k: usize,
        #[case] expected: i32,
        #[values(Strategy::Sort, Strategy::Heap, Strategy::QuickSelect)] strategy: Strategy,
    ) {
        assert_eq!(kth_largest(nums, k, strategy), Ok(expected));
    }

    #[rstest]
    #[case(&[], 1)]
    #[case(&[1, 2], 0)]
    #[case(&[1, 2], 3)]
    fn invalid_k(#[case] nums: &[i32], #[case] k: usize) {
        for strategy in [Strategy::Sort, Strategy::Heap, Strategy::QuickSelect] {
            assert_eq!(
                kth_largest(nums, k, strategy),
                Err(Error::InvalidK { k, len: nums.len() })
            );
        }
    }

    #[test]
    fn input_is_not_reordered() {
        let nums = [5, 1, 4, 2, 3];
        by_quickselect(&nums, 2).unwrap();
        assert_eq!(nums, [5, 1, 4, 2, 3]);
    }

    proptest! {
        #[test]
        fn strategies_agree(
            (nums, k) in proptest::collection::vec(-20_i32..20, 1..40)
                .prop_flat_map(|nums| {
                    let len = nums.len();
                    (Just(nums), 1..=len)
                })
        ) {
            let expected = by_sorting(&nums, k).unwrap();
            prop_assert_eq!(by_heap(&nums, k).unwrap(), expected);
            prop_assert_eq!(by_quickselect(&nums, k).unwrap(), expected);
        }
    }
}
