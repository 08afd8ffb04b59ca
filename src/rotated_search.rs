//! Binary search over an ascending array that has been rotated at some
//! unknown pivot, like `[4, 5, 6, 7, 0, 1, 2]`.

/// Position of `target` in a rotated array of distinct values.
///
/// At every step one half of `lo..=hi` is sorted; the target is either in
/// that half or in the other.
pub fn search(nums: &[i32], target: i32) -> Option<usize> {
    let (mut lo, mut hi) = (0, nums.len().checked_sub(1)?);
    while lo <= hi {
        let mid = lo + (hi - lo) / 2;
        if nums[mid] == target {
            return Some(mid);
        }
        if nums[lo] <= nums[mid] {
            // left half is sorted
            if nums[lo] <= target && target < nums[mid] {
                hi = mid.checked_sub(1)?;
            } else {
                lo = mid + 1;
            }
        } else if nums[mid] < target && target <= nums[hi] {
            lo = mid + 1;
        } else {
            hi = mid.checked_sub(1)?;
        }
    }
    None
}

/// `true` if `target` occurs in a rotated array that may hold duplicates.
///
/// When the ends and the middle are equal neither half can be proven sorted,
/// so both ends shrink by one; the worst case is linear.
pub fn search_with_duplicates(nums: &[i32], target: i32) -> bool {
    let Some(last) = nums.len().checked_sub(1) else {
        return false;
    };
    let (mut lo, mut hi) = (0, last);
    while lo <= hi {
        let mid = lo + (hi - lo) / 2;
        if nums[mid] == target {
            return true;
        }
        if nums[lo] == nums[mid] && nums[mid] == nums[hi] {
            lo += 1;
            if hi == 0 {
                break;
            }
            hi -= 1;
        } else if nums[lo] <= nums[mid] {
            if nums[lo] <= target && target < nums[mid] {
                if mid == 0 {
                    break;
                }
                hi = mid - 1;
            } else {
                lo = mid + 1;
            }
        } else if nums[mid] < target && target <= nums[hi] {
            lo = mid + 1;
        } else {
            if mid == 0 {
                break;
            }
            hi = mid - 1;
        }
    }
    false
}

/// Index of the smallest value, which is also the number of positions the
/// array was rotated by. Values must be distinct.
pub fn rotation_index(nums: &[i32]) -> Option<usize> {
    let (mut lo, mut hi) = (0, nums.len().checked_sub(1)?);
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if nums[mid] > nums[hi] {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    Some(lo)
}

/// Smallest value of a rotated array, duplicates allowed.
pub fn find_min(nums: &[i32]) -> Option<i32> {
    let (mut lo, mut hi) = (0, nums.len().checked_sub(1)?);
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        match nums[mid].cmp(&nums[hi]) {
            std::cmp::Ordering::Greater => lo = mid + 1,
            std::cmp::Ordering::Less => hi = mid,
            // can't tell which side the minimum is on, but `hi` has a twin at `mid`
            std::cmp::Ordering::Equal => hi -= 1,
        }
    }
    Some(nums[lo])
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case(&[4, 5, 6, 7, 0, 1, 2], 0, Some(4))]
    #[case(&[4, 5, 6, 7, 0, 1, 2], 3, None)]
    #[case(&[4, 5, 6, 7, 0, 1, 2], 4, Some(0))]
    #[case(&[4, 5, 6, 7, 0, 1, 2], 2, Some(6))]
    #[case(&[1], 0, None)]
    #[case(&[1], 1, Some(0))]
    #[case(&[3, 1], 1, Some(1))]
    #[case(&[3, 1], 0, None)]
    #[case(&[5, 1, 3], 5, Some(0))]
    #[case(&[], 5, None)]
    fn distinct(#[case] nums: &[i32], #[case] target: i32, #[case] expected: Option<usize>) {
        assert_eq!(search(nums, target), expected);
        assert_eq!(search_with_duplicates(nums, target), expected.is_some());
    }

    #[rstest]
    #[case(&[2, 5, 6, 0, 0, 1, 2], 0, true)]
    #[case(&[2, 5, 6, 0, 0, 1, 2], 3, false)]
    #[case(&[1, 0, 1, 1, 1], 0, true)]
    #[case(&[1, 1, 1, 1, 1, 1, 1, 1, 1, 13, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1], 13, true)]
    #[case(&[1, 1], 0, false)]
    fn duplicates(#[case] nums: &[i32], #[case] target: i32, #[case] expected: bool) {
        assert_eq!(search_with_duplicates(nums, target), expected);
    }

    #[rstest]
    #[case(&[3, 4, 5, 1, 2], 3)]
    #[case(&[4, 5, 6, 7, 0, 1, 2], 4)]
    #[case(&[11, 13, 15, 17], 0)]
    #[case(&[2, 1], 1)]
    fn pivot(#[case] nums: &[i32], #[case] expected: usize) {
        assert_eq!(rotation_index(nums), Some(expected));
        assert_eq!(find_min(nums), Some(nums[expected]));
    }

    #[rstest]
    #[case(&[2, 2, 2, 0, 1], 0)]
    #[case(&[1, 3, 5], 1)]
    #[case(&[3, 3, 1, 3], 1)]
    #[case(&[10, 1, 10, 10, 10], 1)]
    fn minimum_with_duplicates(#[case] nums: &[i32], #[case] expected: i32) {
        assert_eq!(find_min(nums), Some(expected));
    }

    #[test]
    fn empty() {
        assert_eq!(rotation_index(&[]), None);
        assert_eq!(find_min(&[]), None);
        assert!(!search_with_duplicates(&[], 1));
    }

    proptest! {
        #[test]
        fn finds_every_member(
            values in proptest::collection::btree_set(-100_i32..100, 1..20),
            shift in 0_usize..20,
            probe in -100_i32..100,
        ) {
            let mut nums: Vec<i32> = values.into_iter().collect();
            let len = nums.len();
            nums.rotate_left(shift % len);
            prop_assert_eq!(rotation_index(&nums), Some((len - shift % len) % len));
            prop_assert_eq!(search(&nums, probe), nums.iter().position(|&n| n == probe));
            prop_assert_eq!(search_with_duplicates(&nums, probe), nums.contains(&probe));
        }
    }
}
