//! Rotating a slice in place.
//!
//! Rotating right by `k` moves the element at `i` to `(i + k) % len`. Any
//! `k` is accepted and reduced modulo the length; an empty slice is left
//! alone.

/// Reverse the whole slice, then each of the two parts.
pub fn rotate_reverse<T>(nums: &mut [T], k: usize) {
    if nums.is_empty() {
        return;
    }
    let k = k % nums.len();
    nums.reverse();
    let (front, back) = nums.split_at_mut(k);
    front.reverse();
    back.reverse();
}

/// Like [`rotate_reverse`], but moves elements to the left.
pub fn rotate_left_reverse<T>(nums: &mut [T], k: usize) {
    if nums.is_empty() {
        return;
    }
    let k = k % nums.len();
    rotate_reverse(nums, nums.len() - k);
}

/// Follow each cycle of the permutation, carrying one element at a time.
///
/// There are `gcd(len, k)` cycles; counting moved elements avoids computing
/// it.
pub fn rotate_cyclic<T>(nums: &mut [T], k: usize) {
    let len = nums.len();
    if len == 0 || k % len == 0 {
        return;
    }
    let k = k % len;
    let mut moved = 0;
    let mut start = 0;
    while moved < len {
        let mut current = start;
        loop {
            let next = (current + k) % len;
            // the element that belongs at `next` is parked at `start`
            nums.swap(start, next);
            moved += 1;
            current = next;
            if current == start {
                break;
            }
        }
        start += 1;
    }
}

/// Copy into a scratch buffer at the rotated positions.
pub fn rotate_with_buffer<T: Clone>(nums: &mut [T], k: usize) {
    let len = nums.len();
    if len == 0 {
        return;
    }
    let k = k % len;
    let buffer = nums.to_vec();
    for (idx, value) in buffer.into_iter().enumerate() {
        nums[(idx + k) % len] = value;
    }
}
