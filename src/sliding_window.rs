//! Substring problems solved by sliding a window over the input.
//!
//! Lengths and positions are counted in `char`s, not bytes.

use std::{collections::HashMap, ops::ControlFlow};

/// Length of the longest substring with no repeated character.
pub fn longest_without_repeating(s: &str) -> usize {
    let mut last_seen: HashMap<char, usize> = HashMap::new();
    let mut start = 0;
    let mut best = 0;
    for (idx, ch) in s.chars().enumerate() {
        if let Some(&prev) = last_seen.get(&ch) {
            // a repeat only matters if it is inside the current window
            start = start.max(prev + 1);
        }
        last_seen.insert(ch, idx);
        best = best.max(idx + 1 - start);
    }
    best
}

/// Length of the longest substring with at most `k` distinct characters.
pub fn longest_with_at_most_k_distinct(s: &str, k: usize) -> usize {
    let chars: Vec<char> = s.chars().collect();
    let mut counts: HashMap<char, usize> = HashMap::new();
    let mut start = 0;
    let mut best = 0;
    for (end, &ch) in chars.iter().enumerate() {
        *counts.entry(ch).or_default() += 1;
        while counts.len() > k {
            let out = chars[start];
            if let Some(count) = counts.get_mut(&out) {
                *count -= 1;
                if *count == 0 {
                    counts.remove(&out);
                }
            }
            start += 1;
        }
        best = best.max(end + 1 - start);
    }
    best
}

/// The shortest substring of `s` containing every character of `t`, counting
/// multiplicity.
///
/// When several windows are equally short the leftmost is returned. An empty
/// `t` has no meaningful window and yields `None`.
pub fn min_window(s: &str, t: &str) -> Option<String> {
    if t.is_empty() {
        return None;
    }
    let chars: Vec<char> = s.chars().collect();
    let mut need: HashMap<char, usize> = HashMap::new();
    for ch in t.chars() {
        *need.entry(ch).or_default() += 1;
    }

    let mut have: HashMap<char, usize> = HashMap::new();
    // number of distinct characters whose requirement is currently met
    let mut satisfied = 0;
    let mut best: Option<(usize, usize)> = None;
    let mut start = 0;
    for (end, &ch) in chars.iter().enumerate() {
        let Some(&wanted) = need.get(&ch) else {
            continue;
        };
        let count = have.entry(ch).or_default();
        *count += 1;
        if *count == wanted {
            satisfied += 1;
        }

        while satisfied == need.len() {
            let len = end + 1 - start;
            if best.map_or(true, |(_, best_len)| len < best_len) {
                best = Some((start, len));
            }
            let out = chars[start];
            if let (Some(&wanted), Some(count)) = (need.get(&out), have.get_mut(&out)) {
                if *count == wanted {
                    satisfied -= 1;
                }
                *count -= 1;
            }
            start += 1;
        }
    }

    best.map(|(start, len)| chars[start..start + len].iter().collect())
}

/// Report the start of every window of `s` which is an anagram of `p`, until
/// `on_match` breaks.
fn scan_anagrams(s: &str, p: &str, mut on_match: impl FnMut(usize) -> ControlFlow<()>) {
    let chars: Vec<char> = s.chars().collect();
    let width = p.chars().count();
    if width == 0 {
        for idx in 0..=chars.len() {
            if on_match(idx).is_break() {
                return;
            }
        }
        return;
    }

    // `balance[c]` is p's count of c minus the window's; the window matches
    // when every balance is zero
    let mut balance: HashMap<char, i64> = HashMap::new();
    for ch in p.chars() {
        *balance.entry(ch).or_default() += 1;
    }
    let mut unbalanced = balance.len();

    let mut adjust = |balance: &mut HashMap<char, i64>, ch: char, delta: i64| {
        let entry = balance.entry(ch).or_default();
        let was_zero = *entry == 0;
        *entry += delta;
        match (was_zero, *entry == 0) {
            (true, false) => unbalanced += 1,
            (false, true) => unbalanced -= 1,
            _ => {}
        }
        unbalanced
    };

    for (end, &ch) in chars.iter().enumerate() {
        let mut remaining = adjust(&mut balance, ch, -1);
        if end >= width {
            remaining = adjust(&mut balance, chars[end - width], 1);
        }
        if end + 1 >= width && remaining == 0 && on_match(end + 1 - width).is_break() {
            return;
        }
    }
}

/// Every start index of an anagram of `p` within `s`, ascending.
///
/// An empty `p` matches at every position, including the end.
pub fn find_anagrams(s: &str, p: &str) -> Vec<usize> {
    let mut starts = Vec::new();
    scan_anagrams(s, p, |start| {
        starts.push(start);
        ControlFlow::Continue(())
    });
    starts
}

/// `true` when some permutation of `p` occurs as a substring of `s`.
pub fn contains_permutation(s: &str, p: &str) -> bool {
    let mut found = false;
    scan_anagrams(s, p, |_| {
        found = true;
        ControlFlow::Break(())
    });
    found
}

/// Largest sum of any `k` consecutive values.
///
/// `None` when no such window exists. The sum is kept in `i128`, so it
/// cannot overflow.
pub fn max_sum_window(nums: &[i64], k: usize) -> Option<i128> {
    if k == 0 || k > nums.len() {
        return None;
    }
    let mut sum: i128 = nums[..k].iter().copied().map(i128::from).sum();
    let mut best = sum;
    for end in k..nums.len() {
        sum += i128::from(nums[end]) - i128::from(nums[end - k]);
        best = best.max(sum);
    }
    Some(best)
}
