//! Whole-string wildcard matching: `?` matches any single character and `*`
//! matches any sequence, including the empty one.

use std::collections::HashMap;

/// Bottom-up table where `matches[i][j]` says whether the first `i` chars of
/// the text match the first `j` chars of the pattern. Only two rows are kept.
pub fn is_match_dp(text: &str, pattern: &str) -> bool {
    let text: Vec<char> = text.chars().collect();
    let pattern: Vec<char> = pattern.chars().collect();

    let mut previous = vec![false; pattern.len() + 1];
    previous[0] = true;
    // an empty text matches a pattern prefix of only stars
    for (j, &p) in pattern.iter().enumerate() {
        previous[j + 1] = previous[j] && p == '*';
    }

    for &t in &text {
        let mut current = vec![false; pattern.len() + 1];
        for (j, &p) in pattern.iter().enumerate() {
            current[j + 1] = match p {
                // star takes nothing, or absorbs this char
                '*' => current[j] || previous[j + 1],
                '?' => previous[j],
                _ => previous[j] && p == t,
            };
        }
        previous = current;
    }
    previous[pattern.len()]
}

/// Linear scan that remembers the last `*` seen; on a mismatch the star is
/// made to absorb one more character and matching resumes after it.
pub fn is_match_greedy(text: &str, pattern: &str) -> bool {
    let text: Vec<char> = text.chars().collect();
    let pattern: Vec<char> = pattern.chars().collect();

    let (mut t, mut p) = (0, 0);
    // position of the last star, and the text position it was matched against
    let mut backtrack: Option<(usize, usize)> = None;
    while t < text.len() {
        match pattern.get(p) {
            Some('*') => {
                backtrack = Some((p, t));
                p += 1;
            }
            Some(&c) if c == '?' || c == text[t] => {
                t += 1;
                p += 1;
            }
            _ => match backtrack {
                Some((star, absorbed)) => {
                    backtrack = Some((star, absorbed + 1));
                    p = star + 1;
                    t = absorbed + 1;
                }
                None => return false,
            },
        }
    }
    pattern[p..].iter().all(|&c| c == '*')
}

/// Top-down recursion memoised on `(text position, pattern position)`.
///
/// Recursion goes one frame deeper per character of text, so very long
/// texts (a few hundred thousand characters on a 2 MiB thread) overflow the
/// stack. [`is_match_dp`] and [`is_match_greedy`] have no such limit.
pub fn is_match_memo(text: &str, pattern: &str) -> bool {
    fn matches(
        text: &[char],
        pattern: &[char],
        t: usize,
        p: usize,
        memo: &mut HashMap<(usize, usize), bool>,
    ) -> bool {
        if let Some(&known) = memo.get(&(t, p)) {
            return known;
        }
        let result = match pattern.get(p) {
            None => t == text.len(),
            Some('*') => {
                matches(text, pattern, t, p + 1, memo)
                    || (t < text.len() && matches(text, pattern, t + 1, p, memo))
            }
            Some(&c) => {
                t < text.len()
                    && (c == '?' || c == text[t])
                    && matches(text, pattern, t + 1, p + 1, memo)
            }
        };
        memo.insert((t, p), result);
        result
    }

    let text: Vec<char> = text.chars().collect();
    // runs of stars behave like one, and collapsing them keeps recursion shallow
    let mut pattern: Vec<char> = pattern.chars().collect();
    pattern.dedup_by(|a, b| *a == '*' && *b == '*');
    matches(&text, &pattern, 0, 0, &mut HashMap::new())
}
