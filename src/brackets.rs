//! Variations on validating round brackets.
//!
//! Unless stated otherwise only `(` and `)` are significant. For the
//! longest-valid family any other character breaks a run, because a
//! substring containing it cannot be well formed.

/// Length of the longest well-formed substring, using a stack of indices.
///
/// The bottom of the stack always holds the position just before the current
/// candidate run, so the run length is the distance to the top.
pub fn longest_valid_stack(s: &str) -> usize {
    let chars: Vec<char> = s.chars().collect();
    let mut stack: Vec<isize> = vec![-1];
    let mut best = 0;
    for (idx, &ch) in chars.iter().enumerate() {
        let idx = idx as isize;
        match ch {
            '(' => stack.push(idx),
            ')' => {
                stack.pop();
                match stack.last() {
                    Some(&base) => best = best.max((idx - base) as usize),
                    None => stack.push(idx),
                }
            }
            _ => {
                stack.clear();
                stack.push(idx);
            }
        }
    }
    best
}

/// Length of the longest well-formed substring, where `dp[i]` is the length
/// of the longest valid substring ending at `i`.
pub fn longest_valid_dp(s: &str) -> usize {
    let chars: Vec<char> = s.chars().collect();
    let mut dp = vec![0_usize; chars.len()];
    for i in 1..chars.len() {
        if chars[i] != ')' {
            continue;
        }
        if chars[i - 1] == '(' {
            dp[i] = if i >= 2 { dp[i - 2] } else { 0 } + 2;
            continue;
        }
        // `...((...))`: look past the run ending at `i - 1` for an opener
        let inner = dp[i - 1];
        if inner > 0 && i > inner && chars[i - inner - 1] == '(' {
            let before = if i >= inner + 2 { dp[i - inner - 2] } else { 0 };
            dp[i] = inner + 2 + before;
        }
    }
    dp.into_iter().max().unwrap_or(0)
}

/// Length of the longest well-formed substring in constant space.
///
/// A left-to-right scan catches runs that end with too many `)`, and a
/// right-to-left scan catches runs that end with too many `(`.
pub fn longest_valid_two_pass(s: &str) -> usize {
    fn scan(chars: impl Iterator<Item = char>, open: char) -> usize {
        let (mut opened, mut closed, mut best) = (0_usize, 0_usize, 0);
        for ch in chars {
            if ch == open {
                opened += 1;
            } else if ch == '(' || ch == ')' {
                closed += 1;
            } else {
                opened = 0;
                closed = 0;
                continue;
            }
            if opened == closed {
                best = best.max(2 * closed);
            } else if closed > opened {
                opened = 0;
                closed = 0;
            }
        }
        best
    }

    scan(s.chars(), '(').max(scan(s.chars().rev(), ')'))
}

/// Minimum number of parentheses which must be inserted to balance `s`.
///
/// Characters other than `(` and `)` are ignored.
pub fn min_add_to_make_valid(s: &str) -> usize {
    let mut open = 0_usize;
    let mut insertions = 0;
    for ch in s.chars() {
        match ch {
            '(' => open += 1,
            ')' if open > 0 => open -= 1,
            ')' => insertions += 1,
            _ => {}
        }
    }
    insertions + open
}

/// Remove the minimum number of parentheses to balance `s`.
///
/// Every `)` without an earlier partner is dropped, as is every `(` still
/// open at the end. Other characters are kept in place.
pub fn min_remove_to_make_valid(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut keep = vec![true; chars.len()];
    let mut open = Vec::new();
    for (idx, &ch) in chars.iter().enumerate() {
        match ch {
            '(' => open.push(idx),
            ')' => {
                if open.pop().is_none() {
                    keep[idx] = false;
                }
            }
            _ => {}
        }
    }
    for idx in open {
        keep[idx] = false;
    }
    chars
        .into_iter()
        .zip(keep)
        .filter_map(|(ch, keep)| keep.then_some(ch))
        .collect()
}

/// `true` if `s` can be balanced when each `*` is read as `(`, `)` or nothing.
///
/// Tracks the range of possible open counts; other characters are ignored.
pub fn is_valid_with_wildcards(s: &str) -> bool {
    let (mut low, mut high) = (0_i64, 0_i64);
    for ch in s.chars() {
        match ch {
            '(' => {
                low += 1;
                high += 1;
            }
            ')' => {
                low -= 1;
                high -= 1;
            }
            '*' => {
                low -= 1;
                high += 1;
            }
            _ => continue,
        }
        if high < 0 {
            return false;
        }
        low = low.max(0);
    }
    low == 0
}

/// Interval dynamic programming over `valid[i][j]`, which records whether the
/// half-open range `i..j` can be balanced.
pub fn is_valid_with_wildcards_dp(s: &str) -> bool {
    let chars: Vec<char> = s
        .chars()
        .filter(|ch| matches!(ch, '(' | ')' | '*'))
        .collect();
    let n = chars.len();
    let mut valid = vec![vec![false; n + 1]; n + 1];
    for (i, row) in valid.iter_mut().enumerate() {
        row[i] = true;
    }

    for len in 1..=n {
        for i in 0..=(n - len) {
            let j = i + len;
            // `*` at the front reads as nothing
            let mut ok = chars[i] == '*' && valid[i + 1][j];
            // otherwise the front opens, and is closed by some `k`
            if !ok && matches!(chars[i], '(' | '*') {
                ok = (i + 1..j).any(|k| {
                    matches!(chars[k], ')' | '*') && valid[i + 1][k] && valid[k + 1][j]
                });
            }
            valid[i][j] = ok;
        }
    }
    valid[0][n]
}

/// Every balanced string of `pairs` pairs of parentheses, in lexicographic
/// order.
pub fn generate(pairs: usize) -> Vec<String> {
    fn extend(
        current: &mut String,
        open: usize,
        close: usize,
        pairs: usize,
        out: &mut Vec<String>,
    ) {
        if close == pairs {
            out.push(current.clone());
            return;
        }
        if open < pairs {
            current.push('(');
            extend(current, open + 1, close, pairs, out);
            current.pop();
        }
        if close < open {
            current.push(')');
            extend(current, open, close + 1, pairs, out);
            current.pop();
        }
    }

    let mut out = Vec::new();
    extend(&mut String::with_capacity(2 * pairs), 0, 0, pairs, &mut out);
    out
}
