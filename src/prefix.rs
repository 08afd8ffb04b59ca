//! Longest common prefix of a list of strings.
//!
//! Every strategy compares whole `char`s, so a prefix never ends inside a
//! multi-byte code point.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    Horizontal,
    #[default]
    Vertical,
    DivideAndConquer,
    BinarySearch,
}

pub fn longest_common_prefix<S: AsRef<str>>(strs: &[S], strategy: Strategy) -> String {
    match strategy {
        Strategy::Horizontal => horizontal(strs),
        Strategy::Vertical => vertical(strs),
        Strategy::DivideAndConquer => divide_and_conquer(strs),
        Strategy::BinarySearch => binary_search(strs),
    }
}

/// Common prefix of two strings, as a prefix of `a`.
fn common<'a>(a: &'a str, b: &str) -> &'a str {
    let end = a
        .char_indices()
        .zip(b.chars())
        .find(|((_, ca), cb)| ca != cb)
        .map(|((idx, _), _)| idx)
        // no mismatch: one string is a prefix of the other
        .unwrap_or_else(|| a.len().min(b.len()));
    &a[..end]
}

/// Shrink a running prefix against each string in turn.
pub fn horizontal<S: AsRef<str>>(strs: &[S]) -> String {
    let Some((first, rest)) = strs.split_first() else {
        return String::new();
    };
    let mut prefix = first.as_ref();
    for s in rest {
        if prefix.is_empty() {
            break;
        }
        prefix = common(prefix, s.as_ref());
    }
    prefix.to_owned()
}

/// Compare column by column until some string differs or runs out.
pub fn vertical<S: AsRef<str>>(strs: &[S]) -> String {
    let Some((first, rest)) = strs.split_first() else {
        return String::new();
    };
    let first = first.as_ref();
    let mut others: Vec<_> = rest.iter().map(|s| s.as_ref().chars()).collect();
    let mut prefix = String::new();
    for ch in first.chars() {
        if others.iter_mut().any(|chars| chars.next() != Some(ch)) {
            break;
        }
        prefix.push(ch);
    }
    prefix
}

/// Split the list in halves, solve each, and combine the two prefixes.
pub fn divide_and_conquer<S: AsRef<str>>(strs: &[S]) -> String {
    fn solve<S: AsRef<str>>(strs: &[S]) -> &str {
        match strs {
            [] => "",
            [only] => only.as_ref(),
            _ => {
                let (left, right) = strs.split_at(strs.len() / 2);
                common(solve(left), solve(right))
            }
        }
    }

    solve(strs).to_owned()
}

/// Binary search on the prefix length, in chars, up to the shortest string.
pub fn binary_search<S: AsRef<str>>(strs: &[S]) -> String {
    let Some(first) = strs.first() else {
        return String::new();
    };
    let first: Vec<char> = first.as_ref().chars().collect();
    let shortest = strs
        .iter()
        .map(|s| s.as_ref().chars().count())
        .min()
        .unwrap_or(0);

    let is_common = |len: usize| {
        strs.iter()
            .all(|s| s.as_ref().chars().take(len).eq(first[..len].iter().copied()))
    };

    // invariant: a prefix of length `lo` is common, one of `hi + 1` is not
    let (mut lo, mut hi) = (0, shortest);
    while lo < hi {
        let mid = lo + (hi - lo + 1) / 2;
        if is_common(mid) {
            lo = mid;
        } else {
            hi = mid - 1;
        }
    }
    first[..lo].iter().collect()
}
