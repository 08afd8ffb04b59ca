//! Minimum genetic mutation.
//!
//! A gene is an 8 character string over `A`, `C`, `G` and `T`. One mutation
//! changes a single character, and a mutation is only allowed when the
//! resulting gene is in the bank.

use std::collections::{HashSet, VecDeque};

use crate::error::{Error, Result};

const GENE_LEN: usize = 8;
const BASES: [u8; 4] = *b"ACGT";

type Gene = [u8; GENE_LEN];

fn parse(gene: &str) -> Result<Gene> {
    let bytes = gene.as_bytes();
    if bytes.len() != GENE_LEN || !bytes.iter().all(|b| BASES.contains(b)) {
        return Err(Error::InvalidGene(gene.to_owned()));
    }
    let mut parsed = [0; GENE_LEN];
    parsed.copy_from_slice(bytes);
    Ok(parsed)
}

fn parse_all<S: AsRef<str>>(
    start: &str,
    end: &str,
    bank: &[S],
) -> Result<(Gene, Gene, HashSet<Gene>)> {
    let start = parse(start)?;
    let end = parse(end)?;
    let bank = bank
        .iter()
        .map(|gene| parse(gene.as_ref()))
        .collect::<Result<HashSet<_>>>()?;
    Ok((start, end, bank))
}

/// Every gene one mutation away from `gene`.
fn mutations(gene: Gene) -> impl Iterator<Item = Gene> {
    (0..GENE_LEN).flat_map(move |pos| {
        BASES
            .into_iter()
            .filter(move |&base| base != gene[pos])
            .map(move |base| {
                let mut next = gene;
                next[pos] = base;
                next
            })
    })
}

/// Fewest mutations turning `start` into `end`, by breadth-first search.
///
/// `start` does not need to be in the bank; `end` and every gene along the
/// way do. Returns `Ok(None)` when `end` is unreachable.
pub fn min_mutation_bfs<S: AsRef<str>>(
    start: &str,
    end: &str,
    bank: &[S],
) -> Result<Option<usize>> {
    let (start, end, bank) = parse_all(start, end, bank)?;
    if start == end {
        return Ok(Some(0));
    }
    if !bank.contains(&end) {
        return Ok(None);
    }

    let mut seen = HashSet::from([start]);
    let mut queue = VecDeque::from([(start, 0)]);
    while let Some((gene, steps)) = queue.pop_front() {
        for next in mutations(gene) {
            if !bank.contains(&next) || !seen.insert(next) {
                continue;
            }
            if next == end {
                tracing::debug!(steps = steps + 1, visited = seen.len(), "reached end gene");
                return Ok(Some(steps + 1));
            }
            queue.push_back((next, steps + 1));
        }
    }
    tracing::debug!(visited = seen.len(), "end gene unreachable");
    Ok(None)
}

/// Fewest mutations turning `start` into `end`, searching from both ends at
/// once and always expanding the smaller frontier.
pub fn min_mutation_bidirectional<S: AsRef<str>>(
    start: &str,
    end: &str,
    bank: &[S],
) -> Result<Option<usize>> {
    let (start, end, mut unvisited) = parse_all(start, end, bank)?;
    if start == end {
        return Ok(Some(0));
    }
    if !unvisited.remove(&end) {
        return Ok(None);
    }
    unvisited.remove(&start);

    let mut near = HashSet::from([start]);
    let mut far = HashSet::from([end]);
    let mut steps = 0;
    while !near.is_empty() && !far.is_empty() {
        if near.len() > far.len() {
            std::mem::swap(&mut near, &mut far);
        }
        steps += 1;
        tracing::trace!(steps, near = near.len(), far = far.len(), "expanding frontier");

        let mut next_frontier = HashSet::new();
        for &gene in &near {
            for next in mutations(gene) {
                if far.contains(&next) {
                    tracing::debug!(steps, "frontiers met");
                    return Ok(Some(steps));
                }
                if unvisited.remove(&next) {
                    next_frontier.insert(next);
                }
            }
        }
        near = next_frontier;
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case("AACCGGTT", "AACCGGTA", &["AACCGGTA"], Some(1))]
    #[case("AACCGGTT", "AAACGGTA", &["AACCGGTA", "AACCGCTA", "AAACGGTA"], Some(2))]
    #[case("AAAAACCC", "AACCCCCC", &["AAAACCCC", "AAACCCCC", "AACCCCCC"], Some(3))]
    #[case("AACCGGTT", "AACCGGTA", &[], None)]
    #[case("AACCGGTT", "AACCGGTT", &[], Some(0))]
    #[case("AAAAAAAA", "CCCCCCCC", &["AAAAAAAC", "CCCCCCCC"], None)]
    #[case("AACCTTGG", "AATTCCGG", &["AATTCCGG", "AACCTGGG", "AACCCCGG", "AACCTACC"], None)]
    fn both_searches(
        #[case] start: &str,
        #[case] end: &str,
        #[case] bank: &[&str],
        #[case] expected: Option<usize>,
    ) {
        assert_eq!(min_mutation_bfs(start, end, bank), Ok(expected));
        assert_eq!(min_mutation_bidirectional(start, end, bank), Ok(expected));
    }

    #[rstest]
    #[case("AACCGGT", "AACCGGTA", &["AACCGGTA"], "AACCGGT")]
    #[case("AACCGGTT", "AACCGGTX", &["AACCGGTA"], "AACCGGTX")]
    #[case("AACCGGTT", "AACCGGTA", &["aaccggta"], "aaccggta")]
    fn invalid_genes(
        #[case] start: &str,
        #[case] end: &str,
        #[case] bank: &[&str],
        #[case] bad: &str,
    ) {
        let expected = Err(Error::InvalidGene(bad.to_owned()));
        assert_eq!(min_mutation_bfs(start, end, bank), expected);
        assert_eq!(min_mutation_bidirectional(start, end, bank), expected);
    }

    fn gene() -> impl Strategy<Value = String> {
        "[AC]{8}"
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn searches_agree(
            start in gene(),
            end in gene(),
            bank in proptest::collection::vec(gene(), 0..40),
        ) {
            prop_assert_eq!(
                min_mutation_bfs(&start, &end, &bank),
                min_mutation_bidirectional(&start, &end, &bank)
            );
        }
    }
}
