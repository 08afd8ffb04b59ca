//! The 0-1 knapsack: each item is taken whole or not at all.
//!
//! Values are `u64` per item and totals are `u128`, so no selection can
//! overflow.

use std::collections::HashMap;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    pub weight: usize,
    pub value: u64,
}

impl Item {
    pub fn new(weight: usize, value: u64) -> Self {
        Self { weight, value }
    }
}

/// Pair up parallel weight and value lists.
pub fn from_parallel(weights: &[usize], values: &[u64]) -> Result<Vec<Item>> {
    if weights.len() != values.len() {
        return Err(Error::LengthMismatch {
            left_name: "weights",
            left: weights.len(),
            right_name: "values",
            right: values.len(),
        });
    }
    Ok(weights
        .iter()
        .zip(values)
        .map(|(&weight, &value)| Item { weight, value })
        .collect())
}

/// The items chosen by [`solve`], and their total value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    pub value: u128,
    /// Indices into the item list, ascending.
    pub indices: Vec<usize>,
}

impl Selection {
    /// Total weight of the chosen items.
    ///
    /// `None` when an index is not in `items`, which happens when the
    /// selection came from a different item list.
    pub fn weight(&self, items: &[Item]) -> Option<usize> {
        self.indices.iter().try_fold(0_usize, |total, &idx| {
            total.checked_add(items.get(idx)?.weight)
        })
    }
}

/// `table[i][w]` is the best value using the first `i` items within weight `w`.
fn build_table(items: &[Item], capacity: usize) -> Vec<Vec<u128>> {
    let mut table = vec![vec![0_u128; capacity + 1]; items.len() + 1];
    for (i, item) in items.iter().enumerate() {
        for w in 0..=capacity {
            let skip = table[i][w];
            table[i + 1][w] = match w.checked_sub(item.weight) {
                Some(rest) => skip.max(table[i][rest] + u128::from(item.value)),
                None => skip,
            };
        }
    }
    table
}

/// Maximum value, by the full two-dimensional table.
pub fn max_value_table(items: &[Item], capacity: usize) -> u128 {
    build_table(items, capacity)[items.len()][capacity]
}

/// Maximum value, keeping a single row of the table.
///
/// Capacities are visited from high to low so that each item is counted at
/// most once.
pub fn max_value_rolling(items: &[Item], capacity: usize) -> u128 {
    let mut best = vec![0_u128; capacity + 1];
    for item in items {
        for w in (item.weight..=capacity).rev() {
            best[w] = best[w].max(best[w - item.weight] + u128::from(item.value));
        }
    }
    best[capacity]
}

/// Maximum value, by top-down recursion memoised on `(item, capacity)`.
pub fn max_value_memo(items: &[Item], capacity: usize) -> u128 {
    fn best(
        items: &[Item],
        idx: usize,
        capacity: usize,
        memo: &mut HashMap<(usize, usize), u128>,
    ) -> u128 {
        let Some(item) = items.get(idx) else {
            return 0;
        };
        if let Some(&known) = memo.get(&(idx, capacity)) {
            return known;
        }
        let skip = best(items, idx + 1, capacity, memo);
        let take = match capacity.checked_sub(item.weight) {
            Some(rest) => u128::from(item.value) + best(items, idx + 1, rest, memo),
            None => 0,
        };
        let result = skip.max(take);
        memo.insert((idx, capacity), result);
        result
    }

    best(items, 0, capacity, &mut HashMap::new())
}

/// Maximum value along with the items that achieve it.
pub fn solve(items: &[Item], capacity: usize) -> Selection {
    let table = build_table(items, capacity);
    let value = table[items.len()][capacity];

    // walk back up the table: an item was taken wherever it changed the value
    let mut indices = Vec::new();
    let mut w = capacity;
    for i in (0..items.len()).rev() {
        if table[i + 1][w] != table[i][w] {
            indices.push(i);
            w -= items[i].weight;
        }
    }
    indices.reverse();
    Selection { value, indices }
}
