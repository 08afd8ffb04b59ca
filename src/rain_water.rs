//! Trapping rain water, on an elevation profile and on a height map.

use std::{cmp::Reverse, collections::BinaryHeap};

use crate::grid::Grid;

/// For each bar, measure the tallest bar on either side by rescanning.
pub fn brute_force(heights: &[u32]) -> u64 {
    (0..heights.len())
        .map(|idx| {
            let left = heights[..=idx].iter().max().copied().unwrap_or(0);
            let right = heights[idx..].iter().max().copied().unwrap_or(0);
            u64::from(left.min(right) - heights[idx])
        })
        .sum()
}

/// Precompute the running maximum from each side.
pub fn prefix_max(heights: &[u32]) -> u64 {
    let left: Vec<u32> = heights
        .iter()
        .scan(0, |max, &h| {
            *max = (*max).max(h);
            Some(*max)
        })
        .collect();
    let mut right: Vec<u32> = heights
        .iter()
        .rev()
        .scan(0, |max, &h| {
            *max = (*max).max(h);
            Some(*max)
        })
        .collect();
    right.reverse();

    heights
        .iter()
        .zip(left.iter().zip(&right))
        .map(|(&h, (&l, &r))| u64::from(l.min(r) - h))
        .sum()
}

/// Keep a decreasing stack of bar indices; each taller bar closes off a
/// basin above the bar it pops.
pub fn monotonic_stack(heights: &[u32]) -> u64 {
    let mut stack: Vec<usize> = Vec::new();
    let mut water = 0;
    for (idx, &h) in heights.iter().enumerate() {
        while let Some(&floor) = stack.last() {
            if heights[floor] >= h {
                break;
            }
            stack.pop();
            let Some(&wall) = stack.last() else {
                break;
            };
            let depth = heights[wall].min(h) - heights[floor];
            let width = (idx - wall - 1) as u64;
            water += u64::from(depth) * width;
        }
        stack.push(idx);
    }
    water
}

/// Move inward from whichever side has the lower wall; the water above that
/// bar is bounded by the lower wall alone.
pub fn two_pointer(heights: &[u32]) -> u64 {
    let Some(last) = heights.len().checked_sub(1) else {
        return 0;
    };
    let (mut lo, mut hi) = (0, last);
    let (mut left_max, mut right_max) = (0, 0);
    let mut water = 0;
    while lo < hi {
        if heights[lo] < heights[hi] {
            left_max = left_max.max(heights[lo]);
            water += u64::from(left_max - heights[lo]);
            lo += 1;
        } else {
            right_max = right_max.max(heights[hi]);
            water += u64::from(right_max - heights[hi]);
            hi -= 1;
        }
    }
    water
}

/// Water held by a two-dimensional height map.
///
/// The border holds no water. Starting from it, repeatedly take the lowest
/// cell on the boundary of the processed region; any unvisited neighbour
/// lower than the current water level fills up to it.
pub fn trap_2d(map: &Grid<u32>) -> u64 {
    let (width, height) = (map.width(), map.height());
    if width < 3 || height < 3 {
        return 0;
    }

    let mut visited = Grid::<bool>::new(width, height);
    let mut heap = BinaryHeap::new();
    for (x, y) in map.coordinates() {
        if x == 0 || y == 0 || x == width - 1 || y == height - 1 {
            visited[(x, y)] = true;
            heap.push(Reverse((map[(x, y)], x, y)));
        }
    }

    let mut water = 0;
    while let Some(Reverse((level, x, y))) = heap.pop() {
        for (nx, ny) in map.neighbors(x, y) {
            if visited[(nx, ny)] {
                continue;
            }
            visited[(nx, ny)] = true;
            let cell = map[(nx, ny)];
            if cell < level {
                tracing::trace!(x = nx, y = ny, depth = level - cell, "filled cell");
                water += u64::from(level - cell);
            }
            heap.push(Reverse((level.max(cell), nx, ny)));
        }
    }
    tracing::debug!(width, height, water, "trapped water in height map");
    water
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case(&[0, 1, 0, 2, 1, 0, 1, 3, 2, 1, 2, 1], 6)]
    #[case(&[4, 2, 0, 3, 2, 5], 9)]
    #[case(&[], 0)]
    #[case(&[3], 0)]
    #[case(&[1, 2, 3], 0)]
    #[case(&[3, 0, 3], 3)]
    #[case(&[5, 4, 1, 2], 1)]
    fn profile(#[case] heights: &[u32], #[case] expected: u64) {
        assert_eq!(brute_force(heights), expected);
        assert_eq!(prefix_max(heights), expected);
        assert_eq!(monotonic_stack(heights), expected);
        assert_eq!(two_pointer(heights), expected);
    }

    fn map(rows: Vec<Vec<u32>>) -> Grid<u32> {
        Grid::from_rows(rows).unwrap()
    }

    #[rstest]
    #[case(vec![vec![1, 4, 3, 1, 3, 2], vec![3, 2, 1, 3, 2, 4], vec![2, 3, 3, 2, 3, 1]], 4)]
    #[case(
        vec![
            vec![3, 3, 3, 3, 3],
            vec![3, 2, 2, 2, 3],
            vec![3, 2, 1, 2, 3],
            vec![3, 2, 2, 2, 3],
            vec![3, 3, 3, 3, 3],
        ],
        10
    )]
    #[case(vec![vec![5, 5, 5], vec![5, 1, 5], vec![5, 5, 5]], 4)]
    #[case(vec![vec![5, 5, 5], vec![5, 1, 0], vec![5, 5, 5]], 0)]
    #[case(vec![vec![1, 2], vec![2, 1]], 0)]
    #[case(vec![], 0)]
    fn height_map(#[case] rows: Vec<Vec<u32>>, #[case] expected: u64) {
        assert_eq!(trap_2d(&map(rows)), expected);
    }

    #[test]
    fn single_row_map_matches_nothing() {
        // a 1d profile as a one row map has no enclosed cells
        assert_eq!(trap_2d(&map(vec![vec![3, 0, 3]])), 0);
    }

    proptest! {
        #[test]
        fn strategies_agree(heights in proptest::collection::vec(0_u32..10, 0..30)) {
            let expected = brute_force(&heights);
            prop_assert_eq!(prefix_max(&heights), expected);
            prop_assert_eq!(monotonic_stack(&heights), expected);
            prop_assert_eq!(two_pointer(&heights), expected);
        }
    }
}
