//! Counting islands of orthogonally connected land.

use std::collections::VecDeque;

use crate::{
    error::{Error, Result},
    grid::Grid,
};

/// Parse a map of `'1'` (land) and `'0'` (water) rows.
pub fn parse_map<S: AsRef<str>>(rows: &[S]) -> Result<Grid<bool>> {
    let rows = rows
        .iter()
        .enumerate()
        .map(|(y, row)| {
            row.as_ref()
                .chars()
                .enumerate()
                .map(|(x, ch)| match ch {
                    '1' => Ok(true),
                    '0' => Ok(false),
                    _ => Err(Error::InvalidCell { ch, x, y }),
                })
                .collect::<Result<Vec<_>>>()
        })
        .collect::<Result<Vec<_>>>()?;
    Grid::from_rows(rows)
}

/// Count islands by flooding each one with an explicit depth-first stack.
pub fn count_dfs(map: &Grid<bool>) -> usize {
    let mut visited = Grid::<bool>::new(map.width(), map.height());
    let mut islands = 0;
    for (x, y) in map.coordinates() {
        if !map[(x, y)] || visited[(x, y)] {
            continue;
        }
        islands += 1;
        visited[(x, y)] = true;
        let mut stack = vec![(x, y)];
        let mut area = 0;
        while let Some((cx, cy)) = stack.pop() {
            area += 1;
            for (nx, ny) in map.neighbors(cx, cy) {
                if map[(nx, ny)] && !visited[(nx, ny)] {
                    visited[(nx, ny)] = true;
                    stack.push((nx, ny));
                }
            }
        }
        tracing::trace!(x, y, area, "flooded island");
    }
    islands
}

/// Area of every island, in discovery order, using a breadth-first flood.
fn island_areas(map: &Grid<bool>) -> Vec<usize> {
    let mut visited = Grid::<bool>::new(map.width(), map.height());
    let mut areas = Vec::new();
    for (x, y) in map.coordinates() {
        if !map[(x, y)] || visited[(x, y)] {
            continue;
        }
        visited[(x, y)] = true;
        let mut queue = VecDeque::from([(x, y)]);
        let mut area = 0;
        while let Some((cx, cy)) = queue.pop_front() {
            area += 1;
            for (nx, ny) in map.neighbors(cx, cy) {
                if map[(nx, ny)] && !visited[(nx, ny)] {
                    visited[(nx, ny)] = true;
                    queue.push_back((nx, ny));
                }
            }
        }
        areas.push(area);
    }
    areas
}

/// Count islands by flooding each one breadth first.
pub fn count_bfs(map: &Grid<bool>) -> usize {
    island_areas(map).len()
}

/// Size of the largest island, or 0 when there is no land.
pub fn max_area(map: &Grid<bool>) -> usize {
    island_areas(map).into_iter().max().unwrap_or(0)
}

/// Disjoint sets over cell indices, with path halving and union by size.
struct DisjointSet {
    parent: Vec<usize>,
    size: Vec<usize>,
    sets: usize,
}

impl DisjointSet {
    fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            size: vec![1; len],
            sets: len,
        }
    }

    fn find(&mut self, mut node: usize) -> usize {
        while self.parent[node] != node {
            self.parent[node] = self.parent[self.parent[node]];
            node = self.parent[node];
        }
        node
    }

    fn union(&mut self, a: usize, b: usize) {
        let (mut a, mut b) = (self.find(a), self.find(b));
        if a == b {
            return;
        }
        if self.size[a] < self.size[b] {
            std::mem::swap(&mut a, &mut b);
        }
        self.parent[b] = a;
        self.size[a] += self.size[b];
        self.sets -= 1;
    }
}

/// Count islands by unioning each land cell with its land neighbours to the
/// right and below.
pub fn count_union_find(map: &Grid<bool>) -> usize {
    let mut sets = DisjointSet::new(map.width() * map.height());
    let mut water = 0;
    for (x, y) in map.coordinates() {
        if !map[(x, y)] {
            water += 1;
            continue;
        }
        let Some(here) = map.idx(x, y) else {
            continue;
        };
        for (nx, ny) in [(x + 1, y), (x, y + 1)] {
            if let (Some(true), Some(there)) = (map.get(nx, ny).copied(), map.idx(nx, ny)) {
                sets.union(here, there);
            }
        }
    }
    // every water cell is its own singleton set
    sets.sets - water
}
