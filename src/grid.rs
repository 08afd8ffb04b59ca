use std::ops::{Index, IndexMut};

use crate::error::{Error, Result};

/// A representation of a 2d grid.
///
/// For indexing operations on this grid, `(0, 0)` is the top left corner and
/// coordinates are `(x, y)`: column first, then row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T> Grid<T>
where
    T: Default + Clone,
{
    pub fn new(width: usize, height: usize) -> Self {
        Grid {
            width,
            height,
            cells: vec![T::default(); width * height],
        }
    }
}

impl<T> Grid<T> {
    /// Build a grid from a list of rows.
    ///
    /// Every row must have the same length as the first.
    pub fn from_rows<Rows, Row>(rows: Rows) -> Result<Self>
    where
        Rows: IntoIterator<Item = Row>,
        Row: IntoIterator<Item = T>,
    {
        let mut cells = Vec::new();
        let mut width = 0;
        let mut height = 0;
        for (row_idx, row) in rows.into_iter().enumerate() {
            let before = cells.len();
            cells.extend(row);
            let len = cells.len() - before;
            if row_idx == 0 {
                width = len;
            } else if len != width {
                return Err(Error::RaggedRows {
                    row: row_idx,
                    len,
                    expected: width,
                });
            }
            height += 1;
        }
        // a grid of empty rows is still empty
        if width == 0 {
            height = 0;
        }
        Ok(Grid {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Get the internal index where the desired value is stored,
    /// or `None` if it is out of bounds.
    pub fn idx(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then_some((y * self.width) + x)
    }

    pub fn check_bounds(&self, x: usize, y: usize) -> Result<()> {
        match self.idx(x, y) {
            Some(_) => Ok(()),
            None => Err(Error::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            }),
        }
    }

    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        self.idx(x, y).map(|idx| &self.cells[idx])
    }

    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut T> {
        self.idx(x, y).map(|idx| &mut self.cells[idx])
    }

    /// Iterate over the rows of this grid, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        // `chunks` panics on a zero chunk size
        self.cells.chunks(self.width.max(1))
    }

    /// Iterate over every `(x, y)` coordinate in row-major order.
    pub fn coordinates(&self) -> impl Iterator<Item = (usize, usize)> {
        let width = self.width;
        (0..self.height).flat_map(move |y| (0..width).map(move |x| (x, y)))
    }

    /// Iterate over the in-bounds orthogonal neighbors of `(x, y)`.
    pub fn neighbors(&self, x: usize, y: usize) -> impl Iterator<Item = (usize, usize)> {
        let (width, height) = (self.width, self.height);
        let up = y.checked_sub(1).map(|y| (x, y));
        let down = (y + 1 < height).then_some((x, y + 1));
        let left = x.checked_sub(1).map(|x| (x, y));
        let right = (x + 1 < width).then_some((x + 1, y));
        [up, right, down, left]
            .into_iter()
            .flatten()
            .filter(move |&(x, y)| x < width && y < height)
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    fn index(&self, (x, y): (usize, usize)) -> &Self::Output {
        self.get(x, y).unwrap()
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut Self::Output {
        self.get_mut(x, y).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_is_row_major() {
        let grid = Grid::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid[(2, 0)], 3);
        assert_eq!(grid[(0, 1)], 4);
        assert_eq!(
            grid.rows().collect::<Vec<_>>(),
            vec![&[1, 2, 3][..], &[4, 5, 6][..]]
        );
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let err = Grid::from_rows(vec![vec![1, 2], vec![3]]).unwrap_err();
        assert_eq!(
            err,
            Error::RaggedRows {
                row: 1,
                len: 1,
                expected: 2
            }
        );
    }

    #[test]
    fn empty_rows_make_an_empty_grid() {
        let grid: Grid<u8> = Grid::from_rows(vec![vec![], vec![]]).unwrap();
        assert!(grid.is_empty());
        assert_eq!(grid.height(), 0);
        assert_eq!(grid.rows().count(), 0);
    }

    #[test]
    fn out_of_bounds() {
        let grid: Grid<u8> = Grid::new(2, 3);
        assert!(grid.get(2, 0).is_none());
        assert!(grid.check_bounds(1, 2).is_ok());
        assert_eq!(
            grid.check_bounds(0, 3),
            Err(Error::OutOfBounds {
                x: 0,
                y: 3,
                width: 2,
                height: 3
            })
        );
    }

    #[test]
    fn corner_has_two_neighbors() {
        let grid: Grid<u8> = Grid::new(3, 3);
        let mut corner = grid.neighbors(0, 0).collect::<Vec<_>>();
        corner.sort_unstable();
        assert_eq!(corner, vec![(0, 1), (1, 0)]);
        assert_eq!(grid.neighbors(1, 1).count(), 4);
    }
}
