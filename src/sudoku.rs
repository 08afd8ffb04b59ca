//! Validating a partially filled 9x9 sudoku board.
//!
//! A board is valid when no row, column or 3x3 box holds the same digit
//! twice. Only the filled cells are checked; whether the board can be
//! completed is a different question.

use std::collections::HashSet;

use crate::{
    error::{Error, Result},
    grid::Grid,
};

pub const SIZE: usize = 9;
const BOX: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board(Grid<Option<u8>>);

impl Board {
    /// Parse nine rows of nine characters: `1`-`9` for a digit, `.` for an
    /// empty cell.
    pub fn parse<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        let cells = rows
            .iter()
            .enumerate()
            .map(|(y, row)| {
                row.as_ref()
                    .chars()
                    .enumerate()
                    .map(|(x, ch)| match ch {
                        '.' => Ok(None),
                        '1'..='9' => Ok(Some(ch as u8 - b'0')),
                        _ => Err(Error::InvalidCell { ch, x, y }),
                    })
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;

        let height = cells.len();
        if let Some(row) = cells.iter().find(|row| row.len() != SIZE) {
            return Err(Error::BoardShape {
                width: row.len(),
                height,
            });
        }
        if height != SIZE {
            return Err(Error::BoardShape {
                width: SIZE,
                height,
            });
        }
        Grid::from_rows(cells).map(Self)
    }

    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        self.0.get(x, y).copied().flatten()
    }

    fn filled(&self) -> impl Iterator<Item = (usize, usize, u8)> + '_ {
        self.0
            .coordinates()
            .filter_map(|(x, y)| self.get(x, y).map(|digit| (x, y, digit)))
    }

    /// Every filled cell that shares its digit with another cell in the same
    /// row, column or box, sorted by `(x, y)`.
    pub fn conflicts(&self) -> Vec<(usize, usize)> {
        let filled: Vec<_> = self.filled().collect();
        let mut clashing: Vec<(usize, usize)> = filled
            .iter()
            .filter(|&&(x, y, digit)| {
                filled.iter().any(|&(ox, oy, other)| {
                    (ox, oy) != (x, y)
                        && other == digit
                        && (ox == x || oy == y || box_of(ox, oy) == box_of(x, y))
                })
            })
            .map(|&(x, y, _)| (x, y))
            .collect();
        clashing.sort_unstable();
        clashing
    }
}

fn box_of(x: usize, y: usize) -> usize {
    (y / BOX) * BOX + x / BOX
}

/// One pass over the board, with a bitmask of the digits seen so far in each
/// row, column and box.
pub fn is_valid_bitmask(board: &Board) -> bool {
    let mut rows = [0_u16; SIZE];
    let mut columns = [0_u16; SIZE];
    let mut boxes = [0_u16; SIZE];
    for (x, y, digit) in board.filled() {
        let bit = 1 << digit;
        let b = box_of(x, y);
        if (rows[y] | columns[x] | boxes[b]) & bit != 0 {
            return false;
        }
        rows[y] |= bit;
        columns[x] |= bit;
        boxes[b] |= bit;
    }
    true
}

/// One set of `(unit, digit)` observations per kind of unit.
pub fn is_valid_sets(board: &Board) -> bool {
    let mut rows = HashSet::new();
    let mut columns = HashSet::new();
    let mut boxes = HashSet::new();
    board.filled().all(|(x, y, digit)| {
        rows.insert((y, digit))
            && columns.insert((x, digit))
            && boxes.insert((box_of(x, y), digit))
    })
}
