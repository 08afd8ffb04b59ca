pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("the point `({x}, {y})` is out of bounds. max: `({width}, {height})`")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
    #[error("row {row} has length {len} but row 0 has length {expected}")]
    RaggedRows {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[error("{left_name} has length {left} but {right_name} has length {right}")]
    LengthMismatch {
        left_name: &'static str,
        left: usize,
        right_name: &'static str,
        right: usize,
    },
    #[error("k must be in `1..={len}`, got {k}")]
    InvalidK { k: usize, len: usize },
    #[error("input must not be empty")]
    EmptyInput,
    #[error("input `{0}` is not sorted in non-decreasing order")]
    UnsortedInput(&'static str),
    #[error("interval `[{start}, {end}]` has start after end")]
    InvalidInterval { start: i64, end: i64 },
    #[error("\"{0}\" is not an 8 character gene over `ACGT`")]
    InvalidGene(String),
    #[error("unexpected character {ch:?} at `({x}, {y})`")]
    InvalidCell { ch: char, x: usize, y: usize },
    #[error("board must be 9x9, found {width}x{height}")]
    BoardShape { width: usize, height: usize },
    #[error("`{operation}` overflowed a 64-bit result")]
    Overflow { operation: &'static str },
    #[error("level order slot {index} has a value but its parent is missing")]
    OrphanNode { index: usize },
}
