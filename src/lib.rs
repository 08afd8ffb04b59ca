mod error;
mod grid;

pub mod brackets;
pub mod gene_mutation;
pub mod intervals;
pub mod islands;
pub mod knapsack;
pub mod kth_largest;
pub mod max_subarray;
pub mod median;
pub mod parentheses;
pub mod prefix;
pub mod product;
pub mod rain_water;
pub mod rotate;
pub mod rotated_search;
pub mod sliding_window;
pub mod spiral;
pub mod sudoku;
pub mod three_sum;
pub mod tree;
pub mod wildcard;

pub use error::{Error, Result};
pub use grid::Grid;
