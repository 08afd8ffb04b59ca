use algo_drills::{
    gene_mutation, islands, knapsack, kth_largest, prefix, product, rain_water, spiral, sudoku,
    tree, Error, Grid,
};

#[test]
fn grid_problems_share_one_grid() {
    let map = islands::parse_map(&["110", "000", "011"]).unwrap();
    assert_eq!(islands::count_union_find(&map), 2);

    let heights = Grid::from_rows(vec![
        vec![4, 4, 4, 4],
        vec![4, 0, 1, 4],
        vec![4, 4, 4, 4],
    ])
    .unwrap();
    assert_eq!(rain_water::trap_2d(&heights), 7);
    assert_eq!(
        spiral::spiral_order(&heights),
        vec![4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 0, 1]
    );
}

#[test]
fn malformed_input_is_an_error() {
    assert!(matches!(
        islands::parse_map(&["10", "2"]),
        Err(Error::InvalidCell { ch: '2', x: 0, y: 1 })
    ));
    assert!(matches!(
        sudoku::Board::parse(&["123"]),
        Err(Error::BoardShape { width: 3, height: 1 })
    ));
    assert!(matches!(
        kth_largest::kth_largest(&[1, 2, 3], 4, Default::default()),
        Err(Error::InvalidK { k: 4, len: 3 })
    ));
    assert!(matches!(
        knapsack::from_parallel(&[1], &[]),
        Err(Error::LengthMismatch { .. })
    ));
    assert!(matches!(
        gene_mutation::min_mutation_bfs("AAAA", "AAAAAAAA", &["AAAAAAAA"]),
        Err(Error::InvalidGene(_))
    ));
    assert!(matches!(
        tree::TreeNode::from_level_order(&[None, Some(1)]),
        Err(Error::OrphanNode { index: 1 })
    ));
}

#[test]
fn errors_render_readably() {
    let err = Grid::<u8>::new(2, 2).check_bounds(3, 0).unwrap_err();
    assert_eq!(
        err.to_string(),
        "the point `(3, 0)` is out of bounds. max: `(2, 2)`"
    );
    assert_eq!(
        Error::InvalidK { k: 0, len: 3 }.to_string(),
        "k must be in `1..=3`, got 0"
    );
    assert_eq!(
        product::except_self_division(&[i64::MIN, -1, 1])
            .unwrap_err()
            .to_string(),
        "`product except self` overflowed a 64-bit result"
    );
}

#[test]
fn default_strategies() {
    assert_eq!(kth_largest::Strategy::default(), kth_largest::Strategy::QuickSelect);
    assert_eq!(prefix::Strategy::default(), prefix::Strategy::Vertical);
    assert_eq!(
        prefix::longest_common_prefix(&["prefix", "prelude", "press"], Default::default()),
        "pre"
    );
}

#[test]
fn knapsack_selection_fits() {
    let items = knapsack::from_parallel(&[1, 3, 4, 5], &[1, 4, 5, 7]).unwrap();
    let selection = knapsack::solve(&items, 7);
    assert_eq!(selection.value, 9);
    assert_eq!(selection.indices, vec![1, 2]);
    assert_eq!(selection.weight(&items), Some(7));
}
