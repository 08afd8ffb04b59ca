use crate::grid::Grid;

/// Every value of `grid` in clockwise spiral order, starting from the top
/// left corner.
pub fn spiral_order<T: Clone>(grid: &Grid<T>) -> Vec<T> {
    let mut out = Vec::with_capacity(grid.width() * grid.height());
    if grid.is_empty() {
        return out;
    }

    // inclusive bounds of the ring still to be walked
    let (mut left, mut right) = (0, grid.width() - 1);
    let (mut top, mut bottom) = (0, grid.height() - 1);
    loop {
        for x in left..=right {
            out.push(grid[(x, top)].clone());
        }
        for y in top + 1..=bottom {
            out.push(grid[(right, y)].clone());
        }
        // a single row or column has no way back
        if top < bottom && left < right {
            for x in (left..right).rev() {
                out.push(grid[(x, bottom)].clone());
            }
            for y in (top + 1..bottom).rev() {
                out.push(grid[(left, y)].clone());
            }
        }

        if right - left < 2 || bottom - top < 2 {
            break;
        }
        left += 1;
        right -= 1;
        top += 1;
        bottom -= 1;
    }
    out
}

/// An `n` by `n` grid holding `1..=n*n` laid out in clockwise spiral order.
pub fn generate(n: usize) -> Grid<u32> {
    let mut grid = Grid::new(n, n);
    let (mut x, mut y) = (0_usize, 0_usize);
    // right, down, left, up
    let directions: [(isize, isize); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];
    let mut facing = 0;
    for value in 1..=(n * n) as u32 {
        grid[(x, y)] = value;
        let step = |(dx, dy): (isize, isize)| {
            let nx = x.checked_add_signed(dx)?;
            let ny = y.checked_add_signed(dy)?;
            grid.get(nx, ny).filter(|&&cell| cell == 0).map(|_| (nx, ny))
        };
        let next = step(directions[facing]).or_else(|| {
            facing = (facing + 1) % 4;
            step(directions[facing])
        });
        match next {
            Some((nx, ny)) => (x, y) = (nx, ny),
            None => break,
        }
    }
    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn grid(rows: Vec<Vec<i32>>) -> Grid<i32> {
        Grid::from_rows(rows).unwrap()
    }

    #[rstest]
    #[case(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]], &[1, 2, 3, 6, 9, 8, 7, 4, 5])]
    #[case(
        vec![vec![1, 2, 3, 4], vec![5, 6, 7, 8], vec![9, 10, 11, 12]],
        &[1, 2, 3, 4, 8, 12, 11, 10, 9, 5, 6, 7]
    )]
    #[case(vec![vec![1, 2, 3]], &[1, 2, 3])]
    #[case(vec![vec![1], vec![2], vec![3]], &[1, 2, 3])]
    #[case(vec![vec![1, 2], vec![3, 4]], &[1, 2, 4, 3])]
    #[case(vec![vec![1, 2], vec![3, 4], vec![5, 6], vec![7, 8]], &[1, 2, 4, 6, 8, 7, 5, 3])]
    #[case(
        vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9], vec![10, 11, 12], vec![13, 14, 15]],
        &[1, 2, 3, 6, 9, 12, 15, 14, 13, 10, 7, 4, 5, 8, 11]
    )]
    #[case(vec![vec![7]], &[7])]
    #[case(vec![], &[])]
    fn order(#[case] rows: Vec<Vec<i32>>, #[case] expected: &[i32]) {
        assert_eq!(spiral_order(&grid(rows)), expected);
    }

    #[test]
    fn four_by_four_inner_ring() {
        let values: Vec<i32> = (1..=16).collect();
        let rows: Vec<Vec<i32>> = values.chunks(4).map(<[i32]>::to_vec).collect();
        assert_eq!(
            spiral_order(&grid(rows)),
            vec![1, 2, 3, 4, 8, 12, 16, 15, 14, 13, 9, 5, 6, 7, 11, 10]
        );
    }

    #[test]
    fn generate_three() {
        let expected =
            Grid::from_rows(vec![vec![1, 2, 3], vec![8, 9, 4], vec![7, 6, 5]]).unwrap();
        assert_eq!(generate(3), expected);
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(4)]
    #[case(5)]
    fn generated_grid_reads_back_in_order(#[case] n: usize) {
        let grid = generate(n);
        let expected: Vec<u32> = (1..=(n * n) as u32).collect();
        assert_eq!(spiral_order(&grid), expected);
    }
}
