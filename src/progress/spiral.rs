//! Spiral traversal order for the grid loader

/// Ordered `(row, col)` traversal of an `n x n` grid, clockwise from the
/// top-left corner spiralling inward to the center.
///
/// For a 3x3 grid:
/// `(0,0) (0,1) (0,2) (1,2) (2,2) (2,1) (2,0) (1,0) (1,1)`
///
/// This exact order is part of the visual contract (the spin rotation is
/// derived from it), so the walk keeps shrinking row/column bounds and
/// moves edge by edge rather than using a generic ring decomposition.
/// When `reverse` is set the whole sequence is reversed, filling from the
/// center out.
pub fn spiral_positions(grid_size: usize, reverse: bool) -> Vec<(usize, usize)> {
    let squares = grid_size * grid_size;
    let mut positions = Vec::with_capacity(squares);
    if grid_size == 0 {
        return positions;
    }

    let mut row_bounds = (0_isize, grid_size as isize - 1);
    let mut col_bounds = (0_isize, grid_size as isize - 1);
    let mut row = row_bounds.0;
    let mut col = col_bounds.0;

    while positions.len() < squares {
        positions.push((row as usize, col as usize));
        if col + 1 > col_bounds.1 {
            // Right edge: go down, then back along the bottom
            if row + 1 > row_bounds.1 {
                col -= 1;
            } else {
                row += 1;
            }
        } else if row + 1 > row_bounds.1 {
            // Bottom edge: go left, then up the left edge
            if col - 1 < col_bounds.0 {
                row -= 1;
            } else {
                col -= 1;
            }
        } else if row == row_bounds.0 {
            // Top edge: keep going right
            col += 1;
        } else if row - 1 == row_bounds.0 {
            // Back below the top-left corner: ring done, shrink inward
            row_bounds = (row_bounds.0 + 1, row_bounds.1 - 1);
            col_bounds = (col_bounds.0 + 1, col_bounds.1 - 1);
            row = row_bounds.0;
            col = col_bounds.0;
        } else {
            row -= 1;
        }
    }

    if reverse {
        positions.reverse();
    }
    positions
}
