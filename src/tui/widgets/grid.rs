//! Grid loader with fill patterns and spin

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::Widget,
};

use crate::progress::{grid_fill, grid_fill_count, wrapper_rotation, FillPattern};

use super::theme::LoaderStyle;

/// Grid loader: a square of cells filled according to the pattern, with
/// optional spin applied as quarter turns of the whole matrix.
pub struct Grid {
    progress: f64,
    grid_size: usize,
    pattern: FillPattern,
    spin: bool,
    reverse: bool,
    reverse_spin: bool,
    rounded: bool,
    style: LoaderStyle,
}

impl Grid {
    pub fn new(progress: f64) -> Self {
        Self {
            progress,
            grid_size: 6,
            pattern: FillPattern::default(),
            spin: false,
            reverse: false,
            reverse_spin: false,
            rounded: false,
            style: LoaderStyle::default(),
        }
    }

    pub fn grid_size(mut self, grid_size: usize) -> Self {
        self.grid_size = grid_size;
        self
    }

    pub fn pattern(mut self, pattern: FillPattern) -> Self {
        self.pattern = pattern;
        self
    }

    pub fn spin(mut self, spin: bool) -> Self {
        self.spin = spin;
        self
    }

    pub fn reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    pub fn reverse_spin(mut self, reverse_spin: bool) -> Self {
        self.reverse_spin = reverse_spin;
        self
    }

    pub fn rounded(mut self, rounded: bool) -> Self {
        self.rounded = rounded;
        self
    }

    pub fn style(mut self, style: LoaderStyle) -> Self {
        self.style = style;
        self
    }

    /// Cell matrix and wrapper rotation for the current progress
    pub fn plan(&self) -> (Vec<Vec<bool>>, i32) {
        let grid = grid_fill(self.grid_size, self.progress, self.pattern, self.reverse);
        let filled = grid_fill_count(self.grid_size, self.progress);
        let rotation = wrapper_rotation(
            self.pattern,
            self.grid_size,
            filled,
            self.spin,
            self.reverse,
            self.reverse_spin,
        );
        (grid, rotation)
    }
}

/// Rotate a square cell matrix clockwise by `degrees`, which is always a
/// multiple of 90 (the wrapper rotation's unit of spin).
fn rotate_quarters(grid: Vec<Vec<bool>>, degrees: i32) -> Vec<Vec<bool>> {
    let quarters = (degrees / 90).rem_euclid(4);
    let mut grid = grid;
    for _ in 0..quarters {
        let n = grid.len();
        let mut rotated = vec![vec![false; n]; n];
        for (row, cells) in grid.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                rotated[col][n - 1 - row] = cell;
            }
        }
        grid = rotated;
    }
    grid
}

impl Widget for Grid {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 || self.grid_size == 0 {
            return;
        }

        let (grid, rotation) = self.plan();
        let grid = rotate_quarters(grid, rotation);
        // Terminal cells are roughly twice as tall as wide
        let cell = if self.rounded { "● " } else { "██" };

        for (row_idx, row) in grid.iter().enumerate() {
            if row_idx >= area.height as usize {
                break;
            }
            let y = area.y + row_idx as u16;
            for (col_idx, &loaded) in row.iter().enumerate() {
                let x = area.x + col_idx as u16 * 2;
                if x + 1 >= area.right() {
                    break;
                }
                let color = if loaded {
                    self.style.loaded
                } else {
                    self.style.unloaded
                };
                buf.set_string(x, y, cell, Style::default().fg(color));
            }
        }
    }
}
