//! Segment fill planning for the blocks strip and the grid

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::spiral::spiral_positions;

/// Fill ordering for the grid loader.
///
/// Vertical patterns are the horizontal fill with the whole grid rotated
/// 270 degrees by the wrapper; `Alt` variants reverse every odd row so the
/// fill snakes instead of carriage-returning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FillPattern {
    #[serde(rename = "horizontal")]
    Horizontal,
    #[serde(rename = "horizontalAlt")]
    HorizontalAlt,
    #[serde(rename = "vertical")]
    Vertical,
    #[serde(rename = "verticalAlt")]
    VerticalAlt,
    #[serde(rename = "spiral")]
    Spiral,
}

/// Unknown pattern name
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown fill pattern '{0}' (expected horizontal, horizontalAlt, vertical, verticalAlt or spiral)")]
pub struct PatternParseError(pub String);

impl FillPattern {
    /// Canonical name, as used in JSON output
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::HorizontalAlt => "horizontalAlt",
            Self::Vertical => "vertical",
            Self::VerticalAlt => "verticalAlt",
            Self::Spiral => "spiral",
        }
    }

    /// Whether the wrapper gets the 270 degree base rotation
    pub fn is_vertical(self) -> bool {
        matches!(self, Self::Vertical | Self::VerticalAlt)
    }

    /// Whether odd rows are reversed before (and after) filling
    pub fn alternates(self) -> bool {
        matches!(self, Self::HorizontalAlt | Self::VerticalAlt)
    }
}

impl Default for FillPattern {
    fn default() -> Self {
        Self::Vertical
    }
}

impl fmt::Display for FillPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FillPattern {
    type Err = PatternParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "horizontal" => Ok(Self::Horizontal),
            "horizontalAlt" | "horizontal-alt" => Ok(Self::HorizontalAlt),
            "vertical" => Ok(Self::Vertical),
            "verticalAlt" | "vertical-alt" => Ok(Self::VerticalAlt),
            "spiral" => Ok(Self::Spiral),
            other => Err(PatternParseError(other.to_string())),
        }
    }
}

/// Convert a raw (possibly NaN, negative or oversized) fill count into a
/// usable index bound
fn saturate_count(total: usize, raw: f64) -> usize {
    if raw.is_nan() {
        return 0;
    }
    raw.clamp(0.0, total as f64) as usize
}

/// Plan the blocks strip: first `ceil(segments / 100 * percentage)` flags
/// are true, strictly left to right.
pub fn linear_fill(segments: usize, percentage: f64) -> Vec<bool> {
    let filled = saturate_count(segments, (segments as f64 / 100.0 * percentage).ceil());
    let mut flags = vec![false; segments];
    for flag in flags.iter_mut().take(filled) {
        *flag = true;
    }
    flags
}

/// Number of filled cells for a grid: `floor(size^2 / 100 * percentage)`.
///
/// Floor here against ceil for the strip is deliberate; both are part of
/// the visual contract.
pub fn grid_fill_count(grid_size: usize, percentage: f64) -> usize {
    let squares = grid_size * grid_size;
    saturate_count(squares, ((squares as f64) / 100.0 * percentage).floor())
}

/// Reverse every odd-indexed row in place when the pattern alternates.
///
/// Applying it twice restores column order, which is how the linear fill
/// "snakes": reverse, fill row-major, reverse back.
fn reverse_alt_rows(grid: &mut [Vec<bool>], pattern: FillPattern) {
    if !pattern.alternates() {
        return;
    }
    for row in grid.iter_mut().skip(1).step_by(2) {
        row.reverse();
    }
}

/// Plan the grid loader: a `grid_size` x `grid_size` matrix of filled
/// flags, rows top to bottom.
pub fn grid_fill(
    grid_size: usize,
    percentage: f64,
    pattern: FillPattern,
    reverse: bool,
) -> Vec<Vec<bool>> {
    match pattern {
        FillPattern::Spiral => grid_fill_spiral(grid_size, percentage, reverse),
        _ => grid_fill_linear(grid_size, percentage, pattern, reverse),
    }
}

fn grid_fill_linear(
    grid_size: usize,
    percentage: f64,
    pattern: FillPattern,
    reverse: bool,
) -> Vec<Vec<bool>> {
    let filled = grid_fill_count(grid_size, percentage);
    let mut grid = vec![vec![false; grid_size]; grid_size];

    reverse_alt_rows(&mut grid, pattern);
    let mut row = 0;
    let mut col = 0;
    for _ in 0..filled {
        if col >= grid_size {
            row += 1;
            col = 0;
        }
        grid[row][col] = true;
        col += 1;
    }
    reverse_alt_rows(&mut grid, pattern);

    if reverse {
        grid.reverse();
    }
    grid
}

fn grid_fill_spiral(grid_size: usize, percentage: f64, reverse: bool) -> Vec<Vec<bool>> {
    let filled = grid_fill_count(grid_size, percentage);
    let positions = spiral_positions(grid_size, reverse);
    let mut grid = vec![vec![false; grid_size]; grid_size];
    for &(row, col) in positions.iter().take(filled) {
        grid[row][col] = true;
    }
    grid
}

#[cfg(test)]
mod tests {
    use super::*;

    const T: bool = true;
    const F: bool = false;

    #[test]
    fn test_pattern_from_str() {
        assert_eq!("horizontal".parse(), Ok(FillPattern::Horizontal));
        assert_eq!("horizontalAlt".parse(), Ok(FillPattern::HorizontalAlt));
        assert_eq!("vertical".parse(), Ok(FillPattern::Vertical));
        assert_eq!("verticalAlt".parse(), Ok(FillPattern::VerticalAlt));
        assert_eq!("spiral".parse(), Ok(FillPattern::Spiral));
    }

    #[test]
    fn test_pattern_from_str_kebab_alias() {
        assert_eq!("vertical-alt".parse(), Ok(FillPattern::VerticalAlt));
        assert_eq!("horizontal-alt".parse(), Ok(FillPattern::HorizontalAlt));
    }

    #[test]
    fn test_pattern_from_str_unknown() {
        let err = "diagonal".parse::<FillPattern>().unwrap_err();
        assert_eq!(err, PatternParseError("diagonal".to_string()));
    }

    #[test]
    fn test_pattern_roundtrips_through_display() {
        for pattern in [
            FillPattern::Horizontal,
            FillPattern::HorizontalAlt,
            FillPattern::Vertical,
            FillPattern::VerticalAlt,
            FillPattern::Spiral,
        ] {
            assert_eq!(pattern.to_string().parse(), Ok(pattern));
        }
    }

    #[test]
    fn test_linear_fill_20_segments_at_34() {
        // ceil(20 * 0.34) = 7
        let flags = linear_fill(20, 34.0);
        assert_eq!(flags.iter().filter(|&&f| f).count(), 7);
        assert!(flags[..7].iter().all(|&f| f));
        assert!(flags[7..].iter().all(|&f| !f));
    }

    #[test]
    fn test_linear_fill_100_segments_at_34() {
        let flags = linear_fill(100, 34.0);
        assert_eq!(flags.iter().filter(|&&f| f).count(), 34);
        assert!(flags[33]);
        assert!(!flags[34]);
    }

    #[test]
    fn test_linear_fill_bounds() {
        assert!(linear_fill(20, 0.0).iter().all(|&f| !f));
        assert!(linear_fill(20, 100.0).iter().all(|&f| f));
        assert!(linear_fill(20, -30.0).iter().all(|&f| !f));
        assert!(linear_fill(20, 150.0).iter().all(|&f| f));
    }

    #[test]
    fn test_linear_fill_nan_percentage_fills_nothing() {
        assert!(linear_fill(20, f64::NAN).iter().all(|&f| !f));
    }

    #[test]
    fn test_grid_fill_count_uses_floor() {
        assert_eq!(grid_fill_count(3, 50.0), 4); // floor(4.5)
        assert_eq!(grid_fill_count(3, 75.0), 6);
        assert_eq!(grid_fill_count(3, 0.0), 0);
        assert_eq!(grid_fill_count(3, 100.0), 9);
        assert_eq!(grid_fill_count(2, 48.0), 1);
        assert_eq!(grid_fill_count(6, 50.0), 18);
    }

    #[test]
    fn test_grid_fill_count_saturates() {
        assert_eq!(grid_fill_count(3, -10.0), 0);
        assert_eq!(grid_fill_count(3, 200.0), 9);
    }

    #[test]
    fn test_grid_fill_horizontal_3x3_at_50() {
        let grid = grid_fill(3, 50.0, FillPattern::Horizontal, false);
        assert_eq!(grid, vec![vec![T, T, T], vec![T, F, F], vec![F, F, F]]);
    }

    #[test]
    fn test_grid_fill_horizontal_3x3_empty_and_full() {
        assert_eq!(
            grid_fill(3, 0.0, FillPattern::Horizontal, false),
            vec![vec![F; 3]; 3]
        );
        assert_eq!(
            grid_fill(3, 100.0, FillPattern::Horizontal, false),
            vec![vec![T; 3]; 3]
        );
    }

    #[test]
    fn test_grid_fill_horizontal_alt_snakes_odd_rows() {
        // 5 of 9 filled: row 0 full, row 1 snakes in from the right
        let grid = grid_fill(3, 56.0, FillPattern::HorizontalAlt, false);
        assert_eq!(grid, vec![vec![T, T, T], vec![F, T, T], vec![F, F, F]]);
    }

    #[test]
    fn test_grid_fill_non_alt_rows_keep_order() {
        let grid = grid_fill(3, 56.0, FillPattern::Horizontal, false);
        assert_eq!(grid, vec![vec![T, T, T], vec![T, T, F], vec![F, F, F]]);
    }

    #[test]
    fn test_grid_fill_vertical_matches_horizontal_matrix() {
        // Vertical orientation comes from the wrapper rotation, not the fill
        assert_eq!(
            grid_fill(3, 50.0, FillPattern::Vertical, false),
            grid_fill(3, 50.0, FillPattern::Horizontal, false)
        );
    }

    #[test]
    fn test_grid_fill_reverse_flips_row_order() {
        let grid = grid_fill(3, 50.0, FillPattern::Horizontal, true);
        assert_eq!(grid, vec![vec![F, F, F], vec![T, F, F], vec![T, T, T]]);
    }

    #[test]
    fn test_grid_fill_horizontal_alt_with_reverse() {
        // 5 of 9 filled: the snaking fill happens first, then the row
        // order flips, so the full row ends up at the bottom
        let grid = grid_fill(3, 56.0, FillPattern::HorizontalAlt, true);
        assert_eq!(grid, vec![vec![F, F, F], vec![F, T, T], vec![T, T, T]]);
    }

    #[test]
    fn test_grid_fill_spiral_3x3_at_50() {
        let grid = grid_fill(3, 50.0, FillPattern::Spiral, false);
        assert_eq!(grid, vec![vec![T, T, T], vec![F, F, T], vec![F, F, F]]);
    }

    #[test]
    fn test_grid_fill_spiral_3x3_at_75() {
        let grid = grid_fill(3, 75.0, FillPattern::Spiral, false);
        assert_eq!(grid, vec![vec![T, T, T], vec![F, F, T], vec![F, T, T]]);
    }

    #[test]
    fn test_grid_fill_spiral_3x3_full() {
        assert_eq!(
            grid_fill(3, 100.0, FillPattern::Spiral, false),
            vec![vec![T; 3]; 3]
        );
    }

    #[test]
    fn test_grid_fill_spiral_reverse_fills_from_center() {
        let grid = grid_fill(3, 34.0, FillPattern::Spiral, true);
        // 3 of 9, reversed order starts (1,1),(1,0),(2,0)
        assert_eq!(grid, vec![vec![F, F, F], vec![T, T, F], vec![T, F, F]]);
    }

    #[test]
    fn test_reverse_alt_rows_double_application_is_identity() {
        let original = vec![vec![T, F, F], vec![T, T, F], vec![F, T, T]];
        let mut grid = original.clone();
        reverse_alt_rows(&mut grid, FillPattern::VerticalAlt);
        assert_ne!(grid, original);
        reverse_alt_rows(&mut grid, FillPattern::VerticalAlt);
        assert_eq!(grid, original);
    }

    #[test]
    fn test_reverse_alt_rows_noop_for_plain_patterns() {
        let original = vec![vec![T, F, F], vec![T, T, F], vec![F, T, T]];
        let mut grid = original.clone();
        reverse_alt_rows(&mut grid, FillPattern::Horizontal);
        assert_eq!(grid, original);
        reverse_alt_rows(&mut grid, FillPattern::Vertical);
        assert_eq!(grid, original);
    }

    #[test]
    fn test_grid_fill_zero_size() {
        assert!(grid_fill(0, 50.0, FillPattern::Horizontal, false).is_empty());
        assert!(grid_fill(0, 50.0, FillPattern::Spiral, false).is_empty());
    }
}
