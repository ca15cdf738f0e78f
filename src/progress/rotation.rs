//! Wrapper rotation for the grid loader's spin effect

use super::fill::FillPattern;
use super::spiral::spiral_positions;

/// Whether the spiral step leaving position `i` stays on the same row.
///
/// The last position has no successor and counts as staying put.
fn step_stays_on_row(positions: &[(usize, usize)], i: usize) -> bool {
    let next = positions.get(i + 1).unwrap_or(&positions[i]);
    next.0 == positions[i].0
}

/// Count how many times the spiral walk turns a corner within the first
/// `filled` steps. Each corner is worth a quarter turn of spin.
///
/// The walk follows the fill order, so a reversed spiral counts its
/// corners over the center-out traversal.
fn spiral_rotations(grid_size: usize, filled: usize, reverse: bool) -> usize {
    let positions = spiral_positions(grid_size, reverse);
    if positions.is_empty() {
        return 0;
    }

    let mut rotations = 0;
    let mut on_row = step_stays_on_row(&positions, 0);
    for i in 0..filled.min(positions.len()) {
        let next_on_row = step_stays_on_row(&positions, i);
        if next_on_row != on_row {
            rotations += 1;
            on_row = next_on_row;
        }
    }
    rotations
}

/// Rotation of the whole grid in degrees.
///
/// Vertical patterns start at 270. With `spin` enabled each completed row
/// (linear patterns) or spiral corner adds 90 degrees, negated when
/// exactly one of `reverse` / `reverse_spin` is set.
pub fn wrapper_rotation(
    pattern: FillPattern,
    grid_size: usize,
    filled: usize,
    spin: bool,
    reverse: bool,
    reverse_spin: bool,
) -> i32 {
    let base = if pattern.is_vertical() { 270 } else { 0 };

    let rotations = if !spin {
        0
    } else if pattern == FillPattern::Spiral {
        spiral_rotations(grid_size, filled, reverse)
    } else if grid_size == 0 {
        0
    } else {
        filled / grid_size
    };

    let multiplier = if reverse ^ reverse_spin { -1 } else { 1 };
    base + rotations as i32 * 90 * multiplier
}
