//! Survivability checks for a candidate head cell.
//!
//! All checks run against the body as it is *before* the move, tail
//! included, so the cell the tail is about to vacate still counts as
//! blocked.

use super::action::Direction;
use super::grid::Grid;
use super::state::Position;

/// False if `candidate` is off the board, on the border, or inside `body`
pub fn is_safe_move(body: &[Position], candidate: Position, grid: &Grid) -> bool {
    if !Grid::in_bounds(candidate) || body.contains(&candidate) {
        return false;
    }

    !grid.is_border(candidate)
}

/// [`is_safe_move`] that also refuses cells in `others`
pub fn is_safe_move_versus(
    body: &[Position],
    others: &[Position],
    candidate: Position,
    grid: &Grid,
) -> bool {
    is_safe_move(body, candidate, grid) && !others.contains(&candidate)
}

/// One-ply look-ahead: after stepping onto `candidate` (without dropping
/// the tail), would every heading from there be unsafe?
pub fn is_trapped_after_move(body: &[Position], candidate: Position, grid: &Grid) -> bool {
    let mut moved = Vec::with_capacity(body.len() + 1);
    moved.push(candidate);
    moved.extend_from_slice(body);

    Direction::ALL
        .iter()
        .all(|&d| !is_safe_move(&moved, candidate.moved_in_direction(d), grid))
}
