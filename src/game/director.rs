//! Greedy one-ply heading choice for scripted agents.

use std::collections::BTreeSet;

use super::action::Direction;
use super::grid::Grid;
use super::safety::{is_safe_move, is_safe_move_versus, is_trapped_after_move};
use super::state::{Agent, Control, Position};

/// Score subtracted from a candidate that leaves no way out
pub const TRAP_PENALTY: f64 = 10.0;

/// Best heading towards `food` for a lone agent.
///
/// Returns `None` when every non-reversing heading is unsafe; the caller
/// then keeps the old heading.
pub fn choose_direction(
    body: &[Position],
    food: Position,
    current: Direction,
    grid: &Grid,
) -> Option<Direction> {
    best_direction(body, food, current, grid, |candidate| {
        is_safe_move(body, candidate, grid)
    })
}

/// Best heading towards `food` while avoiding the cells in `others`.
///
/// With no food target the agent keeps its current heading.
pub fn choose_direction_versus(
    body: &[Position],
    others: &[Position],
    food: Option<Position>,
    current: Direction,
    grid: &Grid,
) -> Option<Direction> {
    let Some(food) = food else {
        return Some(current);
    };

    best_direction(body, food, current, grid, |candidate| {
        is_safe_move_versus(body, others, candidate, grid)
    })
}

fn best_direction(
    body: &[Position],
    food: Position,
    current: Direction,
    grid: &Grid,
    is_safe: impl Fn(Position) -> bool,
) -> Option<Direction> {
    let head = body[0];
    let mut best: Option<(Direction, f64)> = None;

    for direction in Direction::ALL {
        if current.is_opposite(direction) {
            continue;
        }

        let candidate = head.moved_in_direction(direction);
        if !is_safe(candidate) {
            continue;
        }

        let mut score = -candidate.euclidean_distance(food);
        if is_trapped_after_move(body, candidate, grid) {
            score -= TRAP_PENALTY;
        }

        // strict comparison keeps the first heading on ties
        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((direction, score));
        }
    }

    best.map(|(direction, _)| direction)
}

/// Closest food by Manhattan distance, first in row-major order on ties
pub fn nearest_food(head: Position, food: &BTreeSet<Position>) -> Option<Position> {
    closest(head, food.iter().copied())
}

/// Closest food other than `exclude`, or `exclude` itself when nothing else is left
pub fn nearest_food_excluding(
    head: Position,
    food: &BTreeSet<Position>,
    exclude: Position,
) -> Position {
    closest(head, food.iter().copied().filter(|&pos| pos != exclude)).unwrap_or(exclude)
}

fn closest(head: Position, cells: impl Iterator<Item = Position>) -> Option<Position> {
    let mut best: Option<(Position, i32)> = None;
    for pos in cells {
        let dist = head.manhattan_distance(pos);
        if best.map_or(true, |(_, best_dist)| dist < best_dist) {
            best = Some((pos, dist));
        }
    }
    best.map(|(pos, _)| pos)
}

/// Food target for each agent, parallel to `agents`.
///
/// Scripted agents are served in order. Once a live scripted agent has
/// claimed a cell, later scripted agents steer for a different one if any
/// other exists. Human and eliminated agents get `None`.
pub fn assign_targets(agents: &[Agent], food: &BTreeSet<Position>) -> Vec<Option<Position>> {
    let mut claimed: Option<Position> = None;

    agents
        .iter()
        .map(|agent| {
            if agent.control != Control::Scripted || !agent.is_alive {
                return None;
            }

            let target = match claimed {
                Some(taken) => Some(nearest_food_excluding(agent.head(), food, taken)),
                None => nearest_food(agent.head(), food),
            };
            if claimed.is_none() {
                claimed = target;
            }
            target
        })
        .collect()
}
