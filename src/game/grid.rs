use std::collections::BTreeSet;

use rand::Rng;

use super::state::{Agent, AgentId, Position};

/// Number of rows, border included
pub const HEIGHT: usize = 16;
/// Number of columns, border included
pub const WIDTH: usize = 32;

/// Which border glyph a border cell carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BorderKind {
    Horizontal,
    Vertical,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Which part of an agent sits in a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment {
    Head,
    Body,
}

/// Classification of one grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Border(BorderKind),
    Empty,
    Food,
    Occupied(AgentId, Segment),
}

impl Cell {
    pub fn is_border(&self) -> bool {
        matches!(self, Cell::Border(_))
    }
}

/// Fixed-size bordered board.
///
/// The grid never owns game truth: it is rebuilt from agent bodies and the
/// food set with [`Grid::project`] after every tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
}

impl Grid {
    /// Empty board with the border ring drawn in
    pub fn new() -> Self {
        let mut cells = vec![Cell::Empty; HEIGHT * WIDTH];
        for col in 0..WIDTH {
            cells[col] = Cell::Border(BorderKind::Horizontal);
            cells[(HEIGHT - 1) * WIDTH + col] = Cell::Border(BorderKind::Horizontal);
        }
        for row in 0..HEIGHT {
            cells[row * WIDTH] = Cell::Border(BorderKind::Vertical);
            cells[row * WIDTH + WIDTH - 1] = Cell::Border(BorderKind::Vertical);
        }
        cells[0] = Cell::Border(BorderKind::TopLeft);
        cells[WIDTH - 1] = Cell::Border(BorderKind::TopRight);
        cells[(HEIGHT - 1) * WIDTH] = Cell::Border(BorderKind::BottomLeft);
        cells[HEIGHT * WIDTH - 1] = Cell::Border(BorderKind::BottomRight);
        Self { cells }
    }

    /// Board showing every live agent and every food cell
    pub fn project(agents: &[Agent], food: &BTreeSet<Position>) -> Self {
        let mut grid = Self::new();
        for &pos in food {
            grid.set(pos, Cell::Food);
        }
        for agent in agents.iter().filter(|agent| agent.is_alive) {
            for &pos in agent.body_segments() {
                grid.set(pos, Cell::Occupied(agent.id, Segment::Body));
            }
            grid.set(agent.head(), Cell::Occupied(agent.id, Segment::Head));
        }
        grid
    }

    pub fn in_bounds(pos: Position) -> bool {
        pos.row >= 0 && pos.row < HEIGHT as i32 && pos.col >= 0 && pos.col < WIDTH as i32
    }

    fn index(pos: Position) -> Option<usize> {
        Self::in_bounds(pos).then(|| pos.row as usize * WIDTH + pos.col as usize)
    }

    /// Cell at `pos`, `None` outside the board
    pub fn get(&self, pos: Position) -> Option<Cell> {
        Self::index(pos).map(|i| self.cells[i])
    }

    /// Overwrite an interior cell; border cells and out-of-bounds writes are ignored
    pub fn set(&mut self, pos: Position, cell: Cell) {
        if let Some(i) = Self::index(pos) {
            if !self.cells[i].is_border() {
                self.cells[i] = cell;
            }
        }
    }

    /// True if `pos` holds a border glyph
    pub fn is_border(&self, pos: Position) -> bool {
        self.get(pos).is_some_and(|cell| cell.is_border())
    }

    pub fn is_food(&self, pos: Position) -> bool {
        self.get(pos) == Some(Cell::Food)
    }

    pub fn food_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell == Cell::Food).count()
    }

    /// Rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(WIDTH)
    }

    /// Mark a random empty cell as food and return it.
    ///
    /// Samples rows `2..=HEIGHT-3` and columns `2..=WIDTH-3`, one cell further
    /// in than the border, until an empty cell turns up.
    pub fn place_food<R: Rng>(&mut self, rng: &mut R) -> Position {
        loop {
            let row = rng.gen_range(2..=HEIGHT as i32 - 3);
            let col = rng.gen_range(2..=WIDTH as i32 - 3);
            let pos = Position::new(row, col);

            if self.get(pos) == Some(Cell::Empty) {
                self.set(pos, Cell::Food);
                return pos;
            }
        }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Control, Direction};
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_border_ring() {
        let grid = Grid::new();
        assert_eq!(grid.get(Position::new(0, 0)), Some(Cell::Border(BorderKind::TopLeft)));
        assert_eq!(
            grid.get(Position::new(0, WIDTH as i32 - 1)),
            Some(Cell::Border(BorderKind::TopRight))
        );
        assert_eq!(
            grid.get(Position::new(HEIGHT as i32 - 1, 0)),
            Some(Cell::Border(BorderKind::BottomLeft))
        );
        assert_eq!(
            grid.get(Position::new(HEIGHT as i32 - 1, WIDTH as i32 - 1)),
            Some(Cell::Border(BorderKind::BottomRight))
        );
        assert_eq!(grid.get(Position::new(0, 5)), Some(Cell::Border(BorderKind::Horizontal)));
        assert_eq!(grid.get(Position::new(5, 0)), Some(Cell::Border(BorderKind::Vertical)));
        assert_eq!(grid.get(Position::new(1, 1)), Some(Cell::Empty));

        let border_cells = grid.rows().flatten().filter(|cell| cell.is_border()).count();
        assert_eq!(border_cells, 2 * WIDTH + 2 * (HEIGHT - 2));
    }

    #[test]
    fn test_out_of_bounds() {
        let grid = Grid::new();
        assert_eq!(grid.get(Position::new(-1, 3)), None);
        assert_eq!(grid.get(Position::new(3, WIDTH as i32)), None);
        assert!(!grid.is_border(Position::new(-1, 3)));
    }

    #[test]
    fn test_border_is_immutable() {
        let mut grid = Grid::new();
        grid.set(Position::new(0, 4), Cell::Food);
        assert!(grid.is_border(Position::new(0, 4)));
    }

    #[test]
    fn test_place_food_stays_inset() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut grid = Grid::new();
        for _ in 0..200 {
            let pos = grid.place_food(&mut rng);
            assert!((2..=HEIGHT as i32 - 3).contains(&pos.row));
            assert!((2..=WIDTH as i32 - 3).contains(&pos.col));
            assert!(grid.is_food(pos));
        }
        assert_eq!(grid.food_count(), 200);
    }

    #[test]
    fn test_place_food_skips_occupied() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut grid = Grid::new();
        // fill every spawnable cell but one
        let free = Position::new(7, 9);
        for row in 2..=HEIGHT as i32 - 3 {
            for col in 2..=WIDTH as i32 - 3 {
                let pos = Position::new(row, col);
                if pos != free {
                    grid.set(pos, Cell::Occupied(AgentId::AiA, Segment::Body));
                }
            }
        }
        assert_eq!(grid.place_food(&mut rng), free);
    }

    #[test]
    fn test_projection() {
        let alive = Agent::with_body(
            AgentId::Player,
            vec![Position::new(5, 5), Position::new(5, 4)],
            Direction::Right,
            Control::Human,
        );
        let mut dead = Agent::new(AgentId::AiA, Position::new(9, 9), Direction::Left, Control::Scripted);
        dead.is_alive = false;
        let food: BTreeSet<_> = [Position::new(3, 3)].into_iter().collect();

        let grid = Grid::project(&[alive, dead], &food);
        assert_eq!(
            grid.get(Position::new(5, 5)),
            Some(Cell::Occupied(AgentId::Player, Segment::Head))
        );
        assert_eq!(
            grid.get(Position::new(5, 4)),
            Some(Cell::Occupied(AgentId::Player, Segment::Body))
        );
        assert_eq!(grid.get(Position::new(9, 9)), Some(Cell::Empty));
        assert_eq!(grid.food_count(), 1);
    }
}
