use std::collections::BTreeSet;

use super::action::Direction;
use super::config::GameMode;
use super::grid::Grid;

/// A cell coordinate on the grid.
///
/// Ordering is row-major, so iterating a `BTreeSet<Position>` visits cells
/// the way a top-to-bottom, left-to-right scan would.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Move position by delta
    pub fn moved_by(&self, d_row: i32, d_col: i32) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }

    /// Move position in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (d_row, d_col) = direction.delta();
        self.moved_by(d_row, d_col)
    }

    pub fn manhattan_distance(&self, other: Position) -> i32 {
        (self.row - other.row).abs() + (self.col - other.col).abs()
    }

    pub fn euclidean_distance(&self, other: Position) -> f64 {
        let d_row = f64::from(self.row - other.row);
        let d_col = f64::from(self.col - other.col);
        (d_row * d_row + d_col * d_col).sqrt()
    }

    /// True if the two cells share an edge
    pub fn is_adjacent(&self, other: Position) -> bool {
        self.manhattan_distance(other) == 1
    }
}

/// Identity of a participant
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AgentId {
    Player,
    AiA,
    AiB,
}

impl AgentId {
    pub fn label(&self) -> &'static str {
        match self {
            AgentId::Player => "You",
            AgentId::AiA => "AI1",
            AgentId::AiB => "AI2",
        }
    }
}

/// Who picks an agent's heading each tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keyboard input, U-turns filtered
    Human,
    /// The heuristic director
    Scripted,
}

/// A snake taking part in the session
#[derive(Debug, Clone, PartialEq)]
pub struct Agent {
    pub id: AgentId,
    /// Occupied cells, with head at index 0
    pub body: Vec<Position>,
    /// Current heading
    pub direction: Direction,
    pub control: Control,
    pub is_alive: bool,
}

impl Agent {
    /// Create a length-1 agent at `head`
    pub fn new(id: AgentId, head: Position, direction: Direction, control: Control) -> Self {
        Self::with_body(id, vec![head], direction, control)
    }

    /// Create an agent from an explicit head-first body
    pub fn with_body(
        id: AgentId,
        body: Vec<Position>,
        direction: Direction,
        control: Control,
    ) -> Self {
        debug_assert!(!body.is_empty(), "an agent needs at least one cell");
        Self {
            id,
            body,
            direction,
            control,
            is_alive: true,
        }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Get body segments (excluding head)
    pub fn body_segments(&self) -> &[Position] {
        &self.body[1..]
    }

    /// Check if position collides with the body (excluding head)
    pub fn collides_with_body(&self, pos: Position) -> bool {
        self.body_segments().contains(&pos)
    }

    /// Check if any cell of the agent, head included, is at `pos`
    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Cell the head would enter with the current heading
    pub fn next_head(&self) -> Position {
        self.head().moved_in_direction(self.direction)
    }

    pub fn is_human(&self) -> bool {
        self.control == Control::Human
    }

    /// Get the length of the agent
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the body is empty (never true for a constructed agent)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Consecutive segments are all edge-adjacent
    pub fn is_contiguous(&self) -> bool {
        self.body.windows(2).all(|pair| pair[0].is_adjacent(pair[1]))
    }
}

/// Why an agent was eliminated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Ran into the border
    Wall,
    /// Ran into its own body
    SelfCollision,
    /// Ran into another agent's body
    Body(AgentId),
    /// Two heads entered the same cell
    HeadOn(AgentId),
}

/// How a finished session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Single-participant modes
    GameOver { score: usize },
    /// Versus: the player outlived both scripted agents
    PlayerWins,
    /// Versus: the player died while a scripted agent survived
    AiWins,
    /// Versus: nobody survived
    Draw,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub mode: GameMode,
    /// Participants in resolution order
    pub agents: Vec<Agent>,
    pub food: BTreeSet<Position>,
    /// Projection of `agents` and `food`, rebuilt every tick
    pub grid: Grid,
    pub steps: u32,
    pub outcome: Option<Outcome>,
}

impl GameState {
    /// Create a state and project its grid
    pub fn new(mode: GameMode, agents: Vec<Agent>, food: BTreeSet<Position>) -> Self {
        let grid = Grid::project(&agents, &food);
        Self {
            mode,
            agents,
            food,
            grid,
            steps: 0,
            outcome: None,
        }
    }

    pub fn agent(&self, id: AgentId) -> Option<&Agent> {
        self.agents.iter().find(|agent| agent.id == id)
    }

    pub fn agent_mut(&mut self, id: AgentId) -> Option<&mut Agent> {
        self.agents.iter_mut().find(|agent| agent.id == id)
    }

    pub fn is_alive(&self, id: AgentId) -> bool {
        self.agent(id).is_some_and(|agent| agent.is_alive)
    }

    /// The agent driven by keyboard input, if any
    pub fn human(&self) -> Option<&Agent> {
        self.agents.iter().find(|agent| agent.is_human())
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    /// Score shown in single-participant modes
    pub fn score(&self) -> usize {
        self.agents
            .first()
            .map(|agent| agent.len().saturating_sub(1))
            .unwrap_or(0)
    }

    /// Re-derive the grid from agents and food
    pub fn rebuild_grid(&mut self) {
        self.grid = Grid::project(&self.agents, &self.food);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_movement() {
        let pos = Position::new(5, 5);
        assert_eq!(pos.moved_by(1, 0), Position::new(6, 5));
        assert_eq!(pos.moved_by(-1, 0), Position::new(4, 5));
        assert_eq!(pos.moved_in_direction(Direction::Right), Position::new(5, 6));
        assert_eq!(pos.moved_in_direction(Direction::Up), Position::new(4, 5));
    }

    #[test]
    fn test_distances() {
        let a = Position::new(1, 1);
        let b = Position::new(4, 5);
        assert_eq!(a.manhattan_distance(b), 7);
        assert!((a.euclidean_distance(b) - 5.0).abs() < f64::EPSILON);
        assert!(a.is_adjacent(Position::new(1, 2)));
        assert!(!a.is_adjacent(Position::new(2, 2)));
    }

    #[test]
    fn test_row_major_ordering() {
        let mut cells = BTreeSet::new();
        cells.insert(Position::new(3, 1));
        cells.insert(Position::new(2, 9));
        cells.insert(Position::new(2, 4));
        let order: Vec<_> = cells.into_iter().collect();
        assert_eq!(
            order,
            vec![Position::new(2, 4), Position::new(2, 9), Position::new(3, 1)]
        );
    }

    #[test]
    fn test_agent_segments() {
        let agent = Agent::with_body(
            AgentId::Player,
            vec![Position::new(5, 5), Position::new(5, 4), Position::new(5, 3)],
            Direction::Right,
            Control::Human,
        );
        assert_eq!(agent.len(), 3);
        assert_eq!(agent.head(), Position::new(5, 5));
        assert_eq!(agent.next_head(), Position::new(5, 6));
        assert!(!agent.collides_with_body(Position::new(5, 5))); // head
        assert!(agent.collides_with_body(Position::new(5, 4))); // body
        assert!(agent.occupies(Position::new(5, 5)));
        assert!(agent.occupies(Position::new(5, 3)));
        assert!(!agent.occupies(Position::new(5, 6)));
        assert!(agent.is_contiguous());
    }

    #[test]
    fn test_detects_gap_in_body() {
        let agent = Agent::with_body(
            AgentId::AiA,
            vec![Position::new(5, 5), Position::new(5, 3)],
            Direction::Right,
            Control::Scripted,
        );
        assert!(!agent.is_contiguous());
    }

    #[test]
    fn test_score_is_length_minus_one() {
        let agent = Agent::with_body(
            AgentId::Player,
            vec![Position::new(5, 5), Position::new(5, 4), Position::new(5, 3)],
            Direction::Right,
            Control::Human,
        );
        let state = GameState::new(GameMode::Manual, vec![agent], BTreeSet::new());
        assert_eq!(state.score(), 2);
        assert!(state.human().is_some());
        assert!(state.is_alive(AgentId::Player));
        assert!(!state.is_alive(AgentId::AiA));
    }
}
