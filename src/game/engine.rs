use rand::{rngs::StdRng, SeedableRng};
use tracing::{debug, trace};

use super::{
    action::{Action, Direction},
    config::{GameConfig, GameMode},
    director::{assign_targets, choose_direction, choose_direction_versus},
    grid::{HEIGHT, WIDTH},
    state::{Agent, AgentId, CollisionType, Control, GameState, Outcome, Position},
};

/// Information about a step
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepInfo {
    /// Agents whose head landed on food this step
    pub ate_food: Vec<AgentId>,
    /// Agents eliminated this step, with the reason
    pub eliminations: Vec<(AgentId, CollisionType)>,
}

/// Result of a game step
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// Whether the session has reached its terminal condition
    pub terminated: bool,
    /// Additional information about the step
    pub info: StepInfo,
}

/// Starting participants for a mode
pub fn starting_agents(mode: GameMode) -> Vec<Agent> {
    let (h, w) = (HEIGHT as i32, WIDTH as i32);
    match mode {
        GameMode::Versus => vec![
            Agent::new(
                AgentId::Player,
                Position::new(h / 2, w / 4),
                Direction::Right,
                Control::Human,
            ),
            Agent::new(
                AgentId::AiA,
                Position::new(h / 4, 3 * w / 4),
                Direction::Left,
                Control::Scripted,
            ),
            Agent::new(
                AgentId::AiB,
                Position::new(3 * h / 4, 3 * w / 4),
                Direction::Left,
                Control::Scripted,
            ),
        ],
        GameMode::Manual => vec![Agent::new(
            AgentId::Player,
            Position::new(h / 2, w / 2),
            Direction::Up,
            Control::Human,
        )],
        GameMode::WatchAi => vec![Agent::new(
            AgentId::Player,
            Position::new(h / 2, w / 2),
            Direction::Up,
            Control::Scripted,
        )],
    }
}

/// Turn-synchronous resolver shared by every mode
pub struct GameEngine {
    config: GameConfig,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { config, rng }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Fresh state for the configured mode with food topped up
    pub fn reset(&mut self) -> GameState {
        let mode = self.config.mode;
        let mut state = GameState::new(mode, starting_agents(mode), Default::default());
        self.replenish_food(&mut state);
        state
    }

    /// Advance every live agent by one cell.
    ///
    /// `action` steers the human-controlled agent, if there is one. All
    /// headings, collisions and growth are decided against the state as it
    /// was when the tick started.
    pub fn step(&mut self, state: &mut GameState, action: Action) -> StepResult {
        if state.is_finished() {
            return StepResult {
                terminated: true,
                info: StepInfo::default(),
            };
        }

        state.rebuild_grid();
        steer(state, action);

        let candidates: Vec<Option<Position>> = state
            .agents
            .iter()
            .map(|agent| agent.is_alive.then(|| agent.next_head()))
            .collect();

        let mut info = StepInfo::default();
        let causes = resolve_collisions(state, &candidates);
        for (agent, cause) in state.agents.iter_mut().zip(causes) {
            if let Some(cause) = cause {
                agent.is_alive = false;
                debug!(agent = ?agent.id, ?cause, length = agent.len(), "agent eliminated");
                info.eliminations.push((agent.id, cause));
            }
        }

        for (agent, candidate) in state.agents.iter_mut().zip(&candidates) {
            let Some(new_head) = *candidate else {
                continue;
            };
            if !agent.is_alive {
                continue;
            }

            let ate_food = state.food.remove(&new_head);
            if !ate_food {
                agent.body.pop();
            }
            agent.body.insert(0, new_head);

            if ate_food {
                trace!(agent = ?agent.id, length = agent.len(), "food eaten");
                info.ate_food.push(agent.id);
            }
        }

        state.rebuild_grid();
        self.replenish_food(state);
        state.steps += 1;
        state.outcome = outcome(state);

        StepResult {
            terminated: state.outcome.is_some(),
            info,
        }
    }

    /// Place food until the mode's target count is reached
    fn replenish_food(&mut self, state: &mut GameState) {
        while state.food.len() < self.config.food_target() {
            let pos = state.grid.place_food(&mut self.rng);
            state.food.insert(pos);
        }
    }
}

/// Pick this tick's heading for every live agent from the pre-tick state
fn steer(state: &mut GameState, action: Action) {
    let targets = assign_targets(&state.agents, &state.food);

    let headings: Vec<Direction> = state
        .agents
        .iter()
        .zip(&targets)
        .map(|(agent, &target)| {
            if !agent.is_alive {
                return agent.direction;
            }

            match agent.control {
                Control::Human => match action {
                    Action::Move(d) if !agent.direction.is_opposite(d) => d,
                    _ => agent.direction,
                },
                Control::Scripted => {
                    let chosen = if state.mode.is_versus() {
                        let others = other_bodies(&state.agents, agent.id);
                        choose_direction_versus(
                            &agent.body,
                            &others,
                            target,
                            agent.direction,
                            &state.grid,
                        )
                    } else {
                        target.and_then(|food| {
                            choose_direction(&agent.body, food, agent.direction, &state.grid)
                        })
                    };
                    chosen.unwrap_or(agent.direction)
                }
            }
        })
        .collect();

    for (agent, heading) in state.agents.iter_mut().zip(headings) {
        agent.direction = heading;
    }
}

/// Every cell of every other live agent, heads included
fn other_bodies(agents: &[Agent], id: AgentId) -> Vec<Position> {
    agents
        .iter()
        .filter(|other| other.id != id && other.is_alive)
        .flat_map(|other| other.body.iter().copied())
        .collect()
}

/// Elimination cause for each agent given its candidate head, parallel to
/// `state.agents`.
///
/// Border, own body and other bodies are checked against the pre-tick
/// board. Every cell of another live agent is an obstacle, its head
/// included. Afterwards any two survivors whose candidates coincide both die.
pub fn resolve_collisions(
    state: &GameState,
    candidates: &[Option<Position>],
) -> Vec<Option<CollisionType>> {
    let mut causes: Vec<Option<CollisionType>> = state
        .agents
        .iter()
        .zip(candidates)
        .map(|(agent, candidate)| {
            let candidate = (*candidate)?;

            if state.grid.get(candidate).map_or(true, |cell| cell.is_border()) {
                return Some(CollisionType::Wall);
            }
            if agent.collides_with_body(candidate) {
                return Some(CollisionType::SelfCollision);
            }
            state
                .agents
                .iter()
                .find(|other| {
                    other.id != agent.id && other.is_alive && other.occupies(candidate)
                })
                .map(|other| CollisionType::Body(other.id))
        })
        .collect();

    let survivors: Vec<bool> = causes
        .iter()
        .zip(candidates)
        .map(|(cause, candidate)| cause.is_none() && candidate.is_some())
        .collect();

    for i in 0..candidates.len() {
        for j in (i + 1)..candidates.len() {
            if survivors[i] && survivors[j] && candidates[i] == candidates[j] {
                let (a, b) = (state.agents[i].id, state.agents[j].id);
                causes[i].get_or_insert(CollisionType::HeadOn(b));
                causes[j].get_or_insert(CollisionType::HeadOn(a));
            }
        }
    }

    causes
}

/// Terminal condition for the state's mode
fn outcome(state: &GameState) -> Option<Outcome> {
    if state.mode.is_versus() {
        let player_alive = state.is_alive(AgentId::Player);
        let ai_alive = state
            .agents
            .iter()
            .any(|agent| agent.id != AgentId::Player && agent.is_alive);

        match (player_alive, ai_alive) {
            (true, true) => None,
            (true, false) => Some(Outcome::PlayerWins),
            (false, true) => Some(Outcome::AiWins),
            (false, false) => Some(Outcome::Draw),
        }
    } else {
        let alive = state.agents.iter().any(|agent| agent.is_alive);
        (!alive).then(|| Outcome::GameOver {
            score: state.score(),
        })
    }
}
