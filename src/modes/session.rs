use anyhow::Result;
use std::ops::ControlFlow;
use tokio::time::{interval, MissedTickBehavior};
use tracing::info;

use crate::game::{Action, GameConfig, GameEngine, GameState, Outcome};
use crate::input::{KeyCommand, KeyReader};
use crate::metrics::GameMetrics;
use crate::render::FrameRenderer;

/// Why a session stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    GameOver(Outcome),
    Quit,
    Interrupted,
}

/// Fixed-cadence loop around the engine: read keys, step, draw
pub struct Session<K, R> {
    engine: GameEngine,
    state: GameState,
    metrics: GameMetrics,
    keys: K,
    renderer: R,
}

impl<K: KeyReader, R: FrameRenderer> Session<K, R> {
    pub fn new(config: GameConfig, keys: K, renderer: R) -> Self {
        let mut engine = GameEngine::new(config);
        let state = engine.reset();

        Self {
            engine,
            state,
            metrics: GameMetrics::new(),
            keys,
            renderer,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn into_parts(self) -> (GameState, R) {
        (self.state, self.renderer)
    }

    /// Run ticks until the game ends, a quit key arrives or Ctrl+C is caught
    pub async fn run(&mut self) -> Result<SessionEnd> {
        info!(
            mode = self.state.mode.label(),
            seed = ?self.engine.config().seed,
            "session started"
        );
        self.renderer.draw(&self.state, &self.metrics)?;

        let mut ticker = interval(self.engine.config().tick_interval());
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // the first tick completes immediately
        ticker.tick().await;

        let ctrl_c = tokio::signal::ctrl_c();
        tokio::pin!(ctrl_c);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    if let Some(end) = self.tick()? {
                        return Ok(end);
                    }
                }

                _ = &mut ctrl_c => {
                    info!(steps = self.state.steps, "session interrupted");
                    return Ok(SessionEnd::Interrupted);
                }
            }
        }
    }

    /// One full pass: drain input, resolve the turn, redraw
    pub fn tick(&mut self) -> Result<Option<SessionEnd>> {
        let action = match self.drain_keys() {
            ControlFlow::Continue(action) => action,
            ControlFlow::Break(end) => {
                info!(?end, steps = self.state.steps, "session ended from keyboard");
                return Ok(Some(end));
            }
        };

        let result = self.engine.step(&mut self.state, action);
        self.metrics.on_tick();
        self.renderer.draw(&self.state, &self.metrics)?;

        match self.state.outcome {
            Some(outcome) if result.terminated => {
                info!(?outcome, steps = self.state.steps, "game over");
                Ok(Some(SessionEnd::GameOver(outcome)))
            }
            _ => Ok(None),
        }
    }

    /// Read every pending key; the last turn that is not a U-turn wins
    fn drain_keys(&mut self) -> ControlFlow<SessionEnd, Action> {
        let heading = self.state.human().map(|agent| agent.direction);
        let mut turn = None;

        while let Some(key) = self.keys.poll_key() {
            match KeyCommand::from_char(key) {
                Some(KeyCommand::Quit) => return ControlFlow::Break(SessionEnd::Quit),
                Some(KeyCommand::Interrupt) => return ControlFlow::Break(SessionEnd::Interrupted),
                Some(KeyCommand::Turn(direction)) => {
                    if heading.is_some_and(|current| !current.is_opposite(direction)) {
                        turn = Some(direction);
                    }
                }
                None => {}
            }
        }

        ControlFlow::Continue(Action::from(turn))
    }
}
