use std::time::Duration;

/// Which kind of session is being played
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameMode {
    /// Human against two scripted snakes, last one standing wins
    Versus,
    /// One human-controlled snake
    Manual,
    /// One scripted snake, played at double speed
    WatchAi,
}

impl GameMode {
    /// Number of food cells kept on the board after every tick
    pub fn food_target(&self) -> usize {
        match self {
            GameMode::Versus => 4,
            GameMode::Manual | GameMode::WatchAi => 1,
        }
    }

    /// Fixed cadence between ticks
    pub fn tick_interval(&self) -> Duration {
        match self {
            GameMode::Versus | GameMode::Manual => Duration::from_millis(150),
            GameMode::WatchAi => Duration::from_millis(75),
        }
    }

    pub fn is_versus(&self) -> bool {
        matches!(self, GameMode::Versus)
    }

    /// Short label used in the header and logs
    pub fn label(&self) -> &'static str {
        match self {
            GameMode::Versus => "Versus",
            GameMode::Manual => "Manual",
            GameMode::WatchAi => "AI",
        }
    }

    /// Parses an answer to the start menu (`1`, `2` or `3`)
    pub fn from_menu_choice(choice: &str) -> Option<GameMode> {
        match choice.trim() {
            "1" => Some(GameMode::Versus),
            "2" => Some(GameMode::Manual),
            "3" => Some(GameMode::WatchAi),
            _ => None,
        }
    }
}

/// Configuration for a session
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub mode: GameMode,
    /// Seed for food placement; `None` draws one from entropy
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::Versus,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn new(mode: GameMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn food_target(&self) -> usize {
        self.mode.food_target()
    }

    pub fn tick_interval(&self) -> Duration {
        self.mode.tick_interval()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.mode, GameMode::Versus);
        assert_eq!(config.food_target(), 4);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_mode_cadence() {
        assert_eq!(GameMode::Manual.tick_interval(), Duration::from_millis(150));
        assert_eq!(GameMode::WatchAi.tick_interval(), Duration::from_millis(75));
        assert_eq!(GameMode::Manual.food_target(), 1);
    }

    #[test]
    fn test_menu_choice() {
        assert_eq!(GameMode::from_menu_choice("1"), Some(GameMode::Versus));
        assert_eq!(GameMode::from_menu_choice(" 2\n"), Some(GameMode::Manual));
        assert_eq!(GameMode::from_menu_choice("3"), Some(GameMode::WatchAi));
        assert_eq!(GameMode::from_menu_choice("4"), None);
        assert_eq!(GameMode::from_menu_choice(""), None);
    }

    #[test]
    fn test_with_seed() {
        let config = GameConfig::new(GameMode::Manual).with_seed(7);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.mode, GameMode::Manual);
    }
}
