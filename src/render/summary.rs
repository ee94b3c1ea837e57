use crossterm::style::Stylize;

use crate::game::{AgentId, GameState, Outcome};
use crate::modes::SessionEnd;

/// Plain-terminal text printed once the session has ended
pub fn summary(state: &GameState, end: SessionEnd) -> String {
    let outcome = match end {
        SessionEnd::Quit => return "Quitting...".to_string(),
        SessionEnd::Interrupted => return "Game interrupted!".to_string(),
        SessionEnd::GameOver(outcome) => outcome,
    };

    match outcome {
        Outcome::GameOver { score } => {
            let rule = "─".repeat(20);
            format!(
                "{}\n  {}\n  Score: {}\n{}",
                rule.as_str().dim(),
                "GAME OVER!".red().bold(),
                score.to_string().green(),
                rule.as_str().dim(),
            )
        }
        Outcome::PlayerWins | Outcome::AiWins | Outcome::Draw => {
            let rule = "─".repeat(36);
            let headline = match outcome {
                Outcome::PlayerWins => "YOU WIN! Last one standing!".green().bold(),
                Outcome::AiWins => "YOU DIED! AI wins!".red().bold(),
                _ => "DRAW! Everyone crashed!".yellow().bold(),
            };
            let lengths = [AgentId::Player, AgentId::AiA, AgentId::AiB]
                .iter()
                .filter_map(|&id| state.agent(id))
                .map(|agent| format!("{}:{}", agent.id.label(), agent.len()))
                .collect::<Vec<_>>()
                .join(" | ");
            format!(
                "{}\n  {}\n{}\n  {}\n{}",
                rule.as_str().dim(),
                headline,
                rule.as_str().dim(),
                lengths,
                rule.as_str().dim(),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameConfig, GameEngine, GameMode};

    #[test]
    fn test_quit_and_interrupt_notices() {
        let state = GameEngine::new(GameConfig::new(GameMode::Manual).with_seed(1)).reset();
        assert_eq!(summary(&state, SessionEnd::Quit), "Quitting...");
        assert_eq!(summary(&state, SessionEnd::Interrupted), "Game interrupted!");
    }

    #[test]
    fn test_single_game_over() {
        let state = GameEngine::new(GameConfig::new(GameMode::Manual).with_seed(1)).reset();
        let text = summary(&state, SessionEnd::GameOver(Outcome::GameOver { score: 7 }));
        assert!(text.contains("GAME OVER!"));
        assert!(text.contains('7'));
    }

    #[test]
    fn test_versus_results() {
        let state = GameEngine::new(GameConfig::new(GameMode::Versus).with_seed(1)).reset();

        let text = summary(&state, SessionEnd::GameOver(Outcome::Draw));
        assert!(text.contains("DRAW! Everyone crashed!"));
        assert!(text.contains("You:1 | AI1:1 | AI2:1"));

        let text = summary(&state, SessionEnd::GameOver(Outcome::PlayerWins));
        assert!(text.contains("YOU WIN!"));

        let text = summary(&state, SessionEnd::GameOver(Outcome::AiWins));
        assert!(text.contains("AI wins!"));
    }
}
