use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::game::{AgentId, BorderKind, Cell, GameMode, GameState, Segment, HEIGHT};
use crate::metrics::GameMetrics;

/// Draws the grid and status text into a ratatui frame
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, state: &GameState, metrics: &GameMetrics) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),             // Header
                Constraint::Length(HEIGHT as u16), // Grid
                Constraint::Length(1),             // Status
                Constraint::Length(1),             // Controls
                Constraint::Min(0),
            ])
            .split(frame.area());

        frame.render_widget(self.render_header(state, metrics), chunks[0]);
        frame.render_widget(self.render_grid(state), chunks[1]);
        frame.render_widget(self.render_status(state), chunks[2]);
        frame.render_widget(self.render_controls(state.mode), chunks[3]);
    }

    fn render_header(&self, state: &GameState, metrics: &GameMetrics) -> Paragraph<'_> {
        let title = match state.mode {
            GameMode::Versus => "Slither.io Mode",
            GameMode::Manual => "Manual",
            GameMode::WatchAi => "AI Mode (2x speed)",
        };

        let text = Line::from(vec![
            Span::styled(
                title,
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Ticks: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.ticks.to_string(), Style::default().fg(Color::White)),
        ]);

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_grid(&self, state: &GameState) -> Paragraph<'_> {
        let lines: Vec<Line> = state
            .grid
            .rows()
            .map(|row| Line::from(row.iter().map(|&cell| cell_span(cell)).collect::<Vec<_>>()))
            .collect();

        Paragraph::new(lines).alignment(Alignment::Center)
    }

    fn render_status(&self, state: &GameState) -> Paragraph<'_> {
        let spans = if state.mode.is_versus() {
            let mut spans = Vec::new();
            for (i, agent) in state.agents.iter().enumerate() {
                if i > 0 {
                    spans.push(Span::raw(" | "));
                }
                let (text, style) = if agent.is_alive {
                    (
                        format!("{}:{:2}", agent.id.label(), agent.len()),
                        agent_style(agent.id, Segment::Head),
                    )
                } else {
                    (
                        format!("{}:XX", agent.id.label()),
                        Style::default().fg(Color::DarkGray),
                    )
                };
                spans.push(Span::styled(text, style));
            }
            spans.push(Span::raw(" | Last alive wins!"));
            spans
        } else {
            vec![
                Span::styled("Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    state.score().to_string(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("  |  Mode: "),
                Span::styled(state.mode.label(), Style::default().fg(Color::Cyan)),
            ]
        };

        Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
    }

    fn render_controls(&self, mode: GameMode) -> Paragraph<'_> {
        let mut spans = Vec::new();
        if mode != GameMode::WatchAi {
            spans.push(Span::styled("WASD", Style::default().fg(Color::Yellow)));
            spans.push(Span::raw("=move "));
        }
        spans.push(Span::styled("Q", Style::default().fg(Color::Red)));
        spans.push(Span::raw("=quit "));
        spans.push(Span::styled("Ctrl+C", Style::default().fg(Color::Red)));
        spans.push(Span::raw("=interrupt"));

        Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Glyph for a cell
pub fn glyph(cell: Cell) -> &'static str {
    match cell {
        Cell::Border(kind) => match kind {
            BorderKind::Horizontal => "─",
            BorderKind::Vertical => "│",
            BorderKind::TopLeft => "┌",
            BorderKind::TopRight => "┐",
            BorderKind::BottomLeft => "└",
            BorderKind::BottomRight => "┘",
        },
        Cell::Empty => " ",
        Cell::Food => "★",
        Cell::Occupied(id, segment) => match (id, segment) {
            (AgentId::Player, Segment::Head) => "●",
            (AgentId::Player, Segment::Body) => "○",
            (AgentId::AiA, Segment::Head) => "◆",
            (AgentId::AiA, Segment::Body) => "◇",
            (AgentId::AiB, Segment::Head) => "■",
            (AgentId::AiB, Segment::Body) => "□",
        },
    }
}

fn agent_style(id: AgentId, segment: Segment) -> Style {
    let color = match (id, segment) {
        (AgentId::Player, _) => Color::Green,
        (AgentId::AiA, Segment::Head) => Color::Blue,
        (AgentId::AiA, Segment::Body) => Color::Cyan,
        (AgentId::AiB, _) => Color::Magenta,
    };
    let style = Style::default().fg(color);
    match segment {
        Segment::Head => style.add_modifier(Modifier::BOLD),
        Segment::Body => style,
    }
}

fn cell_span(cell: Cell) -> Span<'static> {
    let style = match cell {
        Cell::Border(_) => Style::default().fg(Color::DarkGray),
        Cell::Empty => Style::default(),
        Cell::Food => Style::default().fg(Color::Red),
        Cell::Occupied(id, segment) => agent_style(id, segment),
    };
    Span::styled(glyph(cell), style)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameConfig, GameEngine};
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(state: &GameState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 22)).unwrap();
        let renderer = Renderer::new();
        let metrics = GameMetrics::new();
        terminal
            .draw(|frame| renderer.render(frame, state, &metrics))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_glyphs() {
        assert_eq!(glyph(Cell::Border(BorderKind::TopLeft)), "┌");
        assert_eq!(glyph(Cell::Food), "★");
        assert_eq!(glyph(Cell::Occupied(AgentId::AiB, Segment::Head)), "■");
        assert_eq!(glyph(Cell::Empty), " ");
    }

    #[test]
    fn test_versus_frame() {
        let state = GameEngine::new(GameConfig::new(GameMode::Versus).with_seed(1)).reset();
        let text = screen_text(&state);

        assert!(text.contains('●'));
        assert!(text.contains('◆'));
        assert!(text.contains('■'));
        assert_eq!(text.matches('★').count(), 4);
        assert!(text.contains("You: 1 | AI1: 1 | AI2: 1"));
        assert!(text.contains("Slither.io Mode"));
    }

    #[test]
    fn test_eliminated_agent_status() {
        let mut state = GameEngine::new(GameConfig::new(GameMode::Versus).with_seed(2)).reset();
        state.agents[2].is_alive = false;
        state.rebuild_grid();

        let text = screen_text(&state);
        assert!(text.contains("AI2:XX"));
        assert!(!text.contains('■'));
    }

    #[test]
    fn test_single_mode_frame() {
        let state = GameEngine::new(GameConfig::new(GameMode::WatchAi).with_seed(3)).reset();
        let text = screen_text(&state);

        assert!(text.contains("Score: 0"));
        assert!(text.contains("Mode: AI"));
        assert!(!text.contains("WASD"));
    }
}
