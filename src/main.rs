use anyhow::Result;
use clap::{Parser, ValueEnum};
use snake_arena::game::{GameConfig, GameMode};
use snake_arena::input::spawn_key_pump;
use snake_arena::modes::Session;
use snake_arena::render::{summary, TerminalGuard, TuiRenderer};
use snake_arena::{logging, menu};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "snake_arena")]
#[command(version, about = "Terminal snake: solo, AI autopilot or three-way last one standing")]
struct Cli {
    /// Game mode (shows a menu when omitted)
    #[arg(long)]
    mode: Option<Mode>,

    /// Seed for food placement
    #[arg(long)]
    seed: Option<u64>,

    /// Append logs to this file (filter with RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    /// You against two scripted snakes, last one alive wins
    Versus,
    /// Play yourself
    Manual,
    /// Watch the heuristic play at double speed
    WatchAi,
}

impl From<Mode> for GameMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Versus => GameMode::Versus,
            Mode::Manual => GameMode::Manual,
            Mode::WatchAi => GameMode::WatchAi,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_file.as_deref())?;

    let mode = match cli.mode {
        Some(mode) => mode.into(),
        None => menu::prompt_for_mode()?,
    };
    let mut config = GameConfig::new(mode);
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    // Terminal is restored when the renderer (and its guard) goes away
    let guard = TerminalGuard::acquire()?;
    let (keys, pump) = spawn_key_pump();
    let mut session = Session::new(config, keys, TuiRenderer::new(guard));

    let result = session.run().await;
    pump.abort();

    let (state, renderer) = session.into_parts();
    renderer.finish()?;

    let end = result?;
    println!("{}", summary(&state, end));

    Ok(())
}
