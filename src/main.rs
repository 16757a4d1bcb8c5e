use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use multiplication_game::ai::Planner;
use multiplication_game::config::AppConfig;
use multiplication_game::game::{GameSession, SessionState};
use multiplication_game::ui::App;

/// Play the multiplication strategy game against the computer.
#[derive(Parser)]
#[command(name = "multiplication_game", about = "6x6 multiplication strategy game")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Resume from the saved game at startup
    #[arg(long)]
    load: bool,

    /// Override the AI random seed
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(seed) = cli.seed {
        config.game.ai_seed = Some(seed);
    }

    let planner = match config.game.ai_seed {
        Some(seed) => Planner::with_seed(seed),
        None => Planner::new(),
    };
    let mut session = GameSession::with_planner(planner);

    if cli.load {
        if let Err(e) = session.load_game(&config.game.save_path) {
            eprintln!("Could not load saved game ({e}), starting a new one.");
        }
    }
    if session.state() == SessionState::NotStarted {
        session.new_game();
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(session, &config);
    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res.context("running terminal UI")
}
