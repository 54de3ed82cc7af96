use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use clap::Parser;
use connect_four::config::AppConfig;
use connect_four::game::GameSession;
use connect_four::ui::{script, App, AppSettings};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(name = "connect_four", about = "Play Connect Four in the terminal")]
struct Args {
    /// Path to TOML config file
    #[arg(short, long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Number of rows (overrides config)
    #[arg(long)]
    height: Option<usize>,

    /// Number of columns (overrides config)
    #[arg(long)]
    width: Option<usize>,

    /// Colour name or #rrggbb for player 1 (overrides config)
    #[arg(long)]
    player1_color: Option<String>,

    /// Colour name or #rrggbb for player 2 (overrides config)
    #[arg(long)]
    player2_color: Option<String>,

    /// Play these columns (0-based, comma separated) without the UI and print
    /// the final board
    #[arg(long, value_delimiter = ',')]
    moves: Option<Vec<usize>>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "warn")]
    log_level: LevelFilter,

    /// Write logs to this file. Without it the interactive game logs nothing.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let level = if args.moves.is_none() && args.log_file.is_none() {
        LevelFilter::OFF
    } else {
        args.log_level
    };
    initialize_logging(level, args.log_file.as_deref())?;

    let mut config = AppConfig::load_or_default(&args.config)?;
    if let Some(height) = args.height {
        config.board.height = height;
    }
    if let Some(width) = args.width {
        config.board.width = width;
    }
    if let Some(color) = args.player1_color {
        config.players.player1_color = color;
    }
    if let Some(color) = args.player2_color {
        config.players.player2_color = color;
    }
    config.validate()?;

    let settings = AppSettings {
        dimensions: config.dimensions()?,
        colors: config.player_colors()?,
        announce_delay: config.ui.announce_delay(),
    };

    match args.moves {
        Some(moves) => play_headless(&settings, &moves),
        None => play_interactive(settings)?,
    }
    Ok(())
}

fn play_headless(settings: &AppSettings, moves: &[usize]) {
    let (first, second) = settings.colors;
    let mut session = GameSession::with_dimensions(first, second, settings.dimensions);
    let results = script::replay(&mut session, moves);
    info!(applied = results.len(), "replay finished");

    println!("{}", session.board());
    match script::end_message(session.status()) {
        Some(text) => println!("{text}"),
        None => match session.active_player() {
            Some(player) => println!("{} to move", player.id()),
            None => println!("In progress"),
        },
    }
}

fn play_interactive(settings: AppSettings) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(settings);
    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}

fn initialize_logging(level: LevelFilter, log_file: Option<&Path>) -> io::Result<()> {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    match log_file {
        Some(path) => {
            let file = File::create(path)?;
            tracing_subscriber::registry()
                .with(
                    tracing_subscriber::fmt::layer()
                        .event_format(format)
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .with(filter)
                .init();
        }
        None => {
            tracing_subscriber::registry()
                .with(
                    tracing_subscriber::fmt::layer()
                        .event_format(format)
                        .with_writer(io::stderr),
                )
                .with(filter)
                .init();
        }
    }
    Ok(())
}
