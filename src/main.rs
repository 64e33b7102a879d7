use anyhow::{Context, Result};
use clap::Parser;
use connect_four::config::{AppConfig, PieceColor};
use connect_four::game::GameState;
use connect_four::ui::App;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;

/// Two-player Connect Four in the terminal.
#[derive(Parser, Debug)]
#[command(name = "connect-four")]
struct Cli {
    /// Path to TOML config file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Number of rows (overrides config)
    #[arg(long)]
    height: Option<usize>,

    /// Number of columns (overrides config)
    #[arg(long)]
    width: Option<usize>,

    /// Color of player 1 (overrides config)
    #[arg(long, value_enum)]
    p1_color: Option<PieceColor>,

    /// Color of player 2 (overrides config)
    #[arg(long, value_enum)]
    p2_color: Option<PieceColor>,

    /// Print the default config as TOML and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let (config, found) = resolve_config(&cli)?;

    connect_four::logging::init(&config.logging).context("opening log file")?;
    if !found {
        tracing::warn!(path = %cli.config.display(), "config file not found, using defaults");
    }
    tracing::info!(
        height = config.board.height,
        width = config.board.width,
        one = %config.players.one,
        two = %config.players.two,
        "starting game"
    );

    let game = GameState::create(
        config.board.height,
        config.board.width,
        config.players.one,
        config.players.two,
    )?;

    run_tui(App::new(game)).context("running terminal UI")
}

/// Read the config file, apply CLI overrides, then validate the result.
/// The flag reports whether the config file existed.
fn resolve_config(cli: &Cli) -> Result<(AppConfig, bool)> {
    let (mut config, found) = AppConfig::read_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    if let Some(height) = cli.height {
        config.board.height = height;
    }
    if let Some(width) = cli.width {
        config.board.width = width;
    }
    if let Some(color) = cli.p1_color {
        config.players.one = color;
    }
    if let Some(color) = cli.p2_color {
        config.players.two = color;
    }
    config.validate()?;

    Ok((config, found))
}

fn run_tui(mut app: App) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("connect-four").chain(args.iter().copied()))
    }

    #[test]
    fn test_missing_config_uses_defaults() {
        let (config, found) = resolve_config(&cli(&["--config", "nonexistent.toml"])).unwrap();
        assert!(!found);
        assert_eq!(config.board.height, 6);
        assert_eq!(config.players.one, PieceColor::Red);
    }

    #[test]
    fn test_flags_override_invalid_file_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("connect_four.toml");
        std::fs::write(&path, "[board]\nheight = 2\n\n[players]\none = \"blue\"\n").unwrap();
        let path = path.to_str().unwrap();

        assert!(resolve_config(&cli(&["--config", path])).is_err());

        let (config, found) =
            resolve_config(&cli(&["--config", path, "--height", "6", "--p2-color", "green"]))
                .unwrap();
        assert!(found);
        assert_eq!(config.board.height, 6);
        assert_eq!(config.players.one, PieceColor::Blue);
        assert_eq!(config.players.two, PieceColor::Green);
    }

    #[test]
    fn test_oversized_flag_is_rejected() {
        let result = resolve_config(&cli(&["--config", "nonexistent.toml", "--width", "100000"]));
        assert!(result.is_err());
    }
}
