//! Folio Entry Point
//!
//! Launches the portfolio page in the terminal.
//!
//! # Usage
//!
//! ```bash
//! # Full-screen page with defaults (or ~/.config/folio/folio.toml)
//! folio
//!
//! # Custom content file
//! folio --config ./me.toml
//!
//! # Just the typed hero line, three phrases, then exit
//! folio --ticker --cycles 3 --phrases "Rustacean,Gardener,Cyclist"
//!
//! # Verbose logging (to a file, so the screen stays clean)
//! RUST_LOG=debug folio --log-file /tmp/folio.log
//! ```

use std::fs::File;
use std::io::{self, IsTerminal, Write};
use std::panic;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    cursor, execute, queue,
    event::{DisableMouseCapture, EnableMouseCapture},
    terminal::{
        disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use folio_core::{
    default_config_path, load_config_from_path, split_phrases, ConfigOverrides, FolioConfig, LogSink,
    TypedTextEngine,
};
use folio_tui::App;

/// Folio - a portfolio page for the terminal
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short = 'c', long, env = "FOLIO_CONFIG", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Hero phrases, comma separated (overrides config)
    #[arg(short = 'p', long, value_name = "LIST")]
    phrases: Option<String>,

    /// Delay between typed characters, in milliseconds
    #[arg(long, value_name = "MS")]
    typing_ms: Option<u64>,

    /// Maximum random delay added to each tick, in milliseconds
    #[arg(long, value_name = "MS")]
    jitter_ms: Option<u64>,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Print the typed hero line on stdout instead of opening the page
    #[arg(long)]
    ticker: bool,

    /// With --ticker, exit after this many phrases were typed and erased
    #[arg(long, value_name = "N", requires = "ticker")]
    cycles: Option<usize>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_ref())?;

    let config = build_config(&args)?;
    tracing::info!(source = %config.source(), "Configuration loaded");

    if args.ticker {
        return run_ticker(&config, args.cycles).await;
    }

    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        eprintln!("❌ Error: folio requires a terminal (TTY)");
        eprintln!();
        eprintln!("This usually means stdin or stdout is piped, or SSH ran without -t.");
        eprintln!("For a plain-text rendition try: folio --ticker");
        std::process::exit(1);
    }

    // Set up panic hook to restore terminal
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal before printing panic
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    // Initialize terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run the app
    let result = run_app(&mut terminal, &config).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: &FolioConfig,
) -> Result<()> {
    let mut app = App::new(config, Arc::new(LogSink))?;
    app.run(terminal).await
}

/// Layered config: defaults, file, environment, then command line
fn build_config(args: &Args) -> Result<FolioConfig> {
    let path = args.config.clone().or_else(default_config_path);
    let mut config = load_config_from_path(path).context("loading configuration")?;

    cli_overrides(args).apply(&mut config);

    config.validate().context("invalid command line options")?;
    Ok(config)
}

fn cli_overrides(args: &Args) -> ConfigOverrides {
    let mut overrides = ConfigOverrides::default();
    if let Some(phrases) = &args.phrases {
        overrides = overrides.with_phrases(split_phrases(phrases));
    }
    if let Some(ms) = args.typing_ms {
        overrides = overrides.with_typing_ms(ms);
    }
    if let Some(ms) = args.jitter_ms {
        overrides = overrides.with_jitter_ms(ms);
    }
    overrides
}

fn init_logging(log_file: Option<&PathBuf>) -> Result<()> {
    let file_layer = match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file: {}", path.display()))?;
            Some(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
        }
        None => None,
    };
    let stderr_layer = log_file.is_none().then(|| {
        tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_writer(io::stderr)
    });

    tracing_subscriber::registry()
        .with(file_layer)
        .with(stderr_layer)
        .with(EnvFilter::from_default_env())
        .init();
    Ok(())
}

/// Print the hero line in place until Ctrl-C or `cycles` phrases are done
async fn run_ticker(config: &FolioConfig, cycles: Option<usize>) -> Result<()> {
    let engine = TypedTextEngine::new(config.phrase_list()?, config.cadence);
    let (tx, mut rx) = mpsc::unbounded_channel::<String>();
    let handle = engine.start(move |text| {
        let _ = tx.send(text.to_string());
    })?;

    let mut stdout = io::stdout();
    let mut completed = 0;
    let mut previous = String::new();

    loop {
        tokio::select! {
            frame = rx.recv() => {
                let Some(text) = frame else { break };

                queue!(stdout, cursor::MoveToColumn(0), Clear(ClearType::CurrentLine))?;
                write!(stdout, "{text}")?;
                stdout.flush()?;

                // back to empty after showing something: one phrase done
                if text.is_empty() && !previous.is_empty() {
                    completed += 1;
                    if cycles.is_some_and(|n| completed >= n) {
                        break;
                    }
                }
                previous = text;
            }
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    handle.cancel();
    writeln!(stdout)?;
    tracing::debug!(completed, "Ticker finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use folio_core::ConfigSource;
    use pretty_assertions::assert_eq;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("folio").chain(argv.iter().copied()))
            .expect("valid arguments")
    }

    #[test]
    fn test_no_flags_means_no_overrides() {
        assert!(cli_overrides(&parse(&[])).is_empty());
    }

    #[test]
    fn test_cadence_flags_reach_config() {
        let args = parse(&["--typing-ms", "20", "--jitter-ms", "0", "--phrases", "A, B"]);
        let mut config = FolioConfig::default();
        cli_overrides(&args).apply(&mut config);

        assert_eq!(config.cadence.typing, Duration::from_millis(20));
        assert_eq!(config.cadence.jitter_max, Duration::ZERO);
        assert_eq!(config.portfolio.hero.phrases, vec!["A", "B"]);
        assert_eq!(config.source(), ConfigSource::Cli);
    }

    #[test]
    fn test_cycles_requires_ticker() {
        let result = Args::try_parse_from(["folio", "--cycles", "2"]);
        assert!(result.is_err());
    }
}
