//! Cauldron TUI — effect weights form in the terminal.
//!
//! Sections:
//! 1. Diplomas — count input driving how many weights are live
//! 2. Bounds — ingredient cap, probability cap, search depth
//! 3. Effect weights — one slider per live effect
//!
//! On quit the form payload (hidden weights field and bounds) is printed to
//! stdout as `name=value` lines.

use std::fs::File;
use std::io::{self, stdout};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing_subscriber::EnvFilter;

use cauldron_core::PanelConfig;
use cauldron_tui::{handle_key, ui, AppState};

#[derive(Parser)]
#[command(name = "cauldron-tui", about = "Cauldron effect weights form")]
struct Args {
    /// Panel config (.toml or .json). Defaults to <config dir>/cauldron/panel.toml
    /// when present, else the built-in effect table.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write logs to this file. The terminal belongs to the UI, so nothing
    /// is logged without it.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `cauldron_core=trace`.
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args)?;

    let fallback = dirs::config_dir().map(|d| d.join("cauldron").join("panel.toml"));
    let config = PanelConfig::resolve(args.config.as_deref(), fallback.as_deref())
        .context("load panel config")?;
    let mut app = AppState::new(config).context("render initial form")?;

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run the main event loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result?;

    // Emit the form payload
    println!("{}", app.panel.sink().form_pair());
    for (name, value) in app.panel.bounds_values() {
        println!("{name}={}", value.trunc() as i64);
    }
    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        // 1. Render
        terminal.draw(|f| ui::draw(f, app))?;

        // 2. Poll for input events
        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                handle_key(app, key);
            }
        }

        // 3. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}

fn init_logging(args: &Args) -> Result<()> {
    let Some(path) = &args.log_file else {
        return Ok(());
    };
    let file = File::create(path).with_context(|| format!("create log file {}", path.display()))?;
    let filter = EnvFilter::try_new(&args.log_level)
        .with_context(|| format!("parse log filter '{}'", args.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    tracing::info!(path = %path.display(), "logging started");
    Ok(())
}
