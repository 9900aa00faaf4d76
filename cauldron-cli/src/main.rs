//! Cauldron CLI — config checks and headless form replay.
//!
//! Commands:
//! - `check` — validate a panel config and print effects and bounds
//! - `replay` — drive a fresh panel with scripted events and print the
//!   hidden field payload

mod replay;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cauldron_core::{HiddenField, PanelConfig, SliderPanel};

use crate::replay::{apply_event, ReplayEvent};

#[derive(Parser)]
#[command(name = "cauldron", about = "Cauldron CLI — effect weights form tools")]
struct Cli {
    /// Panel config (.toml or .json). Defaults to <config dir>/cauldron/panel.toml
    /// when present, else the built-in effect table.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace). Logs go to stderr.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the panel config and print its effects and bounds.
    Check,
    /// Apply events to a fresh panel and print the final payload.
    Replay {
        /// Events in order: `count=N`, `w<I>=<V>` (weight), `b<NAME>=<V>` (bounds).
        #[arg(required = true)]
        events: Vec<String>,

        /// Print every payload written to the hidden field, not just the last.
        #[arg(long, default_value_t = false)]
        trace: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let fallback = dirs::config_dir().map(|d| d.join("cauldron").join("panel.toml"));
    let config = PanelConfig::resolve(cli.config.as_deref(), fallback.as_deref())
        .context("load panel config")?;

    match cli.command {
        Commands::Check => run_check(&config),
        Commands::Replay { events, trace } => run_replay(config, &events, trace),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_writer(std::io::stderr)
        .init();
}

fn run_check(config: &PanelConfig) -> Result<()> {
    let panel = SliderPanel::new(config.clone(), HiddenField::new(config.output_field.clone()));

    println!("Effects: {} (initial count {})", config.max_effects(), config.initial_count);
    println!("Output field: {}", config.output_field);
    println!();
    println!("{:>3}  {:<26} {:>7}  {}", "#", "Label", "Default", "Icon");
    println!("{}", "-".repeat(60));
    for (i, default) in config.default_weights.iter().enumerate() {
        println!(
            "{:>3}  {:<26} {:>7.2}  {}",
            i + 1,
            panel.catalog().label_for(i),
            default,
            panel.catalog().icon_for(i).unwrap_or("-"),
        );
    }

    if !config.bounds_fields.is_empty() {
        println!();
        println!("{:<12} {:<28} {:>6} {:>6} {:>6}", "Name", "Label", "Min", "Max", "Value");
        println!("{}", "-".repeat(62));
        for field in &config.bounds_fields {
            println!(
                "{:<12} {:<28} {:>6} {:>6} {:>6}",
                field.name, field.label, field.min, field.max, field.value
            );
        }
    }
    Ok(())
}

fn run_replay(config: PanelConfig, raw_events: &[String], trace: bool) -> Result<()> {
    let events = raw_events
        .iter()
        .map(|raw| raw.parse::<ReplayEvent>())
        .collect::<Result<Vec<_>, _>>()?;

    let mut panel = SliderPanel::new(config, Vec::<String>::new());
    panel.initialize().context("initial render")?;

    for event in &events {
        tracing::debug!(%event, "replay");
        let outcome = apply_event(&mut panel, event).with_context(|| format!("apply {event}"))?;
        if let Some(note) = outcome {
            eprintln!("{event}: {note}");
        }
    }

    let payloads = panel.sink();
    if trace {
        for payload in payloads {
            println!("{payload}");
        }
    } else if let Some(last) = payloads.last() {
        println!("{last}");
    }
    Ok(())
}
