//! Tumbler CLI
//!
//! Drives a headless date picker through a scripted gesture session:
//! navigate to a date, flick one of the slots, and report where it settles.

mod config;
mod simulate;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use tumbler_picker::{Field, PickerEvent};

use crate::config::TumblerConfig;

/// Headless picker-wheel simulator
#[derive(Parser, Debug)]
#[command(name = "tumbler")]
#[command(about = "Drive a headless date picker through scripted gestures")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a gesture session and print the settled date
    Simulate {
        /// Config file, or a directory containing tumbler.toml
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Date to navigate to first (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,

        /// Slot to flick
        #[arg(short, long)]
        field: Option<Field>,

        /// Finger travel in pixels; positive pages forward
        #[arg(long, allow_hyphen_values = true)]
        flick: Option<f32>,

        /// Frames simulated after each step
        #[arg(long)]
        frames: Option<usize>,
    },

    /// Print the default configuration as TOML
    Defaults,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate {
            config,
            date,
            field,
            flick,
            frames,
        } => {
            let mut config = match config {
                Some(path) => TumblerConfig::load_from_path(&path)?,
                None => TumblerConfig::load_or_default(&std::env::current_dir()?)?,
            };
            let session = &mut config.session;
            if date.is_some() {
                session.date = date;
            }
            if let Some(field) = field {
                session.field = field;
            }
            if let Some(flick) = flick {
                session.flick = flick;
            }
            if let Some(frames) = frames {
                session.frames = frames;
            }

            let report = simulate::run(&config)?;
            for event in &report.events {
                let PickerEvent::Change { field, value } = event;
                match value {
                    Some(value) => println!("{:>5} -> {}", field, value),
                    None => println!("{:>5} -> (none)", field),
                }
            }
            match report.date {
                Some(date) => println!("{}", date),
                None => println!("{} (not a calendar date)", report.value),
            }
            if !report.settled {
                tracing::warn!("Picker still moving after {} frames", report.frames);
            }
        }
        Commands::Defaults => {
            print!("{}", TumblerConfig::default().to_toml()?);
        }
    }

    Ok(())
}
