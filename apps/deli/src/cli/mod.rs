//! # DeLi CLI Module
//!
//! This module implements the CLI interface for DeLi.
//!
//! ## Available Commands
//!
//! - `run` - Detect and delineate events over a directory of windows
//! - `classify` - Run a single isolated window step
//! - `delineate` - Delineate sub-events of a single window graph
//! - `init-config` - Write a default configuration file

mod commands;

use clap::{Parser, Subcommand};
use deli_core::DeliError;
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// DeLi - event detection and delineation
///
/// Tracks connected components of per-window similarity graphs, flags those
/// whose size is anomalous against recent history and summarizes each event
/// by its most central messages.
#[derive(Parser, Debug)]
#[command(name = "deli")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Suppress the run header
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Event-size multiplier (overrides the config file)
    #[arg(short, long, global = true)]
    pub theta: Option<f64>,

    /// Bootstrap mean component size (overrides the config file)
    #[arg(long, global = true)]
    pub avg: Option<f64>,

    /// Bootstrap component-size standard deviation (overrides the config file)
    #[arg(long, global = true)]
    pub std: Option<f64>,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Process every window in a data directory, in index order
    Run {
        /// Directory holding `0.json`, `1.json`, ...
        #[arg(short, long)]
        dir: PathBuf,

        /// JSON array of 0/1 flags, one per window, to score against
        #[arg(short, long)]
        ground_truth: Option<PathBuf>,
    },

    /// Classify a single window against the bootstrap statistics
    Classify {
        /// Path to the window record
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Delineate the sub-events of a single window graph
    Delineate {
        /// Path to the window record
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Write a default configuration file
    InitConfig {
        /// Output file path
        #[arg(short, long, default_value = "deli.toml")]
        output: PathBuf,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub fn execute(cli: Cli) -> Result<(), DeliError> {
    let overrides = crate::config::Overrides {
        theta: cli.theta,
        avg: cli.avg,
        std: cli.std,
    };
    let config_path = cli.config.as_deref();
    let json_mode = cli.json_mode;

    match cli.command {
        Commands::Run { dir, ground_truth } => {
            let config = load_run_config(config_path, overrides)?;
            if !cli.quiet && !json_mode {
                print_header(&config);
            }
            cmd_run(&config, &dir, ground_truth.as_deref(), json_mode)
        }
        Commands::Classify { file } => {
            let config = load_run_config(config_path, overrides)?;
            cmd_classify(&config, &file, json_mode)
        }
        Commands::Delineate { file } => {
            let config = load_run_config(config_path, overrides)?;
            cmd_delineate(&config, &file, json_mode)
        }
        Commands::InitConfig { output, force } => cmd_init_config(&output, force),
    }
}
