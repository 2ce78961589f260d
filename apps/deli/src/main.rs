//! # DeLi - Event Detection and Delineation
//!
//! The main binary for the deli-core detector.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  apps/deli (THE BINARY)                  │
//! │                                                          │
//! │  ┌─────────────┐   ┌──────────────┐   ┌──────────────┐   │
//! │  │    CLI      │   │ Window loader│   │  Reporting   │   │
//! │  │  (clap)     │   │ + TOML config│   │ (text/JSON)  │   │
//! │  └──────┬──────┘   └──────┬───────┘   └──────┬───────┘   │
//! │         └─────────────────┼──────────────────┘           │
//! │                           ▼                              │
//! │                   ┌───────────────┐                      │
//! │                   │   deli-core   │                      │
//! │                   │  (THE LOGIC)  │                      │
//! │                   └───────────────┘                      │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Detect events over a directory of window records
//! deli run -d data/ --theta 17
//!
//! # Score against ground truth, machine-readable output
//! deli run -d data/ -g truth.json --json-mode
//!
//! # Inspect a single window
//! deli classify -f data/0.json --avg 4 --std 2
//! deli delineate -f data/0.json
//! ```

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() {
    // Initialize tracing — DELI_LOG_FORMAT=json enables machine-parseable output.
    let log_format = std::env::var("DELI_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "deli=info".into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    let cli = deli::cli::Cli::parse();

    if let Err(e) = deli::cli::execute(cli) {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}
