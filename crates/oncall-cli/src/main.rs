//! `render-schedule` CLI — render an on-call rotation with overrides to JSON.
//!
//! ## Usage
//!
//! ```sh
//! # Render three weeks of the rotation to stdout
//! render-schedule --schedule schedule.json --overrides overrides.json \
//!     --from 2025-11-07T17:00:00Z --until 2025-11-28T17:00:00Z
//!
//! # Write to a file with debug logging on stderr
//! render-schedule --schedule schedule.json --overrides overrides.json \
//!     --from 2025-11-07T17:00:00Z --until 2025-11-28T17:00:00Z -o out.json -v
//! ```
//!
//! `RUST_LOG` overrides the log filter.

mod input;
mod output;

use anyhow::{Context, Result};
use clap::Parser;
use oncall_engine::{render_observed, TracingObserver, Window};
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "render-schedule",
    version,
    about = "Render an on-call schedule with overrides"
)]
struct Cli {
    /// Path to schedule JSON file
    #[arg(long)]
    schedule: String,

    /// Path to overrides JSON file
    #[arg(long)]
    overrides: String,

    /// Start time (ISO 8601 format)
    #[arg(long = "from")]
    from_time: String,

    /// End time (ISO 8601 format)
    #[arg(long = "until")]
    until_time: String,

    /// Output file (writes to stdout if omitted)
    #[arg(short, long)]
    output: Option<String>,

    /// Log debug detail to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(&cli) {
        eprintln!("Error: {:#}", err);
        process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let schedule = input::load_schedule(&cli.schedule)?;
    let overrides = input::load_overrides(&cli.overrides)?;
    let from = input::parse_timestamp(&cli.from_time).context("Invalid --from time")?;
    let until = input::parse_timestamp(&cli.until_time).context("Invalid --until time")?;

    tracing::debug!(
        users = schedule.users.len(),
        overrides = overrides.len(),
        %from,
        %until,
        "loaded inputs"
    );

    let window = Window::new(from, until);
    let segments = render_observed(&schedule, &overrides, window, &mut TracingObserver)?;
    let json = output::to_json(&segments)?;
    output::write_output(cli.output.as_deref(), &json)
}
