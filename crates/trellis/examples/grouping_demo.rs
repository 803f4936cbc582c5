//! Interactive grouping demo.
//!
//! Reads commands from stdin, one per line:
//!
//! ```text
//! add <name> <category>
//! remove <name>
//! toggle
//! show
//! dump
//! ```
//!
//! Run with: cargo run -p trellis --example grouping_demo [config.toml]
//!
//! Set `RUST_LOG=trellis=debug` to watch layout changes.

use std::io::{self, BufRead, Write};

use trellis::commands::{Command, ItemCommands, Outcome};
use trellis::config::TrellisConfig;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => TrellisConfig::load(path)?,
        None => TrellisConfig::default(),
    };
    let mut commands = ItemCommands::new(config);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    for line in stdin.lock().lines() {
        let line = line?;
        let Some(command) = Command::parse(&line) else {
            if !line.trim().is_empty() {
                writeln!(stdout, "unknown command: {}", line.trim())?;
            }
            continue;
        };

        match commands.execute(command) {
            Ok(Outcome::Output(text)) => write!(stdout, "{text}")?,
            Ok(Outcome::NotFound) => writeln!(stdout, "no such item")?,
            Ok(Outcome::Changed) => write!(stdout, "{}", commands.render())?,
            Err(err) => writeln!(stdout, "{}: {}", err.title(), err)?,
        }
        stdout.flush()?;
    }

    Ok(())
}
