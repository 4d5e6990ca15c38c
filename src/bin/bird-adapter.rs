//! bird-adapter CLI — runs an Adapter pattern walkthrough.
//!
//! Usage:
//!   bird-adapter [--script classic|narrated] [--output path] [-v]

use bird_adapter::{DemoError, FileConsole, Script, StdoutConsole};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "bird-adapter",
    version,
    about = "Wrap a bird so it can be used as a toy duck"
)]
struct Cli {
    /// Which walkthrough to run
    #[arg(long, value_enum, default_value_t = Script::Classic)]
    script: Script,
    /// Write the transcript to this file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Logs go to stderr so stdout carries only the transcript.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<(), DemoError> {
    match &cli.output {
        Some(path) => {
            tracing::info!(path = %path.display(), "writing transcript to file");
            let console = FileConsole::create(path)?;
            bird_adapter::run(cli.script, &console)?;
            console.flush()?;
        }
        None => bird_adapter::run(cli.script, &StdoutConsole::new())?,
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
