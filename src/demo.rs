//! Demo scripts — construct a bird, a toy and an adapter, then call each
//!
//! Two scripts are available:
//!
//! - `Classic` echoes every call's return value after the call. The calls
//!   return nothing, so each echo is the line `None`.
//! - `Narrated` prints a header before each group and echoes nothing.

use crate::adapter::BirdAdapter;
use crate::bird::{Bird, BirdVoice, Sparrow};
use crate::console::{BufferConsole, Console, ConsoleError, ConsoleResult};
use crate::toy::{PlayDuck, ToyDuck};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

/// Errors from running a demo script.
#[derive(Debug, Error)]
pub enum DemoError {
    #[error("{step} failed: {source}")]
    Step {
        step: &'static str,
        #[source]
        source: ConsoleError,
    },

    #[error(transparent)]
    Console(#[from] ConsoleError),
}

/// Result type for demo runs
pub type DemoResult<T> = Result<T, DemoError>;

/// Which walkthrough to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Script {
    #[default]
    Classic,
    Narrated,
}

impl Script {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Narrated => "narrated",
        }
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Script {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "classic" => Ok(Self::Classic),
            "narrated" => Ok(Self::Narrated),
            other => Err(format!("unknown script: {}", other)),
        }
    }
}

/// How a call's return value is shown when echoed.
pub trait Echo {
    fn echo(&self) -> String;
}

impl Echo for () {
    fn echo(&self) -> String {
        "None".to_string()
    }
}

/// Run one call, optionally echoing its return value afterwards.
fn call<T: Echo>(
    console: &dyn Console,
    echo: bool,
    step: &'static str,
    f: impl FnOnce() -> ConsoleResult<T>,
) -> DemoResult<()> {
    debug!(step, "calling");
    let value = f().map_err(|source| DemoError::Step { step, source })?;
    if echo {
        console.line(&value.echo())?;
    }
    Ok(())
}

/// Run `script` against `console`.
pub fn run(script: Script, console: &dyn Console) -> DemoResult<()> {
    debug!(%script, "running demo");
    match script {
        Script::Classic => run_classic(console),
        Script::Narrated => run_narrated(console),
    }
}

fn run_classic(console: &dyn Console) -> DemoResult<()> {
    let bird = Sparrow::new(BirdVoice::classic());
    let toy = PlayDuck::classic();
    let bird_adapter = BirdAdapter::new(&bird).with_announcement("Adapter.....");

    call(console, true, "bird.fly", || bird.fly(console))?;
    call(console, true, "bird.make_sound", || bird.make_sound(console))?;
    call(console, true, "toy.squeak", || toy.squeak(console))?;
    call(console, true, "adapter.squeak", || bird_adapter.squeak(console))?;
    Ok(())
}

fn run_narrated(console: &dyn Console) -> DemoResult<()> {
    let sparrow = Sparrow::new(BirdVoice::narrated());
    let toy_duck = PlayDuck::narrated();
    // wrapped bird behaves like a toy
    let bird_adapter: Box<dyn ToyDuck + '_> = Box::new(BirdAdapter::new(&sparrow));

    console.line("Sparrow...")?;
    call(console, false, "sparrow.fly", || sparrow.fly(console))?;
    call(console, false, "sparrow.make_sound", || sparrow.make_sound(console))?;

    console.line("Toy Duck...")?;
    call(console, false, "toy_duck.squeak", || toy_duck.squeak(console))?;

    console.line("Bird Adapter...")?;
    call(console, false, "adapter.squeak", || bird_adapter.squeak(console))?;
    Ok(())
}

/// The lines `script` writes, collected in memory.
pub fn transcript(script: Script) -> DemoResult<Vec<String>> {
    let console = BufferConsole::new();
    run(script, &console)?;
    Ok(console.lines())
}
