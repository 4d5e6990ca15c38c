//! bird-adapter: the Adapter pattern, end to end
//!
//! A `Sparrow` speaks the `Bird` interface (`fly`, `make_sound`). Callers
//! that expect a `ToyDuck` (`squeak`) can still use it once it is wrapped in
//! a `BirdAdapter`.
//!
//! # Core Concepts
//!
//! - **Console**: every line of output goes through a `Console` sink
//! - **Bird / ToyDuck**: the two incompatible interfaces
//! - **BirdAdapter**: implements `ToyDuck` by delegating to a `Bird`
//! - **Script**: a fixed walkthrough that exercises all three
//!
//! # Example
//!
//! ```
//! use bird_adapter::{BirdAdapter, BufferConsole, Sparrow, ToyDuck};
//!
//! let console = BufferConsole::new();
//! let adapter = BirdAdapter::new(Sparrow::default());
//! adapter.squeak(&console).unwrap();
//! assert_eq!(console.lines(), vec!["Bird chirp...chirp.."]);
//! ```

mod adapter;
mod bird;
mod console;
pub mod demo;
mod toy;

pub use adapter::{squeak_all, BirdAdapter};
pub use bird::{Bird, BirdVoice, Sparrow};
pub use console::{BufferConsole, Console, ConsoleError, ConsoleResult, FileConsole, StdoutConsole};
pub use demo::{run, transcript, DemoError, DemoResult, Script};
pub use toy::{PlayDuck, ToyDuck};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
