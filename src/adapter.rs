//! BirdAdapter — lets a bird stand in wherever a toy duck is expected
//!
//! The adapter holds one bird and implements `ToyDuck` by delegating
//! `squeak` to the bird's `make_sound`. Neither the bird nor the toy-duck
//! interface is modified.

use crate::bird::Bird;
use crate::console::{Console, ConsoleResult};
use crate::toy::ToyDuck;
use tracing::trace;

/// Wraps a `Bird` so it can be used as a `ToyDuck`.
#[derive(Debug, Clone)]
pub struct BirdAdapter<B> {
    bird: B,
    announcement: Option<String>,
}

impl<B: Bird> BirdAdapter<B> {
    /// Wrap a bird. The adapter writes nothing of its own.
    pub fn new(bird: B) -> Self {
        Self {
            bird,
            announcement: None,
        }
    }

    /// Line written before every delegated squeak.
    pub fn with_announcement(mut self, line: impl Into<String>) -> Self {
        self.announcement = Some(line.into());
        self
    }

    pub fn announcement(&self) -> Option<&str> {
        self.announcement.as_deref()
    }

    pub fn bird(&self) -> &B {
        &self.bird
    }

    pub fn into_inner(self) -> B {
        self.bird
    }
}

impl<B: Bird> ToyDuck for BirdAdapter<B> {
    fn squeak(&self, console: &dyn Console) -> ConsoleResult<()> {
        if let Some(line) = &self.announcement {
            console.line(line)?;
        }
        trace!("adapter delegating squeak to make_sound");
        self.bird.make_sound(console)
    }
}

/// Squeak every toy in order, stopping at the first failed write.
///
/// Accepts plain toys and adapted birds alike.
pub fn squeak_all(toys: &[&dyn ToyDuck], console: &dyn Console) -> ConsoleResult<()> {
    for toy in toys {
        toy.squeak(console)?;
    }
    Ok(())
}
