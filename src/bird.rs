//! Bird — the interface the adapter wraps

use crate::console::{Console, ConsoleResult};

/// A bird can fly and make a sound.
pub trait Bird: Send + Sync {
    fn fly(&self, console: &dyn Console) -> ConsoleResult<()>;

    fn make_sound(&self, console: &dyn Console) -> ConsoleResult<()>;
}

impl<B: Bird + ?Sized> Bird for &B {
    fn fly(&self, console: &dyn Console) -> ConsoleResult<()> {
        (**self).fly(console)
    }

    fn make_sound(&self, console: &dyn Console) -> ConsoleResult<()> {
        (**self).make_sound(console)
    }
}

impl<B: Bird + ?Sized> Bird for Box<B> {
    fn fly(&self, console: &dyn Console) -> ConsoleResult<()> {
        (**self).fly(console)
    }

    fn make_sound(&self, console: &dyn Console) -> ConsoleResult<()> {
        (**self).make_sound(console)
    }
}

/// The two lines a bird writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirdVoice {
    pub flight: String,
    pub call: String,
}

impl BirdVoice {
    pub fn new(flight: impl Into<String>, call: impl Into<String>) -> Self {
        Self {
            flight: flight.into(),
            call: call.into(),
        }
    }

    pub fn classic() -> Self {
        Self::new("Bird Flying...", "Bird chirp...chirp..")
    }

    pub fn narrated() -> Self {
        Self::new("Flying...", "Chirp..Chirp...")
    }
}

impl Default for BirdVoice {
    fn default() -> Self {
        Self::classic()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Sparrow {
    voice: BirdVoice,
}

impl Sparrow {
    pub fn new(voice: BirdVoice) -> Self {
        Self { voice }
    }

    pub fn voice(&self) -> &BirdVoice {
        &self.voice
    }
}

impl Bird for Sparrow {
    fn fly(&self, console: &dyn Console) -> ConsoleResult<()> {
        console.line(&self.voice.flight)
    }

    fn make_sound(&self, console: &dyn Console) -> ConsoleResult<()> {
        console.line(&self.voice.call)
    }
}
