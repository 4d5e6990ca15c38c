//! ToyDuck — the interface callers expect

use crate::console::{Console, ConsoleResult};

/// A toy duck squeaks.
pub trait ToyDuck: Send + Sync {
    fn squeak(&self, console: &dyn Console) -> ConsoleResult<()>;
}

impl<T: ToyDuck + ?Sized> ToyDuck for &T {
    fn squeak(&self, console: &dyn Console) -> ConsoleResult<()> {
        (**self).squeak(console)
    }
}

impl<T: ToyDuck + ?Sized> ToyDuck for Box<T> {
    fn squeak(&self, console: &dyn Console) -> ConsoleResult<()> {
        (**self).squeak(console)
    }
}

/// A plastic duck with a fixed squeak.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayDuck {
    sound: String,
}

impl PlayDuck {
    pub fn new(sound: impl Into<String>) -> Self {
        Self {
            sound: sound.into(),
        }
    }

    pub fn classic() -> Self {
        Self::new("Toy Squeaking...")
    }

    pub fn narrated() -> Self {
        Self::new("Squeak...")
    }

    pub fn sound(&self) -> &str {
        &self.sound
    }
}

impl Default for PlayDuck {
    fn default() -> Self {
        Self::classic()
    }
}

impl ToyDuck for PlayDuck {
    fn squeak(&self, console: &dyn Console) -> ConsoleResult<()> {
        console.line(&self.sound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::BufferConsole;

    #[test]
    fn classic_duck_squeaks() {
        let console = BufferConsole::new();
        PlayDuck::classic().squeak(&console).unwrap();
        assert_eq!(console.lines(), vec!["Toy Squeaking..."]);
    }

    #[test]
    fn narrated_duck_squeaks() {
        let console = BufferConsole::new();
        PlayDuck::narrated().squeak(&console).unwrap();
        assert_eq!(console.lines(), vec!["Squeak..."]);
    }
}
