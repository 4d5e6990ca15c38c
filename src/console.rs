//! Console sink — where every line of demo output goes
//!
//! Birds, toys and adapters never print directly. They write through a
//! `Console`, so a run can target stdout, a file, or an in-memory buffer.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::sync::Mutex;
use thiserror::Error;

/// Errors raised while writing a line.
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),

    #[error("console lock poisoned")]
    Poisoned,
}

/// Result type for console writes
pub type ConsoleResult<T> = Result<T, ConsoleError>;

/// The interface all demo text is written through.
pub trait Console: Send + Sync {
    /// Write one line of text. The console supplies the line terminator.
    fn line(&self, text: &str) -> ConsoleResult<()>;
}

impl<C: Console + ?Sized> Console for &C {
    fn line(&self, text: &str) -> ConsoleResult<()> {
        (**self).line(text)
    }
}

/// Writes lines to the process's standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutConsole;

impl StdoutConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for StdoutConsole {
    fn line(&self, text: &str) -> ConsoleResult<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{}", text)?;
        out.flush()?;
        Ok(())
    }
}

/// Writes lines into a file, truncating it on creation.
#[derive(Debug)]
pub struct FileConsole {
    writer: Mutex<BufWriter<File>>,
}

impl FileConsole {
    pub fn create(path: impl AsRef<Path>) -> ConsoleResult<Self> {
        let file = File::create(path.as_ref())?;
        Ok(Self {
            writer: Mutex::new(BufWriter::new(file)),
        })
    }

    /// Flush buffered lines to disk.
    pub fn flush(&self) -> ConsoleResult<()> {
        let mut writer = self.writer.lock().map_err(|_| ConsoleError::Poisoned)?;
        writer.flush()?;
        Ok(())
    }
}

impl Console for FileConsole {
    fn line(&self, text: &str) -> ConsoleResult<()> {
        let mut writer = self.writer.lock().map_err(|_| ConsoleError::Poisoned)?;
        writeln!(writer, "{}", text)?;
        Ok(())
    }
}

/// Records lines in memory. Used by tests and by callers that want the
/// transcript as data.
#[derive(Debug, Default)]
pub struct BufferConsole {
    lines: Mutex<Vec<String>>,
}

impl BufferConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the lines written so far.
    pub fn lines(&self) -> Vec<String> {
        match self.lines.lock() {
            Ok(lines) => lines.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// The lines joined as they would appear on a terminal.
    pub fn text(&self) -> String {
        self.lines()
            .iter()
            .map(|l| format!("{}\n", l))
            .collect()
    }
}

impl Console for BufferConsole {
    fn line(&self, text: &str) -> ConsoleResult<()> {
        let mut lines = self.lines.lock().map_err(|_| ConsoleError::Poisoned)?;
        lines.push(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_records_lines_in_order() {
        let console = BufferConsole::new();
        console.line("first").unwrap();
        console.line("second").unwrap();
        assert_eq!(console.lines(), vec!["first", "second"]);
        assert_eq!(console.text(), "first\nsecond\n");
    }

    #[test]
    fn empty_buffer_has_no_text() {
        let console = BufferConsole::new();
        assert!(console.lines().is_empty());
        assert_eq!(console.text(), "");
    }

    #[test]
    fn reference_forwards_to_console() {
        let console = BufferConsole::new();
        let by_ref: &dyn Console = &console;
        by_ref.line("via ref").unwrap();
        assert_eq!(console.lines(), vec!["via ref"]);
    }

    #[test]
    fn file_console_writes_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");

        let console = FileConsole::create(&path).unwrap();
        console.line("one").unwrap();
        console.line("two").unwrap();
        console.flush().unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "one\ntwo\n");
    }

    #[test]
    fn file_console_fails_for_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.txt");

        let err = FileConsole::create(&path).unwrap_err();
        assert!(matches!(err, ConsoleError::Io(_)));
    }
}
