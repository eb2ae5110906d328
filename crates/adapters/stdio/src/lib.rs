//! # labdev-adapter-stdio
//!
//! [`Console`] implementation over a buffered reader and a writer.
//!
//! Production wiring uses [`StdioConsole::stdio`]; tests hand in an
//! in-memory reader and a `Vec<u8>` writer.
//!
//! ## Dependency rule
//!
//! Depends on `labdev-app` (port trait) only.

use std::io::{self, BufRead, Write};

use labdev_app::ports::Console;

/// Line-oriented console over `reader` and `writer`.
pub struct StdioConsole<R, W> {
    reader: R,
    writer: W,
}

impl StdioConsole<io::StdinLock<'static>, io::Stdout> {
    /// Console bound to the process's standard input and output.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> StdioConsole<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Give back the writer, e.g. to inspect captured output.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> Console for StdioConsole<R, W> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn write_str(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()
    }
}
