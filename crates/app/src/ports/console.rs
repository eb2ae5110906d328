//! Console port — line-oriented input and text output.
//!
//! The session talks to the user exclusively through this trait. The stdio
//! adapter implements it for a real terminal; tests implement it with a
//! scripted queue of lines.

use std::fmt::Display;
use std::io;

/// Line-oriented, blocking user interaction.
pub trait Console {
    /// Read the next line without its trailing newline.
    ///
    /// Returns `Ok(None)` once the input is exhausted.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error.
    fn read_line(&mut self) -> io::Result<Option<String>>;

    /// Write `text` verbatim. Implementations flush so prompts show up
    /// before the next read.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error.
    fn write_str(&mut self, text: &str) -> io::Result<()>;

    /// Write `line` followed by a newline.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error.
    fn say(&mut self, line: impl Display) -> io::Result<()> {
        self.write_str(&format!("{line}\n"))
    }

    /// Write `text` and read the answer.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        self.write_str(text)?;
        self.read_line()
    }
}

impl<T: Console> Console for &mut T {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        (**self).read_line()
    }

    fn write_str(&mut self, text: &str) -> io::Result<()> {
        (**self).write_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    #[derive(Default)]
    struct Recording {
        input: VecDeque<String>,
        output: String,
    }

    impl Console for Recording {
        fn read_line(&mut self) -> io::Result<Option<String>> {
            Ok(self.input.pop_front())
        }

        fn write_str(&mut self, text: &str) -> io::Result<()> {
            self.output.push_str(text);
            Ok(())
        }
    }

    #[test]
    fn should_append_newline_when_saying() {
        let mut console = Recording::default();
        console.say(42).unwrap();
        assert_eq!(console.output, "42\n");
    }

    #[test]
    fn should_write_prompt_before_reading() {
        let mut console = Recording::default();
        console.input.push_back("answer".to_string());
        let answer = console.prompt("Question? ").unwrap();
        assert_eq!(answer.as_deref(), Some("answer"));
        assert_eq!(console.output, "Question? ");
    }

    fn greet<C: Console>(mut console: C) -> io::Result<Option<String>> {
        console.say("hi")?;
        console.read_line()
    }

    #[test]
    fn should_forward_through_mutable_reference() {
        let mut console = Recording::default();
        assert_eq!(greet(&mut console).unwrap(), None);
        assert_eq!(console.output, "hi\n");
    }
}
