//! Interactive prompts for collecting todo fields
//!
//! Prompt labels are written to stderr so stdout stays reserved for todo
//! contents. The reader/writer pair is generic to keep the loops testable.

use std::io::{self, BufRead, Write};

use crate::error::{Result, TasklistError};

/// Line-oriented prompter over a reader/writer pair
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<io::StdinLock<'static>, io::Stderr> {
    /// Prompter bound to the process stdin and stderr
    pub fn stdio() -> Self {
        Self {
            input: io::stdin().lock(),
            output: io::stderr(),
        }
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Prompter over arbitrary reader/writer, for tests
    #[cfg(test)]
    pub fn from_parts(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask until a non-empty value is supplied.
    ///
    /// End of input before a value arrives is an error; the caller cannot
    /// proceed without one.
    pub fn required(&mut self, label: &str) -> Result<String> {
        loop {
            write!(self.output, "{}: ", label)?;
            self.output.flush()?;

            match self.read_line()? {
                None => {
                    return Err(TasklistError::Input(format!(
                        "unexpected end of input while reading '{}'",
                        label
                    )))
                }
                Some(line) if line.is_empty() => {
                    writeln!(self.output, "A value is required.")?;
                }
                Some(line) => return Ok(line),
            }
        }
    }

    /// Ask once; empty input (or end of input) keeps the default.
    pub fn with_default(&mut self, label: &str, default: &str) -> Result<String> {
        write!(self.output, "{} [{}]: ", label, default)?;
        self.output.flush()?;

        match self.read_line()? {
            None => Ok(default.to_string()),
            Some(line) if line.is_empty() => Ok(default.to_string()),
            Some(line) => Ok(line),
        }
    }

    /// Collect tasks until the first empty entry (or end of input).
    ///
    /// Returns the tasks accumulated so far, possibly none.
    pub fn task_list(&mut self) -> Result<Vec<String>> {
        let mut items = Vec::new();
        loop {
            write!(self.output, "Task (leave empty to finish): ")?;
            self.output.flush()?;

            match self.read_line()? {
                None => return Ok(items),
                Some(line) if line.is_empty() => return Ok(items),
                Some(line) => items.push(line),
            }
        }
    }

    /// Read one line, trimming the trailing newline. None means end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = String::new();
        let bytes = self.input.read_line(&mut buf)?;
        if bytes == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim_end_matches(['\r', '\n']).to_string()))
    }
}
