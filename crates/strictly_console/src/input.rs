//! Line-based keyboard input.

use std::io::BufRead;
use strictly_tictactoe::{LineSource, SessionError};
use tracing::{instrument, trace};

/// Reads one line per turn from any buffered reader (stdin in practice).
///
/// Bytes that are not valid UTF-8 become U+FFFD, so a garbled line reaches
/// the parser as an ordinary bad command instead of ending the session.
#[derive(Debug)]
pub struct LineReader<R> {
    reader: R,
}

impl<R: BufRead> LineReader<R> {
    /// Wraps a buffered reader.
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl LineReader<std::io::StdinLock<'static>> {
    /// Reads from the process's standard input.
    pub fn stdin() -> Self {
        Self::new(std::io::stdin().lock())
    }
}

impl<R: BufRead> LineSource for LineReader<R> {
    #[instrument(skip(self))]
    fn read_line(&mut self) -> Result<Option<String>, SessionError> {
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf).into_owned();
        trace!(line = line.trim_end(), "Read line");
        Ok(Some(line))
    }
}
