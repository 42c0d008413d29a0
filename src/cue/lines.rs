use std::io::{self, BufRead};

/// Forward-only reader yielding trimmed, non-blank lines.
///
/// Only the line currently being read is buffered. The physical line number of the
/// last returned line is kept for error reporting.
pub struct LineSource<R> {
    reader: R,
    buf: String,
    line_number: usize,
}

impl<R: BufRead> LineSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: String::new(),
            line_number: 0,
        }
    }

    /// Return the next non-blank line with surrounding whitespace removed, together
    /// with its physical line number, or `None` once the stream is exhausted.
    pub fn next_line(&mut self) -> io::Result<Option<(usize, &str)>> {
        loop {
            self.buf.clear();
            if self.reader.read_line(&mut self.buf)? == 0 {
                return Ok(None);
            }
            self.line_number += 1;
            if !self.buf.trim().is_empty() {
                return Ok(Some((self.line_number, self.buf.trim())));
            }
        }
    }

    /// Physical (1-based) number of the last line read, blank or not.
    pub fn line_number(&self) -> usize {
        self.line_number
    }
}
