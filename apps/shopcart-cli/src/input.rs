//! Line-oriented input.
//!
//! The session never touches stdin directly; it reads through
//! [`LineSource`], which every `BufRead` implements. Production passes a
//! locked stdin, tests pass a `Cursor` over a script.

use std::io::{self, BufRead};

/// A source of input lines.
pub trait LineSource {
    /// Reads the next line without its `\n` / `\r\n` terminator.
    ///
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD rather than
    /// failing the read. Returns `Ok(None)` once the input is exhausted.
    fn next_line(&mut self) -> io::Result<Option<String>>;
}

impl<R: BufRead> LineSource for R {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }

        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }
}
