//! Line input for the command loop and the debug prompts.
//!
//! Both read from the same terminal and must go through the shared
//! [`io::Stdin`] buffer, never a private `BufReader`.

pub mod prompt;
pub use prompt::PromptDecisions;

use std::io::{self, BufRead};

/// Source of input lines.
pub trait LineReader {
    /// Read the next line without its line ending. `None` at end of input.
    fn next_line(&mut self) -> io::Result<Option<String>>;
}

impl LineReader for io::Stdin {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        match io::Stdin::read_line(self, &mut line)? {
            0 => Ok(None),
            _ => Ok(Some(strip_newline(line))),
        }
    }
}

impl<T: AsRef<[u8]>> LineReader for io::Cursor<T> {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        match BufRead::read_line(self, &mut line)? {
            0 => Ok(None),
            _ => Ok(Some(strip_newline(line))),
        }
    }
}

fn strip_newline(mut line: String) -> String {
    while line.ends_with(['\n', '\r']) {
        line.pop();
    }
    line
}
