//! Console boundary
//!
//! All prompts, status lines and keypress pauses go through [`Console`] so the
//! swap pipeline can run against an in-memory console in tests.

use std::io::{self, BufRead, Write};

pub trait Console {
    /// Print one status line
    fn say(&mut self, line: &str);

    /// Print `text` without a newline and read one line of input.
    /// Returns `Ok(None)` on end of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>>;

    /// Block until the user presses enter
    fn pause(&mut self);
}

pub struct StdConsole<R, W> {
    input: R,
    output: W,
    pause_enabled: bool,
}

impl StdConsole<io::StdinLock<'static>, io::Stdout> {
    pub fn terminal() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> StdConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pause_enabled: true,
        }
    }

    pub fn with_pause(mut self, enabled: bool) -> Self {
        self.pause_enabled = enabled;
        self
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

impl<R: BufRead, W: Write> Console for StdConsole<R, W> {
    fn say(&mut self, line: &str) {
        if let Err(e) = writeln!(self.output, "{}", line).and_then(|_| self.output.flush()) {
            log::debug!("[console] write failed: {}", e);
        }
    }

    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        self.read_line()
    }

    fn pause(&mut self) {
        if !self.pause_enabled {
            return;
        }
        if let Err(e) = self.read_line() {
            log::debug!("[console] pause read failed: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_reads_one_line() {
        let mut console = StdConsole::new(Cursor::new("https://a/b.mp4\r\nrest\n"), Vec::new());
        let answer = console.prompt("url: ").unwrap();
        assert_eq!(answer.as_deref(), Some("https://a/b.mp4"));

        let out = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(out, "url: ");
    }

    #[test]
    fn test_prompt_eof_is_none() {
        let mut console = StdConsole::new(Cursor::new(""), Vec::new());
        assert_eq!(console.prompt("url: ").unwrap(), None);
    }

    #[test]
    fn test_pause_consumes_a_line() {
        let mut console = StdConsole::new(Cursor::new("\nsecond\n"), Vec::new());
        console.pause();
        assert_eq!(console.prompt("").unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn test_disabled_pause_consumes_nothing() {
        let mut console = StdConsole::new(Cursor::new("first\n"), Vec::new()).with_pause(false);
        console.pause();
        assert_eq!(console.prompt("").unwrap().as_deref(), Some("first"));
    }

    #[test]
    fn test_say_appends_newline() {
        let mut console = StdConsole::new(Cursor::new(""), Vec::new());
        console.say("renaming old intro");
        console.say("success");
        let out = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(out, "renaming old intro\nsuccess\n");
    }
}
