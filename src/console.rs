//! Line-based console prompts
//!
//! Generic over the reader and writer so sessions can be scripted in tests.

use std::io::{BufRead, Write};

use crate::error::{Error, Result};

/// ANSI clear screen + cursor home
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write text without a newline and flush
    pub fn print(&mut self, text: &str) -> Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    pub fn println(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }

    pub fn clear_screen(&mut self) -> Result<()> {
        self.print(CLEAR_SCREEN)
    }

    /// Read one line, without the trailing newline. End of input is
    /// `Error::InputClosed`.
    pub fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Error::InputClosed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Show `message` and return the trimmed answer
    pub fn prompt(&mut self, message: &str) -> Result<String> {
        self.print(message)?;
        Ok(self.read_line()?.trim().to_string())
    }

    /// Read an integer, re-prompting after `invalid` until one parses
    pub fn prompt_number(&mut self, message: &str, invalid: &str) -> Result<i64> {
        loop {
            let answer = self.prompt(message)?;
            match answer.parse::<i64>() {
                Ok(n) => return Ok(n),
                Err(_) => {
                    log::debug!("Rejected non-numeric input {:?}", answer);
                    self.println(invalid)?;
                }
            }
        }
    }

    /// Yes/no question; only an answer starting with `y` or `Y` is a yes.
    /// Blank lines are skipped.
    pub fn prompt_yes_no(&mut self, message: &str) -> Result<bool> {
        self.print(message)?;
        loop {
            let line = self.read_line()?;
            if let Some(c) = line.trim().chars().next() {
                return Ok(c.eq_ignore_ascii_case(&'y'));
            }
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_prompt_number_skips_garbage() {
        let mut c = console("abc\n\n 17 \n");
        let n = c.prompt_number("Guess: ", "Invalid input.").unwrap();
        assert_eq!(n, 17);
        let out = String::from_utf8(c.into_output()).unwrap();
        assert_eq!(out.matches("Guess: ").count(), 3);
        assert_eq!(out.matches("Invalid input.").count(), 2);
    }

    #[test]
    fn test_prompt_yes_no() {
        assert!(console("y\n").prompt_yes_no("? ").unwrap());
        assert!(console("Yes\n").prompt_yes_no("? ").unwrap());
        assert!(console("\n  \nY\n").prompt_yes_no("? ").unwrap());
        assert!(!console("n\n").prompt_yes_no("? ").unwrap());
        assert!(!console("sure\n").prompt_yes_no("? ").unwrap());
    }

    #[test]
    fn test_end_of_input() {
        assert!(matches!(
            console("").prompt("Name: "),
            Err(Error::InputClosed)
        ));
        assert!(matches!(
            console("x\n").prompt_number("n: ", "bad"),
            Err(Error::InputClosed)
        ));
    }

    #[test]
    fn test_read_line_strips_crlf() {
        assert_eq!(console("Amy\r\n").read_line().unwrap(), "Amy");
    }
}
