//! # Console I/O
//!
//! Line-oriented prompt/response over any `BufRead` + `Write` pair.
//!
//! The menu loop talks to the operator only through [`Prompter`], so the
//! binary wires it to the locked stdin/stdout while tests wire it to an
//! in-memory `Cursor` and a `Vec<u8>`.
//!
//! ## Input Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  prompt("Enter quantity: ")   writes the label, flushes, no newline     │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  read_line()                  one line per prompt, newline stripped     │
//! │         │                                                               │
//! │         ├── 0 bytes read   ──► ConsoleError::EndOfInput                 │
//! │         ├── "abc" as number ─► ConsoleError::InvalidInput               │
//! │         └── "5"            ──► Ok(5)                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt::Display;
use std::io::{BufRead, Write};

use kirana_core::Money;

use crate::error::{ConsoleError, ConsoleResult};

/// Prompt/response channel to the operator.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    /// Writes one line of output.
    pub fn say(&mut self, text: impl Display) -> ConsoleResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Writes a prompt label without a newline and flushes it.
    pub fn prompt(&mut self, label: &str) -> ConsoleResult<()> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;
        Ok(())
    }

    /// Reads one line with the line terminator removed.
    pub fn read_line(&mut self) -> ConsoleResult<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ConsoleError::EndOfInput);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    /// Prompts and reads a line of free text.
    pub fn ask_text(&mut self, label: &str) -> ConsoleResult<String> {
        self.prompt(label)?;
        self.read_line()
    }

    /// Prompts and reads a whole number.
    pub fn ask_number(&mut self, label: &str) -> ConsoleResult<i64> {
        let text = self.ask_text(label)?;
        text.trim()
            .parse()
            .map_err(|_| ConsoleError::InvalidInput(text))
    }

    /// Prompts and reads a price such as `10` or `10.50`.
    pub fn ask_money(&mut self, label: &str) -> ConsoleResult<Money> {
        let text = self.ask_text(label)?;
        Ok(text.parse::<Money>()?)
    }

    /// Reads an optional price change: a blank line yields `None`, and a
    /// sign is accepted so the caller can treat `-5` as "keep current".
    pub fn ask_price_change(&mut self, label: &str) -> ConsoleResult<Option<Money>> {
        let text = self.ask_text(label)?;
        if text.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(Money::parse_signed(&text)?))
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn written(p: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(p.into_parts().1).unwrap()
    }

    #[test]
    fn test_prompt_has_no_newline() {
        let mut p = prompter("");
        p.prompt("Enter your choice: ").unwrap();
        p.say("done").unwrap();
        assert_eq!(written(p), "Enter your choice: done\n");
    }

    #[test]
    fn test_read_line_strips_terminators() {
        let mut p = prompter("USB Cable\r\nnext\n");
        assert_eq!(p.read_line().unwrap(), "USB Cable");
        assert_eq!(p.read_line().unwrap(), "next");
        assert!(matches!(p.read_line(), Err(ConsoleError::EndOfInput)));
    }

    #[test]
    fn test_ask_number() {
        let mut p = prompter(" 42 \nfive\n");
        assert_eq!(p.ask_number("n: ").unwrap(), 42);
        assert!(matches!(
            p.ask_number("n: "),
            Err(ConsoleError::InvalidInput(text)) if text == "five"
        ));
    }

    #[test]
    fn test_ask_money() {
        let mut p = prompter("10.50\n-5\n\n-5\n12.345\n");
        assert_eq!(p.ask_money("₹").unwrap(), Money::from_paise(1050));
        assert!(p.ask_money("₹").is_err());
        assert_eq!(p.ask_price_change("₹").unwrap(), None);
        assert_eq!(p.ask_price_change("₹").unwrap(), Some(Money::from_rupees(-5)));
        let err = p.ask_price_change("₹").unwrap_err();
        assert!(matches!(err, ConsoleError::Core(_)));
    }

    #[test]
    fn test_last_line_without_newline() {
        let mut p = prompter("9");
        assert_eq!(p.ask_number("").unwrap(), 9);
    }
}
