use std::io::{self, BufRead, Write};

use crate::atm::{LoginPhase, LoginPrompt};

/// Line-oriented terminal over any reader and writer.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `label` without a newline and read one trimmed line.
    /// Returns `None` at end of input.
    pub fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_owned()))
    }

    pub fn say(&mut self, text: impl std::fmt::Display) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> LoginPrompt for Console<R, W> {
    fn read(&mut self, phase: LoginPhase) -> io::Result<Option<String>> {
        match phase {
            LoginPhase::Username => self.prompt("Enter Username: "),
            LoginPhase::Pin => self.prompt("Enter PIN: "),
        }
    }

    fn rejected(&mut self, phase: LoginPhase, _remaining: u8) -> io::Result<()> {
        match phase {
            LoginPhase::Username => self.say("Invalid Username. Please try again."),
            LoginPhase::Pin => self.say("Invalid PIN. Please try again."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_writes_label_and_trims_answer() {
        let mut console = Console::new(Cursor::new("  hello \n"), Vec::new());

        assert_eq!(console.prompt("Name: ").unwrap().as_deref(), Some("hello"));
        assert_eq!(console.into_output(), b"Name: ");
    }

    #[test]
    fn test_prompt_returns_none_at_end_of_input() {
        let mut console = Console::new(Cursor::new(""), Vec::new());
        assert_eq!(console.prompt("Name: ").unwrap(), None);
    }

    #[test]
    fn test_last_line_without_newline_is_read() {
        let mut console = Console::new(Cursor::new("5"), Vec::new());
        assert_eq!(console.prompt("> ").unwrap().as_deref(), Some("5"));
    }

    #[test]
    fn test_rejection_messages() {
        let mut console = Console::new(Cursor::new(""), Vec::new());
        console.rejected(LoginPhase::Username, 2).unwrap();
        console.rejected(LoginPhase::Pin, 1).unwrap();

        let output = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(
            output,
            "Invalid Username. Please try again.\nInvalid PIN. Please try again.\n"
        );
    }
}
