use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Line-oriented prompting over stdin.
///
/// Every prompt returns `Ok(None)` on end of input, which callers treat as
/// quit/cancel. Numeric prompts re-prompt on a failed coercion instead of
/// crashing, so the store only ever sees well-typed arguments.
pub struct Prompter {
    stdin: io::Stdin,
}

impl Prompter {
    pub fn new() -> Self {
        Self { stdin: io::stdin() }
    }

    pub fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        print!("{}", label);
        io::stdout().flush()?;

        let mut line = String::new();
        if self.stdin.lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    pub fn prompt_number(&mut self, label: &str) -> io::Result<Option<f64>> {
        loop {
            let Some(raw) = self.prompt(label)? else {
                return Ok(None);
            };
            match raw.parse::<f64>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => println!(
                    "{}",
                    format!("'{}' is not a number, try again.", raw).red()
                ),
            }
        }
    }

    pub fn prompt_index(&mut self, label: &str) -> io::Result<Option<usize>> {
        loop {
            let Some(raw) = self.prompt(label)? else {
                return Ok(None);
            };
            match raw.parse::<usize>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => println!(
                    "{}",
                    format!("'{}' is not an index, try again.", raw).red()
                ),
            }
        }
    }
}

impl Default for Prompter {
    fn default() -> Self {
        Self::new()
    }
}
