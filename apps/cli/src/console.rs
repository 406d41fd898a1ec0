//! # Console
//!
//! Line-oriented prompts over any `BufRead` / `Write` pair, so the menu runs
//! the same against a terminal and against scripted input in tests.
//!
//! ## Prompt Loop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  prompt_until("Correo: ", "correo", parse_email)                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  print prompt ──► read line ──► parse                                  │
//! │       ▲               │            │                                    │
//! │       │               │ EOF        ├── Ok(value) ──► return            │
//! │       │               ▼            │                                    │
//! │       │         InputClosed        └── Err ──► RetryPolicy allows?     │
//! │       │                                          │           │          │
//! │       └──────────────────────────────────────── yes          no         │
//! │                                                              ▼          │
//! │                                                   RetriesExhausted      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};
use tracing::debug;

use crate::error::{AppError, AppResult};
use factura_core::validation::ValidationResult;

/// Width of the `=` rule around section titles.
const TITLE_RULE_WIDTH: usize = 39;

// =============================================================================
// Retry Policy
// =============================================================================

/// How many times a rejected answer is asked again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RetryPolicy {
    /// Ask until the answer is valid.
    #[default]
    Unbounded,

    /// Ask again at most this many times after the first rejection.
    Limited(u32),
}

impl RetryPolicy {
    /// Whether another attempt is allowed after `failures` rejections.
    pub fn allows_retry(&self, failures: u32) -> bool {
        match self {
            RetryPolicy::Unbounded => true,
            RetryPolicy::Limited(max) => failures <= *max,
        }
    }
}

// =============================================================================
// Console
// =============================================================================

/// Interactive console.
pub struct Console<R, W> {
    input: R,
    output: W,
    policy: RetryPolicy,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console over `input` and `output`.
    pub fn new(input: R, output: W, policy: RetryPolicy) -> Self {
        Console {
            input,
            output,
            policy,
        }
    }

    /// Output sink, for `write!`/`writeln!`.
    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    /// Consumes the console and returns the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Reads one line without its line terminator.
    ///
    /// End of input is [`AppError::InputClosed`].
    pub fn read_line(&mut self) -> AppResult<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(AppError::InputClosed);
        }

        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    /// Prints `prompt` (no newline) and reads the answer.
    pub fn prompt_line(&mut self, prompt: &str) -> AppResult<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        self.read_line()
    }

    /// Asks until `parse` accepts the answer or the retry policy gives up.
    ///
    /// Rejected answers are not reported to the user; the prompt is simply
    /// shown again.
    pub fn prompt_until<T, F>(&mut self, prompt: &str, field: &str, mut parse: F) -> AppResult<T>
    where
        F: FnMut(&str) -> ValidationResult<T>,
    {
        let mut failures = 0;
        loop {
            let line = self.prompt_line(prompt)?;
            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    debug!(field, error = %e, "Answer rejected");
                    self.reject(&mut failures, field)?;
                }
            }
        }
    }

    /// Counts one rejected answer for `field` and fails once the retry
    /// policy is exhausted.
    pub fn reject(&mut self, failures: &mut u32, field: &str) -> AppResult<()> {
        *failures += 1;
        if self.policy.allows_retry(*failures) {
            Ok(())
        } else {
            Err(AppError::RetriesExhausted {
                field: field.to_string(),
            })
        }
    }

    /// Prints a section title between two rules.
    pub fn title(&mut self, title: &str) -> AppResult<()> {
        let rule = "=".repeat(TITLE_RULE_WIDTH);
        write!(self.output, "\n{rule}\n  {title}\n{rule}\n")?;
        Ok(())
    }

    /// Prints `Presione Enter...` and waits for a line.
    pub fn pause(&mut self) -> AppResult<()> {
        self.prompt_line("Presione Enter...").map(|_| ())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use factura_core::validation::parse_national_id;
    use std::io::Cursor;

    pub(crate) fn console(input: &str, policy: RetryPolicy) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), policy)
    }

    pub(crate) fn output(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_read_line_strips_terminator() {
        let mut c = console("hola\r\nmundo\n", RetryPolicy::Unbounded);
        assert_eq!(c.read_line().unwrap(), "hola");
        assert_eq!(c.read_line().unwrap(), "mundo");
        assert!(matches!(c.read_line(), Err(AppError::InputClosed)));
    }

    #[test]
    fn test_last_line_without_newline() {
        let mut c = console("fin", RetryPolicy::Unbounded);
        assert_eq!(c.read_line().unwrap(), "fin");
    }

    #[test]
    fn test_prompt_until_reprompts() {
        let mut c = console("123\nabcdefghij\n0102030405\n", RetryPolicy::Unbounded);
        let id = c
            .prompt_until("Cédula (10 dígitos): ", "cédula", parse_national_id)
            .unwrap();
        assert_eq!(id, "0102030405");
        assert_eq!(output(c), "Cédula (10 dígitos): ".repeat(3));
    }

    #[test]
    fn test_limited_policy_gives_up() {
        let mut c = console("x\ny\nz\n0102030405\n", RetryPolicy::Limited(2));
        let result = c.prompt_until("Cédula: ", "cédula", parse_national_id);
        assert!(matches!(
            result,
            Err(AppError::RetriesExhausted { field }) if field == "cédula"
        ));
    }

    #[test]
    fn test_limited_policy_allows_retries() {
        let mut c = console("x\ny\n0102030405\n", RetryPolicy::Limited(2));
        assert!(c.prompt_until("Cédula: ", "cédula", parse_national_id).is_ok());
    }

    #[test]
    fn test_prompt_until_input_closed() {
        let mut c = console("x\n", RetryPolicy::Unbounded);
        let result = c.prompt_until("Cédula: ", "cédula", parse_national_id);
        assert!(matches!(result, Err(AppError::InputClosed)));
    }

    #[test]
    fn test_title_and_pause() {
        let mut c = console("\n", RetryPolicy::Unbounded);
        c.title("LISTA DE CLIENTES").unwrap();
        c.pause().unwrap();

        let rule = "=".repeat(39);
        assert_eq!(
            output(c),
            format!("\n{rule}\n  LISTA DE CLIENTES\n{rule}\nPresione Enter...")
        );
    }
}
