//! The read-eval-print loop.

use std::io::{BufRead, Write};

use remedybot_core::{KeywordParser, MedicineTable, ResponseComposer, validate};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::session::ChatSession;

/// Failures of the interactive streams. Conversational errors never show up
/// here; they are printed in-band and the loop keeps running.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Text surface of the shell.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Printed once before the first prompt.
    pub banner: String,
    /// Printed before each read, without a trailing newline.
    pub prompt: String,
    /// Printed when the session ends.
    pub farewell: String,
    /// Typed by the user to end the session, compared trimmed and lowercased.
    pub exit_command: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            banner: "Welcome to RemedyBot! I can help you find over-the-counter medicines."
                .to_string(),
            prompt: "Describe your issue (or type 'exit' to quit): ".to_string(),
            farewell: "Goodbye! Stay healthy.".to_string(),
            exit_command: "exit".to_string(),
        }
    }
}

impl ShellConfig {
    /// Set the banner line.
    #[must_use]
    pub fn with_banner(mut self, banner: String) -> Self {
        self.banner = banner;
        self
    }

    /// Set the per-turn prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: String) -> Self {
        self.prompt = prompt;
        self
    }

    /// Set the exit command.
    #[must_use]
    pub fn with_exit_command(mut self, command: String) -> Self {
        self.exit_command = command;
        self
    }
}

/// What one line of input turned into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The exit command; the caller prints the farewell and stops.
    Exit,
    /// Validation failed; the message is printed without a trailing blank line.
    Rejected(String),
    /// A composed reply; printed followed by one blank line.
    Reply(String),
}

/// Synchronous lookup shell over a read-only medicine table.
#[derive(Debug)]
pub struct Shell<'a> {
    config: ShellConfig,
    parser: KeywordParser<'a>,
    composer: ResponseComposer<'a>,
    session: ChatSession,
}

impl<'a> Shell<'a> {
    #[must_use]
    pub fn new(table: &'a MedicineTable) -> Self {
        Self::with_config(table, ShellConfig::default())
    }

    #[must_use]
    pub fn with_config(table: &'a MedicineTable, config: ShellConfig) -> Self {
        Self {
            config,
            parser: KeywordParser::new(table),
            composer: ResponseComposer::new(table),
            session: ChatSession::new(),
        }
    }

    /// The transcript recorded so far.
    #[must_use]
    pub const fn session(&self) -> &ChatSession {
        &self.session
    }

    /// Process one line of input.
    ///
    /// The line must arrive without its trailing newline but otherwise
    /// untrimmed; the validator distinguishes a zero-length line from a
    /// whitespace-only one.
    pub fn process_turn(&mut self, input: &str) -> TurnOutcome {
        if input.trim().to_lowercase() == self.config.exit_command {
            return TurnOutcome::Exit;
        }

        if let Err(error) = validate(input) {
            debug!(%error, "input rejected");
            return TurnOutcome::Rejected(error.to_string());
        }

        let parsed = self.parser.parse(input);
        debug!(country = ?parsed.country, ailment = ?parsed.ailment, "keywords extracted");

        let reply = self.composer.compose(&parsed);
        self.session.add_exchange(input, &reply);
        TurnOutcome::Reply(reply)
    }

    /// Drive the loop over arbitrary streams until exit or end of input.
    ///
    /// A closed input stream ends the session the same way an explicit exit
    /// does, farewell included.
    pub fn run_loop<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        mut output: W,
    ) -> Result<(), ShellError> {
        writeln!(output, "{}", self.config.banner)?;

        loop {
            write!(output, "{}", self.config.prompt)?;
            output.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                writeln!(output, "{}", self.config.farewell)?;
                break;
            }

            match self.process_turn(strip_newline(&line)) {
                TurnOutcome::Exit => {
                    writeln!(output, "{}", self.config.farewell)?;
                    break;
                }
                TurnOutcome::Rejected(message) => writeln!(output, "{message}")?,
                TurnOutcome::Reply(message) => {
                    writeln!(output, "{message}")?;
                    writeln!(output)?;
                }
            }
        }

        info!(
            session = %self.session.id,
            turns = self.session.turn_count(),
            "session ended"
        );
        Ok(())
    }

    /// Run the loop on stdin/stdout.
    pub fn run_interactive(&mut self) -> Result<(), ShellError> {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        self.run_loop(stdin.lock(), stdout.lock())
    }
}

/// Remove the line terminator only; inner whitespace stays untouched.
fn strip_newline(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
