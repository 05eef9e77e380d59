//! The lookup shell command: interactive loop or a single-shot message.

use remedybot_conversation::{Shell, TurnOutcome};
use remedybot_core::MedicineTable;
use tracing::info;

use super::CommandStrategy;

/// Input parameters for the chat command.
#[derive(Debug, Clone)]
pub struct ChatInput {
    /// Single message to answer without entering the loop.
    pub message: Option<String>,
}

/// Strategy for the `chat` subcommand.
#[derive(Debug, Clone, Copy)]
pub struct ChatStrategy;

impl CommandStrategy for ChatStrategy {
    type Input = ChatInput;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let table = MedicineTable::builtin();
        let mut shell = Shell::new(table);

        if let Some(message) = input.message {
            match shell.process_turn(&message) {
                TurnOutcome::Exit => {}
                TurnOutcome::Rejected(reply) | TurnOutcome::Reply(reply) => println!("{reply}"),
            }
            return Ok(());
        }

        info!("starting interactive session");
        shell.run_interactive()?;
        Ok(())
    }
}
