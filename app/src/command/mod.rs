//! Static strategy dispatch for CLI commands.
//!
//! One unit struct per subcommand, each with its own typed input. `main`
//! matches the parsed command and hands the strategy its input directly,
//! so every call is monomorphized and there are no trait objects.

mod chat;
mod version;

pub use chat::{ChatInput, ChatStrategy};
pub use version::VersionStrategy;

/// Contract implemented by every CLI command.
pub trait CommandStrategy {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}
