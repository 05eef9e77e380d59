#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod command;

use command::{ChatInput, ChatStrategy, CommandStrategy, VersionStrategy};

#[derive(Parser)]
#[command(name = "remedybot")]
#[command(about = "Over-the-counter medicine lookup assistant", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive lookup shell
    Chat {
        /// Single message to answer, skipping the interactive loop
        #[arg(short = 'm', long)]
        message: Option<String>,
    },
    /// Show version
    Version,
}

fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Chat { message } => ChatStrategy.execute(ChatInput { message }),
        Commands::Version => VersionStrategy.execute(()),
    }
}
