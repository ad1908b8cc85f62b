use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use crate::commands::config::ConfigCommands;
use crate::commands::rollcall::{self, FetchArgs};

#[derive(Parser)]
#[command(
    name = "rollcall",
    version,
    about,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print every comment of a story's discussion in thread order
    Flat(FetchArgs),

    /// Print per-author comment counts, reactions and the top comments
    Stats(FetchArgs),

    /// Configuration file tools
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Commands {
    pub async fn run(&self) -> anyhow::Result<()> {
        match self {
            Self::Flat(args) => rollcall::run_flat(args).await,
            Self::Stats(args) => rollcall::run_stats(args).await,
            Self::Config(cmd) => cmd.run(),
            Self::Completions { shell } => {
                clap_complete::generate(
                    *shell,
                    &mut Cli::command(),
                    "rollcall",
                    &mut std::io::stdout(),
                );
                Ok(())
            }
        }
    }
}
