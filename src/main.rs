mod cli;
mod commands;
mod infra;
mod shared;

use clap::Parser;
use cli::Cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    shared::logging::init();

    let Cli { command } = Cli::parse();
    command.run().await?;

    Ok(())
}
