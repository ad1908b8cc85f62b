use clap::Subcommand;

use crate::shared::config::{self, Config};

/// Configuration management commands.
#[derive(Subcommand, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Print JSON Schema for the configuration file
    Schema,

    /// Print the configuration rollcall would use
    Show,
}

impl ConfigCommands {
    pub fn run(&self) -> anyhow::Result<()> {
        match self {
            Self::Schema => {
                let schema = config::generate_schema();
                println!("{}", serde_json::to_string_pretty(&schema)?);
            }
            Self::Show => {
                print!("{}", format_config(&config::load_config()?)?);
            }
        }
        Ok(())
    }
}

/// Render the effective configuration in the config file's own YAML format.
fn format_config(config: &Config) -> serde_yaml::Result<String> {
    serde_yaml::to_string(config)
}
