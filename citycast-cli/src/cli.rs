use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{InquireError, Password, PasswordDisplayMode, Text};

use citycast_core::{Config, Key, QueryState, ViewController, WeatherApiFetcher};

use crate::view::TerminalView;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "citycast", version, about = "Current weather for a city")]
pub struct Cli {
    /// Log requests and failures to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the WeatherAPI.com API key.
    Configure,

    /// Show current weather for a city and exit.
    Show {
        /// City name, e.g. "Paris" or "New York".
        city: String,
    },

    /// Prompt for cities until cancelled (Esc or Ctrl-C).
    Interactive,
}

type TerminalController = ViewController<WeatherApiFetcher, TerminalView>;

impl Cli {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { city } => {
                let controller = controller_from_config()?;
                controller.submit(&city).await;

                match controller.state() {
                    QueryState::Success(_) => Ok(ExitCode::SUCCESS),
                    _ => Ok(ExitCode::FAILURE),
                }
            }
            Command::Interactive => {
                let controller = controller_from_config()?;
                interactive(&controller).await?;
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}

fn controller_from_config() -> anyhow::Result<TerminalController> {
    let config = Config::load()?;
    let fetcher = WeatherApiFetcher::from_config(&config)?;
    Ok(ViewController::new(fetcher, TerminalView::stdout()))
}

fn configure() -> anyhow::Result<ExitCode> {
    let mut config = Config::load()?;

    let api_key = Password::new("WeatherAPI.com API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    let api_key = api_key.trim();
    if api_key.is_empty() {
        anyhow::bail!("API key must not be empty");
    }

    config.set_api_key(api_key.to_string());
    let path = config.save()?;
    println!("Saved API key to {}", path.display());

    Ok(ExitCode::SUCCESS)
}

async fn interactive(controller: &TerminalController) -> anyhow::Result<()> {
    loop {
        let input = Text::new("City:").with_help_message("Enter to fetch, Esc to quit").prompt();

        match input {
            Ok(city) => {
                controller.key_pressed(Key::Enter, &city).await;
            }
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                return Ok(());
            }
            Err(err) => return Err(err).context("Failed to read city"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_show_with_global_verbose() {
        let cli = Cli::try_parse_from(["citycast", "show", "New York", "--verbose"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Command::Show { city } if city == "New York"));
    }

    #[test]
    fn show_requires_a_city() {
        assert!(Cli::try_parse_from(["citycast", "show"]).is_err());
    }
}
