#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]
use clap::Parser;

use crate::ui::{Cli, Colors, Commands, ListCommands, colors};

mod generator;
mod plugin;
mod ui;
mod utils;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  let cli = Cli::parse();
  let colors = Colors::new(colors::colors_enabled(cli.color), colors::detect_theme(cli.theme));

  match cli.command {
    None => ui::commands::run_plugin(&colors).await?,
    Some(Commands::List { list_command }) => match list_command {
      ListCommands::Services { descriptor_set, param } => {
        ui::commands::list_services(&descriptor_set, &param, &colors).await?;
      }
    },
    Some(Commands::Generate(command)) => {
      let config = ui::commands::GenerateConfig::from_command(command, cli.verbose, cli.quiet);
      ui::commands::generate_code(config, &colors).await?;
    }
  }

  Ok(())
}
