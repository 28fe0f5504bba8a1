//! `planetcat` - CLI for the planet catalogue
//!
//! This binary runs the interactive catalogue menus and offers a few
//! configuration helpers.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use planetcat::cli::{Cli, Command, ConfigCommand, RunCommand};
use planetcat::{init_logging, Catalogue, Config, Session};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbosity());

    match cli.command.unwrap_or(Command::Run(RunCommand::default())) {
        Command::Run(run_cmd) => handle_run(cli.config, &run_cmd),
        Command::Config(config_cmd) => handle_config(cli.config, config_cmd),
    }
}

fn load_config(path: Option<PathBuf>) -> anyhow::Result<Config> {
    Config::load_from(path).context("loading configuration")
}

fn handle_run(config_path: Option<PathBuf>, cmd: &RunCommand) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let catalogue = Catalogue::new(&config.catalogue);
    let stdin = std::io::stdin();
    let mut session = Session::new(catalogue, config.display, stdin.lock(), std::io::stdout());
    session.run(cmd.role()).context("interactive session failed")?;
    Ok(())
}

fn handle_config(config_path: Option<PathBuf>, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            let config = load_config(config_path)?;
            if json {
                println!("{}", config.to_json_pretty()?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Catalogue]");
                println!("  Max planets:            {}", config.catalogue.max_planets);
                println!(
                    "  Max researchers:        {}",
                    config.catalogue.max_researchers
                );
                println!(
                    "  Max name length:        {}",
                    config.catalogue.max_name_length
                );
                println!(
                    "  Max description length: {}",
                    config.catalogue.max_description_length
                );
                println!();
                println!("[Display]");
                println!("  Precision:              {}", config.display.precision);
            }
        }
        ConfigCommand::Path => {
            let path = config_path.unwrap_or_else(Config::default_config_path);
            println!("{}", path.display());
        }
        ConfigCommand::Validate { file } => {
            let path = file
                .or(config_path)
                .unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_helpers_skip_broken_global_config() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("broken.toml", "[catalogue]\nmax_planets = \"many\"")?;
            jail.create_file("good.toml", "[catalogue]\nmax_planets = 3")?;
            let broken = Some(PathBuf::from("broken.toml"));

            let validate = ConfigCommand::Validate {
                file: Some(PathBuf::from("good.toml")),
            };
            handle_config(broken.clone(), validate).map_err(|e| e.to_string())?;
            handle_config(broken.clone(), ConfigCommand::Path).map_err(|e| e.to_string())?;

            let show = ConfigCommand::Show { json: true };
            assert!(handle_config(broken, show).is_err());
            Ok(())
        });
    }
}
