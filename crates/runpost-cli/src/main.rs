//! runpost CLI entry point.

use std::process::ExitCode;

use clap::Parser;

use runpost_cli::cli::{Cli, Command, ConfigAction};
use runpost_cli::commands::{self, Dataset};
use runpost_cli::config::ClientConfig;
use runpost_cli::error::{ClientError, ClientResult};
use runpost_cli::input::resolve_input;
use runpost_core::init_tracing;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Load configuration before tracing so its `debug` setting applies
    let (config, skipped) = match ClientConfig::resolve(cli.config.as_deref()) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("error: {}", ClientError::Config(e));
            return ExitCode::FAILURE;
        }
    };

    // Initialize tracing
    if let Err(e) = init_tracing(config.tracing_config(cli.debug, cli.log_json)) {
        eprintln!("warning: {}", e);
    }
    if let Some(reason) = skipped {
        tracing::warn!(error = %reason, "Ignoring unreadable config file");
    }

    // Run the command
    match run(cli, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, mut config: ClientConfig) -> ClientResult<()> {
    // Flags override the file
    if let Some(brand) = cli.brand {
        config.analyzer.brand = brand;
    }
    let json = cli.json || config.display.json;

    let command = match cli.command {
        Some(Command::Config { action }) => {
            return match action {
                ConfigAction::Dump => commands::config::dump(&config),
                ConfigAction::Validate => commands::config::validate(&config),
                ConfigAction::Path => commands::config::path(),
            };
        }
        Some(command) => command,
        None => Command::Summary,
    };

    let path = resolve_input(cli.input.as_deref(), config.input.as_deref())?;
    let dataset = Dataset::load(path, &config.analyzer)?;

    match command {
        Command::Summary => commands::summary::run(&dataset, json),
        Command::Activities { top, mean } => commands::activities::run(
            &dataset,
            top.unwrap_or(config.display.top_activities),
            mean,
            json,
        ),
        Command::Search { query, html } => commands::search::run(&dataset, &query, html, json),
        Command::Classify { limit } => commands::classify::run(&dataset, limit, json),
        Command::Render { all } => commands::render::run(&dataset, all),
        // Handled before loading input.
        Command::Config { .. } => Ok(()),
    }
}
