// Copyright (c) 2024 DistributeAI. All rights reserved.

mod cli_messages;
mod commands;
mod config;
mod consts;
mod coordinator;
mod display;
mod environment;
mod error_classifier;
mod events;
mod logging;
mod runtime;
mod session;
mod ui;
mod view_model;
mod workers;

use crate::config::{Config, load_config, resolve_config_path};
use crate::consts::cli_consts::network::API_URL_ENV_VAR;
use crate::coordinator::CoordinatorClient;
use crate::environment::Environment;
use crate::logging::{get_rust_log_level, init_stderr_logger};
use crate::session::{run_headless_mode, run_tui_mode, setup_session};
use crate::workers::PollerConfig;
use clap::{Parser, Subcommand};
use std::error::Error;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Coordinator base URL. Overrides DISTRIBUTEAI_API_URL and the config file.
    #[arg(long, global = true, value_name = "URL")]
    api_url: Option<String>,

    /// Path of the config file [default: ~/.distributeai/dashboard.json]
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Command to execute; defaults to `watch`
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Watch the network in the terminal dashboard
    Watch {
        /// Enable background colors
        #[arg(long, default_value = "false")]
        with_background: bool,
    },
    /// Poll the network and print each refresh to stdout
    Headless,
    /// Print the aggregate network statistics
    Stats,
    /// Print every registered node
    Nodes,
    /// Print every submitted job
    Jobs,
    /// Print one job with its result and executions
    Job {
        /// Job id
        id: String,
    },
    /// Check that the coordinator is reachable
    Health,
    /// Show the config file, or update it with the given settings
    Config {
        /// Coordinator base URL to store
        #[arg(long, value_name = "URL")]
        set_api_url: Option<String>,

        /// Store the background color preference
        #[arg(long, value_name = "BOOL")]
        set_background: Option<bool>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let log_level = get_rust_log_level();
    log::set_max_level(log_level.into());

    let config_path = resolve_config_path(args.config);
    let config = load_config(config_path.as_deref()).inspect_err(|e| {
        let location = config_path
            .as_deref()
            .map(|path| path.display().to_string())
            .unwrap_or_default();
        print_cmd_error!(
            "Failed to load config",
            format!("{}: {}", location, e).as_str()
        );
    })?;

    let command = args.command.unwrap_or(Command::Watch {
        with_background: false,
    });
    if !matches!(command, Command::Watch { .. } | Command::Config { .. }) {
        init_stderr_logger(log_level);
    }

    let api_url_flag = args.api_url;
    let resolve_environment = || -> Result<Environment, Box<dyn Error>> {
        let env_var = std::env::var(API_URL_ENV_VAR).ok();
        let environment = Environment::resolve(
            api_url_flag.as_deref(),
            env_var.as_deref(),
            config.api_url.as_deref(),
        )
        .inspect_err(|e| print_cmd_error!(e.to_string().as_str()))?;
        Ok(environment)
    };

    match command {
        Command::Watch { with_background } => {
            let session = setup_session(resolve_environment()?, PollerConfig::default())?;
            run_tui_mode(session, with_background || config.with_background_color).await
        }
        Command::Headless => {
            let session = setup_session(resolve_environment()?, PollerConfig::default())?;
            run_headless_mode(session).await
        }
        Command::Stats => commands::show_stats(&CoordinatorClient::new(resolve_environment()?)?).await,
        Command::Nodes => commands::show_nodes(&CoordinatorClient::new(resolve_environment()?)?).await,
        Command::Jobs => commands::show_jobs(&CoordinatorClient::new(resolve_environment()?)?).await,
        Command::Job { id } => {
            commands::show_job(&CoordinatorClient::new(resolve_environment()?)?, &id).await
        }
        Command::Health => {
            commands::check_health(&CoordinatorClient::new(resolve_environment()?)?).await
        }
        Command::Config {
            set_api_url,
            set_background,
        } => {
            let Some(config_path) = config_path else {
                print_cmd_error!("Cannot locate the home directory; pass --config <PATH>");
                return Err("no config path".into());
            };
            save_settings(&config_path, &config, set_api_url, set_background)
        }
    }
}

/// Update the config file with the given settings, keeping the others.
fn save_settings(
    config_path: &Path,
    config: &Config,
    api_url: Option<String>,
    with_background: Option<bool>,
) -> Result<(), Box<dyn Error>> {
    if api_url.is_none() && with_background.is_none() {
        print_cmd_info!(
            "Current config",
            "{}\n{}",
            config_path.display(),
            serde_json::to_string_pretty(config)?
        );
        return Ok(());
    }

    let api_url = match api_url {
        Some(url) => {
            let environment = url
                .parse::<Environment>()
                .inspect_err(|e| print_cmd_error!(e.to_string().as_str()))?;
            Some(environment.api_url())
        }
        None => config.api_url.clone(),
    };
    let updated = Config::new(
        api_url,
        with_background.unwrap_or(config.with_background_color),
    );

    updated
        .save(config_path)
        .map_err(|e| format!("Failed to save config: {}", e))?;
    print_cmd_success!("Config saved", "{}", config_path.display());
    Ok(())
}
