//! HTTP Probe - manual exploratory test harness for an HTTP server
//!
//! Sends a fixed sequence of requests to a server under test and prints
//! every response, status code and error for a human to read.
//!
//! ## Scenarios
//!
//! 1. GET with a query string
//! 2. POST with a JSON body (error bodies are printed)
//! 3. PUT with a JSON body
//! 4. DELETE of `resource/123`
//! 5. GET without, with literal, and with encoded query parameters
//! 6. PATCH, which the server is expected to reject with 405
//!
//! ## Usage
//!
//! ```bash
//! # Run everything against http://localhost:8080/
//! http-probe
//!
//! # Another server, two scenarios, no exit prompt
//! http-probe run --base-url http://127.0.0.1:9000/ -s 1 -s 6 --no-pause
//!
//! # List scenarios
//! http-probe list
//! ```

use anyhow::{bail, Result};
use clap::Parser;
use std::io;
use tracing::error;

mod cli;
mod config;
mod executor;
mod http;
mod models;
mod output;
mod utils;

use cli::{Args, Command, ConfigAction};
use config::{print_env_help, AppConfig, EnvConfig};
use executor::{run_session, SessionOptions};
use models::Scenario;
use utils::{init_logger, LogLevel};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    let env = EnvConfig::load();
    let config = AppConfig::resolve(args.config.as_deref(), &env)?;

    let level = if args.verbose {
        LogLevel::Debug
    } else {
        config.log_level()?
    };
    init_logger(level);

    match args.command.unwrap_or(Command::Run(cli::RunArgs::default())) {
        Command::Run(run_args) => run(config, run_args).await,
        Command::List => {
            list_scenarios();
            Ok(())
        }
        Command::Config(config_args) => manage_config(config_args.action, &config, &env),
    }
}

async fn run(mut config: AppConfig, args: cli::RunArgs) -> Result<()> {
    config.apply_run_args(&args)?;

    let scenarios = if args.scenarios.is_empty() {
        Scenario::all()
    } else {
        args.scenarios
            .iter()
            .filter_map(|&n| Scenario::from_number(n))
            .collect()
    };

    let options = SessionOptions {
        scenarios,
        colorize: !args.no_color,
        pause: config.pause_on_exit,
    };

    let mut input = io::stdin().lock();
    // The exit status never reflects the run
    if let Err(e) = run_session(&config, &options, &mut input, io::stdout()).await {
        error!("Console unavailable: {:#}", e);
    }

    Ok(())
}

fn list_scenarios() {
    println!("\nHTTP Probe Scenarios ({} total)\n", Scenario::all().len());
    println!("──────────────────────────────────────────────────────");

    for scenario in Scenario::all() {
        println!(
            "  {}. {:32} [{}]",
            scenario.number(),
            scenario.name(),
            scenario.methods()
        );
    }

    println!("──────────────────────────────────────────────────────\n");
}

fn manage_config(action: ConfigAction, config: &AppConfig, env: &EnvConfig) -> Result<()> {
    match action {
        ConfigAction::Show { json } => {
            let output = if json {
                serde_json::to_string_pretty(config)?
            } else {
                serde_yaml::to_string(config)?
            };
            println!("{output}");
        }

        ConfigAction::Env => {
            print_env_help();
            println!();
            if env.has_any() {
                env.print_summary();
            } else {
                println!("No HTTP_PROBE_* variables are set.");
            }
        }

        ConfigAction::Init { output, force } => {
            if output.exists() && !force {
                bail!(
                    "Configuration file already exists: {}. Use --force to overwrite.",
                    output.display()
                );
            }

            AppConfig::default().save(&output)?;
            println!("✓ Configuration file created: {}", output.display());
        }
    }

    Ok(())
}
