//! CLI argument parsing
//!
//! Defines command-line interface using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Manual exploratory test harness for a local HTTP server
#[derive(Parser, Debug)]
#[command(name = "http-probe")]
#[command(version = "0.1.0")]
#[command(about = "Send a fixed set of GET/POST/PUT/DELETE/PATCH requests and print the replies")]
#[command(long_about = None)]
pub struct Args {
    /// Defaults to `run`
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file (YAML or JSON)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the scenarios against the server
    Run(RunArgs),

    /// List available scenarios
    List,

    /// Inspect or create configuration
    Config(ConfigArgs),
}

/// Arguments for run command
#[derive(Parser, Debug, Default)]
pub struct RunArgs {
    /// Base URL of the server under test
    #[arg(short, long)]
    pub base_url: Option<String>,

    /// Scenario number to run (1-6); repeat to select several
    #[arg(short, long = "scenario", value_parser = clap::value_parser!(u8).range(1..=6))]
    pub scenarios: Vec<u8>,

    /// Timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Exit without waiting for a keypress
    #[arg(long)]
    pub no_pause: bool,

    /// Disable colored summary
    #[arg(long)]
    pub no_color: bool,
}

/// Arguments for config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show {
        /// Print as JSON instead of YAML
        #[arg(long)]
        json: bool,
    },

    /// Describe the supported environment variables and their current values
    Env,

    /// Write a configuration file with default values
    Init {
        /// Output path
        #[arg(default_value = "http-probe.yaml")]
        output: PathBuf,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}
