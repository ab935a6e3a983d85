//! CLI command definitions and dispatch.

pub mod auth;
pub mod config;
pub mod open;
pub mod serve;
pub mod video;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use streamhub_core::error::AppError;

/// StreamHub — video streaming platform
#[derive(Debug, Parser)]
#[command(name = "streamhub", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Server base URL for client commands
    #[arg(short, long, default_value = "http://localhost:5000")]
    pub server: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the StreamHub server
    Serve(serve::ServeArgs),
    /// Sign in and persist the session
    Login(auth::LoginArgs),
    /// Sign out and clear the persisted session
    Logout,
    /// Register a new account
    Register(auth::RegisterArgs),
    /// Show the signed-in account
    Whoami,
    /// Navigate to a client view through the route guard
    Open(open::OpenArgs),
    /// Browse the video catalog
    Video(video::VideoArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Serve(args) => serve::execute(args, &self.config).await,
            Commands::Login(args) => auth::login(args, &self.server).await,
            Commands::Logout => auth::logout(&self.server).await,
            Commands::Register(args) => auth::register(args, &self.server, self.format).await,
            Commands::Whoami => auth::whoami(&self.server, self.format).await,
            Commands::Open(args) => open::execute(args, &self.config, &self.server).await,
            Commands::Video(args) => video::execute(args, &self.server, self.format).await,
            Commands::Config(args) => config::execute(args, &self.config, self.format).await,
        }
    }
}

/// Helper: load configuration from file
pub fn load_config(config_path: &str) -> Result<streamhub_core::config::AppConfig, AppError> {
    streamhub_core::config::AppConfig::load(config_path)
}
