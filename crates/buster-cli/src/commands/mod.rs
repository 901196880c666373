//! CLI command definitions and handlers.

use anyhow::Result;
use buster_core::config::{self, AnalyzerConfig};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub mod analyze;
pub mod serve;

/// Bureaucracy Buster - plain-language explanations of confusing documents
#[derive(Parser)]
#[command(name = "buster")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also append logs to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(flatten)]
    pub model: ModelArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// External model settings shared by all commands.
#[derive(Args)]
pub struct ModelArgs {
    /// Gemini API key
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// Gemini model name
    #[arg(long, env = "GEMINI_MODEL", global = true)]
    pub model: Option<String>,

    /// Gemini API base URL
    #[arg(long, env = "GEMINI_API_BASE", global = true)]
    pub api_base: Option<String>,
}

impl ModelArgs {
    /// Build the analyzer configuration; clap already folded in the environment.
    pub fn to_config(&self) -> AnalyzerConfig {
        AnalyzerConfig::from_lookup(|name| match name {
            config::API_KEY_ENV => self.api_key.clone(),
            config::MODEL_ENV => self.model.clone(),
            config::API_BASE_ENV => self.api_base.clone(),
            _ => None,
        })
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve(serve::ServeArgs),

    /// Analyze a local document image
    Analyze(analyze::AnalyzeArgs),
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        let config = self.model.to_config();

        match self.command {
            Commands::Serve(args) => serve::execute(args, &config).await,
            Commands::Analyze(args) => analyze::execute(args, &config).await,
        }
    }
}
