//! Web server command.

use anyhow::Result;
use buster_core::config::AnalyzerConfig;
use clap::Args;
use colored::Colorize;

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, default_value = "3000")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Largest accepted request body, in megabytes
    #[arg(long, default_value = "20")]
    pub max_upload_mb: usize,
}

pub async fn execute(args: ServeArgs, config: &AnalyzerConfig) -> Result<()> {
    println!();
    println!(
        "  {} {}",
        "Bureaucracy Buster".cyan().bold(),
        "Web Server".bold()
    );
    println!();
    println!(
        "  {}  http://{}:{}",
        "App".green(),
        args.host,
        args.port
    );
    println!(
        "  {}  http://{}:{}/api/analyze",
        "API".green(),
        args.host,
        args.port
    );
    println!("  {}  {}", "Model".green(), config.model);
    if !config.has_api_key() {
        println!(
            "  {}",
            "GEMINI_API_KEY is not set - analysis requests will fail".yellow()
        );
    }
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    buster_web::run_server(config, &args.host, args.port, body_limit_bytes(args.max_upload_mb)).await?;

    Ok(())
}

/// Request body limit in bytes; at least one megabyte, saturating on overflow.
fn body_limit_bytes(max_upload_mb: usize) -> usize {
    max_upload_mb.max(1).saturating_mul(1024 * 1024)
}
