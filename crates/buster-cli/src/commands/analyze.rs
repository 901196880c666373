//! Analyze a local document image from the terminal.

use anyhow::{bail, Context, Result};
use buster_core::analysis::{self, gemini::GeminiClient};
use buster_core::config::AnalyzerConfig;
use buster_core::image::{mime, DocumentImage};
use clap::Args;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::output;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Image file to analyze
    pub file: PathBuf,

    /// Media type of the image (detected from the extension by default)
    #[arg(long)]
    pub mime_type: Option<String>,

    /// Print the raw JSON result
    #[arg(long)]
    pub json: bool,
}

pub async fn execute(args: AnalyzeArgs, config: &AnalyzerConfig) -> Result<()> {
    let mime_type = resolve_mime_type(&args.file, args.mime_type.as_deref())?;
    let bytes = std::fs::read(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;
    if bytes.is_empty() {
        bail!("{} is empty", args.file.display());
    }
    debug!(path = %args.file.display(), size = bytes.len(), mime_type = %mime_type, "Image loaded");

    let client = GeminiClient::from_config(config)
        .context("Set GEMINI_API_KEY or pass --api-key to analyze documents")?;
    let image = DocumentImage::new(mime_type, bytes);
    let result = analysis::analyze_document(&client, &image).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        output::print_result(&result);
    }
    Ok(())
}

fn resolve_mime_type(path: &Path, explicit: Option<&str>) -> Result<String> {
    match explicit {
        Some(m) if mime::is_image(m) => Ok(m.trim().to_string()),
        Some(m) => bail!("'{}' is not an image media type", m),
        None => mime::detect_image_mime(path)
            .map(str::to_string)
            .with_context(|| {
                format!(
                    "Cannot tell the image type of {}; pass --mime-type",
                    path.display()
                )
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_mime_type() {
        assert_eq!(resolve_mime_type(Path::new("a.jpg"), None).unwrap(), "image/jpeg");
        assert_eq!(
            resolve_mime_type(Path::new("scan"), Some("image/png")).unwrap(),
            "image/png"
        );
        assert!(resolve_mime_type(Path::new("scan"), None).is_err());
        assert!(resolve_mime_type(Path::new("a.jpg"), Some("text/plain")).is_err());
    }
}
