//! Document analysis pipeline.
//!
//! Sends a document image to an external multimodal model with a fixed
//! prompt and normalizes the reply into an [`AnalysisResult`].

pub mod gemini;
pub mod model;
pub mod parse;
pub mod prompt;

use async_trait::async_trait;
use tracing::info;

use crate::error::BusterResult;
use crate::image::DocumentImage;

use model::AnalysisResult;

/// A hosted model that turns a prompt plus an image into text.
#[async_trait]
pub trait DocumentModel: Send + Sync {
    async fn generate(&self, prompt: &str, image: &DocumentImage) -> BusterResult<String>;
}

/// Analyze a document image.
///
/// Transport and API failures are returned as errors; an unusable reply is
/// not an error and yields [`AnalysisResult::fallback`].
pub async fn analyze_document(
    model: &dyn DocumentModel,
    image: &DocumentImage,
) -> BusterResult<AnalysisResult> {
    let text = model.generate(prompt::DOCUMENT_PROMPT, image).await?;
    let result = parse::normalize(&text);

    info!(
        mime_type = %image.mime_type,
        size = image.bytes.len(),
        has_deadline = result.has_deadline(),
        "Document analyzed"
    );

    Ok(result)
}
