//! Gemini API client for document analysis.
//!
//! Sends the prompt and the inline image to `generateContent` and returns
//! the text of the first candidate.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::DocumentModel;
use crate::config::AnalyzerConfig;
use crate::error::{BusterError, BusterResult};
use crate::image::DocumentImage;

/// Client for the Gemini multimodal generation API.
pub struct GeminiClient {
    api_key: String,
    model: String,
    api_base: String,
    client: reqwest::Client,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GeminiClient {
    /// Create a new client with the given API key and model.
    pub fn new(api_key: &str, model: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            model: model.to_string(),
            api_base: crate::config::DEFAULT_API_BASE.to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Build a client from configuration; fails when no API key is set.
    pub fn from_config(config: &AnalyzerConfig) -> BusterResult<Self> {
        let api_key = config.api_key.as_deref().ok_or(BusterError::MissingApiKey)?;
        Ok(Self::new(api_key, &config.model).with_api_base(&config.api_base))
    }

    /// Point the client at a different API host.
    pub fn with_api_base(mut self, api_base: &str) -> Self {
        self.api_base = api_base.trim_end_matches('/').to_string();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_base, self.model
        )
    }
}

#[async_trait]
impl DocumentModel for GeminiClient {
    async fn generate(&self, prompt: &str, image: &DocumentImage) -> BusterResult<String> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![
                    Part::Text {
                        text: prompt.to_string(),
                    },
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: image.mime_type.clone(),
                            data: image.to_base64(),
                        },
                    },
                ],
            }],
        };

        debug!(model = %self.model, size = image.bytes.len(), mime_type = %image.mime_type, "Calling Gemini API");
        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(BusterError::upstream(format!(
                "Gemini API error (HTTP {}): {}",
                status, error_text
            )));
        }

        let body: GenerateContentResponse = response.json().await?;
        extract_text(body)
    }
}

/// Concatenate the text parts of the first candidate.
fn extract_text(body: GenerateContentResponse) -> BusterResult<String> {
    let text: String = body
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|p| p.text)
                .collect()
        })
        .unwrap_or_default();

    if text.is_empty() {
        return Err(BusterError::upstream("No text content in Gemini API response"));
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![
                    Part::Text {
                        text: "prompt".to_string(),
                    },
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: "image/jpeg".to_string(),
                            data: "/9j/".to_string(),
                        },
                    },
                ],
            }],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "prompt");
        assert_eq!(json["contents"][0]["parts"][1]["inlineData"]["mimeType"], "image/jpeg");
        assert_eq!(json["contents"][0]["parts"][1]["inlineData"]["data"], "/9j/");
    }

    #[test]
    fn test_extract_text_joins_parts() {
        let body: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"{\"summary\":"},{"text":"\"x\"}"}]}}]}"#,
        )
        .unwrap();
        assert_eq!(extract_text(body).unwrap(), r#"{"summary":"x"}"#);
    }

    #[test]
    fn test_extract_text_without_candidates_is_upstream_error() {
        let body: GenerateContentResponse =
            serde_json::from_str(r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#).unwrap();
        assert!(matches!(extract_text(body), Err(BusterError::Upstream(_))));
    }

    #[test]
    fn test_endpoint_and_config() {
        let config = AnalyzerConfig {
            api_key: Some("k".to_string()),
            model: "gemini-1.5-flash".to_string(),
            api_base: "http://localhost:9000/".to_string(),
        };
        let client = GeminiClient::from_config(&config).unwrap();
        assert_eq!(
            client.endpoint(),
            "http://localhost:9000/v1beta/models/gemini-1.5-flash:generateContent"
        );
        assert!(matches!(
            GeminiClient::from_config(&AnalyzerConfig::default()),
            Err(BusterError::MissingApiKey)
        ));
    }
}
