//! Model response normalization.
//!
//! Two steps: [`decode_strict`] validates the reply against the four-field
//! schema, and [`normalize`] substitutes [`AnalysisResult::fallback`] when
//! that fails. The fallback branch never produces an error.

use serde_json::Value;
use thiserror::Error;

use super::model::AnalysisResult;

const REQUIRED_FIELDS: [&str; 4] = ["summary", "action_required", "deadline", "reassurance"];

/// Reasons a model reply failed strict decoding.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("response is not valid JSON: {0}")]
    NotJson(#[from] serde_json::Error),

    #[error("response is not a JSON object")]
    NotAnObject,

    #[error("missing required field '{0}'")]
    MissingField(&'static str),
}

/// Extract the JSON body from text that might be wrapped in a markdown fence.
///
/// A ```` ```json ```` fence takes precedence over a bare ```` ``` ```` fence.
/// Text without a closed fence is returned trimmed.
pub fn extract_json(text: &str) -> &str {
    let trimmed = text.trim();

    if let Some(start) = trimmed.find("```json") {
        let after_marker = &trimmed[start + 7..];
        if let Some(end) = after_marker.find("```") {
            return after_marker[..end].trim();
        }
    }

    if let Some(start) = trimmed.find("```") {
        let after_marker = skip_info_string(&trimmed[start + 3..]);
        if let Some(end) = after_marker.find("```") {
            return after_marker[..end].trim();
        }
    }

    trimmed
}

/// Skip a fence language tag such as `JSON` or `javascript` on the opening line.
fn skip_info_string(after_fence: &str) -> &str {
    match after_fence.find('\n') {
        Some(newline) => {
            let tag = after_fence[..newline].trim();
            if !tag.is_empty() && tag.chars().all(|c| c.is_ascii_alphanumeric()) {
                &after_fence[newline + 1..]
            } else {
                after_fence
            }
        }
        None => after_fence,
    }
}

/// Decode a model reply into a validated result.
///
/// A field that is absent, null, not a string, or empty counts as missing.
pub fn decode_strict(text: &str) -> Result<AnalysisResult, DecodeError> {
    let value: Value = serde_json::from_str(extract_json(text))?;
    let object = value.as_object().ok_or(DecodeError::NotAnObject)?;

    let field = |name: &'static str| {
        object
            .get(name)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .ok_or(DecodeError::MissingField(name))
    };

    let [summary, action_required, deadline, reassurance] = REQUIRED_FIELDS;
    Ok(AnalysisResult {
        summary: field(summary)?,
        action_required: field(action_required)?,
        deadline: field(deadline)?,
        reassurance: field(reassurance)?,
    })
}

/// Decode a model reply, falling back to the canned structure on any failure.
pub fn normalize(text: &str) -> AnalysisResult {
    match decode_strict(text) {
        Ok(result) => result,
        Err(e) => {
            tracing::warn!(error = %e, "Model response failed validation, using fallback");
            AnalysisResult::fallback(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::model::{FALLBACK_ACTION, FALLBACK_REASSURANCE};

    const BILL_JSON: &str = r#"{
  "summary": "This is a medical bill for services on March 15th",
  "action_required": "Pay $50 by check or online",
  "deadline": "Tuesday, January 15th, 2025",
  "reassurance": "You've got this!"
}"#;

    fn bill() -> AnalysisResult {
        AnalysisResult {
            summary: "This is a medical bill for services on March 15th".to_string(),
            action_required: "Pay $50 by check or online".to_string(),
            deadline: "Tuesday, January 15th, 2025".to_string(),
            reassurance: "You've got this!".to_string(),
        }
    }

    #[test]
    fn test_plain_json() {
        assert_eq!(decode_strict(BILL_JSON).unwrap(), bill());
    }

    #[test]
    fn test_json_fence() {
        let text = format!("```json\n{}\n```", BILL_JSON);
        assert_eq!(decode_strict(&text).unwrap(), bill());
    }

    #[test]
    fn test_bare_fence_with_surrounding_text() {
        let text = format!("Here you go:\n```\n{}\n```\nHope that helps.", BILL_JSON);
        assert_eq!(decode_strict(&text).unwrap(), bill());
    }

    #[test]
    fn test_fence_with_uppercase_tag() {
        let text = format!("```JSON\n{}\n```", BILL_JSON);
        assert_eq!(decode_strict(&text).unwrap(), bill());
    }

    #[test]
    fn test_unclosed_fence_is_not_stripped() {
        let text = format!("```json\n{}", BILL_JSON);
        assert_eq!(extract_json(&text), text.trim());
        assert!(decode_strict(&text).is_err());
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let text = r#"{"summary":"s","action_required":"a","deadline":"None","reassurance":"r","confidence":0.9}"#;
        let result = decode_strict(text).unwrap();
        assert_eq!(result.deadline, "None");
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let text = r#"{"summary":"s","action_required":"a","reassurance":"r"}"#;
        assert!(matches!(
            decode_strict(text),
            Err(DecodeError::MissingField("deadline"))
        ));
    }

    #[test]
    fn test_empty_null_and_non_string_fields_are_rejected() {
        let empty = r#"{"summary":"","action_required":"a","deadline":"None","reassurance":"r"}"#;
        let null = r#"{"summary":"s","action_required":null,"deadline":"None","reassurance":"r"}"#;
        let number = r#"{"summary":"s","action_required":"a","deadline":15,"reassurance":"r"}"#;
        assert!(matches!(decode_strict(empty), Err(DecodeError::MissingField("summary"))));
        assert!(matches!(decode_strict(null), Err(DecodeError::MissingField("action_required"))));
        assert!(matches!(decode_strict(number), Err(DecodeError::MissingField("deadline"))));
    }

    #[test]
    fn test_non_object_is_rejected() {
        assert!(matches!(decode_strict("[1, 2, 3]"), Err(DecodeError::NotAnObject)));
        assert!(matches!(decode_strict("\"text\""), Err(DecodeError::NotAnObject)));
    }

    #[test]
    fn test_normalize_passes_valid_result_through() {
        assert_eq!(normalize(BILL_JSON), bill());
    }

    #[test]
    fn test_normalize_falls_back_on_prose() {
        let text = "Sorry, the image is too blurry to read.";
        let result = normalize(text);
        assert_eq!(result.summary, text);
        assert_eq!(result.action_required, FALLBACK_ACTION);
        assert_eq!(result.deadline, "None");
        assert_eq!(result.reassurance, FALLBACK_REASSURANCE);
    }

    #[test]
    fn test_normalize_falls_back_on_incomplete_json() {
        let text = r#"{"summary":"A parking ticket"}"#;
        let result = normalize(text);
        assert_eq!(result.summary, text);
        assert_eq!(result.deadline, "None");
    }
}
