//! Analysis domain model.

use serde::{Deserialize, Serialize};

/// Literal deadline value meaning "nothing is due".
pub const NO_DEADLINE: &str = "None";

pub const FALLBACK_ACTION: &str = "Review the document carefully";
pub const FALLBACK_REASSURANCE: &str = "Take your time - we're here to help you understand this.";

/// Simplified four-field explanation of a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// What the document is.
    pub summary: String,
    /// The physical task the reader has to perform.
    pub action_required: String,
    /// Free-text due date, or `"None"`.
    pub deadline: String,
    /// Calming message shown before everything else.
    pub reassurance: String,
}

impl AnalysisResult {
    /// Result substituted when the model output cannot be validated.
    ///
    /// The raw model text is echoed as the summary.
    pub fn fallback(raw_text: impl Into<String>) -> Self {
        Self {
            summary: raw_text.into(),
            action_required: FALLBACK_ACTION.to_string(),
            deadline: NO_DEADLINE.to_string(),
            reassurance: FALLBACK_REASSURANCE.to_string(),
        }
    }

    /// True unless the deadline is (case-insensitively) `"None"`.
    pub fn has_deadline(&self) -> bool {
        !self.deadline.eq_ignore_ascii_case(NO_DEADLINE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_deadline(deadline: &str) -> AnalysisResult {
        AnalysisResult {
            summary: "This is a medical bill for services on March 15th".to_string(),
            action_required: "Pay $50 by check or online".to_string(),
            deadline: deadline.to_string(),
            reassurance: "You've got this!".to_string(),
        }
    }

    #[test]
    fn test_deadline_gate_is_case_insensitive() {
        assert!(!with_deadline("None").has_deadline());
        assert!(!with_deadline("none").has_deadline());
        assert!(!with_deadline("NONE").has_deadline());
        assert!(with_deadline("Tuesday, January 15th, 2025").has_deadline());
        assert!(with_deadline("Within 30 days").has_deadline());
        assert!(with_deadline("None yet, but soon").has_deadline());
    }

    #[test]
    fn test_padded_none_is_not_the_sentinel() {
        assert!(with_deadline(" None ").has_deadline());
        assert!(with_deadline("None\n").has_deadline());
    }

    #[test]
    fn test_fallback_shape() {
        let result = AnalysisResult::fallback("I could not read this");
        assert_eq!(result.summary, "I could not read this");
        assert_eq!(result.action_required, FALLBACK_ACTION);
        assert_eq!(result.deadline, "None");
        assert_eq!(result.reassurance, FALLBACK_REASSURANCE);
        assert!(!result.has_deadline());
    }

    #[test]
    fn test_wire_field_names() {
        let json = serde_json::to_value(with_deadline("None")).unwrap();
        let keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
        assert!(keys.contains(&"summary"));
        assert!(keys.contains(&"action_required"));
        assert!(keys.contains(&"deadline"));
        assert!(keys.contains(&"reassurance"));
        assert_eq!(keys.len(), 4);
    }
}
