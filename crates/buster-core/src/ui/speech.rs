//! Read-aloud text.

use crate::analysis::model::AnalysisResult;

/// Build the single utterance spoken for a result.
///
/// Order: reassurance, summary, deadline (only when one applies), action.
pub fn utterance(result: &AnalysisResult) -> String {
    let mut sentences = vec![
        sentence(&result.reassurance),
        sentence(&format!("This document is: {}", result.summary)),
    ];
    if result.has_deadline() {
        sentences.push(sentence(&format!("It is due: {}", result.deadline)));
    }
    sentences.push(sentence(&format!("What you need to do: {}", result.action_required)));
    sentences.join(" ")
}

/// Trim and terminate with a full stop unless already punctuated.
fn sentence(text: &str) -> String {
    let text = text.trim();
    if text.ends_with(['.', '!', '?']) {
        text.to_string()
    } else {
        format!("{}.", text)
    }
}
