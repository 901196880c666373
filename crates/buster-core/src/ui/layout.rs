//! Fixed presentation order of a result.

use serde::Serialize;

use crate::analysis::model::AnalysisResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PanelKind {
    Reassurance,
    Summary,
    Deadline,
    Action,
}

/// One block of the rendered result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Panel {
    pub kind: PanelKind,
    pub heading: &'static str,
    pub body: String,
    /// Only the deadline panel is ever emphasized.
    pub emphasized: bool,
}

impl Panel {
    /// CSS modifier class used by the templates.
    pub fn css_class(&self) -> &'static str {
        match (self.kind, self.emphasized) {
            (PanelKind::Reassurance, _) => "panel-reassurance",
            (PanelKind::Summary, _) => "panel-summary",
            (PanelKind::Deadline, true) => "panel-deadline panel-deadline-due",
            (PanelKind::Deadline, false) => "panel-deadline panel-deadline-none",
            (PanelKind::Action, _) => "panel-action",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self.kind {
            PanelKind::Reassurance => "💚",
            PanelKind::Summary => "📄",
            PanelKind::Deadline => "📅",
            PanelKind::Action => "✅",
        }
    }
}

/// Panels in display order: reassurance, summary, deadline, action.
pub fn panels(result: &AnalysisResult) -> [Panel; 4] {
    [
        Panel {
            kind: PanelKind::Reassurance,
            heading: "You've Got This!",
            body: result.reassurance.clone(),
            emphasized: false,
        },
        Panel {
            kind: PanelKind::Summary,
            heading: "What is it?",
            body: result.summary.clone(),
            emphasized: false,
        },
        Panel {
            kind: PanelKind::Deadline,
            heading: "When is it due?",
            body: result.deadline.clone(),
            emphasized: result.has_deadline(),
        },
        Panel {
            kind: PanelKind::Action,
            heading: "What do I do?",
            body: result.action_required.clone(),
            emphasized: false,
        },
    ]
}
