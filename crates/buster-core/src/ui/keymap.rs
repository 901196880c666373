//! Declarative keyboard shortcuts.
//!
//! The page renders this table, intercepts only the combinations it lists,
//! and forwards them as [`ViewEvent::Key`](super::event::ViewEvent::Key).

use serde::{Deserialize, Serialize};

use super::event::ViewEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    Alt,
    Ctrl,
    Shift,
    Meta,
}

impl Modifier {
    pub fn label(self) -> &'static str {
        match self {
            Self::Alt => "Alt",
            Self::Ctrl => "Ctrl",
            Self::Shift => "Shift",
            Self::Meta => "Meta",
        }
    }
}

/// A modifier plus a single letter. Letters compare case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyCombo {
    pub modifier: Modifier,
    pub key: char,
}

impl KeyCombo {
    pub fn new(modifier: Modifier, key: char) -> Self {
        Self {
            modifier,
            key: key.to_ascii_lowercase(),
        }
    }

    pub fn alt(key: char) -> Self {
        Self::new(Modifier::Alt, key)
    }

    fn matches(&self, other: &KeyCombo) -> bool {
        self.modifier == other.modifier && self.key.eq_ignore_ascii_case(&other.key)
    }

    /// Human-readable label such as `Alt+U`.
    pub fn label(&self) -> String {
        format!("{}+{}", self.modifier.label(), self.key.to_ascii_uppercase())
    }
}

/// What a shortcut does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Shortcut {
    Upload,
    StartCamera,
    ReadAloud,
    ShowHelp,
}

impl Shortcut {
    pub fn description(self) -> &'static str {
        match self {
            Self::Upload => "Upload an image",
            Self::StartCamera => "Open the camera",
            Self::ReadAloud => "Read the results aloud",
            Self::ShowHelp => "Show or hide keyboard shortcuts",
        }
    }

    /// The view event this shortcut triggers.
    pub fn event(self) -> ViewEvent {
        match self {
            Self::Upload => ViewEvent::OpenUpload,
            Self::StartCamera => ViewEvent::StartCamera,
            Self::ReadAloud => ViewEvent::ToggleReadAloud,
            Self::ShowHelp => ViewEvent::ToggleHelp,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Binding {
    pub combo: KeyCombo,
    pub shortcut: Shortcut,
}

impl Binding {
    pub fn label(&self) -> String {
        self.combo.label()
    }

    pub fn description(&self) -> &'static str {
        self.shortcut.description()
    }
}

/// Ordered key-combination to shortcut table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keymap {
    bindings: Vec<Binding>,
}

impl Default for Keymap {
    fn default() -> Self {
        Self::new()
            .bind(KeyCombo::alt('u'), Shortcut::Upload)
            .bind(KeyCombo::alt('c'), Shortcut::StartCamera)
            .bind(KeyCombo::alt('r'), Shortcut::ReadAloud)
            .bind(KeyCombo::alt('h'), Shortcut::ShowHelp)
    }
}

impl Keymap {
    pub fn new() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }

    /// Add a binding, replacing any existing binding for the same combination.
    pub fn bind(mut self, combo: KeyCombo, shortcut: Shortcut) -> Self {
        self.bindings.retain(|b| !b.combo.matches(&combo));
        self.bindings.push(Binding { combo, shortcut });
        self
    }

    pub fn lookup(&self, combo: &KeyCombo) -> Option<Shortcut> {
        self.bindings
            .iter()
            .find(|b| b.combo.matches(combo))
            .map(|b| b.shortcut)
    }

    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }
}
