//! The selectable option collaborator manipulated by the combobox.

use uuid::Uuid;

/// A single selectable option: an identifiable, labeled unit.
///
/// Options are created by the host and handed to the combobox at attach
/// time; the widget only reads the id/label and toggles `selected`. The id
/// is stable for the option's lifetime — generated at creation unless a key
/// is supplied — and is what selection notifications carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComboOption {
    id: String,
    label: String,
    selected: bool,
}

impl ComboOption {
    /// Create an option with a generated unique id. The label is stored
    /// trimmed.
    pub fn new(label: impl Into<String>) -> Self {
        Self::build(Uuid::new_v4().to_string(), label)
    }

    /// Create an option with a caller-supplied stable key.
    pub fn with_key(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::build(key.into(), label)
    }

    fn build(id: String, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into().trim().to_string(),
            selected: false,
        }
    }

    /// The stable identifier, referenced by `aria-activedescendant` and
    /// carried in selection notifications.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The trimmed display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether this option is the committed selection (`aria-selected`).
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Toggle the selected state. Driven by the owning combobox, which
    /// keeps at most one option selected at a time.
    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }
}

impl From<&str> for ComboOption {
    fn from(label: &str) -> Self {
        ComboOption::new(label)
    }
}

impl From<String> for ComboOption {
    fn from(label: String) -> Self {
        ComboOption::new(label)
    }
}
