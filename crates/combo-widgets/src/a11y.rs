//! Accessibility attribute surface kept in sync with interaction state.
//!
//! WAI-ARIA combobox semantics adapted for terminal UIs: the widget exposes
//! the same attribute state a DOM implementation would write
//! (`aria-expanded`, `aria-activedescendant`, …) as plain data, so hosts and
//! assistive layers can export it. The combobox updates this surface on
//! every transition; it is never computed lazily, so a snapshot is always
//! consistent with what is on screen.

/// Semantic role of a combobox part, per the ARIA combobox pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Combobox,
    Listbox,
    Option,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Combobox => write!(f, "combobox"),
            Self::Listbox => write!(f, "listbox"),
            Self::Option => write!(f, "option"),
        }
    }
}

/// Attribute state of the trigger (the `role="combobox"` element).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerAttrs {
    /// `aria-expanded`: whether the menu is open.
    pub expanded: bool,
    /// `aria-controls`: element id of the listbox.
    pub controls: String,
    /// `aria-labelledby`: element id of the label.
    pub labelled_by: String,
    /// `aria-activedescendant`: focused option id while open, cleared while
    /// closed.
    pub active_descendant: Option<String>,
    /// `aria-disabled`: set for both host-disabled and inert (zero-option)
    /// widgets.
    pub disabled: bool,
    /// Whether the trigger participates in the tab order (the
    /// `tabindex="0"`/`"-1"` toggle).
    pub tab_stop: bool,
}

impl TriggerAttrs {
    pub fn new(controls: impl Into<String>, labelled_by: impl Into<String>) -> Self {
        Self {
            expanded: false,
            controls: controls.into(),
            labelled_by: labelled_by.into(),
            active_descendant: None,
            disabled: false,
            tab_stop: true,
        }
    }

    /// `role`: always `combobox`.
    pub fn role(&self) -> Role {
        Role::Combobox
    }

    /// `aria-haspopup`: always `listbox`.
    pub fn haspopup(&self) -> Role {
        Role::Listbox
    }

    /// Mark the widget non-interactive and remove it from the tab order.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        self.tab_stop = !disabled;
    }
}

/// Attribute state of the menu container (the `role="listbox"` element).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListboxAttrs {
    /// `aria-labelledby`: element id of the label.
    pub labelled_by: String,
}

impl ListboxAttrs {
    pub fn new(labelled_by: impl Into<String>) -> Self {
        Self {
            labelled_by: labelled_by.into(),
        }
    }

    /// `role`: always `listbox`.
    pub fn role(&self) -> Role {
        Role::Listbox
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_render_as_aria_tokens() {
        assert_eq!(Role::Combobox.to_string(), "combobox");
        assert_eq!(Role::Listbox.to_string(), "listbox");
        assert_eq!(Role::Option.to_string(), "option");
    }

    #[test]
    fn trigger_defaults() {
        let attrs = TriggerAttrs::new("menu-1", "label-1");
        assert!(!attrs.expanded);
        assert_eq!(attrs.controls, "menu-1");
        assert_eq!(attrs.labelled_by, "label-1");
        assert_eq!(attrs.active_descendant, None);
        assert_eq!(attrs.role(), Role::Combobox);
        assert_eq!(attrs.haspopup(), Role::Listbox);
        assert!(attrs.tab_stop);
    }

    #[test]
    fn disabling_removes_tab_stop() {
        let mut attrs = TriggerAttrs::new("menu-1", "label-1");
        attrs.set_disabled(true);
        assert!(attrs.disabled);
        assert!(!attrs.tab_stop);
        attrs.set_disabled(false);
        assert!(!attrs.disabled);
        assert!(attrs.tab_stop);
    }
}
