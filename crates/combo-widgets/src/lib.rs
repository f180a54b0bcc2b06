//! The **combo** combobox widget and its interaction helpers.
//!
//! The widget implements [`combo_core::Component`], so it can be embedded in
//! any [`combo_core::Model`] and composed freely within [`ratatui`] layouts.
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`combobox`] | The combobox controller: state machine, rendering, events |
//! | [`option`] | The selectable option collaborator |
//! | [`action`] | Key press → interaction action classification |
//! | [`navigate`] | Focused-index clamp/page arithmetic |
//! | [`typeahead`] | Prefix search and the debounced search buffer |
//! | [`scroll`] | Keeping the focused row inside the menu's scroll window |
//! | [`a11y`] | ARIA attribute surface mirrored by the widget |
//! | [`text`] | Display-width-aware truncation |

pub mod a11y;
pub mod action;
pub mod combobox;
pub mod navigate;
pub mod option;
pub mod scroll;
pub mod text;
pub mod typeahead;

pub use combobox::{Combobox, ComboboxStyle};
pub use option::ComboOption;
