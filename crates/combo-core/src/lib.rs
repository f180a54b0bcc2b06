//! Core runtime for the **combo** widget library.
//!
//! `combo-core` provides the traits, types, and terminal runtime that power
//! the combobox widget and the applications hosting it. The design follows
//! the [Elm Architecture]: state lives in a model, events arrive as
//! messages, and side effects are pushed to the edges through [`Command`]s.
//!
//! # Key types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`Model`] | Top-level application trait (init / update / view / map_event) |
//! | [`Component`] | Reusable widget that renders into a [`ratatui::layout::Rect`] |
//! | [`Command`] | Describes a side effect to be executed by the runtime |
//! | [`WidgetError`] | Fail-fast fault for unbound widget collaborators |
//! | [`Program`] | Wires a [`Model`] to a real terminal and drives the event loop |
//! | [`TestComponent`](testing::TestComponent) | Headless harness for unit-testing a [`Component`] |
//!
//! # Error surface
//!
//! `update` is fallible throughout. A widget asked to handle interaction
//! before its collaborators are bound returns [`WidgetError`] instead of
//! silently skipping work, and [`Program`] aborts on it — an inconsistent
//! accessibility surface is worse than a crash. Benign conditions (unknown
//! keys, disabled widgets, empty option sets) never surface as errors.
//!
//! [Elm Architecture]: https://guide.elm-lang.org/architecture/

pub mod command;
pub mod component;
pub mod error;
pub mod model;
pub mod program;
pub mod testing;

pub use command::Command;
pub use component::Component;
pub use error::WidgetError;
pub use model::Model;
pub use program::{log_to_file, Program, ProgramError, ProgramOptions, TerminalEvent};

/// Run an application with default options.
pub async fn run<M: Model>(flags: M::Flags) -> Result<M, ProgramError> {
    Program::<M>::new(flags)?.run().await
}

/// Run with custom options.
pub async fn run_with<M: Model>(
    flags: M::Flags,
    options: ProgramOptions,
) -> Result<M, ProgramError> {
    Program::<M>::with_options(flags, options)?.run().await
}
