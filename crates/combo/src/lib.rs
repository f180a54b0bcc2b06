//! **combo** — an accessible, keyboard-navigable combobox widget for
//! [`ratatui`], following the ARIA combobox/listbox interaction pattern.
//!
//! This is the umbrella crate that re-exports everything from a single
//! dependency:
//!
//! ```toml
//! [dependencies]
//! combo = "0.1"
//! ```
//!
//! # Re-exports
//!
//! * All public items from [`combo_core`] are available at the crate root
//!   ([`Model`], [`Component`], [`Command`], [`Program`], [`run`],
//!   [`run_with`], etc.).
//! * The [`widgets`] module re-exports everything from [`combo_widgets`]
//!   (the combobox, its option type, and the pure interaction helpers).
//! * [`ratatui`], [`crossterm`], and [`tokio`] are re-exported so downstream
//!   crates do not need to depend on them directly.
//!
//! # Quick start
//!
//! ```ignore
//! use combo::widgets::combobox::{self, Combobox};
//! use combo::{Command, Component, Model, TerminalEvent, WidgetError};
//!
//! struct App { picker: Combobox }
//!
//! enum Msg { Picker(combobox::Message) }
//!
//! impl Model for App {
//!     type Message = Msg;
//!     type Flags = ();
//!
//!     fn init(_: ()) -> (Self, Command<Msg>) {
//!         let mut picker = Combobox::new()
//!             .with_label("Fruit")
//!             .with_options(["Apple", "Banana", "Cherry"]);
//!         picker.focus();
//!         (App { picker }, Command::none())
//!     }
//!     fn update(&mut self, msg: Msg) -> Result<Command<Msg>, WidgetError> {
//!         match msg {
//!             Msg::Picker(m) => Ok(self.picker.update(m)?.map(Msg::Picker)),
//!         }
//!     }
//!     fn view(&self, frame: &mut ratatui::Frame) {
//!         self.picker.view(frame, frame.area());
//!     }
//!     fn map_event(&self, event: TerminalEvent) -> Option<Msg> {
//!         match event {
//!             TerminalEvent::Key(k) => Some(Msg::Picker(combobox::Message::KeyPress(k))),
//!             TerminalEvent::FocusLost => Some(Msg::Picker(combobox::Message::Blur)),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     combo::run::<App>(()).await.unwrap();
//! }
//! ```

pub use combo_core::*;
pub mod widgets {
    pub use combo_widgets::*;
}

// Re-export dependencies for use in demos and downstream crates
pub use crossterm;
pub use ratatui;
pub use tokio;
