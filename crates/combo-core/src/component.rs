use crate::command::Command;
use crate::error::WidgetError;
use ratatui::{layout::Rect, Frame};

/// A reusable widget that renders into a given [`Rect`] area.
///
/// `Component` is the widget-level counterpart of [`Model`](crate::Model):
/// its [`view`](Component::view) receives an `area: Rect`, so a parent model
/// decides *where* the widget renders by handing it a sub-region of the
/// frame.
///
/// [`update`](Component::update) is fallible. A widget whose required
/// collaborators are not bound when a handler runs must fail fast with a
/// [`WidgetError`] rather than silently skip work — silently skipping would
/// leave its accessibility state out of sync with no way to notice. Benign
/// conditions (unrecognized input, interaction while disabled) are absorbed
/// internally and return `Ok(Command::none())`.
///
/// # Composition pattern
///
/// Wrap the component's message type in a variant of the parent message and
/// use [`Command::map`] to translate commands:
///
/// ```rust,ignore
/// enum AppMsg { Picker(combobox::Message), Quit }
///
/// fn update(&mut self, msg: AppMsg) -> Result<Command<AppMsg>, WidgetError> {
///     match msg {
///         AppMsg::Picker(m) => Ok(self.picker.update(m)?.map(AppMsg::Picker)),
///         AppMsg::Quit => Ok(Command::quit()),
///     }
/// }
/// ```
pub trait Component: Send + 'static {
    /// The component's internal message type.
    ///
    /// Parent models typically wrap this in one of their own message
    /// variants so events can be routed to the correct child.
    type Message: Send + 'static;

    /// Process a message, mutate state, and return a [`Command`] for side
    /// effects, or a [`WidgetError`] when a precondition is violated.
    fn update(&mut self, msg: Self::Message) -> Result<Command<Self::Message>, WidgetError>;

    /// Render into a specific `area` of the [`Frame`].
    ///
    /// Implementations should confine all rendering to the given rectangle.
    fn view(&self, frame: &mut Frame, area: Rect);

    /// Whether this component currently has input focus.
    ///
    /// A hint for input routing: a parent can query `focused()` to decide
    /// which child receives keyboard events. Defaults to `false`.
    fn focused(&self) -> bool {
        false
    }
}
