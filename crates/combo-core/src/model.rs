use crate::command::Command;
use crate::error::WidgetError;
use crate::program::TerminalEvent;
use ratatui::Frame;

/// The top-level application trait, following the [Elm Architecture].
///
/// The runtime drives a continuous **init -> update -> view** cycle:
///
/// 1. [`init`](Model::init) creates the initial state and may return a
///    [`Command`] to kick off early work.
/// 2. [`view`](Model::view) renders the current state to a
///    [`ratatui::Frame`].
/// 3. Terminal events are mapped into messages through
///    [`map_event`](Model::map_event).
/// 4. [`update`](Model::update) processes each message, mutates state, and
///    optionally returns a [`Command`] for further side effects.
/// 5. Steps 2–4 repeat until the program exits.
///
/// `update` returns `Result`: a [`WidgetError`] from a hosted widget is an
/// integration fault, and the runtime surfaces it by aborting the event loop
/// — see [`ProgramError`](crate::ProgramError).
///
/// Messages for one model instance are processed strictly sequentially by
/// the event loop; no two updates ever observe each other mid-transition.
///
/// [Elm Architecture]: https://guide.elm-lang.org/architecture/
pub trait Model: Sized + Send + 'static {
    /// The application's message type.
    type Message: Send + 'static;

    /// Initialization data passed to [`Model::init`]. Use `()` when no
    /// startup data is needed.
    type Flags: Send + 'static;

    /// Create the initial model state and an optional startup command.
    fn init(flags: Self::Flags) -> (Self, Command<Self::Message>);

    /// Process a message, mutate state, and return a [`Command`] for side
    /// effects.
    fn update(&mut self, msg: Self::Message) -> Result<Command<Self::Message>, WidgetError>;

    /// Render the current state to the frame.
    fn view(&self, frame: &mut Frame);

    /// Map a raw terminal event to a message, or `None` to discard it.
    ///
    /// The runtime calls this for every event delivered by the terminal
    /// (keys, mouse, resize, focus changes) and enqueues the returned
    /// message, preserving delivery order.
    fn map_event(&self, event: TerminalEvent) -> Option<Self::Message>;
}
