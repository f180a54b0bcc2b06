use crate::command::{Action, Command, CommandInner};
use crate::error::WidgetError;
use crate::model::Model;
use crossterm::{
    cursor,
    event::{
        DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
        EventStream, KeyEvent, MouseEvent,
    },
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout, Stdout, Write};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;

/// Terminal events delivered to [`Model::map_event`].
///
/// Each variant wraps the corresponding [`crossterm::event::Event`] payload,
/// so applications can pattern-match on key codes, modifiers, and mouse
/// buttons using the full crossterm API. Focus events are only delivered
/// when [`ProgramOptions::focus_reporting`] is enabled (the default).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalEvent {
    /// A keyboard event.
    Key(KeyEvent),
    /// A mouse event.
    Mouse(MouseEvent),
    /// Terminal resized to (columns, rows).
    Resize(u16, u16),
    /// Terminal window gained focus.
    FocusGained,
    /// Terminal window lost focus.
    FocusLost,
}

impl TerminalEvent {
    /// Convert a raw crossterm event, discarding kinds the runtime does not
    /// deliver (bracketed paste is never enabled here).
    fn from_crossterm(event: crossterm::event::Event) -> Option<Self> {
        match event {
            crossterm::event::Event::Key(k) => Some(TerminalEvent::Key(k)),
            crossterm::event::Event::Mouse(m) => Some(TerminalEvent::Mouse(m)),
            crossterm::event::Event::Resize(w, h) => Some(TerminalEvent::Resize(w, h)),
            crossterm::event::Event::FocusGained => Some(TerminalEvent::FocusGained),
            crossterm::event::Event::FocusLost => Some(TerminalEvent::FocusLost),
            crossterm::event::Event::Paste(_) => None,
        }
    }
}

/// Errors that can occur while initializing or running a [`Program`].
#[derive(Debug, thiserror::Error)]
pub enum ProgramError {
    /// An I/O error from terminal setup, rendering, or teardown.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// A widget precondition violation surfaced from [`Model::update`].
    ///
    /// These are integration faults; the event loop aborts rather than
    /// continuing with inconsistent widget state.
    #[error("widget fault: {0}")]
    Widget(#[from] WidgetError),
}

/// Configuration options for a [`Program`].
///
/// All fields have defaults; use struct update syntax to override only what
/// you need:
///
/// ```rust,ignore
/// let opts = ProgramOptions {
///     mouse_capture: true,
///     title: Some("picker".into()),
///     ..ProgramOptions::default()
/// };
/// ```
pub struct ProgramOptions {
    /// Target frames per second (default: 60, clamped to 1..=120).
    pub fps: u32,
    /// Start in the alternate screen buffer (default: true).
    pub alt_screen: bool,
    /// Enable mouse event capture (default: false).
    pub mouse_capture: bool,
    /// Enable focus-in/focus-out reporting (default: true).
    ///
    /// Blur-commit behavior depends on focus-loss events, so this stays on
    /// unless explicitly disabled.
    pub focus_reporting: bool,
    /// Set the terminal window title.
    pub title: Option<String>,
    /// Install a panic hook that restores the terminal (default: true).
    pub catch_panics: bool,
    /// Append-mode log file for debugging TUI apps.
    pub log_file: Option<std::path::PathBuf>,
}

impl Default for ProgramOptions {
    fn default() -> Self {
        Self {
            fps: 60,
            alt_screen: true,
            mouse_capture: false,
            focus_reporting: true,
            title: None,
            catch_panics: true,
            log_file: None,
        }
    }
}

/// The program runtime. Manages terminal setup, the event loop, and the
/// full [`Model`] lifecycle.
///
/// `Program` wires a [`Model`] to a real terminal via
/// [`ratatui`]/[`crossterm`] and drives the init/update/view loop until the
/// model returns [`Command::quit()`], the process receives ctrl-c, or an
/// update surfaces a [`WidgetError`].
///
/// Events and messages for one program are processed one at a time on a
/// single `select!` loop, so model updates are observed atomically between
/// events.
pub struct Program<M: Model> {
    model: M,
    terminal: Terminal<CrosstermBackend<Stdout>>,
    msg_tx: mpsc::UnboundedSender<M::Message>,
    msg_rx: mpsc::UnboundedReceiver<M::Message>,
    options: ProgramOptions,
    needs_redraw: bool,
    should_quit: bool,
    log_file: Option<std::fs::File>,
}

impl<M: Model> Program<M> {
    /// Create a new program with default options.
    ///
    /// Returns an error if terminal initialization fails.
    pub fn new(flags: M::Flags) -> Result<Self, ProgramError> {
        Self::with_options(flags, ProgramOptions::default())
    }

    /// Create a new program with custom options.
    pub fn with_options(flags: M::Flags, options: ProgramOptions) -> Result<Self, ProgramError> {
        let (msg_tx, msg_rx) = mpsc::unbounded_channel();

        let log_file = match options.log_file {
            Some(ref path) => Some(
                std::fs::OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)?,
            ),
            None => None,
        };

        let (model, init_cmd) = M::init(flags);
        let terminal = init_terminal(&options)?;

        let mut program = Self {
            model,
            terminal,
            msg_tx,
            msg_rx,
            options,
            needs_redraw: true,
            should_quit: false,
            log_file,
        };

        program.debug_log("program initialized");
        program.execute_command(init_cmd);
        Ok(program)
    }

    /// Get a sender for external message injection.
    pub fn sender(&self) -> mpsc::UnboundedSender<M::Message> {
        self.msg_tx.clone()
    }

    /// Run the program. Blocks until quit.
    ///
    /// Returns the final model state, or the first error surfaced by an
    /// update. The terminal is restored in either case.
    pub async fn run(mut self) -> Result<M, ProgramError> {
        let result = self.event_loop().await;
        self.debug_log("shutting down");
        restore_terminal(&self.options)?;
        result?;
        Ok(self.model)
    }

    async fn event_loop(&mut self) -> Result<(), ProgramError> {
        self.render()?;

        let fps = self.options.fps.clamp(1, 120);
        let mut frame_interval =
            tokio::time::interval(Duration::from_secs_f64(1.0 / fps as f64));
        frame_interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        let mut events = EventStream::new();

        loop {
            tokio::select! {
                biased;

                _ = tokio::signal::ctrl_c() => {
                    self.debug_log("received ctrl+c signal");
                    return Ok(());
                }

                Some(msg) = self.msg_rx.recv() => {
                    self.process_message(msg)?;
                    if self.should_quit {
                        return Ok(());
                    }
                }

                maybe_event = events.next() => {
                    if let Some(Ok(raw)) = maybe_event {
                        if let Some(event) = TerminalEvent::from_crossterm(raw) {
                            if let Some(msg) = self.model.map_event(event) {
                                self.process_message(msg)?;
                            }
                        }
                    }
                    if self.should_quit {
                        return Ok(());
                    }
                }

                _ = frame_interval.tick() => {
                    if self.needs_redraw {
                        self.render()?;
                        self.needs_redraw = false;
                    }
                }
            }
        }
    }

    fn process_message(&mut self, msg: M::Message) -> Result<(), ProgramError> {
        let cmd = self.model.update(msg)?;
        self.execute_command(cmd);
        self.needs_redraw = true;
        Ok(())
    }

    fn execute_command(&mut self, cmd: Command<M::Message>) {
        match cmd.inner {
            CommandInner::None => {}
            CommandInner::Action(Action::Message(msg)) => {
                let _ = self.msg_tx.send(msg);
            }
            CommandInner::Action(Action::Quit) => {
                self.should_quit = true;
            }
            CommandInner::Future(fut) => {
                let tx = self.msg_tx.clone();
                tokio::spawn(async move {
                    let msg = fut.await;
                    let _ = tx.send(msg);
                });
            }
            CommandInner::Batch(cmds) => {
                for cmd in cmds {
                    self.execute_command(cmd);
                }
            }
        }
    }

    /// Write a debug message to the log file, if configured.
    fn debug_log(&mut self, msg: &str) {
        if let Some(ref mut f) = self.log_file {
            let _ = writeln!(f, "{msg}");
        }
    }

    fn render(&mut self) -> Result<(), ProgramError> {
        self.terminal.draw(|frame| {
            self.model.view(frame);
        })?;
        Ok(())
    }
}

fn init_terminal(options: &ProgramOptions) -> Result<Terminal<CrosstermBackend<Stdout>>, ProgramError> {
    // Install a panic hook that restores the terminal (only once, to avoid
    // stacking hooks across multiple Program instances).
    if options.catch_panics {
        use std::sync::Once;
        static HOOK_INSTALLED: Once = Once::new();
        let alt_screen = options.alt_screen;
        HOOK_INSTALLED.call_once(|| {
            let original_hook = std::panic::take_hook();
            std::panic::set_hook(Box::new(move |info| {
                let _ = restore_terminal_minimal(alt_screen);
                original_hook(info);
            }));
        });
    }

    enable_raw_mode()?;
    let mut writer = stdout();

    if options.alt_screen {
        execute!(writer, EnterAlternateScreen)?;
    }
    if options.mouse_capture {
        execute!(writer, EnableMouseCapture)?;
    }
    if options.focus_reporting {
        execute!(writer, EnableFocusChange)?;
    }
    if let Some(ref title) = options.title {
        execute!(writer, SetTitle(title))?;
    }
    execute!(writer, cursor::Hide)?;

    let backend = CrosstermBackend::new(writer);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(options: &ProgramOptions) -> Result<(), ProgramError> {
    restore_terminal_minimal(options.alt_screen)?;
    Ok(())
}

fn restore_terminal_minimal(alt_screen: bool) -> Result<(), io::Error> {
    // Best-effort cleanup: continue past individual failures so as much
    // terminal state as possible is restored.
    let raw = disable_raw_mode();
    let mut writer = stdout();
    execute!(writer, DisableMouseCapture).ok();
    execute!(writer, DisableFocusChange).ok();
    execute!(writer, cursor::Show).ok();
    if alt_screen {
        execute!(writer, LeaveAlternateScreen).ok();
    }
    raw
}

/// Open an append-mode log file for debugging TUI applications.
///
/// Returns a file handle usable with `writeln!`. Useful because a raw-mode
/// TUI owns stdout, so `println!` debugging is not an option.
pub fn log_to_file(path: impl AsRef<std::path::Path>) -> io::Result<std::fs::File> {
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventKind, KeyEventState, KeyModifiers};

    #[test]
    fn default_options() {
        let opts = ProgramOptions::default();
        assert_eq!(opts.fps, 60);
        assert!(opts.alt_screen);
        assert!(!opts.mouse_capture);
        assert!(opts.focus_reporting);
        assert!(opts.catch_panics);
        assert!(opts.title.is_none());
        assert!(opts.log_file.is_none());
    }

    #[test]
    fn converts_key_events() {
        let key = KeyEvent {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        };
        let event = TerminalEvent::from_crossterm(crossterm::event::Event::Key(key));
        assert_eq!(event, Some(TerminalEvent::Key(key)));
    }

    #[test]
    fn converts_focus_events() {
        assert_eq!(
            TerminalEvent::from_crossterm(crossterm::event::Event::FocusLost),
            Some(TerminalEvent::FocusLost)
        );
        assert_eq!(
            TerminalEvent::from_crossterm(crossterm::event::Event::FocusGained),
            Some(TerminalEvent::FocusGained)
        );
    }

    #[test]
    fn discards_paste_events() {
        let event =
            TerminalEvent::from_crossterm(crossterm::event::Event::Paste("x".into()));
        assert_eq!(event, None);
    }
}
