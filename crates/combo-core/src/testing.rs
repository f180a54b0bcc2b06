use crate::command::{Action, Command, CommandInner};
use crate::component::Component;
use crate::error::WidgetError;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::Terminal;

/// A headless test harness that drives a [`Component`] without a terminal.
///
/// `TestComponent` exercises a widget's update/view cycle in a plain
/// `#[test]` function — no tokio runtime or TTY required. Synchronous
/// commands (e.g. [`Command::message`]) are collected into a pending queue
/// that can be inspected with [`pending`](TestComponent::pending) or flushed
/// with [`drain`](TestComponent::drain); async commands (futures, timer
/// ticks) are ignored, so tests drive timer expiry by sending the expiry
/// message themselves.
///
/// # Example
///
/// ```rust,ignore
/// let mut harness = TestComponent::new(widget);
/// harness.send(Message::KeyPress(key(KeyCode::Down)))?;
/// assert!(harness.component().is_open());
///
/// let output = harness.render_string(40, 10);
/// assert!(output.contains("Banana"));
/// ```
pub struct TestComponent<C: Component> {
    component: C,
    pending: Vec<C::Message>,
}

impl<C: Component> TestComponent<C> {
    /// Wrap a component for headless testing.
    pub fn new(component: C) -> Self {
        Self {
            component,
            pending: Vec::new(),
        }
    }

    /// Send a message, triggering a single update cycle.
    ///
    /// Synchronous messages produced by the update are enqueued; call
    /// [`drain`](TestComponent::drain) to process them, or inspect them
    /// through [`pending`](TestComponent::pending).
    pub fn send(&mut self, msg: C::Message) -> Result<(), WidgetError> {
        let cmd = self.component.update(msg)?;
        self.collect_sync_messages(cmd);
        Ok(())
    }

    /// Process all pending synchronous messages to a fixed point.
    ///
    /// Useful for command-chaining scenarios where one update produces a
    /// message that triggers another update.
    pub fn drain(&mut self) -> Result<(), WidgetError> {
        while !self.pending.is_empty() {
            let messages: Vec<_> = self.pending.drain(..).collect();
            for msg in messages {
                let cmd = self.component.update(msg)?;
                self.collect_sync_messages(cmd);
            }
        }
        Ok(())
    }

    /// Messages emitted by updates but not yet drained.
    ///
    /// Outward notifications surface here, so their payloads can be
    /// asserted without routing them anywhere.
    pub fn pending(&self) -> &[C::Message] {
        &self.pending
    }

    /// Take the pending messages, leaving the queue empty.
    pub fn take_pending(&mut self) -> Vec<C::Message> {
        std::mem::take(&mut self.pending)
    }

    /// Get a shared reference to the component for assertions.
    pub fn component(&self) -> &C {
        &self.component
    }

    /// Get a mutable reference to the component for direct test setup.
    pub fn component_mut(&mut self) -> &mut C {
        &mut self.component
    }

    /// Render the component to a ratatui [`Buffer`] of the given dimensions.
    pub fn render(&self, width: u16, height: u16) -> Buffer {
        let backend = ratatui::backend::TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                self.component.view(frame, area);
            })
            .unwrap();
        terminal.backend().buffer().clone()
    }

    /// Render the component and return the visible content as a string.
    ///
    /// Rows are concatenated and separated by newlines; trailing whitespace
    /// within each row is preserved.
    pub fn render_string(&self, width: u16, height: u16) -> String {
        let buf = self.render(width, height);
        let area = Rect::new(0, 0, width, height);
        let mut output = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                let cell = &buf[(x, y)];
                output.push_str(cell.symbol());
            }
            if y < area.bottom() - 1 {
                output.push('\n');
            }
        }
        output
    }

    fn collect_sync_messages(&mut self, cmd: Command<C::Message>) {
        match cmd.inner {
            CommandInner::None => {}
            CommandInner::Action(Action::Message(msg)) => {
                self.pending.push(msg);
            }
            CommandInner::Action(Action::Quit) => {}
            CommandInner::Batch(cmds) => {
                for cmd in cmds {
                    self.collect_sync_messages(cmd);
                }
            }
            // Async commands can't execute synchronously in tests.
            CommandInner::Future(_) => {}
        }
    }
}
