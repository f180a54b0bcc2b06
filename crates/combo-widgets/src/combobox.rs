//! Accessible single-select combobox: a text-like trigger that opens a
//! listbox menu, following the ARIA combobox interaction pattern.
//!
//! The widget owns the interaction state machine (open/closed, focused
//! option, committed selection, debounced typeahead) and keeps an
//! accessibility attribute surface ([`crate::a11y`]) consistent with that
//! state after every transition. Key classification, index arithmetic,
//! prefix search, and scroll maintenance live in the pure helper modules
//! ([`crate::action`], [`crate::navigate`], [`crate::typeahead`],
//! [`crate::scroll`]); this module wires them to events.

use std::cell::Cell;

use combo_core::command::Command;
use combo_core::component::Component;
use combo_core::error::WidgetError;
use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;
use uuid::Uuid;

use crate::a11y::{ListboxAttrs, TriggerAttrs};
use crate::action::{self, Action, TypedKey};
use crate::navigate;
use crate::option::ComboOption;
use crate::scroll;
use crate::text;
use crate::typeahead::{self, SearchBuffer, SEARCH_DEBOUNCE};

/// Messages for the combobox component.
#[derive(Debug, Clone)]
pub enum Message {
    /// A key press forwarded to the combobox.
    KeyPress(KeyEvent),
    /// A raw mouse event; hit-tested against the last rendered layout.
    Mouse(MouseEvent),
    /// The trigger was clicked: toggle the menu without taking focus.
    TriggerClick,
    /// The label was clicked: focus the trigger, change nothing else.
    LabelClick,
    /// The option at the given index was clicked: commit and close.
    OptionClick(usize),
    /// Input focus left the widget. With the menu open this commits the
    /// focused option and closes without refocusing the trigger.
    Blur,
    /// The typeahead debounce timer armed for this generation fired.
    SearchExpired(u64),
    /// Outward notification, emitted once per commit. Carries the option's
    /// stable id and label; parents observe selection through this without
    /// reaching into the widget.
    Selected {
        /// The committed option's stable id.
        key: String,
        /// The committed option's label text.
        value: String,
    },
}

/// Visual style configuration for the [`Combobox`].
#[derive(Debug, Clone)]
pub struct ComboboxStyle {
    /// Style for the label line.
    pub label: Style,
    /// Style for the trigger text once a selection exists.
    pub trigger: Style,
    /// Style for the trigger text while unselected.
    pub placeholder: Style,
    /// Style for the trigger text while the widget is disabled or inert.
    pub disabled: Style,
    /// Style for menu rows.
    pub item: Style,
    /// Style for the current (focused) menu row.
    pub current_item: Style,
}

impl Default for ComboboxStyle {
    fn default() -> Self {
        Self {
            label: Style::default(),
            trigger: Style::default(),
            placeholder: Style::default().fg(Color::DarkGray),
            disabled: Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
            item: Style::default(),
            current_item: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        }
    }
}

/// Collaborators bound by [`Combobox::attach`]: the generated element ids,
/// the option collection, and the accessibility surface that references
/// those ids.
struct Parts {
    label_id: String,
    trigger_id: String,
    listbox_id: String,
    options: Vec<ComboOption>,
    trigger_attrs: TriggerAttrs,
    listbox_attrs: ListboxAttrs,
}

/// A single-select combobox widget.
///
/// Build with the `with_*` methods, then bind the option collaborators once
/// with [`attach`](Combobox::attach) (or [`with_options`]). An empty option
/// set leaves the widget permanently inert; handlers running before `attach`
/// fail fast with [`WidgetError::MissingPart`].
///
/// # Example
///
/// ```ignore
/// use combo_widgets::combobox::Combobox;
///
/// let mut picker = Combobox::new()
///     .with_label("Favourite fruit")
///     .with_placeholder("Pick one…")
///     .with_options(["Apple", "Banana", "Cherry"]);
/// picker.focus();
/// ```
///
/// [`with_options`]: Combobox::with_options
pub struct Combobox {
    label: String,
    placeholder: String,
    disabled: bool,
    inert: bool,
    open: bool,
    focus: bool,
    focused_index: usize,
    selected: Option<usize>,
    search: SearchBuffer,
    offset: usize,
    max_visible: usize,
    style: ComboboxStyle,
    block: Option<Block<'static>>,
    menu_block: Option<Block<'static>>,
    parts: Option<Parts>,
    // Layout captured during view() for mouse hit-testing.
    label_area: Cell<Rect>,
    trigger_area: Cell<Rect>,
    menu_area: Cell<Rect>,
}

impl Combobox {
    /// Create an unbound combobox. Call [`attach`](Combobox::attach) before
    /// routing events to it.
    pub fn new() -> Self {
        Self {
            label: String::new(),
            placeholder: "Select…".to_string(),
            disabled: false,
            inert: false,
            open: false,
            focus: false,
            focused_index: 0,
            selected: None,
            search: SearchBuffer::new(),
            offset: 0,
            max_visible: 10,
            style: ComboboxStyle::default(),
            block: None,
            menu_block: None,
            parts: None,
            label_area: Cell::new(Rect::ZERO),
            trigger_area: Cell::new(Rect::ZERO),
            menu_area: Cell::new(Rect::ZERO),
        }
    }

    /// Set the accessible label text.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the trigger text shown while no option is selected.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set the disabled flag. A disabled combobox ignores all interaction.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.set_disabled(disabled);
        self
    }

    /// Set the maximum number of menu rows before the menu scrolls.
    pub fn with_max_visible(mut self, max: usize) -> Self {
        self.max_visible = max.max(1);
        self
    }

    /// Set the visual style.
    pub fn with_style(mut self, style: ComboboxStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the block (border/title container) for the trigger.
    pub fn with_block(mut self, block: Block<'static>) -> Self {
        self.block = Some(block);
        self
    }

    /// Set the block for the menu overlay.
    pub fn with_menu_block(mut self, block: Block<'static>) -> Self {
        self.menu_block = Some(block);
        self
    }

    /// Builder variant of [`attach`](Combobox::attach).
    pub fn with_options<I>(mut self, options: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<ComboOption>,
    {
        self.attach(options.into_iter().map(Into::into).collect());
        self
    }

    /// Bind the option collaborators and wire the accessibility surface.
    ///
    /// This is the one-time bind step: element ids for the label, trigger,
    /// and listbox are generated here and referenced by `aria-controls` /
    /// `aria-labelledby` from then on. With zero options the widget enters a
    /// permanently inert presentation; otherwise option 0 carries the
    /// current marker before any event is processed.
    pub fn attach(&mut self, options: Vec<ComboOption>) {
        let uid = Uuid::new_v4();
        let label_id = format!("combo-{uid}-label");
        let trigger_id = format!("combo-{uid}-input");
        let listbox_id = format!("combo-{uid}-listbox");

        self.inert = options.is_empty();
        self.focused_index = 0;
        self.selected = None;
        self.offset = 0;

        let mut trigger_attrs = TriggerAttrs::new(listbox_id.clone(), label_id.clone());
        trigger_attrs.set_disabled(self.disabled || self.inert);
        let listbox_attrs = ListboxAttrs::new(label_id.clone());

        self.parts = Some(Parts {
            label_id,
            trigger_id,
            listbox_id,
            options,
            trigger_attrs,
            listbox_attrs,
        });
    }

    /// Toggle the disabled flag at runtime, keeping the accessibility
    /// surface in step.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        if disabled {
            self.focus = false;
        }
        if let Some(parts) = self.parts.as_mut() {
            parts.trigger_attrs.set_disabled(disabled || self.inert);
        }
    }

    /// Give the trigger input focus. No-op while disabled or inert (the
    /// widget is out of the tab order).
    pub fn focus(&mut self) {
        if !self.disabled && !self.inert {
            self.focus = true;
        }
    }

    /// Whether the menu is open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Whether the widget ignores interaction because it was attached with
    /// zero options.
    pub fn is_inert(&self) -> bool {
        self.inert
    }

    /// Whether the host disabled the widget.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Index of the current (focused) option.
    pub fn focused_index(&self) -> usize {
        self.focused_index
    }

    /// Index of the committed selection, if any.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Label of the committed selection, if any.
    pub fn selected_value(&self) -> Option<&str> {
        let parts = self.parts.as_ref()?;
        self.selected
            .and_then(|i| parts.options.get(i))
            .map(|o| o.label())
    }

    /// The text the trigger displays: the selected label, or the
    /// placeholder while unselected.
    pub fn trigger_text(&self) -> &str {
        self.selected_value().unwrap_or(&self.placeholder)
    }

    /// The bound options (empty before [`attach`](Combobox::attach)).
    pub fn options(&self) -> &[ComboOption] {
        self.parts.as_ref().map_or(&[], |p| p.options.as_slice())
    }

    /// Accessibility state of the trigger, once attached.
    pub fn trigger_attrs(&self) -> Option<&TriggerAttrs> {
        self.parts.as_ref().map(|p| &p.trigger_attrs)
    }

    /// Accessibility state of the menu container, once attached.
    pub fn listbox_attrs(&self) -> Option<&ListboxAttrs> {
        self.parts.as_ref().map(|p| &p.listbox_attrs)
    }

    /// Generated element id of the listbox (`aria-controls` target).
    pub fn listbox_id(&self) -> Option<&str> {
        self.parts.as_ref().map(|p| p.listbox_id.as_str())
    }

    /// Generated element id of the trigger.
    pub fn trigger_id(&self) -> Option<&str> {
        self.parts.as_ref().map(|p| p.trigger_id.as_str())
    }

    /// Generated element id of the label (`aria-labelledby` target).
    pub fn label_id(&self) -> Option<&str> {
        self.parts.as_ref().map(|p| p.label_id.as_str())
    }

    // --- fail-fast collaborator accessors ---------------------------------

    fn require_parts(&self) -> Result<&Parts, WidgetError> {
        self.parts.as_ref().ok_or(WidgetError::MissingPart("listbox"))
    }

    fn require_options(&self) -> Result<&[ComboOption], WidgetError> {
        self.parts
            .as_ref()
            .map(|p| p.options.as_slice())
            .ok_or(WidgetError::MissingPart("options"))
    }

    fn require_options_mut(&mut self) -> Result<&mut Vec<ComboOption>, WidgetError> {
        self.parts
            .as_mut()
            .map(|p| &mut p.options)
            .ok_or(WidgetError::MissingPart("options"))
    }

    fn require_trigger_mut(&mut self) -> Result<&mut TriggerAttrs, WidgetError> {
        self.parts
            .as_mut()
            .map(|p| &mut p.trigger_attrs)
            .ok_or(WidgetError::MissingPart("trigger"))
    }

    // --- state transitions ------------------------------------------------

    /// Open or close the menu, syncing `aria-expanded` and the active
    /// descendant. `take_focus` refocuses the trigger (clicks on the trigger
    /// itself pass `false` so input focus stays where it is).
    fn set_open(&mut self, open: bool, take_focus: bool) -> Result<(), WidgetError> {
        if self.open == open {
            return Ok(());
        }
        self.open = open;

        let active = if open {
            self.require_options()?
                .get(self.focused_index)
                .map(|o| o.id().to_string())
        } else {
            None
        };
        let attrs = self.require_trigger_mut()?;
        attrs.expanded = open;
        attrs.active_descendant = active;

        if take_focus {
            self.focus = true;
        }
        Ok(())
    }

    /// Move the current marker to `index`: update the focused index and the
    /// active descendant, and keep the row visible in the scroll window.
    fn move_focus(&mut self, index: usize) -> Result<(), WidgetError> {
        let count = self.require_options()?.len();
        if count == 0 {
            return Ok(());
        }
        let index = index.min(count - 1);
        self.focused_index = index;

        if self.open {
            let id = self.require_options()?[index].id().to_string();
            self.require_trigger_mut()?.active_descendant = Some(id);
        }

        self.offset = scroll::maintain_visibility(index, count, self.max_visible, self.offset);
        Ok(())
    }

    /// Commit the option at `index`: exactly one option is selected
    /// afterwards, the trigger mirrors its label, and the outward
    /// notification fires — including when the same option is committed
    /// again.
    fn select_option(&mut self, index: usize) -> Result<Command<Message>, WidgetError> {
        let count = self.require_options()?.len();
        if count == 0 {
            return Ok(Command::none());
        }
        let index = index.min(count - 1);
        self.focused_index = index;

        let previous = self.selected;
        let options = self.require_options_mut()?;
        if let Some(prev) = previous {
            if let Some(option) = options.get_mut(prev) {
                option.set_selected(false);
            }
        }
        let option = &mut options[index];
        option.set_selected(true);
        let key = option.id().to_string();
        let value = option.label().to_string();
        self.selected = Some(index);

        Ok(Command::message(Message::Selected { key, value }))
    }

    fn handle_key(&mut self, key: KeyEvent) -> Result<Command<Message>, WidgetError> {
        let max = self.require_options()?.len().saturating_sub(1);
        let Some(resolved) = action::resolve(&key, self.open) else {
            // Not part of the interaction contract; leave the event alone.
            return Ok(Command::none());
        };

        match resolved {
            Action::Open => {
                self.set_open(true, true)?;
                Ok(Command::none())
            }
            Action::First | Action::Last => {
                self.set_open(true, true)?;
                self.search.clear();
                self.move_focus(navigate::next_index(self.focused_index, max, resolved))?;
                Ok(Command::none())
            }
            Action::Next | Action::Previous | Action::PageUp | Action::PageDown => {
                self.set_open(true, true)?;
                self.search.clear();
                self.move_focus(navigate::next_index(self.focused_index, max, resolved))?;
                Ok(Command::none())
            }
            Action::CloseSelect => {
                let cmd = self.select_option(self.focused_index)?;
                self.set_open(false, true)?;
                Ok(cmd)
            }
            Action::Close => {
                self.set_open(false, true)?;
                Ok(Command::none())
            }
            Action::Type(input) => self.handle_type(input),
        }
    }

    /// Typeahead: open, mutate the buffer, rearm the debounce, and search
    /// forward from one past the focused option so repeated letters cycle.
    fn handle_type(&mut self, input: TypedKey) -> Result<Command<Message>, WidgetError> {
        self.set_open(true, true)?;

        let generation = match input {
            TypedKey::Char(c) => self.search.push(c),
            TypedKey::Backspace => self.search.erase(),
        };
        let rearm = Command::tick(SEARCH_DEBOUNCE, move |_| Message::SearchExpired(generation));

        if !self.search.is_empty() {
            let found = {
                let options = self.require_options()?;
                let labels: Vec<&str> = options.iter().map(|o| o.label()).collect();
                typeahead::index_by_letters(&labels, self.search.as_str(), self.focused_index + 1)
            };
            if let Some(index) = found {
                self.move_focus(index)?;
            }
        }
        Ok(rearm)
    }

    /// Hit-test a mouse event against the layout captured at render time.
    /// Only left presses do anything; hover is purely cosmetic.
    fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<Command<Message>, WidgetError> {
        if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
            return Ok(Command::none());
        }
        let position = Position {
            x: mouse.column,
            y: mouse.row,
        };

        let menu = self.menu_area.get();
        if self.open && menu.contains(position) {
            let index = (mouse.row - menu.y) as usize + self.offset;
            if index < self.require_options()?.len() {
                return Ok(Command::message(Message::OptionClick(index)));
            }
            return Ok(Command::none());
        }
        if self.trigger_area.get().contains(position) {
            return Ok(Command::message(Message::TriggerClick));
        }
        if self.label_area.get().contains(position) {
            return Ok(Command::message(Message::LabelClick));
        }
        Ok(Command::none())
    }
}

impl Default for Combobox {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for Combobox {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Result<Command<Message>, WidgetError> {
        if self.disabled || self.inert {
            return Ok(Command::none());
        }

        match msg {
            Message::KeyPress(key) => self.handle_key(key),
            Message::Mouse(mouse) => self.handle_mouse(mouse),
            Message::TriggerClick => {
                self.set_open(!self.open, false)?;
                Ok(Command::none())
            }
            Message::LabelClick => {
                self.require_parts()?;
                self.focus = true;
                Ok(Command::none())
            }
            Message::OptionClick(index) => {
                self.move_focus(index)?;
                let cmd = self.select_option(index)?;
                self.set_open(false, true)?;
                Ok(cmd)
            }
            Message::Blur => {
                self.focus = false;
                if self.open {
                    let cmd = self.select_option(self.focused_index)?;
                    self.set_open(false, false)?;
                    return Ok(cmd);
                }
                Ok(Command::none())
            }
            Message::SearchExpired(generation) => {
                self.search.expire(generation);
                Ok(Command::none())
            }
            // Outward notification; nothing to do when routed back.
            Message::Selected { .. } => Ok(Command::none()),
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        let trigger_height = if self.block.is_some() { 3 } else { 1 };
        let [label_area, trigger_area, _] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(trigger_height),
            Constraint::Min(0),
        ])
        .areas(area);
        self.label_area.set(label_area);
        self.trigger_area.set(trigger_area);
        self.menu_area.set(Rect::ZERO);

        frame.render_widget(
            Paragraph::new(self.label.as_str()).style(self.style.label),
            label_area,
        );

        let trigger_inner = if let Some(ref block) = self.block {
            let inner = block.inner(trigger_area);
            frame.render_widget(block.clone(), trigger_area);
            inner
        } else {
            trigger_area
        };

        let arrow = if self.open { " ▾" } else { " ▸" };
        let text_width = (trigger_inner.width as usize).saturating_sub(2);
        let text_style = if self.disabled || self.inert {
            self.style.disabled
        } else if self.selected.is_some() {
            self.style.trigger
        } else {
            self.style.placeholder
        };
        let line = Line::from(vec![
            Span::styled(
                text::fit(self.trigger_text(), text_width).into_owned(),
                text_style,
            ),
            Span::styled(arrow, Style::default().fg(Color::DarkGray)),
        ]);
        frame.render_widget(Paragraph::new(line), trigger_inner);

        if !self.open {
            return;
        }
        let Some(parts) = self.parts.as_ref() else {
            return;
        };
        let count = parts.options.len();
        if count == 0 {
            return;
        }

        let visible = count.min(self.max_visible);
        let border_rows = if self.menu_block.is_some() { 2 } else { 0 };
        let menu_rect = Rect::new(
            area.x,
            trigger_area.bottom(),
            area.width,
            (visible + border_rows) as u16,
        )
        .intersection(frame.area());
        if menu_rect.height == 0 || menu_rect.width < 4 {
            return;
        }

        frame.render_widget(Clear, menu_rect);
        let menu_inner = if let Some(ref block) = self.menu_block {
            let inner = block.inner(menu_rect);
            frame.render_widget(block.clone(), menu_rect);
            inner
        } else {
            menu_rect
        };
        self.menu_area.set(menu_inner);

        let rows = visible.min(menu_inner.height as usize);
        for (row, option) in parts.options.iter().skip(self.offset).take(rows).enumerate() {
            let row_area = Rect {
                y: menu_inner.y + row as u16,
                height: 1,
                ..menu_inner
            };
            let index = row + self.offset;
            let is_current = index == self.focused_index;
            let is_selected = self.selected == Some(index);

            let prefix = if is_current { "▸ " } else { "  " };
            let check = if is_selected { " ✓" } else { "" };
            let style = if is_current {
                self.style.current_item
            } else {
                self.style.item
            };
            let label_width = (row_area.width as usize).saturating_sub(2 + check.chars().count());
            let display = format!(
                "{prefix}{}{check}",
                text::fit(option.label(), label_width)
            );
            frame.render_widget(Paragraph::new(Span::styled(display, style)), row_area);
        }
    }

    fn focused(&self) -> bool {
        self.focus
    }
}
