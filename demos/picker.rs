//! # Fruit Picker Demo
//!
//! A single combobox driven end-to-end: keyboard navigation, typeahead,
//! mouse clicks, and blur-commit via terminal focus reporting. The parent
//! model observes selection only through the widget's `Selected`
//! notification.
//!
//! Run with: `cargo run --example picker`

use combo::crossterm::event::{KeyCode, KeyModifiers};
use combo::ratatui::layout::{Constraint, Layout};
use combo::ratatui::style::{Color, Modifier, Style};
use combo::ratatui::text::{Line, Span};
use combo::ratatui::widgets::Paragraph;
use combo::ratatui::Frame;
use combo::widgets::combobox::{self, Combobox};
use combo::widgets::ComboOption;
use combo::{Command, Component, Model, ProgramOptions, TerminalEvent, WidgetError};

const FRUITS: &[&str] = &[
    "Apple",
    "Apricot",
    "Banana",
    "Blackberry",
    "Blueberry",
    "Cherry",
    "Cranberry",
    "Grape",
    "Mango",
    "Nectarine",
    "Papaya",
    "Strawberry",
];

struct PickerApp {
    picker: Combobox,
    last_selection: Option<(String, String)>,
}

#[derive(Debug)]
enum Msg {
    Picker(combobox::Message),
    Quit,
}

impl Model for PickerApp {
    type Message = Msg;
    type Flags = ();

    fn init(_: ()) -> (Self, Command<Msg>) {
        let mut options: Vec<ComboOption> = FRUITS.iter().map(|f| ComboOption::new(*f)).collect();
        // A host-supplied stable key, as opposed to the generated ids.
        options.push(ComboOption::with_key("fruit-durian", "Durian"));

        let mut picker = Combobox::new()
            .with_label("Favourite fruit")
            .with_placeholder("Pick a fruit…")
            .with_max_visible(8);
        picker.attach(options);
        picker.focus();

        (
            PickerApp {
                picker,
                last_selection: None,
            },
            Command::none(),
        )
    }

    fn update(&mut self, msg: Msg) -> Result<Command<Msg>, WidgetError> {
        match msg {
            Msg::Picker(combobox::Message::Selected { key, value }) => {
                self.last_selection = Some((key.clone(), value.clone()));
                let cmd = self
                    .picker
                    .update(combobox::Message::Selected { key, value })?;
                Ok(cmd.map(Msg::Picker))
            }
            Msg::Picker(m) => Ok(self.picker.update(m)?.map(Msg::Picker)),
            Msg::Quit => Ok(Command::quit()),
        }
    }

    fn view(&self, frame: &mut Frame) {
        let [title_area, picker_area, status_area, help_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(12),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        let title = Paragraph::new(Line::from(Span::styled(
            "Fruit Picker",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
        frame.render_widget(title, title_area);

        self.picker.view(frame, picker_area);

        if let Some((key, value)) = &self.last_selection {
            let status = Paragraph::new(Line::from(vec![
                Span::raw("Selected: "),
                Span::styled(
                    value.clone(),
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  ({key})"),
                    Style::default().fg(Color::DarkGray),
                ),
            ]));
            frame.render_widget(status, status_area);
        }

        let help = Paragraph::new(Line::from(vec![
            Span::styled("↑/↓/PgUp/PgDn", Style::default().fg(Color::DarkGray)),
            Span::raw(" navigate  "),
            Span::styled("type", Style::default().fg(Color::DarkGray)),
            Span::raw(" to search  "),
            Span::styled("Enter", Style::default().fg(Color::DarkGray)),
            Span::raw(" select  "),
            Span::styled("Esc", Style::default().fg(Color::DarkGray)),
            Span::raw(" close/quit"),
        ]));
        frame.render_widget(help, help_area);
    }

    fn map_event(&self, event: TerminalEvent) -> Option<Msg> {
        match event {
            TerminalEvent::Key(key) => match (key.code, key.modifiers) {
                (KeyCode::Char('c'), m) if m.contains(KeyModifiers::CONTROL) => Some(Msg::Quit),
                // Esc closes the menu first; quits once it is closed.
                (KeyCode::Esc, _) if !self.picker.is_open() => Some(Msg::Quit),
                _ => Some(Msg::Picker(combobox::Message::KeyPress(key))),
            },
            TerminalEvent::Mouse(mouse) => Some(Msg::Picker(combobox::Message::Mouse(mouse))),
            TerminalEvent::FocusLost => Some(Msg::Picker(combobox::Message::Blur)),
            _ => None,
        }
    }
}

#[combo::tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let options = ProgramOptions {
        mouse_capture: true,
        title: Some("combo picker".into()),
        ..ProgramOptions::default()
    };
    combo::run_with::<PickerApp>((), options).await?;
    Ok(())
}
