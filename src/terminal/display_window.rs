use crate::keypad::Keypad;
use tui::backend::Backend;
use tui::Frame;
use tui::layout::{Alignment, Rect};
use tui::widgets::{Block, Borders, BorderType, Paragraph};
use tui::text::{Span, Spans};
use tui::style::{Style, Color, Modifier};

pub struct DisplayWindow {
    display: String,
    pending: Option<String>
}

impl DisplayWindow {
    pub(crate) fn new() -> Self {
        DisplayWindow {
            display: String::from("0"),
            pending: None
        }
    }

    pub(crate) fn update_display(&mut self, keypad: &Keypad) {
        self.display = keypad.display().to_string();
        self.pending = keypad.brain()
            .pending_binary_operation()
            .map(|pending| format!("{} …", pending.first_operand()));
    }

    pub(crate) fn draw<B: Backend>(&mut self, f: &mut Frame<B>, area: Rect) {
        let block = Block::default()
            .title("Display")
            .borders(Borders::ALL)
            .border_type(BorderType::Thick);

        let value_style = if self.display == "NaN" || self.display.ends_with("inf") {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };

        let text = vec![
            Spans::from(Span::styled(self.pending.clone().unwrap_or_default(), Style::default().fg(Color::DarkGray))),
            Spans::from(Span::styled(self.display.clone(), value_style))
        ];
        let paragraph = Paragraph::new(text)
            .block(block)
            .alignment(Alignment::Right);

        f.render_widget(paragraph, area);
    }
}
