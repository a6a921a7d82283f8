use crate::brain::OperationSymbol;
use crate::keypad::KeyPress;
use super::event_widget::EventWidget;
use crossterm::event::{KeyCode, KeyEvent};
use tui::backend::Backend;
use tui::Frame;
use tui::layout::{Constraint, Rect};
use tui::widgets::{Block, Borders, BorderType, Cell, Row, Table};
use tui::style::{Style, Color, Modifier};

/// Button labels in keypad order, with the terminal key bound to each.
const BUTTONS: [[(&str, char); 4]; 5] = [
    [("C", 'c'), ("±", 'n'), ("√", 'r'), ("÷", '/')],
    [("7", '7'), ("8", '8'), ("9", '9'), ("×", '*')],
    [("4", '4'), ("5", '5'), ("6", '6'), ("-", '-')],
    [("1", '1'), ("2", '2'), ("3", '3'), ("+", '+')],
    [("0", '0'), (".", '.'), ("π", 'p'), ("=", '=')],
];

pub struct KeypadWindow {
    last_pressed: Option<String>
}

impl KeypadWindow {
    pub(crate) fn new() -> Self {
        KeypadWindow {
            last_pressed: None
        }
    }

    /// Maps a terminal character to the keypad button it is bound to.
    pub(crate) fn key_binding(character: char) -> Option<KeyPress> {
        let symbol = match character {
            '0'..='9' | '.' => return Some(KeyPress::Digit(character)),
            'c' | 'C' => OperationSymbol::Clear,
            'p' => OperationSymbol::Pi,
            'r' => OperationSymbol::SquareRoot,
            'n' => OperationSymbol::Negate,
            '*' | 'x' => OperationSymbol::Multiply,
            '/' => OperationSymbol::Divide,
            '+' => OperationSymbol::Add,
            '-' => OperationSymbol::Subtract,
            '=' => OperationSymbol::Equals,
            _ => return None
        };

        Some(KeyPress::from(symbol))
    }

    pub(crate) fn draw<B: Backend>(&mut self, f: &mut Frame<B>, area: Rect) {
        let block = Block::default()
            .title("Keypad (Esc to quit)")
            .borders(Borders::ALL)
            .border_type(BorderType::Plain);

        let rows: Vec<Row> = BUTTONS.iter().map(|row| {
            let cells: Vec<Cell> = row.iter().map(|(label, key)| {
                let style = if self.last_pressed.as_deref() == Some(*label) {
                    Style::default().fg(Color::Black).bg(Color::Yellow).add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                Cell::from(format!(" {} [{}]", label, key)).style(style)
            }).collect();
            Row::new(cells).height(2)
        }).collect();

        let widths = [Constraint::Percentage(25); 4];
        let table = Table::new(rows)
            .block(block)
            .widths(&widths);

        f.render_widget(table, area);
    }
}

impl EventWidget for KeypadWindow {
    fn on_key_event(&mut self, key: KeyEvent) -> Option<KeyPress> {
        let press = match key.code {
            KeyCode::Enter => Some(KeyPress::from(OperationSymbol::Equals)),
            KeyCode::Char(character) => Self::key_binding(character),
            _ => None
        };

        if let Some(press) = &press {
            self.last_pressed = Some(press.to_string());
        }

        press
    }
}
