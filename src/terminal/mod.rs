mod display_window;
mod event_widget;
mod keypad_window;

use crate::keypad::Keypad;
use display_window::DisplayWindow;
use event_widget::EventWidget;
use keypad_window::KeypadWindow;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::{io, time::Duration};
use tracing::debug;
use tui::{backend::{Backend, CrosstermBackend}, Terminal, Frame};
use tui::layout::{Layout, Direction, Constraint};


/// Interactive calculator drawn in the terminal. Key presses are forwarded to a Keypad and the
/// display is redrawn after each one.
pub struct CalculatorTerminal {
    keypad: Keypad,
    display_window: DisplayWindow,
    keypad_window: KeypadWindow,
    should_quit: bool
}

impl Default for CalculatorTerminal {
    fn default() -> Self {
        Self::new(Keypad::new())
    }
}

impl CalculatorTerminal {
    pub fn new(keypad: Keypad) -> Self {
        CalculatorTerminal {
            keypad,
            display_window: DisplayWindow::new(),
            keypad_window: KeypadWindow::new(),
            should_quit: false
        }
    }

    pub fn run(&mut self) -> Result<(), io::Error> {
        self.display_window.update_display(&self.keypad);

        // Setup terminal for tui
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Run application, the terminal is restored even if it fails
        let result = self.run_app(&mut terminal, Duration::from_millis(200));

        // Restore terminal
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        result
    }

    /// Keypad state once the session ends
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    fn run_app<B: Backend>(&mut self, terminal: &mut Terminal<B>, tick_rate: Duration) -> io::Result<()> {
        loop {
            // Draw screen
            terminal.draw(|f| {self.draw(f)})?;

            // Check events
            if crossterm::event::poll(tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    match key.code {
                        KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
                        _ => {
                            if let Some(press) = self.keypad_window.on_key_event(key) {
                                debug!(%press, "key pressed");
                                self.keypad.press(&press);
                                self.display_window.update_display(&self.keypad);
                            }
                        }
                    }
                }
            }

            if self.should_quit {
                return Ok(())
            }
        }
    }

    fn draw<B: Backend>(&mut self, f: &mut Frame<B>) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints(
                [
                    Constraint::Length(4),
                    Constraint::Min(12)
                ].as_ref()
            )
            .split(f.size());

        self.display_window.draw(f, chunks[0]);
        self.keypad_window.draw(f, chunks[1]);
    }
}
