mod key_press;

pub use key_press::KeyPress;

use crate::brain::CalculatorBrain;
use tracing::warn;

/// Keypad is the collaborator between button presses and the brain. It keeps the text shown on
/// the display and whether the user is still typing a number into it.
#[derive(Debug, Clone)]
pub struct Keypad {
    brain: CalculatorBrain,
    display: String,
    user_is_typing: bool
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    const DECIMAL_POINT: char = '.';

    pub fn new() -> Self {
        Self {
            brain: CalculatorBrain::new(),
            display: String::from("0"),
            user_is_typing: false
        }
    }

    /// Types a digit or decimal point onto the display.
    /// @return: true if the key was accepted. A second decimal point or a non digit is rejected.
    pub fn touch_digit(&mut self, digit: char) -> bool {
        if !(digit.is_ascii_digit() || digit == Self::DECIMAL_POINT) {
            warn!(%digit, "rejected non digit key");
            return false;
        }

        if self.user_is_typing && self.display_is_finite() {
            if digit == Self::DECIMAL_POINT && self.display.contains(Self::DECIMAL_POINT) {
                warn!("display already holds a decimal point");
                return false;
            }
            self.display.push(digit);
        } else {
            self.user_is_typing = true;
            self.display = if digit == Self::DECIMAL_POINT {
                String::from("0.")
            } else {
                digit.to_string()
            };
        }

        true
    }

    /// Types a whole value onto the display at once, as if each digit had been pressed.
    pub fn enter_value(&mut self, value: f64) {
        self.user_is_typing = true;
        self.display = Self::format_value(value);
    }

    /// Hands any typed number to the brain, performs the operation and shows the result.
    pub fn perform_operation(&mut self, symbol: &str) {
        if self.user_is_typing {
            self.user_is_typing = false;
            self.brain.set_operand(self.display_value());
        }

        self.brain.perform_operation(symbol);

        if let Some(result) = self.brain.result() {
            self.display = Self::format_value(result);
        }
    }

    /// Dispatches a single key press.
    pub fn press(&mut self, key: &KeyPress) {
        match key {
            KeyPress::Digit(digit) => {
                self.touch_digit(*digit);
            },
            KeyPress::Value(value) => self.enter_value(*value),
            KeyPress::Operation(symbol) => self.perform_operation(symbol)
        }
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    /// Numeric value of the display text. Typed text always parses; "0." reads as 0.
    pub fn display_value(&self) -> f64 {
        self.display.parse().unwrap_or(0.0)
    }

    /// Digits may only be appended to a finite number, "inf" or "NaN" are replaced instead
    fn display_is_finite(&self) -> bool {
        self.display.parse::<f64>().map_or(false, f64::is_finite)
    }

    pub fn is_typing(&self) -> bool {
        self.user_is_typing
    }

    pub fn brain(&self) -> &CalculatorBrain {
        &self.brain
    }

    fn format_value(value: f64) -> String {
        format!("{}", value)
    }
}
