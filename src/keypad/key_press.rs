use crate::brain::OperationSymbol;
use simple_error::SimpleError;
use std::fmt;
use std::str::FromStr;

/// A single press on the keypad.
#[derive(Debug, Clone, PartialEq)]
pub enum KeyPress {
    /// One digit or decimal point typed onto the display
    Digit(char),
    /// A whole number typed at once
    Value(f64),
    /// Operator button, identified by its label
    Operation(String)
}

impl From<OperationSymbol> for KeyPress {
    fn from(symbol: OperationSymbol) -> Self {
        KeyPress::Operation(symbol.to_string())
    }
}

impl FromStr for KeyPress {
    type Err = SimpleError;

    /// Convert a key token to a KeyPress.
    /// Numbers become values, operator labels and their aliases become the canonical label.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        if let Ok(value) = token.parse::<f64>() {
            return Ok(KeyPress::Value(value));
        }

        OperationSymbol::from_str(token)
            .map(KeyPress::from)
            .map_err(|_| SimpleError::new(format!("Unknown key '{}'", token)))
    }
}

impl fmt::Display for KeyPress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyPress::Digit(digit) => write!(f, "{}", digit),
            KeyPress::Value(value) => write!(f, "{}", value),
            KeyPress::Operation(symbol) => write!(f, "{}", symbol)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_tokens() {
        assert_eq!(KeyPress::from_str("42").unwrap(), KeyPress::Value(42.0));
        assert_eq!(KeyPress::from_str("-0.5").unwrap(), KeyPress::Value(-0.5));
        assert_eq!(KeyPress::from_str("1e3").unwrap(), KeyPress::Value(1000.0));
    }

    #[test]
    fn test_operation_tokens_use_label() {
        assert_eq!(KeyPress::from_str("*").unwrap(), KeyPress::Operation(String::from("×")));
        assert_eq!(KeyPress::from_str("sqrt").unwrap(), KeyPress::Operation(String::from("√")));
        assert_eq!(KeyPress::from_str("=").unwrap(), KeyPress::Operation(String::from("=")));
        assert_eq!(KeyPress::from_str("-").unwrap(), KeyPress::Operation(String::from("-")));
    }

    #[test]
    fn test_unknown_token() {
        let error = KeyPress::from_str("%").unwrap_err();
        assert_eq!(error.as_str(), "Unknown key '%'");
    }
}
