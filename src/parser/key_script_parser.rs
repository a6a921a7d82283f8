use super::KeySequenceParser;
use crate::keypad::KeyPress;

use std::io::Error;
use std::str::FromStr;
use tracing::debug;

/// KeyScriptParser reads a recorded sequence of keypad presses.
/// Each key is read from its own line (By default).
/// If the token is a number it is typed onto the display as a whole value. If the token matches an
/// operator button label or one of its ascii aliases the canonical label is pressed.
/// Empty lines are ignored as well as comments starting with # (excl whitespace)
pub struct KeyScriptParser {
    /// None splits on any whitespace
    delimiter: Option<String>
}

impl Default for KeyScriptParser {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyScriptParser {
    const COMMENT_TOKEN: &'static str = "#";

    /// Creates new KeyScriptParser with the default delimiter '\n'
    pub fn new() -> Self {
        Self {
            delimiter: Some(String::from('\n'))
        }
    }

    /// Creates new KeyScriptParser with custom delimiter. An empty delimiter fails on parse.
    pub fn using_delimiter(mut self, delimiter: String) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    /// Creates new KeyScriptParser splitting tokens on any whitespace. Used for keys given inline.
    pub fn using_whitespace(mut self) -> Self {
        self.delimiter = None;
        self
    }

    fn tokens<'a>(&self, data: &'a str) -> Vec<&'a str> {
        match &self.delimiter {
            Some(delimiter) => data.split(delimiter.as_str()).collect(),
            None => data.split_whitespace().collect()
        }
    }
}

impl KeySequenceParser for KeyScriptParser {
    fn parse_str(&self, data: &str) -> Result<Vec<KeyPress>, Error> {
        if self.delimiter.as_deref() == Some("") {
            return Err(Error::new(std::io::ErrorKind::InvalidInput,
                                  "Key script delimiter must not be empty"));
        }

        let mut keys: Vec<KeyPress> = Vec::new();

        for token in self.tokens(data) {
            let token = token.trim();

            if token.is_empty() || token.starts_with(Self::COMMENT_TOKEN) {
                continue;
            }

            match KeyPress::from_str(token) {
                Ok(key) => keys.push(key),
                Err(why) => {
                    return Err(Error::new(std::io::ErrorKind::InvalidInput,
                                          format!("Unknown key token found while parsing '{}': {}", token, why)));
                }
            }
        }

        debug!(count = keys.len(), "parsed key script");
        Ok(keys)
    }
}
