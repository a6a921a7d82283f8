pub(crate) mod key_script_parser;
#[cfg(test)]
mod test;

pub use key_script_parser::KeyScriptParser;

use crate::keypad::KeyPress;
use std::fs::File;
use std::io::Read;

/// KeySequenceParser is a trait to be implemented by readers of recorded keypad input.
/// Implementors of the trait have to implement the parse_str function
pub trait KeySequenceParser {
    // Parse string
    fn parse_str(&self, data: &str) -> Result<Vec<KeyPress>, std::io::Error>;

    fn parse(&self, mut file: File) -> Result<Vec<KeyPress>, std::io::Error> {
        let mut file_data = String::new();
        file.read_to_string(&mut file_data)?;
        self.parse_str(file_data.as_str())
    }
}
