// Calculator brain: an accumulator and pending operation state machine driven by keypad presses.
// Internal Modules
pub mod brain;
pub mod keypad;
pub mod parser;
pub mod terminal;

#[cfg(test)]
mod test;

pub use brain::{CalculatorBrain, Operation, OperationSymbol, OperationTable, PendingBinaryOperation};
pub use keypad::{Keypad, KeyPress};
pub use parser::{KeyScriptParser, KeySequenceParser};
pub use terminal::CalculatorTerminal;
