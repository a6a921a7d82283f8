use std::collections::HashMap;
use std::fmt;

use enum_assoc::Assoc;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// Operation is the closed set of behaviours a keypad button can trigger on the brain.
/// Unary and binary operations carry the arithmetic primitive they apply.
#[derive(Copy, Clone)]
pub enum Operation {
    Clear,
    Constant(f64),
    UnaryOperation(fn(f64) -> f64),
    BinaryOperation(fn(f64, f64) -> f64),
    Equals
}

impl fmt::Debug for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Clear => write!(f, "Clear"),
            Operation::Constant(value) => write!(f, "Constant({})", value),
            Operation::UnaryOperation(_) => write!(f, "UnaryOperation"),
            Operation::BinaryOperation(_) => write!(f, "BinaryOperation"),
            Operation::Equals => write!(f, "Equals")
        }
    }
}

fn negate(x: f64) -> f64 {
    -x
}

fn multiply(x: f64, y: f64) -> f64 {
    x * y
}

fn divide(x: f64, y: f64) -> f64 {
    x / y
}

fn add(x: f64, y: f64) -> f64 {
    x + y
}

fn subtract(x: f64, y: f64) -> f64 {
    x - y
}

/// OperationSymbol is an enum of every operator button on the keypad.
/// The displayed text is the button label handed to the brain, the extra serializations are
/// ascii aliases accepted when parsing key scripts.
#[derive(Debug,
         Eq, PartialEq, Hash,
         Copy, Clone,
         EnumString, EnumIter, Display,
         Assoc)]
#[func(pub fn operation(&self) -> Operation)]
pub enum OperationSymbol {
    #[strum(to_string = "C", serialize = "c", serialize = "clear")]
    #[assoc(operation = Operation::Clear)]
    Clear,
    #[strum(to_string = "π", serialize = "pi")]
    #[assoc(operation = Operation::Constant(std::f64::consts::PI))]
    Pi,
    #[strum(to_string = "√", serialize = "sqrt")]
    #[assoc(operation = Operation::UnaryOperation(f64::sqrt))]
    SquareRoot,
    #[strum(to_string = "±", serialize = "neg", serialize = "+/-")]
    #[assoc(operation = Operation::UnaryOperation(negate))]
    Negate,
    #[strum(to_string = "×", serialize = "*", serialize = "x")]
    #[assoc(operation = Operation::BinaryOperation(multiply))]
    Multiply,
    #[strum(to_string = "÷", serialize = "/")]
    #[assoc(operation = Operation::BinaryOperation(divide))]
    Divide,
    #[strum(to_string = "+")]
    #[assoc(operation = Operation::BinaryOperation(add))]
    Add,
    #[strum(to_string = "-")]
    #[assoc(operation = Operation::BinaryOperation(subtract))]
    Subtract,
    #[strum(to_string = "=")]
    #[assoc(operation = Operation::Equals)]
    Equals
}

/// Immutable mapping from button label to operation. Built once when the brain is created.
#[derive(Debug, Clone)]
pub struct OperationTable {
    operations: HashMap<String, Operation>
}

impl OperationTable {
    /// Looks up the operation bound to a button label.
    /// @return: None if the label is not part of the table.
    pub fn get(&self, symbol: &str) -> Option<Operation> {
        self.operations.get(symbol).copied()
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.operations.contains_key(symbol)
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

impl Default for OperationTable {
    fn default() -> Self {
        Self {
            operations: OperationSymbol::iter()
                .map(|symbol| (symbol.to_string(), symbol.operation()))
                .collect()
        }
    }
}
