pub(crate) mod operations;

pub use operations::{Operation, OperationSymbol, OperationTable};

use derive_getters::Getters;
use tracing::{debug, trace};

/// A binary operation waiting for its second operand.
#[derive(Debug, Copy, Clone, Getters)]
pub struct PendingBinaryOperation {
    function: fn(f64, f64) -> f64,
    first_operand: f64
}

impl PendingBinaryOperation {
    fn perform(&self, second_operand: f64) -> f64 {
        (self.function)(self.first_operand, second_operand)
    }
}

/// CalculatorBrain is the accumulator and pending operation state machine behind the keypad.
/// Callers set operands, press operations by their button label and read the result back.
/// Nothing here fails: a missing operand or an unknown label leaves the state untouched and
/// arithmetic errors surface as inf or NaN.
#[derive(Debug, Clone, Default)]
pub struct CalculatorBrain {
    /// Current value. None until an operand or constant is loaded, and while a binary
    /// operation is waiting for its second operand.
    accumulator: Option<f64>,

    /// Button label to operation lookup. Never mutated after construction.
    operations: OperationTable,

    /// At most one binary operation awaiting a second operand.
    pending_binary_operation: Option<PendingBinaryOperation>
}

impl CalculatorBrain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites the accumulator. The pending binary operation is kept.
    pub fn set_operand(&mut self, operand: f64) {
        debug!(operand, "set operand");
        self.accumulator = Some(operand);
    }

    /// Applies the operation bound to `symbol`. Unknown symbols are ignored.
    pub fn perform_operation(&mut self, symbol: &str) {
        let operation = match self.operations.get(symbol) {
            Some(operation) => operation,
            None => {
                trace!(symbol, "ignoring unknown operation symbol");
                return;
            }
        };

        match operation {
            Operation::Clear => {
                self.accumulator = Some(0.0);
            },
            Operation::Constant(value) => {
                self.accumulator = Some(value);
            },
            Operation::UnaryOperation(function) => {
                if let Some(value) = self.accumulator {
                    self.accumulator = Some(function(value));
                }
            },
            Operation::BinaryOperation(function) => {
                // Chained operators resolve left to right before capturing the next one
                self.perform_pending_binary_operation();
                if let Some(first_operand) = self.accumulator.take() {
                    self.pending_binary_operation = Some(PendingBinaryOperation {
                        function,
                        first_operand
                    });
                }
            },
            Operation::Equals => {
                self.perform_pending_binary_operation();
            }
        }

        debug!(symbol, accumulator = ?self.accumulator,
               pending = self.pending_binary_operation.is_some(), "performed operation");
    }

    /// Completes the pending binary operation if both operands are present.
    fn perform_pending_binary_operation(&mut self) {
        if let (Some(pending), Some(second_operand)) = (self.pending_binary_operation, self.accumulator) {
            self.accumulator = Some(pending.perform(second_operand));
            self.pending_binary_operation = None;
        }
    }

    /// Current accumulator value, None if there is nothing to show.
    pub fn result(&self) -> Option<f64> {
        self.accumulator
    }

    pub fn pending_binary_operation(&self) -> Option<&PendingBinaryOperation> {
        self.pending_binary_operation.as_ref()
    }

    /// Returns if a binary operation is waiting for its second operand
    pub fn is_awaiting_operand(&self) -> bool {
        self.pending_binary_operation.is_some() && self.accumulator.is_none()
    }

    pub fn operations(&self) -> &OperationTable {
        &self.operations
    }
}
