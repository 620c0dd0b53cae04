//! Formula error types

use thiserror::Error;

/// Result type for formula operations
pub type FormulaResult<T> = std::result::Result<T, FormulaError>;

/// Errors that can occur while building or evaluating a formula tree
#[derive(Debug, Error)]
pub enum FormulaError {
    /// Formula evaluation error
    #[error("Evaluation error: {0}")]
    Evaluation(String),

    /// Unknown function
    #[error("Unknown function: {0}")]
    UnknownFunction(String),

    /// Wrong number of arguments
    #[error("Wrong number of arguments for {function}: expected {expected}, got {actual}")]
    ArgumentCount {
        function: String,
        expected: String,
        actual: usize,
    },

    /// An operand was not supplied at construction
    #[error("Missing {position} operand for {function}")]
    MissingOperand {
        function: String,
        position: &'static str,
    },

    /// Empty or malformed function name
    #[error("Invalid function name: {0:?}")]
    InvalidName(String),

    /// Reference to invalid cell
    #[error("Invalid reference: {0}")]
    InvalidReference(String),

    /// Error from the core types (addresses, value conversions)
    #[error(transparent)]
    Core(#[from] gridcalc_core::Error),
}
