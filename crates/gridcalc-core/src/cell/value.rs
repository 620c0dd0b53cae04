//! Literal value types

use crate::error::{Error, Result};
use std::fmt;

/// A concrete scalar value: the end point of every evaluation
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Literal {
    /// No value (an empty cell)
    #[default]
    Empty,

    /// Numeric value
    Number(f64),

    /// Text value
    Text(String),

    /// Boolean value (TRUE/FALSE)
    Boolean(bool),

    /// Error value (#VALUE!, #REF!, etc.)
    Error(CellError),
}

impl Literal {
    /// Create a new text value
    pub fn text<S: Into<String>>(s: S) -> Self {
        Literal::Text(s.into())
    }

    /// Get the error if this is one
    pub fn get_error(&self) -> Option<CellError> {
        match self {
            Literal::Error(e) => Some(*e),
            _ => None,
        }
    }

    /// Try to get the value as a number
    ///
    /// Empty counts as zero, booleans as 1/0, and text only if it parses.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Literal::Number(n) => Some(*n),
            Literal::Boolean(true) => Some(1.0),
            Literal::Boolean(false) => Some(0.0),
            Literal::Text(s) => s.trim().parse().ok(),
            Literal::Empty => Some(0.0),
            Literal::Error(_) => None,
        }
    }

    /// Force conversion to number
    pub fn to_number(&self) -> Result<f64> {
        self.as_number().ok_or(Error::InvalidValueType {
            expected: "number",
            actual: self.type_name(),
        })
    }

    /// Get the text if this is a text value
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Literal::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Literal::Empty => "empty",
            Literal::Number(_) => "number",
            Literal::Text(_) => "text",
            Literal::Boolean(_) => "boolean",
            Literal::Error(_) => "error",
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Empty => Ok(()),
            Literal::Number(n) => {
                // No trailing ".0" for whole numbers
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
            Literal::Text(s) => write!(f, "{}", s),
            Literal::Boolean(b) => write!(f, "{}", if *b { "TRUE" } else { "FALSE" }),
            Literal::Error(e) => write!(f, "{}", e),
        }
    }
}

impl From<bool> for Literal {
    fn from(b: bool) -> Self {
        Literal::Boolean(b)
    }
}

impl From<i32> for Literal {
    fn from(n: i32) -> Self {
        Literal::Number(n as f64)
    }
}

impl From<i64> for Literal {
    fn from(n: i64) -> Self {
        Literal::Number(n as f64)
    }
}

impl From<f64> for Literal {
    fn from(n: f64) -> Self {
        Literal::Number(n)
    }
}

impl From<&str> for Literal {
    fn from(s: &str) -> Self {
        Literal::text(s)
    }
}

impl From<String> for Literal {
    fn from(s: String) -> Self {
        Literal::Text(s)
    }
}

impl From<CellError> for Literal {
    fn from(e: CellError) -> Self {
        Literal::Error(e)
    }
}

/// Error values a cell can display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellError {
    /// #DIV/0! - Division by zero
    Div0,
    /// #VALUE! - Wrong type of argument or operand
    Value,
    /// #REF! - Invalid cell reference
    Ref,
    /// #NUM! - Result is not a finite number
    Num,
}

impl CellError {
    /// Get the display string for this error
    pub fn as_str(&self) -> &'static str {
        match self {
            CellError::Div0 => "#DIV/0!",
            CellError::Value => "#VALUE!",
            CellError::Ref => "#REF!",
            CellError::Num => "#NUM!",
        }
    }

    /// Parse an error string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "#DIV/0!" => Some(CellError::Div0),
            "#VALUE!" => Some(CellError::Value),
            "#REF!" => Some(CellError::Ref),
            "#NUM!" => Some(CellError::Num),
            _ => None,
        }
    }
}

impl fmt::Display for CellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
