//! Engine-level errors for calculator arithmetic
//!
//! Every fallible engine operation returns one of these variants so the
//! state machine can react to the failure class. `DivisionByZero` must stay
//! distinguishable from the domain failures: it is the only error the
//! keypad can actually produce in normal use.

use thiserror::Error;

/// Arithmetic failures surfaced by the engine
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Divisor was exactly zero
    #[error("division by zero")]
    DivisionByZero,

    /// Input lies outside the function's domain (sqrt of a negative,
    /// log of a non-positive value, non-finite float intermediate)
    #[error("domain error: {function}({input}) is undefined")]
    Domain { function: &'static str, input: String },

    /// Operator symbol outside the closed {+, −, ×, ÷} set. Unreachable
    /// through the typed API; kept for the string-parsing boundary.
    #[error("invalid operator: {symbol:?}")]
    InvalidOperator { symbol: String },

    /// Numeric string that does not parse as a decimal. The state machine
    /// keeps buffers syntactically valid, so this is a caller bug.
    #[error("invalid numeric input: {input:?}")]
    InvalidNumber { input: String },
}

pub type Result<T> = std::result::Result<T, EngineError>;
