//! Calculator state and history records
//!
//! One `CalculatorState` value is the whole machine: there is no separate
//! named-state enum, the fields are the state. Transitions replace the
//! value wholesale; nothing mutates a live state in place.

use std::fmt;

use serde::{Deserialize, Serialize};
use tally_engine::Operator;

/// Sentinel shown in the buffer after a failed operation
pub const ERROR_DISPLAY: &str = "Error";

/// View mode of the keypad; has no effect on arithmetic semantics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalculatorMode {
    #[default]
    Basic,
    Scientific,
    Notes,
}

/// One settled calculation, kept immutable in the history log.
///
/// Renders as `"<left> <op> <right> = <result>"`; the result token is
/// exposed directly so reloading it never has to re-parse the rendered
/// string (which would go wrong on negative results).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationRecord {
    left: String,
    operator: Operator,
    right: String,
    result: String,
}

impl CalculationRecord {
    pub fn new(left: String, operator: Operator, right: String, result: String) -> Self {
        Self {
            left,
            operator,
            right,
            result,
        }
    }

    /// The result token of this calculation
    pub fn result(&self) -> &str {
        &self.result
    }
}

impl fmt::Display for CalculationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} = {}",
            self.left, self.operator, self.right, self.result
        )
    }
}

/// Complete interaction state of the calculator
///
/// Invariants:
/// - `buffer` is either [`ERROR_DISPLAY`] or a syntactically valid
///   (possibly partial, e.g. trailing `.`) numeric string.
/// - `history` entries are never mutated or removed except by an explicit
///   clear-history action.
/// - `pending_operator` is `None` exactly when `running_total` has not
///   been seeded (`"0"`); error transitions clear both together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorState {
    /// Value currently being typed / displayed
    pub buffer: String,
    /// Accumulated left operand of the active operator chain
    pub running_total: String,
    /// Operator awaiting its right-hand operand
    pub pending_operator: Option<Operator>,
    /// Append-only log of settled calculations
    pub history: Vec<CalculationRecord>,
    /// Next digit entry replaces the buffer instead of appending
    pub should_reset_buffer: bool,
    /// Current keypad view
    pub mode: CalculatorMode,
    /// Last operation failed; buffer holds the error sentinel
    pub error: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            buffer: "0".to_string(),
            running_total: "0".to_string(),
            pending_operator: None,
            history: Vec::new(),
            should_reset_buffer: false,
            mode: CalculatorMode::Basic,
            error: false,
        }
    }
}

impl CalculatorState {
    pub fn new() -> Self {
        Self::default()
    }
}
