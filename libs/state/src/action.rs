//! The closed action alphabet accepted by the state machine

use serde::{Deserialize, Serialize};
use tally_engine::{MathConstant, Operator, ScientificFn, UnitConversion};

use crate::state::CalculatorMode;

/// Every user interaction the calculator understands. The transition
/// function is total over this alphabet; no action can fault the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// A digit key, 0 through 9
    Digit(u8),
    /// The decimal point key
    Decimal,
    /// `+/-`
    ToggleSign,
    /// `%`
    Percentage,
    /// Remove the last typed character
    Backspace,
    /// One of `+ − × ÷`
    Operator(Operator),
    /// `=`
    Equals,
    /// `C`: reset everything except history and mode
    Clear,
    /// Empty the history log
    ClearHistory,
    /// A scientific-keypad function applied to the buffer
    Scientific(ScientificFn),
    /// Load a math constant into the buffer
    Constant(MathConstant),
    /// A unit conversion applied to the buffer
    Convert(UnitConversion),
    /// Switch the keypad view
    ChangeMode(CalculatorMode),
    /// Copy the last history result back into the buffer for editing
    LoadLastCalculation,
}
