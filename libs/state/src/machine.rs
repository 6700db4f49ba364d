//! The calculator transition function
//!
//! `(state, action) -> state'`, pure and total: every engine failure is
//! absorbed into the uniform error presentation at this boundary and the
//! machine never panics past it. Chained evaluation is strictly
//! left-to-right: pressing a second operator folds the pending pair
//! immediately, pocket-calculator style, with no precedence.

use tracing::{debug, warn};

use tally_engine::{
    apply_operation, percentage, toggle_sign, EngineError, MathConstant, Operator, ScientificFn,
    UnitConversion,
};

use crate::action::Action;
use crate::state::{CalculationRecord, CalculatorMode, CalculatorState, ERROR_DISPLAY};

impl CalculatorState {
    /// Apply one action, producing the next state. The previous state is
    /// left untouched; callers replace their copy wholesale.
    pub fn apply(&self, action: Action) -> CalculatorState {
        debug!(?action, buffer = %self.buffer, "transition");

        // In the error state only entry, clearing and view actions act;
        // operators and functions wait for a fresh buffer.
        if self.error && !recovers_from_error(&action) {
            return self.clone();
        }

        match action {
            Action::Digit(d) => self.digit(d),
            Action::Decimal => self.decimal_point(),
            Action::ToggleSign => self.toggle_sign(),
            Action::Percentage => self.percentage(),
            Action::Backspace => self.backspace(),
            Action::Operator(op) => self.operator(op),
            Action::Equals => self.equals(),
            Action::Clear => self.clear(),
            Action::ClearHistory => self.clear_history(),
            Action::Scientific(f) => self.scientific(f),
            Action::Constant(c) => self.constant(c),
            Action::Convert(c) => self.convert(c),
            Action::ChangeMode(m) => self.change_mode(m),
            Action::LoadLastCalculation => self.load_last_calculation(),
        }
    }

    fn digit(&self, d: u8) -> CalculatorState {
        if d > 9 {
            return self.clone();
        }
        let digit = char::from(b'0' + d);

        if self.should_reset_buffer {
            return CalculatorState {
                buffer: digit.to_string(),
                should_reset_buffer: false,
                error: false,
                ..self.clone()
            };
        }
        if self.buffer == "0" {
            // Redundant leading zero
            if d == 0 {
                return self.clone();
            }
            return CalculatorState {
                buffer: digit.to_string(),
                ..self.clone()
            };
        }
        let mut buffer = self.buffer.clone();
        buffer.push(digit);
        CalculatorState {
            buffer,
            ..self.clone()
        }
    }

    fn decimal_point(&self) -> CalculatorState {
        if self.should_reset_buffer {
            return CalculatorState {
                buffer: "0.".to_string(),
                should_reset_buffer: false,
                error: false,
                ..self.clone()
            };
        }
        if self.buffer.contains('.') {
            return self.clone();
        }
        let mut buffer = self.buffer.clone();
        buffer.push('.');
        CalculatorState {
            buffer,
            ..self.clone()
        }
    }

    fn toggle_sign(&self) -> CalculatorState {
        if self.buffer == "0" {
            return self.clone();
        }
        match toggle_sign(&self.buffer) {
            Ok(buffer) => CalculatorState {
                buffer,
                ..self.clone()
            },
            Err(err) => self.error_transition(&err),
        }
    }

    fn percentage(&self) -> CalculatorState {
        match percentage(&self.buffer) {
            Ok(buffer) => CalculatorState {
                buffer,
                ..self.clone()
            },
            Err(err) => self.error_transition(&err),
        }
    }

    fn backspace(&self) -> CalculatorState {
        // The error sentinel is not editable text
        if self.error {
            return CalculatorState {
                buffer: "0".to_string(),
                should_reset_buffer: false,
                error: false,
                ..self.clone()
            };
        }
        let buffer = if self.buffer.chars().count() <= 1 {
            "0".to_string()
        } else {
            let mut shortened = self.buffer.clone();
            shortened.pop();
            shortened
        };
        CalculatorState {
            buffer,
            ..self.clone()
        }
    }

    fn operator(&self, op: Operator) -> CalculatorState {
        // Nothing entered yet
        if self.buffer == "0" && self.running_total == "0" {
            return self.clone();
        }

        let running_total = match self.pending_operator {
            // Seed the chain with the first operand
            None => self.buffer.clone(),
            Some(_) if self.running_total == "0" => self.buffer.clone(),
            // A chain is active: fold the pending pair immediately,
            // left-to-right, before arming the new operator.
            Some(pending) => {
                match apply_operation(&self.running_total, &self.buffer, pending) {
                    Ok(total) => total,
                    Err(err) => return self.error_transition(&err),
                }
            }
        };

        CalculatorState {
            buffer: running_total.clone(),
            running_total,
            pending_operator: Some(op),
            should_reset_buffer: true,
            error: false,
            ..self.clone()
        }
    }

    fn equals(&self) -> CalculatorState {
        let Some(pending) = self.pending_operator else {
            return self.clone();
        };
        if self.running_total == "0" {
            return self.clone();
        }

        match apply_operation(&self.running_total, &self.buffer, pending) {
            Ok(result) => {
                let record = CalculationRecord::new(
                    self.running_total.clone(),
                    pending,
                    self.buffer.clone(),
                    result.clone(),
                );
                let mut history = self.history.clone();
                // Guard against a double-fired Equals appending twice
                if history.last() != Some(&record) {
                    history.push(record);
                }
                CalculatorState {
                    buffer: result,
                    running_total: "0".to_string(),
                    pending_operator: None,
                    history,
                    should_reset_buffer: true,
                    error: false,
                    ..self.clone()
                }
            }
            Err(err) => self.error_transition(&err),
        }
    }

    fn clear(&self) -> CalculatorState {
        CalculatorState {
            history: self.history.clone(),
            mode: self.mode,
            ..CalculatorState::default()
        }
    }

    fn clear_history(&self) -> CalculatorState {
        CalculatorState {
            history: Vec::new(),
            ..self.clone()
        }
    }

    fn scientific(&self, f: ScientificFn) -> CalculatorState {
        match f.apply(&self.buffer) {
            Ok(buffer) => CalculatorState {
                buffer,
                should_reset_buffer: true,
                error: false,
                ..self.clone()
            },
            Err(err) => self.error_transition(&err),
        }
    }

    fn constant(&self, c: MathConstant) -> CalculatorState {
        CalculatorState {
            buffer: c.value(),
            should_reset_buffer: true,
            error: false,
            ..self.clone()
        }
    }

    fn convert(&self, c: UnitConversion) -> CalculatorState {
        match c.apply(&self.buffer) {
            Ok(converted) => CalculatorState {
                buffer: converted.value,
                should_reset_buffer: true,
                error: false,
                ..self.clone()
            },
            Err(err) => self.error_transition(&err),
        }
    }

    fn change_mode(&self, mode: CalculatorMode) -> CalculatorState {
        CalculatorState {
            mode,
            ..self.clone()
        }
    }

    fn load_last_calculation(&self) -> CalculatorState {
        let Some(last) = self.history.last() else {
            return self.clone();
        };
        CalculatorState {
            buffer: last.result().to_string(),
            should_reset_buffer: false,
            error: false,
            ..self.clone()
        }
    }

    /// Uniform error presentation: the sentinel buffer with the operator
    /// chain cleared, recoverable by Clear or fresh digit entry.
    fn error_transition(&self, err: &EngineError) -> CalculatorState {
        warn!(%err, buffer = %self.buffer, "operation failed");
        CalculatorState {
            buffer: ERROR_DISPLAY.to_string(),
            running_total: "0".to_string(),
            pending_operator: None,
            should_reset_buffer: true,
            error: true,
            ..self.clone()
        }
    }
}

/// Actions that act while the error sentinel is displayed
fn recovers_from_error(action: &Action) -> bool {
    matches!(
        action,
        Action::Digit(_)
            | Action::Decimal
            | Action::Backspace
            | Action::Clear
            | Action::ClearHistory
            | Action::ChangeMode(_)
            | Action::Constant(_)
            | Action::LoadLastCalculation
    )
}
