//! The calculator façade: one state instance, one writer
//!
//! Wraps the pure transition function with the two conveniences the view
//! layer needs: a transient-message slot (conversion results and similar
//! notices, auto-expiring after a fixed delay, last-write-wins) and a
//! rendered snapshot of the full state.

use std::time::{Duration, Instant};

use serde::Serialize;

use crate::action::Action;
use crate::display::format_number;
use crate::state::{CalculatorMode, CalculatorState};

/// How long a transient message stays on screen
pub const MESSAGE_TTL: Duration = Duration::from_secs(2);

#[derive(Debug, Clone)]
struct TransientMessage {
    text: String,
    expires_at: Instant,
}

/// Rendered read-model of the calculator for the view layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// Raw buffer text (always a valid numeric string or the sentinel)
    pub buffer: String,
    /// Buffer formatted for the primary display
    pub display: String,
    /// Rendered history lines, oldest first
    pub history: Vec<String>,
    /// Symbol of the armed operator, if any
    pub pending_operator: Option<String>,
    pub mode: CalculatorMode,
    pub error: bool,
    /// Unexpired transient message, if any
    pub message: Option<String>,
}

/// Owns the single calculator state instance. All writes go through
/// [`Calculator::dispatch`]; each dispatch is one atomic transition.
#[derive(Debug, Clone)]
pub struct Calculator {
    state: CalculatorState,
    message: Option<TransientMessage>,
    message_ttl: Duration,
}

impl Calculator {
    pub fn new() -> Self {
        Self {
            state: CalculatorState::new(),
            message: None,
            message_ttl: MESSAGE_TTL,
        }
    }

    /// Start in a specific keypad mode
    pub fn with_mode(mode: CalculatorMode) -> Self {
        let mut calc = Self::new();
        calc.state = calc.state.apply(Action::ChangeMode(mode));
        calc
    }

    #[cfg(test)]
    fn with_message_ttl(ttl: Duration) -> Self {
        let mut calc = Self::new();
        calc.message_ttl = ttl;
        calc
    }

    /// Apply one action atomically, posting any side message it carries
    pub fn dispatch(&mut self, action: Action) {
        if let Some(text) = self.side_message(&action) {
            self.post_message(text);
        }
        self.state = self.state.apply(action);
    }

    /// Current state, for readers that want the raw fields
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Unexpired transient message, if one is pending
    pub fn transient_message(&self) -> Option<&str> {
        self.message
            .as_ref()
            .filter(|m| Instant::now() < m.expires_at)
            .map(|m| m.text.as_str())
    }

    /// Full rendered snapshot for the view layer
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            buffer: self.state.buffer.clone(),
            display: format_number(&self.state.buffer),
            history: self.state.history.iter().map(|r| r.to_string()).collect(),
            pending_operator: self
                .state
                .pending_operator
                .map(|op| op.symbol().to_string()),
            mode: self.state.mode,
            error: self.state.error,
            message: self.transient_message().map(str::to_string),
        }
    }

    /// Informational message attached to this action, computed against
    /// the pre-transition state. Kept out of the transition function so
    /// the reducer stays pure.
    fn side_message(&self, action: &Action) -> Option<String> {
        match action {
            Action::Convert(conversion) if !self.state.error => conversion
                .apply(&self.state.buffer)
                .ok()
                .map(|converted| converted.message),
            Action::ClearHistory if !self.state.history.is_empty() => {
                Some("History cleared".to_string())
            }
            Action::LoadLastCalculation if !self.state.history.is_empty() => {
                Some("Last result loaded for editing".to_string())
            }
            _ => None,
        }
    }

    // Last-write-wins: a newer message simply replaces a pending one
    fn post_message(&mut self, text: String) {
        self.message = Some(TransientMessage {
            text,
            expires_at: Instant::now() + self.message_ttl,
        });
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}
