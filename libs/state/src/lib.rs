//! # Tally State - Calculator State Machine
//!
//! ## Purpose
//!
//! The interaction core of the Tally calculator: a single
//! [`CalculatorState`] value plus a pure, total transition function over
//! the closed [`Action`] alphabet. Digits, operators, equals, clears,
//! scientific functions and unit conversions all reduce to one atomic
//! state replacement; numeric work is delegated to `tally-engine`.
//!
//! ## Evaluation model
//!
//! Reduce-as-you-go accumulator: a running total, one pending operator,
//! strictly left-to-right folding with no precedence (`5 + 3 × 2 =` is
//! `16`). There is no expression tree and no parser.
//!
//! ## Failure containment
//!
//! Every engine failure (division by zero, domain errors) is converted at
//! the transition boundary into the uniform `"Error"` display state with
//! the chain cleared. Nothing escapes; all transitions are total.
//!
//! ## Reading state
//!
//! The [`Calculator`] façade owns the single state instance (one writer),
//! posts transient messages with a fixed 2 s lifetime, and renders
//! [`Snapshot`]s for the view layer.

pub mod action;
pub mod calculator;
pub mod display;
pub mod machine;
pub mod state;

pub use action::Action;
pub use calculator::{Calculator, Snapshot, MESSAGE_TTL};
pub use display::format_number;
pub use state::{CalculationRecord, CalculatorMode, CalculatorState, ERROR_DISPLAY};

// Engine types that appear in the action alphabet
pub use tally_engine::{MathConstant, Operator, ScientificFn, UnitConversion};
