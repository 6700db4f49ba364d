//! # Tally Engine - Decimal-Exact Calculator Arithmetic
//!
//! ## Purpose
//!
//! Stateless numeric transforms for the Tally calculator. Every operation
//! accepts and returns numeric *strings* and computes through [`Decimal`]
//! arithmetic, so typical calculator inputs never pick up binary-float
//! rounding artifacts: `add("0.1", "0.2")` is exactly `"0.3"`.
//!
//! ## Integration Points
//!
//! - **Callers**: the `tally-state` transition function is the only
//!   intended consumer; it converts every failure here into the uniform
//!   `"Error"` display state.
//! - **Failure classes**: [`EngineError::DivisionByZero`] is kept distinct
//!   from domain errors because it is the one failure a user can reach
//!   from the basic keypad.
//!
//! ## Precision
//!
//! Addition, subtraction, multiplication, division, percentage, square and
//! square root are exact decimal operations. Trigonometry (degrees) and
//! logarithms route through native float math, as pocket calculators do,
//! and re-enter decimal form on the way out.

pub mod arithmetic;
pub mod convert;
pub mod error;
pub mod format;
pub mod scientific;

pub use arithmetic::{
    add, apply_operation, divide, multiply, percentage, subtract, toggle_sign, Operator,
};
pub use convert::{Converted, UnitConversion};
pub use error::{EngineError, Result};
pub use format::format_display;
pub use scientific::{cos, ln, log, sin, sqrt, square, tan, MathConstant, ScientificFn};

/// Decimal type used throughout the engine
pub use rust_decimal::Decimal;
