//! Basic arithmetic on numeric strings with exact decimal math
//!
//! All values move through [`Decimal`] rather than binary floats so that
//! typical calculator inputs round-trip exactly: `0.1 + 0.2` is `"0.3"`,
//! never `"0.30000000000000004"`. Results are normalized (no trailing
//! zeros) before being rendered back to text.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// The four keypad operators. Display symbols match the keypad legends
/// (U+2212 minus, U+00D7 times, U+00F7 divide); `FromStr` additionally
/// accepts the ASCII forms produced by a physical keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Keypad symbol for this operator
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "\u{2212}",
            Operator::Multiply => "\u{00D7}",
            Operator::Divide => "\u{00F7}",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "+" => Ok(Operator::Add),
            "-" | "\u{2212}" => Ok(Operator::Subtract),
            "*" | "\u{00D7}" => Ok(Operator::Multiply),
            "/" | "\u{00F7}" => Ok(Operator::Divide),
            other => Err(EngineError::InvalidOperator {
                symbol: other.to_string(),
            }),
        }
    }
}

/// Parse a numeric string, tolerating a trailing decimal point from an
/// in-progress entry such as `"5."`.
pub(crate) fn parse(value: &str) -> Result<Decimal> {
    let trimmed = value.strip_suffix('.').unwrap_or(value);
    Decimal::from_str(trimmed).map_err(|_| EngineError::InvalidNumber {
        input: value.to_string(),
    })
}

/// Render a decimal back to its canonical text form: normalized scale,
/// no trailing zeros, negative zero collapsed to `"0"`.
pub(crate) fn render(value: Decimal) -> String {
    if value.is_zero() {
        "0".to_string()
    } else {
        value.normalize().to_string()
    }
}

pub fn add(a: &str, b: &str) -> Result<String> {
    Ok(render(parse(a)? + parse(b)?))
}

pub fn subtract(a: &str, b: &str) -> Result<String> {
    Ok(render(parse(a)? - parse(b)?))
}

pub fn multiply(a: &str, b: &str) -> Result<String> {
    Ok(render(parse(a)? * parse(b)?))
}

/// Exact decimal division. Fails with [`EngineError::DivisionByZero`]
/// when the divisor is zero; non-terminating quotients are carried to
/// `Decimal`'s full 28-digit precision.
pub fn divide(a: &str, b: &str) -> Result<String> {
    let divisor = parse(b)?;
    if divisor.is_zero() {
        return Err(EngineError::DivisionByZero);
    }
    Ok(render(parse(a)? / divisor))
}

/// Dispatch one binary operation over the closed operator set
pub fn apply_operation(a: &str, b: &str, operator: Operator) -> Result<String> {
    tracing::trace!(%a, %b, %operator, "apply_operation");
    match operator {
        Operator::Add => add(a, b),
        Operator::Subtract => subtract(a, b),
        Operator::Multiply => multiply(a, b),
        Operator::Divide => divide(a, b),
    }
}

/// `value / 100`, exact
pub fn percentage(value: &str) -> Result<String> {
    Ok(render(parse(value)? / dec!(100)))
}

/// Arithmetic negation; `"0"` stays `"0"`
pub fn toggle_sign(value: &str) -> Result<String> {
    Ok(render(-parse(value)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_addition_is_decimal_exact() {
        assert_eq!(add("5", "3").unwrap(), "8");
        assert_eq!(add("0.1", "0.2").unwrap(), "0.3");
    }

    #[test]
    fn test_subtraction() {
        assert_eq!(subtract("10", "3").unwrap(), "7");
        assert_eq!(subtract("0.3", "0.1").unwrap(), "0.2");
        assert_eq!(subtract("1", "0.9").unwrap(), "0.1");
    }

    #[test]
    fn test_multiplication() {
        assert_eq!(multiply("5", "3").unwrap(), "15");
        assert_eq!(multiply("0.1", "0.2").unwrap(), "0.02");
    }

    #[test]
    fn test_division() {
        assert_eq!(divide("10", "2").unwrap(), "5");

        // Non-terminating quotient carries full decimal precision
        let third = divide("1", "3").unwrap();
        assert!(third.starts_with("0.3333333333"));
    }

    #[test]
    fn test_division_by_zero_is_typed() {
        assert_eq!(divide("10", "0").unwrap_err(), EngineError::DivisionByZero);
        assert_eq!(divide("0", "0").unwrap_err(), EngineError::DivisionByZero);
        assert_eq!(
            divide("10", "0.0").unwrap_err(),
            EngineError::DivisionByZero
        );
    }

    #[test]
    fn test_apply_operation_dispatch() {
        assert_eq!(apply_operation("5", "3", Operator::Add).unwrap(), "8");
        assert_eq!(apply_operation("10", "3", Operator::Subtract).unwrap(), "7");
        assert_eq!(apply_operation("5", "3", Operator::Multiply).unwrap(), "15");
        assert_eq!(apply_operation("10", "2", Operator::Divide).unwrap(), "5");
    }

    #[test]
    fn test_percentage() {
        assert_eq!(percentage("50").unwrap(), "0.5");
        assert_eq!(percentage("100").unwrap(), "1");
        assert_eq!(percentage("0").unwrap(), "0");
    }

    #[test]
    fn test_toggle_sign() {
        assert_eq!(toggle_sign("5").unwrap(), "-5");
        assert_eq!(toggle_sign("-5").unwrap(), "5");
        assert_eq!(toggle_sign("0").unwrap(), "0");
    }

    #[test]
    fn test_trailing_decimal_point_parses() {
        assert_eq!(add("5.", "3").unwrap(), "8");
        assert_eq!(toggle_sign("0.").unwrap(), "0");
    }

    #[test]
    fn test_results_are_normalized() {
        // 2.5 + 2.5 is 5, not 5.0
        assert_eq!(add("2.5", "2.5").unwrap(), "5");
        assert_eq!(subtract("1.5", "1.5").unwrap(), "0");
    }

    #[test]
    fn test_operator_symbols_round_trip() {
        for op in [
            Operator::Add,
            Operator::Subtract,
            Operator::Multiply,
            Operator::Divide,
        ] {
            assert_eq!(op.symbol().parse::<Operator>().unwrap(), op);
        }
        // ASCII keyboard aliases
        assert_eq!("*".parse::<Operator>().unwrap(), Operator::Multiply);
        assert_eq!("/".parse::<Operator>().unwrap(), Operator::Divide);
        assert_eq!("-".parse::<Operator>().unwrap(), Operator::Subtract);
        assert!("^".parse::<Operator>().is_err());
    }
}
