//! Scientific functions and math constants
//!
//! Trigonometry operates on degrees, matching the keypad: input is
//! converted to radians (`v · π / 180`) and evaluated with native float
//! math, then brought back into decimal form. Square root and squaring
//! stay fully in decimal arithmetic. Non-finite float intermediates are
//! reported as domain errors rather than leaking `NaN` text.

use std::fmt;

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, MathematicalOps};
use serde::{Deserialize, Serialize};

use crate::arithmetic::{parse, render};
use crate::error::{EngineError, Result};

/// Unary scientific functions offered by the scientific keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScientificFn {
    Sin,
    Cos,
    Tan,
    Log,
    Ln,
    Sqrt,
    Square,
}

impl ScientificFn {
    pub fn symbol(&self) -> &'static str {
        match self {
            ScientificFn::Sin => "sin",
            ScientificFn::Cos => "cos",
            ScientificFn::Tan => "tan",
            ScientificFn::Log => "log",
            ScientificFn::Ln => "ln",
            ScientificFn::Sqrt => "\u{221A}",
            ScientificFn::Square => "x\u{00B2}",
        }
    }

    /// Apply this function to a numeric string
    pub fn apply(&self, value: &str) -> Result<String> {
        match self {
            ScientificFn::Sin => sin(value),
            ScientificFn::Cos => cos(value),
            ScientificFn::Tan => tan(value),
            ScientificFn::Log => log(value),
            ScientificFn::Ln => ln(value),
            ScientificFn::Sqrt => sqrt(value),
            ScientificFn::Square => square(value),
        }
    }
}

impl fmt::Display for ScientificFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Math constants available from the scientific keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MathConstant {
    Pi,
    E,
}

impl MathConstant {
    pub fn symbol(&self) -> &'static str {
        match self {
            MathConstant::Pi => "\u{03C0}",
            MathConstant::E => "e",
        }
    }

    /// Constant value at full decimal precision
    pub fn value(&self) -> String {
        match self {
            MathConstant::Pi => render(Decimal::PI),
            MathConstant::E => render(Decimal::E),
        }
    }
}

impl fmt::Display for MathConstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Evaluate a native float function of the value and re-enter decimal,
/// rejecting non-finite results.
fn via_f64(function: &'static str, value: &str, f: impl Fn(f64) -> f64) -> Result<String> {
    let input = parse(value)?;
    let x = input.to_f64().ok_or_else(|| EngineError::Domain {
        function,
        input: value.to_string(),
    })?;
    let y = f(x);
    if !y.is_finite() {
        return Err(EngineError::Domain {
            function,
            input: value.to_string(),
        });
    }
    Decimal::from_f64(y)
        .map(render)
        .ok_or_else(|| EngineError::Domain {
            function,
            input: value.to_string(),
        })
}

fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

/// Sine of an angle in degrees
pub fn sin(value: &str) -> Result<String> {
    via_f64("sin", value, |d| degrees_to_radians(d).sin())
}

/// Cosine of an angle in degrees
pub fn cos(value: &str) -> Result<String> {
    via_f64("cos", value, |d| degrees_to_radians(d).cos())
}

/// Tangent of an angle in degrees
pub fn tan(value: &str) -> Result<String> {
    via_f64("tan", value, |d| degrees_to_radians(d).tan())
}

/// Base-10 logarithm; positive input only
pub fn log(value: &str) -> Result<String> {
    let input = parse(value)?;
    if input <= Decimal::ZERO {
        return Err(EngineError::Domain {
            function: "log",
            input: value.to_string(),
        });
    }
    via_f64("log", value, f64::log10)
}

/// Natural logarithm; positive input only
pub fn ln(value: &str) -> Result<String> {
    let input = parse(value)?;
    if input <= Decimal::ZERO {
        return Err(EngineError::Domain {
            function: "ln",
            input: value.to_string(),
        });
    }
    via_f64("ln", value, f64::ln)
}

/// Decimal-exact square root; negative input is a domain error
pub fn sqrt(value: &str) -> Result<String> {
    let input = parse(value)?;
    input
        .sqrt()
        .map(render)
        .ok_or_else(|| EngineError::Domain {
            function: "sqrt",
            input: value.to_string(),
        })
}

/// Decimal-exact square
pub fn square(value: &str) -> Result<String> {
    let input = parse(value)?;
    input
        .checked_mul(input)
        .map(render)
        .ok_or_else(|| EngineError::Domain {
            function: "x\u{00B2}",
            input: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close_to(result: &str, expected: f64) {
        let got: f64 = result.parse().unwrap();
        assert!(
            (got - expected).abs() < 1e-9,
            "expected ~{expected}, got {result}"
        );
    }

    #[test]
    fn test_trig_operates_on_degrees() {
        close_to(&sin("90").unwrap(), 1.0);
        close_to(&sin("0").unwrap(), 0.0);
        close_to(&cos("0").unwrap(), 1.0);
        close_to(&tan("45").unwrap(), 1.0);
    }

    #[test]
    fn test_log10() {
        assert_eq!(log("100").unwrap(), "2");
        close_to(&log("1000").unwrap(), 3.0);
    }

    #[test]
    fn test_natural_log() {
        close_to(&ln(&MathConstant::E.value()).unwrap(), 1.0);
        assert_eq!(ln("1").unwrap(), "0");
    }

    #[test]
    fn test_log_domain_errors() {
        assert!(matches!(
            log("0").unwrap_err(),
            EngineError::Domain { function: "log", .. }
        ));
        assert!(matches!(
            ln("-1").unwrap_err(),
            EngineError::Domain { function: "ln", .. }
        ));
    }

    #[test]
    fn test_sqrt_is_decimal_exact() {
        assert_eq!(sqrt("16").unwrap(), "4");
        assert_eq!(sqrt("0").unwrap(), "0");
        assert!(sqrt("2").unwrap().starts_with("1.41421356"));
    }

    #[test]
    fn test_sqrt_of_negative_is_domain_error() {
        assert!(matches!(
            sqrt("-4").unwrap_err(),
            EngineError::Domain { function: "sqrt", .. }
        ));
    }

    #[test]
    fn test_square() {
        assert_eq!(square("5").unwrap(), "25");
        assert_eq!(square("0.5").unwrap(), "0.25");
        assert_eq!(square("-3").unwrap(), "9");
    }

    #[test]
    fn test_constants() {
        assert!(MathConstant::Pi.value().starts_with("3.14159265358979"));
        assert!(MathConstant::E.value().starts_with("2.71828182845904"));
    }

    #[test]
    fn test_apply_dispatch() {
        assert_eq!(ScientificFn::Square.apply("5").unwrap(), "25");
        assert_eq!(ScientificFn::Sqrt.apply("16").unwrap(), "4");
    }
}
