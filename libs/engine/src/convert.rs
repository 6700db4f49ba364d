//! Unit conversions with fixed linear scalings
//!
//! Each conversion produces both the converted value and a short
//! human-readable message (`"10km = 6.21371mi"`) for the transient
//! display slot.

use std::fmt;

use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::arithmetic::{parse, render};
use crate::error::Result;

/// The conversions offered by the conversion keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitConversion {
    CelsiusToFahrenheit,
    KmToMiles,
    KgToPounds,
    MetersToFeet,
}

/// Result of a unit conversion: the new buffer value plus the message
/// shown transiently above the display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Converted {
    pub value: String,
    pub message: String,
}

impl UnitConversion {
    pub fn symbol(&self) -> &'static str {
        match self {
            UnitConversion::CelsiusToFahrenheit => "\u{00B0}C\u{2192}\u{00B0}F",
            UnitConversion::KmToMiles => "km\u{2192}mi",
            UnitConversion::KgToPounds => "kg\u{2192}lb",
            UnitConversion::MetersToFeet => "m\u{2192}ft",
        }
    }

    fn units(&self) -> (&'static str, &'static str) {
        match self {
            UnitConversion::CelsiusToFahrenheit => ("\u{00B0}C", "\u{00B0}F"),
            UnitConversion::KmToMiles => ("km", "mi"),
            UnitConversion::KgToPounds => ("kg", "lb"),
            UnitConversion::MetersToFeet => ("m", "ft"),
        }
    }

    /// Convert a numeric string, yielding the value and display message
    pub fn apply(&self, value: &str) -> Result<Converted> {
        let input = parse(value)?;
        let output = match self {
            UnitConversion::CelsiusToFahrenheit => input * dec!(9) / dec!(5) + dec!(32),
            UnitConversion::KmToMiles => input * dec!(0.621371),
            UnitConversion::KgToPounds => input * dec!(2.20462),
            UnitConversion::MetersToFeet => input * dec!(3.28084),
        };
        let (from, to) = self.units();
        let input_text = render(input);
        let output_text = render(output);
        let message = format!("{input_text}{from} = {output_text}{to}");
        Ok(Converted {
            value: output_text,
            message,
        })
    }
}

impl fmt::Display for UnitConversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
