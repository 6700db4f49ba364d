//! Display-layer number formatting
//!
//! Layered on top of the engine's core rule (zero collapses, negatives in
//! parentheses): thousands grouping with comma separators, fractions
//! capped at 8 digits, and an exponential fallback once the magnitude
//! leaves the comfortably-displayable range.

use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tally_engine::format_display;

use crate::state::ERROR_DISPLAY;

const EXP_UPPER: Decimal = dec!(10000000000);
const EXP_LOWER: Decimal = dec!(0.000001);
const MAX_FRACTION_DIGITS: u32 = 8;

/// Format a buffer value for the primary display
pub fn format_number(value: &str) -> String {
    if value == ERROR_DISPLAY {
        return value.to_string();
    }
    // Preserve an in-progress trailing decimal point verbatim
    let (body, trailing_dot) = match value.strip_suffix('.') {
        Some(body) => (body, true),
        None => (value, false),
    };
    let Ok(parsed) = Decimal::from_str(body) else {
        return value.to_string();
    };
    if parsed.is_zero() {
        return if trailing_dot {
            "0.".to_string()
        } else {
            "0".to_string()
        };
    }

    let magnitude = parsed.abs();
    if magnitude > EXP_UPPER || magnitude < EXP_LOWER {
        return exponential(parsed);
    }

    let mut text = grouped(parsed.round_dp(MAX_FRACTION_DIGITS).normalize());
    if trailing_dot && !text.contains('.') {
        text.push('.');
    }
    // Engine core rule wraps the negative in parentheses
    format_display(&text)
}

fn exponential(value: Decimal) -> String {
    // Magnitudes out here exceed decimal display space; float precision
    // is sufficient for the 6 significant digits shown.
    let approx = value.to_f64().unwrap_or(0.0);
    format_display(&format!("{approx:.6e}"))
}

/// Insert comma separators into the integer part of an unsigned render
fn grouped(value: Decimal) -> String {
    let text = value.abs().to_string();
    let (integer, fraction) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };

    let mut out = String::with_capacity(text.len() + integer.len() / 3);
    let digits = integer.len();
    for (i, c) in integer.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    if value.is_sign_negative() {
        out.insert(0, '-');
    }
    out
}
